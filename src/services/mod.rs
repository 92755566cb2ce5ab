pub mod application_service;
pub mod conversation;
pub mod interview_service;
pub mod job_response_service;
pub mod job_service;
pub mod message_service;
pub mod user_service;
