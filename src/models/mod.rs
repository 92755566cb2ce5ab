pub mod application;
pub mod interview;
pub mod job;
pub mod job_response;
pub mod message;
pub mod user;
