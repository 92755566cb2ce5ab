pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    application_service::ApplicationService, interview_service::InterviewService,
    job_response_service::JobResponseService, job_service::JobService,
    message_service::MessageService, user_service::UserService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub job_service: JobService,
    pub application_service: ApplicationService,
    pub message_service: MessageService,
    pub interview_service: InterviewService,
    pub job_response_service: JobResponseService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            user_service: UserService::new(pool.clone()),
            job_service: JobService::new(pool.clone()),
            application_service: ApplicationService::new(pool.clone()),
            message_service: MessageService::new(pool.clone()),
            interview_service: InterviewService::new(pool.clone()),
            job_response_service: JobResponseService::new(pool),
        }
    }
}
