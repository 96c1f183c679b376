pub mod api_handler;
pub mod generation_client;
pub mod health_handler;
pub mod submitter;
pub mod ui_handler;
