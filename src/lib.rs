pub mod app;
pub mod chat_message;
pub mod chat_view;
pub mod config;
pub mod conversation;
pub mod dashboard_view;
pub mod data;
pub mod dispatcher;
pub mod errors;
pub mod key_handlers;
pub mod log_view;
pub mod logging;
pub mod metrics_view;
pub mod nutrition_view;
pub mod splash_screen;
pub mod status_indicator;
pub mod theme;
pub mod training_view;
pub mod ui;

pub use app::{App, AppState};
