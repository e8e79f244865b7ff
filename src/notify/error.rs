use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("No async runtime available to schedule dismissal: {message}")]
    NoRuntime { message: String },
}
