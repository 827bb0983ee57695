use std::fmt;

use gallery_state::LoadError;

/// Central error types for the Photowall app
#[derive(Debug)]
pub enum AppError {
    /// Gallery data could not be fetched or decoded
    Load(LoadError),
    /// General error
    #[allow(dead_code)]
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Load(e) => write!(f, "Load error: {}", e),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        AppError::Load(e)
    }
}

/// User-friendly error messages for UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Load(_) => "Could not load the gallery. Please try again.".to_string(),
            AppError::Other(msg) => msg.clone(),
        }
    }
}
