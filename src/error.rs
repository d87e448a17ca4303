use thiserror::Error;

pub type VizResult<T> = Result<T, VizError>;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("analysis failed: {0}")]
    Analysis(String),

    #[error("resource `{path}` unavailable: {reason}")]
    Resource { path: String, reason: String },

    #[error("render failed: {0}")]
    Render(String),

    #[error("invalid state: {0}")]
    State(String),
}

impl VizError {
    pub fn resource(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Resource {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
