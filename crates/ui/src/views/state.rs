use services::RenderError;

/// A page that cannot be shown because the loaded bank does not support it.
///
/// These are operator-facing: the text names the bad data, not a retry hint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    Configuration(String),
}

impl ViewError {
    #[must_use]
    pub fn title() -> &'static str {
        "configuration error"
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ViewError::Configuration(message) => message,
        }
    }
}

impl From<RenderError> for ViewError {
    fn from(err: RenderError) -> Self {
        ViewError::Configuration(err.to_string())
    }
}
