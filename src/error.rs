use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Anything that went wrong while reading the inbound body, calling the destination
    /// or reading its reply. Displays the bare message; it ends up verbatim in the envelope.
    #[error("{0}")]
    Forwarding(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Forwarding(error_chain(&e))
    }
}

/// Joins an error and its sources with `": "`, skipping repeats.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current = Some(err);
    while let Some(e) = current {
        let text = e.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        current = e.source();
    }
    parts.join(": ")
}

pub type Result<T> = std::result::Result<T, AppError>;
