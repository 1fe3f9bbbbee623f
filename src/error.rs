//! Crate-level error types.

use std::fmt;

use crate::editor::ValidationError;
use crate::viewer::ViewerError;

/// Errors produced by the panotour crate.
#[derive(Debug)]
pub enum TourError {
    /// Transport failure: backend unreachable, connection reset, timeout.
    Http(String),
    /// The backend answered with a non-success status.
    Status {
        /// HTTP status code.
        code: u16,
        /// `detail` field of the error body, when the backend sent one.
        detail: Option<String>,
    },
    /// A response body could not be decoded into the expected record.
    Decode(String),
    /// No record exists for the requested slug or id.
    NotFound(String),
    /// A write endpoint was called without the admin page's CSRF token.
    MissingCsrfToken,
    /// Hotspot form rejected client-side; nothing was sent.
    Validation(ValidationError),
    /// The panorama viewer could not display a scene.
    Viewer(ViewerError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl TourError {
    /// Short message suitable for showing to a tour visitor.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(_) => {
                "Unable to reach the tour server. Check your connection."
                    .to_owned()
            }
            Self::Status { detail: Some(detail), .. } => {
                format!("Failed to load scene: {detail}")
            }
            Self::Status { code, detail: None } => {
                format!("Failed to load scene (HTTP {code}).")
            }
            Self::NotFound(what) => format!("Scene not found: {what}"),
            Self::Decode(_) => {
                "The tour server sent data that could not be read.".to_owned()
            }
            Self::Viewer(_) => {
                "The panorama could not be displayed.".to_owned()
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(msg) => write!(f, "HTTP error: {msg}"),
            Self::Status { code, detail } => match detail {
                Some(detail) => write!(f, "HTTP status {code}: {detail}"),
                None => write!(f, "HTTP status {code}"),
            },
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
            Self::NotFound(what) => write!(f, "not found: {what}"),
            Self::MissingCsrfToken => {
                write!(f, "CSRF token required for hotspot changes")
            }
            Self::Validation(e) => write!(f, "validation error: {e}"),
            Self::Viewer(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for TourError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Validation(e) => Some(e),
            Self::Viewer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TourError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TourError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<ValidationError> for TourError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ViewerError> for TourError {
    fn from(e: ViewerError) -> Self {
        Self::Viewer(e)
    }
}
