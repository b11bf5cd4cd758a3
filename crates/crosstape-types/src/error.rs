//! Error types for the Crosstape execution cores.
//!
//! All errors use the `CT_ERR_` prefix convention for easy grepping in
//! logs. Error codes are grouped by subsystem:
//! - 1xx: Order errors
//! - 2xx: Feed errors
//! - 3xx: Export errors
//! - 9xx: General / internal errors
//!
//! Malformed feed rows and unresolvable replay timestamps are deliberately
//! *not* errors — those items are skipped and the batch continues.

use thiserror::Error;

/// Central error enum for all Crosstape operations.
#[derive(Debug, Error)]
pub enum CrosstapeError {
    // =================================================================
    // Order Errors (1xx)
    // =================================================================
    /// A wire string did not name a known enum variant.
    #[error("CT_ERR_100: unknown {field} token: {value:?}")]
    UnknownToken {
        field: &'static str,
        value: String,
    },

    // =================================================================
    // Feed Errors (2xx)
    // =================================================================
    /// A required input feed could not be opened. Fatal to the run.
    #[error("CT_ERR_200: cannot open feed {path}: {reason}")]
    FeedOpen { path: String, reason: String },

    // =================================================================
    // Export Errors (3xx)
    // =================================================================
    /// Writing an output file failed. Fatal to that call only —
    /// in-memory state is unaffected.
    #[error("CT_ERR_300: export to {path} failed: {reason}")]
    Export { path: String, reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// I/O error (disk).
    #[error("CT_ERR_900: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, CrosstapeError>;

impl From<std::io::Error> for CrosstapeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = CrosstapeError::FeedOpen {
            path: "quotes.csv".into(),
            reason: "no such file".into(),
        };
        let msg = format!("{err}");
        assert!(msg.starts_with("CT_ERR_200"), "got: {msg}");
        assert!(msg.contains("quotes.csv"));
    }

    #[test]
    fn all_errors_have_ct_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(CrosstapeError::UnknownToken {
                field: "side",
                value: "hold".into(),
            }),
            Box::new(CrosstapeError::Export {
                path: "fills.csv".into(),
                reason: "disk full".into(),
            }),
            Box::new(CrosstapeError::Io("broken pipe".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(msg.starts_with("CT_ERR_"), "missing prefix: {msg}");
        }
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CrosstapeError = io.into();
        assert!(matches!(err, CrosstapeError::Io(_)));
    }
}
