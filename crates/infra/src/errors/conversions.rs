//! Conversions from external infrastructure errors into engine errors.

use std::io::Error as IoError;

use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use shiftslot_domain::{ShiftError, StoreError};

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the engine error.
#[derive(Debug)]
pub struct InfraError(pub ShiftError);

impl From<InfraError> for ShiftError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ShiftError> for InfraError {
    fn from(value: ShiftError) -> Self {
        InfraError(value)
    }
}

impl InfraError {
    /// Narrow to what a calendar store may report.
    pub fn into_store_error(self) -> StoreError {
        match self.0 {
            ShiftError::NotFound => StoreError::NotFound("calendar record not found".into()),
            ShiftError::StoreUnavailable(message) => StoreError::Unavailable(message),
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

impl From<InfraError> for StoreError {
    fn from(value: InfraError) -> Self {
        value.into_store_error()
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoShiftError {
    fn into_shift(self) -> ShiftError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ShiftError */
/* -------------------------------------------------------------------------- */

impl IntoShiftError for HttpError {
    fn into_shift(self) -> ShiftError {
        if self.is_timeout() {
            return ShiftError::StoreUnavailable("HTTP request timed out".into());
        }

        if self.is_connect() {
            return ShiftError::StoreUnavailable("HTTP connection failure".into());
        }

        if self.is_decode() {
            return ShiftError::StoreUnavailable(format!("malformed response body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                404 | 410 => ShiftError::NotFound,
                401 | 403 => ShiftError::StoreUnavailable(format!("not authorized: {message}")),
                _ => ShiftError::StoreUnavailable(message),
            };
        }

        ShiftError::StoreUnavailable(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_shift())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error / std::io::Error / toml → ShiftError */
/* -------------------------------------------------------------------------- */

impl IntoShiftError for JsonError {
    fn into_shift(self) -> ShiftError {
        ShiftError::InvalidInput(format!("invalid JSON: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_shift())
    }
}

impl IntoShiftError for IoError {
    fn into_shift(self) -> ShiftError {
        ShiftError::StoreUnavailable(format!("I/O error: {self}"))
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_shift())
    }
}

impl IntoShiftError for toml::de::Error {
    fn into_shift(self) -> ShiftError {
        ShiftError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(value.into_shift())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
