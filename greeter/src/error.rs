// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.


//! Greeter error types

use std::error;
use std::fmt::{Display, Formatter};
use std::io;
use std::result;

/// Result type for operations that could result in an [GreeterError]
pub type Result<T> = result::Result<T, GreeterError>;

/// Greeter error
#[derive(Debug)]
pub enum GreeterError {
    /// Error associated to Lambda runtime execution.
    LambdaError(Box<dyn std::error::Error + Send + Sync>),
    /// Error associated to I/O operations and associated traits.
    IoError(io::Error),
    /// Error returned when serde_json failed to serialize or deserialize data.
    SerdeJson(serde_json::Error),
    /// Error returned when a required setting or environment variable is
    /// missing or malformed.
    Config(String),
    /// Error returned when the requested object or parameter does not exist.
    NotFound(String),
    /// Error returned when accessing the AWS services fails.
    AWS(String),
    /// Error returned as a consequence of an error in Greeter.
    /// This error should not happen in normal usage of Greeter.
    Internal(String),
}

impl From<io::Error> for GreeterError {
    fn from(e: io::Error) -> Self {
        GreeterError::IoError(e)
    }
}

impl From<serde_json::Error> for GreeterError {
    fn from(e: serde_json::Error) -> Self {
        GreeterError::SerdeJson(e)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for GreeterError {
    fn from(e: Box<dyn std::error::Error + Send + Sync>) -> Self {
        GreeterError::LambdaError(e)
    }
}

impl From<&str> for GreeterError {
    fn from(e: &str) -> Self {
        GreeterError::Internal(e.to_string())
    }
}

impl Display for GreeterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            GreeterError::LambdaError(ref desc) => write!(f, "Lambda error: {}", desc),
            GreeterError::IoError(ref desc) => write!(f, "IO error: {}", desc),
            GreeterError::SerdeJson(ref desc) => write!(f, "serde_json error: {}", desc),
            GreeterError::Config(ref desc) => write!(f, "Configuration error: {}", desc),
            GreeterError::NotFound(ref desc) => write!(f, "Not found: {}", desc),
            GreeterError::AWS(ref desc) => write!(f, "AWS error: {}", desc),
            GreeterError::Internal(ref desc) => write!(
                f,
                "Internal error: {}. This was likely caused by a bug in Greeter's \
                    code and we would welcome that you file an bug report in our issue tracker",
                desc
            ),
        }
    }
}

impl error::Error for GreeterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_source() {
        let err = GreeterError::Config("S3_BUCKET is not set".to_owned());
        assert_eq!(err.to_string(), "Configuration error: S3_BUCKET is not set");

        let err: GreeterError = "no invocation context".into();
        assert!(matches!(err, GreeterError::Internal(_)));
        assert!(err.to_string().starts_with("Internal error: no invocation context."));
    }

    #[test]
    fn boxed_runtime_errors_convert() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = "runtime went away".into();
        let err = GreeterError::from(boxed);
        assert_eq!(err.to_string(), "Lambda error: runtime went away");
    }
}
