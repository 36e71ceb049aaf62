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

//! Bucketguard error types

use std::error;
use std::fmt::{Display, Formatter};
use std::result;

/// Result type for operations that could result in an [GuardError]
pub type Result<T> = result::Result<T, GuardError>;

/// Bucketguard error
#[derive(Debug)]
pub enum GuardError {
    /// Error associated to Lambda runtime execution.
    LambdaError(Box<dyn std::error::Error + Send + Sync>),
    /// Error returned when serde_json failed to serialize or deserialize data.
    SerdeJson(serde_json::Error),
    /// Error returned when accessing the AWS services fails.
    AWS(String),
    /// Error returned as a consequence of an error in bucketguard.
    /// This error should not happen in normal usage of bucketguard.
    Internal(String),
}

impl From<serde_json::Error> for GuardError {
    fn from(e: serde_json::Error) -> Self {
        GuardError::SerdeJson(e)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for GuardError {
    fn from(e: Box<dyn std::error::Error + Send + Sync>) -> Self {
        GuardError::LambdaError(e)
    }
}

impl From<&str> for GuardError {
    fn from(e: &str) -> Self {
        GuardError::Internal(e.to_string())
    }
}

impl From<String> for GuardError {
    fn from(e: String) -> Self {
        GuardError::Internal(e)
    }
}

impl Display for GuardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            GuardError::LambdaError(ref desc) => write!(f, "Lambda error: {}", desc),
            GuardError::SerdeJson(ref desc) => write!(f, "serde_json error: {:?}", desc),
            GuardError::AWS(ref desc) => write!(f, "AWS error: {}", desc),
            GuardError::Internal(ref desc) => write!(
                f,
                "Internal error: {}. This was likely caused by a bug in bucketguard's \
                    code and we would welcome that you file an bug report in our issue tracker",
                desc
            ),
        }
    }
}

impl error::Error for GuardError {}
