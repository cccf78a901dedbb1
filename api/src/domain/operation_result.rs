//! Service call outcomes
//!
//! Services never fail with a transport error; every call returns an
//! `OperationResult` which handlers translate into an HTTP response.

use serde::Serialize;

use crate::error::ServiceError;

/// Classification of a failed service call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    InvalidData,
    ResourceNotFound,
    GeneralException,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidData => write!(f, "invalidData"),
            ErrorCode::ResourceNotFound => write!(f, "resourceNotFound"),
            ErrorCode::GeneralException => write!(f, "generalException"),
        }
    }
}

/// Outcome of a single service call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult<T> {
    Success(T),
    Failure {
        code: ErrorCode,
        message: Option<String>,
    },
}

impl<T> OperationResult<T> {
    pub fn success(value: T) -> Self {
        OperationResult::Success(value)
    }

    pub fn failure(code: ErrorCode, message: impl Into<String>) -> Self {
        OperationResult::Failure {
            code,
            message: Some(message.into()),
        }
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::failure(ErrorCode::InvalidData, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failure(ErrorCode::ResourceNotFound, message)
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self::failure(ErrorCode::GeneralException, message)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success(_))
    }

    /// Failure code, if any
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            OperationResult::Success(_) => None,
            OperationResult::Failure { code, .. } => Some(*code),
        }
    }

    pub fn map<U, F>(self, f: F) -> OperationResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            OperationResult::Success(value) => OperationResult::Success(f(value)),
            OperationResult::Failure { code, message } => OperationResult::Failure { code, message },
        }
    }

    pub fn into_result(self) -> Result<T, ServiceError> {
        match self {
            OperationResult::Success(value) => Ok(value),
            OperationResult::Failure { code, message } => Err(ServiceError { code, message }),
        }
    }
}

impl<T> From<Result<T, ServiceError>> for OperationResult<T> {
    fn from(result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(value) => OperationResult::Success(value),
            Err(ServiceError { code, message }) => OperationResult::Failure { code, message },
        }
    }
}
