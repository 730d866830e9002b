//! Convenience result type alias for VendorHub.

use crate::error::AppError;

/// A specialized `Result` type for VendorHub operations.
pub type AppResult<T> = Result<T, AppError>;
