//! Timeout helpers for provider calls
//!
//! ```ignore
//! use crate::ai::timeout::with_timeout;
//!
//! let raw = with_timeout(
//!     Duration::from_secs(60),
//!     async { provider.generate(&prompt).await },
//!     "instruction generation",
//! ).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use crate::types::{Result, SousError};

/// Execute an async operation with a timeout
///
/// Returns `SousError::Timeout` if the operation doesn't complete within the
/// specified duration. The inner error is passed through unchanged.
pub async fn with_timeout<T, F>(timeout: Duration, future: F, operation_name: &str) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => Err(SousError::timeout(operation_name, timeout)),
    }
}
