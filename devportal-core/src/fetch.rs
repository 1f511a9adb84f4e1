//! Resource fetching seam and cancellable loads.

use futures::future::{AbortHandle, Abortable};
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Response body unreadable: {0}")]
    Body(String),
}

/// Fetches text resources relative to the deployment origin.
#[allow(async_fn_in_trait)]
pub trait ResourceFetcher {
    /// Fetch `url` and return the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body cannot be read as text.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

impl<T: ResourceFetcher> ResourceFetcher for &T {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch_text(url).await
    }
}

/// Marker returned when a load was aborted before it settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Load cancelled")]
pub struct Cancelled;

/// Handle to an in-flight [`cancellable`] load.
#[derive(Debug, Clone)]
pub struct LoadHandle(AbortHandle);

impl LoadHandle {
    pub fn cancel(&self) {
        self.0.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.is_aborted()
    }
}

/// Wrap `future` so it can be aborted through the returned handle.
///
/// The wrapped future resolves to `Err(Cancelled)` if the handle fires before
/// `future` completes; otherwise it yields the inner output unchanged.
pub fn cancellable<F>(
    future: F,
) -> (
    impl Future<Output = Result<F::Output, Cancelled>>,
    LoadHandle,
)
where
    F: Future,
{
    let (handle, registration) = AbortHandle::new_pair();
    let task = async move {
        Abortable::new(future, registration)
            .await
            .map_err(|_| Cancelled)
    };
    (task, LoadHandle(handle))
}
