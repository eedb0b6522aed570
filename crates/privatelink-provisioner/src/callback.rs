use std::future::Future;
use std::pin::Pin;

use privatelink_core::CfnResponse;

use crate::error::CallbackError;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Delivery of the terminal outcome to CloudFormation's presigned URL.
///
/// Implementations report failures; deciding what to do about them (log and
/// move on — there is no further channel to report through) is the
/// reconciler's job.
pub trait CallbackSender: Send + Sync {
    fn send<'a>(
        &'a self,
        url: &'a str,
        response: &'a CfnResponse,
    ) -> BoxFuture<'a, Result<(), CallbackError>>;
}

/// Production sender: one HTTP PUT, no retries.
pub struct HttpCallbackSender {
    http: reqwest::Client,
}

impl HttpCallbackSender {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for HttpCallbackSender {
    fn default() -> Self {
        Self::new()
    }
}

impl CallbackSender for HttpCallbackSender {
    fn send<'a>(
        &'a self,
        url: &'a str,
        response: &'a CfnResponse,
    ) -> BoxFuture<'a, Result<(), CallbackError>> {
        Box::pin(async move {
            let body = serde_json::to_string(response)?;

            // The presigned URL was signed with an empty content-type, so
            // the header must be present and empty; content-length must be
            // the exact byte length of the body.
            let resp = self
                .http
                .put(url)
                .header(reqwest::header::CONTENT_TYPE, "")
                .header(reqwest::header::CONTENT_LENGTH, body.len())
                .body(body)
                .send()
                .await
                .map_err(|e| CallbackError::Delivery(e.to_string()))?;

            resp.error_for_status()
                .map_err(|e| CallbackError::Delivery(e.to_string()))?;
            Ok(())
        })
    }
}
