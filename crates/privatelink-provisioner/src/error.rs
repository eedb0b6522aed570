use thiserror::Error;

/// A failed EC2 call. `NotFound` is split out so the reconciler can absorb
/// it on the Delete path; every other provider failure is terminal and
/// undistinguished.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("endpoint not found: {0}")]
    NotFound(String),

    #[error("EC2 API error: {0}")]
    Api(String),
}

#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("callback serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("callback delivery error: {0}")]
    Delivery(String),
}

/// Walk the full error chain and join all causes into one string.
///
/// AWS SDK errors often have terse `Display` impls (e.g. "service error")
/// but useful detail in the source chain.
pub fn format_err_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
