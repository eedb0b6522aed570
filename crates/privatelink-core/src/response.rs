use serde::Serialize;
use serde_json::json;

use crate::event::CustomResourceEvent;

/// The terminal callback body CloudFormation expects at the presigned
/// `ResponseURL`. Built exactly once per event; the correlation fields are
/// echoed from the event untouched.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CfnResponse {
    pub status: ResponseStatus,
    pub reason: String,
    pub physical_resource_id: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILED")]
    Failed,
}

impl CfnResponse {
    pub fn success(
        event: &CustomResourceEvent,
        reason: impl Into<String>,
        physical_resource_id: impl Into<String>,
    ) -> Self {
        Self::terminal(event, ResponseStatus::Success, reason, physical_resource_id)
    }

    pub fn failed(
        event: &CustomResourceEvent,
        reason: impl Into<String>,
        physical_resource_id: impl Into<String>,
    ) -> Self {
        Self::terminal(event, ResponseStatus::Failed, reason, physical_resource_id)
    }

    fn terminal(
        event: &CustomResourceEvent,
        status: ResponseStatus,
        reason: impl Into<String>,
        physical_resource_id: impl Into<String>,
    ) -> Self {
        Self {
            status,
            reason: reason.into(),
            physical_resource_id: physical_resource_id.into(),
            stack_id: event.stack_id.clone(),
            request_id: event.request_id.clone(),
            logical_resource_id: event.logical_resource_id.clone(),
            data: json!({}),
        }
    }
}
