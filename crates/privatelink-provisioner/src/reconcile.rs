use std::sync::Arc;

use privatelink_core::{
    validate, CfnResponse, CustomResourceEvent, EndpointDelta, RequestType, ServiceAllowList,
};

use crate::callback::CallbackSender;
use crate::error::ProviderError;
use crate::gateway::EndpointApi;

/// Drives one lifecycle event to completion: at most one EC2 call, then
/// exactly one terminal callback. Holds no state between events — the
/// resource id and prior properties live with CloudFormation and arrive
/// fresh on each invocation.
pub struct Reconciler {
    api: Arc<dyn EndpointApi>,
    callback: Arc<dyn CallbackSender>,
    services: ServiceAllowList,
}

impl Reconciler {
    pub fn new(
        api: Arc<dyn EndpointApi>,
        callback: Arc<dyn CallbackSender>,
        services: ServiceAllowList,
    ) -> Self {
        Self {
            api,
            callback,
            services,
        }
    }

    /// Process one event and deliver its outcome.
    ///
    /// `fallback_physical_id` stands in for the resource id on paths where
    /// none exists yet (a failed create); the log stream name is the
    /// conventional choice so a stack operator can find the details.
    pub async fn handle(&self, event: &CustomResourceEvent, fallback_physical_id: &str) {
        let response = self.dispatch(event, fallback_physical_id).await;
        self.notify(&event.response_url, &response).await;
    }

    /// Every arm returns exactly one response; the compiler enforces what
    /// the callback protocol demands.
    async fn dispatch(&self, event: &CustomResourceEvent, fallback: &str) -> CfnResponse {
        match event.request_type {
            RequestType::Create => self.create(event, fallback).await,
            RequestType::Delete => self.delete(event, fallback).await,
            RequestType::Update => self.update(event, fallback).await,
        }
    }

    async fn create(&self, event: &CustomResourceEvent, fallback: &str) -> CfnResponse {
        let props = match validate(&event.resource_properties, &self.services) {
            Ok(props) => props,
            Err(e) => {
                tracing::warn!(error = %e, "resource properties rejected");
                return CfnResponse::failed(event, e.to_string(), fallback);
            }
        };

        let Some(region) = event.region() else {
            tracing::warn!(stack_id = %event.stack_id, "stack id is not a CloudFormation ARN");
            return CfnResponse::failed(
                event,
                format!("Malformed stack id {}", event.stack_id),
                fallback,
            );
        };

        match self.api.create(&props, region).await {
            Ok(endpoint_id) => {
                CfnResponse::success(event, "Resource successfully created", endpoint_id)
            }
            Err(e) => {
                tracing::error!(error = %e, vpc_id = %props.vpc_id, "CreateVpcEndpoint failed");
                CfnResponse::failed(event, log_pointer_reason(fallback), fallback)
            }
        }
    }

    async fn delete(&self, event: &CustomResourceEvent, fallback: &str) -> CfnResponse {
        let endpoint_id = event
            .physical_resource_id
            .clone()
            .unwrap_or_else(|| fallback.to_string());

        match self.api.delete(&endpoint_id).await {
            Ok(()) => CfnResponse::success(event, "Resource deleted", endpoint_id),
            // Already gone. CloudFormation retries deletes during rollback,
            // so a missing endpoint must still read as a clean delete.
            Err(ProviderError::NotFound(_)) => {
                tracing::info!(endpoint_id = %endpoint_id, "endpoint already absent");
                CfnResponse::success(event, "Resource deleted", endpoint_id)
            }
            Err(e) => {
                tracing::error!(error = %e, endpoint_id = %endpoint_id, "DeleteVpcEndpoints failed");
                CfnResponse::failed(event, log_pointer_reason(fallback), endpoint_id)
            }
        }
    }

    async fn update(&self, event: &CustomResourceEvent, fallback: &str) -> CfnResponse {
        let endpoint_id = event
            .physical_resource_id
            .clone()
            .unwrap_or_else(|| fallback.to_string());
        let delta =
            EndpointDelta::between(&event.resource_properties, &event.old_resource_properties);

        match self.api.modify(&endpoint_id, &delta).await {
            Ok(()) => CfnResponse::success(event, "Resource updated", endpoint_id),
            Err(e) => {
                tracing::error!(error = %e, endpoint_id = %endpoint_id, "ModifyVpcEndpoint failed");
                CfnResponse::failed(event, log_pointer_reason(fallback), endpoint_id)
            }
        }
    }

    /// Deliver-or-log. A failed callback cannot be reported anywhere else,
    /// so it is logged and the invocation ends; never retried, never raised.
    async fn notify(&self, url: &str, response: &CfnResponse) {
        if let Err(e) = self.callback.send(url, response).await {
            tracing::error!(error = %e, "terminal callback delivery failed");
        }
    }
}

/// Generic failure reason: provider error detail goes to the logs, the
/// stack events just point at them.
fn log_pointer_reason(log_stream: &str) -> String {
    format!("See the details in CloudWatch Log Stream: {log_stream}")
}
