use std::future::Future;
use std::pin::Pin;

use aws_sdk_ec2::error::ProvideErrorMetadata;
use aws_sdk_ec2::types::VpcEndpointType;
use aws_sdk_ec2::Client;

use privatelink_core::{EndpointDelta, EndpointProperties};

use crate::error::{format_err_chain, ProviderError};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The three EC2 operations the reconciler needs, behind a seam so tests
/// can substitute a fake. No retries anywhere — retry policy belongs to
/// CloudFormation across invocations.
///
/// Methods return boxed futures for dyn compatibility.
pub trait EndpointApi: Send + Sync {
    /// Create an Interface endpoint; returns the endpoint id.
    fn create<'a>(
        &'a self,
        props: &'a EndpointProperties,
        region: &'a str,
    ) -> BoxFuture<'a, Result<String, ProviderError>>;

    /// Delete the endpoint. Reports `ProviderError::NotFound` for an id that
    /// no longer exists — whether that counts as success is the caller's
    /// decision, not this layer's.
    fn delete<'a>(&'a self, endpoint_id: &'a str) -> BoxFuture<'a, Result<(), ProviderError>>;

    /// Apply the add/remove lists to an existing endpoint.
    fn modify<'a>(
        &'a self,
        endpoint_id: &'a str,
        delta: &'a EndpointDelta,
    ) -> BoxFuture<'a, Result<(), ProviderError>>;
}

/// Production gateway over `aws-sdk-ec2`.
pub struct Ec2EndpointGateway {
    client: Client,
}

impl Ec2EndpointGateway {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl EndpointApi for Ec2EndpointGateway {
    fn create<'a>(
        &'a self,
        props: &'a EndpointProperties,
        region: &'a str,
    ) -> BoxFuture<'a, Result<String, ProviderError>> {
        Box::pin(async move {
            let service_name = format!("com.amazonaws.{region}.{}", props.service_name);

            let resp = self
                .client
                .create_vpc_endpoint()
                .vpc_endpoint_type(VpcEndpointType::Interface)
                .vpc_id(&props.vpc_id)
                .service_name(&service_name)
                .set_subnet_ids(Some(props.subnet_ids.clone()))
                .set_security_group_ids(Some(props.security_group_ids.clone()))
                .set_route_table_ids(Some(props.route_table_ids.clone()))
                .private_dns_enabled(true)
                .send()
                .await
                .map_err(|e| ProviderError::Api(format_err_chain(&e)))?;

            let endpoint_id = resp
                .vpc_endpoint()
                .and_then(|ep| ep.vpc_endpoint_id())
                .ok_or_else(|| {
                    ProviderError::Api("CreateVpcEndpoint response carried no endpoint id".into())
                })?
                .to_string();

            tracing::info!(
                endpoint_id = %endpoint_id,
                service_name = %service_name,
                vpc_id = %props.vpc_id,
                "VPC endpoint created"
            );
            Ok(endpoint_id)
        })
    }

    fn delete<'a>(&'a self, endpoint_id: &'a str) -> BoxFuture<'a, Result<(), ProviderError>> {
        Box::pin(async move {
            let resp = match self
                .client
                .delete_vpc_endpoints()
                .vpc_endpoint_ids(endpoint_id)
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(e) => {
                    if e.code().is_some_and(|c| c.ends_with(".NotFound")) {
                        return Err(ProviderError::NotFound(endpoint_id.to_string()));
                    }
                    return Err(ProviderError::Api(format_err_chain(&e)));
                }
            };

            // DeleteVpcEndpoints reports per-id failures in the response
            // body with HTTP 200, not as a request error.
            if let Some(item) = resp.unsuccessful().first() {
                let code = item.error().and_then(|e| e.code()).unwrap_or_default();
                let message = item.error().and_then(|e| e.message()).unwrap_or_default();
                if code.ends_with(".NotFound") {
                    return Err(ProviderError::NotFound(endpoint_id.to_string()));
                }
                return Err(ProviderError::Api(format!("{code}: {message}")));
            }

            tracing::info!(endpoint_id = %endpoint_id, "VPC endpoint deleted");
            Ok(())
        })
    }

    fn modify<'a>(
        &'a self,
        endpoint_id: &'a str,
        delta: &'a EndpointDelta,
    ) -> BoxFuture<'a, Result<(), ProviderError>> {
        Box::pin(async move {
            // ModifyVpcEndpoint rejects a call with no changes.
            if delta.is_empty() {
                tracing::info!(endpoint_id = %endpoint_id, "no endpoint changes to apply");
                return Ok(());
            }

            // All six lists are passed explicitly: an unchanged field is an
            // empty add + empty remove, never an omission the API could
            // read differently.
            self.client
                .modify_vpc_endpoint()
                .vpc_endpoint_id(endpoint_id)
                .set_add_subnet_ids(Some(delta.subnet_ids.added.clone()))
                .set_remove_subnet_ids(Some(delta.subnet_ids.removed.clone()))
                .set_add_security_group_ids(Some(delta.security_group_ids.added.clone()))
                .set_remove_security_group_ids(Some(delta.security_group_ids.removed.clone()))
                .set_add_route_table_ids(Some(delta.route_table_ids.added.clone()))
                .set_remove_route_table_ids(Some(delta.route_table_ids.removed.clone()))
                .send()
                .await
                .map_err(|e| ProviderError::Api(format_err_chain(&e)))?;

            tracing::info!(endpoint_id = %endpoint_id, "VPC endpoint modified");
            Ok(())
        })
    }
}
