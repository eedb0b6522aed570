use std::env;
use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing_subscriber::EnvFilter;

use privatelink_core::{CustomResourceEvent, ServiceAllowList};
use privatelink_provisioner::{Ec2EndpointGateway, HttpCallbackSender, Reconciler};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;
    let gateway = Arc::new(Ec2EndpointGateway::new(aws_sdk_ec2::Client::new(&aws_config)));
    let callback = Arc::new(HttpCallbackSender::new());

    let services = match env::var("ENDPOINT_SERVICE_ALLOWLIST") {
        Ok(csv) => ServiceAllowList::from_csv(&csv),
        Err(_) => ServiceAllowList::default(),
    };

    let reconciler = Arc::new(Reconciler::new(gateway, callback, services));

    let handler = service_fn(move |event: LambdaEvent<CustomResourceEvent>| {
        let reconciler = Arc::clone(&reconciler);
        async move {
            tracing::info!(
                request_type = ?event.payload.request_type,
                logical_resource_id = %event.payload.logical_resource_id,
                "handling lifecycle event"
            );
            let log_stream = event.context.env_config.log_stream.clone();
            // The callback is the only outcome channel; the invocation
            // itself always completes.
            reconciler.handle(&event.payload, &log_stream).await;
            Ok::<(), Error>(())
        }
    });

    lambda_runtime::run(handler).await
}
