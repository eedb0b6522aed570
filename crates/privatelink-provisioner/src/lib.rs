//! privatelink-provisioner
//!
//! Reconciles one CloudFormation lifecycle event against the EC2 VPC
//! endpoint API and reports the outcome through the presigned callback URL.
//!
//! Public API:
//! - `Reconciler::handle()` — process one event, emit exactly one callback
//! - `Ec2EndpointGateway` — production `EndpointApi` over `aws-sdk-ec2`
//! - `HttpCallbackSender` — production `CallbackSender` over `reqwest`

pub mod callback;
pub mod error;
pub mod gateway;
pub mod reconcile;

pub use crate::callback::{CallbackSender, HttpCallbackSender};
pub use crate::error::{CallbackError, ProviderError};
pub use crate::gateway::{Ec2EndpointGateway, EndpointApi};
pub use crate::reconcile::Reconciler;
