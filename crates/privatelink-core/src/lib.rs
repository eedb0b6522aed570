//! privatelink-core
//!
//! Domain model for the PrivateLink custom resource: the CloudFormation
//! lifecycle event, validated endpoint properties, property deltas, and the
//! terminal response body. Pure types and functions — no AWS calls, no I/O.

pub mod delta;
pub mod error;
pub mod event;
pub mod properties;
pub mod response;

pub use crate::delta::{EndpointDelta, FieldDelta};
pub use crate::error::ValidationError;
pub use crate::event::{CustomResourceEvent, RequestType};
pub use crate::properties::{validate, EndpointProperties, ServiceAllowList};
pub use crate::response::{CfnResponse, ResponseStatus};
