use serde::Deserialize;
use serde_json::{Map, Value};

const STACK_ARN_PREFIX: &str = "arn:aws:cloudformation:";

/// One lifecycle request from CloudFormation.
///
/// Immutable once deserialized. The correlation fields (`stack_id`,
/// `request_id`, `logical_resource_id`, `response_url`) are echoed verbatim
/// in the terminal callback and never interpreted — with one exception:
/// [`CustomResourceEvent::region`] reads the region segment out of the stack
/// ARN, because the Create path gets no region of its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceEvent {
    pub request_type: RequestType,
    #[serde(default)]
    pub resource_properties: Map<String, Value>,
    /// Present only on Update.
    #[serde(default)]
    pub old_resource_properties: Map<String, Value>,
    /// Absent on Create; CloudFormation hands it back on Update/Delete.
    #[serde(default)]
    pub physical_resource_id: Option<String>,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    #[serde(rename = "ResponseURL")]
    pub response_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

impl CustomResourceEvent {
    /// Region segment of the stack ARN
    /// (`arn:aws:cloudformation:<region>:<account>:stack/<name>/<uuid>`).
    ///
    /// `None` when the stack id is not of that shape; the caller reports
    /// that as a failed event rather than building a broken service name.
    pub fn region(&self) -> Option<&str> {
        let rest = self.stack_id.strip_prefix(STACK_ARN_PREFIX)?;
        let end = rest.find(':')?;
        Some(&rest[..end])
    }
}
