use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Wire keys as they appear in the template's resource properties.
pub const KEY_VPC_ID: &str = "vpcId";
pub const KEY_SERVICE_NAME: &str = "serviceName";
pub const KEY_SERVICE_TOKEN: &str = "ServiceToken";
pub const KEY_SUBNETS: &str = "subnets";
pub const KEY_SECURITY_GROUP_IDS: &str = "securityGroupIds";
pub const KEY_ROUTE_TABLE_IDS: &str = "routeTableIds";

const REQUIRED_KEYS: [&str; 3] = [KEY_VPC_ID, KEY_SERVICE_NAME, KEY_SERVICE_TOKEN];
const OPTIONAL_KEYS: [&str; 3] = [KEY_SUBNETS, KEY_SECURITY_GROUP_IDS, KEY_ROUTE_TABLE_IDS];

/// Validated view of the resource properties.
///
/// The only way to get one is [`validate`]; the raw property map never
/// crosses past that boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointProperties {
    pub vpc_id: String,
    /// Short name, e.g. "ssm". The region-qualified form is built at the
    /// EC2 call site.
    pub service_name: String,
    pub subnet_ids: Vec<String>,
    pub security_group_ids: Vec<String>,
    pub route_table_ids: Vec<String>,
}

/// Service short-names an endpoint may target.
///
/// Injected configuration — the binary can override the default set from the
/// environment without touching this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAllowList(Vec<String>);

impl Default for ServiceAllowList {
    fn default() -> Self {
        Self(
            [
                "ec2",
                "ec2messages",
                "elasticloadbalancing",
                "ssm",
                "kms",
                "servicecatalog",
                "kinesis-streams",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
    }
}

impl ServiceAllowList {
    pub fn new(services: Vec<String>) -> Self {
        Self(services)
    }

    /// Parse a comma-separated list, trimming whitespace and dropping
    /// empty entries.
    pub fn from_csv(csv: &str) -> Self {
        Self(
            csv.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn contains(&self, service: &str) -> bool {
        self.0.iter().any(|s| s == service)
    }
}

/// Check the raw property map and produce a normalized [`EndpointProperties`].
///
/// Check order is fixed so error messages are deterministic: required-field
/// presence, then allow-list membership, then the unrecognized-key scan,
/// then value types. First failure wins. Pure — no remote calls.
pub fn validate(
    properties: &Map<String, Value>,
    services: &ServiceAllowList,
) -> Result<EndpointProperties, ValidationError> {
    for key in REQUIRED_KEYS {
        if !properties.contains_key(key) {
            return Err(ValidationError::MissingRequiredField(key.to_string()));
        }
    }

    let service_name = required_string(properties, KEY_SERVICE_NAME)?;
    if !services.contains(&service_name) {
        return Err(ValidationError::InvalidServiceName(service_name));
    }

    for key in properties.keys() {
        if !REQUIRED_KEYS.contains(&key.as_str()) && !OPTIONAL_KEYS.contains(&key.as_str()) {
            return Err(ValidationError::UnrecognizedField(key.clone()));
        }
    }

    Ok(EndpointProperties {
        vpc_id: required_string(properties, KEY_VPC_ID)?,
        service_name,
        subnet_ids: optional_string_list(properties, KEY_SUBNETS)?,
        security_group_ids: optional_string_list(properties, KEY_SECURITY_GROUP_IDS)?,
        route_table_ids: optional_string_list(properties, KEY_ROUTE_TABLE_IDS)?,
    })
}

fn required_string(
    properties: &Map<String, Value>,
    key: &str,
) -> Result<String, ValidationError> {
    match properties.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::InvalidFieldType {
            field: key.to_string(),
            expected: "string",
        }),
        None => Err(ValidationError::MissingRequiredField(key.to_string())),
    }
}

/// Absent key ⇒ empty list, never an implicit "remove everything".
fn optional_string_list(
    properties: &Map<String, Value>,
    key: &str,
) -> Result<Vec<String>, ValidationError> {
    let Some(value) = properties.get(key) else {
        return Ok(Vec::new());
    };
    let items = value.as_array().ok_or_else(|| ValidationError::InvalidFieldType {
        field: key.to_string(),
        expected: "list of strings",
    })?;
    items
        .iter()
        .map(|item| {
            item.as_str().map(String::from).ok_or_else(|| {
                ValidationError::InvalidFieldType {
                    field: key.to_string(),
                    expected: "list of strings",
                }
            })
        })
        .collect()
}
