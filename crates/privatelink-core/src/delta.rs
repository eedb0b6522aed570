use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::properties::{KEY_ROUTE_TABLE_IDS, KEY_SECURITY_GROUP_IDS, KEY_SUBNETS};

/// Set difference of one list-valued property between old and new state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDelta {
    /// In the requested set but not the prior one, requested order.
    pub added: Vec<String>,
    /// In the prior set but not the requested one, prior order.
    pub removed: Vec<String>,
}

impl FieldDelta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Per-field deltas driving a ModifyVpcEndpoint call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointDelta {
    pub subnet_ids: FieldDelta,
    pub security_group_ids: FieldDelta,
    pub route_table_ids: FieldDelta,
}

impl EndpointDelta {
    /// Compute the delta between the requested and prior property maps.
    ///
    /// Each field is diffed independently; a field absent from either map
    /// contributes an empty set, so dropping a key from the template never
    /// reads as "remove everything". Non-list values are treated as empty —
    /// the maps here are raw, the Update path does not re-validate.
    pub fn between(requested: &Map<String, Value>, prior: &Map<String, Value>) -> Self {
        Self {
            subnet_ids: field_delta(requested, prior, KEY_SUBNETS),
            security_group_ids: field_delta(requested, prior, KEY_SECURITY_GROUP_IDS),
            route_table_ids: field_delta(requested, prior, KEY_ROUTE_TABLE_IDS),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subnet_ids.is_empty()
            && self.security_group_ids.is_empty()
            && self.route_table_ids.is_empty()
    }
}

fn field_delta(requested: &Map<String, Value>, prior: &Map<String, Value>, key: &str) -> FieldDelta {
    let requested = string_list(requested, key);
    let prior = string_list(prior, key);

    let requested_set: HashSet<&str> = requested.iter().map(String::as_str).collect();
    let prior_set: HashSet<&str> = prior.iter().map(String::as_str).collect();

    FieldDelta {
        added: requested
            .iter()
            .filter(|id| !prior_set.contains(id.as_str()))
            .cloned()
            .collect(),
        removed: prior
            .iter()
            .filter(|id| !requested_set.contains(id.as_str()))
            .cloned()
            .collect(),
    }
}

fn string_list(properties: &Map<String, Value>, key: &str) -> Vec<String> {
    properties
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
