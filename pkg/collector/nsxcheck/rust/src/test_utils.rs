// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! In-memory stand-ins for the NSX Manager and the Operations Suite API.
#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use serde_json::{Value, json};

use crate::errors::Error;
use crate::keys;
use crate::manager::{CpuStats, ManagerApi, NodeStatus, PolledNode, TransportNodeList};
use crate::model::CatalogResource;
use crate::operations::{ApiResponse, SuiteApi};

/// Catalog resource of the native NSX adapter named `edge1`.
pub fn catalog_resource(uuid: &str, identifiers: &[(&str, &str)]) -> CatalogResource {
    resource(uuid, "edge1", keys::NATIVE_ADAPTER_KIND, keys::NATIVE_RESOURCE_KIND, identifiers)
}

/// Transport node object previously published by this check.
pub fn custom_resource(uuid: &str, name: &str) -> CatalogResource {
    resource(uuid, name, keys::ADAPTER_KIND, keys::TRANSPORT_NODE_KIND, &[])
}

pub fn native_resource(uuid: &str, name: &str, node_id: &str) -> CatalogResource {
    resource(
        uuid,
        name,
        keys::NATIVE_ADAPTER_KIND,
        keys::NATIVE_RESOURCE_KIND,
        &[(keys::NATIVE_ID, node_id)],
    )
}

fn resource(
    uuid: &str,
    name: &str,
    adapter_kind: &str,
    resource_kind: &str,
    identifiers: &[(&str, &str)],
) -> CatalogResource {
    let ids: Vec<Value> = identifiers
        .iter()
        .map(|(key, value)| {
            json!({
                "identifierType": {"name": key, "dataType": "STRING", "isPartOfUniqueness": true},
                "value": value,
            })
        })
        .collect();
    serde_json::from_value(json!({
        "identifier": uuid,
        "resourceKey": {
            "name": name,
            "adapterKindKey": adapter_kind,
            "resourceKindKey": resource_kind,
            "resourceIdentifiers": ids,
        },
    }))
    .unwrap()
}

/// Suite API backed by a list of resources, filtered the way the real
/// catalog filters on name and kinds.
pub struct FakeSuiteApi {
    catalog: Vec<CatalogResource>,
    query_response: Option<ApiResponse>,
    failing_links: HashSet<String>,
    requests: RefCell<Vec<(String, Value)>>,
}

impl FakeSuiteApi {
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            query_response: None,
            failing_links: HashSet::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_resources(mut self, resources: Vec<CatalogResource>) -> Self {
        self.catalog.extend(resources);
        self
    }

    /// Answer every resource query with this status and body.
    pub fn with_query_response(mut self, status: u16, body: &str) -> Self {
        self.query_response = Some(ApiResponse::new(status, body));
        self
    }

    /// Refuse parent assignment for the given child resource.
    pub fn with_failing_link(mut self, child: &str) -> Self {
        self.failing_links.insert(child.to_string());
        self
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.borrow().clone()
    }

    /// (child, parents) of every parent assignment received.
    pub fn links(&self) -> Vec<(String, Value)> {
        self.requests
            .borrow()
            .iter()
            .filter_map(|(path, body)| {
                let child = path
                    .strip_prefix("/resources/")?
                    .strip_suffix("/relationships/parents")?;
                Some((child.to_string(), body["uuids"].clone()))
            })
            .collect()
    }

    fn query(&self, body: &Value) -> ApiResponse {
        if let Some(response) = &self.query_response {
            return response.clone();
        }
        let matches = |field: &str, candidate: &str| {
            body[field]
                .as_array()
                .is_none_or(|values| values.iter().any(|v| v == candidate))
        };
        let found: Vec<&CatalogResource> = self
            .catalog
            .iter()
            .filter(|r| {
                matches("name", &r.resource_key.name)
                    && matches("adapterKind", &r.resource_key.adapter_kind_key)
                    && matches("resourceKind", &r.resource_key.resource_kind_key)
            })
            .collect();
        ApiResponse::new(200, json!({"resourceList": found}).to_string())
    }
}

impl SuiteApi for FakeSuiteApi {
    fn post(&self, path: &str, body: &Value) -> Result<ApiResponse, Error> {
        self.requests
            .borrow_mut()
            .push((path.to_string(), body.clone()));

        if path == "/resources/query" {
            return Ok(self.query(body));
        }
        if let Some(child) = path
            .strip_prefix("/resources/")
            .and_then(|rest| rest.strip_suffix("/relationships/parents"))
        {
            if self.failing_links.contains(child) {
                return Ok(ApiResponse::new(500, "relationship refused"));
            }
            return Ok(ApiResponse::new(204, ""));
        }
        Ok(ApiResponse::new(404, format!("no route for {path}")))
    }
}

/// NSX Manager serving canned JSON payloads.
#[derive(Default)]
pub struct FakeManager {
    nodes: Option<Vec<PolledNode>>,
    inventory_error: bool,
    statuses: HashMap<String, Value>,
    cpu_stats: HashMap<String, Value>,
    calls: RefCell<Vec<String>>,
}

impl FakeManager {
    pub fn new() -> Self {
        Self {
            nodes: Some(Vec::new()),
            ..Default::default()
        }
    }

    pub fn failing_inventory() -> Self {
        Self {
            inventory_error: true,
            ..Default::default()
        }
    }

    pub fn without_results() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, id: &str, name: &str, status: Value, cpu_stats: Value) -> Self {
        self.nodes.get_or_insert_with(Vec::new).push(PolledNode {
            id: id.to_string(),
            display_name: name.to_string(),
        });
        self.statuses.insert(id.to_string(), status);
        self.cpu_stats.insert(id.to_string(), cpu_stats);
        self
    }

    /// Manager calls in the order they were made.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn payload<T: serde::de::DeserializeOwned>(map: &HashMap<String, Value>, id: &str) -> Result<T, Error> {
        match map.get(id) {
            Some(Value::Null) | None => Err(Error::Api {
                status: 404,
                body: format!("node {id} not found"),
            }),
            Some(value) => serde_json::from_value(value.clone()).map_err(|source| Error::Json {
                context: "fake payload",
                source,
            }),
        }
    }
}

impl ManagerApi for FakeManager {
    fn transport_nodes(&self) -> Result<TransportNodeList, Error> {
        self.calls.borrow_mut().push("transport_nodes".to_string());
        if self.inventory_error {
            return Err(Error::Api {
                status: 503,
                body: "manager unavailable".to_string(),
            });
        }
        Ok(TransportNodeList {
            results: self.nodes.clone(),
        })
    }

    fn node_status(&self, node_id: &str) -> Result<NodeStatus, Error> {
        self.calls.borrow_mut().push(format!("status:{node_id}"));
        Self::payload(&self.statuses, node_id)
    }

    fn cpu_stats(&self, node_id: &str) -> Result<CpuStats, Error> {
        self.calls.borrow_mut().push(format!("cpu:{node_id}"));
        Self::payload(&self.cpu_stats, node_id)
    }
}

/// Status of an edge node with the given datapath pools.
pub fn edge_status(mem_used: f64, cores: u32, highest: f64, pools: &[(&str, f64)]) -> Value {
    let pools: Vec<Value> = pools
        .iter()
        .map(|(name, usage)| json!({"name": name, "usage": usage}))
        .collect();
    json!({
        "node_status": {
            "system_status": {
                "mem_used": mem_used,
                "cpu_cores": cores,
                "edge_mem_usage": {
                    "datapath_mem_usage_details": {
                        "highest_datapath_mem_pool_usage": highest,
                        "datapath_mem_pools_usage": pools,
                    },
                },
            },
        },
    })
}

/// Status of a hypervisor node: no datapath memory details.
pub fn host_status() -> Value {
    json!({
        "node_status": {
            "system_status": {
                "mem_used": 65536,
                "cpu_cores": 32,
                "edge_mem_usage": {"system_mem_usage": 12.5},
            },
        },
    })
}

pub fn cpu_stats(cores: &[(u32, &str, f64)]) -> Value {
    let cores: Vec<Value> = cores
        .iter()
        .map(|(core, cpu_type, usage)| json!({"core": core, "cpu_type": cpu_type, "usage": usage}))
        .collect();
    json!({"cores": cores})
}
