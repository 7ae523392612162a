// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Subset of the NSX Manager transport-node payloads read by the check.

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct TransportNodeList {
    pub results: Option<Vec<PolledNode>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PolledNode {
    pub id: String,
    pub display_name: String,
}

/// `GET /api/v1/transport-nodes/{id}/status`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct NodeStatus {
    #[serde(default)]
    pub node_status: NodeStatusDetails,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct NodeStatusDetails {
    #[serde(default)]
    pub system_status: SystemStatus,
}

// mem_used and cpu_cores stay optional so that hypervisor nodes, which are
// skipped anyway, never fail to decode.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SystemStatus {
    pub mem_used: Option<f64>,
    pub cpu_cores: Option<f64>,
    pub edge_mem_usage: Option<EdgeMemUsage>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EdgeMemUsage {
    pub datapath_mem_usage_details: Option<DatapathMemUsage>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct DatapathMemUsage {
    pub highest_datapath_mem_pool_usage: f64,
    #[serde(default)]
    pub datapath_mem_pools_usage: Vec<MemPoolUsage>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MemPoolUsage {
    pub name: String,
    pub usage: f64,
}

/// `GET /api/v1/transport-nodes/{id}/node/services/dataplane/cpu-stats`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CpuStats {
    #[serde(default)]
    pub cores: Vec<CoreStats>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CoreStats {
    pub core: u32,
    pub cpu_type: String,
    pub usage: f64,
}

impl SystemStatus {
    /// Datapath memory details, only reported by edge nodes.
    pub fn datapath_memory(&self) -> Option<&DatapathMemUsage> {
        self.edge_mem_usage
            .as_ref()
            .and_then(|edge| edge.datapath_mem_usage_details.as_ref())
    }
}
