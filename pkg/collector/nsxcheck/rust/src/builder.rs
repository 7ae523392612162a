// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Turns the status payloads of one transport node into its result object.

use crate::errors::Error;
use crate::keys;
use crate::manager::payload::{CoreStats, CpuStats, NodeStatus, PolledNode};
use crate::model::{Identifier, MetricSample, PropertySample, ResultObject};

/// Only edge nodes report datapath memory details; every other node type is
/// left out of the collection.
pub fn is_collected(status: &NodeStatus) -> bool {
    status.node_status.system_status.datapath_memory().is_some()
}

/// Build the transport node object, or `None` when the node is skipped.
///
/// Each CPU core shows up twice: as `core|N|...` attributes of the node and
/// as a child object named `{node}:{N}`.
pub fn build_node(
    node: &PolledNode,
    status: &NodeStatus,
    cpu: &CpuStats,
) -> Result<Option<ResultObject>, Error> {
    let system = &status.node_status.system_status;
    let Some(datapath) = system.datapath_memory() else {
        return Ok(None);
    };

    let missing = |field| Error::MissingField {
        node: node.display_name.clone(),
        field,
    };
    let mem_used = system.mem_used.ok_or_else(|| missing(keys::MEM_USED))?;
    let cpu_cores = system.cpu_cores.ok_or_else(|| missing(keys::CORE_COUNT))?;

    let mut result = ResultObject::new(
        keys::ADAPTER_KIND,
        keys::TRANSPORT_NODE_KIND,
        &node.display_name,
        vec![Identifier::unique(keys::NSX_ID, &node.id)],
    );
    result.add_metric(MetricSample::new(keys::MEM_USED, mem_used));
    result.add_property(PropertySample::new(keys::CORE_COUNT, cpu_cores));
    result.add_metric(MetricSample::new(
        keys::HIGHEST_DATAPATH_USAGE,
        datapath.highest_datapath_mem_pool_usage,
    ));
    if let Some(pool) = datapath
        .datapath_mem_pools_usage
        .iter()
        .find(|pool| pool.name == keys::MBUF_POOL_NAME)
    {
        result.add_metric(MetricSample::new(keys::MBUF_POOL_MEM, pool.usage));
    }

    for core in &cpu.cores {
        result.add_metric(MetricSample::new(keys::core_usage(core.core), core.usage));
        result.add_property(PropertySample::new(
            keys::core_type(core.core),
            core.cpu_type.as_str(),
        ));
        result.add_child(core_object(&node.display_name, core));
    }

    Ok(Some(result))
}

fn core_object(node_name: &str, core: &CoreStats) -> ResultObject {
    let mut object = ResultObject::new(
        keys::ADAPTER_KIND,
        keys::TRANSPORT_NODE_CPU_KIND,
        &format!("{node_name}:{}", core.core),
        Vec::new(),
    );
    object.add_metric(MetricSample::new(keys::USAGE, core.usage));
    object.add_property(PropertySample::new(keys::CORE_TYPE, core.cpu_type.as_str()));
    object
}
