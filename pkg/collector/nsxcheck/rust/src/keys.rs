// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Names shared with the Operations object model.

/// Adapter kind of the objects produced by this check.
pub const ADAPTER_KIND: &str = "CustomNSXManagementPack";

/// Adapter and resource kind of the first-party NSX integration that already
/// knows about the same transport nodes.
pub const NATIVE_ADAPTER_KIND: &str = "NSXTAdapter";
pub const NATIVE_RESOURCE_KIND: &str = "TransportNode";

pub const TRANSPORT_NODE_KIND: &str = "NSXTransportNode";
pub const TRANSPORT_NODE_CPU_KIND: &str = "NSXTransportNodeCPU";

/// Uniqueness identifier attached to every transport node object.
pub const NSX_ID: &str = "nsxId";
/// Identifier the native adapter stores the manager-assigned node id under.
pub const NATIVE_ID: &str = "ID";

pub const MEM_USED: &str = "mem_used";
pub const CORE_COUNT: &str = "cpu_cores";
pub const MBUF_POOL_MEM: &str = "mbuf_pool_socket_0";
pub const HIGHEST_DATAPATH_USAGE: &str = "highest_datapath_mem_pool_usage";
pub const USAGE: &str = "usage";
pub const CORE_TYPE: &str = "core_type";

/// Datapath memory pool reported as the `mbuf_pool_socket_0` metric.
pub const MBUF_POOL_NAME: &str = "mbuf_pool_socket_0";

pub fn core_usage(core: u32) -> String {
    format!("core|{core}|{USAGE}")
}

pub fn core_type(core: u32) -> String {
    format!("core|{core}|{CORE_TYPE}")
}
