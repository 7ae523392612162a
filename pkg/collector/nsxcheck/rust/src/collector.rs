// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::time::Instant;

use log::{debug, error, info, warn};
use serde::Serialize;

use crate::builder::{build_node, is_collected};
use crate::errors::Error;
use crate::keys;
use crate::linker::set_parent;
use crate::manager::{ManagerApi, PolledNode};
use crate::model::{CollectionOutcome, Identifier, ResourceQuery, ResultObject};
use crate::operations::SuiteApi;
use crate::resolver::lookup_resource;

/// Run one collection cycle over every transport node of the manager.
///
/// Only a failure to list the transport nodes ends the cycle early. A node
/// that fails is logged, its error replaces the outcome's error message, and
/// the next node is processed.
pub fn collect<M, A>(manager: &M, operations: &A) -> CollectionOutcome
where
    M: ManagerApi + ?Sized,
    A: SuiteApi + ?Sized,
{
    let start_time = Instant::now();
    let mut outcome = CollectionOutcome::new();

    let nodes = match manager.transport_nodes() {
        Ok(list) => list.results.unwrap_or_else(|| {
            warn!("Transport node inventory has no results");
            Vec::new()
        }),
        Err(err) => {
            error!("Unexpected collection error: {err}");
            outcome.record_error(format!("Unexpected collection error: {err}"));
            return outcome;
        }
    };
    debug!("Found {} transport nodes", nodes.len());

    for node in &nodes {
        match collect_node(manager, operations, node) {
            Ok(Some(object)) => outcome.add(object),
            Ok(None) => debug!(
                "Skipping transport node {} ({}): no datapath memory details",
                node.display_name, node.id
            ),
            Err(err) => {
                error!("Collection failed for transport node {}: {err}", node.display_name);
                outcome.record_error(format!(
                    "Unexpected collection error on transport node {}: {err}",
                    node.display_name
                ));
            }
        }
    }

    info!(
        "Collected {} of {} transport nodes in {} ms",
        outcome.objects().len(),
        nodes.len(),
        start_time.elapsed().as_millis()
    );
    outcome
}

fn collect_node<M, A>(manager: &M, operations: &A, node: &PolledNode) -> Result<Option<ResultObject>, Error>
where
    M: ManagerApi + ?Sized,
    A: SuiteApi + ?Sized,
{
    link_to_native(operations, node)?;

    let status = manager.node_status(&node.id)?;
    if !is_collected(&status) {
        return Ok(None);
    }
    let cpu = manager.cpu_stats(&node.id)?;
    build_node(node, &status, &cpu)
}

/// Put the object published for `node` under the native adapter's object for
/// the same transport node.
fn link_to_native<A: SuiteApi + ?Sized>(api: &A, node: &PolledNode) -> Result<(), Error> {
    let query = ResourceQuery::new(&node.display_name, keys::ADAPTER_KIND, keys::TRANSPORT_NODE_KIND);
    // nothing to link before the first cycle has created the object
    let Some(current) = lookup_resource(api, &query, None)? else {
        return Ok(());
    };

    let query = ResourceQuery::new(
        &node.display_name,
        keys::NATIVE_ADAPTER_KIND,
        keys::NATIVE_RESOURCE_KIND,
    );
    let identifiers = [Identifier::new(keys::NATIVE_ID, &node.id)];
    match lookup_resource(api, &query, Some(&identifiers))? {
        Some(parent) => set_parent(api, &current.identifier, &parent.identifier),
        None => Err(Error::ParentNotFound {
            node: node.display_name.clone(),
        }),
    }
}

/// Result of a connection test.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcome {
    pub error_message: Option<String>,
}

impl TestOutcome {
    pub fn failed(message: String) -> Self {
        Self {
            error_message: Some(message),
        }
    }
}

/// Check that the manager answers the transport node inventory call.
pub fn test_connection<M: ManagerApi + ?Sized>(manager: &M) -> TestOutcome {
    let start_time = Instant::now();
    let outcome = match manager.transport_nodes() {
        Ok(list) if list.results.is_some() => TestOutcome::default(),
        Ok(_) => TestOutcome::failed("Get transport node API call returned null".to_string()),
        Err(err) => {
            error!("Unexpected connection test error: {err}");
            TestOutcome::failed(format!("Unexpected connection test error: {err}"))
        }
    };
    info!("Connection test finished in {} ms", start_time.elapsed().as_millis());
    outcome
}
