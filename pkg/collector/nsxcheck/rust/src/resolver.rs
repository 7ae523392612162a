// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use log::{debug, warn};
use serde::Deserialize;

use crate::errors::Error;
use crate::model::{CatalogResource, Identifier, ResourceQuery};
use crate::operations::SuiteApi;

const QUERY_PATH: &str = "/resources/query";
const QUERY_OK: u16 = 200;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceList {
    #[serde(default)]
    resource_list: Vec<CatalogResource>,
}

/// Find the catalog resource matching `query`.
///
/// When `identifiers` are given, candidates carrying one of them with another
/// value are dropped; candidates that do not carry it at all are kept. Returns
/// `Ok(None)` when nothing is left, and the first candidate in catalog order
/// when several are.
pub fn lookup_resource<A: SuiteApi + ?Sized>(
    api: &A,
    query: &ResourceQuery,
    identifiers: Option<&[Identifier]>,
) -> Result<Option<CatalogResource>, Error> {
    let body = serde_json::to_value(query).map_err(|source| Error::Json {
        context: "resource query",
        source,
    })?;
    let response = api.post(QUERY_PATH, &body)?;
    if response.status != QUERY_OK {
        return Err(response.into_error());
    }

    let list: ResourceList = serde_json::from_str(&response.body).map_err(|source| Error::Json {
        context: "resource query response",
        source,
    })?;
    debug!(
        "Query for {:?} returned {} resources",
        query.name,
        list.resource_list.len()
    );

    let candidates: Vec<CatalogResource> = match identifiers {
        Some(identifiers) => list
            .resource_list
            .into_iter()
            .filter(|resource| !identifiers.iter().any(|id| resource.conflicts_with(id)))
            .collect(),
        None => list.resource_list,
    };

    match candidates.len() {
        0 => warn!("Resource {:?} was not found. Skipping!", query.name),
        1 => {}
        n => warn!(
            "{n} resources found for {:?}. Defaulting to first in list",
            query.name
        ),
    }
    Ok(candidates.into_iter().next())
}
