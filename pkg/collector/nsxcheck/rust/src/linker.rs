// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use log::debug;
use serde_json::json;

use crate::errors::Error;
use crate::operations::SuiteApi;

const NO_CONTENT: u16 = 204;

/// Make `parent` the only parent of `child`. Both are catalog identity tokens.
///
/// The endpoint replaces the parent list, so linking the same pair twice is
/// harmless.
pub fn set_parent<A: SuiteApi + ?Sized>(api: &A, child: &str, parent: &str) -> Result<(), Error> {
    let path = format!("/resources/{child}/relationships/parents");
    let response = api.post(&path, &json!({ "uuids": [parent] }))?;
    if response.status != NO_CONTENT {
        return Err(response.into_error());
    }
    debug!("Linked resource {child} under {parent}");
    Ok(())
}
