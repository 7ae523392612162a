// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The remote API answered with an unexpected status code.
    #[error("API Error: {status}: {body}")]
    Api { status: u16, body: String },
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid JSON in {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("authentication failed: {context}")]
    Auth { context: String },
    #[error("Parent not found for transport node {node}")]
    ParentNotFound { node: String },
    #[error("transport node {node} status has no '{field}' field")]
    MissingField { node: String, field: &'static str },
}

impl Error {
    /// Build an `Api` error out of an unexpected response, keeping its body
    /// for the error message.
    pub(crate) fn from_response(response: reqwest::blocking::Response) -> Self {
        let status = response.status().as_u16();
        let body = response.text().unwrap_or_default();
        Error::Api { status, body }
    }
}
