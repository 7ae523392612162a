// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::OperationsConfig;
use crate::errors::Error;

/// Raw answer of the Suite API. Callers decide which status means success.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub(crate) fn into_error(self) -> Error {
        Error::Api {
            status: self.status,
            body: self.body,
        }
    }
}

/// The Operations Suite API, as far as resource lookup and linking go.
pub trait SuiteApi {
    /// POST a JSON document to `path`, relative to `/suite-api/api`.
    fn post(&self, path: &str, body: &Value) -> Result<ApiResponse, Error>;
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

pub struct SuiteApiClient {
    base_url: String,
    client: Client,
    token: String,
}

impl SuiteApiClient {
    /// Acquire an API token with the configured credentials.
    pub fn connect(config: &OperationsConfig, timeout: Duration) -> Result<Self, Error> {
        let base_url = format!("https://{}/suite-api/api", config.host.trim_end_matches('/'));
        let client = Client::builder()
            .danger_accept_invalid_certs(!config.tls_verify())
            .timeout(timeout)
            .build()
            .map_err(|source| Error::Http {
                url: base_url.clone(),
                source,
            })?;

        let url = format!("{base_url}/auth/token/acquire");
        let payload = json!({
            "username": config.username,
            "password": config.password,
            "authSource": config.auth_source(),
        });
        let response = client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .map_err(|source| Error::Http {
                url: url.clone(),
                source,
            })?;
        if response.status() != StatusCode::OK {
            return Err(Error::from_response(response));
        }
        let token: TokenResponse = response.json().map_err(|source| Error::Http {
            url: url.clone(),
            source,
        })?;
        if token.token.is_empty() {
            return Err(Error::Auth {
                context: format!("{url} returned an empty token"),
            });
        }

        debug!("Acquired Operations token from {}", config.host);
        Ok(Self {
            base_url,
            client,
            token: token.token,
        })
    }

    /// Invalidate the token acquired by `connect`.
    pub fn release(self) -> Result<(), Error> {
        let response = self.post("/auth/token/release", &json!({}))?;
        if response.status != StatusCode::OK.as_u16() {
            return Err(response.into_error());
        }
        Ok(())
    }
}

impl SuiteApi for SuiteApiClient {
    fn post(&self, path: &str, body: &Value) -> Result<ApiResponse, Error> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("OpsToken {}", self.token))
            .json(body)
            .send()
            .map_err(|source| Error::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|source| Error::Http { url, source })?;
        Ok(ApiResponse { status, body })
    }
}
