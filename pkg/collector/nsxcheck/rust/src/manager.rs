// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::time::Duration;

use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use crate::config::ManagerConfig;
use crate::errors::Error;

pub mod payload;

pub use payload::{CpuStats, NodeStatus, PolledNode, TransportNodeList};

const XSRF_TOKEN_HEADER: &str = "x-xsrf-token";

/// Read access to the NSX Manager transport-node API.
pub trait ManagerApi {
    fn transport_nodes(&self) -> Result<TransportNodeList, Error>;
    fn node_status(&self, node_id: &str) -> Result<NodeStatus, Error>;
    fn cpu_stats(&self, node_id: &str) -> Result<CpuStats, Error>;
}

/// Session-authenticated NSX Manager client.
///
/// The session cookie and XSRF token belong to this value only; a new client
/// is connected for every collection cycle.
pub struct NsxClient {
    base_url: String,
    client: Client,
    xsrf_token: Option<String>,
}

impl NsxClient {
    /// Open a session on the manager with the configured credentials.
    pub fn connect(config: &ManagerConfig, timeout: Duration) -> Result<Self, Error> {
        let base_url = base_url(&config.host);
        let client = Client::builder()
            .cookie_store(true)
            .danger_accept_invalid_certs(!config.tls_verify())
            .timeout(timeout)
            .build()
            .map_err(|source| Error::Http {
                url: base_url.clone(),
                source,
            })?;

        let mut nsx = Self {
            base_url,
            client,
            xsrf_token: None,
        };
        nsx.authenticate(&config.username, &config.password)?;
        Ok(nsx)
    }

    fn authenticate(&mut self, username: &str, password: &str) -> Result<(), Error> {
        let url = format!("{}/session/create", self.base_url);
        let response = self
            .client
            .post(&url)
            .form(&[("j_username", username), ("j_password", password)])
            .send()
            .map_err(|source| Error::Http {
                url: url.clone(),
                source,
            })?;
        if response.status() != StatusCode::OK {
            return Err(Error::from_response(response));
        }

        self.xsrf_token = response
            .headers()
            .get(XSRF_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        if self.xsrf_token.is_none() {
            warn!("NSX session created without an XSRF token");
        }
        debug!("Authenticated to {}", self.base_url);
        Ok(())
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url).header(ACCEPT, "application/json");
        if let Some(token) = &self.xsrf_token {
            request = request.header(XSRF_TOKEN_HEADER, token);
        }

        let response = request.send().map_err(|source| Error::Http {
            url: url.clone(),
            source,
        })?;
        if response.status() != StatusCode::OK {
            return Err(Error::from_response(response));
        }
        response.json().map_err(|source| Error::Http { url, source })
    }
}

impl ManagerApi for NsxClient {
    fn transport_nodes(&self) -> Result<TransportNodeList, Error> {
        self.get("/v1/transport-nodes")
    }

    fn node_status(&self, node_id: &str) -> Result<NodeStatus, Error> {
        self.get(&format!("/v1/transport-nodes/{node_id}/status"))
    }

    fn cpu_stats(&self, node_id: &str) -> Result<CpuStats, Error> {
        self.get(&format!(
            "/v1/transport-nodes/{node_id}/node/services/dataplane/cpu-stats"
        ))
    }
}

fn base_url(host: &str) -> String {
    format!("https://{}/api", host.trim_end_matches('/'))
}
