// SPDX-License-Identifier: PMPL-1.0-or-later
//! Shared helpers for client integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use composio_client::{
    ClientConfig, ComposioClient, HttpRequest, HttpResponse, Transport, TransportError,
};
use serde_json::Value;

/// Transport that replays scripted outcomes and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        init_tracing();
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.push(Ok(HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        }))
    }

    pub fn respond_json(&self, status: u16, body: Value) -> &Self {
        self.respond(status, &body.to_string())
    }

    pub fn fail(&self, err: TransportError) -> &Self {
        self.push(Err(err))
    }

    fn push(&self, outcome: Result<HttpResponse, TransportError>) -> &Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted response".to_string())))
    }
}

pub const BASE_URL: &str = "https://backend.composio.test";

pub fn client_with(transport: &Arc<ScriptedTransport>) -> ComposioClient {
    let config = ClientConfig::new("sk-test").with_base_url(BASE_URL);
    ComposioClient::with_transport(config, transport.clone()).unwrap()
}

pub fn account(id: &str, app: &str, status: &str, created_at: &str) -> Value {
    serde_json::json!({
        "id": id,
        "status": status,
        "appName": app,
        "clientUniqueUserId": "default",
        "createdAt": created_at
    })
}

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}
