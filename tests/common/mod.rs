//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates an isolated [`AppContext`] with its
//! own empty store. The [`TestHarness::with_server`] constructor starts Axum
//! on a random port for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;

use pb_core::config::Config;
use pb_server::context::AppContext;
use pb_server::router::build_router;
use serde_json::{json, Value};

/// Test harness wrapping a fully-constructed [`AppContext`].
pub struct TestHarness {
    pub ctx: AppContext,
    pub addr: SocketAddr,
    pub client: reqwest::Client,
}

impl TestHarness {
    /// Start an Axum server with default configuration on a random port.
    pub async fn with_server() -> Self {
        Self::with_server_config(Config::default()).await
    }

    /// Start an Axum server with custom config on a random port.
    pub async fn with_server_config(config: Config) -> Self {
        let ctx = AppContext::new(config);
        let app = build_router(ctx.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            ctx,
            addr,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// POST a photo body and return the status and decoded JSON.
    pub async fn create(&self, body: Value) -> (u16, Value) {
        let resp = self
            .client
            .post(self.url("/photos"))
            .json(&body)
            .send()
            .await
            .expect("request failed");
        let status = resp.status().as_u16();
        (status, resp.json().await.expect("invalid json"))
    }

    /// Create a photo that is expected to succeed, returning the record.
    pub async fn create_ok(&self, title: &str, tags: &[&str]) -> Value {
        let (status, json) = self
            .create(json!({
                "title": title,
                "url": format!("https://example.com/{title}.jpg"),
                "tags": tags,
            }))
            .await;
        assert_eq!(status, 201, "create failed: {json}");
        json
    }

    pub async fn get(&self, path: &str) -> (u16, Value) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("request failed");
        let status = resp.status().as_u16();
        (status, resp.json().await.expect("invalid json"))
    }

    pub async fn put(&self, path: &str, body: Value) -> (u16, Value) {
        let resp = self
            .client
            .put(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("request failed");
        let status = resp.status().as_u16();
        (status, resp.json().await.expect("invalid json"))
    }

    pub async fn delete(&self, path: &str) -> (u16, Value) {
        let resp = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("request failed");
        let status = resp.status().as_u16();
        (status, resp.json().await.expect("invalid json"))
    }
}
