//! Spawns the application on a random port and wraps the requests the tests send.
use std::{net::SocketAddr, sync::OnceLock};

use anyhow::Result;
use elrevo::{config::get_or_init_config, init_dbg_tracing, App};
use reqwest::{redirect::Policy, Client, Method, Response};
use serde_json::Value;

pub struct TestApp {
    pub addr: SocketAddr,
    pub http_client: Client,
}

/// Logs are only printed when `TEST_LOG` is set.
fn init_test_subscriber() {
    static SUBSCRIBER: OnceLock<()> = OnceLock::new();
    SUBSCRIBER.get_or_init(|| {
        if std::env::var("TEST_LOG").is_ok() {
            init_dbg_tracing();
        }
    });
}

impl TestApp {
    /// Builds the app from the `local` configuration, but binds to port 0
    /// so the OS picks a free port for every test.
    pub async fn spawn() -> Result<Self> {
        init_test_subscriber();

        let mut config = get_or_init_config().clone();
        config.net_config.app_port = 0;

        let app = App::build_from_config(config).await?;
        let addr = app.local_addr()?;

        tokio::spawn(elrevo::serve(app));

        let http_client = Client::builder().redirect(Policy::none()).build()?;

        Ok(TestApp { addr, http_client })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        let res = self.http_client.get(self.url(path)).send().await?;
        Ok(res)
    }

    pub async fn post_subscribe(&self, body: &Value) -> Result<Response> {
        let res = self
            .http_client
            .post(self.url("/api/subscribe"))
            .json(body)
            .send()
            .await?;
        Ok(res)
    }

    /// Sends `body` as is, with a JSON content type.
    pub async fn post_subscribe_raw(&self, body: &'static str) -> Result<Response> {
        let res = self
            .http_client
            .post(self.url("/api/subscribe"))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;
        Ok(res)
    }

    pub async fn request_subscribe(&self, method: Method) -> Result<Response> {
        let res = self
            .http_client
            .request(method, self.url("/api/subscribe"))
            .send()
            .await?;
        Ok(res)
    }
}

/// Reads the `message` field of a JSON response body.
pub async fn response_message(res: Response) -> Result<String> {
    let body: Value = res.json().await?;
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow::anyhow!("response body has no 'message': {body}"))?;
    Ok(message.to_string())
}

pub fn assert_json_content_type(res: &Response) {
    let content_type = res
        .headers()
        .get("content-type")
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "expected a JSON response, got content-type: '{content_type}'"
    );
}
