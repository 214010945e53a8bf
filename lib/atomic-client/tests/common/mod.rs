#![allow(dead_code)]

use atomic_client::AtomicClient;
use rstest::fixture;
use tracing::info;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token";

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

/// A mock Atomic API and a client pointing to it.
pub struct TestServer {
    pub mock: MockServer,
    pub client: AtomicClient,
}

impl TestServer {
    pub async fn start() -> Self {
        let mock = MockServer::start().await;
        let client = AtomicClient::builder()
            .with_host(mock.uri())
            .with_bearer_token(TEST_TOKEN)
            .build()
            .expect("valid mock server uri");
        Self { mock, client }
    }

    /// Requests received by the mock server, in order.
    pub async fn received(&self) -> Vec<wiremock::Request> {
        self.mock.received_requests().await.unwrap_or_default()
    }
}

#[fixture]
pub async fn server() -> TestServer {
    init_tracing();
    TestServer::start().await
}
