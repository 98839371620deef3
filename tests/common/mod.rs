pub mod mock_api;

use cardano_data_client::{ApiClient, Configuration};
use std::sync::LazyLock;

pub const API_KEY: &str = "preview-test-key";

static INIT_LOGGING: LazyLock<()> = LazyLock::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .init();
});

pub fn initialize_logging() {
    let _ = *INIT_LOGGING;
}

/// Client pointed at `{url}/v1`, so tests also cover base-path joining.
pub fn client_for(url: &str) -> ApiClient {
    let config = Configuration::with_base_url(&format!("{url}/v1"), API_KEY)
        .expect("mock URL should parse");

    ApiClient::new(config).expect("Failed to build the client")
}
