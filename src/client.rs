use common::{
    config::Configuration,
    errors::{ApiResult, ClientError},
    request::{RequestArgs, RequestBody},
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Async client for the Cardano data API.
///
/// Cloning is cheap: the configuration is shared and `reqwest::Client` pools
/// its connections internally.
#[derive(Clone, Debug)]
pub struct ApiClient {
    pub(crate) config: Arc<Configuration>,
    http: Client,
}

impl ApiClient {
    pub fn new(config: Configuration) -> ApiResult<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_http_client(config, http))
    }

    /// Uses a caller-provided `reqwest::Client` (proxies, TLS roots, ...).
    pub fn with_http_client(config: Configuration, http: Client) -> Self {
        Self {
            config: Arc::new(config),
            http,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn http_client(&self) -> &Client {
        &self.http
    }

    /// Sends a built request and decodes the JSON response.
    pub async fn execute_json<T>(&self, args: RequestArgs) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        dispatch_json(args, &self.http, self.config.base_url()).await
    }

    /// Sends a built request and returns the response body as text.
    pub async fn execute_text(&self, args: RequestArgs) -> ApiResult<String> {
        dispatch_text(args, &self.http, self.config.base_url()).await
    }
}

/// Sends `args` against `base_path` with the given client and decodes the
/// JSON body. Nothing goes over the wire until the future is awaited.
pub async fn dispatch_json<T>(args: RequestArgs, http: &Client, base_path: &str) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    let body = dispatch_text(args, http, base_path).await?;

    Ok(serde_json::from_str(&body)?)
}

/// Like [`dispatch_json`], but hands back the raw response text.
pub async fn dispatch_text(args: RequestArgs, http: &Client, base_path: &str) -> ApiResult<String> {
    let url = format!("{base_path}{}", args.url);
    let method = args.method.clone();

    let mut request = http.request(args.method, &url).headers(args.headers);

    if let Some(timeout) = args.timeout {
        request = request.timeout(timeout);
    }

    request = match args.body {
        Some(RequestBody::Json(value)) => request.body(serde_json::to_vec(&value)?),
        Some(RequestBody::Bytes(bytes)) => request.body(bytes),
        None => request,
    };

    debug!(%method, path = %args.url, "dispatching request");

    let resp = request.send().await?;
    let status = resp.status();
    let body = resp.text().await?;

    debug!(%method, path = %args.url, status = %status, "received response");

    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}
