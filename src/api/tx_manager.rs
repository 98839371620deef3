//! Managed transaction submission.
//!
//! Transactions submitted here are tracked by the service, so their state can
//! be polled afterwards. Turbo submission additionally relays the transaction
//! to a wider set of nodes.

use crate::client::ApiClient;
use common::{
    config::Configuration,
    errors::ApiResult,
    helpers::TxPayload,
    pagination::PagePagination,
    request::{
        CONTENT_TYPE_CBOR, RequestArgs, RequestOptions, assert_param_exists, encode_path_segment,
    },
};
use reqwest::Method;

pub fn tx_manager_history(
    config: &Configuration,
    query: &PagePagination,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    RequestArgs::builder(config, Method::GET, "/txmanager/history".to_string())
        .query(query)?
        .build(options)
}

pub fn tx_manager_state(
    config: &Configuration,
    tx_hash: Option<&str>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let tx_hash = assert_param_exists("tx_manager_state", "tx_hash", tx_hash)?;
    let path = format!("/txmanager/{}/state", encode_path_segment(tx_hash));

    RequestArgs::builder(config, Method::GET, path).build(options)
}

fn submit_args(
    operation: &'static str,
    path: &str,
    config: &Configuration,
    payload: Option<TxPayload>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let payload = assert_param_exists(operation, "payload", payload)?;
    let body = payload.into_bytes()?;

    RequestArgs::builder(config, Method::POST, path.to_string())
        .bytes(body, CONTENT_TYPE_CBOR)
        .build(options)
}

pub fn submit_tx(
    config: &Configuration,
    payload: Option<TxPayload>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    submit_args("submit_tx", "/txmanager", config, payload, options)
}

pub fn turbo_submit_tx(
    config: &Configuration,
    payload: Option<TxPayload>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    submit_args(
        "turbo_submit_tx",
        "/txmanager/turbosubmit",
        config,
        payload,
        options,
    )
}

pub struct TxManager<'a> {
    pub(crate) inner: &'a ApiClient,
    options: RequestOptions,
}

impl ApiClient {
    pub fn tx_manager(&self) -> TxManager<'_> {
        TxManager {
            inner: self,
            options: RequestOptions::default(),
        }
    }
}

impl TxManager<'_> {
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn history(&self, query: &PagePagination) -> ApiResult<Vec<serde_json::Value>> {
        let args = tx_manager_history(&self.inner.config, query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn state(&self, tx_hash: &str) -> ApiResult<serde_json::Value> {
        let args = tx_manager_state(&self.inner.config, Some(tx_hash), &self.options)?;

        self.inner.execute_json(args).await
    }

    /// Submits a transaction and returns its hash as reported by the service.
    pub async fn submit(&self, payload: impl Into<TxPayload>) -> ApiResult<String> {
        let args = submit_tx(&self.inner.config, Some(payload.into()), &self.options)?;

        self.inner.execute_text(args).await
    }

    pub async fn turbo_submit(&self, payload: impl Into<TxPayload>) -> ApiResult<String> {
        let args = turbo_submit_tx(&self.inner.config, Some(payload.into()), &self.options)?;

        self.inner.execute_text(args).await
    }
}
