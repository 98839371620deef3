use crate::client::ApiClient;
use common::{
    config::Configuration,
    errors::ApiResult,
    request::{RequestArgs, RequestOptions, assert_param_exists, encode_path_segment},
    types::{PaginatedResponse, TimestampedResponse},
};
use reqwest::Method;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TxoQuery {
    /// Include the datum body for outputs that only carry a datum hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_datums: Option<bool>,
    /// Include the CBOR encoding of each output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_cbor: Option<bool>,
}

/// Reference to a transaction output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputReference {
    pub tx_hash: String,
    pub index: u32,
}

impl OutputReference {
    pub fn new(tx_hash: impl Into<String>, index: u32) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            index,
        }
    }
}

impl std::fmt::Display for OutputReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.tx_hash, self.index)
    }
}

fn tx_path(operation: &'static str, tx_hash: Option<&str>) -> ApiResult<String> {
    let tx_hash = assert_param_exists(operation, "tx_hash", tx_hash)?;

    Ok(format!("/transactions/{}", encode_path_segment(tx_hash)))
}

fn output_path(
    operation: &'static str,
    tx_hash: Option<&str>,
    index: Option<u32>,
    suffix: &str,
) -> ApiResult<String> {
    let tx_path = tx_path(operation, tx_hash)?;
    let index = assert_param_exists(operation, "index", index)?;

    Ok(format!("{tx_path}/outputs/{index}/{suffix}"))
}

pub fn tx_info(
    config: &Configuration,
    tx_hash: Option<&str>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = tx_path("tx_info", tx_hash)?;

    RequestArgs::builder(config, Method::GET, path).build(options)
}

pub fn tx_cbor(
    config: &Configuration,
    tx_hash: Option<&str>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = format!("{}/cbor", tx_path("tx_cbor", tx_hash)?);

    RequestArgs::builder(config, Method::GET, path).build(options)
}

pub fn tx_address(
    config: &Configuration,
    tx_hash: Option<&str>,
    index: Option<u32>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = output_path("tx_address", tx_hash, index, "address")?;

    RequestArgs::builder(config, Method::GET, path).build(options)
}

pub fn tx_utxo(
    config: &Configuration,
    tx_hash: Option<&str>,
    index: Option<u32>,
    query: &TxoQuery,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = output_path("tx_utxo", tx_hash, index, "txo")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

/// Looks up several outputs at once. The body is a JSON array of
/// `"{tx_hash}#{index}"` strings.
pub fn txos_by_refs(
    config: &Configuration,
    output_refs: Option<&[OutputReference]>,
    query: &TxoQuery,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let output_refs = assert_param_exists("txos_by_refs", "output_refs", output_refs)?;
    let body: Vec<String> = output_refs.iter().map(ToString::to_string).collect();

    RequestArgs::builder(config, Method::POST, "/transactions/outputs".to_string())
        .query(query)?
        .json(&body)?
        .build(options)
}

pub struct Transactions<'a> {
    pub(crate) inner: &'a ApiClient,
    options: RequestOptions,
}

impl ApiClient {
    pub fn transactions(&self) -> Transactions<'_> {
        Transactions {
            inner: self,
            options: RequestOptions::default(),
        }
    }
}

impl Transactions<'_> {
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn info(&self, tx_hash: &str) -> ApiResult<TimestampedResponse> {
        let args = tx_info(&self.inner.config, Some(tx_hash), &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn cbor(&self, tx_hash: &str) -> ApiResult<TimestampedResponse> {
        let args = tx_cbor(&self.inner.config, Some(tx_hash), &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn output_address(&self, tx_hash: &str, index: u32) -> ApiResult<TimestampedResponse> {
        let args = tx_address(&self.inner.config, Some(tx_hash), Some(index), &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn output(
        &self,
        tx_hash: &str,
        index: u32,
        query: &TxoQuery,
    ) -> ApiResult<TimestampedResponse> {
        let args = tx_utxo(
            &self.inner.config,
            Some(tx_hash),
            Some(index),
            query,
            &self.options,
        )?;

        self.inner.execute_json(args).await
    }

    pub async fn outputs(
        &self,
        output_refs: &[OutputReference],
        query: &TxoQuery,
    ) -> ApiResult<PaginatedResponse> {
        let args = txos_by_refs(&self.inner.config, Some(output_refs), query, &self.options)?;

        self.inner.execute_json(args).await
    }
}
