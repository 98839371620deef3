use crate::client::ApiClient;
use common::{
    config::Configuration,
    errors::ApiResult,
    pagination::{CursorPagination, Order},
    request::{RequestArgs, RequestOptions, assert_param_exists, encode_path_segment},
    types::{PaginatedResponse, TimestampedResponse},
};
use reqwest::Method;
use serde::Serialize;

/// Query of the asset and policy transaction listings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetTxsQuery {
    /// Only return transactions at or above this block height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_height: Option<u64>,
    #[serde(flatten)]
    pub pagination: CursorPagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetUpdatesQuery {
    #[serde(flatten)]
    pub pagination: CursorPagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

/// `asset` is the policy ID concatenated with the hex-encoded asset name.
fn asset_path(operation: &'static str, asset: Option<&str>, suffix: &str) -> ApiResult<String> {
    let asset = assert_param_exists(operation, "asset", asset)?;

    Ok(format!("/assets/{}{suffix}", encode_path_segment(asset)))
}

fn policy_path(operation: &'static str, policy: Option<&str>, suffix: &str) -> ApiResult<String> {
    let policy = assert_param_exists(operation, "policy", policy)?;

    Ok(format!("/assets/policy/{}{suffix}", encode_path_segment(policy)))
}

pub fn asset_info(
    config: &Configuration,
    asset: Option<&str>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = asset_path("asset_info", asset, "")?;

    RequestArgs::builder(config, Method::GET, path).build(options)
}

pub fn asset_addresses(
    config: &Configuration,
    asset: Option<&str>,
    query: &CursorPagination,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = asset_path("asset_addresses", asset, "/addresses")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub fn asset_txs(
    config: &Configuration,
    asset: Option<&str>,
    query: &AssetTxsQuery,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = asset_path("asset_txs", asset, "/txs")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub fn asset_updates(
    config: &Configuration,
    asset: Option<&str>,
    query: &AssetUpdatesQuery,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = asset_path("asset_updates", asset, "/updates")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub fn asset_utxos(
    config: &Configuration,
    asset: Option<&str>,
    query: &CursorPagination,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = asset_path("asset_utxos", asset, "/utxos")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub fn policy_info(
    config: &Configuration,
    policy: Option<&str>,
    query: &CursorPagination,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = policy_path("policy_info", policy, "")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub fn policy_addresses(
    config: &Configuration,
    policy: Option<&str>,
    query: &CursorPagination,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = policy_path("policy_addresses", policy, "/addresses")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub fn policy_txs(
    config: &Configuration,
    policy: Option<&str>,
    query: &AssetTxsQuery,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = policy_path("policy_txs", policy, "/txs")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub fn policy_utxos(
    config: &Configuration,
    policy: Option<&str>,
    query: &CursorPagination,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = policy_path("policy_utxos", policy, "/utxos")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub struct Assets<'a> {
    pub(crate) inner: &'a ApiClient,
    options: RequestOptions,
}

impl ApiClient {
    pub fn assets(&self) -> Assets<'_> {
        Assets {
            inner: self,
            options: RequestOptions::default(),
        }
    }
}

impl Assets<'_> {
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn info(&self, asset: &str) -> ApiResult<TimestampedResponse> {
        let args = asset_info(&self.inner.config, Some(asset), &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn addresses(
        &self,
        asset: &str,
        query: &CursorPagination,
    ) -> ApiResult<PaginatedResponse> {
        let args = asset_addresses(&self.inner.config, Some(asset), query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn txs(&self, asset: &str, query: &AssetTxsQuery) -> ApiResult<PaginatedResponse> {
        let args = asset_txs(&self.inner.config, Some(asset), query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn updates(
        &self,
        asset: &str,
        query: &AssetUpdatesQuery,
    ) -> ApiResult<PaginatedResponse> {
        let args = asset_updates(&self.inner.config, Some(asset), query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn utxos(
        &self,
        asset: &str,
        query: &CursorPagination,
    ) -> ApiResult<PaginatedResponse> {
        let args = asset_utxos(&self.inner.config, Some(asset), query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn policy_info(
        &self,
        policy: &str,
        query: &CursorPagination,
    ) -> ApiResult<PaginatedResponse> {
        let args = policy_info(&self.inner.config, Some(policy), query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn policy_addresses(
        &self,
        policy: &str,
        query: &CursorPagination,
    ) -> ApiResult<PaginatedResponse> {
        let args = policy_addresses(&self.inner.config, Some(policy), query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn policy_txs(
        &self,
        policy: &str,
        query: &AssetTxsQuery,
    ) -> ApiResult<PaginatedResponse> {
        let args = policy_txs(&self.inner.config, Some(policy), query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn policy_utxos(
        &self,
        policy: &str,
        query: &CursorPagination,
    ) -> ApiResult<PaginatedResponse> {
        let args = policy_utxos(&self.inner.config, Some(policy), query, &self.options)?;

        self.inner.execute_json(args).await
    }
}
