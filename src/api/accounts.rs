use crate::client::ApiClient;
use common::{
    config::Configuration,
    errors::ApiResult,
    pagination::CursorPagination,
    request::{RequestArgs, RequestOptions, assert_param_exists, encode_path_segment},
    types::{PaginatedResponse, TimestampedResponse},
};
use reqwest::Method;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountAssetsQuery {
    /// Restrict to assets of a single minting policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
    #[serde(flatten)]
    pub pagination: CursorPagination,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountHistoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch_no: Option<u64>,
    #[serde(flatten)]
    pub pagination: CursorPagination,
}

fn account_path(operation: &'static str, stake_addr: Option<&str>, suffix: &str) -> ApiResult<String> {
    let stake_addr = assert_param_exists(operation, "stake_addr", stake_addr)?;

    Ok(format!("/accounts/{}{suffix}", encode_path_segment(stake_addr)))
}

pub fn account_info(
    config: &Configuration,
    stake_addr: Option<&str>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = account_path("account_info", stake_addr, "")?;

    RequestArgs::builder(config, Method::GET, path).build(options)
}

pub fn account_addresses(
    config: &Configuration,
    stake_addr: Option<&str>,
    query: &CursorPagination,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = account_path("account_addresses", stake_addr, "/addresses")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub fn account_assets(
    config: &Configuration,
    stake_addr: Option<&str>,
    query: &AccountAssetsQuery,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = account_path("account_assets", stake_addr, "/assets")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub fn account_history(
    config: &Configuration,
    stake_addr: Option<&str>,
    query: &AccountHistoryQuery,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = account_path("account_history", stake_addr, "/history")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub fn account_rewards(
    config: &Configuration,
    stake_addr: Option<&str>,
    query: &CursorPagination,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = account_path("account_rewards", stake_addr, "/rewards")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub fn account_updates(
    config: &Configuration,
    stake_addr: Option<&str>,
    query: &CursorPagination,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = account_path("account_updates", stake_addr, "/updates")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub struct Accounts<'a> {
    pub(crate) inner: &'a ApiClient,
    options: RequestOptions,
}

impl ApiClient {
    pub fn accounts(&self) -> Accounts<'_> {
        Accounts {
            inner: self,
            options: RequestOptions::default(),
        }
    }
}

impl Accounts<'_> {
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn info(&self, stake_addr: &str) -> ApiResult<TimestampedResponse> {
        let args = account_info(&self.inner.config, Some(stake_addr), &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn addresses(
        &self,
        stake_addr: &str,
        query: &CursorPagination,
    ) -> ApiResult<PaginatedResponse> {
        let args = account_addresses(&self.inner.config, Some(stake_addr), query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn assets(
        &self,
        stake_addr: &str,
        query: &AccountAssetsQuery,
    ) -> ApiResult<PaginatedResponse> {
        let args = account_assets(&self.inner.config, Some(stake_addr), query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn history(
        &self,
        stake_addr: &str,
        query: &AccountHistoryQuery,
    ) -> ApiResult<PaginatedResponse> {
        let args = account_history(&self.inner.config, Some(stake_addr), query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn rewards(
        &self,
        stake_addr: &str,
        query: &CursorPagination,
    ) -> ApiResult<PaginatedResponse> {
        let args = account_rewards(&self.inner.config, Some(stake_addr), query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn updates(
        &self,
        stake_addr: &str,
        query: &CursorPagination,
    ) -> ApiResult<PaginatedResponse> {
        let args = account_updates(&self.inner.config, Some(stake_addr), query, &self.options)?;

        self.inner.execute_json(args).await
    }
}
