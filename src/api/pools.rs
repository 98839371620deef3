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

/// Query of the per-epoch pool listings (minted blocks, history).
#[derive(Debug, Clone, Default, Serialize)]
pub struct PoolEpochQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch_no: Option<u64>,
    #[serde(flatten)]
    pub pagination: CursorPagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

fn pool_path(operation: &'static str, pool_id: Option<&str>, suffix: &str) -> ApiResult<String> {
    let pool_id = assert_param_exists(operation, "pool_id", pool_id)?;

    Ok(format!("/pools/{}/{suffix}", encode_path_segment(pool_id)))
}

pub fn list_pools(
    config: &Configuration,
    query: &CursorPagination,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    RequestArgs::builder(config, Method::GET, "/pools".to_string())
        .query(query)?
        .build(options)
}

pub fn pool_blocks(
    config: &Configuration,
    pool_id: Option<&str>,
    query: &PoolEpochQuery,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = pool_path("pool_blocks", pool_id, "blocks")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub fn pool_delegators(
    config: &Configuration,
    pool_id: Option<&str>,
    query: &CursorPagination,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = pool_path("pool_delegators", pool_id, "delegators")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub fn pool_history(
    config: &Configuration,
    pool_id: Option<&str>,
    query: &PoolEpochQuery,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = pool_path("pool_history", pool_id, "history")?;

    RequestArgs::builder(config, Method::GET, path)
        .query(query)?
        .build(options)
}

pub fn pool_info(
    config: &Configuration,
    pool_id: Option<&str>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = pool_path("pool_info", pool_id, "info")?;

    RequestArgs::builder(config, Method::GET, path).build(options)
}

pub fn pool_metadata(
    config: &Configuration,
    pool_id: Option<&str>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = pool_path("pool_metadata", pool_id, "metadata")?;

    RequestArgs::builder(config, Method::GET, path).build(options)
}

pub fn pool_relays(
    config: &Configuration,
    pool_id: Option<&str>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = pool_path("pool_relays", pool_id, "relays")?;

    RequestArgs::builder(config, Method::GET, path).build(options)
}

pub fn pool_updates(
    config: &Configuration,
    pool_id: Option<&str>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let path = pool_path("pool_updates", pool_id, "updates")?;

    RequestArgs::builder(config, Method::GET, path).build(options)
}

pub struct Pools<'a> {
    pub(crate) inner: &'a ApiClient,
    options: RequestOptions,
}

impl ApiClient {
    pub fn pools(&self) -> Pools<'_> {
        Pools {
            inner: self,
            options: RequestOptions::default(),
        }
    }
}

impl Pools<'_> {
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn list(&self, query: &CursorPagination) -> ApiResult<PaginatedResponse> {
        let args = list_pools(&self.inner.config, query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn blocks(
        &self,
        pool_id: &str,
        query: &PoolEpochQuery,
    ) -> ApiResult<PaginatedResponse> {
        let args = pool_blocks(&self.inner.config, Some(pool_id), query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn delegators(
        &self,
        pool_id: &str,
        query: &CursorPagination,
    ) -> ApiResult<PaginatedResponse> {
        let args = pool_delegators(&self.inner.config, Some(pool_id), query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn history(
        &self,
        pool_id: &str,
        query: &PoolEpochQuery,
    ) -> ApiResult<PaginatedResponse> {
        let args = pool_history(&self.inner.config, Some(pool_id), query, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn info(&self, pool_id: &str) -> ApiResult<TimestampedResponse> {
        let args = pool_info(&self.inner.config, Some(pool_id), &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn metadata(&self, pool_id: &str) -> ApiResult<TimestampedResponse> {
        let args = pool_metadata(&self.inner.config, Some(pool_id), &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn relays(&self, pool_id: &str) -> ApiResult<TimestampedResponse> {
        let args = pool_relays(&self.inner.config, Some(pool_id), &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn updates(&self, pool_id: &str) -> ApiResult<TimestampedResponse> {
        let args = pool_updates(&self.inner.config, Some(pool_id), &self.options)?;

        self.inner.execute_json(args).await
    }
}
