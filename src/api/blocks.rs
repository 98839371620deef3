use crate::client::ApiClient;
use common::{
    config::Configuration,
    errors::ApiResult,
    request::{RequestArgs, RequestOptions, assert_param_exists, encode_path_segment},
    types::TimestampedResponse,
};
use reqwest::Method;

/// `hash_or_height` is either a block hash or a block height.
pub fn block_info(
    config: &Configuration,
    hash_or_height: Option<&str>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let hash_or_height = assert_param_exists("block_info", "hash_or_height", hash_or_height)?;
    let path = format!("/blocks/{}", encode_path_segment(hash_or_height));

    RequestArgs::builder(config, Method::GET, path).build(options)
}

pub fn block_latest(config: &Configuration, options: &RequestOptions) -> ApiResult<RequestArgs> {
    RequestArgs::builder(config, Method::GET, "/blocks/latest".to_string()).build(options)
}

pub struct Blocks<'a> {
    pub(crate) inner: &'a ApiClient,
    options: RequestOptions,
}

impl ApiClient {
    pub fn blocks(&self) -> Blocks<'_> {
        Blocks {
            inner: self,
            options: RequestOptions::default(),
        }
    }
}

impl Blocks<'_> {
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn info(&self, hash_or_height: &str) -> ApiResult<TimestampedResponse> {
        let args = block_info(&self.inner.config, Some(hash_or_height), &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn latest(&self) -> ApiResult<TimestampedResponse> {
        let args = block_latest(&self.inner.config, &self.options)?;

        self.inner.execute_json(args).await
    }
}
