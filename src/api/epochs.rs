use crate::client::ApiClient;
use common::{
    config::Configuration,
    errors::ApiResult,
    request::{RequestArgs, RequestOptions, assert_param_exists},
    types::TimestampedResponse,
};
use reqwest::Method;

pub fn current_epoch(config: &Configuration, options: &RequestOptions) -> ApiResult<RequestArgs> {
    RequestArgs::builder(config, Method::GET, "/epochs/current".to_string()).build(options)
}

pub fn epoch_info(
    config: &Configuration,
    epoch_no: Option<u64>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let epoch_no = assert_param_exists("epoch_info", "epoch_no", epoch_no)?;
    let path = format!("/epochs/{epoch_no}/info");

    RequestArgs::builder(config, Method::GET, path).build(options)
}

pub struct Epochs<'a> {
    pub(crate) inner: &'a ApiClient,
    options: RequestOptions,
}

impl ApiClient {
    pub fn epochs(&self) -> Epochs<'_> {
        Epochs {
            inner: self,
            options: RequestOptions::default(),
        }
    }
}

impl Epochs<'_> {
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn current(&self) -> ApiResult<TimestampedResponse> {
        let args = current_epoch(&self.inner.config, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn info(&self, epoch_no: u64) -> ApiResult<TimestampedResponse> {
        let args = epoch_info(&self.inner.config, Some(epoch_no), &self.options)?;

        self.inner.execute_json(args).await
    }
}
