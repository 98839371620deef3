use crate::client::ApiClient;
use common::{
    config::Configuration,
    errors::ApiResult,
    request::{RequestArgs, RequestOptions},
    types::TimestampedResponse,
};
use reqwest::Method;

fn get(config: &Configuration, path: &str, options: &RequestOptions) -> ApiResult<RequestArgs> {
    RequestArgs::builder(config, Method::GET, path.to_string()).build(options)
}

pub fn chain_tip(config: &Configuration, options: &RequestOptions) -> ApiResult<RequestArgs> {
    get(config, "/chain-tip", options)
}

pub fn era_history(config: &Configuration, options: &RequestOptions) -> ApiResult<RequestArgs> {
    get(config, "/era-history", options)
}

pub fn protocol_params(config: &Configuration, options: &RequestOptions) -> ApiResult<RequestArgs> {
    get(config, "/protocol-parameters", options)
}

pub fn system_start(config: &Configuration, options: &RequestOptions) -> ApiResult<RequestArgs> {
    get(config, "/system-start", options)
}

/// Network-wide information that is not tied to a single resource.
pub struct General<'a> {
    pub(crate) inner: &'a ApiClient,
    options: RequestOptions,
}

impl ApiClient {
    pub fn general(&self) -> General<'_> {
        General {
            inner: self,
            options: RequestOptions::default(),
        }
    }
}

impl General<'_> {
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn chain_tip(&self) -> ApiResult<TimestampedResponse> {
        let args = chain_tip(&self.inner.config, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn era_history(&self) -> ApiResult<TimestampedResponse> {
        let args = era_history(&self.inner.config, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn protocol_params(&self) -> ApiResult<TimestampedResponse> {
        let args = protocol_params(&self.inner.config, &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn system_start(&self) -> ApiResult<TimestampedResponse> {
        let args = system_start(&self.inner.config, &self.options)?;

        self.inner.execute_json(args).await
    }
}
