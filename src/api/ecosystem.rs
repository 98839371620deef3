use crate::client::ApiClient;
use common::{
    config::Configuration,
    errors::ApiResult,
    request::{RequestArgs, RequestOptions, assert_param_exists, encode_path_segment},
    types::TimestampedResponse,
};
use reqwest::Method;

/// Resolves an ADA Handle (without the leading `$`) to its current address.
pub fn ada_handle_resolve(
    config: &Configuration,
    handle: Option<&str>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let handle = assert_param_exists("ada_handle_resolve", "handle", handle)?;
    let path = format!("/ecosystem/adahandle/{}", encode_path_segment(handle));

    RequestArgs::builder(config, Method::GET, path).build(options)
}

pub struct Ecosystem<'a> {
    pub(crate) inner: &'a ApiClient,
    options: RequestOptions,
}

impl ApiClient {
    pub fn ecosystem(&self) -> Ecosystem<'_> {
        Ecosystem {
            inner: self,
            options: RequestOptions::default(),
        }
    }
}

impl Ecosystem<'_> {
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn ada_handle(&self, handle: &str) -> ApiResult<TimestampedResponse> {
        let args = ada_handle_resolve(&self.inner.config, Some(handle), &self.options)?;

        self.inner.execute_json(args).await
    }
}
