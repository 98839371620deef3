use crate::client::ApiClient;
use common::{
    config::Configuration,
    errors::ApiResult,
    request::{RequestArgs, RequestOptions, assert_param_exists, encode_path_segment},
    types::TimestampedResponse,
};
use reqwest::Method;

pub fn lookup_datum(
    config: &Configuration,
    datum_hash: Option<&str>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let datum_hash = assert_param_exists("lookup_datum", "datum_hash", datum_hash)?;
    let path = format!("/datums/{}", encode_path_segment(datum_hash));

    RequestArgs::builder(config, Method::GET, path).build(options)
}

/// Resolves several datums at once; the body is a JSON array of hashes.
pub fn lookup_datums(
    config: &Configuration,
    datum_hashes: Option<&[String]>,
    options: &RequestOptions,
) -> ApiResult<RequestArgs> {
    let datum_hashes = assert_param_exists("lookup_datums", "datum_hashes", datum_hashes)?;

    RequestArgs::builder(config, Method::POST, "/datums".to_string())
        .json(datum_hashes)?
        .build(options)
}

pub struct Datum<'a> {
    pub(crate) inner: &'a ApiClient,
    options: RequestOptions,
}

impl ApiClient {
    pub fn datum(&self) -> Datum<'_> {
        Datum {
            inner: self,
            options: RequestOptions::default(),
        }
    }
}

impl Datum<'_> {
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn lookup(&self, datum_hash: &str) -> ApiResult<TimestampedResponse> {
        let args = lookup_datum(&self.inner.config, Some(datum_hash), &self.options)?;

        self.inner.execute_json(args).await
    }

    pub async fn lookup_many(&self, datum_hashes: &[String]) -> ApiResult<TimestampedResponse> {
        let args = lookup_datums(&self.inner.config, Some(datum_hashes), &self.options)?;

        self.inner.execute_json(args).await
    }
}
