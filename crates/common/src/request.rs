//! Request descriptors and the pieces every endpoint builder is made of:
//! required-parameter checks, path-segment encoding, query flattening and
//! header merging.

use crate::config::Configuration;
use crate::errors::{ApiResult, ClientError};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use url::form_urlencoded;

pub const API_KEY_HEADER: &str = "api-key";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_CBOR: &str = "application/cbor";

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Per-call overrides, also used as the base options of a [`Configuration`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn with_header(mut self, name: &str, value: &str) -> ApiResult<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;

        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Bytes(Vec<u8>),
}

/// A fully built request. `url` is the path plus query string, relative to the
/// configured base URL.
#[derive(Debug, Clone)]
pub struct RequestArgs {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
    pub timeout: Option<Duration>,
}

impl RequestArgs {
    pub fn builder(config: &Configuration, method: Method, path: String) -> RequestArgsBuilder<'_> {
        RequestArgsBuilder {
            config,
            method,
            path,
            query: String::new(),
            body: None,
            content_type: None,
        }
    }

    /// Path without the query string.
    pub fn path(&self) -> &str {
        self.url.split_once('?').map_or(self.url.as_str(), |(path, _)| path)
    }

    /// Query string without the leading `?`, empty when there is none.
    pub fn query(&self) -> &str {
        self.url.split_once('?').map_or("", |(_, query)| query)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub struct RequestArgsBuilder<'a> {
    config: &'a Configuration,
    method: Method,
    path: String,
    query: String,
    body: Option<RequestBody>,
    content_type: Option<&'static str>,
}

impl RequestArgsBuilder<'_> {
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> ApiResult<Self> {
        self.query = serialize_query(params)?;
        Ok(self)
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        self.content_type = Some(CONTENT_TYPE_JSON);
        Ok(self)
    }

    pub fn bytes(mut self, body: Vec<u8>, content_type: &'static str) -> Self {
        self.body = Some(RequestBody::Bytes(body));
        self.content_type = Some(content_type);
        self
    }

    pub fn build(self, options: &RequestOptions) -> ApiResult<RequestArgs> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            HeaderValue::from_str(self.config.api_key())?,
        );
        if let Some(content_type) = self.content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }

        // computed < configuration < per call
        merge_headers(&mut headers, &self.config.base_options().headers);
        merge_headers(&mut headers, &options.headers);

        let url = if self.query.is_empty() {
            self.path
        } else {
            format!("{}?{}", self.path, self.query)
        };

        Ok(RequestArgs {
            method: self.method,
            url,
            headers,
            body: self.body,
            timeout: options.timeout.or(self.config.base_options().timeout),
        })
    }
}

/// Fails with [`ClientError::RequiredParameter`] when a required parameter is
/// missing.
pub fn assert_param_exists<T>(
    operation: &'static str,
    field: &'static str,
    value: Option<T>,
) -> ApiResult<T> {
    value.ok_or(ClientError::RequiredParameter { operation, field })
}

/// Percent-encodes a single path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, URI_COMPONENT).to_string()
}

/// Serializes query parameters into a form-urlencoded string.
///
/// Nested objects become dotted keys, arrays become repeated keys and an
/// explicit `null` is sent as the literal `null`. Fields that should be left
/// out must be skipped at serialization time.
pub fn serialize_query<Q: Serialize + ?Sized>(params: &Q) -> ApiResult<String> {
    let value = serde_json::to_value(params)?;
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !value.is_null() {
        flatten_query(&mut serializer, &value, "");
    }

    Ok(serializer.finish())
}

fn flatten_query(serializer: &mut form_urlencoded::Serializer<String>, value: &Value, key: &str) {
    match value {
        Value::Object(map) => {
            for (field, nested) in map {
                let nested_key = if key.is_empty() {
                    field.clone()
                } else {
                    format!("{key}.{field}")
                };

                flatten_query(serializer, nested, &nested_key);
            }
        },
        Value::Array(items) => {
            for item in items {
                flatten_query(serializer, item, key);
            }
        },
        Value::String(s) => {
            serializer.append_pair(key, s);
        },
        Value::Null => {
            serializer.append_pair(key, "null");
        },
        scalar => {
            serializer.append_pair(key, &scalar.to_string());
        },
    }
}

fn merge_headers(target: &mut HeaderMap, overrides: &HeaderMap) {
    for name in overrides.keys() {
        target.remove(name);

        for value in overrides.get_all(name) {
            target.append(name.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn config() -> Configuration {
        Configuration::with_base_url("https://example.com/v1", "secret-key").unwrap()
    }

    #[rstest]
    #[case("stake1abc", "stake1abc")]
    #[case("a b", "a%20b")]
    #[case("a/b?c#d", "a%2Fb%3Fc%23d")]
    #[case("x=y&z", "x%3Dy%26z")]
    #[case("keep-_.!~*'()", "keep-_.!~*'()")]
    #[case("$handle", "%24handle")]
    #[case("ü", "%C3%BC")]
    fn test_encode_path_segment(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(encode_path_segment(input), expected);
    }

    #[rstest]
    #[case(json!(null), "")]
    #[case(json!({}), "")]
    #[case(json!({"count": 10, "cursor": "abc"}), "count=10&cursor=abc")]
    #[case(json!({"cursor": null}), "cursor=null")]
    #[case(json!({"with_cbor": true}), "with_cbor=true")]
    #[case(json!({"filter": {"epoch": 5, "pool": {"id": "p1"}}}), "filter.epoch=5&filter.pool.id=p1")]
    #[case(json!({"policy": ["a", "b", "c"]}), "policy=a&policy=b&policy=c")]
    #[case(json!({"q": "a b&c"}), "q=a+b%26c")]
    fn test_serialize_query(#[case] input: Value, #[case] expected: &str) {
        assert_eq!(serialize_query(&input).unwrap(), expected);
    }

    #[derive(Serialize)]
    struct Params {
        #[serde(skip_serializing_if = "Option::is_none")]
        count: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        order: Option<crate::pagination::Order>,
    }

    #[test]
    fn test_serialize_query_omits_absent_fields() {
        let params = Params {
            count: None,
            order: Some(crate::pagination::Order::Desc),
        };

        assert_eq!(serialize_query(&params).unwrap(), "order=desc");
    }

    #[test]
    fn test_assert_param_exists() {
        assert_eq!(assert_param_exists("op", "field", Some("v")).unwrap(), "v");

        let err = assert_param_exists::<&str>("account_info", "stake_addr", None).unwrap_err();
        assert!(matches!(
            err,
            ClientError::RequiredParameter {
                operation: "account_info",
                field: "stake_addr"
            }
        ));
    }

    #[test]
    fn test_build_sets_api_key_and_no_query() {
        let config = config();
        let args = RequestArgs::builder(&config, Method::GET, "/chain-tip".to_string())
            .build(&RequestOptions::default())
            .unwrap();

        assert_eq!(args.method, Method::GET);
        assert_eq!(args.url, "/chain-tip");
        assert_eq!(args.query(), "");
        assert_eq!(args.header("api-key"), Some("secret-key"));
        assert_eq!(args.header("content-type"), None);
        assert!(args.body.is_none());
    }

    #[test]
    fn test_build_json_body_sets_content_type() {
        let config = config();
        let args = RequestArgs::builder(&config, Method::POST, "/datums".to_string())
            .json(&["h1", "h2"])
            .unwrap()
            .build(&RequestOptions::default())
            .unwrap();

        assert_eq!(args.header("content-type"), Some(CONTENT_TYPE_JSON));
        assert_eq!(args.body, Some(RequestBody::Json(json!(["h1", "h2"]))));
    }

    #[test]
    fn test_header_precedence() {
        let config = Configuration::with_base_url("https://example.com", "computed-key")
            .unwrap()
            .with_header("api-key", "base-key")
            .unwrap()
            .with_header("x-trace", "base")
            .unwrap()
            .with_header("x-base-only", "1")
            .unwrap();

        let options = RequestOptions::default()
            .with_header("x-trace", "call")
            .unwrap()
            .with_header("content-type", "text/plain")
            .unwrap();

        let args = RequestArgs::builder(&config, Method::POST, "/txmanager".to_string())
            .bytes(vec![1, 2, 3], CONTENT_TYPE_CBOR)
            .build(&options)
            .unwrap();

        assert_eq!(args.header("api-key"), Some("base-key"));
        assert_eq!(args.header("x-trace"), Some("call"));
        assert_eq!(args.header("x-base-only"), Some("1"));
        assert_eq!(args.header("content-type"), Some("text/plain"));
    }

    #[test]
    fn test_timeout_precedence() {
        let config = config().with_timeout(Duration::from_secs(30));
        let builder = || RequestArgs::builder(&config, Method::GET, "/x".to_string());

        let args = builder().build(&RequestOptions::default()).unwrap();
        assert_eq!(args.timeout, Some(Duration::from_secs(30)));

        let options = RequestOptions::default().with_timeout(Duration::from_secs(2));
        let args = builder().build(&options).unwrap();
        assert_eq!(args.timeout, Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_path_and_query_accessors() {
        let config = config();
        let args = RequestArgs::builder(&config, Method::GET, "/pools".to_string())
            .query(&json!({"count": 2}))
            .unwrap()
            .build(&RequestOptions::default())
            .unwrap();

        assert_eq!(args.url, "/pools?count=2");
        assert_eq!(args.path(), "/pools");
        assert_eq!(args.query(), "count=2");
    }
}
