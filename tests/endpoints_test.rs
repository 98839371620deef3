mod common;

mod tests {
    use crate::common::{
        API_KEY, client_for, initialize_logging,
        mock_api::{MockApi, last_updated},
    };
    use axum::http::{Method, StatusCode};
    use cardano_data_client::{
        ClientError, CursorPagination, Order, PagePagination, RequestOptions,
        api::{
            accounts::{self, AccountAssetsQuery},
            pools::PoolEpochQuery,
            transactions::{OutputReference, TxoQuery},
        },
        dispatch_json,
    };
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    const STAKE_ADDR: &str = "stake1u9ylzsgxaa6xctf4juup682ar3juj85n8tx3hthnljg47zctvm3rc";

    #[tokio::test]
    #[ntest::timeout(30_000)]
    async fn test_account_info_round_trip() {
        initialize_logging();

        let mock = MockApi::timestamped(json!({ "stake_address": STAKE_ADDR })).await;
        let client = client_for(&mock.url);

        let response = client.accounts().info(STAKE_ADDR).await.unwrap();

        assert_eq!(response.data["stake_address"], STAKE_ADDR);
        assert_eq!(response.last_updated.block_slot, 123456789);

        let request = mock.single_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, format!("/v1/accounts/{STAKE_ADDR}"));
        assert_eq!(request.query, None);
        assert_eq!(request.header("api-key"), Some(API_KEY));
        assert!(request.body.is_empty());
    }

    #[tokio::test]
    #[ntest::timeout(30_000)]
    async fn test_path_segment_is_percent_encoded_on_the_wire() {
        initialize_logging();

        let mock = MockApi::timestamped(json!({})).await;
        let client = client_for(&mock.url);

        client.accounts().info("stake/odd id").await.unwrap();

        assert_eq!(mock.single_request().path, "/v1/accounts/stake%2Fodd%20id");
    }

    #[tokio::test]
    #[ntest::timeout(30_000)]
    async fn test_paginated_listing_with_cursor() {
        initialize_logging();

        let mock = MockApi::json(json!({
            "data": [{ "unit": "lovelace" }, { "unit": "abcd" }],
            "last_updated": last_updated(),
            "next_cursor": "page-2"
        }))
        .await;
        let client = client_for(&mock.url);

        let query = AccountAssetsQuery {
            policy: Some("abcd".to_string()),
            pagination: CursorPagination::new(2),
        };
        let page = client.accounts().assets(STAKE_ADDR, &query).await.unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.next_cursor.as_deref(), Some("page-2"));

        let next = query.pagination.next(page.next_cursor.as_deref()).unwrap();
        assert_eq!(next.cursor, Some(Some("page-2".to_string())));

        let request = mock.single_request();
        assert_eq!(request.path, format!("/v1/accounts/{STAKE_ADDR}/assets"));
        assert_eq!(request.query.as_deref(), Some("policy=abcd&count=2"));
    }

    #[tokio::test]
    #[ntest::timeout(30_000)]
    async fn test_pool_history_query() {
        initialize_logging();

        let mock = MockApi::json(json!({ "data": [], "last_updated": last_updated() })).await;
        let client = client_for(&mock.url);

        let query = PoolEpochQuery {
            epoch_no: Some(450),
            pagination: CursorPagination {
                count: Some(5),
                cursor: Some(None),
            },
            order: Some(Order::Desc),
        };
        let page = client.pools().history("pool1xyz", &query).await.unwrap();

        assert_eq!(page.next_cursor, None);

        let request = mock.single_request();
        assert_eq!(request.path, "/v1/pools/pool1xyz/history");
        assert_eq!(
            request.query.as_deref(),
            Some("epoch_no=450&count=5&cursor=null&order=desc")
        );
    }

    #[tokio::test]
    #[ntest::timeout(30_000)]
    async fn test_tx_manager_history_page_pagination() {
        initialize_logging();

        let mock = MockApi::json(json!([{ "tx_hash": "aa", "state": "Onchain" }])).await;
        let client = client_for(&mock.url);

        let query = PagePagination {
            count: Some(20),
            page: Some(3),
        };
        let history = client.tx_manager().history(&query).await.unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(
            mock.single_request().query.as_deref(),
            Some("count=20&page=3")
        );
    }

    #[tokio::test]
    #[ntest::timeout(30_000)]
    async fn test_datums_lookup_posts_json() {
        initialize_logging();

        let mock = MockApi::timestamped(json!({ "aa": { "bytes": "d87980" } })).await;
        let client = client_for(&mock.url);

        let hashes = vec!["aa".to_string(), "bb".to_string()];
        client.datum().lookup_many(&hashes).await.unwrap();

        let request = mock.single_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/v1/datums");
        assert_eq!(request.header("content-type"), Some("application/json"));

        let body: Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body, json!(["aa", "bb"]));
    }

    #[tokio::test]
    #[ntest::timeout(30_000)]
    async fn test_outputs_by_refs() {
        initialize_logging();

        let mock = MockApi::json(json!({ "data": [], "last_updated": last_updated() })).await;
        let client = client_for(&mock.url);

        let refs = vec![OutputReference::new("aa", 0), OutputReference::new("bb", 1)];
        let query = TxoQuery {
            resolve_datums: Some(true),
            with_cbor: None,
        };
        client.transactions().outputs(&refs, &query).await.unwrap();

        let request = mock.single_request();
        assert_eq!(request.path, "/v1/transactions/outputs");
        assert_eq!(request.query.as_deref(), Some("resolve_datums=true"));

        let body: Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body, json!(["aa#0", "bb#1"]));
    }

    #[tokio::test]
    #[ntest::timeout(30_000)]
    async fn test_per_call_headers_override_defaults() {
        initialize_logging();

        let mock = MockApi::timestamped(json!({})).await;
        let client = client_for(&mock.url);

        let options = RequestOptions::default()
            .with_header("api-key", "override-key")
            .unwrap()
            .with_header("x-request-id", "42")
            .unwrap();
        client
            .general()
            .with_options(options)
            .chain_tip()
            .await
            .unwrap();

        let request = mock.single_request();
        assert_eq!(request.path, "/v1/chain-tip");
        assert_eq!(request.header("api-key"), Some("override-key"));
        assert_eq!(request.header("x-request-id"), Some("42"));
    }

    #[tokio::test]
    #[ntest::timeout(30_000)]
    async fn test_http_errors_surface_unmodified() {
        initialize_logging();

        let body = r#"{"error":"Not Found","message":"The requested component has not been found."}"#;
        let mock = MockApi::failing(StatusCode::NOT_FOUND, body).await;
        let client = client_for(&mock.url);

        let err = client.blocks().info("999999999").await.unwrap_err();

        match err {
            ClientError::Status { status, body: received } => {
                assert_eq!(status, 404);
                assert_eq!(received, body);
            },
            other => panic!("expected a status error, got {other:?}"),
        }
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    #[ntest::timeout(30_000)]
    async fn test_unreachable_server_is_an_http_error() {
        initialize_logging();

        let client = client_for("http://127.0.0.1:1");

        let err = client.epochs().current().await.unwrap_err();

        assert!(matches!(err, ClientError::Http(_)));
        assert!(!err.is_client_side());
    }

    #[tokio::test]
    #[ntest::timeout(30_000)]
    async fn test_builder_then_explicit_dispatch() {
        initialize_logging();

        let mock = MockApi::timestamped(json!({ "epoch_no": 500 })).await;
        let client = client_for("http://unused.invalid");

        let args = accounts::account_info(client.config(), Some(STAKE_ADDR), &RequestOptions::default())
            .unwrap();

        // Building alone never reaches the server.
        assert!(mock.requests().is_empty());

        let base_path = format!("{}/other-base", mock.url);
        let response: Value = dispatch_json(args, client.http_client(), &base_path)
            .await
            .unwrap();

        assert_eq!(response["data"]["epoch_no"], 500);
        assert_eq!(
            mock.single_request().path,
            format!("/other-base/accounts/{STAKE_ADDR}")
        );
    }

    #[tokio::test]
    #[ntest::timeout(30_000)]
    async fn test_missing_parameter_sends_nothing() {
        initialize_logging();

        let mock = MockApi::timestamped(json!({})).await;
        let client = client_for(&mock.url);

        let err = accounts::account_info(client.config(), None, &RequestOptions::default())
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::RequiredParameter {
                operation: "account_info",
                field: "stake_addr"
            }
        ));
        assert!(mock.requests().is_empty());
    }
}
