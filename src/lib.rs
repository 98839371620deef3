//! Async client for a Cardano blockchain-data REST API.
//!
//! ```no_run
//! use cardano_data_client::{ApiClient, Configuration, Network};
//!
//! #[tokio::main]
//! async fn main() -> cardano_data_client::ApiResult<()> {
//!     let client = ApiClient::new(Configuration::new(Network::Mainnet, "my-api-key"))?;
//!     let tip = client.general().chain_tip().await?;
//!     println!("{}", tip.data);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod client;
pub mod logging;

pub use client::{ApiClient, dispatch_json, dispatch_text};
pub use common::{
    config::Configuration,
    errors::{ApiResult, ClientError},
    helpers::TxPayload,
    pagination::{CursorPagination, Order, PagePagination},
    request::{RequestArgs, RequestBody, RequestOptions},
    types::{Network, PaginatedResponse, TimestampedResponse},
};
