use crate::{ApiClient, api::transactions::OutputReference};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use common::{
    config::{Configuration, FileConfig},
    errors::{ApiResult, ClientError},
    helpers::TxPayload,
    types::{LogLevel, Network},
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

#[derive(Parser, Debug, Clone)]
#[command(author,
          name = "cardano-data-client",
          bin_name = "cardano-data-client",
          version,
          about,
          long_about = None)]
pub struct Args {
    #[arg(long, env = "CARDANO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "CARDANO_API_NETWORK")]
    pub network: Option<Network>,

    /// Overrides the network preset, e.g. for a self-hosted gateway
    #[arg(long, env = "CARDANO_API_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long, env = "CARDANO_API_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    #[arg(long, help = "Path to an existing configuration file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Latest block known to the indexer
    ChainTip,
    Account {
        stake_addr: String,
    },
    Asset {
        asset: String,
    },
    /// Block by hash or height, or `latest`
    Block {
        hash_or_height: String,
    },
    Tx {
        tx_hash: String,
    },
    /// Transaction output as `<tx_hash>#<index>`
    Txo {
        output_ref: String,
    },
    Pool {
        pool_id: String,
    },
    /// Epoch details; the current epoch when no number is given
    Epoch {
        epoch_no: Option<u64>,
    },
    /// Submit a transaction given as hex, or as a file holding hex or raw CBOR
    Submit {
        tx: String,
        #[arg(long)]
        turbo: bool,
    },
}

fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cardano-data-client").join("config.toml"))
}

impl Args {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Layers the command line and environment over the config file, if any.
    pub fn configuration(&self) -> ApiResult<Configuration> {
        let config_path = self
            .config
            .clone()
            .or_else(|| get_config_path().filter(|path| path.exists()));

        let file = match config_path {
            Some(path) => {
                debug!(path = %path.display(), "loading config file");
                FileConfig::from_toml_file(path)?
            },
            None => FileConfig::default(),
        };

        let base_url = match (&self.base_url, self.network) {
            (Some(base_url), _) => Some(base_url.clone()),
            // an explicit network beats a base URL from the file
            (None, Some(_)) => None,
            (None, None) => file.base_url,
        };

        let merged = FileConfig {
            api_key: self.api_key.clone().unwrap_or(file.api_key),
            network: self.network.or(file.network),
            base_url,
            timeout_secs: self.timeout_secs.or(file.timeout_secs),
            headers: file.headers,
        };

        if merged.api_key.is_empty() {
            return Err(ClientError::Config(
                "--api-key must be set (or CARDANO_API_KEY, or api_key in the config file)".into(),
            ));
        }

        merged.try_into()
    }
}

fn parse_output_ref(output_ref: &str) -> Result<OutputReference> {
    let (tx_hash, index) = output_ref
        .split_once('#')
        .context("output reference must look like <tx_hash>#<index>")?;
    let index = index
        .parse()
        .with_context(|| format!("invalid output index: {index}"))?;

    Ok(OutputReference::new(tx_hash, index))
}

fn read_payload(tx: &str) -> Result<TxPayload> {
    let path = Path::new(tx);

    if path.is_file() {
        let contents = std::fs::read(path)
            .with_context(|| format!("failed to read transaction file {}", path.display()))?;

        Ok(TxPayload::from_file_contents(&contents))
    } else {
        Ok(TxPayload::Hex(tx.to_string()))
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run(args: Args) -> Result<()> {
    let config = args.configuration()?;
    let client = ApiClient::new(config)?;

    debug!(command = ?args.command, "running command");

    match args.command {
        Command::ChainTip => print_json(&client.general().chain_tip().await?),
        Command::Account { stake_addr } => print_json(&client.accounts().info(&stake_addr).await?),
        Command::Asset { asset } => print_json(&client.assets().info(&asset).await?),
        Command::Block { hash_or_height } if hash_or_height == "latest" => {
            print_json(&client.blocks().latest().await?)
        },
        Command::Block { hash_or_height } => {
            print_json(&client.blocks().info(&hash_or_height).await?)
        },
        Command::Tx { tx_hash } => print_json(&client.transactions().info(&tx_hash).await?),
        Command::Txo { output_ref } => {
            let output_ref = parse_output_ref(&output_ref)?;
            let txo = client
                .transactions()
                .output(&output_ref.tx_hash, output_ref.index, &Default::default())
                .await?;

            print_json(&txo)
        },
        Command::Pool { pool_id } => print_json(&client.pools().info(&pool_id).await?),
        Command::Epoch { epoch_no: Some(epoch_no) } => {
            print_json(&client.epochs().info(epoch_no).await?)
        },
        Command::Epoch { epoch_no: None } => print_json(&client.epochs().current().await?),
        Command::Submit { tx, turbo } => {
            let payload = read_payload(&tx)?;
            let tx_manager = client.tx_manager();

            let tx_hash = if turbo {
                tx_manager.turbo_submit(payload).await?
            } else {
                tx_manager.submit(payload).await?
            };

            println!("{tx_hash}");
            Ok(())
        },
    }
}
