//! Substrate chain query command line entry point.
//!
//! This binary opens a query session against a node, runs a single query and prints
//! the result as JSON on stdout. Logs go to stderr.
//!
//! # Flow
//! 1. Resolves the node endpoint from `--url` or a configured network (`--network`)
//! 2. Opens a session, which loads the metadata of the node's current runtime
//! 3. Runs the requested subcommand and prints its result

use std::{collections::HashMap, path::Path, str::FromStr};

use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};
use dotenvy::dotenv;
use serde_json::{json, Value};
use subxt::utils::H256;
use tracing::error;

use substrate_query::{
	models::{ConfigLoader, Network},
	services::blockchain::{SubstrateSession, WsConnector},
	utils::logging::setup_logging,
};

fn build_cli() -> Command {
	Command::new("substrate-query")
		.version(env!("CARGO_PKG_VERSION"))
		.about("Query blocks, accounts and fees from a Substrate-based chain node.")
		.subcommand_required(true)
		.arg(
			Arg::new("url")
				.long("url")
				.help("WebSocket endpoint of the node (ws:// or wss://)")
				.value_name("URL")
				.global(true),
		)
		.arg(
			Arg::new("network")
				.long("network")
				.help("Slug of a configured network to connect to")
				.value_name("NETWORK_SLUG")
				.conflicts_with("url")
				.global(true),
		)
		.arg(
			Arg::new("config-dir")
				.long("config-dir")
				.help("Directory holding network configurations (default: config/networks)")
				.value_name("PATH")
				.global(true),
		)
		.arg(
			Arg::new("prefix")
				.long("prefix")
				.help("SS58 address prefix, overrides the one declared by the runtime")
				.value_name("PREFIX")
				.value_parser(clap::value_parser!(u16))
				.global(true),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level when RUST_LOG is unset (trace, debug, info, warn, error)")
				.value_name("LEVEL")
				.global(true),
		)
		.subcommand(Command::new("runtime").about("Show the node's runtime identity"))
		.subcommand(Command::new("genesis").about("Show the genesis block hash"))
		.subcommand(
			Command::new("block")
				.about("Show a block by height or hash")
				.arg(
					Arg::new("height")
						.long("height")
						.value_name("HEIGHT")
						.value_parser(clap::value_parser!(u64)),
				)
				.arg(Arg::new("hash").long("hash").value_name("HASH"))
				.group(
					ArgGroup::new("target")
						.args(["height", "hash"])
						.required(true),
				)
				.arg(
					Arg::new("tx-hashes")
						.long("tx-hashes")
						.help("Include the transaction hash of every extrinsic")
						.action(ArgAction::SetTrue),
				),
		)
		.subcommand(
			Command::new("account")
				.about("Show nonce and balances of an account")
				.arg(Arg::new("address").value_name("ADDRESS").required(true)),
		)
		.subcommand(
			Command::new("fee")
				.about("Estimate the partial fee of an encoded extrinsic")
				.arg(Arg::new("extrinsic").value_name("EXTRINSIC_HEX").required(true))
				.arg(Arg::new("parent-hash").value_name("PARENT_HASH").required(true)),
		)
}

/// Resolves the network to connect to from the command line
fn resolve_network(matches: &ArgMatches) -> Result<Network> {
	if let Some(url) = matches.get_one::<String>("url") {
		let network = Network {
			slug: "custom".to_string(),
			name: "Custom".to_string(),
			rpc_url: url.clone(),
			address_prefix: None,
			connection_timeout_ms: None,
			message_timeout_ms: None,
		};
		network.validate().map_err(|e| anyhow!(e))?;
		return Ok(network);
	}

	let slug = matches
		.get_one::<String>("network")
		.ok_or_else(|| anyhow!("Either --url or --network must be given"))?;
	let config_dir = matches.get_one::<String>("config-dir").map(Path::new);

	let networks: HashMap<String, Network> =
		Network::load_all(config_dir).context("Failed to load network configurations")?;
	networks
		.into_values()
		.find(|network| &network.slug == slug)
		.ok_or_else(|| anyhow!("Network '{}' is not configured", slug))
}

async fn run_query(session: &SubstrateSession<WsConnector>, matches: &ArgMatches) -> Result<Value> {
	match matches.subcommand() {
		Some(("runtime", _)) => {
			let runtime = session
				.runtime_identity()
				.await
				.ok_or_else(|| anyhow!("Runtime identity unavailable"))?;
			Ok(json!({
				"chain": runtime.chain_name,
				"specVersion": runtime.spec_version,
				"transactionVersion": runtime.transaction_version,
				"addressPrefix": session.address_prefix().await,
			}))
		}
		Some(("genesis", _)) => Ok(json!({ "genesisHash": session.get_genesis_hash().await? })),
		Some(("block", args)) => {
			let summary = match args.get_one::<u64>("height") {
				Some(height) => session.get_block_by_height(*height).await?,
				None => {
					let hash = args
						.get_one::<String>("hash")
						.ok_or_else(|| anyhow!("--height or --hash is required"))?;
					let hash = H256::from_str(hash)
						.map_err(|e| anyhow!("Invalid block hash '{}': {}", hash, e))?;
					session.get_block_by_hash(hash).await?
				}
			};

			let mut output = serde_json::to_value(&summary)?;
			if args.get_flag("tx-hashes") {
				output["extrinsicHashes"] = json!(summary.extrinsic_hashes()?);
			}
			Ok(output)
		}
		Some(("account", args)) => {
			let address = args
				.get_one::<String>("address")
				.ok_or_else(|| anyhow!("ADDRESS is required"))?;
			let info = session.get_account_info(address).await?;
			Ok(json!({
				"address": address,
				"nonce": info.nonce,
				"consumers": info.consumers,
				"providers": info.providers,
				"sufficients": info.sufficients,
				// u128 balances exceed JSON's safe integer range
				"free": info.data.free.to_string(),
				"reserved": info.data.reserved.to_string(),
				"frozen": info.data.frozen.to_string(),
			}))
		}
		Some(("fee", args)) => {
			let extrinsic = args
				.get_one::<String>("extrinsic")
				.ok_or_else(|| anyhow!("EXTRINSIC_HEX is required"))?;
			let parent_hash = args
				.get_one::<String>("parent-hash")
				.ok_or_else(|| anyhow!("PARENT_HASH is required"))?;
			let fee = session.get_partial_fee(extrinsic, parent_hash).await?;
			Ok(json!({ "partialFee": fee }))
		}
		Some((other, _)) => Err(anyhow!("Unknown subcommand '{}'", other)),
		None => Err(anyhow!("A subcommand is required")),
	}
}

/// Main entry point for the query client.
///
/// # Errors
/// Returns an error if the endpoint cannot be resolved, the session cannot be opened
/// or the query fails.
#[tokio::main]
async fn main() -> Result<()> {
	let matches = build_cli().get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	let log_level = matches.get_one::<String>("log-level").map(String::as_str);
	if let Err(e) = setup_logging(log_level) {
		eprintln!("Failed to setup logging: {}", e);
	}

	let network = resolve_network(&matches)?;
	let session = SubstrateSession::from_network(&network)
		.await
		.map_err(|e| {
			error!("Failed to open session: {}", e);
			e
		})?;

	if let Some(prefix) = matches.get_one::<u16>("prefix") {
		session.set_address_prefix(*prefix).await;
	}

	let output = run_query(&session, &matches).await?;
	println!("{}", serde_json::to_string_pretty(&output)?);

	Ok(())
}
