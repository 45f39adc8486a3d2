// crates/auction-cli/src/main.rs
// ============================================================================
// Module: Auction CLI Entry Point
// Description: Command dispatcher for canned auction API requests.
// Purpose: Provide a scriptable way to issue the four auction calls.
// Dependencies: auction-client, auction-contract, clap, thiserror, tokio
// ============================================================================

//! ## Overview
//! The `auction` binary wraps the four auction endpoints as subcommands.
//! Configuration comes from the environment (`URL`, `SELLER`, `BUYER`) with
//! development defaults. The tool does not interpret the HTTP outcome: any
//! completed call prints the raw response body and exits zero, leaving status
//! interpretation to the caller. Only usage and transport errors exit
//! non-zero.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use auction_client::AuctionClient;
use auction_contract::types::AuctionRequest;
use auction_contract::types::BidRequest;
use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use thiserror::Error;
use time::macros::datetime;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Environment variable for the API base URL.
const URL_ENV: &str = "URL";
/// Environment variable for the seller principal header value.
const SELLER_ENV: &str = "SELLER";
/// Environment variable for the buyer principal header value.
const BUYER_ENV: &str = "BUYER";
/// API base used when `URL` is unset.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
/// Development seller payload (`{"sub":"a1","name":"Test","u_typ":"0"}`);
/// an illustrative identity, overridden via `SELLER` for real deployments.
const DEFAULT_SELLER: &str = "eyJzdWIiOiJhMSIsICJuYW1lIjoiVGVzdCIsICJ1X3R5cCI6IjAifQo=";
/// Development buyer payload (`{"sub":"a2","name":"Buyer","u_typ":"0"}`);
/// overridden via `BUYER`.
const DEFAULT_BUYER: &str = "eyJzdWIiOiJhMiIsICJuYW1lIjoiQnV5ZXIiLCAidV90eXAiOiIwIn0K";
/// Per-request timeout for every invocation.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Auction id used by the sample creation payload unless overridden.
const DEFAULT_AUCTION_ID: i64 = 1;

/// Environment-sourced settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EnvConfig {
    /// API base URL.
    base_url: String,
    /// Seller principal header value, used by `create-auction`.
    seller: String,
    /// Buyer principal header value, used by `place-bid`.
    buyer: String,
}

/// Loads settings from the environment, falling back to defaults.
fn load_env_config() -> Result<EnvConfig, CliError> {
    Ok(EnvConfig {
        base_url: read_env(URL_ENV)?.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        seller: read_env(SELLER_ENV)?.unwrap_or_else(|| DEFAULT_SELLER.to_string()),
        buyer: read_env(BUYER_ENV)?.unwrap_or_else(|| DEFAULT_BUYER.to_string()),
    })
}

/// Reads an environment variable, rejecting non-UTF-8 and empty values.
fn read_env(name: &str) -> Result<Option<String>, CliError> {
    let Some(raw) = std::env::var_os(name) else {
        return Ok(None);
    };
    let value = raw
        .into_string()
        .map_err(|_| CliError::new(format!("{name} must be valid UTF-8")))?;
    if value.trim().is_empty() {
        return Err(CliError::new(format!("{name} must not be empty")));
    }
    Ok(Some(value))
}

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "auction", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the sample auction as the seller and print the response.
    CreateAuction(CreateAuctionCommand),
    /// Place a bid on an auction as the buyer and print the response.
    PlaceBid(PlaceBidCommand),
    /// Fetch one auction and print the response.
    ShowAuction(ShowAuctionCommand),
    /// List all auctions and print the response.
    ListAuctions,
}

/// Arguments for `create-auction`.
#[derive(Args, Debug)]
struct CreateAuctionCommand {
    /// Auction id for the sample payload (defaults to 1).
    #[arg(long, value_name = "ID")]
    id: Option<i64>,
}

/// Arguments for `place-bid`.
#[derive(Args, Debug)]
struct PlaceBidCommand {
    /// Target auction id.
    #[arg(value_name = "AUCTION_ID")]
    auction_id: i64,
    /// Bid amount in the auction currency.
    #[arg(value_name = "AMOUNT")]
    amount: i64,
}

/// Arguments for `show-auction`.
#[derive(Args, Debug)]
struct ShowAuctionCommand {
    /// Target auction id.
    #[arg(value_name = "AUCTION_ID")]
    auction_id: i64,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying a human-readable message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("auction {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let env = load_env_config()?;
    let client = AuctionClient::new(&env.base_url, REQUEST_TIMEOUT)
        .map_err(|err| CliError::new(err.to_string()))?;

    let response = match command {
        Commands::CreateAuction(command) => {
            let request = sample_auction_request(command.id.unwrap_or(DEFAULT_AUCTION_ID));
            client.create_auction(&request, &env.seller).await
        }
        Commands::PlaceBid(command) => {
            let request = BidRequest {
                amount: command.amount,
            };
            client.place_bid(command.auction_id, &request, &env.buyer).await
        }
        Commands::ShowAuction(command) => client.get_auction(command.auction_id).await,
        Commands::ListAuctions => client.list_auctions().await,
    }
    .map_err(|err| CliError::new(err.to_string()))?;

    // The call completed; the body speaks for itself, whatever the status.
    write_stdout_line(response.body())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Payloads
// ============================================================================

/// Builds the fixed example creation payload with the given id.
fn sample_auction_request(id: i64) -> AuctionRequest {
    AuctionRequest {
        id,
        starts_at: datetime!(2018-01-01 10:00 UTC),
        ends_at: datetime!(2019-01-01 10:00 UTC),
        title: "First auction".to_string(),
        currency: "VAC".to_string(),
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Prints the top-level help text.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

/// Writes one line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes one line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output-stream failure.
fn output_error(stream: &str, err: &std::io::Error) -> String {
    format!("failed to write to {stream}: {err}")
}

/// Reports an error on stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
