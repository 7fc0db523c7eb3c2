use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gamification_twitter::{AppState, BrowserOpener, ConnectorConfig, PageRequest, Viewport};

#[derive(Debug, Parser)]
#[command(name = "twitter-connector", about = "Administer the gamification Twitter connector")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage the Twitter bearer token stored on the server
    #[command(subcommand)]
    Token(TokenCommand),
    /// Manage watched Twitter accounts
    #[command(subcommand)]
    Account(AccountCommand),
    /// List watched tweets
    Tweets(PageArgs),
    /// Enable or disable a gamification event for a watched account
    EventStatus {
        event_id: u64,
        account_id: u64,
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
    /// Open the Twitter OAuth page to link a user identity
    Oauth {
        #[arg(long, default_value_t = 1280.0)]
        width: f64,
        #[arg(long, default_value_t = 800.0)]
        height: f64,
    },
    /// List the registered admin components
    Components,
}

#[derive(Debug, Subcommand)]
enum TokenCommand {
    Status,
    Save { bearer_token: String },
    Delete,
}

#[derive(Debug, Subcommand)]
enum AccountCommand {
    Add { twitter_username: String },
    Delete { account_id: u64 },
    Get { account_id: u64 },
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        force_update: Option<bool>,
    },
}

#[derive(Debug, Args)]
struct PageArgs {
    #[arg(long, default_value_t = 0)]
    offset: u32,
    #[arg(long, default_value_t = 10)]
    limit: u32,
}

impl From<&PageArgs> for PageRequest {
    fn from(args: &PageArgs) -> Self {
        PageRequest::new(args.offset, args.limit)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gamification_twitter=info,twitter_connector=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let state = AppState::new(ConnectorConfig::from_env()?)?;

    info!(base_url = state.client.base_url(), "Using gamification connector API");

    match cli.command {
        Command::Token(TokenCommand::Status) => {
            print_json(&state.client.check_token_status().await?)?;
        }
        Command::Token(TokenCommand::Save { bearer_token }) => {
            state.client.save_bearer_token(&bearer_token).await?;
            info!("Bearer token saved");
        }
        Command::Token(TokenCommand::Delete) => {
            state.client.delete_bearer_token().await?;
            info!("Bearer token deleted");
        }
        Command::Account(AccountCommand::Add { twitter_username }) => {
            state.client.add_watched_account(&twitter_username).await?;
            info!(%twitter_username, "Account is now watched");
        }
        Command::Account(AccountCommand::Delete { account_id }) => {
            state.client.delete_watched_account(account_id).await?;
            info!(account_id, "Account is no longer watched");
        }
        Command::Account(AccountCommand::Get { account_id }) => {
            print_json(&state.client.get_watched_account(account_id).await?)?;
        }
        Command::Account(AccountCommand::List { page, force_update }) => {
            let accounts = state
                .client
                .list_watched_accounts((&page).into(), force_update)
                .await?;
            print_json(&accounts)?;
        }
        Command::Tweets(page) => {
            print_json(&state.client.list_watched_tweets((&page).into()).await?)?;
        }
        Command::EventStatus {
            event_id,
            account_id,
            enabled,
        } => {
            state
                .client
                .set_event_status(event_id, account_id, enabled)
                .await?;
            info!(event_id, account_id, enabled, "Event status updated");
        }
        Command::Oauth { width, height } => {
            let popup = state.connector.open_oauth_popup(
                &state.config.origin(),
                Viewport::new(width, height),
                &BrowserOpener,
            )?;
            info!(url = %popup.url, features = %popup.features(), "OAuth page opened");
        }
        Command::Components => {
            for name in state.components.names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}
