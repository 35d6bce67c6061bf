//! CLI for draftlink.
//!
//! `invoke` runs one handler invocation: fetch draft -> link keyword ->
//! update draft -> publish. `transform` applies the link rule offline.

use clap::{Args, Parser, Subcommand};
use draftlink_api::RetryPolicy;
use draftlink_core::{DraftlinkError, LinkRule};
use draftlink_handler::{HandlerConfig, InvocationEvent};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "draftlink", version, about = "Link keywords in a draft article and publish it")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the handler once against the content API.
    Invoke {
        #[arg(long, env = "DRAFTLINK_API_BASE_URL")]
        base_url: String,

        #[arg(long, env = "DRAFTLINK_API_TOKEN", hide_env_values = true)]
        token: String,

        /// Gateway event JSON file; stdin when neither this nor --body is given.
        #[arg(long, conflicts_with = "body")]
        event: Option<PathBuf>,

        /// Raw request body, e.g. '{"articleId":"abc"}'.
        #[arg(long)]
        body: Option<String>,

        #[arg(long, env = "DRAFTLINK_MAX_RETRIES", default_value_t = 3)]
        max_retries: u32,

        #[arg(long, env = "DRAFTLINK_BASE_DELAY_MS", default_value_t = 1000)]
        base_delay_ms: u64,

        /// Per-request HTTP timeout.
        #[arg(long, env = "DRAFTLINK_TIMEOUT_MS", default_value_t = 3000)]
        timeout_ms: u64,

        #[command(flatten)]
        link: LinkArgs,

        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Apply the link rule to a draft revision without any network calls.
    Transform {
        /// Draft revision JSON file; stdin when absent.
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[command(flatten)]
        link: LinkArgs,

        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

#[derive(Args, Debug)]
struct LinkArgs {
    #[arg(long, env = "DRAFTLINK_KEYWORD", default_value = draftlink_core::types::DEFAULT_KEYWORD)]
    keyword: String,

    #[arg(long, env = "DRAFTLINK_HREF", default_value = draftlink_core::types::DEFAULT_HREF)]
    href: String,
}

impl LinkArgs {
    fn into_rule(self) -> Result<LinkRule, DraftlinkError> {
        LinkRule::new(self.keyword, self.href)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries only the JSON result.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Invoke {
            base_url,
            token,
            event,
            body,
            max_retries,
            base_delay_ms,
            timeout_ms,
            link,
            pretty,
        } => {
            let event = match (body, event) {
                (Some(body), _) => InvocationEvent { body: Some(body) },
                (None, path) => serde_json::from_str(&read_input(path.as_deref())?)?,
            };

            let mut config = HandlerConfig::new(base_url, token);
            config.timeout = Duration::from_millis(timeout_ms);
            config.retry = RetryPolicy::new(max_retries, Duration::from_millis(base_delay_ms));
            config.link_rule = link.into_rule()?;
            let handler = config.build()?;

            let response = handler.handle(&event).await;
            tracing::info!(status = response.status_code, "invocation finished");
            print_json(&serde_json::to_value(&response)?, pretty)?;
        }
        Commands::Transform { file, link, pretty } => {
            let rule = link.into_rule()?;
            let draft: serde_json::Value = serde_json::from_str(&read_input(file.as_deref())?)?;
            let processed = draftlink_core::process_article(&draft, &rule);
            print_json(&processed, pretty)?;
        }
    }

    Ok(())
}

/// Read a file, or all of stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String, DraftlinkError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn print_json(value: &serde_json::Value, pretty: bool) -> serde_json::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
