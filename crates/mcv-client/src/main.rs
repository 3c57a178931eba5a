//! `mcv` command-line tool for the MediaConvert control-plane API.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mcv_client::{MediaConvertClient, MediaConvertConfig};
use mcv_models::operations::{
    CancelJobRequest, CreateJobRequest, DescribeEndpointsRequest, GetJobRequest, GetQueueRequest,
    ListQueuesRequest, ListTagsForResourceRequest,
};
use mcv_models::{JobStatus, Validate};

/// Inspect and manage MediaConvert jobs and queues.
#[derive(Parser)]
#[command(name = "mcv")]
#[command(about = "Inspect and manage MediaConvert jobs and queues")]
#[command(version)]
struct Cli {
    /// Account endpoint; discovered with DescribeEndpoints when omitted
    #[arg(long, global = true, env = "MEDIACONVERT_ENDPOINT")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the account-specific API endpoint
    Endpoints,
    /// List jobs, optionally filtered by status
    ListJobs {
        #[arg(value_parser = parse_status)]
        status: Option<JobStatus>,
    },
    /// Show one job
    GetJob { id: String },
    /// Cancel a job that has not finished
    CancelJob { id: String },
    /// List queues
    ListQueues,
    /// Show one queue
    GetQueue { name: String },
    /// List the tags on a queue, preset or job template
    Tags { arn: String },
    /// Check a CreateJob request body offline
    Validate { file: PathBuf },
    /// Print the JSON schema of a CreateJob request body
    Schema,
}

fn parse_status(s: &str) -> Result<JobStatus, mcv_models::ParseEnumError> {
    s.parse()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install rustls crypto provider (required for TLS/HTTPS)
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    // Load environment variables
    dotenvy::dotenv().ok();

    // Colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("mcv_client=info".parse()?)
        .add_directive("hyper=warn".parse()?);

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Validate { file } => validate_file(&file),
        Command::Schema => print_json(&schemars::schema_for!(CreateJobRequest)),
        command => run_remote(command, cli.endpoint).await,
    }
}

async fn run_remote(command: Command, endpoint: Option<String>) -> anyhow::Result<()> {
    let mut config = MediaConvertConfig::from_env()?;
    if let Some(endpoint) = endpoint {
        config = config.with_endpoint(endpoint);
    }
    let has_endpoint = config.endpoint.is_some();
    let client = MediaConvertClient::new(config)?;

    if let Command::Endpoints = command {
        return print_json(&client.describe_endpoints(&DescribeEndpointsRequest::new()).await?);
    }

    let client = if has_endpoint {
        client
    } else {
        client.with_discovered_endpoint().await?
    };
    info!(endpoint = %client.base_url(), "Using MediaConvert endpoint");

    match command {
        Command::ListJobs { status } => print_json(&client.list_all_jobs(status).await?),
        Command::GetJob { id } => print_json(&client.get_job(&GetJobRequest::new().with_id(id)).await?),
        Command::CancelJob { id } => {
            client.cancel_job(&CancelJobRequest::new().with_id(id.clone())).await?;
            info!(job_id = %id, "Job cancelled");
            Ok(())
        }
        Command::ListQueues => print_json(&client.list_queues(&ListQueuesRequest::new()).await?),
        Command::GetQueue { name } => {
            print_json(&client.get_queue(&GetQueueRequest::new().with_name(name)).await?)
        }
        Command::Tags { arn } => print_json(
            &client
                .list_tags_for_resource(&ListTagsForResourceRequest::new().with_arn(arn))
                .await?,
        ),
        Command::Endpoints | Command::Validate { .. } | Command::Schema => Ok(()),
    }
}

fn validate_file(path: &Path) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let request: CreateJobRequest = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a valid CreateJob body", path.display()))?;

    if let Err(errors) = request.validate() {
        bail!("{} failed validation:\n{}", path.display(), errors);
    }

    println!("{}: OK", path.display());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
