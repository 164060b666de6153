mod commands;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use identify_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "identify")]
#[command(about = "Check availability, register, log in and verify tokens against the IDentify API")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL, e.g. http://localhost:8080
    #[arg(long, env = "IDENTIFY_API_URL", default_value = "", global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether an email address is still free
    CheckEmail(commands::check::CheckEmailArgs),
    /// Check whether a nickname is still free
    CheckNickname(commands::check::CheckNicknameArgs),
    /// Create an account
    Register(commands::register::RegisterArgs),
    /// Log in with an email address or nickname
    Login(commands::login::LoginArgs),
    /// Verify a token
    Verify(commands::verify::VerifyArgs),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // A missing .env file is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("identify=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let client = Client::new(&cli.base_url)?;

    let succeeded = match &cli.command {
        Commands::CheckEmail(args) => commands::check::run_email(args, &client, &format).await,
        Commands::CheckNickname(args) => {
            commands::check::run_nickname(args, &client, &format).await
        }
        Commands::Register(args) => commands::register::run(args, &client, &format).await,
        Commands::Login(args) => commands::login::run(args, &client, &format).await,
        Commands::Verify(args) => commands::verify::run(args, &client, &format).await,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
