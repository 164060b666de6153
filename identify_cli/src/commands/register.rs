//! The `register` subcommand.

use clap::Args;
use identify_api::types::AuthResponse;
use identify_api::Client;

use crate::output::{print_call_result, OutputFormat};

#[derive(Args)]
pub struct RegisterArgs {
    /// Public nickname
    #[arg(long)]
    pub nickname: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long, env = "IDENTIFY_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(args: &RegisterArgs, client: &Client, format: &OutputFormat) -> bool {
    let result = client
        .register(&args.nickname, &args.email, &args.password)
        .await;

    if let Some(token) = result
        .data()
        .and_then(AuthResponse::from_payload)
        .and_then(|auth| auth.token)
    {
        tracing::info!("Registered {}; token issued ({} chars)", args.nickname, token.len());
    }

    print_call_result(&result, format);
    result.is_success()
}
