//! The `check-email` and `check-nickname` subcommands.

use clap::Args;
use identify_api::Client;

use crate::output::{print_availability, Availability, OutputFormat};

#[derive(Args)]
pub struct CheckEmailArgs {
    /// Email address to look up
    pub email: String,
}

#[derive(Args)]
pub struct CheckNicknameArgs {
    /// Nickname to look up
    pub nickname: String,
}

/// Returns whether the email is available.
pub async fn run_email(args: &CheckEmailArgs, client: &Client, format: &OutputFormat) -> bool {
    let available = client.check_email(&args.email).await;
    report("email", &args.email, available, format)
}

/// Returns whether the nickname is available.
pub async fn run_nickname(
    args: &CheckNicknameArgs,
    client: &Client,
    format: &OutputFormat,
) -> bool {
    let available = client.check_nickname(&args.nickname).await;
    report("nickname", &args.nickname, available, format)
}

fn report(field: &str, value: &str, available: bool, format: &OutputFormat) -> bool {
    print_availability(
        &Availability {
            field: field.to_string(),
            value: value.to_string(),
            available,
        },
        format,
    );
    available
}
