//! The `login` subcommand.

use clap::Args;
use identify_api::types::IdentifierKind;
use identify_api::Client;

use crate::output::{print_call_result, OutputFormat};

#[derive(Args)]
pub struct LoginArgs {
    /// Email address or nickname
    #[arg(long)]
    pub identifier: String,

    /// Account password
    #[arg(long, env = "IDENTIFY_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(args: &LoginArgs, client: &Client, format: &OutputFormat) -> bool {
    tracing::info!("Logging in by {}", IdentifierKind::of(&args.identifier));

    let result = client.login(&args.identifier, &args.password).await;
    print_call_result(&result, format);
    result.is_success()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn rejected_login_reports_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/login"))
            .and(body_json(json!({"identifier": "alice", "password": "wrong-password"})))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "invalid credentials"})),
            )
            .mount(&mock_server)
            .await;

        let client = Client::new(&mock_server.uri()).unwrap();
        let args = LoginArgs {
            identifier: "alice".to_string(),
            password: "wrong-password".to_string(),
        };
        assert!(!run(&args, &client, &OutputFormat::Json).await);
    }
}
