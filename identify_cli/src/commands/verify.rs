//! The `verify` subcommand.

use clap::Args;
use identify_api::Client;

use crate::output::{print_call_result, OutputFormat};

#[derive(Args)]
pub struct VerifyArgs {
    /// Token returned by `login` or `register`
    #[arg(long, env = "IDENTIFY_TOKEN", hide_env_values = true)]
    pub token: String,
}

pub async fn run(args: &VerifyArgs, client: &Client, format: &OutputFormat) -> bool {
    let result = client.verify(&args.token).await;
    print_call_result(&result, format);
    result.is_success()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn valid_token_succeeds() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/verify"))
            .and(header("Authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_string("true"))
            .mount(&mock_server)
            .await;

        let client = Client::new(&mock_server.uri()).unwrap();
        let args = VerifyArgs {
            token: "tok-123".to_string(),
        };
        assert!(run(&args, &client, &OutputFormat::Table).await);
    }

    #[tokio::test]
    async fn unreachable_server_fails() {
        let client = Client::new("").unwrap();
        let args = VerifyArgs {
            token: "tok-123".to_string(),
        };
        assert!(!run(&args, &client, &OutputFormat::Json).await);
    }
}
