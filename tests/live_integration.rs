use std::fs;

use serde::Deserialize;
use tinder_http::{TinderClient, TinderError, TOKEN_ENV_VAR};

#[derive(Debug, Deserialize)]
struct SecretsFile {
    #[serde(rename = "TINDER_AUTH_TOKEN")]
    tinder_auth_token: Option<String>,
}

fn load_live_token() -> Result<String, String> {
    if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
        if !token.trim().is_empty() {
            return Ok(token);
        }
    }

    let content = fs::read_to_string("secrets.json")
        .map_err(|_| format!("{TOKEN_ENV_VAR} env or secrets.json is required"))?;
    let parsed: SecretsFile = serde_json::from_str(&content)
        .map_err(|err| format!("secrets.json could not be parsed: {err}"))?;
    parsed
        .tinder_auth_token
        .ok_or_else(|| format!("missing {TOKEN_ENV_VAR} in secrets.json"))
}

#[tokio::test]
async fn live_read_only_calls() {
    let token = match load_live_token() {
        Ok(token) => token,
        Err(_) => {
            eprintln!("skipping live test: token not found in env or secrets.json");
            return;
        }
    };

    let client = TinderClient::new(token).expect("client must build");

    let first = client.profile().await;
    if let Err(TinderError::Http { status: 401, .. }) = first {
        eprintln!("skipping live test: token rejected");
        return;
    }
    let first = first.expect("profile must succeed");
    let second = client.profile().await.expect("profile must succeed");
    assert_eq!(first.get("_id"), second.get("_id"));

    client.meta_v2().await.expect("meta must succeed");
}
