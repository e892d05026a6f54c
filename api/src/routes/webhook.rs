use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use scout_core::{Command, PlayerSummary};

use crate::error::AppError;
use crate::state::AppState;
use crate::telegram::{self, Update};
use crate::upstream;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/webhook/{secret}/test", get(webhook_test))
        .route("/webhook/{secret}", post(receive_update))
}

fn check_secret(state: &AppState, secret: &str) -> Result<(), AppError> {
    if secret == state.config.webhook_secret {
        Ok(())
    } else {
        Err(AppError::UnknownWebhookPath)
    }
}

async fn webhook_test(
    State(state): State<AppState>,
    Path(secret): Path<String>,
) -> Result<&'static str, AppError> {
    check_secret(&state, &secret)?;
    Ok("webhook path ok")
}

// Any parseable body that is not update-shaped (arrays, scalars,
// objects without a message) is acknowledged without action; only an
// unparseable body is rejected at the boundary.
fn parse_update(payload: Value) -> Option<Update> {
    serde_json::from_value(payload).ok()
}

async fn receive_update(
    State(state): State<AppState>,
    Path(secret): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, AppError> {
    check_secret(&state, &secret)?;

    let ack = Json(json!({ "ok": true }));
    let Some(update) = parse_update(payload) else {
        return Ok(ack);
    };
    let Some(message) = update.content() else {
        return Ok(ack);
    };
    let chat_id = message.chat.id;
    let text = message.text.as_deref().unwrap_or("");

    let command = Command::parse(text, &state.config.default_server);
    tracing::info!(chat_id, ?command, "update received");

    let reply = match command {
        None => help_text(&state.config.default_server),
        Some(Command::Start) => greeting(&state.config.default_server),
        Some(Command::Check { uid, server }) => {
            match upstream::fetch_player(&state, &uid, &server).await {
                Ok(document) => PlayerSummary::build(&document).render(),
                Err(err) => format!("⚠️ Error: {err}"),
            }
        }
    };

    // Best effort: a lost reply is logged, never retried, and must not
    // make Telegram re-deliver the update.
    if let Err(err) = telegram::send_message(&state, chat_id, &reply).await {
        tracing::error!(chat_id, "failed to deliver reply: {err}");
    }

    Ok(ack)
}

fn help_text(default_server: &str) -> String {
    format!(
        "Hi! Send a player UID to get info.\n\n\
         Commands:\n\
         • `/check <uid> [server]` — server default: {default_server}\n\
         Example: `/check 123456789 {default_server}`\n\n\
         Servers: try `sg`, `in`, `br` (default: {default_server})"
    )
}

fn greeting(default_server: &str) -> String {
    format!(
        "Welcome! Send a player UID or use `/check <uid> [server]` \
         (default server: {default_server})."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn state() -> AppState {
        AppState::new(Config {
            telegram_token: "123:abc".to_string(),
            webhook_secret: "s3cret".to_string(),
            public_url: None,
            default_server: "sg".to_string(),
            upstream_base: "http://localhost:1".to_string(),
            port: 8000,
        })
    }

    #[test]
    fn matching_secret_passes() {
        assert!(check_secret(&state(), "s3cret").is_ok());
    }

    #[test]
    fn wrong_secret_is_not_found() {
        assert!(matches!(
            check_secret(&state(), "nope"),
            Err(AppError::UnknownWebhookPath)
        ));
    }

    #[test]
    fn non_object_payloads_parse_to_no_update() {
        assert!(parse_update(json!(["not", "an", "update"])).is_none());
        assert!(parse_update(json!("ping")).is_none());
        assert!(parse_update(json!(42)).is_none());
    }

    #[test]
    fn messageless_object_payloads_carry_no_content() {
        let update = parse_update(json!({"update_id": 1, "channel_post": {"id": 5}}))
            .expect("object payloads parse");
        assert!(update.content().is_none());
    }

    #[test]
    fn help_names_the_configured_default_server() {
        let text = help_text("in");
        assert!(text.contains("server default: in"));
        assert!(text.contains("/check 123456789 in"));
    }
}
