use serde::Deserialize;
use serde_json::{Value, json};

use crate::state::AppState;

/// Inbound update payload, pared down to the parts the bot reads.
/// Updates that don't carry a message (or an edited one) are
/// acknowledged and dropped.
#[derive(Debug, Deserialize)]
pub struct Update {
    pub message: Option<Message>,
    pub edited_message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

impl Update {
    /// New or edited message, whichever is present.
    pub fn content(&self) -> Option<&Message> {
        self.message.as_ref().or(self.edited_message.as_ref())
    }
}

/// Best-effort sendMessage call. A failure is returned for logging
/// only; there is no retry or outbox.
pub async fn send_message(
    state: &AppState,
    chat_id: i64,
    text: &str,
) -> Result<(), reqwest::Error> {
    let payload = json!({
        "chat_id": chat_id,
        "text": text,
        "parse_mode": "Markdown",
        "disable_web_page_preview": true,
    });
    let response = state
        .http
        .post(format!("{}/sendMessage", state.config.telegram_api_base()))
        .json(&payload)
        .send()
        .await?;

    let body: Value = response.json().await?;
    if body.get("ok").and_then(Value::as_bool) != Some(true) {
        tracing::error!("telegram rejected sendMessage: {body}");
    }
    Ok(())
}

/// Register the webhook once at startup. Skipped with a warning when
/// PUBLIC_URL is not configured; a failure is logged and the service
/// starts anyway.
pub async fn register_webhook(state: &AppState) {
    let Some(url) = state.config.webhook_url() else {
        tracing::warn!("PUBLIC_URL not set; skipping webhook registration");
        return;
    };

    let payload = json!({
        "url": url,
        "allowed_updates": ["message", "edited_message"],
    });
    let result = state
        .http
        .post(format!("{}/setWebhook", state.config.telegram_api_base()))
        .json(&payload)
        .send()
        .await;

    match result {
        Ok(response) => match response.json::<Value>().await {
            Ok(body) if body.get("ok").and_then(Value::as_bool) == Some(true) => {
                tracing::info!("webhook registered at {url}");
            }
            Ok(body) => tracing::error!("failed to set webhook: {body}"),
            Err(err) => tracing::error!("failed to read setWebhook response: {err}"),
        },
        Err(err) => tracing::error!("error setting webhook on startup: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_message_update_deserializes() {
        let update: Update = serde_json::from_str(
            r#"{"update_id": 7, "message": {"chat": {"id": 42, "type": "private"}, "text": "/start"}}"#,
        )
        .expect("valid update");
        let message = update.content().expect("has a message");
        assert_eq!(message.chat.id, 42);
        assert_eq!(message.text.as_deref(), Some("/start"));
    }

    #[test]
    fn edited_message_is_used_when_message_is_absent() {
        let update: Update = serde_json::from_str(
            r#"{"edited_message": {"chat": {"id": 9}, "text": "123456789"}}"#,
        )
        .expect("valid update");
        assert_eq!(update.content().expect("edited").chat.id, 9);
    }

    #[test]
    fn unrelated_update_shapes_deserialize_to_no_content() {
        let update: Update =
            serde_json::from_str(r#"{"update_id": 1, "channel_post": {"id": 5}}"#)
                .expect("valid update");
        assert!(update.content().is_none());
    }

    #[test]
    fn message_without_text_is_still_addressable() {
        let update: Update =
            serde_json::from_str(r#"{"message": {"chat": {"id": 3}, "photo": []}}"#)
                .expect("valid update");
        let message = update.content().expect("has a message");
        assert_eq!(message.text, None);
    }
}
