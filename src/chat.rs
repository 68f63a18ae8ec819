use serde_json::json;

use crate::http_client::http_client;

/// Hard cap enforced right before anything leaves for the chat service.
pub const HARD_CAP: usize = 1000;
/// Looser cap some call sites apply to long compound messages first.
pub const PRE_CAP: usize = 1500;

const CHAT_POST_URL: &str = "https://api.groupme.com/v3/bots/post";

/// Enforce the outbound size limit: over-long text keeps its first 997
/// characters and gains a trailing ellipsis.
pub fn truncate_message(text: &str) -> String {
    if text.chars().count() <= HARD_CAP {
        return text.to_string();
    }
    let mut out: String = text.chars().take(HARD_CAP - 3).collect();
    out.push_str("...");
    out
}

/// Plain prefix clip, used for the looser pre-cap. No ellipsis.
pub fn clip(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Outbound chat sink. Sending never fails the pipeline; a rejected post is
/// logged and forgotten.
pub struct ChatClient {
    bot_id: String,
}

impl ChatClient {
    pub fn new(bot_id: String) -> Self {
        Self { bot_id }
    }

    pub fn send(&self, text: &str) {
        let text = truncate_message(text);
        let payload = json!({
            "bot_id": self.bot_id,
            "text": text,
        });
        let client = match http_client() {
            Ok(client) => client,
            Err(err) => {
                log::error!("chat client unavailable: {err:#}");
                return;
            }
        };
        match client.post(CHAT_POST_URL).json(&payload).send() {
            Ok(response) if response.status().as_u16() != 202 => {
                let status = response.status();
                let body = response.text().unwrap_or_default();
                log::warn!("chat post rejected: {status} {body}");
            }
            Ok(_) => {}
            Err(err) => log::warn!("chat post failed: {err}"),
        }
    }
}
