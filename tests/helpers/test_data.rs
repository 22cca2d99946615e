//! Test data helpers for creating test objects
//!
//! Builds Telegram messages and updates from the same JSON shapes the Bot API
//! sends, so they go through teloxide's own deserialization.

use serde_json::{json, Value};
use teloxide::types::Message;

use hos_support_bot::config::WebAppConfig;

use super::test_user_id;

pub const TEST_WEB_APP_URL: &str = "https://hos.example.com/app";

pub fn test_web_app() -> WebAppConfig {
    WebAppConfig {
        url: TEST_WEB_APP_URL.parse().expect("valid test url"),
    }
}

/// Raw Bot API message from the test user in a private chat
pub fn message_json(message_id: i64, text: &str) -> Value {
    let mut message = json!({
        "message_id": message_id,
        "date": 1640995200,
        "chat": {
            "id": test_user_id(),
            "type": "private",
            "first_name": "Test"
        },
        "from": {
            "id": test_user_id(),
            "is_bot": false,
            "first_name": "Test",
            "language_code": "en"
        },
        "text": text
    });

    if text.starts_with('/') {
        let command_len = text.split_whitespace().next().unwrap_or(text).encode_utf16().count();
        message["entities"] = json!([{ "type": "bot_command", "offset": 0, "length": command_len }]);
    }

    message
}

/// Helper function to create a test Telegram message
pub fn create_test_message(message_id: i64, text: &str) -> Message {
    serde_json::from_value(message_json(message_id, text)).expect("valid message json")
}

/// Raw Bot API update wrapping a message
pub fn update_json(update_id: i64, text: &str) -> Value {
    json!({
        "update_id": update_id,
        "message": message_json(update_id, text)
    })
}
