//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub delay_ms: Option<u64>,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            delay_ms: None,
            custom_response: None,
        }
    }
}

impl MockResponseConfig {
    pub fn failure() -> Self {
        Self {
            success: false,
            ..Self::default()
        }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Bot whose requests go to this server
    pub fn bot(&self) -> Bot {
        let api_url = self.server.uri().parse().expect("mock server uri is a valid url");
        Bot::new(test_bot_token()).set_api_url(api_url)
    }

    /// Telegram method names are case-insensitive; teloxide sends them PascalCase
    fn endpoint(name: &str) -> String {
        format!("(?i)^/bot{}/{}$", regex_escape(&test_bot_token()), name)
    }

    async fn mount(&self, endpoint: &str, config: MockResponseConfig, ok_result: Value, error_description: &str) {
        let response_body = config.custom_response.unwrap_or_else(|| {
            if config.success {
                json!({ "ok": true, "result": ok_result })
            } else {
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": error_description
                })
            }
        });

        let mut response = ResponseTemplate::new(if config.success { 200 } else { 400 })
            .set_body_json(response_body);

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        Mock::given(method("POST"))
            .and(path_regex(Self::endpoint(endpoint)))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let sent = json!({
            "message_id": 123,
            "from": test_bot_user(),
            "chat": {
                "id": test_user_id(),
                "type": "private",
                "first_name": "Test"
            },
            "date": 1640995200,
            "text": "Test message"
        });

        self.mount(
            "sendMessage",
            config,
            sent,
            "Bad Request: BUTTON_TYPE_INVALID",
        )
        .await;
    }

    /// Setup mock for getMe endpoint
    pub async fn mock_get_me(&self, config: MockResponseConfig) {
        self.mount("getMe", config, test_bot_user(), "Unauthorized").await;
    }

    /// Setup mock for deleteWebhook endpoint
    pub async fn mock_delete_webhook(&self) {
        self.mount("deleteWebhook", MockResponseConfig::default(), json!(true), "").await;
    }

    /// Serve `updates` once, then empty long-poll responses
    pub async fn mock_get_updates(&self, updates: Vec<Value>) {
        if !updates.is_empty() {
            Mock::given(method("POST"))
                .and(path_regex(Self::endpoint("getUpdates")))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": updates })),
                )
                .up_to_n_times(1)
                .mount(&self.server)
                .await;
        }

        let idle = MockResponseConfig {
            delay_ms: Some(20),
            ..MockResponseConfig::default()
        };
        self.mount("getUpdates", idle, json!([]), "").await;
    }

    /// Mocks needed for a full polling session
    pub async fn setup_polling_mocks(&self, updates: Vec<Value>, send_message: MockResponseConfig) {
        self.mock_get_me(MockResponseConfig::default()).await;
        self.mock_delete_webhook().await;
        self.mock_send_message(send_message).await;
        self.mock_get_updates(updates).await;
    }

    /// JSON bodies of every request made to `endpoint`
    pub async fn requests_to(&self, endpoint: &str) -> Vec<Value> {
        let suffix = format!("/{}", endpoint).to_lowercase();
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.url.path().to_lowercase().ends_with(&suffix))
            .map(|req| req.body_json::<Value>().unwrap_or(Value::Null))
            .collect()
    }

    /// Verify that a specific endpoint was called
    pub async fn verify_endpoint_called(&self, endpoint: &str, times: usize) {
        let matching_requests = self.requests_to(endpoint).await.len();

        assert_eq!(
            matching_requests, times,
            "Expected {} calls to {}, but got {}",
            times, endpoint, matching_requests
        );
    }
}

fn regex_escape(s: &str) -> String {
    s.chars()
        .flat_map(|c| {
            let escape = !c.is_ascii_alphanumeric() && c != '_';
            escape.then_some('\\').into_iter().chain(std::iter::once(c))
        })
        .collect()
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Helper function to create test user ID
pub fn test_user_id() -> i64 {
    987654321
}

/// The bot's own account as returned by getMe
pub fn test_bot_user() -> Value {
    json!({
        "id": 12345,
        "is_bot": true,
        "first_name": "TestBot",
        "username": "test_bot",
        "can_join_groups": true,
        "can_read_all_group_messages": false,
        "supports_inline_queries": false,
        "can_connect_to_business": false,
        "has_main_web_app": false
    })
}
