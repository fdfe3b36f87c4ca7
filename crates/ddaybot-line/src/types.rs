//! LINE Messaging API types (minimal subset).

use serde::{Deserialize, Serialize};

/// A text message payload for reply/push requests.
#[derive(Debug, Clone, Serialize)]
pub struct TextMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub text: String,
}

impl TextMessage {
    /// Build a `"type": "text"` message.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            message_type: "text".into(),
            text: text.into(),
        }
    }
}

/// Body of `POST /v2/bot/message/reply`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMessageRequest {
    pub reply_token: String,
    pub messages: Vec<TextMessage>,
}

/// Body of `POST /v2/bot/message/push`.
#[derive(Debug, Serialize)]
pub struct PushMessageRequest {
    pub to: String,
    pub messages: Vec<TextMessage>,
}

/// Error body returned by the Messaging API on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: String,
}

/// A webhook delivery: one HTTP POST carrying a batch of events.
#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    /// Bot user ID the events were sent to.
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// A single webhook event.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    /// Event kind (e.g. "message", "follow", "join").
    #[serde(rename = "type")]
    pub event_type: String,
    /// Token for replying to this event. Absent on non-repliable events.
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub message: Option<MessageContent>,
    #[serde(default)]
    pub source: Option<EventSource>,
    /// Event time (unix millis).
    #[serde(default)]
    pub timestamp: i64,
}

/// Content of a message event.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageContent {
    /// Message kind (e.g. "text", "sticker", "image").
    #[serde(rename = "type")]
    pub message_type: String,
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// Where an event came from.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    /// Source kind ("user", "group", "room").
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_message_serialize() {
        let msg = TextMessage::new("hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["text"], "hello");
    }

    #[test]
    fn test_reply_request_wire_names() {
        let req = ReplyMessageRequest {
            reply_token: "tok-1".into(),
            messages: vec![TextMessage::new("hi")],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["replyToken"], "tok-1");
        assert_eq!(json["messages"][0]["type"], "text");
    }

    #[test]
    fn test_push_request_serialize() {
        let req = PushMessageRequest {
            to: "C123".into(),
            messages: vec![TextMessage::new("daily")],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["to"], "C123");
        assert_eq!(json["messages"][0]["text"], "daily");
    }

    #[test]
    fn test_webhook_text_message_event() {
        let json = r#"{
            "destination": "U_bot",
            "events": [{
                "type": "message",
                "replyToken": "rt-42",
                "timestamp": 1700000000000,
                "source": {"type": "group", "groupId": "C999", "userId": "U1"},
                "message": {"type": "text", "id": "m-1", "text": "countdown"}
            }]
        }"#;
        let req: WebhookRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.destination.as_deref(), Some("U_bot"));
        assert_eq!(req.events.len(), 1);
        let event = &req.events[0];
        assert_eq!(event.event_type, "message");
        assert_eq!(event.reply_token.as_deref(), Some("rt-42"));
        let message = event.message.as_ref().unwrap();
        assert_eq!(message.message_type, "text");
        assert_eq!(message.text.as_deref(), Some("countdown"));
        let source = event.source.as_ref().unwrap();
        assert_eq!(source.group_id.as_deref(), Some("C999"));
    }

    #[test]
    fn test_webhook_non_message_event() {
        let json = r#"{"events": [{"type": "join", "timestamp": 0}]}"#;
        let req: WebhookRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.events[0].event_type, "join");
        assert!(req.events[0].reply_token.is_none());
        assert!(req.events[0].message.is_none());
    }

    #[test]
    fn test_webhook_empty_events() {
        // LINE sends an empty event list on webhook verification.
        let json = r#"{"destination": "U_bot", "events": []}"#;
        let req: WebhookRequest = serde_json::from_str(json).unwrap();
        assert!(req.events.is_empty());
    }

    #[test]
    fn test_error_response_parse() {
        let json = r#"{"message": "Invalid reply token", "details": []}"#;
        let err: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(err.message, "Invalid reply token");
    }
}
