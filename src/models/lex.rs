use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type SessionAttributes = Option<HashMap<String, String>>;

/// Code-hook event sent by the bot channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub current_intent: CurrentIntent,
    pub bot: Bot,
    pub user_id: String,
    #[serde(default)]
    pub session_attributes: SessionAttributes,
    #[serde(default)]
    pub request_attributes: Option<HashMap<String, String>>,
    #[serde(default)]
    pub invocation_source: Option<String>,
    #[serde(default)]
    pub input_transcript: Option<String>,
    #[serde(default)]
    pub output_dialog_mode: Option<String>,
    #[serde(default)]
    pub message_version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Option<String>>,
    #[serde(default)]
    pub confirmation_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl IntentRequest {
    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    /// Value of a slot; a slot the channel sent as `null` counts as absent.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent
            .slots
            .get(name)
            .and_then(|v| v.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogAction {
    #[serde(rename = "type")]
    pub kind: DialogActionType,
    pub fulfillment_state: FulfillmentState,
    pub message: Message,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum DialogActionType {
    Close,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum ContentType {
    PlainText,
}

impl FulfillmentResponse {
    /// Terminal `Close` action carrying a plain-text message.
    pub fn close(
        session_attributes: SessionAttributes,
        fulfillment_state: FulfillmentState,
        content: String,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction {
                kind: DialogActionType::Close,
                fulfillment_state,
                message: Message {
                    content_type: ContentType::PlainText,
                    content,
                },
            },
        }
    }

    pub fn fulfilled(session_attributes: SessionAttributes, content: String) -> Self {
        Self::close(session_attributes, FulfillmentState::Fulfilled, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lex_event() {
        let json = r#"{
            "messageVersion": "1.0",
            "invocationSource": "FulfillmentCodeHook",
            "userId": "user-1",
            "sessionAttributes": {"visit": "2"},
            "requestAttributes": null,
            "bot": {"name": "SalesAssistant", "alias": "$LATEST", "version": "$LATEST"},
            "outputDialogMode": "Text",
            "currentIntent": {
                "name": "BookHotel",
                "slots": {"Location": "Boston", "RoomType": null},
                "confirmationStatus": "None"
            },
            "inputTranscript": "book a hotel"
        }"#;
        let request: IntentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.intent_name(), "BookHotel");
        assert_eq!(request.bot.name, "SalesAssistant");
        assert_eq!(request.slot("Location"), Some("Boston"));
        assert_eq!(request.slot("RoomType"), None);
        assert_eq!(request.slot("Nights"), None);
        assert_eq!(
            request.session_attributes.as_ref().and_then(|s| s.get("visit")),
            Some(&"2".to_string())
        );
    }

    #[test]
    fn test_null_session_attributes() {
        let json = r#"{
            "userId": "u",
            "sessionAttributes": null,
            "bot": {"name": "b"},
            "currentIntent": {"name": "BookCar", "slots": {}}
        }"#;
        let request: IntentRequest = serde_json::from_str(json).unwrap();
        assert!(request.session_attributes.is_none());
    }

    #[test]
    fn test_response_wire_shape() {
        let response = FulfillmentResponse::fulfilled(None, "done".to_string());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sessionAttributes": null,
                "dialogAction": {
                    "type": "Close",
                    "fulfillmentState": "Fulfilled",
                    "message": {"contentType": "PlainText", "content": "done"}
                }
            })
        );
    }
}
