//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::confirm::ConversationId;
use crate::reply::{Reply, ReplyKind};

/// A station query forwarded from a chat command.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// Chat the command came from
    pub conversation: ConversationId,

    /// Command arguments; absent or empty means no station was given
    #[serde(default)]
    pub args: Vec<String>,
}

/// An accept/decline button press.
#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    /// Token from the button payload
    pub token: String,

    /// Whether the user accepted the suggestion
    pub accepted: bool,
}

/// Messages to deliver, with MarkdownV2 parsing enabled.
#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    /// Kind of answer
    pub outcome: ReplyKind,

    /// Messages in sending order, already escaped
    pub messages: Vec<String>,

    /// Button payload, present when the user must confirm a suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl From<Reply> for ReplyResponse {
    fn from(reply: Reply) -> Self {
        Self {
            outcome: reply.kind,
            messages: reply.messages,
            token: reply.token.map(|t| t.as_str().to_string()),
        }
    }
}

/// Station names, in catalog order.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
