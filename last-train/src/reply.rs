//! Bot replies.
//!
//! Ties resolution, confirmation and formatting together into the messages
//! a transport should send for a query or a button press. Kept free of any
//! transport so it can be tested directly.

use serde::Serialize;

use crate::confirm::{
    ConfirmError, Confirmation, ConversationId, InteractionController, Token,
};
use crate::format::{
    DECLINED, INVALID_TOKEN, MORE_SUGGESTIONS, NEEDS_QUERY, confirm_prompt, format_resolved,
    format_suggestion_list, not_found_prompt,
};
use crate::resolve::{Outcome, Query, Resolver};

/// What kind of answer a reply carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    NeedsQuery,
    Resolved,
    Confirm,
    Suggestions,
    Declined,
    InvalidToken,
}

/// Messages to send, in order, as MarkdownV2.
#[derive(Debug, Clone)]
pub struct Reply {
    pub kind: ReplyKind,
    pub messages: Vec<String>,
    /// Set for [`ReplyKind::Confirm`]: the payload for the accept/decline
    /// buttons.
    pub token: Option<Token>,
}

impl Reply {
    fn new(kind: ReplyKind, messages: Vec<String>) -> Self {
        Self {
            kind,
            messages,
            token: None,
        }
    }
}

/// Answers queries and confirmation button presses.
pub struct Responder {
    resolver: Resolver,
    confirmations: InteractionController,
}

impl Responder {
    pub fn new(resolver: Resolver, confirmations: InteractionController) -> Self {
        Self {
            resolver,
            confirmations,
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn confirmations(&self) -> &InteractionController {
        &self.confirmations
    }

    /// Build the reply to a station query from `conversation`.
    pub async fn query(
        &self,
        conversation: ConversationId,
        query: &Query,
    ) -> Result<Reply, ConfirmError> {
        let text = query.as_str().unwrap_or_default();

        let reply = match self.resolver.resolve_query(query) {
            Outcome::NeedsQuery => Reply::new(ReplyKind::NeedsQuery, vec![NEEDS_QUERY.to_string()]),
            Outcome::Resolved(station) => Reply::new(
                ReplyKind::Resolved,
                format_resolved(&station).into_messages(),
            ),
            Outcome::ConfirmSuggestion {
                candidate,
                suggestions,
            } => {
                let messages = vec![
                    confirm_prompt(text, &candidate),
                    MORE_SUGGESTIONS.to_string(),
                    format_suggestion_list(&suggestions),
                ];
                let token = self.confirmations.offer(conversation, candidate).await?;
                Reply {
                    kind: ReplyKind::Confirm,
                    messages,
                    token: Some(token),
                }
            }
            Outcome::SuggestList(suggestions) => Reply::new(
                ReplyKind::Suggestions,
                vec![not_found_prompt(text), format_suggestion_list(&suggestions)],
            ),
        };

        Ok(reply)
    }

    /// Build the reply to an accept/decline button press.
    ///
    /// An invalid token is not an error here: the user is asked to query
    /// again.
    pub async fn answer(&self, token: &Token, accepted: bool) -> Result<Reply, ConfirmError> {
        match self.confirmations.resolve(token, accepted).await {
            Ok(Confirmation::Resolved(station)) => Ok(Reply::new(
                ReplyKind::Resolved,
                format_resolved(&station).into_messages(),
            )),
            Ok(Confirmation::Declined) => {
                Ok(Reply::new(ReplyKind::Declined, vec![DECLINED.to_string()]))
            }
            Err(ConfirmError::InvalidToken) => Ok(Reply::new(
                ReplyKind::InvalidToken,
                vec![INVALID_TOKEN.to_string()],
            )),
            Err(e) => Err(e),
        }
    }
}
