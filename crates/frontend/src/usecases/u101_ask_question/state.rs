use contracts::shared::chat::ChatMessage;
use contracts::usecases::u101_ask_question::{AskRequest, AskResponse};

use crate::shared::error::ApiError;

/// Bot reply shown when the backend call fails for any reason
pub const ASK_FALLBACK_TEXT: &str = "Sorry, there was an error processing your message.";

/// Chat transcript plus the in-flight flag. The transcript only grows.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub is_loading: bool,
}

impl ChatState {
    pub fn can_send(&self, draft: &str) -> bool {
        !self.is_loading && !draft.trim().is_empty()
    }

    /// Appends the user's message and returns the request to send, or `None` if nothing should be sent
    pub fn begin_send(&mut self, draft: &str) -> Option<AskRequest> {
        if !self.can_send(draft) {
            return None;
        }

        let question = draft.trim().to_string();
        self.messages.push(ChatMessage::user(question.clone()));
        self.is_loading = true;

        Some(AskRequest { question })
    }

    pub fn complete(&mut self, result: Result<AskResponse, ApiError>) {
        let reply = match result {
            Ok(response) => ChatMessage::bot(response.answer),
            Err(e) => {
                match e.status() {
                    Some(status) => log::error!("Error sending message: backend answered {}", status),
                    None => log::error!("Error sending message: {}", e),
                }
                ChatMessage::bot(ASK_FALLBACK_TEXT)
            }
        };
        self.messages.push(reply);
        self.is_loading = false;
    }
}
