//! Per-sender conversation state.
//!
//! The add-product flow spans two messages: the command arms the flow,
//! the next message from the same chat carries the product block. The
//! pending flag lives in a mutex-guarded map keyed by chat id; one
//! pending action per sender.

use std::collections::HashMap;
use std::sync::Mutex;

use teloxide::types::ChatId;

/// What the bot is waiting for from a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// `/addproduct` was issued; the next message is a product block.
    AwaitingProductData,
}

/// Mutex-guarded map of pending actions, shared across handlers.
#[derive(Debug, Default)]
pub struct SessionMap {
    inner: Mutex<HashMap<ChatId, PendingAction>>,
}

impl SessionMap {
    /// Arm a pending action for a chat, replacing any previous one.
    pub fn set(&self, chat: ChatId, action: PendingAction) {
        self.inner.lock().unwrap().insert(chat, action);
    }

    /// Take and clear the pending action for a chat. The flag is removed
    /// whether or not the follow-up message turns out to be usable.
    pub fn take(&self, chat: ChatId) -> Option<PendingAction> {
        self.inner.lock().unwrap().remove(&chat)
    }

    /// Peek without clearing (used by the message filter).
    pub fn peek(&self, chat: ChatId) -> Option<PendingAction> {
        self.inner.lock().unwrap().get(&chat).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_clears_the_flag() {
        let sessions = SessionMap::default();
        let chat = ChatId(7);

        sessions.set(chat, PendingAction::AwaitingProductData);
        assert_eq!(sessions.take(chat), Some(PendingAction::AwaitingProductData));
        assert_eq!(sessions.take(chat), None);
    }

    #[test]
    fn peek_does_not_clear() {
        let sessions = SessionMap::default();
        let chat = ChatId(7);

        sessions.set(chat, PendingAction::AwaitingProductData);
        assert_eq!(sessions.peek(chat), Some(PendingAction::AwaitingProductData));
        assert_eq!(sessions.peek(chat), Some(PendingAction::AwaitingProductData));
    }

    #[test]
    fn sessions_are_per_chat() {
        let sessions = SessionMap::default();
        sessions.set(ChatId(1), PendingAction::AwaitingProductData);
        assert_eq!(sessions.peek(ChatId(2)), None);
    }
}
