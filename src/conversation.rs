use std::collections::VecDeque;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::dispatcher::{Reply, GREETING, GREETING_FOLLOW_UPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the conversation log. Immutable once created.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
    pub suggestions: Vec<String>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
            timestamp: Local::now(),
            suggestions: Vec::new(),
        }
    }

    pub fn assistant(content: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: content.into(),
            timestamp: Local::now(),
            suggestions,
        }
    }
}

/// Append-only message log owned by the agent view. Messages are never
/// mutated or pruned; the log dies with the session.
#[derive(Debug, Default)]
pub struct ConversationLog {
    messages: Vec<ChatMessage>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log pre-seeded with the agent's opening message and its chips.
    pub fn with_greeting() -> Self {
        let mut log = Self::new();
        log.append(ChatMessage::assistant(
            GREETING,
            GREETING_FOLLOW_UPS.iter().map(|s| (*s).to_string()).collect(),
        ));
        log
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[derive(Debug)]
struct PendingReply {
    due: Instant,
    reply: Reply,
}

/// Replies waiting out the simulated typing delay.
///
/// Submissions queue in arrival order; the UI tick drains entries as they
/// come due. Leaving the agent view cancels everything still pending so a
/// reply is never appended to a view the user already left.
#[derive(Debug, Default)]
pub struct ReplyQueue {
    pending: VecDeque<PendingReply>,
}

impl ReplyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, reply: Reply, delay: Duration) {
        self.schedule_at(reply, Instant::now() + delay);
    }

    fn schedule_at(&mut self, reply: Reply, due: Instant) {
        self.pending.push_back(PendingReply { due, reply });
    }

    /// Pops the oldest reply if its delay has elapsed. Entries are due in
    /// arrival order, so only the front needs checking.
    pub fn pop_due(&mut self, now: Instant) -> Option<Reply> {
        if self.pending.front().is_some_and(|p| p.due <= now) {
            self.pending.pop_front().map(|p| p.reply)
        } else {
            None
        }
    }

    /// Drops every pending reply, returning how many were discarded.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    pub fn is_waiting(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(content: &str) -> Reply {
        Reply {
            content: content.to_string(),
            suggestions: Vec::new(),
        }
    }

    #[test]
    fn test_log_preserves_append_order() {
        let mut log = ConversationLog::new();
        log.append(ChatMessage::user("primero"));
        log.append(ChatMessage::assistant("segundo", Vec::new()));
        log.append(ChatMessage::user("tercero"));

        let contents: Vec<&str> = log.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["primero", "segundo", "tercero"]);
    }

    #[test]
    fn test_greeting_seed() {
        let log = ConversationLog::with_greeting();
        assert_eq!(log.len(), 1);
        let first = &log.messages()[0];
        assert_eq!(first.role, Role::Assistant);
        assert_eq!(first.suggestions.len(), 4);
    }

    #[test]
    fn test_queue_respects_delay() {
        let mut queue = ReplyQueue::new();
        let now = Instant::now();
        queue.schedule_at(reply("a"), now + Duration::from_millis(1500));

        assert!(queue.pop_due(now).is_none());
        assert!(queue.is_waiting());

        let popped = queue.pop_due(now + Duration::from_millis(1500));
        assert_eq!(popped.map(|r| r.content), Some("a".to_string()));
        assert!(!queue.is_waiting());
    }

    #[test]
    fn test_queue_drains_in_arrival_order() {
        let mut queue = ReplyQueue::new();
        let now = Instant::now();
        queue.schedule_at(reply("a"), now + Duration::from_millis(100));
        queue.schedule_at(reply("b"), now + Duration::from_millis(200));

        let later = now + Duration::from_millis(500);
        assert_eq!(queue.pop_due(later).map(|r| r.content), Some("a".to_string()));
        assert_eq!(queue.pop_due(later).map(|r| r.content), Some("b".to_string()));
        assert!(queue.pop_due(later).is_none());
    }

    #[test]
    fn test_cancel_all_drops_pending() {
        let mut queue = ReplyQueue::new();
        let now = Instant::now();
        queue.schedule_at(reply("a"), now);
        queue.schedule_at(reply("b"), now);

        assert_eq!(queue.cancel_all(), 2);
        assert!(queue.pop_due(now + Duration::from_secs(10)).is_none());
    }
}
