//! Account and mailbox types for Postbox.

use chrono::{DateTime, Local, Utc};

/// Display format for message timestamps (month/day hour:minute, local time).
pub const TIMESTAMP_FORMAT: &str = "%m/%d %H:%M";

/// Message id list entry that clears the whole mailbox when sent alone.
pub const DELETE_ALL: i64 = -1;

/// A message delivered to a mailbox.
#[derive(Debug, Clone)]
pub struct Message {
    /// Username of the sender at send time.
    pub sender: String,
    /// Message body (may be empty).
    pub body: String,
    /// Whether the recipient has read the message.
    pub is_read: bool,
    /// When the message was sent.
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new unread message stamped with the current time.
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            is_read: false,
            created_at: Utc::now(),
        }
    }

    /// Render the message as `"<timestamp> - From: <sender> - <body>"`.
    pub fn render(&self) -> String {
        let timestamp = self.created_at.with_timezone(&Local).format(TIMESTAMP_FORMAT);
        format!("{} - From: {} - {}", timestamp, self.sender, self.body)
    }
}

/// Outcome of a mailbox deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// The whole mailbox was cleared; holds the number of messages removed.
    All(usize),
    /// Selected positions were removed; holds the number actually removed.
    Positions(usize),
}

impl Deletion {
    /// Number of messages removed.
    pub fn removed(&self) -> usize {
        match self {
            Deletion::All(n) | Deletion::Positions(n) => *n,
        }
    }
}

/// Ordered sequence of messages owned by one account.
///
/// Messages are addressed by their 1-based position in the current
/// sequence, so positions shift whenever an earlier message is deleted.
#[derive(Debug, Clone, Default)]
pub struct Mailbox {
    messages: Vec<Message>,
}

impl Mailbox {
    /// Create an empty mailbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Whether the mailbox holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All messages in mailbox order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Count unread messages.
    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| !m.is_read).count()
    }

    /// Mark the oldest `count` unread messages as read and render them.
    ///
    /// A `count` of zero or less, or larger than the number of unread
    /// messages, reads every unread message.
    pub fn read_new(&mut self, count: i64) -> Vec<String> {
        let unread = self.unread_count();
        let limit = match usize::try_from(count) {
            Ok(n) if n > 0 && n <= unread => n,
            _ => unread,
        };

        self.messages
            .iter_mut()
            .filter(|m| !m.is_read)
            .take(limit)
            .map(|m| {
                m.is_read = true;
                m.render()
            })
            .collect()
    }

    /// Render every read message in mailbox order.
    pub fn render_read(&self) -> Vec<String> {
        self.messages
            .iter()
            .filter(|m| m.is_read)
            .map(Message::render)
            .collect()
    }

    /// Delete messages by 1-based position, or everything for `[DELETE_ALL]`.
    ///
    /// Positions are applied from highest to lowest against the shrinking
    /// sequence; positions out of range are skipped.
    pub fn delete(&mut self, ids: &[i64]) -> Deletion {
        if ids == [DELETE_ALL] {
            let removed = self.messages.len();
            self.messages.clear();
            return Deletion::All(removed);
        }

        let mut positions = ids.to_vec();
        positions.sort_unstable_by(|a, b| b.cmp(a));

        let mut removed = 0;
        for position in positions {
            if position >= 1 && (position as u64) <= self.messages.len() as u64 {
                self.messages.remove((position - 1) as usize);
                removed += 1;
            }
        }
        Deletion::Positions(removed)
    }
}

/// A registered account, keyed by username in the directory.
#[derive(Debug, Clone)]
pub struct Account {
    password_digest: String,
    /// The account's messages.
    pub mailbox: Mailbox,
}

impl Account {
    /// Create an account with an empty mailbox.
    pub fn new(password_digest: impl Into<String>) -> Self {
        Self {
            password_digest: password_digest.into(),
            mailbox: Mailbox::new(),
        }
    }

    /// Compare a supplied digest against the stored one.
    pub fn verify(&self, password_digest: &str) -> bool {
        self.password_digest == password_digest
    }
}
