//! Request shapes for the Postbox service.
//!
//! A string field missing from a request deserializes as empty and is
//! rejected by the directory as missing. The message body is the one field
//! where absence and emptiness differ, so it stays an `Option`.

use serde::{Deserialize, Serialize};

/// Create account request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateAccountRequest {
    /// Username to register.
    pub username: String,
    /// Password digest.
    pub password: String,
}

impl CreateAccountRequest {
    /// Create a new request.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Login request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Password digest.
    pub password: String,
}

impl LoginRequest {
    /// Create a new request.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Account search request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListAccountsRequest {
    /// Case-insensitive regular expression; empty matches everything.
    pub pattern: String,
}

impl ListAccountsRequest {
    /// Create a new request.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

/// Send message request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SendMessageRequest {
    /// Sending username.
    pub sender: String,
    /// Receiving username.
    #[serde(alias = "to")]
    pub recipient: String,
    /// Message body. `None` means the field was not supplied.
    #[serde(alias = "content")]
    pub body: Option<String>,
}

impl SendMessageRequest {
    /// Create a new request with a body.
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            body: Some(body.into()),
        }
    }
}

/// Read new messages request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadNewMessagesRequest {
    /// Mailbox owner.
    pub username: String,
    /// How many unread messages to read; zero or less reads all.
    pub count: i64,
}

impl ReadNewMessagesRequest {
    /// Create a new request.
    pub fn new(username: impl Into<String>, count: i64) -> Self {
        Self {
            username: username.into(),
            count,
        }
    }
}

/// List read messages request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListMessagesRequest {
    /// Mailbox owner.
    pub username: String,
}

impl ListMessagesRequest {
    /// Create a new request.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Delete messages request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteMessagesRequest {
    /// Mailbox owner.
    pub username: String,
    /// 1-based mailbox positions, or `[-1]` for all.
    pub message_ids: Vec<i64>,
}

impl DeleteMessagesRequest {
    /// Create a new request.
    pub fn new(username: impl Into<String>, message_ids: Vec<i64>) -> Self {
        Self {
            username: username.into(),
            message_ids,
        }
    }
}

/// Delete account request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteAccountRequest {
    /// Account to remove.
    pub username: String,
}

impl DeleteAccountRequest {
    /// Create a new request.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
