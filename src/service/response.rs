//! Response shapes for the Postbox service.
//!
//! Every response carries a `success` flag. Failed responses also carry the
//! error message and its [`ErrorCode`].

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, PostboxError};

/// Response that carries only a status message.
///
/// Shared by create account, send message, delete messages and delete account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Whether the operation applied.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Error kind when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
}

impl StatusResponse {
    /// Successful response.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            error: None,
        }
    }

    /// Failed response.
    pub fn failure(err: &PostboxError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            error: Some(err.code()),
        }
    }
}

/// Create account response.
pub type CreateAccountResponse = StatusResponse;
/// Send message response.
pub type SendMessageResponse = StatusResponse;
/// Delete messages response.
pub type DeleteMessagesResponse = StatusResponse;
/// Delete account response.
pub type DeleteAccountResponse = StatusResponse;

/// Login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Whether the credentials were accepted.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Unread messages waiting in the mailbox (0 on failure).
    pub unread_count: usize,
    /// Error kind when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
}

impl LoginResponse {
    /// Successful login.
    pub fn ok(username: &str, unread_count: usize) -> Self {
        Self {
            success: true,
            message: format!("User '{username}' logged in successfully"),
            unread_count,
            error: None,
        }
    }

    /// Failed login.
    pub fn failure(err: &PostboxError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            unread_count: 0,
            error: Some(err.code()),
        }
    }
}

/// Account search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAccountsResponse {
    /// Whether the search ran.
    pub success: bool,
    /// Matching usernames, sorted.
    pub accounts: Vec<String>,
    /// Failure message; empty on success.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Error kind when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
}

impl ListAccountsResponse {
    /// Successful search.
    pub fn ok(accounts: Vec<String>) -> Self {
        Self {
            success: true,
            accounts,
            message: String::new(),
            error: None,
        }
    }

    /// Failed search.
    pub fn failure(err: &PostboxError) -> Self {
        Self {
            success: false,
            accounts: Vec::new(),
            message: err.to_string(),
            error: Some(err.code()),
        }
    }
}

/// Rendered message list, returned by read new messages and list messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesResponse {
    /// Whether the mailbox was found.
    pub success: bool,
    /// Messages rendered as `"<timestamp> - From: <sender> - <body>"`.
    pub messages: Vec<String>,
    /// Failure message; empty on success.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Error kind when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
}

impl MessagesResponse {
    /// Successful listing.
    pub fn ok(messages: Vec<String>) -> Self {
        Self {
            success: true,
            messages,
            message: String::new(),
            error: None,
        }
    }

    /// Failed listing; never carries messages.
    pub fn failure(err: &PostboxError) -> Self {
        Self {
            success: false,
            messages: Vec::new(),
            message: err.to_string(),
            error: Some(err.code()),
        }
    }
}

/// Read new messages response.
pub type ReadNewMessagesResponse = MessagesResponse;
/// List read messages response.
pub type ListMessagesResponse = MessagesResponse;
