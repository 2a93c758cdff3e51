//! Chat service for Postbox.
//!
//! Maps each request onto the shared [`Directory`] and folds the outcome
//! into a response. Errors never escape as `Err`; they become
//! `success: false` responses.

use std::sync::Arc;

use tracing::warn;

use crate::directory::{Deletion, Directory};
use crate::PostboxError;

use super::request::{
    CreateAccountRequest, DeleteAccountRequest, DeleteMessagesRequest, ListAccountsRequest,
    ListMessagesRequest, LoginRequest, ReadNewMessagesRequest, SendMessageRequest,
};
use super::response::{
    CreateAccountResponse, DeleteAccountResponse, DeleteMessagesResponse, ListAccountsResponse,
    ListMessagesResponse, LoginResponse, ReadNewMessagesResponse, SendMessageResponse,
};

/// Request handler over a shared directory.
#[derive(Clone)]
pub struct ChatService {
    directory: Arc<Directory>,
}

fn rejected(operation: &str, err: &PostboxError) {
    warn!(operation, error = %err, "Request rejected");
}

impl ChatService {
    /// Create a service over the given directory.
    pub fn new(directory: Arc<Directory>) -> Self {
        Self { directory }
    }

    /// Create a service over a fresh, empty directory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(Directory::new()))
    }

    /// The directory this service operates on.
    pub fn directory(&self) -> &Arc<Directory> {
        &self.directory
    }

    /// Register a new account.
    pub async fn create_account(&self, request: &CreateAccountRequest) -> CreateAccountResponse {
        match self
            .directory
            .create_account(&request.username, &request.password)
            .await
        {
            Ok(()) => CreateAccountResponse::ok(format!(
                "Account '{}' created successfully",
                request.username
            )),
            Err(e) => {
                rejected("create_account", &e);
                CreateAccountResponse::failure(&e)
            }
        }
    }

    /// Check credentials and report unread messages.
    pub async fn login(&self, request: &LoginRequest) -> LoginResponse {
        match self
            .directory
            .login(&request.username, &request.password)
            .await
        {
            Ok(unread) => LoginResponse::ok(&request.username, unread),
            Err(e) => {
                rejected("login", &e);
                LoginResponse::failure(&e)
            }
        }
    }

    /// Search usernames.
    pub async fn list_accounts(&self, request: &ListAccountsRequest) -> ListAccountsResponse {
        match self.directory.list_accounts(&request.pattern).await {
            Ok(accounts) => ListAccountsResponse::ok(accounts),
            Err(e) => {
                rejected("list_accounts", &e);
                ListAccountsResponse::failure(&e)
            }
        }
    }

    /// Deliver a message.
    pub async fn send_message(&self, request: &SendMessageRequest) -> SendMessageResponse {
        let result = match request.body.as_deref() {
            Some(body) => {
                self.directory
                    .send_message(&request.sender, &request.recipient, body)
                    .await
            }
            None => Err(PostboxError::invalid_input("Missing fields")),
        };

        match result {
            Ok(()) => SendMessageResponse::ok("Message sent successfully"),
            Err(e) => {
                rejected("send_message", &e);
                SendMessageResponse::failure(&e)
            }
        }
    }

    /// Read the oldest unread messages.
    pub async fn read_new_messages(
        &self,
        request: &ReadNewMessagesRequest,
    ) -> ReadNewMessagesResponse {
        match self
            .directory
            .read_new_messages(&request.username, request.count)
            .await
        {
            Ok(messages) => ReadNewMessagesResponse::ok(messages),
            Err(e) => {
                rejected("read_new_messages", &e);
                ReadNewMessagesResponse::failure(&e)
            }
        }
    }

    /// List read messages.
    pub async fn list_messages(&self, request: &ListMessagesRequest) -> ListMessagesResponse {
        match self.directory.list_messages(&request.username).await {
            Ok(messages) => ListMessagesResponse::ok(messages),
            Err(e) => {
                rejected("list_messages", &e);
                ListMessagesResponse::failure(&e)
            }
        }
    }

    /// Delete messages by position.
    pub async fn delete_messages(&self, request: &DeleteMessagesRequest) -> DeleteMessagesResponse {
        match self
            .directory
            .delete_messages(&request.username, &request.message_ids)
            .await
        {
            Ok(Deletion::All(_)) => DeleteMessagesResponse::ok("All messages deleted"),
            Ok(Deletion::Positions(n)) => {
                DeleteMessagesResponse::ok(format!("Deleted {n} messages."))
            }
            Err(e) => {
                rejected("delete_messages", &e);
                DeleteMessagesResponse::failure(&e)
            }
        }
    }

    /// Remove an account and its mailbox.
    pub async fn delete_account(&self, request: &DeleteAccountRequest) -> DeleteAccountResponse {
        match self.directory.delete_account(&request.username).await {
            Ok(()) => DeleteAccountResponse::ok(format!("Account '{}' deleted.", request.username)),
            Err(e) => {
                rejected("delete_account", &e);
                DeleteAccountResponse::failure(&e)
            }
        }
    }
}
