//! Thread-safe account directory for Postbox.
//!
//! The account map sits behind an `RwLock` and each account behind its own
//! `Mutex`. Mailbox operations hold the map read guard while they lock the
//! account, so an account can only be removed once no mailbox operation on
//! it is in flight, while different accounts proceed concurrently.

use std::collections::HashMap;

use regex::RegexBuilder;
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use crate::{PostboxError, Result};

use super::types::{Account, Deletion, Message};

/// In-memory registry of accounts and their mailboxes.
pub struct Directory {
    accounts: RwLock<HashMap<String, Mutex<Account>>>,
}

fn no_such_user(username: &str) -> PostboxError {
    PostboxError::not_found(format!("No such user '{username}'"))
}

fn require_username(username: &str) -> Result<()> {
    if username.is_empty() {
        return Err(PostboxError::invalid_input("Username missing"));
    }
    Ok(())
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Number of registered accounts.
    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Register a new account with an empty mailbox.
    pub async fn create_account(&self, username: &str, password_digest: &str) -> Result<()> {
        if username.is_empty() || password_digest.is_empty() {
            return Err(PostboxError::invalid_input("Username or password missing"));
        }

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(username) {
            return Err(PostboxError::Conflict("Username already taken".to_string()));
        }
        accounts.insert(username.to_string(), Mutex::new(Account::new(password_digest)));

        info!("Account created: {}", username);
        Ok(())
    }

    /// Check credentials and return the number of unread messages.
    pub async fn login(&self, username: &str, password_digest: &str) -> Result<usize> {
        if username.is_empty() || password_digest.is_empty() {
            return Err(PostboxError::invalid_input("Username or password missing"));
        }

        let accounts = self.accounts.read().await;
        let account = accounts
            .get(username)
            .ok_or_else(|| PostboxError::not_found("No such user"))?
            .lock()
            .await;

        if !account.verify(password_digest) {
            return Err(PostboxError::Unauthorized("Incorrect password".to_string()));
        }

        info!("User logged in: {}", username);
        Ok(account.mailbox.unread_count())
    }

    /// List usernames matching a case-insensitive regular expression.
    ///
    /// An empty pattern matches every account. Results are sorted.
    pub async fn list_accounts(&self, pattern: &str) -> Result<Vec<String>> {
        let matcher = if pattern.is_empty() {
            None
        } else {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| PostboxError::invalid_input(format!("Invalid pattern: {e}")))?;
            Some(regex)
        };

        let accounts = self.accounts.read().await;
        let mut matches: Vec<String> = accounts
            .keys()
            .filter(|name| matcher.as_ref().map_or(true, |re| re.is_match(name)))
            .cloned()
            .collect();
        matches.sort();

        info!("Listing accounts with pattern: '{}'", pattern);
        Ok(matches)
    }

    /// Append a new unread message to the recipient's mailbox.
    ///
    /// The sender is checked before the recipient.
    pub async fn send_message(&self, sender: &str, recipient: &str, body: &str) -> Result<()> {
        if sender.is_empty() || recipient.is_empty() {
            return Err(PostboxError::invalid_input("Missing fields"));
        }

        let accounts = self.accounts.read().await;
        if !accounts.contains_key(sender) {
            return Err(PostboxError::not_found(format!(
                "Sender '{sender}' does not exist"
            )));
        }
        let mut account = accounts
            .get(recipient)
            .ok_or_else(|| {
                PostboxError::not_found(format!("Recipient '{recipient}' does not exist"))
            })?
            .lock()
            .await;

        account.mailbox.push(Message::new(sender, body));

        info!("Message from '{}' to '{}' sent", sender, recipient);
        Ok(())
    }

    /// Mark up to `count` of the oldest unread messages as read and return them rendered.
    ///
    /// `count <= 0` reads every unread message.
    pub async fn read_new_messages(&self, username: &str, count: i64) -> Result<Vec<String>> {
        require_username(username)?;

        let accounts = self.accounts.read().await;
        let mut account = accounts
            .get(username)
            .ok_or_else(|| no_such_user(username))?
            .lock()
            .await;

        let messages = account.mailbox.read_new(count);

        info!(
            "Read {} new messages for user '{}'",
            messages.len(),
            username
        );
        Ok(messages)
    }

    /// Render every read message in mailbox order.
    pub async fn list_messages(&self, username: &str) -> Result<Vec<String>> {
        require_username(username)?;

        let accounts = self.accounts.read().await;
        let account = accounts
            .get(username)
            .ok_or_else(|| no_such_user(username))?
            .lock()
            .await;

        info!("Listing all read messages for user '{}'", username);
        Ok(account.mailbox.render_read())
    }

    /// Delete messages by 1-based mailbox position, or all with `[-1]`.
    pub async fn delete_messages(&self, username: &str, ids: &[i64]) -> Result<Deletion> {
        if username.is_empty() || ids.is_empty() {
            return Err(PostboxError::invalid_input("Missing fields"));
        }

        let accounts = self.accounts.read().await;
        let mut account = accounts
            .get(username)
            .ok_or_else(|| {
                PostboxError::not_found(format!("User '{username}' does not exist"))
            })?
            .lock()
            .await;

        let deletion = account.mailbox.delete(ids);
        match deletion {
            Deletion::All(_) => info!("All messages deleted for user '{}'", username),
            Deletion::Positions(n) => info!("Deleted {} messages for user '{}'", n, username),
        }
        Ok(deletion)
    }

    /// Remove an account together with its mailbox.
    pub async fn delete_account(&self, username: &str) -> Result<()> {
        require_username(username)?;

        let mut accounts = self.accounts.write().await;
        let account = accounts
            .remove(username)
            .ok_or_else(|| no_such_user(username))?;

        let lost = account.into_inner().mailbox.unread_count();
        info!("Account deleted: {} ({} unread messages discarded)", username, lost);
        Ok(())
    }

    /// Snapshot of an account's mailbox.
    pub async fn mailbox(&self, username: &str) -> Result<Vec<Message>> {
        let accounts = self.accounts.read().await;
        let account = accounts
            .get(username)
            .ok_or_else(|| no_such_user(username))?
            .lock()
            .await;
        Ok(account.mailbox.messages().to_vec())
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}
