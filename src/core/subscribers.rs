//! Newsletter subscriber store
//!
//! Keeps the set of subscribed addresses in memory for the lifetime of the
//! server process. Subscribing the same address twice is not an error.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

/// Subscription errors, shown to the visitor as-is
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubscribeError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Subscription failed: {0}")]
    Internal(String),
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), SubscribeError> {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(SubscribeError::InvalidEmail);
    }

    // something@something.something
    let Some((local, domain)) = email.split_once('@') else {
        return Err(SubscribeError::InvalidEmail);
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(SubscribeError::InvalidEmail);
    }

    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(SubscribeError::InvalidEmail);
    }

    Ok(())
}

/// Mask the local part for logs: `mia@example.com` -> `m***@example.com`
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

/// Outcome of a successful subscribe call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscription {
    New,
    AlreadySubscribed,
}

/// Thread-safe subscriber set, shared by all requests
#[derive(Debug, Clone, Default)]
pub struct SubscriberStore {
    emails: Arc<Mutex<BTreeSet<String>>>,
}

impl SubscriberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, normalize and record an address
    pub fn subscribe(&self, email: &str) -> Result<Subscription, SubscribeError> {
        let normalized = email.trim().to_lowercase();
        validate_email(&normalized)?;

        let mut emails = self
            .emails
            .lock()
            .map_err(|e| SubscribeError::Internal(e.to_string()))?;

        if emails.insert(normalized) {
            Ok(Subscription::New)
        } else {
            Ok(Subscription::AlreadySubscribed)
        }
    }

    pub fn count(&self) -> usize {
        self.emails.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn contains(&self, email: &str) -> bool {
        let normalized = email.trim().to_lowercase();
        self.emails
            .lock()
            .map(|e| e.contains(&normalized))
            .unwrap_or(false)
    }
}
