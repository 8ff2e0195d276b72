//! Contact form submission: store the message, then ask for an email.
//!
//! The two effects run strictly in sequence. A failed notify does not undo the
//! stored message and nothing is retried; the caller only learns that the
//! submission as a whole failed.

use std::future::Future;

use thiserror::Error;

use crate::models::ContactMessage;
use crate::repo::{Content, ContentStore, StoreError};

/// Route of the HTTP function that emails a submission to the site owner.
pub const SEND_CONTACT_EMAIL_PATH: &str = "/functions/send-contact-email";

pub const SENT_NOTICE: &str = "Message sent successfully!";
pub const FAILED_NOTICE: &str = "Failed to send message. Please try again.";

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Could not store message: {0}")]
    Store(#[from] StoreError),

    #[error("Could not send notification: {0}")]
    Notify(String),
}

/// Delivers a submitted message to the site owner.
pub trait Notifier {
    fn notify(&self, message: &ContactMessage) -> impl Future<Output = Result<(), String>>;
}

impl<S: ContentStore> Content<S> {
    /// Insert `message`, then notify. Both must succeed.
    pub async fn submit_contact<N: Notifier>(
        &self,
        notifier: &N,
        message: &ContactMessage,
    ) -> Result<(), ContactError> {
        self.insert_message(message).await?;
        notifier
            .notify(message)
            .await
            .map_err(ContactError::Notify)?;
        tracing::info!(subject = %message.subject, "Contact message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Table;
    use crate::testing::{Call, SpyStore};
    use std::sync::{Arc, Mutex};

    /// Records what it was asked to send, and the store calls seen by then.
    #[derive(Clone, Default)]
    struct SpyNotifier {
        sent: Arc<Mutex<Vec<(ContactMessage, usize)>>>,
        store: Option<SpyStore>,
        fail: bool,
    }

    impl Notifier for SpyNotifier {
        async fn notify(&self, message: &ContactMessage) -> Result<(), String> {
            let seen = self.store.as_ref().map_or(0, |s| s.calls().len());
            self.sent.lock().unwrap().push((message.clone(), seen));
            if self.fail {
                Err("Failed to send email".into())
            } else {
                Ok(())
            }
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "A".into(),
            email: "a@x.com".into(),
            subject: "S".into(),
            message: "M".into(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_notify_with_same_payload() {
        let spy = SpyStore::new();
        let content = Content::new(spy.clone());
        let notifier = SpyNotifier {
            store: Some(spy.clone()),
            ..SpyNotifier::default()
        };

        content.submit_contact(&notifier, &message()).await.unwrap();

        assert_eq!(spy.calls(), vec![Call::Insert(Table::Messages, 1)]);
        let rows = spy.inner().rows(Table::Messages);
        assert_eq!(rows.len(), 1);
        let stored: ContactMessage = serde_json::from_value(rows[0].clone()).unwrap();
        assert_eq!(stored, message());

        let sent = notifier.sent.lock().unwrap().clone();
        // notified once, after the insert had already been made
        assert_eq!(sent, vec![(message(), 1)]);
    }

    #[tokio::test]
    async fn test_failed_insert_skips_notify() {
        let spy = SpyStore::failing_writes();
        let content = Content::new(spy.clone());
        let notifier = SpyNotifier::default();

        let err = content.submit_contact(&notifier, &message()).await.unwrap_err();

        assert!(matches!(err, ContactError::Store(_)));
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_notify_keeps_stored_message() {
        let spy = SpyStore::new();
        let content = Content::new(spy.clone());
        let notifier = SpyNotifier {
            fail: true,
            ..SpyNotifier::default()
        };

        let err = content.submit_contact(&notifier, &message()).await.unwrap_err();

        assert!(matches!(err, ContactError::Notify(_)));
        assert_eq!(spy.inner().rows(Table::Messages).len(), 1);
        assert_eq!(spy.count(|c| matches!(c, Call::Delete(..))), 0);
    }
}
