//! Outbound mail stand-in.

use async_trait::async_trait;

use vellum_core::ports::{MailError, Mailer, OutgoingMessage};

/// Logs the assembled message instead of delivering it.
///
/// Real delivery belongs to an external mail service implementing the same
/// port; until one exists, accepted messages are only recorded in the log.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_message(&self, message: OutgoingMessage) -> Result<(), MailError> {
        tracing::info!(
            to = %message.to,
            from = %message.from_email,
            subject = %message.subject,
            "Contact message accepted (delivery not implemented)"
        );
        Ok(())
    }
}
