//! Outbound message delivery port.

use async_trait::async_trait;

/// A contact message assembled by the web layer.
#[derive(Debug, Clone)]
pub struct OutgoingMessage {
    pub to: String,
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub body: String,
}

/// Delivery collaborator. The core only validates and assembles messages;
/// implementations decide the transport.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Hand a message over for delivery.
    async fn send_message(&self, message: OutgoingMessage) -> Result<(), MailError>;
}

/// Delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Delivery failed: {0}")]
    Delivery(String),
}
