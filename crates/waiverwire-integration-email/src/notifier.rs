//! SMTP implementation of the Notifier port

use std::fmt::Display;

use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};
use waiverwire::config::{EMAIL_PASSWORD, RECIPIENT_EMAIL, SENDER_EMAIL};
use waiverwire::{ConfigError, DeliveryError, Digest, MailConfig, Notifier};

use crate::message::OutgoingEmail;

/// Sends each digest as one email through an authenticated relay
pub struct SmtpNotifier {
    config: MailConfig,
}

impl SmtpNotifier {
    /// Create a notifier. Sender, password and recipient must be non-empty.
    pub fn new(config: MailConfig) -> Result<Self, ConfigError> {
        for (key, value) in [
            (SENDER_EMAIL, &config.sender),
            (EMAIL_PASSWORD, &config.password),
            (RECIPIENT_EMAIL, &config.recipient),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::missing(key));
            }
        }

        Ok(Self { config })
    }

    /// Implicit-TLS transport, alive only for the duration of one send
    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, DeliveryError> {
        let credentials =
            Credentials::new(self.config.sender.clone(), self.config.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)
            .map_err(|e| DeliveryError::Smtp(e.to_string()))?
            .port(self.config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(transport)
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, digest: &Digest) -> Result<(), DeliveryError> {
        let message = OutgoingEmail::for_digest(&self.config, digest).to_message()?;
        let transport = self.transport()?;

        debug!(
            host = %self.config.smtp_host,
            port = %self.config.smtp_port,
            "Opening SMTP session"
        );

        let response = deliver(&transport, message).await?;

        if !response.is_positive() {
            return Err(DeliveryError::Rejected {
                code: response.code().to_string(),
                message: response.message().collect::<Vec<_>>().join(" "),
            });
        }

        info!("📧 Email delivered to {}", self.config.recipient);
        Ok(())
    }

    fn name(&self) -> &str {
        "email"
    }
}

/// Hand one message to a transport
async fn deliver<T>(transport: &T, message: Message) -> Result<T::Ok, DeliveryError>
where
    T: AsyncTransport + Sync,
    T::Error: Display,
{
    transport
        .send(message)
        .await
        .map_err(|e| DeliveryError::Smtp(e.to_string()))
}
