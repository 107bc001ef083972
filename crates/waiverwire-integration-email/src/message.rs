//! Outgoing email construction

use lettre::message::{header::ContentType, Mailbox};
use lettre::Message;
use waiverwire::{DeliveryError, Digest, MailConfig};

/// Fixed subject line of every digest email
pub const SUBJECT: &str = "🏈 Waiver Wire Pickups - This Week";

/// A single plain-text email carrying one digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingEmail {
    /// Address the digest from the configured sender to the configured recipient
    pub fn for_digest(config: &MailConfig, digest: &Digest) -> Self {
        Self {
            from: config.sender.clone(),
            to: config.recipient.clone(),
            subject: SUBJECT.to_string(),
            body: digest.to_string(),
        }
    }

    /// Build the wire message
    pub fn to_message(&self) -> Result<Message, DeliveryError> {
        Message::builder()
            .from(parse_mailbox(&self.from)?)
            .to(parse_mailbox(&self.to)?)
            .subject(self.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(self.body.clone())
            .map_err(|e| DeliveryError::Message(e.to_string()))
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address.parse().map_err(|e: lettre::address::AddressError| DeliveryError::Address {
        address: address.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mail_config() -> MailConfig {
        MailConfig {
            sender: "bot@example.com".to_string(),
            password: "app-password".to_string(),
            recipient: "me@example.com".to_string(),
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 465,
        }
    }

    #[test]
    fn test_email_carries_digest_verbatim() {
        let digest = Digest::compose("PICK UP PLAYER X", &["http://a".to_string()]).unwrap();
        let email = OutgoingEmail::for_digest(&mail_config(), &digest);

        assert_eq!(
            email,
            OutgoingEmail {
                from: "bot@example.com".to_string(),
                to: "me@example.com".to_string(),
                subject: "🏈 Waiver Wire Pickups - This Week".to_string(),
                body: digest.to_string(),
            }
        );
    }

    #[test]
    fn test_wire_message_headers() {
        let digest = Digest::compose("PICK UP PLAYER X", &[]).unwrap();
        let message = OutgoingEmail::for_digest(&mail_config(), &digest)
            .to_message()
            .unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert_eq!(message.headers().get_raw("Subject"), Some(SUBJECT));
        assert!(raw.contains("Subject: "));
        assert!(raw.contains("From: bot@example.com"));
        assert!(raw.contains("To: me@example.com"));
        assert!(raw.contains("Content-Type: text/plain; charset=utf-8"));
        assert!(raw.contains("PICK UP PLAYER X"));
    }

    #[test]
    fn test_invalid_recipient() {
        let mut config = mail_config();
        config.recipient = "not-an-address".to_string();
        let digest = Digest::compose("PICK UP PLAYER X", &[]).unwrap();

        let err = OutgoingEmail::for_digest(&config, &digest)
            .to_message()
            .unwrap_err();
        assert!(
            matches!(err, DeliveryError::Address { ref address, .. } if address == "not-an-address")
        );
    }
}
