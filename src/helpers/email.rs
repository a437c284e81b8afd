use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::{info, warn};

use crate::error::NotificationError;

pub const DEFAULT_SMTP_PORT: u16 = 587;

const FOOTER: &str =
    "\n\nCheck live cabin availability: https://www.brittany-ferries.co.uk/cabin-availability";

/// Delivers a subject/body notification somewhere.
///
/// Implementations report failures to the caller and leave logging to it.
pub trait Notifier {
    fn send(
        &self,
        subject: &str,
        body: &str,
    ) -> impl Future<Output = Result<(), NotificationError>>;
}

/// SMTP delivery settings. Every field except the port is optional so an
/// unconfigured mailer can be carried around and simply skipped.
#[derive(Clone, Debug)]
pub struct EmailSettings {
    pub to: Option<String>,
    pub from: Option<String>,
    pub host: Option<String>,
    pub port: u16,
    pub user: Option<String>,
    pub pass: Option<String>,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            to: None,
            from: None,
            host: None,
            port: DEFAULT_SMTP_PORT,
            user: None,
            pass: None,
        }
    }
}

struct Delivery<'a> {
    to: &'a str,
    from: &'a str,
    host: &'a str,
    port: u16,
    user: &'a str,
    pass: &'a str,
}

impl EmailSettings {
    fn delivery(&self) -> Option<Delivery<'_>> {
        Some(Delivery {
            to: self.to.as_deref()?,
            from: self.from.as_deref()?,
            host: self.host.as_deref()?,
            port: self.port,
            user: self.user.as_deref()?,
            pass: self.pass.as_deref()?,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.delivery().is_some()
    }
}

/// Sends notifications over SMTP with STARTTLS and password auth.
#[derive(Clone, Debug)]
pub struct EmailNotifier {
    settings: EmailSettings,
}

impl EmailNotifier {
    pub fn new(settings: EmailSettings) -> Self {
        if !settings.is_complete() {
            warn!("Email settings are not fully configured, notifications will be skipped");
        }
        Self { settings }
    }
}

impl Notifier for EmailNotifier {
    async fn send(&self, subject: &str, body: &str) -> Result<(), NotificationError> {
        let Some(delivery) = self.settings.delivery() else {
            warn!("Email settings are not fully configured, skipping '{}'", subject);
            return Ok(());
        };

        info!("Preparing to send email with subject: {}", subject);
        let email = compose_message(delivery.from, delivery.to, subject, body)?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(delivery.host)?
            .port(delivery.port)
            .credentials(Credentials::new(
                delivery.user.to_string(),
                delivery.pass.to_string(),
            ))
            .build();

        let response = mailer.send(email).await?;
        info!("Notification email sent ({})", response.code());
        Ok(())
    }
}

pub fn with_footer(body: &str) -> String {
    format!("{body}{FOOTER}")
}

fn compose_message(
    from: &str,
    to: &str,
    subject: &str,
    body: &str,
) -> Result<Message, NotificationError> {
    let message = Message::builder()
        .from(from.parse::<Mailbox>()?)
        .to(to.parse::<Mailbox>()?)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(with_footer(body))?;
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> EmailSettings {
        EmailSettings {
            to: Some("me@example.com".into()),
            from: Some("Cabin Watch <watch@example.com>".into()),
            host: Some("smtp.example.com".into()),
            port: 2525,
            user: Some("watch".into()),
            pass: Some("hunter2".into()),
        }
    }

    #[test]
    fn footer_is_appended() {
        assert_eq!(
            with_footer("Cabin(s) available"),
            "Cabin(s) available\n\nCheck live cabin availability: https://www.brittany-ferries.co.uk/cabin-availability"
        );
    }

    #[test]
    fn any_missing_setting_makes_it_incomplete() {
        assert!(complete().is_complete());
        assert!(!EmailSettings::default().is_complete());

        let strips: [fn(&mut EmailSettings); 5] = [
            |s| s.to = None,
            |s| s.from = None,
            |s| s.host = None,
            |s| s.user = None,
            |s| s.pass = None,
        ];
        for strip in strips {
            let mut settings = complete();
            strip(&mut settings);
            assert!(!settings.is_complete());
        }
    }

    #[test]
    fn composed_message_carries_headers_and_footer() {
        let message = compose_message(
            "watch@example.com",
            "me@example.com",
            "Cabin available for 2024-06-01 14:30",
            "Cabin(s) available for 2024-06-01 14:30 at index 0: 3",
        )
        .unwrap();

        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: Cabin available for 2024-06-01 14:30"));
        assert!(raw.contains("To: me@example.com"));
        assert!(raw.contains("Check live cabin availability"));
    }

    #[test]
    fn bad_address_is_a_notification_error() {
        let err = compose_message("not an address", "me@example.com", "s", "b").unwrap_err();
        assert!(matches!(err, NotificationError::Address(_)));
    }

    #[tokio::test]
    async fn incomplete_settings_skip_without_error() {
        let notifier = EmailNotifier::new(EmailSettings {
            pass: None,
            ..complete()
        });
        assert!(notifier.send("subject", "body").await.is_ok());
    }

    #[tokio::test]
    async fn delivery_failure_is_returned_to_caller() {
        let notifier = EmailNotifier::new(EmailSettings {
            host: Some("127.0.0.1".into()),
            port: 1,
            ..complete()
        });
        let err = notifier.send("subject", "body").await.unwrap_err();
        assert!(matches!(err, NotificationError::Smtp(_)));
    }
}
