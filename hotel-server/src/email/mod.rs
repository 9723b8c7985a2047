//! Booking confirmation mailer
//!
//! Outbound SMTP (STARTTLS relay, credentials from [`SmtpConfig`]). Sending
//! is best-effort: callers log failures and carry on, a booking never fails
//! because the mail did not go out.

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::core::SmtpConfig;
use crate::db::models::Booking;

/// Mailer errors
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Message build error: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Confirmation mailer over an async SMTP transport
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl Mailer {
    /// Build a mailer from SMTP configuration
    ///
    /// Returns `None` when credentials are missing or the relay host is
    /// rejected; the caller runs without confirmation emails in that case.
    pub fn from_config(config: &SmtpConfig) -> Option<Self> {
        let (username, password) = match (&config.username, &config.password) {
            (Some(u), Some(p)) => (u.clone(), p.clone()),
            _ => return None,
        };

        let builder = match AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.relay) {
            Ok(b) => b,
            Err(e) => {
                tracing::error!(relay = %config.relay, error = %e, "Invalid SMTP relay");
                return None;
            }
        };

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(username.clone(), password))
            .build();

        Some(Self {
            transport,
            from: username,
        })
    }

    /// The From address (the SMTP username)
    pub fn from_address(&self) -> &str {
        &self.from
    }

    /// Send the booking confirmation for a freshly created booking
    pub async fn send_booking_confirmation(&self, booking: &Booking) -> Result<(), EmailError> {
        let subject = format!("Booking Confirmation - Room {}", booking.room_number);

        let body = format!(
            "Dear {name},\n\
             \n\
             Your booking has been successfully confirmed!\n\
             \n\
             Booking Details:\n\
             Room Number: {room_number}\n\
             Room Type: {room_type}\n\
             Check-in Date: {check_in}\n\
             Check-out Date: {check_out}\n\
             Total Price: ₹{price}\n\
             \n\
             Please check in before {check_in}.\n\
             \n\
             Thank you for choosing Abhyudaya Residency Hotel!\n\
             Warm regards,\n\
             Abhyudaya Residency Management\n",
            name = booking.name,
            room_number = booking.room_number,
            room_type = booking.room_type,
            check_in = booking.check_in,
            check_out = booking.check_out,
            price = booking.price,
        );

        let message = Message::builder()
            .from(self.from.parse::<Mailbox>()?)
            .to(booking.email.parse::<Mailbox>()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        self.transport.send(message).await?;

        tracing::info!(to = %booking.email, room_number = %booking.room_number, "Confirmation email sent");
        Ok(())
    }
}
