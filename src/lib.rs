//! Typed Rust client for the DecisionTelecom (IT-Decision) SMS and Viber HTTP APIs.
//!
//! The crate is split in three layers: a domain layer of strong types, a transport layer for
//! wire-format quirks, and a small client layer orchestrating requests.
//!
//! Every operation returns `Result<Outcome<T, E>, DecisionTelecomError>`. Errors the gateway
//! reports on purpose (wrong credentials, bad phone number, ...) arrive as
//! [`Outcome::Fail`]; the outer error is reserved for transport failures and responses that
//! could not be understood.
//!
//! ```rust,no_run
//! use decisiontelecom::{
//!     MessageText, Outcome, RawPhoneNumber, SenderId, SmsAuth, SmsClient, SmsMessage,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), decisiontelecom::DecisionTelecomError> {
//!     let client = SmsClient::new(SmsAuth::new("login", "password")?);
//!     let message = SmsMessage::new(
//!         RawPhoneNumber::new("380631111111")?,
//!         SenderId::new("it-decision")?,
//!         MessageText::new("hello")?,
//!     )
//!     .with_delivery(true);
//!
//!     match client.send_message(&message).await? {
//!         Outcome::Ok(id) => println!("sent: {id}"),
//!         Outcome::Fail(code) => println!("rejected: {code:?}"),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    DecisionTelecomError, SmsAuth, SmsClient, SmsClientBuilder, ViberClient, ViberClientBuilder,
    ViberPlusSmsClient,
};
pub use domain::{
    AccessKey, ButtonCaption, Login, MessageText, Outcome, Password, PhoneNumber, RawPhoneNumber,
    SenderId, SmsBalance, SmsErrorCode, SmsMessage, SmsMessageId, SmsMessageStatus,
    ValidationError, ValidityPeriod, ViberButton, ViberError, ViberMessage, ViberMessageId,
    ViberMessageReceipt, ViberMessageSourceType, ViberMessageStatus, ViberMessageType,
    ViberOptions, ViberPlusSmsMessage, ViberPlusSmsMessageReceipt,
};
