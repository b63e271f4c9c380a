//! Typed Rust client for the SMS Owl HTTP API.
//!
//! The crate is split into a domain layer of value and request types, a transport layer
//! for the JSON wire format, and a small client layer issuing the requests.
//!
//! ```rust,no_run
//! use smsowl::{Credentials, PromotionalSms, SmsKind, SmsOwlClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsowl::SmsOwlError> {
//!     let client = SmsOwlClient::new(Credentials::new("account-id", "api-key"));
//!     let request = PromotionalSms::new("SENDER", "+919876543210", "hello")
//!         .with_kind(SmsKind::Flash);
//!     let sms_id = client.send_promotional_sms(request).await?;
//!     println!("queued {sms_id}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{SMSOWL_ENDPOINT, SmsOwlClient, SmsOwlClientBuilder, SmsOwlError};
pub use domain::{
    AccountId, ApiKey, BULK_MAX_RECIPIENTS, BulkPromotionalSms, Credentials, DndType,
    MessageText, PhoneNumber, Placeholders, PromotionalSms, RawPhoneNumber, SenderId, SmsId,
    SmsKind, TemplateId, TransactionalSms, ValidationError,
};
