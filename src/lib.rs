//! # pay-agency
//!
//! Typed async client for the PayAgency payment-processing API: card
//! payments, hosted checkout, alternative payment methods, payouts, crypto
//! on/off-ramp, payment links, refunds and transaction history.
//!
//! The client handles environment selection (test vs. live, derived from
//! the secret-key prefix), bearer authentication, base-URL normalization
//! and transparent AES-256-CBC payload encryption, so integrators call
//! strongly-typed methods instead of constructing raw HTTP requests.
//!
//! ## Usage
//!
//! ```no_run
//! use pay_agency::{ClientConfig, PayAgency};
//! use pay_agency::types::RefundRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PayAgency::new(
//!         ClientConfig::builder()
//!             .encryption_key("0123456789abcdef0123456789abcdef")
//!             .secret_key("PA_TEST_your_secret_key")
//!             .build(),
//!     )?;
//!
//!     let refund = client
//!         .refund(
//!             RefundRequest::builder()
//!                 .reason("Customer request")
//!                 .transaction_id("TXN123456")
//!                 .build(),
//!         )
//!         .await?;
//!     println!("refund status: {}", refund.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every failure is one of three distinguishable kinds: [`Error::Config`]
//! (bad key material, raised at construction), [`Error::Api`] (the service
//! answered with status >= 400 or an unreadable body) and
//! [`Error::Network`] (no HTTP response at all). Nothing is retried
//! automatically.

pub mod client;
pub mod config;
pub mod encryption;
pub mod envelope;
pub mod errors;
pub mod resources;
pub mod types;

pub use client::PayAgency;
pub use config::{ClientConfig, Environment};
pub use envelope::RequestEnvelope;
pub use errors::{Error, Result};
