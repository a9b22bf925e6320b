//! Resource dispatchers: each maps a logical operation to an HTTP method
//! and an environment-dependent endpoint path, decides the encryption
//! policy, and forwards the caller's document unmodified.

pub mod crypto;
pub mod payment;
pub mod payment_link;
pub mod payout;
pub mod refund;
pub mod transaction;

pub use crypto::Crypto;
pub use payment::Payment;
pub use payment_link::PaymentLink;
pub use payout::Payout;
pub use refund::Refund;
pub use transaction::Transaction;
