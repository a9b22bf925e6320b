//! Request and response documents for every API operation.
//!
//! The wire shapes are owned by each resource; the client core never
//! constrains them beyond "JSON in, JSON out". Optional fields are omitted
//! from the serialized body rather than sent as `null`.

pub mod common;
pub mod crypto;
pub mod payment;
pub mod payment_link;
pub mod payout;
pub mod refund;
pub mod transaction;

pub use common::{ChargebackInfo, CustomerInfo, PaymentData, PaymentStatus, RefundInfo};
pub use crypto::{
    CryptoCurrenciesRequest, CryptoCurrenciesResponse, CryptoCurrency, CryptoPaymentLinkRequest,
    CryptoPaymentRequest, CryptoPaymentResponse, CryptoPaymentResponseData, CryptoPayinRequest,
    CryptoPayinResponse, CryptoPayinResponseData, OffRampLinkRequest, OffRampRequest,
    OnRampLinkRequest, OnRampRequest, PayinLinkRequest, TransactionType,
};
pub use payment::{
    ApmPaymentRequest, HostedPaymentRequest, PaymentResponse, PaymentResponseData,
    S2sPaymentRequest,
};
pub use payment_link::{
    PaymentLinkRequest, PaymentLinkResponse, PaymentTemplate, PaymentTemplatesResponse,
};
pub use payout::{
    EstimateFeeData, EstimateFeeRequest, EstimateFeeResponse, PayoutRequest, PayoutResponse,
    PayoutStatusResponse, WalletInfo, WalletStatus, WalletsResponse,
};
pub use refund::{RefundRequest, RefundResponse, RefundResponseData};
pub use transaction::{
    TransactionInfo, TransactionMeta, TransactionQuery, TransactionsResponse,
};
