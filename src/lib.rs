//! PayNow QR payload generation.
//!
//! Builds EMVCo Merchant Presented Mode payloads for Singapore's PayNow
//! scheme: a flat string of tag-length-value data objects terminated by a
//! CRC-16/CCITT-FALSE checksum.
//!
//! ```no_run
//! use paynow_qr::{QrOptions, generate_qr_code};
//!
//! let options = QrOptions {
//!     uen: Some("201403121W".to_string()),
//!     merchant_name: "MyMerchant".to_string(),
//!     ..Default::default()
//! };
//! let payload = generate_qr_code(&options)?;
//! # Ok::<(), paynow_qr::error::QrError>(())
//! ```

pub mod application;
pub mod domain;
pub mod encoding;
pub mod error;
pub mod interfaces;
pub mod support;

pub use application::generator::{QrCode, QrGenerator, generate_qr_code};
pub use domain::options::{ProxyType, QrOptions};
pub use error::{QrError, Result};
