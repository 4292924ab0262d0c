use crate::domain::options::QrOptions;
use crate::error::{QrError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of a batch file.
///
/// Columns are named after the [`QrOptions`] fields. Any column may be left
/// out or left empty, in which case the base options apply. Two exceptions:
/// `uen` and `phone` are taken from the base only when the row has neither,
/// and `reference_number` never comes from the base.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct PaymentRequest {
    pub initiation_method: Option<String>,
    pub reference_number: Option<String>,
    pub merchant_name: Option<String>,
    pub amount: Option<Decimal>,
    pub amount_editable: Option<String>,
    pub uen: Option<String>,
    pub phone: Option<String>,
    pub expiry_date: Option<String>,
    pub transaction_currency: Option<String>,
    pub country_code: Option<String>,
    pub merchant_city: Option<String>,
    pub unique_identifier: Option<String>,
}

impl PaymentRequest {
    /// Overlays the values of this row on `base`.
    pub fn into_options(self, base: &QrOptions) -> QrOptions {
        let base = base.clone();
        // The payee is one choice; a row naming either identifier replaces both.
        let (uen, phone) = if self.uen.is_some() || self.phone.is_some() {
            (self.uen, self.phone)
        } else {
            (base.uen, base.phone)
        };

        QrOptions {
            initiation_method: self.initiation_method.unwrap_or(base.initiation_method),
            // Bill numbers are per payload, so a shared one is not inherited.
            reference_number: self.reference_number,
            merchant_name: self.merchant_name.unwrap_or(base.merchant_name),
            amount: self.amount.or(base.amount),
            amount_editable: self.amount_editable.unwrap_or(base.amount_editable),
            uen,
            phone,
            expiry_date: self.expiry_date.or(base.expiry_date),
            transaction_currency: self
                .transaction_currency
                .unwrap_or(base.transaction_currency),
            country_code: self.country_code.unwrap_or(base.country_code),
            merchant_city: self.merchant_city.unwrap_or(base.merchant_city),
            unique_identifier: self.unique_identifier.unwrap_or(base.unique_identifier),
        }
    }
}

/// Reads payment requests from a CSV source.
///
/// Whitespace around fields is trimmed and rows may have fewer columns than
/// the header.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(QrError::from))
    }
}
