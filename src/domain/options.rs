use rust_decimal::Decimal;

/// Inputs of a PayNow payload.
///
/// Defaults follow the PayNow profile for a dynamic QR code in Singapore
/// dollars. Exactly one of `uen` or `phone` has to be set before generating.
#[derive(Debug, Clone, PartialEq)]
pub struct QrOptions {
    /// `11` for a reusable static code, `12` for a single transaction.
    pub initiation_method: String,
    /// Bill number. Generated per call when absent.
    pub reference_number: Option<String>,
    pub merchant_name: String,
    pub amount: Option<Decimal>,
    /// `0` locks the amount, `1` lets the payer edit it.
    pub amount_editable: String,
    /// Unique Entity Number. Takes precedence over `phone`.
    pub uen: Option<String>,
    /// Mobile number including the country prefix, e.g. `+6591234567`.
    pub phone: Option<String>,
    /// `YYYYMMDD` or `YYYYMMDDHHMMSS`.
    pub expiry_date: Option<String>,
    pub transaction_currency: String,
    pub country_code: String,
    pub merchant_city: String,
    pub unique_identifier: String,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            initiation_method: "12".to_string(),
            reference_number: None,
            merchant_name: "NA".to_string(),
            amount: None,
            amount_editable: "0".to_string(),
            uen: None,
            phone: None,
            expiry_date: None,
            transaction_currency: "702".to_string(),
            country_code: "SG".to_string(),
            merchant_city: "Singapore".to_string(),
            unique_identifier: "SG.PAYNOW".to_string(),
        }
    }
}

/// Kind of payee identifier carried in the Merchant Account Information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyType {
    Mobile,
    Uen,
}

impl ProxyType {
    pub fn code(self) -> &'static str {
        match self {
            Self::Mobile => "0",
            Self::Uen => "2",
        }
    }
}

impl QrOptions {
    /// The payee identifier to encode. UEN wins when both are set; empty
    /// strings count as not set.
    pub fn payee(&self) -> Option<(ProxyType, &str)> {
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }

        present(&self.uen)
            .map(|uen| (ProxyType::Uen, uen))
            .or_else(|| present(&self.phone).map(|phone| (ProxyType::Mobile, phone)))
    }
}
