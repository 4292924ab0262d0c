use crate::domain::data_object::ObjectList;
use crate::domain::options::QrOptions;
use crate::domain::ports::{Clock, SystemClock};
use crate::domain::template::{self, account, additional, paynow_template};
use crate::domain::validation::{ParamKind, validate_param};
use crate::encoding::tlv::serialize;
use crate::error::{QrError, Result};
use crate::support::{default_reference, format_timestamp};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

const INITIATION_METHODS: [&str; 2] = ["11", "12"];
const AMOUNT_EDITABLE_FLAGS: [&str; 2] = ["0", "1"];
const MERCHANT_CATEGORY_CODE: &str = "0000";

/// A generated payload together with the data objects it was encoded from.
#[derive(Debug, Clone, Serialize)]
pub struct QrCode {
    pub payload: String,
    pub objects: ObjectList,
}

impl QrCode {
    /// The bill number carried in the Additional Data Field Template.
    pub fn reference_number(&self) -> Option<Cow<'_, str>> {
        self.objects
            .get(template::ADDITIONAL_DATA)?
            .children()?
            .get(additional::BILL_NUMBER)
            .map(|bill| bill.value())
    }
}

/// Builds PayNow payloads.
///
/// Every call works on its own copy of the PayNow profile, so a single
/// generator can be shared freely.
#[derive(Debug, Default, Clone)]
pub struct QrGenerator<C: Clock = SystemClock> {
    clock: C,
}

impl QrGenerator {
    /// Creates a generator that reads the local system time.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> QrGenerator<C> {
    /// Creates a generator with a custom time source.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Validates `options` and returns the encoded payload.
    ///
    /// Checks run in a fixed order and the first failure is returned.
    pub fn generate(&self, options: &QrOptions) -> Result<String> {
        self.build(options).map(|qr| qr.payload)
    }

    /// Like [`generate`](Self::generate), but also returns the populated
    /// data objects.
    pub fn build(&self, options: &QrOptions) -> Result<QrCode> {
        let objects = self.compose(options)?;
        let payload = serialize(&objects)?;
        debug!(length = payload.len(), "generated PayNow payload");
        Ok(QrCode { payload, objects })
    }

    /// Validates `options` and returns the populated data object tree
    /// without encoding it.
    pub fn compose(&self, options: &QrOptions) -> Result<ObjectList> {
        let now = self.clock.now();
        let mut tree = paynow_template();

        if !INITIATION_METHODS.contains(&options.initiation_method.as_str()) {
            return Err(QrError::InvalidInitiationMethod(
                options.initiation_method.clone(),
            ));
        }
        tree.upsert(template::INITIATION_METHOD, options.initiation_method.as_str(), None)?;

        let reference = options
            .reference_number
            .clone()
            .unwrap_or_else(|| default_reference(&now));
        validate_param(
            "reference_number",
            Some(reference.as_str()),
            99,
            ParamKind::AlphanumericSpecial,
        )?;
        validate_param(
            "merchant_name",
            Some(options.merchant_name.as_str()),
            25,
            ParamKind::AlphanumericSpecial,
        )?;

        if !AMOUNT_EDITABLE_FLAGS.contains(&options.amount_editable.as_str()) {
            return Err(QrError::InvalidAmountEditable(options.amount_editable.clone()));
        }

        let (proxy_type, proxy_value) = options.payee().ok_or(QrError::MissingPayeeIdentifier)?;
        validate_param("payee", Some(proxy_value), 16, ParamKind::AlphanumericSpecial)?;
        debug!(?proxy_type, "selected payee identifier");
        let mai = template::MERCHANT_ACCOUNT_INFORMATION;
        tree.upsert(mai, proxy_type.code(), Some(account::PROXY_TYPE))?;
        tree.upsert(mai, proxy_value, Some(account::PROXY_VALUE))?;

        match options.amount {
            Some(amount) => {
                let amount = amount.normalize().to_string();
                validate_param("amount", Some(amount.as_str()), 13, ParamKind::Number)?;
                tree.upsert(mai, options.amount_editable.as_str(), Some(account::AMOUNT_EDITABLE))?;
                tree.upsert(template::TRANSACTION_AMOUNT, amount, None)?;
            }
            None => {
                tree.upsert(mai, "1", Some(account::AMOUNT_EDITABLE))?;
                tree.remove(template::TRANSACTION_AMOUNT, None);
            }
        }

        validate_param(
            "transaction_currency",
            Some(options.transaction_currency.as_str()),
            3,
            ParamKind::Number,
        )?;
        validate_param(
            "country_code",
            Some(options.country_code.as_str()),
            2,
            ParamKind::Alphanumeric,
        )?;
        validate_param(
            "merchant_city",
            Some(options.merchant_city.as_str()),
            15,
            ParamKind::Alphanumeric,
        )?;
        validate_param(
            "unique_identifier",
            Some(options.unique_identifier.as_str()),
            9,
            ParamKind::AlphanumericSpecial,
        )?;
        tree.upsert(
            mai,
            options.unique_identifier.as_str(),
            Some(account::GLOBALLY_UNIQUE_IDENTIFIER),
        )?;

        let timestamp = format_timestamp(&now);
        match validate_param(
            "expiry_date",
            options.expiry_date.as_deref(),
            14,
            ParamKind::ExpiryDate { now: &timestamp },
        )? {
            Some(expiry) => tree.upsert(mai, expiry, Some(account::EXPIRY_DATE))?,
            None => tree.remove(mai, Some(account::EXPIRY_DATE)),
        }

        tree.upsert(template::MERCHANT_CATEGORY_CODE, MERCHANT_CATEGORY_CODE, None)?;
        tree.upsert(template::TRANSACTION_CURRENCY, options.transaction_currency.as_str(), None)?;
        tree.upsert(template::COUNTRY_CODE, options.country_code.as_str(), None)?;
        tree.upsert(template::MERCHANT_NAME, options.merchant_name.as_str(), None)?;
        tree.upsert(template::MERCHANT_CITY, options.merchant_city.as_str(), None)?;
        tree.upsert(template::ADDITIONAL_DATA, reference, Some(additional::BILL_NUMBER))?;

        Ok(tree)
    }
}

/// Generates a PayNow payload using the local system time.
pub fn generate_qr_code(options: &QrOptions) -> Result<String> {
    QrGenerator::new().generate(options)
}
