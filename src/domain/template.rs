//! The PayNow Merchant Presented Mode profile.
//!
//! The profile is a static, immutable definition. [`paynow_template`] builds a
//! fresh owned tree from it for every generation so no state survives between
//! calls.

use super::data_object::{DataObject, ObjectList};

pub const PAYLOAD_FORMAT_INDICATOR: &str = "00";
pub const INITIATION_METHOD: &str = "01";
pub const MERCHANT_ACCOUNT_INFORMATION: &str = "26";
pub const MERCHANT_CATEGORY_CODE: &str = "52";
pub const TRANSACTION_CURRENCY: &str = "53";
pub const TRANSACTION_AMOUNT: &str = "54";
pub const COUNTRY_CODE: &str = "58";
pub const MERCHANT_NAME: &str = "59";
pub const MERCHANT_CITY: &str = "60";
pub const ADDITIONAL_DATA: &str = "62";
pub const CRC: &str = "63";

/// Children of Merchant Account Information (26).
pub mod account {
    pub const GLOBALLY_UNIQUE_IDENTIFIER: &str = "00";
    pub const PROXY_TYPE: &str = "01";
    pub const PROXY_VALUE: &str = "02";
    pub const AMOUNT_EDITABLE: &str = "03";
    pub const EXPIRY_DATE: &str = "04";
}

/// Children of Additional Data Field Template (62).
pub mod additional {
    pub const BILL_NUMBER: &str = "01";
}

struct FieldDef {
    tag: &'static str,
    name: &'static str,
    comment: &'static str,
    value: &'static str,
}

enum RootDef {
    Field(FieldDef),
    Template(FieldDef, &'static [FieldDef]),
    Checksum(FieldDef),
}

const fn field(tag: &'static str, name: &'static str, comment: &'static str) -> FieldDef {
    FieldDef {
        tag,
        name,
        comment,
        value: "",
    }
}

const ACCOUNT_FIELDS: &[FieldDef] = &[
    field(
        account::GLOBALLY_UNIQUE_IDENTIFIER,
        "Globally Unique Identifier",
        "An Application Identifier (AID), a UUID without hyphens or a reverse domain name.",
    ),
    field(account::PROXY_TYPE, "Proxy type", "0 - Mobile number, 2 - UEN"),
    field(account::PROXY_VALUE, "Proxy Value", "Mobile/UEN number"),
    field(
        account::AMOUNT_EDITABLE,
        "Editable Transaction amount indicator",
        "0 - amount cannot be edited, 1 - amount can be edited",
    ),
    field(
        account::EXPIRY_DATE,
        "QR Expiry Date",
        "Optional, YYYYMMDD or YYYYMMDDHHMMSS.",
    ),
];

const ADDITIONAL_FIELDS: &[FieldDef] = &[field(
    additional::BILL_NUMBER,
    "Bill Number",
    "Transaction reference.",
)];

const PROFILE: &[RootDef] = &[
    RootDef::Field(FieldDef {
        tag: PAYLOAD_FORMAT_INDICATOR,
        name: "Payload Format Indicator",
        comment: "Shall be the 1st data object in QR code. Shall contain value of 01.",
        value: "01",
    }),
    RootDef::Field(field(
        INITIATION_METHOD,
        "Point of Initiation Method",
        "11 for a reusable QR code, 12 for a new QR code per transaction.",
    )),
    RootDef::Template(
        field(
            MERCHANT_ACCOUNT_INFORMATION,
            "Merchant Account Information",
            "Templates reserved for additional payment networks.",
        ),
        ACCOUNT_FIELDS,
    ),
    RootDef::Field(field(
        MERCHANT_CATEGORY_CODE,
        "Merchant Category Code",
        "As defined by ISO 18245.",
    )),
    RootDef::Field(field(
        TRANSACTION_CURRENCY,
        "Transaction Currency",
        "3-digit numeric currency code according to ISO 4217. SGD is 702.",
    )),
    RootDef::Field(field(
        TRANSACTION_AMOUNT,
        "Transaction Amount",
        "Absent if the consumer is to enter the transaction amount.",
    )),
    RootDef::Field(field(
        COUNTRY_CODE,
        "Country Code",
        "As defined by ISO 3166-1 alpha 2.",
    )),
    RootDef::Field(field(
        MERCHANT_NAME,
        "Merchant Name",
        "Trade name of the merchant, NA if not applicable.",
    )),
    RootDef::Field(field(MERCHANT_CITY, "Merchant City", "Defaults to Singapore.")),
    RootDef::Template(
        field(ADDITIONAL_DATA, "Additional Data Field Template", ""),
        ADDITIONAL_FIELDS,
    ),
    RootDef::Checksum(field(
        CRC,
        "CRC",
        "Checksum over all preceding data objects, always the last object.",
    )),
];

fn leaf(def: &FieldDef) -> DataObject {
    DataObject::leaf(def.tag, def.name, def.comment, def.value)
}

/// Builds an independent copy of the PayNow data object tree.
pub fn paynow_template() -> ObjectList {
    PROFILE
        .iter()
        .map(|root| match root {
            RootDef::Field(def) => leaf(def),
            RootDef::Template(def, children) => DataObject::parent(
                def.tag,
                def.name,
                def.comment,
                children.iter().map(leaf).collect(),
            ),
            RootDef::Checksum(def) => DataObject::checksum(def.tag, def.name, def.comment),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_order() {
        let tree = paynow_template();
        assert_eq!(
            tree.tags().collect::<Vec<_>>(),
            ["00", "01", "26", "52", "53", "54", "58", "59", "60", "62", "63"]
        );
    }

    #[test]
    fn test_account_children() {
        let tree = paynow_template();
        let children = tree.get(MERCHANT_ACCOUNT_INFORMATION).and_then(|o| o.children()).unwrap();
        assert_eq!(children.tags().collect::<Vec<_>>(), ["00", "01", "02", "03", "04"]);
        assert!(children.iter().all(|child| child.children().is_none()));
    }

    #[test]
    fn test_copies_are_independent() {
        let mut first = paynow_template();
        first.upsert(MERCHANT_NAME, "Changed", None).unwrap();
        first.remove(TRANSACTION_AMOUNT, None);

        let second = paynow_template();
        assert_eq!(second.get(MERCHANT_NAME).unwrap().value(), "");
        assert!(second.get(TRANSACTION_AMOUNT).is_some());
    }

    #[test]
    fn test_payload_format_indicator_preset() {
        let tree = paynow_template();
        assert_eq!(tree.get(PAYLOAD_FORMAT_INDICATOR).unwrap().value(), "01");
    }
}
