#![allow(dead_code)]

use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a batch file with `rows` UEN requests and ascending amounts.
pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["reference_number", "uen", "amount"])?;

    for i in 1..=rows {
        wtr.write_record([format!("INV-{i}"), "123456789A".to_string(), format!("{i}.50")])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Splits a flat TLV string into `(tag, length, value)` triples, checking
/// that every length field matches its value.
pub fn split_tlv(data: &str) -> Vec<(String, String, String)> {
    let mut fields = Vec::new();
    let mut rest = data;
    while !rest.is_empty() {
        let (tag, tail) = rest.split_at(2);
        let (length, tail) = tail.split_at(2);
        let count: usize = length.parse().expect("numeric length field");
        let (value, tail) = tail.split_at(count);
        assert_eq!(value.chars().count(), count, "length of tag {tag}");
        fields.push((tag.to_string(), length.to_string(), value.to_string()));
        rest = tail;
    }
    fields
}

/// Asserts the structural invariants of a payload: consistent length fields
/// at both levels and a trailing CRC object.
pub fn assert_well_formed(payload: &str) {
    let fields = split_tlv(payload);
    let (tag, length, crc) = fields.last().expect("at least one field");
    assert_eq!((tag.as_str(), length.as_str()), ("63", "04"));
    assert!(crc.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));

    for (tag, _, value) in &fields {
        if tag == "26" || tag == "62" {
            split_tlv(value);
        }
    }
}
