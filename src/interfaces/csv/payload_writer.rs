use crate::application::generator::QrCode;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct PayloadRecord<'a> {
    reference_number: &'a str,
    payload: &'a str,
}

/// Writes generated payloads as `reference_number,payload` CSV rows.
pub struct PayloadWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PayloadWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, qr: &QrCode) -> Result<()> {
        let reference = qr.reference_number().unwrap_or_default();
        self.writer.serialize(PayloadRecord {
            reference_number: &reference,
            payload: &qr.payload,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
