//! Batch interfaces: CSV payment requests in, CSV payloads out.

pub mod csv;
