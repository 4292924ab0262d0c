//! Wire encoding of the data object tree: TLV serialization and the CRC16
//! checksum that terminates every payload.

pub mod crc16;
pub mod tlv;
