//! CRC-16/CCITT-FALSE as required by EMVCo for the CRC data object.

const POLYNOMIAL: u16 = 0x1021;
const INITIAL: u16 = 0xFFFF;

/// Tag and fixed length of the checksum object. They are part of the
/// checksummed input; the checksum value itself is not.
pub const CHECKSUM_HEADER: &str = "6304";

/// CRC-16/CCITT-FALSE: no reflection, no final XOR.
pub fn crc16(data: &[u8]) -> u16 {
    data.iter().fold(INITIAL, |crc, &byte| {
        (0..8).fold(crc ^ (u16::from(byte) << 8), |crc, _| {
            if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            }
        })
    })
}

/// Four uppercase hex digits of the checksum over `prefix` + `6304`.
pub fn checksum_hex(prefix: &str) -> String {
    let mut input = String::with_capacity(prefix.len() + CHECKSUM_HEADER.len());
    input.push_str(prefix);
    input.push_str(CHECKSUM_HEADER);
    format!("{:04X}", crc16(input.as_bytes()))
}

/// Returns `prefix` followed by the complete checksum object.
pub fn append_checksum(prefix: &str) -> String {
    format!("{prefix}{CHECKSUM_HEADER}{}", checksum_hex(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value() {
        assert_eq!(crc16(b"123456789"), 0x29B1);
    }

    #[test]
    fn test_empty_input_is_initial_register() {
        assert_eq!(crc16(b""), 0xFFFF);
    }

    #[test]
    fn test_checksum_covers_header() {
        assert_eq!(checksum_hex("000201"), format!("{:04X}", crc16(b"0002016304")));
    }

    #[test]
    fn test_hex_is_padded_uppercase() {
        let hex = checksum_hex("000201010212");
        assert_eq!(hex.len(), 4);
        assert!(hex.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_append_checksum() {
        let payload = append_checksum("000201");
        assert!(payload.starts_with("0002016304"));
        assert_eq!(payload.len(), "000201".len() + 8);
    }
}
