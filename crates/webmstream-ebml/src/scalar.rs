//! Typed decoders for fixed-length element payloads.

use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};

use crate::{Error, Result};

/// Seconds between the Unix epoch and the Matroska epoch
/// (2001-01-01T00:00:00 UTC).
pub const MATROSKA_EPOCH_UNIX_SECS: i64 = 978_307_200;

/// The Matroska date epoch.
pub fn matroska_epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(MATROSKA_EPOCH_UNIX_SECS, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Big-endian unsigned integer over 0 to 8 bytes. An empty payload is 0.
pub fn uint(bytes: &[u8]) -> Result<u64> {
    if bytes.len() > 8 {
        return Err(Error::InvalidIntWidth { width: bytes.len() });
    }
    Ok(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
}

/// Big-endian two's complement integer over 0 to 8 bytes.
pub fn int(bytes: &[u8]) -> Result<i64> {
    let raw = uint(bytes)?;
    let width = bytes.len() as u32 * 8;
    if width == 0 || width == 64 {
        return Ok(raw as i64);
    }
    // Sign-extend from the payload width.
    let shift = 64 - width;
    Ok(((raw << shift) as i64) >> shift)
}

/// IEEE-754 single (4 bytes) or double (8 bytes). Any other width, empty
/// included, is rejected.
pub fn float(bytes: &[u8]) -> Result<f64> {
    match bytes.len() {
        4 => Ok(f32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as f64),
        8 => Ok(f64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ])),
        width => Err(Error::InvalidFloatWidth { width }),
    }
}

/// UTF-8 text, cut at the first NUL. Invalid sequences are replaced.
pub fn string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Signed nanoseconds since the Matroska epoch, exactly 8 bytes.
pub fn date(bytes: &[u8]) -> Result<DateTime<Utc>> {
    if bytes.len() != 8 {
        return Err(Error::InvalidDateWidth { width: bytes.len() });
    }
    let nanos = int(bytes)?;
    Ok(matroska_epoch() + chrono::Duration::nanoseconds(nanos))
}

/// Opaque payload, returned as is.
pub fn binary(bytes: Bytes) -> Bytes {
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_uint() {
        assert_eq!(uint(&[]).unwrap(), 0);
        assert_eq!(uint(&[0x0F, 0x42, 0x40]).unwrap(), 1_000_000);
        assert_eq!(uint(&[0xFF; 8]).unwrap(), u64::MAX);
        assert_matches!(uint(&[0; 9]), Err(Error::InvalidIntWidth { width: 9 }));
    }

    #[test]
    fn test_int_sign_extension() {
        assert_eq!(int(&[0xFF]).unwrap(), -1);
        assert_eq!(int(&[0x7F]).unwrap(), 127);
        assert_eq!(int(&[0xFF, 0x38]).unwrap(), -200);
        assert_eq!(int(&[0x80, 0x00, 0x00]).unwrap(), -8_388_608);
        assert_eq!(int(&[0xFF; 8]).unwrap(), -1);
        assert_eq!(int(&[]).unwrap(), 0);
    }

    #[test]
    fn test_float_widths() {
        assert_eq!(float(&1.5f32.to_be_bytes()).unwrap(), 1.5);
        assert_eq!(float(&12345.678f64.to_be_bytes()).unwrap(), 12345.678);
        assert_matches!(float(&[]), Err(Error::InvalidFloatWidth { width: 0 }));
        assert_matches!(float(&[0; 3]), Err(Error::InvalidFloatWidth { width: 3 }));
        assert_matches!(float(&[0; 10]), Err(Error::InvalidFloatWidth { width: 10 }));
    }

    #[test]
    fn test_string_truncates_at_nul() {
        assert_eq!(string(b"webm\0\0\0"), "webm");
        assert_eq!(string(b"matroska"), "matroska");
        assert_eq!(string(b"\0abc"), "");
    }

    #[test]
    fn test_date_epoch() {
        let d = date(&[0; 8]).unwrap();
        assert_eq!(d.to_rfc3339(), "2001-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_date_offsets() {
        let one_day_ns: i64 = 86_400 * 1_000_000_000;
        let d = date(&one_day_ns.to_be_bytes()).unwrap();
        assert_eq!(d.to_rfc3339(), "2001-01-02T00:00:00+00:00");

        let before = date(&(-one_day_ns).to_be_bytes()).unwrap();
        assert_eq!(before.to_rfc3339(), "2000-12-31T00:00:00+00:00");

        assert_matches!(date(&[0; 4]), Err(Error::InvalidDateWidth { width: 4 }));
    }

    #[test]
    fn test_binary_identity() {
        let payload = Bytes::from_static(&[1, 2, 3]);
        assert_eq!(binary(payload.clone()), payload);
    }
}
