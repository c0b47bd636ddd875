use crate::error::WireError;

/// Borrow `width` bytes starting at `offset`, or report how short the buffer is.
///
/// Every fixed-offset read in the workspace goes through this function, so the
/// bounds check lives in exactly one place. `checked_add` guards against
/// `offset + width` overflowing on adversarial offsets.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if `buf` holds fewer than `offset + width` bytes.
pub fn field(buf: &[u8], offset: usize, width: usize) -> Result<&[u8], WireError> {
    offset
        .checked_add(width)
        .and_then(|end| buf.get(offset..end))
        .ok_or(WireError::UnexpectedEof {
            offset,
            needed: width,
            available: buf.len().saturating_sub(offset),
        })
}

/// Read a single byte at `offset`.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if `offset` is past the end of `buf`.
pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8, WireError> {
    Ok(field(buf, offset, 1)?[0])
}

/// Read a fixed-size byte array at `offset`.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if fewer than `N` bytes remain at `offset`.
pub fn read_array<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N], WireError> {
    let bytes = field(buf, offset, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Read a big-endian (network order) `u16` at `offset`.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if fewer than 2 bytes remain at `offset`.
pub fn read_u16_be(buf: &[u8], offset: usize) -> Result<u16, WireError> {
    Ok(u16::from_be_bytes(read_array(buf, offset)?))
}

/// Read a big-endian `u32` at `offset`.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if fewer than 4 bytes remain at `offset`.
pub fn read_u32_be(buf: &[u8], offset: usize) -> Result<u32, WireError> {
    Ok(u32::from_be_bytes(read_array(buf, offset)?))
}

/// Read a 6-byte big-endian unsigned integer into the low 48 bits of a `u64`.
///
/// ```text
///   wire:   b0 b1 b2 b3 b4 b5
///   value:  00 00 b0 b1 b2 b3 b4 b5   (as a big-endian u64)
/// ```
///
/// The top 16 bits of the result are always zero.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if fewer than 6 bytes remain at `offset`.
pub fn read_u48_be(buf: &[u8], offset: usize) -> Result<u64, WireError> {
    let [b0, b1, b2, b3, b4, b5] = read_array::<6>(buf, offset)?;
    Ok(u64::from_be_bytes([0, 0, b0, b1, b2, b3, b4, b5]))
}

/// Read a big-endian `u64` at `offset`. Byte 0 is the most significant.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if fewer than 8 bytes remain at `offset`.
pub fn read_u64_be(buf: &[u8], offset: usize) -> Result<u64, WireError> {
    Ok(u64::from_be_bytes(read_array(buf, offset)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u64_is_big_endian() {
        let buf = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01];
        assert_eq!(read_u64_be(&buf, 0).unwrap(), 1);
    }

    #[test]
    fn u64_high_half_is_not_swapped() {
        let buf = [0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(read_u64_be(&buf, 0).unwrap(), 1 << 32);
    }

    #[test]
    fn u48_lands_in_low_bits() {
        let buf = [0xFF, 0x00, 0x00, 0x00, 0x00, 0x03, 0xE8];
        assert_eq!(read_u48_be(&buf, 1).unwrap(), 1000);

        let max = [0xFF; 6];
        assert_eq!(read_u48_be(&max, 0).unwrap(), (1 << 48) - 1);
    }

    #[test]
    fn u16_and_u32() {
        let buf = [0x00, 0x0C, 0xDE, 0xAD, 0xBE, 0xEF];
        assert_eq!(read_u16_be(&buf, 0).unwrap(), 12);
        assert_eq!(read_u32_be(&buf, 2).unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn short_read_reports_offset_and_shortfall() {
        let buf = [0u8; 10];
        let err = read_u64_be(&buf, 5).unwrap_err();
        assert!(matches!(
            err,
            WireError::UnexpectedEof {
                offset: 5,
                needed: 8,
                available: 5
            }
        ));
    }

    #[test]
    fn offset_past_end() {
        let buf = [0u8; 3];
        assert!(matches!(
            read_u8(&buf, 7),
            Err(WireError::UnexpectedEof { available: 0, .. })
        ));
    }

    #[test]
    fn huge_offset_does_not_overflow() {
        let buf = [0u8; 3];
        assert!(field(&buf, usize::MAX, 8).is_err());
    }

    #[test]
    fn read_array_copies_exact_bytes() {
        let buf = b"xAAPL    y";
        let sym: [u8; 8] = read_array(buf, 1).unwrap();
        assert_eq!(&sym, b"AAPL    ");
    }
}
