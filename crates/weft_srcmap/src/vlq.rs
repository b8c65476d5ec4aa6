//! Base64 VLQ codec for source-map mapping segments.

/// The base64 alphabet used by VLQ-encoded mappings.
const BASE64_CHARS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Appends the VLQ encoding of `value` to `out`.
///
/// The sign bit is stored in the least significant bit of the first digit;
/// each digit carries five payload bits plus a continuation bit.
pub fn encode(value: i64, out: &mut String) {
    let mut vlq: u64 = if value < 0 {
        ((value.unsigned_abs()) << 1) | 1
    } else {
        (value as u64) << 1
    };
    loop {
        let mut digit = (vlq & 0x1f) as u8;
        vlq >>= 5;
        if vlq > 0 {
            digit |= 0x20;
        }
        out.push(BASE64_CHARS[digit as usize] as char);
        if vlq == 0 {
            break;
        }
    }
}

/// Decodes one VLQ value from `segment` starting at `*pos`.
///
/// Advances `*pos` past the consumed digits. Returns `None` when `*pos` is at
/// the end of the segment, a non-alphabet byte is encountered, or a
/// continuation run is too long to fit in an `i64`.
pub fn decode(segment: &str, pos: &mut usize) -> Option<i64> {
    let bytes = segment.as_bytes();
    let mut result: i64 = 0;
    let mut shift = 0u32;
    loop {
        let digit = i64::from(decode_char(*bytes.get(*pos)?)?);
        *pos += 1;
        // No valid offset needs more than 12 digits; a longer run would
        // overflow the shift.
        if shift > 58 {
            return None;
        }
        result |= (digit & 0x1f) << shift;
        if digit & 0x20 == 0 {
            break;
        }
        shift += 5;
    }
    let value = result >> 1;
    Some(if result & 1 == 1 { -value } else { value })
}

fn decode_char(b: u8) -> Option<u8> {
    match b {
        b'A'..=b'Z' => Some(b - b'A'),
        b'a'..=b'z' => Some(b - b'a' + 26),
        b'0'..=b'9' => Some(b - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}
