//! Signed variable-length integers
//!
//! Zig-zag mapping followed by base-128 little-endian groups, continuation
//! bit `0x80`. Bit-compatible with Go's `binary.PutVarint` / `binary.Varint`
//! and protobuf `sint64`.

/// Maximum encoded length of a 64-bit value.
pub const MAX_VARINT_LEN64: usize = 10;

/// Maximum encoded length of a 32-bit value.
pub const MAX_VARINT_LEN32: usize = 5;

#[inline]
fn zigzag(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

#[inline]
fn unzigzag(u: u64) -> i64 {
    ((u >> 1) as i64) ^ -((u & 1) as i64)
}

/// Write `v` into `buf`, returning the number of bytes written.
///
/// `buf` must hold at least [`MAX_VARINT_LEN64`] bytes (or
/// [`MAX_VARINT_LEN32`] when `v` is known to fit in an `i32`).
pub fn put_varint(buf: &mut [u8], v: i64) -> usize {
    let mut u = zigzag(v);
    let mut i = 0;
    while u >= 0x80 {
        buf[i] = (u as u8) | 0x80;
        u >>= 7;
        i += 1;
    }
    buf[i] = u as u8;
    i + 1
}

/// Read a varint from the front of `buf`.
///
/// Returns the value and the number of bytes consumed, or `None` if `buf`
/// ends before the last group or the value overflows 64 bits.
pub fn read_varint(buf: &[u8]) -> Option<(i64, usize)> {
    let mut u: u64 = 0;
    let mut shift = 0u32;
    for (i, &b) in buf.iter().enumerate() {
        if i == MAX_VARINT_LEN64 {
            return None;
        }
        if b < 0x80 {
            // the tenth group may only carry the top bit
            if i == MAX_VARINT_LEN64 - 1 && b > 1 {
                return None;
            }
            return Some((unzigzag(u | (u64::from(b) << shift)), i + 1));
        }
        u |= u64::from(b & 0x7f) << shift;
        shift += 7;
    }
    None
}
