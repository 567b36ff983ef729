//! [`BigInt`] encoding and decoding: base-256 byte strings, and textual
//! bases 2, 10, and 16.

use super::BigInt;
use crate::{decimal, Limb, Word};
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Deserializer, Serialize, Serializer};

impl BigInt {
    /// Decode a magnitude from big-endian bytes.
    ///
    /// Leading zero bytes are accepted and ignored; the empty slice decodes
    /// to zero.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut limbs = Vec::with_capacity((bytes.len() + Limb::BYTES - 1) / Limb::BYTES);

        for chunk in bytes.rchunks(Limb::BYTES) {
            let mut word: Word = 0;
            for &byte in chunk {
                word = (word << 8) | byte as Word;
            }
            limbs.push(Limb(word));
        }

        Self::from_magnitude(false, limbs)
    }

    /// Encode the magnitude as a minimal big-endian byte string.
    ///
    /// Returns the empty vector for zero. The sign is not encoded: for any
    /// non-negative value whose first byte is non-zero, the result round
    /// trips through [`BigInt::from_be_bytes`].
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.limbs.len() * Limb::BYTES);
        let mut iter = self.limbs.iter().rev();

        if let Some(hi) = iter.next() {
            let skip = (hi.leading_zeros() / 8) as usize;
            out.extend_from_slice(&hi.0.to_be_bytes()[skip..]);
        }

        for limb in iter {
            out.extend_from_slice(&limb.0.to_be_bytes());
        }

        out
    }

    /// Parse a value from a string in the given radix.
    ///
    /// An optional leading `-` sets the sign. Radix 16 additionally accepts
    /// an optional `0x`/`0X` prefix. Characters that are not digits of the
    /// radix are skipped, and a string with no digits parses as zero.
    /// A radix other than 2, 10, or 16 yields zero.
    pub fn from_str_radix(src: &str, radix: u32) -> Self {
        match radix {
            2 => parse_binary(src),
            10 => decimal::parse(src),
            16 => parse_hex(src),
            _ => Self::zero(),
        }
    }
}

/// Split an optional leading `-` off a numeric literal.
pub(crate) fn strip_sign(src: &str) -> (bool, &str) {
    match src.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, src),
    }
}

fn decode_hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Pack hex nibbles (most significant first) into big-endian bytes,
/// left-padding an odd-length sequence with a zero nibble.
fn nibbles_to_bytes(nibbles: &[u8]) -> Vec<u8> {
    nibbles
        .rchunks(2)
        .rev()
        .map(|chunk| chunk.iter().fold(0u8, |acc, &d| (acc << 4) | d))
        .collect()
}

fn parse_hex(src: &str) -> BigInt {
    let (negative, body) = strip_sign(src);
    let body = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
        .unwrap_or(body);

    let nibbles: Vec<u8> = body.bytes().filter_map(decode_hex_digit).collect();
    let mut ret = BigInt::from_be_bytes(&nibbles_to_bytes(&nibbles));
    ret.negative = negative && !ret.is_zero();
    ret
}

fn parse_binary(src: &str) -> BigInt {
    let (negative, body) = strip_sign(src);
    let bits: Vec<u8> = body
        .bytes()
        .filter_map(|b| match b {
            b'0' => Some(0),
            b'1' => Some(1),
            _ => None,
        })
        .collect();

    // regroup into hex nibbles and share the base-16 byte packing
    let nibbles: Vec<u8> = bits
        .rchunks(4)
        .rev()
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b))
        .collect();

    let mut ret = BigInt::from_be_bytes(&nibbles_to_bytes(&nibbles));
    ret.negative = negative && !ret.is_zero();
    ret
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        if f.alternate() {
            f.write_str("0x")?;
        }
        match self.limbs.split_last() {
            None => f.write_str("0"),
            Some((hi, rest)) => {
                write!(f, "{:x}", hi.0)?;
                for limb in rest.iter().rev() {
                    write!(f, "{:0width$x}", limb.0, width = Limb::BYTES * 2)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        if f.alternate() {
            f.write_str("0x")?;
        }
        match self.limbs.split_last() {
            None => f.write_str("0"),
            Some((hi, rest)) => {
                write!(f, "{:X}", hi.0)?;
                for limb in rest.iter().rev() {
                    write!(f, "{:0width$X}", limb.0, width = Limb::BYTES * 2)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        if f.alternate() {
            f.write_str("0b")?;
        }
        match self.limbs.split_last() {
            None => f.write_str("0"),
            Some((hi, rest)) => {
                write!(f, "{:b}", hi.0)?;
                for limb in rest.iter().rev() {
                    write!(f, "{:0width$b}", limb.0, width = Limb::BITS as usize)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // sign byte followed by the big-endian magnitude
        let mut bytes = Vec::with_capacity(1 + self.limbs.len() * Limb::BYTES);
        bytes.push(self.negative as u8);
        bytes.extend_from_slice(&self.to_be_bytes());
        serdect::slice::serialize_hex_lower_or_bin(&bytes, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        if bytes.is_empty() {
            return Ok(Self::zero());
        }

        let mut ret = Self::from_be_bytes(&bytes[1..]);
        ret.negative = bytes[0] != 0 && !ret.is_zero();
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::BigInt;
    use alloc::format;
    use hex_literal::hex;

    #[test]
    fn from_be_bytes() {
        let bytes = hex!("00112233445566778899aabbccddeeff");
        let n = BigInt::from_be_bytes(&bytes);
        assert_eq!(n, BigInt::from(0x00112233445566778899aabbccddeeffu128));
    }

    #[test]
    fn be_bytes_round_trip() {
        let bytes = hex!("112233445566778899aabbccddeeff0102");
        let n = BigInt::from_be_bytes(&bytes);
        assert_eq!(&*n.to_be_bytes(), bytes.as_slice());
    }

    #[test]
    fn to_be_bytes_minimal() {
        assert!(BigInt::zero().to_be_bytes().is_empty());
        assert_eq!(BigInt::from(0x1ffu32).to_be_bytes(), &[0x01, 0xff]);
    }

    #[test]
    fn parse_hex_prefix_and_sign() {
        assert_eq!(BigInt::from_str_radix("0x32", 16), BigInt::from(50u8));
        assert_eq!(BigInt::from_str_radix("32", 16), BigInt::from(50u8));
        assert_eq!(BigInt::from_str_radix("-0Xff", 16), BigInt::from(-255i32));
    }

    #[test]
    fn parse_hex_skips_non_digits() {
        assert_eq!(
            BigInt::from_str_radix("12_34 cd", 16),
            BigInt::from(0x1234cdu32)
        );
    }

    #[test]
    fn parse_hex_odd_length() {
        assert_eq!(BigInt::from_str_radix("fff", 16), BigInt::from(0xfffu32));
    }

    #[test]
    fn parse_hex_empty_is_zero() {
        assert!(BigInt::from_str_radix("", 16).is_zero());
        assert!(BigInt::from_str_radix("-", 16).is_zero());
        assert!(!BigInt::from_str_radix("-", 16).is_negative());
    }

    #[test]
    fn parse_binary_agrees_with_hex() {
        assert_eq!(
            BigInt::from_str_radix("101101", 2),
            BigInt::from_str_radix("2d", 16)
        );
        assert_eq!(
            BigInt::from_str_radix("-1111", 2),
            BigInt::from_str_radix("-f", 16)
        );
    }

    #[test]
    fn unknown_radix_yields_zero() {
        assert!(BigInt::from_str_radix("777", 8).is_zero());
        assert!(BigInt::from_str_radix("-123", 0).is_zero());
        assert!(BigInt::from_str_radix("ff", 36).is_zero());
    }

    #[test]
    fn hex_formatting() {
        let n = BigInt::from_str_radix("-112233445566778899aabbccddeeff0102", 16);
        assert_eq!(format!("{:x}", n), "-112233445566778899aabbccddeeff0102");
        assert_eq!(format!("{:#x}", BigInt::from(255u8)), "0xff");
        assert_eq!(format!("{:X}", BigInt::from(255u8)), "FF");
        assert_eq!(format!("{:x}", BigInt::zero()), "0");
    }

    #[test]
    fn binary_formatting() {
        assert_eq!(format!("{:b}", BigInt::from(0b101101u8)), "101101");
        assert_eq!(format!("{:#b}", BigInt::from(-2i8)), "-0b10");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let values = [
            BigInt::zero(),
            BigInt::from(0x7711223344556600u64),
            BigInt::from(-0x7711223344556600i64),
            BigInt::from(u128::MAX),
        ];

        for value in &values {
            let serialized = bincode::serialize(value).unwrap();
            let deserialized: BigInt = bincode::deserialize(&serialized).unwrap();
            assert_eq!(*value, deserialized);
        }
    }

    #[test]
    fn fmt_round_trip_across_limbs() {
        let n = BigInt::from_str_radix("123456789abcdef0123456789abcdef012345", 16);
        assert_eq!(
            BigInt::from_str_radix(&format!("{:x}", n), 16),
            n
        );
        assert_eq!(BigInt::from_str_radix(&format!("{:b}", n), 2), n);
    }
}
