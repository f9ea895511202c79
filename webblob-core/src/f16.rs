//! IEEE 754 half-precision codec
//!
//! A 16-bit pattern (sign:1, exponent:5, mantissa:10, bias 15) interpretable
//! either as a raw unsigned integer or as a binary16 float. Encoding from
//! f64 rounds to nearest even, saturates to signed infinity on overflow and
//! flushes below the subnormal range. Decoding widens exactly; every finite
//! bit pattern survives a decode/encode round trip unchanged.

use crate::element::{ElementKind, ViewElement};
use bytemuck::{Pod, Zeroable};

#[cfg(feature = "alloc")]
use crate::error::{BlobError, Result};
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

const SIGN_MASK: u16 = 0x8000;
const EXP_MASK: u16 = 0x7c00;
const MAN_MASK: u16 = 0x03ff;
const INFINITY_BITS: u16 = 0x7c00;

/// One half-precision value, stored as its raw bit pattern
///
/// Equality is bit-pattern equality, so unlike `f64` two NaN values with the
/// same payload compare equal and `0.0` and `-0.0` compare unequal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(transparent)]
pub struct F16(u16);

impl F16 {
    /// Positive infinity
    pub const INFINITY: F16 = F16(INFINITY_BITS);
    /// Negative infinity
    pub const NEG_INFINITY: F16 = F16(SIGN_MASK | INFINITY_BITS);
    /// Largest finite value (65504.0)
    pub const MAX: F16 = F16(0x7bff);
    /// Smallest positive subnormal value (2^-24)
    pub const MIN_POSITIVE_SUBNORMAL: F16 = F16(0x0001);

    /// Reinterpret a raw bit pattern as a half-precision value
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Get the raw bit pattern
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Read one value from two little-endian bytes
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    /// Write this value as two little-endian bytes
    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Check whether this pattern encodes NaN
    pub const fn is_nan(self) -> bool {
        self.0 & EXP_MASK == EXP_MASK && self.0 & MAN_MASK != 0
    }

    /// Encode an f64 as half precision, rounding to nearest even
    ///
    /// Overflow saturates to signed infinity; magnitudes below half the
    /// smallest subnormal flush to signed zero; NaN stays NaN.
    pub fn from_f64(value: f64) -> Self {
        let bits = value.to_bits();
        let sign = ((bits >> 48) & 0x8000) as u16;
        let exp = ((bits >> 52) & 0x7ff) as i32;
        let man = bits & 0x000f_ffff_ffff_ffff;

        if exp == 0x7ff {
            return if man == 0 {
                // Signed infinity
                Self(sign | INFINITY_BITS)
            } else {
                // Quiet NaN, keeping the top payload bits
                Self(sign | EXP_MASK | 0x0200 | ((man >> 43) as u16 & 0x01ff))
            };
        }

        let unbiased = exp - 1023;

        if unbiased > 15 {
            return Self(sign | INFINITY_BITS);
        }

        if unbiased >= -14 {
            // Normal range: keep 10 mantissa bits, round on the dropped 42.
            let half = sign | (((unbiased + 15) as u16) << 10) | ((man >> 42) as u16);
            return Self(round_to_nearest_even(half, man, 1 << 41));
        }

        if unbiased < -25 {
            // Below half the smallest subnormal: signed zero
            return Self(sign);
        }

        // Subnormal range: shift the full 53-bit significand (implicit bit
        // restored) down to a multiple of 2^-24, rounding the dropped bits.
        let man = man | 0x0010_0000_0000_0000;
        let shift = (28 - unbiased) as u64;
        let half = sign | ((man >> shift) as u16);
        Self(round_to_nearest_even(half, man, 1 << (shift - 1)))
    }

    /// Decode this pattern to f64
    ///
    /// The widening is exact for every finite pattern; NaN payloads stay NaN.
    pub fn to_f64(self) -> f64 {
        let sign = ((self.0 & SIGN_MASK) as u64) << 48;
        let exp = ((self.0 & EXP_MASK) >> 10) as u64;
        let man = (self.0 & MAN_MASK) as u64;

        if exp == 0x1f {
            return if man == 0 {
                f64::from_bits(sign | 0x7ff0_0000_0000_0000)
            } else {
                f64::from_bits(sign | 0x7ff8_0000_0000_0000 | (man << 42))
            };
        }

        if exp == 0 {
            if man == 0 {
                return f64::from_bits(sign);
            }
            // Subnormal: an exact integer multiple of 2^-24
            let magnitude = man as f64 * f64::from_bits(0x3e70_0000_0000_0000);
            return if sign != 0 { -magnitude } else { magnitude };
        }

        // Normal: rebias the exponent (1023 - 15 = 1008) and widen the mantissa
        f64::from_bits(sign | ((exp + 1008) << 52) | (man << 42))
    }
}

/// Round a truncated half pattern to nearest even
///
/// `round_bit` marks the highest dropped significand bit; the mask below it
/// covers the sticky bits, and the bit above it is the result's mantissa lsb.
/// A carry out of the mantissa walks into the exponent, which yields exactly
/// the required saturation to infinity at the top of the range.
fn round_to_nearest_even(half: u16, man: u64, round_bit: u64) -> u16 {
    if man & round_bit != 0 && man & (3 * round_bit - 1) != 0 {
        half + 1
    } else {
        half
    }
}

impl ViewElement for F16 {
    fn kind() -> ElementKind {
        ElementKind::F16
    }
}

impl From<f64> for F16 {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<F16> for f64 {
    fn from(value: F16) -> Self {
        value.to_f64()
    }
}

/// A contiguous sequence of half-precision values
///
/// Backed by one element per 2 little-endian bytes. Construction from f64
/// values encodes element-wise in order; construction from raw bytes
/// reinterprets byte pairs without conversion.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct F16Array {
    elems: Vec<F16>,
}

#[cfg(feature = "alloc")]
impl F16Array {
    /// Encode a slice of f64 values element-wise, in order
    pub fn from_f64_slice(values: &[f64]) -> Self {
        Self {
            elems: values.iter().map(|&v| F16::from_f64(v)).collect(),
        }
    }

    /// Reinterpret little-endian bytes as half-precision elements
    ///
    /// No numeric conversion happens; every 2 bytes become one element.
    /// Fails with `MisalignedView` when the length is odd.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 2 != 0 {
            return Err(BlobError::MisalignedView);
        }
        let elems = bytes
            .chunks_exact(2)
            .map(|pair| F16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Ok(Self { elems })
    }

    /// Write out the elements as little-endian byte pairs
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.elems.len() * 2);
        for elem in &self.elems {
            bytes.extend_from_slice(&elem.to_le_bytes());
        }
        bytes
    }

    /// Get the elements as a slice
    pub fn as_slice(&self) -> &[F16] {
        &self.elems
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Check whether the array holds no elements
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }
}

#[cfg(feature = "alloc")]
impl From<Vec<F16>> for F16Array {
    fn from(elems: Vec<F16>) -> Self {
        Self { elems }
    }
}

#[cfg(feature = "alloc")]
impl core::ops::Index<usize> for F16Array {
    type Output = F16;

    fn index(&self, index: usize) -> &F16 {
        &self.elems[index]
    }
}
