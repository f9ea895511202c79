//! Element kinds for typed numeric views
//!
//! A typed numeric view contributes the raw in-memory byte layout of a
//! contiguous run of same-width elements. This module defines the element
//! taxonomy and the trait that maps Rust scalar types into it.

/// Element kinds recognized in typed numeric views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ElementKind {
    /// 8-bit unsigned integer
    U8 = 0,
    /// 8-bit signed integer
    I8 = 1,
    /// 16-bit unsigned integer
    U16 = 2,
    /// 16-bit signed integer
    I16 = 3,
    /// 32-bit unsigned integer
    U32 = 4,
    /// 32-bit signed integer
    I32 = 5,
    /// 64-bit unsigned integer
    U64 = 6,
    /// 64-bit signed integer
    I64 = 7,
    /// IEEE 754 half-precision float
    F16 = 8,
    /// 32-bit floating point
    F32 = 9,
    /// 64-bit floating point
    F64 = 10,
}

impl ElementKind {
    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ElementKind::U8),
            1 => Some(ElementKind::I8),
            2 => Some(ElementKind::U16),
            3 => Some(ElementKind::I16),
            4 => Some(ElementKind::U32),
            5 => Some(ElementKind::I32),
            6 => Some(ElementKind::U64),
            7 => Some(ElementKind::I64),
            8 => Some(ElementKind::F16),
            9 => Some(ElementKind::F32),
            10 => Some(ElementKind::F64),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Get the size in bytes of one element of this kind
    pub const fn size_bytes(self) -> usize {
        match self {
            ElementKind::U8 | ElementKind::I8 => 1,
            ElementKind::U16 | ElementKind::I16 | ElementKind::F16 => 2,
            ElementKind::U32 | ElementKind::I32 | ElementKind::F32 => 4,
            ElementKind::U64 | ElementKind::I64 | ElementKind::F64 => 8,
        }
    }
}

impl core::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ElementKind::U8 => write!(f, "u8"),
            ElementKind::I8 => write!(f, "i8"),
            ElementKind::U16 => write!(f, "u16"),
            ElementKind::I16 => write!(f, "i16"),
            ElementKind::U32 => write!(f, "u32"),
            ElementKind::I32 => write!(f, "i32"),
            ElementKind::U64 => write!(f, "u64"),
            ElementKind::I64 => write!(f, "i64"),
            ElementKind::F16 => write!(f, "f16"),
            ElementKind::F32 => write!(f, "f32"),
            ElementKind::F64 => write!(f, "f64"),
        }
    }
}

/// Trait for scalar types that can back a typed numeric view
///
/// All view element types must be:
/// - Pod: plain-old-data, safe to reinterpret as raw bytes
/// - PartialEq: comparable for equality
/// - Sized: have a known width at compile time
pub trait ViewElement: bytemuck::Pod + PartialEq {
    /// Get the ElementKind representation for this element type
    fn kind() -> ElementKind;

    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }
}

macro_rules! impl_view_element {
    ($type:ty, $kind:ident) => {
        impl ViewElement for $type {
            fn kind() -> ElementKind {
                ElementKind::$kind
            }
        }
    };
}

impl_view_element!(u8, U8);
impl_view_element!(i8, I8);
impl_view_element!(u16, U16);
impl_view_element!(i16, I16);
impl_view_element!(u32, U32);
impl_view_element!(i32, I32);
impl_view_element!(u64, U64);
impl_view_element!(i64, I64);
impl_view_element!(f32, F32);
impl_view_element!(f64, F64);
