#![no_std]

//! webblob-core - Definitions for immutable binary blob containers
//!
//! This crate provides the format-level pieces of the blob object model
//! with no I/O: the element taxonomy for typed numeric views, content-type
//! sanitization, slice-range clamping math, error types, and the IEEE 754
//! half-precision codec.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod element;
pub mod error;
pub mod f16;
pub mod mime;
pub mod range;

pub use element::*;
pub use error::*;
pub use f16::*;
pub use range::*;
