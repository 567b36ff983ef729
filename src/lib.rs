//! Pure Rust implementation of an arbitrary-precision signed integer library
//! designed for cryptographic applications.
//!
//! # About
//! This library provides the multi-precision arithmetic kernel needed by
//! public-key primitives such as RSA: addition, subtraction, schoolbook
//! multiplication and squaring, long division with remainder, comparison,
//! base conversion, and modular exponentiation driven by pluggable modular
//! reduction strategies (Montgomery, Barrett, power-of-two mask, classic
//! remainder), together with a binary extended-GCD modular inverse and a
//! CRT split that extends [`BigInt::mod_pow`] to even moduli.
//!
//! All operations run in variable time. This crate is a functional
//! reference, not a side-channel-hardened implementation: callers that
//! require constant-time behavior must use a dedicated primitive instead.
//!
//! # Example
//! ```
//! use crypto_bignum::BigInt;
//!
//! let base = BigInt::from_str_radix("10", 10);
//! let exponent = BigInt::from_str_radix("20", 10);
//! let modulus = BigInt::from_str_radix("30", 10);
//! assert_eq!(base.mod_pow(&exponent, &modulus).to_string(), "10");
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

mod bigint;
mod decimal;
mod limb;
mod modular;

pub use crate::{
    bigint::BigInt,
    limb::{Limb, WideWord, Word},
    modular::Reduction,
};

#[cfg(feature = "zeroize")]
pub use zeroize;
