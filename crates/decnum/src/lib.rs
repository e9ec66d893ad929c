// Copyright 2025 Irreducible Inc.
//! Arbitrary-precision signed decimal integer arithmetic.
//!
//! This crate provides the [`BigInt`] value type: an unbounded signed integer stored as a
//! sequence of decimal digits, most significant first. It supports construction from decimal
//! string literals, rendering back to strings, addition, subtraction, and two multiplication
//! strategies: textbook long multiplication and the Karatsuba divide-and-conquer algorithm.

mod addsub;
mod bigint;
mod cmp;
mod error;
mod mul;


pub use bigint::BigInt;
pub use error::Error;
