// Copyright 2025 Irreducible Inc.
use std::{
	cmp::Ordering,
	ops::{Add, Sub},
};

use crate::{bigint::BigInt, cmp::mag_cmp};

impl BigInt {
	/// Computes `self + rhs`.
	///
	/// Signed addition reduces to unsigned magnitude arithmetic plus one up-front sign
	/// normalization: operands of the same sign add their magnitudes and keep that sign;
	/// operands of opposite signs subtract the smaller magnitude from the larger, and the
	/// larger magnitude's sign wins. Equal magnitudes of opposite signs cancel to zero.
	pub fn add(&self, rhs: &BigInt) -> BigInt {
		if self.negative == rhs.negative {
			let sum = mag_add(&self.digits, &rhs.digits);
			return BigInt::from_magnitude(sum, self.negative);
		}
		match mag_cmp(&self.digits, &rhs.digits) {
			Ordering::Greater => {
				BigInt::from_magnitude(mag_sub(&self.digits, &rhs.digits), self.negative)
			}
			Ordering::Less => {
				BigInt::from_magnitude(mag_sub(&rhs.digits, &self.digits), rhs.negative)
			}
			Ordering::Equal => BigInt::zero(),
		}
	}

	/// Computes `self - rhs` as `self + (-rhs)`.
	///
	/// With the sign normalization in [`BigInt::add`] this covers all four sign
	/// combinations, including the true borrow-subtraction path for two non-negative
	/// operands.
	pub fn sub(&self, rhs: &BigInt) -> BigInt {
		self.add(&-rhs)
	}
}

/// Adds two magnitudes digit-wise with carry propagation.
///
/// The operands are aligned at the least significant digit; the shorter one is treated as
/// exhausted past its own length. A final carry, if any, becomes a new most significant
/// digit. Normalized inputs produce a normalized output, but callers funnel the result
/// through [`BigInt::from_magnitude`] regardless.
fn mag_add(a: &[u8], b: &[u8]) -> Vec<u8> {
	let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };

	let mut out = Vec::with_capacity(longer.len() + 1);
	let mut carry = 0u8;
	for i in 0..longer.len() {
		let x = longer[longer.len() - 1 - i];
		let y = if i < shorter.len() {
			shorter[shorter.len() - 1 - i]
		} else {
			0
		};
		let sum = x + y + carry;
		out.push(sum % 10);
		carry = sum / 10;
	}
	if carry != 0 {
		out.push(carry);
	}
	out.reverse();
	out
}

/// Subtracts magnitude `b` from magnitude `a` digit-wise with borrow propagation.
///
/// Requires `a >= b` numerically; the caller establishes that via [`mag_cmp`]. The result
/// may carry leading zeros (e.g. `1000 - 999`), which the normalizing constructor strips.
fn mag_sub(a: &[u8], b: &[u8]) -> Vec<u8> {
	debug_assert!(mag_cmp(a, b) != Ordering::Less, "mag_sub: minuend must not be smaller");

	let mut out = Vec::with_capacity(a.len());
	let mut borrow = 0i8;
	for i in 0..a.len() {
		let x = a[a.len() - 1 - i] as i8;
		let y = if i < b.len() { b[b.len() - 1 - i] as i8 } else { 0 };
		let mut diff = x - y - borrow;
		if diff < 0 {
			diff += 10;
			borrow = 1;
		} else {
			borrow = 0;
		}
		out.push(diff as u8);
	}
	debug_assert_eq!(borrow, 0);
	out.reverse();
	out
}

impl Add for &BigInt {
	type Output = BigInt;

	fn add(self, rhs: &BigInt) -> BigInt {
		BigInt::add(self, rhs)
	}
}

impl Sub for &BigInt {
	type Output = BigInt;

	fn sub(self, rhs: &BigInt) -> BigInt {
		BigInt::sub(self, rhs)
	}
}
