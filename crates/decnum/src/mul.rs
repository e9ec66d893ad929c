// Copyright 2025 Irreducible Inc.
use std::ops::Mul;

use crate::bigint::BigInt;

/// Digit length below which Karatsuba falls back to schoolbook multiplication.
///
/// This is a tunable performance parameter, not a correctness requirement: recursing all
/// the way down to single digits is correct but the recursion overhead dominates for
/// short operands.
const KARATSUBA_DIGITS_THRESHOLD: usize = 10;

impl BigInt {
	/// Multiplies two `BigInt`s using the textbook algorithm, `O(n * m)` in the digit
	/// lengths.
	///
	/// The result is negative iff exactly one operand is negative and neither is zero.
	pub fn mul(&self, rhs: &BigInt) -> BigInt {
		let product = mag_mul(&self.digits, &rhs.digits);
		BigInt::from_magnitude(product, self.negative ^ rhs.negative)
	}

	/// Multiplies two `BigInt`s using Karatsuba (aka Toom-22).
	///
	/// Whereas [`BigInt::mul`] performs `O(n^2)` digit multiplications, this method is
	/// asymptotically more efficient with `O(n^{log_2 3}) = O(n^{1.58})`, however due to
	/// the larger constant factor it pays off for longer operands only; below the
	/// threshold digit length it falls back to the textbook algorithm.
	///
	/// The recursion runs on the two magnitudes; the sign is resolved once here, with the
	/// same rule as [`BigInt::mul`].
	pub fn mul_fast(&self, rhs: &BigInt) -> BigInt {
		let product = karatsuba(&self.abs(), &rhs.abs());
		if self.negative ^ rhs.negative {
			-product
		} else {
			product
		}
	}
}

/// Textbook long multiplication of two normalized magnitudes.
///
/// Accumulates pairwise digit products into `len(a) + len(b)` slots indexed from the least
/// significant position, with the running carry folded into the next more significant slot.
fn mag_mul(a: &[u8], b: &[u8]) -> Vec<u8> {
	if a == [0] || b == [0] {
		return vec![0];
	}

	// acc[k] accumulates, least significant first, every partial product at digit
	// position k. Slots hold single digits again once the row that revisits them takes
	// its modulo; the final carry slot receives at most 8.
	let mut acc = vec![0u32; a.len() + b.len()];
	for (i, &x) in a.iter().rev().enumerate() {
		let mut carry = 0u32;
		for (j, &y) in b.iter().rev().enumerate() {
			let t = acc[i + j] + u32::from(x) * u32::from(y) + carry;
			acc[i + j] = t % 10;
			carry = t / 10;
		}
		acc[i + b.len()] += carry;
	}

	acc.iter().rev().map(|&d| d as u8).collect()
}

/// Recursive Karatsuba product of two non-negative values.
///
/// Both operands are split at the same position `middle = floor(min(len) / 2)`, counted
/// from the least significant digit and derived from the shorter operand. This asymmetric
/// rule (rather than the textbook split at half the longer length with zero padding) keeps
/// the low parts aligned at the same digit position, which is all the recombination
/// identity `x*y = z_hi*10^(2m) + (z_mid - z_lo - z_hi)*10^m + z_lo` needs.
fn karatsuba(x: &BigInt, y: &BigInt) -> BigInt {
	if x.digits.len() < KARATSUBA_DIGITS_THRESHOLD || y.digits.len() < KARATSUBA_DIGITS_THRESHOLD {
		return x.mul(y);
	}

	let middle = x.digits.len().min(y.digits.len()) / 2;
	let (x_hi, x_lo) = x.split_low(middle);
	let (y_hi, y_lo) = y.split_low(middle);

	let z_lo = karatsuba(&x_lo, &y_lo);
	let z_mid = karatsuba(&x_hi.add(&x_lo), &y_hi.add(&y_lo));
	let z_hi = karatsuba(&x_hi, &y_hi);

	// (x_hi + x_lo)(y_hi + y_lo) - x_lo*y_lo - x_hi*y_hi = x_hi*y_lo + x_lo*y_hi
	let z_mid = z_mid.sub(&z_lo).sub(&z_hi);

	z_hi.shl_digits(2 * middle).add(&z_mid.shl_digits(middle)).add(&z_lo)
}

impl Mul for &BigInt {
	type Output = BigInt;

	fn mul(self, rhs: &BigInt) -> BigInt {
		BigInt::mul_fast(self, rhs)
	}
}
