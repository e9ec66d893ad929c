// Copyright 2025 Irreducible Inc.
use std::{fmt, ops::Neg, str::FromStr};

use crate::error::Error;

/// Represents an arbitrarily large signed integer as a sequence of decimal digits.
///
/// - Each element of `digits` holds a single digit value in `0..=9`.
/// - Digits are stored in big-endian order (index 0 = most significant).
/// - The representation is canonical: no leading zero digits except for the single-digit
///   zero value, and zero is never negative. Structural equality therefore coincides with
///   numeric equality.
///
/// Every operation returns a fresh value; operands are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
	pub(crate) digits: Vec<u8>,
	pub(crate) negative: bool,
}

impl BigInt {
	/// Creates the zero value.
	pub fn zero() -> Self {
		BigInt {
			digits: vec![0],
			negative: false,
		}
	}

	/// Creates a `BigInt` from a raw magnitude and sign, restoring the canonical form.
	///
	/// Strips leading zero digits and forces the non-negative sign on zero. This is the
	/// single normalization point; every arithmetic routine funnels its result through it,
	/// so intermediate magnitudes (borrow-subtraction output, Karatsuba recombination) may
	/// carry leading zeros freely.
	pub(crate) fn from_magnitude(digits: Vec<u8>, negative: bool) -> Self {
		debug_assert!(digits.iter().all(|&d| d <= 9));
		let first_nonzero = digits.iter().position(|&d| d != 0);
		match first_nonzero {
			None => BigInt::zero(),
			Some(0) => BigInt { digits, negative },
			Some(at) => BigInt {
				digits: digits[at..].to_vec(),
				negative,
			},
		}
	}

	/// Returns whether the value is zero.
	pub fn is_zero(&self) -> bool {
		self.digits == [0]
	}

	/// Returns whether the value is strictly negative.
	pub fn is_negative(&self) -> bool {
		self.negative
	}

	/// Returns the magnitude with the sign cleared.
	pub(crate) fn abs(&self) -> Self {
		BigInt {
			digits: self.digits.clone(),
			negative: false,
		}
	}

	/// Splits the magnitude at `middle` digits from the least significant end into
	/// `(hi, lo)`, both non-negative. The result satisfies `self = hi * 10^middle + lo`
	/// for non-negative `self`.
	///
	/// # Panics
	/// Panics if `middle` is not strictly smaller than the digit length.
	pub(crate) fn split_low(&self, middle: usize) -> (Self, Self) {
		assert!(middle < self.digits.len(), "split_low: middle must leave a non-empty high part");
		let at = self.digits.len() - middle;
		let hi = BigInt::from_magnitude(self.digits[..at].to_vec(), false);
		let lo = BigInt::from_magnitude(self.digits[at..].to_vec(), false);
		(hi, lo)
	}

	/// Shifts left by `k` decimal places, i.e. multiplies by `10^k`, returning a new value.
	///
	/// Zero shifts to zero.
	pub(crate) fn shl_digits(&self, k: usize) -> Self {
		if self.is_zero() {
			return BigInt::zero();
		}
		let mut digits = Vec::with_capacity(self.digits.len() + k);
		digits.extend_from_slice(&self.digits);
		digits.resize(self.digits.len() + k, 0);
		BigInt {
			digits,
			negative: self.negative,
		}
	}

	/// Returns the value with the sign flipped. Zero negates to zero.
	fn negated(&self) -> Self {
		BigInt {
			digits: self.digits.clone(),
			negative: !self.negative && !self.is_zero(),
		}
	}
}

impl Default for BigInt {
	fn default() -> Self {
		BigInt::zero()
	}
}

impl FromStr for BigInt {
	type Err = Error;

	/// Parses a decimal literal: one optional leading `-`, then one or more ASCII digits.
	///
	/// Anything else, including an empty magnitude after the sign marker, is rejected with
	/// [`Error::InvalidFormat`]. Leading zeros are accepted and normalized away.
	fn from_str(s: &str) -> Result<Self, Error> {
		let (negative, magnitude) = match s.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, s),
		};
		if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
			return Err(Error::InvalidFormat {
				literal: s.to_string(),
			});
		}
		let digits = magnitude.bytes().map(|b| b - b'0').collect();
		Ok(BigInt::from_magnitude(digits, negative))
	}
}

impl fmt::Display for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.negative {
			f.write_str("-")?;
		}
		let rendered: String = self.digits.iter().map(|&d| (b'0' + d) as char).collect();
		f.write_str(&rendered)
	}
}

impl Neg for &BigInt {
	type Output = BigInt;

	fn neg(self) -> BigInt {
		self.negated()
	}
}

impl Neg for BigInt {
	type Output = BigInt;

	fn neg(self) -> BigInt {
		self.negated()
	}
}
