// Copyright 2025 Irreducible Inc.
use std::cmp::Ordering;

use crate::bigint::BigInt;

/// Compares two normalized magnitudes numerically.
///
/// A shorter magnitude is smaller; magnitudes of equal length compare lexicographically,
/// which is valid numerically because neither carries leading zeros.
pub(crate) fn mag_cmp(a: &[u8], b: &[u8]) -> Ordering {
	a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for BigInt {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.negative, other.negative) {
			(false, true) => Ordering::Greater,
			(true, false) => Ordering::Less,
			(false, false) => mag_cmp(&self.digits, &other.digits),
			// Both negative: the larger magnitude is the smaller value.
			(true, true) => mag_cmp(&other.digits, &self.digits),
		}
	}
}

impl PartialOrd for BigInt {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
