// Copyright 2025 Irreducible Inc.

/// Errors surfaced by this crate.
///
/// Arithmetic on well-formed [`BigInt`](crate::BigInt) values is total; the only fallible
/// entry point is parsing a decimal literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("invalid decimal integer literal {literal:?}")]
	InvalidFormat { literal: String },
}
