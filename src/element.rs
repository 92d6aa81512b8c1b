//! Element formats.
//!
//! A container stores one of two element kinds, fixed for its whole
//! lifetime. The [`Element`] trait captures everything the container
//! algorithms need to know about a kind: its zero value, whether the
//! buffer must keep a trailing NUL sentinel, and how `contains` scans.
//!
//! This crate provides the two implementations of this trait:
//! [`u8`] (see [`byte`](crate::byte)) and [`i64`] (see [`int`](crate::int)).
use core::fmt;

/// Element kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Single-byte characters, kept NUL-terminated.
	Byte,

	/// Machine integers.
	Integer
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Kind::Byte => f.write_str("byte"),
			Kind::Integer => f.write_str("integer")
		}
	}
}

/// A single element of either kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
	Byte(u8),
	Integer(i64)
}

impl Value {
	/// Kind of the value.
	#[inline]
	pub fn kind(&self) -> Kind {
		match self {
			Value::Byte(_) => Kind::Byte,
			Value::Integer(_) => Kind::Integer
		}
	}
}

impl From<u8> for Value {
	#[inline]
	fn from(b: u8) -> Value {
		Value::Byte(b)
	}
}

impl From<i64> for Value {
	#[inline]
	fn from(i: i64) -> Value {
		Value::Integer(i)
	}
}

mod sealed {
	pub trait Sealed {}

	impl Sealed for u8 {}
	impl Sealed for i64 {}
}

/// Element format of a [`Vect`](crate::generic::Vect).
///
/// This trait is sealed: the only implementations are `u8` and `i64`.
pub trait Element: sealed::Sealed + Copy + PartialEq + fmt::Debug + 'static {
	/// Kind tag of this format.
	const KIND: Kind;

	/// Value of an unoccupied slot.
	const ZERO: Self;

	/// Number of slots kept past the last element.
	///
	/// `1` for bytes (the NUL sentinel), `0` for integers.
	const SENTINEL_SLOTS: usize;

	/// Whether `contains` stops at the first zero element.
	const STOPS_AT_ZERO: bool;

	/// Wrap the element into a tagged value.
	fn into_value(self) -> Value;

	/// Unwrap a tagged value, if it has this kind.
	fn from_value(value: Value) -> Option<Self>;

	/// Smallest capacity a container of this kind may shrink to.
	///
	/// Room for one element plus the sentinel slots.
	#[inline]
	fn min_capacity() -> usize {
		Self::SENTINEL_SLOTS + 1
	}
}
