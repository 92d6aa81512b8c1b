//! Fatal error conditions.
//!
//! Operations on a [`Vect`](crate::generic::Vect) either succeed, report a
//! benign condition through their return value (`None`, [`SetOutcome`](crate::generic::SetOutcome)),
//! or hit one of the conditions below. The latter are programmer errors:
//! the panicking API escalates them through [`fatal`], the `try_*` API hands
//! them back to the caller.
use thiserror::Error;

use crate::element::Kind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectError {
	/// A container was initialised without any slot.
	#[error("initial capacity must be at least 1")]
	ZeroCapacity,

	/// `range_remove` was given an empty or reversed range.
	#[error("invalid range: start (is {start}) should be < end (is {end})")]
	InvalidRange { start: usize, end: usize },

	/// `range_remove` was given a range reaching past the logical length.
	#[error("range end (is {end}) should be <= len (is {len})")]
	RangeOutOfBounds { end: usize, len: usize },

	/// `pop` was called on an empty container.
	#[error("cannot pop from an empty vector")]
	Empty,

	/// A value of one kind was given to a container of the other kind.
	#[error("kind mismatch: container holds {expected} elements, got an element of kind {found}")]
	KindMismatch { expected: Kind, found: Kind },

	/// The container was used after `free` without being re-initialised.
	#[error("vector used after free")]
	Freed,
}

/// Abort the current operation on a fatal condition.
///
/// Every panicking operation of this crate funnels through here, so the
/// panic message is always the `Display` of a [`VectError`].
#[cold]
#[inline(never)]
#[track_caller]
pub fn fatal(error: VectError) -> ! {
	panic!("{}", error)
}

// Central function for `try_*` error handling.
#[inline]
#[track_caller]
pub(crate) fn handle<T>(result: Result<T, VectError>) -> T {
	match result {
		Ok(t) => t,
		Err(e) => fatal(e)
	}
}
