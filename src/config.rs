//! Construction parameters.
use crate::{
	element::Kind,
	error::VectError
};

/// Configuration of a [`DynamicArray`](crate::DynamicArray).
///
/// Validated at construction; the kind is immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VectConfig {
	/// Element kind.
	///
	/// Default: [`Kind::Byte`].
	pub kind: Kind,

	/// Number of slots allocated up front, sentinel included.
	///
	/// Default: 16. Must be at least 1.
	pub initial_capacity: usize
}

impl VectConfig {
	/// Default initial capacity.
	pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

	/// Default element kind.
	pub const DEFAULT_KIND: Kind = Kind::Byte;

	/// Create a new config for the given kind.
	///
	/// Uses the default initial capacity.
	pub fn new(kind: Kind) -> Self {
		Self {
			kind,
			initial_capacity: Self::DEFAULT_INITIAL_CAPACITY
		}
	}

	/// Sets the initial capacity.
	pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
		self.initial_capacity = initial_capacity;
		self
	}

	/// Checks that a container can be built from this config.
	pub fn validate(&self) -> Result<(), VectError> {
		if self.initial_capacity == 0 {
			Err(VectError::ZeroCapacity)
		} else {
			Ok(())
		}
	}
}

impl Default for VectConfig {
	fn default() -> Self {
		Self::new(Self::DEFAULT_KIND)
	}
}
