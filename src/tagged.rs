//! Kind-tagged vector.
//!
//! [`DynamicArray`] holds either a [`ByteVect`] or an [`IntVect`], chosen at
//! initialisation. Elements go in and out as [`Value`]s, and every operation
//! is dispatched on the active kind. Giving a value of the wrong kind is a
//! programmer error: the panicking methods abort on it, the `try_*` methods
//! report it as [`VectError::KindMismatch`].
use crate::{
	byte::ByteVect,
	config::VectConfig,
	element::{
		Element,
		Kind,
		Value
	},
	error::{
		VectError,
		handle
	},
	generic::SetOutcome,
	int::IntVect
};

/// Growable array of bytes or integers.
///
/// # Example
///
/// ```
/// # use vect::{DynamicArray, Kind, Value};
/// let mut v = DynamicArray::init(Kind::Integer, 4);
/// v.append(10i64);
/// v.append(20i64);
/// assert_eq!(v.contains(20i64), Some(1));
/// assert_eq!(v.pop(), Value::Integer(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynamicArray {
	Byte(ByteVect),
	Integer(IntVect)
}

macro_rules! dispatch {
	($array:expr, |$v:ident| $body:expr) => {
		match $array {
			DynamicArray::Byte($v) => $body,
			DynamicArray::Integer($v) => $body
		}
	}
}

/// Unwraps `value` into the element type of the active kind, returning
/// early with a `KindMismatch` otherwise.
macro_rules! with_element {
	($array:expr, $value:expr, |$v:ident, $x:ident| $body:expr) => {
		match $array {
			DynamicArray::Byte($v) => {
				let $x = expect_kind::<u8>($value)?;
				$body
			},
			DynamicArray::Integer($v) => {
				let $x = expect_kind::<i64>($value)?;
				$body
			}
		}
	}
}

#[inline]
fn expect_kind<T: Element>(value: Value) -> Result<T, VectError> {
	T::from_value(value).ok_or(VectError::KindMismatch {
		expected: T::KIND,
		found: value.kind()
	})
}

#[inline]
fn outcome_value<T: Element>(outcome: SetOutcome<T>) -> SetOutcome<Value> {
	match outcome {
		SetOutcome::Overwritten(old) => SetOutcome::Overwritten(old.into_value()),
		SetOutcome::Appended => SetOutcome::Appended
	}
}

impl DynamicArray {
	/// Creates an empty array of the given kind with a zero-filled buffer of
	/// `initial_capacity` slots.
	///
	/// # Panics
	///
	/// Panics if `initial_capacity` is 0.
	#[inline]
	#[track_caller]
	pub fn init(kind: Kind, initial_capacity: usize) -> Self {
		handle(Self::try_init(kind, initial_capacity))
	}

	/// The same as `init`, but returns on errors instead of panicking.
	pub fn try_init(kind: Kind, initial_capacity: usize) -> Result<Self, VectError> {
		Ok(match kind {
			Kind::Byte => DynamicArray::Byte(ByteVect::try_init(initial_capacity)?),
			Kind::Integer => DynamicArray::Integer(IntVect::try_init(initial_capacity)?)
		})
	}

	/// Creates an empty array as described by `config`.
	pub fn from_config(config: &VectConfig) -> Result<Self, VectError> {
		config.validate()?;
		Self::try_init(config.kind, config.initial_capacity)
	}

	/// Replaces the array by a fresh empty one of the same kind.
	///
	/// This is the way to use an array again after [`free`](DynamicArray::free).
	///
	/// # Panics
	///
	/// Panics if `initial_capacity` is 0.
	#[track_caller]
	pub fn reinit(&mut self, initial_capacity: usize) {
		dispatch!(self, |v| v.reinit(initial_capacity))
	}

	/// Kind of the elements, fixed at initialisation.
	#[inline]
	pub fn kind(&self) -> Kind {
		match self {
			DynamicArray::Byte(_) => Kind::Byte,
			DynamicArray::Integer(_) => Kind::Integer
		}
	}

	/// Returns the number of elements in the array.
	#[inline]
	pub fn len(&self) -> usize {
		dispatch!(self, |v| v.len())
	}

	/// Returns `true` if the array contains no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		dispatch!(self, |v| v.is_empty())
	}

	/// Index of the last element, or `None` if the array is empty.
	#[inline]
	pub fn last_index(&self) -> Option<usize> {
		dispatch!(self, |v| v.last_index())
	}

	/// Returns the number of allocated slots, sentinel included.
	#[inline]
	pub fn capacity(&self) -> usize {
		dispatch!(self, |v| v.capacity())
	}

	/// Returns `true` if the buffer has been released by [`free`](DynamicArray::free).
	#[inline]
	pub fn is_freed(&self) -> bool {
		dispatch!(self, |v| v.is_freed())
	}

	/// See [`Vect::has_room_for`](crate::Vect::has_room_for).
	#[inline]
	pub fn has_room_for(&self, additional: usize) -> bool {
		dispatch!(self, |v| v.has_room_for(additional))
	}

	/// See [`Vect::is_underutilized`](crate::Vect::is_underutilized).
	#[inline]
	pub fn is_underutilized(&self) -> bool {
		dispatch!(self, |v| v.is_underutilized())
	}

	/// Returns the element at `index`, or `None` if out of bounds.
	#[inline]
	pub fn get(&self, index: usize) -> Option<Value> {
		dispatch!(self, |v| v.get(index).map(Element::into_value))
	}

	/// Copies the elements into a new `Vec`.
	pub fn to_vec(&self) -> Vec<Value> {
		dispatch!(self, |v| v.occupied().iter().map(|e| e.into_value()).collect())
	}

	fn check_live(&self) -> Result<(), VectError> {
		if self.is_freed() {
			Err(VectError::Freed)
		} else {
			Ok(())
		}
	}

	/// Appends an element to the back of the array.
	///
	/// # Panics
	///
	/// Panics if the value kind differs from the array kind, or if the array
	/// has been freed.
	#[inline]
	#[track_caller]
	pub fn append<V: Into<Value>>(&mut self, value: V) {
		handle(self.try_append(value))
	}

	/// The same as `append`, but returns on errors instead of panicking.
	pub fn try_append<V: Into<Value>>(&mut self, value: V) -> Result<(), VectError> {
		self.check_live()?;
		with_element!(self, value.into(), |v, x| v.append(x));
		Ok(())
	}

	/// Appends all the given bytes.
	///
	/// # Panics
	///
	/// Panics if this is not a byte array, or if it has been freed.
	#[track_caller]
	pub fn extend_bytes(&mut self, bytes: &[u8]) {
		match self {
			DynamicArray::Byte(v) => v.extend_from_slice(bytes),
			DynamicArray::Integer(_) => crate::error::fatal(VectError::KindMismatch {
				expected: Kind::Integer,
				found: Kind::Byte
			})
		}
	}

	/// Appends all the given integers.
	///
	/// # Panics
	///
	/// Panics if this is not an integer array, or if it has been freed.
	#[track_caller]
	pub fn extend_integers(&mut self, integers: &[i64]) {
		match self {
			DynamicArray::Integer(v) => v.extend_from_slice(integers),
			DynamicArray::Byte(_) => crate::error::fatal(VectError::KindMismatch {
				expected: Kind::Byte,
				found: Kind::Integer
			})
		}
	}

	/// Overwrites the element at `index`, or appends it if `index` is past
	/// the end.
	///
	/// # Panics
	///
	/// Panics if the value kind differs from the array kind, or if the array
	/// has been freed.
	#[inline]
	#[track_caller]
	pub fn set<V: Into<Value>>(&mut self, value: V, index: usize) -> SetOutcome<Value> {
		handle(self.try_set(value, index))
	}

	/// The same as `set`, but returns on errors instead of panicking.
	pub fn try_set<V: Into<Value>>(&mut self, value: V, index: usize) -> Result<SetOutcome<Value>, VectError> {
		self.check_live()?;
		Ok(with_element!(self, value.into(), |v, x| outcome_value(v.set(x, index))))
	}

	/// Removes and returns the element at `index`, shifting all elements
	/// after it to the left.
	///
	/// Returns `None` and leaves the array untouched if `index` is out of
	/// bounds.
	///
	/// # Panics
	///
	/// Panics if the array has been freed.
	#[track_caller]
	pub fn remove(&mut self, index: usize) -> Option<Value> {
		dispatch!(self, |v| v.remove(index).map(Element::into_value))
	}

	/// Removes the elements in `start..end`.
	///
	/// # Panics
	///
	/// Panics if `start >= end`, if `end > len`, or if the array has been
	/// freed.
	#[inline]
	#[track_caller]
	pub fn range_remove(&mut self, start: usize, end: usize) {
		handle(self.try_range_remove(start, end))
	}

	/// The same as `range_remove`, but returns on errors instead of panicking.
	pub fn try_range_remove(&mut self, start: usize, end: usize) -> Result<(), VectError> {
		dispatch!(self, |v| v.try_range_remove(start, end))
	}

	/// Removes the last element and returns it.
	///
	/// # Panics
	///
	/// Panics if the array is empty or has been freed.
	#[inline]
	#[track_caller]
	pub fn pop(&mut self) -> Value {
		handle(self.try_pop())
	}

	/// The same as `pop`, but returns on errors instead of panicking.
	pub fn try_pop(&mut self) -> Result<Value, VectError> {
		dispatch!(self, |v| v.try_pop().map(Element::into_value))
	}

	/// Returns the index of the first occurrence of `value`.
	///
	/// Byte arrays stop searching at the first NUL byte.
	///
	/// # Panics
	///
	/// Panics if the value kind differs from the array kind.
	#[inline]
	#[track_caller]
	pub fn contains<V: Into<Value>>(&self, value: V) -> Option<usize> {
		handle(self.try_contains(value))
	}

	/// The same as `contains`, but returns on errors instead of panicking.
	pub fn try_contains<V: Into<Value>>(&self, value: V) -> Result<Option<usize>, VectError> {
		Ok(with_element!(self, value.into(), |v, x| v.contains(x)))
	}

	/// Releases the buffer. Length and capacity become 0.
	pub fn free(&mut self) {
		dispatch!(self, |v| v.free())
	}

	/// The byte vector, if this is a byte array.
	#[inline]
	pub fn as_byte_vect(&self) -> Option<&ByteVect> {
		match self {
			DynamicArray::Byte(v) => Some(v),
			_ => None
		}
	}

	/// The integer vector, if this is an integer array.
	#[inline]
	pub fn as_int_vect(&self) -> Option<&IntVect> {
		match self {
			DynamicArray::Integer(v) => Some(v),
			_ => None
		}
	}
}

impl From<ByteVect> for DynamicArray {
	#[inline]
	fn from(v: ByteVect) -> DynamicArray {
		DynamicArray::Byte(v)
	}
}

impl From<IntVect> for DynamicArray {
	#[inline]
	fn from(v: IntVect) -> DynamicArray {
		DynamicArray::Integer(v)
	}
}
