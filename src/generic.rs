use core::{
	ops::Index,
	fmt
};
use tracing::{
	debug,
	warn
};
use crate::{
	element::Element,
	error::{
		VectError,
		handle
	},
	raw::{
		RawBuf,
		capacity_overflow
	}
};

/// Outcome of [`Vect::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome<T> {
	/// The index was occupied. Holds the previous element.
	Overwritten(T),

	/// The index was past the end, the element was appended instead.
	Appended
}

/// Contiguous growable array that grows and shrinks its own buffer.
///
/// The buffer capacity doubles whenever an append leaves no room for another
/// element, and halves whenever a removal leaves it less than half used.
/// Unoccupied slots always hold [`Element::ZERO`]. For byte vectors this means
/// the slot right after the last element is a NUL sentinel, which is never
/// counted in the length.
///
/// The element format is given as type parameter `T`, implementing the
/// [`Element`] trait. See [`ByteVect`](crate::ByteVect) and
/// [`IntVect`](crate::IntVect).
///
/// # Example
///
/// ```
/// # use vect::ByteVect;
/// let mut v = ByteVect::init(4);
/// v.append(b'a');
/// v.append(b'b');
/// v.append(b'c'); // no room left for another byte and the sentinel: grows.
/// assert_eq!(v.capacity(), 8);
///
/// v.remove(1);
/// assert_eq!(v, b"ac");
/// ```
pub struct Vect<T: Element> {
	/// Buffer, of capacity 0 once freed.
	buf: RawBuf<T>,

	/// Number of occupied slots.
	len: usize
}

impl<T: Element> Vect<T> {
	/// Creates a new empty vector with a zero-filled buffer of
	/// `initial_capacity` slots.
	///
	/// # Panics
	///
	/// Panics if `initial_capacity` is 0.
	#[inline]
	#[track_caller]
	pub fn init(initial_capacity: usize) -> Self {
		handle(Self::try_init(initial_capacity))
	}

	/// The same as `init`, but returns on errors instead of panicking.
	pub fn try_init(initial_capacity: usize) -> Result<Self, VectError> {
		if initial_capacity == 0 {
			return Err(VectError::ZeroCapacity)
		}

		debug!(kind = %T::KIND, capacity = initial_capacity, "initialized vector");
		Ok(Vect {
			buf: RawBuf::with_capacity_zeroed(initial_capacity),
			len: 0
		})
	}

	/// Replaces the vector by a fresh empty one.
	///
	/// This is the way to use a vector again after [`free`](Vect::free).
	///
	/// # Panics
	///
	/// Panics if `initial_capacity` is 0.
	#[track_caller]
	pub fn reinit(&mut self, initial_capacity: usize) {
		*self = Self::init(initial_capacity)
	}

	/// Returns the number of elements in the vector.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns `true` if the vector contains no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Index of the last element, or `None` if the vector is empty.
	#[inline]
	pub fn last_index(&self) -> Option<usize> {
		self.len.checked_sub(1)
	}

	/// Returns the number of allocated slots, sentinel included.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.buf.capacity()
	}

	/// Returns `true` if the buffer has been released by [`free`](Vect::free).
	#[inline]
	pub fn is_freed(&self) -> bool {
		self.buf.capacity() == 0
	}

	/// Returns the element at `index`, or `None` if out of bounds.
	#[inline]
	pub fn get(&self, index: usize) -> Option<T> {
		self.occupied().get(index).copied()
	}

	/// Copies the elements into a new `Vec`.
	pub fn to_vec(&self) -> Vec<T> {
		self.occupied().to_vec()
	}

	#[inline]
	pub(crate) fn occupied(&self) -> &[T] {
		&self.buf.slots()[..self.len]
	}

	/// Slots up to and including the sentinel slots.
	#[inline]
	pub(crate) fn occupied_with_sentinel(&self) -> &[T] {
		&self.buf.slots()[..(self.len + T::SENTINEL_SLOTS).min(self.capacity())]
	}

	/// Returns `true` if `additional` more elements fit in the buffer
	/// without overwriting the sentinel slots.
	#[inline]
	pub fn has_room_for(&self, additional: usize) -> bool {
		match self.len.checked_add(additional) {
			Some(len) => len.saturating_add(T::SENTINEL_SLOTS) <= self.capacity(),
			None => false
		}
	}

	/// Returns `true` if the buffer could be halved while keeping room for
	/// the sentinel slots and two more elements.
	///
	/// The extra element of slack guarantees that appending right after a
	/// shrink never grows the buffer back.
	#[inline]
	pub fn is_underutilized(&self) -> bool {
		let half = self.capacity() / 2;
		half >= T::min_capacity() && self.len + T::SENTINEL_SLOTS + 1 < half
	}

	#[inline]
	fn check_live(&self) -> Result<(), VectError> {
		if self.is_freed() {
			Err(VectError::Freed)
		} else {
			Ok(())
		}
	}

	/// Doubles the capacity until `additional` more elements fit.
	fn reserve_for(&mut self, additional: usize) {
		if self.has_room_for(additional) {
			return
		}

		let required = match self.len.checked_add(additional).and_then(|n| n.checked_add(T::SENTINEL_SLOTS)) {
			Some(required) => required,
			None => capacity_overflow()
		};

		let old_capacity = self.capacity();
		let mut capacity = old_capacity;
		while capacity < required {
			capacity = match capacity.checked_mul(2) {
				Some(capacity) => capacity,
				None => capacity_overflow()
			};
		}

		self.buf.grow_to(capacity);
		debug!(kind = %T::KIND, from = old_capacity, to = capacity, len = self.len, "grew buffer");
	}

	/// Halves the capacity once if the buffer is underutilized.
	fn shrink_if_underutilized(&mut self) {
		if !self.is_underutilized() {
			return
		}

		let old_capacity = self.capacity();
		let capacity = old_capacity / 2;
		self.buf.shrink_to(capacity);
		debug!(kind = %T::KIND, from = old_capacity, to = capacity, len = self.len, "shrank buffer");
	}

	/// Appends an element to the back of the vector.
	///
	/// # Panics
	///
	/// Panics if the vector has been freed, or if the new capacity overflows.
	#[track_caller]
	pub fn append(&mut self, value: T) {
		handle(self.check_live());

		// repairs a buffer initialised without room for the sentinel.
		self.reserve_for(1);

		let len = self.len;
		let slots = self.buf.slots_mut();
		slots[len] = value;
		if T::SENTINEL_SLOTS > 0 {
			slots[len + 1] = T::ZERO;
		}
		self.len = len + 1;

		self.reserve_for(1);
	}

	/// Appends all the elements of `other`, in order.
	///
	/// The resulting capacity is the same as if each element had been
	/// appended one by one, but the buffer is reallocated at most once.
	///
	/// # Panics
	///
	/// Panics if the vector has been freed, or if the new capacity overflows.
	#[track_caller]
	pub fn extend_from_slice(&mut self, other: &[T]) {
		handle(self.check_live());
		if other.is_empty() {
			return
		}

		let additional = match other.len().checked_add(1) {
			Some(additional) => additional,
			None => capacity_overflow()
		};
		self.reserve_for(additional);

		let len = self.len;
		self.buf.slots_mut()[len..(len + other.len())].copy_from_slice(other);
		self.len = len + other.len();
	}

	/// Overwrites the element at `index`.
	///
	/// If `index` is past the end, the element is appended instead: `set`
	/// never leaves a gap in the vector.
	///
	/// # Panics
	///
	/// Panics if the vector has been freed.
	#[track_caller]
	pub fn set(&mut self, value: T, index: usize) -> SetOutcome<T> {
		handle(self.check_live());

		if index < self.len {
			let slot = &mut self.buf.slots_mut()[index];
			let old = *slot;
			*slot = value;
			SetOutcome::Overwritten(old)
		} else {
			if index > self.len {
				warn!(kind = %T::KIND, index, len = self.len, "set past the end, appending instead");
			}
			self.append(value);
			SetOutcome::Appended
		}
	}

	/// Removes and returns the element at position `index`, shifting all
	/// elements after it to the left.
	///
	/// Returns `None` and leaves the vector untouched if `index` is out of
	/// bounds.
	///
	/// # Panics
	///
	/// Panics if the vector has been freed.
	#[track_caller]
	pub fn remove(&mut self, index: usize) -> Option<T> {
		handle(self.check_live());

		let len = self.len;
		if index >= len {
			warn!(kind = %T::KIND, index, len, "removal index out of bounds, ignored");
			return None
		}

		let slots = self.buf.slots_mut();
		let removed = slots[index];
		slots.copy_within((index + 1)..len, index);
		slots[len - 1] = T::ZERO;
		self.len = len - 1;

		self.shrink_if_underutilized();
		Some(removed)
	}

	/// Removes the elements in `start..end`, shifting all elements after
	/// them to the left.
	///
	/// # Panics
	///
	/// Panics if `start >= end`, if `end > len`, or if the vector has been
	/// freed.
	#[inline]
	#[track_caller]
	pub fn range_remove(&mut self, start: usize, end: usize) {
		handle(self.try_range_remove(start, end))
	}

	/// The same as `range_remove`, but returns on errors instead of panicking.
	///
	/// The vector is left untouched on error.
	pub fn try_range_remove(&mut self, start: usize, end: usize) -> Result<(), VectError> {
		self.check_live()?;

		if start >= end {
			return Err(VectError::InvalidRange { start, end })
		}

		let len = self.len;
		if end > len {
			return Err(VectError::RangeOutOfBounds { end, len })
		}

		let count = end - start;
		let new_len = len - count;
		let slots = self.buf.slots_mut();
		slots[start..end].fill(T::ZERO);
		slots.copy_within(end..len, start);
		slots[new_len..len].fill(T::ZERO);
		self.len = new_len;

		self.shrink_if_underutilized();
		Ok(())
	}

	/// Removes the last element and returns it.
	///
	/// # Panics
	///
	/// Panics if the vector is empty or has been freed.
	#[inline]
	#[track_caller]
	pub fn pop(&mut self) -> T {
		handle(self.try_pop())
	}

	/// The same as `pop`, but returns on errors instead of panicking.
	pub fn try_pop(&mut self) -> Result<T, VectError> {
		self.check_live()?;

		let last = match self.last_index() {
			Some(last) => last,
			None => return Err(VectError::Empty)
		};

		let slot = &mut self.buf.slots_mut()[last];
		let value = *slot;
		*slot = T::ZERO;
		self.len = last;

		self.shrink_if_underutilized();
		Ok(value)
	}

	/// Returns the index of the first occurrence of `value`.
	///
	/// For byte vectors the search stops at the first NUL byte: elements
	/// stored after an embedded NUL are not found, unless NUL itself is the
	/// searched value.
	pub fn contains(&self, value: T) -> Option<usize> {
		for (i, &e) in self.occupied().iter().enumerate() {
			if e == value {
				return Some(i)
			}

			if T::STOPS_AT_ZERO && e == T::ZERO {
				return None
			}
		}

		None
	}

	/// Releases the buffer.
	///
	/// Length and capacity become 0. The vector must be re-initialised with
	/// [`reinit`](Vect::reinit) before it is modified again.
	pub fn free(&mut self) {
		if !self.is_freed() {
			debug!(kind = %T::KIND, capacity = self.capacity(), len = self.len, "freed vector");
		}

		self.buf.release();
		self.len = 0;
	}
}

impl<T: Element> Index<usize> for Vect<T> {
	type Output = T;

	#[inline]
	#[track_caller]
	fn index(&self, index: usize) -> &T {
		let len = self.len;
		match self.occupied().get(index) {
			Some(e) => e,
			None => panic!("index out of bounds: the len is {} but the index is {}", len, index)
		}
	}
}

impl<T: Element> Clone for Vect<T> {
	fn clone(&self) -> Vect<T> {
		let mut buf = RawBuf::with_capacity_zeroed(self.capacity());
		buf.slots_mut().copy_from_slice(self.buf.slots());
		Vect {
			buf,
			len: self.len
		}
	}
}

impl<T: Element> fmt::Debug for Vect<T> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.occupied(), f)
	}
}

macro_rules! impl_slice_eq {
	([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
		impl<$($vars)*> PartialEq<$rhs> for $lhs {
			#[inline]
			fn eq(&self, other: &$rhs) -> bool { self.occupied() == &other[..] }
		}
	}
}

impl_slice_eq! { [T: Element] Vect<T>, [T] }
impl_slice_eq! { [T: Element] Vect<T>, &[T] }
impl_slice_eq! { [T: Element] Vect<T>, Vec<T> }
impl_slice_eq! { [T: Element, const N: usize] Vect<T>, [T; N] }
impl_slice_eq! { [T: Element, const N: usize] Vect<T>, &[T; N] }

impl<T: Element> PartialEq for Vect<T> {
	#[inline]
	fn eq(&self, other: &Vect<T>) -> bool {
		self.occupied() == other.occupied()
	}
}

impl<T: Element + Eq> Eq for Vect<T> {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn appends_read_back_in_order() {
		let mut v: Vect<i64> = Vect::init(1);
		for i in 0..100 {
			v.append(i * 3);
		}
		assert_eq!(v.len(), 100);
		assert_eq!(v.last_index(), Some(99));
		for i in 0..100 {
			assert_eq!(v[i], i as i64 * 3);
		}
	}

	#[test]
	fn empty_vector_has_no_last_index() {
		let v: Vect<u8> = Vect::init(2);
		assert!(v.is_empty());
		assert_eq!(v.last_index(), None);
		assert_eq!(v.get(0), None);
	}

	#[test]
	fn byte_room_accounts_for_the_sentinel() {
		let mut v: Vect<u8> = Vect::init(4);
		v.append(b'a');
		v.append(b'b');
		// 2 elements + 1 more + sentinel = 4 slots.
		assert!(v.has_room_for(1));
		assert!(!v.has_room_for(2));
		assert_eq!(v.capacity(), 4);
	}

	#[test]
	fn int_room_has_no_sentinel() {
		let mut v: Vect<i64> = Vect::init(4);
		v.extend_from_slice(&[1, 2]);
		assert!(v.has_room_for(2));
		assert!(!v.has_room_for(3));
	}

	#[test]
	fn byte_grows_when_full() {
		let mut v: Vect<u8> = Vect::init(4);
		v.append(b'a');
		v.append(b'b');
		assert_eq!(v.capacity(), 4);
		v.append(b'c');
		assert_eq!(v.capacity(), 8);
		assert_eq!(v, b"abc");
	}

	#[test]
	fn int_grows_when_full() {
		let mut v: Vect<i64> = Vect::init(4);
		v.append(1);
		v.append(2);
		v.append(3);
		assert_eq!(v.capacity(), 4);
		v.append(4);
		assert_eq!(v.capacity(), 8);
		assert_eq!(v, [1, 2, 3, 4]);
	}

	#[test]
	fn too_small_byte_buffer_is_repaired_before_append() {
		let mut v: Vect<u8> = Vect::init(1);
		v.append(b'x');
		assert_eq!(v, b"x");
		assert!(v.has_room_for(1));
		assert_eq!(v.occupied_with_sentinel(), b"x\0");
	}

	#[test]
	fn sentinel_follows_every_append() {
		let mut v: Vect<u8> = Vect::init(2);
		for b in b"hello world".iter().copied() {
			v.append(b);
			assert_eq!(v.buf.slots()[v.len()], 0);
		}
		assert_eq!(v.len(), 11);
	}

	#[test]
	fn set_overwrites_in_place() {
		let mut v: Vect<i64> = Vect::init(4);
		v.extend_from_slice(&[1, 2, 3]);
		let capacity = v.capacity();
		assert_eq!(v.set(20, 1), SetOutcome::Overwritten(2));
		assert_eq!(v, [1, 20, 3]);
		assert_eq!(v.capacity(), capacity);
	}

	#[test]
	fn set_past_the_end_appends() {
		let mut v: Vect<i64> = Vect::init(4);
		v.extend_from_slice(&[1, 2]);
		assert_eq!(v.set(7, 100), SetOutcome::Appended);
		assert_eq!(v, [1, 2, 7]);
		assert_eq!(v.set(8, 3), SetOutcome::Appended);
		assert_eq!(v, [1, 2, 7, 8]);
	}

	#[test]
	fn remove_shifts_left() {
		let mut v: Vect<u8> = Vect::init(4);
		v.extend_from_slice(b"abc");
		assert_eq!(v.remove(1), Some(b'b'));
		assert_eq!(v, b"ac");
		assert_eq!(v.occupied_with_sentinel(), b"ac\0");
	}

	#[test]
	fn remove_out_of_bounds_is_a_no_op() {
		let mut v: Vect<i64> = Vect::init(4);
		v.extend_from_slice(&[1, 2]);
		assert_eq!(v.remove(2), None);
		assert_eq!(v.remove(usize::MAX), None);
		assert_eq!(v, [1, 2]);
	}

	#[test]
	fn int_shrink_boundary() {
		let mut v: Vect<i64> = Vect::init(4);
		v.extend_from_slice(&[1, 2, 3, 4]);
		assert_eq!(v.capacity(), 8);

		// 3 elements: 3 + 1 < 4 does not hold.
		v.remove(0);
		assert!(!v.is_underutilized());
		assert_eq!(v.capacity(), 8);

		// 2 elements: 2 + 1 < 4.
		v.remove(0);
		assert_eq!(v.capacity(), 4);
		assert_eq!(v, [3, 4]);
	}

	#[test]
	fn byte_shrink_boundary() {
		let mut v: Vect<u8> = Vect::init(4);
		v.extend_from_slice(b"abc");
		assert_eq!(v.capacity(), 8);

		// 2 bytes + sentinel + 1 < 4 does not hold.
		v.remove(1);
		assert_eq!(v.capacity(), 8);

		v.remove(1);
		assert_eq!(v.capacity(), 4);
		assert_eq!(v.occupied_with_sentinel(), b"a\0");
	}

	#[test]
	fn one_halving_per_removal() {
		let mut v: Vect<i64> = Vect::init(16);
		v.extend_from_slice(&[1, 2, 3]);
		let mut capacities = Vec::new();
		while !v.is_empty() {
			v.pop();
			capacities.push(v.capacity());
		}
		assert_eq!(capacities, [8, 4, 2]);

		let mut v: Vect<u8> = Vect::init(16);
		v.append(b'a');
		v.pop();
		assert_eq!(v.capacity(), 8);

		let mut v: Vect<u8> = Vect::init(32);
		v.append(b'a');
		v.remove(0);
		assert_eq!(v.capacity(), 16);
	}

	#[test]
	fn never_shrinks_below_the_minimum() {
		let mut v: Vect<i64> = Vect::init(2);
		v.append(1);
		v.pop();
		assert_eq!(v.capacity(), 2);

		let mut v: Vect<u8> = Vect::init(4);
		v.append(b'a');
		v.pop();
		assert_eq!(v.capacity(), 4);
		assert_eq!(v.capacity(), u8::min_capacity() * 2);
	}

	#[test]
	fn no_oscillation_around_growth() {
		let mut v: Vect<i64> = Vect::init(4);
		v.extend_from_slice(&[1, 2, 3, 4]);
		assert_eq!(v.capacity(), 8);
		for _ in 0..4 {
			v.pop();
			assert_eq!(v.capacity(), 8);
			v.append(4);
			assert_eq!(v.capacity(), 8);
		}
	}

	#[test]
	fn no_oscillation_around_shrink() {
		let mut v: Vect<u8> = Vect::init(8);
		v.extend_from_slice(b"ab");
		v.pop();
		assert_eq!(v.capacity(), 4);
		for _ in 0..4 {
			v.append(b'b');
			assert_eq!(v.capacity(), 4);
			v.pop();
			assert_eq!(v.capacity(), 4);
		}
	}

	#[test]
	fn range_remove_shifts_and_zeroes() {
		let mut v: Vect<u8> = Vect::init(4);
		v.extend_from_slice(b"abcdefg");
		v.range_remove(2, 5);
		assert_eq!(v, b"abfg");
		assert_eq!(v.len(), 4);
		assert!(v.buf.slots()[4..].iter().all(|&b| b == 0));
	}

	#[test]
	fn range_remove_halves_once() {
		let mut v: Vect<i64> = Vect::init(64);
		v.extend_from_slice(&(0..40).collect::<Vec<i64>>());
		assert_eq!(v.capacity(), 64);
		v.range_remove(0, 39);
		assert_eq!(v, [39]);
		assert_eq!(v.capacity(), 32);
		assert!(v.is_underutilized());

		// the next removal halves again.
		v.pop();
		assert_eq!(v.capacity(), 16);
	}

	#[test]
	fn try_range_remove_rejects_bad_bounds() {
		let mut v: Vect<i64> = Vect::init(8);
		v.extend_from_slice(&[1, 2, 3]);
		assert_eq!(v.try_range_remove(2, 2), Err(VectError::InvalidRange { start: 2, end: 2 }));
		assert_eq!(v.try_range_remove(2, 1), Err(VectError::InvalidRange { start: 2, end: 1 }));
		assert_eq!(v.try_range_remove(1, 4), Err(VectError::RangeOutOfBounds { end: 4, len: 3 }));
		assert_eq!(v, [1, 2, 3]);
		assert_eq!(v.try_range_remove(1, 3), Ok(()));
		assert_eq!(v, [1]);
	}

	#[test]
	#[should_panic(expected = "invalid range: start (is 3) should be < end (is 1)")]
	fn range_remove_reversed_is_fatal() {
		let mut v: Vect<u8> = Vect::init(8);
		v.extend_from_slice(b"abcd");
		v.range_remove(3, 1);
	}

	#[test]
	fn pop_single_element() {
		let mut v: Vect<u8> = Vect::init(4);
		v.append(b'x');
		assert_eq!(v.pop(), b'x');
		assert!(v.is_empty());
		v.append(b'y');
		assert_eq!(v.get(0), Some(b'y'));
	}

	#[test]
	fn try_pop_on_empty() {
		let mut v: Vect<i64> = Vect::init(4);
		assert_eq!(v.try_pop(), Err(VectError::Empty));
	}

	#[test]
	#[should_panic(expected = "cannot pop from an empty vector")]
	fn pop_on_empty_is_fatal() {
		let mut v: Vect<i64> = Vect::init(4);
		v.pop();
	}

	#[test]
	fn byte_contains_stops_at_nul() {
		let mut v: Vect<u8> = Vect::init(4);
		v.extend_from_slice(&[b'a', 0, b'z']);
		assert_eq!(v.contains(b'a'), Some(0));
		assert_eq!(v.contains(b'z'), None);
		assert_eq!(v.contains(0), Some(1));
		assert_eq!(v.contains(b'q'), None);
	}

	#[test]
	fn byte_contains_does_not_see_the_sentinel() {
		let mut v: Vect<u8> = Vect::init(4);
		v.extend_from_slice(b"ab");
		assert_eq!(v.contains(0), None);
	}

	#[test]
	fn int_contains_scans_past_zeros() {
		let mut v: Vect<i64> = Vect::init(4);
		v.extend_from_slice(&[0, 0, 5, 0, 9]);
		assert_eq!(v.contains(9), Some(4));
		assert_eq!(v.contains(0), Some(0));
		assert_eq!(v.contains(1), None);
	}

	#[test]
	fn extend_matches_repeated_append() {
		for n in 0..40 {
			let data: Vec<u8> = (1..=n).collect();
			let mut a: Vect<u8> = Vect::init(2);
			let mut b: Vect<u8> = Vect::init(2);
			for &x in &data {
				a.append(x);
			}
			b.extend_from_slice(&data);
			assert_eq!(a, b);
			assert_eq!(a.capacity(), b.capacity());
		}
	}

	#[test]
	fn free_then_reinit() {
		let mut v: Vect<i64> = Vect::init(4);
		v.extend_from_slice(&[1, 2, 3]);
		v.free();
		assert!(v.is_freed());
		assert_eq!(v.len(), 0);
		assert_eq!(v.capacity(), 0);
		assert_eq!(v.contains(1), None);

		// freeing twice is harmless.
		v.free();

		v.reinit(2);
		v.append(5);
		assert_eq!(v, [5]);
	}

	#[test]
	#[should_panic(expected = "vector used after free")]
	fn append_after_free_is_fatal() {
		let mut v: Vect<u8> = Vect::init(4);
		v.free();
		v.append(b'a');
	}

	#[test]
	fn try_pop_after_free() {
		let mut v: Vect<u8> = Vect::init(4);
		v.free();
		assert_eq!(v.try_pop(), Err(VectError::Freed));
	}

	#[test]
	#[should_panic(expected = "initial capacity must be at least 1")]
	fn zero_capacity_is_fatal() {
		let _: Vect<u8> = Vect::init(0);
	}

	#[test]
	#[should_panic(expected = "index out of bounds: the len is 2 but the index is 2")]
	fn index_past_the_end_panics() {
		let mut v: Vect<i64> = Vect::init(4);
		v.extend_from_slice(&[1, 2]);
		let _ = v[2];
	}

	#[test]
	fn clone_is_independent() {
		let mut a: Vect<u8> = Vect::init(4);
		a.extend_from_slice(b"abc");
		let mut b = a.clone();
		b.set(b'z', 0);
		assert_eq!(a, b"abc");
		assert_eq!(b, b"zbc");
		assert_eq!(a.capacity(), b.capacity());
	}

	#[test]
	fn debug_lists_elements() {
		let mut v: Vect<i64> = Vect::init(4);
		v.extend_from_slice(&[1, -2]);
		assert_eq!(format!("{:?}", v), "[1, -2]");
	}

	mod warnings {
		use super::*;
		use std::sync::{
			Arc,
			atomic::{
				AtomicUsize,
				Ordering
			}
		};
		use tracing::{
			span,
			Event,
			Level,
			Metadata,
			Subscriber
		};

		/// Counts `WARN` events.
		struct WarnCounter(Arc<AtomicUsize>);

		impl Subscriber for WarnCounter {
			fn enabled(&self, metadata: &Metadata<'_>) -> bool {
				*metadata.level() == Level::WARN
			}

			fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
				span::Id::from_u64(1)
			}

			fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

			fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

			fn event(&self, _: &Event<'_>) {
				self.0.fetch_add(1, Ordering::SeqCst);
			}

			fn enter(&self, _: &span::Id) {}

			fn exit(&self, _: &span::Id) {}
		}

		fn warnings_during(f: impl FnOnce()) -> usize {
			let count = Arc::new(AtomicUsize::new(0));
			tracing::subscriber::with_default(WarnCounter(count.clone()), f);
			count.load(Ordering::SeqCst)
		}

		#[test]
		fn set_at_len_appends_quietly() {
			let mut v: Vect<i64> = Vect::init(4);
			v.extend_from_slice(&[1, 2]);
			let n = warnings_during(|| {
				assert_eq!(v.set(3, 2), SetOutcome::Appended);
			});
			assert_eq!(n, 0);
			assert_eq!(v, [1, 2, 3]);
		}

		#[test]
		fn set_past_len_warns() {
			let mut v: Vect<i64> = Vect::init(4);
			v.extend_from_slice(&[1, 2]);
			let n = warnings_during(|| {
				assert_eq!(v.set(3, 5), SetOutcome::Appended);
			});
			assert_eq!(n, 1);
			assert_eq!(v, [1, 2, 3]);
		}

		#[test]
		fn remove_out_of_bounds_warns() {
			let mut v: Vect<u8> = Vect::init(4);
			let n = warnings_during(|| {
				assert_eq!(v.remove(0), None);
			});
			assert_eq!(n, 1);
		}
	}

	mod proptests {
		use super::*;
		use proptest::prelude::*;

		proptest! {
			#[test]
			fn unoccupied_slots_stay_zero(
				ops in proptest::collection::vec((any::<bool>(), any::<u8>()), 1..200),
			) {
				let mut v: Vect<u8> = Vect::init(2);
				for (push, b) in ops {
					if push {
						v.append(b);
					} else if !v.is_empty() {
						let capacity = v.capacity();
						v.pop();
						prop_assert!(v.capacity() == capacity || v.capacity() == capacity / 2);
					}
					prop_assert!(v.buf.slots()[v.len()..].iter().all(|&s| s == 0));
					prop_assert!(v.has_room_for(1));
					prop_assert!(!v.is_underutilized());
				}
			}

			#[test]
			fn capacity_is_a_doubling_of_the_initial_one(
				initial in 1usize..8,
				n in 0usize..300,
			) {
				let mut v: Vect<i64> = Vect::init(initial);
				for i in 0..n {
					v.append(i as i64);
				}
				let ratio = v.capacity() / initial;
				prop_assert_eq!(v.capacity() % initial, 0);
				prop_assert!(ratio.is_power_of_two());
			}
		}
	}
}
