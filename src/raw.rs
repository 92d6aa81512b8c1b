use core::{
	alloc::Layout,
	marker::PhantomData,
	ptr::NonNull,
	slice
};
use std::alloc::{
	self,
	handle_alloc_error
};
use crate::element::Element;

/// A low-level utility for managing the zero-initialised buffer of a `Vect`.
///
/// Every slot of the buffer is always initialised: fresh memory comes from
/// `alloc_zeroed`, and the region added by [`grow_to`](RawBuf::grow_to) is
/// zeroed before it becomes visible. This is sound because the only element
/// formats are `u8` and `i64`, for which the all-zero bit pattern is valid.
///
/// `RawBuf` does not know which slots are logically occupied. It is up to
/// the user of `RawBuf` to track the length.
pub struct RawBuf<T: Element> {
	/// Pointer to the heap buffer, dangling when `capacity == 0`.
	ptr: NonNull<T>,

	/// Number of allocated slots.
	capacity: usize,

	marker: PhantomData<T>
}

// SAFETY: the buffer is uniquely owned and `T` is `u8` or `i64`.
unsafe impl<T: Element> Send for RawBuf<T> {}
unsafe impl<T: Element> Sync for RawBuf<T> {}

impl<T: Element> Drop for RawBuf<T> {
	fn drop(&mut self) {
		self.release()
	}
}

impl<T: Element> RawBuf<T> {
	/// A buffer without any allocated memory.
	#[inline]
	pub const fn dangling() -> Self {
		RawBuf {
			ptr: NonNull::dangling(),
			capacity: 0,
			marker: PhantomData
		}
	}

	/// Allocate a zero-filled buffer of `capacity` slots.
	///
	/// # Panics
	///
	/// Panics if the size of the buffer overflows. Calls
	/// [`handle_alloc_error`] if the allocator fails.
	pub fn with_capacity_zeroed(capacity: usize) -> Self {
		if capacity == 0 {
			return Self::dangling()
		}

		let layout = array_layout::<T>(capacity);
		// SAFETY: `layout` has a non-zero size.
		let ptr = unsafe { alloc::alloc_zeroed(layout) };
		let ptr = match NonNull::new(ptr) {
			Some(ptr) => ptr.cast(),
			None => handle_alloc_error(layout)
		};

		RawBuf {
			ptr,
			capacity,
			marker: PhantomData
		}
	}

	/// Number of allocated slots.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Returns the current allocated memory and layout.
	///
	/// Returns `None` if nothing is allocated.
	fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
		if self.capacity == 0 {
			None
		} else {
			// SAFETY: this layout was validated when the buffer was allocated.
			unsafe {
				let align = core::mem::align_of::<T>();
				let size = core::mem::size_of::<T>() * self.capacity;
				let layout = Layout::from_size_align_unchecked(size, align);
				Some((self.ptr.cast(), layout))
			}
		}
	}

	/// All the slots of the buffer, occupied or not.
	///
	/// Modifying the owning vector may reallocate the buffer, so the returned
	/// slice cannot outlive the borrow.
	#[inline]
	pub fn slots(&self) -> &[T] {
		// SAFETY: every slot is initialised, see the type documentation.
		unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.capacity) }
	}

	/// Mutable access to all the slots of the buffer.
	#[inline]
	pub fn slots_mut(&mut self) -> &mut [T] {
		// SAFETY: every slot is initialised and the buffer is uniquely owned.
		unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.capacity) }
	}

	/// Grow the buffer to `new_capacity` slots.
	///
	/// Existing slots are preserved, new slots are zero.
	///
	/// # Panics
	///
	/// Panics if `new_capacity` is smaller than the current capacity.
	pub fn grow_to(&mut self, new_capacity: usize) {
		assert!(new_capacity >= self.capacity, "Tried to grow to a smaller capacity");
		if new_capacity == self.capacity {
			return
		}

		let old_capacity = self.capacity;
		self.finish_resize(new_capacity);

		// SAFETY: the slots `old_capacity..new_capacity` were just allocated.
		unsafe {
			self.ptr.as_ptr().add(old_capacity).write_bytes(0, new_capacity - old_capacity);
		}
	}

	/// Shrink the buffer to `new_capacity` slots.
	///
	/// The first `new_capacity` slots are preserved.
	///
	/// # Panics
	///
	/// Panics if `new_capacity` is zero or larger than the current capacity.
	/// Use [`release`](RawBuf::release) to free the whole buffer.
	pub fn shrink_to(&mut self, new_capacity: usize) {
		assert!(new_capacity <= self.capacity, "Tried to shrink to a larger capacity");
		assert!(new_capacity > 0, "Tried to shrink to an empty buffer");
		if new_capacity < self.capacity {
			self.finish_resize(new_capacity)
		}
	}

	/// Free the buffer. The capacity becomes zero.
	pub fn release(&mut self) {
		if let Some((ptr, layout)) = self.current_memory() {
			// SAFETY: `ptr` was allocated with `layout` by the global allocator.
			unsafe { alloc::dealloc(ptr.as_ptr(), layout) }
		}

		self.ptr = NonNull::dangling();
		self.capacity = 0;
	}

	fn finish_resize(&mut self, new_capacity: usize) {
		let new_layout = array_layout::<T>(new_capacity);

		let ptr = match self.current_memory() {
			// SAFETY: `ptr` is currently allocated with `old_layout`, and the
			// new size is non-zero and does not overflow `isize`.
			Some((ptr, old_layout)) => unsafe { alloc::realloc(ptr.as_ptr(), old_layout, new_layout.size()) },
			// SAFETY: `new_layout` has a non-zero size.
			None => unsafe { alloc::alloc_zeroed(new_layout) }
		};

		match NonNull::new(ptr) {
			Some(ptr) => {
				self.ptr = ptr.cast();
				self.capacity = new_capacity;
			},
			None => handle_alloc_error(new_layout)
		}
	}
}

/// Layout of a non-empty array of `capacity` elements.
///
/// `Layout::array` rejects any size over `isize::MAX` bytes, which is
/// reported as a capacity overflow.
fn array_layout<T>(capacity: usize) -> Layout {
	debug_assert!(capacity > 0);
	match Layout::array::<T>(capacity) {
		Ok(layout) => layout,
		Err(_) => capacity_overflow(),
	}
}

// One central function responsible for reporting capacity overflows.
pub(crate) fn capacity_overflow() -> ! {
	panic!("capacity overflow");
}
