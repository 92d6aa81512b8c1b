//! This crate provides the
//! [`Vect`](https://docs.rs/vect/latest/vect/generic/struct.Vect.html)
//! data structure: a dynamic array that manages its own buffer,
//! doubling it when full and halving it when mostly empty.
//! Two element kinds are supported, bytes and machine integers,
//! either through the typed aliases [`ByteVect`] and [`IntVect`],
//! or through the kind-tagged [`DynamicArray`].
//!
//! ## Basic usage
//!
//! ```rust
//! use vect::ByteVect;
//!
//! let mut v = ByteVect::init(4);
//! v.append(b'a');
//! v.append(b'b');
//! v.append(b'c'); // grows the buffer to 8 slots.
//! assert_eq!(v, b"abc");
//!
//! v.remove(1);
//! assert_eq!(v, b"ac");
//! assert_eq!(v.len(), 2);
//! ```
//!
//! Byte vectors always keep a NUL byte right after their last element.
//! This sentinel is not part of the length, but it means that the content
//! can be exported as a C string at any time:
//! ```rust
//! # use vect::ByteVect;
//! let v = ByteVect::from("hello");
//! assert_eq!(v.to_bytes_with_nul(), b"hello\0");
//! ```
//!
//! When the kind is only known at runtime, use a [`DynamicArray`]:
//! ```rust
//! use vect::{DynamicArray, Kind, Value};
//!
//! let mut v = DynamicArray::init(Kind::Integer, 4);
//! v.append(1i64);
//! v.append(0i64);
//! v.append(7i64);
//! assert_eq!(v.contains(7i64), Some(2));
//! assert_eq!(v.pop(), Value::Integer(7));
//! ```
//!
//! ## Errors
//!
//! Out-of-range `remove` and `set` are not errors: the first is ignored
//! and the second appends. Misuse, such as popping from an empty vector or
//! removing a malformed range, panics with a [`VectError`] message. Most of
//! these operations have a `try_*` variant returning the error instead.
pub mod raw;
pub mod element;
pub mod error;
pub mod config;
pub mod generic;
pub mod byte;
pub mod int;
pub mod tagged;

pub use element::{
	Element,
	Kind,
	Value
};
pub use error::VectError;
pub use config::VectConfig;
pub use generic::{
	Vect,
	SetOutcome
};
pub use byte::ByteVect;
pub use int::IntVect;
pub use tagged::DynamicArray;
