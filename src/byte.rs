//! Byte vectors.
//!
//! A [`ByteVect`] always keeps a NUL byte right after its last element, so
//! its content can be handed out as a C string at any time.
use std::{
	ffi::{
		CStr,
		CString
	},
	fmt
};
use crate::{
	element::{
		Element,
		Kind,
		Value
	},
	generic::Vect
};

impl Element for u8 {
	const KIND: Kind = Kind::Byte;
	const ZERO: u8 = 0;
	const SENTINEL_SLOTS: usize = 1;
	const STOPS_AT_ZERO: bool = true;

	#[inline]
	fn into_value(self) -> Value {
		Value::Byte(self)
	}

	#[inline]
	fn from_value(value: Value) -> Option<u8> {
		match value {
			Value::Byte(b) => Some(b),
			_ => None
		}
	}
}

/// Vector of single-byte characters, kept NUL-terminated.
pub type ByteVect = Vect<u8>;

/// Capacity of a byte vector built from a string: the bytes, the sentinel
/// and room for one more byte.
#[inline]
fn string_capacity(len: usize) -> usize {
	len.saturating_add(2)
}

impl Vect<u8> {
	/// Appends the given [`char`], UTF-8 encoded.
	#[inline]
	pub fn append_char(&mut self, ch: char) {
		match ch.len_utf8() {
			1 => self.append(ch as u8),
			_ => self.extend_from_slice(ch.encode_utf8(&mut [0; 4]).as_bytes()),
		}
	}

	/// Appends a given string slice.
	#[inline]
	pub fn extend_from_str(&mut self, string: &str) {
		self.extend_from_slice(string.as_bytes())
	}

	/// Copies the bytes followed by the NUL sentinel.
	///
	/// Returns an empty `Vec` if the vector has been freed.
	pub fn to_bytes_with_nul(&self) -> Vec<u8> {
		self.occupied_with_sentinel().to_vec()
	}

	/// Copies the bytes up to the first NUL into a `CString`.
	///
	/// Bytes stored after an embedded NUL are not part of the result.
	pub fn to_c_string(&self) -> CString {
		match CStr::from_bytes_until_nul(self.occupied_with_sentinel()) {
			Ok(s) => s.to_owned(),
			Err(_) => CString::default() // freed.
		}
	}

	/// Copies the bytes into a `String`, replacing invalid UTF-8 sequences.
	pub fn to_string_lossy(&self) -> String {
		String::from_utf8_lossy(self.occupied()).into_owned()
	}
}

impl From<&str> for Vect<u8> {
	#[inline]
	fn from(s: &str) -> Vect<u8> {
		let mut v = Vect::init(string_capacity(s.len()));
		v.extend_from_str(s);
		v
	}
}

impl From<&[u8]> for Vect<u8> {
	#[inline]
	fn from(bytes: &[u8]) -> Vect<u8> {
		let mut v = Vect::init(string_capacity(bytes.len()));
		v.extend_from_slice(bytes);
		v
	}
}

impl std::str::FromStr for Vect<u8> {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Vect<u8>, std::convert::Infallible> {
		Ok(s.into())
	}
}

impl fmt::Write for Vect<u8> {
	#[inline]
	fn write_str(&mut self, s: &str) -> fmt::Result {
		self.extend_from_str(s);
		Ok(())
	}
}

impl PartialEq<str> for Vect<u8> {
	#[inline]
	fn eq(&self, other: &str) -> bool {
		self.occupied() == other.as_bytes()
	}
}

impl<'b> PartialEq<&'b str> for Vect<u8> {
	#[inline]
	fn eq(&self, other: &&'b str) -> bool {
		self.occupied() == other.as_bytes()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fmt::Write;

	#[test]
	fn strings_keep_their_terminator() {
		let mut v = ByteVect::from("abc");
		assert_eq!(v, "abc");
		assert_eq!(v.to_bytes_with_nul(), b"abc\0");

		v.extend_from_str("de");
		assert_eq!(v.to_bytes_with_nul(), b"abcde\0");

		v.range_remove(0, 4);
		assert_eq!(v.to_bytes_with_nul(), b"e\0");
	}

	#[test]
	fn from_str_leaves_room_for_one_more() {
		let v = ByteVect::from("hello");
		assert_eq!(v.capacity(), 7);
		assert!(v.has_room_for(1));
	}

	#[test]
	fn c_string_stops_at_embedded_nul() {
		let v = ByteVect::from(&b"ab\0cd"[..]);
		assert_eq!(v.len(), 5);
		assert_eq!(v.to_c_string().as_bytes(), b"ab");
		assert_eq!(ByteVect::from("xyz").to_c_string().as_bytes(), b"xyz");
	}

	#[test]
	fn freed_vector_exports_nothing() {
		let mut v = ByteVect::from("abc");
		v.free();
		assert!(v.to_bytes_with_nul().is_empty());
		assert!(v.to_c_string().as_bytes().is_empty());
		assert_eq!(v.to_string_lossy(), "");
	}

	#[test]
	fn multibyte_chars_are_encoded() {
		let mut v = ByteVect::init(2);
		v.append_char('a');
		v.append_char('é');
		assert_eq!(v.len(), 3);
		assert_eq!(v.to_string_lossy(), "aé");
	}

	#[test]
	fn write_macro_appends() {
		let mut v = ByteVect::init(4);
		write!(v, "{}-{}", 12, "ab").unwrap();
		assert_eq!(v, "12-ab");
	}

	#[test]
	fn value_round_trip() {
		assert_eq!(b'x'.into_value(), Value::Byte(b'x'));
		assert_eq!(u8::from_value(Value::Byte(3)), Some(3));
		assert_eq!(u8::from_value(Value::Integer(3)), None);
	}
}
