use crate::{
	element::{
		Element,
		Kind,
		Value
	},
	generic::Vect
};

impl Element for i64 {
	const KIND: Kind = Kind::Integer;
	const ZERO: i64 = 0;
	const SENTINEL_SLOTS: usize = 0;
	const STOPS_AT_ZERO: bool = false;

	#[inline]
	fn into_value(self) -> Value {
		Value::Integer(self)
	}

	#[inline]
	fn from_value(value: Value) -> Option<i64> {
		match value {
			Value::Integer(i) => Some(i),
			_ => None
		}
	}
}

/// Vector of machine integers.
pub type IntVect = Vect<i64>;

impl From<&[i64]> for Vect<i64> {
	#[inline]
	fn from(values: &[i64]) -> Vect<i64> {
		let mut v = Vect::init(values.len().saturating_add(1));
		v.extend_from_slice(values);
		v
	}
}
