use std::ops::RangeInclusive;

use num_bigint::BigUint;
use proptest::collection::vec;
use proptest::prelude::*;

use crate::digits::{Base, Digits};

pub fn any_base() -> impl Strategy<Value = Base> {
    (Base::MIN..=Base::MAX).prop_map(|radix| Base::new(radix).unwrap())
}

pub fn any_digits(base: Base, length: RangeInclusive<usize>) -> impl Strategy<Value = Digits> {
    vec(0..base.get(), length).prop_map(Digits::from_vec)
}

/// A base together with two operands whose lengths fall in `length`.
pub fn any_operands(length: RangeInclusive<usize>) -> impl Strategy<Value = (Base, Digits, Digits)> {
    any_base().prop_flat_map(move |base| {
        (
            Just(base),
            any_digits(base, length.clone()),
            any_digits(base, length.clone()),
        )
    })
}

pub fn to_biguint(digits: &Digits, base: Base) -> BigUint {
    let bytes: Vec<u8> = digits.as_slice().iter().map(|&digit| digit as u8).collect();
    BigUint::from_radix_le(&bytes, base.get()).unwrap()
}

pub fn from_biguint(value: &BigUint, base: Base) -> Digits {
    let digits = value.to_radix_le(base.get());
    Digits::from_vec(digits.into_iter().map(u32::from).collect())
}
