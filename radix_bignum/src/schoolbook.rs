//! Linear-time addition and subtraction, and quadratic multiplication.
//!
//! None of these strip trailing zeros from their result: the sum and the
//! difference are one digit longer than the longer operand, which leaves
//! room for the final carry.

use log::trace;

use crate::digits::{align, Base, Digit, Digits};
use crate::error::{Error, Result};

pub fn add(first: Digits, second: Digits, base: Base) -> Digits {
    let (length, first, second) = align(first, second, 1);
    let radix = base.get();

    let mut digits = Vec::with_capacity(length);
    let mut carry = 0;
    for (&a, &b) in first.as_slice().iter().zip(second.as_slice()) {
        let sum = a + b + carry;
        digits.push(sum % radix);
        carry = sum / radix;
    }
    debug_assert_eq!(carry, 0);

    Digits::from_vec(digits)
}

/// Subtracts `second` from `first`, failing if the result would be negative.
pub fn sub(first: Digits, second: Digits, base: Base) -> Result<Digits> {
    if first < second {
        return Err(Error::SubtractionUnderflow);
    }

    Ok(sub_unchecked(first, second, base))
}

/// Borrow-propagating subtraction.
///
/// Requires `first >= second`. Otherwise the borrow out of the top digit is
/// dropped and the result is `first - second` modulo `base^(len + 1)`.
pub(crate) fn sub_unchecked(first: Digits, second: Digits, base: Base) -> Digits {
    debug_assert!(first >= second, "{first} - {second} underflows");
    let (length, first, second) = align(first, second, 1);
    let radix = i64::from(base.get());

    let mut digits = Vec::with_capacity(length);
    let mut borrow = 0;
    for (&a, &b) in first.as_slice().iter().zip(second.as_slice()) {
        let mut difference = i64::from(a) - i64::from(b) - borrow;
        if difference < 0 {
            difference += radix;
            borrow = 1;
        } else {
            borrow = 0;
        }
        digits.push(difference as Digit);
    }

    Digits::from_vec(digits)
}

/// Multiplies by a single digit below `base`.
pub fn multiply_by_digit(value: Digits, digit: Digit, base: Base) -> Digits {
    debug_assert!(digit < base.get());
    if digit == 0 {
        return Digits::zero();
    } else if digit == 1 {
        return value;
    }

    let radix = base.get();
    let mut carry = 0;
    let mut digits: Vec<Digit> = value
        .into_vec()
        .into_iter()
        .map(|d| {
            let product = d * digit + carry;
            carry = product / radix;
            product % radix
        })
        .collect();

    if carry > 0 {
        digits.push(carry);
    }

    Digits::from_vec(digits)
}

/// Long multiplication of operands of any length.
///
/// Column products are accumulated without carrying, so a column may hold
/// a value far above `base` until the single carry pass at the end.
pub fn multiply_schoolbook(first: Digits, second: Digits, base: Base) -> Digits {
    trace!("schoolbook {} x {} digits", first.len(), second.len());
    let radix = base.get();

    let mut columns: Vec<Digit> = vec![0; first.len() + second.len() + 1];
    for (i, &b) in second.as_slice().iter().enumerate() {
        for (j, &a) in first.as_slice().iter().enumerate() {
            columns[i + j] += a * b;
        }
    }

    let mut carry = 0;
    for column in &mut columns {
        let total = *column + carry;
        *column = total % radix;
        carry = total / radix;
    }
    debug_assert_eq!(carry, 0);

    Digits::from_vec(columns)
}
