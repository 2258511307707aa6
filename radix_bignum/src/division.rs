//! Schoolbook long division.
//!
//! The dividend is consumed one digit at a time from the most significant
//! end. Each quotient digit is the largest `q < base` with
//! `q * divisor <= remainder`, found by binary search over `[0, base)`.

use log::debug;

use crate::digits::{Base, Digit, Digits};
use crate::error::{Error, Result};
use crate::schoolbook::{add, multiply_by_digit, sub_unchecked};

/// Returns the quotient and remainder, both without trailing zeros.
pub fn div_rem(dividend: Digits, divisor: Digits, base: Base) -> Result<(Digits, Digits)> {
    if divisor.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let divisor = divisor.normalized();
    if dividend < divisor {
        return Ok((Digits::zero(), dividend.normalized()));
    }

    let dividend = dividend.normalized();
    debug!("dividing {} digits by {} digits", dividend.len(), divisor.len());

    let mut quotient = vec![0; dividend.len()];
    let mut remainder = Digits::zero();
    for (position, digit) in dividend.into_vec().into_iter().enumerate().rev() {
        remainder = add(remainder.shift(1), Digits::from_vec(vec![digit]), base).normalized();

        let q = quotient_digit(&remainder, &divisor, base);
        if q > 0 {
            let product = multiply_by_digit(divisor.clone(), q, base);
            remainder = sub_unchecked(remainder, product, base).normalized();
        }
        quotient[position] = q;
    }

    Ok((Digits::from_vec(quotient).normalized(), remainder))
}

pub fn divide(dividend: Digits, divisor: Digits, base: Base) -> Result<Digits> {
    div_rem(dividend, divisor, base).map(|(quotient, _)| quotient)
}

/// Requires `remainder < divisor * base`.
fn quotient_digit(remainder: &Digits, divisor: &Digits, base: Base) -> Digit {
    let (mut low, mut high) = (0, base.get() - 1);
    while low < high {
        let middle = (low + high + 1) / 2;
        if multiply_by_digit(divisor.clone(), middle, base) <= *remainder {
            low = middle;
        } else {
            high = middle - 1;
        }
    }

    low
}
