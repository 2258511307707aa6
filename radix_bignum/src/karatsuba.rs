use log::trace;

use crate::digits::{align, Base, Digits};
use crate::schoolbook::{add, multiply_schoolbook, sub_unchecked};

/// Operands at most this long are multiplied directly.
pub const SCHOOLBOOK_CUTOFF: usize = 4;

/// Karatsuba multiplication. The product has no trailing zeros.
pub fn multiply(first: Digits, second: Digits, base: Base) -> Digits {
    karatsuba(first, second, base, 0)
}

fn karatsuba(first: Digits, second: Digits, base: Base, depth: usize) -> Digits {
    let (length, first, second) = align(first, second, 0);

    if length == 1 {
        let radix = base.get();
        let product = first.as_slice()[0] * second.as_slice()[0];
        return Digits::from_vec(vec![product % radix, product / radix]).normalized();
    }

    if length <= SCHOOLBOOK_CUTOFF {
        return multiply_schoolbook(first, second, base).normalized();
    }

    let half = length / 2;
    trace!("karatsuba depth {depth}: {length} digits split at {half}");

    let (first_low, first_high) = first.split_at(half);
    let (second_low, second_high) = second.split_at(half);
    let first_sum = add(first_low.clone(), first_high.clone(), base).normalized();
    let second_sum = add(second_low.clone(), second_high.clone(), base).normalized();

    let low = karatsuba(first_low, second_low, base, depth + 1);
    let high = karatsuba(first_high, second_high, base, depth + 1);
    let middle = karatsuba(first_sum, second_sum, base, depth + 1);

    // middle = low + (cross terms) + high, so this never underflows.
    let cross = sub_unchecked(middle, add(low.clone(), high.clone(), base), base);

    let result = add(high.shift(2 * half), cross.shift(half), base);
    add(result, low, base).normalized()
}
