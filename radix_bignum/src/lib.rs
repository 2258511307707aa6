//! Arbitrary-precision arithmetic on non-negative integers written in a
//! base from 2 to 10.
//!
//! Numbers are [`Digits`]: little-endian digit vectors passed and returned by
//! value. Sums and differences come from the [`schoolbook`] module,
//! products from the recursive [`karatsuba`] multiplier and quotients from
//! long [`division`].

pub mod cli;
pub mod digits;
pub mod division;
pub mod error;
pub mod karatsuba;
pub mod schoolbook;

#[cfg(test)]
mod test_utils;

pub use digits::{align, Base, Digit, Digits};
pub use division::{div_rem, divide};
pub use error::{Error, Result};
pub use karatsuba::multiply;
pub use schoolbook::{add, multiply_by_digit, multiply_schoolbook, sub};
