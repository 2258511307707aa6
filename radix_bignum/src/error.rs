use std::result;

use thiserror::Error;

use crate::digits::Digit;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,
    /// The minuend of a subtraction was smaller than the subtrahend.
    #[error("subtraction would produce a negative result")]
    SubtractionUnderflow,
    #[error("base {0} is out of range, expected 2 to 10")]
    InvalidBase(u32),
    #[error("base {0} is out of range, expected 2 to 10")]
    BaseTooLarge(String),
    #[error("digit {digit} is not valid in base {base}")]
    InvalidDigit { digit: Digit, base: u32 },
    #[error("unexpected character {0:?} in number")]
    InvalidCharacter(char),
    #[error("number has {len} digits, at most {max} are allowed")]
    TooManyDigits { len: usize, max: usize },
    #[error("missing input: {0}")]
    MissingInput(&'static str),
}

pub type Result<T> = result::Result<T, Error>;
