use std::cmp::{self, Ordering};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub type Digit = u32;

/// A radix in the supported range `2..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Base(u32);

impl Base {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 10;

    pub const BINARY: Self = Self(2);
    pub const DECIMAL: Self = Self(10);

    pub fn new(radix: u32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&radix) {
            Ok(Self(radix))
        } else {
            Err(Error::InvalidBase(radix))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Base {
    type Error = Error;

    fn try_from(radix: u32) -> Result<Self> {
        Self::new(radix)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative integer stored as little-endian digits: index 0 holds the
/// least significant digit.
///
/// The vector is never empty, zero is `[0]`. Trailing (most significant)
/// zeros are allowed and do not change the value, so equality and ordering
/// compare represented values rather than raw vectors. Both assume every
/// digit is already below the base, which holds for everything the
/// arithmetic functions return.
#[derive(Debug, Clone)]
pub struct Digits {
    digits: Vec<Digit>,
}

#[allow(clippy::len_without_is_empty)]
impl Digits {
    pub fn zero() -> Self {
        Self { digits: vec![0] }
    }

    pub fn from_vec(digits: Vec<Digit>) -> Self {
        if digits.is_empty() {
            return Self::zero();
        }

        Self { digits }
    }

    pub fn as_slice(&self) -> &[Digit] {
        &self.digits
    }

    pub fn into_vec(self) -> Vec<Digit> {
        self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&digit| digit == 0)
    }

    /// Digits up to and including the most significant non-zero one.
    fn significant(&self) -> &[Digit] {
        let length = self
            .digits
            .iter()
            .rposition(|&digit| digit != 0)
            .map_or(1, |position| position + 1);
        &self.digits[..length]
    }

    /// Strips trailing zeros, leaving `[0]` for zero.
    pub fn normalized(mut self) -> Self {
        let length = self.significant().len();
        self.digits.truncate(length);
        self
    }

    /// Extends with zero digits at the most significant end up to `length`.
    pub fn pad_to(mut self, length: usize) -> Self {
        if length > self.len() {
            self.digits.resize(length, 0);
        }

        self
    }

    /// Multiplies by `base^places` by prepending zero digits.
    pub fn shift(self, places: usize) -> Self {
        if places == 0 {
            return self;
        }

        let mut digits = Vec::with_capacity(self.len() + places);
        digits.resize(places, 0);
        digits.extend(self.digits);
        Self { digits }
    }

    /// Splits into the low digits `[0, position)` and the high digits
    /// `[position, len)`.
    pub fn split_at(mut self, position: usize) -> (Self, Self) {
        let position = cmp::min(position, self.len());
        let high = self.digits.split_off(position);
        (Self::from_vec(self.digits), Self::from_vec(high))
    }

    pub fn validate(&self, base: Base) -> Result<()> {
        match self.digits.iter().find(|&&digit| digit >= base.get()) {
            Some(&digit) => Err(Error::InvalidDigit {
                digit,
                base: base.get(),
            }),
            None => Ok(()),
        }
    }

    /// Reads one decimal character per digit, most significant first.
    pub fn parse(text: &str, base: Base) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::MissingInput("number"));
        }

        let mut digits = Vec::with_capacity(text.len());
        for ch in text.chars().rev() {
            let digit = ch.to_digit(10).ok_or(Error::InvalidCharacter(ch))?;
            digits.push(digit);
        }

        let digits = Self { digits };
        digits.validate(base)?;
        Ok(digits)
    }

    pub fn from_u128(value: u128, base: Base) -> Self {
        const MAX_DIGITS_IN_U128: usize = 128;

        let radix = u128::from(base.get());
        let mut digits = Vec::with_capacity(MAX_DIGITS_IN_U128);
        let mut value = value;
        while value > 0 {
            digits.push((value % radix) as Digit);
            value /= radix;
        }

        Self::from_vec(digits)
    }

    /// The represented value, or `None` if it does not fit in a `u128`.
    pub fn to_u128(&self, base: Base) -> Option<u128> {
        let radix = u128::from(base.get());
        self.digits.iter().rev().try_fold(0u128, |value, &digit| {
            value.checked_mul(radix)?.checked_add(u128::from(digit))
        })
    }
}

/// Pads both operands to `max(len) + extra` digits and returns that length
/// along with the padded operands.
pub fn align(first: Digits, second: Digits, extra: usize) -> (usize, Digits, Digits) {
    let length = cmp::max(first.len(), second.len()) + extra;
    (length, first.pad_to(length), second.pad_to(length))
}

impl PartialEq for Digits {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for Digits {}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        let first = self.significant();
        let second = other.significant();
        first
            .len()
            .cmp(&second.len())
            .then_with(|| first.iter().rev().cmp(second.iter().rev()))
    }
}

impl FromStr for Digits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, Base::DECIMAL)
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for digit in self.significant().iter().rev() {
            write!(f, "{}", digit)?;
        }

        Ok(())
    }
}
