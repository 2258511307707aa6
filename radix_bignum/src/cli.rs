use std::fmt;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{ArgAction, Parser};
use env_logger::Builder;
use log::{debug, info, LevelFilter};

use crate::digits::{Base, Digits};
use crate::division::div_rem;
use crate::error::{self, Error};
use crate::karatsuba::multiply;
use crate::schoolbook::add;

pub const DEFAULT_MAX_DIGITS: usize = 100;

#[derive(Debug, Parser)]
#[command(
    name = "radix-bignum",
    version,
    about = "Sum, product and quotient of two non-negative integers in base 2 to 10",
    long_about = "Sum, product and quotient of two non-negative integers in base 2 to 10.\n\n\
                  When no operands are given, `FIRST SECOND BASE` is read from standard input."
)]
pub struct Cli {
    first: Option<String>,
    second: Option<String>,
    base: Option<String>,
    /// Longest operand accepted, in digits
    #[arg(long, env = "RADIX_BIGNUM_MAX_DIGITS", default_value_t = DEFAULT_MAX_DIGITS)]
    max_digits: usize,
    /// Also print the remainder of the division
    #[arg(long)]
    remainder: bool,
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    pub fn execute() -> Result<()> {
        let cli = Self::parse();
        init_logger(cli.level_filter(), false);

        let input = cli.input()?;
        let operands = Operands::validate(&input, cli.max_digits)?;
        let report = evaluate(operands, cli.remainder);
        println!("{report}");
        report.division?;
        Ok(())
    }

    fn level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn input(&self) -> Result<Input> {
        match (&self.first, &self.second, &self.base) {
            (Some(first), Some(second), Some(base)) => Ok(Input {
                first: first.clone(),
                second: second.clone(),
                base: base.clone(),
            }),
            (None, None, None) => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read standard input")?;
                Ok(Input::from_tokens(&text)?)
            }
            (_, None, _) => Err(Error::MissingInput("second number").into()),
            _ => Err(Error::MissingInput("base").into()),
        }
    }
}

/// Logs to stderr. `RUST_LOG` takes precedence over `level` when set.
pub fn init_logger(level: LevelFilter, is_test: bool) {
    let _ = Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .parse_env("RUST_LOG")
        .is_test(is_test)
        .try_init();
}

/// The three raw tokens of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub first: String,
    pub second: String,
    pub base: String,
}

impl Input {
    pub fn from_tokens(text: &str) -> error::Result<Self> {
        let mut tokens = text.split_whitespace().map(str::to_owned);
        let first = tokens.next().ok_or(Error::MissingInput("first number"))?;
        let second = tokens.next().ok_or(Error::MissingInput("second number"))?;
        let base = tokens.next().ok_or(Error::MissingInput("base"))?;
        Ok(Self {
            first,
            second,
            base,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Operands {
    pub first: Digits,
    pub second: Digits,
    pub base: Base,
}

impl Operands {
    /// Checks the base and operand lengths, then parses both operands.
    pub fn validate(input: &Input, max_digits: usize) -> error::Result<Self> {
        let base = parse_base(&input.base)?;
        for number in [&input.first, &input.second] {
            let len = number.chars().count();
            if len > max_digits {
                return Err(Error::TooManyDigits {
                    len,
                    max: max_digits,
                });
            }
        }

        let first = Digits::parse(&input.first, base)?;
        let second = Digits::parse(&input.second, base)?;
        info!("operands of {} and {} digits in base {base}", first.len(), second.len());
        Ok(Self {
            first,
            second,
            base,
        })
    }
}

fn parse_base(text: &str) -> error::Result<Base> {
    if let Some(ch) = text.chars().find(|ch| !ch.is_ascii_digit()) {
        return Err(Error::InvalidCharacter(ch));
    }

    match text.parse::<u32>() {
        Ok(radix) => Base::new(radix),
        Err(_) if text.is_empty() => Err(Error::MissingInput("base")),
        Err(_) => Err(Error::BaseTooLarge(text.to_owned())),
    }
}

/// Sum and product are always present. A failed division leaves them to be
/// printed on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub sum: Digits,
    pub product: Digits,
    /// The quotient, and the remainder when it was asked for.
    pub division: error::Result<(Digits, Option<Digits>)>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.sum, self.product)?;
        if let Ok((quotient, remainder)) = &self.division {
            write!(f, " {}", quotient)?;
            if let Some(remainder) = remainder {
                write!(f, " {}", remainder)?;
            }
        }

        Ok(())
    }
}

pub fn evaluate(operands: Operands, with_remainder: bool) -> Report {
    let Operands {
        first,
        second,
        base,
    } = operands;

    let sum = add(first.clone(), second.clone(), base).normalized();
    debug!("sum has {} digits", sum.len());
    let product = multiply(first.clone(), second.clone(), base);
    debug!("product has {} digits", product.len());
    let division = div_rem(first, second, base)
        .map(|(quotient, remainder)| (quotient, with_remainder.then_some(remainder)));

    Report {
        sum,
        product,
        division,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(first: &str, second: &str, base: &str) -> Input {
        Input {
            first: first.to_owned(),
            second: second.to_owned(),
            base: base.to_owned(),
        }
    }

    #[test]
    fn test_from_tokens() {
        // Act
        let result = Input::from_tokens("  123\n877   10 \n").unwrap();

        // Assert
        assert_eq!(result, input("123", "877", "10"));
    }

    #[test]
    fn test_from_tokens_missing_base() {
        // Act
        let result = Input::from_tokens("123 877");

        // Assert
        assert_eq!(result, Err(Error::MissingInput("base")));
    }

    #[test]
    fn test_validate_base_out_of_range() {
        assert_eq!(
            Operands::validate(&input("1", "1", "11"), DEFAULT_MAX_DIGITS).unwrap_err(),
            Error::InvalidBase(11)
        );
        assert_eq!(
            Operands::validate(&input("1", "1", "1"), DEFAULT_MAX_DIGITS).unwrap_err(),
            Error::InvalidBase(1)
        );
        assert_eq!(
            Operands::validate(&input("1", "1", "x"), DEFAULT_MAX_DIGITS).unwrap_err(),
            Error::InvalidCharacter('x')
        );
    }

    #[test]
    fn test_validate_too_many_digits() {
        // Arrange
        let long = "1".repeat(101);

        // Act
        let result = Operands::validate(&input("5", &long, "10"), DEFAULT_MAX_DIGITS);

        // Assert
        assert_eq!(
            result.unwrap_err(),
            Error::TooManyDigits { len: 101, max: 100 }
        );
    }

    #[test]
    fn test_validate_hundred_digits() {
        // Arrange
        let long = "9".repeat(100);

        // Act
        let result = Operands::validate(&input(&long, &long, "10"), DEFAULT_MAX_DIGITS);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_digit_out_of_base() {
        // Act
        let result = Operands::validate(&input("102", "1", "2"), DEFAULT_MAX_DIGITS);

        // Assert
        assert_eq!(result.unwrap_err(), Error::InvalidDigit { digit: 2, base: 2 });
    }

    #[test]
    fn test_evaluate() {
        // Arrange
        let operands = Operands::validate(&input("123", "877", "10"), DEFAULT_MAX_DIGITS).unwrap();

        // Act
        let report = evaluate(operands, false);

        // Assert
        assert_eq!(report.to_string(), "1000 107871 0");
    }

    #[test]
    fn test_evaluate_with_remainder() {
        // Arrange
        let operands = Operands::validate(&input("100", "7", "10"), DEFAULT_MAX_DIGITS).unwrap();

        // Act
        let report = evaluate(operands, true);

        // Assert
        assert_eq!(report.to_string(), "107 700 14 2");
    }

    #[test]
    fn test_evaluate_binary() {
        // Arrange
        let operands = Operands::validate(&input("111", "1", "2"), DEFAULT_MAX_DIGITS).unwrap();

        // Act
        let report = evaluate(operands, false);

        // Assert
        assert_eq!(report.to_string(), "1000 111 111");
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        // Arrange
        let operands = Operands::validate(&input("100", "0", "10"), DEFAULT_MAX_DIGITS).unwrap();

        // Act
        let report = evaluate(operands, true);

        // Assert
        assert_eq!(report.sum.to_string(), "100");
        assert_eq!(report.product.to_string(), "0");
        assert_eq!(report.division, Err(Error::DivisionByZero));
        assert_eq!(report.to_string(), "100 0");
    }

    #[test]
    fn test_validate_base_beyond_u32() {
        // Act
        let result = Operands::validate(&input("1", "1", "99999999999"), DEFAULT_MAX_DIGITS);

        // Assert
        let error = result.unwrap_err();
        assert_eq!(error, Error::BaseTooLarge("99999999999".to_owned()));
        assert_eq!(error.to_string(), "base 99999999999 is out of range, expected 2 to 10");
    }

    #[test]
    fn test_parse_arguments() {
        // Act
        let cli = Cli::try_parse_from(["radix-bignum", "-vv", "123", "877", "10"]).unwrap();

        // Assert
        assert_eq!(cli.level_filter(), LevelFilter::Debug);
        assert_eq!(cli.input().unwrap(), input("123", "877", "10"));
    }

    #[test]
    fn test_parse_arguments_missing_base() {
        // Arrange
        let cli = Cli::try_parse_from(["radix-bignum", "123", "877"]).unwrap();

        // Act
        let result = cli.input();

        // Assert
        let error = result.unwrap_err();
        assert_eq!(error.downcast_ref::<Error>(), Some(&Error::MissingInput("base")));
    }

    #[test]
    fn test_max_digits_option() {
        // Arrange
        let cli = Cli::try_parse_from(["radix-bignum", "--max-digits", "3", "1234", "1", "10"]).unwrap();
        init_logger(LevelFilter::Trace, true);

        // Act
        let result = Operands::validate(&cli.input().unwrap(), cli.max_digits);

        // Assert
        assert_eq!(result.unwrap_err(), Error::TooManyDigits { len: 4, max: 3 });
    }
}
