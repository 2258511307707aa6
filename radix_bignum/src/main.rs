use anyhow::Result;
use radix_bignum::cli::Cli;

fn main() -> Result<()> {
    Cli::execute()
}
