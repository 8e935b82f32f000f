//! SOL <-> lamport conversion without going through floating point.

use crate::error::CliError;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
const DECIMALS: usize = 9;

/// Parse a decimal SOL amount such as `1`, `0.25` or `.5` into lamports.
pub fn sol_to_lamports(input: &str) -> Result<u64, CliError> {
    let invalid = |reason| CliError::InvalidAmount {
        input: input.to_string(),
        reason,
    };

    let trimmed = input.trim();
    let (whole, frac) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (trimmed, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid("empty amount"));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected a decimal number"));
    }
    if frac.len() > DECIMALS {
        return Err(invalid("more than 9 decimal places"));
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid("amount too large"))?
    };
    let frac: u64 = if frac.is_empty() {
        0
    } else {
        format!("{:0<width$}", frac, width = DECIMALS)
            .parse()
            .map_err(|_| invalid("expected a decimal number"))?
    };

    whole
        .checked_mul(LAMPORTS_PER_SOL)
        .and_then(|lamports| lamports.checked_add(frac))
        .ok_or_else(|| invalid("amount too large"))
}

/// Render lamports as SOL with trailing zeros removed.
pub fn lamports_to_sol(lamports: u64) -> String {
    let whole = lamports / LAMPORTS_PER_SOL;
    let frac = lamports % LAMPORTS_PER_SOL;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:0>width$}", frac, width = DECIMALS);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_sol() {
        assert_eq!(sol_to_lamports("1").unwrap(), LAMPORTS_PER_SOL);
        assert_eq!(sol_to_lamports("1.5").unwrap(), 1_500_000_000);
        assert_eq!(sol_to_lamports(".5").unwrap(), 500_000_000);
        assert_eq!(sol_to_lamports("2.").unwrap(), 2 * LAMPORTS_PER_SOL);
        assert_eq!(sol_to_lamports("0.000000001").unwrap(), 1);
        assert_eq!(sol_to_lamports(" 0.1 ").unwrap(), 100_000_000);
        assert_eq!(sol_to_lamports("0").unwrap(), 0);
    }

    #[test]
    fn rejects_malformed_amounts() {
        for input in ["", ".", "abc", "-1", "1.2.3", "1e9", "0.0000000001", "+1"] {
            assert!(
                matches!(sol_to_lamports(input), Err(CliError::InvalidAmount { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_amounts_beyond_u64() {
        assert!(sol_to_lamports("18446744074").is_err());
        assert_eq!(
            sol_to_lamports("18446744073.709551615").unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn formats_lamports() {
        assert_eq!(lamports_to_sol(0), "0");
        assert_eq!(lamports_to_sol(LAMPORTS_PER_SOL), "1");
        assert_eq!(lamports_to_sol(1_500_000_000), "1.5");
        assert_eq!(lamports_to_sol(1), "0.000000001");
        assert_eq!(lamports_to_sol(60), "0.00000006");
    }
}
