//! Submission-boundary validation for transaction input.

use anyhow::{Result, bail};
use regex::Regex;

/// Parse a monetary amount. Accepts plain decimals ("1234.56") and the
/// Brazilian form ("1.234,56" / "12,50"), with an optional leading "R$".
/// Sign is carried by the entry type, so negative input is rejected here.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let s = raw.trim();
    let s = s.strip_prefix("R$").unwrap_or(s).trim();
    if s.is_empty() {
        bail!("valor vazio");
    }

    let brl = Regex::new(r"^\d{1,3}(\.\d{3})*(,\d+)?$|^\d+,\d+$")?;
    let normalized = if brl.is_match(s) && s.contains([',', '.']) {
        s.replace('.', "").replace(',', ".")
    } else {
        s.to_string()
    };

    let value: f64 = match normalized.parse() {
        Ok(v) => v,
        Err(_) => bail!("valor inválido: {raw}"),
    };
    if !value.is_finite() || value < 0.0 {
        bail!("valor inválido: {raw}");
    }
    Ok(value)
}

/// Descriptions must be non-empty after trimming.
pub fn validate_description(raw: &str) -> Result<String> {
    let s = raw.trim();
    if s.is_empty() {
        bail!("descrição vazia");
    }
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_decimal() {
        assert_eq!(parse_amount("1234.56").unwrap(), 1234.56);
        assert_eq!(parse_amount("1234").unwrap(), 1234.0);
        assert_eq!(parse_amount("0").unwrap(), 0.0);
    }

    #[test]
    fn test_brazilian_form() {
        assert_eq!(parse_amount("1.234,56").unwrap(), 1234.56);
        assert_eq!(parse_amount("12,50").unwrap(), 12.5);
        assert_eq!(parse_amount("1.234.567,89").unwrap(), 1_234_567.89);
    }

    #[test]
    fn test_currency_prefix_is_stripped() {
        assert_eq!(parse_amount("R$ 1.234,56").unwrap(), 1234.56);
        assert_eq!(parse_amount("R$1200").unwrap(), 1200.0);
    }

    #[test]
    fn test_rejects_garbage_and_negatives() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("-10").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_description_must_be_non_empty() {
        assert!(validate_description("").is_err());
        assert!(validate_description("   ").is_err());
        assert_eq!(validate_description("  Aluguel ").unwrap(), "Aluguel");
    }
}
