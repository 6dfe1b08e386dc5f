//! Numeric identifier handling (CNPJ, CPF)

use crate::error::{Result, SourceError};

/// Keep only the ASCII digits of `input`
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Strip punctuation and require exactly `len` digits
///
/// `label` names the identifier in the validation message, e.g.
/// `invalid CNPJ: must have 14 digits, got 4`.
pub fn require_digits(input: &str, len: usize, label: &str) -> Result<String> {
    let digits = digits_only(input);

    if digits.len() != len {
        return Err(SourceError::validation(format!(
            "invalid {label}: must have {len} digits, got {}",
            digits.len()
        )));
    }

    Ok(digits)
}
