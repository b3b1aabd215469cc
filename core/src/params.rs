//! Parsing of raw form values into typed inputs.

use crate::error::TodoError;
use crate::types::TodoId;

/// Parse a todo id, detecting `0x`, `0o`, `0b` and leading-zero octal
/// prefixes. Ids are limited to 32 bits.
pub fn parse_id(value: &str) -> Result<TodoId, TodoError> {
    let invalid = || TodoError::InvalidId(value.to_string());

    let (digits, radix) = match value.get(..2) {
        Some("0x" | "0X") => (&value[2..], 16),
        Some("0o" | "0O") => (&value[2..], 8),
        Some("0b" | "0B") => (&value[2..], 2),
        _ if value.len() > 1 && value.starts_with('0') => (&value[1..], 8),
        _ => (value, 10),
    };
    // from_str_radix accepts a leading '+', form values must not.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }
    u32::from_str_radix(digits, radix)
        .map(TodoId::from)
        .map_err(|_| invalid())
}

/// Parse a boolean flag in any of the usual spellings.
pub fn parse_flag(value: &str) -> Result<bool, TodoError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(TodoError::InvalidFlag(value.to_string())),
    }
}
