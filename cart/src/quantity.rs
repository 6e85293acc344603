//! Parsing of user-typed quantity text.
//!
//! TRADE-OFFS
//! ==========
//! Parsing is strict: surrounding whitespace is ignored, but anything other
//! than a base-10 integer is rejected rather than truncated. Range checks are
//! left to the cart owner, so `0` and negative values parse successfully.

#[cfg(test)]
#[path = "quantity_test.rs"]
mod quantity_test;

/// Error returned by [`parse_quantity`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityParseError {
    /// The field was empty or whitespace only.
    #[error("quantity is empty")]
    Empty,
    /// The field contained something other than an integer.
    #[error("quantity is not a whole number: {0:?}")]
    NotANumber(String),
}

/// Parse the raw contents of a quantity field.
///
/// # Errors
///
/// Returns [`QuantityParseError::Empty`] for blank input and
/// [`QuantityParseError::NotANumber`] for anything that is not an `i64`.
pub fn parse_quantity(raw: &str) -> Result<i64, QuantityParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QuantityParseError::Empty);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| QuantityParseError::NotANumber(trimmed.to_owned()))
}
