//! Postcode normalization.

use std::fmt;

/// Error returned when the input contains nothing but whitespace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no postcode entered")]
pub struct EmptyPostcode;

/// A postcode with all whitespace removed.
///
/// No further validation is performed; the geocoder decides whether the
/// postcode exists.
///
/// # Examples
///
/// ```
/// use stop_finder::domain::Postcode;
///
/// let postcode = Postcode::normalize(" SW1 A1AA ").unwrap();
/// assert_eq!(postcode.as_str(), "SW1A1AA");
///
/// assert!(Postcode::normalize(" \t ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Postcode(String);

impl Postcode {
    /// Strip every whitespace character (leading, trailing and internal).
    pub fn normalize(input: &str) -> Result<Self, EmptyPostcode> {
        let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        if stripped.is_empty() {
            return Err(EmptyPostcode);
        }
        Ok(Postcode(stripped))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
