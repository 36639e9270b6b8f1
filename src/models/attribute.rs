//! `key=value` attribute parsing for role, group and user commands.

use std::collections::BTreeMap;

use crate::error::ValidationError;

/// Parse a single `key=value` pair.
///
/// The input is split at the first `=`, so values may themselves contain
/// `=`. Both sides are trimmed.
///
/// # Errors
///
/// Returns `ValidationError::InvalidAttribute` when the input has no `=`.
pub fn parse_attribute(input: &str) -> Result<(String, String), ValidationError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ValidationError::InvalidAttribute(input.to_string()))?;

    Ok((key.trim().to_string(), value.trim().to_string()))
}

/// Parse repeated `--attribute` flags into a map. Later keys win.
pub fn parse_attributes<I, S>(inputs: I) -> Result<BTreeMap<String, String>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|input| parse_attribute(input.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attribute() {
        let (key, value) = parse_attribute("department=engineering").unwrap();
        assert_eq!(key, "department");
        assert_eq!(value, "engineering");
    }

    #[test]
    fn test_parse_attribute_trims_and_splits_once() {
        let (key, value) = parse_attribute(" filter = a=b ").unwrap();
        assert_eq!(key, "filter");
        assert_eq!(value, "a=b");
    }

    #[test]
    fn test_parse_attribute_empty_value() {
        let (key, value) = parse_attribute("key=").unwrap();
        assert_eq!(key, "key");
        assert_eq!(value, "");
    }

    #[test]
    fn test_parse_attribute_invalid() {
        let err = parse_attribute("invalid_format").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidAttribute("invalid_format".to_string())
        );
        assert_eq!(err.to_string(), "Invalid attribute format: invalid_format");
    }

    #[test]
    fn test_parse_attributes() {
        let attributes = parse_attributes(["a=1", "b=2", "a=3"]).unwrap();
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes["a"], "3");
        assert_eq!(attributes["b"], "2");
    }

    #[test]
    fn test_parse_attributes_stops_at_first_error() {
        assert!(parse_attributes(["a=1", "broken"]).is_err());
        assert!(parse_attributes(Vec::<String>::new()).unwrap().is_empty());
    }
}
