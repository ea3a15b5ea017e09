use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Number of trailing characters left readable when a value is masked.
const VISIBLE_SUFFIX: usize = 4;

/// A wrapper for sensitive data (card numbers, mostly) that masks its value in
/// Debug and Display output but serializes the real value.
///
/// Everything except the last four characters is replaced with `*`, so
/// `tracing::info!("{:?}", customer)` never leaks a full card number while
/// support staff can still tell two cards apart.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T: fmt::Display> Masked<T> {
    /// Masked rendering of the wrapped value.
    pub fn redacted(&self) -> String {
        let raw = self.0.to_string();
        let total = raw.chars().count();
        let hidden = total.saturating_sub(VISIBLE_SUFFIX);

        raw.chars()
            .enumerate()
            .map(|(i, c)| if i < hidden { '*' } else { c })
            .collect()
    }
}

impl<T: fmt::Display> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Masked({})", self.redacted())
    }
}

impl<T: fmt::Display> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Storage and API payloads need the real value; masking only guards log output.
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn expose(&self) -> &T {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number_keeps_last_four() {
        let card = Masked("4111111111111111".to_string());
        assert_eq!(card.to_string(), "************1111");
        assert_eq!(format!("{:?}", card), "Masked(************1111)");
    }

    #[test]
    fn test_short_values_are_not_padded() {
        assert_eq!(Masked("123").to_string(), "123");
        assert_eq!(Masked("").to_string(), "");
    }

    #[test]
    fn test_serializes_real_value() {
        let card = Masked("4111111111111111".to_string());
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"4111111111111111\"");

        let back: Masked<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.expose(), "4111111111111111");
    }
}
