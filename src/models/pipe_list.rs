use serde::{Deserialize, Deserializer};
use std::ops::Deref;

/// List-valued catalog field encoded as a pipe-wrapped scalar, e.g.
/// `|Joss Whedon|Marti Noxon|`.
///
/// Decoding strips exactly one leading and one trailing `|` (only the
/// outermost wrapping pair, never inner runs) and splits on `|`. There is no
/// failure mode: an empty or `|`-only scalar decodes to a single empty
/// string, exactly as the catalog serves it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipeList(pub Vec<String>);

impl PipeList {
    #[must_use]
    pub fn decode(raw: &str) -> Self {
        let inner = raw.strip_prefix('|').unwrap_or(raw);
        let inner = inner.strip_suffix('|').unwrap_or(inner);
        Self(inner.split('|').map(str::to_owned).collect())
    }

    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl Deref for PipeList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PipeList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::decode(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wrapped_list() {
        let list = PipeList::decode("|Joss Whedon|Marti Noxon|");
        assert_eq!(list.0, vec!["Joss Whedon", "Marti Noxon"]);
    }

    #[test]
    fn test_decode_unwrapped_scalar() {
        let list = PipeList::decode("Drama");
        assert_eq!(list.0, vec!["Drama"]);
    }

    #[test]
    fn test_empty_input_is_one_empty_element() {
        assert_eq!(PipeList::decode("").0, vec![""]);
    }

    #[test]
    fn test_delimiter_only_input_is_one_empty_element() {
        assert_eq!(PipeList::decode("|").0, vec![""]);
    }

    #[test]
    fn test_only_outermost_pair_is_stripped() {
        let list = PipeList::decode("||x||");
        assert_eq!(list.0, vec!["", "x", ""]);
    }
}
