use crate::normalize::normalize;

/// Insertion-ordered alias table mapping normalized team aliases to the one
/// official team name. Built once at startup from the profiles file and never
/// mutated afterwards; callers share it by reference.
///
/// Lookup is a substring test against the normalized input, so a casual
/// mention like "anyone see tigers last night" resolves to "Tigers FC".
/// When several aliases match, the first inserted one wins.
#[derive(Debug, Clone, Default)]
pub struct TeamAliasMap {
    entries: Vec<(String, String)>,
}

impl TeamAliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, alias: &str, official_name: &str) {
        let key = normalize(alias);
        if key.is_empty() {
            return;
        }
        self.entries.push((key, official_name.to_string()));
    }

    pub fn resolve(&self, text: &str) -> Option<&str> {
        let haystack = normalize(text);
        self.entries
            .iter()
            .find(|(alias, _)| haystack.contains(alias.as_str()))
            .map(|(_, official)| official.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TeamAliasMap {
        let mut map = TeamAliasMap::new();
        map.insert("Tigers FC", "Tigers FC");
        map.insert("tigers", "Tigers FC");
        map.insert("Real Sociedont", "Real Sociedont");
        map.insert("sociedont", "Real Sociedont");
        map
    }

    #[test]
    fn resolves_official_name_and_aliases_in_free_text() {
        let map = sample();
        assert_eq!(map.resolve("Tigers FC"), Some("Tigers FC"));
        assert_eq!(
            map.resolve("anyone see tigers last night??"),
            Some("Tigers FC")
        );
        assert_eq!(map.resolve("how about Sociedont!"), Some("Real Sociedont"));
    }

    #[test]
    fn first_inserted_alias_wins() {
        let mut map = TeamAliasMap::new();
        map.insert("united", "United A");
        map.insert("united", "United B");
        assert_eq!(map.resolve("united tonight"), Some("United A"));
    }

    #[test]
    fn unknown_text_is_none() {
        assert_eq!(sample().resolve("who dis"), None);
    }
}
