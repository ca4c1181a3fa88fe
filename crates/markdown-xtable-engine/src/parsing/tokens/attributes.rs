/// Reserved key collecting attributes given without `=value`.
pub const FLAGS_KEY: &str = "__flags";

/// Multi-valued, insertion-ordered attribute mapping.
///
/// Keys are unique; each key holds its values in the order they were added
/// (e.g. several classes). Bare flags are collected under [`FLAGS_KEY`] until
/// [`Attributes::materialize`] turns them into `name="true"` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, Vec<String>)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// The first value stored under `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.first()).map(String::as_str)
    }

    /// Adds `value` after any existing values of `key`.
    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key.to_string(), vec![value])),
        }
    }

    /// Replaces all values of `key` with `value`, keeping its position.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => *values = vec![value],
            None => self.entries.push((key.to_string(), vec![value])),
        }
    }

    pub fn push_flag(&mut self, name: impl Into<String>) {
        self.append(FLAGS_KEY, name);
    }

    pub fn flags(&self) -> &[String] {
        self.get(FLAGS_KEY).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Rendered form: regular keys carry their values joined by a space,
    /// each flag becomes `name="true"`. Order of first appearance is kept,
    /// with flags placed where the flag key first appeared.
    #[must_use]
    pub fn materialize(&self) -> Attributes {
        let mut out = Attributes::new();
        for (key, values) in &self.entries {
            if key == FLAGS_KEY {
                for flag in values {
                    out.set(flag, "true");
                }
            } else {
                out.set(key, values.join(" "));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn append_keeps_insertion_order() {
        let mut attrs = Attributes::new();
        attrs.append("class", "a");
        attrs.append("id", "x");
        attrs.append("class", "b");

        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["class", "id"]);
        assert_eq!(attrs.get("class"), Some(&["a".to_string(), "b".to_string()][..]));
    }

    #[test]
    fn set_replaces_values_in_place() {
        let mut attrs = Attributes::new();
        attrs.set("colspan", "2");
        attrs.append("class", "x");
        attrs.set("colspan", "3");
        assert_eq!(attrs.first("colspan"), Some("3"));
        assert_eq!(attrs.iter().next().map(|(k, _)| k), Some("colspan"));
    }

    #[test]
    fn materialize_joins_values_and_expands_flags() {
        let mut attrs = Attributes::new();
        attrs.append("class", "wide");
        attrs.push_flag("sortable");
        attrs.append("class", "striped");
        attrs.push_flag("compact");

        let out = attrs.materialize();
        let pairs: Vec<_> = out
            .iter()
            .map(|(k, v)| (k.to_string(), v.join("|")))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("class".to_string(), "wide striped".to_string()),
                ("sortable".to_string(), "true".to_string()),
                ("compact".to_string(), "true".to_string()),
            ]
        );
    }
}
