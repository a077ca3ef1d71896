use serde::{Deserialize, Serialize};

/// How the index should treat a declared field.
///
/// Every declared field can be matched exactly. Full-text fields are also
/// tokenised for `Fts` constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptions {
    #[serde(default)]
    pub full_text_search: bool,
}

impl FieldOptions {
    pub fn full_text(mut self) -> Self {
        self.full_text_search = true;
        self
    }
}

/// A document field exposed to the query engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub field: String,
    #[serde(default)]
    pub options: FieldOptions,
}

impl Field {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            options: FieldOptions::default(),
        }
    }

    pub fn full_text(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            options: FieldOptions::default().full_text(),
        }
    }
}

/// Ordered list of field declarations, built up one `append` at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(Vec<Field>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, field: Field) {
        self.0.push(field);
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.0.iter().find(|f| f.field == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|f| f.field.as_str()).collect()
    }

}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_declaration_order() {
        let mut fields = Fields::new();
        fields.append(Field::full_text("name"));
        fields.append(Field::new("tags"));

        assert_eq!(fields.names(), vec!["name", "tags"]);
        assert!(fields.get("name").unwrap().options.full_text_search);
        assert!(!fields.get("tags").unwrap().options.full_text_search);
        assert!(!fields.contains("description"));
    }
}
