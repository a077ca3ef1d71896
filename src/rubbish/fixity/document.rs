use super::field::Fields;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One keyed JSON body plus the fields it declares for indexing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPart {
    pub json: Value,
    #[serde(default)]
    pub fields: Fields,
}

/// A stored document: any number of keyed JSON bodies.
///
/// Keys let several independent writers share one version without their
/// bodies colliding. The index sees the union of every part's declared
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    parts: BTreeMap<String, DocumentPart>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize `value` under `key`, declaring `fields` for the index.
    pub fn marshal_with_fields<T: Serialize>(
        &mut self,
        key: &str,
        value: &T,
        fields: Fields,
    ) -> serde_json::Result<()> {
        let json = serde_json::to_value(value)?;
        self.parts
            .insert(key.to_string(), DocumentPart { json, fields });
        Ok(())
    }

    pub fn unmarshal<T: DeserializeOwned>(&self, key: &str) -> serde_json::Result<T> {
        let part = self.parts.get(key).ok_or_else(|| {
            <serde_json::Error as serde::de::Error>::custom(format!(
                "document has no body under key {:?}",
                key
            ))
        })?;
        T::deserialize(&part.json)
    }

    pub fn part(&self, key: &str) -> Option<&DocumentPart> {
        self.parts.get(key)
    }

    pub fn parts(&self) -> impl Iterator<Item = (&str, &DocumentPart)> {
        self.parts.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixity::field::Field;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Thing {
        label: String,
    }

    #[test]
    fn marshal_then_unmarshal_same_key() {
        let mut fields = Fields::new();
        fields.append(Field::full_text("label"));

        let mut doc = Document::new();
        doc.marshal_with_fields("thing", &Thing { label: "lamp".into() }, fields)
            .unwrap();

        let back: Thing = doc.unmarshal("thing").unwrap();
        assert_eq!(back.label, "lamp");
        assert!(doc.part("thing").unwrap().fields.contains("label"));
    }

    #[test]
    fn unmarshal_missing_key_is_an_error() {
        let doc = Document::new();
        let err = doc.unmarshal::<Thing>("thing").unwrap_err();
        assert!(err.to_string().contains("thing"));
    }

    #[test]
    fn body_of_wrong_shape_fails_to_unmarshal() {
        let mut doc = Document::new();
        doc.marshal_with_fields("thing", &vec![1, 2, 3], Fields::new())
            .unwrap();
        assert!(doc.unmarshal::<Thing>("thing").is_err());
    }
}
