//! Query construction.
//!
//! A [`Query`] is a conjunction of [`Constraint`]s plus `skip`/`limit`
//! paging. Field names refer to fields declared at write time; a constraint
//! on an undeclared field never matches.

use serde::{Deserialize, Serialize};

/// Field name that makes an `Fts` constraint search every full-text field.
pub const ALL_FIELDS: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
    /// The field's value is exactly `value`.
    Eq { field: String, value: String },
    /// Every token of `text` appears in the field (or any full-text field for `*`).
    Fts { field: String, text: String },
    /// The field is a list containing `value`.
    In { field: String, value: String },
}

impl Constraint {
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Constraint::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn fts(field: impl Into<String>, text: impl Into<String>) -> Self {
        Constraint::Fts {
            field: field.into(),
            text: text.into(),
        }
    }

    pub fn in_field(field: impl Into<String>, value: impl Into<String>) -> Self {
        Constraint::In {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Accumulator for building up a conjunction conditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints(Vec<Constraint>);

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fts(&mut self, field: impl Into<String>, text: impl Into<String>) {
        self.0.push(Constraint::fts(field, text));
    }

    pub fn in_field(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.push(Constraint::in_field(field, value));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Constraints {
    type Item = Constraint;
    type IntoIter = std::vec::IntoIter<Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub constraints: Vec<Constraint>,
    pub limit: Option<usize>,
    pub skip: usize,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    pub fn constrain(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn and(mut self, constraints: Constraints) -> Self {
        self.constraints.extend(constraints);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_constraints_and_paging() {
        let mut cs = Constraints::new();
        cs.fts(ALL_FIELDS, "red box");
        cs.in_field("tags", "garage");

        let q = Query::new().and(cs).limit(25).skip(50);
        assert_eq!(q.constraints.len(), 2);
        assert_eq!(q.limit, Some(25));
        assert_eq!(q.skip, 50);
        assert_eq!(q.constraints[1], Constraint::in_field("tags", "garage"));
    }
}
