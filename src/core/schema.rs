//! Purpose: Describe the set of JSON keys every record type expects.
//! Exports: `Schema`, `Field`, `FieldKind`, `Record`.
//! Role: Static, compile-time field tables consumed by the strict decoder.
//! Invariants: Field order is declaration order; presence checks follow it.
//! Invariants: Nested kinds point at the nested record's own static schema.
use serde::de::DeserializeOwned;

/// How the strict decoder treats the value stored under a key.
#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    /// Leaf value; only key presence is checked.
    Scalar,
    /// Nested object checked against its own schema (`null` skips the descent).
    Record(&'static Schema),
    /// Array whose object elements are each checked against the schema.
    RecordList(&'static Schema),
}

#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub key: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn scalar(key: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::Scalar,
        }
    }

    pub const fn record(key: &'static str, schema: &'static Schema) -> Self {
        Self {
            key,
            kind: FieldKind::Record(schema),
        }
    }

    pub const fn list(key: &'static str, schema: &'static Schema) -> Self {
        Self {
            key,
            kind: FieldKind::RecordList(schema),
        }
    }
}

#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|field| field.key == key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A type decoded from an upstream JSON object under the strict presence rule.
pub trait Record: DeserializeOwned {
    fn schema() -> &'static Schema;
}

#[cfg(test)]
mod tests {
    use super::{Field, FieldKind, Schema};

    static INNER: Schema = Schema {
        name: "Inner",
        fields: &[Field::scalar("a"), Field::scalar("b")],
    };

    static OUTER: Schema = Schema {
        name: "Outer",
        fields: &[
            Field::scalar("id"),
            Field::record("inner", &INNER),
            Field::list("rows", &INNER),
        ],
    };

    #[test]
    fn keys_follow_declaration_order() {
        let keys: Vec<_> = OUTER.keys().collect();
        assert_eq!(keys, vec!["id", "inner", "rows"]);
        assert_eq!(OUTER.len(), 3);
        assert!(OUTER.contains("inner"));
        assert!(!OUTER.contains("a"));
    }

    #[test]
    fn nested_kinds_reference_inner_schema() {
        match OUTER.fields[1].kind {
            FieldKind::Record(schema) => assert_eq!(schema.name, "Inner"),
            other => panic!("unexpected kind {other:?}"),
        }
        match OUTER.fields[2].kind {
            FieldKind::RecordList(schema) => assert_eq!(schema.len(), 2),
            other => panic!("unexpected kind {other:?}"),
        }
    }
}
