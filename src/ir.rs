// Strongly-typed signature IR shared by every backend. Mirrors the JSON
// wire shape the problem-generation pipeline emits.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Ty {
    Primitive {
        #[serde(rename = "type")]
        kind: Primitive,
    },
    Array {
        items: Box<Ty>,
    },
    Object {
        properties: IndexMap<String, Ty>, // declaration order is meaningful
    },
    Map {
        #[serde(rename = "keyType")]
        key_type: Box<Ty>,
        #[serde(rename = "valueType")]
        value_type: Box<Ty>,
    },
    Tuple {
        items: Vec<Ty>,
    },
    Union {
        types: Vec<Ty>,
    },
    /// Named-type lookup. Rendered as an opaque name token and never
    /// expanded, so self- and mutually-referential named types need no
    /// cycle detection anywhere downstream.
    Reference {
        name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Int,
    Float,
    String,
    Boolean,
    Null,
}

impl Ty {
    pub fn is_null(&self) -> bool {
        matches!(
            self,
            Ty::Primitive {
                kind: Primitive::Null
            }
        )
    }

    /// Split a union's variants into (non-null arms, saw a null arm).
    /// Both backends use this for the order-independent nullable
    /// detection: `union([T, null])` and `union([null, T])` must come out
    /// the same.
    pub fn split_nullable(types: &[Ty]) -> (Vec<&Ty>, bool) {
        let non_null: Vec<&Ty> = types.iter().filter(|t| !t.is_null()).collect();
        let has_null = non_null.len() != types.len();
        (non_null, has_null)
    }
}
