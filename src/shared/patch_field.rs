use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep stored value
// - Null: explicit null => clear a nullable column
// - Value(v): replace with v
//
// Use with #[serde(default)] so an omitted field decodes to Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            PatchField::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Collapses the patch into the next value of a nullable column,
    /// `None` meaning "leave untouched".
    pub fn into_nullable(self) -> Option<Option<T>> {
        match self {
            PatchField::Unset => None,
            PatchField::Null => Some(None),
            PatchField::Value(v) => Some(Some(v)),
        }
    }
}

impl<T> From<Option<T>> for PatchField<T> {
    /// `Some` becomes a value, `None` stays unset.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => PatchField::Value(v),
            None => PatchField::Unset,
        }
    }
}
