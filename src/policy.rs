//! Collection Policies
//!
//! Pure, side-effect-free validation rules consulted on every create.
//!
//! A policy is data — lists of required fields, uniqueness rules, and
//! cross-collection relations — not a code path. The store evaluates the
//! lists in a fixed order (required → unique → relations) and stops at the
//! first failure, so adding a record kind means declaring a new policy, not
//! branching inside the resolution engine.

use crate::error::{Result, StrataError};
use crate::model::RecordKind;

/// A field that must be present (non-empty / non-zero) on a candidate
pub struct RequiredField<T> {
    /// Wire name of the field, used in error messages
    pub name: &'static str,

    /// Presence test appropriate to the field's type
    pub present: fn(&T) -> bool,
}

/// A field whose value must be unique within the collection
pub struct UniqueRule<T> {
    /// Wire name of the field
    pub field: &'static str,

    /// Extracts the comparison key (also shown in error messages)
    pub key: fn(&T) -> String,
}

/// A field that must reference an existing record of another kind
///
/// Relations always point at a *different* kind; a self-referential relation
/// would deadlock the store's per-collection locking.
pub struct Relation<T> {
    /// Wire name of the referencing field
    pub field: &'static str,

    /// Kind of the referenced collection
    pub references: RecordKind,

    /// Extracts the referenced id from the candidate
    pub foreign_id: fn(&T) -> u64,
}

impl<T> Relation<T> {
    /// Check the candidate's reference against the referenced collection's ids
    pub fn check(&self, candidate: &T, referenced_ids: &[u64]) -> Result<()> {
        let wanted = (self.foreign_id)(candidate);
        if referenced_ids.contains(&wanted) {
            Ok(())
        } else {
            Err(StrataError::Relationship {
                field: self.field,
                references: self.references,
            })
        }
    }
}

/// Validation rules for one record kind
pub struct Policy<T> {
    pub required: Vec<RequiredField<T>>,
    pub unique: Vec<UniqueRule<T>>,
    pub relations: Vec<Relation<T>>,
}

impl<T> Policy<T> {
    /// Create an empty policy
    pub fn new() -> Self {
        Self {
            required: Vec::new(),
            unique: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// Declare a required field
    pub fn require(mut self, name: &'static str, present: fn(&T) -> bool) -> Self {
        self.required.push(RequiredField { name, present });
        self
    }

    /// Declare a uniqueness rule
    pub fn unique(mut self, field: &'static str, key: fn(&T) -> String) -> Self {
        self.unique.push(UniqueRule { field, key });
        self
    }

    /// Declare a cross-collection relation
    pub fn relation(
        mut self,
        field: &'static str,
        references: RecordKind,
        foreign_id: fn(&T) -> u64,
    ) -> Self {
        self.relations.push(Relation {
            field,
            references,
            foreign_id,
        });
        self
    }

    /// Check required fields in declaration order, stopping at the first miss
    pub fn check_required(&self, candidate: &T) -> Result<()> {
        for rule in &self.required {
            if !(rule.present)(candidate) {
                return Err(StrataError::MissingField { field: rule.name });
            }
        }
        Ok(())
    }

    /// Check uniqueness rules against the existing records
    pub fn check_unique(&self, kind: RecordKind, candidate: &T, existing: &[T]) -> Result<()> {
        for rule in &self.unique {
            let key = (rule.key)(candidate);
            if existing.iter().any(|record| (rule.key)(record) == key) {
                return Err(StrataError::UniqueViolation {
                    kind,
                    field: rule.field,
                    value: key,
                });
            }
        }
        Ok(())
    }
}

impl<T> Default for Policy<T> {
    fn default() -> Self {
        Self::new()
    }
}
