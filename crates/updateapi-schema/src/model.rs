//! Record and enumeration specifications.
//!
//! [`SchemaModel`] is the single source of truth for every type that crosses
//! the wire. The scanners populate it; the generators only read it. Field
//! order inside a record is declaration order and is preserved all the way
//! into generated constructors, so it must never be re-sorted.

use crate::error::SchemaError;
use std::collections::BTreeMap;

/// The primitive value kinds the transport can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Number,
    Boolean,
}

impl ScalarKind {
    /// Human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Number => "number",
            ScalarKind::Boolean => "boolean",
        }
    }
}

/// How a field's value is transported and reconstructed.
///
/// `Record`/`Enum` variants carry the referenced type's name (final path
/// segment only, qualified prefixes are dropped by the scanner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(ScalarKind),
    ScalarArray(ScalarKind),
    Record(String),
    RecordArray(String),
    Enum(String),
    EnumArray(String),
}

/// A single field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Declared (snake_case) field name.
    pub name: String,
    pub kind: FieldKind,
    /// Optional fields may be absent from the wire object entirely.
    pub optional: bool,
}

/// A structured record type (one message payload shape).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSpec {
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldSpec>,
}

/// A closed enumeration. Members are the wire literals, in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSpec {
    pub name: String,
    pub members: Vec<String>,
}

/// All records and enumerations of one generation run.
#[derive(Debug, Default)]
pub struct SchemaModel {
    enums: BTreeMap<String, EnumSpec>,
    records: BTreeMap<String, RecordSpec>,
}

impl SchemaModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an enumeration.
    ///
    /// Re-registering the same name with identical members is accepted; this
    /// is what makes synthesized-enum registration idempotent across repeated
    /// scans. The same name with *different* members is a contract ambiguity
    /// and fails the whole run.
    pub fn insert_enum(&mut self, spec: EnumSpec) -> Result<(), SchemaError> {
        if let Some(existing) = self.enums.get(&spec.name) {
            if existing.members != spec.members {
                return Err(SchemaError::EnumCollision { name: spec.name });
            }
            return Ok(());
        }
        self.enums.insert(spec.name.clone(), spec);
        Ok(())
    }

    /// Register a record. Duplicate record names are fatal.
    pub fn insert_record(&mut self, spec: RecordSpec) -> Result<(), SchemaError> {
        if self.records.contains_key(&spec.name) {
            return Err(SchemaError::DuplicateRecord { name: spec.name });
        }
        self.records.insert(spec.name.clone(), spec);
        Ok(())
    }

    pub fn enums(&self) -> impl Iterator<Item = &EnumSpec> {
        self.enums.values()
    }

    pub fn records(&self) -> impl Iterator<Item = &RecordSpec> {
        self.records.values()
    }

    pub fn record(&self, name: &str) -> Option<&RecordSpec> {
        self.records.get(name)
    }

    pub fn is_enum(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }

    pub fn is_record(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn enum_count(&self) -> usize {
        self.enums.len()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
