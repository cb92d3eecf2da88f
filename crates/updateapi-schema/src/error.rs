//! Fatal schema-construction errors.
//!
//! These abort the whole run. Per-item problems (an unsupported field, a bad
//! handler) are [`crate::Diagnostic`]s instead and never abort anything.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// The same enum name was registered twice with different members.
    /// Letting the second declaration win would silently desynchronize the
    /// generated clients, so this is fatal.
    #[error("enum '{name}' declared twice with conflicting members")]
    EnumCollision { name: String },

    /// Two records share one name; the generated output would be ambiguous.
    #[error("record '{name}' declared more than once")]
    DuplicateRecord { name: String },
}
