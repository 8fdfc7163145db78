//! Form domain layer
//!
//! Field definitions, validation rules and the form aggregate. Nothing here
//! depends on rendering.

mod field;
mod form_state;
mod rules;
mod schema;

pub use field::{FieldKind, FormField};
pub use form_state::FormState;
pub use schema::{FormVariant, Section};

#[cfg(test)]
pub use rules::ValidationRule;
#[cfg(test)]
pub use schema::FormSchema;
