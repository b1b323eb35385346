//! The record capability trait and field identifiers.

use convert_case::{Case, Casing};

/// Capability contract for values the render helpers accept.
///
/// This is what a server-side model exposes to the view layer: a stable
/// identifier, a type label used to build form-field names, named
/// property access, and a canonical resource URL used as the default
/// update target when no `update_url` option is supplied.
pub trait Editable {
    /// Stable identifier, rendered into the `data-id` attribute.
    fn record_id(&self) -> String;

    /// Type label, e.g. `"Article"` or `"BlogPost"`. Snake-cased into
    /// the field identifier.
    fn type_label(&self) -> &str;

    /// Read a property by name. `None` when the record exposes no such
    /// property.
    fn read(&self, property: &str) -> Option<String>;

    /// Canonical resource URL for this record, the default update target.
    fn canonical_url(&self) -> String;
}

/// Compute the form-field identifier for a record property:
/// `"{snake_cased type label}[{property}]"`.
///
/// `Article` + `title` gives `article[title]`; `BlogPost` + `body` gives
/// `blog_post[body]`. The identifier doubles as the posted form-field
/// name and the `data-name` DOM lookup key.
pub fn field_name(record: &impl Editable, property: &str) -> String {
    format!("{}[{}]", record.type_label().to_case(Case::Snake), property)
}

/// Identifier of the trigger element paired with a field identifier.
pub fn trigger_name(name: &str) -> String {
    format!("{name}_trigger")
}
