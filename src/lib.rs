// Transitive dependency version mismatches we can't control
#![allow(clippy::multiple_crate_versions)]

//! # Editspan
//!
//! Server-side HTML helpers for jQuery edit-in-place widgets.
//!
//! Given a record and a property name, the helpers render a `<span>`
//! showing the property's current value plus an inline activation script
//! that binds a client-side `editable` widget to it. Edited values are
//! posted back under a Rails-style field name such as `article[title]`.
//!
//! ```
//! use editspan::prelude::*;
//!
//! struct Article {
//!     id: u64,
//!     title: String,
//! }
//!
//! impl Editable for Article {
//!     fn record_id(&self) -> String {
//!         self.id.to_string()
//!     }
//!
//!     fn type_label(&self) -> &str {
//!         "Article"
//!     }
//!
//!     fn read(&self, property: &str) -> Option<String> {
//!         match property {
//!             "title" => Some(self.title.clone()),
//!             _ => None,
//!         }
//!     }
//!
//!     fn canonical_url(&self) -> String {
//!         format!("/articles/{}", self.id)
//!     }
//! }
//!
//! let article = Article { id: 42, title: "Hello".to_string() };
//! let html = editable_field(&article, "title", EditableOptions::new())?;
//! assert!(html.contains(r#"data-id="42""#));
//! assert!(html.contains(r#"data-name="article[title]""#));
//! # Ok::<(), RenderError>(())
//! ```
//!
//! Every interpolated value is escaped for its embedding context (element
//! text, attribute, script string literal, embedded JSON), so records with
//! HTML-special identifiers or values render safely.
//!
//! ## Modules
//!
//! - [`escape`]: context-aware escaping for HTML/script interpolation
//! - [`options`]: render options and widget-argument serialization
//! - [`record`]: the [`record::Editable`] capability trait and field identifiers
//! - [`render`]: the helper functions producing markup

pub mod escape;
pub mod options;
pub mod record;
pub mod render;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::options::EditableOptions;
    pub use crate::record::{Editable, field_name, trigger_name};
    pub use crate::render::{
        RenderError, editable_field, editable_field_if, editable_with_trigger,
    };
}
