//! Render options and widget-argument serialization.

use serde::Serialize;
use serde_json::{Map, Value};

/// Default HTTP verb for the update request.
pub const DEFAULT_METHOD: &str = "PUT";
/// Default activation event bound by the trigger variant.
pub const DEFAULT_EVENT: &str = "edit-click";
/// Default label for the trigger element.
pub const DEFAULT_EDIT_STRING: &str = "Edit";

/// Options accepted by the render helpers.
///
/// Recognized options are typed fields; anything else goes into the
/// ordered pass-through list and is forwarded verbatim to the client
/// widget payload. Unset fields fall back to the generator defaults:
/// `method` [`DEFAULT_METHOD`], and for the trigger variant `event`
/// [`DEFAULT_EVENT`] and `edit_string` [`DEFAULT_EDIT_STRING`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditableOptions {
    /// HTTP verb for the update request.
    pub method: Option<String>,
    /// Override for the computed field identifier.
    pub name: Option<String>,
    /// Destination URL for the update request. Defaults to the record's
    /// canonical URL. Never forwarded to the widget payload.
    pub update_url: Option<String>,
    /// DOM event that activates editing.
    pub event: Option<String>,
    /// Label for the trigger element.
    pub edit_string: Option<String>,
    /// Unrecognized options, forwarded verbatim in insertion order.
    pub extra: Vec<(String, Value)>,
}

impl EditableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP verb for the update request.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Override the computed field identifier.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the destination URL for the update request.
    #[must_use]
    pub fn with_update_url(mut self, update_url: impl Into<String>) -> Self {
        self.update_url = Some(update_url.into());
        self
    }

    /// Set the DOM event that activates editing.
    #[must_use]
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Set the trigger element label.
    #[must_use]
    pub fn with_edit_string(mut self, edit_string: impl Into<String>) -> Self {
        self.edit_string = Some(edit_string.into());
        self
    }

    /// Forward an unrecognized option to the widget payload.
    ///
    /// Recognized options must use their typed setters; keys added here
    /// are serialized as-is after them.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }
}

/// The effective widget-activation arguments: generator defaults merged
/// with caller options (caller wins), `update_url` excluded.
#[derive(Debug, Serialize)]
pub struct ActivationArgs<'a> {
    pub method: &'a str,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_string: Option<&'a str>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<'a> ActivationArgs<'a> {
    /// Merge generator defaults with caller options under the effective
    /// field identifier.
    pub fn merge(options: &'a EditableOptions, name: &'a str) -> Self {
        Self {
            method: options.method.as_deref().unwrap_or(DEFAULT_METHOD),
            name,
            event: options.event.as_deref(),
            edit_string: options.edit_string.as_deref(),
            extra: options.extra.iter().cloned().collect(),
        }
    }
}
