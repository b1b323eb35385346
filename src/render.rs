//! The render helpers: editable field, conditional wrapper, and
//! trigger-wrapped variant.

use thiserror::Error;
use tracing::debug;

use crate::escape;
use crate::options::{ActivationArgs, DEFAULT_EDIT_STRING, DEFAULT_EVENT, EditableOptions};
use crate::record::{Editable, field_name, trigger_name};

/// Errors surfaced by the render helpers.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The record does not expose the requested property.
    #[error("unknown property `{property}` on {type_label}")]
    UnknownProperty {
        type_label: String,
        property: String,
    },
    /// Widget-argument serialization failed.
    #[error("failed to serialize widget arguments")]
    Serialize(#[from] serde_json::Error),
}

/// Render an editable span for the given property of the given record.
///
/// The span carries the current value as visible text and
/// `{data-id, data-name}` as addressable attributes; the activation
/// script that follows binds the client-side `editable` widget to it once
/// the document is ready. The widget's `data` callback decodes the entity
/// set the value was escaped with, so the edit control opens on the
/// original text.
///
/// # Options
///
/// - `method`: HTTP verb for the update request, `"PUT"` by default.
/// - `name`: override for the computed field identifier, applied to the
///   `data-name` attribute, the script selector, and the posted field
///   name alike.
/// - `update_url`: URL the widget submits to. Defaults to the record's
///   canonical URL.
///
/// Pass-through arguments are forwarded verbatim in the widget payload.
///
/// # Errors
///
/// [`RenderError::UnknownProperty`] when the record does not expose
/// `property`; [`RenderError::Serialize`] when the widget arguments fail
/// to serialize.
pub fn editable_field(
    record: &impl Editable,
    property: &str,
    options: EditableOptions,
) -> Result<String, RenderError> {
    let value = read_property(record, property)?;
    let name = options
        .name
        .clone()
        .unwrap_or_else(|| field_name(record, property));
    let update_url = options
        .update_url
        .clone()
        .unwrap_or_else(|| record.canonical_url());
    let args = ActivationArgs::merge(&options, &name);
    let args_json = escape::json_for_script(&serde_json::to_string(&args)?);
    let id = record.record_id();

    debug!(name = %name, url = %update_url, "rendering editable field");

    Ok(format!(
        r#"<span class="editable" data-id="{id_attr}" data-name="{name_attr}">{text}</span>
<script type="text/javascript">
  (function( $ ){{
    $(function(){{
      var args = {{data: function(value, settings) {{
        // Unescape HTML
        return value.replace(/&(amp|gt|lt|quot);/gi, function(match, entity) {{
          return {{amp: '&', gt: '>', lt: '<', quot: '"'}}[entity.toLowerCase()];
        }});
      }}}};
      $.extend(args, {args_json});
      $(".editable[data-id='{id_js}'][data-name='{name_js}']").editable("{url_js}", args);
    }});
  }})( jQuery );
</script>
"#,
        id_attr = escape::html_attr(&id),
        name_attr = escape::html_attr(&name),
        text = escape::html_text(&value),
        id_js = escape::js_string(&id),
        name_js = escape::js_string(&name),
        url_js = escape::js_string(&update_url),
    ))
}

/// If `condition` holds, render an editable field exactly as
/// [`editable_field`] would. Otherwise return the escaped plain value of
/// the property, with no markup.
///
/// # Errors
///
/// Same as [`editable_field`].
pub fn editable_field_if(
    condition: bool,
    record: &impl Editable,
    property: &str,
    options: EditableOptions,
) -> Result<String, RenderError> {
    if condition {
        editable_field(record, property, options)
    } else {
        Ok(escape::html_text(&read_property(record, property)?))
    }
}

/// Render an editable field plus a separate trigger element (stylable
/// into a button) whose click puts the field into edit mode.
///
/// Merges `{event: "edit-click", edit_string: "Edit"}` into the options
/// (caller values win) and forwards to [`editable_field`], then appends
/// the trigger span and a script that re-dispatches the configured event
/// onto the editable element.
///
/// Repeated renders of the same record/property on one page produce
/// duplicate trigger identifiers; keeping them unique is the caller's
/// responsibility.
///
/// # Errors
///
/// Same as [`editable_field`].
pub fn editable_with_trigger(
    record: &impl Editable,
    property: &str,
    mut options: EditableOptions,
) -> Result<String, RenderError> {
    let event = options
        .event
        .get_or_insert_with(|| DEFAULT_EVENT.to_string())
        .clone();
    let edit_string = options
        .edit_string
        .get_or_insert_with(|| DEFAULT_EDIT_STRING.to_string())
        .clone();
    let name = options
        .name
        .clone()
        .unwrap_or_else(|| field_name(record, property));
    let trigger = trigger_name(&name);
    let id = record.record_id();

    debug!(trigger = %trigger, event = %event, "rendering edit trigger");

    let field = editable_field(record, property, options)?;
    Ok(format!(
        r#"{field}<span class="edit_trigger" id="{trigger_attr}">{label}</span>
<script type="text/javascript">
  /* Dispatch the configured edit event on the bound widget instance. */
  $(".edit_trigger[id='{trigger_js}']").bind("click", function() {{
      $(".editable[data-id='{id_js}'][data-name='{name_js}']").trigger("{event_js}");
  }});
</script>
"#,
        trigger_attr = escape::html_attr(&trigger),
        label = escape::html_text(&edit_string),
        trigger_js = escape::js_string(&trigger),
        id_js = escape::js_string(&id),
        name_js = escape::js_string(&name),
        event_js = escape::js_string(&event),
    ))
}

fn read_property(record: &impl Editable, property: &str) -> Result<String, RenderError> {
    record
        .read(property)
        .ok_or_else(|| RenderError::UnknownProperty {
            type_label: record.type_label().to_string(),
            property: property.to_string(),
        })
}
