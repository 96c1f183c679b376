//! Mapping from field descriptors to renderable controls
//!
//! Rendering is a pure function of the [`FormFieldList`]: the same list
//! always produces the same controls, and entries with no control kind are
//! dropped without error.

use crate::field::{FieldDescriptor, FieldEntry, FieldKind, FormFieldList};

/// Text shown in place of the form when no fields have been generated
pub const EMPTY_FORM_MESSAGE: &str = "Generated form fields will appear here!";

/// Visible rows of a multi-line control
pub const TEXTAREA_ROWS: u32 = 4;

/// Cells of the two-column grid a control occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnSpan {
    Single,
    Full,
}

/// Shape of the control to draw
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlShape {
    /// Single-line `<input>`; `input_type` is one of text, email, tel, date
    Input {
        input_type: &'static str,
        placeholder: String,
        default_value: String,
    },
    /// Multi-line `<textarea>`
    TextArea {
        rows: u32,
        placeholder: String,
        default_value: String,
    },
    /// Checkbox followed by its label
    Checkbox { checked: bool },
}

/// A control ready to be drawn
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedControl {
    /// DOM id derived from the entry's position in the list
    pub id: String,
    pub label: String,
    pub required: bool,
    pub shape: ControlShape,
    pub span: ColumnSpan,
}

impl RenderedControl {
    fn from_descriptor(index: usize, field: &FieldDescriptor) -> Self {
        let (shape, span) = match field.kind {
            FieldKind::Text | FieldKind::Email | FieldKind::Tel | FieldKind::Date => (
                ControlShape::Input {
                    input_type: field.kind.as_str(),
                    placeholder: field.placeholder.clone(),
                    default_value: field.default_text.clone(),
                },
                ColumnSpan::Single,
            ),
            FieldKind::Textarea => (
                ControlShape::TextArea {
                    rows: TEXTAREA_ROWS,
                    placeholder: field.placeholder.clone(),
                    default_value: field.default_text.clone(),
                },
                ColumnSpan::Full,
            ),
            FieldKind::Checkbox => (
                ControlShape::Checkbox {
                    checked: field.default_checked,
                },
                ColumnSpan::Single,
            ),
        };

        Self {
            id: field_id(index),
            label: field.label.clone(),
            required: field.required,
            shape,
            span,
        }
    }
}

/// What the form area shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedForm {
    /// No fields generated yet; show the message instead of a `<form>`
    Placeholder(&'static str),
    /// Controls laid out in the two-column grid
    Grid(Vec<RenderedControl>),
}

impl RenderedForm {
    pub fn controls(&self) -> &[RenderedControl] {
        match self {
            RenderedForm::Placeholder(_) => &[],
            RenderedForm::Grid(controls) => controls,
        }
    }
}

/// DOM id of the entry at `index`
pub fn field_id(index: usize) -> String {
    format!("field-{}", index)
}

/// Render every drawable entry of the list, in list order
pub fn render(list: &FormFieldList) -> Vec<RenderedControl> {
    list.iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            FieldEntry::Field(field) => Some(RenderedControl::from_descriptor(index, field)),
            FieldEntry::Unrecognized { .. } => None,
        })
        .collect()
}

/// Render the whole form area.
///
/// An empty list yields the placeholder. A non-empty list always yields a
/// grid, even when none of its entries are drawable.
pub fn render_form(list: &FormFieldList) -> RenderedForm {
    if list.is_empty() {
        RenderedForm::Placeholder(EMPTY_FORM_MESSAGE)
    } else {
        RenderedForm::Grid(render(list))
    }
}
