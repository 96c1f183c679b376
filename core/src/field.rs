//! Field descriptors returned by the generation service

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Label shown when the service omits one
pub const DEFAULT_LABEL: &str = "Label";
/// Placeholder shown when the service omits one
pub const DEFAULT_PLACEHOLDER: &str = "Enter here";

// ============================================================================
// Field Kind
// ============================================================================

/// Closed set of control kinds the renderer knows how to draw
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Textarea,
    Checkbox,
}

impl FieldKind {
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Text,
        FieldKind::Email,
        FieldKind::Tel,
        FieldKind::Date,
        FieldKind::Textarea,
        FieldKind::Checkbox,
    ];

    /// Match a wire tag. Tags are case-sensitive, like the HTML input types they name.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "text" => Some(FieldKind::Text),
            "email" => Some(FieldKind::Email),
            "tel" => Some(FieldKind::Tel),
            "date" => Some(FieldKind::Date),
            "textarea" => Some(FieldKind::Textarea),
            "checkbox" => Some(FieldKind::Checkbox),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Date => "date",
            FieldKind::Textarea => "textarea",
            FieldKind::Checkbox => "checkbox",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Field Descriptor
// ============================================================================

/// One renderable form control as described by the generation service.
///
/// The wire `default` value is split in two: text-like controls read
/// `default_text`, checkboxes read `default_checked`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub kind: FieldKind,
    pub label: String,
    pub placeholder: String,
    pub required: bool,
    pub default_text: String,
    pub default_checked: bool,
}

impl FieldDescriptor {
    /// Descriptor with every optional attribute at its fallback value
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            label: DEFAULT_LABEL.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            required: false,
            default_text: String::new(),
            default_checked: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_default_text(mut self, value: impl Into<String>) -> Self {
        self.default_text = value.into();
        self
    }

    pub fn with_default_checked(mut self, checked: bool) -> Self {
        self.default_checked = checked;
        self
    }
}

// ============================================================================
// Field Entry
// ============================================================================

/// A single slot of a [`FormFieldList`].
///
/// Entries the renderer cannot draw are kept as `Unrecognized` so that the
/// positional index of every other entry stays stable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEntry {
    Field(FieldDescriptor),
    Unrecognized {
        /// The `field_type` tag, when the entry carried a string one
        tag: Option<String>,
    },
}

impl FieldEntry {
    /// Decode one element of the `form` array. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return FieldEntry::Unrecognized { tag: None };
        };

        let tag = obj.get("field_type").and_then(Value::as_str);
        let Some(kind) = tag.and_then(FieldKind::from_tag) else {
            return FieldEntry::Unrecognized {
                tag: tag.map(String::from),
            };
        };

        let default = obj.get("default").unwrap_or(&Value::Null);

        FieldEntry::Field(FieldDescriptor {
            kind,
            label: display_text(obj.get("label")).unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            placeholder: display_text(obj.get("placeholder"))
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            required: obj.get("required").map(is_truthy).unwrap_or(false),
            default_text: default_text(default),
            default_checked: is_truthy(default),
        })
    }

    pub fn descriptor(&self) -> Option<&FieldDescriptor> {
        match self {
            FieldEntry::Field(descriptor) => Some(descriptor),
            FieldEntry::Unrecognized { .. } => None,
        }
    }
}

impl From<FieldDescriptor> for FieldEntry {
    fn from(descriptor: FieldDescriptor) -> Self {
        FieldEntry::Field(descriptor)
    }
}

impl<'de> Deserialize<'de> for FieldEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(FieldEntry::from_value(&value))
    }
}

// ============================================================================
// Form Field List
// ============================================================================

/// Ordered list of entries making up one generated form
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FormFieldList {
    entries: Vec<FieldEntry>,
}

impl FormFieldList {
    /// Decode the elements of a `form` array
    pub fn from_values(values: &[Value]) -> Self {
        Self {
            entries: values.iter().map(FieldEntry::from_value).collect(),
        }
    }

    /// Number of entries, renderable or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that produce a control
    pub fn renderable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.descriptor().is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }
}

impl FromIterator<FieldEntry> for FormFieldList {
    fn from_iter<I: IntoIterator<Item = FieldEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<FieldDescriptor> for FormFieldList {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        iter.into_iter().map(FieldEntry::Field).collect()
    }
}

// ============================================================================
// JSON coercions
// ============================================================================

/// JSON truthiness: `false`, `null`, `0` and `""` are false, everything else true
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text for label-like attributes; `None` means "use the fallback"
fn display_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        n @ Value::Number(_) if is_truthy(n) => Some(n.to_string()),
        _ => None,
    }
}

fn default_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================
