//! Static HTML output for rendered forms

use crate::render::{ColumnSpan, ControlShape, RenderedControl, RenderedForm};

/// Options for HTML generation
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Title for the HTML document
    pub title: String,
    /// Prompt the form was generated from, shown above the form
    pub prompt: Option<String>,
    /// Whether to include the small default stylesheet
    pub include_styles: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "HappyForm.ai".to_string(),
            prompt: None,
            include_styles: true,
        }
    }
}

impl HtmlOptions {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }
}

/// Complete HTML document wrapping the form area
pub fn document(form: &RenderedForm, options: &HtmlOptions) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("  <title>{}</title>\n", escape_html(&options.title)));
    if options.include_styles {
        html.push_str(STYLES);
    }
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&options.title)));
    if let Some(prompt) = &options.prompt {
        html.push_str(&format!(
            "<p class=\"hf-prompt\">{}</p>\n",
            escape_html(prompt)
        ));
    }
    html.push_str(&fragment(form));
    html.push_str("</body>\n</html>\n");
    html
}

/// The form area alone: either the placeholder paragraph or the `<form>` grid
pub fn fragment(form: &RenderedForm) -> String {
    match form {
        RenderedForm::Placeholder(message) => {
            format!("<p class=\"hf-empty\">{}</p>\n", escape_html(message))
        }
        RenderedForm::Grid(controls) => {
            let mut html = String::from("<form class=\"hf-grid\">\n");
            for control in controls {
                html.push_str(&control_html(control));
            }
            html.push_str("</form>\n");
            html
        }
    }
}

fn control_html(control: &RenderedControl) -> String {
    let id = escape_html(&control.id);
    let label = escape_html(&control.label);
    let required = if control.required { " required" } else { "" };
    let cell_class = match control.span {
        ColumnSpan::Single => "hf-cell",
        ColumnSpan::Full => "hf-cell hf-full",
    };

    let mut html = String::new();
    match &control.shape {
        ControlShape::Input {
            input_type,
            placeholder,
            default_value,
        } => {
            html.push_str(&format!("  <div class=\"{cell_class}\">\n"));
            html.push_str(&format!("    <label for=\"{id}\">{label}</label>\n"));
            html.push_str(&format!(
                "    <input id=\"{id}\" type=\"{input_type}\" placeholder=\"{}\" value=\"{}\"{required}>\n",
                escape_html(placeholder),
                escape_html(default_value)
            ));
            html.push_str("  </div>\n");
        }
        ControlShape::TextArea {
            rows,
            placeholder,
            default_value,
        } => {
            html.push_str(&format!("  <div class=\"{cell_class}\">\n"));
            html.push_str(&format!("    <label for=\"{id}\">{label}</label>\n"));
            html.push_str(&format!(
                "    <textarea id=\"{id}\" rows=\"{rows}\" placeholder=\"{}\"{required}>{}</textarea>\n",
                escape_html(placeholder),
                escape_html(default_value)
            ));
            html.push_str("  </div>\n");
        }
        ControlShape::Checkbox { checked } => {
            let checked = if *checked { " checked" } else { "" };
            html.push_str(&format!("  <div class=\"{cell_class} hf-check\">\n"));
            html.push_str(&format!(
                "    <input type=\"checkbox\" id=\"{id}\"{required}{checked}>\n"
            ));
            html.push_str(&format!("    <label for=\"{id}\">{label}</label>\n"));
            html.push_str("  </div>\n");
        }
    }
    html
}

/// Escape HTML special characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const STYLES: &str = r#"  <style>
    body { font-family: system-ui, sans-serif; margin: 2rem; }
    .hf-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
    @media (min-width: 768px) { .hf-grid { grid-template-columns: 1fr 1fr; } .hf-full { grid-column: span 2; } }
    .hf-cell label { display: block; margin-bottom: 0.5rem; font-weight: 600; }
    .hf-cell input, .hf-cell textarea { width: 100%; padding: 0.75rem; box-sizing: border-box; }
    .hf-check { display: flex; align-items: center; gap: 0.75rem; }
    .hf-check input { width: auto; }
    .hf-check label { margin: 0; font-weight: normal; }
    .hf-empty { color: #6b7280; text-align: center; }
  </style>
"#;
