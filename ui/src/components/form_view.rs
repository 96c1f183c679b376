//! Generated form area
//!
//! Draws a [`RenderedForm`] as a responsive two-column grid. Textareas take
//! the full row on wide screens; every other control takes one cell.

use leptos::prelude::*;

use happyform_core::{ColumnSpan, ControlShape, RenderedControl, RenderedForm};

const INPUT_CLASS: &str =
    "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-indigo-500 focus:border-indigo-500";

#[component]
pub fn FormArea(form: RenderedForm) -> impl IntoView {
    match form {
        RenderedForm::Placeholder(message) => view! {
            <p class="text-gray-500 text-center">{message}</p>
        }
        .into_any(),
        RenderedForm::Grid(controls) => view! {
            <form class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {controls
                    .into_iter()
                    .map(|control| view! { <FormControl control=control /> })
                    .collect::<Vec<_>>()}
            </form>
        }
        .into_any(),
    }
}

#[component]
fn FormControl(control: RenderedControl) -> impl IntoView {
    let RenderedControl {
        id,
        label,
        required,
        shape,
        span,
    } = control;

    let cell = match span {
        ColumnSpan::Single => "col-span-1",
        ColumnSpan::Full => "col-span-1 md:col-span-2",
    };

    match shape {
        ControlShape::Input {
            input_type,
            placeholder,
            default_value,
        } => view! {
            <div class=cell>
                <label for=id.clone() class="block text-sm font-medium text-gray-700 mb-1">
                    {label}
                </label>
                <input
                    id=id
                    type=input_type
                    class=INPUT_CLASS
                    placeholder=placeholder
                    value=default_value
                    required=required
                />
            </div>
        }
        .into_any(),
        ControlShape::TextArea {
            rows,
            placeholder,
            default_value,
        } => view! {
            <div class=cell>
                <label for=id.clone() class="block text-sm font-medium text-gray-700 mb-1">
                    {label}
                </label>
                <textarea
                    id=id
                    rows=rows.to_string()
                    class=INPUT_CLASS
                    placeholder=placeholder
                    required=required
                >
                    {default_value}
                </textarea>
            </div>
        }
        .into_any(),
        // Box first, label after
        ControlShape::Checkbox { checked } => view! {
            <div class=format!("{} flex items-center gap-2", cell)>
                <input
                    id=id.clone()
                    type="checkbox"
                    class="h-4 w-4 text-indigo-600 border-gray-300 rounded"
                    checked=checked
                    required=required
                />
                <label for=id class="text-sm text-gray-700">{label}</label>
            </div>
        }
        .into_any(),
    }
}
