//! Prompt input and the generate button
//!
//! The button stays clickable while a request is in flight; a new click
//! supersedes the outstanding prompt.

use leptos::prelude::*;

#[component]
pub fn PromptBar(
    prompt: RwSignal<String>,
    /// Label shown on the button, switches while a request is in flight
    #[prop(into)]
    button_label: Signal<&'static str>,
    #[prop(into)] on_generate: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row gap-4 mb-8">
            <input
                type="text"
                class="flex-1 px-4 py-3 border border-gray-300 rounded-lg focus:ring-indigo-500 focus:border-indigo-500"
                placeholder="Describe the form you need, e.g. a job application"
                prop:value=move || prompt.get()
                on:input=move |ev| prompt.set(event_target_value(&ev))
            />
            <button
                class="px-6 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700"
                on:click=move |_| on_generate.run(())
            >
                {move || button_label.get()}
            </button>
        </div>
    }
}
