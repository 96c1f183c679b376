//! Browser front end for HappyForm
//!
//! One page: a prompt bar on top and the generated form below it. All state
//! transitions go through [`FormSession`] so a late reply to an older prompt
//! never overwrites a newer one.

use leptos::prelude::*;
use leptos::web_sys;

mod api;
mod components;

use components::form_view::FormArea;
use components::prompt_bar::PromptBar;
use happyform_core::{Applied, FormSession, GenerationError};

#[component]
pub fn App() -> impl IntoView {
    let prompt = RwSignal::new(String::new());
    let session = RwSignal::new(FormSession::new());

    let on_generate = move |_: ()| {
        let text = prompt.get_untracked();
        let mut ticket = None;
        session.update(|s| ticket = Some(s.begin()));
        let Some(ticket) = ticket else {
            return;
        };
        log::debug!("Submitting prompt #{}", ticket.sequence());

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::generate_form(&text).await;
            if let Err(GenerationError::RequestFailure(detail)) = &result {
                log::error!("Form generation failed: {}", detail);
            }

            let mut applied = None;
            session.update(|s| applied = Some(s.complete(ticket, result)));

            match applied {
                Some(Applied::Notice(notice)) => {
                    web_sys::window().and_then(|w| w.alert_with_message(notice.message).ok());
                    session.update(|s| {
                        s.take_notice();
                    });
                }
                Some(Applied::Stale) => {
                    log::debug!("Dropped reply to superseded prompt #{}", ticket.sequence());
                }
                _ => {}
            }
        });
    };

    view! {
        <div class="min-h-screen bg-gray-100 py-10">
            <div class="max-w-4xl mx-auto bg-white rounded-lg shadow p-8">
                <h1 class="text-3xl font-bold text-center mb-8">"HappyForm.ai 🎉"</h1>
                <PromptBar
                    prompt=prompt
                    button_label=Signal::derive(move || session.with(|s| s.button_label()))
                    on_generate=on_generate
                />
                {move || view! { <FormArea form=session.with(|s| s.rendered()) /> }}
            </div>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
