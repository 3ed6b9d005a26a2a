//! Email capture form bound to one [`WaitlistSubmitter`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Each mounted form owns an independent submitter keyed by `source`. The
//! submitter is disposed on cleanup so a response or reset timer that lands
//! after the form unmounts (e.g. the visitor switched views) is dropped.

use leptos::prelude::*;

use crate::config::WaitlistConfig;
use crate::state::waitlist::{SubmissionState, WaitlistSubmitter};

#[component]
pub fn WaitlistForm(#[prop(into)] source: String) -> impl IntoView {
    let config = use_context::<WaitlistConfig>().unwrap_or_default();
    let input_id = format!("{source}-email");

    let submitter = WaitlistSubmitter::browser(source, config);
    let status = RwSignal::new(submitter.state());
    let email = RwSignal::new(submitter.email());
    submitter.subscribe(move |next| {
        let _ = status.try_set(*next);
    });
    let submitter = StoredValue::new_local(submitter);
    on_cleanup(move || {
        let _ = submitter.try_with_value(WaitlistSubmitter::dispose);
    });

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if submitter.with_value(|s| s.set_email(value.clone())) {
            email.set(value);
        }
    };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let _ = submitter.with_value(WaitlistSubmitter::submit);
    };
    let submitting = move || status.get() == SubmissionState::Submitting;

    view! {
        <Show
            when=move || status.get() == SubmissionState::Success
            fallback=move || {
                let input_id = input_id.clone();
                view! {
                    <div class="waitlist-form">
                        <form class="waitlist-form__row" on:submit=on_submit>
                            <label for=input_id.clone() class="sr-only">"Email address"</label>
                            <input
                                id=input_id
                                class="waitlist-form__input"
                                type="email"
                                required
                                placeholder="yourname@email.com"
                                disabled=submitting
                                prop:value=move || email.get()
                                on:input=on_input
                            />
                            <button class="waitlist-form__button" type="submit" disabled=submitting>
                                {move || if submitting() { "Joining…" } else { "Get Early Access →" }}
                            </button>
                        </form>
                        <Show when=move || status.get() == SubmissionState::Error>
                            <p class="waitlist-form__error" role="alert">"Error. Please try again."</p>
                        </Show>
                    </div>
                }
            }
        >
            <div class="waitlist-form__success" role="status">
                <span aria-hidden="true">"✓"</span>
                <span>"You're on the list!"</span>
            </div>
        </Show>
    }
}
