//! Brand mark.

use leptos::prelude::*;

/// Open loop glyph with an escaping stroke.
#[component]
pub fn Logo(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 100 100"
            class=class.unwrap_or_else(|| "logo".to_owned())
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <circle
                cx="50"
                cy="50"
                r="40"
                stroke="currentColor"
                stroke-width="6"
                stroke-dasharray="210 50"
                stroke-linecap="round"
            />
            <path d="M75 25L95 5" stroke="currentColor" stroke-width="6" stroke-linecap="round"/>
        </svg>
    }
}
