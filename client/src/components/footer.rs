//! Site footer with legal/contact views and the external profile link.

use leptos::prelude::*;

use crate::app::RouterHandle;
use crate::components::logo::Logo;
use crate::state::router::{ViewRouter, ViewState};

/// Public X profile.
pub const X_PROFILE_URL: &str = "https://x.com/endaloopapp?s=11";

#[component]
pub fn Footer() -> impl IntoView {
    let router = expect_context::<RouterHandle>();
    let current_view = expect_context::<ReadSignal<ViewState>>();

    let open_view = move |ev: leptos::ev::MouseEvent, view: ViewState| {
        ev.prevent_default();
        router.with_value(|r| r.navigate_to_top(view));
    };
    let link_class = move |view: ViewState| {
        if current_view.get() == view {
            "footer__link footer__link--active"
        } else {
            "footer__link"
        }
    };

    view! {
        <footer class="footer" role="contentinfo">
            <div class="footer__top">
                <div class="footer__brand">
                    <button class="footer__home" on:click=move |_| router.with_value(ViewRouter::navigate_home)>
                        <Logo class="footer__logo"/>
                        <span class="footer__name">"EndALoop"</span>
                    </button>
                    <p class="footer__tagline">"Mindful technology designed for ADHD and neurodivergent minds."</p>
                </div>

                <div class="footer__links">
                    <button class=move || link_class(ViewState::Privacy) on:click=move |ev| open_view(ev, ViewState::Privacy)>
                        "PRIVACY"
                    </button>
                    <button class=move || link_class(ViewState::Terms) on:click=move |ev| open_view(ev, ViewState::Terms)>
                        "TERMS"
                    </button>
                    <button class=move || link_class(ViewState::Contact) on:click=move |ev| open_view(ev, ViewState::Contact)>
                        "CONTACT"
                    </button>
                    <a href=X_PROFILE_URL target="_blank" rel="noopener noreferrer" class="footer__link">
                        "X ↗"
                    </a>
                </div>
            </div>
            <div class="footer__bottom">
                <p class="footer__legal">"© EndALoop Labs. Built for intention."</p>
                <span class="footer__badge">"♥ NEURODIVERGENT OWNED"</span>
            </div>
        </footer>
    }
}
