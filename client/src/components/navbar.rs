//! Fixed top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Section links only exist on Home, so they go through
//! `navigate_and_scroll_to`, which restores Home first when needed. The
//! mobile menu is local chrome and closes after any section link.

use leptos::prelude::*;

use crate::app::RouterHandle;
use crate::components::logo::Logo;
use crate::state::router::{ANCHOR_FEATURES, ANCHOR_HOW, ANCHOR_WAITLIST, ViewRouter};

#[component]
pub fn Navbar() -> impl IntoView {
    let router = expect_context::<RouterHandle>();
    let menu_open = RwSignal::new(false);

    let go_to_section = move |anchor: &'static str| {
        router.with_value(|r| r.navigate_and_scroll_to(anchor));
        menu_open.set(false);
    };

    view! {
        <nav class="navbar" role="navigation" aria-label="Main Navigation">
            <div class="navbar__inner">
                <button
                    class="navbar__brand"
                    on:click=move |_| {
                        router.with_value(ViewRouter::navigate_home);
                        menu_open.set(false);
                    }
                >
                    <Logo class="navbar__logo"/>
                    <span class="navbar__name">"EndALoop"</span>
                </button>

                <div class="navbar__links">
                    <button class="navbar__link" on:click=move |_| go_to_section(ANCHOR_FEATURES)>
                        "FEATURES"
                    </button>
                    <button class="navbar__link" on:click=move |_| go_to_section(ANCHOR_HOW)>
                        "HOW IT WORKS"
                    </button>
                </div>

                <div class="navbar__actions">
                    <button class="navbar__cta" on:click=move |_| go_to_section(ANCHOR_WAITLIST)>
                        "Early Access"
                    </button>
                    <button
                        class="navbar__menu-toggle"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar__backdrop" on:click=move |_| menu_open.set(false)></div>
                <div class="navbar__menu">
                    <button class="navbar__menu-link" on:click=move |_| go_to_section(ANCHOR_FEATURES)>
                        "FEATURES"
                    </button>
                    <button class="navbar__menu-link" on:click=move |_| go_to_section(ANCHOR_HOW)>
                        "HOW IT WORKS"
                    </button>
                    <button class="navbar__menu-cta" on:click=move |_| go_to_section(ANCHOR_WAITLIST)>
                        "Early Access"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
