//! Root application component and context wiring.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Title, provide_meta_context};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::config::WaitlistConfig;
use crate::pages::{contact::ContactPage, home::HomePage, privacy::PrivacyPage, terms::TermsPage};
use crate::state::router::{ViewRouter, ViewState};
use crate::util::viewport::BrowserViewport;

/// Router handle shared with every navigation control.
pub type RouterHandle = StoredValue<ViewRouter, LocalStorage>;

/// Root application component.
///
/// Owns the single [`ViewRouter`], mirrors its view into a signal, and
/// renders the page for the current view between the navbar and footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let router = ViewRouter::new(Rc::new(BrowserViewport));
    let current_view = RwSignal::new(router.current());
    router.subscribe(move |view| current_view.set(*view));

    provide_context::<RouterHandle>(StoredValue::new_local(router));
    provide_context(current_view.read_only());
    provide_context(WaitlistConfig::from_build_env());

    view! {
        <Title text=move || current_view.get().title()/>

        <div class="app">
            <a href="#main-content" class="skip-link">"Skip to content"</a>
            <Navbar/>
            <main id="main-content" class="app__main">
                {move || match current_view.get() {
                    ViewState::Home => view! { <HomePage/> }.into_any(),
                    ViewState::Privacy => view! { <PrivacyPage/> }.into_any(),
                    ViewState::Terms => view! { <TermsPage/> }.into_any(),
                    ViewState::Contact => view! { <ContactPage/> }.into_any(),
                }}
            </main>
            <Footer/>
        </div>
    }
}
