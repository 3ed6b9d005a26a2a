//! Shared frame for the text pages (privacy, terms, contact).

use leptos::prelude::*;

#[component]
pub fn PageLayout(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="page-layout">
            <div class="page-layout__inner">
                <header class="page-layout__header">
                    <h1 class="page-layout__title">{title}</h1>
                    {subtitle.map(|text| view! { <p class="page-layout__subtitle">{text}</p> })}
                    <div class="page-layout__rule"></div>
                </header>
                <div class="page-layout__body">{children()}</div>
            </div>
        </section>
    }
}
