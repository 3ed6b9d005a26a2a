//! Contact view.

use leptos::prelude::*;

use crate::components::page_layout::PageLayout;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <PageLayout
            title="Contact Us"
            subtitle="We'd love to hear your thoughts, feedback, or collaboration ideas."
        >
            <div class="contact-grid">
                <div class="contact-card">
                    <h3>"Support & Feedback"</h3>
                    <a href="mailto:hello@endaloop.com">"hello@endaloop.com"</a>
                </div>
                <div class="contact-card">
                    <h3>"Partnerships"</h3>
                    <a href="mailto:partnerships@endaloop.com">"partnerships@endaloop.com"</a>
                </div>
            </div>
        </PageLayout>
    }
}
