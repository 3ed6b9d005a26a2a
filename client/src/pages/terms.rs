//! Terms of use view.

use leptos::prelude::*;

use crate::components::page_layout::PageLayout;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <PageLayout title="Terms of Use" subtitle="Readable terms for our early access community.">
            <section>
                <p>"By joining the waitlist you agree to receive early-access emails from EndALoop."</p>
            </section>
            <section>
                <h3>"Early Access & Beta"</h3>
                <p>"Beta builds may change, break, or disappear while we learn what helps most."</p>
            </section>
            <section>
                <h3>"Not medical advice"</h3>
                <p>"EndALoop supports focus habits. It is not a diagnosis or treatment for ADHD or any condition."</p>
            </section>
            <section>
                <h3>"Limitation of liability"</h3>
                <p>"The service is provided as is, without warranties of any kind."</p>
            </section>
            <section class="page-layout__footer">
                <p>"Questions? Write to hello@endaloop.com."</p>
            </section>
        </PageLayout>
    }
}
