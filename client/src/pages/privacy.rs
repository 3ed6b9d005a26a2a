//! Privacy policy view.

use leptos::prelude::*;

use crate::components::page_layout::PageLayout;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <PageLayout
            title="Privacy Policy"
            subtitle="A calm, clear, and reassuring look at how we respect your attention and data."
        >
            <section>
                <p>
                    "EndALoop is built to protect your attention, and that starts with protecting your data. We collect as little as possible."
                </p>
            </section>
            <section>
                <h3>"What we collect"</h3>
                <p>"Joining the waitlist stores your email address and which signup form you used. Nothing else."</p>
            </section>
            <section>
                <h3>"How we use your information"</h3>
                <p>"We use your email only to send early-access invitations and important product updates."</p>
            </section>
            <section>
                <h3>"Our Commitment"</h3>
                <p>"We never sell your data and never use it for advertising."</p>
            </section>
            <section>
                <h3>"Where your data is stored"</h3>
                <p>"Waitlist entries are held by the automation service that receives the form, and nowhere else."</p>
            </section>
            <section>
                <h3>"Your choices"</h3>
                <p>"Ask us at any time and we will remove your email from the list."</p>
            </section>
            <section class="page-layout__footer">
                <h3>"Contact"</h3>
                <a href="mailto:hello@endaloop.com">"hello@endaloop.com"</a>
            </section>
        </PageLayout>
    }
}
