//! Home view: hero, features, how-it-works, and the closing waitlist section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Section ids here are the anchors the router scrolls to. After mount the
//! page tells the router it has been committed, which releases any anchor
//! scroll parked by a navigation from another view.

use leptos::prelude::*;

use crate::app::RouterHandle;
use crate::components::logo::Logo;
use crate::components::waitlist_form::WaitlistForm;
use crate::state::router::{ANCHOR_FEATURES, ANCHOR_HERO, ANCHOR_HOW, ANCHOR_WAITLIST, ViewState};

const FEATURES: [(&str, &str); 4] = [
    (
        "Gentle Nudges",
        "Non-aggressive reminders that appear when you might be mindlessly scrolling.",
    ),
    ("Full Control", "No force. You decide if you stay or switch. No punishment, just options."),
    ("Tiny Redirects", "2-minute actions like sketching or stretching to reset your brain."),
    ("Mindful Progress", "Measure success by loops ended, not streaks maintained."),
];

const STEPS: [(&str, &str); 3] = [
    ("Detection", "We silently note when content consumption looks like a loop."),
    ("The Nudge", "A gentle prompt helps you pause and notice your current state."),
    ("Redirection", "Choose a 2-minute activity to bridge the gap back to intention."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let router = expect_context::<RouterHandle>();

    // Render-settle signal: effects run after mount; the animation frame
    // waits for layout so anchor offsets are real.
    Effect::new(move || {
        #[cfg(feature = "csr")]
        request_animation_frame(move || router.with_value(|r| r.view_rendered(ViewState::Home)));
        #[cfg(not(feature = "csr"))]
        router.with_value(|r| r.view_rendered(ViewState::Home));
    });

    view! {
        <section id=ANCHOR_HERO class="hero">
            <div class="hero__copy">
                <span class="hero__badge">"BETA ACCESS RELEASING SOON"</span>
                <h1 class="hero__title">
                    "End A Loop."
                    <br/>
                    <span class="hero__title-accent">"Start living."</span>
                </h1>
                <p class="hero__lede">
                    "Break out of scrolling loops without harsh blocks. EndALoop uses gentle nudges to guide you back to focus, shame-free."
                </p>
                <WaitlistForm source="hero"/>
                <div class="hero__platforms">
                    <span class="hero__platform">"iOS"</span>
                    <span class="hero__platform">"Android"</span>
                </div>
            </div>
            <figure class="mockup" aria-label="EndALoop app interface">
                <Logo class="mockup__logo"/>
                <h3>"Looping?"</h3>
                <p>"We noticed you've been scrolling for 15 minutes. Want to switch?"</p>
                <span class="mockup__primary">"Yes, help me switch"</span>
                <span class="mockup__secondary">"No, I'm intentional"</span>
            </figure>
        </section>

        <section id=ANCHOR_FEATURES class="features">
            <header class="section-header">
                <h2>"Better tools for your mind"</h2>
                <p>"Designed by neurodivergent minds to respect your autonomy and your focus."</p>
            </header>
            <div class="features__grid">
                {FEATURES
                    .iter()
                    .map(|(title, desc)| {
                        view! {
                            <article class="feature-card">
                                <h3 class="feature-card__title">{*title}</h3>
                                <p class="feature-card__desc">{*desc}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section id=ANCHOR_HOW class="how">
            <div class="how__copy">
                <span class="how__eyebrow">"THE PROCESS"</span>
                <h2>"Break cycles, not spirits."</h2>
                <p>
                    "Traditional blockers feel like prison. EndALoop feels like a supportive friend who helps you remember what you actually wanted to do."
                </p>
                <ol class="how__steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, desc))| {
                            view! {
                                <li class="how__step">
                                    <span class="how__step-num">{i + 1}</span>
                                    <div>
                                        <h4>{*title}</h4>
                                        <p>{*desc}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>

        <section id=ANCHOR_WAITLIST class="waitlist">
            <h2 class="waitlist__title">
                "The loop ends "
                <br/>
                <span class="waitlist__title-accent">"with you."</span>
            </h2>
            <p class="waitlist__lede">
                "Be the first to experience a kinder way to handle your attention. Early access is limited."
            </p>
            <WaitlistForm source="footer-cta"/>
        </section>
    }
}
