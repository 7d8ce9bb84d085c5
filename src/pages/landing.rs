use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::carousel::{Carousel, Slide};
use crate::components::feature_tabs::FeatureTabs;
use crate::components::nav::Nav;
use crate::components::scroll::{anchor_click, observe_reveal_targets};
use crate::Route;

fn phone_slides() -> Vec<Slide> {
    vec![
        Slide {
            title: "Courts near you".into(),
            caption: "Live availability for every court in town.".into(),
        },
        Slide {
            title: "Pickup games".into(),
            caption: "Join a game at your level in two taps.".into(),
        },
        Slide {
            title: "League chat".into(),
            caption: "Plan Saturday's match with your whole team.".into(),
        },
    ]
}

const FEATURE_CARDS: [(&str, &str, &str); 4] = [
    ("📍", "Court Finder", "Search courts by distance, surface and amenities, with ratings from local players."),
    ("🤝", "Partner Matching", "Meet players at your skill level who play when you do."),
    ("🏆", "Leagues & Tournaments", "Round robins, ladders and brackets with standings kept for you."),
    ("🎯", "Drills & Progress", "Practice plans for every level and a record of how far you've come."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    // Reveal feature cards and section headers as they scroll in.
    use_effect_with_deps(
        move |_| {
            let observer = observe_reveal_targets();
            move || drop(observer)
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Nav />
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Your pickleball community, in your pocket"}</h1>
                    <p class="hero-subtitle">
                        {"Find courts, join games, meet partners and run your league from one app."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#download" class="hero-cta" onclick={anchor_click("#download")}>
                            {"Get the app"}
                        </a>
                        <Link<Route> to={Route::Demo} classes="hero-secondary">
                            {"Try the interactive demo"}
                        </Link<Route>>
                    </div>
                </div>
                <Carousel slides={phone_slides()} />
            </header>

            <section id="features" class="features">
                <div class="section-header">
                    <h2>{"Everything you need to play more"}</h2>
                    <p>{"Built by players, for players."}</p>
                </div>
                <div class="features-grid">
                    { for FEATURE_CARDS.iter().map(|&(icon, title, text)| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{icon}</div>
                            <h3>{title}</h3>
                            <p>{text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="preview" class="preview">
                <div class="section-header">
                    <h2>{"See it in action"}</h2>
                    <p>{"Pick a feature to preview it."}</p>
                </div>
                <FeatureTabs />
            </section>

            <section id="download" class="download">
                <div class="section-header">
                    <h2>{"Get PickleCue"}</h2>
                    <p>{"Free on iOS and Android."}</p>
                </div>
                <div class="store-badges">
                    <a href="https://apps.apple.com" class="store-badge" target="_blank" rel="noopener noreferrer">
                        {"App Store"}
                    </a>
                    <a href="https://play.google.com" class="store-badge" target="_blank" rel="noopener noreferrer">
                        {"Google Play"}
                    </a>
                </div>
            </section>

            <footer class="footer">
                <p>{"© PickleCue. See you on the court."}</p>
            </footer>
        </div>
    }
}
