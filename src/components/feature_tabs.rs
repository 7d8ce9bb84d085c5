use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONTENT_SWAP_DELAY_MS;

#[derive(Debug, PartialEq, Eq)]
pub struct FeatureContent {
    pub id: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub screen: &'static str,
}

pub static FEATURE_TABS: [FeatureContent; 5] = [
    FeatureContent {
        id: "courts",
        label: "Courts",
        title: "Find Courts Near You",
        description: "Discover thousands of pickleball courts across the country. Our interactive map shows real-time availability, court conditions, and community ratings.",
        features: [
            "Search by location, amenities, or rating",
            "Real-time court status updates",
            "Save your favorite courts",
            "Get directions instantly",
        ],
        screen: "Courts Map View",
    },
    FeatureContent {
        id: "games",
        label: "Games",
        title: "Create & Join Games",
        description: "Stop playing alone! Create pickup games at your favorite courts or browse nearby games looking for players at your skill level.",
        features: [
            "Set skill level requirements (2.0-5.0+)",
            "Choose game format (singles, doubles, open)",
            "Automatic waitlist management",
            "In-app game reminders",
        ],
        screen: "Games List View",
    },
    FeatureContent {
        id: "partners",
        label: "Partners",
        title: "Find Playing Partners",
        description: "Our intelligent matching system helps you find players who match your skill level, play style, and schedule.",
        features: [
            "Skill-based matching",
            "View player profiles and stats",
            "Built-in direct messaging",
            "See mutual connections",
        ],
        screen: "Partner Finder View",
    },
    FeatureContent {
        id: "leagues",
        label: "Leagues",
        title: "Compete in Leagues",
        description: "Take your game to the next level with organized competition. Join local leagues and tournaments with multiple formats.",
        features: [
            "Round robin, elimination, ladder formats",
            "Automatic standings calculation",
            "Tournament bracket management",
            "Entry fee and registration tracking",
        ],
        screen: "Leagues & Tournaments View",
    },
    FeatureContent {
        id: "learn",
        label: "Learn",
        title: "Improve Your Game",
        description: "Access a comprehensive library of drills and tips designed for every skill level. Track your progress and see your improvement over time.",
        features: [
            "Drills for all skill levels",
            "Video tutorials and tips",
            "Progress tracking",
            "Timed practice sessions",
        ],
        screen: "Learn & Drills View",
    },
];

pub fn feature_content(id: &str) -> Option<&'static FeatureContent> {
    FEATURE_TABS.iter().find(|content| content.id == id)
}

/// Which tab is highlighted and which content is on screen. Selecting a tab
/// highlights it at once; its content only replaces the old one on
/// [`FeaturePanel::commit_swap`], once the fade-out has had time to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturePanel {
    active: String,
    shown: &'static FeatureContent,
    pending: Option<&'static FeatureContent>,
}

impl FeaturePanel {
    pub fn new() -> Self {
        let first = &FEATURE_TABS[0];
        Self {
            active: first.id.to_string(),
            shown: first,
            pending: None,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn shown(&self) -> &'static FeatureContent {
        self.shown
    }

    /// True while content is faded out waiting for its swap.
    pub fn is_fading(&self) -> bool {
        self.pending.is_some()
    }

    /// Highlights `id`. Returns whether a content swap is now pending.
    pub fn select(&mut self, id: &str) -> bool {
        self.active = id.to_string();
        self.pending = feature_content(id);
        self.pending.is_some()
    }

    pub fn commit_swap(&mut self) {
        if let Some(content) = self.pending.take() {
            self.shown = content;
        }
    }
}

pub enum FeatureTabsMsg {
    Select(&'static str),
    Swap,
}

pub struct FeatureTabs {
    panel: FeaturePanel,
    swap: Option<Timeout>,
}

impl Component for FeatureTabs {
    type Message = FeatureTabsMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            panel: FeaturePanel::new(),
            swap: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FeatureTabsMsg::Select(id) => {
                // Replacing the handle cancels a swap still in flight.
                self.swap = self.panel.select(id).then(|| {
                    let link = ctx.link().clone();
                    Timeout::new(CONTENT_SWAP_DELAY_MS, move || {
                        link.send_message(FeatureTabsMsg::Swap)
                    })
                });
            }
            FeatureTabsMsg::Swap => {
                self.swap = None;
                self.panel.commit_swap();
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let content = self.panel.shown();
        let (info_style, screen_style) = if self.panel.is_fading() {
            ("opacity: 0; transform: translateY(10px);", "opacity: 0;")
        } else {
            ("opacity: 1; transform: translateY(0);", "opacity: 1;")
        };

        html! {
            <div class="demo-tabs-container">
                <div class="demo-tabs">
                    { for FEATURE_TABS.iter().map(|tab| {
                        let id = tab.id;
                        html! {
                            <button
                                class={classes!("demo-tab", (self.panel.active() == id).then(|| "active"))}
                                data-tab={id}
                                onclick={ctx.link().callback(move |_| FeatureTabsMsg::Select(id))}
                            >
                                {tab.label}
                            </button>
                        }
                    }) }
                </div>
                <div class="demo-body">
                    <div class="demo-info" style={info_style}>
                        <h3>{content.title}</h3>
                        <p>{content.description}</p>
                        <ul class="demo-features">
                            { for content.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                        </ul>
                    </div>
                    <div class="demo-screen" style={screen_style}>{content.screen}</div>
                </div>
            </div>
        }
    }
}
