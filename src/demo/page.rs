use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CHAT_STORAGE_KEY;
use crate::demo::controller::DemoController;
use crate::demo::fixtures::LEAGUES;
use crate::demo::navigation::{DetailTab, Tab};
use crate::demo::schedule::{BrowserRandom, Deferred, DeferredTask, PendingTimers};
use crate::demo::storage::{BrowserStorage, ChatStore};
use crate::demo::view::DomView;
use crate::Route;

pub enum DemoMsg {
    ShowTab(Tab),
    OpenDetail(isize),
    CloseDetail,
    SwitchDetailTab(DetailTab),
    SendChat,
    Run(u32, DeferredTask),
}

/// The simulated phone. Markup is rendered once; after that the controller
/// updates it in place through [`DomView`], so `update` never asks Yew to
/// re-render. Leaving the page drops `timers`, which cancels pending replies
/// and scrolls.
pub struct Demo {
    controller: DemoController<BrowserStorage, DomView, BrowserRandom>,
    timers: PendingTimers<Timeout>,
}

impl Demo {
    fn arm(&mut self, ctx: &Context<Self>, deferred: Option<Deferred>) {
        if let Some(Deferred { delay_ms, task }) = deferred {
            let id = self.timers.next_id();
            let link = ctx.link().clone();
            let timeout = Timeout::new(delay_ms, move || link.send_message(DemoMsg::Run(id, task)));
            self.timers.insert(id, timeout);
        }
    }

    fn tab_bar(ctx: &Context<Self>) -> Html {
        html! {
            <nav class="tab-bar">
                { for Tab::ALL.into_iter().map(|tab| {
                    let onclick = ctx.link().callback(move |_| DemoMsg::ShowTab(tab));
                    html! {
                        <button
                            class={classes!("tab-item", (tab == Tab::Home).then(|| "active"))}
                            data-tab={tab.id()}
                            {onclick}
                        >
                            {tab.label()}
                        </button>
                    }
                }) }
            </nav>
        }
    }

    fn home_screen(ctx: &Context<Self>) -> Html {
        let nav_to = |tab: Tab| ctx.link().callback(move |_: MouseEvent| DemoMsg::ShowTab(tab));
        html! {
            <section id="screen-home" class="screen active">
                <h2>{"Welcome back!"}</h2>
                <p>{"You have 2 games this week."}</p>
                <div class="welcome-actions">
                    <button class="welcome-action" data-nav="explore" onclick={nav_to(Tab::Explore)}>
                        {"📍 Find a court"}
                    </button>
                    <button class="welcome-action" data-nav="leagues" onclick={nav_to(Tab::Leagues)}>
                        {"🏆 My leagues"}
                    </button>
                    <button class="welcome-action" data-nav="profile" onclick={nav_to(Tab::Profile)}>
                        {"👤 My profile"}
                    </button>
                </div>
            </section>
        }
    }

    fn explore_screen() -> Html {
        html! {
            <section id="screen-explore" class="screen">
                <h2>{"Courts near you"}</h2>
                <ul class="court-list">
                    <li>{"Central Park Courts • 0.8 mi • 4 open"}</li>
                    <li>{"Riverside Rec Center • 1.6 mi • 2 open"}</li>
                    <li>{"Eastside Community Club • 3.1 mi • Full"}</li>
                </ul>
            </section>
        }
    }

    fn leagues_screen(ctx: &Context<Self>) -> Html {
        html! {
            <section id="screen-leagues" class="screen">
                <h2>{"My leagues"}</h2>
                { for (0isize..).zip(LEAGUES.iter()).map(|(index, league)| {
                    let onclick = ctx.link().callback(move |_| DemoMsg::OpenDetail(index));
                    html! {
                        <div class="league-card" {onclick}>
                            <div class="league-icon" style={format!("background: {};", league.background)}>
                                {league.icon}
                            </div>
                            <div class="league-info">
                                <div class="league-name">{league.name}</div>
                                <div class="league-details">{league.details}</div>
                            </div>
                            <div class="league-status">{league.status}</div>
                        </div>
                    }
                }) }
            </section>
        }
    }

    fn profile_screen() -> Html {
        html! {
            <section id="screen-profile" class="screen">
                <h2>{"Your profile"}</h2>
                <p>{"Skill rating 3.5 • 42 games played"}</p>
            </section>
        }
    }

    fn league_detail(ctx: &Context<Self>) -> Html {
        let back = ctx.link().callback(|_| DemoMsg::CloseDetail);
        let send = ctx.link().callback(|_| DemoMsg::SendChat);
        let on_keydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                Some(DemoMsg::SendChat)
            } else {
                None
            }
        });

        html! {
            <div id="league-detail" class="league-detail">
                <header class="detail-header">
                    <button id="detail-back" class="detail-back" onclick={back}>{"‹"}</button>
                    <div id="league-detail-icon" class="league-icon"></div>
                    <div>
                        <div id="league-detail-name" class="detail-name"></div>
                        <div id="league-detail-sub" class="detail-sub"></div>
                    </div>
                </header>
                <div class="detail-tabs">
                    { for DetailTab::ALL.into_iter().map(|tab| {
                        let onclick = ctx.link().callback(move |_| DemoMsg::SwitchDetailTab(tab));
                        html! {
                            <button class="detail-tab" data-tab={tab.id()} {onclick}>{tab.label()}</button>
                        }
                    }) }
                </div>
                <div id="dtab-overview" class="detail-content">
                    <p>{"Matches every Saturday morning. Top four teams advance to the playoffs."}</p>
                </div>
                <div id="dtab-standings" class="detail-content">
                    <ol>
                        <li>{"Dink Dynasty • 7-1"}</li>
                        <li>{"Kitchen Crew • 6-2"}</li>
                        <li>{"You & Sarah L. • 5-3"}</li>
                    </ol>
                </div>
                <div id="dtab-schedule" class="detail-content">
                    <p>{"Sat 10:00 • Central Park Courts • vs Kitchen Crew"}</p>
                </div>
                <div id="dtab-chat" class="detail-content">
                    <div id="chat-messages" class="chat-messages"></div>
                    <div class="chat-compose">
                        <input id="chat-input" type="text" placeholder="Message your team..." onkeydown={on_keydown} />
                        <button id="chat-send" onclick={send}>{"Send"}</button>
                    </div>
                </div>
            </div>
        }
    }
}

impl Component for Demo {
    type Message = DemoMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: DemoController::new(
                ChatStore::new(BrowserStorage, CHAT_STORAGE_KEY),
                DomView::new(),
                BrowserRandom,
            ),
            timers: PendingTimers::new(),
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.controller.start();
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DemoMsg::ShowTab(tab) => self.controller.show_tab(tab),
            DemoMsg::OpenDetail(index) => self.controller.open_detail(index),
            DemoMsg::CloseDetail => self.controller.close_detail(),
            DemoMsg::SwitchDetailTab(tab) => {
                let deferred = self.controller.switch_detail_tab(tab);
                self.arm(ctx, deferred);
            }
            DemoMsg::SendChat => {
                let text = self.controller.view().chat_input_value().unwrap_or_default();
                let reply = self.controller.send_chat(&text);
                self.arm(ctx, reply);
            }
            DemoMsg::Run(id, task) => {
                self.timers.finish(id);
                debug!("Running deferred {:?}", task);
                self.controller.run(task);
            }
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="demo-page">
                <Link<Route> to={Route::Home} classes="demo-back-link">
                    {"← Back to PickleCue"}
                </Link<Route>>
                <div class="demo-phone">
                    <div class="screens">
                        { Self::home_screen(ctx) }
                        { Self::explore_screen() }
                        { Self::leagues_screen(ctx) }
                        { Self::profile_screen() }
                    </div>
                    { Self::league_detail(ctx) }
                    { Self::tab_bar(ctx) }
                </div>
            </div>
        }
    }
}
