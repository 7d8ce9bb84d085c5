use log::{debug, info};

use crate::config::CHAT_SCROLL_DELAY_MS;
use crate::demo::chat::{ChatEngine, SendOutcome};
use crate::demo::fixtures::league_at;
use crate::demo::navigation::{DetailTab, NavigationState, Tab};
use crate::demo::schedule::{Deferred, DeferredTask, RandomSource};
use crate::demo::storage::{ChatStore, KeyValueStore};
use crate::demo::view::DemoView;

/// Owns the demo's navigation state and chat, and pushes every change to `V`.
///
/// Operations that need a timer return a [`Deferred`]; the caller arms it and
/// hands the task back to [`DemoController::run`] when it fires.
pub struct DemoController<S, V, R> {
    nav: NavigationState,
    chat: ChatEngine<S>,
    view: V,
    random: R,
}

impl<S, V, R> DemoController<S, V, R>
where
    S: KeyValueStore,
    V: DemoView,
    R: RandomSource,
{
    pub fn new(store: ChatStore<S>, view: V, random: R) -> Self {
        Self {
            nav: NavigationState::default(),
            chat: ChatEngine::load_or_seed(store),
            view,
            random,
        }
    }

    /// Initial render: chat first, then the starting navigation state.
    pub fn start(&mut self) {
        info!("Starting demo with {} chat messages", self.chat.messages().len());
        self.chat.render(&mut self.view);
        self.nav = NavigationState::default();
        self.view.set_detail_open(false);
        self.view.show_screen(self.nav.current_tab);
        self.view.show_detail_tab(self.nav.current_detail_tab);
    }

    #[cfg(test)]
    pub fn state(&self) -> &NavigationState {
        &self.nav
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    #[cfg(test)]
    pub fn chat_messages(&self) -> &[crate::demo::chat::ChatMessage] {
        self.chat.messages()
    }

    pub fn show_tab(&mut self, tab: Tab) {
        if tab == self.nav.current_tab && !self.nav.detail_open {
            return;
        }
        if self.nav.detail_open {
            self.close_detail();
        }
        debug!("Showing tab {}", tab.id());
        self.view.show_screen(tab);
        self.nav.current_tab = tab;
    }

    pub fn open_detail(&mut self, index: isize) {
        let league = league_at(index);
        debug!("Opening league detail for {}", league.name);
        self.view.set_detail_header(league);
        self.view.set_detail_open(true);
        self.nav.detail_open = true;
        // Overview never needs the deferred chat scroll.
        let _ = self.switch_detail_tab(DetailTab::Overview);
    }

    pub fn close_detail(&mut self) {
        self.view.set_detail_open(false);
        self.nav.detail_open = false;
    }

    #[must_use]
    pub fn switch_detail_tab(&mut self, tab: DetailTab) -> Option<Deferred> {
        self.nav.current_detail_tab = tab;
        self.view.show_detail_tab(tab);
        (tab == DetailTab::Chat).then_some(Deferred {
            delay_ms: CHAT_SCROLL_DELAY_MS,
            task: DeferredTask::ScrollChat,
        })
    }

    /// Sends `raw_text` as the current user. Returns the simulated reply, if one is due.
    #[must_use]
    pub fn send_chat(&mut self, raw_text: &str) -> Option<Deferred> {
        match self.chat.send(raw_text, &mut self.view, &mut self.random) {
            SendOutcome::Sent { reply } => reply,
            SendOutcome::Ignored => None,
        }
    }

    pub fn run(&mut self, task: DeferredTask) {
        match task {
            DeferredTask::ScrollChat => self.view.scroll_chat_to_bottom(),
            DeferredTask::DeliverReply(message) => self.chat.deliver_reply(message, &mut self.view),
        }
    }
}
