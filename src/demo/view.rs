use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlInputElement};

use crate::demo::fixtures::League;
use crate::demo::navigation::{DetailTab, Tab};

/// Everything the demo controller needs from a rendering surface.
pub trait DemoView {
    /// Deactivates every screen and tab indicator, then activates `tab`'s.
    fn show_screen(&mut self, tab: Tab);
    fn set_detail_open(&mut self, open: bool);
    fn set_detail_header(&mut self, league: &League);
    fn show_detail_tab(&mut self, tab: DetailTab);
    /// Replaces the chat list with `markup`, which must already be escaped.
    fn render_chat(&mut self, markup: &str);
    fn scroll_chat_to_bottom(&mut self);
    fn clear_chat_input(&mut self);
}

/// Drives the demo markup by element id and class. Every lookup tolerates a
/// missing element.
pub struct DomView {
    document: Option<Document>,
}

impl DomView {
    pub fn new() -> Self {
        Self {
            document: window().and_then(|w| w.document()),
        }
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        let element = self.document.as_ref()?.get_element_by_id(id);
        if element.is_none() {
            debug!("Demo element #{} not found", id);
        }
        element
    }

    fn query(&self, selector: &str) -> Option<Element> {
        let element = self.document.as_ref()?.query_selector(selector).ok().flatten();
        if element.is_none() {
            debug!("Demo element {} not found", selector);
        }
        element
    }

    fn each(&self, selector: &str, mut f: impl FnMut(&Element)) {
        let Some(document) = &self.document else {
            return;
        };
        let Ok(nodes) = document.query_selector_all(selector) else {
            return;
        };
        if nodes.length() == 0 {
            debug!("No demo elements match {}", selector);
        }
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                f(&element);
            }
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(element) = self.by_id(id) {
            element.set_text_content(Some(text));
        }
    }

    fn chat_input(&self) -> Option<HtmlInputElement> {
        self.by_id("chat-input")?.dyn_into::<HtmlInputElement>().ok()
    }

    pub fn chat_input_value(&self) -> Option<String> {
        self.chat_input().map(|input| input.value())
    }
}

impl DemoView for DomView {
    fn show_screen(&mut self, tab: Tab) {
        self.each(".screen", |screen| {
            let _ = screen.class_list().remove_2("active", "prev");
        });
        self.each(".tab-item", |item| {
            let _ = item.class_list().remove_1("active");
        });

        if let Some(screen) = self.by_id(&format!("screen-{}", tab.id())) {
            let _ = screen.class_list().add_1("active");
        }
        if let Some(item) = self.query(&format!(".tab-item[data-tab=\"{}\"]", tab.id())) {
            let _ = item.class_list().add_1("active");
        }
    }

    fn set_detail_open(&mut self, open: bool) {
        if let Some(detail) = self.by_id("league-detail") {
            let _ = detail.class_list().toggle_with_force("open", open);
        }
    }

    fn set_detail_header(&mut self, league: &League) {
        self.set_text("league-detail-icon", league.icon);
        self.set_text("league-detail-name", league.name);
        self.set_text("league-detail-sub", league.details);
        if let Some(icon) = self.by_id("league-detail-icon") {
            let _ = icon.set_attribute("style", &format!("background: {};", league.background));
        }
    }

    fn show_detail_tab(&mut self, tab: DetailTab) {
        let panel_id = format!("dtab-{}", tab.id());
        self.each(".detail-tab", |item| {
            let active = item.get_attribute("data-tab").as_deref() == Some(tab.id());
            let _ = item.class_list().toggle_with_force("active", active);
        });
        self.each(".detail-content", |panel| {
            let _ = panel.class_list().toggle_with_force("active", panel.id() == panel_id);
        });
    }

    fn render_chat(&mut self, markup: &str) {
        if let Some(container) = self.by_id("chat-messages") {
            container.set_inner_html(markup);
        }
    }

    fn scroll_chat_to_bottom(&mut self) {
        if let Some(container) = self.by_id("chat-messages") {
            container.set_scroll_top(container.scroll_height());
        }
    }

    fn clear_chat_input(&mut self) {
        if let Some(input) = self.chat_input() {
            input.set_value("");
        }
    }
}

#[cfg(test)]
pub mod recording {
    use super::DemoView;
    use crate::demo::fixtures::League;
    use crate::demo::navigation::{DetailTab, Tab};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ViewCall {
        ShowScreen(Tab),
        SetDetailOpen(bool),
        SetDetailHeader(&'static str),
        ShowDetailTab(DetailTab),
        RenderChat,
        ScrollChat,
        ClearInput,
    }

    /// Keeps the visible state a real surface would show, plus a call log.
    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub calls: Vec<ViewCall>,
        pub active_screen: Option<Tab>,
        pub detail_open: bool,
        pub header: Option<League>,
        pub active_detail_tab: Option<DetailTab>,
        pub chat_markup: String,
    }

    impl RecordingView {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn count(&self, call: &ViewCall) -> usize {
            self.calls.iter().filter(|c| *c == call).count()
        }
    }

    impl DemoView for RecordingView {
        fn show_screen(&mut self, tab: Tab) {
            self.calls.push(ViewCall::ShowScreen(tab));
            self.active_screen = Some(tab);
        }

        fn set_detail_open(&mut self, open: bool) {
            self.calls.push(ViewCall::SetDetailOpen(open));
            self.detail_open = open;
        }

        fn set_detail_header(&mut self, league: &League) {
            self.calls.push(ViewCall::SetDetailHeader(league.name));
            self.header = Some(*league);
        }

        fn show_detail_tab(&mut self, tab: DetailTab) {
            self.calls.push(ViewCall::ShowDetailTab(tab));
            self.active_detail_tab = Some(tab);
        }

        fn render_chat(&mut self, markup: &str) {
            self.calls.push(ViewCall::RenderChat);
            self.chat_markup = markup.to_string();
        }

        fn scroll_chat_to_bottom(&mut self) {
            self.calls.push(ViewCall::ScrollChat);
        }

        fn clear_chat_input(&mut self) {
            self.calls.push(ViewCall::ClearInput);
        }
    }
}
