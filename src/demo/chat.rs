//! Chat engine for the league chat in the demo.
//!
//! The history is reconstructed from storage once, then every mutation writes
//! the whole history back as one snapshot (last write wins). Every third
//! message triggers one simulated teammate reply a little later.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::{REPLY_DELAY_MIN_MS, REPLY_DELAY_SPREAD_MS, REPLY_EVERY};
use crate::demo::fixtures::{seed_messages, REPLIES};
use crate::demo::schedule::{Deferred, DeferredTask, RandomSource};
use crate::demo::storage::{ChatStore, KeyValueStore};
use crate::demo::view::DemoView;

pub const CURRENT_USER: &str = "You";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    pub text: String,
    #[serde(rename = "me")]
    pub from_current_user: bool,
}

impl ChatMessage {
    pub fn mine(text: &str) -> Self {
        Self {
            sender: CURRENT_USER.to_string(),
            text: text.to_string(),
            from_current_user: true,
        }
    }

    pub fn from_teammate(sender: &str, text: &str) -> Self {
        Self {
            sender: sender.to_string(),
            text: text.to_string(),
            from_current_user: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was blank after trimming.
    Ignored,
    Sent { reply: Option<Deferred> },
}

pub struct ChatEngine<S> {
    store: ChatStore<S>,
    messages: Vec<ChatMessage>,
}

impl<S: KeyValueStore> ChatEngine<S> {
    /// Loads the stored history, seeding (and persisting) the default
    /// conversation when there is none.
    pub fn load_or_seed(store: ChatStore<S>) -> Self {
        let messages = match store.load() {
            Some(messages) => messages,
            None => {
                info!("No stored chat history, seeding default conversation");
                let seed = seed_messages();
                store.save(&seed);
                seed
            }
        };
        Self { store, messages }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn render(&self, view: &mut impl DemoView) {
        view.render_chat(&render_markup(&self.messages));
        view.scroll_chat_to_bottom();
    }

    pub fn send(
        &mut self,
        raw_text: &str,
        view: &mut impl DemoView,
        random: &mut impl RandomSource,
    ) -> SendOutcome {
        let text = raw_text.trim();
        if text.is_empty() {
            return SendOutcome::Ignored;
        }

        self.messages.push(ChatMessage::mine(text));
        self.store.save(&self.messages);
        view.clear_chat_input();
        self.render(view);

        let reply = simulated_reply(self.messages.len(), random);
        if let Some(reply) = &reply {
            debug!("Teammate reply due in {}ms", reply.delay_ms);
        }
        SendOutcome::Sent { reply }
    }

    pub fn deliver_reply(&mut self, message: ChatMessage, view: &mut impl DemoView) {
        self.messages.push(message);
        self.store.save(&self.messages);
        self.render(view);
    }
}

/// One reply from the pool when `count` is a multiple of `REPLY_EVERY`.
fn simulated_reply(count: usize, random: &mut impl RandomSource) -> Option<Deferred> {
    if count % REPLY_EVERY != 0 {
        return None;
    }
    let spread = (random.next_f64() * f64::from(REPLY_DELAY_SPREAD_MS)) as u32;
    let (sender, text) = REPLIES[random.pick(REPLIES.len())];
    Some(Deferred {
        delay_ms: REPLY_DELAY_MIN_MS + spread.min(REPLY_DELAY_SPREAD_MS - 1),
        task: DeferredTask::DeliverReply(ChatMessage::from_teammate(sender, text)),
    })
}

pub fn render_markup(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| {
            if m.from_current_user {
                format!("<div class=\"chat-msg me\">{}</div>", escape_html(&m.text))
            } else {
                format!(
                    "<div class=\"chat-msg them\"><div class=\"chat-sender\">{}</div>{}</div>",
                    escape_html(&m.sender),
                    escape_html(&m.text)
                )
            }
        })
        .collect()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::schedule::SequenceRandom;
    use crate::demo::storage::memory::MemoryStorage;
    use crate::demo::view::recording::{RecordingView, ViewCall};

    const KEY: &str = "test_chat";

    fn engine(memory: &MemoryStorage) -> ChatEngine<MemoryStorage> {
        ChatEngine::load_or_seed(ChatStore::new(memory.clone(), KEY))
    }

    fn reply_of(outcome: SendOutcome) -> Option<ChatMessage> {
        match outcome {
            SendOutcome::Sent {
                reply: Some(Deferred {
                    task: DeferredTask::DeliverReply(message),
                    ..
                }),
            } => Some(message),
            _ => None,
        }
    }

    #[test]
    fn empty_store_is_seeded_and_persisted() {
        let memory = MemoryStorage::new();
        let chat = engine(&memory);
        assert_eq!(chat.messages(), seed_messages().as_slice());

        let stored: Vec<ChatMessage> = serde_json::from_str(&memory.raw(KEY).unwrap()).unwrap();
        assert_eq!(stored, seed_messages());
    }

    #[test]
    fn corrupt_store_is_replaced_by_seed() {
        let memory = MemoryStorage::new();
        memory.put_raw(KEY, "[{\"sender\":");
        let chat = engine(&memory);
        assert_eq!(chat.messages().len(), 6);
        assert!(serde_json::from_str::<Vec<ChatMessage>>(&memory.raw(KEY).unwrap()).is_ok());
    }

    #[test]
    fn stored_history_wins_over_seed() {
        let memory = MemoryStorage::new();
        memory.put_raw(KEY, r#"[{"sender":"Sarah L.","text":"Rematch?","me":false}]"#);
        let chat = engine(&memory);
        assert_eq!(
            chat.messages(),
            &[ChatMessage::from_teammate("Sarah L.", "Rematch?")]
        );
    }

    #[test]
    fn sent_message_survives_reload() {
        let memory = MemoryStorage::new();
        let mut view = RecordingView::new();
        let mut random = SequenceRandom::new(&[0.5]);

        let mut chat = engine(&memory);
        chat.send("  hello ", &mut view, &mut random);

        let reloaded = engine(&memory);
        assert_eq!(reloaded.messages().last(), Some(&ChatMessage::mine("hello")));
        assert_eq!(reloaded.messages().len(), 7);
    }

    #[test]
    fn send_clears_input_then_renders_and_scrolls() {
        let memory = MemoryStorage::new();
        let mut view = RecordingView::new();
        let mut random = SequenceRandom::new(&[0.5]);

        let mut chat = engine(&memory);
        chat.send("hello", &mut view, &mut random);
        assert_eq!(
            view.calls,
            vec![ViewCall::ClearInput, ViewCall::RenderChat, ViewCall::ScrollChat]
        );
        assert!(view.chat_markup.ends_with("<div class=\"chat-msg me\">hello</div>"));
    }

    #[test]
    fn blank_send_changes_nothing() {
        let memory = MemoryStorage::new();
        let mut view = RecordingView::new();
        let mut random = SequenceRandom::new(&[0.5]);

        let mut chat = engine(&memory);
        let before = memory.raw(KEY);
        for blank in ["", "   ", "\n\t "] {
            assert_eq!(chat.send(blank, &mut view, &mut random), SendOutcome::Ignored);
        }
        assert_eq!(chat.messages(), seed_messages().as_slice());
        assert_eq!(memory.raw(KEY), before);
        assert!(view.calls.is_empty());
    }

    #[test]
    fn exactly_one_reply_after_three_sends_from_seed() {
        let memory = MemoryStorage::new();
        let mut view = RecordingView::new();
        let mut random = SequenceRandom::new(&[0.3, 0.7, 0.1]);

        let mut chat = engine(&memory);
        let replies: Vec<_> = ["one", "two", "three"]
            .iter()
            .filter_map(|text| reply_of(chat.send(text, &mut view, &mut random)))
            .collect();
        assert_eq!(replies.len(), 1);

        let reply = replies.into_iter().next().unwrap();
        chat.deliver_reply(reply.clone(), &mut view);

        assert_eq!(chat.messages().len(), 10);
        assert_eq!(chat.messages().last(), Some(&reply));
        assert!(!reply.from_current_user);
        assert!(REPLIES
            .iter()
            .any(|(sender, text)| reply.sender == *sender && reply.text == *text));
        assert_eq!(engine(&memory).messages().len(), 10);
    }

    #[test]
    fn reply_delay_and_choice_follow_random_source() {
        let mut random = SequenceRandom::new(&[0.0, 0.0]);
        let early = simulated_reply(9, &mut random).unwrap();
        assert_eq!(early.delay_ms, 800);
        assert_eq!(
            early.task,
            DeferredTask::DeliverReply(ChatMessage::from_teammate("Mike K.", "Sounds good!"))
        );

        let mut random = SequenceRandom::new(&[0.999_999, 0.999_999]);
        let late = simulated_reply(3, &mut random).unwrap();
        assert!(late.delay_ms >= 800 && late.delay_ms < 1400);
        assert_eq!(
            late.task,
            DeferredTask::DeliverReply(ChatMessage::from_teammate(
                "Mike K.",
                "See you on the court!"
            ))
        );

        assert_eq!(simulated_reply(7, &mut random), None);
    }

    #[test]
    fn script_text_is_stored_verbatim_but_rendered_inert() {
        let memory = MemoryStorage::new();
        let mut view = RecordingView::new();
        let mut random = SequenceRandom::new(&[0.5]);
        let payload = "<script>alert(1)</script>";

        let mut chat = engine(&memory);
        chat.send(payload, &mut view, &mut random);

        assert_eq!(engine(&memory).messages().last().unwrap().text, payload);
        assert!(!view.chat_markup.contains("<script"));
        assert!(view
            .chat_markup
            .contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn teammate_bubbles_carry_escaped_sender_label() {
        let markup = render_markup(&[
            ChatMessage::from_teammate("Tom & Jerry", "<b>hi</b>"),
            ChatMessage::mine("it's me"),
        ]);
        assert_eq!(
            markup,
            "<div class=\"chat-msg them\"><div class=\"chat-sender\">Tom &amp; Jerry</div>\
             &lt;b&gt;hi&lt;/b&gt;</div><div class=\"chat-msg me\">it&#39;s me</div>"
        );
    }
}
