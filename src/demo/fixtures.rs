use crate::demo::chat::ChatMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct League {
    pub icon: &'static str,
    pub name: &'static str,
    pub details: &'static str,
    pub status: &'static str,
    pub background: &'static str,
}

pub static LEAGUES: [League; 3] = [
    League {
        icon: "🏆",
        name: "Summer Doubles League",
        details: "16 teams • Round Robin",
        status: "Week 4 of 8",
        background: "#FEF3C7",
    },
    League {
        icon: "🥇",
        name: "3.5 Ladder Challenge",
        details: "32 players • Ladder",
        status: "Rank: #8",
        background: "#E0E7FF",
    },
    League {
        icon: "🎯",
        name: "Mixed Doubles Open",
        details: "8 teams • Bracket",
        status: "Registration Open",
        background: "#D1FAE5",
    },
];

/// League at `index`, or the first league when `index` is out of range.
pub fn league_at(index: isize) -> &'static League {
    usize::try_from(index)
        .ok()
        .and_then(|i| LEAGUES.get(i))
        .unwrap_or(&LEAGUES[0])
}

/// (sender, text) pairs the simulated teammates answer with.
pub const REPLIES: [(&str, &str); 4] = [
    ("Mike K.", "Sounds good!"),
    ("Sarah L.", "Love it!"),
    ("James R.", "Awesome, can't wait!"),
    ("Mike K.", "See you on the court!"),
];

/// The conversation shown when nothing has been stored yet.
pub fn seed_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::from_teammate("Mike K.", "Hey team! Who's ready for Saturday's match?"),
        ChatMessage::from_teammate("Sarah L.", "Count me in! Central Park at 10am right?"),
        ChatMessage::mine("I'll be there. Should we warm up at 9:30?"),
        ChatMessage::from_teammate("Mike K.", "Great idea. Let's do it!"),
        ChatMessage::from_teammate("James R.", "I can bring extra balls and my portable net"),
        ChatMessage::mine("Perfect, see everyone Saturday!"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_index_falls_back_to_first_league() {
        assert_eq!(league_at(1).name, "3.5 Ladder Challenge");
        assert_eq!(league_at(-1), league_at(0));
        assert_eq!(league_at(3), league_at(0));
        assert_eq!(league_at(isize::MAX), league_at(0));
    }

    #[test]
    fn seed_has_six_messages_two_of_them_mine() {
        let seed = seed_messages();
        assert_eq!(seed.len(), 6);
        assert_eq!(seed.iter().filter(|m| m.from_current_user).count(), 2);
        assert!(seed.iter().filter(|m| m.from_current_user).all(|m| m.sender == "You"));
    }
}
