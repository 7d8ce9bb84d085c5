/// Top-level screens of the demo phone, one per tab bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Explore,
    Leagues,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Explore, Tab::Leagues, Tab::Profile];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Explore => "explore",
            Tab::Leagues => "leagues",
            Tab::Profile => "profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Explore => "Explore",
            Tab::Leagues => "Leagues",
            Tab::Profile => "Profile",
        }
    }
}

/// Sub-tabs of the league detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Overview,
    Standings,
    Schedule,
    Chat,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Standings,
        DetailTab::Schedule,
        DetailTab::Chat,
    ];

    pub fn id(self) -> &'static str {
        match self {
            DetailTab::Overview => "overview",
            DetailTab::Standings => "standings",
            DetailTab::Schedule => "schedule",
            DetailTab::Chat => "chat",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Standings => "Standings",
            DetailTab::Schedule => "Schedule",
            DetailTab::Chat => "Chat",
        }
    }
}

/// The detail overlay sits on top of `current_tab` without replacing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_tab: Tab,
    pub detail_open: bool,
    pub current_detail_tab: DetailTab,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_tab: Tab::Home,
            detail_open: false,
            current_detail_tab: DetailTab::Overview,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert!(Tab::ALL[i + 1..].iter().all(|other| other.id() != tab.id()));
        }
        for (i, tab) in DetailTab::ALL.iter().enumerate() {
            assert!(DetailTab::ALL[i + 1..].iter().all(|other| other.id() != tab.id()));
        }
    }

    #[test]
    fn starts_on_home_with_overlay_closed() {
        let state = NavigationState::default();
        assert_eq!(state.current_tab, Tab::Home);
        assert!(!state.detail_open);
        assert_eq!(state.current_detail_tab, DetailTab::Overview);
    }
}
