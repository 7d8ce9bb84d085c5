use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Node};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll::scroll_to_anchor;
use crate::Route;

/// Mobile menu open/closed state and the toggle glyph that goes with it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn icon(self) -> &'static str {
        if self.open {
            "✕"
        } else {
            "☰"
        }
    }
}

const NAV_LINKS: [(&str, &str); 3] = [
    ("#features", "Features"),
    ("#preview", "Preview"),
    ("#download", "Download"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state_eq(MenuState::default);
    let toggle_ref = use_node_ref();
    let links_ref = use_node_ref();

    // Close the menu on any click outside the toggle and the links.
    {
        let menu = menu.clone();
        let toggle_ref = toggle_ref.clone();
        let links_ref = links_ref.clone();
        use_effect_with_deps(
            move |_| {
                let document = window().and_then(|w| w.document());
                let click_callback = Closure::wrap(Box::new(move |e: web_sys::Event| {
                    let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                        return;
                    };
                    let inside = |r: &NodeRef| r.get().map_or(false, |n| n.contains(Some(&target)));
                    if !inside(&toggle_ref) && !inside(&links_ref) {
                        menu.set(MenuState::closed());
                    }
                }) as Box<dyn FnMut(web_sys::Event)>);

                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "click",
                        click_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            click_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };

    let follow_link = |href: &'static str| {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(href);
            menu.set(MenuState::closed());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(MenuState::closed()))
    };

    html! {
        <nav class="navbar">
            <div class="nav-content">
                <a href="#" class="nav-logo">{"🏓 PickleCue"}</a>
                <button class="nav-toggle" ref={toggle_ref} onclick={toggle_menu} aria-label="Toggle menu">
                    {menu.icon()}
                </button>
                <div class={classes!("nav-links", menu.is_open().then(|| "active"))} ref={links_ref}>
                    { for NAV_LINKS.iter().map(|&(href, label)| html! {
                        <a href={href} onclick={follow_link(href)}>{label}</a>
                    }) }
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Demo} classes="nav-cta">
                            {"Try the demo"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_swaps_icon() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), "☰");

        let opened = menu.toggled();
        assert!(opened.is_open());
        assert_eq!(opened.icon(), "✕");
        assert_eq!(opened.toggled(), MenuState::closed());
    }
}
