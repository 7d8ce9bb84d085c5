use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod components {
    pub mod carousel;
    pub mod feature_tabs;
    pub mod nav;
    pub mod scroll;
}
mod demo {
    pub mod chat;
    pub mod controller;
    pub mod fixtures;
    pub mod navigation;
    pub mod page;
    pub mod schedule;
    pub mod storage;
    pub mod view;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use demo::page::Demo;
use pages::{landing::Landing, not_found::NotFound};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/demo")]
    Demo,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Demo => {
            info!("Rendering Demo page");
            html! { <Demo /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
