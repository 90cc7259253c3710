use log::info;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod hooks;
mod scroll;
mod components {
    pub mod card_track;
    pub mod faq;
    pub mod nav;
    pub mod progress_bar;
    pub mod scroll_top;
    pub mod timeline;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use config::SiteConfig;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, config: Rc<SiteConfig>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home {config} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let config = props.config.clone();

    html! {
        <BrowserRouter>
            <Switch<Route> render={move |route: Route| switch(route, config.clone())} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let config = Rc::new(SiteConfig::load());
    info!(
        "Starting application with {} sections and {} cards",
        config.sections.len(),
        config.cards.len()
    );
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
