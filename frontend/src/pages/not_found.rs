use crate::Route;
use yew::prelude::*;
use yew_router::components::Link;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="hero-cta">
                {"Back to the home page"}
            </Link<Route>>
        </div>
    }
}
