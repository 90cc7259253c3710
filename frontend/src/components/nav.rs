use crate::config::SectionConfig;
use crate::dom::scroll_to_section;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: String,
    pub sections: Vec<SectionConfig>,
    pub scrolled: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |id: String| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(&id);
        })
    };

    let home_id = props.sections.first().map(|s| s.id.clone()).unwrap_or_default();

    html! {
        <nav id="navbar" class={classes!("navbar", props.scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href={format!("#{}", home_id)} class="nav-logo" onclick={go_to(home_id.clone())}>
                    {&props.brand}
                </a>

                <button id="hamburger" class="hamburger" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul id="nav-menu" class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    { for props.sections.iter().map(|section| html! {
                        <li>
                            <a href={format!("#{}", section.id)} onclick={go_to(section.id.clone())}>
                                {&section.label}
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}
