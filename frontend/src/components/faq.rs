use crate::config::FaqConfig;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Only one answer is open at a time; clicking the open one closes it.
pub fn toggle_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub items: Vec<FaqConfig>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq-list">
            { for props.items.iter().enumerate().map(|(i, item)| {
                let is_open = *open == Some(i);
                let toggle = {
                    let open = open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open.set(toggle_open(*open, i));
                    })
                };
                html! {
                    <div class={classes!("faq-item", is_open.then(|| "active"))}>
                        <button class="faq-question" onclick={toggle}>
                            <span class="question-text">{&item.question}</span>
                            <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                        </button>
                        <div class="faq-answer">
                            <p>{&item.answer}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
