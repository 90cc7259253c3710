use crate::dom::scroll_to_top;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScrollTopButtonProps {
    pub visible: bool,
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button(props: &ScrollTopButtonProps) -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    html! {
        <>
            <button
                class={classes!("scroll-to-top", props.visible.then(|| "visible"))}
                aria-label="Back to top"
                {onclick}
            >
                {"↑"}
            </button>
            <style>
                {r#"
                .scroll-to-top {
                    position: fixed;
                    bottom: 30px;
                    right: 30px;
                    width: 50px;
                    height: 50px;
                    border: none;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #00d4ff, #0099cc);
                    color: white;
                    font-size: 20px;
                    cursor: pointer;
                    opacity: 0;
                    transform: translateY(20px);
                    pointer-events: none;
                    transition: all 0.3s ease;
                    z-index: 1000;
                    box-shadow: 0 4px 15px rgba(0, 212, 255, 0.3);
                }
                .scroll-to-top.visible {
                    opacity: 1;
                    transform: translateY(0);
                    pointer-events: auto;
                }
                "#}
            </style>
        </>
    }
}
