use crate::config::SectionConfig;
use crate::dom::scroll_to_section;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub sections: Vec<SectionConfig>,
    pub active: Option<String>,
}

/// Side rail with one step per section; the step of the section being read is highlighted.
#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    let last = props.sections.len().saturating_sub(1);

    html! {
        <aside class="section-timeline">
            { for props.sections.iter().enumerate().map(|(i, section)| {
                let is_active = props.active.as_deref() == Some(section.id.as_str());
                let onclick = {
                    let id = section.id.clone();
                    Callback::from(move |_: MouseEvent| scroll_to_section(&id))
                };
                html! {
                    <div
                        class={classes!("timeline-step", is_active.then(|| "active"))}
                        data-section={section.id.clone()}
                        title={section.label.clone()}
                        {onclick}
                    >
                        <span class={classes!("step-dot", is_active.then(|| "active"))}></span>
                        if i < last {
                            <span class={classes!("step-connector", is_active.then(|| "active"))}></span>
                        }
                    </div>
                }
            }) }
        </aside>
    }
}
