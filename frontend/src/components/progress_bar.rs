use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Percent of the document scrolled, 0 to 100.
    pub percent: f64,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div
            id="scrollProgress"
            class="scroll-progress"
            style={format!("width: {}%;", props.percent.clamp(0.0, 100.0))}
        />
    }
}
