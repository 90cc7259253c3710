use crate::config::CardConfig;
use crate::dom::{CARD_CLASS, GALLERY_CONTAINER_CLASS, TRACK_ID};
use crate::scroll::TrackState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardTrackProps {
    pub cards: Vec<CardConfig>,
    pub track: Option<TrackState>,
    #[prop_or_default]
    pub children: Children,
}

fn track_style(track: Option<TrackState>) -> Option<String> {
    track.map(|t| format!("width: {}px; transform: translateX({}px);", t.width, t.translation))
}

/// Cards that slide sideways while the page scrolls through the pinned container.
#[function_component(CardTrack)]
pub fn card_track(props: &CardTrackProps) -> Html {
    let index = props.track.map(|t| t.index);

    html! {
        <div class={classes!(GALLERY_CONTAINER_CLASS, props.track.is_none().then(|| "stacked"))}>
            <div class="sticky-wrapper">
                <div id={TRACK_ID} class="cards-track" style={track_style(props.track)}>
                    { for props.cards.iter().map(|card| html! {
                        <article class={CARD_CLASS}>
                            <h3>{&card.title}</h3>
                            <p>{&card.description}</p>
                        </article>
                    }) }
                    <div class="track-end">
                        { for props.children.iter() }
                    </div>
                </div>
                if let Some(index) = index {
                    <div class="track-indicator">
                        { for (0..props.cards.len()).map(|i| html! {
                            <span class={classes!(
                                "indicator-dot",
                                (i < index).then(|| "passed"),
                                (i == index).then(|| "current")
                            )}></span>
                        }) }
                    </div>
                }
            </div>

            <style>
                {r#"
                .scroll-section {
                    position: relative;
                    height: 300vh;
                }
                .scroll-section.stacked {
                    height: auto;
                }
                .sticky-wrapper {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }
                .scroll-section.stacked .sticky-wrapper {
                    position: static;
                    height: auto;
                    overflow: visible;
                }
                .cards-track {
                    display: flex;
                    gap: 32px;
                    padding-left: 5vw;
                    will-change: transform;
                }
                .scroll-section.stacked .cards-track {
                    flex-direction: column;
                    padding: 0 1.5rem;
                }
                .service-card {
                    flex: 0 0 420px;
                    min-height: 320px;
                    padding: 2rem;
                    border-radius: 18px;
                    background: rgba(255, 255, 255, 0.06);
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    transition: transform 0.3s ease;
                }
                .scroll-section.stacked .service-card {
                    flex: none;
                    min-height: 0;
                }
                .track-end {
                    flex: 0 0 100vw;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .scroll-section.stacked .track-end {
                    flex: none;
                }
                .track-indicator {
                    display: flex;
                    gap: 0.5rem;
                    justify-content: center;
                    margin-top: 2rem;
                }
                .indicator-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.25);
                }
                .indicator-dot.passed {
                    background: rgba(0, 212, 255, 0.5);
                }
                .indicator-dot.current {
                    background: #00d4ff;
                }
                "#}
            </style>
        </div>
    }
}
