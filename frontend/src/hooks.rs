use crate::config::SiteConfig;
use crate::dom::{document_loaded, DomLayout};
use crate::scroll::{compute_state, frame::FrameGate, PageState};
use log::{debug, info, warn};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

fn log_load_time(window: &Window) {
    if let Some(performance) = window.performance() {
        info!("Page loaded in {}ms", performance.now().round());
    }
}

/// Tracks the scroll-driven [`PageState`] for the current page.
///
/// Scroll and load events are coalesced to one evaluation per animation
/// frame; resize evaluates immediately so the track width is never stale.
/// A render that pins or unpins the gallery is measured again right after
/// it lands, since every offset below the gallery moves with it.
#[hook]
pub fn use_page_scroll(config: Rc<SiteConfig>) -> PageState {
    let state = use_state(PageState::default);
    let published = use_mut_ref(PageState::default);
    let refresh = use_mut_ref(|| None::<Rc<dyn Fn()>>);

    {
        let state = state.clone();
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |config: &Rc<SiteConfig>| {
                let config = config.clone();
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let section_count = config.sections.len();
                    let sections = config.section_ids();

                    let evaluate: Rc<dyn Fn()> = {
                        let window = window.clone();
                        Rc::new(move || {
                            // missing document means nothing to measure yet
                            if let Some(layout) = DomLayout::new(&window) {
                                let next = compute_state(
                                    &layout,
                                    &config.scroll,
                                    &sections,
                                    &published.borrow(),
                                );
                                let changed = next != *published.borrow();
                                if changed {
                                    *published.borrow_mut() = next.clone();
                                    state.set(next);
                                }
                            }
                        })
                    };

                    *refresh.borrow_mut() = Some(evaluate.clone());

                    let gate = Rc::new(FrameGate::default());
                    let on_frame = {
                        let gate = gate.clone();
                        let evaluate = evaluate.clone();
                        Rc::new(Closure::<dyn FnMut()>::new(move || {
                            gate.release();
                            evaluate();
                        }))
                    };

                    let schedule: Rc<dyn Fn()> = {
                        let window = window.clone();
                        let gate = gate.clone();
                        let on_frame = on_frame.clone();
                        Rc::new(move || {
                            if !gate.try_acquire() {
                                return;
                            }
                            match window.request_animation_frame((*on_frame).as_ref().unchecked_ref()) {
                                Ok(handle) => gate.set_handle(handle),
                                Err(err) => {
                                    warn!("requestAnimationFrame failed: {:?}", err);
                                    gate.release();
                                }
                            }
                        })
                    };

                    let on_scroll = {
                        let schedule = schedule.clone();
                        Closure::<dyn FnMut()>::new(move || schedule())
                    };
                    let on_resize = {
                        let evaluate = evaluate.clone();
                        Closure::<dyn FnMut()>::new(move || evaluate())
                    };
                    let on_load = {
                        let window = window.clone();
                        Closure::<dyn FnMut()>::new(move || {
                            log_load_time(&window);
                            schedule();
                        })
                    };

                    let listeners = vec![("scroll", on_scroll), ("resize", on_resize), ("load", on_load)];
                    for (event, callback) in &listeners {
                        if let Err(err) = window
                            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                        {
                            warn!("Failed to listen for {}: {:?}", event, err);
                        }
                    }
                    debug!("Scroll tracking {} sections", section_count);

                    // the wasm bundle usually starts after `load` already fired
                    let loaded = window
                        .document()
                        .map_or(false, |d| document_loaded(&d.ready_state()));
                    if loaded {
                        log_load_time(&window);
                    }

                    // Initial check
                    evaluate();

                    Box::new(move || {
                        for (event, callback) in &listeners {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                        if let Some(handle) = gate.take_pending() {
                            let _ = window.cancel_animation_frame(handle);
                        }
                        drop(on_frame);
                        refresh.borrow_mut().take();
                    })
                } else {
                    Box::new(|| ())
                };

                move || {
                    destructor();
                }
            },
            config,
        );
    }

    {
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |_| {
                let evaluate = refresh.borrow().clone();
                if let Some(evaluate) = evaluate {
                    evaluate();
                }
                || ()
            },
            state.gallery_pinned(),
        );
    }

    (*state).clone()
}
