use crate::scroll::layout::{ContainerBox, Layout, Viewport};
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

pub const GALLERY_CONTAINER_CLASS: &str = "scroll-section";
pub const TRACK_ID: &str = "cardsTrack";
pub const CARD_CLASS: &str = "service-card";

/// [`Layout`] backed by the live document. Every call reads layout again.
pub struct DomLayout {
    window: Window,
    document: Document,
}

impl DomLayout {
    pub fn new(window: &Window) -> Option<Self> {
        let document = window.document()?;
        Some(Self {
            window: window.clone(),
            document,
        })
    }
}

fn as_px(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

impl Layout for DomLayout {
    fn scroll_offset(&self) -> f64 {
        self.window
            .scroll_y()
            .ok()
            .or_else(|| {
                self.document
                    .document_element()
                    .map(|el| el.scroll_top() as f64)
            })
            .unwrap_or(0.0)
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            width: as_px(self.window.inner_width()),
            height: as_px(self.window.inner_height()),
        }
    }

    fn document_height(&self) -> f64 {
        self.document
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0)
    }

    fn section_offset(&self, id: &str) -> Option<f64> {
        let section = self.document.get_element_by_id(id)?;
        let section = section.dyn_into::<HtmlElement>().ok()?;
        Some(section.offset_top() as f64)
    }

    fn gallery_container(&self) -> Option<ContainerBox> {
        let container = self
            .document
            .query_selector(&format!(".{}", GALLERY_CONTAINER_CLASS))
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(ContainerBox {
            top: container.offset_top() as f64,
            height: container.offset_height() as f64,
        })
    }

    fn card_count(&self) -> usize {
        self.document
            .query_selector_all(&format!(".{}", CARD_CLASS))
            .map(|cards| cards.length() as usize)
            .unwrap_or(0)
    }
}

/// `document.readyState` once every subresource, and so `load`, is done.
pub fn document_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Smoothly scrolls the section with `id` to the top of the viewport.
pub fn scroll_to_section(id: &str) {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    if let Some(target) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        debug!("No section #{} to scroll to", id);
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_complete_counts_as_loaded() {
        assert!(document_loaded("complete"));
        assert!(!document_loaded("interactive"));
        assert!(!document_loaded("loading"));
    }
}
