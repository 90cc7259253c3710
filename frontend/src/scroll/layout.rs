/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Vertical box of the container the card gallery is pinned in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerBox {
    pub top: f64,
    pub height: f64,
}

/// Live layout measurements the scroll mapper reads on every evaluation.
///
/// Nothing here is cached by implementors: reflow between two evaluations
/// must be visible in the second one.
pub trait Layout {
    fn scroll_offset(&self) -> f64;

    fn viewport(&self) -> Viewport;

    /// Full scrollable height of the document.
    fn document_height(&self) -> f64;

    /// Top offset of the section element with `id`, `None` when it isn't mounted.
    fn section_offset(&self, id: &str) -> Option<f64>;

    /// Box of the gallery container, `None` when it isn't mounted.
    fn gallery_container(&self) -> Option<ContainerBox>;

    fn card_count(&self) -> usize;
}
