//! Scroll-position math for the landing page.
//!
//! Everything in here is pure: a [`Layout`] supplies the measurements and
//! [`compute_state`] turns them into the [`PageState`] the components render.

pub mod frame;
pub mod layout;

use crate::config::ScrollConfig;
use layout::{ContainerBox, Layout};

/// What the page should look like for the current scroll position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    /// Navbar switches to its compact style.
    pub scrolled: bool,
    /// Read progress of the whole document in percent.
    pub progress: f64,
    /// Vertical offset applied to the hero content.
    pub parallax: f64,
    pub show_scroll_top: bool,
    pub active_section: Option<String>,
    /// `None` while the horizontal gallery is inactive.
    pub track: Option<TrackState>,
}

impl PageState {
    /// Whether the gallery renders pinned (sliding) rather than stacked.
    pub fn gallery_pinned(&self) -> bool {
        self.track.is_some()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackState {
    /// Total width of the card track including the terminal slot.
    pub width: f64,
    /// Horizontal translation, always within `[-viewport width, 0]`.
    pub translation: f64,
    pub index: usize,
}

/// Scroll range over which the gallery slides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRegion {
    pub top: f64,
    pub bottom: f64,
}

impl ScrollRegion {
    /// The region starts at the container top and ends one viewport before its bottom.
    pub fn from_container(container: ContainerBox, viewport_height: f64) -> Self {
        Self {
            top: container.top,
            bottom: container.top + container.height - viewport_height,
        }
    }

    /// Progress through the region in `[0, 1]`.
    ///
    /// `None` when the offset lies outside the region or the region has no
    /// height; callers keep their previous state in that case.
    pub fn progress(&self, offset: f64) -> Option<f64> {
        let span = self.bottom - self.top;
        if !(span > 0.0) || !offset.is_finite() {
            return None;
        }
        if offset < self.top || offset > self.bottom {
            return None;
        }
        Some(((offset - self.top) / span).clamp(0.0, 1.0))
    }
}

/// Last section whose top is at or above `position`, or the first section
/// when none has been reached yet. Sections without an offset are skipped.
pub fn active_section<'a, I>(sections: I, position: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, Option<f64>)>,
{
    let mut sections = sections.into_iter();
    let (mut active, _) = sections.next()?;

    for (name, offset) in sections {
        if let Some(top) = offset {
            if position >= top {
                active = name;
            }
        }
    }
    Some(active)
}

/// Total track width: every card plus its gap, minus the trailing gap, plus
/// a terminal slot one viewport wide.
pub fn track_width(card_count: usize, card_width: f64, card_gap: f64, viewport_width: f64) -> f64 {
    if card_count == 0 {
        return viewport_width;
    }
    card_count as f64 * (card_width + card_gap) - card_gap + viewport_width
}

/// Translation of the track for `progress`. The full slide of one viewport
/// width completes at `threshold`, after which the track stays parked.
pub fn track_translation(progress: f64, threshold: f64, viewport_width: f64) -> f64 {
    let width = viewport_width.max(0.0);
    let x = if threshold > 0.0 && progress < threshold {
        -(progress / threshold) * width
    } else {
        -width
    };
    x.max(-width).min(0.0)
}

/// Card the gallery is showing, rounded half up and clamped to `[0, card_count]`.
pub fn track_index(progress: f64, threshold: f64, card_count: usize) -> usize {
    let count = card_count as f64;
    if !(threshold > 0.0) {
        return card_count;
    }
    let raw = ((progress / threshold) * count + 0.5).floor();
    raw.clamp(0.0, count) as usize
}

/// Document read progress in percent. Non-scrollable documents report 0.
pub fn page_progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !(scrollable > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable * 100.0).clamp(0.0, 100.0)
}

fn evaluate_track<L: Layout + ?Sized>(
    layout: &L,
    config: &ScrollConfig,
    previous: Option<TrackState>,
) -> Option<TrackState> {
    let viewport = layout.viewport();
    if viewport.width <= config.mobile_breakpoint {
        return None;
    }
    let cards = layout.card_count();
    if cards == 0 {
        return None;
    }
    let container = layout.gallery_container()?;

    let mut track = previous.unwrap_or_default();
    track.width = track_width(cards, config.card_width, config.card_gap, viewport.width);
    // a retained value must still respect the bound of the current viewport
    track.translation = track.translation.max(-viewport.width).min(0.0);
    track.index = track.index.min(cards);

    let region = ScrollRegion::from_container(container, viewport.height);
    if let Some(progress) = region.progress(layout.scroll_offset()) {
        track.translation = track_translation(progress, config.threshold, viewport.width);
        track.index = track_index(progress, config.threshold, cards);
    }
    Some(track)
}

/// Evaluates every scroll-driven value against the current layout.
///
/// `sections` are ids in page order. Values that are only updated inside
/// their scroll range (the gallery) are carried over from `previous`.
pub fn compute_state<L: Layout + ?Sized>(
    layout: &L,
    config: &ScrollConfig,
    sections: &[String],
    previous: &PageState,
) -> PageState {
    let offset = layout.scroll_offset();
    let viewport = layout.viewport();

    let registry = sections
        .iter()
        .map(|id| (id.as_str(), layout.section_offset(id)));
    let active_section = active_section(registry, offset + config.lead_in).map(str::to_string);

    PageState {
        scrolled: offset > config.navbar_offset,
        progress: page_progress(offset, layout.document_height(), viewport.height),
        parallax: offset * config.parallax_factor,
        show_scroll_top: offset > config.scroll_top_offset,
        active_section,
        track: evaluate_track(layout, config, previous.track),
    }
}

#[cfg(test)]
mod tests {
    use super::layout::Viewport;
    use super::*;
    use std::collections::HashMap;

    struct FakeLayout {
        offset: f64,
        viewport: Viewport,
        document_height: f64,
        sections: HashMap<String, f64>,
        container: Option<ContainerBox>,
        cards: usize,
    }

    impl FakeLayout {
        fn new(offset: f64) -> Self {
            Self {
                offset,
                viewport: Viewport { width: 1000.0, height: 800.0 },
                document_height: 6000.0,
                sections: HashMap::new(),
                container: Some(ContainerBox { top: 1000.0, height: 2800.0 }),
                cards: 4,
            }
        }
    }

    impl Layout for FakeLayout {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }
        fn viewport(&self) -> Viewport {
            self.viewport
        }
        fn document_height(&self) -> f64 {
            self.document_height
        }
        fn section_offset(&self, id: &str) -> Option<f64> {
            self.sections.get(id).copied()
        }
        fn gallery_container(&self) -> Option<ContainerBox> {
            self.container
        }
        fn card_count(&self) -> usize {
            self.cards
        }
    }

    // With the fake defaults the region runs from 1000 to 3000.
    const TOP: f64 = 1000.0;
    const BOTTOM: f64 = 3000.0;

    fn track_at(offset: f64, previous: Option<TrackState>) -> Option<TrackState> {
        let layout = FakeLayout::new(offset);
        let previous = PageState { track: previous, ..PageState::default() };
        compute_state(&layout, &ScrollConfig::default(), &[], &previous).track
    }

    #[test]
    fn active_section_uses_lead_in() {
        let registry = [("A", Some(0.0)), ("B", Some(500.0)), ("C", Some(1200.0))];
        let lead_in = 200.0;

        assert_eq!(active_section(registry, 250.0 + lead_in), Some("A"));
        assert_eq!(active_section(registry, 350.0 + lead_in), Some("B"));
        assert_eq!(active_section(registry, 1000.0 + lead_in), Some("C"));
    }

    #[test]
    fn active_section_defaults_to_first() {
        let registry = [("hero", Some(100.0)), ("next", Some(900.0))];
        assert_eq!(active_section(registry, 0.0), Some("hero"));
        assert_eq!(active_section(std::iter::empty(), 0.0), None);
    }

    #[test]
    fn active_section_skips_missing_elements() {
        let registry = [("A", Some(0.0)), ("B", None), ("C", Some(400.0))];
        assert_eq!(active_section(registry, 300.0), Some("A"));
        assert_eq!(active_section(registry, 450.0), Some("C"));

        let registry = [("A", None), ("B", Some(500.0))];
        assert_eq!(active_section(registry, 100.0), Some("A"));
    }

    #[test]
    fn compute_state_reads_sections_through_layout() {
        let mut layout = FakeLayout::new(350.0);
        layout.sections.insert("A".into(), 0.0);
        layout.sections.insert("B".into(), 500.0);
        layout.sections.insert("C".into(), 1200.0);
        let sections = vec!["A".to_string(), "B".to_string(), "C".to_string()];

        let state = compute_state(&layout, &ScrollConfig::default(), &sections, &PageState::default());
        assert_eq!(state.active_section.as_deref(), Some("B"));

        // reflow moves B further down; the next evaluation must see it
        layout.sections.insert("B".into(), 600.0);
        let state = compute_state(&layout, &ScrollConfig::default(), &sections, &state);
        assert_eq!(state.active_section.as_deref(), Some("A"));
    }

    #[test]
    fn track_width_includes_terminal_slot() {
        assert_eq!(track_width(4, 420.0, 32.0, 1000.0), 2776.0);
        assert_eq!(track_width(1, 420.0, 32.0, 1000.0), 1420.0);
        assert_eq!(track_width(0, 420.0, 32.0, 1000.0), 1000.0);
    }

    #[test]
    fn translation_stays_within_bounds() {
        let mut offset = TOP;
        while offset <= BOTTOM {
            let track = track_at(offset, None).unwrap();
            assert!(track.translation <= 0.0, "offset {offset}");
            assert!(track.translation >= -1000.0, "offset {offset}");
            offset += 37.0;
        }
    }

    #[test]
    fn translation_is_non_increasing_before_threshold() {
        let threshold = 0.85;
        let mut last = 0.0;
        for step in 0..=85 {
            let progress = step as f64 / 100.0;
            let x = track_translation(progress, threshold, 1000.0);
            assert!(x <= last, "progress {progress}: {x} > {last}");
            last = x;
        }
    }

    #[test]
    fn translation_parks_at_threshold() {
        assert_eq!(track_translation(0.0, 0.85, 1000.0), 0.0);
        assert_eq!(track_translation(0.85, 0.85, 1000.0), -1000.0);
        assert_eq!(track_translation(0.95, 0.85, 1000.0), -1000.0);
        assert_eq!(track_translation(1.0, 0.85, 1000.0), -1000.0);
    }

    #[test]
    fn translation_tolerates_bad_inputs() {
        assert_eq!(track_translation(0.5, 0.0, 1000.0), -1000.0);
        assert_eq!(track_translation(0.5, 0.85, -10.0), 0.0);
    }

    #[test]
    fn index_rounds_half_up() {
        // 0.425 / 0.85 * 5 is exactly 2.5
        assert_eq!(track_index(0.425, 0.85, 5), 3);
        assert_eq!(track_index(0.0, 0.85, 5), 0);
        assert_eq!(track_index(0.2, 0.85, 5), 1);
    }

    #[test]
    fn index_is_clamped_to_card_count() {
        assert_eq!(track_index(1.0, 0.85, 5), 5);
        assert_eq!(track_index(0.9, 0.85, 4), 4);
    }

    #[test]
    fn region_progress_spans_zero_to_one() {
        let region = ScrollRegion::from_container(ContainerBox { top: 1000.0, height: 2800.0 }, 800.0);
        assert_eq!(region.bottom, 3000.0);
        assert_eq!(region.progress(1000.0), Some(0.0));
        assert_eq!(region.progress(2000.0), Some(0.5));
        assert_eq!(region.progress(3000.0), Some(1.0));
        assert_eq!(region.progress(999.0), None);
        assert_eq!(region.progress(3001.0), None);
        assert_eq!(region.progress(f64::NAN), None);
    }

    #[test]
    fn degenerate_region_has_no_progress() {
        let flat = ScrollRegion { top: 500.0, bottom: 500.0 };
        assert_eq!(flat.progress(500.0), None);

        let inverted = ScrollRegion { top: 500.0, bottom: 200.0 };
        assert_eq!(inverted.progress(300.0), None);
    }

    #[test]
    fn outside_region_keeps_previous_translation() {
        let previous = TrackState { width: 0.0, translation: -240.0, index: 2 };

        let before = track_at(TOP - 1.0, Some(previous)).unwrap();
        assert_eq!(before.translation, -240.0);
        assert_eq!(before.index, 2);
        assert_eq!(before.width, 2776.0);

        let after = track_at(BOTTOM + 500.0, Some(previous)).unwrap();
        assert_eq!(after.translation, -240.0);
    }

    #[test]
    fn flat_region_keeps_previous_translation() {
        let mut layout = FakeLayout::new(1000.0);
        // container exactly one viewport high: top == bottom
        layout.container = Some(ContainerBox { top: 1000.0, height: 800.0 });
        let previous = PageState {
            track: Some(TrackState { width: 2776.0, translation: -75.0, index: 1 }),
            ..PageState::default()
        };

        let state = compute_state(&layout, &ScrollConfig::default(), &[], &previous);
        let track = state.track.unwrap();
        assert_eq!(track.translation, -75.0);
        assert!(track.translation.is_finite());
    }

    #[test]
    fn slides_inside_region() {
        let track = track_at(TOP + 0.425 * (BOTTOM - TOP), None).unwrap();
        assert!((track.translation + 500.0).abs() < 1e-9);

        let parked = track_at(TOP + 0.9 * (BOTTOM - TOP), None).unwrap();
        assert_eq!(parked.translation, -1000.0);
        assert_eq!(parked.index, 4);
    }

    #[test]
    fn resize_reclamps_retained_translation() {
        let mut layout = FakeLayout::new(TOP - 10.0);
        layout.viewport = Viewport { width: 900.0, height: 800.0 };
        let previous = PageState {
            track: Some(TrackState { width: 2776.0, translation: -1000.0, index: 4 }),
            ..PageState::default()
        };

        let track = compute_state(&layout, &ScrollConfig::default(), &[], &previous)
            .track
            .unwrap();
        assert_eq!(track.translation, -900.0);
        assert_eq!(track.width, 4.0 * 452.0 - 32.0 + 900.0);
    }

    #[test]
    fn gallery_inactive_without_elements_or_on_mobile() {
        let mut layout = FakeLayout::new(2000.0);
        layout.cards = 0;
        assert_eq!(compute_state(&layout, &ScrollConfig::default(), &[], &PageState::default()).track, None);

        let mut layout = FakeLayout::new(2000.0);
        layout.container = None;
        assert_eq!(compute_state(&layout, &ScrollConfig::default(), &[], &PageState::default()).track, None);

        let mut layout = FakeLayout::new(2000.0);
        layout.viewport = Viewport { width: 768.0, height: 800.0 };
        assert_eq!(compute_state(&layout, &ScrollConfig::default(), &[], &PageState::default()).track, None);
    }

    #[test]
    fn pinning_the_gallery_needs_a_second_measurement() {
        let config = ScrollConfig::default();

        // mobile: gallery stacked
        let mut layout = FakeLayout::new(2000.0);
        layout.viewport = Viewport { width: 700.0, height: 800.0 };
        layout.container = Some(ContainerBox { top: 1000.0, height: 1100.0 });
        let mobile = compute_state(&layout, &config, &[], &PageState::default());
        assert!(!mobile.gallery_pinned());

        // resized wide but still measuring the stacked container: outside the region
        layout.viewport = Viewport { width: 1280.0, height: 800.0 };
        let resized = compute_state(&layout, &config, &[], &mobile);
        assert!(resized.gallery_pinned());
        assert_eq!(resized.track.unwrap().translation, 0.0);

        // after the pinned render the container is taller and the offset lands inside
        layout.container = Some(ContainerBox { top: 1000.0, height: 2400.0 });
        let remeasured = compute_state(&layout, &config, &[], &resized);
        let expected = -(0.625 / 0.85) * 1280.0;
        assert!((remeasured.track.unwrap().translation - expected).abs() < 1e-9);
        assert!(remeasured.gallery_pinned());
    }

    #[test]
    fn page_progress_guards_short_documents() {
        assert_eq!(page_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(page_progress(100.0, 500.0, 800.0), 0.0);
        assert_eq!(page_progress(2600.0, 6000.0, 800.0), 50.0);
        assert_eq!(page_progress(9000.0, 6000.0, 800.0), 100.0);
    }

    #[test]
    fn navbar_parallax_and_scroll_top_follow_offset() {
        let config = ScrollConfig::default();

        let state = compute_state(&FakeLayout::new(40.0), &config, &[], &PageState::default());
        assert!(!state.scrolled);
        assert!(!state.show_scroll_top);
        assert_eq!(state.parallax, 20.0);

        let state = compute_state(&FakeLayout::new(301.0), &config, &[], &PageState::default());
        assert!(state.scrolled);
        assert!(state.show_scroll_top);
    }
}
