//! Single-record detail state: the project modal with its image carousel, and
//! the accordions used by skill and experience cards.

use std::collections::BTreeSet;

/// Minimum horizontal travel, in pixels, for a swipe to count as navigation.
pub const SWIPE_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Arrow keys navigate while the detail view is open.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Previous),
            "ArrowRight" => Some(Direction::Next),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Open {
        id: String,
        slide: usize,
        slide_count: usize,
        image: ImageStatus,
    },
}

/// Which record, if any, is expanded, and where its carousel is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailView {
    state: DetailState,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DetailState::Open { .. })
    }

    pub fn open_id(&self) -> Option<&str> {
        match &self.state {
            DetailState::Open { id, .. } => Some(id.as_str()),
            DetailState::Closed => None,
        }
    }

    pub fn slide(&self) -> usize {
        match self.state {
            DetailState::Open { slide, .. } => slide,
            DetailState::Closed => 0,
        }
    }

    pub fn image_loading(&self) -> bool {
        matches!(
            self.state,
            DetailState::Open {
                image: ImageStatus::Loading,
                ..
            }
        )
    }

    pub fn image_failed(&self) -> bool {
        matches!(
            self.state,
            DetailState::Open {
                image: ImageStatus::Failed,
                ..
            }
        )
    }

    /// Opens `id` at its first slide, replacing whatever was open.
    pub fn open(&mut self, id: impl Into<String>, slide_count: usize) {
        self.state = DetailState::Open {
            id: id.into(),
            slide: 0,
            slide_count,
            image: ImageStatus::Loading,
        };
    }

    pub fn close(&mut self) {
        self.state = DetailState::Closed;
    }

    /// Moves one slide, wrapping at both ends. Each new slide starts loading.
    pub fn advance(&mut self, direction: Direction) {
        if let DetailState::Open {
            slide,
            slide_count,
            image,
            ..
        } = &mut self.state
        {
            if *slide_count == 0 {
                return;
            }
            *slide = match direction {
                Direction::Next => (*slide + 1) % *slide_count,
                Direction::Previous => (*slide + *slide_count - 1) % *slide_count,
            };
            if *slide_count > 1 {
                *image = ImageStatus::Loading;
            }
        }
    }

    /// Jumps straight to `index` (carousel dots); out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) {
        if let DetailState::Open {
            slide,
            slide_count,
            image,
            ..
        } = &mut self.state
        {
            if index < *slide_count && index != *slide {
                *slide = index;
                *image = ImageStatus::Loading;
            }
        }
    }

    pub fn image_loaded(&mut self) {
        self.set_image(ImageStatus::Loaded);
    }

    pub fn image_errored(&mut self) {
        self.set_image(ImageStatus::Failed);
    }

    fn set_image(&mut self, status: ImageStatus) {
        if let DetailState::Open { image, .. } = &mut self.state {
            *image = status;
        }
    }
}

/// Turns a pointer/touch start and end into a navigation direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// A swipe left moves to the next slide, a swipe right to the previous.
    pub fn end(&mut self, x: f64, y: f64) -> Option<Direction> {
        let (start_x, start_y) = self.start.take()?;
        let dx = x - start_x;
        let dy = y - start_y;
        if dx.abs() < SWIPE_THRESHOLD || dx.abs() <= dy.abs() {
            return None;
        }
        if dx < 0.0 {
            Some(Direction::Next)
        } else {
            Some(Direction::Previous)
        }
    }
}

/// Independently expandable cards keyed by record id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accordion {
    expanded: BTreeSet<String>,
}

impl Accordion {
    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_starts_at_first_slide_loading() {
        let mut view = DetailView::new();
        assert!(!view.is_open());
        assert_eq!(view.open_id(), None);

        view.open("ai-chatbot", 3);
        assert_eq!(view.open_id(), Some("ai-chatbot"));
        assert_eq!(view.slide(), 0);
        assert!(view.image_loading());
    }

    #[test]
    fn test_navigation_wraps_both_ends() {
        let mut view = DetailView::new();
        view.open("p", 3);

        view.advance(Direction::Previous);
        assert_eq!(view.slide(), 2);

        view.advance(Direction::Next);
        assert_eq!(view.slide(), 0);

        view.advance(Direction::Next);
        view.advance(Direction::Next);
        assert_eq!(view.slide(), 2);
        view.advance(Direction::Next);
        assert_eq!(view.slide(), 0);
    }

    #[test]
    fn test_opening_another_record_replaces_directly() {
        let mut view = DetailView::new();
        view.open("a", 4);
        view.advance(Direction::Next);
        view.image_loaded();

        view.open("b", 2);
        assert_eq!(
            view.state(),
            &DetailState::Open {
                id: "b".to_string(),
                slide: 0,
                slide_count: 2,
                image: ImageStatus::Loading,
            }
        );
    }

    #[test]
    fn test_close_resets_slide_and_loading() {
        let mut view = DetailView::new();
        view.open("a", 4);
        view.advance(Direction::Next);
        view.close();

        assert_eq!(view.state(), &DetailState::Closed);
        assert_eq!(view.slide(), 0);
        assert!(!view.image_loading());

        view.open("a", 4);
        assert_eq!(view.slide(), 0);
    }

    #[test]
    fn test_image_status_transitions() {
        let mut view = DetailView::new();
        // no-op while closed
        view.image_loaded();
        assert_eq!(view.state(), &DetailState::Closed);

        view.open("a", 2);
        view.image_loaded();
        assert!(!view.image_loading());

        view.advance(Direction::Next);
        assert!(view.image_loading());

        view.image_errored();
        assert!(view.image_failed());
        assert!(!view.image_loading());
    }

    #[test]
    fn test_single_and_empty_carousels() {
        let mut view = DetailView::new();
        view.open("one", 1);
        view.image_loaded();
        view.advance(Direction::Next);
        assert_eq!(view.slide(), 0);
        // same image, nothing to reload
        assert!(!view.image_loading());

        view.open("none", 0);
        view.advance(Direction::Previous);
        assert_eq!(view.slide(), 0);
    }

    #[test]
    fn test_go_to() {
        let mut view = DetailView::new();
        view.open("a", 3);
        view.image_loaded();

        view.go_to(2);
        assert_eq!(view.slide(), 2);
        assert!(view.image_loading());

        view.go_to(7);
        assert_eq!(view.slide(), 2);
    }

    #[test]
    fn test_all_inputs_share_one_transition() {
        let mut by_click = DetailView::new();
        let mut by_key = DetailView::new();
        let mut by_swipe = DetailView::new();
        for view in [&mut by_click, &mut by_key, &mut by_swipe] {
            view.open("a", 3);
        }

        by_click.advance(Direction::Next);
        by_key.advance(Direction::from_key("ArrowRight").unwrap());
        let mut swipe = SwipeTracker::default();
        swipe.begin(300.0, 100.0);
        by_swipe.advance(swipe.end(200.0, 110.0).unwrap());

        assert_eq!(by_click, by_key);
        assert_eq!(by_key, by_swipe);
        assert_eq!(Direction::from_key("Enter"), None);
    }

    #[test]
    fn test_swipe_threshold_and_axis() {
        let mut swipe = SwipeTracker::default();

        swipe.begin(100.0, 0.0);
        assert_eq!(swipe.end(139.0, 0.0), None);

        swipe.begin(100.0, 0.0);
        assert_eq!(swipe.end(140.0, 0.0), Some(Direction::Previous));

        swipe.begin(100.0, 0.0);
        assert_eq!(swipe.end(40.0, 5.0), Some(Direction::Next));

        // mostly vertical travel is a scroll
        swipe.begin(100.0, 0.0);
        assert_eq!(swipe.end(160.0, 90.0), None);

        // end without begin
        assert_eq!(swipe.end(0.0, 0.0), None);
    }

    #[test]
    fn test_accordion() {
        let mut acc = Accordion::default();
        acc.toggle("react");
        acc.toggle("git");
        assert!(acc.is_expanded("react"));
        acc.toggle("react");
        assert!(!acc.is_expanded("react"));
        assert!(acc.is_expanded("git"));
        acc.collapse_all();
        assert!(!acc.is_expanded("git"));
    }
}
