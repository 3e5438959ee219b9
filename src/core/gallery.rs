//! Gallery interaction state.
//!
//! Owns the pause/detail lifecycle, the drag-vs-tap disambiguation and the
//! carousel rotation. Deliberately free of platform APIs: the DOM boundary
//! feeds it normalized pointer samples and applies the actions it returns,
//! so host-side tests can drive every transition without a browser.

/// Degrees of carousel rotation per pixel of horizontal pointer travel.
pub const ROTATE_SENSITIVITY_DEG_PER_PX: f32 = 0.5;

/// Pause/detail lifecycle. `active_item` is `Some` exactly while `paused`.
#[derive(Default, Clone, Debug)]
pub struct GalleryState {
    pub paused: bool,
    pub active_item: Option<String>,
}

/// Per-gesture scratch state, reset on every press and consumed at release.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub dragging: bool,
    pub moved: bool,
    pub start_x: f32,
    pub rotation_at_start: f32,
}

/// Live Y rotation of the carousel. Persists across gestures so repeated
/// drags compound from the last angle.
#[derive(Default, Clone, Copy, Debug)]
pub struct CarouselRotation {
    pub degrees: f32,
}

/// What the DOM boundary must do after a release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReleaseAction {
    /// Stray release with no gesture in progress.
    None,
    /// Tap landed on a gallery item: show its detail view.
    OpenDetail(String),
    /// Completed drag or empty tap: let the ambient animation run again.
    ResumeAmbient,
}

/// Flat reactive state machine over the three state records above.
///
/// One entry point per gesture phase; mouse and touch events are normalized
/// to a horizontal page coordinate before they reach it.
#[derive(Default, Clone, Debug)]
pub struct GalleryController {
    state: GalleryState,
    drag: DragState,
    rotation: CarouselRotation,
}

impl GalleryController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a gesture. Refused while a detail view is open. Returns whether
    /// a gesture began; on `true` the caller freezes the ambient animation.
    ///
    /// `live_rotation_deg` is the angle recovered from the element's current
    /// transform, so the drag picks up wherever the ambient animation left
    /// the carousel.
    pub fn pointer_down(&mut self, page_x: f32, live_rotation_deg: f32) -> bool {
        if self.state.paused {
            return false;
        }
        self.drag = DragState {
            dragging: true,
            moved: false,
            start_x: page_x,
            rotation_at_start: live_rotation_deg,
        };
        true
    }

    /// Advance a drag. Returns the new rotation angle for the caller to
    /// write into the live transform, or `None` when no gesture is in
    /// progress.
    pub fn pointer_move(&mut self, page_x: f32) -> Option<f32> {
        if !self.drag.dragging {
            return None;
        }
        self.drag.moved = true;
        let delta_x = page_x - self.drag.start_x;
        self.rotation.degrees = self.drag.rotation_at_start + delta_x * ROTATE_SENSITIVITY_DEG_PER_PX;
        Some(self.rotation.degrees)
    }

    /// End a gesture. `item` names the gallery item under the release point,
    /// if any. A gesture with no recorded movement that lands on an item is
    /// a tap and opens that item's detail view; every other release resumes
    /// the ambient animation unless a detail view is open. The accumulated
    /// rotation is retained either way.
    pub fn pointer_up(&mut self, item: Option<&str>) -> ReleaseAction {
        if !self.drag.dragging {
            return ReleaseAction::None;
        }
        self.drag.dragging = false;
        if !self.drag.moved {
            if let Some(id) = item {
                if self.open_detail(id) {
                    return ReleaseAction::OpenDetail(id.to_owned());
                }
            }
        }
        if self.state.paused {
            ReleaseAction::None
        } else {
            ReleaseAction::ResumeAmbient
        }
    }

    // No-op when a detail view is already open.
    fn open_detail(&mut self, id: &str) -> bool {
        if self.state.paused {
            return false;
        }
        self.state.paused = true;
        self.state.active_item = Some(id.to_owned());
        true
    }

    /// Explicit close control. Returns the item whose detail view was open
    /// so the caller can drop its highlight; `None` when already idle.
    pub fn close(&mut self) -> Option<String> {
        if !self.state.paused {
            return None;
        }
        self.state.paused = false;
        self.state.active_item.take()
    }

    /// Click-outside dismissal. Same as `close`, except it holds off while a
    /// gesture is in flight so the click that ends a drag is never misread
    /// as a dismissal.
    pub fn dismiss(&mut self) -> Option<String> {
        if self.drag.dragging {
            return None;
        }
        self.close()
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn active_item(&self) -> Option<&str> {
        self.state.active_item.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation.degrees
    }
}
