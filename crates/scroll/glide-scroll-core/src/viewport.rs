//! Viewport visibility checks for element bounding rectangles.

use serde::{Deserialize, Serialize};

/// Element bounds in viewport coordinates (as from `getBoundingClientRect`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// `partial`: some of the element is inside the viewport.
/// `complete`: all of it is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub partial: bool,
    pub complete: bool,
}

pub fn visibility(rect: &Rect, viewport: &Viewport) -> Visibility {
    let partial = rect.top + rect.height >= 0.0
        && rect.left + rect.width >= 0.0
        && rect.bottom() - rect.height <= viewport.height
        && rect.right() - rect.width <= viewport.width;
    let complete = rect.top >= 0.0
        && rect.left >= 0.0
        && rect.bottom() <= viewport.height
        && rect.right() <= viewport.width;
    Visibility { partial, complete }
}
