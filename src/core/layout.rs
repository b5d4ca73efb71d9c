//! Goal geometry for the question screen.
//!
//! Everything here is a pure function of the refusal step and the current
//! viewport. Nothing is stored; the view recomputes a [`Layout`] whenever
//! either input changes and hands the numbers to its motion channels as
//! targets.

use super::constants::*;
use glam::Vec2;

/// Visible window size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    /// Size used for button growth; a window reporting zero falls back to a
    /// phone-sized frame.
    pub fn sizing_frame(&self) -> Vec2 {
        let w = if self.width > 0.0 {
            self.width
        } else {
            FALLBACK_VIEWPORT_WIDTH
        };
        let h = if self.height > 0.0 {
            self.height
        } else {
            FALLBACK_VIEWPORT_HEIGHT
        };
        Vec2::new(w, h)
    }
}

/// Arrangement of the Yes/No pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stacking {
    Row,
    Column,
}

impl Stacking {
    pub fn css_direction(self) -> &'static str {
        match self {
            Stacking::Row => "row",
            Stacking::Column => "column",
        }
    }

    pub fn gap(self) -> f32 {
        match self {
            Stacking::Row => ROW_GAP,
            Stacking::Column => STACK_GAP,
        }
    }
}

/// Normalized escalation in \[0, 1\]. A single-line script is already at
/// its end, so it reports 1.
#[inline]
pub fn progress(step: usize, max_step: usize) -> f32 {
    if max_step == 0 {
        return 1.0;
    }
    (step as f32 / max_step as f32).min(1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub progress: f32,
    pub is_mobile: bool,
    pub stacking: Stacking,
    pub gap: f32,
    pub yes: Vec2,
    /// `None` once the refusal script is exhausted.
    pub no: Option<Vec2>,
    pub buttons_top: f32,
    pub buttons_height: f32,
    pub title_top: f32,
    pub title_scale: f32,
    pub gif_top: f32,
    pub gif_scale: f32,
}

impl Layout {
    pub fn derive(step: usize, max_step: usize, viewport: Viewport) -> Self {
        let p = progress(step, max_step);
        let frame = viewport.sizing_frame();

        let yes = Vec2::new(
            YES_MIN_WIDTH + p * (frame.x - YES_MIN_WIDTH).max(0.0),
            YES_MIN_HEIGHT + p * (frame.y * YES_HEIGHT_VIEWPORT_SHARE),
        );

        let stacking = if p > STACK_THRESHOLD {
            Stacking::Column
        } else {
            Stacking::Row
        };
        let no = (step < max_step).then(|| no_size(step, stacking));

        let buttons_height = match (stacking, no) {
            (Stacking::Column, Some(no)) => yes.y + no.y + STACK_GAP,
            _ => yes.y,
        };

        let is_mobile = viewport.is_mobile();
        let buttons_top = if is_mobile {
            BUTTONS_TOP_MOBILE
        } else {
            BUTTONS_TOP_DESKTOP
        };
        let title_gap = if is_mobile {
            TITLE_GAP_MOBILE
        } else {
            TITLE_GAP_DESKTOP
        };
        let gif_gap = match (is_mobile, step < GIF_GAP_EARLY_STEPS) {
            (true, true) => GIF_GAP_MOBILE_EARLY,
            (true, false) => GIF_GAP_MOBILE_LATE,
            (false, _) => GIF_GAP_DESKTOP,
        };

        Self {
            progress: p,
            is_mobile,
            stacking,
            gap: stacking.gap(),
            yes,
            no,
            buttons_top,
            buttons_height,
            title_top: buttons_top - title_gap - title_height(viewport.width),
            title_scale: 1.0 - p * TITLE_SHRINK,
            gif_top: buttons_top + buttons_height + gif_gap,
            gif_scale: 1.0 - p * GIF_SHRINK,
        }
    }
}

/// Side by side the No button narrows and grows taller as its text gets
/// longer; once stacked it widens up to a cap at a fixed height.
fn no_size(step: usize, stacking: Stacking) -> Vec2 {
    let s = step as f32;
    match stacking {
        Stacking::Row => Vec2::new(
            (NO_BASE_WIDTH - s * NO_WIDTH_SHRINK_PER_STEP).max(NO_MIN_WIDTH),
            NO_BASE_HEIGHT + s * NO_HEIGHT_PER_STEP,
        ),
        Stacking::Column => Vec2::new(
            (NO_BASE_WIDTH + s * NO_WIDTH_GROW_PER_STEP).min(NO_MAX_WIDTH),
            NO_BASE_HEIGHT,
        ),
    }
}

// Matches the title's responsive font size steps.
fn title_height(width: f32) -> f32 {
    if width < MOBILE_BREAKPOINT {
        TITLE_HEIGHT_SMALL
    } else if width < TABLET_BREAKPOINT {
        TITLE_HEIGHT_MEDIUM
    } else {
        TITLE_HEIGHT_LARGE
    }
}
