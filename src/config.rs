// Tuning constants for every effect, grouped per feature so the numbers
// that shape the page live in one place.

use crate::color::Color;

/// Particle field tuning.
pub mod field {
    use super::Color;

    pub const PARTICLE_COUNT: usize = 120;
    /// Viewports narrower than this get half the particle count.
    pub const MOBILE_BREAKPOINT: f64 = 768.0;
    pub const MIN_SIZE: f64 = 1.0;
    pub const MAX_SIZE: f64 = 2.5;
    /// Spawn velocity lies in +-SPEED on each axis.
    pub const SPEED: f64 = 0.3;
    pub const CONNECTION_DISTANCE: f64 = 140.0;
    pub const POINTER_RADIUS: f64 = 180.0;
    pub const POINTER_FORCE: f64 = 0.06;
    /// Positions wrap once they leave the canvas by more than this margin.
    pub const WRAP_MARGIN: f64 = 10.0;
    pub const DAMPING: f64 = 0.98;
    /// Per-frame relaxation factor pulling alpha back to its baseline.
    pub const ALPHA_RELAX: f64 = 0.05;
    pub const LINK_ALPHA_MAX: f64 = 0.15;
    pub const POINTER_LINK_ALPHA_MAX: f64 = 0.3;
    pub const LINK_WIDTH: f64 = 0.5;
    pub const POINTER_LINK_WIDTH: f64 = 0.8;

    pub const PALETTE: [Color; 3] = [
        Color::new(0, 212, 255),
        Color::new(123, 47, 247),
        Color::new(255, 45, 170),
    ];
    /// Pair links are always drawn in the first palette color,
    /// pointer links in the second.
    pub const LINK_COLOR: Color = PALETTE[0];
    pub const POINTER_LINK_COLOR: Color = PALETTE[1];
}

/// Typing effect timing, all in milliseconds.
pub mod typing {
    pub const TYPE_MS: u32 = 80;
    pub const DELETE_MS: u32 = 40;
    /// Pause with the full word on screen before deleting.
    pub const HOLD_MS: u32 = 2000;
    /// Pause on the empty string before the next word starts.
    pub const NEXT_WORD_MS: u32 = 400;
}

/// Scroll spy and navbar.
pub mod scroll {
    /// A section counts as active this many pixels before its top reaches
    /// the viewport top.
    pub const SPY_BIAS: f64 = 120.0;
    /// Scroll offset past which the navbar gets its `scrolled` class.
    pub const NAVBAR_THRESHOLD: f64 = 50.0;
}

/// Reveal-on-scroll observer.
pub mod reveal {
    pub const THRESHOLD: f64 = 0.15;
    pub const ROOT_MARGIN: &str = "0px 0px -40px 0px";
}

/// Pointer coordinates used when no pointer is over the page. Far enough
/// off-canvas that POINTER_RADIUS can never reach it.
pub const POINTER_OFFSCREEN: f64 = -500.0;
