//! Full-window background color with a cross-fade between colors.

use hueday_core::HexColor;
use kurbo::{Affine, Rect, Size};
use peniko::{Color, Fill};
use vello::Scene;

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Linear blend from one color to another over a fixed duration.
#[derive(Debug, Clone)]
pub struct Fade {
    from: HexColor,
    to: HexColor,
    started: Option<Instant>,
    duration: Duration,
}

impl Fade {
    /// A settled fade showing `color`.
    pub fn new(color: HexColor, duration: Duration) -> Self {
        Self {
            from: color,
            to: color,
            started: None,
            duration,
        }
    }

    /// Color the fade ends on.
    pub fn target(&self) -> HexColor {
        self.to
    }

    /// Start fading from whatever is showing at `now` towards `to`.
    pub fn retarget(&mut self, to: HexColor, now: Instant) {
        self.from = self.color_at(now);
        self.to = to;
        self.started = Some(now);
    }

    pub fn color_at(&self, now: Instant) -> HexColor {
        match self.progress(now) {
            Some(t) => self.from.lerp(&self.to, t),
            None => self.to,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now).is_some()
    }

    /// Fraction in `0.0..1.0` while running, `None` once settled.
    fn progress(&self, now: Instant) -> Option<f32> {
        let started = self.started?;
        if self.duration.is_zero() {
            return None;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed < self.duration).then(|| elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }
}

/// peniko color for a hex color.
pub fn to_peniko(color: HexColor) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, 255)
}

/// Cover the viewport with `color`.
pub fn paint_background(scene: &mut Scene, viewport: Size, color: HexColor) {
    scene.reset();
    let rect = Rect::new(0.0, 0.0, viewport.width, viewport.height);
    scene.fill(Fill::NonZero, Affine::IDENTITY, to_peniko(color), None, &rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: HexColor = HexColor::new(200, 0, 0);
    const BLUE: HexColor = HexColor::new(0, 0, 200);

    #[test]
    fn test_new_fade_is_settled() {
        let fade = Fade::new(RED, Duration::from_millis(500));
        let now = Instant::now();
        assert!(!fade.is_animating(now));
        assert_eq!(fade.color_at(now), RED);
    }

    #[test]
    fn test_retarget_interpolates() {
        let mut fade = Fade::new(RED, Duration::from_millis(500));
        let t0 = Instant::now();
        fade.retarget(BLUE, t0);

        assert_eq!(fade.color_at(t0), RED);
        assert_eq!(fade.color_at(t0 + Duration::from_millis(250)), HexColor::new(100, 0, 100));
        assert!(fade.is_animating(t0 + Duration::from_millis(499)));
        assert_eq!(fade.color_at(t0 + Duration::from_millis(500)), BLUE);
        assert!(!fade.is_animating(t0 + Duration::from_millis(500)));
        assert_eq!(fade.target(), BLUE);
    }

    #[test]
    fn test_retarget_mid_fade_starts_from_shown_color() {
        let mut fade = Fade::new(RED, Duration::from_millis(500));
        let t0 = Instant::now();
        fade.retarget(BLUE, t0);

        let t1 = t0 + Duration::from_millis(250);
        fade.retarget(RED, t1);
        assert_eq!(fade.color_at(t1), HexColor::new(100, 0, 100));
        assert_eq!(fade.color_at(t1 + Duration::from_millis(500)), RED);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut fade = Fade::new(RED, Duration::ZERO);
        let t0 = Instant::now();
        fade.retarget(BLUE, t0);
        assert!(!fade.is_animating(t0));
        assert_eq!(fade.color_at(t0), BLUE);
    }
}
