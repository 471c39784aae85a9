//! Random color generation and naming.
//!
//! Generation and naming sit behind two small traits so either side can be
//! swapped for a different algorithm. [`RandomColor`] picks a hue, then a
//! saturation and brightness constrained by per-hue lower bounds so the
//! result stays vivid; [`NearestNamer`] names a color after the closest
//! palette entry in CIE L*a*b*.

use crate::color::{ColorEntry, HexColor};
use crate::palette::{NamedColor, Palette};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces random colors.
pub trait ColorGenerator {
    fn random_hex(&mut self) -> HexColor;
}

/// Names colors.
pub trait ColorNamer {
    /// Name of the closest reference color.
    fn nearest_name(&self, hex: &HexColor) -> String;
}

/// A hue band with its saturation / brightness lower-bound curve.
#[derive(Debug, Clone, Copy)]
struct HueBand {
    hue_range: (i32, i32),
    /// `(saturation, minimum brightness)` points, saturation ascending.
    lower_bounds: &'static [(i32, i32)],
}

impl HueBand {
    fn saturation_range(&self) -> (i32, i32) {
        let first = self.lower_bounds[0];
        let last = self.lower_bounds[self.lower_bounds.len() - 1];
        (first.0, last.0)
    }

    fn contains(&self, hue: i32) -> bool {
        hue >= self.hue_range.0 && hue <= self.hue_range.1
    }
}

const MONOCHROME_BOUNDS: &[(i32, i32)] = &[(0, 0), (100, 0)];

const HUE_BANDS: &[HueBand] = &[
    // red
    HueBand {
        hue_range: (-26, 18),
        lower_bounds: &[
            (20, 100), (30, 92), (40, 89), (50, 85), (60, 78),
            (70, 70), (80, 60), (90, 55), (100, 50),
        ],
    },
    // orange
    HueBand {
        hue_range: (18, 46),
        lower_bounds: &[(20, 100), (30, 93), (40, 88), (50, 86), (60, 85), (70, 70), (100, 70)],
    },
    // yellow
    HueBand {
        hue_range: (46, 62),
        lower_bounds: &[
            (25, 100), (40, 94), (50, 89), (60, 86),
            (70, 84), (80, 82), (90, 80), (100, 75),
        ],
    },
    // green
    HueBand {
        hue_range: (62, 178),
        lower_bounds: &[
            (30, 100), (40, 90), (50, 85), (60, 81),
            (70, 74), (80, 64), (90, 50), (100, 40),
        ],
    },
    // blue
    HueBand {
        hue_range: (178, 257),
        lower_bounds: &[
            (20, 100), (30, 86), (40, 80), (50, 74), (60, 60),
            (70, 52), (80, 44), (90, 39), (100, 35),
        ],
    },
    // purple
    HueBand {
        hue_range: (257, 282),
        lower_bounds: &[
            (20, 100), (30, 87), (40, 79), (50, 70), (60, 65),
            (70, 59), (80, 52), (90, 45), (100, 42),
        ],
    },
    // pink
    HueBand {
        hue_range: (282, 334),
        lower_bounds: &[(30, 90), (40, 86), (60, 84), (80, 80), (90, 75), (100, 73)],
    },
];

static MONOCHROME: HueBand = HueBand {
    hue_range: (0, 360),
    lower_bounds: MONOCHROME_BOUNDS,
};

/// Band containing `hue` (degrees, `0..=360`).
fn band_for(hue: i32) -> &'static HueBand {
    // Reds wrap around 0, so the top of the wheel is folded negative.
    let hue = if (334..=360).contains(&hue) { hue - 360 } else { hue };
    HUE_BANDS.iter().find(|band| band.contains(hue)).unwrap_or(&MONOCHROME)
}

/// Lowest brightness allowed for a hue at the given saturation.
fn minimum_brightness(hue: i32, saturation: i32) -> f64 {
    let bounds = band_for(hue).lower_bounds;
    for pair in bounds.windows(2) {
        let (s1, v1) = pair[0];
        let (s2, v2) = pair[1];
        if saturation >= s1 && saturation <= s2 {
            let slope = (v2 - v1) as f64 / (s2 - s1) as f64;
            let intercept = v1 as f64 - slope * s1 as f64;
            return slope * saturation as f64 + intercept;
        }
    }
    0.0
}

/// Inclusive integer pick from `lo..=hi`.
fn random_within<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> i32 {
    (lo + rng.r#gen::<f64>() * (hi + 1.0 - lo)).floor() as i32
}

/// HSV (degrees, percent, percent) to 8-bit RGB.
fn hsv_to_rgb(hue: i32, saturation: i32, value: i32) -> HexColor {
    let hue = match hue {
        0 => 1,
        360 => 359,
        h => h,
    };
    let h = hue as f64 / 360.0;
    let s = saturation as f64 / 100.0;
    let v = value as f64 / 100.0;

    let h_i = (h * 6.0).floor() as i32;
    let f = h * 6.0 - h_i as f64;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match h_i {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    let channel = |c: f64| (c * 255.0).floor().clamp(0.0, 255.0) as u8;
    HexColor::new(channel(r), channel(g), channel(b))
}

/// Attractive random colors: uniform hue, constrained saturation and brightness.
pub struct RandomColor<R: Rng = StdRng> {
    rng: R,
}

impl RandomColor<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomColor<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomColor<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn pick_hue(&mut self) -> i32 {
        random_within(&mut self.rng, 0.0, 360.0)
    }

    fn pick_saturation(&mut self, hue: i32) -> i32 {
        let (lo, hi) = band_for(hue).saturation_range();
        random_within(&mut self.rng, lo as f64, hi as f64)
    }

    fn pick_brightness(&mut self, hue: i32, saturation: i32) -> i32 {
        let lo = minimum_brightness(hue, saturation);
        random_within(&mut self.rng, lo, 100.0)
    }
}

impl<R: Rng> ColorGenerator for RandomColor<R> {
    fn random_hex(&mut self) -> HexColor {
        let hue = self.pick_hue();
        let saturation = self.pick_saturation(hue);
        let brightness = self.pick_brightness(hue, saturation);
        hsv_to_rgb(hue, saturation, brightness)
    }
}

/// CIE L*a*b* coordinates (D65).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Lab {
    l: f64,
    a: f64,
    b: f64,
}

impl Lab {
    fn from_hex(hex: &HexColor) -> Self {
        fn linear(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        fn f(t: f64) -> f64 {
            const T0: f64 = 4.0 / 29.0;
            const T2: f64 = 3.0 * (6.0 / 29.0) * (6.0 / 29.0);
            const T3: f64 = (6.0 / 29.0) * (6.0 / 29.0) * (6.0 / 29.0);
            if t > T3 { t.cbrt() } else { t / T2 + T0 }
        }

        const XN: f64 = 0.950470;
        const YN: f64 = 1.0;
        const ZN: f64 = 1.088830;

        let (r, g, b) = (linear(hex.r), linear(hex.g), linear(hex.b));
        let x = f((0.4124564 * r + 0.3575761 * g + 0.1804375 * b) / XN);
        let y = f((0.2126729 * r + 0.7151522 * g + 0.0721750 * b) / YN);
        let z = f((0.0193339 * r + 0.1191920 * g + 0.9503041 * b) / ZN);

        Self {
            l: 116.0 * y - 16.0,
            a: 500.0 * (x - y),
            b: 200.0 * (y - z),
        }
    }

    fn distance(&self, other: &Lab) -> f64 {
        let (dl, da, db) = (self.l - other.l, self.a - other.a, self.b - other.b);
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// Names a color after the perceptually closest palette entry.
pub struct NearestNamer {
    entries: Vec<(Lab, &'static str)>,
}

impl NearestNamer {
    /// Namer over the built-in reference palette.
    pub fn new() -> Self {
        Self::with_palette(Palette::all())
    }

    pub fn with_palette(palette: &'static [NamedColor]) -> Self {
        Self {
            entries: palette.iter().map(|c| (Lab::from_hex(&c.hex), c.name)).collect(),
        }
    }
}

impl Default for NearestNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorNamer for NearestNamer {
    fn nearest_name(&self, hex: &HexColor) -> String {
        let target = Lab::from_hex(hex);
        let mut best: Option<(f64, &'static str)> = None;
        for (lab, name) in &self.entries {
            let d = target.distance(lab);
            // Strict comparison keeps the first-listed entry on ties.
            if best.is_none_or(|(best_d, _)| d < best_d) {
                best = Some((d, *name));
            }
        }
        best.map(|(_, name)| name.to_string())
            .unwrap_or_else(|| hex.to_string())
    }
}

/// Produces named color entries.
pub struct ColorSource {
    generator: Box<dyn ColorGenerator>,
    namer: Box<dyn ColorNamer>,
}

impl ColorSource {
    pub fn new(generator: Box<dyn ColorGenerator>, namer: Box<dyn ColorNamer>) -> Self {
        Self { generator, namer }
    }

    /// Entropy-seeded generator with the built-in palette.
    pub fn random() -> Self {
        Self::new(Box::new(RandomColor::new()), Box::new(NearestNamer::new()))
    }

    /// Reproducible source, mostly for tests and demos.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(RandomColor::seeded(seed)), Box::new(NearestNamer::new()))
    }

    pub fn generate(&mut self) -> ColorEntry {
        let hex = self.generator.random_hex();
        let name = self.namer.nearest_name(&hex);
        ColorEntry::new(hex, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_lookup_wraps_reds() {
        assert_eq!(band_for(0).hue_range, (-26, 18));
        assert_eq!(band_for(340).hue_range, (-26, 18));
        assert_eq!(band_for(360).hue_range, (-26, 18));
        assert_eq!(band_for(200).hue_range, (178, 257));
        assert_eq!(band_for(300).hue_range, (282, 334));
        // Shared edges resolve to the earlier band.
        assert_eq!(band_for(18).hue_range, (-26, 18));
    }

    #[test]
    fn test_every_hue_has_a_band() {
        for hue in 0..=360 {
            assert!(!std::ptr::eq(band_for(hue), &MONOCHROME), "hue {hue} fell through");
        }
    }

    #[test]
    fn test_minimum_brightness_interpolates() {
        // Blue: (50, 74) -> (60, 60), so saturation 55 sits halfway.
        assert!((minimum_brightness(200, 55) - 67.0).abs() < 1e-9);
        assert!((minimum_brightness(200, 100) - 35.0).abs() < 1e-9);
        assert!((minimum_brightness(200, 20) - 100.0).abs() < 1e-9);
        // Outside the curve.
        assert_eq!(minimum_brightness(200, 5), 0.0);
    }

    #[test]
    fn test_hsv_to_rgb_primaries() {
        assert_eq!(hsv_to_rgb(120, 100, 100), HexColor::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(240, 100, 100), HexColor::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(0, 0, 100), HexColor::WHITE);
        assert_eq!(hsv_to_rgb(200, 50, 0), HexColor::BLACK);
    }

    #[test]
    fn test_random_within_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..2000 {
            let v = random_within(&mut rng, 0.0, 3.0);
            assert!((0..=3).contains(&v));
            seen_lo |= v == 0;
            seen_hi |= v == 3;
        }
        assert!(seen_lo && seen_hi);
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let mut a = RandomColor::seeded(42);
        let mut b = RandomColor::seeded(42);
        for _ in 0..50 {
            assert_eq!(a.random_hex(), b.random_hex());
        }
    }

    #[test]
    fn test_generated_colors_are_never_dark() {
        // Lowest brightness anywhere on the curves is 35% (~89/255).
        let mut generator = RandomColor::seeded(1);
        for _ in 0..1000 {
            let hex = generator.random_hex();
            let max = hex.r.max(hex.g).max(hex.b);
            assert!(max >= 85, "{hex} is too dark");
            assert_eq!(hex.to_string().len(), 7);
        }
    }

    #[test]
    fn test_palette_colors_name_themselves() {
        let namer = NearestNamer::new();
        for color in Palette::all() {
            assert_eq!(namer.nearest_name(&color.hex), color.name);
        }
    }

    #[test]
    fn test_nearest_name_for_off_palette_color() {
        let namer = NearestNamer::new();
        assert_eq!(namer.nearest_name(&HexColor::new(254, 1, 1)), "Red");
        assert_eq!(namer.nearest_name(&HexColor::new(2, 2, 2)), "Black");
    }

    static TIED: &[NamedColor] = &[
        NamedColor::new(0x102030, "First"),
        NamedColor::new(0x102030, "Second"),
    ];

    #[test]
    fn test_ties_resolve_to_first_listed() {
        let namer = NearestNamer::with_palette(TIED);
        assert_eq!(namer.nearest_name(&HexColor::new(0x10, 0x20, 0x31)), "First");
    }

    #[test]
    fn test_empty_palette_falls_back_to_hex() {
        static EMPTY: &[NamedColor] = &[];
        let namer = NearestNamer::with_palette(EMPTY);
        assert_eq!(namer.nearest_name(&HexColor::new(1, 2, 3)), "#010203");
    }

    #[test]
    fn test_source_generates_named_entries() {
        let mut source = ColorSource::seeded(9);
        for _ in 0..20 {
            let entry = source.generate();
            assert!(!entry.name.is_empty());
            assert!(Palette::by_name(&entry.name).is_some());
        }
    }
}
