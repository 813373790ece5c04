//! Cosmetic, scroll and pointer driven presentation state
//!
//! Nothing here carries business meaning: the landing page uses it for the
//! reading progress bar, the cursor glow and the floating particles.

/// Radius in pixels of the glow that follows the pointer
pub const GLOW_RADIUS: f64 = 128.0;

/// Number of floating particles in the hero background
pub const PARTICLE_COUNT: usize = 20;

/// Percentage of the page scrolled, in `[0, 100]`.
///
/// A page that cannot scroll (document no taller than the viewport) reports 0.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Inline style for the progress bar
pub fn progress_bar_style(progress: f64) -> String {
    format!("width: {}%", progress)
}

/// Last known pointer coordinates, in client pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// CSS transform centering the glow on the pointer
    pub fn glow_transform(&self) -> String {
        format!(
            "translate({}px, {}px)",
            self.x - GLOW_RADIUS,
            self.y - GLOW_RADIUS
        )
    }
}

/// Placement and timing of one floating particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the hero width
    pub left: f64,
    /// Vertical position, percent of the hero height
    pub top: f64,
    /// Animation delay in seconds, `[0, 6)`
    pub delay: f64,
    /// Animation duration in seconds, `[6, 10)`
    pub duration: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left, self.top, self.delay, self.duration
        )
    }
}

/// Deterministic particle layout.
///
/// Server and client must render the same markup, so the scatter comes from a
/// fixed hash of the particle index instead of a random source.
pub fn particle_layout(count: usize) -> Vec<Particle> {
    (0..count as u64)
        .map(|i| {
            let base = i * 4;
            Particle {
                left: unit_noise(base) * 100.0,
                top: unit_noise(base + 1) * 100.0,
                delay: unit_noise(base + 2) * 6.0,
                duration: 6.0 + unit_noise(base + 3) * 4.0,
            }
        })
        .collect()
}

// splitmix64 finalizer mapped onto [0, 1)
fn unit_noise(seed: u64) -> f64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_progress_top_and_bottom() {
        for (doc, viewport) in [(2000.0, 800.0), (10_000.0, 1080.0), (801.0, 800.0)] {
            assert_eq!(scroll_progress(0.0, doc, viewport), 0.0);
            assert_eq!(scroll_progress(doc - viewport, doc, viewport), 100.0);
        }
    }

    #[test]
    fn test_scroll_progress_midway() {
        assert_eq!(scroll_progress(600.0, 2000.0, 800.0), 50.0);
    }

    #[test]
    fn test_scroll_progress_degenerate_page() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn test_scroll_progress_overscroll_is_clamped() {
        assert_eq!(scroll_progress(-40.0, 2000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(1500.0, 2000.0, 800.0), 100.0);
    }

    #[test]
    fn test_scroll_progress_non_finite_input() {
        assert_eq!(scroll_progress(f64::NAN, 2000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, f64::INFINITY, 800.0), 0.0);
    }

    #[test]
    fn test_progress_bar_style() {
        assert_eq!(progress_bar_style(42.5), "width: 42.5%");
        assert_eq!(progress_bar_style(0.0), "width: 0%");
    }

    #[test]
    fn test_glow_transform_centers_on_pointer() {
        let pointer = PointerPosition::new(300.0, 200.0);
        assert_eq!(pointer.glow_transform(), "translate(172px, 72px)");
        assert_eq!(
            PointerPosition::default().glow_transform(),
            "translate(-128px, -128px)"
        );
    }

    #[test]
    fn test_particle_layout_bounds() {
        let particles = particle_layout(PARTICLE_COUNT);
        assert_eq!(particles.len(), PARTICLE_COUNT);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.0..6.0).contains(&p.delay));
            assert!((6.0..10.0).contains(&p.duration));
        }
    }

    #[test]
    fn test_particle_layout_is_stable() {
        assert_eq!(particle_layout(8), particle_layout(8));
        assert_eq!(particle_layout(8)[..4], particle_layout(4)[..]);
        assert_ne!(particle_layout(2)[0], particle_layout(2)[1]);
    }
}
