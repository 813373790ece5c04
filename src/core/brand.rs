//! Brand logo with a one-shot text fallback

/// Brand name shown when the logo image cannot be loaded
pub const BRAND_NAME: &str = "BIODANCE";

/// Logo image path
pub const LOGO_SRC: &str = "/logo.png";

/// What the brand header currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrandLogo {
    #[default]
    Image,
    TextFallback,
}

impl BrandLogo {
    /// Record an image load failure.
    ///
    /// Returns `true` only for the transition into the fallback. The fallback
    /// is permanent: there is no retry and later failures are ignored.
    pub fn on_load_error(&mut self) -> bool {
        match self {
            BrandLogo::Image => {
                *self = BrandLogo::TextFallback;
                true
            }
            BrandLogo::TextFallback => false,
        }
    }

    /// Check an image that may have failed before any error listener existed.
    ///
    /// A finished load with no decoded width is a failed load. An image still
    /// loading is left to the error listener.
    pub fn on_mount(&mut self, complete: bool, natural_width: u32) -> bool {
        if complete && natural_width == 0 {
            self.on_load_error()
        } else {
            false
        }
    }

    pub fn shows_image(&self) -> bool {
        matches!(self, BrandLogo::Image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_image() {
        assert!(BrandLogo::default().shows_image());
    }

    #[test]
    fn test_load_error_switches_exactly_once() {
        let mut logo = BrandLogo::default();

        assert!(logo.on_load_error());
        assert_eq!(logo, BrandLogo::TextFallback);
        assert!(!logo.shows_image());

        assert!(!logo.on_load_error());
        assert!(!logo.on_load_error());
        assert_eq!(logo, BrandLogo::TextFallback);
    }

    #[test]
    fn test_mount_detects_earlier_failure() {
        let mut logo = BrandLogo::default();

        assert!(logo.on_mount(true, 0));
        assert_eq!(logo, BrandLogo::TextFallback);

        // A later error event for the same failure changes nothing
        assert!(!logo.on_load_error());
    }

    #[test]
    fn test_mount_keeps_loaded_or_pending_image() {
        let mut logo = BrandLogo::default();

        assert!(!logo.on_mount(true, 240));
        assert!(!logo.on_mount(false, 0));
        assert!(logo.shows_image());

        assert!(logo.on_load_error());
    }
}
