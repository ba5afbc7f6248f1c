use crate::{
    carousel::{DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_TRANSITION_MS},
    visibility::{ObserverOptions, RevealMode},
};

const DEFAULT_REVEAL_MODE: RevealMode = RevealMode::Lazy;

const AUTOPLAY_INTERVAL_MS_BOUNDS: (u32, u32) = (1_000, 60_000);
const TRANSITION_MS_BOUNDS: (u32, u32) = (0, 5_000);
const OBSERVER_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const OBSERVER_BOTTOM_MARGIN_PX_BOUNDS: (u32, u32) = (0, 1_000);

pub const REVEAL_ATTRIBUTE: &str = "data-reveal";
pub const AUTOPLAY_MS_ATTRIBUTE: &str = "data-autoplay-ms";
pub const TRANSITION_MS_ATTRIBUTE: &str = "data-transition-ms";
pub const OBSERVER_THRESHOLD_ATTRIBUTE: &str = "data-observer-threshold";
pub const OBSERVER_BOTTOM_MARGIN_ATTRIBUTE: &str = "data-observer-bottom-margin";

#[derive(Clone, Debug, PartialEq)]
pub struct LandingConfig {
    pub reveal: RevealMode,
    pub autoplay_interval_ms: u32,
    pub transition_ms: u32,
    pub observer: ObserverOptions,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            reveal: DEFAULT_REVEAL_MODE,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
            observer: ObserverOptions::default(),
        }
    }
}

impl LandingConfig {
    /// Builds the page configuration from attribute lookups on the mount
    /// element. Missing, malformed, or out-of-range values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let observer_defaults = ObserverOptions::default();
        let reveal = lookup(REVEAL_ATTRIBUTE)
            .and_then(|value| RevealMode::from_str(value.trim().to_ascii_lowercase().as_str()))
            .unwrap_or(DEFAULT_REVEAL_MODE);
        let autoplay_interval_ms = parse_u32_with_bounds(
            lookup(AUTOPLAY_MS_ATTRIBUTE),
            DEFAULT_AUTOPLAY_INTERVAL_MS,
            AUTOPLAY_INTERVAL_MS_BOUNDS,
        );
        let transition_ms = parse_u32_with_bounds(
            lookup(TRANSITION_MS_ATTRIBUTE),
            DEFAULT_TRANSITION_MS,
            TRANSITION_MS_BOUNDS,
        );
        let threshold = parse_f64_with_bounds(
            lookup(OBSERVER_THRESHOLD_ATTRIBUTE),
            observer_defaults.threshold,
            OBSERVER_THRESHOLD_BOUNDS,
        );
        let bottom_margin_px = parse_u32_with_bounds(
            lookup(OBSERVER_BOTTOM_MARGIN_ATTRIBUTE),
            observer_defaults.bottom_margin_px,
            OBSERVER_BOTTOM_MARGIN_PX_BOUNDS,
        );

        Self {
            reveal,
            autoplay_interval_ms,
            transition_ms,
            observer: ObserverOptions {
                threshold,
                bottom_margin_px,
            },
        }
    }
}

fn parse_u32_with_bounds(raw: Option<String>, default: u32, bounds: (u32, u32)) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_f64_with_bounds(raw: Option<String>, default: f64, bounds: (f64, f64)) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}
