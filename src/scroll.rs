#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Rounded scroll depth clamped to `0..=100`, or `None` when the document
    /// does not scroll at all.
    pub fn percent(self) -> Option<u32> {
        let scrollable = self.document_height - self.viewport_height;
        if !scrollable.is_finite() || scrollable <= 0.0 || !self.scroll_y.is_finite() {
            return None;
        }

        let percent = (self.scroll_y / scrollable * 100.0).round().clamp(0.0, 100.0);
        Some(percent as u32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MilestoneBand {
    Quarter,
    Half,
    ThreeQuarters,
    Complete,
}

impl MilestoneBand {
    pub fn for_percent(percent: u32) -> Option<Self> {
        match percent {
            0..=24 => None,
            25..=49 => Some(Self::Quarter),
            50..=74 => Some(Self::Half),
            75..=99 => Some(Self::ThreeQuarters),
            _ => Some(Self::Complete),
        }
    }

    pub fn event_name(self) -> &'static str {
        match self {
            Self::Quarter => "scroll_25_percent",
            Self::Half => "scroll_50_percent",
            Self::ThreeQuarters => "scroll_75_percent",
            Self::Complete => "scroll_100_percent",
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::Quarter => 0,
            Self::Half => 1,
            Self::ThreeQuarters => 2,
            Self::Complete => 3,
        }
    }
}

/// Running maximum scroll depth for one page view.
///
/// Each scroll event is evaluated once against the band the new maximum lands
/// in; bands jumped over in a single event are never back-filled.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    max_scroll: u32,
    fired: [bool; 4],
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn max_scroll(&self) -> u32 {
        self.max_scroll
    }

    #[cfg(test)]
    pub fn has_fired(&self, band: MilestoneBand) -> bool {
        self.fired[band.slot()]
    }

    pub fn observe(&mut self, metrics: ScrollMetrics) -> Option<MilestoneBand> {
        self.observe_percent(metrics.percent()?)
    }

    pub fn observe_percent(&mut self, percent: u32) -> Option<MilestoneBand> {
        if percent <= self.max_scroll {
            return None;
        }
        self.max_scroll = percent;

        let band = MilestoneBand::for_percent(percent)?;
        let fired = &mut self.fired[band.slot()];
        if *fired {
            return None;
        }
        *fired = true;
        Some(band)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            document_height: 3000.0,
            viewport_height: 1000.0,
        }
    }

    fn fired_names(tracker: &mut ScrollTracker, percents: &[u32]) -> Vec<&'static str> {
        percents
            .iter()
            .filter_map(|percent| tracker.observe_percent(*percent))
            .map(MilestoneBand::event_name)
            .collect()
    }

    #[test]
    fn percent_rounds_against_scrollable_height() {
        assert_eq!(metrics(0.0).percent(), Some(0));
        assert_eq!(metrics(499.0).percent(), Some(25));
        assert_eq!(metrics(2000.0).percent(), Some(100));
    }

    #[test]
    fn percent_is_clamped_for_overscroll() {
        assert_eq!(metrics(-40.0).percent(), Some(0));
        assert_eq!(metrics(2600.0).percent(), Some(100));
    }

    #[test]
    fn non_scrollable_document_reports_nothing() {
        let flat = ScrollMetrics {
            scroll_y: 0.0,
            document_height: 800.0,
            viewport_height: 800.0,
        };
        let mut tracker = ScrollTracker::new();

        assert_eq!(flat.percent(), None);
        assert_eq!(tracker.observe(flat), None);
        assert_eq!(tracker.max_scroll(), 0);
    }

    #[test]
    fn jump_from_ten_to_eighty_two_fires_only_three_quarters() {
        let mut tracker = ScrollTracker::new();

        assert_eq!(tracker.observe(metrics(200.0)), None);
        assert_eq!(tracker.observe(metrics(1640.0)), Some(MilestoneBand::ThreeQuarters));
        assert!(!tracker.has_fired(MilestoneBand::Quarter));
        assert!(!tracker.has_fired(MilestoneBand::Half));
    }

    #[test]
    fn each_band_fires_once_even_when_max_keeps_rising_inside_it() {
        let mut tracker = ScrollTracker::new();

        let names = fired_names(&mut tracker, &[10, 26, 30, 48, 51, 60, 76, 99, 100]);

        assert_eq!(
            names,
            vec![
                "scroll_25_percent",
                "scroll_50_percent",
                "scroll_75_percent",
                "scroll_100_percent"
            ]
        );
    }

    #[test]
    fn scrolling_back_up_never_refires() {
        let mut tracker = ScrollTracker::new();

        let names = fired_names(&mut tracker, &[30, 10, 0, 30, 35]);

        assert_eq!(names, vec!["scroll_25_percent"]);
        assert_eq!(tracker.max_scroll(), 35);
    }

    #[test]
    fn last_fired_band_contains_the_final_value() {
        let sequences: [&[u32]; 4] = [&[5, 27, 52], &[40, 90], &[100], &[12, 24, 74]];

        for sequence in sequences {
            let mut tracker = ScrollTracker::new();
            let names = fired_names(&mut tracker, sequence);
            let last = *sequence.last().expect("non-empty sequence");

            assert_eq!(
                names.last().copied(),
                MilestoneBand::for_percent(last).map(MilestoneBand::event_name),
                "sequence {sequence:?}"
            );
            let landed: Vec<_> = sequence
                .iter()
                .filter_map(|percent| MilestoneBand::for_percent(*percent))
                .fold(Vec::new(), |mut bands, band| {
                    if !bands.contains(&band) {
                        bands.push(band);
                    }
                    bands
                });
            assert_eq!(names.len(), landed.len(), "sequence {sequence:?}");
        }
    }
}
