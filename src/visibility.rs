#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Hero,
    Carousel,
    Download,
    Contact,
    Social,
}

impl Region {
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::Carousel,
        Self::Download,
        Self::Contact,
        Self::Social,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Carousel => "carousel",
            Self::Download => "download",
            Self::Contact => "contact",
            Self::Social => "social",
        }
    }

    pub fn from_id(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.id() == value)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Regions reveal as the intersection observer reports them.
    Lazy,
    /// Every region is revealed at mount.
    Eager,
}

impl RevealMode {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "lazy" => Some(Self::Lazy),
            "eager" => Some(Self::Eager),
            _ => None,
        }
    }

    /// Lazy reveal needs intersection observation; without it the page falls
    /// back to revealing everything up front.
    pub fn effective(self, observer_supported: bool) -> Self {
        match self {
            Self::Lazy if observer_supported => Self::Lazy,
            _ => Self::Eager,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub bottom_margin_px: u32,
}

impl ObserverOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50,
        }
    }
}

/// Latched per-region visibility. Entries only ever flip from hidden to
/// visible for the lifetime of the page view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionVisibility {
    seen: [bool; 5],
}

impl RegionVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.seen[region.slot()]
    }

    /// Returns `true` when this call revealed the region.
    pub fn mark(&mut self, region: Region) -> bool {
        let seen = &mut self.seen[region.slot()];
        let newly = !*seen;
        *seen = true;
        newly
    }

    pub fn mark_all(&mut self) -> Vec<Region> {
        Region::ALL
            .into_iter()
            .filter(|region| self.mark(*region))
            .collect()
    }

    /// Applies one observer callback batch of `(region, is_intersecting)`
    /// entries. Exits are ignored.
    pub fn apply_entries(&mut self, entries: impl IntoIterator<Item = (Region, bool)>) -> Vec<Region> {
        entries
            .into_iter()
            .filter(|(_, intersecting)| *intersecting)
            .filter_map(|(region, _)| self.mark(region).then_some(region))
            .collect()
    }

    #[cfg(test)]
    pub fn visible(&self) -> impl Iterator<Item = Region> + '_ {
        Region::ALL
            .into_iter()
            .filter(|region| self.is_visible(*region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_ids_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_id(region.id()), Some(region));
        }
        assert_eq!(Region::from_id("footer"), None);
    }

    #[test]
    fn first_entry_latches_and_exit_does_not_revert() {
        let mut visibility = RegionVisibility::new();

        let revealed = visibility.apply_entries([(Region::Hero, true), (Region::Download, false)]);
        assert_eq!(revealed, vec![Region::Hero]);

        let revealed = visibility.apply_entries([(Region::Hero, false), (Region::Hero, true)]);
        assert!(revealed.is_empty());
        assert!(visibility.is_visible(Region::Hero));
        assert!(!visibility.is_visible(Region::Download));
    }

    #[test]
    fn visibility_only_grows_across_arbitrary_batches() {
        let batches = [
            vec![(Region::Carousel, true), (Region::Social, false)],
            vec![(Region::Carousel, false), (Region::Contact, true)],
            vec![(Region::Contact, false), (Region::Social, true), (Region::Carousel, false)],
            vec![(Region::Hero, false)],
        ];
        let mut visibility = RegionVisibility::new();
        let mut previous: Vec<Region> = Vec::new();

        for batch in batches {
            visibility.apply_entries(batch);
            let current: Vec<Region> = visibility.visible().collect();
            assert!(previous.iter().all(|region| current.contains(region)));
            previous = current;
        }

        assert_eq!(previous, vec![Region::Carousel, Region::Contact, Region::Social]);
    }

    #[test]
    fn mark_all_reveals_only_regions_not_yet_seen() {
        let mut visibility = RegionVisibility::new();
        visibility.mark(Region::Download);

        let revealed = visibility.mark_all();

        assert_eq!(revealed.len(), 4);
        assert!(!revealed.contains(&Region::Download));
        assert!(Region::ALL.iter().all(|region| visibility.is_visible(*region)));
    }

    #[test]
    fn lazy_reveal_falls_back_to_eager_without_observer() {
        assert_eq!(RevealMode::Lazy.effective(true), RevealMode::Lazy);
        assert_eq!(RevealMode::Lazy.effective(false), RevealMode::Eager);
        assert_eq!(RevealMode::Eager.effective(true), RevealMode::Eager);
    }

    #[test]
    fn default_observer_options_shrink_bottom_edge() {
        let options = ObserverOptions::default();

        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin(), "0px 0px -50px 0px");
    }
}
