use crate::{
    analytics::{AnalyticsEvent, EventEmitter},
    carousel::{CarouselState, Playback},
    config::LandingConfig,
    images::ImageLoadTracker,
    scroll::{MilestoneBand, ScrollMetrics, ScrollTracker},
    visibility::{Region, RegionVisibility, RevealMode},
};

/// All in-memory state of one page view. Browser callbacks are serialized by
/// the event loop, so each handler gets exclusive access for its duration.
#[derive(Clone, Debug)]
pub struct PageSession {
    reveal: RevealMode,
    visibility: RegionVisibility,
    scroll: ScrollTracker,
    carousel: CarouselState,
    images: ImageLoadTracker,
}

impl PageSession {
    pub fn new(config: &LandingConfig, slide_count: usize) -> Self {
        Self {
            reveal: config.reveal,
            visibility: RegionVisibility::new(),
            scroll: ScrollTracker::new(),
            carousel: CarouselState::new(slide_count),
            images: ImageLoadTracker::new(slide_count),
        }
    }

    /// Resolves the reveal mode against the environment. Eager reveal marks
    /// every region at once; lazy reveal waits for observer batches.
    pub fn mount(&mut self, observer_supported: bool) -> RevealMode {
        self.reveal = self.reveal.effective(observer_supported);
        if self.reveal == RevealMode::Eager {
            self.visibility.mark_all();
        }
        self.reveal
    }

    #[cfg(test)]
    pub fn reveal_mode(&self) -> RevealMode {
        self.reveal
    }

    pub fn is_revealed(&self, region: Region) -> bool {
        self.visibility.is_visible(region)
    }

    /// Returns whether any region was newly revealed.
    pub fn on_intersections(&mut self, entries: impl IntoIterator<Item = (Region, bool)>) -> bool {
        !self.visibility.apply_entries(entries).is_empty()
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics, emitter: &EventEmitter) -> Option<MilestoneBand> {
        let band = self.scroll.observe(metrics)?;
        emitter.track_name(band.event_name());
        Some(band)
    }

    #[cfg(test)]
    pub fn max_scroll(&self) -> u32 {
        self.scroll.max_scroll()
    }

    pub fn on_tick(&mut self) -> bool {
        self.carousel.tick()
    }

    pub fn on_pointer_enter(&mut self) {
        self.carousel.pointer_enter();
    }

    pub fn on_pointer_leave(&mut self) {
        self.carousel.pointer_leave();
    }

    pub fn on_dot_click(&mut self, index: usize, emitter: &EventEmitter) -> bool {
        emitter.track(AnalyticsEvent::new("carousel_dot_click").with("index", index));
        self.carousel.go_to(index)
    }

    pub fn current_slide(&self) -> usize {
        self.carousel.index()
    }

    pub fn slide_count(&self) -> usize {
        self.carousel.len()
    }

    pub fn playback(&self) -> Playback {
        self.carousel.playback()
    }

    pub fn autoplay_generation(&self) -> u32 {
        self.carousel.generation()
    }

    pub fn on_image_load(&mut self, index: usize) -> bool {
        self.images.mark_loaded(index)
    }

    pub fn is_slide_loaded(&self, index: usize) -> bool {
        self.images.is_loaded(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testing::{RecordingLog, RecordingSink};

    fn emitter() -> (EventEmitter, RecordingLog) {
        let log = RecordingLog::default();
        (EventEmitter::new(log.clone(), RecordingSink::default()), log)
    }

    fn metrics(percent_of_2000: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y: percent_of_2000 * 20.0,
            document_height: 3000.0,
            viewport_height: 1000.0,
        }
    }

    #[test]
    fn lazy_mount_waits_for_observer() {
        let mut session = PageSession::new(&LandingConfig::default(), 5);

        assert_eq!(session.mount(true), RevealMode::Lazy);
        assert!(Region::ALL.iter().all(|region| !session.is_revealed(*region)));

        assert!(session.on_intersections([(Region::Hero, true)]));
        assert!(!session.on_intersections([(Region::Hero, false)]));
        assert!(session.is_revealed(Region::Hero));
    }

    #[test]
    fn missing_observer_reveals_everything_at_mount() {
        let mut session = PageSession::new(&LandingConfig::default(), 5);

        assert_eq!(session.mount(false), RevealMode::Eager);
        assert_eq!(session.reveal_mode(), RevealMode::Eager);
        assert!(Region::ALL.iter().all(|region| session.is_revealed(*region)));
    }

    #[test]
    fn eager_config_reveals_even_with_observer() {
        let config = LandingConfig {
            reveal: RevealMode::Eager,
            ..LandingConfig::default()
        };
        let mut session = PageSession::new(&config, 5);

        session.mount(true);

        assert!(session.is_revealed(Region::Social));
    }

    #[test]
    fn scroll_milestones_flow_through_the_emitter() {
        let (emitter, log) = emitter();
        let mut session = PageSession::new(&LandingConfig::default(), 5);

        session.on_scroll(metrics(10.0), &emitter);
        session.on_scroll(metrics(82.0), &emitter);
        session.on_scroll(metrics(40.0), &emitter);
        session.on_scroll(metrics(100.0), &emitter);

        assert_eq!(
            log.event_names(),
            vec!["scroll_75_percent".to_string(), "scroll_100_percent".to_string()]
        );
        assert_eq!(session.max_scroll(), 100);
    }

    #[test]
    fn hover_pauses_autoplay_between_ticks() {
        let mut session = PageSession::new(&LandingConfig::default(), 5);

        assert!(session.on_tick());
        session.on_pointer_enter();
        assert!(!session.on_tick());
        assert_eq!(session.playback(), Playback::Paused);
        session.on_pointer_leave();
        assert!(session.on_tick());

        assert_eq!(session.current_slide(), 2);
    }

    #[test]
    fn dot_click_is_tracked_and_moves_slide() {
        let (emitter, log) = emitter();
        let mut session = PageSession::new(&LandingConfig::default(), 5);

        assert!(session.on_dot_click(3, &emitter));

        assert_eq!(session.current_slide(), 3);
        assert_eq!(log.event_names(), vec!["carousel_dot_click".to_string()]);
        assert_eq!(log.records.borrow()[0].1["attributes"]["index"], 3);
    }

    #[test]
    fn dot_click_resets_autoplay_timer() {
        let (emitter, _log) = emitter();
        let mut session = PageSession::new(&LandingConfig::default(), 5);
        session.on_tick();
        let before = session.autoplay_generation();

        session.on_dot_click(3, &emitter);
        assert_ne!(session.autoplay_generation(), before);

        let after_jump = session.autoplay_generation();
        session.on_tick();
        assert_eq!(session.autoplay_generation(), after_jump);
        assert_eq!(session.current_slide(), 4);
    }

    #[test]
    fn autoplay_ticks_emit_nothing() {
        let (emitter, log) = emitter();
        let mut session = PageSession::new(&LandingConfig::default(), 5);

        for _ in 0..7 {
            session.on_tick();
        }
        session.on_scroll(metrics(5.0), &emitter);

        assert_eq!(session.current_slide(), 2);
        assert!(log.records.borrow().is_empty());
    }

    #[test]
    fn image_loads_latch_per_slide() {
        let mut session = PageSession::new(&LandingConfig::default(), 5);

        assert!(session.on_image_load(1));
        assert!(!session.on_image_load(1));
        assert!(session.is_slide_loaded(1));
        assert!(!session.is_slide_loaded(0));
        assert_eq!(session.slide_count(), 5);
    }
}
