pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u32 = 4_000;
pub const DEFAULT_TRANSITION_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    pub max_width: u32,
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
}

/// Tablet and phone layouts keep the single-slide presentation.
pub const BREAKPOINTS: [Breakpoint; 2] = [
    Breakpoint {
        max_width: 768,
        slides_to_show: 1,
        slides_to_scroll: 1,
    },
    Breakpoint {
        max_width: 480,
        slides_to_show: 1,
        slides_to_scroll: 1,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
}

impl Layout {
    const DESKTOP: Self = Self {
        slides_to_show: 1,
        slides_to_scroll: 1,
    };

    /// Picks the narrowest breakpoint that still covers `viewport_width`.
    pub fn for_viewport(viewport_width: f64) -> Self {
        BREAKPOINTS
            .iter()
            .filter(|breakpoint| viewport_width <= f64::from(breakpoint.max_width))
            .min_by_key(|breakpoint| breakpoint.max_width)
            .map(|breakpoint| Self {
                slides_to_show: breakpoint.slides_to_show,
                slides_to_scroll: breakpoint.slides_to_scroll,
            })
            .unwrap_or(Self::DESKTOP)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Playing,
    Paused,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
    playback: Playback,
    generation: u32,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            playback: Playback::Playing,
            generation: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Bumped by every manual jump. The autoplay timer is rebuilt whenever this
    /// changes so a full interval follows the jump.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn pointer_enter(&mut self) {
        self.playback = Playback::Paused;
    }

    pub fn pointer_leave(&mut self) {
        self.playback = Playback::Playing;
    }

    /// Timer tick. Advances and wraps while playing; returns whether the index
    /// moved.
    pub fn tick(&mut self) -> bool {
        if self.playback == Playback::Paused || self.len == 0 {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    /// Jumps straight to a slide, e.g. from an indicator dot.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.len == 0 {
            return false;
        }
        let target = index.min(self.len - 1);
        let moved = target != self.index;
        self.generation = self.generation.wrapping_add(1);
        self.index = target;
        moved
    }
}
