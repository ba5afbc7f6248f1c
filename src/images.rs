/// Per-slide load flags. A flag flips to `true` once and stays there; a slide
/// whose image never loads keeps its skeleton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageLoadTracker {
    loaded: Vec<bool>,
}

impl ImageLoadTracker {
    pub fn new(len: usize) -> Self {
        Self {
            loaded: vec![false; len],
        }
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.get(index).copied().unwrap_or(false)
    }

    /// Returns `true` when the flag changed.
    pub fn mark_loaded(&mut self, index: usize) -> bool {
        match self.loaded.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn loaded_count(&self) -> usize {
        self.loaded.iter().filter(|flag| **flag).count()
    }
}
