/// Result of a navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The index changed; the current image must be redisplayed.
    Moved,
    /// Already at the last image (or the list is empty).
    AtEnd,
    /// Already at the first image.
    AtStart,
}

/// Bounds-checked cursor over a list of `count` items. Never wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    count: usize,
}

impl Navigator {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    /// Current position, `None` when there is nothing to show.
    pub fn index(&self) -> Option<usize> {
        (self.count > 0).then_some(self.index)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn advance(&mut self) -> Step {
        if self.index + 1 < self.count {
            self.index += 1;
            Step::Moved
        } else {
            Step::AtEnd
        }
    }

    pub fn retreat(&mut self) -> Step {
        if self.index > 0 {
            self.index -= 1;
            Step::Moved
        } else {
            Step::AtStart
        }
    }
}
