use std::cell::Cell;
use std::rc::Rc;

/// Shared "needs redraw" flag.
///
/// State cells and focus moves set it; the runtime loop takes it once per
/// iteration to decide whether the view tree is rebuilt and painted.
#[derive(Debug, Clone)]
pub struct Invalidator {
    dirty: Rc<Cell<bool>>,
}

impl Invalidator {
    /// Starts dirty so the first frame is always painted.
    pub fn new() -> Self {
        Self {
            dirty: Rc::new(Cell::new(true)),
        }
    }

    pub fn invalidate(&self) {
        self.dirty.set(true);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Returns the flag and clears it.
    pub fn take(&self) -> bool {
        self.dirty.replace(false)
    }
}

impl Default for Invalidator {
    fn default() -> Self {
        Self::new()
    }
}
