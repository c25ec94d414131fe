//! Navigation capability injected into the redirect helpers.

use std::cell::RefCell;

/// Client-side router the helpers navigate through.
///
/// # Implementations
///
/// - [`MemoryHistory`] - in-memory stack, used by the CLI and tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Pushes a new entry onto the history stack.
    fn push(&self, path: &str);

    /// Pathname of the page currently shown, if the router has a location.
    fn current_pathname(&self) -> Option<String>;
}

/// History kept in memory.
///
/// The current pathname is the last pushed path, or the starting location when
/// nothing has been pushed yet.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    initial: Option<String>,
    entries: RefCell<Vec<String>>,
}

impl MemoryHistory {
    /// Creates a history positioned at `pathname`.
    pub fn at(pathname: impl Into<String>) -> Self {
        Self {
            initial: Some(pathname.into()),
            entries: RefCell::new(Vec::new()),
        }
    }

    /// Paths pushed so far, oldest first.
    pub fn pushed(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl Navigator for MemoryHistory {
    fn push(&self, path: &str) {
        self.entries.borrow_mut().push(path.to_string());
    }

    fn current_pathname(&self) -> Option<String> {
        self.entries
            .borrow()
            .last()
            .cloned()
            .or_else(|| self.initial.clone())
    }
}
