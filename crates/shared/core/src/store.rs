use crate::category::Category;
use crate::window::{Window, merge};

/// One window per category, all created empty
///
/// Pure data structure: callers are responsible for serializing access
/// (the coordinator keeps it behind a mutex).
#[derive(Debug, Clone, Default)]
pub struct WindowStore {
    windows: [Window; 5],
}

impl WindowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Window for a category
    pub fn get(&self, category: Category) -> &Window {
        &self.windows[category.index()]
    }

    /// Returns true if `value` is in the category's current contents
    pub fn contains(&self, category: Category, value: i64) -> bool {
        self.get(category).contains(value)
    }

    /// Merge a batch into a category's window and write the result back
    ///
    /// Returns the numbers that were added.
    pub fn apply(&mut self, category: Category, batch: &[i64]) -> Vec<i64> {
        let slot = &mut self.windows[category.index()];
        let (next, added) = merge(slot, batch);
        *slot = next;
        added
    }

    /// Replace a category's window with an empty one
    pub fn reset(&mut self, category: Category) {
        self.windows[category.index()] = Window::new();
    }

    /// All windows in [`Category::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Window)> {
        Category::ALL.into_iter().zip(self.windows.iter())
    }
}
