//! Per-category in-flight tracking
//!
//! At most one fetch per category may be in flight. Acquiring returns a
//! guard; dropping the guard clears the flag, so the flag is released on
//! every exit path, including panics and cancelled futures.

use dashmap::DashSet;
use rollavg_core::Category;

#[derive(Debug, Default)]
pub struct InFlightRegistry {
    active: DashSet<Category>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a category in flight, or `None` if it already is
    pub fn try_acquire(&self, category: Category) -> Option<InFlightGuard<'_>> {
        // DashSet::insert is the atomic check-and-set
        if self.active.insert(category) {
            Some(InFlightGuard {
                registry: self,
                category,
            })
        } else {
            None
        }
    }

    pub fn is_in_flight(&self, category: Category) -> bool {
        self.active.contains(&category)
    }

    pub fn any(&self) -> bool {
        !self.active.is_empty()
    }

    /// Categories currently in flight, in declaration order
    pub fn active(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.active.contains(c))
            .collect()
    }
}

/// Clears the category's in-flight flag when dropped
#[must_use = "the in-flight flag is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    registry: &'a InFlightRegistry,
    category: Category,
}

impl InFlightGuard<'_> {
    pub fn category(&self) -> Category {
        self.category
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.registry.active.remove(&self.category);
    }
}
