//! Union-find over city ids.
//!
//! `find` locates the root iteratively and then repoints every visited city
//! directly at it, so adversarial chain-shaped merge orders never grow the
//! call stack. `union` attaches the smaller component under the larger one;
//! when sizes tie the root with the lower city id stays on top, which keeps
//! representatives deterministic for a given merge history.

use crate::{
    error::Result,
    network::{CityId, check_city, reserve_per_city},
};

/// Partition of the cities `1..=len` into connected components.
///
/// # Examples
/// ```
/// use portplan_core::{CityId, DisjointSet};
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.union(CityId::new(1), CityId::new(2))?);
/// assert!(!set.union(CityId::new(2), CityId::new(1))?);
/// assert_eq!(set.find(CityId::new(2))?, CityId::new(1));
/// assert_eq!(set.component_count(), 3);
/// # Ok::<(), portplan_core::PlanError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton components.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
        }
    }

    /// Fallible form of [`Self::new`] for caller-sized inputs.
    ///
    /// # Errors
    /// Returns [`crate::PlanError::NetworkTooLarge`] when storage for `len`
    /// cities cannot be reserved.
    pub fn try_new(len: usize) -> Result<Self> {
        let mut parent = reserve_per_city(len)?;
        parent.extend(0..len);
        let mut size = reserve_per_city(len)?;
        size.resize(len, 1);
        Ok(Self {
            parent,
            size,
            components: len,
        })
    }

    /// Returns the number of cities tracked.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no cities are tracked.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the component containing `city`.
    ///
    /// # Errors
    /// Returns [`crate::PlanError::CityOutOfRange`] when `city` is not tracked.
    pub fn find(&mut self, city: CityId) -> Result<CityId> {
        check_city(city.get(), self.len())?;
        Ok(CityId::from_index(self.find_index(city.index())))
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `Ok(false)` without touching the structure when both already
    /// share a component.
    ///
    /// # Errors
    /// Returns [`crate::PlanError::CityOutOfRange`] when either city is not
    /// tracked.
    pub fn union(&mut self, left: CityId, right: CityId) -> Result<bool> {
        check_city(left.get(), self.len())?;
        check_city(right.get(), self.len())?;
        Ok(self.union_indices(left.index(), right.index()))
    }

    /// Returns the number of cities sharing a component with `city`.
    ///
    /// # Errors
    /// Returns [`crate::PlanError::CityOutOfRange`] when `city` is not tracked.
    pub fn component_size(&mut self, city: CityId) -> Result<usize> {
        let root = self.find(city)?;
        Ok(self.size.get(root.index()).copied().unwrap_or(0))
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`crate::PlanError::CityOutOfRange`] when either city is not
    /// tracked.
    pub fn connected(&mut self, left: CityId, right: CityId) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    pub(crate) fn find_index(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    pub(crate) fn union_indices(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find_index(left);
        let right_root = self.find_index(right);
        if left_root == right_root {
            return false;
        }

        let (parent, child) = choose_parent_child(
            left_root,
            right_root,
            self.size[left_root],
            self.size[right_root],
        );
        self.parent[child] = parent;
        self.size[parent] = self.size[parent].saturating_add(self.size[child]);
        self.components = self.components.saturating_sub(1);
        true
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_size: usize,
    right_size: usize,
) -> (usize, usize) {
    if left_size > right_size {
        return (left_root, right_root);
    }
    if right_size > left_size {
        return (right_root, left_root);
    }

    if left_root <= right_root {
        (left_root, right_root)
    } else {
        (right_root, left_root)
    }
}
