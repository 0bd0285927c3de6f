use crate::{Slot, SpaceConfig, SpaceId};

/// An allocation arena.
///
/// Items may only be allocated, never released individually. Everything allocated in a space is
/// released together when the space is dropped, which is the only way a [`Slot`] stops resolving.
///
/// # Example
///
/// ```
/// # use space::Space;
/// let mut space = Space::new();
/// let a = space.alloc("a");
/// let b = space.alloc("b");
/// assert_ne!(a, b);
/// assert_eq!(space.get(b), Some(&"b"));
///
/// let other = Space::<&str>::new();
/// assert_eq!(other.get(a), None);
/// ```
pub struct Space<T> {
    id: SpaceId,
    label: Option<String>,
    items: Vec<T>,
}

impl<T> Space<T> {
    pub fn new() -> Self {
        Self::with_config(&SpaceConfig::default())
    }

    pub fn with_config(config: &SpaceConfig) -> Self {
        let id = SpaceId::next();
        tracing::debug!(
            space = %id,
            label = config.label.as_deref().unwrap_or(""),
            capacity = config.initial_capacity,
            "space created"
        );
        Self {
            id,
            label: config.label.clone(),
            items: Vec::with_capacity(config.initial_capacity),
        }
    }

    pub fn id(&self) -> SpaceId {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Moves `item` into the space and returns the slot it lives in until the space is dropped.
    pub fn alloc(&mut self, item: T) -> Slot {
        let index = self.items.len();
        self.items.push(item);
        Slot {
            space: self.id,
            index,
        }
    }

    /// Reports whether `slot` was allocated by this space.
    pub fn contains(&self, slot: Slot) -> bool {
        slot.space == self.id && slot.index < self.items.len()
    }

    pub fn get(&self, slot: Slot) -> Option<&T> {
        if slot.space != self.id {
            return None;
        }
        self.items.get(slot.index)
    }

    pub fn get_mut(&mut self, slot: Slot) -> Option<&mut T> {
        if slot.space != self.id {
            return None;
        }
        self.items.get_mut(slot.index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &T)> + '_ {
        let id = self.id;
        self.items
            .iter()
            .enumerate()
            .map(move |(index, item)| (Slot { space: id, index }, item))
    }
}

// NOTE: This cannot be `#[derive]`d because `T` is not necessarily `Default`.
impl<T> Default for Space<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Space<T> {
    fn drop(&mut self) {
        tracing::debug!(
            space = %self.id,
            allocations = self.items.len(),
            "space disposed"
        );
    }
}
