use crate::SpaceId;

/// A reference to an item allocated in a [`Space`](crate::Space).
///
/// A slot remembers which space produced it, so it never resolves against any other space.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Slot {
    pub(crate) space: SpaceId,
    pub(crate) index: usize,
}

impl Slot {
    pub fn space(self) -> SpaceId {
        self.space
    }

    pub fn index(self) -> usize {
        self.index
    }
}
