use std::fmt::{self, Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SPACE_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies a [`Space`](crate::Space). Unique for the lifetime of the process.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SpaceId(u64);

impl SpaceId {
    pub(crate) fn next() -> Self {
        Self(NEXT_SPACE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn to_raw(self) -> u64 {
        self.0
    }
}

impl Display for SpaceId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "space#{}", self.0)
    }
}
