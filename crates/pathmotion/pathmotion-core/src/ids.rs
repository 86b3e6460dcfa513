//! Identifiers and a simple allocator for mixer clips.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ClipId(pub u32);

/// Monotonic allocator for ClipId. IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_clip: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_clip(&mut self) -> ClipId {
        let id = ClipId(self.next_clip);
        self.next_clip = self.next_clip.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_clip(), ClipId(0));
        assert_eq!(alloc.alloc_clip(), ClipId(1));
        alloc.reset();
        assert_eq!(alloc.alloc_clip(), ClipId(0));
    }
}
