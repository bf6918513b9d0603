//! Shared storage for the level's color sequence.

use crate::types::Region;
use heapless::Vec;

/// The canonical randomly-generated sequence for the current level, plus the
/// length of the prefix currently in play.
///
/// The supervisor is the only writer; playback and verification read it. The
/// active length never exceeds the sequence length, and readers must only ask
/// for indices below the active length.
///
/// # Type Parameters
/// * `N` - Maximum sequence length (the cap on how far levels can grow)
#[derive(Debug, Clone)]
pub struct SequenceStore<const N: usize> {
    sequence: Vec<Region, N>,
    active_len: usize,
}

impl<const N: usize> SequenceStore<N> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            active_len: 0,
        }
    }

    /// Replaces the sequence with a copy of `values`.
    ///
    /// The contents are copied; the caller keeps no aliasing access to the
    /// stored sequence. Values beyond the capacity `N` are dropped, and the
    /// active length is clamped to the new sequence length.
    pub fn set_sequence(&mut self, values: &[Region]) {
        debug_assert!(values.len() <= N, "sequence exceeds store capacity");
        let len = values.len().min(N);
        self.sequence.clear();
        // Cannot fail: len is clamped to capacity above.
        let _ = self.sequence.extend_from_slice(&values[..len]);
        self.active_len = self.active_len.min(len);
    }

    /// Returns the sequence entry at `index`.
    ///
    /// Callers must keep `index` below the active length.
    #[inline]
    pub fn value(&self, index: usize) -> Region {
        debug_assert!(index < self.active_len, "read past the active prefix");
        self.sequence[index]
    }

    /// Length of the full sequence for the current level.
    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// True when no sequence has been generated yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Sets the length of the prefix currently being played and verified.
    ///
    /// Clamped to the sequence length.
    pub fn set_active_len(&mut self, active_len: usize) {
        debug_assert!(active_len <= self.sequence.len(), "active prefix too long");
        self.active_len = active_len.min(self.sequence.len());
    }

    /// Length of the prefix currently being played and verified.
    #[inline]
    pub fn active_len(&self) -> usize {
        self.active_len
    }
}

impl<const N: usize> Default for SequenceStore<N> {
    fn default() -> Self {
        Self::new()
    }
}
