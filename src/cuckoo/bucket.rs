use crate::cuckoo::{BUCKET_SIZE, EMPTY_FINGERPRINT};

/// A fixed set of fingerprint slots. A slot holding `EMPTY_FINGERPRINT` is free.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Bucket {
    slots: [u8; BUCKET_SIZE],
}

impl Bucket {
    /// Places `fingerprint` in the first free slot. Returns `false` if every slot is occupied.
    pub fn insert(&mut self, fingerprint: u8) -> bool {
        debug_assert_ne!(fingerprint, EMPTY_FINGERPRINT);
        match self.slots.iter_mut().find(|slot| **slot == EMPTY_FINGERPRINT) {
            Some(slot) => {
                *slot = fingerprint;
                true
            }
            None => false,
        }
    }

    /// Frees the first slot holding `fingerprint`. Other copies of the same fingerprint are left
    /// in place.
    pub fn delete(&mut self, fingerprint: u8) -> bool {
        match self.slots.iter_mut().find(|slot| **slot == fingerprint) {
            Some(slot) => {
                *slot = EMPTY_FINGERPRINT;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, fingerprint: u8) -> bool {
        self.slots.contains(&fingerprint)
    }

    /// Stores `fingerprint` at `slot` and returns the fingerprint it displaced.
    #[inline]
    pub fn swap(&mut self, slot: usize, fingerprint: u8) -> u8 {
        std::mem::replace(&mut self.slots[slot], fingerprint)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| **slot != EMPTY_FINGERPRINT)
            .count()
    }

    pub fn clear(&mut self) {
        self.slots = [EMPTY_FINGERPRINT; BUCKET_SIZE];
    }
}
