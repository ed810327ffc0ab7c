//! Resolution of slot GUIDs to the 0..3 slot index.

use crate::error::{EaxError, Result};
use crate::guid::{Guid, EAX40_FX_SLOT_IDS, EAX50_FX_SLOT_IDS};

/// A possibly-empty FX slot index with value semantics.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct FxSlotIndex(Option<usize>);

impl FxSlotIndex {
    pub const EMPTY: FxSlotIndex = FxSlotIndex(None);

    /// Wrap a known-good index.
    pub const fn new(index: usize) -> FxSlotIndex {
        assert!(index < crate::api::EAX_MAX_FX_SLOTS);
        FxSlotIndex(Some(index))
    }

    /// Linear search of the eight recognized slot ids (four per dialect).
    /// Unrecognized GUIDs, including the null and primary sentinels, give
    /// the empty index.
    pub fn from_guid(guid: &Guid) -> FxSlotIndex {
        for (index, id) in EAX40_FX_SLOT_IDS.iter().enumerate() {
            if id == guid {
                return FxSlotIndex(Some(index));
            }
        }
        for (index, id) in EAX50_FX_SLOT_IDS.iter().enumerate() {
            if id == guid {
                return FxSlotIndex(Some(index));
            }
        }
        FxSlotIndex(None)
    }

    pub const fn get(self) -> Option<usize> {
        self.0
    }

    pub const fn has_value(self) -> bool {
        self.0.is_some()
    }

    /// The index, or `invalid_operation` where a slot is required.
    pub fn require(self) -> Result<usize> {
        self.0.ok_or(EaxError::MissingFxSlotIndex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guid::*;

    #[test]
    fn both_dialects_resolve_to_the_same_slots() {
        for index in 0..4 {
            assert_eq!(
                FxSlotIndex::from_guid(&EAX40_FX_SLOT_IDS[index]).get(),
                Some(index)
            );
            assert_eq!(
                FxSlotIndex::from_guid(&EAX50_FX_SLOT_IDS[index]).get(),
                Some(index)
            );
        }
    }

    #[test]
    fn sentinels_stay_empty() {
        assert_eq!(FxSlotIndex::from_guid(&Guid::NULL), FxSlotIndex::EMPTY);
        assert_eq!(
            FxSlotIndex::from_guid(&EAX_PRIMARY_FX_SLOT_ID),
            FxSlotIndex::EMPTY
        );
        assert!(FxSlotIndex::EMPTY.require().is_err());
    }
}
