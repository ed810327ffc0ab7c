//! The fixed array of four FX slots plus the primary designation.

use std::sync::Arc;

use al_sys::AlApi;

use crate::api::{SessionProps, EAX_MAX_FX_SLOTS};
use crate::error::Result;
use crate::fx_slot::FxSlot;
use crate::fx_slot_index::FxSlotIndex;
use crate::guid::{Guid, EAX_PRIMARY_FX_SLOT_ID};

pub struct FxSlots {
    slots: [FxSlot; EAX_MAX_FX_SLOTS],
    primary: FxSlotIndex,
    max_active: u32,
}

impl FxSlots {
    pub fn new(api: &Arc<AlApi>) -> Result<FxSlots> {
        Ok(FxSlots {
            slots: [
                FxSlot::new(0, api)?,
                FxSlot::new(1, api)?,
                FxSlot::new(2, api)?,
                FxSlot::new(3, api)?,
            ],
            primary: FxSlotIndex::EMPTY,
            max_active: SessionProps::DEFAULT_MAX_ACTIVE_SENDS,
        })
    }

    pub fn get(&self, index: usize) -> &FxSlot {
        &self.slots[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut FxSlot {
        &mut self.slots[index]
    }

    /// Resolve a source's routing GUID: the primary sentinel follows the
    /// current primary designation, slot ids resolve directly, everything
    /// else (including the null id) resolves to nothing.
    pub fn resolve(&self, id: &Guid) -> FxSlotIndex {
        if *id == EAX_PRIMARY_FX_SLOT_ID {
            return self.primary;
        }
        FxSlotIndex::from_guid(id)
    }

    /// Designate the primary slot. The null id clears the designation.
    pub fn set_primary(&mut self, id: &Guid) {
        self.primary = FxSlotIndex::from_guid(id);
    }

    pub fn primary(&self) -> FxSlotIndex {
        self.primary
    }

    pub fn set_max_active(&mut self, max_active: u32) {
        self.max_active = max_active;
    }

    /// The session's cap on simultaneously routed slots per source.
    pub fn max_active(&self) -> u32 {
        self.max_active
    }
}
