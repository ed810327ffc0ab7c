//! The parsed form of one `EAXSet`/`EAXGet` invocation.
//!
//! A raw call arrives as `(property_set_guid, property_id, target_name,
//! buffer, size)`. Construction resolves the GUID through a static table to
//! a dialect and a property-set kind, folds the legacy 2.0/3.0 sets onto
//! their modern equivalents (translating 2.0 property ids on the way), and
//! wraps the caller's buffer behind bounds-checked typed accessors.

use al_sys::ALuint;
use bytemuck::{AnyBitPattern, NoUninit};

use crate::api;
use crate::error::{EaxError, Result};
use crate::fx_slot_index::FxSlotIndex;
use crate::guid::{self, Guid};

/// Which dialect the property-set GUID belongs to.
///
/// The 2.0/3.0 dialects dispatch as 4.0 everywhere except where their wire
/// formats differ (the reverb environment cap and the v2 struct shapes), so
/// the original version survives parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EaxVersion {
    V2,
    V3,
    V4,
    V5,
}

impl EaxVersion {
    /// The modern dialect this call behaves as: 4 or 5.
    pub fn unified(self) -> u32 {
        match self {
            EaxVersion::V5 => 5,
            _ => 4,
        }
    }

    pub fn is_v5(self) -> bool {
        self == EaxVersion::V5
    }
}

/// Top-level routing target of a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertySetId {
    Context,
    FxSlot,
    FxSlotEffect,
    Source,
}

/// The caller-supplied parameter buffer.
///
/// Reads and writes are bounds-checked against the declared size and use
/// unaligned accesses since games hand over arbitrarily packed memory.
#[derive(Clone, Copy, Debug)]
pub struct PropertyBuffer {
    ptr: *mut u8,
    len: usize,
}

impl PropertyBuffer {
    /// An absent buffer: every access fails with `invalid_value`.
    pub const NULL: PropertyBuffer = PropertyBuffer {
        ptr: std::ptr::null_mut(),
        len: 0,
    };

    /// Wrap a raw game buffer.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `len` bytes for the
    /// lifetime of the call being dispatched, or null.
    pub unsafe fn from_raw(ptr: *mut std::ffi::c_void, len: usize) -> PropertyBuffer {
        if ptr.is_null() {
            PropertyBuffer::NULL
        } else {
            PropertyBuffer {
                ptr: ptr.cast(),
                len,
            }
        }
    }

    /// Borrow a value as the buffer, for in-process callers.
    pub fn from_mut<T: NoUninit + AnyBitPattern>(value: &mut T) -> PropertyBuffer {
        PropertyBuffer {
            ptr: (value as *mut T).cast(),
            len: std::mem::size_of::<T>(),
        }
    }

    fn check(&self, need: usize) -> Result {
        if self.ptr.is_null() {
            return Err(EaxError::NullBuffer);
        }
        if self.len < need {
            return Err(EaxError::BufferTooSmall {
                size: self.len,
                need,
            });
        }
        Ok(())
    }

    fn read<T: AnyBitPattern>(&self, index: usize) -> T {
        // Bounds were checked by the caller; the source may be unaligned.
        unsafe {
            self.ptr
                .add(index * std::mem::size_of::<T>())
                .cast::<T>()
                .read_unaligned()
        }
    }

    fn write<T: NoUninit>(&self, index: usize, value: &T) {
        unsafe {
            self.ptr
                .add(index * std::mem::size_of::<T>())
                .cast::<T>()
                .write_unaligned(*value)
        }
    }
}

/// One parsed property call.
#[derive(Clone, Copy, Debug)]
pub struct EaxCall {
    is_get: bool,
    version: EaxVersion,
    property_set: PropertySetId,
    fx_slot_index: FxSlotIndex,
    property_id: u32,
    target_name: ALuint,
    buffer: PropertyBuffer,
}

impl EaxCall {
    pub fn new(
        is_get: bool,
        property_set_guid: &Guid,
        property_id: u32,
        target_name: ALuint,
        buffer: PropertyBuffer,
    ) -> Result<EaxCall> {
        if property_set_guid.is_null() {
            return Err(EaxError::NullPropertySet);
        }

        let route = route_property_set(property_set_guid)
            .ok_or(EaxError::UnknownPropertySet(*property_set_guid))?;

        let property_id = match route.translate {
            IdTranslation::None => property_id,
            IdTranslation::Listener20 => translate_listener20(property_id)?,
            IdTranslation::Buffer20 => translate_buffer20(property_id)?,
        };

        // Slot-addressed calls split on the property id: the high range is
        // the slot itself, the low range the slot's loaded effect.
        let property_set = match route.set {
            PropertySetId::FxSlot if property_id < api::FXSLOT_NONE => {
                PropertySetId::FxSlotEffect
            }
            other => other,
        };

        Ok(EaxCall {
            is_get,
            version: route.version,
            property_set,
            fx_slot_index: route.fx_slot_index,
            property_id,
            target_name,
            buffer,
        })
    }

    pub fn is_get(&self) -> bool {
        self.is_get
    }

    pub fn version(&self) -> EaxVersion {
        self.version
    }

    pub fn property_set(&self) -> PropertySetId {
        self.property_set
    }

    pub fn fx_slot_index(&self) -> FxSlotIndex {
        self.fx_slot_index
    }

    pub fn property_id(&self) -> u32 {
        self.property_id
    }

    pub fn target_name(&self) -> ALuint {
        self.target_name
    }

    /// Fail with `incompatible_eax_version` unless this is a v5 call.
    pub fn require_v5(&self) -> Result {
        if self.version.is_v5() {
            Ok(())
        } else {
            Err(EaxError::IncompatibleVersion {
                required: 5,
                active: self.version.unified(),
            })
        }
    }

    /// Read one `T` from the front of the buffer.
    pub fn value<T: AnyBitPattern>(&self) -> Result<T> {
        self.buffer.check(std::mem::size_of::<T>())?;
        Ok(self.buffer.read(0))
    }

    /// Read as many whole `T` records as the declared size holds (at least
    /// one).
    pub fn values<T: AnyBitPattern>(&self) -> Result<Vec<T>> {
        self.buffer.check(std::mem::size_of::<T>())?;
        let count = self.buffer.len / std::mem::size_of::<T>();
        Ok((0..count).map(|index| self.buffer.read(index)).collect())
    }

    /// Write one `T` to the front of the buffer.
    pub fn set_value<T: NoUninit>(&self, value: T) -> Result {
        self.buffer.check(std::mem::size_of::<T>())?;
        self.buffer.write(0, &value);
        Ok(())
    }

    /// Write a full slice of records back to the buffer.
    pub fn set_values<T: NoUninit>(&self, values: &[T]) -> Result {
        self.buffer.check(std::mem::size_of::<T>() * values.len())?;
        for (index, value) in values.iter().enumerate() {
            self.buffer.write(index, value);
        }
        Ok(())
    }
}

enum IdTranslation {
    None,
    Listener20,
    Buffer20,
}

struct PropertySetRoute {
    version: EaxVersion,
    set: PropertySetId,
    fx_slot_index: FxSlotIndex,
    translate: IdTranslation,
}

fn route_property_set(id: &Guid) -> Option<PropertySetRoute> {
    use {EaxVersion as V, PropertySetId as S};

    let route = |version, set, slot, translate| {
        Some(PropertySetRoute {
            version,
            set,
            fx_slot_index: slot,
            translate,
        })
    };
    let slot = FxSlotIndex::new;
    let none = FxSlotIndex::EMPTY;

    // The legacy listener is the reverb on slot 0; the legacy buffer is the
    // source property set.
    match *id {
        guid::EAX20_LISTENER_PROPERTIES => {
            route(V::V2, S::FxSlot, slot(0), IdTranslation::Listener20)
        }
        guid::EAX20_BUFFER_PROPERTIES => route(V::V2, S::Source, none, IdTranslation::Buffer20),
        guid::EAX30_LISTENER_PROPERTIES => route(V::V3, S::FxSlot, slot(0), IdTranslation::None),
        guid::EAX30_BUFFER_PROPERTIES => route(V::V3, S::Source, none, IdTranslation::None),

        guid::EAX40_CONTEXT => route(V::V4, S::Context, none, IdTranslation::None),
        guid::EAX50_CONTEXT => route(V::V5, S::Context, none, IdTranslation::None),

        guid::EAX40_FX_SLOT0 => route(V::V4, S::FxSlot, slot(0), IdTranslation::None),
        guid::EAX40_FX_SLOT1 => route(V::V4, S::FxSlot, slot(1), IdTranslation::None),
        guid::EAX40_FX_SLOT2 => route(V::V4, S::FxSlot, slot(2), IdTranslation::None),
        guid::EAX40_FX_SLOT3 => route(V::V4, S::FxSlot, slot(3), IdTranslation::None),
        guid::EAX50_FX_SLOT0 => route(V::V5, S::FxSlot, slot(0), IdTranslation::None),
        guid::EAX50_FX_SLOT1 => route(V::V5, S::FxSlot, slot(1), IdTranslation::None),
        guid::EAX50_FX_SLOT2 => route(V::V5, S::FxSlot, slot(2), IdTranslation::None),
        guid::EAX50_FX_SLOT3 => route(V::V5, S::FxSlot, slot(3), IdTranslation::None),

        guid::EAX40_SOURCE => route(V::V4, S::Source, none, IdTranslation::None),
        guid::EAX50_SOURCE => route(V::V5, S::Source, none, IdTranslation::None),

        _ => None,
    }
}

fn translate_listener20(id: u32) -> Result<u32> {
    Ok(match id {
        0 => api::REVERB_NONE,
        1 => api::REVERB_ALLPARAMETERS,
        2 => api::REVERB_ROOM,
        3 => api::REVERB_ROOMHF,
        4 => api::REVERB_ROOMROLLOFFFACTOR,
        5 => api::REVERB_DECAYTIME,
        6 => api::REVERB_DECAYHFRATIO,
        7 => api::REVERB_REFLECTIONS,
        8 => api::REVERB_REFLECTIONSDELAY,
        9 => api::REVERB_REVERB,
        10 => api::REVERB_REVERBDELAY,
        11 => api::REVERB_ENVIRONMENT,
        12 => api::REVERB_ENVIRONMENTSIZE,
        13 => api::REVERB_ENVIRONMENTDIFFUSION,
        14 => api::REVERB_AIRABSORPTIONHF,
        15 => api::REVERB_FLAGS,
        other => {
            return Err(EaxError::UnknownProperty {
                set: "listener",
                id: other,
            })
        }
    })
}

fn translate_buffer20(id: u32) -> Result<u32> {
    Ok(match id {
        0 => api::SOURCE_NONE,
        1 => api::SOURCE_ALLPARAMETERS,
        2 => api::SOURCE_DIRECT,
        3 => api::SOURCE_DIRECTHF,
        4 => api::SOURCE_ROOM,
        5 => api::SOURCE_ROOMHF,
        6 => api::SOURCE_ROOMROLLOFFFACTOR,
        7 => api::SOURCE_OBSTRUCTION,
        8 => api::SOURCE_OBSTRUCTIONLFRATIO,
        9 => api::SOURCE_OCCLUSION,
        10 => api::SOURCE_OCCLUSIONLFRATIO,
        11 => api::SOURCE_OCCLUSIONROOMRATIO,
        12 => api::SOURCE_OUTSIDEVOLUMEHF,
        13 => api::SOURCE_AIRABSORPTIONFACTOR,
        14 => api::SOURCE_FLAGS,
        other => {
            return Err(EaxError::UnknownProperty {
                set: "buffer",
                id: other,
            })
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guid::*;

    fn parse(guid: &Guid, property_id: u32) -> EaxCall {
        EaxCall::new(false, guid, property_id, 0, PropertyBuffer::NULL).unwrap()
    }

    #[test]
    fn null_property_set_is_rejected() {
        let result = EaxCall::new(false, &Guid::NULL, 0, 0, PropertyBuffer::NULL);
        assert_eq!(result.unwrap_err(), EaxError::NullPropertySet);
    }

    #[test]
    fn slot_calls_split_on_the_property_id_range() {
        let slot_call = parse(&EAX50_FX_SLOT2, crate::api::FXSLOT_VOLUME);
        assert_eq!(slot_call.property_set(), PropertySetId::FxSlot);
        assert_eq!(slot_call.fx_slot_index().get(), Some(2));
        assert_eq!(slot_call.version(), EaxVersion::V5);

        let effect_call = parse(&EAX50_FX_SLOT2, crate::api::REVERB_DECAYTIME);
        assert_eq!(effect_call.property_set(), PropertySetId::FxSlotEffect);
        assert_eq!(effect_call.fx_slot_index().get(), Some(2));
    }

    #[test]
    fn legacy_listener_routes_to_slot_zero_reverb() {
        // EAX 2.0 numbers its listener properties differently; ROOM is 2.
        let call = parse(&EAX20_LISTENER_PROPERTIES, 2);
        assert_eq!(call.property_set(), PropertySetId::FxSlotEffect);
        assert_eq!(call.fx_slot_index().get(), Some(0));
        assert_eq!(call.property_id(), crate::api::REVERB_ROOM);
        assert_eq!(call.version(), EaxVersion::V2);

        let call = parse(&EAX30_LISTENER_PROPERTIES, crate::api::REVERB_ROOM);
        assert_eq!(call.property_id(), crate::api::REVERB_ROOM);
        assert_eq!(call.version(), EaxVersion::V3);
    }

    #[test]
    fn legacy_buffer_routes_to_the_source_set() {
        let call = parse(&EAX20_BUFFER_PROPERTIES, 2);
        assert_eq!(call.property_set(), PropertySetId::Source);
        assert_eq!(call.property_id(), crate::api::SOURCE_DIRECT);
    }

    #[test]
    fn buffer_accessors_check_bounds() {
        let mut value: u32 = 0xDEAD_BEEF;
        let call = EaxCall::new(
            false,
            &EAX50_CONTEXT,
            crate::api::CONTEXT_DISTANCEFACTOR,
            0,
            PropertyBuffer::from_mut(&mut value),
        )
        .unwrap();

        assert_eq!(call.value::<u32>().unwrap(), 0xDEAD_BEEF);
        assert!(call.value::<[u32; 2]>().is_err());

        call.set_value(7u32).unwrap();
        assert_eq!(call.value::<u32>().unwrap(), 7);
    }

    #[test]
    fn v5_guard() {
        let v4 = parse(&EAX40_CONTEXT, 0);
        let v5 = parse(&EAX50_CONTEXT, 0);
        assert!(v4.require_v5().is_err());
        assert!(v5.require_v5().is_ok());
    }
}
