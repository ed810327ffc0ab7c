//! Per-source state: the scalar property block, per-slot send records, the
//! active routing list, and the derived low-pass filters.
//!
//! Writes follow the same validate / defer / commit discipline as the
//! effects. The commit recomputes the two derived filters
//!
//! ```text
//! direct.gain    = mb(direct + obstruction*obstruction_lf
//!                       + occlusion*occlusion_direct*occlusion_lf)
//! direct.gain_hf = mb(direct_hf + obstruction + occlusion*occlusion_direct)
//! room.gain      = mb(room + occlusion*occlusion_room*occlusion_lf)
//! room.gain_hf   = mb(room_hf + occlusion*occlusion_room)
//! ```
//!
//! and rebinds the source's filter onto the direct path and onto every
//! auxiliary send whose slot is in the active mask; inactive sends are
//! cleared to the null filter.

use std::sync::Arc;

use al_sys::*;

use crate::al_object::EfxFilter;
use crate::api::*;
use crate::call::EaxCall;
use crate::effects::dirty_bits;
use crate::error::{EaxError, Result};
use crate::fx_slots::FxSlots;
use crate::guid::{Guid, EAX_PRIMARY_FX_SLOT_ID};
use crate::unit::mb_to_gain;
use crate::validate;

dirty_bits! {
    pub(crate) struct SourceDirty {
        filters, flags, macro_fx_factor, active_fx_slots, sends, speaker_levels,
    }
}

/// Everything a source shadows for the legacy API.
#[derive(Clone, Copy, PartialEq)]
struct SourceShadow {
    source: SourceProps,
    macro_fx_factor: f32,
    active_fx_slots: ActiveFxSlots,
    /// Send records per receiving slot index.
    sends: [SendRecord; EAX_MAX_FX_SLOTS],
    /// Levels per speaker id, v5 only.
    speaker_levels: [i32; SPEAKER_COUNT],
}

/// One per-slot send record; the occlusion family shares the source
/// defaults.
#[derive(Clone, Copy, PartialEq)]
struct SendRecord {
    send: i32,
    send_hf: i32,
    occlusion: i32,
    occlusion_lf_ratio: f32,
    occlusion_room_ratio: f32,
    occlusion_direct_ratio: f32,
    exclusion: i32,
    exclusion_lf_ratio: f32,
}

impl SendRecord {
    fn default_record() -> SendRecord {
        SendRecord {
            send: SendProps::DEFAULT_SEND,
            send_hf: SendProps::DEFAULT_SEND_HF,
            occlusion: 0,
            occlusion_lf_ratio: SourceProps::DEFAULT_OCCLUSION_LF_RATIO,
            occlusion_room_ratio: SourceProps::DEFAULT_OCCLUSION_ROOM_RATIO,
            occlusion_direct_ratio: SourceProps::DEFAULT_OCCLUSION_DIRECT_RATIO,
            exclusion: 0,
            exclusion_lf_ratio: SourceProps::DEFAULT_EXCLUSION_LF_RATIO,
        }
    }
}

/// The two low-pass parameters pushed to the driver filter object.
#[derive(Clone, Copy, Debug, PartialEq)]
struct LowPassParam {
    gain: f32,
    gain_hf: f32,
}

pub struct Source {
    name: ALuint,
    filter: EfxFilter,
    api: Arc<AlApi>,
    props: SourceShadow,
    deferred: SourceShadow,
    dirty: SourceDirty,
    active_mask: [bool; EAX_MAX_FX_SLOTS],
    uses_primary_id: bool,
    has_active_fx_slots: bool,
}

impl Source {
    pub fn new(name: ALuint, api: &Arc<AlApi>, fx_slots: &FxSlots) -> Result<Source> {
        let filter = EfxFilter::new(api)?;
        // SAFETY: resolved table, engine mutex held by the caller.
        unsafe { (api.efx.alFilteri)(filter.name(), AL_FILTER_TYPE, AL_FILTER_LOWPASS) };

        let shadow = SourceShadow {
            source: SourceProps::default(),
            macro_fx_factor: SourceProps50::DEFAULT_MACRO_FX_FACTOR,
            active_fx_slots: ActiveFxSlots::DEFAULT_3D,
            sends: [SendRecord::default_record(); EAX_MAX_FX_SLOTS],
            speaker_levels: [SpeakerLevelProps::DEFAULT_LEVEL; SPEAKER_COUNT],
        };

        let mut source = Source {
            name,
            filter,
            api: Arc::clone(api),
            props: shadow,
            deferred: shadow,
            dirty: SourceDirty::NONE,
            active_mask: [false; EAX_MAX_FX_SLOTS],
            uses_primary_id: false,
            has_active_fx_slots: false,
        };
        source.recompute_routing(fx_slots);
        source.apply_routing(fx_slots);
        source.set_efx_flag_autos();
        Ok(source)
    }

    pub fn name(&self) -> ALuint {
        self.name
    }

    pub fn active_mask(&self) -> [bool; EAX_MAX_FX_SLOTS] {
        self.active_mask
    }

    pub fn uses_primary_id(&self) -> bool {
        self.uses_primary_id
    }

    /// Re-derive and re-push the filters, e.g. after a slot-level occlusion
    /// change.
    pub fn update_filters(&mut self, fx_slots: &FxSlots) {
        self.apply_routing(fx_slots);
    }

    /// The primary designation moved; sources routed through the sentinel
    /// follow it.
    pub fn on_primary_fx_slot_changed(&mut self, fx_slots: &FxSlots) {
        if !self.uses_primary_id {
            return;
        }
        self.recompute_routing(fx_slots);
        self.apply_routing(fx_slots);
    }

    pub fn dispatch(
        &mut self,
        call: &EaxCall,
        fx_slots: &FxSlots,
        session_version: u32,
    ) -> Result {
        if call.is_get() {
            self.get(call)
        } else {
            self.set(call, fx_slots, session_version)
        }
    }

    // Gets.

    fn get(&self, call: &EaxCall) -> Result {
        use crate::call::EaxVersion;

        match call.property_id() {
            SOURCE_NONE => Ok(()),
            SOURCE_ALLPARAMETERS => match call.version() {
                EaxVersion::V5 => call.set_value(SourceProps50 {
                    source: self.props.source,
                    macro_fx_factor: self.props.macro_fx_factor,
                }),
                EaxVersion::V2 => call.set_value(self.buffer20()),
                _ => call.set_value(self.props.source),
            },
            SOURCE_OBSTRUCTIONPARAMETERS => call.set_value(ObstructionProps {
                obstruction: self.props.source.obstruction,
                obstruction_lf_ratio: self.props.source.obstruction_lf_ratio,
            }),
            SOURCE_OCCLUSIONPARAMETERS => call.set_value(OcclusionProps {
                occlusion: self.props.source.occlusion,
                occlusion_lf_ratio: self.props.source.occlusion_lf_ratio,
                occlusion_room_ratio: self.props.source.occlusion_room_ratio,
                occlusion_direct_ratio: self.props.source.occlusion_direct_ratio,
            }),
            SOURCE_EXCLUSIONPARAMETERS => call.set_value(ExclusionProps {
                exclusion: self.props.source.exclusion,
                exclusion_lf_ratio: self.props.source.exclusion_lf_ratio,
            }),
            SOURCE_DIRECT => call.set_value(self.props.source.direct),
            SOURCE_DIRECTHF => call.set_value(self.props.source.direct_hf),
            SOURCE_ROOM => call.set_value(self.props.source.room),
            SOURCE_ROOMHF => call.set_value(self.props.source.room_hf),
            SOURCE_OBSTRUCTION => call.set_value(self.props.source.obstruction),
            SOURCE_OBSTRUCTIONLFRATIO => call.set_value(self.props.source.obstruction_lf_ratio),
            SOURCE_OCCLUSION => call.set_value(self.props.source.occlusion),
            SOURCE_OCCLUSIONLFRATIO => call.set_value(self.props.source.occlusion_lf_ratio),
            SOURCE_OCCLUSIONROOMRATIO => call.set_value(self.props.source.occlusion_room_ratio),
            SOURCE_OCCLUSIONDIRECTRATIO => {
                call.set_value(self.props.source.occlusion_direct_ratio)
            }
            SOURCE_EXCLUSION => call.set_value(self.props.source.exclusion),
            SOURCE_EXCLUSIONLFRATIO => call.set_value(self.props.source.exclusion_lf_ratio),
            SOURCE_OUTSIDEVOLUMEHF => call.set_value(self.props.source.outside_volume_hf),
            SOURCE_DOPPLERFACTOR => call.set_value(self.props.source.doppler_factor),
            SOURCE_ROLLOFFFACTOR => call.set_value(self.props.source.rolloff_factor),
            SOURCE_ROOMROLLOFFFACTOR => call.set_value(self.props.source.room_rolloff_factor),
            SOURCE_AIRABSORPTIONFACTOR => call.set_value(self.props.source.air_absorption_factor),
            SOURCE_FLAGS => call.set_value(self.props.source.flags),
            SOURCE_SENDPARAMETERS => self.get_send_parameters(call),
            SOURCE_ALLSENDPARAMETERS => self.get_all_send_parameters(call),
            SOURCE_OCCLUSIONSENDPARAMETERS => self.get_occlusion_send_parameters(call),
            SOURCE_EXCLUSIONSENDPARAMETERS => self.get_exclusion_send_parameters(call),
            SOURCE_ACTIVEFXSLOTID => self.get_active_fx_slots(call),
            SOURCE_MACROFXFACTOR => {
                call.require_v5()?;
                call.set_value(self.props.macro_fx_factor)
            }
            SOURCE_SPEAKERLEVELS => {
                call.require_v5()?;
                self.get_speaker_levels(call)
            }
            SOURCE_ALL2DPARAMETERS => {
                call.require_v5()?;
                call.set_value(Source2dProps {
                    direct: self.props.source.direct,
                    direct_hf: self.props.source.direct_hf,
                    room: self.props.source.room,
                    room_hf: self.props.source.room_hf,
                    flags: self.props.source.flags,
                })
            }
            other => Err(EaxError::UnknownProperty {
                set: "source",
                id: other,
            }),
        }
    }

    fn buffer20(&self) -> Buffer20Props {
        Buffer20Props {
            direct: self.props.source.direct,
            direct_hf: self.props.source.direct_hf,
            room: self.props.source.room,
            room_hf: self.props.source.room_hf,
            room_rolloff_factor: self.props.source.room_rolloff_factor,
            obstruction: self.props.source.obstruction,
            obstruction_lf_ratio: self.props.source.obstruction_lf_ratio,
            occlusion: self.props.source.occlusion,
            occlusion_lf_ratio: self.props.source.occlusion_lf_ratio,
            occlusion_room_ratio: self.props.source.occlusion_room_ratio,
            outside_volume_hf: self.props.source.outside_volume_hf,
            air_absorption_factor: self.props.source.air_absorption_factor,
            flags: self.props.source.flags,
        }
    }

    fn resolve_send_index(&self, fx_slot_id: &Guid) -> Result<usize> {
        crate::fx_slot_index::FxSlotIndex::from_guid(fx_slot_id)
            .get()
            .ok_or(EaxError::UnknownFxSlotId(*fx_slot_id))
    }

    fn get_send_parameters(&self, call: &EaxCall) -> Result {
        let mut records: Vec<SendProps> = call.values()?;
        for record in &mut records {
            let index = self.resolve_send_index(&record.receiving_fx_slot_id)?;
            record.send = self.props.sends[index].send;
            record.send_hf = self.props.sends[index].send_hf;
        }
        call.set_values(&records)
    }

    fn get_all_send_parameters(&self, call: &EaxCall) -> Result {
        let mut records: Vec<AllSendProps> = call.values()?;
        for record in &mut records {
            let index = self.resolve_send_index(&record.receiving_fx_slot_id)?;
            let send = &self.props.sends[index];
            record.send = send.send;
            record.send_hf = send.send_hf;
            record.occlusion = send.occlusion;
            record.occlusion_lf_ratio = send.occlusion_lf_ratio;
            record.occlusion_room_ratio = send.occlusion_room_ratio;
            record.occlusion_direct_ratio = send.occlusion_direct_ratio;
            record.exclusion = send.exclusion;
            record.exclusion_lf_ratio = send.exclusion_lf_ratio;
        }
        call.set_values(&records)
    }

    fn get_occlusion_send_parameters(&self, call: &EaxCall) -> Result {
        let mut records: Vec<OcclusionSendProps> = call.values()?;
        for record in &mut records {
            let index = self.resolve_send_index(&record.receiving_fx_slot_id)?;
            let send = &self.props.sends[index];
            record.occlusion = send.occlusion;
            record.occlusion_lf_ratio = send.occlusion_lf_ratio;
            record.occlusion_room_ratio = send.occlusion_room_ratio;
            record.occlusion_direct_ratio = send.occlusion_direct_ratio;
        }
        call.set_values(&records)
    }

    fn get_exclusion_send_parameters(&self, call: &EaxCall) -> Result {
        let mut records: Vec<ExclusionSendProps> = call.values()?;
        for record in &mut records {
            let index = self.resolve_send_index(&record.receiving_fx_slot_id)?;
            let send = &self.props.sends[index];
            record.exclusion = send.exclusion;
            record.exclusion_lf_ratio = send.exclusion_lf_ratio;
        }
        call.set_values(&records)
    }

    fn get_active_fx_slots(&self, call: &EaxCall) -> Result {
        let capacity = call.values::<Guid>()?.len().min(EAX_MAX_FX_SLOTS);
        call.set_values(&self.props.active_fx_slots.slots[..capacity])
    }

    fn get_speaker_levels(&self, call: &EaxCall) -> Result {
        let mut records: Vec<SpeakerLevelProps> = call.values()?;
        for record in &mut records {
            Self::validate_speaker_id(record.speaker_id)?;
            record.level = self.props.speaker_levels[(record.speaker_id - 1) as usize];
        }
        call.set_values(&records)
    }

    // Sets.

    fn set(&mut self, call: &EaxCall, fx_slots: &FxSlots, session_version: u32) -> Result {
        use crate::call::EaxVersion;

        match call.property_id() {
            SOURCE_NONE => {}
            SOURCE_ALLPARAMETERS => match call.version() {
                EaxVersion::V5 => {
                    let all: SourceProps50 = call.value()?;
                    self.defer_all(&all.source, session_version)?;
                    self.defer_macro_fx_factor(all.macro_fx_factor)?;
                }
                EaxVersion::V2 => {
                    let legacy: Buffer20Props = call.value()?;
                    let mut all = self.props.source;
                    all.direct = legacy.direct;
                    all.direct_hf = legacy.direct_hf;
                    all.room = legacy.room;
                    all.room_hf = legacy.room_hf;
                    all.room_rolloff_factor = legacy.room_rolloff_factor;
                    all.obstruction = legacy.obstruction;
                    all.obstruction_lf_ratio = legacy.obstruction_lf_ratio;
                    all.occlusion = legacy.occlusion;
                    all.occlusion_lf_ratio = legacy.occlusion_lf_ratio;
                    all.occlusion_room_ratio = legacy.occlusion_room_ratio;
                    all.outside_volume_hf = legacy.outside_volume_hf;
                    all.air_absorption_factor = legacy.air_absorption_factor;
                    all.flags = legacy.flags;
                    self.defer_all(&all, session_version)?;
                }
                _ => {
                    let all: SourceProps = call.value()?;
                    self.defer_all(&all, session_version)?;
                }
            },
            SOURCE_OBSTRUCTIONPARAMETERS => {
                let params: ObstructionProps = call.value()?;
                Self::validate_obstruction(params.obstruction)?;
                Self::validate_obstruction_lf_ratio(params.obstruction_lf_ratio)?;
                self.defer_filter_field(|source| {
                    source.obstruction = params.obstruction;
                    source.obstruction_lf_ratio = params.obstruction_lf_ratio;
                });
            }
            SOURCE_OCCLUSIONPARAMETERS => {
                let params: OcclusionProps = call.value()?;
                Self::validate_occlusion(params.occlusion)?;
                Self::validate_occlusion_lf_ratio(params.occlusion_lf_ratio)?;
                Self::validate_occlusion_room_ratio(params.occlusion_room_ratio)?;
                Self::validate_occlusion_direct_ratio(params.occlusion_direct_ratio)?;
                self.defer_filter_field(|source| {
                    source.occlusion = params.occlusion;
                    source.occlusion_lf_ratio = params.occlusion_lf_ratio;
                    source.occlusion_room_ratio = params.occlusion_room_ratio;
                    source.occlusion_direct_ratio = params.occlusion_direct_ratio;
                });
            }
            SOURCE_EXCLUSIONPARAMETERS => {
                let params: ExclusionProps = call.value()?;
                Self::validate_exclusion(params.exclusion)?;
                Self::validate_exclusion_lf_ratio(params.exclusion_lf_ratio)?;
                self.defer_filter_field(|source| {
                    source.exclusion = params.exclusion;
                    source.exclusion_lf_ratio = params.exclusion_lf_ratio;
                });
            }
            SOURCE_DIRECT => {
                let value: i32 = call.value()?;
                validate::range(
                    "Source Direct",
                    value,
                    SourceProps::MIN_DIRECT,
                    SourceProps::MAX_DIRECT,
                )?;
                self.defer_filter_field(|source| source.direct = value);
            }
            SOURCE_DIRECTHF => {
                let value: i32 = call.value()?;
                validate::range(
                    "Source Direct HF",
                    value,
                    SourceProps::MIN_DIRECT_HF,
                    SourceProps::MAX_DIRECT_HF,
                )?;
                self.defer_filter_field(|source| source.direct_hf = value);
            }
            SOURCE_ROOM => {
                let value: i32 = call.value()?;
                validate::range(
                    "Source Room",
                    value,
                    SourceProps::MIN_ROOM,
                    SourceProps::MAX_ROOM,
                )?;
                self.defer_filter_field(|source| source.room = value);
            }
            SOURCE_ROOMHF => {
                let value: i32 = call.value()?;
                validate::range(
                    "Source Room HF",
                    value,
                    SourceProps::MIN_ROOM_HF,
                    SourceProps::MAX_ROOM_HF,
                )?;
                self.defer_filter_field(|source| source.room_hf = value);
            }
            SOURCE_OBSTRUCTION => {
                let value: i32 = call.value()?;
                Self::validate_obstruction(value)?;
                self.defer_filter_field(|source| source.obstruction = value);
            }
            SOURCE_OBSTRUCTIONLFRATIO => {
                let value: f32 = call.value()?;
                Self::validate_obstruction_lf_ratio(value)?;
                self.defer_filter_field(|source| source.obstruction_lf_ratio = value);
            }
            SOURCE_OCCLUSION => {
                let value: i32 = call.value()?;
                Self::validate_occlusion(value)?;
                self.defer_filter_field(|source| source.occlusion = value);
            }
            SOURCE_OCCLUSIONLFRATIO => {
                let value: f32 = call.value()?;
                Self::validate_occlusion_lf_ratio(value)?;
                self.defer_filter_field(|source| source.occlusion_lf_ratio = value);
            }
            SOURCE_OCCLUSIONROOMRATIO => {
                let value: f32 = call.value()?;
                Self::validate_occlusion_room_ratio(value)?;
                self.defer_filter_field(|source| source.occlusion_room_ratio = value);
            }
            SOURCE_OCCLUSIONDIRECTRATIO => {
                let value: f32 = call.value()?;
                Self::validate_occlusion_direct_ratio(value)?;
                self.defer_filter_field(|source| source.occlusion_direct_ratio = value);
            }
            SOURCE_EXCLUSION => {
                let value: i32 = call.value()?;
                Self::validate_exclusion(value)?;
                self.defer_filter_field(|source| source.exclusion = value);
            }
            SOURCE_EXCLUSIONLFRATIO => {
                let value: f32 = call.value()?;
                Self::validate_exclusion_lf_ratio(value)?;
                self.defer_filter_field(|source| source.exclusion_lf_ratio = value);
            }
            SOURCE_OUTSIDEVOLUMEHF => {
                let value: i32 = call.value()?;
                validate::range(
                    "Source Outside Volume HF",
                    value,
                    SourceProps::MIN_OUTSIDE_VOLUME_HF,
                    SourceProps::MAX_OUTSIDE_VOLUME_HF,
                )?;
                self.defer_filter_field(|source| source.outside_volume_hf = value);
            }
            SOURCE_DOPPLERFACTOR => {
                let value: f32 = call.value()?;
                validate::range(
                    "Source Doppler Factor",
                    value,
                    SourceProps::MIN_DOPPLER_FACTOR,
                    SourceProps::MAX_DOPPLER_FACTOR,
                )?;
                self.defer_filter_field(|source| source.doppler_factor = value);
            }
            SOURCE_ROLLOFFFACTOR => {
                let value: f32 = call.value()?;
                validate::range(
                    "Source Rolloff Factor",
                    value,
                    SourceProps::MIN_ROLLOFF_FACTOR,
                    SourceProps::MAX_ROLLOFF_FACTOR,
                )?;
                self.defer_filter_field(|source| source.rolloff_factor = value);
            }
            SOURCE_ROOMROLLOFFFACTOR => {
                let value: f32 = call.value()?;
                validate::range(
                    "Source Room Rolloff Factor",
                    value,
                    SourceProps::MIN_ROOM_ROLLOFF_FACTOR,
                    SourceProps::MAX_ROOM_ROLLOFF_FACTOR,
                )?;
                self.defer_filter_field(|source| source.room_rolloff_factor = value);
            }
            SOURCE_AIRABSORPTIONFACTOR => {
                let value: f32 = call.value()?;
                validate::range(
                    "Source Air Absorption Factor",
                    value,
                    SourceProps::MIN_AIR_ABSORPTION_FACTOR,
                    SourceProps::MAX_AIR_ABSORPTION_FACTOR,
                )?;
                self.defer_filter_field(|source| source.air_absorption_factor = value);
            }
            SOURCE_FLAGS => {
                let flags: u32 = call.value()?;
                Self::validate_flags(flags, session_version)?;
                self.deferred.source.flags = flags;
                self.dirty
                    .update(SourceDirty::FLAGS, self.props.source.flags != flags);
            }
            SOURCE_SENDPARAMETERS => self.defer_send_parameters(call)?,
            SOURCE_ALLSENDPARAMETERS => self.defer_all_send_parameters(call)?,
            SOURCE_OCCLUSIONSENDPARAMETERS => self.defer_occlusion_send_parameters(call)?,
            SOURCE_EXCLUSIONSENDPARAMETERS => self.defer_exclusion_send_parameters(call)?,
            SOURCE_ACTIVEFXSLOTID => self.defer_active_fx_slots(call, fx_slots)?,
            SOURCE_MACROFXFACTOR => {
                call.require_v5()?;
                self.defer_macro_fx_factor(call.value()?)?;
            }
            SOURCE_SPEAKERLEVELS => {
                call.require_v5()?;
                self.defer_speaker_levels(call)?;
            }
            SOURCE_ALL2DPARAMETERS => {
                call.require_v5()?;
                let params: Source2dProps = call.value()?;
                validate::range(
                    "Source Direct",
                    params.direct,
                    SourceProps::MIN_DIRECT,
                    SourceProps::MAX_DIRECT,
                )?;
                validate::range(
                    "Source Direct HF",
                    params.direct_hf,
                    SourceProps::MIN_DIRECT_HF,
                    SourceProps::MAX_DIRECT_HF,
                )?;
                validate::range(
                    "Source Room",
                    params.room,
                    SourceProps::MIN_ROOM,
                    SourceProps::MAX_ROOM,
                )?;
                validate::range(
                    "Source Room HF",
                    params.room_hf,
                    SourceProps::MIN_ROOM_HF,
                    SourceProps::MAX_ROOM_HF,
                )?;
                Self::validate_flags(params.flags, session_version)?;
                self.defer_filter_field(|source| {
                    source.direct = params.direct;
                    source.direct_hf = params.direct_hf;
                    source.room = params.room;
                    source.room_hf = params.room_hf;
                });
                self.deferred.source.flags = params.flags;
                self.dirty.update(
                    SourceDirty::FLAGS,
                    self.props.source.flags != params.flags,
                );
            }
            other => {
                return Err(EaxError::UnknownProperty {
                    set: "source",
                    id: other,
                })
            }
        }
        self.apply_deferred(fx_slots);
        Ok(())
    }

    // Validation.

    fn validate_obstruction(value: i32) -> Result {
        validate::range(
            "Source Obstruction",
            value,
            SourceProps::MIN_OBSTRUCTION,
            SourceProps::MAX_OBSTRUCTION,
        )
    }

    fn validate_obstruction_lf_ratio(value: f32) -> Result {
        validate::range(
            "Source Obstruction LF Ratio",
            value,
            SourceProps::MIN_OBSTRUCTION_LF_RATIO,
            SourceProps::MAX_OBSTRUCTION_LF_RATIO,
        )
    }

    fn validate_occlusion(value: i32) -> Result {
        validate::range(
            "Source Occlusion",
            value,
            SourceProps::MIN_OCCLUSION,
            SourceProps::MAX_OCCLUSION,
        )
    }

    fn validate_occlusion_lf_ratio(value: f32) -> Result {
        validate::range(
            "Source Occlusion LF Ratio",
            value,
            SourceProps::MIN_OCCLUSION_LF_RATIO,
            SourceProps::MAX_OCCLUSION_LF_RATIO,
        )
    }

    fn validate_occlusion_room_ratio(value: f32) -> Result {
        validate::range(
            "Source Occlusion Room Ratio",
            value,
            SourceProps::MIN_OCCLUSION_ROOM_RATIO,
            SourceProps::MAX_OCCLUSION_ROOM_RATIO,
        )
    }

    fn validate_occlusion_direct_ratio(value: f32) -> Result {
        validate::range(
            "Source Occlusion Direct Ratio",
            value,
            SourceProps::MIN_OCCLUSION_DIRECT_RATIO,
            SourceProps::MAX_OCCLUSION_DIRECT_RATIO,
        )
    }

    fn validate_exclusion(value: i32) -> Result {
        validate::range(
            "Source Exclusion",
            value,
            SourceProps::MIN_EXCLUSION,
            SourceProps::MAX_EXCLUSION,
        )
    }

    fn validate_exclusion_lf_ratio(value: f32) -> Result {
        validate::range(
            "Source Exclusion LF Ratio",
            value,
            SourceProps::MIN_EXCLUSION_LF_RATIO,
            SourceProps::MAX_EXCLUSION_LF_RATIO,
        )
    }

    /// The reserved mask follows the active session: three defined bits
    /// below v5, six from v5 on.
    fn validate_flags(flags: u32, session_version: u32) -> Result {
        let reserved = if session_version >= SESSION_VERSION_EAX50 {
            SOURCE_FLAGS_RESERVED_V5
        } else {
            SOURCE_FLAGS_RESERVED_LEGACY
        };
        validate::flags("Source Flags", flags, reserved)
    }

    fn validate_speaker_id(speaker_id: i32) -> Result {
        validate::range(
            "Source Speaker Id",
            speaker_id,
            SPEAKER_FRONT_LEFT,
            SPEAKER_LOW_FREQUENCY,
        )
    }

    fn validate_all(all: &SourceProps, session_version: u32) -> Result {
        validate::range(
            "Source Direct",
            all.direct,
            SourceProps::MIN_DIRECT,
            SourceProps::MAX_DIRECT,
        )?;
        validate::range(
            "Source Direct HF",
            all.direct_hf,
            SourceProps::MIN_DIRECT_HF,
            SourceProps::MAX_DIRECT_HF,
        )?;
        validate::range(
            "Source Room",
            all.room,
            SourceProps::MIN_ROOM,
            SourceProps::MAX_ROOM,
        )?;
        validate::range(
            "Source Room HF",
            all.room_hf,
            SourceProps::MIN_ROOM_HF,
            SourceProps::MAX_ROOM_HF,
        )?;
        Self::validate_obstruction(all.obstruction)?;
        Self::validate_obstruction_lf_ratio(all.obstruction_lf_ratio)?;
        Self::validate_occlusion(all.occlusion)?;
        Self::validate_occlusion_lf_ratio(all.occlusion_lf_ratio)?;
        Self::validate_occlusion_room_ratio(all.occlusion_room_ratio)?;
        Self::validate_occlusion_direct_ratio(all.occlusion_direct_ratio)?;
        Self::validate_exclusion(all.exclusion)?;
        Self::validate_exclusion_lf_ratio(all.exclusion_lf_ratio)?;
        validate::range(
            "Source Outside Volume HF",
            all.outside_volume_hf,
            SourceProps::MIN_OUTSIDE_VOLUME_HF,
            SourceProps::MAX_OUTSIDE_VOLUME_HF,
        )?;
        validate::range(
            "Source Doppler Factor",
            all.doppler_factor,
            SourceProps::MIN_DOPPLER_FACTOR,
            SourceProps::MAX_DOPPLER_FACTOR,
        )?;
        validate::range(
            "Source Rolloff Factor",
            all.rolloff_factor,
            SourceProps::MIN_ROLLOFF_FACTOR,
            SourceProps::MAX_ROLLOFF_FACTOR,
        )?;
        validate::range(
            "Source Room Rolloff Factor",
            all.room_rolloff_factor,
            SourceProps::MIN_ROOM_ROLLOFF_FACTOR,
            SourceProps::MAX_ROOM_ROLLOFF_FACTOR,
        )?;
        validate::range(
            "Source Air Absorption Factor",
            all.air_absorption_factor,
            SourceProps::MIN_AIR_ABSORPTION_FACTOR,
            SourceProps::MAX_AIR_ABSORPTION_FACTOR,
        )?;
        Self::validate_flags(all.flags, session_version)?;
        Ok(())
    }

    // Deferral.

    fn defer_all(&mut self, all: &SourceProps, session_version: u32) -> Result {
        Self::validate_all(all, session_version)?;
        let flags_changed = self.props.source.flags != all.flags;
        // Compare everything but the flags word for the filter pass.
        let mut filter_view = *all;
        filter_view.flags = self.props.source.flags;
        let filters_changed = filter_view != self.props.source;
        self.deferred.source = *all;
        self.dirty.update(SourceDirty::FILTERS, filters_changed);
        self.dirty.update(SourceDirty::FLAGS, flags_changed);
        Ok(())
    }

    /// Apply a validated mutation to the deferred scalar block and mark the
    /// filter pass.
    fn defer_filter_field(&mut self, mutate: impl FnOnce(&mut SourceProps)) {
        let mut next = self.deferred.source;
        mutate(&mut next);
        self.dirty
            .update(SourceDirty::FILTERS, next != self.props.source);
        self.deferred.source = next;
    }

    fn defer_macro_fx_factor(&mut self, factor: f32) -> Result {
        validate::range(
            "Source Macro FX Factor",
            factor,
            SourceProps50::MIN_MACRO_FX_FACTOR,
            SourceProps50::MAX_MACRO_FX_FACTOR,
        )?;
        self.deferred.macro_fx_factor = factor;
        self.dirty.update(
            SourceDirty::MACRO_FX_FACTOR,
            self.props.macro_fx_factor != factor,
        );
        Ok(())
    }

    fn defer_send_parameters(&mut self, call: &EaxCall) -> Result {
        let records: Vec<SendProps> = call.values()?;
        let mut sends = self.deferred.sends;
        for record in &records {
            let index = self.resolve_send_index(&record.receiving_fx_slot_id)?;
            validate::range(
                "Source Send",
                record.send,
                SendProps::MIN_SEND,
                SendProps::MAX_SEND,
            )?;
            validate::range(
                "Source Send HF",
                record.send_hf,
                SendProps::MIN_SEND_HF,
                SendProps::MAX_SEND_HF,
            )?;
            sends[index].send = record.send;
            sends[index].send_hf = record.send_hf;
        }
        self.deferred.sends = sends;
        self.dirty
            .update(SourceDirty::SENDS, self.props.sends != sends);
        Ok(())
    }

    fn defer_all_send_parameters(&mut self, call: &EaxCall) -> Result {
        let records: Vec<AllSendProps> = call.values()?;
        let mut sends = self.deferred.sends;
        for record in &records {
            let index = self.resolve_send_index(&record.receiving_fx_slot_id)?;
            validate::range(
                "Source Send",
                record.send,
                SendProps::MIN_SEND,
                SendProps::MAX_SEND,
            )?;
            validate::range(
                "Source Send HF",
                record.send_hf,
                SendProps::MIN_SEND_HF,
                SendProps::MAX_SEND_HF,
            )?;
            Self::validate_occlusion(record.occlusion)?;
            Self::validate_occlusion_lf_ratio(record.occlusion_lf_ratio)?;
            Self::validate_occlusion_room_ratio(record.occlusion_room_ratio)?;
            Self::validate_occlusion_direct_ratio(record.occlusion_direct_ratio)?;
            Self::validate_exclusion(record.exclusion)?;
            Self::validate_exclusion_lf_ratio(record.exclusion_lf_ratio)?;
            sends[index] = SendRecord {
                send: record.send,
                send_hf: record.send_hf,
                occlusion: record.occlusion,
                occlusion_lf_ratio: record.occlusion_lf_ratio,
                occlusion_room_ratio: record.occlusion_room_ratio,
                occlusion_direct_ratio: record.occlusion_direct_ratio,
                exclusion: record.exclusion,
                exclusion_lf_ratio: record.exclusion_lf_ratio,
            };
        }
        self.deferred.sends = sends;
        self.dirty
            .update(SourceDirty::SENDS, self.props.sends != sends);
        Ok(())
    }

    fn defer_occlusion_send_parameters(&mut self, call: &EaxCall) -> Result {
        let records: Vec<OcclusionSendProps> = call.values()?;
        let mut sends = self.deferred.sends;
        for record in &records {
            let index = self.resolve_send_index(&record.receiving_fx_slot_id)?;
            Self::validate_occlusion(record.occlusion)?;
            Self::validate_occlusion_lf_ratio(record.occlusion_lf_ratio)?;
            Self::validate_occlusion_room_ratio(record.occlusion_room_ratio)?;
            Self::validate_occlusion_direct_ratio(record.occlusion_direct_ratio)?;
            sends[index].occlusion = record.occlusion;
            sends[index].occlusion_lf_ratio = record.occlusion_lf_ratio;
            sends[index].occlusion_room_ratio = record.occlusion_room_ratio;
            sends[index].occlusion_direct_ratio = record.occlusion_direct_ratio;
        }
        self.deferred.sends = sends;
        self.dirty
            .update(SourceDirty::SENDS, self.props.sends != sends);
        Ok(())
    }

    fn defer_exclusion_send_parameters(&mut self, call: &EaxCall) -> Result {
        let records: Vec<ExclusionSendProps> = call.values()?;
        let mut sends = self.deferred.sends;
        for record in &records {
            let index = self.resolve_send_index(&record.receiving_fx_slot_id)?;
            Self::validate_exclusion(record.exclusion)?;
            Self::validate_exclusion_lf_ratio(record.exclusion_lf_ratio)?;
            sends[index].exclusion = record.exclusion;
            sends[index].exclusion_lf_ratio = record.exclusion_lf_ratio;
        }
        self.deferred.sends = sends;
        self.dirty
            .update(SourceDirty::SENDS, self.props.sends != sends);
        Ok(())
    }

    fn defer_speaker_levels(&mut self, call: &EaxCall) -> Result {
        let records: Vec<SpeakerLevelProps> = call.values()?;
        let mut levels = self.deferred.speaker_levels;
        for record in &records {
            Self::validate_speaker_id(record.speaker_id)?;
            validate::range(
                "Source Speaker Level",
                record.level,
                SpeakerLevelProps::MIN_LEVEL,
                SpeakerLevelProps::MAX_LEVEL,
            )?;
            levels[(record.speaker_id - 1) as usize] = record.level;
        }
        self.deferred.speaker_levels = levels;
        self.dirty.update(
            SourceDirty::SPEAKER_LEVELS,
            self.props.speaker_levels != levels,
        );
        Ok(())
    }

    /// Validate and stage a new routing list. The whole write fails when
    /// the list names more distinct slots than the session allows.
    fn defer_active_fx_slots(&mut self, call: &EaxCall, fx_slots: &FxSlots) -> Result {
        let ids: Vec<Guid> = call.values()?;
        if ids.len() > EAX_MAX_FX_SLOTS {
            return Err(EaxError::OutOfRange {
                field: "Active FX Slot Count",
                value: ids.len().to_string(),
                min: "1".into(),
                max: EAX_MAX_FX_SLOTS.to_string(),
            });
        }

        let mut active = ActiveFxSlots::DEFAULT_2D;
        active.slots[..ids.len()].copy_from_slice(&ids);

        let mut count = 0usize;
        let mut has_primary = false;
        let mut mask = [false; EAX_MAX_FX_SLOTS];
        for id in &active.slots {
            let is_primary = *id == EAX_PRIMARY_FX_SLOT_ID;
            if is_primary {
                if !has_primary {
                    count += 1;
                }
                has_primary = true;
            }
            if let Some(index) = fx_slots.resolve(id).get() {
                if !mask[index] {
                    if !is_primary {
                        count += 1;
                    }
                    mask[index] = true;
                }
            }
        }

        if count > fx_slots.max_active() as usize {
            return Err(EaxError::TooManyActiveSends {
                requested: count,
                allowed: fx_slots.max_active(),
            });
        }

        self.deferred.active_fx_slots = active;
        self.dirty.update(SourceDirty::ACTIVE_FX_SLOTS, true);
        Ok(())
    }

    // Commit.

    fn apply_deferred(&mut self, fx_slots: &FxSlots) {
        if self.dirty.is_empty() {
            return;
        }
        self.props = self.deferred;

        if self.dirty.contains(SourceDirty::ACTIVE_FX_SLOTS) {
            self.recompute_routing(fx_slots);
            self.apply_routing(fx_slots);
        } else if self.dirty.contains(SourceDirty::FILTERS) {
            self.apply_routing(fx_slots);
        }
        if self.dirty.contains(SourceDirty::FLAGS) {
            self.set_efx_flag_autos();
        }
        // Macro FX factor, sends, and speaker levels have no driver-side
        // counterpart here; the shadow is their only consumer.
        self.dirty.clear();
    }

    /// Derive the active mask, primary usage, and activity bit from the
    /// committed routing list.
    fn recompute_routing(&mut self, fx_slots: &FxSlots) {
        let mut mask = [false; EAX_MAX_FX_SLOTS];
        let mut uses_primary = false;
        for id in &self.props.active_fx_slots.slots {
            if *id == EAX_PRIMARY_FX_SLOT_ID {
                uses_primary = true;
            }
            if let Some(index) = fx_slots.resolve(id).get() {
                mask[index] = true;
            }
        }
        self.active_mask = mask;
        self.uses_primary_id = uses_primary;
        self.has_active_fx_slots = mask.iter().any(|active| *active);
    }

    fn direct_filter(&self) -> LowPassParam {
        let source = &self.props.source;
        LowPassParam {
            gain: mb_to_gain(
                source.direct as f32
                    + source.obstruction as f32 * source.obstruction_lf_ratio
                    + source.occlusion as f32
                        * source.occlusion_direct_ratio
                        * source.occlusion_lf_ratio,
            ),
            gain_hf: mb_to_gain(
                source.direct_hf as f32
                    + source.obstruction as f32
                    + source.occlusion as f32 * source.occlusion_direct_ratio,
            ),
        }
    }

    fn room_filter(&self) -> LowPassParam {
        let source = &self.props.source;
        LowPassParam {
            gain: mb_to_gain(
                source.room as f32
                    + source.occlusion as f32
                        * source.occlusion_room_ratio
                        * source.occlusion_lf_ratio,
            ),
            gain_hf: mb_to_gain(
                source.room_hf as f32 + source.occlusion as f32 * source.occlusion_room_ratio,
            ),
        }
    }

    fn set_filter_params(&self, param: LowPassParam) {
        let gain = param.gain.clamp(AL_LOWPASS_MIN_GAIN, AL_LOWPASS_MAX_GAIN);
        let gain_hf = param
            .gain_hf
            .clamp(AL_LOWPASS_MIN_GAINHF, AL_LOWPASS_MAX_GAINHF);
        // SAFETY: resolved table, engine mutex held by the caller.
        unsafe {
            (self.api.efx.alFilterf)(self.filter.name(), AL_LOWPASS_GAIN, gain);
            (self.api.efx.alFilterf)(self.filter.name(), AL_LOWPASS_GAINHF, gain_hf);
        }
    }

    /// One full routing pass: derived filters onto the direct path and the
    /// active sends, null filters onto everything else.
    fn apply_routing(&self, fx_slots: &FxSlots) {
        let direct = self.direct_filter();
        let room = self.room_filter();

        if self.has_active_fx_slots {
            self.set_filter_params(direct);
            unsafe {
                (self.api.al.alSourcei)(
                    self.name,
                    AL_DIRECT_FILTER,
                    self.filter.name() as ALint,
                )
            };
        } else {
            unsafe { (self.api.al.alSourcei)(self.name, AL_DIRECT_FILTER, AL_FILTER_NULL) };
        }

        for index in 0..EAX_MAX_FX_SLOTS {
            if self.active_mask[index] {
                let effect_slot = fx_slots.get(index).efx_effect_slot();
                self.set_filter_params(room);
                unsafe {
                    (self.api.al.alSource3i)(
                        self.name,
                        AL_AUXILIARY_SEND_FILTER,
                        effect_slot as ALint,
                        index as ALint,
                        self.filter.name() as ALint,
                    )
                };
            } else {
                unsafe {
                    (self.api.al.alSource3i)(
                        self.name,
                        AL_AUXILIARY_SEND_FILTER,
                        AL_EFFECTSLOT_NULL,
                        index as ALint,
                        AL_FILTER_NULL,
                    )
                };
            }
        }
    }

    /// Push the three distance-automation bits onto their EFX source
    /// properties. The elevation-filter bit has no consumer and stays in
    /// the shadow only.
    fn set_efx_flag_autos(&self) {
        let flags = self.props.source.flags;
        unsafe {
            (self.api.al.alSourcei)(
                self.name,
                AL_DIRECT_FILTER_GAINHF_AUTO,
                (flags & SOURCE_FLAG_DIRECT_HF_AUTO != 0) as ALint,
            );
            (self.api.al.alSourcei)(
                self.name,
                AL_AUXILIARY_SEND_FILTER_GAIN_AUTO,
                (flags & SOURCE_FLAG_ROOM_AUTO != 0) as ALint,
            );
            (self.api.al.alSourcei)(
                self.name,
                AL_AUXILIARY_SEND_FILTER_GAINHF_AUTO,
                (flags & SOURCE_FLAG_ROOM_HF_AUTO != 0) as ALint,
            );
        }
    }
}
