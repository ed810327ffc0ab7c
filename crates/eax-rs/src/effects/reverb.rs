//! EAX reverb effect.
//!
//! Two things set this effect apart from the other twelve. `ENVIRONMENT`
//! selects one of the static presets and behaves as a full `ALLPARAMETERS`
//! write of the preset row, and `ALLPARAMETERS` itself accepts two wire
//! shapes: the legacy 2.0 listener block (default-extended to the full
//! struct) and the v3+ reverb block.

use std::sync::Arc;

use al_sys::*;

use crate::api::*;
use crate::call::{EaxCall, EaxVersion};
use crate::error::{EaxError, Result};
use crate::presets::REVERB_PRESETS;
use crate::unit::reverb as convert;
use crate::validate;

use super::{dirty_bits, EffectCore, EffectKind};

dirty_bits! {
    pub(crate) struct ReverbDirty {
        environment, environment_size, environment_diffusion,
        room, room_hf, room_lf,
        decay_time, decay_hf_ratio, decay_lf_ratio,
        reflections, reflections_delay, reflections_pan,
        reverb, reverb_delay, reverb_pan,
        echo_time, echo_depth,
        modulation_time, modulation_depth,
        air_absorption_hf, hf_reference, lf_reference,
        room_rolloff_factor, flags,
    }
}

pub struct ReverbEffect {
    core: EffectCore,
    props: ReverbProps,
    deferred: ReverbProps,
    dirty: ReverbDirty,
}

impl ReverbEffect {
    pub fn new(slot: ALuint, api: &Arc<AlApi>) -> Result<ReverbEffect> {
        let core = EffectCore::new(EffectKind::Reverb, slot, api)?;
        let props = ReverbProps::default();
        let mut effect = ReverbEffect {
            core,
            props,
            deferred: props,
            dirty: ReverbDirty::NONE,
        };
        effect.load();
        Ok(effect)
    }

    pub fn load(&mut self) {
        self.set_efx_density();
        self.set_efx_diffusion();
        self.set_efx_gain();
        self.set_efx_gain_hf();
        self.set_efx_gain_lf();
        self.set_efx_decay_time();
        self.set_efx_decay_hf_ratio();
        self.set_efx_decay_lf_ratio();
        self.set_efx_reflections_gain();
        self.set_efx_reflections_delay();
        self.set_efx_reflections_pan();
        self.set_efx_late_reverb_gain();
        self.set_efx_late_reverb_delay();
        self.set_efx_late_reverb_pan();
        self.set_efx_echo_time();
        self.set_efx_echo_depth();
        self.set_efx_modulation_time();
        self.set_efx_modulation_depth();
        self.set_efx_air_absorption_gain_hf();
        self.set_efx_hf_reference();
        self.set_efx_lf_reference();
        self.set_efx_room_rolloff_factor();
        self.set_efx_flags();
        self.core.attach();
    }

    pub fn dispatch(&mut self, call: &EaxCall) -> Result {
        if call.is_get() {
            self.get(call)
        } else {
            self.set(call)
        }
    }

    fn get(&self, call: &EaxCall) -> Result {
        match call.property_id() {
            REVERB_NONE => Ok(()),
            REVERB_ALLPARAMETERS => self.get_all(call),
            REVERB_ENVIRONMENT => call.set_value(self.props.environment),
            REVERB_ENVIRONMENTSIZE => call.set_value(self.props.environment_size),
            REVERB_ENVIRONMENTDIFFUSION => call.set_value(self.props.environment_diffusion),
            REVERB_ROOM => call.set_value(self.props.room),
            REVERB_ROOMHF => call.set_value(self.props.room_hf),
            REVERB_ROOMLF => call.set_value(self.props.room_lf),
            REVERB_DECAYTIME => call.set_value(self.props.decay_time),
            REVERB_DECAYHFRATIO => call.set_value(self.props.decay_hf_ratio),
            REVERB_DECAYLFRATIO => call.set_value(self.props.decay_lf_ratio),
            REVERB_REFLECTIONS => call.set_value(self.props.reflections),
            REVERB_REFLECTIONSDELAY => call.set_value(self.props.reflections_delay),
            REVERB_REFLECTIONSPAN => call.set_value(self.props.reflections_pan),
            REVERB_REVERB => call.set_value(self.props.reverb),
            REVERB_REVERBDELAY => call.set_value(self.props.reverb_delay),
            REVERB_REVERBPAN => call.set_value(self.props.reverb_pan),
            REVERB_ECHOTIME => call.set_value(self.props.echo_time),
            REVERB_ECHODEPTH => call.set_value(self.props.echo_depth),
            REVERB_MODULATIONTIME => call.set_value(self.props.modulation_time),
            REVERB_MODULATIONDEPTH => call.set_value(self.props.modulation_depth),
            REVERB_AIRABSORPTIONHF => call.set_value(self.props.air_absorption_hf),
            REVERB_HFREFERENCE => call.set_value(self.props.hf_reference),
            REVERB_LFREFERENCE => call.set_value(self.props.lf_reference),
            REVERB_ROOMROLLOFFFACTOR => call.set_value(self.props.room_rolloff_factor),
            REVERB_FLAGS => call.set_value(self.props.flags),
            other => Err(EaxError::UnknownProperty {
                set: "reverb",
                id: other,
            }),
        }
    }

    fn get_all(&self, call: &EaxCall) -> Result {
        if call.version() == EaxVersion::V2 {
            call.set_value(self.listener20())
        } else {
            call.set_value(self.props)
        }
    }

    fn listener20(&self) -> Listener20Props {
        Listener20Props {
            room: self.props.room,
            room_hf: self.props.room_hf,
            room_rolloff_factor: self.props.room_rolloff_factor,
            decay_time: self.props.decay_time,
            decay_hf_ratio: self.props.decay_hf_ratio,
            reflections: self.props.reflections,
            reflections_delay: self.props.reflections_delay,
            reverb: self.props.reverb,
            reverb_delay: self.props.reverb_delay,
            environment: self.props.environment,
            environment_size: self.props.environment_size,
            environment_diffusion: self.props.environment_diffusion,
            air_absorption_hf: self.props.air_absorption_hf,
            flags: self.props.flags,
        }
    }

    fn set(&mut self, call: &EaxCall) -> Result {
        match call.property_id() {
            REVERB_NONE => {}
            REVERB_ALLPARAMETERS => self.defer_all_call(call)?,
            REVERB_ENVIRONMENT => self.defer_environment(call.value()?, call.version())?,
            REVERB_ENVIRONMENTSIZE => self.defer_environment_size(call.value()?)?,
            REVERB_ENVIRONMENTDIFFUSION => self.defer_environment_diffusion(call.value()?)?,
            REVERB_ROOM => self.defer_room(call.value()?)?,
            REVERB_ROOMHF => self.defer_room_hf(call.value()?)?,
            REVERB_ROOMLF => self.defer_room_lf(call.value()?)?,
            REVERB_DECAYTIME => self.defer_decay_time(call.value()?)?,
            REVERB_DECAYHFRATIO => self.defer_decay_hf_ratio(call.value()?)?,
            REVERB_DECAYLFRATIO => self.defer_decay_lf_ratio(call.value()?)?,
            REVERB_REFLECTIONS => self.defer_reflections(call.value()?)?,
            REVERB_REFLECTIONSDELAY => self.defer_reflections_delay(call.value()?)?,
            REVERB_REFLECTIONSPAN => self.defer_reflections_pan(call.value()?)?,
            REVERB_REVERB => self.defer_reverb(call.value()?)?,
            REVERB_REVERBDELAY => self.defer_reverb_delay(call.value()?)?,
            REVERB_REVERBPAN => self.defer_reverb_pan(call.value()?)?,
            REVERB_ECHOTIME => self.defer_echo_time(call.value()?)?,
            REVERB_ECHODEPTH => self.defer_echo_depth(call.value()?)?,
            REVERB_MODULATIONTIME => self.defer_modulation_time(call.value()?)?,
            REVERB_MODULATIONDEPTH => self.defer_modulation_depth(call.value()?)?,
            REVERB_AIRABSORPTIONHF => self.defer_air_absorption_hf(call.value()?)?,
            REVERB_HFREFERENCE => self.defer_hf_reference(call.value()?)?,
            REVERB_LFREFERENCE => self.defer_lf_reference(call.value()?)?,
            REVERB_ROOMROLLOFFFACTOR => self.defer_room_rolloff_factor(call.value()?)?,
            REVERB_FLAGS => self.defer_flags(call.value()?)?,
            other => {
                return Err(EaxError::UnknownProperty {
                    set: "reverb",
                    id: other,
                })
            }
        }
        self.apply_deferred();
        Ok(())
    }

    // Validation.

    fn validate_environment(environment: u32, version: EaxVersion) -> Result {
        // 2.0 stops one short of the 3.0 table; the trailing marker index is
        // never a legal write since no preset backs it.
        let max = match version {
            EaxVersion::V2 => ReverbProps::MAX_ENVIRONMENT_V2,
            _ => ReverbProps::MAX_ENVIRONMENT,
        };
        validate::range(
            "Reverb Environment",
            environment,
            ReverbProps::MIN_ENVIRONMENT,
            max,
        )
    }

    fn validate_all(all: &ReverbProps, version: EaxVersion) -> Result {
        Self::validate_environment(all.environment, version)?;
        validate::range(
            "Reverb Environment Size",
            all.environment_size,
            ReverbProps::MIN_ENVIRONMENT_SIZE,
            ReverbProps::MAX_ENVIRONMENT_SIZE,
        )?;
        validate::range(
            "Reverb Environment Diffusion",
            all.environment_diffusion,
            ReverbProps::MIN_ENVIRONMENT_DIFFUSION,
            ReverbProps::MAX_ENVIRONMENT_DIFFUSION,
        )?;
        validate::range("Reverb Room", all.room, ReverbProps::MIN_ROOM, ReverbProps::MAX_ROOM)?;
        validate::range(
            "Reverb Room HF",
            all.room_hf,
            ReverbProps::MIN_ROOM_HF,
            ReverbProps::MAX_ROOM_HF,
        )?;
        validate::range(
            "Reverb Room LF",
            all.room_lf,
            ReverbProps::MIN_ROOM_LF,
            ReverbProps::MAX_ROOM_LF,
        )?;
        validate::range(
            "Reverb Decay Time",
            all.decay_time,
            ReverbProps::MIN_DECAY_TIME,
            ReverbProps::MAX_DECAY_TIME,
        )?;
        validate::range(
            "Reverb Decay HF Ratio",
            all.decay_hf_ratio,
            ReverbProps::MIN_DECAY_HF_RATIO,
            ReverbProps::MAX_DECAY_HF_RATIO,
        )?;
        validate::range(
            "Reverb Decay LF Ratio",
            all.decay_lf_ratio,
            ReverbProps::MIN_DECAY_LF_RATIO,
            ReverbProps::MAX_DECAY_LF_RATIO,
        )?;
        validate::range(
            "Reverb Reflections",
            all.reflections,
            ReverbProps::MIN_REFLECTIONS,
            ReverbProps::MAX_REFLECTIONS,
        )?;
        validate::range(
            "Reverb Reflections Delay",
            all.reflections_delay,
            ReverbProps::MIN_REFLECTIONS_DELAY,
            ReverbProps::MAX_REFLECTIONS_DELAY,
        )?;
        validate::range(
            "Reverb Level",
            all.reverb,
            ReverbProps::MIN_REVERB,
            ReverbProps::MAX_REVERB,
        )?;
        validate::range(
            "Reverb Delay",
            all.reverb_delay,
            ReverbProps::MIN_REVERB_DELAY,
            ReverbProps::MAX_REVERB_DELAY,
        )?;
        validate::range(
            "Reverb Echo Time",
            all.echo_time,
            ReverbProps::MIN_ECHO_TIME,
            ReverbProps::MAX_ECHO_TIME,
        )?;
        validate::range(
            "Reverb Echo Depth",
            all.echo_depth,
            ReverbProps::MIN_ECHO_DEPTH,
            ReverbProps::MAX_ECHO_DEPTH,
        )?;
        validate::range(
            "Reverb Modulation Time",
            all.modulation_time,
            ReverbProps::MIN_MODULATION_TIME,
            ReverbProps::MAX_MODULATION_TIME,
        )?;
        validate::range(
            "Reverb Modulation Depth",
            all.modulation_depth,
            ReverbProps::MIN_MODULATION_DEPTH,
            ReverbProps::MAX_MODULATION_DEPTH,
        )?;
        validate::range(
            "Reverb Air Absorption HF",
            all.air_absorption_hf,
            ReverbProps::MIN_AIR_ABSORPTION_HF,
            ReverbProps::MAX_AIR_ABSORPTION_HF,
        )?;
        validate::range(
            "Reverb HF Reference",
            all.hf_reference,
            ReverbProps::MIN_HF_REFERENCE,
            ReverbProps::MAX_HF_REFERENCE,
        )?;
        validate::range(
            "Reverb LF Reference",
            all.lf_reference,
            ReverbProps::MIN_LF_REFERENCE,
            ReverbProps::MAX_LF_REFERENCE,
        )?;
        validate::range(
            "Reverb Room Rolloff Factor",
            all.room_rolloff_factor,
            ReverbProps::MIN_ROOM_ROLLOFF_FACTOR,
            ReverbProps::MAX_ROOM_ROLLOFF_FACTOR,
        )?;
        validate::flags("Reverb Flags", all.flags, REVERB_FLAGS_RESERVED)?;
        Ok(())
    }

    // Deferral.

    fn defer_all_call(&mut self, call: &EaxCall) -> Result {
        if call.version() == EaxVersion::V2 {
            let listener: Listener20Props = call.value()?;
            let mut all = ReverbProps::default();
            all.room = listener.room;
            all.room_hf = listener.room_hf;
            all.room_rolloff_factor = listener.room_rolloff_factor;
            all.decay_time = listener.decay_time;
            all.decay_hf_ratio = listener.decay_hf_ratio;
            all.reflections = listener.reflections;
            all.reflections_delay = listener.reflections_delay;
            all.reverb = listener.reverb;
            all.reverb_delay = listener.reverb_delay;
            all.environment = listener.environment;
            all.environment_size = listener.environment_size;
            all.environment_diffusion = listener.environment_diffusion;
            all.air_absorption_hf = listener.air_absorption_hf;
            all.flags = listener.flags;
            self.defer_all(all, call.version())
        } else {
            self.defer_all(call.value()?, call.version())
        }
    }

    fn defer_all(&mut self, all: ReverbProps, version: EaxVersion) -> Result {
        Self::validate_all(&all, version)?;
        self.deferred = all;
        self.dirty = ReverbDirty::ALL;
        Ok(())
    }

    /// A preset load is a full write of the table row.
    fn defer_environment(&mut self, environment: u32, version: EaxVersion) -> Result {
        Self::validate_environment(environment, version)?;
        self.deferred = REVERB_PRESETS[environment as usize];
        self.dirty = ReverbDirty::ALL;
        Ok(())
    }

    fn defer_environment_size(&mut self, size: f32) -> Result {
        validate::range(
            "Reverb Environment Size",
            size,
            ReverbProps::MIN_ENVIRONMENT_SIZE,
            ReverbProps::MAX_ENVIRONMENT_SIZE,
        )?;
        self.deferred.environment_size = size;
        self.dirty.update(
            ReverbDirty::ENVIRONMENT_SIZE,
            self.props.environment_size != size,
        );
        Ok(())
    }

    fn defer_environment_diffusion(&mut self, diffusion: f32) -> Result {
        validate::range(
            "Reverb Environment Diffusion",
            diffusion,
            ReverbProps::MIN_ENVIRONMENT_DIFFUSION,
            ReverbProps::MAX_ENVIRONMENT_DIFFUSION,
        )?;
        self.deferred.environment_diffusion = diffusion;
        self.dirty.update(
            ReverbDirty::ENVIRONMENT_DIFFUSION,
            self.props.environment_diffusion != diffusion,
        );
        Ok(())
    }

    fn defer_room(&mut self, room: i32) -> Result {
        validate::range("Reverb Room", room, ReverbProps::MIN_ROOM, ReverbProps::MAX_ROOM)?;
        self.deferred.room = room;
        self.dirty.update(ReverbDirty::ROOM, self.props.room != room);
        Ok(())
    }

    fn defer_room_hf(&mut self, room_hf: i32) -> Result {
        validate::range(
            "Reverb Room HF",
            room_hf,
            ReverbProps::MIN_ROOM_HF,
            ReverbProps::MAX_ROOM_HF,
        )?;
        self.deferred.room_hf = room_hf;
        self.dirty
            .update(ReverbDirty::ROOM_HF, self.props.room_hf != room_hf);
        Ok(())
    }

    fn defer_room_lf(&mut self, room_lf: i32) -> Result {
        validate::range(
            "Reverb Room LF",
            room_lf,
            ReverbProps::MIN_ROOM_LF,
            ReverbProps::MAX_ROOM_LF,
        )?;
        self.deferred.room_lf = room_lf;
        self.dirty
            .update(ReverbDirty::ROOM_LF, self.props.room_lf != room_lf);
        Ok(())
    }

    fn defer_decay_time(&mut self, decay_time: f32) -> Result {
        validate::range(
            "Reverb Decay Time",
            decay_time,
            ReverbProps::MIN_DECAY_TIME,
            ReverbProps::MAX_DECAY_TIME,
        )?;
        self.deferred.decay_time = decay_time;
        self.dirty
            .update(ReverbDirty::DECAY_TIME, self.props.decay_time != decay_time);
        Ok(())
    }

    fn defer_decay_hf_ratio(&mut self, ratio: f32) -> Result {
        validate::range(
            "Reverb Decay HF Ratio",
            ratio,
            ReverbProps::MIN_DECAY_HF_RATIO,
            ReverbProps::MAX_DECAY_HF_RATIO,
        )?;
        self.deferred.decay_hf_ratio = ratio;
        self.dirty.update(
            ReverbDirty::DECAY_HF_RATIO,
            self.props.decay_hf_ratio != ratio,
        );
        Ok(())
    }

    fn defer_decay_lf_ratio(&mut self, ratio: f32) -> Result {
        validate::range(
            "Reverb Decay LF Ratio",
            ratio,
            ReverbProps::MIN_DECAY_LF_RATIO,
            ReverbProps::MAX_DECAY_LF_RATIO,
        )?;
        self.deferred.decay_lf_ratio = ratio;
        self.dirty.update(
            ReverbDirty::DECAY_LF_RATIO,
            self.props.decay_lf_ratio != ratio,
        );
        Ok(())
    }

    fn defer_reflections(&mut self, reflections: i32) -> Result {
        validate::range(
            "Reverb Reflections",
            reflections,
            ReverbProps::MIN_REFLECTIONS,
            ReverbProps::MAX_REFLECTIONS,
        )?;
        self.deferred.reflections = reflections;
        self.dirty.update(
            ReverbDirty::REFLECTIONS,
            self.props.reflections != reflections,
        );
        Ok(())
    }

    fn defer_reflections_delay(&mut self, delay: f32) -> Result {
        validate::range(
            "Reverb Reflections Delay",
            delay,
            ReverbProps::MIN_REFLECTIONS_DELAY,
            ReverbProps::MAX_REFLECTIONS_DELAY,
        )?;
        self.deferred.reflections_delay = delay;
        self.dirty.update(
            ReverbDirty::REFLECTIONS_DELAY,
            self.props.reflections_delay != delay,
        );
        Ok(())
    }

    fn defer_reflections_pan(&mut self, pan: Vector3) -> Result {
        self.deferred.reflections_pan = pan;
        self.dirty.update(
            ReverbDirty::REFLECTIONS_PAN,
            self.props.reflections_pan != pan,
        );
        Ok(())
    }

    fn defer_reverb(&mut self, reverb: i32) -> Result {
        validate::range(
            "Reverb Level",
            reverb,
            ReverbProps::MIN_REVERB,
            ReverbProps::MAX_REVERB,
        )?;
        self.deferred.reverb = reverb;
        self.dirty
            .update(ReverbDirty::REVERB, self.props.reverb != reverb);
        Ok(())
    }

    fn defer_reverb_delay(&mut self, delay: f32) -> Result {
        validate::range(
            "Reverb Delay",
            delay,
            ReverbProps::MIN_REVERB_DELAY,
            ReverbProps::MAX_REVERB_DELAY,
        )?;
        self.deferred.reverb_delay = delay;
        self.dirty
            .update(ReverbDirty::REVERB_DELAY, self.props.reverb_delay != delay);
        Ok(())
    }

    fn defer_reverb_pan(&mut self, pan: Vector3) -> Result {
        self.deferred.reverb_pan = pan;
        self.dirty
            .update(ReverbDirty::REVERB_PAN, self.props.reverb_pan != pan);
        Ok(())
    }

    fn defer_echo_time(&mut self, time: f32) -> Result {
        validate::range(
            "Reverb Echo Time",
            time,
            ReverbProps::MIN_ECHO_TIME,
            ReverbProps::MAX_ECHO_TIME,
        )?;
        self.deferred.echo_time = time;
        self.dirty
            .update(ReverbDirty::ECHO_TIME, self.props.echo_time != time);
        Ok(())
    }

    fn defer_echo_depth(&mut self, depth: f32) -> Result {
        validate::range(
            "Reverb Echo Depth",
            depth,
            ReverbProps::MIN_ECHO_DEPTH,
            ReverbProps::MAX_ECHO_DEPTH,
        )?;
        self.deferred.echo_depth = depth;
        self.dirty
            .update(ReverbDirty::ECHO_DEPTH, self.props.echo_depth != depth);
        Ok(())
    }

    fn defer_modulation_time(&mut self, time: f32) -> Result {
        validate::range(
            "Reverb Modulation Time",
            time,
            ReverbProps::MIN_MODULATION_TIME,
            ReverbProps::MAX_MODULATION_TIME,
        )?;
        self.deferred.modulation_time = time;
        self.dirty.update(
            ReverbDirty::MODULATION_TIME,
            self.props.modulation_time != time,
        );
        Ok(())
    }

    fn defer_modulation_depth(&mut self, depth: f32) -> Result {
        validate::range(
            "Reverb Modulation Depth",
            depth,
            ReverbProps::MIN_MODULATION_DEPTH,
            ReverbProps::MAX_MODULATION_DEPTH,
        )?;
        self.deferred.modulation_depth = depth;
        self.dirty.update(
            ReverbDirty::MODULATION_DEPTH,
            self.props.modulation_depth != depth,
        );
        Ok(())
    }

    fn defer_air_absorption_hf(&mut self, air_absorption_hf: f32) -> Result {
        validate::range(
            "Reverb Air Absorption HF",
            air_absorption_hf,
            ReverbProps::MIN_AIR_ABSORPTION_HF,
            ReverbProps::MAX_AIR_ABSORPTION_HF,
        )?;
        self.deferred.air_absorption_hf = air_absorption_hf;
        self.dirty.update(
            ReverbDirty::AIR_ABSORPTION_HF,
            self.props.air_absorption_hf != air_absorption_hf,
        );
        Ok(())
    }

    fn defer_hf_reference(&mut self, reference: f32) -> Result {
        validate::range(
            "Reverb HF Reference",
            reference,
            ReverbProps::MIN_HF_REFERENCE,
            ReverbProps::MAX_HF_REFERENCE,
        )?;
        self.deferred.hf_reference = reference;
        self.dirty.update(
            ReverbDirty::HF_REFERENCE,
            self.props.hf_reference != reference,
        );
        Ok(())
    }

    fn defer_lf_reference(&mut self, reference: f32) -> Result {
        validate::range(
            "Reverb LF Reference",
            reference,
            ReverbProps::MIN_LF_REFERENCE,
            ReverbProps::MAX_LF_REFERENCE,
        )?;
        self.deferred.lf_reference = reference;
        self.dirty.update(
            ReverbDirty::LF_REFERENCE,
            self.props.lf_reference != reference,
        );
        Ok(())
    }

    fn defer_room_rolloff_factor(&mut self, factor: f32) -> Result {
        validate::range(
            "Reverb Room Rolloff Factor",
            factor,
            ReverbProps::MIN_ROOM_ROLLOFF_FACTOR,
            ReverbProps::MAX_ROOM_ROLLOFF_FACTOR,
        )?;
        self.deferred.room_rolloff_factor = factor;
        self.dirty.update(
            ReverbDirty::ROOM_ROLLOFF_FACTOR,
            self.props.room_rolloff_factor != factor,
        );
        Ok(())
    }

    fn defer_flags(&mut self, flags: u32) -> Result {
        validate::flags("Reverb Flags", flags, REVERB_FLAGS_RESERVED)?;
        self.deferred.flags = flags;
        self.dirty
            .update(ReverbDirty::FLAGS, self.props.flags != flags);
        Ok(())
    }

    // Commit.

    fn apply_deferred(&mut self) {
        if self.dirty.is_empty() {
            return;
        }
        self.props = self.deferred;
        // The environment index is bookkeeping only; its preset expansion
        // already landed in the other fields.
        if self.dirty.contains(ReverbDirty::ENVIRONMENT_SIZE) {
            self.set_efx_density();
        }
        if self.dirty.contains(ReverbDirty::ENVIRONMENT_DIFFUSION) {
            self.set_efx_diffusion();
        }
        if self.dirty.contains(ReverbDirty::ROOM) {
            self.set_efx_gain();
        }
        if self.dirty.contains(ReverbDirty::ROOM_HF) {
            self.set_efx_gain_hf();
        }
        if self.dirty.contains(ReverbDirty::ROOM_LF) {
            self.set_efx_gain_lf();
        }
        if self.dirty.contains(ReverbDirty::DECAY_TIME) {
            self.set_efx_decay_time();
        }
        if self.dirty.contains(ReverbDirty::DECAY_HF_RATIO) {
            self.set_efx_decay_hf_ratio();
        }
        if self.dirty.contains(ReverbDirty::DECAY_LF_RATIO) {
            self.set_efx_decay_lf_ratio();
        }
        if self.dirty.contains(ReverbDirty::REFLECTIONS) {
            self.set_efx_reflections_gain();
        }
        if self.dirty.contains(ReverbDirty::REFLECTIONS_DELAY) {
            self.set_efx_reflections_delay();
        }
        if self.dirty.contains(ReverbDirty::REFLECTIONS_PAN) {
            self.set_efx_reflections_pan();
        }
        if self.dirty.contains(ReverbDirty::REVERB) {
            self.set_efx_late_reverb_gain();
        }
        if self.dirty.contains(ReverbDirty::REVERB_DELAY) {
            self.set_efx_late_reverb_delay();
        }
        if self.dirty.contains(ReverbDirty::REVERB_PAN) {
            self.set_efx_late_reverb_pan();
        }
        if self.dirty.contains(ReverbDirty::ECHO_TIME) {
            self.set_efx_echo_time();
        }
        if self.dirty.contains(ReverbDirty::ECHO_DEPTH) {
            self.set_efx_echo_depth();
        }
        if self.dirty.contains(ReverbDirty::MODULATION_TIME) {
            self.set_efx_modulation_time();
        }
        if self.dirty.contains(ReverbDirty::MODULATION_DEPTH) {
            self.set_efx_modulation_depth();
        }
        if self.dirty.contains(ReverbDirty::AIR_ABSORPTION_HF) {
            self.set_efx_air_absorption_gain_hf();
        }
        if self.dirty.contains(ReverbDirty::HF_REFERENCE) {
            self.set_efx_hf_reference();
        }
        if self.dirty.contains(ReverbDirty::LF_REFERENCE) {
            self.set_efx_lf_reference();
        }
        if self.dirty.contains(ReverbDirty::ROOM_ROLLOFF_FACTOR) {
            self.set_efx_room_rolloff_factor();
        }
        if self.dirty.contains(ReverbDirty::FLAGS) {
            self.set_efx_flags();
        }
        self.dirty.clear();
        self.core.attach();
    }

    fn set_efx_density(&self) {
        self.core.set_f(
            AL_EAXREVERB_DENSITY,
            convert::density(self.props.environment_size),
        );
    }

    fn set_efx_diffusion(&self) {
        self.core.set_f(
            AL_EAXREVERB_DIFFUSION,
            convert::diffusion(self.props.environment_diffusion),
        );
    }

    fn set_efx_gain(&self) {
        self.core
            .set_f(AL_EAXREVERB_GAIN, convert::gain(self.props.room));
    }

    fn set_efx_gain_hf(&self) {
        self.core
            .set_f(AL_EAXREVERB_GAINHF, convert::gain_hf(self.props.room_hf));
    }

    fn set_efx_gain_lf(&self) {
        self.core
            .set_f(AL_EAXREVERB_GAINLF, convert::gain_lf(self.props.room_lf));
    }

    fn set_efx_decay_time(&self) {
        self.core.set_f(
            AL_EAXREVERB_DECAY_TIME,
            convert::decay_time(self.props.decay_time),
        );
    }

    fn set_efx_decay_hf_ratio(&self) {
        self.core.set_f(
            AL_EAXREVERB_DECAY_HFRATIO,
            convert::decay_hf_ratio(self.props.decay_hf_ratio),
        );
    }

    fn set_efx_decay_lf_ratio(&self) {
        self.core.set_f(
            AL_EAXREVERB_DECAY_LFRATIO,
            convert::decay_lf_ratio(self.props.decay_lf_ratio),
        );
    }

    fn set_efx_reflections_gain(&self) {
        self.core.set_f(
            AL_EAXREVERB_REFLECTIONS_GAIN,
            convert::reflections_gain(self.props.reflections),
        );
    }

    fn set_efx_reflections_delay(&self) {
        self.core.set_f(
            AL_EAXREVERB_REFLECTIONS_DELAY,
            convert::reflections_delay(self.props.reflections_delay),
        );
    }

    fn set_efx_reflections_pan(&self) {
        let pan = self.props.reflections_pan;
        self.core
            .set_fv(AL_EAXREVERB_REFLECTIONS_PAN, &[pan.x, pan.y, pan.z]);
    }

    fn set_efx_late_reverb_gain(&self) {
        self.core.set_f(
            AL_EAXREVERB_LATE_REVERB_GAIN,
            convert::late_reverb_gain(self.props.reverb),
        );
    }

    fn set_efx_late_reverb_delay(&self) {
        self.core.set_f(
            AL_EAXREVERB_LATE_REVERB_DELAY,
            convert::late_reverb_delay(self.props.reverb_delay),
        );
    }

    fn set_efx_late_reverb_pan(&self) {
        let pan = self.props.reverb_pan;
        self.core
            .set_fv(AL_EAXREVERB_LATE_REVERB_PAN, &[pan.x, pan.y, pan.z]);
    }

    fn set_efx_echo_time(&self) {
        self.core.set_f(
            AL_EAXREVERB_ECHO_TIME,
            convert::echo_time(self.props.echo_time),
        );
    }

    fn set_efx_echo_depth(&self) {
        self.core.set_f(
            AL_EAXREVERB_ECHO_DEPTH,
            convert::echo_depth(self.props.echo_depth),
        );
    }

    fn set_efx_modulation_time(&self) {
        self.core.set_f(
            AL_EAXREVERB_MODULATION_TIME,
            convert::modulation_time(self.props.modulation_time),
        );
    }

    fn set_efx_modulation_depth(&self) {
        self.core.set_f(
            AL_EAXREVERB_MODULATION_DEPTH,
            convert::modulation_depth(self.props.modulation_depth),
        );
    }

    fn set_efx_air_absorption_gain_hf(&self) {
        self.core.set_f(
            AL_EAXREVERB_AIR_ABSORPTION_GAINHF,
            convert::air_absorption_gain_hf(self.props.air_absorption_hf),
        );
    }

    fn set_efx_hf_reference(&self) {
        self.core.set_f(
            AL_EAXREVERB_HFREFERENCE,
            convert::hf_reference(self.props.hf_reference),
        );
    }

    fn set_efx_lf_reference(&self) {
        self.core.set_f(
            AL_EAXREVERB_LFREFERENCE,
            convert::lf_reference(self.props.lf_reference),
        );
    }

    fn set_efx_room_rolloff_factor(&self) {
        self.core.set_f(
            AL_EAXREVERB_ROOM_ROLLOFF_FACTOR,
            convert::room_rolloff_factor(self.props.room_rolloff_factor),
        );
    }

    fn set_efx_flags(&self) {
        let limit = self.props.flags & REVERB_FLAG_DECAY_HF_LIMIT != 0;
        self.core
            .set_i(AL_EAXREVERB_DECAY_HFLIMIT, if limit { 1 } else { 0 });
    }
}
