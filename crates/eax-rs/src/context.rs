//! Per-context state: the four slots, the source map, the session, the
//! context shadow, and the error latch.
//!
//! A context is registered as soon as the game creates it but stays cold
//! until the first property call arrives; only then is the EFX backbone
//! probed and the slot array built (sources generated in the meantime are
//! parked and materialized at that point). The latch keeps the most recent
//! failure code until the game asks for it.

use std::collections::HashMap;
use std::sync::Arc;

use al_sys::*;

use crate::api::*;
use crate::call::{EaxCall, EaxVersion, PropertySetId};
use crate::error::{EaxError, Result};
use crate::fx_slots::FxSlots;
use crate::guid::{Guid, EAX40_FX_SLOT_IDS, EAX50_FX_SLOT_IDS};
use crate::source::Source;
use crate::validate;

struct ContextState {
    fx_slots: FxSlots,
    sources: HashMap<ALuint, Source>,
}

pub struct EaxContext {
    api: Arc<AlApi>,
    device: *mut ALCdevice,
    al_context: *mut ALCcontext,
    state: Option<ContextState>,
    attempted_init: bool,
    pending_sources: Vec<ALuint>,
    session: SessionProps,
    props: ContextProps50,
    speaker_config: u32,
    last_error: i32,
}

impl EaxContext {
    pub fn new(api: &Arc<AlApi>, device: *mut ALCdevice, al_context: *mut ALCcontext) -> EaxContext {
        EaxContext {
            api: Arc::clone(api),
            device,
            al_context,
            state: None,
            attempted_init: false,
            pending_sources: Vec::new(),
            session: SessionProps::default(),
            props: ContextProps50::default(),
            speaker_config: SPEAKER_CONFIG_HEADPHONES,
            last_error: EAX_OK,
        }
    }

    pub fn al_context(&self) -> *mut ALCcontext {
        self.al_context
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Record the failure code for a later `LASTERROR` get.
    pub fn latch_error(&mut self, code: i32) {
        self.last_error = code;
    }

    /// Probe the EFX backbone and build the slot array; runs once, on the
    /// first property call for this context.
    pub fn ensure_initialized(&mut self) -> Result {
        if self.state.is_some() {
            return Ok(());
        }
        if self.attempted_init {
            return Err(EaxError::ContextInit(
                "EFX backbone probe already failed".into(),
            ));
        }
        self.attempted_init = true;

        self.probe_efx()?;

        let mut fx_slots = FxSlots::new(&self.api)?;
        fx_slots.set_primary(&self.props.context.primary_fx_slot_id);
        fx_slots.set_max_active(self.session.max_active_sends);

        let mut sources = HashMap::new();
        for name in std::mem::take(&mut self.pending_sources) {
            sources.insert(name, Source::new(name, &self.api, &fx_slots)?);
        }

        log::info!("Initialized EAX context {:?}.", self.al_context);
        self.state = Some(ContextState { fx_slots, sources });
        Ok(())
    }

    fn probe_efx(&self) -> Result {
        // SAFETY: resolved table, engine mutex held by the caller.
        let has_efx = unsafe {
            (self.api.alc.alcIsExtensionPresent)(self.device, ALC_EXT_EFX_NAME.as_ptr())
        };
        if has_efx == 0 {
            return Err(EaxError::EfxUnavailable("extension not present".into()));
        }

        let mut sends: ALCint = 0;
        unsafe {
            (self.api.alc.alcGetIntegerv)(self.device, ALC_MAX_AUXILIARY_SENDS, 1, &mut sends)
        };
        if (sends as usize) < EAX_MAX_FX_SLOTS {
            return Err(EaxError::EfxUnavailable(format!(
                "{sends} auxiliary sends available, need {EAX_MAX_FX_SLOTS}"
            )));
        }
        Ok(())
    }

    fn state_mut(&mut self) -> Result<&mut ContextState> {
        self.state
            .as_mut()
            .ok_or_else(|| EaxError::ContextInit("context not initialized".into()))
    }

    // Source lifecycle.

    /// The game generated source names on this context.
    pub fn add_sources(&mut self, names: &[ALuint]) -> Result {
        match &mut self.state {
            Some(state) => {
                for name in names {
                    let source = Source::new(*name, &self.api, &state.fx_slots)?;
                    state.sources.insert(*name, source);
                }
            }
            None => self.pending_sources.extend_from_slice(names),
        }
        Ok(())
    }

    /// The game deleted source names; drop records only for names the
    /// driver no longer recognizes.
    pub fn remove_sources(&mut self, names: &[ALuint]) {
        for name in names {
            let gone = unsafe { (self.api.al.alIsSource)(*name) } == 0;
            if !gone {
                continue;
            }
            if let Some(state) = &mut self.state {
                state.sources.remove(name);
            }
            self.pending_sources.retain(|pending| pending != name);
        }
    }

    pub fn source_count(&self) -> usize {
        match &self.state {
            Some(state) => state.sources.len(),
            None => self.pending_sources.len(),
        }
    }

    /// Inspection hook for the routing state, used by the host for
    /// diagnostics.
    pub fn with_source<R>(&self, name: ALuint, f: impl FnOnce(&Source) -> R) -> Option<R> {
        self.state.as_ref()?.sources.get(&name).map(f)
    }

    pub fn fx_slots(&self) -> Option<&FxSlots> {
        self.state.as_ref().map(|state| &state.fx_slots)
    }

    // Dispatch.

    pub fn dispatch(&mut self, call: &EaxCall) -> Result {
        match call.property_set() {
            PropertySetId::Context => self.dispatch_context(call),
            PropertySetId::FxSlot | PropertySetId::FxSlotEffect => self.dispatch_fx_slot(call),
            PropertySetId::Source => self.dispatch_source(call),
        }
    }

    fn dispatch_fx_slot(&mut self, call: &EaxCall) -> Result {
        let index = call.fx_slot_index().require()?;
        let state = self.state_mut()?;
        let filters_dirty = state.fx_slots.get_mut(index).dispatch(call)?;
        if filters_dirty {
            let ContextState { fx_slots, sources } = state;
            for source in sources.values_mut() {
                source.update_filters(fx_slots);
            }
        }
        Ok(())
    }

    fn dispatch_source(&mut self, call: &EaxCall) -> Result {
        let session_version = self.session.version;
        let state = self.state_mut()?;
        let ContextState { fx_slots, sources } = state;
        let source = sources
            .get_mut(&call.target_name())
            .ok_or(EaxError::SourceNotFound(call.target_name()))?;
        source.dispatch(call, fx_slots, session_version)
    }

    fn dispatch_context(&mut self, call: &EaxCall) -> Result {
        if call.is_get() {
            self.get(call)
        } else {
            self.set(call)
        }
    }

    fn get(&mut self, call: &EaxCall) -> Result {
        match call.property_id() {
            CONTEXT_NONE => Ok(()),
            CONTEXT_ALLPARAMETERS => match call.version() {
                EaxVersion::V5 => call.set_value(self.props),
                _ => call.set_value(self.props.context),
            },
            CONTEXT_PRIMARYFXSLOTID => call.set_value(self.props.context.primary_fx_slot_id),
            CONTEXT_DISTANCEFACTOR => call.set_value(self.props.context.distance_factor),
            CONTEXT_AIRABSORPTIONHF => call.set_value(self.props.context.air_absorption_hf),
            CONTEXT_HFREFERENCE => call.set_value(self.props.context.hf_reference),
            CONTEXT_LASTERROR => {
                // Reading the latch clears it.
                let code = std::mem::replace(&mut self.last_error, EAX_OK);
                call.set_value(code)
            }
            CONTEXT_SPEAKERCONFIG => {
                call.require_v5()?;
                call.set_value(self.speaker_config)
            }
            CONTEXT_EAXSESSION => {
                call.require_v5()?;
                call.set_value(self.session)
            }
            CONTEXT_MACROFXFACTOR => {
                call.require_v5()?;
                call.set_value(self.props.macro_fx_factor)
            }
            other => Err(EaxError::UnknownProperty {
                set: "context",
                id: other,
            }),
        }
    }

    fn set(&mut self, call: &EaxCall) -> Result {
        match call.property_id() {
            CONTEXT_NONE => Ok(()),
            CONTEXT_ALLPARAMETERS => self.set_all(call),
            CONTEXT_PRIMARYFXSLOTID => {
                let id: Guid = call.value()?;
                Self::validate_primary_fx_slot_id(&id)?;
                self.set_primary_fx_slot_id(&id)
            }
            CONTEXT_DISTANCEFACTOR => {
                let factor: f32 = call.value()?;
                validate::range(
                    "Context Distance Factor",
                    factor,
                    ContextProps::MIN_DISTANCE_FACTOR,
                    ContextProps::MAX_DISTANCE_FACTOR,
                )?;
                self.props.context.distance_factor = factor;
                Ok(())
            }
            CONTEXT_AIRABSORPTIONHF => {
                let level: f32 = call.value()?;
                validate::range(
                    "Context Air Absorption HF",
                    level,
                    ContextProps::MIN_AIR_ABSORPTION_HF,
                    ContextProps::MAX_AIR_ABSORPTION_HF,
                )?;
                self.props.context.air_absorption_hf = level;
                Ok(())
            }
            CONTEXT_HFREFERENCE => {
                let reference: f32 = call.value()?;
                validate::range(
                    "Context HF Reference",
                    reference,
                    ContextProps::MIN_HF_REFERENCE,
                    ContextProps::MAX_HF_REFERENCE,
                )?;
                self.props.context.hf_reference = reference;
                Ok(())
            }
            CONTEXT_SPEAKERCONFIG => {
                call.require_v5()?;
                let config: u32 = call.value()?;
                validate::range(
                    "Context Speaker Config",
                    config,
                    SPEAKER_CONFIG_HEADPHONES,
                    SPEAKER_CONFIG_7POINT1,
                )?;
                self.speaker_config = config;
                Ok(())
            }
            CONTEXT_EAXSESSION => {
                call.require_v5()?;
                let session: SessionProps = call.value()?;
                Self::validate_session(&session)?;
                self.session = session;
                if let Some(state) = &mut self.state {
                    state.fx_slots.set_max_active(session.max_active_sends);
                }
                Ok(())
            }
            CONTEXT_MACROFXFACTOR => {
                call.require_v5()?;
                let factor: f32 = call.value()?;
                validate::range(
                    "Context Macro FX Factor",
                    factor,
                    ContextProps50::MIN_MACRO_FX_FACTOR,
                    ContextProps50::MAX_MACRO_FX_FACTOR,
                )?;
                self.props.macro_fx_factor = factor;
                Ok(())
            }
            other => Err(EaxError::UnknownProperty {
                set: "context",
                id: other,
            }),
        }
    }

    fn set_all(&mut self, call: &EaxCall) -> Result {
        let (v4_block, macro_fx_factor) = match call.version() {
            EaxVersion::V5 => {
                let all: ContextProps50 = call.value()?;
                (all.context, Some(all.macro_fx_factor))
            }
            _ => (call.value::<ContextProps>()?, None),
        };

        Self::validate_primary_fx_slot_id(&v4_block.primary_fx_slot_id)?;
        validate::range(
            "Context Distance Factor",
            v4_block.distance_factor,
            ContextProps::MIN_DISTANCE_FACTOR,
            ContextProps::MAX_DISTANCE_FACTOR,
        )?;
        validate::range(
            "Context Air Absorption HF",
            v4_block.air_absorption_hf,
            ContextProps::MIN_AIR_ABSORPTION_HF,
            ContextProps::MAX_AIR_ABSORPTION_HF,
        )?;
        validate::range(
            "Context HF Reference",
            v4_block.hf_reference,
            ContextProps::MIN_HF_REFERENCE,
            ContextProps::MAX_HF_REFERENCE,
        )?;
        if let Some(factor) = macro_fx_factor {
            validate::range(
                "Context Macro FX Factor",
                factor,
                ContextProps50::MIN_MACRO_FX_FACTOR,
                ContextProps50::MAX_MACRO_FX_FACTOR,
            )?;
        }

        let primary = v4_block.primary_fx_slot_id;
        self.props.context.distance_factor = v4_block.distance_factor;
        self.props.context.air_absorption_hf = v4_block.air_absorption_hf;
        self.props.context.hf_reference = v4_block.hf_reference;
        if let Some(factor) = macro_fx_factor {
            self.props.macro_fx_factor = factor;
        }
        self.set_primary_fx_slot_id(&primary)
    }

    fn validate_primary_fx_slot_id(id: &Guid) -> Result {
        let recognized = id.is_null()
            || EAX40_FX_SLOT_IDS.contains(id)
            || EAX50_FX_SLOT_IDS.contains(id);
        if !recognized {
            return Err(EaxError::UnknownFxSlotId(*id));
        }
        Ok(())
    }

    fn validate_session(session: &SessionProps) -> Result {
        validate::range(
            "Session EAX Version",
            session.version,
            SessionProps::MIN_VERSION,
            SessionProps::MAX_VERSION,
        )?;
        validate::range(
            "Session Max Active Sends",
            session.max_active_sends,
            SessionProps::MIN_MAX_ACTIVE_SENDS,
            SessionProps::MAX_MAX_ACTIVE_SENDS,
        )
    }

    /// Move the primary designation and refresh every source that routes
    /// through the sentinel.
    fn set_primary_fx_slot_id(&mut self, id: &Guid) -> Result {
        if self.props.context.primary_fx_slot_id == *id {
            return Ok(());
        }
        self.props.context.primary_fx_slot_id = *id;

        let state = self.state_mut()?;
        state.fx_slots.set_primary(id);
        let ContextState { fx_slots, sources } = state;
        for source in sources.values_mut() {
            source.on_primary_fx_slot_changed(fx_slots);
        }
        Ok(())
    }
}
