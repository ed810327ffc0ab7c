//! Typed failures for the dispatch pipeline and their transport codes.

use al_sys::ALuint;

use crate::guid::Guid;

/// Result alias used throughout the engine.
pub type Result<T = (), E = EaxError> = std::result::Result<T, E>;

/// A failed property-set operation.
///
/// Component methods return these; the top-level `EAXSet`/`EAXGet` boundary
/// converts them with [`EaxError::code`], latches the code on the context,
/// and hands the integer back to the game. Validation failures carry enough
/// context to name the field, the offending value, and the accepted bounds.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EaxError {
    #[error("no current context")]
    NoCurrentContext,

    #[error("context initialization failed: {0}")]
    ContextInit(String),

    #[error("null property set id")]
    NullPropertySet,

    #[error("unrecognized property set {0}")]
    UnknownPropertySet(Guid),

    #[error("unsupported {set} property {id:#x}")]
    UnknownProperty { set: &'static str, id: u32 },

    #[error("property set requires an FX slot index")]
    MissingFxSlotIndex,

    #[error("source {0} not found")]
    SourceNotFound(ALuint),

    #[error("changing {0:?} on a dedicated FX slot is not supported")]
    DedicatedSlot(&'static str),

    #[error("loading a different effect into a locked FX slot is not supported")]
    LockedSlot,

    #[error("null property buffer")]
    NullBuffer,

    #[error("property buffer too small: {size} bytes, need at least {need}")]
    BufferTooSmall { size: usize, need: usize },

    #[error("{field} out of range: {value}, expected {min} to {max}")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("{requested} active FX slots requested, session allows {allowed}")]
    TooManyActiveSends { requested: usize, allowed: u32 },

    #[error("unrecognized FX slot id {0}")]
    UnknownFxSlotId(Guid),

    #[error("buffer {0} not found")]
    BufferNotFound(ALuint),

    #[error("buffer {0} already holds data, its storage mode is frozen")]
    BufferModeFrozen(ALuint),

    #[error("no effect loaded on the FX slot")]
    NoEffectLoaded,

    #[error("unrecognized effect {0}")]
    UnknownEffect(Guid),

    #[error("property not applicable to this source type")]
    IncompatibleSourceType,

    #[error("property requires an EAX {required} session, active session is EAX {active}")]
    IncompatibleVersion { required: u32, active: u32 },

    #[error("EFX backbone unavailable: {0}")]
    EfxUnavailable(String),
}

impl EaxError {
    /// The transport code games receive from `EAXSet`/`EAXGet`.
    pub fn code(&self) -> i32 {
        use crate::api::*;
        match self {
            EaxError::NoCurrentContext
            | EaxError::ContextInit(_)
            | EaxError::NullPropertySet
            | EaxError::UnknownPropertySet(_)
            | EaxError::UnknownProperty { .. }
            | EaxError::MissingFxSlotIndex
            | EaxError::SourceNotFound(_)
            | EaxError::DedicatedSlot(_)
            | EaxError::LockedSlot
            | EaxError::BufferNotFound(_)
            | EaxError::BufferModeFrozen(_)
            | EaxError::EfxUnavailable(_) => EAXERR_INVALID_OPERATION,

            EaxError::NullBuffer
            | EaxError::BufferTooSmall { .. }
            | EaxError::OutOfRange { .. }
            | EaxError::TooManyActiveSends { .. }
            | EaxError::UnknownFxSlotId(_) => EAXERR_INVALID_VALUE,

            EaxError::NoEffectLoaded => EAXERR_NO_EFFECT_LOADED,
            EaxError::UnknownEffect(_) => EAXERR_UNKNOWN_EFFECT,
            EaxError::IncompatibleSourceType => EAXERR_INCOMPATIBLE_SOURCE_TYPE,
            EaxError::IncompatibleVersion { .. } => EAXERR_INCOMPATIBLE_EAX_VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::*;

    #[test]
    fn codes_match_the_transport_table() {
        assert_eq!(EaxError::NoCurrentContext.code(), EAXERR_INVALID_OPERATION);
        assert_eq!(EaxError::NullBuffer.code(), EAXERR_INVALID_VALUE);
        assert_eq!(EaxError::NoEffectLoaded.code(), EAXERR_NO_EFFECT_LOADED);
        assert_eq!(
            EaxError::UnknownEffect(Guid::NULL).code(),
            EAXERR_UNKNOWN_EFFECT
        );
        assert_eq!(
            EaxError::IncompatibleSourceType.code(),
            EAXERR_INCOMPATIBLE_SOURCE_TYPE
        );
        assert_eq!(
            EaxError::IncompatibleVersion {
                required: 5,
                active: 4
            }
            .code(),
            EAXERR_INCOMPATIBLE_EAX_VERSION
        );
    }

    #[test]
    fn out_of_range_names_the_field_and_bounds() {
        let error = EaxError::OutOfRange {
            field: "Decay Time",
            value: "25".into(),
            min: "0.1".into(),
            max: "20".into(),
        };
        let message = error.to_string();
        assert!(message.contains("Decay Time"));
        assert!(message.contains("25"));
        assert!(message.contains("0.1"));
        assert!(message.contains("20"));
    }
}
