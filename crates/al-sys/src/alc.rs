//! ALC 1.1 constants (the subset the shim touches).

use crate::ALCenum;

pub const ALC_FALSE: ALCenum = 0;
pub const ALC_TRUE: ALCenum = 1;

pub const ALC_NO_ERROR: ALCenum = 0;
pub const ALC_INVALID_DEVICE: ALCenum = 0xA001;
pub const ALC_INVALID_CONTEXT: ALCenum = 0xA002;
pub const ALC_INVALID_ENUM: ALCenum = 0xA003;
pub const ALC_INVALID_VALUE: ALCenum = 0xA004;
pub const ALC_OUT_OF_MEMORY: ALCenum = 0xA005;

pub const ALC_MAJOR_VERSION: ALCenum = 0x1000;
pub const ALC_MINOR_VERSION: ALCenum = 0x1001;
pub const ALC_ATTRIBUTES_SIZE: ALCenum = 0x1002;
pub const ALC_ALL_ATTRIBUTES: ALCenum = 0x1003;
pub const ALC_DEFAULT_DEVICE_SPECIFIER: ALCenum = 0x1004;
pub const ALC_DEVICE_SPECIFIER: ALCenum = 0x1005;
pub const ALC_EXTENSIONS: ALCenum = 0x1006;

pub const ALC_FREQUENCY: ALCenum = 0x1007;
pub const ALC_REFRESH: ALCenum = 0x1008;
pub const ALC_SYNC: ALCenum = 0x1009;
pub const ALC_MONO_SOURCES: ALCenum = 0x1010;
pub const ALC_STEREO_SOURCES: ALCenum = 0x1011;
