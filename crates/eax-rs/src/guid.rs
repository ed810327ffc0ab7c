//! The 16-byte identifiers the legacy API keys everything on.
//!
//! GUIDs discriminate property sets, select effect types on `LOADEFFECT`,
//! and name the slot a source sends to. Two sentinels exist: [`Guid::NULL`]
//! (all zero) and [`EAX_PRIMARY_FX_SLOT_ID`], which resolves to whichever
//! slot is currently primary.

use bytemuck::{Pod, Zeroable};

/// A value-compared 16-byte identifier with the traditional field split.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

static_assertions::assert_eq_size!(Guid, [u8; 16]);

impl Guid {
    /// The all-zero sentinel ("no effect", "no slot").
    pub const NULL: Guid = Guid::new(0, 0, 0, [0; 8]);

    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    pub const fn is_null(&self) -> bool {
        self.data1 == 0
            && self.data2 == 0
            && self.data3 == 0
            && self.data4[0] == 0
            && self.data4[1] == 0
            && self.data4[2] == 0
            && self.data4[3] == 0
            && self.data4[4] == 0
            && self.data4[5] == 0
            && self.data4[6] == 0
            && self.data4[7] == 0
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7],
        )
    }
}

impl std::fmt::Debug for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

/// Resolves to the current primary FX slot at source-send time.
pub const EAX_PRIMARY_FX_SLOT_ID: Guid = Guid::new(
    0xF317866D,
    0x924C,
    0x450C,
    [0x86, 0x1B, 0xE6, 0xDA, 0xA2, 0x5E, 0x7C, 0x20],
);

// Legacy (2.0) property sets.

pub const EAX20_LISTENER_PROPERTIES: Guid = Guid::new(
    0x0306A6A8,
    0xB224,
    0x11D2,
    [0x99, 0xE5, 0x00, 0x00, 0xE8, 0xD8, 0xC7, 0x22],
);

pub const EAX20_BUFFER_PROPERTIES: Guid = Guid::new(
    0x0306A6A7,
    0xB224,
    0x11D2,
    [0x99, 0xE5, 0x00, 0x00, 0xE8, 0xD8, 0xC7, 0x22],
);

// Legacy (3.0) property sets.

pub const EAX30_LISTENER_PROPERTIES: Guid = Guid::new(
    0xA8FA6882,
    0xB476,
    0x11D3,
    [0xBD, 0xB9, 0x00, 0xC0, 0xF0, 0x2D, 0xDF, 0x87],
);

pub const EAX30_BUFFER_PROPERTIES: Guid = Guid::new(
    0xA8FA6881,
    0xB476,
    0x11D3,
    [0xBD, 0xB9, 0x00, 0xC0, 0xF0, 0x2D, 0xDF, 0x87],
);

// 4.0 property sets.

pub const EAX40_CONTEXT: Guid = Guid::new(
    0x1D4870AD,
    0x0DEF,
    0x43C0,
    [0xA4, 0x0C, 0x52, 0x36, 0x32, 0x29, 0x63, 0x42],
);

pub const EAX40_FX_SLOT0: Guid = Guid::new(
    0xC4D79F1E,
    0xF1AC,
    0x436B,
    [0xA8, 0x1D, 0xA7, 0x38, 0xE7, 0x04, 0x54, 0x69],
);

pub const EAX40_FX_SLOT1: Guid = Guid::new(
    0x08C00E96,
    0x74BE,
    0x4491,
    [0x93, 0xAA, 0xE8, 0xAD, 0x35, 0xA4, 0x91, 0x17],
);

pub const EAX40_FX_SLOT2: Guid = Guid::new(
    0x1D433B88,
    0xF0F6,
    0x4637,
    [0x91, 0x9F, 0x60, 0xE7, 0xE0, 0x6B, 0x5E, 0xDD],
);

pub const EAX40_FX_SLOT3: Guid = Guid::new(
    0xEFFF08EA,
    0xC7D8,
    0x44AB,
    [0x93, 0xAD, 0x6D, 0xBF, 0xE3, 0x12, 0x9A, 0x9F],
);

pub const EAX40_SOURCE: Guid = Guid::new(
    0x1B86B823,
    0x22DF,
    0x4EAE,
    [0x8B, 0x3C, 0x12, 0x78, 0xCE, 0x54, 0x42, 0x27],
);

// 5.0 property sets.

pub const EAX50_CONTEXT: Guid = Guid::new(
    0x57E13437,
    0xB932,
    0x4AB2,
    [0xB8, 0xBD, 0x52, 0x66, 0xC1, 0xA8, 0x87, 0xEE],
);

pub const EAX50_FX_SLOT0: Guid = Guid::new(
    0x91F9590F,
    0xC388,
    0x407A,
    [0x84, 0xB0, 0x1B, 0xAE, 0x0E, 0xF7, 0x1A, 0xBC],
);

pub const EAX50_FX_SLOT1: Guid = Guid::new(
    0x8F5F7ACA,
    0x9608,
    0x4965,
    [0x81, 0x37, 0x82, 0x13, 0xC7, 0xB9, 0xD9, 0xDE],
);

pub const EAX50_FX_SLOT2: Guid = Guid::new(
    0x3C0F5252,
    0x9834,
    0x46F0,
    [0xA1, 0xD8, 0x5B, 0x95, 0xC4, 0xA0, 0x0A, 0x30],
);

pub const EAX50_FX_SLOT3: Guid = Guid::new(
    0xE2EB0EAA,
    0xE806,
    0x45E7,
    [0x9F, 0x86, 0x06, 0xC1, 0x57, 0x1A, 0x6F, 0xA3],
);

pub const EAX50_SOURCE: Guid = Guid::new(
    0x5EDF82F0,
    0x24A7,
    0x4F38,
    [0x8E, 0x64, 0x2F, 0x09, 0xCA, 0x05, 0xDE, 0xE1],
);

// Effect selectors for `LOADEFFECT`.

pub const EAX_NULL_EFFECT: Guid = Guid::NULL;

pub const EAX_REVERB_EFFECT: Guid = Guid::new(
    0x0CF95C8F,
    0xA3CC,
    0x4849,
    [0xB0, 0xB6, 0x83, 0x2E, 0xCC, 0x18, 0x22, 0xDF],
);

pub const EAX_AGC_COMPRESSOR_EFFECT: Guid = Guid::new(
    0xBFB7A01E,
    0x7825,
    0x4039,
    [0x92, 0x7F, 0x03, 0xAA, 0xBD, 0xA0, 0xC5, 0x60],
);

pub const EAX_AUTOWAH_EFFECT: Guid = Guid::new(
    0xEC3130C0,
    0xAC7A,
    0x11D2,
    [0x88, 0xDD, 0x00, 0xA0, 0x24, 0xD1, 0x3C, 0xE1],
);

pub const EAX_CHORUS_EFFECT: Guid = Guid::new(
    0xDE6D6FE0,
    0xAC79,
    0x11D2,
    [0x88, 0xDD, 0x00, 0xA0, 0x24, 0xD1, 0x3C, 0xE1],
);

pub const EAX_DISTORTION_EFFECT: Guid = Guid::new(
    0x975A4CE0,
    0xAC7E,
    0x11D2,
    [0x88, 0xDD, 0x00, 0xA0, 0x24, 0xD1, 0x3C, 0xE1],
);

pub const EAX_ECHO_EFFECT: Guid = Guid::new(
    0x0E9F1BC0,
    0xAC82,
    0x11D2,
    [0x88, 0xDD, 0x00, 0xA0, 0x24, 0xD1, 0x3C, 0xE1],
);

pub const EAX_EQUALIZER_EFFECT: Guid = Guid::new(
    0x65F94CE0,
    0x9793,
    0x11D3,
    [0x93, 0x9D, 0x00, 0xC0, 0xF0, 0x2D, 0xD6, 0xF0],
);

pub const EAX_FLANGER_EFFECT: Guid = Guid::new(
    0xA70007C0,
    0x07D2,
    0x11D3,
    [0x9B, 0x1E, 0x00, 0xA0, 0x24, 0xD1, 0x3C, 0xE1],
);

pub const EAX_FREQUENCY_SHIFTER_EFFECT: Guid = Guid::new(
    0xDC3E1880,
    0x9212,
    0x11D3,
    [0x93, 0x9D, 0x00, 0xC0, 0xF0, 0x2D, 0xD6, 0xF0],
);

pub const EAX_VOCAL_MORPHER_EFFECT: Guid = Guid::new(
    0xE41CF10C,
    0x3383,
    0x11D2,
    [0x88, 0xDD, 0x00, 0xA0, 0x24, 0xD1, 0x3C, 0xE1],
);

pub const EAX_PITCH_SHIFTER_EFFECT: Guid = Guid::new(
    0x65F94CE1,
    0x9793,
    0x11D3,
    [0x93, 0x9D, 0x00, 0xC0, 0xF0, 0x2D, 0xD6, 0xF0],
);

pub const EAX_RING_MODULATOR_EFFECT: Guid = Guid::new(
    0x0B89FE60,
    0xAFB5,
    0x11D2,
    [0x88, 0xDD, 0x00, 0xA0, 0x24, 0xD1, 0x3C, 0xE1],
);

/// Boot-time primary slot.
pub const EAX_DEFAULT_PRIMARY_FX_SLOT_ID: Guid = EAX40_FX_SLOT0;

/// The four slot ids per dialect, indexed by slot number.
pub const EAX40_FX_SLOT_IDS: [Guid; 4] = [
    EAX40_FX_SLOT0,
    EAX40_FX_SLOT1,
    EAX40_FX_SLOT2,
    EAX40_FX_SLOT3,
];

pub const EAX50_FX_SLOT_IDS: [Guid; 4] = [
    EAX50_FX_SLOT0,
    EAX50_FX_SLOT1,
    EAX50_FX_SLOT2,
    EAX50_FX_SLOT3,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_guid_is_all_zero() {
        assert!(Guid::NULL.is_null());
        assert_eq!(bytemuck::bytes_of(&Guid::NULL), &[0u8; 16]);
        assert!(!EAX_REVERB_EFFECT.is_null());
    }

    #[test]
    fn value_comparison() {
        assert_eq!(EAX40_FX_SLOT0, EAX_DEFAULT_PRIMARY_FX_SLOT_ID);
        assert_ne!(EAX40_FX_SLOT0, EAX50_FX_SLOT0);
    }

    #[test]
    fn display_uses_registry_format() {
        assert_eq!(
            Guid::NULL.to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            EAX_PRIMARY_FX_SLOT_ID.to_string(),
            "F317866D-924C-450C-861B-E6DAA25E7C20"
        );
    }
}
