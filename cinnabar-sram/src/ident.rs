//! Save-type identification strings.
//!
//! Emulators and flash cart loaders do not probe the backup chip. They scan
//! the program image for one of the library ID strings instead and size the
//! backup memory from the first match.
//!
//! <https://forum.gbadev.org/viewtopic.php?f=4&t=2825>

use crate::consts::SRAM_SIZE;

/// Word aligned, NUL terminated ID string embedded in the program image.
#[repr(C, align(4))]
pub struct IdentificationToken([u8; 10]);

impl IdentificationToken {
    /// The token bytes including the trailing NUL.
    pub const fn as_bytes_with_nul(&self) -> &[u8] {
        &self.0
    }

    /// The token bytes without the trailing NUL.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0[..self.0.len() - 1]
    }
}

#[used]
#[no_mangle]
static CINNABAR_SRAM_SAVE_TYPE: IdentificationToken = IdentificationToken(*b"SRAM_V113\0");

/// Only [`crate::setup::init`] hands this out.
pub(crate) fn token() -> &'static IdentificationToken {
    &CINNABAR_SRAM_SAVE_TYPE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveType {
    Eeprom,
    Sram,
    Flash,
    Flash512,
    Flash1M,
}

impl SaveType {
    const ID_STRINGS: [(&'static [u8], SaveType); 5] = [
        (b"EEPROM_V", SaveType::Eeprom),
        (b"SRAM_V", SaveType::Sram),
        (b"FLASH_V", SaveType::Flash),
        (b"FLASH512_V", SaveType::Flash512),
        (b"FLASH1M_V", SaveType::Flash1M),
    ];

    /// Finds the first ID string in a program image.
    pub fn detect(image: &[u8]) -> Option<SaveType> {
        (0..image.len()).find_map(|start| {
            let rest = &image[start..];
            Self::ID_STRINGS
                .iter()
                .find(|(id, _)| rest.starts_with(id))
                .map(|&(_, ty)| ty)
        })
    }

    /// Backing size in bytes, when the ID string pins it down.
    ///
    /// EEPROM comes in 512 byte and 8 KiB parts with the same ID string.
    pub fn storage_size(self) -> Option<usize> {
        match self {
            SaveType::Eeprom => None,
            SaveType::Sram => Some(SRAM_SIZE),
            SaveType::Flash | SaveType::Flash512 => Some(0x10000),
            SaveType::Flash1M => Some(0x20000),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SaveType::Eeprom => "EEPROM",
            SaveType::Sram => "SRAM",
            SaveType::Flash => "Flash 64K",
            SaveType::Flash512 => "Flash 512K",
            SaveType::Flash1M => "Flash 1M",
        }
    }
}
