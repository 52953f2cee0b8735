//! Battery backed cartridge SRAM for the GBA.
//!
//! Call [`setup::init`] once at startup to program the SRAM wait state. It
//! returns the save-type token that [`sram::Sram::new`] asks for, so a handle
//! cannot exist before the bus is configured.
//!
//! ```
//! use cinnabar_sram::{media::MemorySram, setup, sram::Sram, waitcnt::EmulatedWaitControl};
//!
//! let token = setup::init(&mut EmulatedWaitControl::default());
//! let mut sram = Sram::new(MemorySram::default(), token);
//!
//! sram.write_offset(&0xDEADBEEFu32, 100);
//! let mut value = 0u32;
//! sram.read_offset(&mut value, 100);
//! assert_eq!(value, 0xDEADBEEF);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod config;
pub mod consts;
pub mod ident;
pub mod media;
pub mod setup;
pub mod sram;
pub mod waitcnt;
pub mod window;

pub use cinnabar_common::FlatCopy;

/// Configures the bus and takes the cartridge SRAM.
///
/// # Safety
///
/// Must be called at most once, and the caller gives up any other access to
/// `WAITCNT` and the SRAM region for the life of the returned handle.
#[cfg(target_arch = "arm")]
pub unsafe fn take() -> sram::Sram<media::HardwareSram> {
    let token = setup::init(&mut waitcnt::MmioWaitControl::new());
    sram::Sram::new(media::HardwareSram::new(), token)
}
