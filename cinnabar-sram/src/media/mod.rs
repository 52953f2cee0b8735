//! Raw byte movers behind the typed accessor.
//!
//! A [`SaveBus`] trusts its caller: offsets and lengths are validated by
//! [`crate::sram::Sram`] before any method here runs. The movers are
//! `unsafe` because a hardware bus turns an unchecked offset into a store
//! outside the cartridge SRAM region.
//!
//! ```compile_fail
//! use cinnabar_sram::media::{MemorySram, SaveBus};
//!
//! let mut bank = MemorySram::default();
//! bank.copy_to_storage(&[0u8; 4], 0x0200_0000);
//! ```

use enum_dispatch::enum_dispatch;

pub use self::memory::MemorySram;

#[cfg(feature = "std")]
pub use self::file::FileSram;
#[cfg(target_arch = "arm")]
pub use self::hardware::HardwareSram;

#[cfg(feature = "std")]
mod file;
#[cfg(target_arch = "arm")]
mod hardware;
mod memory;

/// Byte level access to a save bank. Every method requires the byte range it
/// touches to lie inside the bank.
#[enum_dispatch]
pub trait SaveBus {
    /// Fills `dst` with save memory starting at `offset`.
    ///
    /// # Safety
    ///
    /// `offset + dst.len()` must not exceed [`crate::consts::SRAM_SIZE`].
    unsafe fn copy_from_storage(&self, dst: &mut [u8], offset: usize);

    /// Copies `src` into save memory starting at `offset`.
    ///
    /// # Safety
    ///
    /// `offset + src.len()` must not exceed [`crate::consts::SRAM_SIZE`].
    unsafe fn copy_to_storage(&mut self, src: &[u8], offset: usize);

    /// Writes `len` copies of `value` starting at `offset`.
    ///
    /// # Safety
    ///
    /// `offset + len` must not exceed [`crate::consts::SRAM_SIZE`].
    unsafe fn set_storage(&mut self, value: u8, len: usize, offset: usize) {
        let chunk = [value; 64];
        let mut done = 0;
        while done < len {
            let count = (len - done).min(chunk.len());
            // SAFETY: the chunk stays inside the caller's window.
            unsafe { self.copy_to_storage(&chunk[..count], offset + done) };
            done += count;
        }
    }
}

/// Host side save media, switchable at runtime.
#[cfg(feature = "std")]
#[enum_dispatch(SaveBus)]
pub enum SaveMedia {
    MemorySram,
    FileSram,
}
