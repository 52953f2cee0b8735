use super::SaveBus;
use crate::consts::{SRAM_BASE, SRAM_SIZE};

/// The cartridge SRAM chip.
///
/// The SRAM data bus is 8 bits wide, so every access is a single volatile
/// byte load or store. Wider accesses return mirrored bytes.
pub struct HardwareSram {
    _private: (),
}

impl HardwareSram {
    /// # Safety
    ///
    /// Must have exclusive ownership of the SRAM region for the lifetime of
    /// the value, and `WAITCNT` must already hold a working SRAM wait state
    /// (see [`crate::setup::init`]). DMA and interrupt handlers that touch
    /// the Game Pak bus must be held off during every call.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl SaveBus for HardwareSram {
    unsafe fn copy_from_storage(&self, dst: &mut [u8], offset: usize) {
        debug_assert!(offset + dst.len() <= SRAM_SIZE);
        let src = (SRAM_BASE + offset) as *const u8;
        for (i, byte) in dst.iter_mut().enumerate() {
            *byte = unsafe { src.add(i).read_volatile() };
        }
    }

    unsafe fn copy_to_storage(&mut self, src: &[u8], offset: usize) {
        debug_assert!(offset + src.len() <= SRAM_SIZE);
        let dst = (SRAM_BASE + offset) as *mut u8;
        for (i, &byte) in src.iter().enumerate() {
            unsafe { dst.add(i).write_volatile(byte) };
        }
    }

    unsafe fn set_storage(&mut self, value: u8, len: usize, offset: usize) {
        debug_assert!(offset + len <= SRAM_SIZE);
        let dst = (SRAM_BASE + offset) as *mut u8;
        for i in 0..len {
            unsafe { dst.add(i).write_volatile(value) };
        }
    }
}
