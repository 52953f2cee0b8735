use crate::config::WaitState;
use modular_bitfield::{bitfield, prelude::B2};

static_assertions::assert_eq_size!(WaitControl, u16);
#[bitfield]
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitControl {
    pub sram_wait_control: WaitState,
    pub ws0_first_access: B2,
    pub ws0_second_access: bool,
    pub ws1_first_access: B2,
    pub ws1_second_access: bool,
    pub ws2_first_access: B2,
    pub ws2_second_access: bool,
    pub phi_terminal_output: B2,
    #[skip]
    __: bool,
    pub prefetch: bool,
    // game pak type flag, read only
    #[skip]
    __: bool,
}

impl Default for WaitControl {
    fn default() -> Self {
        WaitControl::new()
    }
}

/// Access to the `WAITCNT` register.
pub trait WaitControlPort {
    fn read(&self) -> WaitControl;
    fn write(&mut self, value: WaitControl);
}

/// The memory mapped `WAITCNT` register.
#[cfg(target_arch = "arm")]
pub struct MmioWaitControl {
    _private: (),
}

#[cfg(target_arch = "arm")]
impl MmioWaitControl {
    /// # Safety
    ///
    /// Must have exclusive ownership of `WAITCNT` for the lifetime of the
    /// value. Interrupt handlers that touch the register must be masked.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

#[cfg(target_arch = "arm")]
impl WaitControlPort for MmioWaitControl {
    fn read(&self) -> WaitControl {
        let raw = unsafe { core::ptr::read_volatile(crate::consts::REG_WAITCNT as *const u16) };
        raw.into()
    }

    fn write(&mut self, value: WaitControl) {
        unsafe { core::ptr::write_volatile(crate::consts::REG_WAITCNT as *mut u16, value.into()) }
    }
}

/// A `WAITCNT` register held in memory, for hosts without the hardware.
#[derive(Debug, Default)]
pub struct EmulatedWaitControl {
    reg: WaitControl,
    writes: usize,
}

impl EmulatedWaitControl {
    pub fn new(raw: u16) -> Self {
        Self {
            reg: raw.into(),
            writes: 0,
        }
    }

    pub fn raw(&self) -> u16 {
        self.reg.into()
    }

    /// Number of register writes seen so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl WaitControlPort for EmulatedWaitControl {
    fn read(&self) -> WaitControl {
        self.reg
    }

    fn write(&mut self, value: WaitControl) {
        self.reg = value;
        self.writes += 1;
    }
}
