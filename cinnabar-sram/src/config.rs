//! Build-time bus configuration.
//!
//! The SRAM wait state is chosen with one of the `sram-wait-*` cargo
//! features. Only the four codes the Game Pak bus understands can be named,
//! so an invalid timing cannot reach the register.

use modular_bitfield::BitfieldSpecifier;

/// Wait cycles inserted on every SRAM access, as encoded in `WAITCNT` bits 0-1.
#[derive(BitfieldSpecifier, Debug, Clone, Copy, PartialEq, Eq)]
#[bits = 2]
pub enum WaitState {
    Cycles4 = 0,
    Cycles3 = 1,
    Cycles2 = 2,
    Cycles8 = 3,
}

impl WaitState {
    pub const ALL: [WaitState; 4] = [
        WaitState::Cycles4,
        WaitState::Cycles3,
        WaitState::Cycles2,
        WaitState::Cycles8,
    ];

    pub const fn cycles(self) -> u32 {
        match self {
            WaitState::Cycles4 => 4,
            WaitState::Cycles3 => 3,
            WaitState::Cycles2 => 2,
            WaitState::Cycles8 => 8,
        }
    }
}

/// Picks the wait state from the `sram-wait-*` flags, given in
/// [`WaitState::ALL`] order. More than one flag is an error, and in a const
/// context that error fails the build.
///
/// ```compile_fail
/// use cinnabar_sram::config::{select_wait_state, WaitState};
///
/// const BOTH: WaitState = select_wait_state([true, false, false, true]);
/// ```
pub const fn select_wait_state(enabled: [bool; 4]) -> WaitState {
    let mut selected = WaitState::Cycles8;
    let mut count = 0;
    let mut i = 0;
    while i < enabled.len() {
        if enabled[i] {
            selected = WaitState::ALL[i];
            count += 1;
        }
        i += 1;
    }

    assert!(count <= 1, "more than one `sram-wait-*` feature enabled");
    selected
}

/// The wait state programmed by [`crate::setup::init`].
pub const SRAM_WAIT_STATE: WaitState = select_wait_state([
    cfg!(feature = "sram-wait-4"),
    cfg!(feature = "sram-wait-3"),
    cfg!(feature = "sram-wait-2"),
    cfg!(feature = "sram-wait-8"),
]);
