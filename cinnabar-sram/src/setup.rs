use crate::{
    config::SRAM_WAIT_STATE,
    ident::{self, IdentificationToken},
    waitcnt::WaitControlPort,
};
use log::debug;

/// Programs the SRAM wait state and returns the save-type token.
///
/// Must run before the first SRAM access. Calling it again writes the same
/// wait state. The other `WAITCNT` fields are left as they were.
pub fn init<P: WaitControlPort>(port: &mut P) -> &'static IdentificationToken {
    let waitcnt = port.read().with_sram_wait_control(SRAM_WAIT_STATE);
    port.write(waitcnt);

    debug!(
        "SRAM wait state set to {} cycles (WAITCNT = {:#06x})",
        SRAM_WAIT_STATE.cycles(),
        u16::from(waitcnt)
    );

    ident::token()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waitcnt::EmulatedWaitControl;

    #[test]
    fn programs_configured_wait_state() {
        let mut port = EmulatedWaitControl::default();
        init(&mut port);

        assert_eq!(port.read().sram_wait_control(), SRAM_WAIT_STATE);
        assert_eq!(port.raw() & 0x3, SRAM_WAIT_STATE as u16);
        assert_eq!(port.writes(), 1);
    }

    #[test]
    fn preserves_rom_timings() {
        let mut port = EmulatedWaitControl::new(0x4314);
        init(&mut port);

        assert_eq!(port.raw() & !0x3, 0x4314);
    }

    #[test]
    fn repeated_init_is_idempotent() {
        let mut port = EmulatedWaitControl::new(0x0003);
        let first = init(&mut port);
        let after_first = port.raw();
        let second = init(&mut port);

        assert_eq!(port.raw(), after_first);
        assert_eq!(port.writes(), 2);
        assert!(core::ptr::eq(first, second));
    }

    #[test]
    fn returns_sram_token() {
        let mut port = EmulatedWaitControl::default();
        assert_eq!(init(&mut port).as_bytes(), b"SRAM_V113");
    }
}
