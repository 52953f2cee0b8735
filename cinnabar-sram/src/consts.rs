/// Size of the cartridge SRAM bank in bytes.
pub const SRAM_SIZE: usize = 0x8000;

/// Start of the cartridge SRAM region in the GBA address space.
pub const SRAM_BASE: usize = 0x0E00_0000;

/// Game Pak waitstate control register.
pub const REG_WAITCNT: usize = 0x0400_0204;
