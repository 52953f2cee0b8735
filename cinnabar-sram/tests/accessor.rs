use cinnabar_common::{zeroed, FlatCopy};
use cinnabar_sram::{
    consts::SRAM_SIZE,
    media::MemorySram,
    setup,
    sram::Sram,
    waitcnt::EmulatedWaitControl,
};
use std::panic::{catch_unwind, AssertUnwindSafe};

#[derive(Clone, Copy, Debug, PartialEq, FlatCopy)]
#[repr(C)]
struct SaveSlot {
    magic: [u8; 4],
    level: u16,
    lives: u16,
    score: u32,
    best_times: [u32; 3],
}

fn sram() -> Sram<MemorySram> {
    let token = setup::init(&mut EmulatedWaitControl::default());
    Sram::new(MemorySram::new(0xFF), token)
}

/// xorshift, enough to spread offsets over the bank.
fn next(state: &mut u32) -> u32 {
    *state ^= *state << 13;
    *state ^= *state >> 17;
    *state ^= *state << 5;
    *state
}

#[test]
fn u32_round_trip_at_offset() {
    let mut sram = sram();
    sram.write_offset(&0xDEADBEEFu32, 100);

    let mut value = 0u32;
    sram.read_offset(&mut value, 100);
    assert_eq!(value, 0xDEADBEEF);

    let result = catch_unwind(AssertUnwindSafe(|| sram.write_offset(&0u32, 32765)));
    assert!(result.is_err());
}

#[test]
fn clear_window_reads_back_zero() {
    let mut sram = sram();
    sram.clear_offset(10, 5000);

    let mut byte = 1u8;
    sram.read_offset(&mut byte, 5004);
    assert_eq!(byte, 0);
}

#[test]
fn struct_round_trip() {
    let mut sram = sram();
    let slot = SaveSlot {
        magic: *b"CNBR",
        level: 7,
        lives: 3,
        score: 123_456,
        best_times: [61, 75, 90],
    };

    for offset in [0, 1, 513, SRAM_SIZE - std::mem::size_of::<SaveSlot>()] {
        sram.write_offset(&slot, offset);

        let mut loaded = zeroed::<SaveSlot>();
        sram.read_offset(&mut loaded, offset);
        assert_eq!(loaded, slot);
    }
}

#[test]
fn random_window_round_trips() {
    let mut sram = sram();
    let mut state = 0x2545_F491;

    for _ in 0..500 {
        let offset = next(&mut state) as usize % (SRAM_SIZE - 16 + 1);
        let mut block = [0u8; 16];
        for byte in &mut block {
            *byte = next(&mut state) as u8;
        }

        sram.write_offset(&block, offset);
        let mut back = [0u8; 16];
        sram.read_offset(&mut back, offset);
        assert_eq!(back, block);
    }
}

#[test]
fn rejected_writes_leave_bank_untouched() {
    let mut sram = sram();
    let windows = [(SRAM_SIZE - 3, 4), (SRAM_SIZE, 1), (usize::MAX, 1)];

    for (offset, len) in windows {
        let result = catch_unwind(AssertUnwindSafe(|| sram.set_bytes_offset(0, len, offset)));
        assert!(result.is_err());
    }

    let result = catch_unwind(AssertUnwindSafe(|| sram.write_offset(&[0u8; 8], SRAM_SIZE - 7)));
    assert!(result.is_err());

    assert!(sram.media().as_bytes().iter().all(|&b| b == 0xFF));
}

#[test]
fn clear_prefixes() {
    for n in [0, 1, 255, 4096, SRAM_SIZE] {
        let mut sram = sram();
        sram.clear(n);

        let bytes = sram.media().as_bytes();
        assert!(bytes[..n].iter().all(|&b| b == 0));
        assert!(bytes[n..].iter().all(|&b| b == 0xFF));
    }
}

#[test]
fn set_bytes_windows() {
    let mut sram = sram();
    let mut state = 0x1234_5678;

    for _ in 0..100 {
        let offset = next(&mut state) as usize % SRAM_SIZE;
        let len = next(&mut state) as usize % (SRAM_SIZE - offset + 1);
        let value = next(&mut state) as u8;

        sram.set_bytes_offset(value, len, offset);

        let window = &sram.media().as_bytes()[offset..offset + len];
        assert!(window.iter().all(|&b| b == value));
    }
}

#[test]
fn set_bytes_from_start() {
    let mut sram = sram();
    sram.set_bytes(0x42, 3);

    let mut head = [0u8; 4];
    sram.read(&mut head);
    assert_eq!(head, [0x42, 0x42, 0x42, 0xFF]);
}
