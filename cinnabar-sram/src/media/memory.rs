use super::SaveBus;
use crate::consts::SRAM_SIZE;

/// SRAM bank held in ordinary memory.
pub struct MemorySram {
    data: [u8; SRAM_SIZE],
}

impl MemorySram {
    /// A bank with every byte set to `fill`.
    pub const fn new(fill: u8) -> Self {
        Self {
            data: [fill; SRAM_SIZE],
        }
    }

    pub fn from_bytes(data: [u8; SRAM_SIZE]) -> Self {
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Default for MemorySram {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SaveBus for MemorySram {
    unsafe fn copy_from_storage(&self, dst: &mut [u8], offset: usize) {
        dst.copy_from_slice(&self.data[offset..offset + dst.len()]);
    }

    unsafe fn copy_to_storage(&mut self, src: &[u8], offset: usize) {
        self.data[offset..offset + src.len()].copy_from_slice(src);
    }

    unsafe fn set_storage(&mut self, value: u8, len: usize, offset: usize) {
        self.data[offset..offset + len].fill(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_filled() {
        let sram = MemorySram::new(0xFF);
        assert_eq!(sram.as_bytes().len(), SRAM_SIZE);
        assert!(sram.as_bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn copies_bytes() {
        let mut sram = MemorySram::default();
        unsafe { sram.copy_to_storage(b"cinnabar", 0x7FF8) };

        let mut buf = [0u8; 8];
        unsafe { sram.copy_from_storage(&mut buf, 0x7FF8) };
        assert_eq!(&buf, b"cinnabar");
    }

    #[test]
    fn zero_length_copy_at_end() {
        let mut sram = MemorySram::default();
        unsafe {
            sram.copy_to_storage(&[], SRAM_SIZE);
            sram.copy_from_storage(&mut [], SRAM_SIZE);
        }
    }
}
