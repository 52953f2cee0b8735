use crate::consts::SRAM_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "SRAM access of {len} bytes at offset {offset} exceeds the {size} byte device",
    size = SRAM_SIZE
)]
pub struct AccessError {
    pub offset: usize,
    pub len: usize,
}

/// A validated byte range of the SRAM bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessWindow {
    offset: usize,
    len: usize,
}

impl AccessWindow {
    pub fn new(offset: usize, len: usize) -> Result<Self, AccessError> {
        match offset.checked_add(len) {
            Some(end) if end <= SRAM_SIZE => Ok(Self { offset, len }),
            _ => Err(AccessError { offset, len }),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
