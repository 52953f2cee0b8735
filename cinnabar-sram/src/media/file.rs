use super::SaveBus;
use crate::consts::SRAM_SIZE;
use log::{debug, warn};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// SRAM bank mirrored in a `.sav` file, the layout emulators use.
pub struct FileSram {
    data: Box<[u8]>,
    save_file: PathBuf,
    is_dirty: bool,
}

impl FileSram {
    /// Loads `save_file`, or starts a fresh bank filled with `fill` when the
    /// file does not exist or has the wrong size. Nothing is written until
    /// [`FileSram::flush`].
    pub fn open<P: Into<PathBuf>>(save_file: P, fill: u8) -> io::Result<Self> {
        let save_file = save_file.into();
        let data = Self::initial_data(&save_file, fill)?;

        Ok(Self {
            data,
            save_file,
            is_dirty: false,
        })
    }

    fn initial_data(save_file: &Path, fill: u8) -> io::Result<Box<[u8]>> {
        match fs::read(save_file) {
            Ok(data) if data.len() == SRAM_SIZE => {
                debug!("loaded {} byte save from {}", data.len(), save_file.display());
                return Ok(data.into_boxed_slice());
            }
            Ok(data) => warn!(
                "ignoring {}: {} bytes, expected {}",
                save_file.display(),
                data.len(),
                SRAM_SIZE
            ),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no save at {}, starting fresh", save_file.display())
            }
            Err(err) => return Err(err),
        }

        Ok(vec![fill; SRAM_SIZE].into_boxed_slice())
    }

    pub fn path(&self) -> &Path {
        &self.save_file
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Writes the bank back to disk if it changed. Returns whether a write
    /// happened.
    pub fn flush(&mut self) -> io::Result<bool> {
        if !self.is_dirty {
            return Ok(false);
        }

        fs::write(&self.save_file, &self.data)?;
        self.is_dirty = false;
        debug!("flushed save to {}", self.save_file.display());
        Ok(true)
    }
}

impl SaveBus for FileSram {
    unsafe fn copy_from_storage(&self, dst: &mut [u8], offset: usize) {
        dst.copy_from_slice(&self.data[offset..offset + dst.len()]);
    }

    unsafe fn copy_to_storage(&mut self, src: &[u8], offset: usize) {
        self.is_dirty = true;
        self.data[offset..offset + src.len()].copy_from_slice(src);
    }

    unsafe fn set_storage(&mut self, value: u8, len: usize, offset: usize) {
        self.is_dirty = true;
        self.data[offset..offset + len].fill(value);
    }
}
