//! Typed access to the SRAM bank.
//!
//! Every operation validates its byte window against [`SRAM_SIZE`] before the
//! [`SaveBus`] sees it, so a rejected call leaves the bank untouched. Values
//! are copied byte for byte in native order.

use crate::{
    consts::SRAM_SIZE,
    ident::IdentificationToken,
    media::SaveBus,
    window::{AccessError, AccessWindow},
};
use cinnabar_common::{bytes_of, bytes_of_mut, FlatCopy};
use core::mem::size_of;
use log::trace;

/// Evaluated per type at monomorphization, so an oversized `T` fails the build.
trait FitsInSram: Sized {
    const FITS: ();
}

impl<T> FitsInSram for T {
    const FITS: () = assert!(size_of::<T>() <= SRAM_SIZE, "type is larger than SRAM");
}

#[inline(always)]
fn assert_fits<T>() {
    #[allow(clippy::let_unit_value)]
    let () = <T as FitsInSram>::FITS;
}

#[track_caller]
fn checked_window(offset: usize, len: usize) -> AccessWindow {
    match AccessWindow::new(offset, len) {
        Ok(window) => window,
        Err(err) => panic!("{err}"),
    }
}

/// Handle to the SRAM bank.
///
/// There is no locking: the handle is the only path to the bank, and reads
/// borrow it shared while writes borrow it exclusively. Interrupt handlers
/// must not reach the bank behind its back.
pub struct Sram<M> {
    media: M,
}

impl<M: SaveBus> Sram<M> {
    /// Wraps `media`. The token returned by [`crate::setup::init`] shows that
    /// the bus timing is programmed.
    pub fn new(media: M, _token: &'static IdentificationToken) -> Self {
        Self { media }
    }

    /// Total bank size in bytes.
    pub const fn size(&self) -> usize {
        SRAM_SIZE
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    /// The raw byte movers stay `unsafe` through this handle, so skipping the
    /// bounds check takes an explicit `unsafe` block.
    ///
    /// ```compile_fail
    /// use cinnabar_sram::{media::{MemorySram, SaveBus}, setup, sram::Sram};
    /// use cinnabar_sram::waitcnt::EmulatedWaitControl;
    ///
    /// let token = setup::init(&mut EmulatedWaitControl::default());
    /// let mut sram = Sram::new(MemorySram::default(), token);
    /// sram.media_mut().copy_to_storage(&[0u8; 4], 0x0200_0000);
    /// ```
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn into_inner(self) -> M {
        self.media
    }

    /// Copies the start of the bank into `destination`.
    #[track_caller]
    pub fn read<T: FlatCopy>(&self, destination: &mut T) {
        self.read_offset(destination, 0)
    }

    /// Copies `size_of::<T>()` bytes starting at `offset` into `destination`.
    ///
    /// # Panics
    ///
    /// If `offset + size_of::<T>()` exceeds the bank.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinnabar_sram::{media::MemorySram, setup, sram::Sram, waitcnt::EmulatedWaitControl};
    ///
    /// let token = setup::init(&mut EmulatedWaitControl::default());
    /// let sram = Sram::new(MemorySram::new(0xAB), token);
    ///
    /// let mut bank = [0u8; 32768];
    /// sram.read_offset(&mut bank, 0);
    /// assert!(bank.iter().all(|&b| b == 0xAB));
    /// ```
    ///
    /// A type larger than the bank is rejected at build time:
    ///
    /// ```compile_fail
    /// use cinnabar_sram::{media::MemorySram, setup, sram::Sram, waitcnt::EmulatedWaitControl};
    ///
    /// let token = setup::init(&mut EmulatedWaitControl::default());
    /// let sram = Sram::new(MemorySram::default(), token);
    ///
    /// let mut too_big = [0u8; 32769];
    /// sram.read_offset(&mut too_big, 0);
    /// ```
    ///
    /// So is a type that is not [`FlatCopy`]:
    ///
    /// ```compile_fail
    /// use cinnabar_sram::{media::MemorySram, setup, sram::Sram, waitcnt::EmulatedWaitControl};
    ///
    /// let token = setup::init(&mut EmulatedWaitControl::default());
    /// let sram = Sram::new(MemorySram::default(), token);
    ///
    /// let mut flag = false;
    /// sram.read_offset(&mut flag, 0);
    /// ```
    #[track_caller]
    pub fn read_offset<T: FlatCopy>(&self, destination: &mut T, offset: usize) {
        assert_fits::<T>();

        let window = checked_window(offset, size_of::<T>());
        self.read_window(destination, window);
    }

    pub fn try_read_offset<T: FlatCopy>(
        &self,
        destination: &mut T,
        offset: usize,
    ) -> Result<(), AccessError> {
        assert_fits::<T>();

        let window = AccessWindow::new(offset, size_of::<T>())?;
        self.read_window(destination, window);
        Ok(())
    }

    /// Copies `source` to the start of the bank.
    #[track_caller]
    pub fn write<T: FlatCopy>(&mut self, source: &T) {
        self.write_offset(source, 0)
    }

    /// Copies `source` into the bank starting at `offset`.
    ///
    /// # Panics
    ///
    /// If `offset + size_of::<T>()` exceeds the bank.
    #[track_caller]
    pub fn write_offset<T: FlatCopy>(&mut self, source: &T, offset: usize) {
        assert_fits::<T>();

        let window = checked_window(offset, size_of::<T>());
        self.write_window(source, window);
    }

    pub fn try_write_offset<T: FlatCopy>(
        &mut self,
        source: &T,
        offset: usize,
    ) -> Result<(), AccessError> {
        assert_fits::<T>();

        let window = AccessWindow::new(offset, size_of::<T>())?;
        self.write_window(source, window);
        Ok(())
    }

    /// Zeroes the first `bytes` bytes.
    #[track_caller]
    pub fn clear(&mut self, bytes: usize) {
        self.set_bytes_offset(0, bytes, 0)
    }

    /// Zeroes `bytes` bytes starting at `offset`.
    #[track_caller]
    pub fn clear_offset(&mut self, bytes: usize, offset: usize) {
        self.set_bytes_offset(0, bytes, offset)
    }

    pub fn try_clear_offset(&mut self, bytes: usize, offset: usize) -> Result<(), AccessError> {
        self.try_set_bytes_offset(0, bytes, offset)
    }

    /// Fills the first `bytes` bytes with `value`.
    #[track_caller]
    pub fn set_bytes(&mut self, value: u8, bytes: usize) {
        self.set_bytes_offset(value, bytes, 0)
    }

    /// Fills `bytes` bytes starting at `offset` with `value`.
    ///
    /// # Panics
    ///
    /// If `offset + bytes` exceeds the bank.
    #[track_caller]
    pub fn set_bytes_offset(&mut self, value: u8, bytes: usize, offset: usize) {
        let window = checked_window(offset, bytes);
        self.fill_window(value, window);
    }

    pub fn try_set_bytes_offset(
        &mut self,
        value: u8,
        bytes: usize,
        offset: usize,
    ) -> Result<(), AccessError> {
        let window = AccessWindow::new(offset, bytes)?;
        self.fill_window(value, window);
        Ok(())
    }

    fn read_window<T: FlatCopy>(&self, destination: &mut T, window: AccessWindow) {
        trace!("sram read {} bytes at {:#06x}", window.len(), window.offset());
        // SAFETY: `window` lies inside the bank and matches `size_of::<T>()`.
        unsafe {
            self.media
                .copy_from_storage(bytes_of_mut(destination), window.offset())
        };
    }

    fn write_window<T: FlatCopy>(&mut self, source: &T, window: AccessWindow) {
        trace!("sram write {} bytes at {:#06x}", window.len(), window.offset());
        // SAFETY: `window` lies inside the bank and matches `size_of::<T>()`.
        unsafe { self.media.copy_to_storage(bytes_of(source), window.offset()) };
    }

    fn fill_window(&mut self, value: u8, window: AccessWindow) {
        if window.is_empty() {
            return;
        }

        trace!(
            "sram fill {} bytes at {:#06x} with {:#04x}",
            window.len(),
            window.offset(),
            value
        );
        // SAFETY: `window` lies inside the bank.
        unsafe { self.media.set_storage(value, window.len(), window.offset()) };
    }
}
