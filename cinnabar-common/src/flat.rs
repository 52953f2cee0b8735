use core::{mem, slice};

/// Marker for types that can cross into save memory as raw bytes.
///
/// A `FlatCopy` value is fully described by its bytes: reading any byte
/// pattern of the right length produces a valid value, and writing a value
/// out never leaks an address or an uninitialised padding byte.
///
/// Prefer `#[derive(FlatCopy)]` over a manual impl for structs; the derive
/// checks the layout at compile time.
///
/// ```
/// use cinnabar_common::FlatCopy;
///
/// #[derive(Clone, Copy, FlatCopy)]
/// #[repr(C)]
/// struct Entry {
///     id: u32,
///     hp: u16,
///     mp: u16,
/// }
/// ```
///
/// Padding is rejected:
///
/// ```compile_fail
/// use cinnabar_common::FlatCopy;
///
/// #[derive(Clone, Copy, FlatCopy)]
/// #[repr(C)]
/// struct Padded {
///     a: u8,
///     b: u32,
/// }
/// ```
///
/// So are enums, structs without a fixed layout, and fields that are not
/// themselves flat:
///
/// ```compile_fail
/// use cinnabar_common::FlatCopy;
///
/// #[derive(Clone, Copy, FlatCopy)]
/// #[repr(u8)]
/// enum Difficulty {
///     Easy,
///     Hard,
/// }
/// ```
///
/// ```compile_fail
/// use cinnabar_common::FlatCopy;
///
/// #[derive(Clone, Copy, FlatCopy)]
/// struct Unordered {
///     a: u32,
///     b: u32,
/// }
/// ```
///
/// ```compile_fail
/// use cinnabar_common::FlatCopy;
///
/// #[derive(Clone, Copy, FlatCopy)]
/// #[repr(C)]
/// struct Flags {
///     unlocked: [bool; 4],
/// }
/// ```
///
/// ```compile_fail
/// use cinnabar_common::FlatCopy;
///
/// #[derive(Clone, Copy, FlatCopy)]
/// #[repr(C)]
/// struct Named {
///     name: &'static [u8; 8],
/// }
/// ```
///
/// # Safety
///
/// Implementors must
/// - contain no padding bytes,
/// - contain no pointers, references or other owning handles,
/// - accept every bit pattern as a valid value (so no `bool`, `char` or
///   enums).
pub unsafe trait FlatCopy: Copy + 'static {}

unsafe impl<T, const LEN: usize> FlatCopy for [T; LEN] where T: FlatCopy {}

macro_rules! impl_unsafe_trait {
    ($tr: ty; $($ty: ty),*) => {
        $(
            unsafe impl $tr for $ty {}
        )*
    };
}

impl_unsafe_trait!(
    FlatCopy; u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize, f32, f64
);

/// Views a flat value as its raw bytes, in native byte order.
#[inline]
pub fn bytes_of<T: FlatCopy>(v: &T) -> &[u8] {
    // SAFETY: `T: FlatCopy` has no padding, so every byte is initialised.
    unsafe { slice::from_raw_parts(v as *const T as *const u8, mem::size_of::<T>()) }
}

/// Mutable byte view of a flat value.
#[inline]
pub fn bytes_of_mut<T: FlatCopy>(v: &mut T) -> &mut [u8] {
    // SAFETY: `T: FlatCopy` accepts any bit pattern, so arbitrary writes
    // through this slice leave `v` valid.
    unsafe { slice::from_raw_parts_mut(v as *mut T as *mut u8, mem::size_of::<T>()) }
}

/// Returns the all-zero value of a flat type.
#[inline]
pub fn zeroed<T: FlatCopy>() -> T {
    // SAFETY: all-zero is one of the bit patterns `FlatCopy` promises to accept.
    unsafe { mem::MaybeUninit::zeroed().assume_init() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_of_is_native_order() {
        let value = 0x1122_3344u32;
        assert_eq!(bytes_of(&value), &value.to_ne_bytes());
    }

    #[test]
    fn bytes_of_mut_writes_through() {
        let mut value = 0u16;
        bytes_of_mut(&mut value).copy_from_slice(&0xBEEFu16.to_ne_bytes());
        assert_eq!(value, 0xBEEF);
    }

    #[test]
    fn arrays_are_flat() {
        let table = [[1u8, 2], [3, 4]];
        assert_eq!(bytes_of(&table), &[1, 2, 3, 4]);
    }

    #[test]
    fn zeroed_values() {
        assert_eq!(zeroed::<u64>(), 0);
        assert_eq!(zeroed::<[i16; 3]>(), [0; 3]);
        assert_eq!(zeroed::<f32>(), 0.0);
    }
}
