#![cfg_attr(not(test), no_std)]

mod flat;

pub use cinnabar_macros::FlatCopy;
pub use flat::{bytes_of, bytes_of_mut, zeroed, FlatCopy};

#[doc(hidden)]
pub use static_assertions;
