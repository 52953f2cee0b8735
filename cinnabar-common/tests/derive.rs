use cinnabar_common::{bytes_of, bytes_of_mut, zeroed, FlatCopy};
use std::mem::size_of;

#[derive(Clone, Copy, Debug, PartialEq, FlatCopy)]
#[repr(C)]
struct HighScore {
    score: u32,
    stage: u16,
    initials: [u8; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, FlatCopy)]
#[repr(transparent)]
struct Checksum(u32);

#[derive(Clone, Copy, FlatCopy)]
#[repr(C)]
struct Table {
    entries: [HighScore; 4],
    checksum: Checksum,
}

fn assert_flat<T: FlatCopy>() {}

#[test]
fn derived_types_are_flat() {
    assert_flat::<HighScore>();
    assert_flat::<Checksum>();
    assert_flat::<Table>();
}

#[test]
fn derived_struct_byte_view() {
    let entry = HighScore {
        score: 0x0102_0304,
        stage: 0x0506,
        initials: *b"GV",
    };

    let bytes = bytes_of(&entry);
    assert_eq!(bytes.len(), size_of::<HighScore>());
    assert_eq!(&bytes[..4], &0x0102_0304u32.to_ne_bytes());
    assert_eq!(&bytes[4..6], &0x0506u16.to_ne_bytes());
    assert_eq!(&bytes[6..], b"GV");
}

#[test]
fn derived_struct_from_bytes() {
    let mut entry = zeroed::<HighScore>();
    bytes_of_mut(&mut entry)[6..].copy_from_slice(b"AB");

    assert_eq!(
        entry,
        HighScore {
            score: 0,
            stage: 0,
            initials: *b"AB",
        }
    );
}

#[test]
fn nested_struct_size() {
    assert_eq!(size_of::<Table>(), 4 * size_of::<HighScore>() + 4);
    assert_eq!(zeroed::<Checksum>(), Checksum(0));
}
