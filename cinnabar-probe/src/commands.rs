use cinnabar_sram::{
    ident::{IdentificationToken, SaveType},
    media::{FileSram, MemorySram, SaveMedia},
    sram::Sram,
    window::AccessWindow,
};
use color_eyre::eyre::{Result, WrapErr};
use log::info;
use std::{fmt::Write, fs, path::Path};

pub fn detect(rom: &Path) -> Result<()> {
    let image = fs::read(rom).wrap_err_with(|| format!("reading {}", rom.display()))?;

    match SaveType::detect(&image) {
        Some(ty) => match ty.storage_size() {
            Some(size) => println!("{}: {} ({size} bytes)", rom.display(), ty.name()),
            None => println!("{}: {} (size not encoded)", rom.display(), ty.name()),
        },
        None => println!("{}: no save type string", rom.display()),
    }

    Ok(())
}

pub fn format(
    token: &'static IdentificationToken,
    save: &Path,
    fill: u8,
    dry_run: bool,
) -> Result<()> {
    let media: SaveMedia = if dry_run {
        MemorySram::default().into()
    } else {
        open(save)?.into()
    };

    let mut sram = Sram::new(media, token);
    sram.set_bytes(fill, sram.size());

    if let SaveMedia::FileSram(file) = sram.media_mut() {
        file.flush()
            .wrap_err_with(|| format!("writing {}", save.display()))?;
    }

    if dry_run {
        info!("dry run: {} left unchanged", save.display());
    } else {
        info!("formatted {} with {fill:#04x}", save.display());
    }
    Ok(())
}

pub fn dump(
    token: &'static IdentificationToken,
    save: &Path,
    offset: usize,
    len: usize,
) -> Result<()> {
    let sram = Sram::new(open(save)?, token);
    let window = AccessWindow::new(offset, len)?;

    let mut bytes = vec![0u8; window.len()];
    for (i, byte) in bytes.iter_mut().enumerate() {
        sram.try_read_offset(byte, window.offset() + i)?;
    }

    print!("{}", hexdump(window.offset(), &bytes));
    Ok(())
}

pub fn poke(
    token: &'static IdentificationToken,
    save: &Path,
    offset: usize,
    bytes: &[u8],
) -> Result<()> {
    let mut sram = Sram::new(open(save)?, token);
    let window = AccessWindow::new(offset, bytes.len())?;

    for (i, byte) in bytes.iter().enumerate() {
        sram.try_write_offset(byte, window.offset() + i)?;
    }

    sram.media_mut()
        .flush()
        .wrap_err_with(|| format!("writing {}", save.display()))?;

    info!("wrote {} bytes at {offset:#06x}", bytes.len());
    Ok(())
}

fn open(save: &Path) -> Result<FileSram> {
    FileSram::open(save, 0).wrap_err_with(|| format!("opening {}", save.display()))
}

fn hexdump(base: usize, bytes: &[u8]) -> String {
    let mut out = String::new();

    for (row, chunk) in bytes.chunks(16).enumerate() {
        let _ = write!(out, "{:06x}:", base + row * 16);
        for byte in chunk {
            let _ = write!(out, " {byte:02x}");
        }
        for _ in chunk.len()..16 {
            out.push_str("   ");
        }

        out.push_str("  |");
        out.extend(chunk.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        }));
        out.push_str("|\n");
    }

    out
}
