use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cinnabar_sram::{media::MemorySram, setup, sram::Sram, waitcnt::EmulatedWaitControl};

fn criterion_benchmark(c: &mut Criterion) {
    let token = setup::init(&mut EmulatedWaitControl::default());
    let mut sram = Sram::new(MemorySram::default(), token);

    c.bench_function("write_offset u32", |b| {
        b.iter(|| sram.write_offset(black_box(&0xDEADBEEFu32), black_box(100)))
    });

    c.bench_function("read_offset [u8; 256]", |b| {
        let mut block = [0u8; 256];
        b.iter(|| sram.read_offset(black_box(&mut block), black_box(4096)))
    });

    c.bench_function("clear whole bank", |b| {
        b.iter(|| sram.clear(black_box(sram.size())))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
