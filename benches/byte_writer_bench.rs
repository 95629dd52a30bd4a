//! Criterion benchmark untuk ByteWriter
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mapsync_wire::{ByteWriter, FrameEncoder, Handshake};

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("byte_writer");

    group.throughput(Throughput::Bytes(4 * 1000));
    group.bench_function("write_u32_x1000", |b| {
        b.iter(|| {
            let mut writer = ByteWriter::new();
            for i in 0..1000u32 {
                writer.write_u32(black_box(i));
            }
            black_box(writer.len())
        });
    });

    // Mulai dari kapasitas kecil untuk mengukur biaya doubling
    group.bench_function("write_u32_x1000_grow_from_16", |b| {
        b.iter(|| {
            let mut writer = ByteWriter::with_capacity(16);
            for i in 0..1000u32 {
                writer.write_u32(black_box(i));
            }
            black_box(writer.capacity())
        });
    });

    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");

    for len in [8usize, 256, 4096].iter() {
        let value = "m".repeat(*len);
        group.throughput(Throughput::Bytes((*len + 2) as u64));
        group.bench_function(format!("write_string_{}", len), |b| {
            let mut writer = ByteWriter::new();
            b.iter(|| {
                // Writer tidak bisa di-reset; buat baru tiap 1MB
                if writer.len() > 1024 * 1024 {
                    writer = ByteWriter::new();
                }
                writer.write_string(black_box(&value));
            });
        });
    }

    group.finish();
}

fn bench_frames(c: &mut Criterion) {
    let handshake = Handshake::new("2.1.0", "Steve", "play.example.net", "overworld");

    c.bench_function("encode_handshake_frame", |b| {
        b.iter(|| {
            let mut encoder = FrameEncoder::new();
            black_box(encoder.encode(black_box(&handshake)).map(|f| f.len()))
        });
    });
}

criterion_group!(benches, bench_primitives, bench_strings, bench_frames);
criterion_main!(benches);
