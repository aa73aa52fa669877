//! Criterion benchmarks for pxlm critical paths
//!
//! Benchmarks the core operations:
//! - Color: strict and lenient token decode, encode
//! - Parser: validation with and without repairs
//! - Writer: matrix serialization
//! - Bridge: image buffer to matrix and back

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use image::Rgb;
use pxlm::bridge::{from_image, to_image, RawImageBuffer};
use pxlm::color::{decode, decode_lenient, encode};
use pxlm::parser::{read_matrix, validate};
use pxlm::writer::write_matrix;

// =============================================================================
// Test Data Generators
// =============================================================================

/// Generate a square image with a repeating gradient
fn make_buffer(size: u32) -> RawImageBuffer {
    let pixels = (0..size * size)
        .map(|i| Rgb([(i % 256) as u8, (i / 7 % 256) as u8, 255 - (i % 256) as u8]))
        .collect();
    RawImageBuffer::new(size, size, pixels).expect("pixel count matches dimensions")
}

/// Generate .pxlm text for a square image
fn make_pxlm(size: u32) -> String {
    write_matrix(&from_image(&make_buffer(size)).expect("non-empty image"))
}

/// Generate .pxlm text where every fourth token needs repair
fn make_damaged_pxlm(size: usize) -> String {
    (0..size)
        .map(|y| {
            (0..size)
                .map(|x| if (x + y) % 4 == 0 { "F0F".to_string() } else { format!("{:06X}", x * y) })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");
    group.bench_function("decode", |b| b.iter(|| decode(black_box("a1B2c3"))));
    group.bench_function("decode_lenient", |b| b.iter(|| decode_lenient(black_box("a1B2"))));
    group.bench_function("encode", |b| b.iter(|| encode(black_box(Rgb([161, 178, 195])))));
    group.finish();
}

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    for size in [16u32, 64, 256].iter() {
        let clean = make_pxlm(*size);
        let damaged = make_damaged_pxlm(*size as usize);
        group.throughput(Throughput::Elements((*size * *size) as u64));

        group.bench_with_input(BenchmarkId::new("validate_clean", size), &clean, |b, text| {
            b.iter(|| validate(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("validate_damaged", size), &damaged, |b, text| {
            b.iter(|| validate(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("read_matrix", size), &clean, |b, text| {
            b.iter(|| read_matrix(black_box(text)))
        });
    }

    group.finish();
}

fn bench_writer(c: &mut Criterion) {
    let mut group = c.benchmark_group("writer");

    for size in [16u32, 64, 256].iter() {
        let matrix = from_image(&make_buffer(*size)).expect("non-empty image");
        group.throughput(Throughput::Elements((*size * *size) as u64));
        group.bench_with_input(BenchmarkId::new("write_matrix", size), &matrix, |b, m| {
            b.iter(|| write_matrix(black_box(m)))
        });
    }

    group.finish();
}

fn bench_bridge(c: &mut Criterion) {
    let mut group = c.benchmark_group("bridge");

    for size in [16u32, 64, 256].iter() {
        let buffer = make_buffer(*size);
        let matrix = from_image(&buffer).expect("non-empty image");
        group.throughput(Throughput::Elements((*size * *size) as u64));

        group.bench_with_input(BenchmarkId::new("from_image", size), &buffer, |b, buf| {
            b.iter(|| from_image(black_box(buf)))
        });
        group.bench_with_input(BenchmarkId::new("to_image", size), &matrix, |b, m| {
            b.iter(|| to_image(black_box(m)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_color, bench_parser, bench_writer, bench_bridge);
criterion_main!(benches);
