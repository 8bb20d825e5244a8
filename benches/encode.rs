use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_aztec::encoder::modes;
use rust_aztec::encoder::reed_solomon::ReedSolomonEncoder;
use rust_aztec::encoder::stuffing::stuff_and_pad;
use rust_aztec::utils::render::{RenderOptions, render};
use rust_aztec::{encode, encode_batch};

const LICENSE: &str = "Permission is hereby granted, free of charge, to any person obtaining a copy \
of this software and associated documentation files (the \"Software\"), to deal in the Software \
without restriction, including without limitation the rights to use, copy, modify, merge, publish, \
distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the \
Software is furnished to do so, subject to the following conditions:";

fn bench_mode_encode(c: &mut Criterion) {
    c.bench_function("mode_encode_license", |b| {
        b.iter(|| modes::encode(black_box(LICENSE.as_bytes())))
    });
}

fn bench_stuffing(c: &mut Criterion) {
    let bits = modes::encode(LICENSE.as_bytes());
    c.bench_function("stuff_and_pad_10bit", |b| {
        b.iter(|| stuff_and_pad(black_box(&bits), black_box(10)))
    });
}

fn bench_reed_solomon(c: &mut Criterion) {
    let rs = ReedSolomonEncoder::new(10).unwrap();
    let data: Vec<u16> = (0..300u16).map(|i| (i * 7) & 0x3ff).collect();
    c.bench_function("reed_solomon_300+100_gf1024", |b| {
        b.iter(|| rs.parity(black_box(&data), black_box(100)))
    });
}

fn bench_encode_small(c: &mut Criterion) {
    c.bench_function("encode_unit_test", |b| {
        b.iter(|| encode(black_box(b"UNIT TEST")))
    });
}

fn bench_encode_large(c: &mut Criterion) {
    c.bench_function("encode_license", |b| {
        b.iter(|| encode(black_box(LICENSE.as_bytes())))
    });
}

fn bench_encode_binary(c: &mut Criterion) {
    let data: Vec<u8> = (0..1024u32).map(|i| (i * 131 % 256) as u8).collect();
    c.bench_function("encode_binary_1k", |b| b.iter(|| encode(black_box(&data))));
}

fn bench_encode_batch(c: &mut Criterion) {
    let payloads: Vec<Vec<u8>> = (0..64)
        .map(|i| format!("https://example.com/item/{:05}", i).into_bytes())
        .collect();
    let inputs: Vec<&[u8]> = payloads.iter().map(|p| p.as_slice()).collect();
    c.bench_function("encode_batch_64_urls", |b| {
        b.iter(|| encode_batch(black_box(&inputs)))
    });
}

fn bench_render(c: &mut Criterion) {
    let code = encode(LICENSE.as_bytes()).unwrap();
    let options = RenderOptions::default().with_module_size(8).with_quiet_zone(2);
    c.bench_function("render_license_8px", |b| {
        b.iter(|| render(black_box(&code), black_box(&options)))
    });
}

criterion_group!(
    benches,
    bench_mode_encode,
    bench_stuffing,
    bench_reed_solomon,
    bench_encode_small,
    bench_encode_large,
    bench_encode_binary,
    bench_encode_batch,
    bench_render
);
criterion_main!(benches);
