use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use zedcheck::encoder::{ECI_KSX1001, UNSET};
use zedcheck::ksx1001::utf8_to_euc_kr;
use zedcheck::{u_ksx1001_int, u_ksx1001_int2, EncodeRequest, Encoder, InputMode, QrEncoder, Symbology};

// Scalar ranges with different table densities
const RANGES: &[(&str, u32, u32)] = &[
    ("latin1", 0x80, 0x100),
    ("cjk_symbols", 0x3000, 0x3400),
    ("hangul", 0xAC00, 0xB000),
    ("hanja", 0x4E00, 0x5200),
    ("halfwidth", 0xFF00, 0xFFF0),
];

fn bench_mappers(c: &mut Criterion) {
    let mut group = c.benchmark_group("u_ksx1001");
    for &(name, start, end) in RANGES {
        group.bench_with_input(BenchmarkId::new("encoding_rs", name), &(start, end), |b, &(start, end)| {
            b.iter(|| (start..end).filter(|&u| u_ksx1001_int(black_box(u)).is_mappable()).count())
        });
        group.bench_with_input(BenchmarkId::new("table_scan", name), &(start, end), |b, &(start, end)| {
            b.iter(|| (start..end).filter(|&u| u_ksx1001_int2(black_box(u)).is_mappable()).count())
        });
    }
    group.finish();
}

fn bench_eci_encode(c: &mut Criterion) {
    let text = "대한민국 헌법 제1조 대한민국은 민주공화국이다".repeat(4);
    c.bench_function("utf8_to_euc_kr", |b| b.iter(|| utf8_to_euc_kr(black_box(&text))));

    let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, text.as_bytes())
        .eci(ECI_KSX1001)
        .options(2, UNSET, UNSET);
    c.bench_function("qr_eci30", |b| b.iter(|| QrEncoder.encode(black_box(&req))));
}

criterion_group!(benches, bench_mappers, bench_eci_encode);
criterion_main!(benches);
