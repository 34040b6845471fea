use std::hint::black_box;

use assetgen_core::{
    blob::ByteArray,
    font::{self, FontOptions, Rgb, RgbSheet},
    keymap::Keymap,
};
use criterion::{Criterion, criterion_group, criterion_main};

/// 16x16 cells of 8x8 with a line through the diagonal cells.
fn sheet() -> RgbSheet {
    let mut sheet = RgbSheet::filled(128, 128, Rgb::BLACK);
    for y in 0..128 {
        sheet.set(y, y, Rgb::WHITE);
    }
    sheet
}

fn bench_font(c: &mut Criterion) {
    let sheet = sheet();
    let options = FontOptions::default();
    c.bench_function("font encode 256 glyphs", |b| {
        b.iter(|| font::encode(black_box(&sheet), &options).map(|f| f.render()))
    });
}

fn bench_blob(c: &mut Criterion) {
    let data: Vec<u8> = (0..64 * 1024).map(|i| (i % 251) as u8).collect();
    c.bench_function("bin2h 64KiB", |b| {
        b.iter(|| ByteArray::new("blob.bin", "blob", black_box(data.clone())).render())
    });
}

fn bench_keymap(c: &mut Criterion) {
    c.bench_function("keymap uk render", |b| {
        b.iter(|| Keymap::uk().map(|k| k.render()))
    });
}

criterion_group!(benches, bench_font, bench_blob, bench_keymap);
criterion_main!(benches);
