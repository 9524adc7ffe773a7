use criterion::{criterion_group, criterion_main, Criterion};
use image::RgbImage;
use pixelveil_core::{extract_text, hide_text};

fn carrier() -> RgbImage {
    RgbImage::from_fn(512, 512, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
}

pub fn text_encoding(c: &mut Criterion) {
    c.bench_function("Text Encoding", |b| {
        let cover = carrier();
        b.iter(|| hide_text(&cover, "Hello World!").expect("Cannot hide message"))
    });
}

pub fn text_decoding(c: &mut Criterion) {
    c.bench_function("Text Decoding", |b| {
        let stego =
            hide_text(&carrier(), "Hello World!").expect("Cannot hide message");
        b.iter(|| extract_text(&stego).expect("Cannot find message"))
    });
}

criterion_group!(benches, text_encoding, text_decoding);
criterion_main!(benches);
