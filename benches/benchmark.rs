use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const CONVERSIONS: [(&str, &str); 6] = [
    ("UTF8", "UTF16LE"),
    ("UTF8", "UTF32BE"),
    ("UTF8", "ESCAPED"),
    ("UTF8", "CRLF:UTF8"),
    ("UTF8", "UTF8:BASE64"),
    ("BASE64:UTF8", "UTF8"),
];

fn sample_text() -> String {
    let line = "ASCII, Latin-1 \u{E9}\u{FC}, BMP \u{20AC}\u{4E2D}, astral \u{1F600}\n";
    line.repeat(2048)
}

fn conversions(c: &mut Criterion) {
    let text = sample_text();
    let base64 = charconv::convert("UTF8", &text, "UTF8:BASE64").unwrap();
    let mut group = c.benchmark_group("convert");
    for (src, dst) in CONVERSIONS {
        let input: &[u8] = if src.starts_with("BASE64:") {
            &base64
        } else {
            text.as_bytes()
        };
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{src} -> {dst}")),
            &input,
            |b, input| b.iter(|| charconv::convert(src, input, dst)),
        );
    }
    group.finish();
}

fn round_trip(c: &mut Criterion) {
    let text = sample_text();
    let escaped = charconv::convert("UTF8", &text, "ESCAPED").unwrap();
    c.bench_with_input(
        BenchmarkId::new("escaped round trip", escaped.len()),
        &escaped,
        |b, escaped| {
            b.iter(|| {
                let chars = charconv::decode("ESCAPED", escaped).unwrap();
                charconv::encode("ESCAPED", &chars)
            })
        },
    );
}

criterion_group!(benches, conversions, round_trip);

criterion_main!(benches);
