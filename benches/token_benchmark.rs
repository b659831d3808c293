use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use campus_desk::token;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_token_codec(c: &mut Criterion) {
    let payload = r#"{"id":"64f1c0ffee","role":"student","iat":1700000000,"exp":1700003600}"#;
    let token_str = format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload.as_bytes()),
        URL_SAFE_NO_PAD.encode(b"signature")
    );

    let mut group = c.benchmark_group("token_codec");

    group.bench_function("decode_valid", |b| {
        b.iter(|| token::decode(black_box(&token_str)))
    });

    group.bench_function("decode_malformed", |b| {
        b.iter(|| token::decode(black_box("not-a-token")))
    });

    group.bench_function("is_expired_at", |b| {
        b.iter(|| token::is_expired_at(black_box(&token_str), black_box(1_700_000_000)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_token_codec);
criterion_main!(benches);
