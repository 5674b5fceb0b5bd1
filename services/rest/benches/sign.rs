use bytes::Bytes;
use criterion::criterion_main;
use criterion::{criterion_group, Criterion};
use placenext_core::Context;
use placenext_rest::{Client, Config};

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("placenext");

    let config = Config::new_with_context(
        &Context::new(),
        "UOCMBvhRFLwxDhUFdDeK2QpfvV80Og",
        "dMAMNw6HE60xDhV0SWZNsVZSVW91culvEXBFLE76ij62wsZXXqI+aQ",
    )
    .expect("config must be valid");
    let client = Client::new(Context::new(), config);

    group.bench_function("sign_empty_body", |b| {
        b.iter(|| {
            let (mut parts, body) = http::Request::get("https://api.aimmatic.com/v1/insights/nss")
                .body(Bytes::new())
                .expect("request must be valid")
                .into_parts();
            client.sign(&mut parts, &body).expect("must success")
        })
    });

    let body = Bytes::from(vec![b'a'; 16 * 1024]);
    group.bench_function("sign_16k_body", |b| {
        b.iter(|| {
            let (mut parts, _) = http::Request::post("https://api.aimmatic.com/v1/ingest/geometries")
                .body(())
                .expect("request must be valid")
                .into_parts();
            client.sign(&mut parts, &body).expect("must success")
        })
    });

    group.finish();
}
