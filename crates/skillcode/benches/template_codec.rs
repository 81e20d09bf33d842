use std::collections::BTreeMap;

use criterion::{Criterion, criterion_group, criterion_main};
use skillcode::{Skillbar, decode_template, encode_skillbar};

fn gen_skillbar(attribute_count: u32) -> Skillbar {
    let attributes: BTreeMap<u32, u8> = (0..attribute_count)
        .map(|i| (i * 3 + 1, (i % 13) as u8))
        .collect();

    Skillbar {
        primary: 7,
        secondary: 3,
        attributes,
        // spread over the widest skill field
        skills: [
            1234, 56_789, 2, 400_000, 31, 8_000_000, 777, 123_456,
        ],
        ..Default::default()
    }
}

fn bench_template_codec(c: &mut Criterion) {
    for &attribute_count in &[0u32, 4, 12] {
        let bar = gen_skillbar(attribute_count);
        let template = encode_skillbar(&bar).unwrap();

        c.bench_function(&format!("encode_{}_attributes", attribute_count), |b| {
            b.iter(|| {
                let _ = encode_skillbar(&bar).unwrap();
            })
        });

        c.bench_function(&format!("decode_{}_attributes", attribute_count), |b| {
            b.iter(|| {
                let _ = decode_template(&template).unwrap();
            })
        });
    }
}

criterion_group!(benches, bench_template_codec);
criterion_main!(benches);
