//! Benchmark: single-identifier validation (valid and invalid paths) and
//! whole-document lint throughput on a synthetic maintenance log.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gpeid::{lint, validate};

const VALID: &[&str] = &[
    "=Gebäude1+HLK_Sensor.001:Siemens.ABC123",
    "=Site1..Room5+TBD.HLK_TBD.TBD.005:TBD.TBD",
    "=Haus+HLK_Sensor.001:Siemens.Model-Config.v1$Serial.12345|Test.abc",
    "=Building.Floor2.Room3+HLK.VEN.TMP_Controller.042:Honeywell.T6Pro",
];

const INVALID: &[&str] = &[
    "Building+HLK_Sensor.001:Vendor.Product",
    "=Building+HLK_123.001:Vendor.Product",
    "=Building+HLK_Sensor.000:Vendor.Product",
    "=TBD+HLK_Sensor.001:Vendor.Product",
];

fn synthetic_document() -> String {
    let mut doc = String::new();
    for i in 0..500 {
        doc.push_str("unit checked, tag ");
        doc.push_str(VALID[i % VALID.len()]);
        doc.push_str(" ok; also saw ");
        doc.push_str(INVALID[i % INVALID.len()]);
        doc.push('\n');
    }
    doc
}

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate_valid", |b| {
        b.iter(|| {
            for id in VALID {
                black_box(validate(black_box(id)));
            }
        })
    });

    c.bench_function("validate_invalid", |b| {
        b.iter(|| {
            for id in INVALID {
                black_box(validate(black_box(id)));
            }
        })
    });

    let doc = synthetic_document();
    c.bench_function("lint_document_500_lines", |b| {
        b.iter(|| black_box(lint(black_box(&doc))))
    });
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
