// Benchmarks for symmetry queries over a skeleton-sized batch of bone names.
//
// Mixes suffixed, prefixed, and unmarked names roughly the way an imported
// rig does. Run with `cargo bench -p elven_canopy_symmetry`.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use elven_canopy_symmetry::{is_symmetrical, symmetrical_split, symmetrical_target};

fn bone_names() -> Vec<String> {
    let parts = ["Clavicle", "UpperArm", "Forearm", "Hand", "Thigh", "Calf", "Foot"];
    let mut names = Vec::new();
    for part in parts {
        names.push(format!("{part}.L"));
        names.push(format!("{part}.R"));
        names.push(format!("Left_{part}"));
        names.push(format!("{part} RIGHT"));
        names.push(part.to_string());
    }
    names.push("Spine".to_string());
    names.push("Neck".to_string());
    names.push("Head".to_string());
    names
}

fn bench_queries(c: &mut Criterion) {
    let names = bone_names();

    c.bench_function("is_symmetrical", |b| {
        b.iter(|| names.iter().filter(|n| is_symmetrical(black_box(n))).count())
    });

    c.bench_function("symmetrical_split", |b| {
        b.iter(|| {
            for name in &names {
                black_box(symmetrical_split(black_box(name)));
            }
        })
    });

    c.bench_function("symmetrical_target", |b| {
        b.iter(|| {
            names
                .iter()
                .map(|n| symmetrical_target(black_box(n)))
                .collect::<Vec<_>>()
        })
    });
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
