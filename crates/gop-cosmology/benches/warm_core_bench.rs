use criterion::{criterion_group, criterion_main, Criterion};
use gop_cosmology::power_spectrum::PkBump;
use gop_cosmology::warm_core::{run_warm_core, EnergyMapping, WarmCoreConfig};
use gop_types::config::GopParams;
use ndarray::Array1;
use std::hint::black_box;

fn bench_warm_core_default(c: &mut Criterion) {
    let params = GopParams::default();
    let cfg = WarmCoreConfig::default();

    c.bench_function("warm_core_400", |b| {
        b.iter(|| black_box(run_warm_core(&cfg, &params).unwrap().warm_core_factor))
    });
}

fn bench_warm_core_modes(c: &mut Criterion) {
    let params = GopParams::default();
    let mut group = c.benchmark_group("warm_core_4096");
    group.sample_size(20);

    for (name, mapping) in [
        ("normalized", EnergyMapping::default()),
        ("physical", EnergyMapping::Physical { l_coh_cm: 1e18 }),
    ] {
        let cfg = WarmCoreConfig {
            mapping,
            n_radii: 4096,
            ..WarmCoreConfig::default()
        };
        group.bench_function(name, |b| {
            b.iter(|| black_box(run_warm_core(&cfg, &params).unwrap().slope_effective))
        });
    }
    group.finish();
}

fn bench_pk_modifier(c: &mut Criterion) {
    let bump = PkBump::default();
    let k = Array1::logspace(10.0, -4.0, 1.0, 100_000);

    c.bench_function("pk_modifier_100k", |b| {
        b.iter(|| black_box(bump.factor_array(&k).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_warm_core_default,
    bench_warm_core_modes,
    bench_pk_modifier
);
criterion_main!(benches);
