//! Criterion benchmarks for the horizon-crossing hot path.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use solunar_astro::{Coordinate, Moon, Sun};
use solunar_events::{SolverConfig, scan_window};
use solunar_time::calendar_to_jd;

fn bench_solar_scan(c: &mut Criterion) {
    let coord = Coordinate::new(48.85, 2.35).unwrap();
    let config = SolverConfig::default();
    let jd0 = calendar_to_jd(2025, 3, 20.0);

    c.bench_function("solar_scan_day", |b| {
        b.iter(|| {
            scan_window(
                black_box(&Sun::new()),
                black_box(&coord),
                black_box(jd0),
                24.0,
                &config,
            )
            .unwrap()
        })
    });
}

fn bench_lunar_scan(c: &mut Criterion) {
    let coord = Coordinate::new(48.85, 2.35).unwrap();
    let config = SolverConfig::default();
    let jd0 = calendar_to_jd(2025, 3, 20.0);

    c.bench_function("lunar_scan_day", |b| {
        b.iter(|| {
            scan_window(
                black_box(&Moon::new()),
                black_box(&coord),
                black_box(jd0),
                25.0,
                &config,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_solar_scan, bench_lunar_scan);
criterion_main!(benches);
