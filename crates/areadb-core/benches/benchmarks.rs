use areadb_core::{division, postal};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn division_table() -> Vec<division::RawDivision> {
    let mut rows = Vec::new();
    for p in 11..41u32 {
        rows.push(division::RawDivision {
            code: format!("{p:02}0000000000"),
            name: format!("province {p}"),
            parent: String::new(),
            reading: String::new(),
        });
        for q in 1..11u32 {
            rows.push(division::RawDivision {
                code: format!("{p:02}{q:02}00000000"),
                name: format!("prefecture {p}-{q}"),
                parent: format!("{p:02}0000000000"),
                reading: String::new(),
            });
            for c in 1..11u32 {
                rows.push(division::RawDivision {
                    code: format!("{p:02}{q:02}{c:02}000000"),
                    name: format!("county {p}-{q}-{c}"),
                    // Stated parents point at an absent county so the bench
                    // exercises the structural repair path.
                    parent: format!("{p:02}{q:02}99000000"),
                    reading: String::new(),
                });
            }
        }
    }
    rows
}

fn postal_table() -> Vec<postal::PostalRow> {
    let mut rows = Vec::new();
    for pref in 0..47u32 {
        for city in 0..20u32 {
            for town in 0..10u32 {
                rows.push(postal::PostalRow {
                    post: format!("{pref:02}{city:02}{town:03}"),
                    pref_kana: format!("p{pref}"),
                    city_kana: format!("c{city}"),
                    town_kana: format!("t{town}"),
                    pref: format!("pref{pref}"),
                    city: format!("city{city}"),
                    town: format!("town{town}"),
                });
            }
        }
    }
    rows
}

fn bench_normalize(c: &mut Criterion) {
    let divisions = division_table();
    c.bench_function("normalize_divisions", |b| {
        b.iter(|| black_box(division::normalize(&divisions)))
    });

    let rows = postal_table();
    c.bench_function("normalize_postal", |b| {
        b.iter(|| black_box(postal::normalize(&rows)))
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
