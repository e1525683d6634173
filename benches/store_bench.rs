//! Benchmarks for student-records store operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use student_records::{RecordStore, StudentRecord};
use tempfile::TempDir;

const RECORD_COUNT: usize = 10_000;

fn populated_store(dir: &TempDir) -> RecordStore {
    let path = dir.path().join("bench_records.json");
    let records: Vec<StudentRecord> = (0..RECORD_COUNT)
        .map(|i| {
            let name = if i % 100 == 0 { "Alice" } else { "Bob" };
            StudentRecord::new(name, "Mathematics", (i % 101) as i64)
        })
        .collect();
    student_records::store::save(&path, &records).unwrap();
    RecordStore::open(&path).unwrap()
}

fn store_benchmarks(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let store = populated_store(&dir);

    c.bench_function("find_by_name_10k", |b| {
        b.iter(|| store.find_by_name(black_box("alice")))
    });

    c.bench_function("load_10k", |b| {
        b.iter(|| student_records::store::load(black_box(store.path())).unwrap())
    });
}

criterion_group!(benches, store_benchmarks);
criterion_main!(benches);
