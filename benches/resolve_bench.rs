//! Benchmarks for Strata snapshot and policy operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strata::model::{Record, RecordKind, Todo, User};
use strata::snapshot::SnapshotStore;

fn todo_collection(n: u64) -> Vec<Todo> {
    (1..=n)
        .map(|id| Todo {
            id,
            user_id: (id % 10) + 1,
            title: format!("todo number {id}"),
            completed: id % 3 == 0,
        })
        .collect()
}

fn user_collection(n: u64) -> Vec<User> {
    (1..=n)
        .map(|id| User {
            id,
            username: format!("user-{id}"),
            ..User::default()
        })
        .collect()
}

fn snapshot_benchmarks(c: &mut Criterion) {
    let tmp = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(tmp.path());
    let todos = todo_collection(200);

    c.bench_function("snapshot_save_200_todos", |b| {
        b.iter(|| store.save(RecordKind::Todo, black_box(&todos)).unwrap())
    });

    store.save(RecordKind::Todo, &todos).unwrap();
    c.bench_function("snapshot_load_decode_200_todos", |b| {
        b.iter(|| {
            let bytes = store.load(RecordKind::Todo).unwrap();
            let decoded: Vec<Todo> = serde_json::from_slice(black_box(&bytes)).unwrap();
            decoded
        })
    });
}

fn policy_benchmarks(c: &mut Criterion) {
    let policy = User::policy();
    let existing = user_collection(1000);
    let candidate = User {
        username: "fresh-user".to_string(),
        ..User::default()
    };

    c.bench_function("policy_unique_scan_1000_users", |b| {
        b.iter(|| {
            policy
                .check_unique(RecordKind::User, black_box(&candidate), &existing)
                .unwrap()
        })
    });
}

criterion_group!(benches, snapshot_benchmarks, policy_benchmarks);
criterion_main!(benches);
