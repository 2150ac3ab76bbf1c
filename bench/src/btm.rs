use crate::utils::{self, MIN_ITER};
use std::{
    cmp::max,
    collections::BTreeSet,
    time::{Duration, Instant},
};

fn bench_insert(data: &[i64]) -> (BTreeSet<i64>, Duration) {
    let mut m = BTreeSet::new();
    let begin = Instant::now();
    for k in data {
        m.insert(*k);
    }
    (m, begin.elapsed())
}

fn bench_get(m: &BTreeSet<i64>, d: &[i64]) -> Duration {
    let begin = Instant::now();
    let mut i = 0;
    while i < MIN_ITER && !d.is_empty() {
        for k in d {
            i += 1;
            assert!(m.contains(k));
        }
    }
    begin.elapsed()
}

// the closest std analogue of a snapshot is a deep copy
fn bench_snapshot(m: &BTreeSet<i64>, d: &[i64]) -> Duration {
    let begin = Instant::now();
    for k in d.iter().take(1000) {
        let mut s = m.clone();
        s.remove(k);
    }
    begin.elapsed()
}

fn bench_remove(mut m: BTreeSet<i64>, d: &[i64]) -> Duration {
    let begin = Instant::now();
    for k in d {
        assert!(m.remove(k));
    }
    begin.elapsed()
}

pub(crate) fn run(size: usize) {
    let d = utils::randvec::<i64>(num_cpus::get(), size);
    let (m, insert) = bench_insert(&d);
    let get = bench_get(&m, &d);
    let snap = bench_snapshot(&m, &d);
    let rm = bench_remove(m, &d);
    println!(
        "{},{:.0},{:.0},{:.0},{:.0}",
        size,
        utils::to_ns_per(insert, size),
        utils::to_ns_per(get, max(MIN_ITER, size)),
        utils::to_ns_per(snap, size.min(1000)),
        utils::to_ns_per(rm, size)
    );
}
