use crate::utils::{self, MIN_ITER};
use cow_btree::BTree;
use std::{
    cmp::{max, min},
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

fn bench_insert(data: &[i64]) -> (BTree<i64>, Duration) {
    let mut m = BTree::default();
    let begin = Instant::now();
    for k in data {
        m.replace_or_insert(*k);
    }
    (m, begin.elapsed())
}

fn bench_get(m: Arc<BTree<i64>>, d: Arc<Vec<i64>>, n: usize) -> Duration {
    let chunk = max(1, d.len() / n);
    let mut threads = Vec::new();
    let begin = Instant::now();
    for i in 0..n {
        let (m, d) = (m.clone(), d.clone());
        threads.push(thread::spawn(move || {
            let mut r = 0;
            let p = min(i * chunk, d.len());
            let hi = min(d.len(), p + chunk);
            while r < MIN_ITER && p < hi {
                for k in &d[p..hi] {
                    r += 1;
                    assert!(m.has(k));
                }
            }
        }));
    }
    for th in threads {
        th.join().unwrap();
    }
    begin.elapsed()
}

fn bench_get_seq(m: &BTree<i64>, d: &[i64]) -> Duration {
    let begin = Instant::now();
    let mut i = 0;
    while i < MIN_ITER && !d.is_empty() {
        for k in d {
            i += 1;
            assert!(m.has(k));
        }
    }
    begin.elapsed()
}

// a snapshot followed by one write copies a single root to leaf path
fn bench_snapshot(m: &BTree<i64>, d: &[i64]) -> Duration {
    let begin = Instant::now();
    for k in d.iter().take(1000) {
        let mut s = m.clone();
        s.delete(k);
    }
    begin.elapsed()
}

fn bench_remove(mut m: BTree<i64>, d: &[i64]) -> Duration {
    let begin = Instant::now();
    for k in d {
        assert!(m.delete(k).is_some());
    }
    begin.elapsed()
}

pub(crate) fn run(size: usize) {
    let n = num_cpus::get();
    let d = utils::randvec::<i64>(n, size);
    let (m, insert) = bench_insert(&d);
    let get = bench_get_seq(&m, &d);
    let snap = bench_snapshot(&m, &d);
    let (m, d) = (Arc::new(m), Arc::new(d));
    let get_par = bench_get(m.clone(), d.clone(), n);
    let m = Arc::try_unwrap(m).unwrap_or_else(|m| (*m).clone());
    let rm = bench_remove(m, &d);
    println!(
        "{},{:.0},{:.0},{:.2},{:.0},{:.0}",
        size,
        utils::to_ns_per(insert, size),
        utils::to_ns_per(get, max(MIN_ITER, size)),
        utils::to_ns_per(get_par, max(MIN_ITER * n, size)),
        utils::to_ns_per(snap, size.min(1000)),
        utils::to_ns_per(rm, size)
    );
}

#[cfg(test)]
mod test {
    use super::bench_get;
    use cow_btree::BTree;
    use std::sync::Arc;

    #[test]
    #[should_panic]
    fn parallel_get_fails_on_missing_key() {
        let m: BTree<i64> = (0..100).collect();
        let d: Vec<i64> = (0..100).chain(Some(1000)).collect();
        bench_get(Arc::new(m), Arc::new(d), 1);
    }
}
