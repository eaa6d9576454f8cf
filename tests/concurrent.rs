//! Multi-threaded convergence tests.
//!
//! Workers are phase-aligned with barriers: inserters drain a shared pool
//! of keys containing duplicates while checkers poll `contains` for every
//! distinct key under a generous deadline. The set must converge with no
//! lost insertions and no duplicate over-counting.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread;
use std::time::{Duration, Instant};

use digit_trie_set::{PhoneNumber, TrieSet};
use rand::seq::SliceRandom;
use rand::Rng;

const CONVERGENCE_DEADLINE: Duration = Duration::from_secs(10);

fn key(value: u32) -> PhoneNumber {
    PhoneNumber::new(value).unwrap()
}

fn random_keys(count: usize) -> Vec<PhoneNumber> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| key(rng.gen_range(0..=999_999_999)))
        .collect()
}

/// Append ~10% duplicates sampled from the pool itself, then shuffle.
fn with_duplicates(mut keys: Vec<PhoneNumber>) -> Vec<PhoneNumber> {
    let mut rng = rand::thread_rng();
    let extra = keys.len() / 10;
    for _ in 0..extra {
        let dup = keys[rng.gen_range(0..keys.len())];
        keys.push(dup);
    }
    keys.shuffle(&mut rng);
    keys
}

fn poll_until_present(set: &TrieSet, k: PhoneNumber, deadline: Instant) {
    while !set.contains(k) {
        assert!(
            Instant::now() < deadline,
            "key {k} not visible within the convergence deadline"
        );
        thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn concurrent_inserters_and_checkers_converge() {
    const INSERTERS: usize = 10;
    const CHECKERS: usize = 10;
    const KEY_COUNT: usize = 100_000;

    let pool = with_duplicates(random_keys(KEY_COUNT));
    let distinct: Vec<PhoneNumber> = {
        let unique: HashSet<PhoneNumber> = pool.iter().copied().collect();
        unique.into_iter().collect()
    };

    let insert_chunks: Vec<&[PhoneNumber]> = pool.chunks(pool.len().div_ceil(INSERTERS)).collect();
    let check_chunks: Vec<&[PhoneNumber]> =
        distinct.chunks(distinct.len().div_ceil(CHECKERS)).collect();

    let set = TrieSet::new();
    let start = Barrier::new(insert_chunks.len() + check_chunks.len());

    thread::scope(|scope| {
        for &chunk in &insert_chunks {
            let (set, start) = (&set, &start);
            scope.spawn(move || {
                start.wait();
                for &k in chunk {
                    set.insert(k);
                }
            });
        }

        for &chunk in &check_chunks {
            let (set, start) = (&set, &start);
            scope.spawn(move || {
                start.wait();
                let deadline = Instant::now() + CONVERGENCE_DEADLINE;
                for &k in chunk {
                    poll_until_present(set, k, deadline);
                }
            });
        }
    });

    assert_eq!(set.len(), distinct.len());
    for &k in &distinct {
        assert!(set.contains(k));
    }
}

#[test]
fn concurrent_duplicate_inserts_count_once() {
    const THREADS: usize = 8;
    const KEY_COUNT: usize = 5_000;

    // Every thread inserts the exact same key list.
    let keys: Vec<PhoneNumber> = {
        let unique: HashSet<PhoneNumber> = random_keys(KEY_COUNT).into_iter().collect();
        unique.into_iter().collect()
    };

    let set = TrieSet::new();
    let start = Barrier::new(THREADS);
    let wins = AtomicUsize::new(0);

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                start.wait();
                for &k in &keys {
                    if set.insert(k) {
                        wins.fetch_add(1, Ordering::Relaxed);
                    }
                }
            });
        }
    });

    // Exactly one winner per distinct key across all threads.
    assert_eq!(wins.load(Ordering::Relaxed), keys.len());
    assert_eq!(set.len(), keys.len());
    for &k in &keys {
        assert!(set.contains(k));
    }
}

#[test]
fn len_is_monotonic_under_concurrent_inserts() {
    const INSERTERS: usize = 4;
    const KEYS_PER_THREAD: usize = 10_000;

    let pool: Vec<PhoneNumber> = {
        let unique: HashSet<PhoneNumber> =
            random_keys(INSERTERS * KEYS_PER_THREAD).into_iter().collect();
        unique.into_iter().collect()
    };
    let chunks: Vec<&[PhoneNumber]> = pool.chunks(pool.len().div_ceil(INSERTERS)).collect();

    let set = TrieSet::new();
    let start = Barrier::new(chunks.len() + 1);

    thread::scope(|scope| {
        for &chunk in &chunks {
            let (set, start) = (&set, &start);
            scope.spawn(move || {
                start.wait();
                for &k in chunk {
                    set.insert(k);
                }
            });
        }

        scope.spawn(|| {
            start.wait();
            let mut previous = 0;
            while previous < pool.len() {
                let observed = set.len();
                assert!(observed >= previous, "len went backwards");
                assert!(observed <= pool.len(), "len exceeded distinct key count");
                previous = observed;
                thread::yield_now();
            }
        });
    });

    assert_eq!(set.len(), pool.len());
}

#[test]
fn no_false_positives_while_inserters_run() {
    const KEY_COUNT: usize = 20_000;

    // Even values get inserted, odd values never do. Many of them share
    // long prefixes, so absent siblings of present keys are well covered.
    let inserted: Vec<PhoneNumber> = random_keys(KEY_COUNT)
        .into_iter()
        .map(|k| key(k.value() & !1))
        .collect();
    let never_inserted: Vec<PhoneNumber> =
        inserted.iter().map(|k| key(k.value() | 1)).collect();

    let set = TrieSet::new();
    let start = Barrier::new(2);

    thread::scope(|scope| {
        scope.spawn(|| {
            start.wait();
            for &k in &inserted {
                set.insert(k);
            }
        });

        scope.spawn(|| {
            start.wait();
            for &k in &never_inserted {
                assert!(!set.contains(k), "false positive for {k}");
            }
        });
    });

    // Still absent once all writers are done.
    for &k in &never_inserted {
        assert!(!set.contains(k));
    }
}
