// ChainedHashMap integration tests.
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The core invariants exercised:
// - Read-your-writes: `get(k)` after `insert(k, v)` yields `v` until k is
//   overwritten or removed.
// - Overwrite: re-inserting a key replaces its value without growing size.
// - Removal: present keys shrink size by one; absent keys are a no-op.
// - Growth: reaching load factor 0.5 doubles capacity exactly once and
//   keeps every entry reachable.
use chained_hashmap::{ChainedHashMap, Error, DEFAULT_CAPACITY};

// Test: the four-bucket growth scenario.
// Assumes: resize is checked right after a size-incrementing insert.
// Verifies: 2/4 triggers doubling to 8; both keys readable; 3 is absent.
#[test]
fn two_inserts_into_four_buckets() {
    let mut m: ChainedHashMap = ChainedHashMap::with_capacity(4).expect("non-zero");
    m.insert(1, 10);
    m.insert(2, 20);
    assert_eq!(m.len(), 2);
    assert_eq!(m.capacity(), 8);
    assert_eq!(m.get(1), Some(&10));
    assert_eq!(m.get(2), Some(&20));
    assert_eq!(m.get(3), None);
}

// Test: overwrite scenario.
// Assumes: an existing key is updated in place.
// Verifies: last write wins; size is unchanged by the second insert.
#[test]
fn overwrite_keeps_size() {
    let mut m: ChainedHashMap = ChainedHashMap::new();
    assert_eq!(m.insert(5, 100), None);
    let size = m.len();
    assert_eq!(m.insert(5, 200), Some(100));
    assert_eq!(m.get(5), Some(&200));
    assert_eq!(m.len(), size);
}

// Test: remove scenario.
// Assumes: removal unlinks the only entry for the key.
// Verifies: first remove succeeds, key is gone, second remove reports false.
#[test]
fn remove_then_remove_again() {
    let mut m: ChainedHashMap = ChainedHashMap::new();
    m.insert(1, 10);
    assert!(m.remove(1));
    assert_eq!(m.get(1), None);
    assert!(!m.remove(1));
    assert!(m.is_empty());
}

// Test: absent-key removal.
// Verifies: size unchanged, result false, other keys untouched.
#[test]
fn remove_absent_key_is_noop() {
    let mut m: ChainedHashMap = ChainedHashMap::new();
    m.insert(1, 1);
    m.insert(17, 17); // same bucket as 1 at capacity 16
    assert!(!m.remove(33));
    assert_eq!(m.len(), 2);
    assert_eq!(m.get(1), Some(&1));
    assert_eq!(m.get(17), Some(&17));
}

// Test: repeated growth from the default capacity.
// Assumes: every doubling rebuckets all entries.
// Verifies: capacity stays a doubling of the default and every key keeps
// its last-set value, including keys overwritten before a resize.
#[test]
fn many_resizes_keep_last_values() {
    let mut m: ChainedHashMap<i64, i64> = ChainedHashMap::new();
    for k in 0..1_000 {
        m.insert(k, k);
    }
    for k in (0..1_000).step_by(3) {
        m.insert(k, -k);
    }
    assert_eq!(m.len(), 1_000);
    assert_eq!(m.capacity() % DEFAULT_CAPACITY, 0);
    assert!((m.capacity() / DEFAULT_CAPACITY).is_power_of_two());
    assert!(m.load_factor() < 0.5);
    for k in 0..1_000 {
        let expected = if k % 3 == 0 { -k } else { k };
        assert_eq!(m.get(k), Some(&expected), "key {k}");
    }
}

// Test: idempotent reads.
// Verifies: repeated `get` without mutation is stable for hits and misses.
#[test]
fn get_is_idempotent() {
    let mut m: ChainedHashMap = ChainedHashMap::new();
    m.insert(42, 7);
    for _ in 0..5 {
        assert_eq!(m.get(42), Some(&7));
        assert_eq!(m.get(43), None);
    }
}

// Test: negative keys under modulo placement.
// Assumes: buckets are chosen by Euclidean remainder.
// Verifies: negative keys survive growth and do not alias positive keys
// that share their bucket.
#[test]
fn negative_keys_survive_growth() {
    let mut m: ChainedHashMap = ChainedHashMap::with_capacity(2).expect("non-zero");
    for k in -20..20 {
        m.insert(k, k * 2);
    }
    for k in -20..20 {
        assert_eq!(m.get(k), Some(&(k * 2)));
    }
    assert!(m.remove(-3));
    assert_eq!(m.get(-3), None);
    assert_eq!(m.get(3), Some(&6));
}

// Test: construction guard.
// Verifies: zero buckets is rejected with a typed error.
#[test]
fn zero_capacity_is_an_error() {
    let err = ChainedHashMap::<u32, u32>::with_capacity(0).unwrap_err();
    assert_eq!(err, Error::ZeroCapacity);
}

// Test: generic values and iteration.
// Verifies: non-integer values work; iteration yields every entry once.
#[test]
fn string_values_and_iteration() {
    let mut m: ChainedHashMap<u16, String> = ChainedHashMap::new();
    m.extend([(3, "c"), (1, "a"), (2, "b")].map(|(k, v)| (k, v.to_string())));
    let mut pairs: Vec<(u16, &str)> = m.iter().map(|(k, v)| (k, v.as_str())).collect();
    pairs.sort();
    assert_eq!(pairs, vec![(1, "a"), (2, "b"), (3, "c")]);

    let total: usize = (&m).into_iter().map(|(_, v)| v.len()).sum();
    assert_eq!(total, 3);
}
