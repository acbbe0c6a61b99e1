use super::*;

#[test]
fn seeded_values_stay_in_unit_interval() {
    let mut rng = SeededRandom::new(42);
    for _ in 0..10_000 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v), "out of range: {v}");
    }
}

#[test]
fn same_seed_same_stream() {
    let mut a = SeededRandom::new(7);
    let mut b = SeededRandom::new(7);
    for _ in 0..100 {
        assert_eq!(a.next_f64(), b.next_f64());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = SeededRandom::new(1);
    let mut b = SeededRandom::new(2);
    let matches = (0..100).filter(|_| a.next_f64() == b.next_f64()).count();
    assert!(matches < 100);
}

#[test]
fn zero_seed_is_bumped() {
    let mut rng = SeededRandom::new(0);
    // A true zero state would yield zero forever.
    let first = rng.next_f64();
    let second = rng.next_f64();
    assert!(first != second || first != 0.0);
}

#[test]
fn in_range_respects_bounds() {
    let mut rng = SeededRandom::new(99);
    for _ in 0..1000 {
        let v = rng.in_range(6.0, 3.0);
        assert!((6.0..9.0).contains(&v), "out of range: {v}");
    }
}
