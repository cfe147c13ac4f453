use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn floats_stay_in_range() {
    let mut rng = Rng64::new(9);
    for _ in 0..1000 {
        let v = rng.next_f32_01();
        assert!((0.0..1.0).contains(&v));
        let s = rng.signed_f32();
        assert!((-1.0..1.0).contains(&s));
        let r = rng.range_f32(0.25, 0.5);
        assert!((0.25..0.5).contains(&r));
    }
    assert_eq!(rng.range_f32(2.0, 2.0), 2.0);
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = Rng64::new(4);
    let mut v: Vec<u32> = (0..64).collect();
    rng.shuffle(&mut v);
    let mut sorted = v.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..64).collect::<Vec<_>>());
    assert_ne!(v, sorted);
}
