use super::*;

#[test]
fn edges_are_transparent_and_centre_is_streaky() {
    let noise = Noise2D::new(2);
    let streak = StreakMask {
        size: 64,
        ..StreakMask::default()
    };
    let mask = streak.generate(&noise);
    assert_eq!(mask.width, 64);
    assert_eq!(mask.data.len(), 64 * 64);
    for y in 0..64 {
        assert_eq!(mask.get(0, y), Some(0));
        assert_eq!(mask.get(63, y), Some(0));
    }
    let centre: Vec<u8> = (0..64).filter_map(|y| mask.get(32, y)).collect();
    assert!(centre.iter().any(|&a| a > 200));
    assert!(centre.iter().any(|&a| a == 0));
}

#[test]
fn mask_is_deterministic_for_a_seed() {
    let streak = StreakMask {
        size: 32,
        ..StreakMask::default()
    };
    assert_eq!(
        streak.generate(&Noise2D::new(4)),
        streak.generate(&Noise2D::new(4))
    );
}

#[test]
fn tip_rule_blends_toward_solid() {
    assert_eq!(tip_alpha(0.0, 0.5), 1.0);
    assert_eq!(tip_alpha(0.3, 1.0), 0.3);
    assert!(is_discarded(tip_alpha(0.05, 1.0)));
    assert!(!is_discarded(tip_alpha(0.05, 0.2)));
}
