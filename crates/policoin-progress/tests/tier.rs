use policoin_models::TierName;
use policoin_progress::tier::{tier_for, tier_index};
use policoin_progress::{tier_info, TIERS};

#[test]
fn zero_points_is_starter_with_no_progress() {
    let info = tier_info(0.0);
    assert_eq!(info.name, TierName::Starter);
    assert_eq!(info.progress, 0.0);
    assert_eq!(info.current, 0.0);
    assert_eq!(info.min, 0.0);
    assert_eq!(info.next, Some(5_000.0));
    assert_eq!(info.icon, "/inicio.svg");
}

#[test]
fn every_boundary_belongs_to_the_higher_tier() {
    for (index, tier) in TIERS.iter().enumerate().skip(1) {
        assert_eq!(tier_index(tier.min), index, "boundary {}", tier.min);
        assert_eq!(tier_index(tier.min - 1.0), index - 1, "below {}", tier.min);
    }
    assert_eq!(tier_info(5_000.0).name, TierName::Bronze);
    assert_eq!(tier_info(5_000.0).progress, 0.0);
    assert_eq!(tier_info(4_999.0).name, TierName::Starter);
}

#[test]
fn points_inside_each_band_map_to_that_band() {
    for (index, tier) in TIERS.iter().enumerate() {
        let upper = TIERS.get(index + 1).map_or(tier.min * 10.0, |next| next.min);
        for step in 0..10 {
            let points = tier.min + (upper - tier.min) * f64::from(step) / 10.0;
            assert_eq!(tier_for(points).name, tier.name, "points {points}");
        }
    }
}

#[test]
fn diamante_band() {
    let info = tier_info(100_000.0);
    assert_eq!(info.name, TierName::Diamante);
    assert_eq!(info.min, 100_000.0);
    assert_eq!(info.max, Some(499_999.0));
    assert_eq!(info.next, Some(500_000.0));
    assert_eq!(info.points_to_next, Some(400_000.0));

    let info = tier_info(300_000.0);
    assert_eq!(info.progress, 50.0);
}

#[test]
fn last_tier_is_unbounded_and_full() {
    for points in [500_000.0, 750_000.0, 1e12] {
        let info = tier_info(points);
        assert_eq!(info.name, TierName::Uce);
        assert_eq!(info.progress, 100.0);
        assert_eq!(info.next, None);
        assert_eq!(info.max, None);
        assert_eq!(info.points_to_next, None);
    }
}

#[test]
fn progress_is_monotonic_within_a_tier() {
    let mut points = 0.0;
    let mut last = tier_info(points);
    while points < 600_000.0 {
        points += 137.5;
        let info = tier_info(points);
        if info.name == last.name {
            assert!(info.progress >= last.progress, "points {points}");
        }
        assert!((0.0..=100.0).contains(&info.progress));
        last = info;
    }
}

#[test]
fn tier_info_serializes_for_the_page() {
    let json = serde_json::to_value(tier_info(20_000.0)).unwrap();
    assert_eq!(json["name"], "Prata");
    assert_eq!(json["icon"], "/prata.svg");
    assert_eq!(json["pointsToNext"], 30_000.0);
    assert_eq!(json["next"], 50_000.0);
}
