use fractal_drift::ease::EaseInOut;

const STRENGTHS: [f32; 5] = [0.5, 1.0, 2.0, 3.5, 8.0];

#[test]
fn endpoints_are_exact() {
    for strength in STRENGTHS {
        let ease = EaseInOut::new(strength);
        assert_eq!(ease.apply(0.0), 0.0, "apply(0) at strength {strength}");
        assert_eq!(ease.apply(1.0), 1.0, "apply(1) at strength {strength}");
    }
}

#[test]
fn midpoint_is_half_for_any_strength() {
    for strength in STRENGTHS {
        let ease = EaseInOut::new(strength);
        assert_eq!(ease.apply(0.5), 0.5, "apply(0.5) at strength {strength}");
    }
}

#[test]
fn monotone_non_decreasing_on_unit_interval() {
    for strength in STRENGTHS {
        let ease = EaseInOut::new(strength);
        let mut prev = ease.apply(0.0);
        for step in 1..=1000 {
            let t = step as f32 / 1000.0;
            let next = ease.apply(t);
            assert!(
                next >= prev - 1e-6,
                "curve regressed at t={t} for strength {strength}: {next} < {prev}"
            );
            prev = next;
        }
    }
}

#[test]
fn strength_one_is_linear() {
    let ease = EaseInOut::new(1.0);
    for step in 0..=100 {
        let t = step as f32 / 100.0;
        assert!(
            (ease.apply(t) - t).abs() < 1e-6,
            "strength 1 should be identity at t={t}"
        );
    }
}

#[test]
fn symmetric_about_midpoint() {
    for strength in STRENGTHS {
        let ease = EaseInOut::new(strength);
        for step in 0..=50 {
            let d = step as f32 / 100.0;
            let sum = ease.apply(0.5 - d) + ease.apply(0.5 + d);
            assert!(
                (sum - 1.0).abs() < 1e-5,
                "asymmetry at d={d} for strength {strength}: {sum}"
            );
        }
    }
}

#[test]
fn default_strength_accelerates_then_decelerates() {
    let ease = EaseInOut::default();
    // Quadratic ramp: below the diagonal in the first half, above in the
    // second.
    assert!(ease.apply(0.25) < 0.25);
    assert!(ease.apply(0.75) > 0.75);
}
