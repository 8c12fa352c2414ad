use super::*;

#[test]
fn all_curves_pin_endpoints() {
    for ease in [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InOutQuint,
    ] {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::InOutQuint.apply(-0.5), 0.0);
    assert_eq!(Ease::InOutQuint.apply(1.5), 1.0);
}

#[test]
fn in_out_quad_matches_closed_form() {
    // t < 0.5: 2t²; else −1 + (4 − 2t)·t.
    assert!((Ease::InOutQuad.apply(0.25) - 0.125).abs() < 1e-12);
    assert!((Ease::InOutQuad.apply(0.75) - (-1.0 + (4.0 - 1.5) * 0.75)).abs() < 1e-12);
    assert!((Ease::InOutQuad.apply(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn in_out_quint_matches_closed_form() {
    // t < 0.5: 16t⁵; else 1 − (−2t + 2)⁵ / 2.
    assert!((Ease::InOutQuint.apply(0.25) - 16.0 * 0.25f64.powi(5)).abs() < 1e-12);
    let t: f64 = 0.75;
    assert!((Ease::InOutQuint.apply(t) - (1.0 - (-2.0 * t + 2.0).powi(5) / 2.0)).abs() < 1e-12);
    assert!((Ease::InOutQuint.apply(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn curves_are_monotonic() {
    for ease in [Ease::InOutQuad, Ease::InOutQuint] {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!(v >= prev, "{ease:?} must be monotonic");
            prev = v;
        }
    }
}
