use vitd_scoring::anthropometry::{bmi, height_meters, normalize};

#[test]
fn feet_and_inches_convert_to_meters() {
    let meters = height_meters(Some(5), Some(4));
    assert!((meters - 1.6256).abs() < 1e-12);
    assert!((height_meters(None, Some(70)) - 1.778).abs() < 1e-12);
}

#[test]
fn bmi_rounds_to_two_decimals() {
    let facts = normalize(Some(5), Some(4), 70.0);
    assert_eq!(facts.bmi, 26.49);
    assert!(facts.bmi_known());
}

#[test]
fn zero_height_gives_unknown_bmi() {
    let facts = normalize(Some(0), Some(0), 70.0);
    assert_eq!(facts.height_meters, 0.0);
    assert_eq!(facts.bmi, 0.0);
    assert!(!facts.bmi_known());

    let facts = normalize(None, None, 70.0);
    assert_eq!(facts.bmi, 0.0);
    assert!(!facts.bmi.is_nan());
}

#[test]
fn bad_weight_never_produces_nan() {
    let meters = height_meters(Some(5), Some(6));
    assert_eq!(bmi(f64::NAN, meters), 0.0);
    assert_eq!(bmi(0.0, meters), 0.0);
}

#[test]
fn normalizing_twice_is_stable() {
    let first = normalize(Some(5), Some(7), 81.3);
    let second = normalize(Some(5), Some(7), 81.3);
    assert_eq!(first.bmi.to_bits(), second.bmi.to_bits());
    assert_eq!(first, second);
}
