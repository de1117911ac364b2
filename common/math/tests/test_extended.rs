// Ordering and scaling of rationals extended with +inf

use common_math::{from_pair, or_zero, ratio, to_rational, ExtendedRational};
use num_traits::Zero;

#[test]
fn test_infinite_is_above_every_finite_value() {
    let huge = ExtendedRational::Finite(to_rational(u64::MAX));
    assert!(ExtendedRational::Infinite > huge);
    assert!(ExtendedRational::Infinite > ExtendedRational::one());
    assert_eq!(ExtendedRational::Infinite, ExtendedRational::Infinite);
}

#[test]
fn test_finite_values_compare_by_value() {
    let two_thirds = ExtendedRational::from(ratio(2, 3));
    let one = ExtendedRational::one();
    assert!(two_thirds < one);
    assert_eq!(two_thirds, ExtendedRational::from(ratio(4, 6)));
    assert!(ExtendedRational::Infinite > ExtendedRational::from(to_rational(1_000)));
}

#[test]
fn test_scale() {
    let collateral = ExtendedRational::from(to_rational(3));
    assert_eq!(
        collateral.scale(&ratio(2, 3)),
        ExtendedRational::from(to_rational(2))
    );
    assert!(ExtendedRational::Infinite.scale(&ratio(2, 3)).is_infinite());
    assert!(!collateral.is_infinite());
}

#[test]
fn test_helpers() {
    assert_eq!(from_pair((12, 100)), ratio(3, 25));
    assert!(or_zero(None).is_zero());
    assert_eq!(or_zero(Some(&to_rational(5))), to_rational(5));
    assert_eq!(ExtendedRational::Infinite.to_string(), "inf");
    assert_eq!(ExtendedRational::from(ratio(1, 2)).to_string(), "1/2");
}
