use expect_test::expect;
use fuzzy_math::{assert_close, FuzzyError, FuzzyNumber, FuzzyNumberFactory, Interval};

fn interval(lo: f64, hi: f64) -> Interval {
    Interval::new(lo, hi).unwrap()
}

fn triangle(a: f64, b: f64, c: f64) -> FuzzyNumber {
    FuzzyNumberFactory::default().triangle(a, b, c).unwrap()
}

#[test]
fn construction() {
    let x = FuzzyNumber::new([interval(0.0, 4.0), interval(1.0, 3.0), interval(2.0, 2.0)]).unwrap();
    assert_eq!(x.cut_count(), 3);
    assert_eq!(*x.support(), interval(0.0, 4.0));
    assert_eq!(*x.kernel(), interval(2.0, 2.0));
    assert_eq!(x.alpha_cuts()[1], interval(1.0, 3.0));

    let single = FuzzyNumber::new([interval(1.0, 2.0)]).unwrap();
    assert_eq!(single.support(), single.kernel());
}

#[test]
fn empty_fuzzy_number() {
    assert_eq!(
        FuzzyNumber::new(Vec::<Interval>::new()),
        Err(FuzzyError::InvalidFuzzyNumber { offending: vec![] })
    );
    assert!(FuzzyNumber::crisp(1.0, 0).is_err());
}

#[test]
fn improperly_nested_cuts() {
    let result = FuzzyNumber::new([
        interval(0.0, 1.0),
        interval(2.0, 3.0),
        interval(0.5, 0.7),
        interval(0.6, 0.6),
    ]);
    assert_eq!(
        result,
        Err(FuzzyError::InvalidFuzzyNumber {
            offending: vec![1, 2]
        })
    );
    expect![[r#"alpha-cuts are not nested at indices [1, 2]"#]]
        .assert_eq(&result.unwrap_err().to_string());
}

#[test]
fn nesting_uses_tolerance() {
    let outer = Interval::with_epsilon(0.0, 1.0, 1e-9).unwrap();
    let inner = interval(-1e-10, 1.0 + 1e-10);
    assert!(FuzzyNumber::new([outer, inner]).is_ok());
    assert!(FuzzyNumber::new([interval(0.0, 1.0), inner]).is_err());
}

#[test]
fn get_alpha_cut() {
    assert_eq!(
        triangle(1.0, 2.0, 3.0).alpha_cut(1.0).unwrap(),
        Interval::point(2.0).unwrap()
    );
    assert_close!(
        triangle(1.0, 2.0, 3.0).alpha_cut(0.5).unwrap(),
        interval(1.5, 2.5)
    );
    assert_close!(
        triangle(0.0, 2.0, 6.0).alpha_cut(0.8).unwrap(),
        interval(1.6, 2.8)
    );
}

#[test]
fn alpha_cut_interpolates_between_cuts() {
    let x = FuzzyNumberFactory::new(3).triangle(0.0, 1.0, 2.0).unwrap();
    assert_eq!(x.alpha_cut(0.25).unwrap(), interval(0.25, 1.75));
    assert_eq!(x.alpha_cut(0.75).unwrap(), interval(0.75, 1.25));

    let trapezoid = FuzzyNumberFactory::new(3)
        .trapezoid(0.0, 1.0, 3.0, 3.0)
        .unwrap();
    assert_eq!(trapezoid.alpha_cut(0.25).unwrap(), interval(0.25, 3.0));
}

#[test]
fn alpha_cut_ends() {
    let x = triangle(-1.0, 0.5, 4.0);
    assert_eq!(x.alpha_cut(0.0).unwrap(), *x.support());
    assert_eq!(x.alpha_cut(1.0).unwrap(), *x.kernel());
}

#[test]
fn alpha_cut_out_of_range() {
    let x = triangle(1.0, 2.0, 3.0);
    assert_eq!(x.alpha_cut(1.5), Err(FuzzyError::OutOfRange(1.5)));
    assert_eq!(x.alpha_cut(-0.1), Err(FuzzyError::OutOfRange(-0.1)));
    assert!(matches!(
        x.alpha_cut(f64::NAN),
        Err(FuzzyError::OutOfRange(_))
    ));
}

#[test]
fn get_membership() {
    assert_eq!(triangle(1.0, 2.0, 10.0).membership(1.0), 0.0);
    assert_close!(triangle(1.0, 2.0, 10.0).membership(8.0), 0.25);
    assert_eq!(triangle(1.0, 2.0, 10.0).membership(2.0), 1.0);
    assert_close!(triangle(1.0, 2.0, 3.0).membership(1.1), 0.1);
    assert_close!(triangle(1.0, 2.0, 3.0).membership(1.8), 0.8);
}

#[test]
fn membership_outside_support_and_inside_kernel() {
    let x = FuzzyNumberFactory::default()
        .trapezoid(0.0, 1.0, 2.0, 5.0)
        .unwrap();
    assert_eq!(x.membership(-0.5), 0.0);
    assert_eq!(x.membership(5.5), 0.0);
    assert_eq!(x.membership(1.0), 1.0);
    assert_eq!(x.membership(1.5), 1.0);
    assert_eq!(x.membership(2.0), 1.0);
}

#[test]
fn membership_inverts_alpha_cut() {
    let x = triangle(1.0, 2.0, 10.0);
    let cut = x.alpha_cut(0.35).unwrap();
    assert_close!(cut.lo(), 1.35);
    assert_close!(x.membership(cut.lo()), 0.35);
    assert_close!(x.membership(cut.hi()), 0.35);
}

#[test]
fn greater_than() {
    let x = triangle(1.0, 2.0, 3.0);
    let y = triangle(2.0, 3.0, 4.0);
    assert_close!(
        x.greater_than(&y).unwrap() + y.greater_than(&x).unwrap(),
        1.0
    );
    assert!(x.greater_than(&y).unwrap() < 0.5);
    assert_eq!(x.less_than(&y).unwrap(), y.greater_than(&x).unwrap());

    assert_eq!(
        triangle(0.0, 1.0, 2.0)
            .greater_than(&triangle(5.0, 6.0, 7.0))
            .unwrap(),
        0.0
    );
    assert_eq!(
        triangle(5.0, 6.0, 7.0)
            .greater_than(&triangle(0.0, 1.0, 2.0))
            .unwrap(),
        1.0
    );
}

#[test]
fn greater_than_value() {
    let x = triangle(0.0, 1.0, 2.0);
    assert_close!(x.greater_than_value(1.0).unwrap(), 0.5);
    assert_close!(x.less_than_value(1.0).unwrap(), 0.5);
    assert_eq!(x.greater_than_value(-1.0).unwrap(), 1.0);
    assert_eq!(x.less_than_value(-1.0).unwrap(), 0.0);
}

#[test]
fn cut_count_mismatch() {
    let x = triangle(1.0, 2.0, 3.0);
    let y = FuzzyNumberFactory::new(5).triangle(1.0, 2.0, 3.0).unwrap();
    assert_eq!(
        x.greater_than(&y),
        Err(FuzzyError::CutCountMismatch { left: 11, right: 5 })
    );
    assert!(matches!(
        &x + &y,
        Err(FuzzyError::CutCountMismatch { .. })
    ));
    assert!(matches!(
        x.map2(&y, |a, b| *a + *b),
        Err(FuzzyError::CutCountMismatch { left: 11, right: 5 })
    ));
}

#[test]
fn map_identity() {
    let x = triangle(-3.0, 0.25, 7.5);
    assert_eq!(x.map(|cut| Ok(*cut)).unwrap(), x);
}

#[test]
fn map_unary() {
    assert_close!(
        triangle(0.1, 0.2, 0.3).map(|x| *x * -10.0).unwrap(),
        triangle(-3.0, -2.0, -1.0)
    );
}

#[test]
fn map_binary() {
    assert_close!(
        triangle(0.0, 1.0, 2.0)
            .map2(&triangle(1.0, 2.0, 3.0), |x, y| *x + *y)
            .unwrap(),
        triangle(1.0, 3.0, 5.0)
    );
}

#[test]
fn map_revalidates_nesting() {
    let x = triangle(0.0, 1.0, 2.0);
    let widths = x.map(|cut| Interval::point(cut.width()));
    assert!(matches!(
        widths,
        Err(FuzzyError::InvalidFuzzyNumber { .. })
    ));
}

#[test]
fn map_propagates_errors() {
    let x = triangle(-1.0, 0.0, 1.0);
    assert!(matches!(
        x.map(|cut| 1.0 / *cut),
        Err(FuzzyError::DivisionByZero { .. })
    ));
}

#[test]
fn arithmetic() {
    let x = triangle(1.0, 2.0, 3.0);
    let y = triangle(2.0, 4.0, 6.0);

    assert_close!((&x + &y).unwrap(), triangle(3.0, 6.0, 9.0));
    assert_close!((&y - &x).unwrap(), triangle(-1.0, 2.0, 5.0));
    assert_close!((&x * 2.0).unwrap(), triangle(2.0, 4.0, 6.0));
    assert_close!((2.0 * &x).unwrap(), triangle(2.0, 4.0, 6.0));
    assert_close!((&x + 1.0).unwrap(), triangle(2.0, 3.0, 4.0));
    assert_close!((10.0 - &x).unwrap(), triangle(7.0, 8.0, 9.0));
    assert_close!((&y / 2.0).unwrap(), triangle(1.0, 2.0, 3.0));
    assert_close!(-&x, triangle(-3.0, -2.0, -1.0));

    let product = (x.clone() * y.clone()).unwrap();
    assert_close!(*product.support(), interval(2.0, 18.0));
    assert_close!(*product.kernel(), interval(8.0, 8.0));

    let quotient = (&y / &x).unwrap();
    assert_close!(*quotient.support(), interval(2.0 / 3.0, 6.0));
    assert_close!(*quotient.kernel(), interval(2.0, 2.0));

    let reciprocal = (1.0 / x).unwrap();
    assert_close!(*reciprocal.support(), interval(1.0 / 3.0, 1.0));
}

#[test]
fn division_by_fuzzy_zero() {
    let x = triangle(1.0, 2.0, 3.0);
    let zero = triangle(-1.0, 0.0, 1.0);
    assert!(matches!(
        &x / &zero,
        Err(FuzzyError::DivisionByZero { .. })
    ));
}

#[test]
fn crisp() {
    let x = FuzzyNumber::crisp(2.0, 4).unwrap();
    assert_eq!(x.cut_count(), 4);
    assert!(x.alpha_cuts().iter().all(|cut| *cut == interval(2.0, 2.0)));
    assert_eq!(FuzzyNumberFactory::new(4).crisp(2.0).unwrap(), x);
}

#[test]
fn factory() {
    assert_eq!(FuzzyNumberFactory::default().pieces(), 11);
    assert_eq!(FuzzyNumberFactory::new(0).pieces(), 2);
    assert!(FuzzyNumberFactory::default()
        .trapezoid(2.0, 1.0, 3.0, 4.0)
        .is_err());

    let x = FuzzyNumberFactory::new(2)
        .with_epsilon(1e-6)
        .triangle(0.0, 1.0, 2.0)
        .unwrap();
    assert!(x.alpha_cuts().iter().all(|cut| cut.epsilon() == 1e-6));
}

#[test]
fn display() {
    let x = FuzzyNumberFactory::new(3).triangle(1.0, 2.0, 3.0).unwrap();
    expect![[r#"[[1, 3], [1.5, 2.5], [2, 2]]"#]].assert_eq(&x.to_string());
}
