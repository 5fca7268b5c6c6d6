use super::*;

fn ctx() -> ResolveCtx {
    ResolveCtx::new(200.0, 100.0, 400.0, 800.0)
}

fn assert_point_close(got: Point, want: Point) {
    assert!(
        (got.x - want.x).abs() < 1e-12 && (got.y - want.y).abs() < 1e-12,
        "{got:?} != {want:?}"
    );
}

#[test]
fn degrees_interpolate_before_radian_conversion() {
    let resolved = Rotate::new(0.0, 180.0).resolve(&ctx());
    let mut t = Transformation::identity();
    resolved.apply(0.5, &mut t);
    // Half way through a half turn: (1, 0) maps to (0, 1).
    assert_point_close(t.matrix() * Point::new(1.0, 0.0), Point::new(0.0, 1.0));
}

#[test]
fn equal_angles_stay_exact() {
    let resolved = Rotate::new(90.0, 90.0).resolve(&ctx());
    let mut a = Transformation::identity();
    let mut b = Transformation::identity();
    resolved.apply(0.0, &mut a);
    resolved.apply(0.77, &mut b);
    assert_eq!(a.matrix(), b.matrix());
}

#[test]
fn pivot_is_resolved_and_fixed() {
    let r = Rotate::about(
        0.0,
        90.0,
        Dimension::ParentFraction(0.25),
        Dimension::SelfFraction(1.0),
    );
    let resolved = r.resolve(&ctx());
    assert_eq!(resolved.pivot, Point::new(100.0, 100.0));

    let mut t = Transformation::identity();
    resolved.apply(1.0, &mut t);
    assert_point_close(t.matrix() * resolved.pivot, resolved.pivot);
}
