use super::*;

fn ctx() -> ResolveCtx {
    ResolveCtx::new(200.0, 100.0, 400.0, 800.0)
}

#[test]
fn factors_interpolate_per_axis() {
    let resolved = Scale::new(1.0, 3.0, 1.0, 0.0).resolve(&ctx());
    let mut t = Transformation::identity();
    resolved.apply(0.5, &mut t);
    let mapped = t.matrix() * Point::new(1.0, 1.0);
    assert_eq!(mapped, Point::new(2.0, 0.5));
}

#[test]
fn equal_factors_stay_exact() {
    let resolved = Scale::new(1.7, 1.7, 1.0, 1.0).resolve(&ctx());
    let mut t = Transformation::identity();
    resolved.apply(0.333, &mut t);
    let mapped = t.matrix() * Point::new(1.0, 0.0);
    assert_eq!(mapped.x, 1.7);
}

#[test]
fn pivot_resolves_like_translate_deltas() {
    let s = Scale::about(
        1.0,
        2.0,
        1.0,
        2.0,
        Dimension::SelfFraction(0.5),
        Dimension::SelfFraction(0.5),
    );
    let resolved = s.resolve(&ctx());
    // Center of a 200x100 widget.
    assert_eq!(resolved.pivot, Point::new(100.0, 50.0));

    // The pivot stays fixed while everything else scales around it.
    let mut t = Transformation::identity();
    resolved.apply(1.0, &mut t);
    assert_eq!(t.matrix() * resolved.pivot, resolved.pivot);
}
