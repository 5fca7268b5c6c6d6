use super::*;

fn ctx() -> ResolveCtx {
    ResolveCtx::new(200.0, 100.0, 400.0, 800.0)
}

fn dx_at(resolved: &ResolvedTranslate, progress: f64) -> f64 {
    let mut t = Transformation::identity();
    resolved.apply(progress, &mut t);
    t.matrix().translation().x
}

#[test]
fn px_deltas_interpolate_linearly() {
    let resolved = Translate::by_px(0.0, 100.0, 0.0, 0.0).resolve(&ctx());
    assert_eq!(dx_at(&resolved, 0.0), 0.0);
    assert_eq!(dx_at(&resolved, 0.5), 50.0);
    assert_eq!(dx_at(&resolved, 1.0), 100.0);
}

#[test]
fn equal_endpoints_never_drift() {
    let v = 0.1 + 0.2;
    let resolved = Translate::by_px(v, v, 0.0, 0.0).resolve(&ctx());
    for progress in [0.0, 0.123, 0.5, 0.999, 1.0] {
        assert_eq!(dx_at(&resolved, progress), v);
    }
}

#[test]
fn axes_are_independent() {
    let base = Translate::by_px(0.0, 100.0, 0.0, 10.0).resolve(&ctx());
    let changed_y = Translate::by_px(0.0, 100.0, -500.0, 777.0).resolve(&ctx());
    for progress in [0.0, 0.25, 0.5, 1.0] {
        assert_eq!(dx_at(&base, progress), dx_at(&changed_y, progress));
    }
}

#[test]
fn self_fraction_resolves_against_own_size() {
    let tr = Translate::new(
        Dimension::ZERO,
        Dimension::SelfFraction(0.5),
        Dimension::ZERO,
        Dimension::SelfFraction(1.0),
    );
    let resolved = tr.resolve(&ctx());
    // width 200 * 0.5, height 100 * 1.0
    assert_eq!(resolved.to, Vec2::new(100.0, 100.0));
}

#[test]
fn parent_fraction_resolves_against_parent_size() {
    let tr = Translate::new(
        Dimension::ParentFraction(0.25),
        Dimension::ZERO,
        Dimension::ParentFraction(0.25),
        Dimension::ZERO,
    );
    let resolved = tr.resolve(&ctx());
    // parent 400 * 0.25 on X, parent 800 * 0.25 on Y
    assert_eq!(resolved.from, Vec2::new(100.0, 200.0));
}

#[test]
fn resolve_tracks_new_bounds() {
    let tr = Translate::new(
        Dimension::ZERO,
        Dimension::SelfFraction(1.0),
        Dimension::ZERO,
        Dimension::ZERO,
    );
    assert_eq!(tr.resolve(&ctx()).to.x, 200.0);
    let wider = ResolveCtx::new(300.0, 100.0, 400.0, 800.0);
    assert_eq!(tr.resolve(&wider).to.x, 300.0);
}

#[test]
fn apply_translates_the_transform_in_place() {
    let resolved = Translate::by_px(0.0, 10.0, 0.0, 20.0).resolve(&ctx());
    let mut t = Transformation::identity();
    resolved.apply(0.5, &mut t);
    assert_eq!(t.matrix().translation(), Vec2::new(5.0, 10.0));
    // Alpha is untouched by a translate.
    assert_eq!(t.alpha(), 1.0);
}
