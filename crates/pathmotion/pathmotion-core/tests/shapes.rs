use pathmotion_core::{
    resolve_position, shape::arc::bias_time, ArcConfig, Basis, EaseKind, EnvelopeKind,
    HelixConfig, LinearConfig, Shape, Vec3,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn approx_vec(a: Vec3, b: Vec3, eps: f32) {
    assert!((a - b).abs().max_element() <= eps, "left={a} right={b} eps={eps}");
}

/// A tilted, offset frame so axis mix-ups show up in the assertions.
fn tilted_basis() -> Basis {
    let forward = Vec3::new(1.0, 0.0, 1.0).normalize();
    let up = Vec3::Y;
    let right = up.cross(forward).normalize();
    Basis::new(Vec3::new(3.0, -1.0, 2.0), forward, right, up)
}

/// it should place linear progress on the forward axis only
#[test]
fn linear_matches_forward_resolution() {
    let shape = Shape::Linear(LinearConfig::default());
    for b in [Basis::IDENTITY, tilted_basis()] {
        for &t in &[0.0, 0.2, 0.5, 0.9, 1.0] {
            let p = shape.evaluate(&b, 7.5, t);
            approx_vec(p, resolve_position(&b, 7.5 * t, 0.0, 0.0), 1e-6);
        }
    }
}

#[test]
fn linear_midpoint_is_exact() {
    let b = tilted_basis();
    let p = Shape::Linear(LinearConfig::default()).evaluate(&b, 10.0, 0.5);
    assert_eq!(p, b.origin + b.forward * 5.0);
}

#[test]
fn linear_ease_only_changes_forward_speed() {
    let b = Basis::IDENTITY;
    let p = Shape::Linear(LinearConfig::new(EaseKind::QuadIn)).evaluate(&b, 10.0, 0.5);
    approx_vec(p, Vec3::new(0.0, 0.0, 2.5), 1e-6);
}

/// it should extrapolate rather than clamp out-of-range progress
#[test]
fn linear_extrapolates_past_one() {
    let p = Shape::Linear(LinearConfig::default()).evaluate(&Basis::IDENTITY, 4.0, 1.5);
    approx_vec(p, Vec3::new(0.0, 0.0, 6.0), 1e-6);
}

#[test]
fn arc_centered_peak() {
    let b = tilted_basis();
    let shape = Shape::Arc(ArcConfig::new(2.0, 0.5, EaseKind::Linear));
    let p = shape.evaluate(&b, 10.0, 0.5);
    approx_vec(p, b.origin + b.forward * 5.0 + b.up * 2.0, 1e-5);
}

/// it should keep both arc endpoints on the baseline for any bias
#[test]
fn arc_endpoints_touch_baseline() {
    let b = tilted_basis();
    for &bias in &[0.0, 0.1, 0.5, 0.8, 1.0] {
        for &height in &[-2.0, 0.5, 4.0] {
            let cfg = ArcConfig::new(height, bias, EaseKind::CubicInOut);
            let shape = Shape::Arc(cfg);
            let start = shape.evaluate(&b, 6.0, 0.0);
            let end = shape.evaluate(&b, 6.0, 1.0);
            approx((start - b.origin).dot(b.up), 0.0, 1e-6);
            approx((end - b.origin).dot(b.up), 0.0, 1e-5);
        }
    }
}

#[test]
fn arc_with_zero_height_degenerates_to_linear() {
    let b = tilted_basis();
    let arc = Shape::Arc(ArcConfig::new(0.0, 0.3, EaseKind::SineOut));
    let line = Shape::Linear(LinearConfig::new(EaseKind::SineOut));
    for &t in &[0.0, 0.25, 0.6, 1.0] {
        approx_vec(arc.evaluate(&b, 9.0, t), line.evaluate(&b, 9.0, t), 1e-6);
    }
}

#[test]
fn arc_constructor_clamps_peak_bias() {
    assert_eq!(ArcConfig::new(1.0, 1.7, EaseKind::Linear).peak_bias, 1.0);
    assert_eq!(ArcConfig::new(1.0, -0.3, EaseKind::Linear).peak_bias, 0.0);
}

#[test]
fn bias_skews_time_but_pins_ends() {
    assert!(bias_time(0.3, 0.9) > 0.3);
    assert!(bias_time(0.3, 0.1) < 0.3);
    assert_eq!(bias_time(0.0, 0.9), 0.0);
    assert_eq!(bias_time(1.0, 0.9), 1.0);
    assert_eq!(bias_time(0.37, 0.5005), 0.37);
}

/// Bias above 0.5 advances the remapped time, so the apex arrives before
/// the midpoint.
#[test]
fn high_bias_reaches_peak_sooner() {
    let b = Basis::IDENTITY;
    let high = ArcConfig::new(1.0, 0.9, EaseKind::Linear);
    let centered = ArcConfig::new(1.0, 0.5, EaseKind::Linear);
    approx(arc_height(&centered, &b, 0.25), arc_height(&centered, &b, 0.75), 1e-6);
    assert!(arc_height(&high, &b, 0.25) > arc_height(&centered, &b, 0.25));
    assert!(arc_height(&high, &b, 0.75) < arc_height(&centered, &b, 0.75));
    // Apex where t + 0.8 (t - t^2) = 0.5.
    let apex_t = (1.8 - 1.64_f32.sqrt()) / 1.6;
    assert!(apex_t < 0.5);
    approx(arc_height(&high, &b, apex_t), 1.0, 1e-4);
}

fn arc_height(cfg: &ArcConfig, b: &Basis, t: f32) -> f32 {
    Shape::Arc(*cfg).evaluate(b, 1.0, t).dot(b.up)
}

/// The height profile reads raw progress while forward travel reads the eased
/// progress. Changing this coupling must be a deliberate decision.
#[test]
fn arc_height_ignores_forward_ease() {
    let b = Basis::IDENTITY;
    let eased = Shape::Arc(ArcConfig::new(2.0, 0.5, EaseKind::QuadIn));
    let p = eased.evaluate(&b, 10.0, 0.5);
    // forward: 10 * 0.25, height: parabola(0.5) * 2 from raw t
    approx_vec(p, Vec3::new(0.0, 2.0, 2.5), 1e-6);

    let skewed = Shape::Arc(ArcConfig::new(2.0, 0.8, EaseKind::CubicIn));
    let unskewed_fwd = Shape::Arc(ArcConfig::new(2.0, 0.8, EaseKind::Linear));
    let t = 0.4;
    approx(
        skewed.evaluate(&b, 10.0, t).y,
        unskewed_fwd.evaluate(&b, 10.0, t).y,
        1e-6,
    );
}

#[test]
fn helix_quarter_turn() {
    let shape = Shape::Helix(HelixConfig::new(1.0, 1.0, 0.0, EnvelopeKind::None));
    let b = Basis::IDENTITY;
    let p = shape.evaluate(&b, 0.0, 0.25);
    approx(p.dot(b.right), 0.0, 1e-5);
    approx(p.dot(b.up), 1.0, 1e-5);
}

#[test]
fn helix_phase_rotates_start() {
    let shape = Shape::Helix(HelixConfig::new(2.0, 1.0, 90.0, EnvelopeKind::None));
    let p = shape.evaluate(&Basis::IDENTITY, 4.0, 0.0);
    approx_vec(p, Vec3::new(0.0, 2.0, 0.0), 1e-5);
}

/// it should pinch a parabolic-envelope helix onto the axis at both ends
#[test]
fn helix_parabolic_envelope_pinches_ends() {
    let cfg = HelixConfig::new(3.0, 2.5, 30.0, EnvelopeKind::Parabolic);
    assert_eq!(cfg.radius_at(0.0), 0.0);
    assert_eq!(cfg.radius_at(1.0), 0.0);
    let b = tilted_basis();
    let end = Shape::Helix(cfg).evaluate(&b, 5.0, 1.0);
    approx_vec(end, b.origin + b.forward * 5.0, 1e-5);
}

/// Helix forward travel stays linear in t even though line/arc support easing.
#[test]
fn helix_forward_is_never_eased() {
    let cfg = HelixConfig::new(0.7, 4.0, 12.0, EnvelopeKind::EaseInOut);
    let b = tilted_basis();
    for &t in &[0.1, 0.33, 0.8] {
        let p = Shape::Helix(cfg).evaluate(&b, 10.0, t);
        approx((p - b.origin).dot(b.forward), 10.0 * t, 1e-5);
    }
}

#[test]
fn envelope_table() {
    let t = 0.25;
    approx(EnvelopeKind::None.scale(t), 1.0, 0.0);
    approx(EnvelopeKind::Linear.scale(t), 0.25, 1e-7);
    approx(EnvelopeKind::EaseIn.scale(t), 0.0625, 1e-7);
    approx(EnvelopeKind::EaseOut.scale(t), 0.4375, 1e-7);
    approx(EnvelopeKind::EaseInOut.scale(t), 0.125, 1e-7);
    approx(EnvelopeKind::EaseInOut.scale(0.75), 0.875, 1e-6);
    approx(EnvelopeKind::Parabolic.scale(t), 0.75, 1e-7);
    approx(EnvelopeKind::HalfParabolic.scale(t), 0.4375, 1e-7);
    for kind in EnvelopeKind::ALL {
        let s = kind.scale(0.6);
        assert!((0.0..=1.0).contains(&s), "{kind:?} -> {s}");
    }
}

/// it should start at the basis origin and end at origin + forward * range
#[test]
fn default_shapes_hit_defined_endpoints() {
    let b = tilted_basis();
    let range = 6.0;
    let shapes = [
        Shape::Linear(LinearConfig::default()),
        Shape::Arc(ArcConfig::default()),
        Shape::Helix(HelixConfig::new(1.0, 1.0, 0.0, EnvelopeKind::Parabolic)),
    ];
    for shape in shapes {
        approx_vec(shape.start_point(&b, range), b.origin, 1e-5);
        approx_vec(shape.end_point(&b, range), b.origin + b.forward * range, 1e-5);
    }

    // Default helix keeps its full radius at both ends: start sits one radius
    // out along the right axis.
    let helix = Shape::Helix(HelixConfig::default());
    approx_vec(helix.start_point(&b, range), b.origin + b.right, 1e-5);
    approx_vec(
        helix.end_point(&b, range),
        b.origin + b.forward * range + b.right,
        1e-5,
    );
}

#[test]
fn negative_range_and_radius_are_valid() {
    let b = Basis::IDENTITY;
    let p = Shape::Linear(LinearConfig::default()).evaluate(&b, -4.0, 0.5);
    approx_vec(p, Vec3::new(0.0, 0.0, -2.0), 1e-6);
    let h = Shape::Helix(HelixConfig::new(-1.0, 1.0, 0.0, EnvelopeKind::None)).evaluate(&b, 0.0, 0.0);
    approx_vec(h, Vec3::new(-1.0, 0.0, 0.0), 1e-6);
}

#[test]
fn basis_from_rotation_matches_axes() {
    let rot = pathmotion_core::Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
    let b = Basis::from_rotation(Vec3::ONE, rot, Vec3::Z);
    approx_vec(b.forward, Vec3::X, 1e-6);
    approx_vec(b.right, -Vec3::Z, 1e-6);
    approx_vec(b.up, Vec3::Y, 1e-6);
}
