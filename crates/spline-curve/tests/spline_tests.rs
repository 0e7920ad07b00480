use approx::assert_relative_eq;
use spline_curve::{
    vec3, Checked, Spline, SplineBuilder, SplineError, SplineMode, Trajectory, Unchecked, Vec3,
};

const TWO_POINTS: [i16; 12] = [0, 0, 0, 10, 100, 0, 0, 10, 0, 0, 0, 0];

fn stream_of(points: &[[i16; 4]]) -> Vec<i16> {
    let mut data: Vec<i16> = points.iter().flatten().copied().collect();
    data.extend_from_slice(&[0, 0, 0, 0]);
    data
}

#[test]
fn test_decode_consumes_points_and_terminator() {
    let groups = [[1, 2, 3, 5], [-7, 8, 9, 1], [300, -300, 0, 2], [0, 0, 1, 0]];
    for n in 1..=groups.len() {
        let mut data = stream_of(&groups[..n]);
        data.extend_from_slice(&[42, 42, 42, 42]);

        let mut builder = SplineBuilder::<Checked>::with_policy(SplineMode::Weighted);
        let decoded = builder.decode(&data).unwrap();
        assert_eq!(decoded.points, n);
        assert_eq!(decoded.consumed, 4 * (n + 1));

        let (spline, rest) = Spline::decode_with::<Checked>(SplineMode::Weighted, &data).unwrap();
        assert_eq!(spline.len(), n);
        assert_eq!(rest, &[42, 42, 42, 42]);
    }
}

#[test]
fn test_decoded_values() {
    let data = stream_of(&[[-5, 6, 7, 12], [1, 2, 3, 0]]);
    let (spline, rest) = Spline::decode(SplineMode::Bezier, &data).unwrap();
    assert!(rest.is_empty());
    assert_eq!(spline.mode(), SplineMode::Bezier);
    assert_eq!(spline.points()[0].anchor(), vec3(-5.0, 6.0, 7.0));
    assert_eq!(spline.points()[0].duration_to_next(), 12.0);
    assert_eq!(spline.points()[1].anchor(), vec3(1.0, 2.0, 3.0));
}

#[test]
fn test_weighted_two_point_scenario() {
    let (spline, _) = Spline::decode(SplineMode::Weighted, &TWO_POINTS).unwrap();
    assert_eq!(spline.len(), 2);
    assert_relative_eq!(spline.total_duration(), 10.0);

    // Leading anchors are (0, 0, 100) after clamping.
    let start = spline.resolve(0.0_f32);
    assert_relative_eq!(start.x, 100.0 / 3.0, epsilon = 1e-4);
    assert_eq!(start.y, 0.0);

    let mid = spline.resolve(5u32);
    assert_relative_eq!(mid.x, 50.0, epsilon = 1e-4);

    assert_eq!(spline.resolve(10.0_f32), vec3(100.0, 0.0, 0.0));
    assert_eq!(spline.resolve(25.0_f32), vec3(100.0, 0.0, 0.0));
}

#[test]
fn test_terminal_clamp() {
    let data = stream_of(&[[0, 0, 0, 3], [10, 20, 0, 7], [-4, 5, 6, 2], [9, 9, 9, 30]]);
    for mode in [SplineMode::Weighted, SplineMode::Bezier] {
        let (spline, _) = Spline::decode(mode, &data).unwrap();
        let total = spline.total_duration();
        assert_relative_eq!(total, 12.0);
        for stamp in [total, total + 0.001, 20.0, 41.9, 1.0e6] {
            assert_eq!(spline.resolve(stamp), vec3(9.0, 9.0, 9.0));
        }
        // Just before the end the blend is still running.
        assert_ne!(spline.resolve(total - 0.5), vec3(9.0, 9.0, 9.0));
    }
}

#[test]
fn test_boundary_clamp() {
    let data = stream_of(&[[1, 0, 0, 1], [2, 0, 0, 1], [3, 0, 0, 1]]);
    let (spline, _) = Spline::decode(SplineMode::Weighted, &data).unwrap();
    let count = spline.len() as isize;
    assert_eq!(spline.clamped_point(-5), spline.clamped_point(-1));
    assert_eq!(spline.clamped_point(-1).anchor(), vec3(1.0, 0.0, 0.0));
    assert_eq!(spline.clamped_point(count), spline.clamped_point(count + 100));
    assert_eq!(spline.clamped_point(count).anchor(), vec3(3.0, 0.0, 0.0));
}

#[test]
fn test_bezier_passes_through_anchors() {
    let data = stream_of(&[[0, 0, 0, 4], [30, 10, -5, 4], [60, -20, 5, 8], [20, 20, 20, 1]]);
    let (spline, _) = Spline::decode(SplineMode::Bezier, &data).unwrap();

    let mut stamp = 0.0_f32;
    for point in &spline.points()[..spline.len() - 1] {
        let pos = spline.resolve(stamp);
        assert!(pos.abs_diff_eq(point.anchor(), 1e-3), "{pos} at {stamp}");
        stamp += point.duration_to_next();
    }
}

#[test]
fn test_bezier_stays_smooth_across_segments() {
    let data = stream_of(&[[0, 0, 0, 10], [100, 0, 0, 10], [100, 100, 0, 10], [0, 100, 0, 1]]);
    let (spline, _) = Spline::decode(SplineMode::Bezier, &data).unwrap();

    // Position is continuous at the joint between segment 0 and 1.
    let before = spline.resolve(9.999_f32);
    let after = spline.resolve(10.0_f32);
    assert!(before.distance(after) < 0.1);
}

#[test]
fn test_empty_segment_rejected() {
    assert_eq!(
        Spline::decode(SplineMode::Weighted, &[0, 0, 0, 0]).unwrap_err(),
        SplineError::EmptyCurve
    );
}

#[test]
fn test_negative_duration_policy() {
    let data = stream_of(&[[1, 2, 3, 4], [5, 6, 7, -1]]);
    assert_eq!(
        Spline::decode_with::<Checked>(SplineMode::Weighted, &data).unwrap_err(),
        SplineError::InvalidDuration { index: 1, duration: -1.0 }
    );
    let (spline, _) = Spline::decode_with::<Unchecked>(SplineMode::Weighted, &data).unwrap();
    assert_eq!(spline.len(), 2);
}

#[test]
fn test_checked_push_rejects_negative() {
    let mut checked = SplineBuilder::<Checked>::with_policy(SplineMode::Bezier);
    assert!(checked.push(Vec3::ZERO, -5.0).is_err());
    checked.push(vec3(10.0, 0.0, 0.0), 10.0).unwrap();
    checked.push(vec3(20.0, 0.0, 0.0), 1.0).unwrap();
    let spline = checked.build().unwrap();
    assert_eq!(spline.len(), 2);
    assert_relative_eq!(spline.total_duration(), 10.0);

    let mut unchecked = SplineBuilder::<Unchecked>::with_policy(SplineMode::Bezier);
    unchecked.push(Vec3::ZERO, -5.0).unwrap();
    assert_eq!(unchecked.build().unwrap().points()[0].duration_to_next(), -5.0);
}

#[test]
fn test_trajectory_object() {
    let (spline, _) = Spline::decode(SplineMode::Weighted, &TWO_POINTS).unwrap();
    let path: Box<dyn Trajectory<Point = Vec3>> = Box::new(spline.clone());
    assert_eq!(path.duration(), spline.total_duration());
    assert_eq!(path.position_at(3.0), spline.resolve(3.0_f32));
}

#[test]
fn test_concurrent_queries() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Spline>();

    let data = stream_of(&[[0, 0, 0, 5], [50, 0, 0, 5], [50, 50, 0, 5], [0, 50, 0, 0]]);
    let (spline, _) = Spline::decode(SplineMode::Bezier, &data).unwrap();
    let expected: Vec<Vec3> = (0..16).map(|i| spline.resolve(i as f32)).collect();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for (i, want) in expected.iter().enumerate() {
                    assert_eq!(spline.resolve(i as f32), *want);
                }
            });
        }
    });
}

#[test]
fn test_serialize_spline() {
    let (spline, _) = Spline::decode(SplineMode::Bezier, &TWO_POINTS).unwrap();
    let json = serde_json::to_value(&spline).unwrap();
    assert_eq!(json["mode"], "bezier");
    assert_eq!(json["points"].as_array().map(Vec::len), Some(2));
}
