use approx::assert_relative_eq;
use gearmesh_core::topology::VERTICES_PER_PITCH;
use gearmesh_core::{
    generate, generate_with, presets, GearError, GearMesh, GearOptions, GearParameters,
    ValidationError,
};
use nalgebra::Vector3;

fn scenario_a() -> GearParameters {
    GearParameters::new(1.0, 2.0, 1.0, 4, 0.4)
}

fn scenario_b() -> GearParameters {
    GearParameters::new(0.5, 2.0, 2.0, 10, 0.7)
}

fn assert_all_finite(mesh: &GearMesh) {
    assert!(mesh.positions.iter().all(|v| v.is_finite()), "non-finite position");
    assert!(mesh.normals.iter().all(|v| v.is_finite()), "non-finite normal");
}

#[test]
fn test_generation_is_deterministic() {
    for params in [scenario_a(), scenario_b(), presets::RED] {
        let first = generate(&params).unwrap();
        let second = generate(&params).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_size_law() {
    for teeth in [1, 2, 3, 7, 20, 64] {
        let params = GearParameters { teeth, ..scenario_a() };
        let mesh = generate(&params).unwrap();
        let pitches = teeth as usize + 1;
        assert_eq!(mesh.vertex_count(), 34 * pitches);
        assert_eq!(mesh.positions.len(), mesh.normals.len());
        assert_eq!(mesh.indices.len(), 60 * pitches);
        assert_eq!(mesh.indices.len() % 3, 0);
    }
}

#[test]
fn test_indices_in_bounds() {
    for params in [scenario_a(), scenario_b(), presets::BLUE] {
        let mesh = generate(&params).unwrap();
        let vertex_count = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < vertex_count));
        assert!(mesh.validate().is_ok());
    }
}

#[test]
fn test_scenario_a() {
    let mesh = generate(&scenario_a()).unwrap();
    assert_eq!(mesh.positions.len(), 170 * 3);
    assert_eq!(mesh.indices.len(), 300);

    // the tip of the first tooth sits at r2 = 2.2, da = π/8
    let tip = mesh.position(2).unwrap();
    assert_relative_eq!(tip.x, 2.2 * (std::f32::consts::PI / 8.0).cos(), epsilon = 1e-5);
    assert_relative_eq!(tip.y, 2.2 * (std::f32::consts::PI / 8.0).sin(), epsilon = 1e-5);
    assert_relative_eq!(tip.z, 0.5);
}

#[test]
fn test_scenario_b() {
    let mesh = generate(&scenario_b()).unwrap();
    assert_eq!(mesh.positions.len(), 34 * 11 * 3);
    assert_eq!(mesh.indices.len(), 660);
}

#[test]
fn test_fractional_teeth_rejected() {
    let err = GearParameters::try_new(1.0, 2.0, 1.0, 4.5, 0.4).unwrap_err();
    assert_eq!(err, ValidationError::FractionalTeeth(4.5));
    let err: GearError = err.into();
    assert!(err.to_string().contains("integer"));
}

#[test]
fn test_zero_teeth_rejected() {
    let params = GearParameters { teeth: 0, ..scenario_a() };
    assert!(matches!(
        generate(&params),
        Err(GearError::Validation(ValidationError::NonPositiveTeeth))
    ));
    assert_eq!(
        GearParameters::teeth_from_f64(0.0),
        Err(ValidationError::NonPositiveTeeth)
    );
}

#[test]
fn test_degenerate_depth_stays_finite() {
    // depth > 2 (outer - inner): the root dips inside the bore
    let params = GearParameters::new(1.0, 1.2, 1.0, 8, 2.0);
    let mesh = generate(&params).unwrap();
    assert_all_finite(&mesh);
    assert!(mesh.validate().is_ok());

    // root on the axis and below it
    for depth in [2.4, 5.0, -3.0] {
        let params = GearParameters::new(1.0, 1.2, 1.0, 8, depth);
        let mesh = generate(&params).unwrap();
        assert_all_finite(&mesh);
        let unit = generate_with(&params, &GearOptions::default().with_unit_normals()).unwrap();
        assert_all_finite(&unit);
    }
}

#[test]
fn test_front_back_symmetry() {
    let params = scenario_b();
    let mesh = generate(&params).unwrap();
    let half = params.width / 2.0;
    for pitch in 0..=params.teeth as usize {
        let base = pitch * VERTICES_PER_PITCH;
        for k in 0..7 {
            let front = mesh.position(base + k).unwrap();
            let back = mesh.position(base + 7 + k).unwrap();
            assert_eq!((front.x, front.y), (back.x, back.y));
            assert_relative_eq!(front.z, half);
            assert_relative_eq!(back.z, -half);
        }
    }
}

#[test]
fn test_last_pitch_repeats_the_first() {
    let params = scenario_a();
    let mesh = generate(&params).unwrap();
    let last = params.teeth as usize * VERTICES_PER_PITCH;
    for k in 0..VERTICES_PER_PITCH {
        let first = mesh.position(k).unwrap();
        let repeat = mesh.position(last + k).unwrap();
        assert_relative_eq!(first, repeat, epsilon = 1e-5);
    }
}

#[test]
fn test_winding_faces_outward() {
    let mesh = generate(&scenario_b()).unwrap();
    for tri in mesh.triangles() {
        let [p0, p1, p2] = tri.map(|i| mesh.position(i as usize).unwrap());
        let facing = (p1 - p0).cross(&(p2 - p0));
        let centroid = (p0.coords + p1.coords + p2.coords) / 3.0;
        let radial = Vector3::new(centroid.x, centroid.y, 0.0);
        let slot = tri[0] as usize % VERTICES_PER_PITCH;
        match slot {
            0..=6 => assert!(facing.z > 0.0, "front cap triangle {:?} faces back", tri),
            7..=13 => assert!(facing.z < 0.0, "back cap triangle {:?} faces front", tri),
            18..=21 | 26..=29 => {
                assert!(facing.dot(&radial) > 0.0, "outer triangle {:?} faces inward", tri)
            }
            30..=33 => {
                assert!(facing.dot(&radial) < 0.0, "bore triangle {:?} faces outward", tri)
            }
            _ => assert!(facing.z.abs() < 1e-4, "flank triangle {:?} is not axial", tri),
        }
    }
}

#[test]
fn test_flanks_face_away_from_tooth_center() {
    for params in [scenario_a(), scenario_b()] {
        let mesh = generate(&params).unwrap();
        let da = 2.0 * std::f32::consts::PI / params.teeth as f32 / 4.0;
        let mut flanks = 0;
        for tri in mesh.triangles() {
            let slot = tri[0] as usize % VERTICES_PER_PITCH;
            if !matches!(slot, 14..=17 | 22..=25) {
                continue;
            }
            let pitch = tri[0] as usize / VERTICES_PER_PITCH;
            let center = pitch as f32 * 4.0 * da + 1.5 * da;
            let axis = Vector3::new(center.cos(), center.sin(), 0.0);

            let [p0, p1, p2] = tri.map(|i| mesh.position(i as usize).unwrap());
            let facing = (p1 - p0).cross(&(p2 - p0));
            let centroid = (p0.coords + p1.coords + p2.coords) / 3.0;
            let radial = Vector3::new(centroid.x, centroid.y, 0.0);
            let away = radial - axis * radial.dot(&axis);
            assert!(
                facing.dot(&away) > 0.0,
                "flank triangle {:?} faces into the tooth",
                tri
            );
            flanks += 1;
        }
        assert_eq!(flanks, 4 * (params.teeth as usize + 1));
    }
}

#[test]
fn test_cap_winding_agrees_with_stored_normals() {
    let mesh = generate(&scenario_a()).unwrap();
    for tri in mesh.triangles() {
        if tri[0] as usize % VERTICES_PER_PITCH >= 14 {
            continue;
        }
        let [p0, p1, p2] = tri.map(|i| mesh.position(i as usize).unwrap());
        let facing = (p1 - p0).cross(&(p2 - p0));
        let stored = mesh.normal(tri[0] as usize).unwrap();
        assert!(facing.dot(&stored) > 0.0);
    }
}

#[test]
fn test_unit_normals_option() {
    let params = scenario_b();
    let raw = generate(&params).unwrap();
    let unit = generate_with(&params, &GearOptions::default().with_unit_normals()).unwrap();

    assert_eq!(raw.positions, unit.positions);
    assert_eq!(raw.indices, unit.indices);
    for i in 0..unit.vertex_count() {
        assert_relative_eq!(unit.normal(i).unwrap().norm(), 1.0, epsilon = 1e-5);
        // same direction as the raw normal
        let r = raw.normal(i).unwrap().normalize();
        assert_relative_eq!(unit.normal(i).unwrap(), r, epsilon = 1e-5);
    }

    // raw side normals keep their length
    assert!(raw.normals.chunks_exact(3).any(|n| {
        let len = Vector3::new(n[0], n[1], n[2]).norm();
        (len - 1.0).abs() > 0.1
    }));
}

#[test]
fn test_parallel_generation() {
    let expected = generate(&scenario_b()).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| generate(&scenario_b()).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
