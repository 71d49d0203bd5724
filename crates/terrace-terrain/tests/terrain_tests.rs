//! Integration tests for terrace-terrain.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use terrace_math::{face_normal, Vec3};
use terrace_telemetry::{EventBus, EventKind, SharedVecSink};
use terrace_terrain::coloring::{colorize, BandedPalette, ColorBandingStrategy, HeightRange};
use terrace_terrain::diamond_square::{generate, DiamondSquare, OctaveReport};
use terrace_terrain::normals::{contributing_faces, degenerate_count, estimate_normals, normal_at};
use terrace_terrain::sampler::sample;
use terrace_terrain::{
    ColorMode, Domain, HeightFieldSynthesizer, HeightGrid, SeedRange, TerrainConfig,
};
use terrace_types::constants::{MAX_SEED, ROUGHNESS_DECAY, UNIT_TOLERANCE};
use terrace_types::{GridCoord, TerraceError};

fn rng(seed: u64) -> Pcg64Mcg {
    Pcg64Mcg::seed_from_u64(seed)
}

fn seeded_config(detail: u32, seed: u64) -> TerrainConfig {
    TerrainConfig {
        detail,
        seed: Some(seed),
        ..Default::default()
    }
}

fn normal_of(normals: &[f32], i: usize) -> Vec3 {
    Vec3::new(normals[i * 3], normals[i * 3 + 1], normals[i * 3 + 2])
}

// ─── Diamond-Square Tests ─────────────────────────────────────

#[test]
fn grid_is_square_with_expected_side() {
    for n in 1..=8 {
        let grid = generate(n, SeedRange::default(), &mut rng(n as u64)).unwrap();
        let side = (1usize << n) + 1;
        assert_eq!(grid.side(), side);
        assert_eq!(grid.cell_count(), side * side);
        assert_eq!(grid.detail(), n);
    }
}

#[test]
fn corners_are_the_first_four_draws_and_never_rewritten() {
    let range = SeedRange::new(0.0, 0.3);
    let grid = generate(6, range, &mut rng(42)).unwrap();

    let mut replay = rng(42);
    let expected: Vec<f32> = (0..4)
        .map(|_| range.low + replay.random::<f32>() * (range.high - range.low))
        .collect();

    let corners = grid.corners();
    for (got, want) in corners.iter().zip(&expected) {
        assert_eq!(got, want);
        assert!(range.contains(*got));
    }
}

#[test]
fn corners_stay_in_negative_seed_range() {
    let range = SeedRange::new(-2.0, -1.0);
    for seed in 0..20 {
        let grid = generate(3, range, &mut rng(seed)).unwrap();
        for c in grid.corners() {
            assert!(range.contains(c), "corner {c} outside {range:?}");
        }
    }
}

#[test]
fn every_non_corner_cell_is_written_once() {
    for n in 1..=7 {
        let generator = DiamondSquare::new(n, SeedRange::default()).unwrap();
        let mut written = 0;
        generator.generate_observed(&mut rng(1), |r| {
            written += r.square_cells + r.diamond_cells;
        });
        let side = generator.side();
        assert_eq!(written, side * side - 4, "n = {n}");
    }
}

#[test]
fn octave_half_steps_and_square_counts() {
    let generator = DiamondSquare::new(4, SeedRange::default()).unwrap();
    let mut reports: Vec<OctaveReport> = Vec::new();
    generator.generate_observed(&mut rng(3), |r| reports.push(*r));

    assert_eq!(reports.len(), 4);
    let half_steps: Vec<usize> = reports.iter().map(|r| r.half_step).collect();
    assert_eq!(half_steps, vec![8, 4, 2, 1]);
    let squares: Vec<usize> = reports.iter().map(|r| r.square_cells).collect();
    assert_eq!(squares, vec![1, 4, 16, 64]);
    assert_eq!(reports[0].diamond_cells, 4);
}

#[test]
fn roughness_and_range_decay_per_octave() {
    let generator = DiamondSquare::new(5, SeedRange::new(0.1, 0.5)).unwrap();
    let mut reports: Vec<OctaveReport> = Vec::new();
    let grid = generator.generate_observed(&mut rng(9), |r| reports.push(*r));

    let corner_mean = grid.corners().iter().sum::<f32>() / 4.0;
    assert!((reports[0].roughness - corner_mean).abs() < 1e-6);
    assert!((reports[0].upper - 0.5).abs() < 1e-6);

    for pair in reports.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!((a.roughness / ROUGHNESS_DECAY - b.roughness).abs() < 1e-6);
        assert!((a.upper / ROUGHNESS_DECAY - b.upper).abs() < 1e-6);
        assert!((a.lower / ROUGHNESS_DECAY - b.lower).abs() < 1e-6);
    }
}

#[test]
fn zero_width_seed_range_is_deterministic() {
    // Every draw is 0, so each cell is the neighbor mean plus roughness.
    let grid = generate(1, SeedRange::new(0.0, 0.0), &mut rng(5)).unwrap();
    assert_eq!(grid.corners(), [0.0; 4]);
    assert!(grid.heights().iter().all(|&h| h == 0.0));
}

#[test]
fn n1_center_and_edges_follow_the_recurrence() {
    // Constant seed range: corners = 1, roughness = 1, every draw = 1.
    let grid = generate(1, SeedRange::new(1.0, 1.0), &mut rng(0)).unwrap();
    // Square: mean(1,1,1,1) + 1 - 1 = 1.
    assert!((grid.get(1, 1) - 1.0).abs() < 1e-6);
    // Diamond at (0,1): neighbors (0,0), (0,2), (1,1) -> mean 1, + 1 - 1 = 1.
    assert!((grid.get(0, 1) - 1.0).abs() < 1e-6);
}

#[test]
fn same_seed_same_grid() {
    let a = generate(6, SeedRange::default(), &mut rng(77)).unwrap();
    let b = generate(6, SeedRange::default(), &mut rng(77)).unwrap();
    let c = generate(6, SeedRange::default(), &mut rng(78)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn invalid_detail_is_a_configuration_error() {
    for n in [0, 12, 40] {
        let err = DiamondSquare::new(n, SeedRange::default()).unwrap_err();
        assert!(matches!(err, TerraceError::Configuration(_)), "n = {n}");
    }
}

#[test]
fn inverted_seed_range_is_rejected() {
    let err = DiamondSquare::new(3, SeedRange::new(1.0, 0.0)).unwrap_err();
    assert!(matches!(err, TerraceError::Configuration(_)));
}

// ─── Sampler Tests ────────────────────────────────────────────

#[test]
fn n2_scenario_buffer_sizes() {
    let grid = generate(2, SeedRange::default(), &mut rng(2)).unwrap();
    let mesh = sample(&grid, &Domain::cube(0.5), 0.0);
    assert_eq!(mesh.vertex_count(), 25);
    assert_eq!(mesh.indices.len(), 96);
    assert_eq!(mesh.edges.len(), 192);
    assert!(mesh.validate().is_ok());
}

#[test]
fn triangle_count_is_twice_cells() {
    for n in 1..=6 {
        let grid = HeightGrid::zeros((1 << n) + 1).unwrap();
        let mesh = sample(&grid, &Domain::default(), 0.0);
        let div = 1usize << n;
        assert_eq!(mesh.triangle_count(), 2 * div * div);
        assert_eq!(mesh.edge_count(), 3 * mesh.triangle_count());
    }
}

#[test]
fn first_cell_triangles() {
    let mesh = sample(&HeightGrid::zeros(5).unwrap(), &Domain::default(), 0.0);
    assert_eq!(mesh.triangle(0), [0, 1, 5]);
    assert_eq!(mesh.triangle(1), [1, 6, 5]);
    assert_eq!(&mesh.edges[0..6], &[0, 1, 1, 5, 5, 0]);
}

#[test]
fn winding_is_counter_clockwise_from_above() {
    let mesh = sample(&HeightGrid::zeros(9).unwrap(), &Domain::default(), 0.0);
    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(t);
        let n = face_normal(
            mesh.position_vec3(a as usize),
            mesh.position_vec3(b as usize),
            mesh.position_vec3(c as usize),
        );
        assert!(n.z > 0.99, "triangle {t} faces {n:?}");
    }
}

#[test]
fn positions_span_the_domain() {
    let domain = Domain {
        min_x: -2.0,
        max_x: 2.0,
        min_y: 10.0,
        max_y: 11.0,
        min_z: 0.0,
        max_z: 1.0,
    };
    let grid = HeightGrid::filled(5, 0.5).unwrap();
    let mesh = sample(&grid, &domain, -0.25);

    assert_eq!(mesh.position(0), [-2.0, 10.0, 0.25]);
    assert_eq!(mesh.position(4), [2.0, 10.0, 0.25]);
    assert_eq!(mesh.position(24), [2.0, 11.0, 0.25]);
    // Row 1, column 2.
    let p = mesh.position_at(GridCoord::new(1, 2));
    assert!((p - Vec3::new(0.0, 10.25, 0.25)).length() < 1e-6);
}

#[test]
fn min_and_max_height_include_offset() {
    let grid = HeightGrid::from_fn(5, |row, col| row as f32 - col as f32).unwrap();
    let mesh = sample(&grid, &Domain::default(), 1.0);
    assert_eq!(mesh.max_height, 5.0);
    assert_eq!(mesh.min_height, -3.0);
    assert_eq!(mesh.height_offset, 1.0);
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn flat_grid_normals_point_up() {
    let domain = Domain {
        min_x: -3.0,
        max_x: 1.0,
        min_y: 0.0,
        max_y: 0.5,
        min_z: 0.0,
        max_z: 0.0,
    };
    let mesh = sample(&HeightGrid::filled(9, 0.25).unwrap(), &domain, 0.0);
    let normals = estimate_normals(&mesh);
    for i in 0..mesh.vertex_count() {
        let n = normal_of(&normals, i);
        assert!((n - Vec3::Z).length() < 1e-6, "vertex {i} normal {n:?}");
    }
}

#[test]
fn interior_normals_are_unit_length() {
    let grid = generate(6, SeedRange::default(), &mut rng(11)).unwrap();
    let mesh = sample(&grid, &Domain::default(), -0.3);
    let normals = estimate_normals(&mesh);
    let side = mesh.side;
    for row in 1..side - 1 {
        for col in 1..side - 1 {
            let n = normal_of(&normals, row * side + col);
            assert!(
                (n.length() - 1.0).abs() < UNIT_TOLERANCE,
                "({row}, {col}) length {}",
                n.length()
            );
        }
    }
}

#[test]
fn plane_normals_match_the_slope() {
    // z = 0.5 x on a unit-spaced grid.
    let domain = Domain {
        min_x: 0.0,
        max_x: 4.0,
        min_y: 0.0,
        max_y: 4.0,
        min_z: 0.0,
        max_z: 2.0,
    };
    let grid = HeightGrid::from_fn(5, |_, col| 0.5 * col as f32).unwrap();
    let mesh = sample(&grid, &domain, 0.0);
    let expected = Vec3::new(-0.5, 0.0, 1.0).normalize();
    for row in 0..5 {
        for col in 0..5 {
            let n = normal_at(&mesh, GridCoord::new(row, col)).unwrap();
            assert!((n - expected).length() < 1e-5, "({row}, {col}) {n:?}");
        }
    }
}

#[test]
fn n1_corner_contributions() {
    let grid = generate(1, SeedRange::default(), &mut rng(4)).unwrap();
    let mesh = sample(&grid, &Domain::default(), 0.0);
    let faces = |row, col| contributing_faces(&mesh, GridCoord::new(row, col)).unwrap();

    assert_eq!(faces(0, 0), 1);
    assert_eq!(faces(2, 2), 1);
    assert_eq!(faces(0, 2), 2);
    assert_eq!(faces(2, 0), 2);
    assert_eq!(faces(1, 1), 6);
    assert_eq!(faces(0, 1), 3);

    let normals = estimate_normals(&mesh);
    assert_eq!(normals.len(), 27);
    assert!(normals.iter().all(|v| v.is_finite()));
}

#[test]
fn face_counts_match_incident_triangles() {
    let mesh = sample(&HeightGrid::zeros(9).unwrap(), &Domain::default(), 0.0);
    let mut incident = vec![0usize; mesh.vertex_count()];
    for &v in &mesh.indices {
        incident[v as usize] += 1;
    }
    for (i, &count) in incident.iter().enumerate() {
        let coord = GridCoord::from_linear(i, mesh.side);
        assert_eq!(contributing_faces(&mesh, coord).unwrap(), count, "vertex {i}");
    }
}

#[test]
fn collapsed_domain_yields_zero_normals_not_nan() {
    let collapsed = Domain {
        min_x: 0.0,
        max_x: 0.0,
        min_y: 0.0,
        max_y: 0.0,
        min_z: 0.0,
        max_z: 0.0,
    };
    let mesh = sample(&HeightGrid::zeros(5).unwrap(), &collapsed, 0.0);
    let normals = estimate_normals(&mesh);
    assert!(normals.iter().all(|&v| v == 0.0));
    assert_eq!(degenerate_count(&normals), 25);
}

#[test]
fn normal_at_out_of_bounds() {
    let mesh = sample(&HeightGrid::zeros(3).unwrap(), &Domain::default(), 0.0);
    let err = normal_at(&mesh, GridCoord::new(3, 0)).unwrap_err();
    assert!(matches!(err, TerraceError::IndexOutOfBounds { side: 3, .. }));
}

// ─── Coloring Tests ───────────────────────────────────────────

#[test]
fn colorize_fills_every_vertex() {
    let grid = generate(4, SeedRange::default(), &mut rng(6)).unwrap();
    let mesh = sample(&grid, &Domain::default(), -0.3);
    for mode in ColorMode::all() {
        let colors = colorize(&mesh, mode.strategy().as_ref());
        assert_eq!(colors.len(), mesh.positions.len());
        assert!(colors.iter().all(|c| (0.0..=1.0).contains(c)), "{mode}");
    }
}

#[test]
fn highest_vertex_is_snow() {
    let grid = HeightGrid::from_fn(5, |row, _| row as f32).unwrap();
    let mesh = sample(&grid, &Domain::default(), -0.3);
    let colors = colorize(&mesh, &BandedPalette);
    let top = 24 * 3;
    assert_eq!(&colors[top..top + 3], &[1.0, 1.0, 1.0]);
}

#[test]
fn linear_gradient_endpoints() {
    let range = HeightRange {
        min: -1.0,
        max: 3.0,
        offset: 0.0,
    };
    let strategy = ColorMode::Linear.strategy();
    assert_eq!(strategy.color(3.0, &range), [0.0, 0.8, 0.0]);
    assert_eq!(strategy.color(-1.0, &range), [0.5, 1.0, 0.8]);
}

#[test]
fn trig_palette_at_zero() {
    let range = HeightRange {
        min: 0.0,
        max: 1.0,
        offset: 0.0,
    };
    let c = ColorMode::Trig.strategy().color(0.0, &range);
    assert!((c[0]).abs() < 1e-6);
    assert!((c[1]).abs() < 1e-6);
    assert!((c[2] - 1.0).abs() < 1e-6);
}

#[test]
fn color_mode_parsing() {
    assert_eq!("linear".parse::<ColorMode>().unwrap(), ColorMode::Linear);
    assert_eq!(ColorMode::Trig.to_string(), "trig");
    assert!("sepia".parse::<ColorMode>().is_err());
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn default_config_is_valid() {
    let config = TerrainConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.detail, 9);
    assert_eq!(config.side(), 513);
    assert!((config.height_offset + 0.3).abs() < 1e-6);
    assert!(TerrainConfig::preview().validate().is_ok());
    assert!(TerrainConfig::high_detail().validate().is_ok());
}

#[test]
fn config_rejects_bad_values() {
    let bad = [
        TerrainConfig {
            detail: 0,
            ..Default::default()
        },
        TerrainConfig {
            height_offset: f32::NAN,
            ..Default::default()
        },
        TerrainConfig {
            domain: Domain {
                min_x: 1.0,
                max_x: -1.0,
                ..Domain::default()
            },
            ..Default::default()
        },
        TerrainConfig {
            domain: Domain {
                max_y: f32::INFINITY,
                ..Domain::default()
            },
            ..Default::default()
        },
    ];
    for config in bad {
        assert!(matches!(
            config.validate(),
            Err(TerraceError::Configuration(_))
        ));
    }
}

#[test]
fn config_toml_round_trip() {
    let config = TerrainConfig {
        detail: 4,
        seed: Some(1234),
        color_mode: ColorMode::Trig,
        ..Default::default()
    };
    let text = config.to_toml_string().unwrap();
    let parsed = TerrainConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_toml_uses_defaults() {
    let config = TerrainConfig::from_toml_str(
        r#"
        detail = 3
        color_mode = "linear"

        [seed_range]
        low = -0.1
        high = 0.1
        "#,
    )
    .unwrap();
    assert_eq!(config.detail, 3);
    assert_eq!(config.color_mode, ColorMode::Linear);
    assert_eq!(config.domain, Domain::default());
    assert_eq!(config.seed, None);
}

#[test]
fn seeds_beyond_toml_integers_are_rejected() {
    let config = TerrainConfig {
        seed: Some(MAX_SEED + 1),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(TerraceError::Configuration(_))
    ));
    let max = TerrainConfig {
        seed: Some(MAX_SEED),
        ..Default::default()
    };
    let parsed = TerrainConfig::from_toml_str(&max.to_toml_string().unwrap()).unwrap();
    assert_eq!(parsed.seed, Some(MAX_SEED));
}

#[test]
fn drawn_seed_replays_through_toml() {
    for _ in 0..32 {
        let mut synth = HeightFieldSynthesizer::new(TerrainConfig {
            detail: 2,
            ..Default::default()
        })
        .unwrap();
        let first = synth.synthesize().unwrap().clone();
        let seed = first.seed.unwrap();
        assert!(seed <= MAX_SEED);

        let replay_config = TerrainConfig {
            seed: Some(seed),
            ..synth.config().clone()
        };
        let text = replay_config.to_toml_string().unwrap();
        let parsed = TerrainConfig::from_toml_str(&text).unwrap();
        let mut replay = HeightFieldSynthesizer::new(parsed).unwrap();
        assert_eq!(replay.synthesize().unwrap().grid, first.grid);
    }
}

#[test]
fn invalid_toml_is_reported() {
    let err = TerrainConfig::from_toml_str("detail = \"nine\"").unwrap_err();
    assert!(matches!(err, TerraceError::Serialization(_)));
    let err = TerrainConfig::from_toml_str("detail = 0").unwrap_err();
    assert!(matches!(err, TerraceError::Configuration(_)));
}

// ─── Synthesizer Tests ────────────────────────────────────────

#[test]
fn queries_before_synthesis_are_not_ready() {
    let synth = HeightFieldSynthesizer::new(seeded_config(3, 1)).unwrap();
    assert!(!synth.is_ready());
    assert!(matches!(synth.vertex(0, 0), Err(TerraceError::NotReady(_))));
    assert!(matches!(synth.normal_at(0, 0), Err(TerraceError::NotReady(_))));
    assert!(matches!(synth.grid(), Err(TerraceError::NotReady(_))));
    assert!(matches!(synth.buffers(), Err(TerraceError::NotReady(_))));
}

#[test]
fn invalid_config_fails_before_generation() {
    let config = TerrainConfig {
        detail: 0,
        ..Default::default()
    };
    assert!(matches!(
        HeightFieldSynthesizer::new(config),
        Err(TerraceError::Configuration(_))
    ));
}

#[test]
fn synthesize_produces_consistent_buffers() {
    let mut synth = HeightFieldSynthesizer::new(seeded_config(5, 99)).unwrap();
    let terrain = synth.synthesize().unwrap();
    let side = 33;
    assert_eq!(terrain.side(), side);
    assert_eq!(terrain.seed, Some(99));
    assert_eq!(terrain.buffers.vertex_count(), side * side);
    assert_eq!(terrain.buffers.normals.len(), side * side * 3);
    assert_eq!(terrain.buffers.colors.len(), side * side * 3);
    assert!(terrain.mesh().validate().is_ok());

    assert!(synth.is_ready());
    let v = synth.vertex(3, 7).unwrap();
    let n = synth.normal_at(3, 7).unwrap();
    assert_eq!(v.normal, n.to_array());
    let grid_h = synth.grid().unwrap().get(3, 7);
    assert!((synth.height_at(3, 7).unwrap() - (grid_h - 0.3)).abs() < 1e-6);
}

#[test]
fn synthesized_colors_use_the_banded_palette() {
    let mut synth = HeightFieldSynthesizer::new(seeded_config(3, 8)).unwrap();
    assert_eq!(synth.color_strategy_name(), "banded");
    let terrain = synth.synthesize().unwrap();
    let range = HeightRange::of(terrain.mesh());
    let v = terrain.buffers.vertex(10);
    assert_eq!(v.color, BandedPalette.color(v.position[2], &range));
}

#[test]
fn seeded_synthesis_is_reproducible() {
    let mut a = HeightFieldSynthesizer::new(seeded_config(6, 2024)).unwrap();
    let mut b = HeightFieldSynthesizer::new(seeded_config(6, 2024)).unwrap();
    let ga = a.synthesize().unwrap().grid.clone();
    let gb = b.synthesize().unwrap().grid.clone();
    assert_eq!(ga, gb);
}

#[test]
fn synthesize_with_rng_records_no_seed() {
    let mut synth = HeightFieldSynthesizer::new(seeded_config(2, 0)).unwrap();
    let terrain = synth.synthesize_with_rng(&mut rng(5)).unwrap();
    assert_eq!(terrain.seed, None);
}

#[test]
fn out_of_bounds_query_after_synthesis() {
    let mut synth = HeightFieldSynthesizer::new(seeded_config(2, 3)).unwrap();
    synth.synthesize().unwrap();
    assert!(matches!(
        synth.vertex(5, 0),
        Err(TerraceError::IndexOutOfBounds { row: 5, col: 0, side: 5 })
    ));
}

#[test]
fn take_terrain_leaves_synthesizer_not_ready() {
    let mut synth = HeightFieldSynthesizer::new(seeded_config(2, 3)).unwrap();
    synth.synthesize().unwrap();
    let terrain = synth.take_terrain().unwrap();
    assert_eq!(terrain.side(), 5);
    assert!(!synth.is_ready());
}

#[test]
fn resample_reuses_a_grid() {
    let grid = HeightGrid::filled(9, 0.3).unwrap();
    let mut synth = HeightFieldSynthesizer::new(TerrainConfig::preview()).unwrap();
    let terrain = synth.resample(grid.clone()).unwrap();
    assert_eq!(terrain.grid, grid);
    assert_eq!(terrain.seed, None);
    assert_eq!(synth.config().detail, 3);
    assert_eq!(synth.normal_at(4, 4).unwrap(), Vec3::Z);
}

#[test]
fn custom_color_strategy_overrides_mode() {
    struct Gray;
    impl ColorBandingStrategy for Gray {
        fn color(&self, _height: f32, _range: &HeightRange) -> [f32; 3] {
            [0.5; 3]
        }
        fn name(&self) -> &'static str {
            "gray"
        }
    }
    let mut synth = HeightFieldSynthesizer::new(seeded_config(2, 1))
        .unwrap()
        .with_color_strategy(Box::new(Gray));
    let terrain = synth.synthesize().unwrap();
    assert!(terrain.buffers.colors.iter().all(|&c| c == 0.5));
}

#[test]
fn telemetry_reports_each_stage() {
    let sink = SharedVecSink::new();
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(sink.clone()));

    let mut synth = HeightFieldSynthesizer::new(seeded_config(3, 12))
        .unwrap()
        .with_telemetry(bus);
    synth.synthesize().unwrap();
    synth.telemetry_mut().unwrap().flush();

    let events = sink.events();
    assert_eq!(events.len(), 1 + 3 + 3);
    assert!(matches!(
        events[0].kind,
        EventKind::GenerationBegin { detail: 3, side: 9, seed: Some(12) }
    ));
    let octaves = events
        .iter()
        .filter(|e| matches!(e.kind, EventKind::OctaveComplete { .. }))
        .count();
    assert_eq!(octaves, 3);
    assert!(matches!(events[4].kind, EventKind::MeshSampled { vertex_count: 81, .. }));
    assert!(matches!(
        events[5].kind,
        EventKind::NormalsEstimated { degenerate_count: 0, .. }
    ));
    assert!(matches!(events[6].kind, EventKind::SynthesisComplete { .. }));
    assert!(events.iter().all(|e| e.run == 0));

    synth.synthesize().unwrap();
    synth.telemetry_mut().unwrap().flush();
    assert!(sink.events().iter().skip(7).all(|e| e.run == 1));
}
