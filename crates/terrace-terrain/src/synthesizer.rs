//! Height-field synthesizer: runs the full pipeline and owns its output.
//!
//! ```text
//! generate (diamond-square) → sample (mesh) → estimate normals → colorize
//! ```
//!
//! Nothing derived from the grid can be queried until a run has completed;
//! such queries fail with `TerraceError::NotReady`.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use terrace_math::Vec3;
use terrace_telemetry::{EventBus, EventKind, SynthesisEvent};
use terrace_types::{GridCoord, TerraceError, TerraceResult};

use crate::coloring::{colorize, ColorBandingStrategy};
use crate::config::TerrainConfig;
use crate::diamond_square::DiamondSquare;
use crate::grid::HeightGrid;
use crate::mesh::{RenderBuffers, TerrainMesh, Vertex};
use crate::normals::{degenerate_count, estimate_normals};
use crate::sampler::sample;

/// A completed synthesis run.
#[derive(Debug, Clone)]
pub struct Terrain {
    /// The generated height grid.
    pub grid: HeightGrid,
    /// Mesh, normals and colors derived from the grid.
    pub buffers: RenderBuffers,
    /// Seed that produced the grid; `None` when a caller-supplied RNG
    /// or an existing grid was used.
    pub seed: Option<u64>,
}

impl Terrain {
    #[inline]
    pub fn mesh(&self) -> &TerrainMesh {
        &self.buffers.mesh
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.grid.side()
    }
}

/// Owns one terrain instance from configuration to render buffers.
pub struct HeightFieldSynthesizer {
    config: TerrainConfig,
    strategy: Box<dyn ColorBandingStrategy>,
    telemetry: Option<EventBus>,
    terrain: Option<Terrain>,
    runs: u32,
}

impl HeightFieldSynthesizer {
    /// Creates a synthesizer. The config is validated here, before any
    /// generation work.
    pub fn new(config: TerrainConfig) -> TerraceResult<Self> {
        config.validate()?;
        let strategy = config.color_mode.strategy();
        Ok(Self {
            config,
            strategy,
            telemetry: None,
            terrain: None,
            runs: 0,
        })
    }

    /// Attaches an event bus. Events are queued during each run; flush the
    /// bus through [`telemetry_mut`](Self::telemetry_mut).
    pub fn with_telemetry(mut self, bus: EventBus) -> Self {
        self.telemetry = Some(bus);
        self
    }

    /// Overrides the coloring strategy selected by `config.color_mode`.
    pub fn with_color_strategy(mut self, strategy: Box<dyn ColorBandingStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    pub fn telemetry_mut(&mut self) -> Option<&mut EventBus> {
        self.telemetry.as_mut()
    }

    /// Name of the active coloring strategy.
    pub fn color_strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Returns true once a run has completed.
    pub fn is_ready(&self) -> bool {
        self.terrain.is_some()
    }

    /// Runs the pipeline with a PCG64 generator seeded from `config.seed`,
    /// or from a freshly drawn seed when none is configured. Drawn seeds
    /// stay within `MAX_SEED` so they can be written back to a config.
    pub fn synthesize(&mut self) -> TerraceResult<&Terrain> {
        let seed = self
            .config
            .seed
            .unwrap_or_else(|| rand::rng().random::<u64>() >> 1);
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        self.run(&mut rng, Some(seed))
    }

    /// Runs the pipeline drawing from a caller-supplied generator.
    pub fn synthesize_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TerraceResult<&Terrain> {
        self.run(rng, None)
    }

    /// Rebuilds the derived buffers from an existing grid, skipping
    /// generation. `config.detail` is updated to match the grid.
    pub fn resample(&mut self, grid: HeightGrid) -> TerraceResult<&Terrain> {
        self.terrain = None;
        self.config.detail = grid.detail();
        self.config.validate()?;
        let run = self.next_run();
        let started = Instant::now();
        self.finish(run, started, grid, None)
    }

    fn run<R: Rng + ?Sized>(&mut self, rng: &mut R, seed: Option<u64>) -> TerraceResult<&Terrain> {
        self.terrain = None;
        let generator = DiamondSquare::new(self.config.detail, self.config.seed_range)?;
        let run = self.next_run();
        let started = Instant::now();

        self.emit(
            run,
            EventKind::GenerationBegin {
                detail: generator.detail(),
                side: generator.side(),
                seed,
            },
        );

        let bus = self.telemetry.as_ref();
        let grid = generator.generate_observed(rng, |report| {
            if let Some(bus) = bus {
                bus.emit(SynthesisEvent::new(
                    run,
                    EventKind::OctaveComplete {
                        step: report.step,
                        half_step: report.half_step,
                        roughness: report.roughness,
                        square_cells: report.square_cells,
                        diamond_cells: report.diamond_cells,
                    },
                ));
            }
        });

        self.finish(run, started, grid, seed)
    }

    fn finish(
        &mut self,
        run: u32,
        started: Instant,
        grid: HeightGrid,
        seed: Option<u64>,
    ) -> TerraceResult<&Terrain> {
        let mesh = sample(&grid, &self.config.domain, self.config.height_offset);
        self.emit(
            run,
            EventKind::MeshSampled {
                vertex_count: mesh.vertex_count(),
                triangle_count: mesh.triangle_count(),
                min_height: mesh.min_height,
                max_height: mesh.max_height,
            },
        );

        let normals = estimate_normals(&mesh);
        let degenerate = degenerate_count(&normals);
        self.emit(
            run,
            EventKind::NormalsEstimated {
                vertex_count: mesh.vertex_count(),
                degenerate_count: degenerate,
            },
        );
        if degenerate > 0 {
            tracing::warn!(degenerate, "vertices with zero-length normals");
        }

        let colors = colorize(&mesh, self.strategy.as_ref());

        let wall_time = started.elapsed().as_secs_f64();
        tracing::info!(
            run,
            side = grid.side(),
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            min_height = mesh.min_height,
            max_height = mesh.max_height,
            coloring = self.strategy.name(),
            wall_time,
            "terrain synthesized"
        );
        self.emit(run, EventKind::SynthesisComplete { wall_time });

        let terrain = Terrain {
            grid,
            buffers: RenderBuffers {
                mesh,
                normals,
                colors,
            },
            seed,
        };
        Ok(self.terrain.insert(terrain))
    }

    fn next_run(&mut self) -> u32 {
        let run = self.runs;
        self.runs += 1;
        run
    }

    fn emit(&self, run: u32, kind: EventKind) {
        if let Some(bus) = &self.telemetry {
            bus.emit(SynthesisEvent::new(run, kind));
        }
    }

    // --- Queries (fail with NotReady before the first completed run) ---

    /// The completed terrain.
    pub fn terrain(&self) -> TerraceResult<&Terrain> {
        self.terrain
            .as_ref()
            .ok_or_else(|| TerraceError::NotReady("terrain has not been synthesized".into()))
    }

    /// Takes ownership of the completed terrain, leaving the synthesizer
    /// not ready.
    pub fn take_terrain(&mut self) -> TerraceResult<Terrain> {
        self.terrain
            .take()
            .ok_or_else(|| TerraceError::NotReady("terrain has not been synthesized".into()))
    }

    pub fn grid(&self) -> TerraceResult<&HeightGrid> {
        Ok(&self.terrain()?.grid)
    }

    pub fn buffers(&self) -> TerraceResult<&RenderBuffers> {
        Ok(&self.terrain()?.buffers)
    }

    pub fn mesh(&self) -> TerraceResult<&TerrainMesh> {
        Ok(&self.terrain()?.buffers.mesh)
    }

    /// Every attribute of the vertex at `(row, col)`.
    pub fn vertex(&self, row: usize, col: usize) -> TerraceResult<Vertex> {
        let buffers = self.buffers()?;
        let coord = GridCoord::new(row, col).checked(buffers.mesh.side)?;
        Ok(buffers.vertex(coord.linear(buffers.mesh.side)))
    }

    /// Estimated normal at `(row, col)`.
    pub fn normal_at(&self, row: usize, col: usize) -> TerraceResult<Vec3> {
        let buffers = self.buffers()?;
        let coord = GridCoord::new(row, col).checked(buffers.mesh.side)?;
        Ok(buffers.normal_vec3(coord.linear(buffers.mesh.side)))
    }

    /// Height (offset applied) at `(row, col)`.
    pub fn height_at(&self, row: usize, col: usize) -> TerraceResult<f32> {
        Ok(self.vertex(row, col)?.position[2])
    }
}
