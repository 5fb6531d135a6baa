//! Particle field animation state.

use std::time::{SystemTime, UNIX_EPOCH};

use folio_core::{FieldParams, Range, Vec2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::color::hue_rotate;
use crate::surface::Surface;

/// A single background dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current position in surface pixels.
    pub position: Vec2,
    /// Per-frame displacement, fixed at spawn.
    pub velocity: Vec2,
    /// Circle radius in pixels.
    pub radius: f32,
    /// Fill alpha.
    pub opacity: f32,
}

impl Particle {
    /// Spawn a particle at a random position inside `width` x `height`.
    fn spawn(rng: &mut SmallRng, params: &FieldParams, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(coordinate(rng, width), coordinate(rng, height)),
            velocity: Vec2::new(speed(rng, params.max_speed), speed(rng, params.max_speed)),
            radius: sample(rng, params.radius),
            opacity: sample(rng, params.opacity),
        }
    }
}

/// Uniform coordinate in `[0, extent)`, or 0 for an empty extent.
fn coordinate(rng: &mut SmallRng, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

fn speed(rng: &mut SmallRng, max: f32) -> f32 {
    if max > 0.0 {
        rng.gen_range(-max..=max)
    } else {
        0.0
    }
}

fn sample(rng: &mut SmallRng, range: Range) -> f32 {
    if range.span() > 0.0 {
        rng.gen_range(range.min..range.max)
    } else {
        range.min
    }
}

fn in_bounds(position: Vec2, width: f32, height: f32) -> bool {
    (0.0..width).contains(&position.x) && (0.0..height).contains(&position.y)
}

/// Background particle animator.
///
/// Owns the particle pool and the surface it draws on. The host calls
/// [`resize`](Self::resize) on viewport changes and [`tick`](Self::tick)
/// once per frame.
#[derive(Debug)]
pub struct ParticleField<S> {
    /// Tunable spawn parameters.
    params: FieldParams,
    /// Particle pool, fixed size after initialization.
    particles: Vec<Particle>,
    /// Drawing surface.
    surface: S,
    /// Random source for spawning.
    rng: SmallRng,
    /// Hue rotation in degrees applied when drawing.
    hue_rotation: f32,
    /// Whether the pool has been created.
    initialized: bool,
}

impl<S: Surface> ParticleField<S> {
    /// Create an empty field drawing onto `surface`.
    pub fn new(params: FieldParams, surface: S) -> Self {
        // Capture system time as seed unless a fixed one is configured
        let seed = params.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });

        Self {
            params,
            particles: Vec::new(),
            surface,
            rng: SmallRng::seed_from_u64(seed),
            hue_rotation: 0.0,
            initialized: false,
        }
    }

    /// Match the surface to the viewport size. Particles are left untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.surface.size() == (width, height) {
            return;
        }
        debug!(width, height, "resizing particle surface");
        self.surface.resize(width, height);
    }

    /// Create `count` particles. Only the first call has any effect.
    pub fn initialize(&mut self, count: usize) {
        if self.initialized {
            debug!("particle field already initialized");
            return;
        }
        let (width, height) = self.extent();
        self.particles = (0..count)
            .map(|_| Particle::spawn(&mut self.rng, &self.params, width, height))
            .collect();
        self.initialized = true;
        debug!(count, "particle field initialized");
    }

    /// Advance every particle one step and redraw the surface.
    pub fn tick(&mut self) {
        let (width, height) = self.extent();

        for particle in &mut self.particles {
            let next = particle.position + particle.velocity;
            if in_bounds(next, width, height) {
                particle.position = next;
            } else {
                *particle = Particle::spawn(&mut self.rng, &self.params, width, height);
            }
        }

        self.surface.clear();
        let color = hue_rotate(self.params.color, self.hue_rotation);
        for particle in &self.particles {
            self.surface
                .fill_circle(particle.position, particle.radius, color.with_alpha(particle.opacity));
        }
    }

    /// Set the hue rotation (degrees) used for subsequent draws.
    pub fn set_hue_rotation(&mut self, degrees: f32) {
        self.hue_rotation = degrees;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Current surface size in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.surface.size()
    }

    fn extent(&self) -> (f32, f32) {
        let (width, height) = self.surface.size();
        (width as f32, height as f32)
    }
}
