// The particle field: bounds, the particle vec, and the shared pointer
// state. Owns the per-frame step; drawing lives in the renderer.

use crate::config::field as cfg;
use crate::particle::Particle;
use crate::pointer::Pointer;

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Pointer,
}

impl ParticleField {
    pub fn new() -> ParticleField {
        ParticleField {
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            pointer: Pointer::offscreen(),
        }
    }

    /// Particle budget for a viewport width: the full count, halved on
    /// small screens to keep the O(n^2) link pass cheap.
    pub fn target_count(width: f64) -> usize {
        if width < cfg::MOBILE_BREAKPOINT {
            cfg::PARTICLE_COUNT / 2
        } else {
            cfg::PARTICLE_COUNT
        }
    }

    /// Full respawn. Runs on load and on every viewport resize; no particle
    /// identity survives.
    pub fn reset(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        let count = Self::target_count(width);
        self.particles.reserve(count);
        let mut rng = rand::thread_rng();
        for _ in 0..count {
            self.particles.push(Particle::spawn(&mut rng, width, height));
        }
    }

    /// Advance every particle one frame against the current pointer.
    pub fn step(&mut self) {
        let pointer = self.pointer;
        for particle in &mut self.particles {
            particle.update(&pointer, self.width, self.height);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut Pointer {
        &mut self.pointer
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Opacity of a particle-to-particle link: zero at the connection distance,
/// rising linearly to the cap as the pair closes in.
pub fn link_alpha(dist: f64) -> f64 {
    if dist >= cfg::CONNECTION_DISTANCE {
        0.0
    } else {
        (1.0 - dist / cfg::CONNECTION_DISTANCE) * cfg::LINK_ALPHA_MAX
    }
}

/// Opacity of a particle-to-pointer link, same shape with a higher cap.
pub fn pointer_link_alpha(dist: f64) -> f64 {
    if dist >= cfg::POINTER_RADIUS {
        0.0
    } else {
        (1.0 - dist / cfg::POINTER_RADIUS) * cfg::POINTER_LINK_ALPHA_MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_hits_target_count_and_bounds() {
        let mut field = ParticleField::new();
        field.reset(1280.0, 720.0);
        assert_eq!(field.particles().len(), cfg::PARTICLE_COUNT);
        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 1280.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 720.0);
        }
    }

    #[test]
    fn narrow_viewport_halves_count() {
        let mut field = ParticleField::new();
        field.reset(600.0, 900.0);
        assert_eq!(field.particles().len(), cfg::PARTICLE_COUNT / 2);

        // Growing past the breakpoint restores the full budget.
        field.reset(900.0, 600.0);
        assert_eq!(field.particles().len(), cfg::PARTICLE_COUNT);
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(
            ParticleField::target_count(cfg::MOBILE_BREAKPOINT),
            cfg::PARTICLE_COUNT
        );
        assert_eq!(
            ParticleField::target_count(cfg::MOBILE_BREAKPOINT - 1.0),
            cfg::PARTICLE_COUNT / 2
        );
    }

    #[test]
    fn step_on_empty_field_is_a_no_op() {
        let mut field = ParticleField::new();
        field.step();
        assert!(field.particles().is_empty());
    }

    #[test]
    fn link_alpha_falls_off_linearly() {
        assert_eq!(link_alpha(cfg::CONNECTION_DISTANCE), 0.0);
        assert_eq!(link_alpha(cfg::CONNECTION_DISTANCE + 50.0), 0.0);
        assert!((link_alpha(0.0) - cfg::LINK_ALPHA_MAX).abs() < 1e-12);
        let half = link_alpha(cfg::CONNECTION_DISTANCE / 2.0);
        assert!((half - cfg::LINK_ALPHA_MAX / 2.0).abs() < 1e-12);
    }

    #[test]
    fn pointer_link_alpha_falls_off_linearly() {
        assert_eq!(pointer_link_alpha(cfg::POINTER_RADIUS), 0.0);
        assert!((pointer_link_alpha(0.0) - cfg::POINTER_LINK_ALPHA_MAX).abs() < 1e-12);
        let quarter = pointer_link_alpha(cfg::POINTER_RADIUS * 0.75);
        assert!((quarter - cfg::POINTER_LINK_ALPHA_MAX * 0.25).abs() < 1e-12);
    }

    #[test]
    fn pointer_state_is_shared_with_step() {
        let mut field = ParticleField::new();
        field.reset(1024.0, 768.0);
        field.pointer_mut().set(512.0, 384.0);
        assert_eq!(field.pointer().x, 512.0);
        field.step();
        for p in field.particles() {
            assert!(p.alpha >= 0.0 && p.alpha <= 1.0);
        }
    }
}
