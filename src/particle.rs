// Single point mass of the background field: position, velocity, size,
// palette color, and a current/baseline alpha pair driven by pointer proximity

extern crate nalgebra_glm as glm;

use rand::Rng;

use crate::color::Color;
use crate::config::field as cfg;
use crate::pointer::Pointer;

pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub size: f64,
    pub color: Color,
    pub alpha: f64,
    pub base_alpha: f64,
}

impl Particle {
    /// Randomized spawn within the canvas bounds. Fully fungible: a resize
    /// throws every particle away and spawns fresh ones.
    pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * cfg::SPEED * 2.0;
        let vel_y = (rng.gen::<f64>() - 0.5) * cfg::SPEED * 2.0;
        let size = cfg::MIN_SIZE + rng.gen::<f64>() * (cfg::MAX_SIZE - cfg::MIN_SIZE);
        let color = cfg::PALETTE[rng.gen_range(0, cfg::PALETTE.len())];
        let alpha = 0.3 + rng.gen::<f64>() * 0.5;

        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            size,
            color,
            alpha,
            base_alpha: alpha,
        }
    }

    /// Advance one frame: pointer attraction, alpha dynamics, damping,
    /// integration, and toroidal wraparound at the canvas edges.
    pub fn update(&mut self, pointer: &Pointer, width: f64, height: f64) {
        let to_pointer = glm::vec2(pointer.x - self.pos[0], pointer.y - self.pos[1]);
        let dist = glm::length(&to_pointer);

        if dist < cfg::POINTER_RADIUS {
            let force = (cfg::POINTER_RADIUS - dist) / cfg::POINTER_RADIUS;
            // Direction is undefined at distance zero; skip the kick for
            // this frame but still apply the full alpha boost.
            if dist > 0.0 {
                let dir = glm::normalize(&to_pointer);
                self.vel[0] += dir.x * force * cfg::POINTER_FORCE;
                self.vel[1] += dir.y * force * cfg::POINTER_FORCE;
            }
            self.alpha = (self.base_alpha + force * 0.5).min(1.0);
        } else {
            self.alpha += (self.base_alpha - self.alpha) * cfg::ALPHA_RELAX;
        }

        self.vel[0] *= cfg::DAMPING;
        self.vel[1] *= cfg::DAMPING;

        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];

        // Wrap around edges, not bounce.
        if self.pos[0] < -cfg::WRAP_MARGIN {
            self.pos[0] = width + cfg::WRAP_MARGIN;
        }
        if self.pos[0] > width + cfg::WRAP_MARGIN {
            self.pos[0] = -cfg::WRAP_MARGIN;
        }
        if self.pos[1] < -cfg::WRAP_MARGIN {
            self.pos[1] = height + cfg::WRAP_MARGIN;
        }
        if self.pos[1] > height + cfg::WRAP_MARGIN {
            self.pos[1] = -cfg::WRAP_MARGIN;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 800.0;
    const H: f64 = 600.0;

    fn still_particle(x: f64, y: f64) -> Particle {
        Particle {
            pos: [x, y],
            vel: [0.0, 0.0],
            size: 1.5,
            color: cfg::PALETTE[0],
            alpha: 0.5,
            base_alpha: 0.5,
        }
    }

    #[test]
    fn spawn_lands_inside_bounds() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let p = Particle::spawn(&mut rng, W, H);
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= W);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= H);
            assert!(p.vel[0].abs() <= cfg::SPEED && p.vel[1].abs() <= cfg::SPEED);
            assert!(p.size >= cfg::MIN_SIZE && p.size <= cfg::MAX_SIZE);
            assert!(p.base_alpha >= 0.3 && p.base_alpha < 0.8);
            assert_eq!(p.alpha, p.base_alpha);
        }
    }

    #[test]
    fn pointer_inside_radius_attracts() {
        let mut p = still_particle(100.0, 100.0);
        let pointer = Pointer { x: 200.0, y: 100.0 };
        p.update(&pointer, W, H);
        assert!(p.vel[0] > 0.0, "velocity should point toward the pointer");
        assert_eq!(p.vel[1], 0.0);
        assert!(p.alpha > p.base_alpha);
    }

    #[test]
    fn pointer_outside_radius_relaxes_alpha() {
        let mut p = still_particle(100.0, 100.0);
        p.alpha = 1.0;
        let pointer = Pointer::offscreen();
        p.update(&pointer, W, H);
        assert!(p.alpha < 1.0);
        assert!(p.alpha > p.base_alpha);
        assert_eq!(p.vel, [0.0, 0.0]);
    }

    #[test]
    fn zero_distance_skips_force_but_brightens() {
        let mut p = still_particle(100.0, 100.0);
        let pointer = Pointer { x: 100.0, y: 100.0 };
        p.update(&pointer, W, H);
        assert_eq!(p.vel, [0.0, 0.0]);
        assert_eq!(p.alpha, 1.0f64.min(p.base_alpha + 0.5));
    }

    #[test]
    fn alpha_stays_in_unit_interval_over_many_frames() {
        let mut p = still_particle(100.0, 100.0);
        p.base_alpha = 0.79;
        let near = Pointer { x: 101.0, y: 100.0 };
        let away = Pointer::offscreen();
        for frame in 0..1000 {
            let pointer = if frame % 2 == 0 { near } else { away };
            p.update(&pointer, W, H);
            assert!(p.alpha >= 0.0 && p.alpha <= 1.0, "alpha {} out of range", p.alpha);
        }
    }

    #[test]
    fn wraps_across_every_edge() {
        let margin = cfg::WRAP_MARGIN;

        let mut p = still_particle(0.0, 100.0);
        p.pos[0] = -margin - 1.0;
        p.update(&Pointer::offscreen(), W, H);
        assert_eq!(p.pos[0], W + margin);

        let mut p = still_particle(0.0, 100.0);
        p.pos[0] = W + margin + 1.0;
        p.update(&Pointer::offscreen(), W, H);
        assert_eq!(p.pos[0], -margin);

        let mut p = still_particle(100.0, 0.0);
        p.pos[1] = -margin - 1.0;
        p.update(&Pointer::offscreen(), W, H);
        assert_eq!(p.pos[1], H + margin);

        let mut p = still_particle(100.0, 0.0);
        p.pos[1] = H + margin + 1.0;
        p.update(&Pointer::offscreen(), W, H);
        assert_eq!(p.pos[1], -margin);
    }

    #[test]
    fn position_stays_within_margin_over_many_frames() {
        let mut rng = rand::thread_rng();
        let mut particles: Vec<Particle> =
            (0..32).map(|_| Particle::spawn(&mut rng, W, H)).collect();
        let pointer = Pointer { x: 400.0, y: 300.0 };
        for _ in 0..500 {
            for p in &mut particles {
                p.update(&pointer, W, H);
                assert!(p.pos[0] >= -cfg::WRAP_MARGIN && p.pos[0] <= W + cfg::WRAP_MARGIN);
                assert!(p.pos[1] >= -cfg::WRAP_MARGIN && p.pos[1] <= H + cfg::WRAP_MARGIN);
            }
        }
    }

    #[test]
    fn damping_bleeds_velocity() {
        let mut p = still_particle(400.0, 300.0);
        p.vel = [10.0, -10.0];
        p.update(&Pointer::offscreen(), W, H);
        assert_eq!(p.vel, [10.0 * cfg::DAMPING, -10.0 * cfg::DAMPING]);
    }
}
