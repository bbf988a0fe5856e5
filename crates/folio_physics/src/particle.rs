use folio_core::{FieldConfig, Viewport};
use rand::Rng;

/// One point of the background field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub radius: f32,
}

impl Particle {
    pub fn new(position: [f32; 2], velocity: [f32; 2], radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f32 {
        let dx = self.position[0] - other.position[0];
        let dy = self.position[1] - other.position[1];
        (dx * dx + dy * dy).sqrt()
    }
}

/// Scatter `count` particles uniformly over the viewport
pub fn scatter(
    count: usize,
    viewport: Viewport,
    config: &FieldConfig,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        particles.push(random_particle(viewport, config, rng));
    }
    particles
}

fn random_particle(viewport: Viewport, config: &FieldConfig, rng: &mut impl Rng) -> Particle {
    let position = [
        span(rng, 0.0, viewport.width_f32()),
        span(rng, 0.0, viewport.height_f32()),
    ];

    // (r - 0.5) * 2 * max_speed, i.e. (r - 0.5) * 0.5 at the default bound
    let velocity = [
        span(rng, -config.max_speed, config.max_speed),
        span(rng, -config.max_speed, config.max_speed),
    ];

    let radius = span(rng, config.radius_min, config.radius_max);

    Particle::new(position, velocity, radius)
}

/// Uniform in [lo, hi); collapses to `lo` for an empty range
fn span(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_scatter_ranges() {
        let config = FieldConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let particles = scatter(500, Viewport::new(1280, 720), &config, &mut rng);
        assert_eq!(particles.len(), 500);

        for p in &particles {
            assert!((0.0..1280.0).contains(&p.position[0]));
            assert!((0.0..720.0).contains(&p.position[1]));
            assert!((-0.25..0.25).contains(&p.velocity[0]));
            assert!((-0.25..0.25).contains(&p.velocity[1]));
            assert!((1.0..3.0).contains(&p.radius));
        }
    }

    #[test]
    fn test_zero_extent_pins_axis() {
        let config = FieldConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let particles = scatter(20, Viewport::new(0, 300), &config, &mut rng);
        assert!(particles.iter().all(|p| p.position[0] == 0.0));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = FieldConfig::default();
        let a = scatter(10, Viewport::new(800, 600), &config, &mut ChaCha8Rng::seed_from_u64(9));
        let b = scatter(10, Viewport::new(800, 600), &config, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_distance() {
        let a = Particle::new([0.0, 0.0], [0.0, 0.0], 1.0);
        let b = Particle::new([3.0, 4.0], [0.0, 0.0], 1.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
    }
}
