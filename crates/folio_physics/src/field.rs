use folio_core::{FieldConfig, Viewport};
use rand::Rng;

use crate::particle::{self, Particle};
use crate::surface::RenderSurface;

/// What one frame drew
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Pairs whose distance was evaluated
    pub pairs_checked: usize,
    /// Pairs close enough to be joined by a line
    pub connections: usize,
    /// Particles whose velocity flipped on at least one axis
    pub bounces: usize,
}

/// Fixed-size population of drifting points joined by proximity lines.
///
/// Motion is a fixed displacement per frame (no elapsed-time scaling), so
/// the apparent speed follows the host's refresh rate.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
    config: FieldConfig,
}

impl ParticleField {
    /// Empty field; call [`ParticleField::initialize`] to populate it
    pub fn new(config: FieldConfig, viewport: Viewport) -> Self {
        Self {
            particles: Vec::new(),
            viewport,
            config,
        }
    }

    /// Field populated with `config.particle_count` particles
    pub fn populated(config: FieldConfig, viewport: Viewport, rng: &mut impl Rng) -> Self {
        let count = config.particle_count;
        let mut field = Self::new(config, viewport);
        field.initialize(count, rng);
        field
    }

    /// Build a field from explicit particles
    pub fn from_particles(config: FieldConfig, viewport: Viewport, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            viewport,
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Store new bounds and resize the surface. Existing particles stay
    /// where they are; only later `initialize` calls use the new bounds.
    pub fn resize(&mut self, viewport: Viewport, surface: &mut impl RenderSurface) {
        self.set_viewport(viewport);
        surface.set_size(viewport);
    }

    /// Bounds only, for hosts whose surface is sized elsewhere
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Replace the whole population with `count` fresh particles
    pub fn initialize(&mut self, count: usize, rng: &mut impl Rng) {
        self.particles = particle::scatter(count, self.viewport, &self.config, rng);
    }

    /// Move, bounce and draw every particle, then the proximity lines.
    ///
    /// The wall check looks at the position after the move, so a particle
    /// can be drawn one frame outside the viewport before it turns back.
    /// Connections for particle `i` are drawn right after `i` moves, which
    /// means partners later in the list are still at last frame's position.
    pub fn advance_frame(&mut self, surface: &mut impl RenderSurface) -> FrameStats {
        surface.clear();

        let width = self.viewport.width_f32();
        let height = self.viewport.height_f32();
        let threshold = self.config.connection_distance;
        let mut stats = FrameStats::default();

        for i in 0..self.particles.len() {
            let p = &mut self.particles[i];
            p.position[0] += p.velocity[0];
            p.position[1] += p.velocity[1];

            let mut bounced = false;
            if p.position[0] < 0.0 || p.position[0] > width {
                p.velocity[0] = -p.velocity[0];
                bounced = true;
            }
            if p.position[1] < 0.0 || p.position[1] > height {
                p.velocity[1] = -p.velocity[1];
                bounced = true;
            }
            if bounced {
                stats.bounces += 1;
            }

            surface.fill_circle(p.position, p.radius, self.config.fill);

            let p = self.particles[i];
            for other in &self.particles[i + 1..] {
                stats.pairs_checked += 1;
                let distance = p.distance_to(other);
                if distance < threshold {
                    let alpha = 1.0 - distance / threshold;
                    surface.stroke_line(
                        p.position,
                        other.position,
                        self.config.stroke.with_alpha(alpha),
                        self.config.stroke_width,
                    );
                    stats.connections += 1;
                }
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DrawList;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn still(x: f32, y: f32) -> Particle {
        Particle::new([x, y], [0.0, 0.0], 2.0)
    }

    fn field_of(particles: Vec<Particle>) -> ParticleField {
        ParticleField::from_particles(FieldConfig::default(), Viewport::new(1000, 800), particles)
    }

    #[test]
    fn test_population_conserved() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut field =
            ParticleField::populated(FieldConfig::default(), Viewport::new(640, 480), &mut rng);
        let mut list = DrawList::default();
        for _ in 0..500 {
            field.advance_frame(&mut list);
            assert_eq!(field.len(), 100);
        }
        assert_eq!(list.circles().count(), 100);
    }

    #[test]
    fn test_initialize_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut field = ParticleField::new(FieldConfig::default(), Viewport::new(300, 200));
        field.initialize(3, &mut rng);
        assert_eq!(field.len(), 3);
        for p in field.particles() {
            assert!(p.position[0] >= 0.0 && p.position[0] < 300.0);
            assert!(p.position[1] >= 0.0 && p.position[1] < 200.0);
        }
    }

    #[test]
    fn test_in_bounds_step_moves_by_velocity() {
        let mut field = field_of(vec![
            Particle::new([100.0, 100.0], [0.2, -0.1], 1.5),
            Particle::new([500.0, 400.0], [-0.25, 0.25], 2.5),
            Particle::new([900.0, 700.0], [0.0, 0.1], 1.0),
        ]);
        let before = field.particles().to_vec();
        let stats = field.advance_frame(&mut DrawList::default());

        assert_eq!(stats.bounces, 0);
        for (b, a) in before.iter().zip(field.particles()) {
            assert!((a.position[0] - (b.position[0] + b.velocity[0])).abs() < 1e-4);
            assert!((a.position[1] - (b.position[1] + b.velocity[1])).abs() < 1e-4);
            assert_eq!(a.velocity, b.velocity);
            assert_eq!(a.radius, b.radius);
        }
    }

    #[test]
    fn test_bounce_after_leaving_right_wall() {
        let mut field = field_of(vec![Particle::new([999.9, 400.0], [0.5, 0.0], 1.0)]);
        let stats = field.advance_frame(&mut DrawList::default());

        let p = field.particles()[0];
        assert!((p.position[0] - 1000.4).abs() < 1e-3);
        assert_eq!(p.velocity[0], -0.5);
        assert_eq!(p.velocity[1], 0.0);
        assert_eq!(stats.bounces, 1);

        // Next frame heads back inside without flipping again
        field.advance_frame(&mut DrawList::default());
        let p = field.particles()[0];
        assert!((p.position[0] - 999.9).abs() < 1e-3);
        assert_eq!(p.velocity[0], -0.5);
    }

    #[test]
    fn test_axes_bounce_independently() {
        let mut field = field_of(vec![Particle::new([500.0, 0.1], [0.2, -0.3], 1.0)]);
        field.advance_frame(&mut DrawList::default());
        let p = field.particles()[0];
        assert_eq!(p.velocity, [0.2, 0.3]);
    }

    #[test]
    fn test_edge_is_inside() {
        let mut field = field_of(vec![Particle::new([999.5, 0.5], [0.5, -0.5], 1.0)]);
        field.advance_frame(&mut DrawList::default());
        // Exactly on the walls counts as inside
        assert_eq!(field.particles()[0].velocity, [0.5, -0.5]);
    }

    #[test]
    fn test_velocity_flip_property() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let viewport = Viewport::new(120, 90);
        let mut field = ParticleField::populated(FieldConfig::default(), viewport, &mut rng);
        let mut list = DrawList::default();

        for _ in 0..2_000 {
            let before = field.particles().to_vec();
            field.advance_frame(&mut list);
            for (b, a) in before.iter().zip(field.particles()) {
                let out_x = a.position[0] < 0.0 || a.position[0] > 120.0;
                let out_y = a.position[1] < 0.0 || a.position[1] > 90.0;
                let vx = if out_x { -b.velocity[0] } else { b.velocity[0] };
                let vy = if out_y { -b.velocity[1] } else { b.velocity[1] };
                assert_eq!(a.velocity, [vx, vy]);
            }
        }
    }

    #[test]
    fn test_connection_opacity_below_threshold() {
        let mut field = field_of(vec![still(100.0, 100.0), still(249.0, 100.0)]);
        let mut list = DrawList::default();
        let stats = field.advance_frame(&mut list);

        assert_eq!(stats.connections, 1);
        let (from, to, color, width) = list.lines().next().unwrap();
        assert_eq!(*from, [100.0, 100.0]);
        assert_eq!(*to, [249.0, 100.0]);
        assert!((color.a - 1.0 / 150.0).abs() < 1e-4, "alpha = {}", color.a);
        assert_eq!(width, 0.5);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut field = field_of(vec![still(100.0, 100.0), still(250.0, 100.0)]);
        let mut list = DrawList::default();
        let stats = field.advance_frame(&mut list);
        assert_eq!(stats.connections, 0);
        assert_eq!(list.line_count(), 0);
    }

    #[test]
    fn test_coincident_pair_full_opacity() {
        let mut field = field_of(vec![still(10.0, 10.0), still(10.0, 10.0)]);
        let mut list = DrawList::default();
        field.advance_frame(&mut list);
        let (_, _, color, _) = list.lines().next().unwrap();
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_each_pair_once() {
        // All five within reach of each other
        let particles = (0..5).map(|i| still(100.0 + i as f32 * 10.0, 100.0)).collect();
        let mut field = field_of(particles);
        let mut list = DrawList::default();
        let stats = field.advance_frame(&mut list);

        assert_eq!(stats.pairs_checked, 10);
        assert_eq!(stats.connections, 10);

        let mut seen = std::collections::HashSet::new();
        for (from, to, _, _) in list.lines() {
            assert_ne!(from, to, "self pair drawn");
            let key = (from[0] as i32, to[0] as i32);
            assert!(key.0 < key.1, "pair drawn out of order");
            assert!(seen.insert(key), "pair drawn twice");
        }
    }

    #[test]
    fn test_full_population_pair_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut field =
            ParticleField::populated(FieldConfig::default(), Viewport::new(1920, 1080), &mut rng);
        let stats = field.advance_frame(&mut DrawList::default());
        assert_eq!(stats.pairs_checked, 4_950);
    }

    #[test]
    fn test_later_partner_uses_previous_position() {
        let mut field = field_of(vec![
            still(100.0, 100.0),
            Particle::new([200.0, 100.0], [1.0, 0.0], 1.0),
        ]);
        let mut list = DrawList::default();
        field.advance_frame(&mut list);
        let (_, to, _, _) = list.lines().next().unwrap();
        assert_eq!(*to, [200.0, 100.0]);
        assert_eq!(field.particles()[1].position, [201.0, 100.0]);
    }

    #[test]
    fn test_resize_idempotent_and_keeps_particles() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut field =
            ParticleField::populated(FieldConfig::default(), Viewport::new(800, 600), &mut rng);
        let before = field.particles().to_vec();
        let mut list = DrawList::default();

        field.resize(Viewport::new(400, 300), &mut list);
        let once = field.viewport();
        field.resize(Viewport::new(400, 300), &mut list);

        assert_eq!(field.viewport(), once);
        assert_eq!(list.size, Viewport::new(400, 300));
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn test_initialize_after_resize_uses_new_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut field = ParticleField::new(FieldConfig::default(), Viewport::new(2000, 2000));
        field.resize(Viewport::new(50, 40), &mut DrawList::default());
        field.initialize(200, &mut rng);
        assert!(field
            .particles()
            .iter()
            .all(|p| p.position[0] < 50.0 && p.position[1] < 40.0));
    }

    #[test]
    fn test_empty_field_only_clears() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut field = ParticleField::new(FieldConfig::default(), Viewport::new(100, 100));
        field.initialize(0, &mut rng);
        let mut list = DrawList::default();
        let stats = field.advance_frame(&mut list);
        assert_eq!(stats, FrameStats::default());
        assert!(list.commands.is_empty());
        assert_eq!(list.clears, 1);
    }

    #[test]
    fn test_zero_viewport_degenerate() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut field = ParticleField::new(FieldConfig::default(), Viewport::new(0, 0));
        field.initialize(4, &mut rng);
        let stats = field.advance_frame(&mut DrawList::default());
        assert_eq!(field.len(), 4);
        // All start at the origin, so every pair coincides
        assert_eq!(stats.connections, 6);
    }

    #[test]
    fn test_custom_style() {
        let config = FieldConfig {
            connection_distance: 10.0,
            stroke_width: 2.0,
            fill: folio_core::Rgba::new(255, 0, 0, 0.8),
            ..FieldConfig::default()
        };
        let mut field = ParticleField::from_particles(
            config,
            Viewport::new(100, 100),
            vec![still(10.0, 10.0), still(15.0, 10.0), still(40.0, 10.0)],
        );
        let mut list = DrawList::default();
        let stats = field.advance_frame(&mut list);
        assert_eq!(stats.connections, 1);
        let (_, _, color, width) = list.lines().next().unwrap();
        assert!((color.a - 0.5).abs() < 1e-6);
        assert_eq!(width, 2.0);
        assert!(list.circles().all(|(_, _, c)| c.r == 255 && c.a == 0.8));
    }
}
