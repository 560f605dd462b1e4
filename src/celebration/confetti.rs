//! Confetti particle system drawn over the terminal buffer.

use derive_getters::Getters;
use derive_new::new;
use derive_setters::Setters;
use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const GLYPHS: [char; 5] = ['▪', '▬', '◆', '•', '▴'];

/// Horizontal velocity retained each tick.
const DRAG: f32 = 0.98;

/// Particles spawn up to this many rows above the field.
const SPAWN_DEPTH: f32 = 4.0;

/// Gravity never drops below this, so every particle eventually lands.
const MIN_GRAVITY: f32 = 0.001;

/// Where the confetti is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Positioning {
    /// Over the whole viewport.
    #[default]
    Fixed,
    /// Inside the game panel only.
    Absolute,
}

/// Confetti parameters.
#[derive(Debug, Clone, PartialEq, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct ConfettiConfig {
    /// Field width in cells.
    width: u16,
    /// Field height in cells.
    height: u16,
    /// Respawn particles at the top once they leave the field.
    recycle: bool,
    /// Particles in the initial burst.
    number_of_pieces: usize,
    /// Downward acceleration in cells per tick squared.
    gravity: f32,
    /// Palette particles pick from.
    colors: Vec<Color>,
    /// Drawing region.
    positioning: Positioning,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            recycle: false,
            number_of_pieces: 200,
            gravity: 0.03,
            colors: vec![Color::Red, Color::Yellow, Color::Green, Color::Cyan, Color::Magenta],
            positioning: Positioning::Fixed,
        }
    }
}

/// A single piece of confetti.
#[derive(Debug, Clone, Copy, PartialEq, Getters, new)]
pub struct Particle {
    /// Column, fractional.
    x: f32,
    /// Row, fractional. Negative rows are above the field.
    y: f32,
    /// Columns per tick.
    vx: f32,
    /// Rows per tick.
    vy: f32,
    /// Drawn glyph.
    glyph: char,
    /// Foreground color.
    color: Color,
}

impl Particle {
    fn spawn<R: Rng + ?Sized>(config: &ConfettiConfig, rng: &mut R) -> Self {
        let width = f32::from(config.width.max(1));
        let color = if config.colors.is_empty() {
            Color::White
        } else {
            config.colors[rng.random_range(0..config.colors.len())]
        };
        Self::new(
            rng.random_range(0.0..width),
            -rng.random_range(0.0..SPAWN_DEPTH),
            rng.random_range(-0.8..0.8),
            rng.random_range(-0.4..0.3),
            GLYPHS[rng.random_range(0..GLYPHS.len())],
            color,
        )
    }

    fn advance(&mut self, gravity: f32) {
        self.x += self.vx;
        self.y += self.vy;
        self.vx *= DRAG;
        self.vy += gravity;
    }

    fn is_outside(&self, width: u16, height: u16) -> bool {
        let height = f32::from(height);
        self.y >= height
            || self.y < -(height + SPAWN_DEPTH)
            || self.x < -1.0
            || self.x > f32::from(width) + 1.0
    }
}

/// A running confetti effect.
#[derive(Debug, Clone)]
pub struct Confetti {
    config: ConfettiConfig,
    particles: Vec<Particle>,
}

impl Confetti {
    /// Launches `number_of_pieces` particles from the top edge.
    #[instrument(skip_all, fields(pieces = config.number_of_pieces, width = config.width, height = config.height))]
    pub fn burst<R: Rng + ?Sized>(config: ConfettiConfig, rng: &mut R) -> Self {
        let particles = if config.width == 0 || config.height == 0 {
            Vec::new()
        } else {
            (0..config.number_of_pieces)
                .map(|_| Particle::spawn(&config, rng))
                .collect()
        };
        debug!(spawned = particles.len(), "Confetti burst");
        Self { config, particles }
    }

    /// Advances every particle one tick.
    ///
    /// Particles leaving the field are dropped, or respawned when recycling.
    #[instrument(level = "trace", skip_all)]
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Self { config, particles } = self;
        let gravity = config.gravity.max(MIN_GRAVITY);
        for particle in particles.iter_mut() {
            particle.advance(gravity);
            if config.recycle && particle.is_outside(config.width, config.height) {
                *particle = Particle::spawn(config, rng);
            }
        }
        if !config.recycle {
            particles.retain(|p| !p.is_outside(config.width, config.height));
        }
    }

    /// Adopts a new field size. Particles now outside fall away on the next step.
    #[instrument(skip(self))]
    pub fn resize(&mut self, width: u16, height: u16) {
        self.config.width = width;
        self.config.height = height;
    }

    /// True once every particle has left the field.
    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }

    /// Live particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Configuration the effect runs with.
    pub fn config(&self) -> &ConfettiConfig {
        &self.config
    }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for particle in &self.particles {
            if particle.x < 0.0 || particle.y < 0.0 {
                continue;
            }
            let (col, row) = (particle.x as u16, particle.y as u16);
            if col >= area.width || row >= area.height {
                continue;
            }
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_char(particle.glyph).set_fg(particle.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn field(width: u16, height: u16) -> ConfettiConfig {
        ConfettiConfig::default()
            .with_width(width)
            .with_height(height)
            .with_number_of_pieces(50)
    }

    #[test]
    fn test_burst_spawns_requested_pieces() {
        let mut rng = StdRng::seed_from_u64(1);
        let confetti = Confetti::burst(field(40, 20), &mut rng);
        assert_eq!(confetti.particles().len(), 50);
        assert!(confetti.particles().iter().all(|p| *p.y() <= 0.0));
    }

    #[test]
    fn test_empty_field_spawns_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Confetti::burst(field(0, 20), &mut rng).is_finished());
    }

    #[test]
    fn test_non_recycling_confetti_finishes() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut confetti = Confetti::burst(field(40, 10), &mut rng);
        for _ in 0..500 {
            confetti.step(&mut rng);
        }
        assert!(confetti.is_finished());
    }

    #[test]
    fn test_weightless_confetti_still_finishes() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut confetti = Confetti::burst(field(40, 10).with_gravity(0.0), &mut rng);
        for _ in 0..100_000 {
            confetti.step(&mut rng);
            if confetti.is_finished() {
                break;
            }
        }
        assert!(confetti.is_finished());
    }

    #[test]
    fn test_particle_far_above_field_is_outside() {
        let rising = Particle::new(5.0, -15.0, 0.0, -0.5, '•', Color::Red);
        assert!(rising.is_outside(40, 10));
        let waiting = Particle::new(5.0, -3.0, 0.0, 0.1, '•', Color::Red);
        assert!(!waiting.is_outside(40, 10));
    }

    #[test]
    fn test_recycling_confetti_keeps_every_piece() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut confetti = Confetti::burst(field(40, 10).with_recycle(true), &mut rng);
        for _ in 0..500 {
            confetti.step(&mut rng);
        }
        assert_eq!(confetti.particles().len(), 50);
    }

    #[test]
    fn test_render_stays_inside_area() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut confetti = Confetti::burst(field(20, 10), &mut rng);
        for _ in 0..30 {
            confetti.step(&mut rng);
        }
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 15));
        let area = Rect::new(5, 2, 20, 10);
        (&confetti).render(area, &mut buf);
        for y in 0..15 {
            for x in 0..30 {
                let drawn = buf[(x, y)].symbol() != " ";
                if drawn {
                    assert!(x >= 5 && x < 25 && y >= 2 && y < 12);
                }
            }
        }
    }
}
