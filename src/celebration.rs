use rand::seq::SliceRandom;
use rand::Rng;

const GOAL_SYMBOLS: [char; 6] = ['⚽', '🏆', '⭐', '✨', '🎉', '🎊'];
const GRAVITY: f64 = 12.0;
const FRAME_DT: f64 = 0.1;

/// One glyph flying across the pitch during a milestone celebration.
#[derive(Debug, Clone)]
pub struct GoalParticle {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub symbol: char,
    pub color_index: usize,
    age: f64,
    max_age: f64,
    /// Letter particles converge on a fixed spot and stay; ball particles
    /// follow ballistic motion.
    pub is_letter: bool,
    target_x: f64,
    target_y: f64,
}

impl GoalParticle {
    fn ball(x: f64, y: f64, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y,
            vel_x: rng.gen_range(-3.0..3.0),
            vel_y: rng.gen_range(-5.0..-2.0),
            symbol: *GOAL_SYMBOLS.choose(rng).unwrap_or(&'⚽'),
            color_index: rng.gen_range(0..7),
            age: 0.0,
            max_age: rng.gen_range(1.5..3.0),
            is_letter: false,
            target_x: x,
            target_y: y,
        }
    }

    fn letter(start: (f64, f64), target: (f64, f64), symbol: char, rng: &mut impl Rng) -> Self {
        Self {
            x: start.0,
            y: start.1,
            vel_x: target.0 - start.0,
            vel_y: target.1 - start.1,
            symbol,
            color_index: rng.gen_range(0..7),
            age: 0.0,
            max_age: rng.gen_range(2.5..4.0),
            is_letter: true,
            target_x: target.0,
            target_y: target.1,
        }
    }

    /// Remaining life in [0, 1]; used for the fade-out in the renderer.
    pub fn fade(&self) -> f64 {
        (1.0 - self.age / self.max_age).max(0.0)
    }

    /// Advance one frame; returns false when the particle expired.
    fn step(&mut self, dt: f64) -> bool {
        if self.is_letter {
            let dist = ((self.target_x - self.x).powi(2) + (self.target_y - self.y).powi(2)).sqrt();
            if dist > 1.0 {
                self.x += self.vel_x * dt;
                self.y += self.vel_y * dt;
                self.vel_x *= 0.92;
                self.vel_y *= 0.92;
            } else {
                self.x = self.target_x;
                self.y = self.target_y;
                self.vel_x = 0.0;
                self.vel_y = 0.0;
            }
        } else {
            self.x += self.vel_x * dt;
            self.y += self.vel_y * dt;
            self.vel_y += GRAVITY * dt;
        }

        self.age += dt;
        self.age < self.max_age
    }
}

/// Milestone celebration overlay. Inactive until a hattrick/topscorer/legend
/// streak starts it; expires on its own after `duration` seconds of frames.
/// Time advances per `update()` call, one tick per frame, so expiry is
/// driven by the same tick loop as the rest of the game.
#[derive(Debug)]
pub struct Celebration {
    pub particles: Vec<GoalParticle>,
    pub is_active: bool,
    elapsed: f64,
    duration: f64,
    field_width: f64,
    field_height: f64,
}

impl Celebration {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            is_active: false,
            elapsed: 0.0,
            duration: 2.5,
            field_width: 80.0,
            field_height: 24.0,
        }
    }

    /// Kick off the celebration: the milestone word converges at mid-field
    /// while balls and confetti fly up from the goal line.
    pub fn start(&mut self, word: &str, width: u16, height: u16) {
        let mut rng = rand::thread_rng();

        self.particles.clear();
        self.elapsed = 0.0;
        self.is_active = true;
        self.field_width = width as f64;
        self.field_height = height as f64;

        let center_x = self.field_width / 2.0;
        let center_y = self.field_height / 2.0;

        let letter_spacing = 2.0;
        let word_width = (word.chars().count() as f64 - 1.0) * letter_spacing;
        for (i, ch) in word.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let target = (
                center_x - word_width / 2.0 + i as f64 * letter_spacing,
                center_y - 2.0,
            );
            let start = (
                center_x + rng.gen_range(-12.0..12.0),
                center_y + rng.gen_range(-5.0..5.0),
            );
            self.particles
                .push(GoalParticle::letter(start, target, ch, &mut rng));
        }

        for _ in 0..20 {
            let x = rng.gen_range(0.0..self.field_width);
            self.particles
                .push(GoalParticle::ball(x, self.field_height - 1.0, &mut rng));
        }
    }

    pub fn update(&mut self) {
        if !self.is_active {
            return;
        }

        self.elapsed += FRAME_DT;
        if self.elapsed >= self.duration {
            self.is_active = false;
            self.particles.clear();
            return;
        }

        let (w, h) = (self.field_width, self.field_height);
        self.particles.retain_mut(|p| {
            let alive = p.step(FRAME_DT);
            if p.is_letter {
                alive
            } else {
                // Drop balls once they leave the pitch.
                alive && p.y < h + 3.0 && p.x > -3.0 && p.x < w + 3.0
            }
        });
    }
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_until_started() {
        let celebration = Celebration::new();
        assert!(!celebration.is_active);
        assert!(celebration.particles.is_empty());
    }

    #[test]
    fn test_start_spawns_letters_and_balls() {
        let mut celebration = Celebration::new();
        celebration.start("HATTRICK!", 80, 24);

        assert!(celebration.is_active);
        assert!(celebration.particles.iter().any(|p| p.is_letter));
        assert!(celebration.particles.iter().any(|p| !p.is_letter));

        let letters: String = celebration
            .particles
            .iter()
            .filter(|p| p.is_letter)
            .map(|p| p.symbol)
            .collect();
        assert_eq!(letters, "HATTRICK!");
    }

    #[test]
    fn test_particles_move_each_frame() {
        let mut celebration = Celebration::new();
        celebration.start("MESSI!", 80, 24);

        let before: Vec<(f64, f64)> = celebration.particles.iter().map(|p| (p.x, p.y)).collect();
        for _ in 0..5 {
            celebration.update();
        }

        let moved = celebration
            .particles
            .iter()
            .zip(before.iter())
            .filter(|(p, &(x, y))| (p.x - x).abs() > 0.1 || (p.y - y).abs() > 0.1)
            .count();
        assert!(moved > 0);
    }

    #[test]
    fn test_balls_fall_under_gravity() {
        let mut rng = rand::thread_rng();
        let mut ball = GoalParticle::ball(10.0, 10.0, &mut rng);
        let initial_vel_y = ball.vel_y;

        assert!(ball.step(0.1));
        assert!(ball.vel_y > initial_vel_y);
    }

    #[test]
    fn test_letters_converge_on_target() {
        let mut rng = rand::thread_rng();
        let mut letter = GoalParticle::letter((0.0, 0.0), (10.0, 5.0), 'G', &mut rng);
        assert!(letter.is_letter);

        for _ in 0..20 {
            letter.step(0.1);
        }

        let dist = ((letter.target_x - letter.x).powi(2) + (letter.target_y - letter.y).powi(2))
            .sqrt();
        assert!(dist < 5.0);
    }

    #[test]
    fn test_expires_after_enough_frames() {
        let mut celebration = Celebration::new();
        celebration.start("TOPSCORER!", 80, 24);
        assert!(celebration.is_active);

        // 2.5s at 0.1s per frame: still going one frame before the end.
        for _ in 0..24 {
            celebration.update();
        }
        assert!(celebration.is_active);

        celebration.update();
        assert!(!celebration.is_active);
        assert!(celebration.particles.is_empty());
    }

    #[test]
    fn test_restart_after_expiry() {
        let mut celebration = Celebration::new();
        celebration.start("HATTRICK!", 80, 24);
        for _ in 0..30 {
            celebration.update();
        }
        assert!(!celebration.is_active);

        celebration.start("MESSI!", 80, 24);
        assert!(celebration.is_active);
        assert!(!celebration.particles.is_empty());
    }

    #[test]
    fn test_offscreen_balls_removed() {
        let mut celebration = Celebration::new();
        celebration.start("GOAL!", 20, 10);

        let mut rng = rand::thread_rng();
        celebration
            .particles
            .push(GoalParticle::ball(100.0, 100.0, &mut rng));

        for _ in 0..5 {
            celebration.update();
        }

        for p in &celebration.particles {
            if !p.is_letter {
                assert!(p.x > -3.0 && p.x < 23.0 && p.y < 13.0);
            }
        }
    }
}
