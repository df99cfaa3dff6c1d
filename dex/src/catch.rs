//! Capture probability for one ball throw
//!
//! ```text
//! modified = rate * (1 - 2/3 * hp) * ball * status
//!    shake = min(floor(65536 / (255 / modified)^0.1875) / 65536, 1)
//!     crit = min(floor(modified * crit_mult / 6) / 256, 1)
//!   result = (1 - crit) * shake^4 + crit * shake
//! ```
//!
//! A critical capture needs only one shake check instead of four.

use thiserror::Error;

const MAX_CATCH_RATE: f64 = 255.0;
const SHAKE_RANGE: f64 = 65536.0;
const CRITICAL_RANGE: f64 = 256.0;
const SHAKE_EXPONENT: f64 = 0.1875;
const SHAKES: i32 = 4;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatchError {
    #[error("catch rate must be in 1..=255, got {0}")]
    CatchRate(u8),

    #[error("hp ratio must be in 0..=1, got {0}")]
    HpRatio(f64),

    #[error("{name} bonus must be positive, got {value}")]
    Bonus { name: &'static str, value: f64 },
}

/// One throw: target state, ball and Pokédex progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchParams {
    /// Species catch rate
    pub catch_rate: u8,

    /// Current HP over max HP
    pub hp_ratio: f64,

    pub ball_bonus: f64,

    /// Non-volatile status condition bonus
    pub status_bonus: f64,

    /// Distinct species caught so far
    pub pokedex_caught: u32,
}

impl CatchParams {
    /// Full HP, plain ball, no status, empty Pokédex
    pub fn new(catch_rate: u8) -> Self {
        Self {
            catch_rate,
            hp_ratio: 1.0,
            ball_bonus: 1.0,
            status_bonus: 1.0,
            pokedex_caught: 0,
        }
    }

    pub fn with_hp_ratio(mut self, hp_ratio: f64) -> Self {
        self.hp_ratio = hp_ratio;
        self
    }

    pub fn with_ball(mut self, bonus: f64) -> Self {
        self.ball_bonus = bonus;
        self
    }

    pub fn with_status(mut self, bonus: f64) -> Self {
        self.status_bonus = bonus;
        self
    }

    pub fn with_pokedex(mut self, caught: u32) -> Self {
        self.pokedex_caught = caught;
        self
    }

    fn validate(&self) -> Result<(), CatchError> {
        if self.catch_rate == 0 {
            return Err(CatchError::CatchRate(self.catch_rate));
        }
        if !(0.0..=1.0).contains(&self.hp_ratio) {
            return Err(CatchError::HpRatio(self.hp_ratio));
        }
        for (name, value) in [("ball", self.ball_bonus), ("status", self.status_bonus)] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(CatchError::Bonus { name, value });
            }
        }
        Ok(())
    }
}

fn critical_multiplier(pokedex_caught: u32) -> f64 {
    match pokedex_caught {
        0..=30 => 0.0,
        31..=150 => 0.5,
        151..=300 => 1.0,
        301..=450 => 1.5,
        451..=600 => 2.0,
        _ => 2.5,
    }
}

/// Probability (0-1) that one throw captures the target
pub fn capture_probability(params: &CatchParams) -> Result<f64, CatchError> {
    params.validate()?;

    let modified = params.catch_rate as f64
        * (1.0 - 2.0 / 3.0 * params.hp_ratio)
        * params.ball_bonus
        * params.status_bonus;

    let shake_threshold = (SHAKE_RANGE / (MAX_CATCH_RATE / modified).powf(SHAKE_EXPONENT)).trunc();
    let shake = (shake_threshold / SHAKE_RANGE).min(1.0);
    let capture = shake.powi(SHAKES);

    let critical_threshold = (modified * critical_multiplier(params.pokedex_caught) / 6.0).trunc();
    let critical = (critical_threshold / CRITICAL_RANGE).min(1.0);

    tracing::trace!(modified, shake, critical, "capture odds");

    Ok((1.0 - critical) * capture + critical * shake)
}
