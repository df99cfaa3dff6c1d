//! Stat formula and its inverse
//!
//! ```text
//!     HP = floor((2B + iv + floor(E/4)) * L / 100) + L + 10
//! non-HP = floor((floor((2B + iv + floor(E/4)) * L / 100) + 5) * m)
//! ```
//!
//! `m` is one of the exact ratios of [`Multiplier`]. Both directions stay in
//! integer arithmetic; the inverse is built from
//! [`Interval::invert_floor_mul`].

use std::collections::BTreeMap;

use ivfind_interval::{Interval, IntervalError, Ratio, ratio};
use num_integer::Integer;

use crate::error::InferenceError;
use crate::types::{Multiplier, StatSlot};

pub const LEVEL_NORM: i64 = 100;
pub const LEVEL_RANGE: Interval<i64> = Interval::from_raw(1, 100);
pub const BASE_RANGE: Interval<i64> = Interval::from_raw(0, 256);
pub const IV_RANGE: Interval<i64> = Interval::from_raw(0, 31);
pub const EFFORT_RANGE: Interval<i64> = Interval::from_raw(0, 252);

/// Effort values needed for one extra stat point
const EFFORT_STEP: i64 = 4;

fn check_in(field: &'static str, value: i64, range: &Interval<i64>) -> Result<(), InferenceError> {
    InferenceError::check_range(field, value, range.min(), range.max())
}

fn check_interval_in(
    field: &'static str,
    value: &Interval<i64>,
    range: &Interval<i64>,
) -> Result<(), InferenceError> {
    check_in(field, value.min(), range)?;
    check_in(field, value.max(), range)
}

/// Everything about one stat except its IV and multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatInputs {
    pub slot: StatSlot,
    pub base: u16,
    pub level: u8,
    pub effort: u8,
}

impl StatInputs {
    /// Validate and bundle the inputs for one stat
    pub fn new(slot: StatSlot, base: u16, level: u8, effort: u8) -> Result<Self, InferenceError> {
        check_in("base", base as i64, &BASE_RANGE)?;
        check_in("level", level as i64, &LEVEL_RANGE)?;
        check_in("effort", effort as i64, &EFFORT_RANGE)?;
        Ok(Self {
            slot,
            base,
            level,
            effort,
        })
    }

    /// `2B + floor(E/4)`, the part of the inner sum that is not the IV
    fn fixed_term(&self) -> i64 {
        2 * self.base as i64 + self.effort as i64 / EFFORT_STEP
    }

    fn level_ratio(&self) -> Result<Ratio, IntervalError> {
        ratio(self.level as i64, LEVEL_NORM)
    }
}

fn check_multiplier(slot: StatSlot, multiplier: Multiplier) -> Result<(), InferenceError> {
    if slot.is_hp() && multiplier != Multiplier::Neutral {
        return Err(InferenceError::MultiplierOnHp);
    }
    Ok(())
}

/// Forward formula: the visible stat for a known IV
///
/// HP takes no multiplier; anything but [`Multiplier::Neutral`] is rejected.
pub fn stat_value(inputs: &StatInputs, iv: u8, multiplier: Multiplier) -> Result<u16, InferenceError> {
    check_in("iv", iv as i64, &IV_RANGE)?;
    check_multiplier(inputs.slot, multiplier)?;

    let level = inputs.level as i64;
    let scaled = (inputs.fixed_term() + iv as i64) * level / LEVEL_NORM;
    let value = if inputs.slot.is_hp() {
        scaled + level + 10
    } else {
        let m = multiplier.ratio();
        Integer::div_floor(&((scaled + 5) * m.numer()), m.denom())
    };
    // Bounded by the input ranges: at most floor(611 * 11 / 10).
    Ok(value as u16)
}

/// Forward formula over partially known inputs
///
/// A missing level, IV or effort spans its whole domain; a missing
/// multiplier on a non-HP stat spans [`Multiplier::range`].
pub fn stat_value_range(
    slot: StatSlot,
    base: u16,
    level: Option<Interval<i64>>,
    iv: Option<Interval<i64>>,
    effort: Option<Interval<i64>>,
    multiplier: Option<Multiplier>,
) -> Result<Interval<i64>, InferenceError> {
    check_in("base", base as i64, &BASE_RANGE)?;
    let level = level.unwrap_or(LEVEL_RANGE).validated()?;
    let iv = iv.unwrap_or(IV_RANGE).validated()?;
    let effort = effort.unwrap_or(EFFORT_RANGE).validated()?;
    check_interval_in("level", &level, &LEVEL_RANGE)?;
    check_interval_in("iv", &iv, &IV_RANGE)?;
    check_interval_in("effort", &effort, &EFFORT_RANGE)?;
    if let Some(m) = multiplier {
        check_multiplier(slot, m)?;
    }

    let inner = iv + effort.div_floor(EFFORT_STEP)? + 2 * base as i64;
    let scaled = inner.checked_mul(&level)?.div_floor(LEVEL_NORM)?;

    let value = if slot.is_hp() {
        (scaled + level + 10_i64).validated()?
    } else {
        let before_nature = scaled + 5_i64;
        match multiplier {
            Some(m) => before_nature.floor_mul(m.ratio())?,
            None => before_nature.floor_mul_range(&Multiplier::range())?,
        }
    };
    Ok(value)
}

/// Inverse formula: every IV consistent with an observed stat value
///
/// The result is the tightest interval inside [`IV_RANGE`] whose members all
/// reproduce `value` through [`stat_value`]. Fails with
/// [`InferenceError::ImpossibleStat`] when no IV does.
pub fn infer_iv_interval(
    inputs: &StatInputs,
    value: u16,
    multiplier: Multiplier,
) -> Result<Interval<i64>, InferenceError> {
    check_multiplier(inputs.slot, multiplier)?;
    let slot = inputs.slot;
    let impossible = |reason: IntervalError| InferenceError::ImpossibleStat { slot, reason };

    let value = value as i64;
    let level = inputs.level as i64;

    // Strip everything outside the level division.
    let scaled = if slot.is_hp() {
        Interval::exact(value - level - 10)
    } else {
        Interval::exact(value).invert_floor_mul(multiplier.ratio()).map_err(impossible)? - 5_i64
    };

    let mut iv = scaled
        .invert_floor_mul(inputs.level_ratio()?)
        .map_err(impossible)?;
    iv -= inputs.fixed_term();
    iv.clamp(&IV_RANGE).map_err(impossible)?;
    Ok(iv)
}

/// IV intervals for every multiplier the observed value allows
///
/// HP only tries [`Multiplier::Neutral`]. Multipliers that no IV satisfies are
/// left out; if none remain the last inversion error is returned.
pub fn infer_iv_candidates(
    inputs: &StatInputs,
    value: u16,
) -> Result<BTreeMap<Multiplier, Interval<i64>>, InferenceError> {
    let multipliers: &[Multiplier] = if inputs.slot.is_hp() {
        &[Multiplier::Neutral]
    } else {
        &Multiplier::ALL
    };

    let mut candidates = BTreeMap::new();
    let mut last_error = None;
    for &multiplier in multipliers {
        match infer_iv_interval(inputs, value, multiplier) {
            Ok(ivs) => {
                candidates.insert(multiplier, ivs);
            }
            Err(err) => {
                tracing::trace!(
                    slot = %inputs.slot,
                    multiplier = %multiplier,
                    value,
                    error = %err,
                    "multiplier excluded"
                );
                last_error = Some(err);
            }
        }
    }
    match last_error {
        Some(err) if candidates.is_empty() => Err(err),
        _ => Ok(candidates),
    }
}
