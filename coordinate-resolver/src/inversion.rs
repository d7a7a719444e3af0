// Copyright (c) James Kassemi, SC, US. All rights reserved.

//! Z-axis polarity detection.
//!
//! The manipulator software sometimes (not consistently) logs the z-axis
//! inverted, so a fully retracted probe reads 6000 or 15000 instead of 0.
//! Manipulators spend much more time fully retracted than fully extended, so
//! whichever of {0, limit} is more frequent in a recent sample is taken to be
//! the retracted code. The vote can be wrong on small or unusual samples, e.g.
//! a rig whose probes sat at full extension all day.

use std::collections::HashMap;

use core_types::TravelRange;

const BUCKET: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InversionVerdict {
    pub travel_range: TravelRange,
    pub zero_count: usize,
    pub limit_count: usize,
}

impl InversionVerdict {
    /// Ties, including a sample that never touches either end, are not inverted.
    pub fn inverted(&self) -> bool {
        self.zero_count < self.limit_count
    }
}

pub fn detect_inversion<I>(z_values: I) -> InversionVerdict
where
    I: IntoIterator<Item = f64>,
{
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for z in z_values {
        if !z.is_finite() {
            continue;
        }
        *counts.entry(bucket_of(z)).or_default() += 1;
    }
    let count_at = |value: u32| {
        counts
            .get(&bucket_of(f64::from(value)))
            .copied()
            .unwrap_or(0)
    };

    let travel_range = if count_at(TravelRange::LONG_LIMIT) > 0 {
        TravelRange::Long
    } else {
        TravelRange::Short
    };
    InversionVerdict {
        travel_range,
        zero_count: count_at(0),
        limit_count: count_at(travel_range.limit()),
    }
}

pub fn is_z_inverted<I>(z_values: I) -> bool
where
    I: IntoIterator<Item = f64>,
{
    detect_inversion(z_values).inverted()
}

// Half-way values round to the even hundred, so 50 lands on 0 and 14950 on 15000.
fn bucket_of(z: f64) -> i64 {
    (z / BUCKET).round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dominated_sample_is_upright() {
        assert!(!is_z_inverted([0.0, 3000.0, 3000.0, 0.0]));
    }

    #[test]
    fn long_limit_dominated_sample_is_inverted() {
        assert!(is_z_inverted([15000.0, 3000.0, 3000.0, 15000.0]));
    }

    #[test]
    fn short_limit_dominated_sample_is_inverted() {
        let verdict = detect_inversion([6000.0, 5990.0, 0.0, 2500.0]);
        assert_eq!(verdict.travel_range, TravelRange::Short);
        assert_eq!(verdict.limit_count, 2);
        assert_eq!(verdict.zero_count, 1);
        assert!(verdict.inverted());
    }

    #[test]
    fn ties_are_not_inverted() {
        assert!(!is_z_inverted([0.0, 15000.0]));
        assert!(!is_z_inverted([1234.0, 4321.0]));
        assert!(!is_z_inverted(std::iter::empty()));
    }

    #[test]
    fn near_limit_noise_is_bucketed() {
        let verdict = detect_inversion([14_962.0, 15_049.0, 31.0]);
        assert_eq!(verdict.travel_range, TravelRange::Long);
        assert_eq!(verdict.limit_count, 2);
        assert_eq!(verdict.zero_count, 1);
    }

    #[test]
    fn halfway_rounds_to_even_bucket() {
        // 50 -> 0, 150 -> 200
        let verdict = detect_inversion([50.0, -50.0, 150.0]);
        assert_eq!(verdict.zero_count, 2);
    }

    #[test]
    fn long_limit_presence_switches_the_limit() {
        // 6000 only counts as the limit when 15000 never shows up
        let verdict = detect_inversion([6000.0, 6000.0, 15000.0, 0.0, 0.0]);
        assert_eq!(verdict.travel_range, TravelRange::Long);
        assert_eq!(verdict.limit_count, 1);
        assert!(!verdict.inverted());
    }

    #[test]
    fn non_finite_readings_are_ignored() {
        assert!(is_z_inverted([f64::NAN, 6000.0, f64::INFINITY]));
    }
}
