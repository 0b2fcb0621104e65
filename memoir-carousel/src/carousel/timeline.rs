//! TimelineAxis: maps sorted indices onto a 0..=100 year scale and back
//!
//! The axis spans the earliest to the latest year in the collection. Forward
//! mapping places an entry at its year; the inverse picks the first entry whose
//! year is closest to the year under the scrub position.

use crate::constants::timeline::{DEGENERATE_POSITION, POSITION_MAX};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineAxis {
    pub min_year: i32,
    pub max_year: i32,
}

/// One tick per distinct year present in the collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineTick {
    pub year: i32,
    pub position: f32,
    /// First sorted index carrying this year; the target of a tick click.
    pub first_index: usize,
}

impl TimelineAxis {
    /// Axis over `years`, or `None` when there are no years at all.
    pub fn from_years(years: &[i32]) -> Option<Self> {
        let min_year = years.iter().copied().min()?;
        let max_year = years.iter().copied().max()?;
        Some(Self { min_year, max_year })
    }

    pub fn is_degenerate(&self) -> bool {
        self.min_year == self.max_year
    }

    /// Year range used as the divisor, never zero. Widened so that any pair
    /// of `i32` years fits.
    #[inline]
    pub fn span(&self) -> i64 {
        (i64::from(self.max_year) - i64::from(self.min_year)).max(1)
    }

    /// Position of `year` on the axis, in `0.0..=100.0`.
    pub fn position_for_year(&self, year: i32) -> f32 {
        if self.is_degenerate() {
            return DEGENERATE_POSITION;
        }
        let offset = (i64::from(year) - i64::from(self.min_year)) as f64;
        let position = offset / self.span() as f64 * f64::from(POSITION_MAX);
        (position as f32).clamp(0.0, POSITION_MAX)
    }

    /// Year nearest to `position`, rounded to a whole year.
    pub fn target_year(&self, position: f32) -> i32 {
        let position = if position.is_finite() {
            position.clamp(0.0, POSITION_MAX)
        } else {
            0.0
        };
        let offset = (f64::from(position) / f64::from(POSITION_MAX)
            * self.span() as f64)
            .round() as i64;
        let year = (i64::from(self.min_year) + offset)
            .clamp(i64::from(self.min_year), i64::from(self.max_year));
        i32::try_from(year).unwrap_or(self.max_year)
    }

    /// Sorted index whose year is closest to the year under `position`.
    /// Ties resolve to the lowest index. `years` must be in display order.
    pub fn nearest_index(&self, position: f32, years: &[i32]) -> usize {
        let target = self.target_year(position);
        years
            .iter()
            .enumerate()
            .min_by_key(|(index, year)| {
                ((i64::from(**year) - i64::from(target)).abs(), *index)
            })
            .map(|(index, _)| index)
            .unwrap_or(0)
    }

    /// Ticks for the distinct years in `years` (display order), ascending.
    pub fn ticks(&self, years: &[i32]) -> Vec<TimelineTick> {
        let mut ticks: Vec<TimelineTick> = Vec::new();
        for (index, year) in years.iter().copied().enumerate() {
            if ticks.iter().any(|tick| tick.year == year) {
                continue;
            }
            ticks.push(TimelineTick {
                year,
                position: self.position_for_year(year),
                first_index: index,
            });
        }
        ticks.sort_by_key(|tick| tick.year);
        ticks
    }
}
