//! Apportioning a requested total across cohorts and sexes.

use personae_core::{AgeCohort, JUNIOR, SENIOR, Sex};

/// Totals below this use [`SMALL_TOTALS`] instead of share arithmetic.
pub const SMALL_TOTAL_THRESHOLD: usize = 4;

/// (junior, middle, senior) for totals 0..SMALL_TOTAL_THRESHOLD.
const SMALL_TOTALS: [(usize, usize, usize); SMALL_TOTAL_THRESHOLD] =
    [(0, 0, 0), (0, 1, 0), (0, 1, 1), (1, 1, 1)];

/// Split `total` into (junior, middle, senior) counts.
///
/// The middle cohort absorbs the rounding remainder, so the three counts
/// always sum to `total`.
pub fn apportion_ages(total: usize) -> (usize, usize, usize) {
    if total < SMALL_TOTAL_THRESHOLD {
        return SMALL_TOTALS[total];
    }
    let junior = share_of(total, JUNIOR.population_share);
    let senior = share_of(total, SENIOR.population_share);
    let middle = total - junior - senior;
    (junior, middle, senior)
}

/// Split a cohort count into (male, female).
pub fn apportion_sex(cohort_count: usize, female_share: f64) -> (usize, usize) {
    match cohort_count {
        0 => (0, 0),
        1 if female_share > 0.5 => (0, 1),
        1 => (1, 0),
        2 => (1, 1),
        _ => {
            let female = share_of(cohort_count, female_share);
            (cohort_count - female, female)
        }
    }
}

/// Counts for all six (cohort, sex) batches in generation order.
pub fn apportion(total: usize) -> Vec<(AgeCohort, Sex, usize)> {
    let (junior, middle, senior) = apportion_ages(total);
    let mut batches = Vec::with_capacity(6);
    for (cohort, count) in AgeCohort::ALL.into_iter().zip([junior, middle, senior]) {
        let (male, female) = apportion_sex(count, cohort.female_share);
        batches.push((cohort, Sex::Male, male));
        batches.push((cohort, Sex::Female, female));
    }
    batches
}

fn share_of(count: usize, share: f64) -> usize {
    ((count as f64) * share).floor() as usize
}
