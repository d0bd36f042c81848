use chrono::NaiveDate;
use personae_core::{AgeCohort, CohortCode, JUNIOR, MIDDLE, SENIOR, Sex};

#[test]
fn population_shares_sum_to_one() {
    let total: f64 = AgeCohort::ALL.iter().map(|c| c.population_share).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn birth_ranges_are_inclusive_calendar_years() {
    let (first, last) = MIDDLE.birth_range().expect("middle range");
    assert_eq!(first, NaiveDate::from_ymd_opt(1973, 1, 1).unwrap());
    assert_eq!(last, NaiveDate::from_ymd_opt(1989, 12, 31).unwrap());

    // 1990..=2004 holds four leap years (1992, 1996, 2000, 2004).
    assert_eq!(JUNIOR.span_days().unwrap(), 15 * 365 + 4);
    assert_eq!(SENIOR.span_days().unwrap(), 15 * 365 + 4);
}

#[test]
fn cohorts_do_not_overlap() {
    assert_eq!(SENIOR.birth_year_end + 1, MIDDLE.birth_year_start);
    assert_eq!(MIDDLE.birth_year_end + 1, JUNIOR.birth_year_start);
}

#[test]
fn lookup_by_code_round_trips() {
    for cohort in AgeCohort::ALL {
        assert_eq!(AgeCohort::by_code(cohort.code), cohort);
    }
    assert_eq!(CohortCode::Senior.to_string(), "senior");
}

#[test]
fn sex_labels_match_exported_values() {
    assert_eq!(Sex::Male.label(), "муж.");
    assert_eq!(Sex::Female.to_string(), "жен.");
}
