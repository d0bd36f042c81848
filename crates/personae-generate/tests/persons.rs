use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use personae_core::{JUNIOR, MIDDLE, NameKind, Sex};
use personae_generate::GenerationError;
use personae_generate::assets;
use personae_generate::persons::{NameColumns, PersonAssembler, generate_base};

#[test]
fn batch_names_come_from_matching_tables() {
    let assets = assets().expect("assets");
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let names = NameColumns::sample(assets, &JUNIOR, Sex::Female, 300, &mut rng).expect("names");
    let firsts = assets
        .names(NameKind::First, Sex::Female, JUNIOR.code)
        .expect("first names");
    let patronymics = assets
        .names(NameKind::Patronymic, Sex::Female, JUNIOR.code)
        .expect("patronymics");

    assert_eq!(names.last_names.len(), 300);
    assert_eq!(names.first_names.len(), 300);
    assert_eq!(names.patronymics.len(), 300);
    assert!(names.first_names.iter().all(|name| firsts.contains(name)));
    assert!(names.patronymics.iter().all(|name| patronymics.contains(name)));
}

#[test]
fn assembled_batch_has_distinct_birthdates() {
    let assets = assets().expect("assets");
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let names = NameColumns::sample(assets, &MIDDLE, Sex::Male, 3_000, &mut rng).expect("names");
    let batch = PersonAssembler::default()
        .assemble(&MIDDLE, Sex::Male, 3_000, names, &mut rng)
        .expect("batch");

    assert!(!batch.layered);
    assert_eq!(batch.persons.len(), 3_000);
    let dates: HashSet<_> = batch.persons.iter().map(|p| p.birth_date).collect();
    assert_eq!(dates.len(), 3_000);
    assert!(batch.persons.iter().all(|p| p.sex == Sex::Male));
    assert!(
        batch
            .persons
            .iter()
            .all(|p| (1973..=1989).contains(&p.birth_year()))
    );
}

#[test]
fn oversized_batch_is_layered_without_duplicate_persons() {
    let assets = assets().expect("assets");
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let span = JUNIOR.span_days().expect("span");
    let count = span + span / 2;
    let names = NameColumns::sample(assets, &JUNIOR, Sex::Female, count, &mut rng).expect("names");
    let batch = PersonAssembler::new(64, false)
        .assemble(&JUNIOR, Sex::Female, count, names, &mut rng)
        .expect("batch");

    assert!(batch.layered);
    assert_eq!(batch.persons.len(), count);
    let unique: HashSet<_> = batch.persons.iter().collect();
    assert_eq!(unique.len(), count);
}

#[test]
fn strict_assembler_rejects_oversized_batch() {
    let assets = assets().expect("assets");
    let mut rng = ChaCha8Rng::seed_from_u64(14);
    let count = JUNIOR.span_days().expect("span") + 1;
    let names = NameColumns::sample(assets, &JUNIOR, Sex::Male, count, &mut rng).expect("names");
    let err = PersonAssembler::new(64, true)
        .assemble(&JUNIOR, Sex::Male, count, names, &mut rng)
        .expect_err("strict");
    assert!(matches!(err, GenerationError::BirthdateSpaceExhaustion { .. }));
}

#[test]
fn short_name_columns_are_rejected() {
    let assets = assets().expect("assets");
    let mut rng = ChaCha8Rng::seed_from_u64(15);
    let names = NameColumns::sample(assets, &JUNIOR, Sex::Male, 5, &mut rng).expect("names");
    let err = PersonAssembler::default()
        .assemble(&JUNIOR, Sex::Male, 6, names, &mut rng)
        .expect_err("too few names");
    assert!(matches!(
        err,
        GenerationError::SamplingExhaustion { what: "names", .. }
    ));
}

#[test]
fn base_dataset_matches_apportioned_batches() {
    let assets = assets().expect("assets");
    let mut rng = ChaCha8Rng::seed_from_u64(16);
    let (persons, reports) =
        generate_base(1_000, assets, &PersonAssembler::default(), &mut rng).expect("base");

    assert_eq!(persons.len(), 1_000);
    assert_eq!(reports.len(), 6);
    for report in &reports {
        let matching = persons
            .iter()
            .filter(|p| {
                p.sex == report.sex
                    && personae_core::AgeCohort::by_code(report.cohort)
                        .birth_range()
                        .map(|(first, last)| (first..=last).contains(&p.birth_date))
                        .unwrap_or(false)
            })
            .count();
        assert_eq!(matching, report.count, "{:?}", report);
    }
}
