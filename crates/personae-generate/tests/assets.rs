use std::fs;
use std::path::PathBuf;

use personae_core::{CohortCode, NameKind, Sex};
use personae_generate::{AssetsLoader, GenerationError, assets};

fn temp_assets_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "personae_assets_{label}_{}",
        uuid::Uuid::new_v4()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn embedded_assets_cover_every_table() {
    let assets = assets().expect("assets");
    for sex in Sex::ALL {
        for cohort in [CohortCode::Junior, CohortCode::Middle, CohortCode::Senior] {
            for kind in [NameKind::Last, NameKind::First, NameKind::Patronymic] {
                let table = assets.names(kind, sex, cohort).expect("table");
                assert!(!table.is_empty(), "{kind} {cohort} {sex}");
            }
        }
    }
    assert!(assets.localities().len() > 100);
    assert_eq!(assets.localities().region_of("Москва"), Some("Москва"));
}

#[test]
fn last_names_are_shared_across_cohorts() {
    let assets = assets().expect("assets");
    let junior = assets
        .names(NameKind::Last, Sex::Female, CohortCode::Junior)
        .expect("junior");
    let senior = assets
        .names(NameKind::Last, Sex::Female, CohortCode::Senior)
        .expect("senior");
    assert_eq!(junior, senior);
}

#[test]
fn directory_overrides_single_table() {
    let dir = temp_assets_dir("override");
    fs::write(
        dir.join("first_names_junior_male.csv"),
        "name,weight\nТимофей,1.0\n",
    )
    .expect("write table");

    let loaded = AssetsLoader::from_dir(dir).load().expect("load");
    let overridden = loaded
        .names(NameKind::First, Sex::Male, CohortCode::Junior)
        .expect("overridden");
    assert_eq!(overridden.len(), 1);
    assert!(overridden.contains("Тимофей"));

    let embedded = assets().expect("assets");
    assert_eq!(
        loaded.names(NameKind::First, Sex::Female, CohortCode::Junior).expect("loaded"),
        embedded.names(NameKind::First, Sex::Female, CohortCode::Junior).expect("embedded"),
    );
}

#[test]
fn malformed_table_is_an_asset_error() {
    let dir = temp_assets_dir("malformed");
    fs::write(dir.join("localities.csv"), "locality,region,population\nТверь,Тверская область,много\n")
        .expect("write table");
    let err = AssetsLoader::from_dir(dir).load().expect_err("malformed");
    assert!(matches!(err, GenerationError::Asset(_)));
}

#[test]
fn non_positive_weight_is_rejected() {
    let dir = temp_assets_dir("weight");
    fs::write(dir.join("patronymics_senior_female.csv"), "name,weight\nИвановна,0\n")
        .expect("write table");
    let err = AssetsLoader::from_dir(dir).load().expect_err("zero weight");
    assert!(matches!(
        err,
        GenerationError::Core(personae_core::Error::InvalidTable { .. })
    ));
}
