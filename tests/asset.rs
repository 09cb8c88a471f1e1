use std::env;
use std::fs;

use car_dodge::asset::{verify_assets, Asset, ASSET_DIR_ENV};
use car_dodge::error::AssetError;
use speculoos::prelude::*;
use strum::IntoEnumIterator;

#[test]
fn test_asset_file_names_are_unique() {
    let mut names: Vec<&str> = Asset::iter().map(|asset| asset.file_name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_that(&names).has_length(6);
}

// Everything touching the environment variable lives in one test, since tests run in parallel.
#[test]
fn test_asset_directory_override() {
    let dir = env::temp_dir().join(format!("car-dodge-assets-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Could not create temp dir");
    env::set_var(ASSET_DIR_ENV, &dir);

    assert_that(&Asset::PlayerTexture.path()).is_equal_to(dir.join("player.png"));

    // Nothing written yet
    let error = verify_assets().expect_err("Empty directory should fail");
    let AssetError::Io { path, .. } = error;
    assert_that(&path.starts_with(&dir)).is_true();

    for asset in Asset::iter() {
        fs::write(asset.path(), b"stub").expect("Could not write stub asset");
    }
    assert_that(&verify_assets().is_ok()).is_true();
    assert_that(&Asset::CrashSound.get_bytes().map(|bytes| bytes.into_owned())).is_ok_containing(b"stub".to_vec());

    fs::remove_file(Asset::EngineMusic.path()).expect("Could not remove stub asset");
    let error = verify_assets().expect_err("Missing music should fail");
    assert_that(&error.to_string()).contains("engine.wav");

    env::remove_var(ASSET_DIR_ENV);
    let _ = fs::remove_dir_all(&dir);
}
