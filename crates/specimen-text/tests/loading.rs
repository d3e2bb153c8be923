//! Integration tests for loading fonts from disk and deriving preview content.

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use specimen_assets::{Locator, LocatorReader};
use specimen_test_utils::TestFontBuilder;
use specimen_text::{
    FontLoader, LOWERCASE_TEXT, LoadErrorKind, PUNCTUATION_TEXT, UPPERCASE_TEXT, build_sizes,
    synthesize,
};

/// Helper to create a loader resolving relative locators against `base_path`.
fn create_loader(base_path: impl AsRef<Path>) -> FontLoader {
    FontLoader::with_threads(LocatorReader::with_base_path(base_path), 2)
}

#[test]
fn test_scalable_font_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.ttf");
    std::fs::write(
        &path,
        TestFontBuilder::latin().family("Fixture").style("Italic").build(),
    )
    .unwrap();

    let loader = create_loader(dir.path());
    let mut face = loader.load(Locator::from_path(&path)).wait().unwrap();

    let text = synthesize(&mut face, "en-US", 36, &mut StdRng::seed_from_u64(1));
    assert_eq!(text.lowercase.as_deref(), Some(LOWERCASE_TEXT));
    assert_eq!(text.uppercase.as_deref(), Some(UPPERCASE_TEXT));
    assert_eq!(text.punctuation.as_deref(), Some(PUNCTUATION_TEXT));
    assert_eq!(text.sample, "The quick brown fox jumps over the lazy dog.");
    assert_eq!(text.title, "Fixture Italic");
    assert!(text.title_is_covered);

    let ladder = build_sizes(&face);
    assert_eq!(ladder.sizes, vec![8, 10, 12, 18, 24, 36, 48, 72]);
    assert_eq!(ladder.alpha_size, 24);
}

#[test]
fn test_relative_path_uses_base() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rel.ttf"), TestFontBuilder::latin().build()).unwrap();

    let loader = create_loader(dir.path());
    let face = loader.load("rel.ttf").wait().unwrap();
    assert_eq!(face.family_name(), "Test Sans");
}

#[test]
fn test_symbol_font_gets_random_sample() {
    let dir = tempfile::tempdir().unwrap();
    let symbols: Vec<u32> = (0xF021..0xF07F).collect();
    std::fs::write(
        dir.path().join("symbols.ttf"),
        TestFontBuilder::new()
            .family("Dingbats")
            .symbol_charmap(symbols.clone())
            .build(),
    )
    .unwrap();

    let loader = create_loader(dir.path());
    let mut face = loader.load("symbols.ttf").wait().unwrap();

    let text = synthesize(&mut face, "en-US", 36, &mut StdRng::seed_from_u64(99));
    assert!(text.lowercase.is_none());
    assert!(text.uppercase.is_none());
    assert!(text.punctuation.is_none());
    assert!(text.sample_is_random);
    assert_eq!(text.sample.chars().count(), 36);
    assert!(text.sample.chars().all(|c| symbols.contains(&(c as u32))));
    assert!(!text.title_is_covered);
}

#[test]
fn test_bitmap_font_ladder() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("bitmap.otb"),
        TestFontBuilder::latin()
            .outlines(false)
            .bitmap_strike(12)
            .bitmap_strike(24)
            .bitmap_strike(48)
            .build(),
    )
    .unwrap();

    let loader = create_loader(dir.path());
    let face = loader.load("bitmap.otb").wait().unwrap();

    let ladder = build_sizes(&face);
    assert_eq!(ladder.sizes, vec![12, 24, 48]);
    assert_eq!(ladder.alpha_size, 24);
}

#[test]
fn test_missing_file_is_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let loader = create_loader(dir.path());

    let err = loader
        .load(Locator::from_path(dir.path().join("nope.ttf")))
        .wait()
        .unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Read);
}

#[test]
fn test_unsupported_scheme_is_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let loader = create_loader(dir.path());

    let err = loader.load("https://example.com/font.ttf").wait().unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Read);
}

#[test]
fn test_truncated_file_is_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut bytes = TestFontBuilder::latin().build();
    bytes.truncate(40);
    std::fs::write(dir.path().join("cut.ttf"), bytes).unwrap();

    let loader = create_loader(dir.path());
    let err = loader.load("cut.ttf").wait().unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Parse);
}

#[test]
fn test_many_loads_in_flight() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..8 {
        std::fs::write(
            dir.path().join(format!("f{i}.ttf")),
            TestFontBuilder::latin().family(&format!("Family {i}")).build(),
        )
        .unwrap();
    }

    let loader = create_loader(dir.path());
    let jobs: Vec<_> = (0..8).map(|i| loader.load(format!("f{i}.ttf"))).collect();

    for (i, job) in jobs.into_iter().enumerate() {
        let face = job.wait().unwrap();
        assert_eq!(face.family_name(), format!("Family {i}"));
    }
}
