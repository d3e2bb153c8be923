//! Preview text selection.

use rand::Rng;

use crate::coverage::covers;
use crate::face::FontFace;
use crate::language;

/// Lowercase alphabet line.
pub const LOWERCASE_TEXT: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase alphabet line.
pub const UPPERCASE_TEXT: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Digits and punctuation line.
pub const PUNCTUATION_TEXT: &str = "0123456789.:,;(*!?')";

/// Codepoints at or below this are never used for random samples.
const RANDOM_SAMPLE_FLOOR: u32 = 255;

/// The text blocks previewed for one face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleText {
    pub lowercase: Option<String>,
    pub uppercase: Option<String>,
    pub punctuation: Option<String>,
    /// Locale sample, or a random string of the face's own glyphs.
    pub sample: String,
    /// Whether `sample` was synthesized because the locale sample is not covered.
    pub sample_is_random: bool,
    /// Family and style name.
    pub title: String,
    /// Whether the face itself can render `title`; otherwise a fallback face is used.
    pub title_is_covered: bool,
}

fn covered(face: &FontFace, text: &str) -> Option<String> {
    covers(face, text).then(|| text.to_string())
}

/// Choose the preview text for `face`.
///
/// The face's preferred character map is activated before random synthesis, so the
/// random pool does not depend on which probes ran before.
pub fn synthesize<R: Rng + ?Sized>(
    face: &mut FontFace,
    language: &str,
    sample_len: usize,
    rng: &mut R,
) -> SampleText {
    let lowercase = covered(face, LOWERCASE_TEXT);
    let uppercase = covered(face, UPPERCASE_TEXT);
    let punctuation = covered(face, PUNCTUATION_TEXT);

    let locale_sample = language::sample_string(language);
    let (sample, sample_is_random) = if covers(face, locale_sample) {
        (locale_sample.to_string(), false)
    } else {
        if let Some(map) = face.preferred_charmap() {
            face.set_charmap(map);
        }
        tracing::debug!(
            "face does not cover the {} sample, synthesizing {} codepoints",
            language,
            sample_len
        );
        (random_sample(face, sample_len, rng), true)
    };

    let title = format!("{} {}", face.family_name(), face.style_name());
    let title_is_covered = covers(face, &title);

    SampleText {
        lowercase,
        uppercase,
        punctuation,
        sample,
        sample_is_random,
        title,
        title_is_covered,
    }
}

/// Codepoints above Latin-1 that the active character map resolves, ascending.
pub fn extended_codepoints(face: &FontFace) -> Vec<char> {
    let mut available = Vec::new();
    let mut next = face.next_char(RANDOM_SAMPLE_FLOOR);
    while let Some(c) = next {
        available.push(c);
        next = face.next_char(c as u32);
    }
    available
}

/// `n` codepoints drawn uniformly, with replacement, from [`extended_codepoints`].
///
/// Returns an empty string when the face has no such codepoints.
pub fn random_sample<R: Rng + ?Sized>(face: &FontFace, n: usize, rng: &mut R) -> String {
    let available = extended_codepoints(face);
    if available.is_empty() {
        tracing::debug!("no codepoints above U+00FF for a random sample");
        return String::new();
    }

    (0..n)
        .map(|_| available[rng.random_range(0..available.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use specimen_test_utils::TestFontBuilder;

    fn face(builder: TestFontBuilder) -> FontFace {
        FontFace::from_bytes(builder.build(), 0).unwrap()
    }

    #[test]
    fn test_latin_face_uses_stock_strings() {
        let mut face = face(TestFontBuilder::latin().family("Fixture").style("Regular"));
        let mut rng = StdRng::seed_from_u64(7);

        let text = synthesize(&mut face, "en-US", 36, &mut rng);
        assert_eq!(text.lowercase.as_deref(), Some(LOWERCASE_TEXT));
        assert_eq!(text.uppercase.as_deref(), Some(UPPERCASE_TEXT));
        assert_eq!(text.punctuation.as_deref(), Some(PUNCTUATION_TEXT));
        assert_eq!(text.sample, language::DEFAULT_SAMPLE);
        assert!(!text.sample_is_random);
        assert_eq!(text.title, "Fixture Regular");
        assert!(text.title_is_covered);
    }

    #[test]
    fn test_lines_are_independent() {
        let mut face = face(TestFontBuilder::new().unicode_charmap("abcdefghijklmnopqrstuvwxyz"));
        let mut rng = StdRng::seed_from_u64(7);

        let text = synthesize(&mut face, "en", 36, &mut rng);
        assert!(text.lowercase.is_some());
        assert!(text.uppercase.is_none());
        assert!(text.punctuation.is_none());
        assert!(!text.title_is_covered);
    }

    #[test]
    fn test_uncovered_locale_sample_is_random() {
        let symbols: Vec<u32> = (0xF020..0xF030).collect();
        let mut face = face(TestFontBuilder::new().symbol_charmap(symbols.clone()));
        let mut rng = StdRng::seed_from_u64(42);

        let text = synthesize(&mut face, "de", 36, &mut rng);
        assert!(text.sample_is_random);
        assert_eq!(text.sample.chars().count(), 36);
        assert!(text.sample.chars().all(|c| symbols.contains(&(c as u32))));
        assert!(text.lowercase.is_none());
    }

    #[test]
    fn test_random_pool_skips_latin1() {
        let face = face(
            TestFontBuilder::new().unicode_charmap("a\u{e9}\u{ff}\u{100}\u{3b1}\u{1F600}"),
        );
        assert_eq!(
            extended_codepoints(&face),
            vec!['\u{100}', '\u{3b1}', '\u{1F600}']
        );
    }

    #[test]
    fn test_random_sample_length_and_pool() {
        let face = face(TestFontBuilder::new().unicode_charmap("\u{3b1}\u{3b2}\u{3b3}"));
        let mut rng = StdRng::seed_from_u64(1);

        for n in [0, 1, 36, 100] {
            let sample = random_sample(&face, n, &mut rng);
            assert_eq!(sample.chars().count(), n);
            assert!(sample.chars().all(|c| "\u{3b1}\u{3b2}\u{3b3}".contains(c)));
        }
    }

    #[test]
    fn test_random_sample_is_reproducible_with_seed() {
        let face = face(TestFontBuilder::new().unicode_charmap("\u{3b1}\u{3b2}\u{3b3}\u{3b4}"));
        let a = random_sample(&face, 20, &mut StdRng::seed_from_u64(9));
        let b = random_sample(&face, 20, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_pool_gives_empty_sample() {
        let mut face = face(TestFontBuilder::new().unicode_charmap("xyz"));
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(random_sample(&face, 36, &mut rng), "");

        let text = synthesize(&mut face, "ru", 36, &mut rng);
        assert!(text.sample_is_random);
        assert!(text.sample.is_empty());
    }

    #[test]
    fn test_random_pool_comes_from_preferred_map() {
        // The symbol map is probed last, but enumeration uses the Unicode map.
        let mut face = face(
            TestFontBuilder::new()
                .unicode_charmap("\u{3b1}")
                .symbol_charmap([0xF041]),
        );
        face.set_charmap(1);
        let mut rng = StdRng::seed_from_u64(5);

        let text = synthesize(&mut face, "en", 4, &mut rng);
        assert_eq!(text.sample, "\u{3b1}\u{3b1}\u{3b1}\u{3b1}");
        assert_eq!(face.active_charmap(), Some(0));
    }
}
