//! Representative sample strings per language.

/// Sample used when no better match exists for the locale.
pub const DEFAULT_SAMPLE: &str = "The quick brown fox jumps over the lazy dog.";

/// Locale assumed when the environment does not report one.
pub const DEFAULT_LANGUAGE: &str = "en-US";

const SAMPLES: &[(&str, &str)] = &[
    (
        "ar",
        "نص حكيم له سر قاطع وذو شأن عظيم مكتوب على ثوب أخضر ومغلف بجلد أزرق.",
    ),
    ("cs", "Příliš žluťoučký kůň úpěl ďábelské ódy."),
    ("da", "Quizdeltagerne spiste jordbær med fløde, mens cirkusklovnen Walther spillede på xylofon."),
    ("de", "Zwölf Boxkämpfer jagen Viktor quer über den großen Sylter Deich."),
    ("el", "Θέλει αρετή και τόλμη η ελευθερία. (Ανδρέας Κάλβος)"),
    ("en", DEFAULT_SAMPLE),
    ("es", "Jovencillo emponzoñado de whisky: ¡qué figurota exhibe!"),
    ("fi", "Törkylempijävongahdus"),
    ("fr", "Voix ambiguë d'un cœur qui, au zéphyr, préfère les jattes de kiwis."),
    ("he", "דג סקרן שט לו בים זך אך לפתע פגש חבורה נחמדה שצצה כך."),
    ("hu", "Egy hűtlen vejét fülöncsípő, dühös mexikói úr Wesselényinél mázol Quitóban."),
    ("it", "Ma la volpe, col suo balzo, ha raggiunto il quieto Fido."),
    ("ja", "いろはにほへと ちりぬるを 色は匂へど 散りぬるを"),
    ("ko", "다람쥐 헌 쳇바퀴에 타고파"),
    ("nl", "Pa's wijze lynx bezag vroom het fikse aquaduct."),
    ("pl", "Pchnąć w tę łódź jeża lub ośm skrzyń fig."),
    (
        "pt",
        "Vejam a bruxa da raposa Salta-Pocinhas e o cão feliz que dorme regalado.",
    ),
    (
        "pt-br",
        "À noite, vovô Kowalsky vê o ímã cair no pé do pingüim queixoso e vovó põe açúcar no chá de tâmaras do jabuti feliz.",
    ),
    ("ru", "В чащах юга жил бы цитрус? Да, но фальшивый экземпляр!"),
    ("sv", "Flygande bäckasiner söka strax hwila på mjuka tuvor."),
    ("tr", "Pijamalı hasta, yağız şoföre çabucak güvendi."),
    ("uk", "Чуєш їх, доцю, га? Кумедна ж ти, прощайся без ґольфів!"),
    ("zh-cn", "我能吞下玻璃而不伤身体。"),
    ("zh-tw", "我能吞下玻璃而不傷身體。"),
];

/// The environment's locale, or [`DEFAULT_LANGUAGE`].
pub fn current_language() -> String {
    sys_locale::get_locale().unwrap_or_else(|| String::from(DEFAULT_LANGUAGE))
}

/// Sample string for `language`: exact tag, then primary subtag, then English.
///
/// Accepts BCP-47 (`pt-BR`) and POSIX (`pt_BR.UTF-8`) spellings.
pub fn sample_string(language: &str) -> &'static str {
    let tag = normalize(language);
    if let Some(sample) = lookup(&tag) {
        return sample;
    }

    let primary = tag.split('-').next().unwrap_or_default();
    if primary == "zh" {
        // Traditional script regions fall back to the Taiwan sample.
        let traditional = tag.contains("hant") || tag.ends_with("-hk") || tag.ends_with("-mo");
        return lookup(if traditional { "zh-tw" } else { "zh-cn" }).unwrap_or(DEFAULT_SAMPLE);
    }
    lookup(primary).unwrap_or(DEFAULT_SAMPLE)
}

fn lookup(tag: &str) -> Option<&'static str> {
    SAMPLES
        .binary_search_by(|(key, _)| (*key).cmp(tag))
        .ok()
        .map(|i| SAMPLES[i].1)
}

fn normalize(language: &str) -> String {
    let tag = language.split(['.', '@']).next().unwrap_or_default();
    tag.trim().replace('_', "-").to_ascii_lowercase()
}
