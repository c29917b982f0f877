// ============================================================
// LANGUAGE TRACKS
// ============================================================
// Language courses get a dedicated template regardless of category

/// A recognised language-learning track
#[derive(Debug, PartialEq, Eq)]
pub struct LanguageTrack {
    pub key: &'static str,
    pub display_name: &'static str,

    /// Lower-case needles matched against the raw course text
    pub aliases: &'static [&'static str],

    pub template: &'static [&'static str],
}

pub static LANGUAGE_TRACKS: [LanguageTrack; 6] = [
    LanguageTrack {
        key: "chinese",
        display_name: "Chinese",
        aliases: &["chinese", "mandarin", "中文", "汉语"],
        template: &[
            "Introduction to Mandarin Chinese",
            "Pinyin and Characters",
            "Grammar and Sentence Structure",
            "Reading and Writing",
            "Listening and Speaking",
        ],
    },
    LanguageTrack {
        key: "spanish",
        display_name: "Spanish",
        aliases: &["spanish", "español"],
        template: &[
            "Introduction to Spanish",
            "Pronunciation and the Spanish Alphabet",
            "Grammar and Sentence Structure",
            "Reading and Writing",
            "Listening and Speaking",
        ],
    },
    LanguageTrack {
        key: "french",
        display_name: "French",
        aliases: &["french", "français"],
        template: &[
            "Introduction to French",
            "French Pronunciation and Phonetics",
            "Grammar and Sentence Structure",
            "Reading and Writing",
            "Listening and Speaking",
        ],
    },
    LanguageTrack {
        key: "german",
        display_name: "German",
        aliases: &["german", "deutsch"],
        template: &[
            "Introduction to German",
            "German Pronunciation and Phonetics",
            "Grammar and Sentence Structure",
            "Reading and Writing",
            "Listening and Speaking",
        ],
    },
    LanguageTrack {
        key: "japanese",
        display_name: "Japanese",
        aliases: &["japanese", "日本語"],
        template: &[
            "Introduction to Japanese",
            "Hiragana and Katakana",
            "Kanji and Vocabulary",
            "Grammar and Sentence Structure",
            "Listening and Speaking",
        ],
    },
    LanguageTrack {
        key: "arabic",
        display_name: "Arabic",
        aliases: &["arabic", "العربية"],
        template: &[
            "Introduction to Arabic",
            "The Arabic Alphabet and Pronunciation",
            "Grammar and Sentence Structure",
            "Reading and Writing",
            "Listening and Speaking",
        ],
    },
];

/// Find the first track whose alias occurs in `text` (case-insensitive).
pub fn detect_language_track(text: &str) -> Option<&'static LanguageTrack> {
    let haystack = text.to_lowercase();
    LANGUAGE_TRACKS
        .iter()
        .find(|track| track.aliases.iter().any(|alias| haystack.contains(alias)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_case_insensitively() {
        let track = detect_language_track("Beginner MANDARIN Course").unwrap();
        assert_eq!(track.key, "chinese");

        let track = detect_language_track("Español para principiantes").unwrap();
        assert_eq!(track.key, "spanish");
    }

    #[test]
    fn test_native_script_alias() {
        assert_eq!(detect_language_track("日本語 1").map(|t| t.key), Some("japanese"));
    }

    #[test]
    fn test_no_track() {
        assert!(detect_language_track("Introduction to Python").is_none());
        assert!(detect_language_track("").is_none());
    }

    #[test]
    fn test_templates_are_in_range() {
        for track in LANGUAGE_TRACKS.iter() {
            assert!((4..=5).contains(&track.template.len()), "{}", track.key);
        }
    }
}
