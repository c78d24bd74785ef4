use std::collections::HashMap;

/// Information about a supported language
#[derive(PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub translation: &'static str,
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "pt",
            LanguageInfo {
                code: "pt",
                translation: include_str!("../translations/pt.json"),
            },
        ),
        (
            "en",
            LanguageInfo {
                code: "en",
                translation: include_str!("../translations/en.json"),
            },
        ),
    ])
}
