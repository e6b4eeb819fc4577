/// Source languages the hosted text models can be trained on. `unk` is used
/// when the user brings their own hub model.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "ar", "bn", "de", "es", "fi", "fr", "hi", "it", "ja", "ko", "nl", "pt", "sv", "tr", "zh",
    "unk",
];
