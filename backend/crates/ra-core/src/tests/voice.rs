use crate::{ParsedLang, VoiceKind, parse_lang};
use crate::voice::{
    is_amazon_polly, is_google_native, is_google_translate, is_premium_voice, is_remote_voice,
};

#[test]
fn test_google_native_voice() {
    assert!(is_google_native("Google US English"));
    assert!(!is_google_native("GoogleTranslate English"));
    assert_eq!(VoiceKind::classify("Google US English"), VoiceKind::GoogleNative);
}

#[test]
fn test_google_translate_voice_is_remote_not_premium() {
    let name = "GoogleTranslate Japanese";
    assert!(is_google_translate(name));
    assert!(is_remote_voice(name));
    assert!(!is_premium_voice(name));
    assert_eq!(VoiceKind::classify(name), VoiceKind::GoogleTranslate);
}

#[test]
fn test_amazon_polly_voice_is_remote_and_premium() {
    let name = "Amazon US English (Joanna)";
    assert!(is_amazon_polly(name));
    assert!(is_remote_voice(name));
    assert!(is_premium_voice(name));
    assert!(VoiceKind::classify(name).is_premium());
}

#[test]
fn test_prefix_must_be_followed_by_space() {
    assert_eq!(VoiceKind::classify("AmazonJoanna"), VoiceKind::Other);
    assert_eq!(VoiceKind::classify("Microsoft David"), VoiceKind::Other);
    assert!(!VoiceKind::Other.is_remote());
}

#[test]
fn test_parse_lang_normalizes_underscore_and_case() {
    let parsed = parse_lang("en_US");
    assert_eq!(parsed.lang, "en");
    assert_eq!(parsed.rest.as_deref(), Some("us"));
}

#[test]
fn test_parse_lang_keeps_only_first_subtag() {
    assert_eq!(
        parse_lang("EN-us-x"),
        ParsedLang {
            lang: String::from("en"),
            rest: Some(String::from("us")),
        }
    );
}

#[test]
fn test_parse_lang_without_subtag() {
    let parsed = parse_lang("en");
    assert_eq!(parsed.lang, "en");
    assert!(parsed.rest.is_none());
}

#[test]
fn test_parse_lang_empty_tag() {
    let parsed = parse_lang("");
    assert_eq!(parsed.lang, "");
    assert!(parsed.rest.is_none());
}
