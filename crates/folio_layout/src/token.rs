//! Lenient parsing of authored enum-like fields
//!
//! Authored content arrives as loosely typed JSON or TOML: `"2"` and `2` both
//! mean a two-track span, and a typo must not sink the whole section. Every
//! keyword field is declared with [`token_enum!`] and deserializes through
//! [`lenient`], which maps anything unrecognized to the field's default.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawToken {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
    Other(IgnoredAny),
}

impl RawToken {
    fn into_text(self) -> Option<String> {
        match self {
            RawToken::Text(text) => Some(text),
            RawToken::Integer(value) => Some(value.to_string()),
            RawToken::Float(value) => Some(value.to_string()),
            RawToken::Flag(value) => Some(value.to_string()),
            RawToken::Other(_) => None,
        }
    }
}

/// Deserialize a keyword, falling back to `T::default()` on anything unknown
pub(crate) fn lenient<'de, D, T>(
    deserializer: D,
    kind: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default,
{
    let text = Option::<RawToken>::deserialize(deserializer)?.and_then(RawToken::into_text);
    let Some(text) = text else {
        return Ok(T::default());
    };
    Ok(parse(&text).unwrap_or_else(|| {
        tracing::debug!(kind, value = %text, "unrecognized value, using default");
        T::default()
    }))
}

/// Deserialize a CSS length; bare numbers become pixels, blanks become `None`
pub(crate) fn lenient_length<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<RawToken>::deserialize(deserializer)?.and_then(RawToken::into_text);
    Ok(text.as_deref().and_then(css_length))
}

/// Deserialize a percentage from `60`, `"60"` or `"60%"`
pub(crate) fn lenient_percent<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<RawToken>::deserialize(deserializer)?.and_then(RawToken::into_text);
    Ok(text.as_deref().and_then(parse_percent))
}

/// Deserialize a flag from `true`, `"yes"`, `1` and friends
///
/// Missing, null or unrecognized values yield `default`.
pub(crate) fn lenient_flag<'de, D>(deserializer: D, default: bool) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Option::<RawToken>::deserialize(deserializer)? {
        Some(RawToken::Flag(value)) => Some(value),
        Some(RawToken::Integer(value)) => match value {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        },
        Some(RawToken::Text(text)) => parse_flag(&text),
        Some(RawToken::Float(_)) | Some(RawToken::Other(_)) | None => None,
    };
    Ok(flag.unwrap_or(default))
}

pub(crate) fn flag_off<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    lenient_flag(deserializer, false)
}

pub(crate) fn flag_on<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    lenient_flag(deserializer, true)
}

/// Deserialize an integer from `2`, `2.0` or `"2"`; anything else is `0`
pub(crate) fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<RawToken>::deserialize(deserializer)? {
        Some(RawToken::Integer(value)) => Some(value),
        Some(RawToken::Float(value)) if value.is_finite() && value.fract() == 0.0 => Some(value as i64),
        Some(RawToken::Text(text)) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(value.unwrap_or_else(|| {
        tracing::debug!("unrecognized integer, using 0");
        0
    }))
}

/// Deserialize a free-form CSS value; blanks, flags and unsafe values become `None`
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<RawToken>::deserialize(deserializer)? {
        Some(RawToken::Flag(_)) | None => None,
        Some(raw) => raw.into_text(),
    };
    Ok(text.as_deref().and_then(css_value).map(str::to_string))
}

fn parse_flag(text: &str) -> Option<bool> {
    let text = text.trim();
    if ["true", "yes", "on", "1"].iter().any(|t| text.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if ["false", "no", "off", "0"].iter().any(|t| text.eq_ignore_ascii_case(t)) {
        Some(false)
    } else {
        None
    }
}

/// Trim an authored CSS value, rejecting blanks and anything that could end
/// a declaration or an arbitrary-value utility
pub fn css_value(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if value.contains(&[';', '{', '}', ']'][..]) {
        tracing::debug!(value, "rejecting unsafe css value");
        return None;
    }
    Some(value)
}

/// Normalize an authored length into a CSS length
pub fn css_length(value: &str) -> Option<String> {
    let value = css_value(value)?;
    if value.parse::<f64>().is_ok() {
        return Some(format!("{value}px"));
    }
    Some(value.to_string())
}

/// Check whether a CSS length is zero (`0`, `0px`, `0rem`, ...)
pub(crate) fn is_zero_length(value: &str) -> bool {
    let number = value.trim().trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
    number.parse::<f64>().map(|n| n == 0.0).unwrap_or(false)
}

fn parse_percent(value: &str) -> Option<f32> {
    let value = value.trim().trim_end_matches('%').trim();
    value.parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Format a percentage without trailing zeros (`60%`, `33.3333%`)
pub(crate) fn format_percent(value: f32) -> String {
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text}%")
}

/// Declare a keyword enum with canonical spelling, aliases and a default.
///
/// Generates `as_str`, `parse`, `ALL`, `Default`, `Display`, and lenient
/// serde impls.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $canonical:literal $(| $alias:literal)*
            ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical spelling
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $canonical,)+
                }
            }

            /// Parse a canonical spelling or alias (ASCII case-insensitive)
            pub fn parse(input: &str) -> Option<Self> {
                let input = input.trim();
                $(
                    if input.eq_ignore_ascii_case($canonical) $(|| input.eq_ignore_ascii_case($alias))* {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $crate::token::lenient(deserializer, stringify!($name), $name::parse)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    token_enum! {
        pub enum Span {
            One = "1",
            Two = "2" | "double",
        }
        default = One;
    }

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default)]
        span: Span,
    }

    #[test]
    fn test_token_accepts_strings_numbers_and_aliases() {
        let parse = |json: &str| serde_json::from_str::<Holder>(json).unwrap().span;
        assert_eq!(parse(r#"{"span": "2"}"#), Span::Two);
        assert_eq!(parse(r#"{"span": 2}"#), Span::Two);
        assert_eq!(parse(r#"{"span": "DOUBLE"}"#), Span::Two);
        assert_eq!(parse(r#"{"span": "seven"}"#), Span::One);
        assert_eq!(parse(r#"{"span": null}"#), Span::One);
        assert_eq!(parse(r#"{"span": {"weird": true}}"#), Span::One);
        assert_eq!(parse(r#"{}"#), Span::One);
    }

    #[derive(Deserialize)]
    struct Scalars {
        #[serde(default, deserialize_with = "flag_off")]
        off: bool,
        #[serde(default = "yes", deserialize_with = "flag_on")]
        on: bool,
        #[serde(default, deserialize_with = "lenient_int")]
        order: i64,
        #[serde(default, deserialize_with = "lenient_text")]
        text: Option<String>,
    }

    fn yes() -> bool {
        true
    }

    #[test]
    fn test_scalars_degrade_to_defaults() {
        let parse = |json: &str| serde_json::from_str::<Scalars>(json).unwrap();

        let s = parse(r#"{"off": "true", "on": "NO", "order": "2", "text": 3}"#);
        assert!(s.off);
        assert!(!s.on);
        assert_eq!(s.order, 2);
        assert_eq!(s.text.as_deref(), Some("3"));

        let s = parse(r#"{"off": null, "on": null, "order": null, "text": null}"#);
        assert!(!s.off);
        assert!(s.on);
        assert_eq!(s.order, 0);
        assert_eq!(s.text, None);

        let s = parse(r#"{"off": [1], "on": "maybe", "order": 2.5, "text": true}"#);
        assert!(!s.off);
        assert!(s.on);
        assert_eq!(s.order, 0);
        assert_eq!(s.text, None);

        let s = parse(r#"{"off": 1, "order": 4.0, "text": "red; color: blue"}"#);
        assert!(s.off);
        assert!(s.on);
        assert_eq!(s.order, 4);
        assert_eq!(s.text, None);
    }

    #[test]
    fn test_css_value_rejects_breakouts() {
        assert_eq!(css_value(" center "), Some("center"));
        assert_eq!(css_value("rgb(0 0 0 / 50%)"), Some("rgb(0 0 0 / 50%)"));
        for unsafe_value in ["1px;x", "a{b", "}", "10px]extra"] {
            assert_eq!(css_value(unsafe_value), None, "{unsafe_value}");
        }
        assert_eq!(css_length("250px] hover:bg-red"), None);
    }

    #[test]
    fn test_css_length() {
        assert_eq!(css_length("250"), Some("250px".to_string()));
        assert_eq!(css_length(" 40% "), Some("40%".to_string()));
        assert_eq!(css_length("  "), None);
        assert!(is_zero_length("0"));
        assert!(is_zero_length("0px"));
        assert!(!is_zero_length("1px"));
        assert!(!is_zero_length("auto"));
    }

    #[test]
    fn test_percent_parsing_and_formatting() {
        assert_eq!(parse_percent("60%"), Some(60.0));
        assert_eq!(parse_percent("abc"), None);
        assert_eq!(format_percent(60.0), "60%");
        assert_eq!(format_percent(100.0 / 3.0), "33.3333%");
    }
}
