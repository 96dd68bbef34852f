//! Block background classification
//!
//! Authored backgrounds arrive either as a bare string that has to be
//! sniffed (`"#ff0000"`, `"linear-gradient(...)"`, `"accent-panel"`) or as an
//! explicit `{kind, value}` object that skips the guesswork. Both end up as a
//! [`BackgroundSpec`], from which the assembler derives a
//! [`BackgroundDirective`].
//!
//! A bare named color (`"red"`) or a design-token reference cannot be told
//! apart from a utility class by prefix alone; such strings classify as
//! [`BackgroundKind::Class`]. Authors who mean a literal color should use the
//! tagged form.

use serde::de::IgnoredAny;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::block::BackgroundWidth;

token_enum! {
    pub enum BackgroundKind {
        Hex = "hex",
        Gradient = "gradient",
        Class = "class",
        None = "none",
    }
    default = None;
}

const GRADIENT_PREFIXES: &[&str] = &["linear-gradient", "radial-gradient"];

/// A classified background value
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackgroundSpec {
    #[default]
    None,
    Hex(String),
    Gradient(String),
    Class(String),
}

impl BackgroundSpec {
    /// Classify an authored background string
    ///
    /// Total over all inputs. Hex and gradient prefixes are checked before
    /// the class fallback.
    pub fn classify(spec: &str) -> Self {
        let spec = spec.trim();
        if spec.is_empty() || spec.eq_ignore_ascii_case("transparent") {
            return BackgroundSpec::None;
        }
        if spec.starts_with('#') {
            return BackgroundSpec::Hex(spec.to_string());
        }
        if GRADIENT_PREFIXES.iter().any(|prefix| spec.starts_with(prefix)) {
            return BackgroundSpec::Gradient(spec.to_string());
        }
        BackgroundSpec::Class(spec.to_string())
    }

    /// Build from an explicit kind, trusting it over the value's shape
    pub fn from_parts(kind: BackgroundKind, value: impl Into<String>) -> Self {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return BackgroundSpec::None;
        }
        match kind {
            BackgroundKind::None => BackgroundSpec::None,
            BackgroundKind::Hex => BackgroundSpec::Hex(value.to_string()),
            BackgroundKind::Gradient => BackgroundSpec::Gradient(value.to_string()),
            BackgroundKind::Class => BackgroundSpec::Class(value.to_string()),
        }
    }

    pub fn kind(&self) -> BackgroundKind {
        match self {
            BackgroundSpec::None => BackgroundKind::None,
            BackgroundSpec::Hex(_) => BackgroundKind::Hex,
            BackgroundSpec::Gradient(_) => BackgroundKind::Gradient,
            BackgroundSpec::Class(_) => BackgroundKind::Class,
        }
    }

    /// The literal value; empty for `None`
    pub fn value(&self) -> &str {
        match self {
            BackgroundSpec::None => "",
            BackgroundSpec::Hex(v) | BackgroundSpec::Gradient(v) | BackgroundSpec::Class(v) => v,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, BackgroundSpec::None)
    }

    /// How the rendering layer should paint this background
    pub fn directive(&self, width: BackgroundWidth) -> Option<BackgroundDirective> {
        let paint = match self {
            BackgroundSpec::None => return None,
            BackgroundSpec::Hex(color) => BackgroundPaint::Inline {
                property: "background-color".to_string(),
                value: color.clone(),
            },
            BackgroundSpec::Gradient(gradient) => BackgroundPaint::Inline {
                property: "background".to_string(),
                value: gradient.clone(),
            },
            BackgroundSpec::Class(token) => BackgroundPaint::Class {
                token: token.clone(),
            },
        };
        let target = match width {
            BackgroundWidth::Full => BackgroundTarget::Outer,
            BackgroundWidth::Content => BackgroundTarget::Inner,
        };
        Some(BackgroundDirective { target, paint })
    }
}

impl Serialize for BackgroundSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BackgroundSpec", 2)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("value", self.value())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBackground {
    Spec(String),
    Tagged {
        #[serde(default)]
        kind: BackgroundKind,
        #[serde(default)]
        value: String,
    },
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for BackgroundSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawBackground>::deserialize(deserializer)? {
            Some(RawBackground::Spec(spec)) => BackgroundSpec::classify(&spec),
            Some(RawBackground::Tagged { kind, value }) => BackgroundSpec::from_parts(kind, value),
            Some(RawBackground::Other(_)) => {
                tracing::debug!("unrecognized background value, using none");
                BackgroundSpec::None
            }
            None => BackgroundSpec::None,
        })
    }
}

token_enum! {
    /// Which box a background paints
    pub enum BackgroundTarget {
        /// The outer wrapper, edge to edge
        Outer = "outer",
        /// The content box
        Inner = "inner",
    }
    default = Inner;
}

/// Inline declaration or class reference
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackgroundPaint {
    Inline { property: String, value: String },
    Class { token: String },
}

/// Resolved background for one plan entry
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct BackgroundDirective {
    pub target: BackgroundTarget,
    pub paint: BackgroundPaint,
}

impl BackgroundDirective {
    pub fn is_inline(&self) -> bool {
        matches!(self.paint, BackgroundPaint::Inline { .. })
    }

    /// Inline `(property, value)`, if this is not a class reference
    pub fn declaration(&self) -> Option<(&str, &str)> {
        match &self.paint {
            BackgroundPaint::Inline { property, value } => Some((property.as_str(), value.as_str())),
            BackgroundPaint::Class { .. } => None,
        }
    }

    pub fn class_token(&self) -> Option<&str> {
        match &self.paint {
            BackgroundPaint::Class { token } => Some(token.as_str()),
            BackgroundPaint::Inline { .. } => None,
        }
    }
}
