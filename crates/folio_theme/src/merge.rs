//! Schema-driven override merging
//!
//! Every token group is declared once through [`token_group!`], which emits:
//!
//! - the complete group struct (every leaf required)
//! - a partial mirror of it (every leaf optional, nested groups partial)
//! - a [`Merge`] impl that walks both trees field by field
//! - [`TokenTree`] impls for path lookup and leaf enumeration
//!
//! Leaves (strings, lists, numbers) merge by replacement, so a list in an
//! override replaces the default list wholesale instead of extending it.

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Apply a partial patch onto a complete value, producing a new complete value
pub trait Merge: Sized {
    /// Partial mirror of `Self`
    type Patch;

    fn merge(&self, patch: &Self::Patch) -> Self;
}

/// Borrowed view of a single token leaf
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue<'a> {
    Text(&'a str),
    List(&'a [String]),
    Integer(u16),
    Number(f32),
}

impl Display for TokenValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Text(text) => f.write_str(text),
            TokenValue::List(items) => f.write_str(&items.join(", ")),
            TokenValue::Integer(value) => write!(f, "{value}"),
            TokenValue::Number(value) => write!(f, "{value}"),
        }
    }
}

/// Path-addressable token tree
///
/// Implemented by complete groups, partial groups and leaves alike. Path
/// segments match field names ignoring case, `_` and `-`, so both
/// `font_family` and `fontFamily` address the same group.
pub trait TokenTree {
    /// Visit every defined leaf with its path
    fn visit<'a>(
        &'a self,
        path: &mut Vec<&'static str>,
        visitor: &mut dyn FnMut(&[&'static str], TokenValue<'a>),
    );

    /// Look up a leaf by path segments
    fn lookup(&self, path: &[&str]) -> Option<TokenValue<'_>>;

    /// Collect every defined leaf as `(dotted.path, value)` pairs
    fn leaves(&self) -> Vec<(String, TokenValue<'_>)> {
        let mut out = Vec::new();
        self.visit(&mut Vec::new(), &mut |path, value| {
            out.push((path.join("."), value));
        });
        out
    }
}

/// Compare a path segment against a field name
pub(crate) fn segment_matches(segment: &str, field: &str) -> bool {
    let mut lhs = segment
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase());
    let mut rhs = field.chars().filter(|c| *c != '_');
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a == b => continue,
            _ => return false,
        }
    }
}

macro_rules! leaf_token {
    ($ty:ty, $value:ident => $view:expr) => {
        impl Merge for $ty {
            type Patch = $ty;

            fn merge(&self, patch: &Self::Patch) -> Self {
                patch.clone()
            }
        }

        impl TokenTree for $ty {
            fn visit<'a>(
                &'a self,
                path: &mut Vec<&'static str>,
                visitor: &mut dyn FnMut(&[&'static str], TokenValue<'a>),
            ) {
                let $value = self;
                visitor(path.as_slice(), $view);
            }

            fn lookup(&self, path: &[&str]) -> Option<TokenValue<'_>> {
                let $value = self;
                path.is_empty().then(|| $view)
            }
        }
    };
}

leaf_token!(String, value => TokenValue::Text(value.as_str()));
leaf_token!(Vec<String>, value => TokenValue::List(value.as_slice()));
leaf_token!(u16, value => TokenValue::Integer(*value));
leaf_token!(f32, value => TokenValue::Number(*value));

/// Declare a token group together with its partial override mirror.
///
/// ```ignore
/// token_group! {
///     /// Brand color ramp
///     pub struct BrandColor => BrandColorOverride {
///         main: String,
///         light: String,
///     }
/// }
/// ```
macro_rules! token_group {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $patch:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        #[doc = concat!("Partial mirror of [`", stringify!($name), "`]; unset leaves keep their base value.")]
        #[derive(Clone, Debug, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default, rename_all = "camelCase", deny_unknown_fields)]
        pub struct $patch {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<<$ty as $crate::merge::Merge>::Patch>,
            )*
        }

        impl $patch {
            /// True when no leaf in this group is set
            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }
        }

        impl $crate::merge::Merge for $name {
            type Patch = $patch;

            fn merge(&self, patch: &Self::Patch) -> Self {
                Self {
                    $(
                        $field: match &patch.$field {
                            Some(part) => $crate::merge::Merge::merge(&self.$field, part),
                            None => self.$field.clone(),
                        },
                    )*
                }
            }
        }

        impl $crate::merge::TokenTree for $name {
            fn visit<'a>(
                &'a self,
                path: &mut Vec<&'static str>,
                visitor: &mut dyn FnMut(&[&'static str], $crate::merge::TokenValue<'a>),
            ) {
                $(
                    path.push(stringify!($field));
                    $crate::merge::TokenTree::visit(&self.$field, path, visitor);
                    path.pop();
                )*
            }

            fn lookup(&self, path: &[&str]) -> Option<$crate::merge::TokenValue<'_>> {
                let (head, rest) = path.split_first()?;
                $(
                    if $crate::merge::segment_matches(head, stringify!($field)) {
                        return $crate::merge::TokenTree::lookup(&self.$field, rest);
                    }
                )*
                None
            }
        }

        impl $crate::merge::TokenTree for $patch {
            fn visit<'a>(
                &'a self,
                path: &mut Vec<&'static str>,
                visitor: &mut dyn FnMut(&[&'static str], $crate::merge::TokenValue<'a>),
            ) {
                $(
                    if let Some(part) = &self.$field {
                        path.push(stringify!($field));
                        $crate::merge::TokenTree::visit(part, path, visitor);
                        path.pop();
                    }
                )*
            }

            fn lookup(&self, path: &[&str]) -> Option<$crate::merge::TokenValue<'_>> {
                let (head, rest) = path.split_first()?;
                $(
                    if $crate::merge::segment_matches(head, stringify!($field)) {
                        return self
                            .$field
                            .as_ref()
                            .and_then(|part| $crate::merge::TokenTree::lookup(part, rest));
                    }
                )*
                None
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    token_group! {
        pub struct Inner => InnerOverride {
            label: String,
            stops: Vec<String>,
        }
    }

    token_group! {
        pub struct Outer => OuterOverride {
            inner: Inner,
            weight: u16,
        }
    }

    fn outer() -> Outer {
        Outer {
            inner: Inner {
                label: "base".into(),
                stops: vec!["#000".into(), "#fff".into()],
            },
            weight: 400,
        }
    }

    #[test]
    fn test_unset_leaves_keep_base() {
        let merged = outer().merge(&OuterOverride {
            weight: Some(700),
            ..Default::default()
        });
        assert_eq!(merged.weight, 700);
        assert_eq!(merged.inner, outer().inner);
    }

    #[test]
    fn test_lists_are_replaced_wholesale() {
        let merged = outer().merge(&OuterOverride {
            inner: Some(InnerOverride {
                stops: Some(vec!["#f00".into()]),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(merged.inner.stops, vec!["#f00".to_string()]);
        assert_eq!(merged.inner.label, "base");
    }

    #[test]
    fn test_lookup_accepts_camel_and_snake_segments() {
        assert!(segment_matches("fontFamily", "font_family"));
        assert!(segment_matches("font-family", "font_family"));
        assert!(!segment_matches("font", "font_family"));

        let tree = outer();
        assert_eq!(tree.lookup(&["inner", "label"]), Some(TokenValue::Text("base")));
        assert_eq!(tree.lookup(&["inner"]), None);
        assert_eq!(tree.lookup(&["weight", "extra"]), None);
    }

    #[test]
    fn test_partial_tree_only_visits_set_leaves() {
        let patch = OuterOverride {
            inner: Some(InnerOverride {
                label: Some("patched".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let leaves = patch.leaves();
        assert_eq!(leaves, vec![("inner.label".to_string(), TokenValue::Text("patched"))]);
        assert!(!patch.is_empty());
        assert!(OuterOverride::default().is_empty());
    }
}
