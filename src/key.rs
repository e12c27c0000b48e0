//! The key model: a closed integer-or-text key domain with deterministic
//! normalization.
//!
//! Keys in an [`OrderedMap`](crate::OrderedMap) are either integers or
//! text. The two representations overlap: the text `"123"` denotes the same
//! logical key as the integer `123`. [`Key`] resolves that overlap with a
//! total, pure canonicalization rule — a string that is exactly the
//! canonical decimal rendering of an integer becomes [`Key::Int`], and
//! every other string stays [`Key::Text`]. Because the rule is applied by
//! every `From` conversion, two logically equal key spellings always
//! compare equal under plain `==`, and a key retrieved from a map by
//! iteration compares strictly equal to the normalized form of whatever
//! the caller originally inserted.
//!
//! # Canonicalization rule
//!
//! A string canonicalizes to an integer when all of the following hold:
//!
//! - it is a non-empty run of ASCII digits, optionally preceded by `-`;
//! - it has no superfluous leading zero (`"0"` is canonical, `"0123"` is
//!   not) and no leading `+`;
//! - it is not `"-0"` or a zero-padded negative (`"-0123"`);
//! - its value fits in `i64`.
//!
//! # Examples
//!
//! ```rust
//! use seqmap::Key;
//!
//! assert_eq!(Key::from("123"), Key::Int(123));
//! assert_eq!(Key::from("-123"), Key::Int(-123));
//! assert_eq!(Key::from("0123"), Key::Text("0123".to_string()));
//! assert_eq!(Key::from("-0"), Key::Text("-0".to_string()));
//! assert_eq!(Key::from(7), Key::Int(7));
//! ```

/// A normalized map key: an integer or a piece of text.
///
/// Construct keys through the `From` conversions, which apply the
/// canonicalization rule described at the [module level](self). The
/// derived ordering sorts integer keys before text keys, integers
/// numerically and text lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// An integer key, either inserted as an integer or canonicalized
    /// from its decimal string form.
    Int(i64),
    /// A text key that does not canonicalize to an integer.
    Text(String),
}

impl Key {
    /// Returns the integer value if this is an integer key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::Key;
    ///
    /// assert_eq!(Key::from("123").as_int(), Some(123));
    /// assert_eq!(Key::from("abc").as_int(), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Returns the text if this is a text key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::Key;
    ///
    /// assert_eq!(Key::from("abc").as_text(), Some("abc"));
    /// assert_eq!(Key::from("123").as_text(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Returns `true` if this is an integer key.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }
}

/// Parses `text` as a canonical decimal integer, or returns `None` when
/// the text must remain a text key.
fn canonical_int(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    // "0" is canonical; "0123" and "-0123" are not, and neither is "-0".
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if digits == "0" && text.starts_with('-') {
        return None;
    }
    // Values outside i64 stay textual.
    text.parse::<i64>().ok()
}

impl From<i64> for Key {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Key {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&Key> for Key {
    #[inline]
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        canonical_int(text).map_or_else(|| Self::Text(text.to_string()), Self::Int)
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        canonical_int(&text).map_or(Self::Text(text), Self::Int)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Text(text) => write!(formatter, "{text}"),
        }
    }
}

static_assertions::assert_impl_all!(Key: Send, Sync, Clone);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

#[cfg(feature = "serde")]
struct KeyVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an integer or a string")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Key::Int(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(value)
            .map(Key::Int)
            .map_err(|_| E::custom(format!("integer key {value} out of range")))
    }

    fn visit_str<E>(self, text: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Key::from(text))
    }

    fn visit_string<E>(self, text: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Key::from(text))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(KeyVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
