//! URL parameter helpers and types.
//!
//! Typed values ride in route segments as CBOR encoded with URL-safe base64.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::filter::Filter;


// You can use a custom type with the hash segment as long as it implements Display, FromStr and Default
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl <T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

// Display the state in a way that can be parsed by FromStr
impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        match ciborium::into_writer(self, &mut serialized) {
            Ok(()) => write!(f, "{}", URL_SAFE.encode(serialized))?,
            Err(e) => tracing::error!("Failed to encode url param: {e}"),
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateParseError {
    #[error("Failed to decode base64: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("Failed to deserialize: {0}")]
    Deserialize(#[from] ciborium::de::Error<std::io::Error>),
    #[error("{0} trailing bytes after payload")]
    TrailingBytes(usize),
}

// Parse the state from a string that was created by Display
impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE.decode(s.as_bytes())?;
        let total = decoded.len();
        let mut cursor = std::io::Cursor::new(decoded);
        let parsed = ciborium::from_reader(&mut cursor)?;
        // the segment must hold exactly one CBOR item
        let consumed = usize::try_from(cursor.position()).unwrap_or(total);
        if consumed < total {
            return Err(StateParseError::TrailingBytes(total - consumed));
        }
        Ok(parsed)
    }
}

impl<T: for<'de> Deserialize<'de> + Default> UrlParam<T> {
    /// Parses like `FromStr`, but a malformed segment yields `T::default()`.
    /// The failure is logged and never reaches the user.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|e: StateParseError| {
            tracing::warn!("Malformed url param {s:?}, falling back to default: {e}");
            UrlParam(T::default())
        })
    }
}


/// Route segment carrying a [`Filter`] between the search screen and the filter editor.
///
/// Parsing never fails: a malformed segment becomes `Filter::default()`, so a
/// broken link opens an unfiltered search instead of a routing error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterArg(pub Filter);

impl FilterArg {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn into_filter(self) -> Filter {
        self.0
    }
}

impl From<Filter> for FilterArg {
    fn from(value: Filter) -> Self {
        FilterArg(value)
    }
}

impl Display for FilterArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // the wire form is shared with UrlParam<Filter>
        let param = UrlParam(&self.0);
        write!(f, "{param}")
    }
}

impl FromStr for FilterArg {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FilterArg(UrlParam::<Filter>::parse_or_default(s).0))
    }
}
