//! # seqmap
//!
//! An insertion-ordered key-value map with positional slicing,
//! comparator-driven set algebra, and numeric range utilities.
//!
//! ## Overview
//!
//! The centre of this crate is [`OrderedMap`], an associative collection
//! that remembers the order in which its entries were inserted and exposes
//! that order as a first-class property:
//!
//! - **Normalized keys**: keys are drawn from a closed integer-or-text
//!   domain ([`Key`]); decimal strings such as `"123"` canonicalize to the
//!   integer key `123`, while `"0123"` stays textual.
//! - **Positional access and slicing**: entries can be addressed by signed
//!   offset (`at`, `pair_at`, `key_at`) and sliced with negative,
//!   out-of-range indices that clamp instead of panicking.
//! - **Set algebra**: difference and intersection over two maps,
//!   parameterized independently by a key [`Comparator`] and a value
//!   [`Comparator`], each of which may be ignored, defaulted, or supplied
//!   by the caller.
//! - **Range generation**: arithmetic sequences over a closed
//!   integer-or-real domain ([`Numeric`]) with integer (exclusive bound)
//!   and real (inclusive bound) modes.
//! - **Membership predicates**: exact and partial key-set checks with
//!   optional collection of unexpected and missing keys.
//!
//! ## Example
//!
//! ```rust
//! use seqmap::{Comparator, Key, OrderedMap};
//!
//! let mut map = OrderedMap::new();
//! map.insert("a", 1);
//! map.insert("b", 2);
//! map.insert("c", 3);
//!
//! // Insertion order is observable positionally.
//! assert_eq!(map.key_at(0), Some(&Key::from("a")));
//! assert_eq!(map.at(-1), Some(&3));
//!
//! // Slices clamp out-of-range endpoints instead of failing.
//! let tail = map.slice(1..100);
//! assert_eq!(tail.len(), 2);
//!
//! // Key-based difference against another map.
//! let mut other = OrderedMap::new();
//! other.insert("b", 99);
//! let result = map
//!     .difference(&other, Comparator::Default, Comparator::Ignored)
//!     .unwrap();
//! assert_eq!(result.keys().collect::<Vec<_>>(), vec![&Key::from("a"), &Key::from("c")]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialization support for [`Key`] and [`OrderedMap`],
//!   preserving both entry order and integer/text key distinction.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the commonly used types of the crate.
///
/// # Usage
///
/// ```rust
/// use seqmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compare::Comparator;
    pub use crate::error::{MissingKeyError, NoComparatorsError, ZeroStepError};
    pub use crate::key::Key;
    pub use crate::map::{KeyReport, OrderedMap};
    pub use crate::range::{Numeric, range, range_by, range_to};
}

pub mod compare;
pub mod error;
pub mod key;
pub mod map;
pub mod range;

mod index;

pub use compare::Comparator;
pub use error::{MissingKeyError, NoComparatorsError, ZeroStepError};
pub use key::Key;
pub use map::{KeyReport, OrderedMap};
pub use range::{Numeric, range, range_by, range_to};
