//! Typewise – precise type tagging, type assertions and best-effort coercion
//! for dynamic values.
//!
//! Typewise centers on the [`value::Value`] model: a closed set of variants
//! covering everything a dynamic runtime can hand over (null, undefined,
//! booleans, numbers, big integers, text, symbols, functions, sequences,
//! records, timestamps, patterns, maps, sets and pending computations).
//! On top of it sit three small layers:
//! * A *tagger* that gives every value exactly one lowercase type tag.
//! * A *matcher* and an *assertion* that compare a value against a type query
//!   such as `"string"` or `"!null"`.
//! * Eight *converters* (number, bigint, boolean, string, array, date, object,
//!   regexp) composed through one immutable dispatch table.
//!
//! ## Modules
//! * [`value`] – The [`value::Value`] model, its natural text form and JSON rendering.
//! * [`datatype`] – [`datatype::data_type`], [`datatype::is_type`] and [`datatype::assert_type`].
//! * [`convert`] – The eight converters. All of them are total.
//! * [`pattern`] – [`pattern::Pattern`], flag options and the escaping helper.
//! * [`registry`] – The coercion registry and [`registry::to_type`].
//! * [`interface`] – The [`interface::Typewise`] aggregate and its dynamic call surface.
//! * [`settings`] – Layered configuration through the `config` crate.
//!
//! ## Type Tags
//! Built-in kinds report their structural tag (`"number"`, `"array"`,
//! `"map"`, `"promise"`, …). Records declared with a type name report that
//! name in lowercase, so `Record::named("User")` tags as `"user"`. Functions
//! are refined into `"asyncfunction"`, `"generatorfunction"` and
//! `"asyncgeneratorfunction"`.
//!
//! ## Coercion
//! Converters never fail. Input a target cannot represent degrades to that
//! target's empty value: 0, NaN, an absent moment, an empty sequence or
//! record, or the empty pattern. Numeric and big-integer coercion read text
//! as the concatenation of its digit runs (`"a1b22"` is `122`), and reach
//! sequences, records, dates and symbols through the same rule.
//!
//! ## Quick Start
//! ```
//! use typewise::{assert_type, data_type, is_type, to_type};
//! use typewise::value::{Record, Value};
//! assert_eq!(data_type(&Value::from(123)), "number");
//! assert!(is_type(&Value::Array(vec![]), "array"));
//! assert_eq!(to_type(&Value::from("123abc"), Some("number")).unwrap(), Value::from(123));
//! let record = Value::from(Record::new().with("a", 1).with("b", 2));
//! assert_eq!(to_type(&record, Some("string")).unwrap(), Value::from("{a: 1, b: 2}"));
//! let err = assert_type(Value::from(123), "string").unwrap_err();
//! assert_eq!(err.to_string(), "Invalid type: expected string, got number");
//! ```
//!
//! ## Logging
//! The crate emits `tracing` events (dispatch at `trace`, pattern fallbacks
//! at `debug`, unknown targets at `warn`) and never installs a subscriber.

pub mod convert;
pub mod datatype;
pub mod error;
pub mod interface;
pub mod pattern;
pub mod registry;
pub mod settings;
pub mod value;

pub use datatype::{assert_type, data_type, is_type};
pub use error::{ErrorKind, Result, TypewiseError};
pub use interface::Typewise;
pub use registry::to_type;
