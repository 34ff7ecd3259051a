//! Conversion between identifier case conventions.
//!
//! Seven conventions are supported, each with a family of functions:
//!
//! | Case | Example | Function |
//! |---|---|---|
//! | camel | `fooBarBaz` | [`camel_case()`] |
//! | pascal | `FooBarBaz` | [`pascal_case()`] |
//! | snake | `foo_bar_baz` | [`snake_case()`] |
//! | kebab | `foo-bar-baz` | [`kebab_case()`] |
//! | macro | `FOO_BAR_BAZ` | [`macro_case()`] |
//! | cobol | `FOO-BAR-BAZ` | [`cobol_case()`] |
//! | train | `Foo-Bar-Baz` | [`train_case()`] |
//!
//! All of them share one single-pass scanner, so any of these forms can be
//! converted to any other. Word boundaries are found at changes from lower to
//! upper case, inside runs of capitals (`HTTPRequest` is `HTTP` + `Request`),
//! and at non-alphanumeric characters. Only ASCII letters have a case; every
//! other character is punctuation.
//!
//! Conversion never fails. The `*_with_options` variants take an [`Options`]
//! to control which punctuation is kept in the output and whether it separates
//! words. To select the case at runtime, see [`Case`].
//!
//! # Examples
//!
//! ```
//! use identcase::{snake_case, snake_case_with_options, Options};
//!
//! assert_eq!(snake_case("parseHTTPRequest"), "parse_http_request");
//! assert_eq!(snake_case("user-id#2"), "user_id_2");
//!
//! let opts = Options::new().with_keep("#");
//! assert_eq!(snake_case_with_options("user-id#2", &opts), "user_id#2");
//! ```
#![warn(missing_debug_implementations, missing_docs)]
#![deny(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/identcase/0.1.0/")]

mod ascii;
mod camel;
mod case;
mod cobol;
mod error;
mod kebab;
mod macro_case;
mod options;
mod pascal;
mod scan;
mod snake;
mod train;

pub use self::case::Case;
pub use self::error::Error;
pub use self::options::Options;

pub use self::camel::{camel_case, camel_case_with_options};
pub use self::cobol::{cobol_case, cobol_case_with_options};
pub use self::kebab::{kebab_case, kebab_case_with_options};
pub use self::macro_case::{macro_case, macro_case_with_options};
pub use self::pascal::{pascal_case, pascal_case_with_options};
pub use self::snake::{snake_case, snake_case_with_options};
pub use self::train::{train_case, train_case_with_options};

#[allow(deprecated)]
pub use self::{
    camel::{camel_case_with_keep, camel_case_with_sep},
    cobol::{cobol_case_with_keep, cobol_case_with_sep},
    kebab::{kebab_case_with_keep, kebab_case_with_sep},
    macro_case::{macro_case_with_keep, macro_case_with_sep},
    pascal::{pascal_case_with_keep, pascal_case_with_sep},
    snake::{snake_case_with_keep, snake_case_with_sep},
    train::{train_case_with_keep, train_case_with_sep},
};
