#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Detection and normalization of prompt-template placeholders.
//!
//! Finds placeholders written in any of six legacy notations (`[[name]]`,
//! `{{name}}`, `[NAME]`, `{NAME}`, `<NAME>`, `%name%`) and rewrites them into
//! the supported `${name}` / `${name:default}` notation.
//!
//! ```
//! use promptvars_core::{convert_all_variables, detect_variables};
//!
//! let text = "Hello [[name]], your ID is {{user_id}}";
//! assert_eq!(detect_variables(text).len(), 2);
//! assert_eq!(convert_all_variables(text), "Hello ${name}, your ID is ${user_id}");
//! ```

pub mod config;
pub mod convert;
pub mod detect;
pub mod patterns;
pub mod position;
pub mod walker;

pub use convert::{
    ConversionPlan, Replacement, convert_all_variables, convert_to_supported_format,
    is_canonical_name, normalize_name, plan_conversion,
};
pub use detect::{DetectedVariable, detect_variables, find_canonical_variables, summarize};
pub use patterns::{PatternKind, get_pattern_description};
pub use position::{LineIndex, Position};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
