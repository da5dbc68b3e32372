//! AI Response Validation
//!
//! Turns raw model text into the strict shape callers rely on: an ordered
//! list of instruction strings. Malformed output is recovered here and never
//! surfaces as an error.

mod json_array;

pub use json_array::{
    EMPTY_JSON_ARRAY, extract_bracketed_array, looks_like_json_array, parse_steps, sanitize,
    strip_wrapping_code_fences,
};
