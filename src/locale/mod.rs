//! Locale data used by date patterns.

mod builtin;

pub use builtin::Locale;
