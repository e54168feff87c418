//! Front-end configuration.
//!
//! The scanner and parser are permissive by default: they accept partial or
//! in-progress input the way editor tooling needs. [`Strictness::Strict`]
//! turns each of those silent recoveries into a hard error instead.

/// How the front end treats input it can recover from silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Unterminated strings end at end of input, ragged dedents pop to the
    /// nearest recorded level, indentation blocks close implicitly at end of input.
    #[default]
    Lenient,
    /// Each of the above is reported as an error.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub strictness: Strictness,
}

impl Config {
    pub fn strict() -> Self {
        Config {
            strictness: Strictness::Strict,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }
}
