//! Field-level request validation.
//!
//! Every request schema implements [`Validate`] by hand and reports one
//! [`FieldError`] per failing field. Nothing here depends on the wire format.

use std::fmt;
use std::str::FromStr;

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// Missing, empty or whitespace-only.
    Required,
    /// Present but not exactly this many characters.
    ExactLength(usize),
    /// Present but outside the accepted values.
    Invalid,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("is required"),
            Self::ExactLength(n) => write!(f, "must be exactly {n} characters"),
            Self::Invalid => f.write_str("is invalid"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field {field} {reason}")]
pub struct FieldError {
    pub field: &'static str,
    pub reason: Reason,
}

/// All field errors of one request, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, reason: Reason) {
        self.0.push(FieldError { field, reason });
    }

    /// Record [`Reason::Required`] when `value` is blank. Returns whether the
    /// value was present, so callers can chain format checks.
    pub fn require(&mut self, field: &'static str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.push(field, Reason::Required);
            false
        } else {
            true
        }
    }

    /// Take a required string field. `None` and blank values are recorded as
    /// [`Reason::Required`] and yield `None`.
    pub fn required(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        match value {
            Some(v) if self.require(field, &v) => Some(v),
            Some(_) => None,
            None => {
                self.push(field, Reason::Required);
                None
            }
        }
    }

    /// Take an optional string field: absent passes, present-but-blank is
    /// recorded as [`Reason::Required`].
    pub fn optional(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        let v = value?;
        self.require(field, &v).then_some(v)
    }

    /// Take a required field and parse it. Unparsable values are recorded as
    /// [`Reason::Invalid`].
    pub fn required_parsed<T: FromStr>(
        &mut self,
        field: &'static str,
        value: Option<String>,
    ) -> Option<T> {
        let raw = self.required(field, value)?;
        self.parse(field, &raw)
    }

    /// Optional counterpart of [`ValidationErrors::required_parsed`].
    pub fn optional_parsed<T: FromStr>(
        &mut self,
        field: &'static str,
        value: Option<String>,
    ) -> Option<T> {
        let raw = self.optional(field, value)?;
        self.parse(field, &raw)
    }

    fn parse<T: FromStr>(&mut self, field: &'static str, raw: &str) -> Option<T> {
        match raw.trim().parse() {
            Ok(v) => Some(v),
            Err(_) => {
                self.push(field, Reason::Invalid);
                None
            }
        }
    }

    /// Record [`Reason::ExactLength`] unless `value` has exactly `len` characters.
    pub fn exact_len(&mut self, field: &'static str, value: &str, len: usize) {
        if value.chars().count() != len {
            self.push(field, Reason::ExactLength(len));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Implemented by every decoded request body: checks the raw wire shape and
/// turns it into the input type the use case consumes.
pub trait Validate {
    type Valid;

    fn validate(self) -> Result<Self::Valid, ValidationErrors>;
}
