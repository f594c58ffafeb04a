//! Declarative operation binding.
//!
//! Every API call is described by an [`OperationDescriptor`]: a `const`
//! value holding the HTTP method, a URL template with named `{placeholders}`
//! and an ordered list of [`ParamSlot`]s saying where each argument goes.
//! [`RequestBuilder`] turns a descriptor plus the call's [`Args`] into a
//! concrete [`Request`](crate::Request); nothing about an individual
//! endpoint lives anywhere else.
//!
//! ```
//! use spotify_rs::binding::{Args, OperationDescriptor, ParamSlot, RequestBuilder};
//! use spotify_rs::Method;
//!
//! const GET_ALBUM: OperationDescriptor = OperationDescriptor::new(
//!     "get_album",
//!     Method::Get,
//!     "/v1/albums/{id}",
//!     &[ParamSlot::path("id"), ParamSlot::query("market")],
//! );
//!
//! let args = Args::new().with("id", "2BTZIqw0ntH9MvilQ3ewNY").with("market", "BR");
//! let request = RequestBuilder::new("https://api.spotify.com")
//!     .build(&GET_ALBUM, &args)
//!     .unwrap();
//! assert_eq!(
//!     request.url(),
//!     "https://api.spotify.com/v1/albums/2BTZIqw0ntH9MvilQ3ewNY?market=BR"
//! );
//! ```

mod expand;
mod request_builder;
mod template;

use crate::errors::SpotifyError;
use crate::http::Method;
use std::collections::HashSet;
use std::fmt;

pub use expand::expand_comma_joined;
pub use request_builder::RequestBuilder;

/// Converts a structured argument into its wire string.
pub type Expander = fn(&ParamValue) -> Result<String, SpotifyError>;

/// Where a slot's argument ends up in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Path,
    Query,
    Header,
    Body,
}

/// One named argument position of an operation.
#[derive(Debug, Clone, Copy)]
pub struct ParamSlot {
    pub name: &'static str,
    pub placement: Placement,
    pub expander: Option<Expander>,
}

impl ParamSlot {
    #[must_use]
    pub const fn path(name: &'static str) -> Self {
        Self {
            name,
            placement: Placement::Path,
            expander: None,
        }
    }

    #[must_use]
    pub const fn query(name: &'static str) -> Self {
        Self {
            name,
            placement: Placement::Query,
            expander: None,
        }
    }

    /// A query parameter that takes a non-empty list, sent comma-joined.
    #[must_use]
    pub const fn query_list(name: &'static str) -> Self {
        Self {
            name,
            placement: Placement::Query,
            expander: Some(expand_comma_joined),
        }
    }

    #[must_use]
    pub const fn header(name: &'static str) -> Self {
        Self {
            name,
            placement: Placement::Header,
            expander: None,
        }
    }

    #[must_use]
    pub const fn body(name: &'static str) -> Self {
        Self {
            name,
            placement: Placement::Body,
            expander: None,
        }
    }
}

/// A textual body with `{name}` placeholders filled from `Body` slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyTemplate {
    pub template: &'static str,
    pub content_type: &'static str,
}

/// Static description of one API call.
#[derive(Debug, Clone, Copy)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub method: Method,
    /// Absolute path, optionally with a fixed query (`/v1/me/following?type=artist`).
    pub template: &'static str,
    pub params: &'static [ParamSlot],
    pub body: Option<BodyTemplate>,
}

impl OperationDescriptor {
    #[must_use]
    pub const fn new(
        name: &'static str,
        method: Method,
        template: &'static str,
        params: &'static [ParamSlot],
    ) -> Self {
        Self {
            name,
            method,
            template,
            params,
            body: None,
        }
    }

    /// Attaches a JSON body template.
    #[must_use]
    pub const fn with_json_body(mut self, template: &'static str) -> Self {
        self.body = Some(BodyTemplate {
            template,
            content_type: crate::http::common::JSON_CONTENT_TYPE,
        });
        self
    }

    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&ParamSlot> {
        self.params.iter().find(|slot| slot.name == name)
    }

    /// Checks that the template and the slot list agree.
    ///
    /// Every URL placeholder needs a `Path` slot and vice versa; the same
    /// holds between the body template and `Body` slots. Slot names are
    /// unique.
    ///
    /// # Errors
    ///
    /// Returns [`SpotifyError::InvalidArgument`] naming the operation and
    /// the first mismatch found.
    pub fn validate(&self) -> Result<(), SpotifyError> {
        let mut seen = HashSet::new();
        for slot in self.params {
            if !seen.insert(slot.name) {
                return Err(self.defect(format!("duplicate slot `{}`", slot.name)));
            }
        }

        let path_placeholders = template::placeholder_names(self.template);
        check_slots_match(self, &path_placeholders, Placement::Path, "URL template")?;

        let body_placeholders = self
            .body
            .map(|body| template::placeholder_names(body.template))
            .unwrap_or_default();
        if self.body.is_none() && self.params.iter().any(|s| s.placement == Placement::Body) {
            return Err(self.defect("body slots without a body template".to_string()));
        }
        check_slots_match(self, &body_placeholders, Placement::Body, "body template")
    }

    fn defect(&self, detail: String) -> SpotifyError {
        SpotifyError::InvalidArgument(format!("operation `{}`: {detail}", self.name))
    }
}

fn check_slots_match(
    op: &OperationDescriptor,
    placeholders: &[&str],
    placement: Placement,
    what: &str,
) -> Result<(), SpotifyError> {
    for name in placeholders {
        match op.slot(name) {
            Some(slot) if slot.placement == placement => {}
            _ => {
                return Err(op.defect(format!(
                    "{what} placeholder `{{{name}}}` has no {placement:?} slot"
                )));
            }
        }
    }
    for slot in op.params.iter().filter(|s| s.placement == placement) {
        if !placeholders.contains(&slot.name) {
            return Err(op.defect(format!(
                "{placement:?} slot `{}` does not appear in the {what}",
                slot.name
            )));
        }
    }
    Ok(())
}

/// A single wire value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&String> for Scalar {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// A call-time argument: one scalar or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

macro_rules! scalar_param {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ParamValue {
            fn from(value: $ty) -> Self {
                Self::Scalar(value.into())
            }
        })*
    };
}

scalar_param!(&str, &String, String, bool, u32, i64, Scalar);

impl<S: Into<Scalar>> From<Vec<S>> for ParamValue {
    fn from(values: Vec<S>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<Scalar> + Clone> From<&[S]> for ParamValue {
    fn from(values: &[S]) -> Self {
        Self::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<S: Into<Scalar>, const N: usize> From<[S; N]> for ParamValue {
    fn from(values: [S; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// The named arguments of one call, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    values: Vec<(&'static str, ParamValue)>,
}

impl Args {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, replacing an earlier value.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<ParamValue>) -> Self {
        let value = value.into();
        match self.values.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.values.push((name, value)),
        }
        self
    }

    /// Sets `name` only when `value` is present.
    #[must_use]
    pub fn with_opt<V: Into<ParamValue>>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.iter().map(|(key, _)| *key)
    }
}
