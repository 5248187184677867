//! Composition primitives for RouterOS configuration scripts.
//!
//! Generators build small [`Fragment`]s (a pool, a PPP profile, a list of
//! firewall rules), the fragments are [`merge`]d in call order, redundant
//! `set` commands are folded by [`canonicalize`], and [`serialize`] renders
//! the result as `.rsc` import text. Every step is a pure function over
//! immutable values.

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod format;
pub mod fragment;
pub mod merge;
pub mod naming;
pub mod path;
mod quote;
pub mod script;
pub mod serialize;
pub mod subnet;

pub use canonical::canonicalize;
pub use credentials::{ppp_secret_fragment, Credential};
pub use error::{Error, Result};
pub use format::{format_json, format_summary};
pub use fragment::{Fragment, Section};
pub use merge::merge;
pub use naming::{Naming, Segment};
pub use path::MenuPath;
pub use script::one_time_script;
pub use serialize::serialize;
pub use subnet::{
    gateway_address, ip_pool_fragment, network_address, pool_range, usable_range, AddressRange,
    Cidr,
};

/// Merge, canonicalize, and serialize `fragments` into one script.
///
/// This is the whole generation pipeline; a failure at any stage returns the
/// error and no text.
pub fn render<'a, I>(fragments: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Fragment>,
{
    let merged = merge(fragments);
    let canonical = canonicalize(&merged)?;
    Ok(serialize(&canonical))
}
