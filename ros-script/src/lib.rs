//! Plan-driven front end for `ros-script-core`.
//!
//! A plan is a TOML file listing configuration fragments in output order:
//! literal menu sections, address pools, segment lists, PPP profiles and
//! secrets, and one-shot scheduled scripts. This crate turns each entry into
//! a fragment with the core helpers, then merges, canonicalizes, and
//! serializes them into a RouterOS import script.
//!
//! - [`plan`]: Plan file schema and loading
//! - [`build`]: Fragment construction and the render pipeline
//! - [`report`]: Terminal-friendly inspection output
//!
//! # Examples
//!
//! ```ignore
//! use ros_script::build::render_plan;
//! use ros_script::plan::load_plan;
//!
//! let plan = load_plan(Path::new("site.toml"))?;
//! let script = render_plan(&plan, false)?;
//! print!("{script}");
//! ```

pub mod build;
pub mod plan;
pub mod report;
