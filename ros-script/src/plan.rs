use std::fs;
use std::net::Ipv4Addr;
use std::path::Path;

use ros_script_core::{Credential, Naming, Segment};
use serde::Deserialize;
use thiserror::Error;

/// A declarative list of fragments to render, in output order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Plan {
    /// Suffix conventions for every derived name in this plan.
    #[serde(default)]
    pub naming: Naming,
    #[serde(default, rename = "fragment")]
    pub fragments: Vec<FragmentSpec>,
}

/// One `[[fragment]]` table, discriminated by its `kind` key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FragmentSpec {
    /// Literal commands under a menu path. An empty path is the raw body.
    Section {
        path: String,
        #[serde(default)]
        commands: Vec<String>,
    },
    /// Address pool from a subnet's client range or from explicit bounds.
    Pool {
        name: String,
        subnet: Option<String>,
        first: Option<Ipv4Addr>,
        last: Option<Ipv4Addr>,
        #[serde(default)]
        comment: String,
    },
    AddressList {
        subnet: String,
        segment: Segment,
        #[serde(default)]
        comment: String,
    },
    InterfaceList {
        interface: String,
        segment: Segment,
        #[serde(default)]
        comment: String,
    },
    ListDefinition {
        segment: Segment,
        #[serde(default)]
        comment: String,
    },
    PppProfile {
        subnet: String,
        segment: Segment,
        service: String,
    },
    /// Secrets for `users`; `profile` defaults to the service's profile name.
    PppSecret {
        service: String,
        profile: Option<String>,
        #[serde(default)]
        users: Vec<Credential>,
        #[serde(default)]
        comment: String,
    },
    Script {
        name: String,
        start_time: String,
        interval: Option<String>,
        #[serde(default)]
        body: Vec<String>,
    },
}

impl FragmentSpec {
    /// The `kind` tag as written in the plan.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Section { .. } => "section",
            Self::Pool { .. } => "pool",
            Self::AddressList { .. } => "address-list",
            Self::InterfaceList { .. } => "interface-list",
            Self::ListDefinition { .. } => "list-definition",
            Self::PppProfile { .. } => "ppp-profile",
            Self::PppSecret { .. } => "ppp-secret",
            Self::Script { .. } => "script",
        }
    }
}

/// Errors returned when loading plan files.
#[derive(Debug, Error)]
pub enum PlanLoadError {
    #[error("failed to read plan file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse plan file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load a plan from a TOML file.
pub fn load_plan(path: &Path) -> Result<Plan, PlanLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| PlanLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_plan(&raw, path.display().to_string())
}

/// Parse plan TOML; `origin` names the source in errors.
pub fn parse_plan(raw: &str, origin: String) -> Result<Plan, PlanLoadError> {
    toml::from_str(raw).map_err(|source| PlanLoadError::Parse {
        path: origin,
        source,
    })
}
