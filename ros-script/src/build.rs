use anyhow::{bail, Context, Result};
use ros_script_core::{
    canonicalize, ip_pool_fragment, merge, one_time_script, pool_range, ppp_secret_fragment,
    serialize, AddressRange, Fragment, MenuPath, Naming,
};
use tracing::{debug, info};

use crate::plan::{FragmentSpec, Plan};

/// Build one fragment per plan entry, in plan order.
pub fn build_fragments(plan: &Plan) -> Result<Vec<Fragment>> {
    plan.fragments
        .iter()
        .enumerate()
        .map(|(idx, spec)| {
            build_fragment(&plan.naming, spec)
                .with_context(|| format!("fragment #{} ({})", idx + 1, spec.kind()))
        })
        .collect()
}

/// Turn a single plan entry into a fragment.
pub fn build_fragment(naming: &Naming, spec: &FragmentSpec) -> Result<Fragment> {
    let fragment = match spec {
        FragmentSpec::Section { path, commands } => {
            Fragment::new().with_commands(MenuPath::menu(path.as_str()), commands.iter().cloned())
        }
        FragmentSpec::Pool {
            name,
            subnet,
            first,
            last,
            comment,
        } => {
            let range = match (subnet, first, last) {
                (Some(subnet), None, None) => pool_range(subnet)?,
                (None, Some(first), Some(last)) => {
                    if u32::from(*first) > u32::from(*last) {
                        bail!("pool '{name}' starts after it ends ({first} > {last})");
                    }
                    AddressRange::new(*first, *last)
                }
                _ => bail!("pool '{name}' needs either `subnet` or both `first` and `last`"),
            };
            ip_pool_fragment(name, &range, comment)
        }
        FragmentSpec::AddressList {
            subnet,
            segment,
            comment,
        } => naming.address_list_fragment(subnet, segment, comment)?,
        FragmentSpec::InterfaceList {
            interface,
            segment,
            comment,
        } => naming.interface_list_fragment(interface, segment, comment),
        FragmentSpec::ListDefinition { segment, comment } => {
            naming.interface_list_definition(segment, comment)
        }
        FragmentSpec::PppProfile {
            subnet,
            segment,
            service,
        } => naming.ppp_profile_fragment(subnet, segment, service)?,
        FragmentSpec::PppSecret {
            service,
            profile,
            users,
            comment,
        } => {
            let profile = profile
                .clone()
                .unwrap_or_else(|| naming.profile_name(service));
            ppp_secret_fragment(users, service, &profile, comment)
        }
        FragmentSpec::Script {
            name,
            start_time,
            interval,
            body,
        } => one_time_script(body, name, start_time, interval.as_deref()),
    };

    debug!(
        kind = spec.kind(),
        paths = fragment.sections().len(),
        commands = fragment.command_count(),
        "built fragment"
    );
    Ok(fragment)
}

/// Build, merge, and (unless `raw`) canonicalize a plan into one fragment.
pub fn compose_plan(plan: &Plan, raw: bool) -> Result<Fragment> {
    let fragments = build_fragments(plan)?;
    let merged = merge(&fragments);
    if raw {
        return Ok(merged);
    }
    let canonical = canonicalize(&merged).context("failed to canonicalize merged script")?;
    info!(
        paths = canonical.sections().len(),
        commands = canonical.command_count(),
        "composed plan"
    );
    Ok(canonical)
}

/// Render a plan to script text.
pub fn render_plan(plan: &Plan, raw: bool) -> Result<String> {
    Ok(serialize(&compose_plan(plan, raw)?))
}
