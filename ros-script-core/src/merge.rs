use tracing::debug;

use crate::fragment::Fragment;

/// Concatenate fragments into one.
///
/// Paths are unioned in first-seen order and each path's commands are the
/// concatenation of its inputs in argument order. Nothing is deduplicated or
/// reordered, so the operation is associative. No inputs yields an empty
/// fragment.
pub fn merge<'a, I>(fragments: I) -> Fragment
where
    I: IntoIterator<Item = &'a Fragment>,
{
    let mut out = Fragment::new();
    let mut inputs = 0usize;

    for fragment in fragments {
        inputs += 1;
        for section in fragment {
            out.section_mut(section.path.clone())
                .commands
                .extend(section.commands.iter().cloned());
        }
    }

    debug!(
        inputs,
        paths = out.sections().len(),
        commands = out.command_count(),
        "merged fragments"
    );
    out
}

impl Fragment {
    /// Return `self` followed by `other`, as [`merge`] of the pair.
    pub fn merged_with(&self, other: &Fragment) -> Fragment {
        merge([self, other])
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<T: IntoIterator<Item = Fragment>>(iter: T) -> Self {
        let fragments: Vec<Fragment> = iter.into_iter().collect();
        merge(&fragments)
    }
}
