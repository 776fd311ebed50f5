//! Grouping of per-platform attribute values
//!
//! Signatures are rendered once per *distinct* value of an attribute, tagged
//! with every platform sharing that value, instead of once per platform.

use std::borrow::Borrow;

use crate::model::{Platform, PlatformMap, PlatformSet};

/// Group platforms by the value they map to.
///
/// Every platform ends up in exactly one group. Groups are ordered by the first
/// occurrence of their value in `entries`. Values only need equality.
pub fn group_by_value<P, V, I>(entries: I) -> Vec<(V, PlatformSet)>
where
    P: Borrow<Platform>,
    V: PartialEq,
    I: IntoIterator<Item = (P, V)>,
{
    let mut groups: Vec<(V, PlatformSet)> = Vec::new();
    for (platform, value) in entries {
        let platform = platform.borrow().clone();
        match groups.iter_mut().find(|(existing, _)| *existing == value) {
            Some((_, platforms)) => {
                platforms.insert(platform);
            }
            None => groups.push((value, PlatformSet::from([platform]))),
        }
    }
    groups
}

/// [`group_by_value`] restricted to the platforms in `within`
pub fn group_within<'a, V: PartialEq>(
    values: &'a PlatformMap<V>,
    within: &PlatformSet,
) -> Vec<(&'a V, PlatformSet)> {
    group_by_value(values.iter().filter(|(platform, _)| within.contains(*platform)))
}

/// Build a platform set from names
pub fn platform_set<I, S>(names: I) -> PlatformSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Platform::new).collect()
}
