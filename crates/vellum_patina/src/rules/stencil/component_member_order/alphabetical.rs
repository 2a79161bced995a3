//! Alphabetical check within each role.

use super::role::{Member, Role};

/// Roles among `active` whose member names are not in strictly
/// increasing case-insensitive order. Equal names count as unsorted.
pub fn find_unsorted_roles(members: &[Member<'_>], active: &[Role]) -> Vec<Role> {
    active
        .iter()
        .copied()
        .filter(|role| !role.is_alphabetical_exempt())
        .filter(|role| {
            let names: Vec<&str> = members
                .iter()
                .filter(|m| m.role == *role)
                .map(|m| m.name)
                .collect();
            !names
                .windows(2)
                .all(|pair| sort_key(pair[0]) < sort_key(pair[1]))
        })
        .collect()
}

#[inline]
fn sort_key(name: &str) -> String {
    name.to_uppercase()
}
