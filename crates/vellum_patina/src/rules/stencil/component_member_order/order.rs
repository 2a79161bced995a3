//! Order check against the configured canonical role order.

use std::fmt;

use super::role::{Member, Role};

/// Distinct roles in first-occurrence order.
///
/// With a canonical order, roles it does not list are dropped.
pub fn distinct_roles(members: &[Member<'_>], canonical: Option<&[Role]>) -> Vec<Role> {
    let mut roles: Vec<Role> = Vec::new();
    for member in members {
        if roles.contains(&member.role) {
            continue;
        }
        if canonical.is_some_and(|order| !order.contains(&member.role)) {
            continue;
        }
        roles.push(member.role);
    }
    roles
}

/// Whether `actual` is a subsequence of `canonical`.
///
/// Roles missing from `canonical` are treated as not following it.
pub fn follows_order(actual: &[Role], canonical: &[Role]) -> bool {
    let mut remaining = canonical.iter();
    actual
        .iter()
        .all(|role| remaining.by_ref().any(|candidate| candidate == role))
}

/// Where a misplaced role should go, relative to the roles that exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Between(Role, Role),
    After(Role),
    Before(Role),
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Between(prev, next) => write!(f, "between \"{prev}\" and \"{next}\""),
            Self::After(role) => write!(f, "after \"{role}\""),
            Self::Before(role) => write!(f, "before \"{role}\""),
        }
    }
}

/// First role found out of canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderViolation {
    pub role: Role,
    pub prev: Option<Role>,
    pub next: Option<Role>,
    pub placement: Placement,
}

impl OrderViolation {
    pub fn message(&self) -> String {
        format!(
            "Component member \"{}\" should be placed {}",
            self.role, self.placement
        )
    }
}

/// Check `actual` (distinct, canonical-filtered roles) against `canonical`.
///
/// The violating role is the earlier role of the first adjacent pair
/// that appears reversed in `canonical`. Its neighbors come from the
/// canonical order restricted to the roles actually present.
pub fn check_order(actual: &[Role], canonical: &[Role]) -> Option<OrderViolation> {
    if follows_order(actual, canonical) {
        return None;
    }

    let rank = |role: &Role| canonical.iter().position(|r| r == role);
    let role = actual
        .windows(2)
        .find(|pair| rank(&pair[0]) > rank(&pair[1]))
        .map(|pair| pair[0])?;

    let existing: Vec<Role> = canonical
        .iter()
        .copied()
        .filter(|r| actual.contains(r))
        .collect();
    let at = existing.iter().position(|r| *r == role)?;
    let prev = at.checked_sub(1).map(|i| existing[i]);
    let next = existing.get(at + 1).copied();

    let placement = match (prev, next) {
        (Some(prev), Some(next)) => Placement::Between(prev, next),
        (None, Some(next)) => Placement::After(next),
        (Some(prev), None) if existing.len() == 2 => Placement::After(prev),
        (Some(prev), None) => Placement::Before(prev),
        (None, None) => return None,
    };

    Some(OrderViolation {
        role,
        prev,
        next,
        placement,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use Role::*;

    const ROLES: [Role; 14] = [
        Element, Event, InternalProp, Lifecycle, Listen, Method, OwnMethod, OwnProp, Prop, State,
        StencilMethod, Watch, WatchedProp, WatchedState,
    ];

    /// A canonical order plus distinct roles drawn from it, in canonical order
    fn order_and_subsequence() -> impl Strategy<Value = (Vec<Role>, Vec<Role>)> {
        Just(ROLES.to_vec())
            .prop_shuffle()
            .prop_flat_map(|canonical| {
                let len = canonical.len();
                (
                    Just(canonical.clone()),
                    prop::sample::subsequence(canonical, 0..=len),
                )
            })
    }

    proptest! {
        #[test]
        fn subsequences_never_violate((canonical, actual) in order_and_subsequence()) {
            prop_assert!(follows_order(&actual, &canonical));
            prop_assert_eq!(check_order(&actual, &canonical), None);
        }

        #[test]
        fn any_other_arrangement_is_reported(
            (canonical, actual) in order_and_subsequence()
                .prop_flat_map(|(canonical, actual)| (Just(canonical), Just(actual).prop_shuffle()))
        ) {
            let rank = |role: &Role| canonical.iter().position(|r| r == role);
            let sorted = actual.windows(2).all(|pair| rank(&pair[0]) < rank(&pair[1]));
            prop_assert_eq!(follows_order(&actual, &canonical), sorted);

            let violation = check_order(&actual, &canonical);
            prop_assert_eq!(violation.is_some(), !sorted);
            if let Some(violation) = violation {
                prop_assert!(actual.contains(&violation.role));
            }
        }
    }
}
