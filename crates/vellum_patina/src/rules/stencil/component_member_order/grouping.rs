//! Grouping check: every role's members must be contiguous.

use vellum_carton::FxHashSet;

use super::role::Role;

/// Roles whose occurrences in `roles` are interleaved with another role.
///
/// Roles are returned in order of first occurrence.
pub fn find_ungrouped_roles(roles: &[Role]) -> Vec<Role> {
    let mut closed: FxHashSet<Role> = FxHashSet::default();
    let mut ungrouped: Vec<Role> = Vec::new();

    for (i, role) in roles.iter().enumerate() {
        if i > 0 && roles[i - 1] != *role {
            closed.insert(roles[i - 1]);
        }
        if closed.contains(role) && !ungrouped.contains(role) {
            ungrouped.push(*role);
        }
    }

    ungrouped.sort_by_key(|role| roles.iter().position(|r| r == role));
    ungrouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use Role::*;

    #[test]
    fn test_contiguous_roles_are_grouped() {
        assert!(find_ungrouped_roles(&[]).is_empty());
        assert!(find_ungrouped_roles(&[Prop]).is_empty());
        assert!(find_ungrouped_roles(&[OwnProp, OwnProp, Prop, State, State, OwnMethod]).is_empty());
    }

    #[test]
    fn test_interleaved_role_is_reported() {
        assert_eq!(find_ungrouped_roles(&[Prop, State, Prop]), [Prop]);
    }

    #[test]
    fn test_multiple_roles_in_first_occurrence_order() {
        let roles = [State, Prop, State, OwnMethod, Prop, OwnMethod];
        assert_eq!(find_ungrouped_roles(&roles), [State, Prop]);
    }

    #[test]
    fn test_watch_interleaving_props() {
        let roles = [Watch, WatchedProp, Prop, Watch, WatchedProp];
        assert_eq!(find_ungrouped_roles(&roles), [Watch, WatchedProp]);
    }
}
