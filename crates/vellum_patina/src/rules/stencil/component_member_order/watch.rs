//! `@Watch()` handling: watched-role resolution and watcher placement.

use vellum_carton::FxHashSet;

use super::role::Member;

/// Re-role every `@Prop()`/`@State()` member that some `@Watch()` targets.
///
/// Returns a new sequence; order and indices are unchanged. Watchers whose
/// target does not exist simply match nothing. Running it on an already
/// resolved sequence changes nothing.
pub fn resolve_watched<'m>(members: &[Member<'m>]) -> Vec<Member<'m>> {
    let targets: FxHashSet<&str> = members.iter().filter_map(Member::watch_target).collect();
    if targets.is_empty() {
        return members.to_vec();
    }

    members
        .iter()
        .map(|member| match member.role.watched() {
            Some(watched) if targets.contains(member.name) => member.with_role(watched),
            _ => *member,
        })
        .collect()
}

/// A watcher that is not declared directly above the member it watches
#[derive(Debug, Clone, Copy)]
pub struct MisplacedWatcher<'m> {
    pub watcher: Member<'m>,
    pub target: Member<'m>,
}

/// Find watchers that do not immediately precede their watched member.
///
/// Only the first watcher of each target is checked; further watchers of
/// the same member and watchers without a watched target are ignored.
pub fn find_misplaced_watchers<'m>(members: &[Member<'m>]) -> Vec<MisplacedWatcher<'m>> {
    let mut seen_targets: FxHashSet<&str> = FxHashSet::default();
    let mut misplaced = Vec::new();

    for watcher in members {
        let Some(target_name) = watcher.watch_target() else {
            continue;
        };
        if !seen_targets.insert(target_name) {
            continue;
        }
        let Some(target) = members
            .iter()
            .find(|m| m.name == target_name && m.role.is_watched())
        else {
            continue;
        };
        if watcher.index + 1 != target.index {
            misplaced.push(MisplacedWatcher {
                watcher: *watcher,
                target: *target,
            });
        }
    }

    misplaced
}
