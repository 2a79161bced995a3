//! stencil/component-member-order
//!
//! Ensures that Component members are ordered consistently.
//!
//! Every member of a `@Component()` class gets a role (`prop`, `state`,
//! `own-method`, ...). Three independent policies can be enabled:
//!
//! - `order`: members of the same role are grouped together and the
//!   groups follow the configured role order
//! - `watch-follows-prop`: a `@Watch()` method sits directly above the
//!   `@Prop()`/`@State()` it watches
//!   (tslint-stencil's rule of the same name expects it directly below;
//!   here a watcher below its target is reported)
//! - `alphabetical`: names within a role are sorted
//!
//! ## Examples
//!
//! ### Invalid (`order: ["state", "prop"]`)
//! ```ts
//! @Component({ tag: 'my-el' })
//! class MyEl {
//!   @Prop() value: string;
//!   @State() open = false;
//! }
//! ```
//!
//! ### Valid
//! ```ts
//! @Component({ tag: 'my-el' })
//! class MyEl {
//!   @State() open = false;
//!   @Watch('value') valueChanged() {}
//!   @Prop() value: string;
//! }
//! ```

pub mod alphabetical;
pub mod grouping;
pub mod order;
pub mod role;
pub mod watch;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::RuleSetting;
use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rule::{Rule, RuleCategory, RuleMeta};
use crate::source::ClassDecl;

pub use role::Role;

use role::{classify_members, Member};

static META: RuleMeta = RuleMeta {
    name: ComponentMemberOrder::NAME,
    description: "Ensures that Component members are ordered consistently",
    category: RuleCategory::Maintainability,
    fixable: false,
    default_severity: Severity::Warning,
};

const GROUPING_MESSAGE: &str = "Component members of the same type should be grouped together";
const ALPHABETICAL_MESSAGE: &str = "Component members of the same type should be alphabetized";
const WATCH_MESSAGE: &str =
    "Watch methods should immediately precede the declaration of the Prop/State they watch";

/// Options of `stencil/component-member-order`.
///
/// ```json
/// { "order": ["own-prop", "prop", "state"], "watch-follows-prop": true, "alphabetical": false }
/// ```
///
/// Every policy is disabled unless set. `"order": false` disables ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ComponentMemberOrderOptions {
    #[serde(deserialize_with = "deserialize_order")]
    pub order: Option<Vec<Role>>,
    pub watch_follows_prop: bool,
    pub alphabetical: bool,
}

impl ComponentMemberOrderOptions {
    /// Order used by Stencil's own components
    pub const RECOMMENDED_ORDER: [Role; 13] = [
        Role::OwnProp,
        Role::Element,
        Role::State,
        Role::WatchedState,
        Role::InternalProp,
        Role::Prop,
        Role::WatchedProp,
        Role::Event,
        Role::Lifecycle,
        Role::Listen,
        Role::Method,
        Role::OwnMethod,
        Role::StencilMethod,
    ];

    pub fn recommended() -> Self {
        Self {
            order: Some(Self::RECOMMENDED_ORDER.to_vec()),
            watch_follows_prop: false,
            alphabetical: false,
        }
    }

    pub fn strict() -> Self {
        Self {
            order: Some(Self::RECOMMENDED_ORDER.to_vec()),
            watch_follows_prop: true,
            alphabetical: true,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OrderSetting {
    Roles(Vec<Role>),
    Toggle(bool),
}

fn deserialize_order<'de, D>(deserializer: D) -> Result<Option<Vec<Role>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<OrderSetting>::deserialize(deserializer)? {
        None | Some(OrderSetting::Toggle(false)) => Ok(None),
        Some(OrderSetting::Roles(roles)) => Ok(Some(roles)),
        Some(OrderSetting::Toggle(true)) => Err(serde::de::Error::custom(
            "`order` must be a list of member roles or `false`",
        )),
    }
}

/// Enforce a consistent order of Stencil component members
#[derive(Debug, Clone, Default)]
pub struct ComponentMemberOrder {
    pub options: ComponentMemberOrderOptions,
}

impl ComponentMemberOrder {
    pub const NAME: &'static str = "stencil/component-member-order";

    pub fn new(options: ComponentMemberOrderOptions) -> Self {
        Self { options }
    }

    /// Recommended order, other policies off
    pub fn recommended() -> Self {
        Self::new(ComponentMemberOrderOptions::recommended())
    }

    /// Recommended order with every policy enabled
    pub fn strict() -> Self {
        Self::new(ComponentMemberOrderOptions::strict())
    }

    /// Build the rule from its configuration entry.
    ///
    /// A setting without options uses the recommended order.
    pub fn from_setting(setting: &RuleSetting) -> Result<Self, serde_json::Error> {
        match setting.options() {
            Some(options) => Ok(Self::new(ComponentMemberOrderOptions::deserialize(options)?)),
            None => Ok(Self::recommended()),
        }
    }

    fn order_help(order: &[Role]) -> String {
        let roles: Vec<&str> = order.iter().map(|r| r.as_str()).collect();
        format!("Expected member order: {}", roles.join(", "))
    }

    /// Grouping, then canonical order. Order is only checked once every
    /// role is grouped.
    fn check_order(&self, ctx: &mut LintContext<'_>, members: &[Member<'_>], canonical: &[Role]) {
        let sequence: Vec<Role> = members.iter().map(|m| m.role).collect();
        let mut ungrouped = grouping::find_ungrouped_roles(&sequence);
        if self.options.watch_follows_prop {
            ungrouped.retain(|role| !matches!(role, Role::Prop | Role::Watch));
        }

        if !ungrouped.is_empty() {
            let decls: Vec<_> = members
                .iter()
                .filter(|m| ungrouped.contains(&m.role))
                .map(|m| m.decl)
                .collect();
            let roles: Vec<&str> = ungrouped.iter().map(|r| r.as_str()).collect();
            ctx.report_members_with_help(
                GROUPING_MESSAGE,
                &decls,
                format!("Keep all members of each type together: {}", roles.join(", ")),
            );
            return;
        }

        let actual = order::distinct_roles(members, Some(canonical));
        let Some(violation) = order::check_order(&actual, canonical) else {
            return;
        };
        let message = violation.message();
        let help = Self::order_help(canonical);
        for member in members.iter().filter(|m| m.role == violation.role) {
            ctx.report_at_with_help(message.as_str(), member.decl.span, help.as_str());
        }
    }

    fn check_watchers(ctx: &mut LintContext<'_>, members: &[Member<'_>]) {
        for misplaced in watch::find_misplaced_watchers(members) {
            let diagnostic = ctx
                .diagnostic(WATCH_MESSAGE, misplaced.watcher.decl.span)
                .with_help(format!(
                    "Move `{}` directly above `{}`",
                    misplaced.watcher.name, misplaced.target.name
                ))
                .with_label(
                    format!("`{}` is declared here", misplaced.target.name),
                    misplaced.target.decl.span.start,
                    misplaced.target.decl.span.end,
                );
            ctx.report(diagnostic);
        }
    }

    fn check_alphabetical(&self, ctx: &mut LintContext<'_>, members: &[Member<'_>]) {
        let active = order::distinct_roles(members, self.options.order.as_deref());
        let unsorted = alphabetical::find_unsorted_roles(members, &active);
        if unsorted.is_empty() {
            return;
        }

        let decls: Vec<_> = members
            .iter()
            .filter(|m| unsorted.contains(&m.role))
            .map(|m| m.decl)
            .collect();
        let roles: Vec<&str> = unsorted.iter().map(|r| r.as_str()).collect();
        ctx.report_members_with_help(
            ALPHABETICAL_MESSAGE,
            &decls,
            format!("Sort members by name within: {}", roles.join(", ")),
        );
    }
}

impl Rule for ComponentMemberOrder {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_class<'a>(&self, ctx: &mut LintContext<'a>, class: &ClassDecl) {
        if !class.is_component() {
            return;
        }

        let members = watch::resolve_watched(&classify_members(&class.members));
        if members.is_empty() {
            return;
        }
        tracing::debug!(
            class = class.name.as_deref().unwrap_or("<anonymous>"),
            members = members.len(),
            "checking component member order"
        );

        if let Some(canonical) = self.options.order.as_deref() {
            self.check_order(ctx, &members, canonical);
        }

        if self.options.watch_follows_prop {
            Self::check_watchers(ctx, &members);
        }

        if self.options.alphabetical {
            self.check_alphabetical(ctx, &members);
        }
    }
}
