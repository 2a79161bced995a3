//! Member roles and the classifier that assigns them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules::stencil::{is_lifecycle_method, is_stencil_method};
use crate::source::{DecoratorDecl, MemberDecl, MemberKind};

/// Semantic category of a component member.
///
/// `WatchedProp` and `WatchedState` are never assigned by [`classify`]; they
/// are derived from `Prop`/`State` when a `@Watch()` targets the member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// `@Element()` property
    Element,
    /// `@Event()` property
    Event,
    /// `@Prop()` using `context` or `connect`
    InternalProp,
    /// Stencil lifecycle method (`componentWillLoad`, ...)
    Lifecycle,
    /// `@Listen()` method
    Listen,
    /// `@Method()` method
    Method,
    /// Undecorated method
    OwnMethod,
    /// Undecorated property
    OwnProp,
    /// `@Prop()` property
    Prop,
    /// `@State()` property
    State,
    /// Framework method (`hostData`, `render`)
    StencilMethod,
    /// `@Watch()` method
    Watch,
    /// `@Prop()` property targeted by a `@Watch()`
    WatchedProp,
    /// `@State()` property targeted by a `@Watch()`
    WatchedState,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Event => "event",
            Self::InternalProp => "internal-prop",
            Self::Lifecycle => "lifecycle",
            Self::Listen => "listen",
            Self::Method => "method",
            Self::OwnMethod => "own-method",
            Self::OwnProp => "own-prop",
            Self::Prop => "prop",
            Self::State => "state",
            Self::StencilMethod => "stencil-method",
            Self::Watch => "watch",
            Self::WatchedProp => "watched-prop",
            Self::WatchedState => "watched-state",
        }
    }

    /// Role assigned by a Stencil decorator, matched case-insensitively
    pub fn from_decorator(name: &str) -> Option<Self> {
        const DECORATORS: [(&str, Role); 7] = [
            ("element", Role::Element),
            ("event", Role::Event),
            ("listen", Role::Listen),
            ("method", Role::Method),
            ("prop", Role::Prop),
            ("state", Role::State),
            ("watch", Role::Watch),
        ];
        DECORATORS
            .iter()
            .find(|(decorator, _)| name.eq_ignore_ascii_case(decorator))
            .map(|(_, role)| *role)
    }

    /// Watched variant of a watchable role
    #[inline]
    pub const fn watched(self) -> Option<Self> {
        match self {
            Self::Prop => Some(Self::WatchedProp),
            Self::State => Some(Self::WatchedState),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_watched(self) -> bool {
        matches!(self, Self::WatchedProp | Self::WatchedState)
    }

    /// Roles whose members keep their natural call order instead of
    /// being sorted by name
    #[inline]
    pub const fn is_alphabetical_exempt(self) -> bool {
        matches!(self, Self::Lifecycle | Self::StencilMethod)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified member. Cheap to copy; re-roling produces a new value.
#[derive(Debug, Clone, Copy)]
pub struct Member<'m> {
    pub name: &'m str,
    pub role: Role,
    /// Position among the classified members of the class
    pub index: usize,
    pub decl: &'m MemberDecl,
    /// The decorator the role came from, if any
    pub decorator: Option<&'m DecoratorDecl>,
}

impl<'m> Member<'m> {
    #[inline]
    pub fn with_role(self, role: Role) -> Self {
        Self { role, ..self }
    }

    /// Name of the member a `@Watch('name')` method targets
    #[inline]
    pub fn watch_target(&self) -> Option<&'m str> {
        if self.role != Role::Watch {
            return None;
        }
        self.decorator.and_then(|d| d.args.name())
    }
}

/// Classify a single member.
///
/// Members without a plain identifier name are never classified. With
/// exactly one recognized Stencil decorator the role follows the decorator;
/// otherwise it follows the syntactic kind. Getters, setters and
/// constructors without a decorator have no role.
pub fn classify(member: &MemberDecl) -> Option<(Role, Option<&DecoratorDecl>)> {
    let name = member.name.as_deref()?;

    let mut recognized = member.decorators.iter().filter_map(|decorator| {
        let role = Role::from_decorator(decorator.name.as_deref()?)?;
        Some((decorator, role))
    });

    if let (Some((decorator, role)), None) = (recognized.next(), recognized.next()) {
        return Some((refine_prop(role, decorator), Some(decorator)));
    }

    let role = match member.kind {
        MemberKind::Property => Role::OwnProp,
        MemberKind::Method if is_lifecycle_method(name) => Role::Lifecycle,
        MemberKind::Method if is_stencil_method(name) => Role::StencilMethod,
        MemberKind::Method => Role::OwnMethod,
        MemberKind::Accessor | MemberKind::Constructor => return None,
    };
    Some((role, None))
}

/// `@Prop({ context })` and `@Prop({ connect })` are internal props
#[inline]
fn refine_prop(role: Role, decorator: &DecoratorDecl) -> Role {
    if role != Role::Prop {
        return role;
    }
    let internal = ["context", "connect"]
        .iter()
        .any(|key| decorator.args.option(key).is_some_and(|v| v.is_truthy()));
    if internal {
        Role::InternalProp
    } else {
        Role::Prop
    }
}

/// Classify every member of a class, in source order
pub fn classify_members(members: &[MemberDecl]) -> Vec<Member<'_>> {
    members
        .iter()
        .filter_map(|decl| {
            let (role, decorator) = classify(decl)?;
            let name = decl.name.as_deref()?;
            Some((decl, name, role, decorator))
        })
        .enumerate()
        .map(|(index, (decl, name, role, decorator))| {
            tracing::trace!(member = name, role = role.as_str(), "classified member");
            Member {
                name,
                role,
                index,
                decl,
                decorator,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{parse_source, ClassDecl};

    fn class(body: &str) -> ClassDecl {
        let source = format!("@Component({{ tag: 'x-test' }})\nclass Test {{\n{body}\n}}");
        parse_source(&source, "test.tsx").classes.remove(0)
    }

    fn roles(body: &str) -> Vec<(String, Role)> {
        let class = class(body);
        classify_members(&class.members)
            .into_iter()
            .map(|m| (m.name.to_string(), m.role))
            .collect()
    }

    #[test]
    fn test_decorator_roles() {
        let got = roles(
            r#"
            @Element() el: HTMLElement;
            @Event() changed: EventEmitter;
            @Listen('click') onClick() {}
            @Method() async open() {}
            @Prop() value: string;
            @State() active = false;
            @Watch('value') valueChanged() {}
            "#,
        );
        assert_eq!(
            got,
            [
                ("el".to_string(), Role::Element),
                ("changed".to_string(), Role::Event),
                ("onClick".to_string(), Role::Listen),
                ("open".to_string(), Role::Method),
                ("value".to_string(), Role::Prop),
                ("active".to_string(), Role::State),
                ("valueChanged".to_string(), Role::Watch),
            ]
        );
    }

    #[test]
    fn test_decorator_name_is_case_insensitive() {
        let got = roles("@PROP() value: string;");
        assert_eq!(got, [("value".to_string(), Role::Prop)]);
    }

    #[test]
    fn test_internal_prop() {
        let got = roles(
            r#"
            @Prop({ context: 'config' }) config: Config;
            @Prop({ connect: 'ion-menu-controller' }) menuCtrl: any;
            @Prop({ context: '' }) notContext: any;
            @Prop({ mutable: true }) mutableProp: string;
            "#,
        );
        let got: Vec<_> = got.into_iter().map(|(_, r)| r).collect();
        assert_eq!(
            got,
            [Role::InternalProp, Role::InternalProp, Role::Prop, Role::Prop]
        );
    }

    #[test]
    fn test_syntactic_roles() {
        let got = roles(
            r#"
            count = 0;
            componentWillLoad() {}
            connectedCallback() {}
            hostData() { return {}; }
            render() { return null; }
            helper() {}
            "#,
        );
        let got: Vec<_> = got.into_iter().map(|(_, r)| r).collect();
        assert_eq!(
            got,
            [
                Role::OwnProp,
                Role::Lifecycle,
                Role::Lifecycle,
                Role::StencilMethod,
                Role::StencilMethod,
                Role::OwnMethod,
            ]
        );
    }

    #[test]
    fn test_ambiguous_or_unknown_decorators_fall_back_to_kind() {
        let got = roles(
            r#"
            @Prop() @State() both: string;
            @Debounce(100) onInput() {}
            @Prop render() {}
            "#,
        );
        let got: Vec<_> = got.into_iter().map(|(_, r)| r).collect();
        assert_eq!(got, [Role::OwnProp, Role::OwnMethod, Role::StencilMethod]);
    }

    #[test]
    fn test_unnamed_and_roleless_members_are_excluded() {
        let got = roles(
            r#"
            constructor() {}
            ['computed'] = 1;
            #secret = 2;
            get size() { return 1; }
            @Prop() get label() { return ''; }
            kept = 3;
            "#,
        );
        assert_eq!(
            got,
            [
                ("label".to_string(), Role::Prop),
                ("kept".to_string(), Role::OwnProp),
            ]
        );
    }

    #[test]
    fn test_indices_count_classified_members_only() {
        let class = class("constructor() {}\na = 1;\nget g() { return 1; }\nb = 2;");
        let members = classify_members(&class.members);
        let indices: Vec<_> = members.iter().map(|m| (m.name, m.index)).collect();
        assert_eq!(indices, [("a", 0), ("b", 1)]);
    }

    #[test]
    fn test_watch_target() {
        let class = class("@Watch('value') a() {}\n@Watch(other) b() {}\n@Prop() value: string;");
        let members = classify_members(&class.members);
        assert_eq!(members[0].watch_target(), Some("value"));
        assert_eq!(members[1].watch_target(), None);
        assert_eq!(members[2].watch_target(), None);
    }

    #[test]
    fn test_watch_target_reads_the_classifying_decorator() {
        let class = class("@WATCH('value') a() {}\n@Watch('x') @Prop() b: string;");
        let members = classify_members(&class.members);
        assert_eq!(members[0].role, Role::Watch);
        assert_eq!(members[0].watch_target(), Some("value"));
        assert_eq!(members[1].role, Role::OwnProp);
        assert_eq!(members[1].watch_target(), None);
    }

    #[test]
    fn test_role_serde_names() {
        let role: Role = serde_json::from_str("\"watched-state\"").unwrap();
        assert_eq!(role, Role::WatchedState);
        assert_eq!(serde_json::to_string(&Role::OwnMethod).unwrap(), "\"own-method\"");
        assert_eq!(Role::InternalProp.to_string(), "internal-prop");
    }
}
