//! Source extraction for lint rules.
//!
//! Parses TypeScript/TSX with OXC and copies every class, its decorators and
//! its members into the owned [`ClassDecl`] forest that rules consume. Rules
//! never touch the OXC AST directly.

mod decl;
mod extract;

pub use decl::{
    ClassDecl, DecoratorArgs, DecoratorDecl, MemberDecl, MemberKind, OptionValue, SourceSpan,
};

use oxc_allocator::Allocator;
use oxc_ast_visit::Visit;
use oxc_parser::Parser;
use oxc_span::SourceType;

use extract::ClassCollector;

/// Result of extracting class declarations from one source file
#[derive(Debug, Clone, Default)]
pub struct ParsedSource {
    /// Top-level classes in source order; nested classes hang off `children`
    pub classes: Vec<ClassDecl>,
    /// Number of syntax errors reported by the parser
    pub error_count: usize,
}

impl ParsedSource {
    /// Total number of classes, including nested ones
    pub fn class_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&ClassDecl> = self.classes.iter().collect();
        while let Some(class) = stack.pop() {
            count += 1;
            stack.extend(class.children.iter());
        }
        count
    }
}

/// Parse `source` and extract its class declarations.
///
/// The source type follows the filename extension and falls back to TSX.
/// A parser panic yields no classes; recoverable syntax errors are counted
/// and extraction proceeds on the recovered tree.
pub fn parse_source(source: &str, filename: &str) -> ParsedSource {
    let allocator = Allocator::default();
    parse_source_with_allocator(&allocator, source, filename)
}

/// [`parse_source`] with a caller-provided arena, for reuse across files
pub fn parse_source_with_allocator(
    allocator: &Allocator,
    source: &str,
    filename: &str,
) -> ParsedSource {
    let source_type = SourceType::from_path(filename).unwrap_or_else(|_| SourceType::tsx());

    let ret = Parser::new(allocator, source, source_type).parse();
    let error_count = ret.errors.len();

    if ret.panicked {
        tracing::warn!(filename, error_count, "parser panicked; skipping file");
        return ParsedSource {
            classes: Vec::new(),
            error_count,
        };
    }

    let mut collector = ClassCollector::default();
    collector.visit_program(&ret.program);

    ParsedSource {
        classes: collector.finish(),
        error_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> ParsedSource {
        parse_source(source, "my-component.tsx")
    }

    #[test]
    fn test_extracts_component_class() {
        let parsed = parse(
            r#"
@Component({ tag: 'my-component' })
export class MyComponent {
    @Prop() first: string;
    @State() open = false;
    private count = 0;
    componentWillLoad() {}
    render() { return null; }
}
"#,
        );
        assert_eq!(parsed.error_count, 0);
        assert_eq!(parsed.classes.len(), 1);

        let class = &parsed.classes[0];
        assert!(class.is_component());
        assert_eq!(class.name.as_deref(), Some("MyComponent"));

        let names: Vec<_> = class
            .members
            .iter()
            .map(|m| m.name.as_deref().unwrap_or("?"))
            .collect();
        assert_eq!(
            names,
            ["first", "open", "count", "componentWillLoad", "render"]
        );
        assert_eq!(class.members[0].kind, MemberKind::Property);
        assert_eq!(class.members[3].kind, MemberKind::Method);
        assert_eq!(class.members[0].decorators[0].name.as_deref(), Some("Prop"));
        assert!(class.members[2].decorators.is_empty());
    }

    #[test]
    fn test_plain_class_is_not_component() {
        let parsed = parse("export class Store { items = []; }");
        assert_eq!(parsed.classes.len(), 1);
        assert!(!parsed.classes[0].is_component());
    }

    #[test]
    fn test_decorator_arguments() {
        let parsed = parse(
            r#"
@Component({ tag: 'x-el' })
class El {
    @Prop({ context: 'config' }) config: any;
    @Prop({ connect: 'ion-menu-controller', mutable: false }) menu: any;
    @Watch('value') valueChanged() {}
    @State() value: number;
    @Listen(handlerName) onEvent() {}
}
"#,
        );
        let members = &parsed.classes[0].members;

        let config = &members[0].decorators[0];
        assert_eq!(config.name.as_deref(), Some("Prop"));
        assert_eq!(
            config.args.option("context"),
            Some(&OptionValue::Str("config".into()))
        );

        let menu = &members[1].decorators[0];
        assert_eq!(menu.args.option("mutable"), Some(&OptionValue::Bool(false)));
        assert!(menu.args.option("connect").is_some_and(OptionValue::is_truthy));

        assert_eq!(members[2].decorators[0].args.name(), Some("value"));
        assert_eq!(members[3].decorators[0].args, DecoratorArgs::NoArgs);
        assert_eq!(members[4].decorators[0].args, DecoratorArgs::Other);
    }

    #[test]
    fn test_non_call_decorator_has_no_name() {
        let parsed = parse("class A { @Prop name: string; @ns.State() s: number; }");
        let members = &parsed.classes[0].members;
        assert_eq!(members[0].decorators.len(), 1);
        assert!(members[0].decorators[0].name.is_none());
        assert!(members[1].decorators[0].name.is_none());
    }

    #[test]
    fn test_member_names_and_kinds() {
        let parsed = parse(
            r#"
class A {
    constructor() {}
    ['computed'] = 1;
    'quoted' = 2;
    #secret = 3;
    get size() { return 1; }
    set size(v) {}
    static { init(); }
    accessor auto = 4;
}
"#,
        );
        let members = &parsed.classes[0].members;
        let kinds: Vec<_> = members.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            [
                MemberKind::Constructor,
                MemberKind::Property,
                MemberKind::Property,
                MemberKind::Property,
                MemberKind::Accessor,
                MemberKind::Accessor,
                MemberKind::Property,
            ]
        );
        assert_eq!(members[0].name.as_deref(), Some("constructor"));
        assert!(members[1].name.is_none());
        assert!(members[2].name.is_none());
        assert!(members[3].name.is_none());
        assert_eq!(members[4].name.as_deref(), Some("size"));
        assert_eq!(members[6].name.as_deref(), Some("auto"));
    }

    #[test]
    fn test_nested_classes_become_children() {
        let parsed = parse(
            r#"
class Outer {
    build() {
        class Inner {
            make() { return class {}; }
        }
        return Inner;
    }
}
class Sibling {}
"#,
        );
        assert_eq!(parsed.classes.len(), 2);
        assert_eq!(parsed.class_count(), 4);

        let outer = &parsed.classes[0];
        assert_eq!(outer.children.len(), 1);
        let inner = &outer.children[0];
        assert_eq!(inner.name.as_deref(), Some("Inner"));
        assert_eq!(inner.children.len(), 1);
        assert!(inner.children[0].name.is_none());
        assert_eq!(parsed.classes[1].name.as_deref(), Some("Sibling"));
    }

    #[test]
    fn test_member_spans_point_into_source() {
        let source = "class A {\n    @State() open = false;\n}";
        let parsed = parse(source);
        let member = &parsed.classes[0].members[0];
        let text = &source[member.span.start as usize..member.span.end as usize];
        assert!(text.contains("open = false"));
    }

    #[test]
    fn test_syntax_errors_are_counted() {
        let parsed = parse("class A { foo( }");
        assert!(parsed.error_count > 0);
    }
}
