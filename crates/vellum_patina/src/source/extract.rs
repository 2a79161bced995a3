//! OXC visitor that copies class declarations into the owned model.

use oxc_ast::ast::{
    Argument, Class, ClassElement, Decorator, Expression, MethodDefinitionKind,
    ObjectPropertyKind, PropertyKey,
};
use oxc_ast_visit::{walk, Visit};
use vellum_carton::{CompactString, FxHashMap, SmallVec};

use super::decl::{ClassDecl, DecoratorArgs, DecoratorDecl, MemberDecl, MemberKind, OptionValue};

/// Collects classes while OXC walks the program.
///
/// `open` holds the classes currently being walked, innermost last. A class
/// is attached to its enclosing class (or to `roots`) once its walk ends.
#[derive(Default)]
pub(super) struct ClassCollector {
    open: Vec<ClassDecl>,
    roots: Vec<ClassDecl>,
}

impl ClassCollector {
    pub(super) fn finish(self) -> Vec<ClassDecl> {
        debug_assert!(self.open.is_empty());
        self.roots
    }
}

impl<'a> Visit<'a> for ClassCollector {
    fn visit_class(&mut self, class: &Class<'a>) {
        self.open.push(ClassDecl {
            name: class
                .id
                .as_ref()
                .map(|id| CompactString::new(id.name.as_str())),
            span: class.span.into(),
            decorators: class.decorators.iter().map(decorator_decl).collect(),
            members: class.body.body.iter().filter_map(member_decl).collect(),
            children: Vec::new(),
        });

        walk::walk_class(self, class);

        if let Some(done) = self.open.pop() {
            match self.open.last_mut() {
                Some(parent) => parent.children.push(done),
                None => self.roots.push(done),
            }
        }
    }
}

fn member_decl(element: &ClassElement<'_>) -> Option<MemberDecl> {
    let (key, computed, kind, span, decorators) = match element {
        ClassElement::PropertyDefinition(prop) => (
            &prop.key,
            prop.computed,
            MemberKind::Property,
            prop.span,
            &prop.decorators,
        ),
        ClassElement::AccessorProperty(prop) => (
            &prop.key,
            prop.computed,
            MemberKind::Property,
            prop.span,
            &prop.decorators,
        ),
        ClassElement::MethodDefinition(method) => {
            let kind = match method.kind {
                MethodDefinitionKind::Method => MemberKind::Method,
                MethodDefinitionKind::Get | MethodDefinitionKind::Set => MemberKind::Accessor,
                MethodDefinitionKind::Constructor => MemberKind::Constructor,
            };
            (
                &method.key,
                method.computed,
                kind,
                method.span,
                &method.decorators,
            )
        }
        // Static blocks and index signatures
        _ => return None,
    };

    Some(MemberDecl {
        name: identifier_name(key, computed),
        kind,
        span: span.into(),
        decorators: decorators
            .iter()
            .map(decorator_decl)
            .collect::<SmallVec<[DecoratorDecl; 1]>>(),
    })
}

/// Plain identifier key text; everything else is unnamed
#[inline]
fn identifier_name(key: &PropertyKey<'_>, computed: bool) -> Option<CompactString> {
    if computed {
        return None;
    }
    match key {
        PropertyKey::StaticIdentifier(id) => Some(CompactString::new(id.name.as_str())),
        _ => None,
    }
}

fn decorator_decl(decorator: &Decorator<'_>) -> DecoratorDecl {
    let Expression::CallExpression(call) = &decorator.expression else {
        return DecoratorDecl {
            name: None,
            args: DecoratorArgs::NoArgs,
        };
    };

    match &call.callee {
        Expression::Identifier(id) => DecoratorDecl {
            name: Some(CompactString::new(id.name.as_str())),
            args: first_argument(call.arguments.first()),
        },
        _ => DecoratorDecl {
            name: None,
            args: DecoratorArgs::Other,
        },
    }
}

fn first_argument(arg: Option<&Argument<'_>>) -> DecoratorArgs {
    match arg {
        None => DecoratorArgs::NoArgs,
        Some(Argument::StringLiteral(s)) => DecoratorArgs::Name(CompactString::new(s.value.as_str())),
        Some(Argument::ObjectExpression(obj)) => {
            let mut options = FxHashMap::default();
            for prop in obj.properties.iter() {
                let ObjectPropertyKind::ObjectProperty(p) = prop else {
                    continue;
                };
                if p.computed {
                    continue;
                }
                let key = match &p.key {
                    PropertyKey::StaticIdentifier(id) => id.name.as_str(),
                    PropertyKey::StringLiteral(s) => s.value.as_str(),
                    _ => continue,
                };
                options.insert(CompactString::new(key), option_value(&p.value));
            }
            DecoratorArgs::Options(options)
        }
        Some(_) => DecoratorArgs::Other,
    }
}

fn option_value(expr: &Expression<'_>) -> OptionValue {
    match expr {
        Expression::BooleanLiteral(b) => OptionValue::Bool(b.value),
        Expression::StringLiteral(s) => OptionValue::Str(CompactString::new(s.value.as_str())),
        Expression::NumericLiteral(n) => OptionValue::Number(n.value),
        Expression::NullLiteral(_) => OptionValue::Null,
        Expression::Identifier(id) if id.name.as_str() == "undefined" => OptionValue::Undefined,
        _ => OptionValue::Other,
    }
}
