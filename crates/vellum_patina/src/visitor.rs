//! Class visitor for lint rule execution.
//!
//! Walks the extracted class forest with an explicit stack, so deeply
//! nested classes never grow the native call stack.

use crate::context::LintContext;
use crate::rule::RuleEntry;
use crate::source::ClassDecl;

/// Visit extracted classes and run all rules
pub struct LintVisitor<'a, 'ctx, 'rules> {
    ctx: &'ctx mut LintContext<'a>,
    rules: &'rules [RuleEntry],
}

impl<'a, 'ctx, 'rules> LintVisitor<'a, 'ctx, 'rules> {
    /// Create a new visitor
    #[inline]
    pub fn new(ctx: &'ctx mut LintContext<'a>, rules: &'rules [RuleEntry]) -> Self {
        Self { ctx, rules }
    }

    /// Run every rule on every class in pre-order.
    ///
    /// A class is handed to all rules before any class nested in it, and
    /// siblings are visited in source order.
    pub fn visit_classes(&mut self, classes: &[ClassDecl]) {
        let mut stack: Vec<&ClassDecl> = classes.iter().rev().collect();
        while let Some(class) = stack.pop() {
            self.visit_class(class);
            stack.extend(class.children.iter().rev());
        }
    }

    #[inline]
    fn visit_class(&mut self, class: &ClassDecl) {
        let rules = self.rules;
        for entry in rules {
            self.enter_rule(entry);
            entry.rule.check_class(self.ctx, class);
        }
    }

    #[inline]
    fn enter_rule(&mut self, entry: &RuleEntry) {
        self.ctx.current_rule = entry.rule.meta().name;
        self.ctx.current_severity = entry.severity;
    }
}
