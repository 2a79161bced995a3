//! Stencil component rules.
//!
//! These rules only look at classes decorated with `@Component()`.
//!
//! - `stencil/component-member-order` - Enforce a consistent order of component members

mod component_member_order;

pub use component_member_order::{
    alphabetical, grouping, order, role, watch, ComponentMemberOrder,
    ComponentMemberOrderOptions, Role,
};

use phf::phf_set;

/// Lifecycle methods Stencil calls on a component
static LIFECYCLE_METHODS: phf::Set<&'static str> = phf_set! {
    "connectedCallback",
    "disconnectedCallback",
    "componentWillLoad",
    "componentDidLoad",
    "componentShouldUpdate",
    "componentWillUpdate",
    "componentDidUpdate",
    "componentWillRender",
    "componentDidRender",
    "componentDidUnload",
};

/// Framework methods a component implements for Stencil to call
static STENCIL_METHODS: phf::Set<&'static str> = phf_set! {
    "hostData",
    "render",
};

/// Check if a method name is a Stencil lifecycle hook
#[inline]
pub fn is_lifecycle_method(name: &str) -> bool {
    LIFECYCLE_METHODS.contains(name)
}

/// Check if a method name is a Stencil framework method
#[inline]
pub fn is_stencil_method(name: &str) -> bool {
    STENCIL_METHODS.contains(name)
}
