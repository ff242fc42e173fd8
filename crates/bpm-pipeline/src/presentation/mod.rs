//! Detail-page presentation lists
//!
//! Each list is a [`RuleTable`]: ordered `(predicate, factory)` rules keyed on
//! the item's attributes, generic fillers used only to reach the minimum, and
//! a hard maximum. Output depends on the item alone.

mod generators;
mod rules;

pub use generators::{
    benefits, display_tags, faqs, features, present, specifications, use_cases, Faq,
    ItemPresentation, Specification, BENEFITS, DISPLAY_TAGS, FAQS, FEATURES, SPECIFICATIONS,
    USE_CASES,
};
pub use rules::{Rule, RuleTable};
