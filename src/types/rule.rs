use std::fmt;
use std::sync::Arc;

use super::context::Context;
use super::error::EvalError;
use super::value::Value;

type RuleFn = dyn Fn(&Context) -> Result<Value, EvalError> + Send + Sync;

/// A compiled rule: a deferred function from a [`Context`] to a [`Value`].
///
/// Rules are produced by [`parse_rule`](crate::parse_rule) or built directly by the
/// functions in [`library`](crate::library). They hold no reference to the source
/// text, are cheap to clone, and can be applied from many threads at once.
#[derive(Clone)]
pub struct Rule(Arc<RuleFn>);

impl Rule {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Context) -> Result<Value, EvalError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// A rule that ignores its context and always yields `value`.
    pub fn constant(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(move |_| Ok(value.clone()))
    }

    /// Apply the rule to a context.
    ///
    /// # Errors
    ///
    /// Whatever the rule itself fails with; errors are passed through untouched.
    pub fn apply(&self, ctx: &Context) -> Result<Value, EvalError> {
        (self.0)(ctx)
    }

    /// Whether both handles point at the same rule.
    #[must_use]
    pub fn ptr_eq(&self, other: &Rule) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Rule(..)")
    }
}
