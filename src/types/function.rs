use std::fmt;
use std::sync::Arc;

use super::error::ArgumentError;
use super::value::Value;

type BuildFn = dyn Fn(Vec<Value>) -> Result<Value, ArgumentError> + Send + Sync;

/// A named rule builder registered in an [`Environment`](super::Environment).
///
/// Called once per occurrence in the source while a rule is being compiled. A
/// builder receives its already-reduced arguments and usually returns a
/// [`Value::Rule`] that captures them.
#[derive(Clone)]
pub struct Function {
    name: Arc<str>,
    build: Arc<BuildFn>,
}

impl Function {
    pub fn new<F>(name: impl Into<Arc<str>>, build: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value, ArgumentError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            build: Arc::new(build),
        }
    }

    /// Qualified name the function was registered under, e.g. `number.add`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Call the builder with positional arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if the builder rejects its arguments.
    pub fn call(&self, args: Vec<Value>) -> Result<Value, ArgumentError> {
        (self.build)(args)
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.build, &other.build)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Function").field(&self.name).finish()
    }
}
