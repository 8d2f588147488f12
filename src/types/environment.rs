use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use super::error::{ArgumentError, InvalidFunctionNameError};
use super::function::Function;
use super::node::Symbol;
use super::value::Value;

/// Suffix used to register functions whose natural name is a reserved word
/// (`and` is registered as `and_`).
const RESERVED_SUFFIX: char = '_';

static BUILTIN: LazyLock<Environment> = LazyLock::new(crate::library::builtin_environment);

/// A named group of functions, addressed by the prefix of a dotted symbol.
#[derive(Clone, Default)]
pub struct Namespace {
    functions: HashMap<String, Function>,
}

impl Namespace {
    /// Look up a function by exact name, then by its reserved-word escaped name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Function> {
        self.functions.get(name).or_else(|| {
            let escaped = format!("{name}{RESERVED_SUFFIX}");
            let found = self.functions.get(&escaped);
            if found.is_some() {
                tracing::trace!(function = name, escaped = %escaped, "resolved through reserved-word fallback");
            }
            found
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// The table symbols are resolved against.
///
/// Immutable once built; [`parse_rule`](crate::parse_rule) uses
/// [`Environment::builtin()`], and [`parse_rule_with`](crate::parse_rule_with)
/// accepts any other environment.
///
/// # Example
///
/// ```
/// use genruler::{Environment, Rule, Value, parse_rule_with};
///
/// let env = Environment::builder()
///     .namespace("greeting", |ns| {
///         ns.function("hello", |_args| Ok(Value::Rule(Rule::constant("hello"))))
///     })
///     .build();
///
/// let rule = parse_rule_with("(greeting.hello)", &env).unwrap();
/// assert_eq!(rule.apply(&Value::Null).unwrap(), Value::from("hello"));
/// ```
#[derive(Clone, Default)]
pub struct Environment {
    namespaces: HashMap<String, Namespace>,
    root: Namespace,
}

impl Environment {
    #[must_use]
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::default()
    }

    /// The built-in namespaces: `basic`, `boolean`, `condition`, `list`, `number`, `string`.
    ///
    /// Constructed on first use and shared for the life of the process.
    #[must_use]
    pub fn builtin() -> &'static Environment {
        &BUILTIN
    }

    /// Start a builder seeded with this environment's contents.
    #[must_use]
    pub fn to_builder(&self) -> EnvironmentBuilder {
        EnvironmentBuilder {
            env: self.clone(),
        }
    }

    #[must_use]
    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.get(name)
    }

    /// Resolve an explicit `(namespace, function)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFunctionNameError`] if either part is empty, the namespace is
    /// unknown, or it has neither `function` nor `function_`.
    pub fn resolve(
        &self,
        namespace: &str,
        function: &str,
    ) -> Result<Function, InvalidFunctionNameError> {
        let name = format!("{namespace}.{function}");
        if namespace.is_empty() || function.is_empty() {
            return Err(InvalidFunctionNameError::Malformed { name });
        }
        let Some(ns) = self.namespaces.get(namespace) else {
            return Err(InvalidFunctionNameError::UnknownNamespace {
                name,
                namespace: namespace.to_owned(),
            });
        };
        let found = ns.get(function).cloned();
        tracing::trace!(namespace, function, found = found.is_some(), "resolving function");
        found.ok_or_else(|| InvalidFunctionNameError::UnknownFunction {
            name,
            namespace: namespace.to_owned(),
            function: function.to_owned(),
        })
    }

    /// Resolve a symbol as written in the source.
    ///
    /// Dotted names split on the first `.`. Undotted names are only accepted when
    /// this environment has root functions.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFunctionNameError`] when the symbol names no function.
    pub fn resolve_symbol(&self, symbol: &Symbol) -> Result<Function, InvalidFunctionNameError> {
        let name = symbol.name();
        match name.split_once('.') {
            Some((namespace, function)) if !namespace.is_empty() && !function.is_empty() => {
                self.resolve(namespace, function)
            }
            None if !self.root.is_empty() => self.root.get(name).cloned().ok_or_else(|| {
                InvalidFunctionNameError::UnknownFunction {
                    name: name.to_owned(),
                    namespace: String::new(),
                    function: name.to_owned(),
                }
            }),
            _ => Err(InvalidFunctionNameError::Malformed {
                name: name.to_owned(),
            }),
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.namespaces.keys().collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("namespaces", &names)
            .field("root", &self.root)
            .finish()
    }
}

/// Builder for an [`Environment`].
#[derive(Debug, Default)]
pub struct EnvironmentBuilder {
    env: Environment,
}

/// Intermediate builder passed to the [`EnvironmentBuilder::namespace`] closure.
#[derive(Debug)]
pub struct NamespaceBuilder {
    prefix: String,
    namespace: Namespace,
}

impl EnvironmentBuilder {
    /// Define or extend a namespace. Functions registered in the closure are
    /// addressed as `name.function`.
    #[must_use]
    pub fn namespace(
        mut self,
        name: &str,
        f: impl FnOnce(NamespaceBuilder) -> NamespaceBuilder,
    ) -> Self {
        let existing = self.env.namespaces.remove(name).unwrap_or_default();
        let builder = f(NamespaceBuilder {
            prefix: name.to_owned(),
            namespace: existing,
        });
        self.env
            .namespaces
            .insert(name.to_owned(), builder.namespace);
        self
    }

    /// Register a root function, addressed by its bare name: `(name ...)`.
    #[must_use]
    pub fn function<F>(mut self, name: &str, build: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value, ArgumentError> + Send + Sync + 'static,
    {
        self.env
            .root
            .functions
            .insert(name.to_owned(), Function::new(name, build));
        self
    }

    /// Remove a namespace, e.g. to hide part of the built-ins.
    #[must_use]
    pub fn without_namespace(mut self, name: &str) -> Self {
        self.env.namespaces.remove(name);
        self
    }

    #[must_use]
    pub fn build(self) -> Environment {
        self.env
    }
}

impl NamespaceBuilder {
    #[must_use]
    pub fn function<F>(mut self, name: &str, build: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value, ArgumentError> + Send + Sync + 'static,
    {
        let qualified = format!("{}.{name}", self.prefix);
        self.namespace
            .functions
            .insert(name.to_owned(), Function::new(qualified, build));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rule;

    fn constant(value: i64) -> impl Fn(Vec<Value>) -> Result<Value, ArgumentError> {
        move |_| Ok(Value::Rule(Rule::constant(value)))
    }

    fn env() -> Environment {
        Environment::builder()
            .namespace("math", |ns| ns.function("add_", constant(1)).function("sub", constant(2)))
            .build()
    }

    #[test]
    fn resolve_exact_name() {
        let func = env().resolve("math", "sub").unwrap();
        assert_eq!(func.name(), "math.sub");
    }

    #[test]
    fn resolve_reserved_word_fallback() {
        let func = env().resolve("math", "add").unwrap();
        assert_eq!(func.name(), "math.add_");
    }

    #[test]
    fn exact_name_wins_over_fallback() {
        let env = Environment::builder()
            .namespace("m", |ns| ns.function("f", constant(1)).function("f_", constant(2)))
            .build();
        assert_eq!(env.resolve("m", "f").unwrap().name(), "m.f");
        assert_eq!(env.resolve("m", "f_").unwrap().name(), "m.f_");
    }

    #[test]
    fn unknown_namespace() {
        let err = env().resolve_symbol(&Symbol::new("nope.nope")).unwrap_err();
        assert_eq!(
            err,
            InvalidFunctionNameError::UnknownNamespace {
                name: "nope.nope".into(),
                namespace: "nope".into(),
            }
        );
    }

    #[test]
    fn unknown_function() {
        let err = env().resolve_symbol(&Symbol::new("math.mul")).unwrap_err();
        assert!(matches!(err, InvalidFunctionNameError::UnknownFunction { .. }));
        assert_eq!(err.name(), "math.mul");
    }

    #[test]
    fn symbol_splits_on_first_dot() {
        let err = env().resolve_symbol(&Symbol::new("math.sub.extra")).unwrap_err();
        assert_eq!(
            err,
            InvalidFunctionNameError::UnknownFunction {
                name: "math.sub.extra".into(),
                namespace: "math".into(),
                function: "sub.extra".into(),
            }
        );
    }

    #[test]
    fn malformed_symbols() {
        for name in ["and", ".add", "math.", "."] {
            let err = env().resolve_symbol(&Symbol::new(name)).unwrap_err();
            assert!(
                matches!(err, InvalidFunctionNameError::Malformed { .. }),
                "expected malformed for {name}, got {err:?}"
            );
        }
    }

    #[test]
    fn root_functions_resolve_bare_symbols() {
        let env = Environment::builder().function("greet", constant(3)).build();
        assert_eq!(env.resolve_symbol(&Symbol::new("greet")).unwrap().name(), "greet");
        assert!(matches!(
            env.resolve_symbol(&Symbol::new("wave")),
            Err(InvalidFunctionNameError::UnknownFunction { .. })
        ));
    }

    #[test]
    fn builtin_has_no_root_functions() {
        assert!(matches!(
            Environment::builtin().resolve_symbol(&Symbol::new("tautology")),
            Err(InvalidFunctionNameError::Malformed { .. })
        ));
    }

    #[test]
    fn to_builder_extends_without_mutating() {
        let extended = env()
            .to_builder()
            .namespace("math", |ns| ns.function("mul", constant(4)))
            .namespace("extra", |ns| ns.function("one", constant(1)))
            .build();
        assert!(extended.resolve("math", "sub").is_ok());
        assert!(extended.resolve("math", "mul").is_ok());
        assert!(extended.resolve("extra", "one").is_ok());
        assert!(env().resolve("extra", "one").is_err());
    }

    #[test]
    fn without_namespace_hides_it() {
        let env = Environment::builtin()
            .to_builder()
            .without_namespace("number")
            .build();
        assert!(env.namespace("number").is_none());
        assert!(env.namespace("boolean").is_some());
        assert!(Environment::builtin().namespace("number").is_some());
    }
}
