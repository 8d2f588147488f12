mod context;
mod environment;
mod error;
mod function;
mod node;
mod rule;
mod value;

pub use context::Context;
pub use environment::{Environment, EnvironmentBuilder, Namespace, NamespaceBuilder};
pub use error::{ArgumentError, EvalError, InvalidFunctionNameError, NonCallableResultError};
pub use function::Function;
pub use node::{Node, Number, Symbol};
pub use rule::Rule;
pub use value::{Key, Value};
