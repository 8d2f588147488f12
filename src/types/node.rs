use std::fmt;

/// A symbol atom: a name written without quotes, such as `number.add`.
///
/// Distinct from a text literal even when the characters are identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol {
    name: String,
}

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A numeric literal. A lexeme containing `.` is always a float.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// Syntax tree produced by the parser.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Number(Number),
    Text(String),
    Sym(Symbol),
    List(Vec<Node>),
}

impl Node {
    /// Convenience constructor for a symbol node.
    pub fn sym(name: impl Into<String>) -> Node {
        Node::Sym(Symbol::new(name))
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<i64> for Node {
    fn from(v: i64) -> Self {
        Node::Number(Number::Int(v))
    }
}

impl From<f64> for Node {
    fn from(v: f64) -> Self {
        Node::Number(Number::Float(v))
    }
}

impl From<&str> for Node {
    fn from(v: &str) -> Self {
        Node::Text(v.to_owned())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v:?}"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(n) => write!(f, "{n}"),
            Node::Text(s) => write!(f, "{s:?}"),
            Node::Sym(sym) => write!(f, "{sym}"),
            Node::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_equality_by_name() {
        assert_eq!(Symbol::new("foo.bar"), Symbol::new("foo.bar"));
        assert_ne!(Symbol::new("foo.bar"), Symbol::new("bar.foo"));
        assert_eq!(Symbol::new("test.symbol").to_string(), "test.symbol");
    }

    #[test]
    fn symbol_is_not_text() {
        assert_ne!(Node::sym("foo.bar"), Node::from("foo.bar"));
    }

    #[test]
    fn display_round_trips_shape() {
        let node = Node::List(vec![
            Node::sym("number.add"),
            Node::from(1_i64),
            Node::List(vec![Node::sym("basic.field"), Node::from("x")]),
            Node::from(2.0),
        ]);
        assert_eq!(node.to_string(), r#"(number.add 1 (basic.field "x") 2.0)"#);
    }
}
