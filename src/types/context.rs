use std::collections::BTreeMap;

use super::value::{Key, Value};

/// The value a [`Rule`](super::Rule) is applied to.
///
/// Usually a [`Value::Map`] keyed by field name, or a [`Value::List`] indexed by position.
pub type Context = Value;

impl Value {
    /// Set a value at a dot-separated path, creating intermediate maps as needed.
    ///
    /// A non-map receiver (or intermediate) is replaced by a map.
    ///
    /// ```
    /// use genruler::Value;
    ///
    /// let ctx = Value::Null.set("user.profile.age", 25_i64);
    /// assert_eq!(ctx.get_path("user.profile.age"), Some(&Value::Int(25)));
    /// ```
    #[must_use]
    pub fn set(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.insert(path, value.into());
        self
    }

    /// Insert a value at a dot-separated path (mutable reference version).
    pub fn insert(&mut self, path: &str, value: Value) {
        let segments: Vec<&str> = path.split('.').collect();
        Self::insert_recursive(self, &segments, value);
    }

    /// Look up a value by dot-separated path through nested maps.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(self, |current, segment| match current {
            Value::Map(entries) => entries.get(&Key::from(segment)),
            _ => None,
        })
    }

    fn insert_recursive(target: &mut Value, segments: &[&str], value: Value) {
        let Some((first, rest)) = segments.split_first() else {
            return;
        };
        if !matches!(target, Value::Map(_)) {
            *target = Value::Map(BTreeMap::new());
        }
        let Value::Map(entries) = target else {
            return;
        };
        if rest.is_empty() {
            entries.insert(Key::from(*first), value);
        } else {
            let nested = entries.entry(Key::from(*first)).or_insert(Value::Null);
            Self::insert_recursive(nested, rest, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_simple() {
        let ctx = Context::Null.set("name", "alice");
        assert_eq!(ctx.get_path("name"), Some(&Value::from("alice")));
    }

    #[test]
    fn set_and_get_nested() {
        let ctx = Context::Null.set("user.profile.age", 25_i64);
        assert_eq!(ctx.get_path("user.profile.age"), Some(&Value::Int(25)));
        assert!(matches!(ctx.get_path("user.profile"), Some(Value::Map(_))));
    }

    #[test]
    fn get_missing_returns_none() {
        let ctx = Context::Null.set("user.age", 25_i64);
        assert_eq!(ctx.get_path("user.name"), None);
        assert_eq!(ctx.get_path("nonexistent"), None);
        assert_eq!(ctx.get_path("user.age.deeper"), None);
    }

    #[test]
    fn overwrite_leaf_with_nested() {
        let ctx = Context::Null
            .set("user", "old_value")
            .set("user.age", 30_i64);
        assert_eq!(ctx.get_path("user.age"), Some(&Value::Int(30)));
    }

    #[test]
    fn overwrite_value() {
        let ctx = Context::Null.set("score", 10_i64).set("score", 20_i64);
        assert_eq!(ctx.get_path("score"), Some(&Value::Int(20)));
    }

    #[test]
    fn insert_mutable_ref() {
        let mut ctx = Value::map([("existing", 1_i64)]);
        ctx.insert("key", Value::Bool(true));
        assert_eq!(ctx.get_path("key"), Some(&Value::Bool(true)));
        assert_eq!(ctx.get_path("existing"), Some(&Value::Int(1)));
    }
}
