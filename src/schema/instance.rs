use super::*;

/// Runtime values for one row of a model, keyed by field name.
///
/// A field missing from the map is unset, which is different from being set to
/// [`Value::Null`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Instance {
    values: HashMap<String, Value>,
}

impl Instance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn unset(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The value of `name` unless it is unset or null.
    pub fn present(&self, name: &str) -> Option<&Value> {
        self.get(name).filter(|v| !v.is_null())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Instance {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_differs_from_null() {
        let mut obj = Instance::new().with("type", Value::Null);
        assert!(obj.is_set("type"));
        assert!(obj.present("type").is_none());
        assert!(!obj.is_set("username"));

        obj.set("type", "usual");
        assert_eq!(obj.present("type"), Some(&Value::from("usual")));

        assert_eq!(obj.unset("type"), Some(Value::from("usual")));
        assert!(!obj.is_set("type"));
    }

    #[test]
    fn collects_from_pairs() {
        let obj: Instance = [("id", Value::from(1)), ("type", Value::from("usual"))]
            .into_iter()
            .collect();
        assert_eq!(obj.get("id"), Some(&Value::Integer(1)));
    }
}
