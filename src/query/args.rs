use super::*;

/// Arguments for [`Dao::call`]. Each query accepts exactly one shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Args<'a> {
    None,
    Id(Value),
    Instance(&'a Instance),
    Keywords(HashMap<String, Value>),
    Positional(Vec<Value>),
}

impl Args<'_> {
    pub fn id(id: impl Into<Value>) -> Self {
        Args::Id(id.into())
    }

    pub fn keywords<K: Into<String>, V: Into<Value>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Args::Keywords(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    pub fn positional<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Args::Positional(values.into_iter().map(Into::into).collect())
    }

    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Args::None => "no arguments",
            Args::Id(_) => "an id",
            Args::Instance(_) => "an instance",
            Args::Keywords(_) => "keyword arguments",
            Args::Positional(_) => "positional arguments",
        }
    }
}

impl<'a> From<&'a Instance> for Args<'a> {
    fn from(value: &'a Instance) -> Self {
        Args::Instance(value)
    }
}
