use derive_more::Display;
use itertools::Itertools as _;

/// A runtime column value.
///
/// `Display` renders the bare literal: text is written as-is, the caller decides
/// whether it needs quotes.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum Value {
    #[display("NULL")]
    Null,
    Integer(i64),
    Real(f64),
    #[display("{}", if *_0 { "TRUE" } else { "FALSE" })]
    Boolean(bool),
    Text(String),
    #[display("X'{}'", _0.iter().map(|b| format!("{b:02X}")).join(""))]
    Blob(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

macro_rules! impl_from {
    ($variant:ident <- $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value.into())
                }
            }
        )+
    };
}

impl_from!(Integer <- i64, i32, i16, i8, u32, u16, u8);
impl_from!(Real <- f64, f32);
impl_from!(Boolean <- bool);
impl_from!(Text <- String, &str, &String);
impl_from!(Blob <- Vec<u8>, &[u8]);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null, "NULL")]
    #[case(Value::from(42), "42")]
    #[case(Value::from(-7i64), "-7")]
    #[case(Value::from(1.5), "1.5")]
    #[case(Value::from(true), "TRUE")]
    #[case(Value::from(false), "FALSE")]
    #[case(Value::from("Vouk"), "Vouk")]
    #[case(Value::from(vec![0x0Au8, 0xFF]), "X'0AFF'")]
    fn renders_bare_literal(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn none_becomes_null() {
        assert!(Value::from(None::<i64>).is_null());
        assert_eq!(Value::from(Some("usual")), Value::Text("usual".into()));
    }
}
