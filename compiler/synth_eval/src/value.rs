//! Runtime values.

use std::fmt;

use synth_ir::{ClassId, Name, StringInterner};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Null,
    Unit,
    Int(i64),
    Bool(bool),
    Str(Name),
    /// An instance; only its class is observable.
    Object(ClassId),
}

impl Value {
    #[inline]
    pub fn is_null(self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(n),
            _ => None,
        }
    }

    pub fn class(self) -> Option<ClassId> {
        match self {
            Value::Object(class) => Some(class),
            _ => None,
        }
    }

    /// Name of the value's runtime type.
    pub fn type_name(self) -> &'static str {
        match self {
            Value::Null => "Nothing?",
            Value::Unit => "Unit",
            Value::Int(_) => "Int",
            Value::Bool(_) => "Boolean",
            Value::Str(_) => "String",
            Value::Object(_) => "object",
        }
    }

    /// Render with names resolved.
    pub fn display<'a>(&self, interner: &'a StringInterner) -> ValueDisplay<'a> {
        ValueDisplay {
            value: *self,
            interner,
        }
    }
}

pub struct ValueDisplay<'a> {
    value: Value,
    interner: &'a StringInterner,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Null => f.write_str("null"),
            Value::Unit => f.write_str("kotlin.Unit"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(name) => f.write_str(self.interner.lookup(name)),
            Value::Object(class) => write!(f, "{}@instance", class.display(self.interner)),
        }
    }
}
