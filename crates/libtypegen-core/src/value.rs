use crate::ast;
use indexmap::IndexMap;

/// Represents a constant value supplied for a field argument or declared as
/// a parameter/variable default.
///
/// Variable references are kept by name; they resolve against the declared
/// variables of the operation being rendered, not against the schema.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Bool(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    Variable(String),
}
impl Value {
    pub(crate) fn from_ast(ast_value: &ast::operation::Value) -> Self {
        match ast_value {
            ast::operation::Value::Variable(var_name) =>
                Value::Variable(var_name.to_string()),

            ast::operation::Value::Int(value) =>
                Value::Int(value.as_i64().unwrap_or_default()),

            ast::operation::Value::Float(value) =>
                Value::Float(*value),

            ast::operation::Value::String(value) =>
                Value::String(value.clone()),

            ast::operation::Value::Boolean(value) =>
                Value::Bool(*value),

            ast::operation::Value::Null =>
                Value::Null,

            ast::operation::Value::Enum(value) =>
                Value::Enum(value.to_string()),

            ast::operation::Value::List(values) =>
                Value::List(values.iter().map(Value::from_ast).collect()),

            ast::operation::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.clone(), Value::from_ast(ast_value))
                ).collect()),
        }
    }

    /// Unwrap the variable name if this value is a variable reference.
    pub fn as_variable(&self) -> Option<&str> {
        if let Self::Variable(name) = self {
            Some(name.as_str())
        } else {
            None
        }
    }
}
