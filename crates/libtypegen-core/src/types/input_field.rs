use crate::ast;
use crate::types::TypeAnnotation;
use crate::value::Value;

/// Represents a field defined on an
/// [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputField {
    pub(crate) default_value: Option<Value>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputField {
    pub(crate) fn from_ast(def: &ast::schema::InputValue) -> Self {
        Self {
            default_value: def.default_value.as_ref().map(Value::from_ast),
            name: def.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&def.value_type),
        }
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
