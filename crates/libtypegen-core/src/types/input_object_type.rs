use crate::ast;
use crate::types::InputField;
use indexmap::IndexMap;

/// Represents an input object type defined in the type model.
///
/// Input object types may reference themselves (or each other) through
/// their fields; nothing here flattens that graph. Rendering defers every
/// reference by name and the closure expands each name exactly once.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    pub(crate) fields: IndexMap<String, InputField>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub(crate) fn from_ast(def: &ast::schema::InputObjectType) -> Self {
        Self {
            fields: def.fields.iter().map(|input_val| (
                input_val.name.to_string(),
                InputField::from_ast(input_val),
            )).collect(),
            name: def.name.to_string(),
        }
    }

    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
