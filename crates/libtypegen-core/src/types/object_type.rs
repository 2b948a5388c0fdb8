use crate::ast;
use crate::types::Field;
use indexmap::IndexMap;

/// Represents an object type defined in the type model.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType {
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) name: String,
}
impl ObjectType {
    pub(crate) fn from_ast(def: &ast::schema::ObjectType) -> Self {
        Self {
            fields: def.fields.iter().map(|field_def| (
                field_def.name.to_string(),
                Field::from_ast(field_def),
            )).collect(),
            name: def.name.to_string(),
        }
    }

    /// An object with the given name and no fields. Used for operation
    /// roots that have no registered type and for degraded renderings of
    /// unknown types: selections against it fail (or degrade) per-field.
    pub(crate) fn synthetic(name: &str) -> Self {
        Self {
            fields: IndexMap::new(),
            name: name.to_string(),
        }
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
