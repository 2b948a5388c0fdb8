use crate::ast;
use crate::types::Field;
use indexmap::IndexMap;

/// Represents an interface type defined in the type model.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType {
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) name: String,
}
impl InterfaceType {
    pub(crate) fn from_ast(def: &ast::schema::InterfaceType) -> Self {
        Self {
            fields: def.fields.iter().map(|field_def| (
                field_def.name.to_string(),
                Field::from_ast(field_def),
            )).collect(),
            name: def.name.to_string(),
        }
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
