use crate::ast;

/// Represents a custom scalar type declared in the type model.
///
/// The TypeScript expression a scalar renders as lives in the builder's
/// scalar map, not here; a declaration only reserves the name.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(crate) name: String,
}
impl ScalarType {
    pub(crate) fn from_ast(def: &ast::schema::ScalarType) -> Self {
        Self {
            name: def.name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
