use crate::ast;

/// Represents a union type defined in the type model.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub(crate) fn from_ast(def: &ast::schema::UnionType) -> Self {
        Self {
            members: def.types.clone(),
            name: def.name.to_string(),
        }
    }

    /// The member type names, in declaration order. Each must name a
    /// registered object type.
    pub fn members(&self) -> &[String] {
        self.members.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
