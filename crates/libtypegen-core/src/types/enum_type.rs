use crate::ast;

/// Represents an enum type defined in the type model.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}
impl EnumType {
    pub(crate) fn from_ast(def: &ast::schema::EnumType) -> Self {
        Self {
            name: def.name.to_string(),
            values: def.values.iter().map(|value| value.name.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The enum's value names, in declaration order.
    pub fn values(&self) -> &[String] {
        self.values.as_slice()
    }
}
