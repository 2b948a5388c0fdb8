use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// An immutable type model: the set of named type definitions operations
/// can select against.
///
/// Built once with a [`SchemaBuilder`] and read-only thereafter; rendering
/// borrows it freely.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// The definition registered under `name`, if any.
    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// All registered definitions, in registration order.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}
