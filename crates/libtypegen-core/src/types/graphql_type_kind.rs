/// The kind of a [`GraphQLType`](crate::types::GraphQLType), without any of
/// the kind-specific data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl std::fmt::Display for GraphQLTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphQLTypeKind::Enum => write!(f, "enum"),
            GraphQLTypeKind::InputObject => write!(f, "input object"),
            GraphQLTypeKind::Interface => write!(f, "interface"),
            GraphQLTypeKind::Object => write!(f, "object"),
            GraphQLTypeKind::Scalar => write!(f, "scalar"),
            GraphQLTypeKind::Union => write!(f, "union"),
        }
    }
}
