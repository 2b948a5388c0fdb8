use crate::ast;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`].
///
/// Definitions can be bulk-registered from parsed model documents with
/// [`SchemaBuilder::load_str`], registered one at a time with
/// [`SchemaBuilder::register_type`], or any mix of the two.
#[derive(Debug)]
pub struct SchemaBuilder {
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            types: IndexMap::new(),
        }
    }

    pub fn build(self) -> Schema {
        Schema {
            types: self.types,
        }
    }

    /// Parse a model document and register every type definition in it.
    pub fn load_str(mut self, content: &str) -> Result<Self> {
        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(def)?;
        }

        Ok(self)
    }

    /// Register one type definition. Names are unique across the whole
    /// model regardless of kind.
    pub fn register_type(&mut self, graphql_type: GraphQLType) -> Result<()> {
        let type_name = graphql_type.name().to_string();
        if self.types.contains_key(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateType {
                type_name,
            });
        }
        self.types.insert(type_name, graphql_type);
        Ok(())
    }

    fn visit_ast_def(&mut self, def: ast::schema::Definition) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(&type_def),

            // Schema blocks and directive definitions carry no type shapes.
            Definition::SchemaDefinition(_)
                | Definition::DirectiveDefinition(_) => Ok(()),

            Definition::TypeExtension(type_ext) =>
                Err(SchemaBuildError::UnsupportedTypeExtension {
                    type_name: extension_type_name(&type_ext),
                }),
        }
    }

    fn visit_ast_type_def(&mut self, type_def: &ast::schema::TypeDefinition) -> Result<()> {
        use ast::schema::TypeDefinition;
        self.register_type(match type_def {
            TypeDefinition::Enum(enum_def) =>
                GraphQLType::Enum(EnumType::from_ast(enum_def)),

            TypeDefinition::InputObject(inputobj_def) =>
                GraphQLType::InputObject(InputObjectType::from_ast(inputobj_def)),

            TypeDefinition::Interface(iface_def) =>
                GraphQLType::Interface(InterfaceType::from_ast(iface_def)),

            TypeDefinition::Object(obj_def) =>
                GraphQLType::Object(ObjectType::from_ast(obj_def)),

            TypeDefinition::Scalar(scalar_def) =>
                GraphQLType::Scalar(ScalarType::from_ast(scalar_def)),

            TypeDefinition::Union(union_def) =>
                GraphQLType::Union(UnionType::from_ast(union_def)),
        })
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn extension_type_name(ext: &ast::schema::TypeExtension) -> String {
    use ast::schema::TypeExtension;
    match ext {
        TypeExtension::Enum(e) => e.name.to_string(),
        TypeExtension::InputObject(e) => e.name.to_string(),
        TypeExtension::Interface(e) => e.name.to_string(),
        TypeExtension::Object(e) => e.name.to_string(),
        TypeExtension::Scalar(e) => e.name.to_string(),
        TypeExtension::Union(e) => e.name.to_string(),
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple type definitions were registered with the name `{type_name}`")]
    DuplicateType {
        type_name: String,
    },

    #[error("Error parsing model document: {err}")]
    ParseError {
        err: String,
    },

    #[error("Type extensions are not supported: `extend` of `{type_name}`")]
    UnsupportedTypeExtension {
        type_name: String,
    },
}
