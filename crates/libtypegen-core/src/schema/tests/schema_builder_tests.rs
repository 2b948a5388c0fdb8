use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn load_str_registers_every_definition_kind() -> Result<()> {
    let schema = Schema::builder()
        .load_str("
          scalar DateTime
          enum Color { RED GREEN }
          input Filter { tag: String }
          interface Node { id: ID! }
          type Query { node: Node }
          union Pet = Query
        ")?
        .build();

    let expectations = [
        ("Color", GraphQLTypeKind::Enum),
        ("DateTime", GraphQLTypeKind::Scalar),
        ("Filter", GraphQLTypeKind::InputObject),
        ("Node", GraphQLTypeKind::Interface),
        ("Pet", GraphQLTypeKind::Union),
        ("Query", GraphQLTypeKind::Object),
    ];
    for (type_name, expected_kind) in expectations {
        let graphql_type = schema.lookup_type(type_name)
            .unwrap_or_else(|| panic!("`{type_name}` was not registered"));
        assert_eq!(graphql_type.type_kind(), expected_kind);
        assert_eq!(graphql_type.name(), type_name);
    }

    Ok(())
}

#[test]
fn duplicate_type_name_is_an_error() {
    let result = Schema::builder().load_str("
      type Foo { a: Int }
      type Foo { b: Int }
    ");

    assert_eq!(result.err(), Some(SchemaBuildError::DuplicateType {
        type_name: "Foo".to_string(),
    }));
}

#[test]
fn duplicate_name_across_kinds_is_an_error() {
    let result = Schema::builder().load_str("
      type Foo { a: Int }
      enum Foo { A }
    ");

    assert_eq!(result.err(), Some(SchemaBuildError::DuplicateType {
        type_name: "Foo".to_string(),
    }));
}

#[test]
fn register_type_rejects_duplicates() -> Result<()> {
    let mut builder = Schema::builder().load_str("type Query { a: Int }")?;
    let redefinition = Schema::builder()
        .load_str("type Query { b: Int }")?
        .build()
        .lookup_type("Query")
        .cloned()
        .expect("no Query type parsed");

    assert_eq!(
        builder.register_type(redefinition),
        Err(SchemaBuildError::DuplicateType {
            type_name: "Query".to_string(),
        }),
    );

    Ok(())
}

#[test]
fn type_extensions_are_rejected() {
    let result = Schema::builder().load_str("
      type Foo { a: Int }
      extend type Foo { b: Int }
    ");

    assert_eq!(result.err(), Some(SchemaBuildError::UnsupportedTypeExtension {
        type_name: "Foo".to_string(),
    }));
}

#[test]
fn unparseable_model_is_an_error() {
    let result = Schema::builder().load_str("type {{{{");

    assert!(matches!(result, Err(SchemaBuildError::ParseError { .. })));
}

#[test]
fn schema_blocks_and_directive_definitions_are_skipped() -> Result<()> {
    let schema = Schema::builder()
        .load_str("
          schema { query: Query }
          directive @cached on FIELD_DEFINITION
          type Query { a: Int }
        ")?
        .build();

    assert!(matches!(
        schema.lookup_type("Query"),
        Some(GraphQLType::Object(_)),
    ));

    Ok(())
}
