use crate::path::FieldPath;
use crate::typescript::BuilderOptions;
use crate::typescript::TypeGenError;
use crate::typescript::TypeScriptBuilder;
use crate::typescript::tests::test_utils;
use crate::types::GraphQLTypeKind;

type Result<T> = std::result::Result<T, TypeGenError>;

const PET_MODEL: &str = "
  type Query { pet: Pet! }
  union Pet = Dog | Cat
  type Dog { barks: Boolean! name: String! }
  type Cat { meows: Boolean! name: String! }
";

#[test]
fn typename_renders_as_the_target_name_literal() -> Result<()> {
    let schema = test_utils::build_schema("
      type Query { me: User! }
      type User { id: ID! }
    ");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("query Me { me { __typename id } }");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains("__typename: \"User\";"));
    assert!(rendered.text.contains("id: string;"));

    Ok(())
}

#[test]
fn aliased_field_uses_the_alias_as_output_key() -> Result<()> {
    let schema = test_utils::build_schema("
      type Query { me: User! }
      type User { id: ID! }
    ");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("query Me { self: me { key: id } }");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains("self: {"));
    assert!(rendered.text.contains("key: string;"));
    assert!(!rendered.text.contains("\n  me:"));

    Ok(())
}

#[test]
fn selecting_an_undeclared_field_is_an_error() {
    let schema = test_utils::build_schema("
      type Query { me: User! }
      type User { id: ID! }
    ");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("query Me { me { nope } }");

    assert_eq!(builder.render_operation(&op).err(), Some(TypeGenError::MissingField {
        field_name: "nope".to_string(),
        path: FieldPath::root().field("me").field("nope"),
        type_name: "User".to_string(),
    }));
}

#[test]
fn undeclared_field_degrades_with_marker_when_tolerated() -> Result<()> {
    let schema = test_utils::build_schema("
      type Query { me: User! }
      type User { id: ID! }
    ");
    let builder = TypeScriptBuilder::with_options(&schema, BuilderOptions {
        tolerate_missing_fields: true,
        ..BuilderOptions::default()
    });
    let op = test_utils::parse_operation("query Me { me { nope } }");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains(
        "nope: unknown /* field `nope` is not defined on `User` */;",
    ));

    Ok(())
}

#[test]
fn nonroot_record_bodies_carry_a_type_marker() -> Result<()> {
    let schema = test_utils::build_schema("
      type Query { me: User! }
      type User { id: ID! }
    ");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("query Me { me { id } }");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains("/* User */"));
    assert!(!rendered.text.contains("/* Query */"));

    Ok(())
}

#[test]
fn union_common_field_resolves_when_members_agree() -> Result<()> {
    let schema = test_utils::build_schema(PET_MODEL);
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("query GetPet { pet { name } }");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains("name: string;"));

    Ok(())
}

#[test]
fn union_common_field_with_divergent_shapes_is_an_error() {
    let schema = test_utils::build_schema("
      type Query { thing: Thing! }
      union Thing = A | B
      type A { id: Int! }
      type B { id: String! }
    ");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("query GetThing { thing { id } }");

    assert_eq!(
        builder.render_operation(&op).err(),
        Some(TypeGenError::InconsistentUnionShape {
            field_name: "id".to_string(),
            path: FieldPath::root().field("thing").field("id"),
            union_name: "Thing".to_string(),
        }),
    );
}

#[test]
fn union_common_field_divergence_degrades_when_tolerated() -> Result<()> {
    let schema = test_utils::build_schema("
      type Query { thing: Thing! }
      union Thing = A | B
      type A { id: Int! }
      type B { id: String! }
    ");
    let builder = TypeScriptBuilder::with_options(&schema, BuilderOptions {
        allow_unknown_types: true,
        ..BuilderOptions::default()
    });
    let op = test_utils::parse_operation("query GetThing { thing { id } }");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains(
        "id: any /* field `id` resolves to different shapes across `Thing` members */;",
    ));

    Ok(())
}

#[test]
fn union_member_that_is_not_an_object_is_an_error() {
    let schema = test_utils::build_schema("
      type Query { thing: Thing! }
      union Thing = A | Color
      type A { id: Int! }
      enum Color { RED }
    ");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("query GetThing { thing { id } }");

    assert_eq!(
        builder.render_operation(&op).err(),
        Some(TypeGenError::InvalidUnionMember {
            member_name: "Color".to_string(),
            path: FieldPath::root().field("thing").field("id"),
            union_name: "Thing".to_string(),
        }),
    );
}

#[test]
fn typename_is_distributed_into_each_fragment_branch() -> Result<()> {
    let schema = test_utils::build_schema(PET_MODEL);
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("
      query GetPet {
        pet {
          __typename
          ... on Dog { barks }
          ... on Cat { meows }
        }
      }
    ");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains("__typename: \"Dog\";"));
    assert!(rendered.text.contains("__typename: \"Cat\";"));
    assert!(rendered.text.contains("} & ("));
    // The union's own record keeps no discriminant of its own.
    assert!(!rendered.text.contains("__typename: \"Pet\";"));

    Ok(())
}

#[test]
fn fragment_branches_combine_as_an_intersection_with_a_union() -> Result<()> {
    let schema = test_utils::build_schema(PET_MODEL);
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("
      query GetPet {
        pet {
          ... on Dog { barks }
          ... on Cat { meows }
        }
      }
    ");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains("barks: boolean;"));
    assert!(rendered.text.contains("meows: boolean;"));
    assert!(rendered.text.contains("/* Dog */"));
    assert!(rendered.text.contains("/* Cat */"));
    assert!(rendered.text.contains("} & ("));
    assert!(rendered.text.contains("} | {"));

    Ok(())
}

#[test]
fn interface_selection_narrows_through_inline_fragments() -> Result<()> {
    let schema = test_utils::build_schema("
      type Query { node: Node! }
      interface Node { id: ID! }
      type User implements Node { id: ID! name: String }
    ");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("
      query GetNode {
        node {
          id
          ... on User { name }
        }
      }
    ");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains("id: string;"));
    assert!(rendered.text.contains("name: (string | null);"));
    assert!(rendered.text.contains("/* Node */"));
    assert!(rendered.text.contains("/* User */"));

    Ok(())
}

#[test]
fn named_fragment_spreads_are_rejected() {
    let schema = test_utils::build_schema("
      type Query { me: User! }
      type User { id: ID! }
    ");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("
      query Me { me { ...userFields } }
      fragment userFields on User { id }
    ");

    assert_eq!(builder.render_operation(&op).err(), Some(
        TypeGenError::UnsupportedFragmentSpread {
            fragment_name: "userFields".to_string(),
            path: FieldPath::root().field("me"),
        },
    ));
}

#[test]
fn selecting_a_composite_without_subfields_is_an_error() {
    let schema = test_utils::build_schema("
      type Query { me: User! }
      type User { id: ID! }
    ");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("query Me { me }");

    assert_eq!(builder.render_operation(&op).err(), Some(TypeGenError::InvalidShape {
        path: FieldPath::root().field("me"),
        type_kind: GraphQLTypeKind::Object,
        type_name: "User".to_string(),
    }));
}

#[test]
fn composite_without_subfields_degrades_when_tolerated() -> Result<()> {
    let schema = test_utils::build_schema("
      type Query { me: User! }
      type User { id: ID! }
    ");
    let builder = TypeScriptBuilder::with_options(&schema, BuilderOptions {
        tolerate_invalid_shapes: true,
        ..BuilderOptions::default()
    });
    let op = test_utils::parse_operation("query Me { me }");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains(
        "me: unknown /* `User` requires a sub-selection */;",
    ));

    Ok(())
}

#[test]
fn selecting_subfields_of_a_scalar_is_an_error() {
    let schema = test_utils::build_schema("type Query { count: Int! }");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("query Count { count { digits } }");

    assert_eq!(builder.render_operation(&op).err(), Some(TypeGenError::InvalidShape {
        path: FieldPath::root().field("count"),
        type_kind: GraphQLTypeKind::Scalar,
        type_name: "Int".to_string(),
    }));
}

#[test]
fn scalar_subselection_degrades_when_tolerated() -> Result<()> {
    let schema = test_utils::build_schema("type Query { count: Int! }");
    let builder = TypeScriptBuilder::with_options(&schema, BuilderOptions {
        tolerate_invalid_shapes: true,
        tolerate_missing_fields: true,
        ..BuilderOptions::default()
    });
    let op = test_utils::parse_operation("query Count { count { digits } }");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains("/* invalid sub-selection on scalar `Int` */"));
    assert!(rendered.text.contains(
        "digits: unknown /* field `digits` is not defined on `Int` */;",
    ));

    Ok(())
}

#[test]
fn unknown_type_selection_synthesizes_an_empty_object_when_tolerated() -> Result<()> {
    let schema = test_utils::build_schema("type Query { me: User! }");
    let builder = TypeScriptBuilder::with_options(&schema, BuilderOptions {
        allow_unknown_types: true,
        tolerate_missing_fields: true,
        ..BuilderOptions::default()
    });
    let op = test_utils::parse_operation("query Me { me { id } }");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains("/* User */"));
    assert!(rendered.text.contains(
        "id: unknown /* field `id` is not defined on `User` */;",
    ));

    Ok(())
}
