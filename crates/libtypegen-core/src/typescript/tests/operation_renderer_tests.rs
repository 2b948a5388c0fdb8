use crate::operation_kind::OperationKind;
use crate::path::FieldPath;
use crate::typescript::TypeGenError;
use crate::typescript::TypeScriptBuilder;
use crate::typescript::tests::test_utils;

type Result<T> = std::result::Result<T, TypeGenError>;

#[test]
fn renders_result_variables_and_normalized_source() -> Result<()> {
    let schema = test_utils::build_schema("
      type Query { getFoo(a: Int): Foo }
      type Foo { b: String c: String }
    ");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("
      query GetFoo {
        getFoo(a: 123) {
          b
        }
      }
    ");

    let rendered = builder.render_operation(&op)?;
    assert_eq!(
        rendered.text,
        "export const GetFooQuery = \"query GetFoo { getFoo(a: 123) { b } }\";\n\
        \n\
        export type GetFooQueryResult = {\n\
        \x20 getFoo: ({\n\
        \x20   /* Foo */\n\
        \x20   b: (string | null);\n\
        \x20 } | null);\n\
        };\n\
        \n\
        export type GetFooQueryVariables = {};",
    );
    assert!(rendered.pending_input_types.is_empty());

    Ok(())
}

#[test]
fn variables_type_marks_omittable_variables_optional() -> Result<()> {
    let schema = test_utils::build_schema("
      type Query { getFoo(a: Int): Foo }
      type Foo { b: String }
    ");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("
      query GetFoo($a: Int, $b: String!, $c: Int = 5) {
        getFoo(a: $a) { b }
      }
    ");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains(
        "export type GetFooQueryVariables = {\n\
        \x20 a?: (number | null);\n\
        \x20 b: string;\n\
        \x20 c?: (number | null);\n\
        };",
    ));

    Ok(())
}

#[test]
fn input_object_variables_are_referenced_by_name_and_owed_to_the_closure() -> Result<()> {
    let schema = test_utils::build_schema("
      input Pair { x: Int! y: Pair }
      type Query { makePair(p: Pair): Boolean }
    ");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("
      query MakePair($p: Pair) { makePair(p: $p) }
    ");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains("p?: (Pair | null);"));
    assert_eq!(rendered.pending_input_types, vec!["Pair".to_string()]);

    // The caller flushes the closure once for everything owed.
    let input_types = builder.render_input_types(&rendered.pending_input_types)?;
    assert_eq!(input_types.included_types, vec!["Pair".to_string()]);
    assert!(input_types.text.contains("y?: (Pair | null);"));

    Ok(())
}

#[test]
fn anonymous_operations_are_rejected() {
    let schema = test_utils::build_schema("type Query { getFoo: Int }");
    let builder = TypeScriptBuilder::new(&schema);

    let shorthand = test_utils::parse_operation("{ getFoo }");
    assert_eq!(
        builder.render_operation(&shorthand).err(),
        Some(TypeGenError::UnnamedOperation),
    );

    let unnamed = test_utils::parse_operation("query { getFoo }");
    assert_eq!(
        builder.render_operation(&unnamed).err(),
        Some(TypeGenError::UnnamedOperation),
    );
}

#[test]
fn subscriptions_are_rejected() {
    let schema = test_utils::build_schema("type Query { getFoo: Int }");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("subscription Watch { getFoo }");

    assert_eq!(
        builder.render_operation(&op).err(),
        Some(TypeGenError::UnsupportedOperation {
            kind: OperationKind::Subscription,
        }),
    );
}

#[test]
fn mutations_derive_names_from_the_mutation_root() -> Result<()> {
    let schema = test_utils::build_schema("
      type Query { x: Int }
      type Mutation { doIt: Boolean! }
    ");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("mutation DoIt { doIt }");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains("export const DoItMutation = "));
    assert!(rendered.text.contains("export type DoItMutationResult = {"));
    assert!(rendered.text.contains("export type DoItMutationVariables = {}"));
    assert!(rendered.text.contains("doIt: boolean;"));

    Ok(())
}

#[test]
fn operations_against_a_missing_root_fail_per_field() {
    let schema = test_utils::build_schema("type Query { x: Int }");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("mutation DoIt { doIt }");

    assert_eq!(builder.render_operation(&op).err(), Some(TypeGenError::MissingField {
        field_name: "doIt".to_string(),
        path: FieldPath::root().field("doIt"),
        type_name: "Mutation".to_string(),
    }));
}

#[test]
fn scalar_overrides_take_effect_between_renders() -> Result<()> {
    let schema = test_utils::build_schema("type Query { id: ID! }");
    let mut builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("query GetId { id }");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains("id: string;"));

    builder.register_scalar("ID", "string | number");
    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains("id: string | number;"));

    Ok(())
}

#[test]
fn string_arguments_are_escaped_in_the_source_constant() -> Result<()> {
    let schema = test_utils::build_schema("type Query { find(q: String): Int }");
    let builder = TypeScriptBuilder::new(&schema);
    let op = test_utils::parse_operation("query Find { find(q: \"dogs\") }");

    let rendered = builder.render_operation(&op)?;
    assert!(rendered.text.contains(
        "export const FindQuery = \"query Find { find(q: \\\"dogs\\\") }\";",
    ));

    Ok(())
}
