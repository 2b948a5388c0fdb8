use crate::operation_kind::OperationKind;
use crate::path::FieldPath;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

/// Failures raised while rendering an operation or the input-type closure.
///
/// Traversal errors carry the dot/bracket [`FieldPath`] accumulated up to
/// the failing position. A failure aborts the whole render call; no partial
/// output is produced.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeGenError {
    #[error(
        "A non-list value was supplied for the list-typed argument \
        `{argument_name}` at `{path}`"
    )]
    ArgumentTypeMismatch {
        argument_name: String,
        path: FieldPath,
    },

    #[error("The enum type `{type_name}` declares no values (at `{path}`)")]
    EmptyEnum {
        path: FieldPath,
        type_name: String,
    },

    #[error(
        "The field `{field_name}` at `{path}` resolves to a different shape \
        on different members of the `{union_name}` union"
    )]
    InconsistentUnionShape {
        field_name: String,
        path: FieldPath,
        union_name: String,
    },

    #[error(
        "The selection at `{path}` does not fit the {type_kind} type \
        `{type_name}`"
    )]
    InvalidShape {
        path: FieldPath,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "The `{union_name}` union lists `{member_name}` as a member, but \
        `{member_name}` is not an object type (at `{path}`)"
    )]
    InvalidUnionMember {
        member_name: String,
        path: FieldPath,
        union_name: String,
    },

    #[error(
        "Required arguments were not supplied at `{path}`: \
        {}",
        argument_names.join(", "),
    )]
    MissingArguments {
        argument_names: Vec<String>,
        path: FieldPath,
    },

    #[error("The type `{type_name}` has no field `{field_name}` (at `{path}`)")]
    MissingField {
        field_name: String,
        path: FieldPath,
        type_name: String,
    },

    #[error(
        "The composite type `{type_name}` at `{path}` was referenced in a \
        position that provides no field selection"
    )]
    MissingSelection {
        path: FieldPath,
        type_name: String,
    },

    #[error("The argument `{argument_name}` at `{path}` matches no declared parameter")]
    UnexpectedArgument {
        argument_name: String,
        path: FieldPath,
    },

    #[error(
        "The variable `${variable_name}` referenced at `{path}` is not \
        declared by the operation"
    )]
    UndeclaredVariable {
        path: FieldPath,
        variable_name: String,
    },

    #[error("No input object type named `{type_name}` is registered")]
    UnknownInputType {
        type_name: String,
    },

    #[error("No type named `{type_name}` is registered (at `{path}`)")]
    UnknownType {
        path: FieldPath,
        type_name: String,
    },

    #[error("Operations must be named to derive declaration names from")]
    UnnamedOperation,

    #[error("{kind} operations are not supported")]
    UnsupportedOperation {
        kind: OperationKind,
    },

    #[error(
        "Named fragment spreads are not supported; use an inline fragment \
        instead of `...{fragment_name}` (at `{path}`)"
    )]
    UnsupportedFragmentSpread {
        fragment_name: String,
        path: FieldPath,
    },

    #[error(
        "`{type_name}` was queued for input-type expansion but is \
        registered as {type_kind} type, not an input object"
    )]
    WrongKind {
        type_kind: GraphQLTypeKind,
        type_name: String,
    },
}
