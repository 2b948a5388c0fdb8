use crate::ast;
use crate::operation_kind::OperationKind;
use crate::path::FieldPath;
use crate::typescript::RenderedOperation;
use crate::typescript::TypeGenError;
use crate::typescript::TypeScriptBuilder;
use crate::typescript::render_context::RenderContext;
use crate::typescript::selection_renderer::CompositeTarget;
use crate::typescript::text;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, TypeGenError>;

/// Operation rendering: the top-level entry point that turns one operation
/// AST node into its emitted artifacts.
impl TypeScriptBuilder<'_> {
    /// Render one operation into (1) a constant holding its normalized
    /// source text, (2) a result-shape declaration, and (3) a
    /// variables-shape declaration.
    ///
    /// Declaration names are `{operationName}{RootTypeName}`-derived, so
    /// repeated builds are textually stable. Input object types referenced
    /// along the way are returned un-expanded; see
    /// [`TypeScriptBuilder::render_input_types`].
    pub fn render_operation(
        &self,
        operation: &ast::operation::OperationDefinition,
    ) -> Result<RenderedOperation> {
        use ast::operation::OperationDefinition;
        let (kind, name, variable_definitions, sel_set) = match operation {
            OperationDefinition::Query(query) => (
                OperationKind::Query,
                query.name.as_deref(),
                query.variable_definitions.as_slice(),
                &query.selection_set,
            ),
            OperationDefinition::Mutation(mutation) => (
                OperationKind::Mutation,
                mutation.name.as_deref(),
                mutation.variable_definitions.as_slice(),
                &mutation.selection_set,
            ),
            OperationDefinition::Subscription(_) =>
                return Err(TypeGenError::UnsupportedOperation {
                    kind: OperationKind::Subscription,
                }),
            // The anonymous shorthand carries no name to derive
            // declaration names from.
            OperationDefinition::SelectionSet(_) =>
                return Err(TypeGenError::UnnamedOperation),
        };
        let name = name.ok_or(TypeGenError::UnnamedOperation)?;
        log::debug!("rendering {kind} operation `{name}`");

        let root_type = self.operation_root_type(kind);
        let decl_prefix = format!("{name}{}", kind.root_type_name());

        let mut ctx = RenderContext::new();
        for var_def in variable_definitions {
            ctx.declare_variable(
                &var_def.name,
                TypeAnnotation::from_ast_type(&var_def.var_type),
            );
        }

        // Re-serialized rather than sliced from the original source: the
        // emitted payload stays byte-consistent with the AST that was
        // type-checked, independent of source formatting and comments.
        let source_text = text::collapse_whitespace(&operation.to_string());

        let result_expr = self.render_selection_set(
            &mut ctx,
            CompositeTarget::Object(&root_type),
            sel_set,
            &FieldPath::root(),
        )?;

        let mut variable_lines: Vec<String> = vec![];
        for var_def in variable_definitions {
            let annotation = TypeAnnotation::from_ast_type(&var_def.var_type);
            let expr = self.resolve_annotation(
                &mut ctx,
                &annotation,
                None,
                &FieldPath::root().field(&var_def.name),
            )?;
            // Nullability and a declared default each make the variable
            // legal to omit at the call site.
            let optional = if annotation.nullable() || var_def.default_value.is_some() {
                "?"
            } else {
                ""
            };
            variable_lines.push(format!("{}{optional}: {expr};", var_def.name));
        }

        let text = format!(
            "export const {decl_prefix} = {};\n\n\
            export type {decl_prefix}Result = {result_expr};\n\n\
            export type {decl_prefix}Variables = {};",
            text::string_literal(&source_text),
            text::braced_block(variable_lines),
        );

        Ok(RenderedOperation {
            pending_input_types: ctx.take_pending_input_types(),
            text,
        })
    }

    /// The object type operations of `kind` select against. A model with
    /// no (object-typed) definition under the canonical root name gets a
    /// synthetic empty root: the operation is legal but every field
    /// selected on it will fail (or degrade) individually.
    fn operation_root_type(&self, kind: OperationKind) -> ObjectType {
        match self.schema.lookup_type(kind.root_type_name()) {
            Some(GraphQLType::Object(obj_type)) => obj_type.clone(),
            _ => ObjectType::synthetic(kind.root_type_name()),
        }
    }
}
