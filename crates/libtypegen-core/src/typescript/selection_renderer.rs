use crate::ast;
use crate::path::FieldPath;
use crate::typescript::TypeGenError;
use crate::typescript::TypeScriptBuilder;
use crate::typescript::render_context::RenderContext;
use crate::typescript::text;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::UnionType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, TypeGenError>;

/// The reserved discriminant pseudo-field. Always selectable; its value is
/// the concrete type name of the object being selected.
const TYPENAME_FIELD: &str = "__typename";

/// Record bodies are prefixed with a marker naming the selected type,
/// except for the canonical operation roots.
const CANONICAL_ROOT_NAMES: [&str; 3] = ["Query", "Mutation", "Subscription"];

/// A named type a selection set can resolve against.
#[derive(Clone, Copy, Debug)]
pub(crate) enum CompositeTarget<'a> {
    Interface(&'a InterfaceType),
    Object(&'a ObjectType),
    Union(&'a UnionType),
}
impl<'a> CompositeTarget<'a> {
    pub(crate) fn name(&self) -> &'a str {
        match self {
            CompositeTarget::Interface(t) => t.name(),
            CompositeTarget::Object(t) => t.name(),
            CompositeTarget::Union(t) => t.name(),
        }
    }

    pub(crate) fn type_kind(&self) -> GraphQLTypeKind {
        match self {
            CompositeTarget::Interface(_) => GraphQLTypeKind::Interface,
            CompositeTarget::Object(_) => GraphQLTypeKind::Object,
            CompositeTarget::Union(_) => GraphQLTypeKind::Union,
        }
    }
}

/// Selection rendering: resolves a field-selection set against an
/// object/interface/union target into a composite TypeScript expression.
impl TypeScriptBuilder<'_> {
    pub(crate) fn render_selection_set(
        &self,
        ctx: &mut RenderContext,
        target: CompositeTarget<'_>,
        sel_set: &ast::operation::SelectionSet,
        path: &FieldPath,
    ) -> Result<String> {
        let mut plain_fields: Vec<&ast::operation::Field> = vec![];
        let mut fragments: Vec<ast::operation::InlineFragment> = vec![];
        for item in &sel_set.items {
            match item {
                ast::operation::Selection::Field(ast_field) =>
                    plain_fields.push(ast_field),

                ast::operation::Selection::InlineFragment(ast_frag) =>
                    fragments.push(ast_frag.clone()),

                ast::operation::Selection::FragmentSpread(ast_spread) =>
                    return Err(TypeGenError::UnsupportedFragmentSpread {
                        fragment_name: ast_spread.fragment_name.to_string(),
                        path: path.clone(),
                    }),
            }
        }

        // When the outer set requests the discriminant alongside inline
        // fragments, move it into each branch so every narrowed shape
        // carries its own literal type name.
        if !fragments.is_empty() {
            if let Some(idx) = plain_fields.iter()
                .position(|f| f.name == TYPENAME_FIELD)
            {
                let typename_field = plain_fields.remove(idx).clone();
                for frag in &mut fragments {
                    let already_selected = frag.selection_set.items.iter().any(
                        |item| matches!(
                            item,
                            ast::operation::Selection::Field(f)
                                if f.name == TYPENAME_FIELD
                        ),
                    );
                    if !already_selected {
                        frag.selection_set.items.insert(
                            0,
                            ast::operation::Selection::Field(typename_field.clone()),
                        );
                    }
                }
            }
        }

        let mut lines: Vec<String> = vec![];
        if !CANONICAL_ROOT_NAMES.contains(&target.name()) {
            lines.push(format!("/* {} */", target.name()));
        }
        for ast_field in &plain_fields {
            let output_name = ast_field.alias.as_deref()
                .unwrap_or(ast_field.name.as_str());
            let field_path = path.field(output_name);
            let expr = match target {
                CompositeTarget::Object(obj_type) => self.resolve_field_expr(
                    ctx,
                    obj_type.name(),
                    obj_type.fields(),
                    ast_field,
                    &field_path,
                )?,
                CompositeTarget::Interface(iface_type) => self.resolve_field_expr(
                    ctx,
                    iface_type.name(),
                    iface_type.fields(),
                    ast_field,
                    &field_path,
                )?,
                CompositeTarget::Union(union_type) => self.resolve_union_field_expr(
                    ctx,
                    union_type,
                    ast_field,
                    &field_path,
                )?,
            };
            lines.push(format!("{output_name}: {expr};"));
        }
        let record = text::braced_block(lines);

        let mut fragment_exprs: Vec<String> = vec![];
        for frag in &fragments {
            fragment_exprs.push(match &frag.type_condition {
                Some(ast::operation::TypeCondition::On(cond_name)) =>
                    self.resolve_named(
                        ctx,
                        cond_name,
                        Some(&frag.selection_set),
                        &path.field(cond_name),
                    )?,

                // A condition-less inline fragment narrows nothing; render
                // it against the enclosing target.
                None => self.render_selection_set(
                    ctx,
                    target,
                    &frag.selection_set,
                    path,
                )?,
            });
        }

        if fragment_exprs.is_empty() {
            Ok(record)
        } else {
            Ok(format!("{record} & ({})", fragment_exprs.join(" | ")))
        }
    }

    /// The TypeScript expression for one selected field against a known
    /// field map (an object or interface target, or one union member).
    fn resolve_field_expr(
        &self,
        ctx: &mut RenderContext,
        parent_type_name: &str,
        parent_fields: &IndexMap<String, Field>,
        ast_field: &ast::operation::Field,
        field_path: &FieldPath,
    ) -> Result<String> {
        match parent_fields.get(ast_field.name.as_str()) {
            Some(field_def) => {
                self.check_arguments(
                    ctx,
                    field_def.parameters(),
                    &ast_field.arguments,
                    field_path,
                )?;
                self.resolve_annotation(
                    ctx,
                    field_def.type_annotation(),
                    Some(&ast_field.selection_set),
                    field_path,
                )
            }

            // The discriminant is selectable even though no model declares
            // it: the concrete type name always exists.
            None if ast_field.name == TYPENAME_FIELD =>
                Ok(format!("\"{parent_type_name}\"")),

            None => {
                if self.options.tolerate_missing_fields {
                    Ok(format!(
                        "unknown /* field `{}` is not defined on `{parent_type_name}` */",
                        ast_field.name,
                    ))
                } else {
                    Err(TypeGenError::MissingField {
                        field_name: ast_field.name.to_string(),
                        path: field_path.clone(),
                        type_name: parent_type_name.to_string(),
                    })
                }
            }
        }
    }

    /// A field selected directly on a union must be common to every member:
    /// it is resolved against each member independently and all renderings
    /// must agree verbatim.
    fn resolve_union_field_expr(
        &self,
        ctx: &mut RenderContext,
        union_type: &UnionType,
        ast_field: &ast::operation::Field,
        field_path: &FieldPath,
    ) -> Result<String> {
        let mut member_exprs: Vec<String> = vec![];
        for member_name in union_type.members() {
            match self.schema.lookup_type(member_name) {
                Some(GraphQLType::Object(member_obj)) => {
                    member_exprs.push(self.resolve_field_expr(
                        ctx,
                        member_obj.name(),
                        member_obj.fields(),
                        ast_field,
                        field_path,
                    )?);
                }

                Some(_) => return Err(TypeGenError::InvalidUnionMember {
                    member_name: member_name.to_string(),
                    path: field_path.clone(),
                    union_name: union_type.name().to_string(),
                }),

                None => return Err(TypeGenError::UnknownType {
                    path: field_path.clone(),
                    type_name: member_name.to_string(),
                }),
            }
        }

        let Some(first_expr) = member_exprs.first() else {
            return Ok(format!(
                "never /* union `{}` has no members */",
                union_type.name(),
            ));
        };
        if member_exprs.iter().all(|expr| expr == first_expr) {
            Ok(first_expr.clone())
        } else if self.options.allow_unknown_types {
            Ok(format!(
                "any /* field `{}` resolves to different shapes across `{}` members */",
                ast_field.name,
                union_type.name(),
            ))
        } else {
            Err(TypeGenError::InconsistentUnionShape {
                field_name: ast_field.name.to_string(),
                path: field_path.clone(),
                union_name: union_type.name().to_string(),
            })
        }
    }
}
