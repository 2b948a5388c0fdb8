use crate::ast;
use crate::path::FieldPath;
use crate::typescript::TypeGenError;
use crate::typescript::TypeScriptBuilder;
use crate::typescript::render_context::RenderContext;
use crate::typescript::selection_renderer::CompositeTarget;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, TypeGenError>;

/// Type reference resolution: walks a [`TypeAnnotation`] together with an
/// optional selection set and emits the equivalent TypeScript expression.
impl TypeScriptBuilder<'_> {
    /// Resolve an annotated type reference to a TypeScript expression.
    ///
    /// `selection` is `None` in input positions (variables, input object
    /// fields); field positions pass their own (possibly empty) selection
    /// set through unchanged, down to the innermost named type.
    pub(crate) fn resolve_annotation(
        &self,
        ctx: &mut RenderContext,
        annotation: &TypeAnnotation,
        selection: Option<&ast::operation::SelectionSet>,
        path: &FieldPath,
    ) -> Result<String> {
        match annotation {
            TypeAnnotation::Named(named) => {
                let expr = self.resolve_named(ctx, named.name(), selection, path)?;
                Ok(if named.nullable() {
                    format!("({expr} | null)")
                } else {
                    expr
                })
            }

            // The element's own nullability is resolved by the recursive
            // call; this layer's null-union wraps the array, never the
            // element.
            TypeAnnotation::List(list) => {
                let item_expr = self.resolve_annotation(
                    ctx,
                    list.item_type(),
                    selection,
                    &path.list_element(),
                )?;
                let expr = format!("Array<{item_expr}>");
                Ok(if list.nullable() {
                    format!("({expr} | null)")
                } else {
                    expr
                })
            }
        }
    }

    /// Resolve a bare named-type reference, dispatching on its registered
    /// kind.
    pub(crate) fn resolve_named(
        &self,
        ctx: &mut RenderContext,
        type_name: &str,
        selection: Option<&ast::operation::SelectionSet>,
        path: &FieldPath,
    ) -> Result<String> {
        // A present-but-empty selection set (a field selected with no
        // braces) is indistinguishable from no nesting for leaf types, but
        // `selection` itself still tells input positions (`None`) apart
        // from field positions for the composite kinds below.
        let nested = selection.filter(|sel| !sel.items.is_empty());

        let Some(graphql_type) = self.schema.lookup_type(type_name) else {
            if nested.is_none() {
                if let Some(scalar_expr) = self.scalars.get(type_name) {
                    return Ok(scalar_expr.clone());
                }
            }
            if !self.options.allow_unknown_types {
                return Err(TypeGenError::UnknownType {
                    path: path.clone(),
                    type_name: type_name.to_string(),
                });
            }
            return match nested {
                Some(sel_set) => {
                    let synthetic = ObjectType::synthetic(type_name);
                    self.render_selection_set(
                        ctx,
                        CompositeTarget::Object(&synthetic),
                        sel_set,
                        path,
                    )
                }
                None => Ok(format!("unknown /* unknown type `{type_name}` */")),
            };
        };

        match graphql_type {
            GraphQLType::Scalar(_) => {
                if let Some(sel_set) = nested {
                    return self.render_leaf_selection(
                        ctx,
                        type_name,
                        GraphQLTypeKind::Scalar,
                        sel_set,
                        path,
                    );
                }
                Ok(self.scalar_expr(type_name))
            }

            GraphQLType::Enum(enum_type) => {
                if let Some(sel_set) = nested {
                    return self.render_leaf_selection(
                        ctx,
                        type_name,
                        GraphQLTypeKind::Enum,
                        sel_set,
                        path,
                    );
                }
                if enum_type.values().is_empty() {
                    return Err(TypeGenError::EmptyEnum {
                        path: path.clone(),
                        type_name: type_name.to_string(),
                    });
                }
                let literals = enum_type.values().iter()
                    .map(|value| format!("\"{value}\""))
                    .collect::<Vec<_>>()
                    .join(" | ");
                Ok(format!("({literals})"))
            }

            // Never inlined: the reference stays by-name and the closure
            // declares the type once, which is what keeps self-referential
            // and mutually-recursive input graphs finite.
            GraphQLType::InputObject(_) => {
                if let Some(sel_set) = nested {
                    return self.render_leaf_selection(
                        ctx,
                        type_name,
                        GraphQLTypeKind::InputObject,
                        sel_set,
                        path,
                    );
                }
                ctx.enqueue_input_type(type_name);
                Ok(type_name.to_string())
            }

            GraphQLType::Object(obj_type) => self.resolve_composite(
                ctx,
                CompositeTarget::Object(obj_type),
                selection,
                path,
            ),

            GraphQLType::Interface(iface_type) => self.resolve_composite(
                ctx,
                CompositeTarget::Interface(iface_type),
                selection,
                path,
            ),

            GraphQLType::Union(union_type) => self.resolve_composite(
                ctx,
                CompositeTarget::Union(union_type),
                selection,
                path,
            ),
        }
    }

    fn resolve_composite(
        &self,
        ctx: &mut RenderContext,
        target: CompositeTarget<'_>,
        selection: Option<&ast::operation::SelectionSet>,
        path: &FieldPath,
    ) -> Result<String> {
        match selection {
            None => Err(TypeGenError::MissingSelection {
                path: path.clone(),
                type_name: target.name().to_string(),
            }),

            // Selecting a composite type as if it were a scalar.
            Some(sel_set) if sel_set.items.is_empty() => {
                if self.options.tolerate_invalid_shapes {
                    Ok(format!(
                        "unknown /* `{}` requires a sub-selection */",
                        target.name(),
                    ))
                } else {
                    Err(TypeGenError::InvalidShape {
                        path: path.clone(),
                        type_kind: target.type_kind(),
                        type_name: target.name().to_string(),
                    })
                }
            }

            Some(sel_set) => self.render_selection_set(ctx, target, sel_set, path),
        }
    }

    /// A sub-selection was requested on a leaf (or input) type. Tolerant
    /// mode renders it against a synthesized empty object and annotates
    /// the violation; strict mode fails.
    fn render_leaf_selection(
        &self,
        ctx: &mut RenderContext,
        type_name: &str,
        type_kind: GraphQLTypeKind,
        sel_set: &ast::operation::SelectionSet,
        path: &FieldPath,
    ) -> Result<String> {
        if !self.options.tolerate_invalid_shapes {
            return Err(TypeGenError::InvalidShape {
                path: path.clone(),
                type_kind,
                type_name: type_name.to_string(),
            });
        }
        let synthetic = ObjectType::synthetic(type_name);
        let record = self.render_selection_set(
            ctx,
            CompositeTarget::Object(&synthetic),
            sel_set,
            path,
        )?;
        Ok(format!(
            "{record} /* invalid sub-selection on {type_kind} `{type_name}` */",
        ))
    }

    pub(crate) fn scalar_expr(&self, type_name: &str) -> String {
        match self.scalars.get(type_name) {
            Some(expr) => expr.clone(),
            None => format!(
                "unknown /* scalar `{type_name}` has no registered TypeScript type */",
            ),
        }
    }
}
