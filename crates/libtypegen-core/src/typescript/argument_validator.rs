use crate::ast;
use crate::path::FieldPath;
use crate::typescript::TypeGenError;
use crate::typescript::TypeScriptBuilder;
use crate::typescript::render_context::RenderContext;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::value::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, TypeGenError>;

/// Argument validation: checks a selection's supplied arguments against a
/// field's declared parameters.
///
/// The check is structural and shallow: list nesting must line up and
/// variable references must be declared by the operation. Scalar/enum value
/// compatibility against the declared parameter type is not verified here.
impl TypeScriptBuilder<'_> {
    pub(crate) fn check_arguments(
        &self,
        ctx: &RenderContext,
        declared_params: &IndexMap<String, Parameter>,
        provided_args: &[(String, ast::operation::Value)],
        path: &FieldPath,
    ) -> Result<()> {
        let mut remaining: IndexMap<&str, &Parameter> = declared_params.iter()
            .map(|(name, param)| (name.as_str(), param))
            .collect();

        for (arg_name, ast_value) in provided_args {
            let Some(param) = remaining.shift_remove(arg_name.as_str()) else {
                if self.options.strict_arguments {
                    return Err(TypeGenError::UnexpectedArgument {
                        argument_name: arg_name.to_string(),
                        path: path.clone(),
                    });
                }
                continue;
            };
            self.check_value_shape(
                ctx,
                &Value::from_ast(ast_value),
                param.type_annotation(),
                arg_name,
                path,
            )?;
        }

        // Unsupplied parameters are fine as long as each can legally be
        // omitted at the call site.
        let missing: Vec<String> = remaining.values()
            .filter(|param| {
                param.default_value().is_none()
                    && !param.type_annotation().nullable()
            })
            .map(|param| param.name().to_string())
            .collect();
        if !missing.is_empty() && !self.options.tolerate_missing_arguments {
            return Err(TypeGenError::MissingArguments {
                argument_names: missing,
                path: path.clone(),
            });
        }

        Ok(())
    }

    fn check_value_shape(
        &self,
        ctx: &RenderContext,
        value: &Value,
        annotation: &TypeAnnotation,
        arg_name: &str,
        path: &FieldPath,
    ) -> Result<()> {
        if let Value::Variable(var_name) = value {
            return if ctx.variable(var_name).is_some() {
                Ok(())
            } else {
                Err(TypeGenError::UndeclaredVariable {
                    path: path.clone(),
                    variable_name: var_name.to_string(),
                })
            };
        }

        match annotation {
            TypeAnnotation::List(list) => match value {
                Value::List(items) => {
                    for item in items {
                        self.check_value_shape(
                            ctx,
                            item,
                            list.item_type(),
                            arg_name,
                            path,
                        )?;
                    }
                    Ok(())
                }
                Value::Null => Ok(()),
                _ => Err(TypeGenError::ArgumentTypeMismatch {
                    argument_name: arg_name.to_string(),
                    path: path.clone(),
                }),
            },

            TypeAnnotation::Named(_) => Ok(()),
        }
    }
}
