use crate::path::FieldPath;
use crate::typescript::RenderedInputTypes;
use crate::typescript::TypeGenError;
use crate::typescript::TypeScriptBuilder;
use crate::typescript::render_context::RenderContext;
use crate::typescript::text;
use crate::types::GraphQLType;
use indexmap::IndexSet;

type Result<T> = std::result::Result<T, TypeGenError>;

/// Input-type closure: breadth-first, de-duplicated expansion of the named
/// input object types an operation referenced but did not inline.
impl TypeScriptBuilder<'_> {
    /// Emit one `export type` declaration per distinct input object type
    /// reachable from `type_names`, in first-seen order.
    ///
    /// Expansion shares one worklist with field resolution: resolving a
    /// field may queue further names, and the seen-set guarantees each
    /// distinct name is expanded exactly once — which is what terminates
    /// self-referential and mutually-recursive input graphs.
    pub fn render_input_types(&self, type_names: &[String]) -> Result<RenderedInputTypes> {
        log::debug!(
            "expanding the closure of {} pending input type(s)",
            type_names.len(),
        );

        let mut ctx = RenderContext::new();
        for type_name in type_names {
            ctx.enqueue_input_type(type_name);
        }

        let mut seen: IndexSet<String> = IndexSet::new();
        let mut declarations: Vec<String> = vec![];
        while let Some(type_name) = ctx.dequeue_input_type() {
            if !seen.insert(type_name.clone()) {
                continue;
            }

            let input_type = match self.schema.lookup_type(type_name.as_str()) {
                Some(GraphQLType::InputObject(input_type)) => input_type,
                Some(other_type) => return Err(TypeGenError::WrongKind {
                    type_kind: other_type.type_kind(),
                    type_name,
                }),
                None => return Err(TypeGenError::UnknownInputType {
                    type_name,
                }),
            };

            let mut lines: Vec<String> = vec![];
            for input_field in input_type.fields().values() {
                let expr = self.resolve_annotation(
                    &mut ctx,
                    input_field.type_annotation(),
                    None,
                    &FieldPath::root(),
                )?;
                let optional = if input_field.type_annotation().nullable()
                    || input_field.default_value().is_some()
                {
                    "?"
                } else {
                    ""
                };
                lines.push(format!("{}{optional}: {expr};", input_field.name()));
            }
            declarations.push(format!(
                "export type {type_name} = {};",
                text::braced_block(lines),
            ));
        }

        Ok(RenderedInputTypes {
            included_types: seen.into_iter().collect(),
            text: declarations.join("\n\n"),
        })
    }
}
