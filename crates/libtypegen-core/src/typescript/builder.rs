use crate::schema::Schema;
use crate::typescript::BuilderOptions;
use indexmap::IndexMap;

/// Projects operations against a [`Schema`] into TypeScript declarations
/// describing each operation's result and variables shapes.
///
/// The builder borrows an immutable schema and owns only its scalar map and
/// options; all per-render state lives in a context value threaded through
/// the render calls, so a shared builder can render concurrently.
///
/// ```
/// use libtypegen_core::ast;
/// use libtypegen_core::Schema;
/// use libtypegen_core::TypeScriptBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = Schema::builder()
///     .load_str("type Query { greeting: String! }")?
///     .build();
/// let builder = TypeScriptBuilder::new(&schema);
///
/// let doc = ast::operation::parse("query Hello { greeting }")?;
/// for def in &doc.definitions {
///     if let ast::operation::Definition::Operation(op) = def {
///         let rendered = builder.render_operation(op)?;
///         assert!(rendered.text.contains("export type HelloQueryResult"));
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct TypeScriptBuilder<'schema> {
    pub(crate) options: BuilderOptions,
    pub(crate) scalars: IndexMap<String, String>,
    pub(crate) schema: &'schema Schema,
}
impl<'schema> TypeScriptBuilder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self::with_options(schema, BuilderOptions::default())
    }

    pub fn with_options(schema: &'schema Schema, options: BuilderOptions) -> Self {
        Self {
            options,
            scalars: default_scalar_types(),
            schema,
        }
    }

    /// Map a scalar type name to the TypeScript expression it renders as.
    /// Overwrites any previous mapping for the name, including the
    /// built-in ones; takes effect from the next render.
    pub fn register_scalar(
        &mut self,
        name: impl Into<String>,
        ts_expr: impl Into<String>,
    ) {
        self.scalars.insert(name.into(), ts_expr.into());
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }
}

fn default_scalar_types() -> IndexMap<String, String> {
    IndexMap::from([
        ("Boolean".to_string(), "boolean".to_string()),
        ("Float".to_string(), "number".to_string()),
        ("ID".to_string(), "string".to_string()),
        ("Int".to_string(), "number".to_string()),
        ("String".to_string(), "string".to_string()),
    ])
}

/// The artifacts rendered for one operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedOperation {
    /// Input object type names referenced by the operation but not yet
    /// declared. Callers accumulate these across all rendered operations
    /// and flush them through
    /// [`TypeScriptBuilder::render_input_types`] once, so types shared by
    /// several operations are declared a single time.
    pub pending_input_types: Vec<String>,

    /// The operation source constant plus the result and variables type
    /// declarations.
    pub text: String,
}

/// The declarations rendered for a set of input object types and
/// everything transitively reachable from them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedInputTypes {
    /// Every type name a declaration was emitted for, in first-seen order.
    pub included_types: Vec<String>,

    pub text: String,
}
