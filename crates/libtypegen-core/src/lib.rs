pub mod ast;
mod operation_kind;
mod path;
pub mod schema;
pub mod types;
pub mod typescript;
mod value;

pub use operation_kind::OperationKind;
pub use path::FieldPath;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use typescript::BuilderOptions;
pub use typescript::RenderedInputTypes;
pub use typescript::RenderedOperation;
pub use typescript::TypeGenError;
pub use typescript::TypeScriptBuilder;
pub use value::Value;
