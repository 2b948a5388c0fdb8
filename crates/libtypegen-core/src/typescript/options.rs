/// Tolerance configuration for a
/// [`TypeScriptBuilder`](crate::typescript::TypeScriptBuilder).
///
/// Every flag defaults to the strict behavior. Enabling a tolerance never
/// drops information silently: each degraded position renders an inline
/// marker comment identifying what was elided.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BuilderOptions {
    /// Render unknown named types as `unknown` markers (and selections
    /// against them as best-effort empty objects) instead of failing. Also
    /// downgrades inconsistent union field shapes to `any` markers.
    pub allow_unknown_types: bool,

    /// Fail on provided arguments that no declared parameter matches,
    /// instead of ignoring them.
    pub strict_arguments: bool,

    /// Render composite types selected without a sub-selection (and leaf
    /// types selected with one) as `unknown` markers instead of failing.
    pub tolerate_invalid_shapes: bool,

    /// Skip the missing-required-arguments check.
    pub tolerate_missing_arguments: bool,

    /// Render selections of undeclared fields as `unknown` markers instead
    /// of failing.
    pub tolerate_missing_fields: bool,
}
