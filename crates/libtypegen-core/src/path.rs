/// Dot/bracket path to a position within an operation's selection
/// (e.g. `getFoo.items[].name`).
///
/// Every [`TypeGenError`](crate::typescript::TypeGenError) raised during
/// traversal carries the [`FieldPath`] accumulated up to the failing
/// position, so failures are locatable without a stack trace.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum PathSegment {
    Field(String),
    ListElement,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// A new path extended with a named field segment.
    pub fn field(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.to_string()));
        Self { segments }
    }

    /// A new path extended with a list-element segment (rendered as `[]`).
    pub fn list_element(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::ListElement);
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => {
                    if !first {
                        write!(f, ".")?;
                    }
                    write!(f, "{name}")?;
                }
                PathSegment::ListElement => write!(f, "[]")?,
            }
            first = false;
        }
        Ok(())
    }
}
