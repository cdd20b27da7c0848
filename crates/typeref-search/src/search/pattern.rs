use serde::{Deserialize, Serialize};

/// Read access to the parts of a type-reference search pattern the resolver
/// needs. Implemented by whatever pattern type the host search engine uses.
pub trait PatternAccess {
    /// Simple type name. When absent or empty no qualified type name equals
    /// the target, so the search reports nothing.
    fn simple_name(&self) -> Option<&str>;

    /// Package or enclosing-type qualification, without a trailing `.`.
    fn qualification(&self) -> Option<&str>;

    fn is_case_sensitive(&self) -> bool;

    fn is_camel_case(&self) -> bool;
}

/// A search for references to one type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeReferencePattern {
    pub simple_name: Option<String>,
    pub qualification: Option<String>,
    pub case_sensitive: bool,
    pub camel_case: bool,
}

impl TypeReferencePattern {
    pub fn new(simple_name: impl Into<String>) -> Self {
        Self {
            simple_name: Some(simple_name.into()),
            qualification: None,
            case_sensitive: true,
            camel_case: false,
        }
    }

    pub fn qualified(
        mut self,
        qualification: impl Into<String>,
    ) -> Self {
        self.qualification = Some(qualification.into());
        self
    }

    pub fn case_sensitive(
        mut self,
        case_sensitive: bool,
    ) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn camel_case(
        mut self,
        camel_case: bool,
    ) -> Self {
        self.camel_case = camel_case;
        self
    }
}

impl PatternAccess for TypeReferencePattern {
    fn simple_name(&self) -> Option<&str> {
        self.simple_name.as_deref()
    }

    fn qualification(&self) -> Option<&str> {
        self.qualification.as_deref()
    }

    fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn is_camel_case(&self) -> bool {
        self.camel_case
    }
}

/// The qualified name a candidate type must equal.
///
/// `qualification + "." + simple_name` when a qualification is present,
/// otherwise the simple name alone.
pub fn qualified_target(pattern: &(impl PatternAccess + ?Sized)) -> String {
    let simple_name = pattern.simple_name().unwrap_or_default();
    match pattern.qualification() {
        Some(qualifier) if !qualifier.is_empty() => format!("{qualifier}.{simple_name}"),
        _ => simple_name.to_string(),
    }
}
