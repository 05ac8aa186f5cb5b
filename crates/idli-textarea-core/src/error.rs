/// Raised when a host writes or reads an attribute the component does not declare.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    #[error("<{tag}> has no attribute named `{name}`")]
    Unknown { tag: &'static str, name: String },
}

impl AttributeError {
    pub fn unknown(tag: &'static str, name: impl Into<String>) -> Self {
        Self::Unknown {
            tag,
            name: name.into(),
        }
    }
}
