use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("selection state accessed outside an initialized dashboard session")]
    NotInitialized,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`; expected one of: {expected}")]
pub struct ParseSelectionError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl ParseSelectionError {
    pub fn new<'a>(
        kind: &'static str,
        value: impl Into<String>,
        expected: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            kind,
            value: value.into(),
            expected: expected.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}
