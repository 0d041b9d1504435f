use serde::Deserialize;

/// Fields posted by the comparison form. Both are required.
#[derive(Debug, Deserialize)]
pub struct CompareForm {
    pub text1: String,
    pub text2: String,
}

impl CompareForm {
    /// True when neither field is blank after trimming.
    pub fn is_complete(&self) -> bool {
        !self.text1.trim().is_empty() && !self.text2.trim().is_empty()
    }
}
