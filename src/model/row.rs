use serde::Deserialize;

/// One multiple-choice example. Columns are matched by header name, so the
/// input may order them freely and carry extra columns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Row {
    #[serde(rename = "startphrase")]
    pub start_phrase: String,
    pub ending0: String,
    pub ending1: String,
    pub ending2: String,
    pub ending3: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl Row {
    pub const N_ENDINGS: usize = 4;

    pub fn endings(&self) -> [&str; Self::N_ENDINGS] {
        [
            self.ending0.as_str(),
            self.ending1.as_str(),
            self.ending2.as_str(),
            self.ending3.as_str(),
        ]
    }

    /// Ground-truth index when the label column holds one of 0..=3.
    pub fn label_index(&self) -> Option<u8> {
        let value = self.label.as_deref()?.trim().parse::<u8>().ok()?;
        (usize::from(value) < Self::N_ENDINGS).then_some(value)
    }
}
