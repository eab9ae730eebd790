use serde::Deserialize;

/// Raw input unit: a kind tag and its ordered payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    pub kind: String,
    pub payload: Vec<f64>,
    /// Source line when read from CSV
    #[serde(skip)]
    pub line: Option<u64>,
}

impl Package {
    pub fn new(kind: &str, payload: &[f64]) -> Self {
        Self {
            kind: kind.to_string(),
            payload: payload.to_vec(),
            line: None,
        }
    }
}
