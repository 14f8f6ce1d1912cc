use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw scoreboard payload: a list of named, positional row-sets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardPayload {
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub parameters: Value,
    #[serde(default)]
    pub result_sets: Vec<ResultSet>,
}

/// One named table. Each row is a sequence of untyped cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub name: String,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl ScoreboardPayload {
    pub fn result_set(&self, name: &str) -> Option<&ResultSet> {
        self.result_sets.iter().find(|rs| rs.name == name)
    }
}
