use crate::logic::board::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth budget per side, indexed light then dark.
    pub depths: [u8; 2],

    // Evaluation Parameters
    pub man_value: i32,
    pub queen_value: i32,

    // Repetition Draw
    pub repetition_min_len: usize,
    pub repetition_max_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depths: [1, 2],
            man_value: 1,
            queen_value: 5,
            repetition_min_len: 10,
            repetition_max_count: 10,
        }
    }
}

impl EngineConfig {
    /// Missing keys keep their defaults.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    pub const fn depth_for(&self, color: Color) -> u8 {
        let [light, dark] = self.depths;
        match color {
            Color::Light => light,
            Color::Dark => dark,
        }
    }
}
