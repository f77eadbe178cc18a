use crate::model::{Gate, GateFile};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateSummary {
    pub id: i64,
    pub tag: i64,
    pub sections: usize,
    pub items: usize,
    pub quantity: i128,
}

impl From<&Gate> for GateSummary {
    fn from(gate: &Gate) -> Self {
        Self {
            id: gate.id,
            tag: gate.tag,
            sections: gate.sections.len(),
            items: gate.item_count(),
            quantity: gate.total_quantity(),
        }
    }
}

/// Per-gate and whole-file counts for a parsed gate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub path: String,
    pub gates: Vec<GateSummary>,
    pub total_sections: usize,
    pub total_items: usize,
    pub total_quantity: i128,
}

pub fn summarize(file: &GateFile) -> FileSummary {
    let gates: Vec<GateSummary> = file.gates.iter().map(GateSummary::from).collect();
    FileSummary {
        path: file.path.clone(),
        total_sections: gates.iter().map(|g| g.sections).sum(),
        total_items: gates.iter().map(|g| g.items).sum(),
        total_quantity: gates.iter().map(|g| g.quantity).sum(),
        gates,
    }
}
