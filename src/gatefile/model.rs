use serde::{Deserialize, Serialize};

/// The header keyword every gate line carries in its second field.
pub const GATE_KIND: &str = "gate";

/// A parsed gate file: the source path and its gates in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateFile {
    pub path: String,
    pub gates: Vec<Gate>,
}

impl GateFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            gates: Vec::new(),
        }
    }

    pub fn section_count(&self) -> usize {
        self.gates.iter().map(|g| g.sections.len()).sum()
    }

    pub fn item_count(&self) -> usize {
        self.gates.iter().map(Gate::item_count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    pub id: i64,
    pub kind: String,
    pub tag: i64,
    pub sections: Vec<Section>,
}

impl Gate {
    pub fn new(id: i64, kind: impl Into<String>, tag: i64) -> Self {
        Self {
            id,
            kind: kind.into(),
            tag,
            sections: Vec::new(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Sum of item quantities, widened so any number of `i64` items fits.
    pub fn total_quantity(&self) -> i128 {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .map(|i| i128::from(i.quantity))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub quantity: i64,
}

impl Item {
    pub fn new(id: impl Into<String>, quantity: i64) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GateFile {
        let mut gate = Gate::new(1, GATE_KIND, 100);
        let mut landing = Section::new("landing");
        landing.items.push(Item::new("sword", 3));
        landing.items.push(Item::new("shield", 1));
        gate.sections.push(landing);
        gate.sections.push(Section::new("empty"));

        let mut file = GateFile::new("world.gate");
        file.gates.push(gate);
        file.gates.push(Gate::new(2, GATE_KIND, 200));
        file
    }

    #[test]
    fn test_counts() {
        let file = sample();
        assert_eq!(file.section_count(), 2);
        assert_eq!(file.item_count(), 2);
        assert_eq!(file.gates[0].total_quantity(), 4);
        assert_eq!(file.gates[1].total_quantity(), 0);
    }

    #[test]
    fn test_json_field_names_are_stable() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["path"], "world.gate");
        assert_eq!(json["gates"][0]["id"], 1);
        assert_eq!(json["gates"][0]["kind"], "gate");
        assert_eq!(json["gates"][0]["tag"], 100);
        assert_eq!(json["gates"][0]["sections"][0]["id"], "landing");
        assert_eq!(json["gates"][0]["sections"][0]["items"][1]["id"], "shield");
        assert_eq!(json["gates"][0]["sections"][0]["items"][1]["quantity"], 1);
        assert_eq!(json["gates"][1]["sections"], serde_json::json!([]));
    }
}
