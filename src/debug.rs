use crate::Scenario;
use serde_json::json;

impl Scenario {
    /// Dumps the parsed model as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "lanes": self.lanes,
            "cars": self.cars,
            "positions": self
                .placements()
                .map(|(car, lane)| json!({ "car": car, "lane": lane }))
                .collect::<Vec<_>>(),
        })
    }
}
