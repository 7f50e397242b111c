use crate::lane::LaneId;
use crate::Scenario;
use itertools::Itertools;
use log::{debug, trace};
use std::collections::HashMap;

/// The map asset referenced by generated scenarios by default.
pub const DEFAULT_MAP: &str = "../../assets/maps/CARLA/Town03.xodr";

/// The simulator model used by generated scenarios by default.
pub const DEFAULT_MODEL: &str = "scenic.simulators.carla.model";

/// The lane identifier substring marking a negative (backward) index by default.
/// Identifiers such as `r1_s0_n1` are forward lanes, so the marker is not `_n`.
pub const DEFAULT_NEGATIVE_MARKER: &str = "neg";

/// The attributes of a conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenicAttributes {
    /// The path of the map asset, as written into the `param map` line.
    pub map: String,
    /// The simulator model module.
    pub model: String,
    /// The substring of a lane identifier which is rewritten to a minus sign.
    pub negative_marker: String,
}

impl Default for ScenicAttributes {
    fn default() -> Self {
        Self {
            map: DEFAULT_MAP.to_string(),
            model: DEFAULT_MODEL.to_string(),
            negative_marker: DEFAULT_NEGATIVE_MARKER.to_string(),
        }
    }
}

/// Builds the lines of a Scenic program.
struct ScenicWriter<'a> {
    scenario: &'a Scenario,
    lines: Vec<String>,
    /// The lane variable bound for each placed car.
    lane_vars: HashMap<&'a str, String>,
}

impl<'a> ScenicWriter<'a> {
    fn new(scenario: &'a Scenario) -> Self {
        Self {
            scenario,
            lines: vec![],
            lane_vars: HashMap::new(),
        }
    }

    fn write_header(&mut self, attribs: &ScenicAttributes) {
        self.lines
            .push(format!("param map = localPath('{}')", attribs.map));
        self.lines.push(format!("model {}", attribs.model));
    }

    /// Binds one `lane{n}` variable per placement, in placement order.
    /// Every placement consumes a variable name, even one whose lane has
    /// no accessor, so numbering never has gaps relative to placements.
    fn write_lanes(&mut self) {
        for (idx, (car, lane)) in self.scenario.placements().enumerate() {
            let var = format!("lane{}", idx);
            match self.lane_accessor(lane) {
                Some(expr) => {
                    trace!("{} -> {}", lane, expr);
                    self.lines.push(format!("{} = {}", var, expr));
                }
                None => debug!("No accessor for lane {:?}", lane),
            }
            self.lane_vars.insert(car, var);
        }
        self.lines.push(String::new());
    }

    fn lane_accessor(&self, lane: &str) -> Option<String> {
        let category = self.scenario.lane_category(lane)?;
        LaneId::decompose(lane)?.accessor(category)
    }

    /// Places each positioned car on its lane variable. The first car in
    /// sorted order is the ego vehicle; the rest are named by their index.
    fn write_cars(&mut self) {
        for (idx, car) in self.scenario.cars().enumerate() {
            let placed = matches!(self.scenario.position(car), Some(lane) if !lane.is_empty());
            let Some(var) = self.lane_vars.get(car).filter(|_| placed) else {
                debug!("Car {:?} has no position", car);
                continue;
            };
            let name = match idx {
                0 => "ego".to_string(),
                idx => format!("car{}", idx),
            };
            self.lines.push(format!("{} = new Car on {}", name, var));
        }
    }

    fn finish(self) -> String {
        self.lines.iter().join("\n")
    }
}

/// Generates the Scenic program for a scenario.
///
/// The output starts with the map and model declarations, then binds a lane
/// variable per car placement, then places the cars. Lines are separated by
/// `\n` with no trailing newline.
pub fn generate(scenario: &Scenario, attribs: &ScenicAttributes) -> String {
    let mut writer = ScenicWriter::new(scenario);
    writer.write_header(attribs);
    writer.write_lanes();
    writer.write_cars();
    writer.finish()
}
