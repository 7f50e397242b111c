use crate::fact::Fact;
use crate::lane::LaneCategory;
use crate::util::split_lines;
use indexmap::IndexMap;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// The scenario described by a fact file.
#[derive(Clone, Debug, Default)]
pub struct Scenario {
    /// The category of each declared lane, keyed by normalized lane identifier.
    pub(crate) lanes: BTreeMap<String, LaneCategory>,
    /// The declared cars, in sorted order.
    pub(crate) cars: BTreeSet<String>,
    /// The lane each car is placed on, in the order cars were first placed.
    positions: IndexMap<String, String>,
}

impl Scenario {
    /// Creates an empty scenario.
    pub fn new() -> Self {
        Default::default()
    }

    /// Parses a fact file. Lines that are not recognized facts are skipped.
    ///
    /// # Parameters
    /// * `text` - The whole input text.
    /// * `marker` - The substring in lane identifiers which marks a negative index.
    pub fn parse(text: &str, marker: &str) -> Self {
        let mut scenario = Self::new();
        for (line_no, line) in split_lines(text).enumerate() {
            match Fact::parse(line, marker) {
                Fact::Unrecognized => {
                    if !line.trim().is_empty() {
                        debug!("Skipping line {}: {:?}", line_no + 1, line);
                    }
                }
                fact => scenario.apply(fact),
            }
        }
        scenario
    }

    /// Records a single fact.
    pub fn apply(&mut self, fact: Fact) {
        match fact {
            Fact::LaneType { lane, category } => {
                self.set_lane_category(lane, LaneCategory::from_name(category))
            }
            Fact::CarDecl(car) => self.add_car(car),
            Fact::Position { car, lane } => self.set_position(car, lane),
            Fact::Unrecognized => {}
        }
    }

    /// Declares the category of a lane, replacing any previous declaration.
    pub fn set_lane_category(&mut self, lane: String, category: LaneCategory) {
        self.lanes.insert(lane, category);
    }

    /// Declares a car.
    pub fn add_car(&mut self, car: &str) {
        self.cars.insert(car.to_string());
    }

    /// Places a car on a lane. If the car was already placed, it is moved
    /// but keeps its original position in placement order.
    pub fn set_position(&mut self, car: &str, lane: String) {
        self.positions.insert(car.to_string(), lane);
    }

    /// Gets the declared category of a lane.
    pub fn lane_category(&self, lane: &str) -> Option<&LaneCategory> {
        self.lanes.get(lane)
    }

    /// Iterates over the declared cars in sorted order.
    pub fn cars(&self) -> impl Iterator<Item = &str> {
        self.cars.iter().map(String::as_str)
    }

    /// Gets the lane a car was placed on.
    pub fn position(&self, car: &str) -> Option<&str> {
        self.positions.get(car).map(String::as_str)
    }

    /// Iterates over `(car, lane)` placements in the order cars were first placed.
    pub fn placements(&self) -> impl Iterator<Item = (&str, &str)> {
        self.positions
            .iter()
            .map(|(car, lane)| (car.as_str(), lane.as_str()))
    }
}

#[cfg(test)]
mod test {
    use super::Scenario;
    use crate::lane::LaneCategory;
    use itertools::Itertools;

    #[test]
    fn cars_are_sorted_and_unique() {
        let scenario = Scenario::parse("Car(c2).\nCar(c0).\nCar(c10).\nCar(c0).\n", "neg");
        assert_eq!(scenario.cars().collect_vec(), vec!["c0", "c10", "c2"]);
    }

    #[test]
    fn later_lane_type_wins() {
        let scenario = Scenario::parse(
            "type(r1_s0_n1, driving).\ntype(r1_s0_n1, shoulder).\n",
            "neg",
        );
        assert_eq!(
            scenario.lane_category("r1_s0_n1"),
            Some(&LaneCategory::Shoulder)
        );
    }

    #[test]
    fn later_position_wins_but_keeps_order() {
        let scenario = Scenario::parse(
            "position(a, r1_s0_n1).\nposition(b, r2_s0_n1).\nposition(a, r3_s0_n1).\n",
            "neg",
        );
        assert_eq!(scenario.position("a"), Some("r3_s0_n1"));
        assert_eq!(
            scenario.placements().collect_vec(),
            vec![("a", "r3_s0_n1"), ("b", "r2_s0_n1")]
        );
    }

    #[test]
    fn positions_are_kept_for_undeclared_cars() {
        let scenario = Scenario::parse("position(ghost, r1_s0_n1).", "neg");
        assert_eq!(scenario.cars().count(), 0);
        assert_eq!(scenario.position("ghost"), Some("r1_s0_n1"));
    }

    #[test]
    fn lane_keys_are_normalized() {
        let scenario = Scenario::parse("type(r2_s0_nneg1, sidewalk).", "neg");
        assert_eq!(
            scenario.lane_category("r2_s0_n-1"),
            Some(&LaneCategory::Sidewalk)
        );
        assert_eq!(scenario.lane_category("r2_s0_nneg1"), None);
    }

    #[test]
    fn junk_is_skipped() {
        let scenario = Scenario::parse("% header\n\nnot a fact\nCar(c0).\n", "neg");
        assert_eq!(scenario.cars().collect_vec(), vec!["c0"]);
        assert_eq!(scenario.placements().count(), 0);
    }

    #[test]
    fn carriage_return_line_endings() {
        let text = "type(r1_s0_n1, driving).\rCar(c0).\rposition(c0, r1_s0_n1).\r";
        let scenario = Scenario::parse(text, "neg");
        assert_eq!(scenario.cars().collect_vec(), vec!["c0"]);
        assert_eq!(scenario.position("c0"), Some("r1_s0_n1"));
        assert_eq!(
            scenario.lane_category("r1_s0_n1"),
            Some(&LaneCategory::Driving)
        );
    }

    #[test]
    fn unicode_line_breaks() {
        let text = "Car(c0).\u{2028}Car(c1).\x0cCar(c2).\x0bposition(c2, r1_s0_n1).";
        let scenario = Scenario::parse(text, "neg");
        assert_eq!(scenario.cars().collect_vec(), vec!["c0", "c1", "c2"]);
        assert_eq!(scenario.position("c2"), Some("r1_s0_n1"));
    }
}
