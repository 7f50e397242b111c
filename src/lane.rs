use crate::util::{last_char, MINUS};
#[cfg(feature = "serde")]
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// The surface type of a lane, as declared by a `type(..)` fact.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum LaneCategory {
    /// A lane vehicles drive on.
    Driving,
    /// The shoulder of a lane group.
    Shoulder,
    /// The sidewalk of a lane group.
    Sidewalk,
    /// A lane with no particular surface type.
    None,
    /// Any other category name, kept verbatim.
    Other(String),
}

impl LaneCategory {
    /// Classifies a category name. Names are matched exactly.
    pub fn from_name(name: &str) -> Self {
        match name {
            "driving" => Self::Driving,
            "shoulder" => Self::Shoulder,
            "sidewalk" => Self::Sidewalk,
            "none" => Self::None,
            other => Self::Other(other.to_string()),
        }
    }

    /// Gets the category name as it appears in the fact notation.
    pub fn name(&self) -> &str {
        match self {
            Self::Driving => "driving",
            Self::Shoulder => "shoulder",
            Self::Sidewalk => "sidewalk",
            Self::None => "none",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for LaneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The direction of a lane relative to its road's reference line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// The index of the road's lane group that holds lanes of this direction.
    pub fn lane_group(self) -> usize {
        match self {
            Direction::Forward => 0,
            Direction::Backward => 1,
        }
    }
}

/// A normalized lane identifier, decomposed into its three components.
///
/// Identifiers look like `<road>_<section>_<lane>`. The last character of the
/// section token is the section index and the last character of the lane token
/// is the lane index. A minus sign anywhere in the lane token marks a backward lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaneId<'a> {
    road: &'a str,
    section: char,
    lane: char,
    direction: Direction,
}

impl<'a> LaneId<'a> {
    /// Splits a normalized lane identifier. Components past the third are ignored.
    /// Returns `None` if there are fewer than three components, or if the
    /// section or lane token is empty.
    pub fn decompose(id: &'a str) -> Option<Self> {
        let parts: SmallVec<[&str; 3]> = id.split('_').take(3).collect();
        if parts.len() < 3 {
            return None;
        }
        let direction = if parts[2].contains(MINUS) {
            Direction::Backward
        } else {
            Direction::Forward
        };
        Some(Self {
            road: parts[0],
            section: last_char(parts[1])?,
            lane: last_char(parts[2])?,
            direction,
        })
    }

    /// The road (network element) name.
    pub fn road(&self) -> &'a str {
        self.road
    }

    /// The direction of the lane.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The section index, as written in the identifier.
    pub fn section_index(&self) -> char {
        self.section
    }

    /// The lane index used by the road network accessors.
    /// Backward lanes are numbered from one in the fact notation but from zero
    /// in the network, so their index is shifted down by one.
    pub fn lane_index(&self) -> String {
        match self.direction {
            Direction::Forward => self.lane.to_string(),
            Direction::Backward => match self.lane.to_digit(10) {
                Some(digit) => (i64::from(digit) - 1).to_string(),
                None => format!("{}-1", self.lane),
            },
        }
    }

    /// Builds the Scenic expression selecting this lane from `network`.
    /// Returns `None` for categories with no accessor.
    pub fn accessor(&self, category: &LaneCategory) -> Option<String> {
        match category {
            LaneCategory::Driving => Some(self.section_lane(self.direction)),
            LaneCategory::None => Some(self.section_lane(Direction::Forward)),
            LaneCategory::Shoulder => Some(self.group_member("shoulder")),
            LaneCategory::Sidewalk => Some(self.group_member("sidewalk")),
            LaneCategory::Other(_) => None,
        }
    }

    fn section_lane(&self, direction: Direction) -> String {
        let (lanes, index) = match direction {
            Direction::Forward => ("forwardLanes", self.lane.to_string()),
            Direction::Backward => ("backwardLanes", self.lane_index()),
        };
        format!(
            "network.elements['{}'].sections[{}].{}[{}]",
            self.road, self.section, lanes, index
        )
    }

    fn group_member(&self, member: &str) -> String {
        format!(
            "network.elements['{}'].laneGroups[{}].{}",
            self.road,
            self.direction.lane_group(),
            member
        )
    }
}
