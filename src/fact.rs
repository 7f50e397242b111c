use crate::util::{fact_args, normalize_lane};

/// A single line of the fact notation.
///
/// Lane identifiers are stored normalized, with the negative marker already
/// rewritten to a minus sign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fact<'a> {
    /// `type(<lane>, <category>).`
    LaneType { lane: String, category: &'a str },
    /// `Car(<car>).`
    CarDecl(&'a str),
    /// `position(<car>, <lane>).`
    Position { car: &'a str, lane: String },
    /// Blank lines, comments, and anything that fails to parse.
    Unrecognized,
}

impl<'a> Fact<'a> {
    /// Parses one line of input. Never fails; lines that are not facts,
    /// or facts that are malformed, parse as [Fact::Unrecognized].
    pub fn parse(line: &'a str, marker: &str) -> Self {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("type(") {
            Self::parse_lane_type(rest, marker)
        } else if let Some(rest) = line.strip_prefix("Car(") {
            Fact::CarDecl(fact_args(rest))
        } else if let Some(rest) = line.strip_prefix("position(") {
            Self::parse_position(rest, marker)
        } else {
            Fact::Unrecognized
        }
    }

    fn parse_lane_type(rest: &'a str, marker: &str) -> Self {
        let mut args = fact_args(rest).split(',');
        match (args.next(), args.next()) {
            (Some(lane), Some(category)) => Fact::LaneType {
                lane: normalize_lane(lane, marker),
                category: category.trim(),
            },
            _ => Fact::Unrecognized,
        }
    }

    /// Matches `<car>,<lane>).` where the car runs to the first comma and the
    /// lane runs to the first closing paren. Both must be non-empty.
    /// Anything after the final `.` is ignored.
    fn parse_position(rest: &'a str, marker: &str) -> Self {
        let Some((car, tail)) = rest.split_once(',') else {
            return Fact::Unrecognized;
        };
        let Some((lane, tail)) = tail.split_once(')') else {
            return Fact::Unrecognized;
        };
        if car.is_empty() || lane.is_empty() || !tail.starts_with('.') {
            return Fact::Unrecognized;
        }
        Fact::Position {
            car,
            lane: normalize_lane(lane, marker),
        }
    }
}
