//! Converts Refinery traffic scenario facts into Scenic scenario code.
//!
//! The input is a line-oriented fact notation:
//!
//! ```text
//! type(r1_s0_n1, driving).
//! Car(c0).
//! position(c0, r1_s0_n1).
//! ```
//!
//! which is translated into statements placing cars on lanes of a
//! CARLA road network.

pub use error::Error;
pub use fact::Fact;
pub use generator::{
    generate, ScenicAttributes, DEFAULT_MAP, DEFAULT_MODEL, DEFAULT_NEGATIVE_MARKER,
};
pub use lane::{Direction, LaneCategory, LaneId};
pub use scenario::Scenario;
use log::info;
use std::path::{Path, PathBuf};

#[cfg(feature = "debug")]
mod debug;
mod error;
mod fact;
mod generator;
mod lane;
mod scenario;
mod util;

/// The file extension of generated Scenic programs.
pub const OUTPUT_EXTENSION: &str = "scenic";

/// Converts fact text to a Scenic program using the default attributes.
pub fn convert(text: &str) -> String {
    convert_with(text, &ScenicAttributes::default())
}

/// Converts fact text to a Scenic program.
pub fn convert_with(text: &str, attribs: &ScenicAttributes) -> String {
    let scenario = Scenario::parse(text, &attribs.negative_marker);
    #[cfg(feature = "debug")]
    log::debug!("Parsed scenario: {}", scenario.to_json());
    generate(&scenario, attribs)
}

/// Gets the path a Scenic program is written to for the given input file.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Converts a fact file, writing the Scenic program alongside it.
/// Returns the path of the written file.
pub fn convert_file(input: &Path, attribs: &ScenicAttributes) -> Result<PathBuf, Error> {
    if !input.is_file() {
        return Err(Error::FileNotFound(input.to_path_buf()));
    }
    let text = std::fs::read_to_string(input)?;
    let output = output_path(input);
    std::fs::write(&output, convert_with(&text, attribs))?;
    info!("Converted {} to {}", input.display(), output.display());
    Ok(output)
}
