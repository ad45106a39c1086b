use std::{error, fmt::Display, path::PathBuf};

use clap::Parser;

pub mod graph;
pub mod input;

pub use graph::{BuildingId, TunnelGraph};
pub use input::{read_plan, BuildingRecord, InspectionPlan};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingLine(usize),
    MalformedHeaderLine(String),
    InvalidCountText(String),
    CountOutOfRange(String),
    InvalidIdText(String),
    IdOutOfRange(String),
    WrongInspectIdCount(usize, usize),
    DuplicateInspectId(u16),
    MalformedBuildingLine(String),
    InvalidDegreeText(String),
    DegreeOutOfRange(String),
    NeighborCountMismatch(u16, usize, usize),
    DuplicateBuildingId(u16),
    DuplicateNeighbor(u16, u16),
    SelfLinkedBuilding(u16),
    UndeclaredInspectId(u16),
    UndeclaredNeighbor(u16, u16),
    TrailingContent(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingLine(line_n) => {
                write!(f, "Expect line {} in input, given none.", line_n)
            }
            Error::MalformedHeaderLine(s) => write!(
                f,
                "Invalid text({}) for header line, expect exactly two integers.",
                s
            ),
            Error::InvalidCountText(s) => {
                write!(f, "Invalid text({}) for a count, expect a positive integer.", s)
            }
            Error::CountOutOfRange(n) => {
                write!(f, "Count({}) out of valid range [1, 999].", n)
            }
            Error::InvalidIdText(s) => write!(
                f,
                "Invalid text({}) for a building id, expect a positive integer.",
                s
            ),
            Error::IdOutOfRange(id) => {
                write!(f, "Building id({}) out of valid range [1, 999].", id)
            }
            Error::WrongInspectIdCount(expect, given) => write!(
                f,
                "Expect {} building id(s) to inspect, given {}.",
                expect, given
            ),
            Error::DuplicateInspectId(id) => {
                write!(f, "Duplicate building id({}) in inspection list.", id)
            }
            Error::MalformedBuildingLine(s) => write!(
                f,
                "Invalid text({}) for a building line, expect at least an id and a degree.",
                s
            ),
            Error::InvalidDegreeText(s) => write!(
                f,
                "Invalid text({}) for a degree, expect a non-negative integer.",
                s
            ),
            Error::DegreeOutOfRange(deg) => {
                write!(f, "Degree({}) out of valid range [0, 998].", deg)
            }
            Error::NeighborCountMismatch(id, degree, given) => write!(
                f,
                "Building({}) claims degree {}, but {} neighbor(s) given.",
                id, degree, given
            ),
            Error::DuplicateBuildingId(id) => {
                write!(f, "Duplicate building id({}) in building lines.", id)
            }
            Error::DuplicateNeighbor(id, neighbor) => {
                write!(f, "Duplicate neighbor({}) of building({}).", neighbor, id)
            }
            Error::SelfLinkedBuilding(id) => {
                write!(f, "Building({}) lists itself as a neighbor.", id)
            }
            Error::UndeclaredInspectId(id) => write!(
                f,
                "Building id({}) in inspection list is never declared.",
                id
            ),
            Error::UndeclaredNeighbor(id, neighbor) => write!(
                f,
                "Neighbor({}) of building({}) is never declared.",
                neighbor, id
            ),
            Error::TrailingContent(s) => {
                write!(f, "Unexpected trailing content({}) after building lines.", s)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: Option<PathBuf>,
}
