//! Overpass API response decoding.
//!
//! The boundary where untyped response elements become validated
//! `TaggedEntity` values. Fetching and query construction live elsewhere.

mod parse;
mod response;

pub use parse::{parse_reader, parse_response};
pub use response::{OverpassResponse, RawElement, RawMember, RawNode, RawPoint, RawRelation, RawWay};
