#[macro_use] extern crate cfg_if;
extern crate failure;
#[macro_use] extern crate log;

extern crate chrono;
extern crate csv;
extern crate serde;
extern crate serde_json;

#[cfg(feature = "rayon")]
extern crate rayon;

mod parallel;

pub mod analysis;
pub mod bearing;
pub mod bonus;
pub mod chain_sum;
pub mod config;
pub mod error;
pub mod export;
pub mod external;
pub mod haversine;
pub mod max_pair;
pub mod point;
pub mod record;
pub mod score;
pub mod track;
pub mod turnpoints;

pub use crate::analysis::{Analysis, FlightSummary};
pub use crate::config::{ScoringConfig, TurnpointConfig};
pub use crate::error::{Error, Result};
pub use crate::point::{GeoPoint, Point};
pub use crate::record::{decode_line, Record};
pub use crate::score::{score, ScoreResult, Strategy};
pub use crate::track::{read_track, FlightMetadata, Track, TrackBuilder};
