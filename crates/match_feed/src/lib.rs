//! Matchday Bridge — Match Feed
//!
//! Dnešní zápasy z worldcup.sfg.io:
//!   - `MatchFeed`: HTTP GET + deserializace do `RawMatch`
//!   - `MatchNormalizer`: seřazení + převod na `NormalizedMatch` (vlajky, čas, skóre)
//!   - `countries`: název země → kód pro `:flag-xx:` emoji

pub mod client;
pub mod countries;
pub mod error;
pub mod model;
pub mod normalize;

pub use client::{MatchFeed, DEFAULT_MATCH_API_URL};
pub use error::{FeedError, UnknownCountry};
pub use model::{Participant, RawMatch, FUTURE_STATUS};
pub use normalize::{MatchNormalizer, MatchSet, NormalizedMatch};
