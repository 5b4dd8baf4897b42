use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

/// Status zápasu který ještě nezačal. Ostatní hodnoty jdou do zprávy tak jak jsou.
pub const FUTURE_STATUS: &str = "future";

// ── sfg.io /matches/today ────────────────────────────────────────────────────

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RawMatch {
    pub home_team: Participant,
    pub away_team: Participant,
    /// RFC 3339, "2018-06-14T15:00:00Z" nebo s offsetem
    pub datetime:  DateTime<FixedOffset>,
    /// "future" | "in progress" | "completed" | ...
    pub status:    String,
    #[serde(default)]
    pub venue:     Option<String>,
    /// sfg.io posílá fifa_id jako string ("300331503")
    #[serde(deserialize_with = "de_fifa_id")]
    pub fifa_id:   u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Participant {
    pub country: String,
    /// null / chybí před výkopem
    #[serde(default)]
    pub goals:   Option<u32>,
}

impl RawMatch {
    pub fn is_future(&self) -> bool {
        self.status == FUTURE_STATUS
    }
}

fn de_fifa_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString {
        Num(u64),
        Str(String),
    }

    match NumOrString::deserialize(deserializer)? {
        NumOrString::Num(n) => Ok(n),
        NumOrString::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("fifa_id is not numeric: {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
      {
        "venue": "Moscow",
        "location": "Luzhniki Stadium",
        "status": "completed",
        "time": "full-time",
        "fifa_id": "300331503",
        "datetime": "2018-06-14T15:00:00Z",
        "winner": "Russia",
        "home_team": { "country": "Russia", "code": "RUS", "goals": 5 },
        "away_team": { "country": "Saudi Arabia", "code": "KSA", "goals": 0 }
      },
      {
        "venue": "Ekaterinburg",
        "status": "future",
        "fifa_id": 300353632,
        "datetime": "2018-06-15T12:00:00+00:00",
        "home_team": { "country": "Egypt", "code": "EGY", "goals": null },
        "away_team": { "country": "Uruguay", "code": "URU" }
      }
    ]"#;

    #[test]
    fn decodes_sfg_records() {
        let matches: Vec<RawMatch> = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(matches.len(), 2);

        let first = &matches[0];
        assert_eq!(first.fifa_id, 300331503);
        assert_eq!(first.home_team.country, "Russia");
        assert_eq!(first.home_team.goals, Some(5));
        assert_eq!(first.venue.as_deref(), Some("Moscow"));
        assert!(!first.is_future());

        let second = &matches[1];
        assert_eq!(second.fifa_id, 300353632);
        assert_eq!(second.home_team.goals, None);
        assert_eq!(second.away_team.goals, None);
        assert!(second.is_future());
    }

    #[test]
    fn rejects_non_numeric_fifa_id() {
        let raw = r#"[{
            "status": "future", "fifa_id": "abc", "datetime": "2018-06-15T12:00:00Z",
            "home_team": { "country": "Egypt" }, "away_team": { "country": "Uruguay" }
        }]"#;
        assert!(serde_json::from_str::<Vec<RawMatch>>(raw).is_err());
    }

    #[test]
    fn rejects_bad_timestamp() {
        let raw = r#"[{
            "status": "future", "fifa_id": "1", "datetime": "tomorrow",
            "home_team": { "country": "Egypt" }, "away_team": { "country": "Uruguay" }
        }]"#;
        assert!(serde_json::from_str::<Vec<RawMatch>>(raw).is_err());
    }
}
