use chrono::Timelike;

use crate::countries::flag_icon;
use crate::error::UnknownCountry;
use crate::model::{Participant, RawMatch};

/// Placeholder výsledku u zápasu který ještě nezačal.
pub const NO_RESULT: &str = "-";

/// Zápas připravený pro zprávu. Porovnává se hodnotou, pole po poli.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMatch {
    /// ":flag-fr: France"
    pub home:       String,
    /// "Germany :flag-de:"
    pub away:       String,
    /// "21:00" u future, jinak status ("in progress", "completed")
    pub start_time: String,
    /// "2 - 1" nebo "-"
    pub result:     String,
}

/// Seřazené zápasy jednoho poll cyklu.
pub type MatchSet = Vec<NormalizedMatch>;

#[derive(Debug, Clone, Copy, Default)]
pub struct MatchNormalizer {
    tz_offset_hours: i32,
}

impl MatchNormalizer {
    pub fn new(tz_offset_hours: i32) -> Self {
        Self { tz_offset_hours }
    }

    /// Seřadí podle výkopu, shody podle fifa_id, a převede všechno.
    /// První nenamapovaná země shodí celý set.
    pub fn normalize_all(&self, mut raw: Vec<RawMatch>) -> Result<MatchSet, UnknownCountry> {
        sort_matches(&mut raw);
        raw.iter().map(|m| self.normalize(m)).collect()
    }

    pub fn normalize(&self, raw: &RawMatch) -> Result<NormalizedMatch, UnknownCountry> {
        Ok(NormalizedMatch {
            home:       home_label(&raw.home_team)?,
            away:       away_label(&raw.away_team)?,
            start_time: self.start_time(raw),
            result:     result_label(raw),
        })
    }

    fn start_time(&self, raw: &RawMatch) -> String {
        if !raw.is_future() {
            return raw.status.clone();
        }
        // čas tak jak je v timestampu, jen posunutý o TIMEZONE; offset nejdřív mod 24, jinak overflow
        let hour = (raw.datetime.hour() as i32 + self.tz_offset_hours.rem_euclid(24)).rem_euclid(24);
        format!("{:02}:{:02}", hour, raw.datetime.minute())
    }
}

/// Výkop vzestupně (okamžik, ne text), pak fifa_id vzestupně.
pub fn sort_matches(raw: &mut [RawMatch]) {
    raw.sort_by(|a, b| {
        a.datetime
            .cmp(&b.datetime)
            .then_with(|| a.fifa_id.cmp(&b.fifa_id))
    });
}

fn home_label(team: &Participant) -> Result<String, UnknownCountry> {
    Ok(format!("{} {}", flag_icon(&team.country)?, team.country))
}

fn away_label(team: &Participant) -> Result<String, UnknownCountry> {
    Ok(format!("{} {}", team.country, flag_icon(&team.country)?))
}

fn result_label(raw: &RawMatch) -> String {
    if raw.is_future() {
        return NO_RESULT.to_string();
    }
    format!(
        "{} - {}",
        raw.home_team.goals.unwrap_or(0),
        raw.away_team.goals.unwrap_or(0)
    )
}
