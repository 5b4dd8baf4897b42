use match_feed::NormalizedMatch;

pub const SOCCER_ICON: &str = ":soccer:";

/// `:soccer: 21:00: :flag-fr: France 0 - 0 Germany :flag-de:`
pub fn render_line(m: &NormalizedMatch) -> String {
    format!("{} {}: {} {} {}", SOCCER_ICON, m.start_time, m.home, m.result, m.away)
}

/// Jeden řádek na zápas, v pořadí vstupu. Prázdný set = prázdný text.
pub fn render_matches(matches: &[NormalizedMatch]) -> String {
    matches.iter().map(render_line).collect::<Vec<_>>().join("\n")
}
