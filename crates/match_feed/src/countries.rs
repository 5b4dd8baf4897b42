//! Název země (tak jak ho posílá sfg.io) → kód pro Slack vlajku.
//!
//! Lookup je přesný string match. Nový / nenamapovaný název je chyba,
//! ne default — radši žádná zpráva než rozbitá vlajka.

use crate::error::UnknownCountry;

/// ISO 3166-1 alpha-2 kód, u britských zemí název Slack emoji.
pub fn country_code(country: &str) -> Option<&'static str> {
    let code = match country {
        // ── Evropa ──
        "Austria" => "AT",
        "Belgium" => "BE",
        "Bosnia and Herzegovina" => "BA",
        "Bulgaria" => "BG",
        "Croatia" => "HR",
        "Czech Republic" | "Czechia" => "CZ",
        "Denmark" => "DK",
        "England" => "England",
        "France" => "FR",
        "Germany" => "DE",
        "Greece" => "GR",
        "Hungary" => "HU",
        "Iceland" => "IS",
        "Italy" => "IT",
        "Netherlands" => "NL",
        "Norway" => "NO",
        "Poland" => "PL",
        "Portugal" => "PT",
        "Republic of Ireland" | "Ireland" => "IE",
        "Romania" => "RO",
        "Russia" => "RU",
        "Scotland" => "Scotland",
        "Serbia" => "RS",
        "Slovakia" => "SK",
        "Slovenia" => "SI",
        "Spain" => "ES",
        "Sweden" => "SE",
        "Switzerland" => "CH",
        "Turkey" => "TR",
        "Ukraine" => "UA",
        "Wales" => "Wales",

        // ── Jižní Amerika ──
        "Argentina" => "AR",
        "Bolivia" => "BO",
        "Brazil" => "BR",
        "Chile" => "CL",
        "Colombia" => "CO",
        "Ecuador" => "EC",
        "Paraguay" => "PY",
        "Peru" => "PE",
        "Uruguay" => "UY",
        "Venezuela" => "VE",

        // ── CONCACAF ──
        "Canada" => "CA",
        "Costa Rica" => "CR",
        "Honduras" => "HN",
        "Jamaica" => "JM",
        "Mexico" => "MX",
        "Panama" => "PA",
        "Trinidad and Tobago" => "TT",
        "United States" | "USA" => "US",

        // ── Afrika ──
        "Algeria" => "DZ",
        "Angola" => "AO",
        "Cameroon" => "CM",
        "Côte d'Ivoire" | "Ivory Coast" => "CI",
        "Egypt" => "EG",
        "Ghana" => "GH",
        "Morocco" => "MA",
        "Nigeria" => "NG",
        "Senegal" => "SN",
        "South Africa" => "ZA",
        "Togo" => "TG",
        "Tunisia" => "TN",

        // ── Asie + Oceánie ──
        "Australia" => "AU",
        "China PR" | "China" => "CN",
        "Iran" | "IR Iran" => "IR",
        "Japan" => "JP",
        "Korea DPR" | "North Korea" => "KP",
        "Korea Republic" | "South Korea" => "KR",
        "New Zealand" => "NZ",
        "Qatar" => "QA",
        "Saudi Arabia" => "SA",

        _ => return None,
    };
    Some(code)
}

/// `:flag-<kód malými písmeny>:`
pub fn flag_icon(country: &str) -> Result<String, UnknownCountry> {
    let code = country_code(country).ok_or_else(|| UnknownCountry {
        country: country.to_string(),
    })?;
    Ok(format!(":flag-{}:", code.to_lowercase()))
}
