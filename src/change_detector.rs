use match_feed::{MatchSet, NormalizedMatch};

/// Drží poslední poslaný set. Změna = jiná délka nebo jiné pole u kteréhokoliv zápasu.
#[derive(Debug, Default)]
pub struct ChangeDetector {
    last_seen: Option<MatchSet>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` a nahradí uložený set, pokud se liší (nebo ještě žádný není).
    pub fn check(&mut self, new_set: &[NormalizedMatch]) -> bool {
        if self.last_seen.as_deref() == Some(new_set) {
            return false;
        }
        self.last_seen = Some(new_set.to_vec());
        true
    }

    pub fn last_seen(&self) -> Option<&[NormalizedMatch]> {
        self.last_seen.as_deref()
    }
}
