use serde::Serialize;

pub const BOT_USERNAME: &str = "Soccer Bot";
pub const BOT_ICON_URL: &str =
    "https://upload.wikimedia.org/wikipedia/en/thumb/6/67/2018_FIFA_World_Cup.svg/1200px-2018_FIFA_World_Cup.svg.png";

/// Body pro Slack incoming webhook.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SlackPayload {
    pub username: &'static str,
    pub icon_url: &'static str,
    pub text:     String,
    pub channel:  String,
}

impl SlackPayload {
    pub fn new(text: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            username: BOT_USERNAME,
            icon_url: BOT_ICON_URL,
            text:     text.into(),
            channel:  channel.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_has_fixed_identity() {
        let v = serde_json::to_value(SlackPayload::new("line 1\nline 2", "#worldcup")).unwrap();
        assert_eq!(v["username"], "Soccer Bot");
        assert_eq!(v["icon_url"], BOT_ICON_URL);
        assert_eq!(v["text"], "line 1\nline 2");
        assert_eq!(v["channel"], "#worldcup");
        assert_eq!(v.as_object().unwrap().len(), 4);
    }
}
