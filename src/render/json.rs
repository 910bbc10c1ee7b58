//! JSON lines surface encoding
//!
//! One object per state, for piping the clock into other programs.

use serde::{Deserialize, Serialize};

use crate::display::{greeting, DisplayState};

use super::error::RenderResult;

/// Wire form of one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    pub mounted: bool,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub date_line: String,
    pub time_zone: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub greeting: Option<String>,
}

impl From<&DisplayState> for TickRecord {
    fn from(state: &DisplayState) -> Self {
        let snapshot = state.snapshot();
        Self {
            mounted: state.is_mounted(),
            hours: snapshot.hours().to_string(),
            minutes: snapshot.minutes().to_string(),
            seconds: snapshot.seconds().to_string(),
            date_line: snapshot.date_line().to_string(),
            time_zone: snapshot.time_zone().to_string(),
            greeting: greeting(state).map(|g| g.as_str().to_string()),
        }
    }
}

/// Encode a state as a single JSON line (without the trailing newline)
pub fn encode(state: &DisplayState) -> RenderResult<String> {
    Ok(serde_json::to_string(&TickRecord::from(state))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TimeSnapshot;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_placeholder_record() {
        let line = encode(&DisplayState::new()).unwrap();
        let record: TickRecord = serde_json::from_str(&line).unwrap();

        assert!(!record.mounted);
        assert_eq!(record.hours, "--");
        assert_eq!(record.date_line, "Loading…");
        assert_eq!(record.time_zone, "");
        assert_eq!(record.greeting, None);
        assert!(!line.contains("greeting"));
    }

    #[test]
    fn test_mounted_record() {
        let at = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 7, 20, 15, 0)
            .single()
            .unwrap();
        let mut state = DisplayState::new();
        state.apply(TimeSnapshot::from_instant(&at, Some("UTC".into())));

        let record: TickRecord = serde_json::from_str(&encode(&state).unwrap()).unwrap();
        assert!(record.mounted);
        assert_eq!(
            (record.hours.as_str(), record.minutes.as_str(), record.seconds.as_str()),
            ("20", "15", "00")
        );
        assert_eq!(record.greeting.as_deref(), Some("Good Evening"));
    }
}
