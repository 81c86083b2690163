// ============================================================
// Layer 2 — Traffic Use Case
// ============================================================
// Estimates traffic for a location at a given local time.
//
// Rules, applied in order (later ones may override the level):
//   1. level = Light
//   2. Mon–Fri and hour in 7..=9 or 16..=19 → Heavy + rush-hour advisory
//   3. Friday and hour in 15..=20           → Very Heavy + Friday advisory
//   4. each hotspot whose name is inside the location → warning line
//
// Reply layout:
//   🚦 Traffic Level: <level>
//   <advisories and warnings>
//
//   📋 Transportation Tips:
//     • <tip> ...

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::domain::traffic::{hotspot_name, TrafficPatterns};

pub const RUSH_HOUR_ADVISORY: &str = "🚨 Rush hour traffic - expect delays";
pub const FRIDAY_ADVISORY: &str = "🚨 Friday afternoon - bridge traffic to suburbs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficLevel {
    Light,
    Heavy,
    VeryHeavy,
}

impl TrafficLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Light     => "Light",
            Self::Heavy     => "Heavy",
            Self::VeryHeavy => "Very Heavy",
        }
    }
}

pub struct TrafficUseCase<'a> {
    patterns: &'a TrafficPatterns,
}

impl<'a> TrafficUseCase<'a> {
    pub fn new(patterns: &'a TrafficPatterns) -> Self {
        Self { patterns }
    }

    pub fn estimate(&self, location: &str, at: NaiveDateTime) -> String {
        let (level, mut advice) = time_rules(at);
        advice.extend(self.hotspot_warnings(location));

        let mut lines = vec![format!("🚦 Traffic Level: {}", level.label())];
        lines.extend(advice);
        lines.push("\n📋 Transportation Tips:".to_string());
        lines.extend(self.patterns.tips.iter().map(|t| format!("  • {}", t)));

        lines.join("\n")
    }

    /// "⚠️ <hotspot>" for every hotspot named in the location
    fn hotspot_warnings(&self, location: &str) -> Vec<String> {
        let location = location.to_lowercase();

        self.patterns
            .hotspots
            .iter()
            .filter(|hotspot| {
                hotspot_name(hotspot)
                    .map(str::to_lowercase)
                    .is_some_and(|name| !name.is_empty() && location.contains(&name))
            })
            .map(|hotspot| format!("⚠️ {}", hotspot))
            .collect()
    }
}

/// Level and advisories from the day of week and hour alone
pub fn time_rules(at: NaiveDateTime) -> (TrafficLevel, Vec<String>) {
    let hour    = at.hour();
    let weekday = at.weekday();

    let mut level  = TrafficLevel::Light;
    let mut advice = Vec::new();

    let is_weekday = weekday.num_days_from_monday() < 5;
    if is_weekday && ((7..=9).contains(&hour) || (16..=19).contains(&hour)) {
        level = TrafficLevel::Heavy;
        advice.push(RUSH_HOUR_ADVISORY.to_string());
    }

    if weekday == Weekday::Fri && (15..=20).contains(&hour) {
        level = TrafficLevel::VeryHeavy;
        advice.push(FRIDAY_ADVISORY.to_string());
    }

    (level, advice)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::extractor::SectionExtractor;
    use crate::test_support::{week_day_at, SAMPLE_CONTEXT};

    const MONDAY: u32 = 0;
    const FRIDAY: u32 = 4;
    const SATURDAY: u32 = 5;
    const SUNDAY: u32 = 6;

    #[test]
    fn test_monday_morning_rush() {
        let (level, advice) = time_rules(week_day_at(MONDAY, 8));
        assert_eq!(level, TrafficLevel::Heavy);
        assert_eq!(advice, vec![RUSH_HOUR_ADVISORY.to_string()]);
    }

    #[test]
    fn test_friday_afternoon_overrides_level_keeps_both() {
        let (level, advice) = time_rules(week_day_at(FRIDAY, 16));
        assert_eq!(level, TrafficLevel::VeryHeavy);
        assert_eq!(
            advice,
            vec![RUSH_HOUR_ADVISORY.to_string(), FRIDAY_ADVISORY.to_string()]
        );
    }

    #[test]
    fn test_friday_three_pm_only_friday_rule() {
        let (level, advice) = time_rules(week_day_at(FRIDAY, 15));
        assert_eq!(level, TrafficLevel::VeryHeavy);
        assert_eq!(advice, vec![FRIDAY_ADVISORY.to_string()]);
    }

    #[test]
    fn test_weekend_is_light() {
        for day in [SATURDAY, SUNDAY] {
            let (level, advice) = time_rules(week_day_at(day, 8));
            assert_eq!(level, TrafficLevel::Light);
            assert!(advice.is_empty());
        }
    }

    #[test]
    fn test_rush_hour_edges() {
        assert_eq!(time_rules(week_day_at(MONDAY, 6)).0, TrafficLevel::Light);
        assert_eq!(time_rules(week_day_at(MONDAY, 7)).0, TrafficLevel::Heavy);
        assert_eq!(time_rules(week_day_at(MONDAY, 9)).0, TrafficLevel::Heavy);
        assert_eq!(time_rules(week_day_at(MONDAY, 10)).0, TrafficLevel::Light);
        assert_eq!(time_rules(week_day_at(MONDAY, 19)).0, TrafficLevel::Heavy);
        assert_eq!(time_rules(week_day_at(MONDAY, 20)).0, TrafficLevel::Light);
        assert_eq!(time_rules(week_day_at(FRIDAY, 20)).0, TrafficLevel::VeryHeavy);
        assert_eq!(time_rules(week_day_at(FRIDAY, 21)).0, TrafficLevel::Light);
    }

    #[test]
    fn test_full_reply_layout() {
        let traffic = SectionExtractor::new(SAMPLE_CONTEXT).traffic();
        let out     = TrafficUseCase::new(&traffic).estimate("", week_day_at(SUNDAY, 8));

        assert_eq!(
            out,
            "🚦 Traffic Level: Light\n\
             \n\
             📋 Transportation Tips:\n  \
             • *Auto rickshaws** - insist on the meter or fix the fare first\n  \
             • *Chennai Metro** - fastest way across the city"
        );
    }

    fn patterns_with_hotspots(hotspots: &[&str]) -> TrafficPatterns {
        TrafficPatterns {
            hotspots: hotspots.iter().map(|h| h.to_string()).collect(),
            ..TrafficPatterns::default()
        }
    }

    #[test]
    fn test_hotspot_matches_text_between_first_markers() {
        let traffic = patterns_with_hotspots(&["*Anna Salai** - Mount Road **jams** all day"]);
        let uc      = TrafficUseCase::new(&traffic);

        let hit = uc.estimate("stuck at anna salai - MOUNT ROAD again", week_day_at(MONDAY, 8));
        let lines: Vec<&str> = hit.lines().collect();
        assert_eq!(lines[0], "🚦 Traffic Level: Heavy");
        assert_eq!(lines[1], RUSH_HOUR_ADVISORY);
        assert_eq!(lines[2], "⚠️ *Anna Salai** - Mount Road **jams** all day");

        // the bold lead alone is not the matching key
        let miss = uc.estimate("anna salai", week_day_at(MONDAY, 8));
        assert!(!miss.contains("⚠️"));
    }

    #[test]
    fn test_sample_hotspot_key_runs_to_line_end() {
        let traffic = SectionExtractor::new(SAMPLE_CONTEXT).traffic();
        let out     = TrafficUseCase::new(&traffic)
            .estimate("Anna Salai - Mount Road jams all day", week_day_at(SUNDAY, 12));

        let warnings: Vec<&str> = out.lines().filter(|l| l.starts_with("⚠️")).collect();
        assert_eq!(warnings, vec!["⚠️ *Anna Salai** - Mount Road jams all day"]);
    }

    #[test]
    fn test_multiple_hotspots_in_stored_order() {
        let traffic = SectionExtractor::new(SAMPLE_CONTEXT).traffic();
        let out     = TrafficUseCase::new(&traffic).estimate(
            "kathipara junction - cloverleaf bottleneck near the airport, then \
             anna salai - mount road jams all day",
            week_day_at(SUNDAY, 12),
        );

        let warnings: Vec<&str> = out.lines().filter(|l| l.starts_with("⚠️")).collect();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("Anna Salai"));
        assert!(warnings[1].contains("Kathipara Junction"));
    }

    #[test]
    fn test_empty_or_missing_name_never_matches() {
        let traffic = patterns_with_hotspots(&["*Anna Salai**", "*Kathipara Junction"]);
        let out     = TrafficUseCase::new(&traffic)
            .estimate("anna salai kathipara junction", week_day_at(SUNDAY, 12));
        assert!(!out.contains("⚠️"));
    }

    #[test]
    fn test_no_data_still_replies() {
        let traffic = TrafficPatterns::default();
        let out     = TrafficUseCase::new(&traffic).estimate("anywhere", week_day_at(MONDAY, 12));
        assert_eq!(out, "🚦 Traffic Level: Light\n\n📋 Transportation Tips:");
    }
}
