//! Repeated-group collection.
//!
//! Golf rounds and schedule days are encoded in the flat sheet as indexed
//! keys: `골프장1_이름`, `골프장1_날짜`, `골프장2_이름`, `일정1_제목` and so
//! on. This module gathers those rows into per-index records and emits them
//! as ordered list entries.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::{ScheduleDay, TeeTime};

use super::dates::normalize_date;
use super::row_key_value;

static GOLF_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^골프장(\d+)_(.+)$").unwrap());
static SCHEDULE_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^일정(\d+)_(.+)$").unwrap());

/// Accumulate `prefix<N>_<field>` rows into per-index field maps.
///
/// The outer map is keyed by the captured index *text* and iterates in
/// lexicographic string order, so index "10" sorts before "2". Documents
/// produced from existing sheets keep the ordering they have always had;
/// see the regression test below before changing this.
fn collect_indexed(rows: &[Vec<String>], key_pattern: &Regex) -> BTreeMap<String, HashMap<String, String>> {
    let mut groups: BTreeMap<String, HashMap<String, String>> = BTreeMap::new();
    for row in rows {
        let Some((key, value)) = row_key_value(row) else {
            continue;
        };
        let Some(caps) = key_pattern.captures(key) else {
            continue;
        };
        groups
            .entry(caps[1].to_string())
            .or_default()
            .insert(caps[2].to_string(), value.to_string());
    }
    groups
}

fn field(record: &HashMap<String, String>, name: &str) -> String {
    record.get(name).cloned().unwrap_or_default()
}

/// Fold `골프장N_*` rows into tee-time entries. An index with neither a course
/// name nor a date contributes nothing.
pub fn collect_tee_times(rows: &[Vec<String>]) -> Vec<TeeTime> {
    collect_indexed(rows, &GOLF_KEY)
        .into_iter()
        .filter_map(|(index, record)| {
            let course_name = field(&record, "이름");
            let date = field(&record, "날짜");
            if course_name.is_empty() && date.is_empty() {
                debug!(index = %index, "golf group has no name or date, dropped");
                return None;
            }
            Some(TeeTime {
                course_name,
                date: normalize_date(&date),
                time: field(&record, "시간"),
                holes: field(&record, "홀수"),
                green_fee: field(&record, "그린피"),
                caddy_fee: field(&record, "캐디피"),
                cart_fee: field(&record, "카트비"),
                image: String::new(),
                include_preview: true,
            })
        })
        .collect()
}

/// Fold `일정N_*` rows into schedule entries. An index with neither a date
/// nor a title contributes nothing.
pub fn collect_schedules(rows: &[Vec<String>]) -> Vec<ScheduleDay> {
    collect_indexed(rows, &SCHEDULE_KEY)
        .into_iter()
        .filter_map(|(index, record)| {
            let date = field(&record, "날짜");
            let title = field(&record, "제목");
            if date.is_empty() && title.is_empty() {
                debug!(index = %index, "schedule group has no date or title, dropped");
                return None;
            }
            Some(ScheduleDay {
                date: normalize_date(&date),
                title,
                detail: field(&record, "상세"),
                meals: field(&record, "식사"),
                image: String::new(),
                include_preview: true,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, &str)]) -> Vec<Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| vec![k.to_string(), v.to_string()])
            .collect()
    }

    #[test]
    fn test_tee_times_fields_map_through() {
        let rows = rows(&[
            ("골프장1_이름", "핀크스"),
            ("골프장1_날짜", "2024.05.01"),
            ("골프장1_시간", "07:30"),
            ("골프장1_홀수", "18홀"),
            ("골프장1_그린피", "250,000"),
            ("골프장1_캐디피", "150,000"),
            ("골프장1_카트비", "100,000"),
        ]);
        let tees = collect_tee_times(&rows);
        assert_eq!(tees.len(), 1);
        let tee = &tees[0];
        assert_eq!(tee.course_name, "핀크스");
        assert_eq!(tee.date, "2024-05-01");
        assert_eq!(tee.time, "07:30");
        assert_eq!(tee.holes, "18홀");
        assert_eq!(tee.green_fee, "250,000");
        assert_eq!(tee.caddy_fee, "150,000");
        assert_eq!(tee.cart_fee, "100,000");
        assert!(tee.include_preview);
        assert_eq!(tee.image, "");
    }

    #[test]
    fn test_index_without_name_or_date_is_dropped() {
        let rows = rows(&[
            ("골프장1_이름", "핀크스"),
            ("골프장2_시간", "09:00"),
            ("골프장3_이름", "라온"),
        ]);
        let tees = collect_tee_times(&rows);
        assert_eq!(tees.len(), 2);
        assert_eq!(tees[0].course_name, "핀크스");
        assert_eq!(tees[1].course_name, "라온");
    }

    #[test]
    fn test_indices_emit_in_string_order() {
        // Index text sorts lexicographically: "10" comes before "2". Pinned
        // here so a change to numeric ordering shows up as a test failure.
        let rows = rows(&[
            ("골프장2_이름", "라온"),
            ("골프장10_이름", "핀크스"),
        ]);
        let tees = collect_tee_times(&rows);
        assert_eq!(tees.len(), 2);
        assert_eq!(tees[0].course_name, "핀크스");
        assert_eq!(tees[1].course_name, "라온");
    }

    #[test]
    fn test_schedule_collection() {
        let rows = rows(&[
            ("일정1_날짜", "2024.05.01"),
            ("일정1_제목", "도착"),
            ("일정1_상세", "공항 픽업 후 호텔 체크인"),
            ("일정1_식사", "석식 포함"),
            ("일정2_상세", "제목 없는 일정"),
        ]);
        let schedules = collect_schedules(&rows);
        assert_eq!(schedules.len(), 1);
        assert_eq!(schedules[0].date, "2024-05-01");
        assert_eq!(schedules[0].title, "도착");
        assert_eq!(schedules[0].detail, "공항 픽업 후 호텔 체크인");
        assert_eq!(schedules[0].meals, "석식 포함");
    }

    #[test]
    fn test_unparseable_group_date_degrades_to_empty() {
        let rows = rows(&[("골프장1_이름", "핀크스"), ("골프장1_날짜", "미정")]);
        let tees = collect_tee_times(&rows);
        assert_eq!(tees.len(), 1);
        assert_eq!(tees[0].date, "");
    }

    #[test]
    fn test_short_rows_and_blank_values_skipped() {
        let rows = vec![
            vec!["골프장1_이름".to_string()],
            vec!["골프장1_날짜".to_string(), "  ".to_string()],
            vec!["골프장1_이름".to_string(), "핀크스".to_string()],
        ];
        let tees = collect_tee_times(&rows);
        assert_eq!(tees.len(), 1);
        assert_eq!(tees[0].date, "");
    }
}
