//! Row-to-field extraction.
//!
//! Each usable row is a `(label, value)` pair. Mapping a label onto a
//! document field happens in two mutually exclusive passes per row: an exact
//! lookup in the label dictionary, then (only on a miss) an ordered list of
//! keyword heuristics for sheets that stray from the template. Rows matching
//! neither contribute nothing here; the group collector gets its own look at
//! the full row set.

use tracing::{debug, info};

use crate::models::Itinerary;

use super::dates::normalize_date;
use super::groups::{collect_schedules, collect_tee_times};
use super::row_key_value;
use super::ExtractError;

/// A document field a row can be written to. Nested meeting fields are
/// flattened into the same enum so the dictionary stays a single table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Title,
    StartDate,
    EndDate,
    DepartureAirport,
    ArrivalAirport,
    DepartureFlight,
    ReturnFlight,
    Accommodation,
    AccommodationAddress,
    CompanyName,
    CompanyPhone,
    CompanyAddress,
    ManagerName,
    ManagerPhone,
    ManagerEmail,
    AirportMeetingPlace,
    AirportMeetingDate,
    AirportMeetingTime,
    AirportMeetingName,
    AirportMeetingPhone,
    LocalMeetingPlace,
    LocalMeetingDate,
    LocalMeetingTime,
    LocalMeetingGuide,
    LocalMeetingPhone,
}

impl Target {
    /// Date-valued targets are run through the normalizer on assignment;
    /// everything else is stored as trimmed text verbatim.
    fn is_date(&self) -> bool {
        matches!(
            self,
            Target::StartDate | Target::EndDate | Target::AirportMeetingDate | Target::LocalMeetingDate
        )
    }
}

/// Exact template-label dictionary. Labels are the row keys the distributed
/// template ships with.
const KEY_MAP: &[(&str, Target)] = &[
    ("여행제목", Target::Title),
    ("출발일", Target::StartDate),
    ("도착일", Target::EndDate),
    ("공항미팅_장소", Target::AirportMeetingPlace),
    ("공항미팅_날짜", Target::AirportMeetingDate),
    ("공항미팅_시간", Target::AirportMeetingTime),
    ("공항미팅_담당자", Target::AirportMeetingName),
    ("공항미팅_전화", Target::AirportMeetingPhone),
    ("현지미팅_장소", Target::LocalMeetingPlace),
    ("현지미팅_날짜", Target::LocalMeetingDate),
    ("현지미팅_시간", Target::LocalMeetingTime),
    ("현지미팅_가이드", Target::LocalMeetingGuide),
    ("현지미팅_전화", Target::LocalMeetingPhone),
    ("출발공항", Target::DepartureAirport),
    ("도착공항", Target::ArrivalAirport),
    ("출발편", Target::DepartureFlight),
    ("귀국편", Target::ReturnFlight),
    ("숙소명", Target::Accommodation),
    ("숙소주소", Target::AccommodationAddress),
    ("회사명", Target::CompanyName),
    ("회사전화", Target::CompanyPhone),
    ("회사주소", Target::CompanyAddress),
    ("담당자명", Target::ManagerName),
    ("담당자전화", Target::ManagerPhone),
    ("담당자이메일", Target::ManagerEmail),
];

fn exact_target(key: &str) -> Option<Target> {
    KEY_MAP
        .iter()
        .find(|(label, _)| *label == key)
        .map(|(_, target)| *target)
}

/// Keyword heuristics for sheets that do not use the exact template labels.
/// Checked in order, first match wins.
fn fallback_target(key: &str) -> Option<Target> {
    let key = key.to_lowercase();
    if (key.contains("여행") && key.contains("제목")) || key == "제목" {
        Some(Target::Title)
    } else if key.contains("출발") && key.contains("일") {
        Some(Target::StartDate)
    } else if (key.contains("도착") && key.contains("일")) || key.contains("종료") {
        Some(Target::EndDate)
    } else if key.contains("출발") && key.contains("공항") {
        Some(Target::DepartureAirport)
    } else if key.contains("도착") && key.contains("공항") {
        Some(Target::ArrivalAirport)
    } else if key.contains("숙소") && !key.contains("주소") {
        Some(Target::Accommodation)
    } else if key.contains("회사") && key.contains("명") {
        Some(Target::CompanyName)
    } else if key.contains("담당자") && (key.contains("명") || key.contains("이름")) {
        Some(Target::ManagerName)
    } else if key.contains("담당자") && key.contains("전화") {
        Some(Target::ManagerPhone)
    } else if key.contains("이메일") {
        Some(Target::ManagerEmail)
    } else {
        None
    }
}

fn assign(doc: &mut Itinerary, target: Target, value: &str) {
    let stored = if target.is_date() {
        normalize_date(value)
    } else {
        value.to_string()
    };
    match target {
        Target::Title => doc.title = stored,
        Target::StartDate => doc.start_date = stored,
        Target::EndDate => doc.end_date = stored,
        Target::DepartureAirport => doc.departure_airport = stored,
        Target::ArrivalAirport => doc.arrival_airport = stored,
        Target::DepartureFlight => doc.departure_flight = stored,
        Target::ReturnFlight => doc.return_flight = stored,
        Target::Accommodation => doc.accommodation = stored,
        Target::AccommodationAddress => doc.accommodation_address = stored,
        Target::CompanyName => doc.company_name = stored,
        Target::CompanyPhone => doc.company_phone = stored,
        Target::CompanyAddress => doc.company_address = stored,
        Target::ManagerName => doc.manager_name = stored,
        Target::ManagerPhone => doc.manager_phone = stored,
        Target::ManagerEmail => doc.manager_email = stored,
        Target::AirportMeetingPlace => doc.airport_meeting.place = stored,
        Target::AirportMeetingDate => doc.airport_meeting.date = stored,
        Target::AirportMeetingTime => doc.airport_meeting.time = stored,
        Target::AirportMeetingName => doc.airport_meeting.name = stored,
        Target::AirportMeetingPhone => doc.airport_meeting.phone = stored,
        Target::LocalMeetingPlace => doc.local_meeting.place = stored,
        Target::LocalMeetingDate => doc.local_meeting.date = stored,
        Target::LocalMeetingTime => doc.local_meeting.time = stored,
        Target::LocalMeetingGuide => doc.local_meeting.guide = stored,
        Target::LocalMeetingPhone => doc.local_meeting.phone = stored,
    }
}

/// Build an itinerary from stringified sheet rows.
///
/// The row set must already have blank rows removed (the sheet reader does
/// this). Zero rows is the distinct "empty file" condition and aborts before
/// any extraction; individual rows that map to nothing are skipped silently.
pub fn extract(rows: &[Vec<String>]) -> Result<Itinerary, ExtractError> {
    if rows.is_empty() {
        return Err(ExtractError::EmptySheet);
    }

    let mut doc = Itinerary::default();
    for row in rows {
        let Some((key, value)) = row_key_value(row) else {
            continue;
        };
        let target = match exact_target(key) {
            Some(target) => target,
            None => match fallback_target(key) {
                Some(target) => {
                    debug!(key = %key, ?target, "label matched by keyword fallback");
                    target
                }
                None => {
                    debug!(key = %key, "no field mapping for row");
                    continue;
                }
            },
        };
        assign(&mut doc, target, value);
    }

    doc.tee_times = collect_tee_times(rows);
    doc.schedules = collect_schedules(rows);

    info!(
        tee_times = doc.tee_times.len(),
        schedules = doc.schedules.len(),
        "spreadsheet extracted"
    );
    Ok(doc)
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
    fn test_template_sheet_extraction() {
        let rows = rows(&[
            ("여행제목", "제주도 골프여행"),
            ("골프장1_이름", "핀크스"),
            ("골프장1_날짜", "2024.05.01"),
            ("골프장2_이름", "라온"),
            ("일정1_날짜", "2024.05.01"),
            ("일정1_제목", "도착"),
        ]);
        let doc = extract(&rows).unwrap();
        assert_eq!(doc.title, "제주도 골프여행");
        assert_eq!(doc.tee_times.len(), 2);
        assert_eq!(doc.tee_times[0].course_name, "핀크스");
        assert_eq!(doc.tee_times[0].date, "2024-05-01");
        assert_eq!(doc.tee_times[1].course_name, "라온");
        assert_eq!(doc.schedules.len(), 1);
        assert_eq!(doc.schedules[0].title, "도착");
    }

    #[test]
    fn test_empty_sheet_is_an_error() {
        let err = extract(&[]).unwrap_err();
        assert!(matches!(err, ExtractError::EmptySheet));
    }

    #[test]
    fn test_scalar_and_nested_fields() {
        let rows = rows(&[
            ("출발일", "2024.05.01"),
            ("도착일", "20240504"),
            ("공항미팅_장소", "인천공항 3층 M카운터"),
            ("공항미팅_날짜", "2024.05.01"),
            ("공항미팅_담당자", "김철수"),
            ("현지미팅_가이드", "박영희"),
            ("숙소명", "핀크스 포도호텔"),
            ("담당자이메일", "golf@example.com"),
        ]);
        let doc = extract(&rows).unwrap();
        assert_eq!(doc.start_date, "2024-05-01");
        assert_eq!(doc.end_date, "2024-05-04");
        assert_eq!(doc.airport_meeting.place, "인천공항 3층 M카운터");
        assert_eq!(doc.airport_meeting.date, "2024-05-01");
        assert_eq!(doc.airport_meeting.name, "김철수");
        assert_eq!(doc.local_meeting.guide, "박영희");
        assert_eq!(doc.accommodation, "핀크스 포도호텔");
        assert_eq!(doc.manager_email, "golf@example.com");
    }

    #[test]
    fn test_meeting_time_is_not_date_normalized() {
        let rows = rows(&[("공항미팅_시간", "07:30")]);
        let doc = extract(&rows).unwrap();
        assert_eq!(doc.airport_meeting.time, "07:30");
    }

    #[test]
    fn test_fallback_keyword_matching() {
        let rows = rows(&[
            ("제목", "태국 골프 투어"),
            ("출발 일자", "2024.11.01"),
            ("여행 종료", "2024.11.05"),
            ("숙소 이름", "반얀트리"),
            ("담당자 이름", "김철수"),
            ("담당자 전화번호", "010-1234-5678"),
            ("회사명(상호)", "골프투어"),
            ("이메일 주소", "tour@example.com"),
        ]);
        let doc = extract(&rows).unwrap();
        assert_eq!(doc.title, "태국 골프 투어");
        assert_eq!(doc.start_date, "2024-11-01");
        assert_eq!(doc.end_date, "2024-11-05");
        assert_eq!(doc.accommodation, "반얀트리");
        assert_eq!(doc.manager_name, "김철수");
        assert_eq!(doc.manager_phone, "010-1234-5678");
        assert_eq!(doc.company_name, "골프투어");
        assert_eq!(doc.manager_email, "tour@example.com");
    }

    #[test]
    fn test_exact_match_wins_over_fallback() {
        // No keyword heuristic covers "회사전화"; only the exact dictionary
        // maps it, so this row proves the dictionary is consulted first.
        let rows = rows(&[("회사전화", "02-1234-5678")]);
        let doc = extract(&rows).unwrap();
        assert_eq!(doc.company_phone, "02-1234-5678");
    }

    #[test]
    fn test_unrecognized_row_does_not_abort_the_rest() {
        let rows = rows(&[
            ("여행제목", "제주도 골프여행"),
            ("취미", "골프"),
            ("숙소명", "포도호텔"),
        ]);
        let doc = extract(&rows).unwrap();
        assert_eq!(doc.title, "제주도 골프여행");
        assert_eq!(doc.accommodation, "포도호텔");
    }

    #[test]
    fn test_separator_rows_are_skipped() {
        let rows = rows(&[
            ("=== 기본 정보 ===", "-"),
            ("여행제목", "제주도 골프여행"),
        ]);
        let doc = extract(&rows).unwrap();
        assert_eq!(doc.title, "제주도 골프여행");
    }

    #[test]
    fn test_unparseable_date_degrades_to_empty() {
        let rows = rows(&[("출발일", "미정"), ("여행제목", "제주도")]);
        let doc = extract(&rows).unwrap();
        assert_eq!(doc.start_date, "");
        assert_eq!(doc.title, "제주도");
    }
}
