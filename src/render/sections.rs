use crate::models::{AirportMeeting, Itinerary, LocalMeeting, ScheduleDay, TeeTime};
use crate::utils::display_date_korean;

const PAGE_STYLE: &str = r#"
body { font-family: 'Malgun Gothic', 'Apple SD Gothic Neo', sans-serif; background: #f3f4f6; margin: 0; }
.page { max-width: 720px; margin: 0 auto; padding: 24px; }
.header-section { background: #4c1d95; color: #fff; border-radius: 12px; padding: 32px 24px; text-align: center; }
.header-section h1 { margin: 0 0 8px; font-size: 28px; }
.header-section .period { font-size: 16px; opacity: 0.85; }
.section-box { background: #fff; border-radius: 12px; padding: 20px 24px; margin-top: 16px; border-left: 6px solid #a78bfa; }
.section-box h2 { margin: 0 0 12px; font-size: 20px; }
.section-box .entry { border-top: 1px solid #e5e7eb; padding-top: 12px; margin-top: 12px; }
.section-box .entry h3 { margin: 0 0 8px; font-size: 17px; }
.info-row { display: flex; padding: 3px 0; }
.info-label { width: 110px; color: #6b7280; flex-shrink: 0; }
.info-value { color: #111827; }
.detail-block { margin-top: 8px; padding: 10px; background: #f9fafb; border-radius: 8px; }
"#;

/// Render the itinerary as a complete preview page.
pub fn render_preview(doc: &Itinerary) -> String {
    let mut body = String::new();

    body.push_str(&header_section(doc));
    if doc.airport_meeting.include {
        body.push_str(&airport_meeting_section(&doc.airport_meeting));
    }
    if doc.local_meeting.include {
        body.push_str(&local_meeting_section(&doc.local_meeting));
    }
    if !doc.tee_times.is_empty() {
        body.push_str(&tee_times_section(&doc.tee_times));
    }
    if !doc.schedules.is_empty() {
        body.push_str(&schedules_section(&doc.schedules));
    }
    if !doc.departure_airport.is_empty() || !doc.arrival_airport.is_empty() {
        body.push_str(&flight_section(doc));
    }
    if !doc.accommodation.is_empty() {
        body.push_str(&accommodation_section(doc));
    }
    if !doc.notes.is_empty() {
        body.push_str(&notes_section(&doc.notes));
    }
    if !doc.company_name.is_empty() {
        body.push_str(&company_section(doc));
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<div class=\"page\">\n{}\
         </div>\n</body>\n</html>\n",
        escape_html(page_title(doc)),
        PAGE_STYLE,
        body
    )
}

fn page_title(doc: &Itinerary) -> &str {
    if doc.title.is_empty() {
        "여행 안내문"
    } else {
        &doc.title
    }
}

/// One labeled line, or nothing when the value is empty.
fn info_row(label: &str, value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format!(
        "<div class=\"info-row\"><span class=\"info-label\">{}</span><span class=\"info-value\">{}</span></div>\n",
        label,
        escape_html(value)
    )
}

/// Like `info_row` but displays the date in Korean long form.
fn date_row(label: &str, value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    info_row(label, &display_date_korean(value))
}

/// Escaped text with newlines preserved as line breaks.
fn multiline(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn header_section(doc: &Itinerary) -> String {
    let period = match doc.period() {
        Some(_) => format!(
            "<div class=\"period\">{} ~ {}</div>",
            display_date_korean(&doc.start_date),
            display_date_korean(&doc.end_date)
        ),
        None => String::new(),
    };
    format!(
        "<div class=\"header-section\"><h1>{}</h1>{}</div>\n",
        escape_html(page_title(doc)),
        period
    )
}

fn airport_meeting_section(meeting: &AirportMeeting) -> String {
    format!(
        "<div class=\"section-box\"><h2>공항 미팅</h2>\n{}{}{}{}{}</div>\n",
        info_row("장소", &meeting.place),
        date_row("날짜", &meeting.date),
        info_row("시간", &meeting.time),
        info_row("담당자", &meeting.name),
        info_row("전화번호", &meeting.phone),
    )
}

fn local_meeting_section(meeting: &LocalMeeting) -> String {
    format!(
        "<div class=\"section-box\"><h2>현지 미팅</h2>\n{}{}{}{}{}</div>\n",
        info_row("장소", &meeting.place),
        date_row("날짜", &meeting.date),
        info_row("시간", &meeting.time),
        info_row("가이드", &meeting.guide),
        info_row("전화번호", &meeting.phone),
    )
}

fn tee_times_section(tee_times: &[TeeTime]) -> String {
    let mut entries = String::new();
    for tee in tee_times {
        if tee.course_name.is_empty() {
            continue;
        }
        entries.push_str(&format!(
            "<div class=\"entry\"><h3>{}</h3>\n{}{}{}{}{}{}</div>\n",
            escape_html(&tee.course_name),
            date_row("날짜", &tee.date),
            info_row("티업 시간", &tee.time),
            info_row("홀수", &tee.holes),
            info_row("그린피", &tee.green_fee),
            info_row("캐디피", &tee.caddy_fee),
            info_row("카트비", &tee.cart_fee),
        ));
    }
    format!(
        "<div class=\"section-box\"><h2>골프장 &amp; TEE-UP</h2>\n{}</div>\n",
        entries
    )
}

fn schedules_section(schedules: &[ScheduleDay]) -> String {
    let mut entries = String::new();
    for (index, schedule) in schedules.iter().enumerate() {
        if !schedule.include_preview || (schedule.title.is_empty() && schedule.detail.is_empty()) {
            continue;
        }
        let heading = if schedule.title.is_empty() {
            format!("Day {}", index + 1)
        } else {
            escape_html(&schedule.title)
        };
        let detail = if schedule.detail.is_empty() {
            String::new()
        } else {
            format!("<div class=\"detail-block\">{}</div>\n", multiline(&schedule.detail))
        };
        let meals = if schedule.meals.is_empty() {
            String::new()
        } else {
            format!(
                "<div class=\"detail-block\"><strong>식사 및 포함사항:</strong><br>{}</div>\n",
                multiline(&schedule.meals)
            )
        };
        entries.push_str(&format!(
            "<div class=\"entry\"><h3>{}</h3>\n{}{}{}</div>\n",
            heading,
            date_row("날짜", &schedule.date),
            detail,
            meals,
        ));
    }
    format!(
        "<div class=\"section-box\"><h2>일정 및 식사</h2>\n{}</div>\n",
        entries
    )
}

fn flight_section(doc: &Itinerary) -> String {
    format!(
        "<div class=\"section-box\"><h2>항공편 정보</h2>\n{}{}{}{}</div>\n",
        info_row("출발 공항", &doc.departure_airport),
        info_row("도착 공항", &doc.arrival_airport),
        info_row("출발편", &doc.departure_flight),
        info_row("귀국편", &doc.return_flight),
    )
}

fn accommodation_section(doc: &Itinerary) -> String {
    format!(
        "<div class=\"section-box\"><h2>숙소 정보</h2>\n{}{}</div>\n",
        info_row("숙소명", &doc.accommodation),
        info_row("주소", &doc.accommodation_address),
    )
}

fn notes_section(notes: &str) -> String {
    format!(
        "<div class=\"section-box\"><h2>추가 안내사항</h2>\n<div class=\"detail-block\">{}</div></div>\n",
        multiline(notes)
    )
}

fn company_section(doc: &Itinerary) -> String {
    let manager = if doc.manager_name.is_empty()
        && doc.manager_phone.is_empty()
        && doc.manager_email.is_empty()
    {
        String::new()
    } else {
        format!(
            "<div class=\"entry\"><h3>담당자 정보</h3>\n{}{}{}</div>\n",
            info_row("담당자명", &doc.manager_name),
            info_row("담당자 전화번호", &doc.manager_phone),
            info_row("담당자 이메일", &doc.manager_email),
        )
    };
    format!(
        "<div class=\"section-box\"><h2>문의</h2>\n{}{}{}{}</div>\n",
        info_row("회사명", &doc.company_name),
        info_row("대표 전화번호", &doc.company_phone),
        info_row("회사 주소", &doc.company_address),
        manager,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> Itinerary {
        let mut doc = Itinerary::default();
        doc.title = "제주도 골프여행".to_string();
        doc.start_date = "2024-05-01".to_string();
        doc.end_date = "2024-05-04".to_string();
        doc.airport_meeting.place = "인천공항 3층 M카운터".to_string();
        doc.tee_times.push(TeeTime {
            course_name: "핀크스".to_string(),
            date: "2024-05-02".to_string(),
            time: "07:30".to_string(),
            ..Default::default()
        });
        doc.schedules.push(ScheduleDay {
            date: "2024-05-01".to_string(),
            title: "도착".to_string(),
            detail: "공항 픽업 후\n호텔 체크인".to_string(),
            ..Default::default()
        });
        doc
    }

    #[test]
    fn test_sections_render_when_present() {
        let html = render_preview(&sample_doc());
        assert!(html.contains("제주도 골프여행"));
        assert!(html.contains("공항 미팅"));
        assert!(html.contains("핀크스"));
        assert!(html.contains("티업 시간"));
        assert!(html.contains("도착"));
        // Multi-line detail becomes a line break
        assert!(html.contains("공항 픽업 후<br>호텔 체크인"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let html = render_preview(&Itinerary::default());
        assert!(!html.contains("항공편 정보"));
        assert!(!html.contains("숙소 정보"));
        assert!(!html.contains("골프장"));
        assert!(!html.contains("문의"));
    }

    #[test]
    fn test_meeting_include_flag_is_honored() {
        let mut doc = sample_doc();
        doc.airport_meeting.include = false;
        let html = render_preview(&doc);
        assert!(!html.contains("공항 미팅"));
    }

    #[test]
    fn test_schedule_include_preview_flag_is_honored() {
        let mut doc = sample_doc();
        doc.schedules[0].include_preview = false;
        let html = render_preview(&doc);
        assert!(!html.contains("도착"));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut doc = Itinerary::default();
        doc.title = "<script>alert(1)</script>".to_string();
        doc.notes = "A & B".to_string();
        let html = render_preview(&doc);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &amp; B"));
    }

    #[test]
    fn test_dates_display_in_korean_form() {
        let html = render_preview(&sample_doc());
        assert!(html.contains("2024년 5월 1일"));
    }
}
