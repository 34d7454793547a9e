use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// The normalized itinerary document.
///
/// Field names on the wire match the JSON blobs produced by the web form and
/// stored by the backend, so a document extracted here can be loaded straight
/// into the form and vice versa. Every scalar field is a plain string and
/// defaults to empty; dates are canonical `YYYY-MM-DD` where extraction could
/// normalize them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Itinerary {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "startDate", default)]
    pub start_date: String,
    #[serde(rename = "endDate", default)]
    pub end_date: String,
    #[serde(rename = "airportMeeting", default)]
    pub airport_meeting: AirportMeeting,
    #[serde(rename = "localMeeting", default)]
    pub local_meeting: LocalMeeting,
    #[serde(rename = "departureAirport", default)]
    pub departure_airport: String,
    #[serde(rename = "arrivalAirport", default)]
    pub arrival_airport: String,
    #[serde(rename = "departureFlight", default)]
    pub departure_flight: String,
    #[serde(rename = "returnFlight", default)]
    pub return_flight: String,
    #[serde(default)]
    pub accommodation: String,
    #[serde(rename = "accommodationAddress", default)]
    pub accommodation_address: String,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "companyName", default)]
    pub company_name: String,
    #[serde(rename = "companyPhone", default)]
    pub company_phone: String,
    #[serde(rename = "companyAddress", default)]
    pub company_address: String,
    #[serde(rename = "managerName", default)]
    pub manager_name: String,
    #[serde(rename = "managerPhone", default)]
    pub manager_phone: String,
    #[serde(rename = "managerEmail", default)]
    pub manager_email: String,
    #[serde(rename = "teeTimes", default)]
    pub tee_times: Vec<TeeTime>,
    #[serde(default)]
    pub schedules: Vec<ScheduleDay>,
}

impl Itinerary {
    /// `"2024-05-01 ~ 2024-05-04"` when both ends are known
    pub fn period(&self) -> Option<String> {
        if self.start_date.is_empty() || self.end_date.is_empty() {
            None
        } else {
            Some(format!("{} ~ {}", self.start_date, self.end_date))
        }
    }
}

/// Airport pickup meeting details. The contact person field is `name` on the
/// wire (the local meeting uses `guide` instead).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportMeeting {
    #[serde(default = "default_true")]
    pub include: bool,
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image: String,
}

impl Default for AirportMeeting {
    fn default() -> Self {
        Self {
            include: true,
            place: String::new(),
            date: String::new(),
            time: String::new(),
            name: String::new(),
            phone: String::new(),
            image: String::new(),
        }
    }
}

/// On-site meeting details at the destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalMeeting {
    #[serde(default = "default_true")]
    pub include: bool,
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub guide: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image: String,
}

impl Default for LocalMeeting {
    fn default() -> Self {
        Self {
            include: true,
            place: String::new(),
            date: String::new(),
            time: String::new(),
            guide: String::new(),
            phone: String::new(),
            image: String::new(),
        }
    }
}

/// One golf round: course plus tee-off details and fees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeeTime {
    #[serde(rename = "courseName", default)]
    pub course_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub holes: String,
    #[serde(rename = "greenFee", default)]
    pub green_fee: String,
    #[serde(rename = "caddyFee", default)]
    pub caddy_fee: String,
    #[serde(rename = "cartFee", default)]
    pub cart_fee: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "includePreview", default = "default_true")]
    pub include_preview: bool,
}

impl Default for TeeTime {
    fn default() -> Self {
        Self {
            course_name: String::new(),
            date: String::new(),
            time: String::new(),
            holes: String::new(),
            green_fee: String::new(),
            caddy_fee: String::new(),
            cart_fee: String::new(),
            image: String::new(),
            include_preview: true,
        }
    }
}

/// One day of the trip schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDay {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub meals: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "includePreview", default = "default_true")]
    pub include_preview: bool,
}

impl Default for ScheduleDay {
    fn default() -> Self {
        Self {
            date: String::new(),
            title: String::new(),
            detail: String::new(),
            meals: String::new(),
            image: String::new(),
            include_preview: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let mut doc = Itinerary::default();
        doc.start_date = "2024-05-01".to_string();
        doc.tee_times.push(TeeTime {
            course_name: "핀크스".to_string(),
            green_fee: "250,000".to_string(),
            ..Default::default()
        });

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["startDate"], "2024-05-01");
        assert_eq!(json["teeTimes"][0]["courseName"], "핀크스");
        assert_eq!(json["teeTimes"][0]["greenFee"], "250,000");
        assert_eq!(json["teeTimes"][0]["includePreview"], true);
        assert_eq!(json["airportMeeting"]["include"], true);
    }

    #[test]
    fn test_deserialize_missing_fields_default_empty() {
        // Documents saved by older form versions may omit fields entirely
        let doc: Itinerary = serde_json::from_str(r#"{"title": "제주도 골프여행"}"#).unwrap();
        assert_eq!(doc.title, "제주도 골프여행");
        assert_eq!(doc.start_date, "");
        assert!(doc.tee_times.is_empty());
        assert!(doc.airport_meeting.include);
        assert_eq!(doc.local_meeting.guide, "");
    }

    #[test]
    fn test_period() {
        let mut doc = Itinerary::default();
        assert_eq!(doc.period(), None);
        doc.start_date = "2024-05-01".to_string();
        assert_eq!(doc.period(), None);
        doc.end_date = "2024-05-04".to_string();
        assert_eq!(doc.period().as_deref(), Some("2024-05-01 ~ 2024-05-04"));
    }
}
