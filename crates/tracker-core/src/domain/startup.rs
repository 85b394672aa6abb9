use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Funding stage of a startup.
    FundingStage, "funding stage" {
        Seed => "SEED",
        SeriesA => "SERIES_A",
        SeriesB => "SERIES_B",
        SeriesC => "SERIES_C",
        SeriesD => "SERIES_D",
        SeriesE => "SERIES_E",
        Growth => "GROWTH",
        Ipo => "IPO",
    }
}

/// Startup entity - a Boston-area company tracked by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Startup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub sub_sector: Option<String>,
    #[serde(default)]
    pub employee_count: Option<i64>,
    #[serde(default)]
    pub local_employee_count: Option<i64>,
    #[serde(default)]
    pub headcount_growth_rate: Option<f64>,
    #[serde(default)]
    pub total_funding: Option<f64>,
    #[serde(default, deserialize_with = "super::de::lenient_date")]
    pub last_funding_date: Option<NaiveDate>,
    #[serde(default)]
    pub funding_stage: Option<String>,
    #[serde(default, deserialize_with = "super::de::null_as_false")]
    pub is_hiring: bool,
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
}

impl Startup {
    /// Typed funding stage; `None` when absent or not a known stage.
    pub fn stage(&self) -> Option<FundingStage> {
        self.funding_stage.as_deref()?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_api_payload() {
        let startup: Startup = serde_json::from_value(json!({
            "id": 7,
            "name": "Acme Robotics",
            "website": "https://acme.example",
            "industry": "Robotics",
            "sub_sector": null,
            "employee_count": 120,
            "local_employee_count": 80,
            "headcount_growth_rate": 0.12,
            "total_funding": 25000000.0,
            "last_funding_date": "2023-03-01",
            "funding_stage": "SERIES_B",
            "is_hiring": true,
            "last_updated": "2024-01-15T10:30:00.123456"
        }))
        .unwrap();

        assert_eq!(startup.id, 7);
        assert_eq!(startup.sub_sector, None);
        assert_eq!(
            startup.last_funding_date,
            NaiveDate::from_ymd_opt(2023, 3, 1)
        );
        assert_eq!(startup.stage(), Some(FundingStage::SeriesB));
        assert!(startup.is_hiring);
    }

    #[test]
    fn test_minimal_payload() {
        let startup: Startup = serde_json::from_value(json!({"id": 1, "name": "Tiny"})).unwrap();

        assert_eq!(startup.stage(), None);
        assert!(!startup.is_hiring);
    }

    #[test]
    fn test_http_date_and_null_flag() {
        let startup: Startup = serde_json::from_value(json!({
            "id": 9,
            "name": "Harbor Bio",
            "last_funding_date": "Wed, 01 Mar 2023 00:00:00 GMT",
            "is_hiring": null,
            "last_updated": null
        }))
        .unwrap();

        assert_eq!(
            startup.last_funding_date,
            NaiveDate::from_ymd_opt(2023, 3, 1)
        );
        assert!(!startup.is_hiring);

        let back = serde_json::to_value(&startup).unwrap();
        assert_eq!(back["last_funding_date"], "2023-03-01");
    }

    #[test]
    fn test_null_date_and_bad_date() {
        let startup: Startup = serde_json::from_value(json!({
            "id": 9,
            "name": "Harbor Bio",
            "last_funding_date": null
        }))
        .unwrap();
        assert_eq!(startup.last_funding_date, None);

        let bad = serde_json::from_value::<Startup>(json!({
            "id": 9,
            "name": "Harbor Bio",
            "last_funding_date": "someday"
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_stage_parsing() {
        assert_eq!("series_a".parse::<FundingStage>().unwrap(), FundingStage::SeriesA);
        assert_eq!(FundingStage::Ipo.to_string(), "IPO");
        assert_eq!(FundingStage::ALL.len(), 8);
        assert!("SERIES_Z".parse::<FundingStage>().is_err());
    }
}
