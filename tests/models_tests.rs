use chrono::Utc;
use uuid::Uuid;

use reference_data_service::models::job_title::{
    CreateJobTitleRequest, JobTitle, JobTitleResponse,
};
use reference_data_service::models::language::Language;
use reference_data_service::models::location::{City, CityResponse};
use reference_data_service::models::timezone::{Timezone, TimezoneResponse};

fn sample_job_title() -> JobTitle {
    JobTitle {
        id: Uuid::new_v4(),
        slug: "software-engineer".to_string(),
        name: "Software Engineer".to_string(),
        category: "engineering".to_string(),
        aliases: vec!["Software Developer".to_string()],
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_create_request_defaults() {
    let request: CreateJobTitleRequest =
        serde_json::from_str(r#"{"name": "Platform Engineer"}"#).unwrap();

    assert_eq!(request.name, "Platform Engineer");
    assert_eq!(request.category, "general");
    assert!(request.aliases.is_empty());
}

#[test]
fn test_create_request_full_body() {
    let request: CreateJobTitleRequest = serde_json::from_str(
        r#"{"name": "Solutions Engineer", "category": "sales", "aliases": ["Sales Engineer"]}"#,
    )
    .unwrap();

    assert_eq!(request.category, "sales");
    assert_eq!(request.aliases, vec!["Sales Engineer"]);
}

#[test]
fn test_job_title_response_drops_is_active() {
    let title = sample_job_title();
    let response = JobTitleResponse::from(title.clone());
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["slug"], "software-engineer");
    assert_eq!(json["aliases"][0], "Software Developer");
    // Internal visibility flag never reaches clients
    assert!(json.get("is_active").is_none());
}

#[test]
fn test_timezone_response_formats_offset() {
    let tz = Timezone {
        name: "Asia/Kolkata".to_string(),
        abbreviation: "IST".to_string(),
        utc_offset_minutes: 330,
        dst_offset_minutes: None,
        display_name: "India Standard Time".to_string(),
    };
    let response = TimezoneResponse::from(tz);

    assert_eq!(response.utc_offset, "+05:30");
    assert_eq!(response.utc_offset_minutes, 330);
    assert_eq!(response.dst_offset_minutes, None);
}

#[test]
fn test_timezone_response_negative_offset() {
    let tz = Timezone {
        name: "America/New_York".to_string(),
        abbreviation: "EST".to_string(),
        utc_offset_minutes: -300,
        dst_offset_minutes: Some(-240),
        display_name: "Eastern Time (US & Canada)".to_string(),
    };
    let response = TimezoneResponse::from(tz);

    assert_eq!(response.utc_offset, "-05:00");
    assert_eq!(response.dst_offset_minutes, Some(-240));
}

#[test]
fn test_city_response_preserves_fields() {
    let id = Uuid::new_v4();
    let city = City {
        id,
        country_code: "US".to_string(),
        region_code: Some("CA".to_string()),
        name: "San Francisco".to_string(),
        timezone: "America/Los_Angeles".to_string(),
        population: Some(873_965),
        latitude: Some(37.7749),
        longitude: Some(-122.4194),
    };
    let response = CityResponse::from(city);

    assert_eq!(response.id, id);
    assert_eq!(response.country_code, "US");
    assert_eq!(response.region_code.as_deref(), Some("CA"));
    assert_eq!(response.timezone, "America/Los_Angeles");
    assert_eq!(response.population, Some(873_965));
}

#[test]
fn test_language_serialization_field_names() {
    let language = Language {
        code: "ar".to_string(),
        iso639_2: "ara".to_string(),
        name: "Arabic".to_string(),
        native_name: "العربية".to_string(),
        rtl: true,
    };
    let json = serde_json::to_value(&language).unwrap();

    assert_eq!(json["code"], "ar");
    assert_eq!(json["iso639_2"], "ara");
    assert_eq!(json["native_name"], "العربية");
    assert_eq!(json["rtl"], true);
}
