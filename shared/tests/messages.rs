use activity_board_shared::messages::activities::{ActivityDetails, ActivityList};
use activity_board_shared::messages::registration::RegistrationResponse;
use serde_json::{self as json, Value};

const ACTIVITIES_BODY: &str = r#"{
	"Programming Class": {
		"description": "Learn programming fundamentals and build software projects",
		"schedule": "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
		"max_participants": 20,
		"participants": ["emma@mergington.edu", "sophia@mergington.edu"]
	},
	"Chess Club": {
		"description": "Learn strategies and compete in chess tournaments",
		"schedule": "Fridays, 3:30 PM - 5:00 PM",
		"max_participants": 12,
		"participants": ["michael@mergington.edu", "daniel@mergington.edu"]
	},
	"Art Studio": {
		"description": "Explore painting and drawing",
		"schedule": "Mondays, 4:00 PM - 5:30 PM",
		"max_participants": 5,
		"participants": []
	}
}"#;

#[test]
fn activity_list_keeps_backend_order() {
	let list: ActivityList = json::from_str(ACTIVITIES_BODY).expect("valid activity list");

	let names: Vec<&str> = list.names().collect();
	assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Studio"]);
	assert_eq!(list.len(), 3);

	let chess = list.get("Chess Club").expect("chess club present");
	assert_eq!(chess.max_participants, 12);
	assert_eq!(chess.participants, vec!["michael@mergington.edu", "daniel@mergington.edu"]);
	assert_eq!(chess.spots_left(), 10);
}

#[test]
fn spots_left_subtracts_participants_from_capacity() {
	let details = ActivityDetails {
		description: String::new(),
		schedule: String::new(),
		max_participants: 5,
		participants: vec![String::from("a@x.com"), String::from("b@x.com")],
	};
	assert_eq!(details.spots_left(), 3);

	let overbooked = ActivityDetails {
		max_participants: 1,
		..details
	};
	assert_eq!(overbooked.spots_left(), -1);
}

#[test]
fn participants_that_are_not_a_list_decode_as_empty() {
	let body = r#"{
		"Drama": { "description": "Stage", "schedule": "Wednesdays", "max_participants": 8, "participants": "nobody" },
		"Choir": { "description": "Sing", "schedule": "Mondays", "max_participants": 30 }
	}"#;
	let list: ActivityList = json::from_str(body).expect("valid activity list");

	assert!(list.get("Drama").expect("drama present").participants.is_empty());
	assert!(list.get("Choir").expect("choir present").participants.is_empty());
	assert_eq!(list.get("Choir").expect("choir present").spots_left(), 30);
}

#[test]
fn null_or_missing_text_decodes_as_empty() {
	let body = r#"{
		"Chess Club": { "description": null, "schedule": null, "max_participants": 12, "participants": [] },
		"Art Studio": { "max_participants": 5 },
		"Drama": { "description": 7, "schedule": "Wednesdays", "max_participants": 8 }
	}"#;
	let list: ActivityList = json::from_str(body).expect("valid activity list");

	let chess = list.get("Chess Club").expect("chess club present");
	assert_eq!(chess.description, "");
	assert_eq!(chess.schedule, "");
	assert_eq!(list.get("Art Studio").expect("art studio present").description, "");

	let drama = list.get("Drama").expect("drama present");
	assert_eq!(drama.description, "");
	assert_eq!(drama.schedule, "Wednesdays");
}

#[test]
fn spots_left_saturates_at_extreme_capacities() {
	let details = ActivityDetails {
		description: String::new(),
		schedule: String::new(),
		max_participants: i64::MIN,
		participants: vec![String::from("a@x.com")],
	};
	assert_eq!(details.spots_left(), i64::MIN);
}

#[test]
fn missing_capacity_is_rejected() {
	let body = r#"{ "Drama": { "description": "Stage", "schedule": "Wednesdays", "participants": [] } }"#;
	assert!(json::from_str::<ActivityList>(body).is_err());
}

#[test]
fn repeated_activity_name_keeps_first_position_and_last_details() {
	let body = r#"{
		"Chess Club": { "max_participants": 1 },
		"Art Studio": { "max_participants": 2 },
		"Chess Club": { "max_participants": 3 }
	}"#;
	let list: ActivityList = json::from_str(body).expect("valid activity list");

	assert_eq!(list.names().collect::<Vec<_>>(), vec!["Chess Club", "Art Studio"]);
	assert_eq!(list.get("Chess Club").expect("chess club present").max_participants, 3);
}

#[test]
fn activity_list_serializes_as_object_in_order() {
	let list: ActivityList = json::from_str(ACTIVITIES_BODY).expect("valid activity list");
	let text = json::to_string(&list).expect("serialize");

	let programming = text.find("Programming Class").expect("programming class serialized");
	let art = text.find("Art Studio").expect("art studio serialized");
	assert!(programming < art);

	let value: Value = json::from_str(&text).expect("valid json");
	assert_eq!(value["Chess Club"]["max_participants"], 12);
}

#[test]
fn registration_response_reads_message_or_detail() {
	let success: RegistrationResponse =
		json::from_str(r#"{"message": "Signed up jane@x.com for Chess Club"}"#).expect("valid response");
	assert_eq!(success, RegistrationResponse::with_message("Signed up jane@x.com for Chess Club"));

	let failure: RegistrationResponse =
		json::from_str(r#"{"detail": "Student is already signed up"}"#).expect("valid response");
	assert_eq!(failure, RegistrationResponse::with_detail("Student is already signed up"));

	let empty: RegistrationResponse = json::from_str("{}").expect("valid response");
	assert_eq!(empty, RegistrationResponse::default());
}

#[test]
fn structured_detail_is_treated_as_absent() {
	let body = r#"{"detail": [{"loc": ["query", "email"], "msg": "field required", "type": "value_error.missing"}]}"#;
	let response: RegistrationResponse = json::from_str(body).expect("valid response");
	assert_eq!(response.detail, None);
	assert_eq!(response.message, None);
}
