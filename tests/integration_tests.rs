use serde_json::{Value, json};

mod unit;

const BASE_URL: &str = "http://127.0.0.1:3001";

fn person_body(name: &str, personal_number: &str) -> Value {
    json!({
        "full_name": name,
        "personal_number": personal_number,
        "rank": "Corporal",
        "branch": "Logistics",
        "residence": "Beer Sheva",
        "phone": "052-7654321",
        "id_number": "204987654",
        "birth_date": "2004-01-20",
        "enlistment_date": "2023-03-15",
        "discharge_date": "2026-03-15",
        "marital_status": "single",
        "course_cycle": "2023-A"
    })
}

async fn create_person(client: &reqwest::Client, name: &str, personal_number: &str) -> i64 {
    let res = client
        .post(format!("{}/personnel", BASE_URL))
        .json(&person_body(name, personal_number))
        .send()
        .await
        .expect("create person");
    assert!(res.status().is_success());
    let body: Value = res.json().await.expect("json body");
    body["id"].as_i64().expect("person id")
}

#[tokio::test]
#[ignore = "requires running server"]
async fn duplicate_personal_number_is_rejected() {
    let client = reqwest::Client::new();
    let number = format!("pn-{}", chrono::Utc::now().timestamp_nanos_opt().unwrap());
    create_person(&client, "First Person", &number).await;

    let res = client
        .post(format!("{}/personnel", BASE_URL))
        .json(&person_body("Second Person", &number))
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["error"], "Personal number already exists");
}

#[tokio::test]
#[ignore = "requires running server"]
async fn department_requires_commander() {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/departments", BASE_URL))
        .json(&json!({ "name": "Orphan Department" }))
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["error"], "Department commander is required");
}

#[tokio::test]
#[ignore = "requires running server"]
async fn skill_names_are_unique_case_insensitively() {
    let client = reqwest::Client::new();
    let name = format!("Radio-{}", chrono::Utc::now().timestamp_nanos_opt().unwrap());

    let res = client
        .post(format!("{}/skills", BASE_URL))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("request");
    assert!(res.status().is_success());

    let res = client
        .post(format!("{}/skills", BASE_URL))
        .json(&json!({ "name": name.to_uppercase() }))
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["error"], "Skill name already exists");
}

#[tokio::test]
#[ignore = "requires running server"]
async fn populated_population_cannot_be_deleted() {
    let client = reqwest::Client::new();
    let stamp = chrono::Utc::now().timestamp_nanos_opt().unwrap();

    let res = client
        .post(format!("{}/populations", BASE_URL))
        .json(&json!({ "name": format!("Pop-{}", stamp) }))
        .send()
        .await
        .expect("create population");
    let body: Value = res.json().await.expect("json body");
    let population_id = body["id"].as_i64().expect("population id");

    let person_id = create_person(&client, "Assigned Person", &format!("pa-{}", stamp)).await;
    let res = client
        .post(format!("{}/personnel/batch/population", BASE_URL))
        .json(&json!({ "ids": [person_id], "populationId": population_id }))
        .send()
        .await
        .expect("batch assign");
    let outcome: Value = res.json().await.expect("json body");
    assert_eq!(outcome["successCount"], 1);

    let res = client
        .delete(format!("{}/populations/{}", BASE_URL, population_id))
        .send()
        .await
        .expect("delete population");
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(
        body["error"],
        "Cannot delete population - there are people assigned to it"
    );
    assert_eq!(body["assigned_count"], 1);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn skill_certification_round_trip_updates_qualified_count() {
    let client = reqwest::Client::new();
    let stamp = chrono::Utc::now().timestamp_nanos_opt().unwrap();

    let res = client
        .post(format!("{}/skills", BASE_URL))
        .json(&json!({ "name": format!("Medic-{}", stamp) }))
        .send()
        .await
        .expect("create skill");
    let body: Value = res.json().await.expect("json body");
    let skill_id = body["id"].as_i64().expect("skill id");

    let person_id = create_person(&client, "Trainee", &format!("tr-{}", stamp)).await;

    let res = client
        .post(format!("{}/personnel/{}/skills", BASE_URL, person_id))
        .json(&json!({ "skill_id": skill_id, "status": "בתהליך הסמכה" }))
        .send()
        .await
        .expect("assign skill");
    assert!(res.status().is_success());

    let res = client
        .get(format!("{}/skills/{}", BASE_URL, skill_id))
        .send()
        .await
        .expect("get skill");
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["qualified_count"], 0);

    let res = client
        .put(format!(
            "{}/personnel/{}/skills/{}",
            BASE_URL, person_id, skill_id
        ))
        .json(&json!({ "status": "מוסמך כשיר" }))
        .send()
        .await
        .expect("certify");
    assert!(res.status().is_success());

    let res = client
        .get(format!("{}/skills/{}", BASE_URL, skill_id))
        .send()
        .await
        .expect("get skill");
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["qualified_count"], 1);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn one_constraint_per_person_per_date() {
    let client = reqwest::Client::new();
    let stamp = chrono::Utc::now().timestamp_nanos_opt().unwrap();
    let person_id = create_person(&client, "Constrained", &format!("cn-{}", stamp)).await;

    let body = json!({
        "person_id": person_id,
        "date": "2025-09-03",
        "type": "vacation",
        "is_full_day": true
    });
    let res = client
        .post(format!("{}/constraints", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("create constraint");
    assert_eq!(res.status(), 201);

    let res = client
        .post(format!("{}/constraints", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("second constraint");
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(
        body["error"],
        "Constraint already exists for this person on this date"
    );
}

#[tokio::test]
#[ignore = "requires running server"]
async fn schedule_is_lazily_initialized_with_default_block() {
    let client = reqwest::Client::new();
    let stamp = chrono::Utc::now().timestamp_nanos_opt().unwrap();

    let res = client
        .post(format!("{}/positions", BASE_URL))
        .json(&json!({
            "name": format!("Gate-{}", stamp),
            "role_holders": [{ "name": "Guard", "qualification_ids": [1] }]
        }))
        .send()
        .await
        .expect("create position");
    let body: Value = res.json().await.expect("json body");
    let position_id = body["id"].as_i64().expect("position id");

    let res = client
        .get(format!(
            "{}/schedule?positionId={}&weekStart=2025-09-07",
            BASE_URL, position_id
        ))
        .send()
        .await
        .expect("get schedule");
    assert!(res.status().is_success());
    let body: Value = res.json().await.expect("json body");

    let ranges = body["timeRanges"].as_array().expect("timeRanges");
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0]["start"], "08:00");
    assert_eq!(ranges[0]["end"], "14:00");
    assert!(body["scheduleWeekId"].as_i64().is_some());
    assert_eq!(body["roleHolders"].as_array().expect("roleHolders").len(), 1);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn slot_conflicts_apply_per_day() {
    let client = reqwest::Client::new();
    let stamp = chrono::Utc::now().timestamp_nanos_opt().unwrap();

    let res = client
        .post(format!("{}/positions", BASE_URL))
        .json(&json!({
            "name": format!("Watch-{}", stamp),
            "role_holders": [{ "name": "Lookout", "qualification_ids": [1] }]
        }))
        .send()
        .await
        .expect("create position");
    let body: Value = res.json().await.expect("json body");
    let position_id = body["id"].as_i64().expect("position id");

    // Materialize the week and its default block.
    let res = client
        .get(format!(
            "{}/schedule?positionId={}&weekStart=2025-09-14",
            BASE_URL, position_id
        ))
        .send()
        .await
        .expect("get schedule");
    let schedule: Value = res.json().await.expect("json body");
    let role_id = schedule["roleHolders"][0]["id"].as_i64().expect("role id");
    let person_id = create_person(&client, "Watch Stander", &format!("ws-{}", stamp)).await;

    let assignment = |date: &str| {
        json!({
            "positionId": position_id,
            "weekStart": "2025-09-14",
            "roleHolderId": role_id,
            "date": date,
            "start": "08:00",
            "end": "14:00",
            "personnelId": person_id
        })
    };

    let res = client
        .post(format!("{}/assignments", BASE_URL))
        .json(&assignment("2025-09-15"))
        .send()
        .await
        .expect("first assignment");
    assert_eq!(res.status(), 201);

    let res = client
        .post(format!("{}/assignments", BASE_URL))
        .json(&assignment("2025-09-15"))
        .send()
        .await
        .expect("conflicting assignment");
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["error"], "This slot is already assigned");

    // Same slot on a different day is fine.
    let res = client
        .post(format!("{}/assignments", BASE_URL))
        .json(&assignment("2025-09-16"))
        .send()
        .await
        .expect("next-day assignment");
    assert_eq!(res.status(), 201);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn last_time_range_cannot_be_deleted() {
    let client = reqwest::Client::new();
    let stamp = chrono::Utc::now().timestamp_nanos_opt().unwrap();

    let res = client
        .post(format!("{}/positions", BASE_URL))
        .json(&json!({
            "name": format!("Tower-{}", stamp),
            "role_holders": [{ "name": "Spotter", "qualification_ids": [1] }]
        }))
        .send()
        .await
        .expect("create position");
    let body: Value = res.json().await.expect("json body");
    let position_id = body["id"].as_i64().expect("position id");

    let res = client
        .get(format!(
            "{}/schedule?positionId={}&weekStart=2025-09-21",
            BASE_URL, position_id
        ))
        .send()
        .await
        .expect("get schedule");
    let schedule: Value = res.json().await.expect("json body");
    let block_id = schedule["timeRanges"][0]["id"].as_i64().expect("block id");

    let res = client
        .delete(format!("{}/time-ranges/{}", BASE_URL, block_id))
        .send()
        .await
        .expect("delete last block");
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(
        body["error"],
        "Cannot delete the last time range. At least one time range must exist."
    );

    // With a second block in place the first one can go.
    let res = client
        .post(format!("{}/time-ranges", BASE_URL))
        .json(&json!({
            "positionId": position_id,
            "weekStart": "2025-09-21",
            "start": "14:00",
            "end": "20:00"
        }))
        .send()
        .await
        .expect("create second block");
    assert_eq!(res.status(), 201);

    let res = client
        .delete(format!("{}/time-ranges/{}", BASE_URL, block_id))
        .send()
        .await
        .expect("delete first block");
    assert!(res.status().is_success());
}
