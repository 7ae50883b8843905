use plan_extract::{extract_plan, ExtractError};

#[test]
fn well_formed_plan_round_trips() {
    let raw = r#"{
        "workstreams": [
            {
                "id": "A",
                "title": "Discovery",
                "description": "Understand the problem.",
                "deliverables": [
                    { "id": "A1", "title": "Interviews", "description": "Talk to users." },
                    { "id": "A2", "title": "Findings", "description": "Write them up." }
                ]
            },
            {
                "id": "B",
                "title": "Build",
                "description": "Ship it.",
                "deliverables": [
                    { "id": "B1", "title": "Prototype", "description": "First cut." }
                ]
            }
        ]
    }"#;

    let plan = extract_plan(raw).unwrap();
    assert_eq!(plan.workstreams.len(), 2);
    assert_eq!(plan.workstreams[0].id, "A");
    assert_eq!(plan.workstreams[0].title, "Discovery");
    assert_eq!(plan.workstreams[0].deliverables.len(), 2);
    assert_eq!(plan.workstreams[1].id, "B");
    assert_eq!(plan.workstreams[1].deliverables[0].id, "B1");
}

#[test]
fn tolerates_fences_and_surrounding_prose() {
    let raw = "Sure, here you go:\n```json\n{\"workstreams\":[{\"id\":\"A\",\"title\":\"Kickoff\",\"description\":\"\",\"deliverables\":[]}]}\n```\nHope that helps!";
    let plan = extract_plan(raw).unwrap();
    assert_eq!(plan.workstreams.len(), 1);
    assert_eq!(plan.workstreams[0].title, "Kickoff");
    assert!(plan.workstreams[0].deliverables.is_empty());
}

#[test]
fn blank_title_workstream_is_dropped_whole() {
    let raw = r#"{"workstreams": [
        { "id": "A", "title": "Keep me", "description": "", "deliverables": [] },
        { "id": "B", "title": "   ", "description": "gone", "deliverables": [
            { "id": "B1", "title": "Orphan", "description": "" }
        ] },
        { "id": "C", "title": "Also kept", "description": "", "deliverables": [] }
    ]}"#;

    let plan = extract_plan(raw).unwrap();
    let titles: Vec<&str> = plan
        .workstreams
        .iter()
        .map(|ws| ws.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Keep me", "Also kept"]);
}

#[test]
fn blank_title_deliverable_is_dropped() {
    let raw = r#"{"workstreams": [
        { "id": "A", "title": "WS", "description": "", "deliverables": [
            { "id": "A1", "title": "", "description": "dropped" },
            { "id": "A2", "title": "Survivor", "description": "" }
        ] }
    ]}"#;

    let plan = extract_plan(raw).unwrap();
    assert_eq!(plan.workstreams[0].deliverables.len(), 1);
    assert_eq!(plan.workstreams[0].deliverables[0].id, "A2");
}

#[test]
fn missing_workstream_id_gets_position_letter() {
    let raw = r#"{"workstreams": [
        { "id": "X", "title": "First", "description": "" },
        { "id": " ", "title": "Second", "description": "" },
        { "title": "Third", "description": "" }
    ]}"#;

    let plan = extract_plan(raw).unwrap();
    assert_eq!(plan.workstreams[0].id, "X");
    assert_eq!(plan.workstreams[1].id, "B");
    assert_eq!(plan.workstreams[2].id, "C");
}

#[test]
fn missing_deliverable_id_gets_workstream_prefix() {
    let raw = r#"{"workstreams": [
        { "id": "B", "title": "WS", "description": "", "deliverables": [
            { "id": "keep", "title": "First", "description": "" },
            { "title": "Second", "description": "" }
        ] }
    ]}"#;

    let plan = extract_plan(raw).unwrap();
    let deliverables = &plan.workstreams[0].deliverables;
    assert_eq!(deliverables[0].id, "keep");
    assert_eq!(deliverables[1].id, "B2");
}

#[test]
fn fields_are_trimmed() {
    let raw = r#"{"workstreams": [
        { "id": " A ", "title": "  Padded  ", "description": " desc " }
    ]}"#;

    let plan = extract_plan(raw).unwrap();
    assert_eq!(plan.workstreams[0].id, "A");
    assert_eq!(plan.workstreams[0].title, "Padded");
    assert_eq!(plan.workstreams[0].description, "desc");
}

#[test]
fn no_braces_is_no_json_object() {
    let err = extract_plan("I could not produce a plan, sorry.").unwrap_err();
    assert!(matches!(err, ExtractError::NoJsonObject));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = extract_plan("{\"workstreams\": [oops]}").unwrap_err();
    assert!(matches!(err, ExtractError::Json(_)));
}

#[test]
fn missing_workstreams_array_fails_validation() {
    let err = extract_plan("{\"plan\": []}").unwrap_err();
    assert!(matches!(err, ExtractError::MissingWorkstreams));

    let err = extract_plan("{\"workstreams\": \"not an array\"}").unwrap_err();
    assert!(matches!(err, ExtractError::MissingWorkstreams));
}

#[test]
fn empty_workstreams_is_not_a_plan() {
    let raw = "prose ```json {\"workstreams\":[]} ``` more prose";
    let err = extract_plan(raw).unwrap_err();
    assert!(matches!(err, ExtractError::EmptyPlan));
}

#[test]
fn all_titles_blank_is_not_a_plan() {
    let raw = r#"{"workstreams": [
        { "id": "A", "title": "", "description": "x" },
        { "id": "B", "title": "  ", "description": "y" }
    ]}"#;
    let err = extract_plan(raw).unwrap_err();
    assert!(matches!(err, ExtractError::EmptyPlan));
}
