use formcoach_core::*;
use serde_json::json;

#[test]
fn smoke_extract_angles_from_named_keypoints() {
    // Strakt venstre bein rett ned i bildekoordinater.
    let keypoints = json!([
        { "name": "left_hip", "x": 0.5, "y": 0.3, "score": 0.9 },
        { "name": "left_knee", "x": 0.5, "y": 0.5, "score": 0.9 },
        { "name": "left_ankle", "x": 0.5, "y": 0.7, "score": 0.9 }
    ]);

    let out = extract_angles_json(&keypoints.to_string(), None, None).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(v["Knee"].as_f64().unwrap().round(), 180.0);
    // Hofte/albue/skulder usynlige → nøytral baseline.
    assert_eq!(v["Hip"].as_f64().unwrap(), 180.0);
}

#[test]
fn smoke_camel_case_and_previous_round_trip() {
    let keypoints = json!([
        { "part": "leftHip", "x": 0.0, "y": 0.0, "confidence": 0.8 },
        { "part": "leftKnee", "x": 0.0, "y": 1.0, "confidence": 0.8 },
        { "part": "leftAnkle", "x": 1.0, "y": 1.0, "confidence": 0.8 }
    ]);
    let previous = json!({ "Hip": 95.0, "Knee": 33.0, "Elbow": 170.0, "Shoulder": 160.0 });

    let out =
        extract_angles_json(&keypoints.to_string(), Some(&previous.to_string()), None).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(v["Knee"].as_f64().unwrap().round(), 90.0);
    // Usette ledd bæres frem fra previous.
    assert_eq!(v["Hip"].as_f64().unwrap(), 95.0);
    assert_eq!(v["Elbow"].as_f64().unwrap(), 170.0);
}

#[test]
fn smoke_movenet_triple_matrix_form() {
    // 17 rader [y, x, score]; alt under terskel unntatt venstre bein.
    let mut rows = vec![[0.0f64, 0.0, 0.0]; 17];
    rows[11] = [0.0, 0.0, 0.9]; // left_hip
    rows[13] = [1.0, 0.0, 0.9]; // left_knee
    rows[15] = [2.0, 0.0, 0.9]; // left_ankle

    let out = extract_angles_json(&serde_json::to_string(&rows).unwrap(), None, None).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["Knee"].as_f64().unwrap().round(), 180.0);
}

#[test]
fn smoke_score_accuracy_policies() {
    let angles = json!({ "Hip": 81.0, "Knee": 36.0, "Elbow": 153.0, "Shoulder": 171.0 });
    let reference = json!({ "Hip": 90.0, "Knee": 90.0, "Elbow": 180.0, "Shoulder": 180.0 });

    let mean = score_accuracy_json(&angles.to_string(), &reference.to_string(), None).unwrap();
    let v: serde_json::Value = serde_json::from_str(&mean).unwrap();
    assert_eq!(v["Hip"], 90);
    assert_eq!(v["Knee"], 40);
    assert_eq!(v["Elbow"], 85);
    assert_eq!(v["Shoulder"], 95);
    assert_eq!(v["overall"], 77);

    let min =
        score_accuracy_json(&angles.to_string(), &reference.to_string(), Some("min")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&min).unwrap();
    assert_eq!(v["overall"], 40);
}

#[test]
fn smoke_invalid_reference_is_rejected_with_path() {
    let angles = json!({ "Hip": 90.0, "Knee": 90.0, "Elbow": 180.0, "Shoulder": 180.0 });
    let reference = json!({ "Hip": 90.0, "Knee": 0.0, "Elbow": 180.0, "Shoulder": 180.0 });

    let err = score_accuracy_json(&angles.to_string(), &reference.to_string(), None).unwrap_err();
    assert!(err.to_string().contains("knee"), "{err}");
}

#[test]
fn smoke_exercise_catalog() {
    let out = exercise_catalog_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    let entries = v.as_array().unwrap();
    assert_eq!(entries.len(), 3);

    let squats = &entries[0];
    assert_eq!(squats["name"], "Squats");
    assert_eq!(squats["reference_angles"]["Knee"], 90.0);
    assert_eq!(squats["rep_joint"], "Knee");
    assert!(!squats["instructions"].as_array().unwrap().is_empty());
}

#[test]
fn smoke_partition_feedback() {
    let feedback = json!([
        { "text": "CORRECT — keep up the good form", "status": "good" },
        { "text": "Straighten your knee slightly", "status": "warning" },
        { "text": "No hip detected. Adjust your position so your hip is visible.", "status": "error" }
    ]);

    let out = partition_feedback_json(&feedback.to_string()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["good"].as_array().unwrap().len(), 1);
    assert_eq!(v["needs_improvement"].as_array().unwrap().len(), 2);
}

#[test]
fn smoke_malformed_keypoints_report_field_path() {
    let err = extract_angles_json(r#"[{"name":"left_hip","x":"oops","y":0.0}]"#, None, None)
        .unwrap_err();
    assert!(matches!(err, JsonError::Parse { context: "keypoints", .. }), "{err}");
}
