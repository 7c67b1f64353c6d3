use camino::Utf8PathBuf;
use graph_models::roundtrip::{check_payload, check_tree};
use std::fs;

#[test]
fn check_payload_reports_type_and_unknown_keys() {
    let report = check_payload(
        r##"{"@odata.type": "#microsoft.graph.servicePrincipal", "appId": "a", "@odata.etag": "W/1"}"##,
    )
    .expect("check");
    assert_eq!(report.type_name, "ServicePrincipal");
    assert_eq!(report.discriminator.as_deref(), Some("#microsoft.graph.servicePrincipal"));
    assert_eq!(report.additional_keys, vec!["@odata.etag".to_string()]);
    assert!(report.stable);
}

#[test]
fn check_payload_propagates_decode_errors() {
    let err = check_payload(r##"{"@odata.type": "#microsoft.graph.user", "accountEnabled": 1}"##)
        .expect_err("bad bool");
    let message = format!("{:#}", err);
    assert!(message.contains("accountEnabled"), "{message}");
}

#[test]
fn check_tree_walks_json_files_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 tempdir");

    fs::create_dir_all(root.join("users")).expect("mkdir");
    fs::write(
        root.join("users/ada.json"),
        r##"{"@odata.type": "#microsoft.graph.user", "id": "u1", "displayName": "Ada"}"##,
    )
    .expect("write");
    fs::write(
        root.join("page.json"),
        r##"{"value": [{"@odata.type": "#microsoft.graph.group", "id": "g1"}]}"##,
    )
    .expect("write");
    fs::write(root.join("broken.json"), r#"{"id": 5}"#).expect("write");
    fs::write(root.join("notes.txt"), "not a payload").expect("write");

    let reports = check_tree(&root).expect("check tree");
    let names: Vec<&str> = reports
        .iter()
        .map(|r| r.path.strip_prefix(&root).expect("below root").as_str())
        .collect();
    assert_eq!(names, vec!["broken.json", "page.json", "users/ada.json"]);

    assert!(!reports[0].passed());
    assert!(reports[0].error.as_deref().is_some_and(|e| e.contains("broken.json")));
    assert!(reports[1].passed());
    assert_eq!(
        reports[1].report.as_ref().map(|r| r.type_name.as_str()),
        Some("CollectionResponse")
    );
    assert!(reports[2].passed());

    let json = serde_json::to_value(&reports).expect("reports serialize");
    assert!(json[0].get("report").is_none());
    assert_eq!(json[2]["report"]["type_name"], "User");
}
