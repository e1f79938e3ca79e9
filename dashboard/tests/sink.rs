use dashboard::sink::{FileSink, PayloadSink};
use serde_json::json;
use std::fs;

#[tokio::test]
async fn file_sink_replaces_the_previous_payload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payload.json");
    let mut sink = FileSink::new(path.to_str().unwrap());

    sink.publish(&json!({ "summary": { "month": 1 } })).await.unwrap();
    sink.publish(&json!({ "summary": { "month": 2 } })).await.unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(doc["summary"]["month"], 2);
}
