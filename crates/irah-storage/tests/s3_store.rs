//! Integration tests against a real S3 bucket.
//!
//! These tests require valid AWS credentials and a writable bucket named in
//! `IRAH_TEST_BUCKET`.
//!
//! Run with: `cargo test -p irah-storage --test s3_store -- --ignored`

use irah_core::models::observation::ClinicalObservation;
use irah_core::models::record::EvaluationRecord;
use irah_core::models::score::{RiskTier, ScoreResult};
use irah_storage::client::build_client;
use irah_storage::s3::S3RecordStore;
use irah_storage::store::RecordStore;

#[tokio::test]
#[ignore]
async fn append_then_load_round_trips() {
    let bucket = std::env::var("IRAH_TEST_BUCKET").expect("IRAH_TEST_BUCKET must be set");
    let region = std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
    let client = build_client(&region, None).await;

    let key = format!("irah-test/{}.jsonl", jiff::Timestamp::now().as_millisecond());
    let store = S3RecordStore::new(client, bucket, key);

    let result = ScoreResult {
        index: 0.0,
        tier: RiskTier::Low,
    };
    let observation = ClinicalObservation {
        mrc: 60,
        ..ClinicalObservation::default()
    };
    for case_id in ["S3-1", "S3-2"] {
        let record =
            EvaluationRecord::new(case_id, jiff::Timestamp::now(), &observation, &result).unwrap();
        store.append(&record).await.expect("append should succeed");
    }

    let records = store.load_all().await.expect("load should succeed");
    let ids: Vec<_> = records.iter().map(|r| r.case_id.as_str()).collect();
    assert_eq!(ids, ["S3-1", "S3-2"]);
}
