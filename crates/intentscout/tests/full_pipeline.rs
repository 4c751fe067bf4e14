mod common;

use common::{sample_config, sample_messages, ChattyModel, KeywordEncoder, TopicModel};
use intentscout_cluster::{KMeans, Partitioner};
use intentscout_core::{parse_corpus, Action, ClusterOutcome, CorpusSchema};
use intentscout_embed::{Encoder, HashingEncoder};
use intentscout_pipeline::Pipeline;
use intentscout_report::read_report;

#[tokio::test]
async fn test_three_messages_two_clusters() {
    let (model, prompts) = TopicModel::new();
    let mut pipeline = Pipeline::new(
        sample_config(2),
        Box::new(KeywordEncoder),
        Box::new(KMeans::new()),
        Box::new(model),
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("final_report.json");
    let run = pipeline
        .run_to_file(&sample_messages(), &output)
        .await
        .unwrap();

    // Both order questions share a cluster, the vegan question is alone
    assert_eq!(prompts.lock().unwrap().len(), 2);
    assert_eq!(run.report.len(), 2);
    let ids: Vec<usize> = run.report.entries().iter().map(|r| r.cluster_id).collect();
    assert_eq!(ids, vec![0, 1]);

    let vegan = run
        .report
        .entries()
        .iter()
        .find(|r| r.action == Action::CreateNew)
        .expect("vegan cluster should propose a new intent");
    assert_eq!(
        vegan.proposed_intent.as_deref(),
        Some("About Product -> Vegan Certification")
    );
    assert_eq!(vegan.examples, vec!["Is this cream vegan?".to_string()]);

    let orders = run
        .report
        .entries()
        .iter()
        .find(|r| r.action == Action::KeepExisting)
        .unwrap();
    assert_eq!(orders.examples.len(), 2);
    assert!(orders.proposed_intent.is_none());

    let on_disk = read_report(&output).unwrap();
    assert_eq!(on_disk, run.report);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let entries = raw.as_array().unwrap();
    assert!(entries
        .iter()
        .any(|e| e["action"] == "CREATE_NEW" && e["proposed_intent"].is_string()));
    assert!(entries
        .iter()
        .any(|e| e["action"] == "KEEP_EXISTING" && e.get("proposed_intent").is_none()));
}

const LOGISTICS_AND_INGREDIENTS: &str = r#"{"customer_messages":[
    {"current_human_message":"Where is my order?"},
    {"current_human_message":"When will my package arrive?"},
    {"current_human_message":"What ingredients are in this cream?"}
]}"#;

async fn run_logistics_and_ingredients(encoder: Box<dyn Encoder>) {
    let messages = parse_corpus(LOGISTICS_AND_INGREDIENTS, &CorpusSchema::default()).unwrap();
    let (model, prompts) = TopicModel::new();
    let mut pipeline = Pipeline::new(
        sample_config(2),
        encoder,
        Box::new(KMeans::new()),
        Box::new(model),
    )
    .unwrap();

    let run = pipeline.analyze_messages(&messages).await.unwrap();

    assert_eq!(prompts.lock().unwrap().len(), 2);
    assert_eq!(run.report.len(), 2);
    for entry in run.report.entries() {
        assert!(!entry.summary.trim().is_empty());
        assert!(matches!(
            entry.action,
            Action::KeepExisting | Action::CreateNew
        ));
    }

    let mut groups: Vec<Vec<String>> = run
        .report
        .entries()
        .iter()
        .map(|r| r.examples.clone())
        .collect();
    groups.sort_by_key(|g| std::cmp::Reverse(g.len()));
    assert_eq!(
        groups,
        vec![
            vec![
                "Where is my order?".to_string(),
                "When will my package arrive?".to_string(),
            ],
            vec!["What ingredients are in this cream?".to_string()],
        ]
    );
}

#[tokio::test]
async fn test_logistics_and_ingredients_split_with_hashing_encoder() {
    run_logistics_and_ingredients(Box::new(HashingEncoder::default())).await;
}

#[tokio::test]
async fn test_logistics_and_ingredients_split_with_keyword_encoder() {
    run_logistics_and_ingredients(Box::new(KeywordEncoder)).await;
}

#[tokio::test]
async fn test_unusable_answers_give_empty_report() {
    let mut pipeline = Pipeline::new(
        sample_config(2),
        Box::new(KeywordEncoder),
        Box::new(KMeans::new()),
        Box::new(ChattyModel),
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("final_report.json");
    let run = pipeline
        .run_to_file(&sample_messages(), &output)
        .await
        .unwrap();

    assert!(run.report.is_empty());
    assert_eq!(run.summary.skipped_malformed.len(), 2);
    assert!(run
        .outcomes
        .iter()
        .all(|o| matches!(o, ClusterOutcome::SkippedMalformed { .. })));
    assert_eq!(std::fs::read_to_string(&output).unwrap().trim(), "[]");
}

#[tokio::test]
async fn test_report_ids_ascending_and_in_range() {
    let texts = [
        "Where is my order?",
        "Package delivery is late",
        "Order shipped to wrong address",
        "Is this vegan?",
        "Cruelty free and vegan?",
        "hello there",
        "thanks a lot",
        "hello, thanks",
    ];
    let messages: Vec<_> = texts
        .iter()
        .enumerate()
        .map(|(i, t)| intentscout_core::Message::new(i, *t))
        .collect();

    let k = 4;
    let (model, _) = TopicModel::new();
    let mut pipeline = Pipeline::new(
        sample_config(k),
        Box::new(HashingEncoder::default()),
        Box::new(KMeans::new()),
        Box::new(model),
    )
    .unwrap();
    let run = pipeline.analyze_messages(&messages).await.unwrap();

    assert_eq!(run.outcomes.len(), k);
    let ids: Vec<usize> = run.report.entries().iter().map(|r| r.cluster_id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert!(ids.iter().all(|&id| id < k));
    for entry in run.report.entries() {
        assert!(!entry.examples.is_empty());
        assert!(entry.examples.len() <= pipeline.config().sample_size);
    }
}

#[test]
fn test_partition_is_deterministic_for_fixed_seed() {
    let texts: Vec<String> = sample_messages().into_iter().map(|m| m.text).collect();
    let vectors = HashingEncoder::default().encode(&texts).unwrap();

    let kmeans = KMeans::new();
    let first = kmeans.partition(&vectors, 2, 42).unwrap();
    let second = kmeans.partition(&vectors, 2, 42).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), texts.len());
}
