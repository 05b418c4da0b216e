// Fetch module tests.

use std::sync::Arc;

use super::testing::StaticLists;
use super::*;
use crate::error_handling::CollectError;

fn urls(list: &[&str]) -> Vec<String> {
    list.iter().map(|u| u.to_string()).collect()
}

#[tokio::test]
async fn test_collect_all_merges_in_input_order() {
    let lists = Arc::new(
        StaticLists::new()
            .with("https://lists/a", "a.com\nshared.com # both\n")
            .with("https://lists/b", "# b list\nb.com\nshared.com\n"),
    );

    let lines = collect_all(&lists, &urls(&["https://lists/a", "https://lists/b"]))
        .await
        .unwrap();

    assert_eq!(lines, vec!["a.com", "shared.com", "b.com", "shared.com"]);
}

#[tokio::test]
async fn test_collect_all_fails_when_one_of_three_fails() {
    let lists = Arc::new(
        StaticLists::new()
            .with("https://lists/a", "a.com\n")
            .with("https://lists/c", "c.com\n"),
    );

    let result = collect_all(
        &lists,
        &urls(&["https://lists/a", "https://lists/missing", "https://lists/c"]),
    )
    .await;

    match result {
        Err(CollectError::Fetch {
            failed,
            total,
            source,
        }) => {
            assert_eq!(failed, 1);
            assert_eq!(total, 3);
            assert_eq!(source.url(), "https://lists/missing");
        }
        other => panic!("expected a batch failure, got {other:?}"),
    }

    // Every fetch still ran to completion
    assert_eq!(lists.total_hits(), 3);
}

#[tokio::test]
async fn test_collect_all_reports_first_failure_in_input_order() {
    let lists = Arc::new(StaticLists::new().with("https://lists/ok", "ok.com\n"));

    let err = collect_all(
        &lists,
        &urls(&["https://lists/ok", "https://lists/x", "https://lists/y"]),
    )
    .await
    .unwrap_err();

    match err {
        CollectError::Fetch { failed, source, .. } => {
            assert_eq!(failed, 2);
            assert_eq!(source.url(), "https://lists/x");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_collect_all_empty_input() {
    let lists = Arc::new(StaticLists::new());
    let lines = collect_all(&lists, &[]).await.unwrap();
    assert!(lines.is_empty());
    assert_eq!(lists.total_hits(), 0);
}

#[tokio::test]
async fn test_collect_all_fetches_each_url_once() {
    let lists = Arc::new(
        StaticLists::new()
            .with("https://lists/a", "a.com\n")
            .with("https://lists/b", "b.com\n"),
    );

    collect_all(&lists, &urls(&["https://lists/a", "https://lists/b"]))
        .await
        .unwrap();

    assert_eq!(lists.hits("https://lists/a"), 1);
    assert_eq!(lists.hits("https://lists/b"), 1);
}
