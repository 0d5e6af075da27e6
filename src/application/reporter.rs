//! Price Reporter
//!
//! The single use case: fetch the asset list, order stablecoins first, and
//! print a price line for every allow-listed symbol.

use crate::domain::{render, sort_by_stability, AllowList, ReportRow};
use crate::ports::{AssetSource, AssetSourceError};

pub struct PriceReporter<S> {
    source: S,
    allow_list: AllowList,
}

impl<S: AssetSource> PriceReporter<S> {
    pub fn new(source: S, allow_list: AllowList) -> Self {
        Self { source, allow_list }
    }

    /// Fetch, project, sort, and format. Returns the output lines in print
    /// order without writing anything.
    pub async fn collect(&self) -> Result<Vec<String>, AssetSourceError> {
        let records = self.source.fetch_assets().await?;
        tracing::debug!(count = records.len(), "fetched asset records");

        let mut rows: Vec<ReportRow> = records.into_iter().map(ReportRow::from).collect();
        sort_by_stability(&mut rows);

        Ok(render(&rows, &self.allow_list))
    }

    /// Run one report, printing each line to stdout.
    ///
    /// Failures are logged and swallowed: a broken or unreachable backend
    /// produces zero lines and a normal return, never a crash.
    pub async fn run(&self) {
        match self.collect().await {
            Ok(lines) => {
                for line in &lines {
                    println!("{}", line);
                }
                tracing::info!(lines = lines.len(), "price report complete");
            }
            Err(error) => {
                tracing::error!(%error, "price report failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockAssetSource;

    #[tokio::test]
    async fn test_collect_spec_scenario() {
        let source = MockAssetSource::new().with_json(
            r#"[
                {"symbol":"BNB","price":600,"stable":false},
                {"symbol":"GMD","price":1,"stable":true},
                {"symbol":"OTHER","price":5,"stable":false}
            ]"#,
        );
        let reporter = PriceReporter::new(source, AllowList::default());

        let lines = reporter.collect().await.unwrap();
        assert_eq!(lines, vec!["Token: GMD Price: 1", "Token: BNB Price: 600"]);
    }

    #[tokio::test]
    async fn test_collect_empty_feed() {
        let source = MockAssetSource::new().with_json("[]");
        let reporter = PriceReporter::new(source, AllowList::default());

        let lines = reporter.collect().await.unwrap();
        assert!(lines.is_empty());
    }

    #[tokio::test]
    async fn test_collect_no_allow_listed_symbols() {
        let source = MockAssetSource::new()
            .with_json(r#"[{"symbol":"DOGE","price":0.1,"stable":false}]"#);
        let reporter = PriceReporter::new(source, AllowList::default());

        let lines = reporter.collect().await.unwrap();
        assert!(lines.is_empty());
    }

    #[tokio::test]
    async fn test_collect_stable_ordering_regardless_of_feed_order() {
        let source = MockAssetSource::new().with_json(
            r#"[
                {"symbol":"BEAR","price":3,"stable":false},
                {"symbol":"BNB","price":600,"stable":false},
                {"symbol":"ACS","price":2,"stable":true},
                {"symbol":"GMD","price":1,"stable":true}
            ]"#,
        );
        let reporter = PriceReporter::new(source, AllowList::default());

        let lines = reporter.collect().await.unwrap();
        assert_eq!(
            lines,
            vec![
                "Token: ACS Price: 2",
                "Token: GMD Price: 1",
                "Token: BEAR Price: 3",
                "Token: BNB Price: 600",
            ]
        );
    }

    #[tokio::test]
    async fn test_collect_is_idempotent() {
        let source = MockAssetSource::new().with_json(
            r#"[
                {"symbol":"BNB","price":600,"stable":false},
                {"symbol":"GMD","price":1,"stable":true}
            ]"#,
        );
        let reporter = PriceReporter::new(source, AllowList::default());

        let first = reporter.collect().await.unwrap();
        let second = reporter.collect().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_collect_propagates_source_error() {
        let source = MockAssetSource::new().with_request_error("connection refused");
        let reporter = PriceReporter::new(source, AllowList::default());

        let result = reporter.collect().await;
        assert!(matches!(result, Err(AssetSourceError::Request(_))));
    }

    #[tokio::test]
    async fn test_run_swallows_source_error() {
        let source = MockAssetSource::new().with_request_error("connection refused");
        let reporter = PriceReporter::new(source, AllowList::default());

        // Must return normally; the error is logged, not propagated.
        reporter.run().await;
    }

    #[tokio::test]
    async fn test_collect_custom_allow_list() {
        let source = MockAssetSource::new().with_json(
            r#"[
                {"symbol":"BNB","price":600,"stable":false},
                {"symbol":"GMD","price":1,"stable":true}
            ]"#,
        );
        let reporter = PriceReporter::new(source, AllowList::new(["BNB"]));

        let lines = reporter.collect().await.unwrap();
        assert_eq!(lines, vec!["Token: BNB Price: 600"]);
    }
}
