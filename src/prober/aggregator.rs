//! Probe aggregation: concurrent fan-out/fan-in across all configured
//! services.

use std::sync::Arc;

use futures_util::future::join_all;

use crate::prober::http::{HttpProber, HyperHttpProber};
use crate::prober::outcome::{AggregationResult, ProbeOutcome};
use crate::prober::service::{ServiceDescriptor, ServiceList};
use crate::prober::tcp::{TcpProber, TokioTcpProber};

/// Owns the service list and the per-protocol probe capabilities; turns N
/// independent probe outcomes into one verdict.
pub struct Aggregator {
    services: ServiceList,
    tcp: Arc<dyn TcpProber>,
    http: Arc<dyn HttpProber>,
}

impl Aggregator {
    pub fn new(services: ServiceList, tcp: Arc<dyn TcpProber>, http: Arc<dyn HttpProber>) -> Self {
        Self { services, tcp, http }
    }

    /// Aggregator wired to the real network capabilities.
    pub fn with_network_probers(services: ServiceList) -> Self {
        Self::new(services, Arc::new(TokioTcpProber), Arc::new(HyperHttpProber::new()))
    }

    /// Run one probe round: every descriptor is probed concurrently under
    /// its own timeout, and the round blocks until all probes have finished.
    /// A failing probe does not cancel its siblings and is never retried.
    ///
    /// Diagnostics come back in descriptor order (`join_all` preserves input
    /// order), one entry per failing probe. The round itself cannot fail.
    pub async fn run_round(&self) -> AggregationResult {
        let outcomes = join_all(self.services.iter().map(|service| self.probe_one(service))).await;

        let mut failures = Vec::new();
        for outcome in &outcomes {
            if let Some(diagnostic) = outcome.diagnostic() {
                tracing::warn!(
                    service = %outcome.service_name,
                    status = ?outcome.status,
                    "probe failed"
                );
                failures.push(diagnostic);
            }
        }

        AggregationResult { healthy: failures.is_empty(), failures }
    }

    async fn probe_one(&self, service: &ServiceDescriptor) -> ProbeOutcome {
        let timeout = service.timeout();
        let reply = match service {
            ServiceDescriptor::Tcp(tcp) => self.tcp.probe(&tcp.host, tcp.port, timeout).await,
            ServiceDescriptor::Http(http) => {
                self.http.probe(&http.url, &http.headers, timeout).await
            }
        };
        ProbeOutcome {
            service_name: service.name().to_string(),
            status: reply.status,
            detail: reply.detail,
            error: reply.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prober::outcome::{ProbeReply, ProbeStatus};
    use crate::prober::service::{HttpService, TcpService};
    use async_trait::async_trait;
    use std::time::{Duration, Instant};
    use url::Url;

    /// Prober that answers every probe with the same scripted reply.
    struct ScriptedProber(ProbeReply);

    #[async_trait]
    impl TcpProber for ScriptedProber {
        async fn probe(&self, _host: &str, _port: u16, _timeout: Duration) -> ProbeReply {
            self.0.clone()
        }
    }

    #[async_trait]
    impl HttpProber for ScriptedProber {
        async fn probe(
            &self,
            _url: &Url,
            _headers: &[(String, String)],
            _timeout: Duration,
        ) -> ProbeReply {
            self.0.clone()
        }
    }

    /// Prober that sleeps before answering, for latency assertions.
    struct SlowProber(Duration);

    #[async_trait]
    impl TcpProber for SlowProber {
        async fn probe(&self, _host: &str, _port: u16, _timeout: Duration) -> ProbeReply {
            tokio::time::sleep(self.0).await;
            ProbeReply::success("connection established")
        }
    }

    fn tcp_service(name: &str) -> ServiceDescriptor {
        ServiceDescriptor::Tcp(TcpService {
            name: name.to_string(),
            host: "127.0.0.1".to_string(),
            port: 9042,
            timeout: Duration::from_secs(1),
        })
    }

    fn http_service(name: &str) -> ServiceDescriptor {
        ServiceDescriptor::Http(HttpService {
            name: name.to_string(),
            url: Url::parse("http://127.0.0.1:27017/health").unwrap(),
            headers: vec![],
            timeout: Duration::from_secs(1),
        })
    }

    fn aggregator(
        services: Vec<ServiceDescriptor>,
        tcp: ProbeReply,
        http: ProbeReply,
    ) -> Aggregator {
        Aggregator::new(
            ServiceList::new(services),
            Arc::new(ScriptedProber(tcp)),
            Arc::new(ScriptedProber(http)),
        )
    }

    #[tokio::test]
    async fn test_all_success_is_healthy_with_no_diagnostics() {
        let agg = aggregator(
            vec![tcp_service("casandra"), http_service("mongo")],
            ProbeReply::success("connection established"),
            ProbeReply::success("HTTP probe returned 200 OK"),
        );

        let result = agg.run_round().await;
        assert!(result.healthy);
        assert!(result.failures.is_empty());
    }

    #[tokio::test]
    async fn test_one_failure_makes_round_unhealthy() {
        let agg = aggregator(
            vec![tcp_service("casandra"), http_service("mongo")],
            ProbeReply::failure("message"),
            ProbeReply::success("HTTP probe returned 200 OK"),
        );

        let result = agg.run_round().await;
        assert!(!result.healthy);
        assert_eq!(result.failures, vec!["casandra message\n".to_string()]);
    }

    #[tokio::test]
    async fn test_error_with_success_status_still_fails_round() {
        let reply = ProbeReply {
            status: ProbeStatus::Success,
            detail: String::new(),
            error: Some("probe error".to_string()),
        };
        let agg = aggregator(
            vec![http_service("mongo")],
            ProbeReply::success("connection established"),
            reply,
        );

        let result = agg.run_round().await;
        assert!(!result.healthy);
        assert_eq!(result.failures, vec!["probe error".to_string()]);
    }

    #[tokio::test]
    async fn test_diagnostics_follow_descriptor_order() {
        let agg = aggregator(
            vec![
                tcp_service("casandra"),
                http_service("mongo"),
                tcp_service("redis"),
            ],
            ProbeReply::failure("message"),
            ProbeReply::failure("message"),
        );

        let result = agg.run_round().await;
        assert_eq!(
            result.failures,
            vec![
                "casandra message\n".to_string(),
                "mongo message\n".to_string(),
                "redis message\n".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_diagnostic_names_the_failing_service() {
        let agg = aggregator(
            vec![tcp_service("casandra")],
            ProbeReply::failure("connection refused"),
            ProbeReply::success("unused"),
        );

        let result = agg.run_round().await;
        assert!(result.failures[0].contains("casandra"));
    }

    #[tokio::test]
    async fn test_probes_run_concurrently_not_sequentially() {
        let delay = Duration::from_millis(200);
        let services: Vec<_> = (0..4).map(|i| tcp_service(&format!("svc-{}", i))).collect();
        let agg = Aggregator::new(
            ServiceList::new(services),
            Arc::new(SlowProber(delay)),
            Arc::new(ScriptedProber(ProbeReply::success("unused"))),
        );

        let start = Instant::now();
        let result = agg.run_round().await;
        let elapsed = start.elapsed();

        assert!(result.healthy);
        // Four 200ms probes in parallel finish in ~200ms, far under the
        // 800ms a sequential round would take.
        assert!(elapsed >= delay);
        assert!(elapsed < delay * 3, "round took {:?}, probes ran sequentially?", elapsed);
    }

    #[tokio::test]
    async fn test_empty_service_list_is_healthy() {
        let agg = aggregator(
            vec![],
            ProbeReply::failure("unused"),
            ProbeReply::failure("unused"),
        );

        let result = agg.run_round().await;
        assert!(result.healthy);
        assert!(result.failures.is_empty());
    }
}
