use chrono::{DateTime, Utc};

use super::model::{build_view_model, validate_payload, DashboardViewModel};
use super::source::{FetchError, MetricSource};

/// Fetch lifecycle of the overview
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready {
        refreshed_at: DateTime<Utc>,
    },
    Failed {
        message: String,
    },
}

/// Last good data plus where the current fetch stands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub view_model: Option<DashboardViewModel>,
    pub status: LoadStatus,
}

impl DashboardState {
    /// Enters `Loading`; returns false if a fetch is already in flight.
    pub fn begin_refresh(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.status = LoadStatus::Loading;
        true
    }

    /// A failed fetch keeps the previous view model on screen.
    pub fn apply(&mut self, result: Result<DashboardViewModel, FetchError>) {
        match result {
            Ok(view_model) => {
                self.view_model = Some(view_model);
                self.status = LoadStatus::Ready {
                    refreshed_at: Utc::now(),
                };
            }
            Err(e) => {
                log::error!("Dashboard refresh failed: {}", e);
                self.status = LoadStatus::Failed {
                    message: e.to_string(),
                };
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    /// Data on screen is older than the last attempt
    pub fn is_stale(&self) -> bool {
        self.view_model.is_some() && matches!(self.status, LoadStatus::Failed { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        match self.status {
            LoadStatus::Ready { refreshed_at } => Some(refreshed_at),
            _ => None,
        }
    }
}

/// Pulls one consistent batch from a [`MetricSource`] and turns it into a view model
#[derive(Debug, Clone)]
pub struct DashboardController<S> {
    source: S,
}

impl<S: MetricSource> DashboardController<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// All three reads run concurrently; any failure fails the whole batch.
    pub async fn load(&self) -> Result<DashboardViewModel, FetchError> {
        let (kpis, monthly, regional) = futures::try_join!(
            self.source.fetch_kpis(),
            self.source.fetch_monthly_revenue(),
            self.source.fetch_regional_revenue(),
        )?;

        validate_payload(&kpis, &monthly, &regional).map_err(|message| FetchError::Malformed {
            url: "dashboard batch".to_string(),
            message,
        })?;

        log::debug!(
            "Dashboard batch loaded: {} months, {} regions",
            monthly.len(),
            regional.len()
        );

        Ok(build_view_model(kpis, monthly, regional))
    }

    /// Runs one refresh against `state`; false when another one is already running.
    pub async fn refresh(&self, state: &mut DashboardState) -> bool {
        if !state.begin_refresh() {
            return false;
        }
        let result = self.load().await;
        state.apply(result);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::dashboards::d001_overview::{
        KpiSnapshot, MonthlyRevenuePoint, RegionalRevenuePoint,
    };
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Clone, Default)]
    struct MockSource {
        fail_kpis: bool,
        fail_monthly: bool,
        fail_regional: bool,
        negative_revenue: bool,
    }

    fn server_error(url: &str) -> FetchError {
        FetchError::Status {
            url: url.to_string(),
            status: 500,
        }
    }

    #[async_trait(?Send)]
    impl MetricSource for MockSource {
        async fn fetch_kpis(&self) -> Result<KpiSnapshot, FetchError> {
            if self.fail_kpis {
                return Err(server_error("/api/kpis"));
            }
            Ok(KpiSnapshot {
                total_revenue: 1_500.0,
                monthly_growth_pct: 50.0,
                churn_rate_pct: 2.5,
                customers: 120,
            })
        }

        async fn fetch_monthly_revenue(&self) -> Result<Vec<MonthlyRevenuePoint>, FetchError> {
            if self.fail_monthly {
                return Err(server_error("/api/revenue/monthly"));
            }
            let last = if self.negative_revenue { -5.0 } else { 150.0 };
            Ok(vec![
                MonthlyRevenuePoint::new("2025-01", 100.0),
                MonthlyRevenuePoint::new("2025-02", last),
            ])
        }

        async fn fetch_regional_revenue(&self) -> Result<Vec<RegionalRevenuePoint>, FetchError> {
            if self.fail_regional {
                return Err(FetchError::Status {
                    url: "/api/revenue/region".to_string(),
                    status: 503,
                });
            }
            Ok(vec![
                RegionalRevenuePoint::new("East", 900.0),
                RegionalRevenuePoint::new("West", 600.0),
            ])
        }
    }

    #[test]
    fn test_refresh_populates_state() {
        let controller = DashboardController::new(MockSource::default());
        let mut state = DashboardState::default();

        assert!(block_on(controller.refresh(&mut state)));

        let vm = state.view_model.as_ref().unwrap();
        assert_eq!(vm.cards.len(), 4);
        assert_eq!(vm.regional.len(), 2);
        assert!(state.refreshed_at().is_some());
        assert!(!state.is_stale());
    }

    #[test]
    fn test_partial_failure_keeps_previous_view_model() {
        let mut state = DashboardState::default();
        block_on(DashboardController::new(MockSource::default()).refresh(&mut state));
        let before = state.view_model.clone();

        let failing = DashboardController::new(MockSource {
            fail_regional: true,
            ..Default::default()
        });
        assert!(block_on(failing.refresh(&mut state)));

        assert_eq!(state.view_model, before);
        assert!(state.is_stale());
        assert!(state.error_message().unwrap().contains("503"));
    }

    #[test]
    fn test_failure_on_first_load_is_not_stale() {
        let failing = DashboardController::new(MockSource {
            fail_regional: true,
            ..Default::default()
        });
        let mut state = DashboardState::default();
        block_on(failing.refresh(&mut state));

        assert!(state.view_model.is_none());
        assert!(!state.is_stale());
        assert!(state.error_message().is_some());
    }

    #[test]
    fn test_negative_revenue_is_malformed() {
        let controller = DashboardController::new(MockSource {
            negative_revenue: true,
            ..Default::default()
        });
        let err = block_on(controller.load()).unwrap_err();
        assert!(matches!(err, FetchError::Malformed { .. }));
    }

    #[test]
    fn test_refresh_is_ignored_while_loading() {
        let controller = DashboardController::new(MockSource::default());
        let mut state = DashboardState::default();
        assert!(state.begin_refresh());
        assert!(!state.begin_refresh());

        assert!(!block_on(controller.refresh(&mut state)));
        assert!(state.view_model.is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn test_any_failing_read_keeps_previous_view_model() {
        let failures = [
            (
                MockSource {
                    fail_kpis: true,
                    ..Default::default()
                },
                "/api/kpis",
            ),
            (
                MockSource {
                    fail_monthly: true,
                    ..Default::default()
                },
                "/api/revenue/monthly",
            ),
            (
                MockSource {
                    fail_regional: true,
                    ..Default::default()
                },
                "/api/revenue/region",
            ),
        ];

        for (source, url) in failures {
            let mut state = DashboardState::default();
            block_on(DashboardController::new(MockSource::default()).refresh(&mut state));
            let before = state.view_model.clone();

            block_on(DashboardController::new(source).refresh(&mut state));

            assert_eq!(state.view_model, before, "{url}");
            assert!(state.is_stale(), "{url}");
            assert!(state.error_message().unwrap().contains(url));
        }
    }

    /// KPI read that completes only after the regional read has started
    struct InterleavedSource {
        regional_started: RefCell<Option<oneshot::Sender<()>>>,
        kpis_gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl InterleavedSource {
        fn new() -> Self {
            let (tx, rx) = oneshot::channel();
            Self {
                regional_started: RefCell::new(Some(tx)),
                kpis_gate: RefCell::new(Some(rx)),
            }
        }
    }

    #[async_trait(?Send)]
    impl MetricSource for InterleavedSource {
        async fn fetch_kpis(&self) -> Result<KpiSnapshot, FetchError> {
            let gate = self.kpis_gate.borrow_mut().take();
            if let Some(gate) = gate {
                gate.await.map_err(|_| server_error("/api/kpis"))?;
            }
            MockSource::default().fetch_kpis().await
        }

        async fn fetch_monthly_revenue(&self) -> Result<Vec<MonthlyRevenuePoint>, FetchError> {
            MockSource::default().fetch_monthly_revenue().await
        }

        async fn fetch_regional_revenue(&self) -> Result<Vec<RegionalRevenuePoint>, FetchError> {
            if let Some(tx) = self.regional_started.borrow_mut().take() {
                let _ = tx.send(());
            }
            MockSource::default().fetch_regional_revenue().await
        }
    }

    #[test]
    fn test_reads_run_concurrently() {
        // Awaiting the reads one after another would block forever on the KPI gate
        let controller = DashboardController::new(InterleavedSource::new());
        let vm = block_on(controller.load()).unwrap();
        assert_eq!(vm.kpis.customers, 120);
        assert_eq!(vm.regional.len(), 2);
    }
}
