//! End-to-end tests of the aggregation service against deterministic mock
//! adapters: partial failure isolation, deadlines, ordering and ranking.

use async_trait::async_trait;
use quoter_config::{AggregationSettings, PlatformSettings, QuoterConfig};
use quoter_core::{
	AdapterError, AggregatorError, AggregatorService, AttemptOutcome, FailureKind, SourceAdapter,
};
use quoter_types::{
	Address, Currency, CurrencyAmount, Percent, PlatformDescriptor, RequestError, SwapRequest,
	Trade, U256,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn weth() -> Currency {
	Currency::token(1, Address::repeat_byte(0x01), "WETH", 18)
}

fn usdc() -> Currency {
	Currency::token(1, Address::repeat_byte(0x02), "USDC", 6)
}

fn request() -> SwapRequest {
	SwapRequest::exact_input(
		CurrencyAmount::new(weth(), U256::from(1_000u64)),
		usdc(),
		Percent::from_basis_points(50),
	)
}

/// What a mock source does when asked for a quote.
enum Behavior {
	/// Quote `out_raw` units of USDC for the request's full input.
	Quote(u64),
	NoRoute,
	Fail(&'static str),
	Panic,
}

struct MockAdapter {
	descriptor: PlatformDescriptor,
	behavior: Behavior,
	delay: Duration,
	calls: AtomicUsize,
}

impl MockAdapter {
	fn new(name: &str, chains: Vec<u64>, behavior: Behavior) -> Arc<Self> {
		Self::with_delay(name, chains, behavior, Duration::ZERO)
	}

	fn with_delay(
		name: &str,
		chains: Vec<u64>,
		behavior: Behavior,
		delay: Duration,
	) -> Arc<Self> {
		Arc::new(Self {
			descriptor: PlatformDescriptor::new(name, chains),
			behavior,
			delay,
			calls: AtomicUsize::new(0),
		})
	}

	fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl SourceAdapter for MockAdapter {
	fn descriptor(&self) -> PlatformDescriptor {
		self.descriptor.clone()
	}

	async fn compute_trade(&self, request: &SwapRequest) -> Result<Trade, AdapterError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		if !self.delay.is_zero() {
			tokio::time::sleep(self.delay).await;
		}
		match &self.behavior {
			Behavior::Quote(out_raw) => {
				let input = request.fixed_amount().clone();
				let output = CurrencyAmount::new(usdc(), U256::from(*out_raw));
				Trade::from_request(
					self.descriptor.clone(),
					request,
					input,
					output,
					vec!["WETH/USDC".into()],
					None,
				)
				.map_err(|e| AdapterError::InvalidConfiguration(e.to_string()))
			}
			Behavior::NoRoute => Err(AdapterError::NoRoute),
			Behavior::Fail(message) => Err(AdapterError::Network((*message).to_string())),
			Behavior::Panic => panic!("mock adapter exploded"),
		}
	}
}

fn fast_settings() -> AggregationSettings {
	AggregationSettings {
		global_timeout_ms: 1_000,
		source_timeout_ms: 800,
		grace_period_ms: 100,
		max_results: 3,
	}
}

fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn service_with(adapters: Vec<Arc<MockAdapter>>) -> AggregatorService {
	init_tracing();
	let mut builder = AggregatorService::builder().with_settings(fast_settings());
	for adapter in adapters {
		builder = builder.with_adapter(adapter);
	}
	builder.build().unwrap()
}

#[tokio::test]
async fn best_trade_wins_on_execution_price() {
	let service = service_with(vec![
		MockAdapter::new("cheap", vec![1], Behavior::Quote(1_900)),
		MockAdapter::new("rich", vec![1], Behavior::Quote(2_100)),
		MockAdapter::new("middle", vec![1], Behavior::Quote(2_000)),
	]);

	let best = service.get_best_trade(&request(), None, None).await.unwrap();
	assert_eq!(best.platform().name(), "rich");
	assert_eq!(best.output_amount().raw(), U256::from(2_100u64));
}

#[tokio::test]
async fn failing_source_never_poisons_the_rest() {
	let service = service_with(vec![
		MockAdapter::new("broken", vec![1], Behavior::Fail("rpc unreachable")),
		MockAdapter::new("healthy", vec![1], Behavior::Quote(2_000)),
		MockAdapter::new("panicky", vec![1], Behavior::Panic),
	]);

	let result = service.aggregate(&request(), None, None).await.unwrap();
	assert_eq!(result.trades().len(), 1);
	assert_eq!(result.attempts().len(), 3);
	assert!(matches!(
		result.attempts()[0].outcome,
		AttemptOutcome::Failed(FailureKind::Adapter(_))
	));
	assert_eq!(result.attempts()[1].outcome, AttemptOutcome::Quoted);
	assert_eq!(
		result.attempts()[2].outcome,
		AttemptOutcome::Failed(FailureKind::Adapter("adapter panicked".to_string()))
	);

	let best = service.get_best_trade(&request(), None, None).await.unwrap();
	assert_eq!(best.platform().name(), "healthy");
}

#[tokio::test]
async fn all_no_route_yields_no_route_found_with_full_diagnostics() {
	let service = service_with(vec![
		MockAdapter::new("a", vec![1], Behavior::NoRoute),
		MockAdapter::new("b", vec![1], Behavior::NoRoute),
		MockAdapter::new("c", vec![1], Behavior::NoRoute),
	]);

	let err = service.get_best_trade(&request(), None, None).await.unwrap_err();
	match err {
		AggregatorError::NoRouteFound(no_route) => {
			assert_eq!(no_route.attempts.len(), 3);
			for attempt in &no_route.attempts {
				assert_eq!(
					attempt.outcome,
					AttemptOutcome::Failed(FailureKind::NoRoute)
				);
			}
		}
		other => panic!("expected NoRouteFound, got {other:?}"),
	}
}

#[tokio::test]
async fn each_compatible_platform_is_invoked_exactly_once() {
	let mainnet_a = MockAdapter::new("mainnet-a", vec![1], Behavior::Quote(2_000));
	let mainnet_b = MockAdapter::new("mainnet-b", vec![1], Behavior::Quote(1_999));
	let polygon = MockAdapter::new("polygon-only", vec![137], Behavior::Quote(1));
	let service = service_with(vec![
		Arc::clone(&mainnet_a),
		Arc::clone(&mainnet_b),
		Arc::clone(&polygon),
	]);

	let result = service.aggregate(&request(), None, None).await.unwrap();

	assert_eq!(mainnet_a.calls(), 1);
	assert_eq!(mainnet_b.calls(), 1);
	assert_eq!(polygon.calls(), 0);
	// The incompatible platform is not even an attempt record.
	assert_eq!(result.attempts().len(), 2);
}

#[tokio::test]
async fn slow_source_times_out_without_delaying_the_answer() {
	let stuck = MockAdapter::with_delay(
		"stuck",
		vec![1],
		Behavior::Quote(9_999),
		Duration::from_secs(30),
	);
	let service = service_with(vec![
		stuck,
		MockAdapter::new("responsive", vec![1], Behavior::Quote(2_000)),
	]);

	let started = Instant::now();
	let result = service
		.aggregate(&request(), None, Some(Duration::from_millis(200)))
		.await
		.unwrap();
	let elapsed = started.elapsed();

	// Deadline (200ms) plus grace (100ms), with generous slack for CI.
	assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
	assert_eq!(result.trades().len(), 1);
	assert_eq!(result.trades()[0].platform().name(), "responsive");
	assert_eq!(
		result.attempts()[0].outcome,
		AttemptOutcome::Failed(FailureKind::Timeout)
	);
}

#[tokio::test]
async fn per_source_timeout_is_isolated() {
	let sluggish = MockAdapter::with_delay(
		"sluggish",
		vec![1],
		Behavior::Quote(9_999),
		Duration::from_millis(900),
	);
	let service = service_with(vec![
		sluggish,
		MockAdapter::new("prompt", vec![1], Behavior::Quote(2_000)),
	]);

	// Per-source soft timeout is 800ms; the global deadline is not hit.
	let result = service.aggregate(&request(), None, None).await.unwrap();
	assert_eq!(
		result.attempts()[0].outcome,
		AttemptOutcome::Failed(FailureKind::Timeout)
	);
	assert_eq!(result.attempts()[1].outcome, AttemptOutcome::Quoted);
}

#[tokio::test]
async fn candidates_come_back_in_registration_order() {
	let slow_first = MockAdapter::with_delay(
		"slow-first",
		vec![1],
		Behavior::Quote(1_000),
		Duration::from_millis(150),
	);
	let fast_second = MockAdapter::new("fast-second", vec![1], Behavior::Quote(3_000));
	let service = service_with(vec![slow_first, fast_second]);

	let result = service.aggregate(&request(), None, None).await.unwrap();
	let names: Vec<&str> = result
		.trades()
		.iter()
		.map(|t| t.platform().name())
		.collect();
	// Completion order was the reverse; registration order must win.
	assert_eq!(names, vec!["slow-first", "fast-second"]);
}

#[tokio::test]
async fn repeated_aggregation_is_idempotent() {
	let service = service_with(vec![
		MockAdapter::new("a", vec![1], Behavior::Quote(2_000)),
		MockAdapter::new("b", vec![1], Behavior::NoRoute),
		MockAdapter::new("c", vec![1], Behavior::Quote(2_500)),
	]);

	let first = service.aggregate(&request(), None, None).await.unwrap();
	let second = service.aggregate(&request(), None, None).await.unwrap();
	assert_eq!(first, second);
}

#[tokio::test]
async fn ranked_trades_exclude_failures_and_order_by_price() {
	let service = service_with(vec![
		MockAdapter::new("one-to-one", vec![1], Behavior::Quote(1_000)),
		MockAdapter::new("double", vec![1], Behavior::Quote(2_000)),
		MockAdapter::new("absent", vec![1], Behavior::NoRoute),
	]);

	let ranked = service
		.get_ranked_trades(&request(), Some(3), None, None)
		.await
		.unwrap();
	let names: Vec<&str> = ranked.iter().map(|t| t.platform().name()).collect();
	assert_eq!(names, vec!["double", "one-to-one"]);
}

#[tokio::test]
async fn platform_filter_restricts_dispatch() {
	let preferred = MockAdapter::new("preferred", vec![1], Behavior::Quote(1_500));
	let ignored = MockAdapter::new("ignored", vec![1], Behavior::Quote(9_000));
	let service = service_with(vec![Arc::clone(&preferred), Arc::clone(&ignored)]);

	let best = service
		.get_best_trade(&request(), Some(&["preferred"]), None)
		.await
		.unwrap();
	assert_eq!(best.platform().name(), "preferred");
	assert_eq!(ignored.calls(), 0);
}

#[tokio::test]
async fn invalid_request_fails_fast_before_dispatch() {
	let adapter = MockAdapter::new("untouched", vec![1], Behavior::Quote(2_000));
	let service = service_with(vec![Arc::clone(&adapter)]);

	let zero = SwapRequest::exact_input(
		CurrencyAmount::new(weth(), U256::ZERO),
		usdc(),
		Percent::zero(),
	);
	let err = service.get_best_trade(&zero, None, None).await.unwrap_err();
	assert!(matches!(
		err,
		AggregatorError::InvalidRequest(RequestError::ZeroAmount)
	));
	assert_eq!(adapter.calls(), 0);
}

#[tokio::test]
async fn disabled_platform_is_never_registered() {
	init_tracing();
	let disabled = MockAdapter::new("disabled", vec![1], Behavior::Quote(9_000));
	let enabled = MockAdapter::new("enabled", vec![1], Behavior::Quote(1_000));

	let mut config = QuoterConfig {
		aggregation: fast_settings(),
		..Default::default()
	};
	config.platforms.insert(
		"disabled".to_string(),
		PlatformSettings {
			enabled: false,
			chain_ids: vec![],
		},
	);
	config.platforms.insert(
		"enabled".to_string(),
		PlatformSettings {
			enabled: true,
			chain_ids: vec![],
		},
	);

	let service = AggregatorService::builder()
		.with_config(config)
		.with_adapter(disabled.clone())
		.with_adapter(enabled.clone())
		.build()
		.unwrap();

	let best = service.get_best_trade(&request(), None, None).await.unwrap();
	assert_eq!(best.platform().name(), "enabled");
	assert_eq!(disabled.calls(), 0);
}

#[tokio::test]
async fn configured_chain_narrowing_applies() {
	init_tracing();
	let adapter = MockAdapter::new("narrowed", vec![1, 137], Behavior::Quote(2_000));

	let mut config = QuoterConfig {
		aggregation: fast_settings(),
		..Default::default()
	};
	config.platforms.insert(
		"narrowed".to_string(),
		PlatformSettings {
			enabled: true,
			chain_ids: vec![137],
		},
	);

	let service = AggregatorService::builder()
		.with_config(config)
		.with_adapter(adapter.clone())
		.build()
		.unwrap();

	// Mainnet request no longer matches the narrowed descriptor.
	let err = service.get_best_trade(&request(), None, None).await.unwrap_err();
	assert!(matches!(err, AggregatorError::NoRouteFound(_)));
	assert_eq!(adapter.calls(), 0);
}
