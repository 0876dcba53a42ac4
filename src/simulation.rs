//! Stand-ins for the remote store: how long a call takes and whether it works.
use crate::config::Config;
use futures_util::future::{FutureExt, LocalBoxFuture};
use rand::Rng;
use std::{cell::RefCell, collections::VecDeque, rc::Rc, time::Duration};

/// Decides whether a single simulated remote call succeeds.
pub trait Outcome {
	fn succeeds(&self) -> bool;
}

impl<F> Outcome for F
where
	F: Fn() -> bool,
{
	fn succeeds(&self) -> bool {
		(self)()
	}
}

/// Succeeds with a fixed probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chance(pub f64);
impl Outcome for Chance {
	fn succeeds(&self) -> bool {
		rand::thread_rng().gen_bool(self.0.clamp(0.0, 1.0))
	}
}

/// Replays a fixed sequence of outcomes, then keeps succeeding.
#[derive(Debug, Default)]
pub struct Script(RefCell<VecDeque<bool>>);
impl Script {
	pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
		Self(RefCell::new(outcomes.into_iter().collect()))
	}
}

impl Outcome for Script {
	fn succeeds(&self) -> bool {
		self.0.borrow_mut().pop_front().unwrap_or(true)
	}
}

/// Suspends the caller for the duration of a simulated round trip.
pub trait Latency {
	fn delay(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Real browser timers.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimerLatency;
impl Latency for TimerLatency {
	fn delay(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
		gloo_timers::future::sleep(duration).boxed_local()
	}
}

/// Resolves immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLatency;
impl Latency for NoLatency {
	fn delay(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
		futures::future::ready(()).boxed_local()
	}
}

#[derive(Clone)]
pub struct Simulation {
	pub config: Rc<Config>,
	pub latency: Rc<dyn Latency>,
	pub import_outcome: Rc<dyn Outcome>,
	pub sync_outcome: Rc<dyn Outcome>,
}
impl Simulation {
	/// The browser setup: timers and the configured success rates.
	pub fn browser(config: Config) -> Self {
		Self {
			import_outcome: Rc::new(Chance(config.import_success_rate)),
			sync_outcome: Rc::new(Chance(config.sync_success_rate)),
			latency: Rc::new(TimerLatency),
			config: Rc::new(config),
		}
	}

	/// No waiting, every call succeeds.
	pub fn instant() -> Self {
		Self {
			config: Rc::new(Config::default()),
			latency: Rc::new(NoLatency),
			import_outcome: Rc::new(|| true),
			sync_outcome: Rc::new(|| true),
		}
	}

	pub fn with_import_outcome(mut self, outcome: impl Outcome + 'static) -> Self {
		self.import_outcome = Rc::new(outcome);
		self
	}

	pub fn with_sync_outcome(mut self, outcome: impl Outcome + 'static) -> Self {
		self.sync_outcome = Rc::new(outcome);
		self
	}

	pub fn with_config(mut self, config: Config) -> Self {
		self.config = Rc::new(config);
		self
	}

	pub async fn wait(&self, duration: Duration) {
		self.latency.delay(duration).await;
	}
}

impl PartialEq for Simulation {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.config, &other.config)
			&& Rc::ptr_eq(&self.latency, &other.latency)
			&& Rc::ptr_eq(&self.import_outcome, &other.import_outcome)
			&& Rc::ptr_eq(&self.sync_outcome, &other.sync_outcome)
	}
}

impl std::fmt::Debug for Simulation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Simulation").field("config", &self.config).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn script_replays_then_succeeds() {
		let script = Script::new([false, true, false]);
		let rolled = (0..5).map(|_| script.succeeds()).collect::<Vec<_>>();
		assert_eq!(rolled, vec![false, true, false, true, true]);
	}

	#[test]
	fn certain_chances() {
		assert!((0..100).all(|_| Chance(1.0).succeeds()));
		assert!((0..100).all(|_| !Chance(0.0).succeeds()));
	}

	#[test]
	fn instant_simulation_does_not_wait() {
		let simulation = Simulation::instant();
		futures::executor::block_on(simulation.wait(Duration::from_secs(3600)));
		assert!(simulation.import_outcome.succeeds());
	}
}
