use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Freshness token carried by one outstanding request.
///
/// `generation` is what the owner compares on arrival; `cancel` lets the
/// owner stop the task from waiting on a response nobody will apply.
#[derive(Debug, Clone)]
pub struct RequestToken {
	generation: u64,
	cancel: CancellationToken,
}

impl RequestToken {
	pub const fn generation(&self) -> u64 {
		self.generation
	}

	pub fn is_cancelled(&self) -> bool {
		self.cancel.is_cancelled()
	}

	/// Drives `fut` until it completes or the token is cancelled.
	///
	/// Returns `None` on cancellation; the inner future is dropped.
	pub async fn run<F>(&self, fut: F) -> Option<F::Output>
	where
		F: Future,
	{
		tokio::select! {
			biased;
			_ = self.cancel.cancelled() => None,
			out = fut => Some(out),
		}
	}
}

/// Issues tokens for one logical resource and remembers which is current.
///
/// Issuing a new token or invalidating the slot cancels the previous one and
/// advances the generation, so any response still in flight becomes stale.
#[derive(Debug, Default)]
pub struct TokenSlot {
	generation: u64,
	active: Option<CancellationToken>,
}

impl TokenSlot {
	pub fn new() -> Self {
		Self::default()
	}

	/// Current generation. Responses tagged with any other value are stale.
	pub const fn generation(&self) -> u64 {
		self.generation
	}

	/// True while the token of the current generation has not settled.
	pub const fn is_pending(&self) -> bool {
		self.active.is_some()
	}

	pub const fn is_current(&self, generation: u64) -> bool {
		self.generation == generation
	}

	/// Supersedes any outstanding token and issues a fresh one.
	pub fn issue(&mut self) -> RequestToken {
		self.invalidate();
		let cancel = CancellationToken::new();
		self.active = Some(cancel.clone());
		RequestToken {
			generation: self.generation,
			cancel,
		}
	}

	/// Supersedes any outstanding token without issuing a new one.
	pub fn invalidate(&mut self) {
		if let Some(cancel) = self.active.take() {
			cancel.cancel();
		}
		self.generation = self.generation.wrapping_add(1);
	}

	/// Marks the current token as settled. Returns false for a stale generation.
	pub fn settle(&mut self, generation: u64) -> bool {
		if !self.is_current(generation) {
			return false;
		}
		self.active = None;
		true
	}
}
