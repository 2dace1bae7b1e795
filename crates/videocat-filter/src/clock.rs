//! Monotonic clock for debounce deadlines
//!
//! Native builds use tokio's clock, which tests can pause and advance.
//! `wasm32` builds read `performance.now()` through `web-time`, since the
//! standard library clock is unavailable in the browser.

#[cfg(not(target_arch = "wasm32"))]
pub use tokio::time::Instant;

#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;

/// Returns the current instant
pub fn now() -> Instant {
	Instant::now()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::time::Duration;

	#[rstest]
	#[tokio::test(start_paused = true)]
	async fn test_now_follows_paused_clock() {
		// Arrange
		let start = now();

		// Act
		tokio::time::advance(Duration::from_millis(300)).await;

		// Assert
		assert_eq!(now() - start, Duration::from_millis(300));
	}
}
