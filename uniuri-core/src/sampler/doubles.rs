//! Random sources used by the unit tests.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng, TryRngCore};

/// Counts reads while delegating to a seeded generator.
pub(crate) struct CountingSource {
	inner: StdRng,
	pub calls: usize,
	pub largest: usize,
}

impl Default for CountingSource {
	fn default() -> Self {
		Self { inner: StdRng::seed_from_u64(0), calls: 0, largest: 0 }
	}
}

impl RngCore for CountingSource {
	fn next_u32(&mut self) -> u32 {
		self.inner.next_u32()
	}

	fn next_u64(&mut self) -> u64 {
		self.inner.next_u64()
	}

	fn fill_bytes(&mut self, dst: &mut [u8]) {
		self.calls += 1;
		self.largest = self.largest.max(dst.len());
		self.inner.fill_bytes(dst);
	}
}

/// Hands out a fixed byte script and records every requested read size.
pub(crate) struct ScriptedSource {
	script: VecDeque<u8>,
	pub requests: Vec<usize>,
}

impl ScriptedSource {
	pub fn new(script: Vec<u8>) -> Self {
		Self { script: script.into(), requests: Vec::new() }
	}
}

impl RngCore for ScriptedSource {
	fn next_u32(&mut self) -> u32 {
		let mut bytes = [0u8; 4];
		self.fill_bytes(&mut bytes);
		u32::from_le_bytes(bytes)
	}

	fn next_u64(&mut self) -> u64 {
		let mut bytes = [0u8; 8];
		self.fill_bytes(&mut bytes);
		u64::from_le_bytes(bytes)
	}

	fn fill_bytes(&mut self, dst: &mut [u8]) {
		self.requests.push(dst.len());
		for b in dst.iter_mut() {
			*b = self.script.pop_front().expect("script exhausted");
		}
	}
}

/// Fails every read, like an environment without entropy.
pub(crate) struct FailingSource;

impl TryRngCore for FailingSource {
	type Error = &'static str;

	fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
		Err("entropy unavailable")
	}

	fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
		Err("entropy unavailable")
	}

	fn try_fill_bytes(&mut self, _dst: &mut [u8]) -> Result<(), Self::Error> {
		Err("entropy unavailable")
	}
}
