/// Maximum length of the working buffer of random bytes.
pub const MAX_BUF_LEN: usize = 2048;

/// Minimum number of random bytes requested on a refill, once the first
/// read did not produce the full result.
///
/// Ignored when the working buffer was allocated smaller than this.
pub const MIN_REGEN_BUF_LEN: usize = 16;

/// Estimated number of random bytes to request so that, on average,
/// `need` of them fall at or below `max_accept`.
///
/// Computes `ceil(need * 255 / max_accept)`.
pub(crate) fn estimated_buf_len(need: usize, max_accept: u8) -> usize {
	need.saturating_mul(255).div_ceil(max_accept as usize)
}

/// Size of the first read for a request of `length` symbols.
pub(crate) fn initial_buf_len(length: usize, max_accept: u8) -> usize {
	estimated_buf_len(length, max_accept).max(length).min(MAX_BUF_LEN)
}

/// Size of a refill when `remaining` symbols are still missing and the
/// working buffer holds `capacity` bytes.
pub(crate) fn refill_buf_len(remaining: usize, max_accept: u8, capacity: usize) -> usize {
	let mut len = estimated_buf_len(remaining, max_accept);
	if len < MIN_REGEN_BUF_LEN && MIN_REGEN_BUF_LEN < capacity {
		len = MIN_REGEN_BUF_LEN;
	}
	len.min(MAX_BUF_LEN).min(capacity)
}
