//! Subscriber setup
//!
//! The crate only emits `tracing` events. Hosts that want to see them call
//! [`init_logging`] once, or install their own subscriber.
//!
//! | Target | Output | Filter |
//! |--------|--------|--------|
//! | wasm32 | browser console, `console.{debug,info,warn,error}` by level | `level` |
//! | native | stderr via the fmt layer | `RUST_LOG`, falling back to `level` |

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Install the global subscriber.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
///
/// # Examples
///
/// ```
/// use regform_pages::logging::init_logging;
///
/// init_logging(tracing::Level::INFO);
/// assert!(!init_logging(tracing::Level::DEBUG));
/// ```
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(level: Level) -> bool {
	let filter = tracing_subscriber::EnvFilter::builder()
		.with_default_directive(LevelFilter::from_level(level).into())
		.from_env_lossy();

	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_target(false))
		.try_init()
		.is_ok()
}

/// Install the global subscriber, writing to the browser console.
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: Level) -> bool {
	// No clock access from the fmt layer: `SystemTime` panics on wasm32.
	let layer = tracing_subscriber::fmt::layer()
		.without_time()
		.with_ansi(false)
		.with_writer(console::ConsoleMakeWriter);

	tracing_subscriber::registry()
		.with(LevelFilter::from_level(level))
		.with(layer)
		.try_init()
		.is_ok()
}

#[cfg(target_arch = "wasm32")]
mod console {
	use std::io;
	use tracing::{Level, Metadata};
	use tracing_subscriber::fmt::MakeWriter;
	use wasm_bindgen::JsValue;

	pub(super) struct ConsoleMakeWriter;

	/// Buffers one formatted event and hands it to the console on drop.
	pub(super) struct ConsoleWriter {
		level: Level,
		buffer: Vec<u8>,
	}

	impl io::Write for ConsoleWriter {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			self.buffer.extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	impl Drop for ConsoleWriter {
		fn drop(&mut self) {
			if self.buffer.is_empty() {
				return;
			}
			let text = String::from_utf8_lossy(&self.buffer);
			let line = JsValue::from_str(text.trim_end());
			if self.level == Level::ERROR {
				web_sys::console::error_1(&line);
			} else if self.level == Level::WARN {
				web_sys::console::warn_1(&line);
			} else if self.level == Level::INFO {
				web_sys::console::info_1(&line);
			} else {
				web_sys::console::debug_1(&line);
			}
		}
	}

	impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
		type Writer = ConsoleWriter;

		fn make_writer(&'a self) -> Self::Writer {
			ConsoleWriter {
				level: Level::INFO,
				buffer: Vec::new(),
			}
		}

		fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
			ConsoleWriter {
				level: *meta.level(),
				buffer: Vec::new(),
			}
		}
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_second_init_is_noop() {
		init_logging(Level::WARN);

		assert!(!init_logging(Level::TRACE));
	}
}
