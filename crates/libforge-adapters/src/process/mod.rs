//! External tool adapters.

mod recording;
mod system;

pub use recording::RecordingToolRunner;
pub use system::SystemToolRunner;
