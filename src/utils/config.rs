//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for remote trace downloads
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Upper bound on frames processed per run (i32::MAX, same cap the capture tool uses)
pub const MAX_FRAMES_TO_PROCESS: usize = 2_147_483_647;

/// Marker the profiler appends once it has rewritten the true header row
pub const HEADER_AT_END_SENTINEL: &str = "[HasHeaderRowAtEnd]";

// Columns read for every frame regardless of the stat definitions
pub const FRAME_TIME_COLUMN: &str = "FrameTime";
pub const GAME_THREAD_TIME_COLUMN: &str = "GameThreadTime";
pub const RENDER_THREAD_TIME_COLUMN: &str = "RenderThreadTime";
pub const PER_FRAME_KB_COLUMN: &str = "FileIO/PerFrameKB";

// Physics thread names vary per configuration, so they are matched rather than listed
pub const DEFAULT_WORKER_PATTERN: &str = "Chaos.*Worker.*";
pub const DEFAULT_EXCLUSIVE_PHYSICS_PATTERN: &str = "Exclusive.*Physics";
