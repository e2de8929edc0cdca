/// Simulation orchestration: seeding, ticking, backfill and completion
pub mod executor;
/// Per-walker movement policies
pub mod movement;
/// Occupancy registry and simulation mode
pub mod occupancy;
/// Path extraction and the finished sketch
pub mod paths;
/// Spawn patterns for initial walker placement
pub mod spawn;
/// Walker agents and their styling
pub mod walker;
