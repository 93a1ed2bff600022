//! Blocking synchronization used by the level-synchronous BFS.

mod level_barrier;

pub(crate) use level_barrier::LevelBarrier;
