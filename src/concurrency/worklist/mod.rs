//! Lock-free worklists for the parallel traversals.

mod work_pool;

pub(crate) use work_pool::WorkPool;
