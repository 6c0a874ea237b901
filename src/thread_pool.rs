//! Shared thread pool for parallel resampling loops.

#[cfg(feature = "parallel")]
use rayon::ThreadPool;

#[cfg(feature = "parallel")]
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
static THREAD_POOL: OnceLock<ThreadPool> = OnceLock::new();

/// Get or initialize the shared thread pool.
///
/// Threads get an 8 MB stack (rayon's default is 2 MB) and the pool uses one
/// thread per logical CPU. If the custom pool cannot be built, the global
/// rayon pool is used instead.
#[cfg(feature = "parallel")]
fn get_thread_pool() -> Option<&'static ThreadPool> {
    if let Some(pool) = THREAD_POOL.get() {
        return Some(pool);
    }
    match rayon::ThreadPoolBuilder::new()
        .stack_size(8 * 1024 * 1024)
        .thread_name(|i| format!("pearson-resample-{}", i))
        .build()
    {
        Ok(pool) => Some(THREAD_POOL.get_or_init(|| pool)),
        Err(err) => {
            log::warn!("falling back to global rayon pool: {}", err);
            None
        }
    }
}

/// Execute a parallel operation on the shared thread pool.
#[cfg(feature = "parallel")]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    match get_thread_pool() {
        Some(pool) => pool.install(op),
        None => op(),
    }
}

/// Execute a resampling loop on the calling thread.
#[cfg(not(feature = "parallel"))]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R,
{
    op()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_returns_closure_value() {
        let data = vec![1.0_f64, 2.0, 3.0];
        let sum = install(|| data.iter().sum::<f64>());
        assert_eq!(sum, 6.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_install_runs_on_shared_pool() {
        let name = install(|| std::thread::current().name().map(str::to_owned));
        assert!(
            name.as_deref().is_some_and(|n| n.starts_with("pearson-resample-")),
            "ran on {:?}",
            name
        );
    }

    #[cfg(not(feature = "parallel"))]
    #[test]
    fn test_install_stays_on_caller() {
        let caller = std::thread::current().id();
        assert_eq!(install(|| std::thread::current().id()), caller);
    }
}
