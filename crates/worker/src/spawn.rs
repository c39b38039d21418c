use std::future::Future;
use std::sync::OnceLock;

use tokio::task::JoinHandle;

use crate::TaskClass;

// A store may be built from synchronous code (a blocking CLI path or a test
// without `#[tokio::test]`); its construction fetches still need somewhere to run.
fn runtime_handle() -> tokio::runtime::Handle {
	if let Ok(handle) = tokio::runtime::Handle::try_current() {
		return handle;
	}

	static FALLBACK_RT: OnceLock<tokio::runtime::Runtime> = OnceLock::new();
	let runtime = FALLBACK_RT.get_or_init(|| {
		tokio::runtime::Builder::new_multi_thread()
			.enable_all()
			.worker_threads(2)
			.thread_name("rfhub-fetch")
			.build()
			.expect("failed to build rfhub fallback tokio runtime")
	});
	runtime.handle().clone()
}

/// Spawns a fetch task on the ambient runtime, or on a lazily built fallback
/// runtime when called outside one.
pub fn spawn<F>(class: TaskClass, name: &'static str, fut: F) -> JoinHandle<F::Output>
where
	F: Future + Send + 'static,
	F::Output: Send + 'static,
{
	tracing::trace!(task_class = class.as_str(), task = name, "worker.spawn");
	runtime_handle().spawn(fut)
}
