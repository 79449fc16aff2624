//! Request Hook Pipeline
//!
//! Ordered list of hooks wrapped around every outgoing request. Each request
//! reports start exactly once and settled exactly once, on every exit path
//! (success, error response, transport error, or the future being dropped).

use std::future::Future;
use std::sync::Arc;

pub const FORBIDDEN: u16 = 403;

/// Observer of request lifecycles
pub trait RequestHooks: Send + Sync {
    fn on_request_start(&self);
    fn on_request_settled(&self);
    /// Called after settling when the failure carries status 403
    fn on_forbidden(&self);
}

/// Failure that may carry an HTTP status
pub trait HttpFailure {
    fn http_status(&self) -> Option<u16>;
}

/// Settles every hook when dropped
pub struct SettleGuard<'a> {
    hooks: &'a [Arc<dyn RequestHooks>],
}

impl<'a> SettleGuard<'a> {
    pub fn start(hooks: &'a [Arc<dyn RequestHooks>]) -> Self {
        for hook in hooks {
            hook.on_request_start();
        }
        Self { hooks }
    }
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        for hook in self.hooks {
            hook.on_request_settled();
        }
    }
}

#[derive(Clone, Default)]
pub struct Pipeline {
    hooks: Vec<Arc<dyn RequestHooks>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook; hooks run in installation order
    pub fn with_hooks(mut self, hooks: impl RequestHooks + 'static) -> Self {
        self.hooks.push(Arc::new(hooks));
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Drive `request` between the start and settled hooks.
    ///
    /// The request future is lazy, so anything it does before sending (URL
    /// building, body serialization) already counts as in flight. The result
    /// is returned unchanged.
    pub async fn run<T, E, F>(&self, request: F) -> Result<T, E>
    where
        E: HttpFailure,
        F: Future<Output = Result<T, E>>,
    {
        let guard = SettleGuard::start(&self.hooks);
        let result = request.await;
        drop(guard);

        if let Err(err) = &result {
            if err.http_status() == Some(FORBIDDEN) {
                for hook in &self.hooks {
                    hook.on_forbidden();
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::sync::Mutex;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Event {
        Start,
        Settled,
        Forbidden,
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<Event>>,
    }

    impl Recorder {
        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }

        fn count(&self, event: Event) -> usize {
            self.events().into_iter().filter(|e| *e == event).count()
        }
    }

    impl RequestHooks for Arc<Recorder> {
        fn on_request_start(&self) {
            self.events.lock().unwrap().push(Event::Start);
        }
        fn on_request_settled(&self) {
            self.events.lock().unwrap().push(Event::Settled);
        }
        fn on_forbidden(&self) {
            self.events.lock().unwrap().push(Event::Forbidden);
        }
    }

    #[derive(Debug)]
    enum TestError {
        Status(u16),
        Transport,
    }

    impl HttpFailure for TestError {
        fn http_status(&self) -> Option<u16> {
            match self {
                TestError::Status(code) => Some(*code),
                TestError::Transport => None,
            }
        }
    }

    fn pipeline() -> (Pipeline, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        (Pipeline::new().with_hooks(recorder.clone()), recorder)
    }

    #[test]
    fn test_success_passes_through() {
        let (pipeline, recorder) = pipeline();
        let result: Result<u32, TestError> = block_on(pipeline.run(async { Ok(7) }));
        assert_eq!(result.unwrap(), 7);
        assert_eq!(recorder.events(), vec![Event::Start, Event::Settled]);
    }

    #[test]
    fn test_forbidden_after_settle() {
        let (pipeline, recorder) = pipeline();
        let result: Result<(), TestError> =
            block_on(pipeline.run(async { Err(TestError::Status(403)) }));
        assert!(matches!(result, Err(TestError::Status(403))));
        assert_eq!(recorder.events(), vec![Event::Start, Event::Settled, Event::Forbidden]);
    }

    #[test]
    fn test_other_failures_never_forbidden() {
        let (pipeline, recorder) = pipeline();
        for code in [400, 401, 404, 500, 502] {
            let _: Result<(), TestError> =
                block_on(pipeline.run(async move { Err(TestError::Status(code)) }));
        }
        let _: Result<(), TestError> = block_on(pipeline.run(async { Err(TestError::Transport) }));

        assert_eq!(recorder.count(Event::Forbidden), 0);
        assert_eq!(recorder.count(Event::Start), 6);
        assert_eq!(recorder.count(Event::Settled), 6);
    }

    #[test]
    fn test_start_precedes_settle_while_in_flight() {
        let (pipeline, recorder) = pipeline();
        let observer = recorder.clone();
        let result: Result<(), TestError> = block_on(pipeline.run(async move {
            assert_eq!(observer.count(Event::Start), 1);
            assert_eq!(observer.count(Event::Settled), 0);
            Ok(())
        }));
        assert!(result.is_ok());
        assert_eq!(recorder.count(Event::Settled), 1);
    }

    #[test]
    fn test_dropped_request_still_settles() {
        let (pipeline, recorder) = pipeline();
        let polled = pipeline
            .run(futures::future::pending::<Result<(), TestError>>())
            .now_or_never();
        assert!(polled.is_none());
        assert_eq!(recorder.events(), vec![Event::Start, Event::Settled]);
    }

    #[test]
    fn test_many_requests_balance() {
        let (pipeline, recorder) = pipeline();
        for n in 0..20u16 {
            let _: Result<(), TestError> = block_on(pipeline.run(async move {
                match n % 4 {
                    0 => Ok(()),
                    1 => Err(TestError::Status(403)),
                    2 => Err(TestError::Status(500)),
                    _ => Err(TestError::Transport),
                }
            }));
        }
        assert_eq!(recorder.count(Event::Start), 20);
        assert_eq!(recorder.count(Event::Settled), 20);
        assert_eq!(recorder.count(Event::Forbidden), 5);
    }

    #[test]
    fn test_hooks_run_in_installation_order() {
        let first = Arc::new(Recorder::default());
        let second = Arc::new(Recorder::default());
        let pipeline = Pipeline::new()
            .with_hooks(first.clone())
            .with_hooks(second.clone());
        assert_eq!(pipeline.len(), 2);

        let _: Result<(), TestError> = block_on(pipeline.run(async { Err(TestError::Status(403)) }));
        assert_eq!(first.count(Event::Forbidden), 1);
        assert_eq!(second.count(Event::Forbidden), 1);
    }
}
