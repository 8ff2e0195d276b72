//! # Fetch lifecycle
//!
//! Every data-backed view goes through the same three states:
//!
//! ```text
//! Loading ──► Ready(T)
//!         └─► Failed(message)
//! ```
//!
//! [`use_load`] runs one query per mount on top of [`use_resource`]. The task
//! belongs to the calling component's scope, so unmounting drops it and a late
//! result is never applied. [`Loader::reload`] restarts the task, cancelling
//! whichever run is still in flight.

use std::fmt::Display;
use std::future::Future;

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Load<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Load<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Load::Ready(value),
            Err(e) => Load::Failed(e.to_string()),
        }
    }
}

/// Handle to a view's load task.
pub struct Loader<T: 'static> {
    resource: Resource<Result<T, String>>,
}

impl<T: 'static> Clone for Loader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Loader<T> {}

impl<T: Clone + 'static> Loader<T> {
    pub fn state(&self) -> Load<T> {
        match &*self.resource.read() {
            None => Load::Loading,
            Some(result) => Load::from_result(result.clone()),
        }
    }

    /// Cancel any in-flight run and query again.
    pub fn reload(&mut self) {
        self.resource.restart();
    }
}

/// Run `fetch` once on mount (and again whenever a signal it reads changes).
/// Failures are logged and surfaced as [`Load::Failed`].
pub fn use_load<T, E, F, Fut>(mut fetch: F) -> Loader<T>
where
    T: 'static,
    E: Display + 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let resource = use_resource(move || {
        let pending = fetch();
        async move {
            pending.await.map_err(|e| {
                tracing::error!("Load failed: {}", e);
                e.to_string()
            })
        }
    });
    Loader { resource }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_core::{ScopeId, VirtualDom};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    type Rows = Vec<u32>;

    /// What the harness hands back from each fetch; `Err` yields a failure.
    #[derive(Clone)]
    struct Answers(Rc<dyn Fn(u32) -> Result<Rows, String>>);

    /// Every state the harness rendered, plus its loader and fetch count.
    #[derive(Clone, Default)]
    struct Seen {
        states: Rc<RefCell<Vec<Load<Rows>>>>,
        loader: Rc<RefCell<Option<Loader<Rows>>>>,
        fetches: Rc<Cell<u32>>,
    }

    impl Seen {
        fn last(&self) -> Option<Load<Rows>> {
            self.states.borrow().last().cloned()
        }
    }

    #[component]
    fn Harness() -> Element {
        let seen = use_context::<Seen>();
        let answers = use_context::<Answers>();
        let fetches = seen.fetches.clone();
        let loader = use_load(move || {
            fetches.set(fetches.get() + 1);
            let result = (answers.0)(fetches.get());
            async move { result }
        });
        seen.states.borrow_mut().push(loader.state());
        *seen.loader.borrow_mut() = Some(loader);
        rsx! {}
    }

    fn mount(answers: impl Fn(u32) -> Result<Rows, String> + 'static) -> (VirtualDom, Seen) {
        let seen = Seen::default();
        let mut dom = VirtualDom::new(Harness)
            .with_root_context(seen.clone())
            .with_root_context(Answers(Rc::new(answers)));
        dom.rebuild_in_place();
        (dom, seen)
    }

    /// Poll the load task and re-render until the harness leaves `Loading`.
    async fn settle(dom: &mut VirtualDom, seen: &Seen) {
        for _ in 0..8 {
            if !matches!(seen.last(), Some(Load::Loading)) {
                return;
            }
            let _ = tokio::time::timeout(Duration::from_millis(200), dom.wait_for_work()).await;
            dom.render_immediate_to_vec();
        }
    }

    #[tokio::test]
    async fn test_loading_then_ready_with_exact_rows() {
        let (mut dom, seen) = mount(|_| Ok(vec![3, 1, 2]));
        assert_eq!(seen.states.borrow().first(), Some(&Load::Loading));

        settle(&mut dom, &seen).await;
        assert_eq!(seen.last(), Some(Load::Ready(vec![3, 1, 2])));
        assert_eq!(seen.fetches.get(), 1);
    }

    #[tokio::test]
    async fn test_loading_then_failed() {
        let (mut dom, seen) = mount(|_| Err("connection refused".to_string()));
        assert_eq!(seen.states.borrow().first(), Some(&Load::Loading));

        settle(&mut dom, &seen).await;
        assert_eq!(seen.last(), Some(Load::Failed("connection refused".into())));
        assert!(seen
            .states
            .borrow()
            .iter()
            .all(|state| !matches!(state, Load::Ready(_))));
    }

    #[tokio::test]
    async fn test_reload_fetches_again() {
        let (mut dom, seen) = mount(|n| Ok(vec![n]));
        settle(&mut dom, &seen).await;
        assert_eq!(seen.last(), Some(Load::Ready(vec![1])));

        let loader = seen.loader.borrow().clone();
        dom.in_scope(ScopeId::ROOT, || {
            if let Some(mut loader) = loader {
                loader.reload();
            }
        });
        dom.render_immediate_to_vec();
        for _ in 0..8 {
            if seen.last() == Some(Load::Ready(vec![2])) {
                break;
            }
            let _ = tokio::time::timeout(Duration::from_millis(200), dom.wait_for_work()).await;
            dom.render_immediate_to_vec();
        }
        assert_eq!(seen.fetches.get(), 2);
        assert_eq!(seen.last(), Some(Load::Ready(vec![2])));
    }

    #[test]
    fn test_from_result() {
        let ok: Result<Rows, String> = Ok(vec![1, 2]);
        assert_eq!(Load::from_result(ok), Load::Ready(vec![1, 2]));

        let err: Result<Rows, String> = Err("boom".into());
        assert_eq!(Load::from_result(err), Load::Failed("boom".into()));
    }
}
