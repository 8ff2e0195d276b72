use dioxus::prelude::*;

const TOAST_TTL_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    pub entries: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            kind,
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

/// Transient notifications capability handed to views.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts(Signal<ToastQueue>);

impl Toasts {
    pub(crate) fn new(signal: Signal<ToastQueue>) -> Self {
        Self(signal)
    }

    pub fn success(&mut self, message: &str) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&mut self, message: &str) {
        self.show(ToastKind::Error, message);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.0.write().dismiss(id);
    }

    pub fn entries(&self) -> Vec<Toast> {
        self.0.read().entries.clone()
    }

    fn show(&mut self, kind: ToastKind, message: &str) {
        let id = self.0.write().push(kind, message);
        #[cfg(target_arch = "wasm32")]
        {
            let mut toasts = *self;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                toasts.dismiss(id);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (id, TOAST_TTL_MS);
    }
}

#[component]
pub fn ToastStack(toasts: Toasts) -> Element {
    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts.entries() {
                div {
                    key: "{toast.id}",
                    class: if toast.kind == ToastKind::Success { "toast toast-success" } else { "toast toast-error" },
                    onclick: {
                        let mut toasts = toasts;
                        let id = toast.id;
                        move |_| toasts.dismiss(id)
                    },
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Project added successfully");
        let second = queue.push(ToastKind::Error, "Failed to delete project");
        assert_ne!(first, second);
        assert_eq!(queue.entries.len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.entries.len(), 1);
        assert_eq!(queue.entries[0].kind, ToastKind::Error);

        // dismissing twice is harmless
        queue.dismiss(first);
        assert_eq!(queue.entries.len(), 1);
    }
}
