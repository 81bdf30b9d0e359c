//! Cola de notificaciones temporales (éxito / error / info).

use std::collections::VecDeque;

/// Tiempo que se muestra cada toast, en segundos.
pub const TOAST_SECONDS: f64 = 4.0;
/// Máximo de toasts visibles a la vez.
pub const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    /// Se fija la primera vez que se pinta.
    shown_at: Option<f64>,
}

impl Toast {
    /// Segundos que lleva en pantalla.
    pub fn age(&self, now: f64) -> f64 {
        self.shown_at.map_or(0.0, |t| now - t)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    queue: VecDeque<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) {
        let text = text.into();
        match kind {
            ToastKind::Error => log::warn!("toast: {text}"),
            _ => log::debug!("toast: {text}"),
        }
        self.queue.push_back(Toast {
            kind,
            text,
            shown_at: None,
        });
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Error, text);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Info, text);
    }

    /// Quita los caducados y devuelve los que deben pintarse ahora.
    pub fn visible(&mut self, now: f64) -> impl Iterator<Item = &Toast> {
        self.queue
            .retain(|t| t.shown_at.is_none_or(|shown| now - shown < TOAST_SECONDS));
        for toast in self.queue.iter_mut().take(MAX_VISIBLE) {
            toast.shown_at.get_or_insert(now);
        }
        self.queue.iter().take(MAX_VISIBLE)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_display_time() {
        let mut toasts = Toasts::default();
        toasts.success("ok");
        toasts.error("mal");
        assert_eq!(toasts.visible(1.0).count(), 2);
        assert_eq!(toasts.visible(4.9).count(), 2);
        assert_eq!(toasts.visible(5.0).count(), 0);
        assert!(toasts.is_empty());
    }

    #[test]
    fn queued_toasts_wait_for_a_slot() {
        let mut toasts = Toasts::default();
        for i in 0..6 {
            toasts.info(format!("t{i}"));
        }
        assert_eq!(toasts.visible(0.0).count(), MAX_VISIBLE);
        assert_eq!(toasts.len(), 6);

        // los dos últimos empiezan a contar al entrar en pantalla
        let texts: Vec<String> = toasts.visible(4.0).map(|t| t.text.clone()).collect();
        assert_eq!(texts, ["t4", "t5"]);
        assert_eq!(toasts.visible(7.9).count(), 2);
        assert_eq!(toasts.visible(8.0).count(), 0);
    }
}
