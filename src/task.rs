//! Llamadas externas fuera del hilo de la UI.
//!
//! Cada flujo (quiz, tutor, mint) tiene un [`TaskSlot`]: un canal y un contador
//! de generación. Empezar otra llamada o cancelar sube la generación, y los
//! resultados que llegan con una generación vieja se descartan en `poll`.

use std::sync::mpsc::{self, Receiver, Sender};

#[cfg(not(target_arch = "wasm32"))]
pub type BoxedFuture<T> = futures::future::BoxFuture<'static, T>;
#[cfg(target_arch = "wasm32")]
pub type BoxedFuture<T> = futures::future::LocalBoxFuture<'static, T>;

/// Extremo que se lleva la tarea para entregar su resultado.
pub struct TaskHandle<T> {
    generation: u64,
    tx: Sender<(u64, T)>,
}

impl<T> TaskHandle<T> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn finish(self, value: T) {
        // Si el slot ya no existe nadie espera el resultado.
        let _ = self.tx.send((self.generation, value));
    }
}

pub struct TaskSlot<T> {
    name: &'static str,
    generation: u64,
    pending: bool,
    tx: Sender<(u64, T)>,
    rx: Receiver<(u64, T)>,
}

impl<T> TaskSlot<T> {
    pub fn new(name: &'static str) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            name,
            generation: 0,
            pending: false,
            tx,
            rx,
        }
    }

    /// Abre una generación nueva; cualquier tarea anterior queda obsoleta.
    pub fn begin(&mut self) -> TaskHandle<T> {
        self.generation += 1;
        self.pending = true;
        TaskHandle {
            generation: self.generation,
            tx: self.tx.clone(),
        }
    }

    pub fn cancel(&mut self) {
        if self.pending {
            log::debug!("{}: tarea {} cancelada", self.name, self.generation);
        }
        self.generation += 1;
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Resultado de la generación actual, si ya llegó.
    pub fn poll(&mut self) -> Option<T> {
        while let Ok((generation, value)) = self.rx.try_recv() {
            if self.pending && generation == self.generation {
                self.pending = false;
                return Some(value);
            }
            log::debug!(
                "{}: resultado obsoleto descartado (generación {generation}, actual {})",
                self.name,
                self.generation
            );
        }
        None
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<T: Send + 'static>(handle: TaskHandle<T>, fut: BoxedFuture<T>) {
    std::thread::spawn(move || {
        let value = futures::executor::block_on(fut);
        handle.finish(value);
    });
}

#[cfg(target_arch = "wasm32")]
pub fn spawn<T: 'static>(handle: TaskHandle<T>, fut: BoxedFuture<T>) {
    wasm_bindgen_futures::spawn_local(async move {
        let value = fut.await;
        handle.finish(value);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    #[test]
    fn delivers_result_of_current_generation() {
        let mut slot = TaskSlot::new("test");
        assert!(!slot.is_pending());
        let handle = slot.begin();
        assert!(slot.is_pending());
        assert_eq!(slot.poll(), None);
        handle.finish(7);
        assert_eq!(slot.poll(), Some(7));
        assert!(!slot.is_pending());
        assert_eq!(slot.poll(), None);
    }

    #[test]
    fn cancelled_result_is_discarded() {
        let mut slot = TaskSlot::new("test");
        let handle = slot.begin();
        slot.cancel();
        handle.finish("tarde");
        assert_eq!(slot.poll(), None);
        assert!(!slot.is_pending());
    }

    #[test]
    fn newer_task_wins_over_older_one() {
        let mut slot = TaskSlot::new("test");
        let old = slot.begin();
        let new = slot.begin();
        assert!(new.generation() > old.generation());
        old.finish(1);
        new.finish(2);
        assert_eq!(slot.poll(), Some(2));
    }

    #[test]
    fn spawned_future_reports_through_slot() {
        let mut slot = TaskSlot::new("test");
        let handle = slot.begin();
        spawn(handle, async { 40 + 2 }.boxed());

        let mut got = None;
        for _ in 0..200 {
            got = slot.poll();
            if got.is_some() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        assert_eq!(got, Some(42));
    }
}
