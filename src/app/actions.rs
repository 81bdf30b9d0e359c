use super::*;

use chrono::NaiveDate;

use crate::agent::AgentToolkit;
use crate::certificates::{MintEvent, MintRefusal};
use crate::i18n::QUICK_QUESTION_COUNT;
use crate::llm::{GenerateRequest, ToolExecutor};
use crate::quiz::{GenerationOutcome, QuizPhase, SubmitOutcome};
use crate::task;

/// Fecha local de hoy (para certificados y metadatos).
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl LearningQuestApp {
    fn spawn_generation(&mut self, request: GenerateRequest, tutor: bool) {
        let slot = if tutor {
            &mut self.tutor_task
        } else {
            &mut self.quiz_task
        };
        let handle = slot.begin();
        task::spawn(handle, self.generator.generate(request));
    }

    // ---------------- Quiz ----------------

    pub fn start_quiz(&mut self) {
        let Some(request) = self.quiz.begin_generation(self.config.llm.temperature) else {
            return;
        };
        self.spawn_generation(request, false);
    }

    pub fn submit_answer(&mut self) {
        if let Some(outcome) = self.quiz.submit() {
            self.notify_answer(outcome);
        }
    }

    fn notify_answer(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Correct { points } => {
                self.toasts.success(format!("{} +{points}", self.t(Msg::Correct)))
            }
            SubmitOutcome::Incorrect => self.toasts.error(self.t(Msg::Incorrect)),
            SubmitOutcome::TimedOut => self.toasts.error(self.t(Msg::TimeUp)),
        }
    }

    /// Pasa de pregunta; al terminar el quiz suma el resultado al jugador.
    pub fn next_question(&mut self, now: f64) {
        self.quiz.next_question();
        if self.quiz.phase() != QuizPhase::Results {
            return;
        }
        let score = self.quiz.score();
        if self.dashboard.stats.record_quiz(score) {
            self.level_up.trigger(now);
            self.toasts.success(format!(
                "{} {}",
                self.t(Msg::LevelUp),
                self.t(Msg::CharacterLevel(self.dashboard.stats.level))
            ));
        }
    }

    /// "Otro quiz": vuelve a la selección sin salir de la vista.
    pub fn restart_quiz(&mut self) {
        self.quiz_task.cancel();
        self.quiz.reset();
    }

    // ---------------- Tutor ----------------

    fn tutor_tools(&self) -> Option<Arc<dyn ToolExecutor>> {
        self.wallet.public_key().map(|owner| {
            Arc::new(AgentToolkit::new(owner, self.rpc.clone())) as Arc<dyn ToolExecutor>
        })
    }

    pub fn send_tutor_message(&mut self) {
        let tools = self.tutor_tools();
        if let Some(request) = self.tutor.send(tools) {
            self.spawn_generation(request, true);
        }
    }

    /// Copia una pregunta rápida en la caja de entrada; se envía como un turno normal.
    pub fn fill_quick_question(&mut self, index: usize) {
        if index >= QUICK_QUESTION_COUNT {
            return;
        }
        self.tutor.input = self.t(Msg::QuickQuestion(index));
    }

    // ---------------- Certificados ----------------

    pub fn claim_certificate(&mut self, id: &str, now: f64) {
        let Some(category) = self.gallery.get(id).map(|c| c.category) else {
            log::warn!("Certificado desconocido: {id}");
            return;
        };
        let name = self.t(Msg::CertificateName(category));
        let description = self.t(Msg::CertificateDescription(category));
        let owner = self.wallet.public_key();

        match self
            .gallery
            .start_mint(id, owner, &name, &description, now, today())
        {
            Ok(()) => {
                self.toasts.info(self.t(Msg::MintPreparing));
                self.toasts.info(self.t(Msg::MintInProgress));
            }
            Err(refusal) => {
                log::warn!("Minteo de {id} rechazado: {refusal:?}");
                if refusal != MintRefusal::Busy {
                    self.toasts.error(self.t(Msg::MintNotAllowed));
                }
            }
        }
    }

    // ---------------- Bucle ----------------

    /// Recoge resultados de tareas y avanza los temporizadores.
    pub fn poll_tasks(&mut self, now: f64) {
        if let Some(result) = self.quiz_task.poll() {
            if let Some(GenerationOutcome::Fallback) = self.quiz.on_generated(result) {
                self.toasts.error(self.t(Msg::QuizGenerationFailed));
            }
        }

        if let Some(result) = self.tutor_task.poll() {
            let empty = self.t(Msg::TutorEmptyReply);
            let apology = self.t(Msg::TutorApology);
            self.tutor.on_reply(result, &empty, &apology);
        }

        if let Some(outcome) = self.quiz.tick(now) {
            self.notify_answer(outcome);
        }

        match self.gallery.poll_mint(now, today(), self.wallet.connected()) {
            Some(MintEvent::Succeeded { id }) => {
                log::info!("Certificado {id} reclamado");
                self.toasts.success(self.t(Msg::MintSucceeded));
                self.toasts.success(self.t(Msg::MintRecorded));
            }
            Some(MintEvent::Failed { id }) => {
                log::error!("Falló el minteo de {id}");
                self.toasts.error(self.t(Msg::MintFailed));
            }
            None => {}
        }

        if self.level_up.poll_finished(now) {
            log::debug!("Animación de subida de nivel terminada");
        }
    }
}
