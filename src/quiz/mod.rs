//! Sesión de quiz: selección → preguntas con cuenta atrás → resultados.

pub mod grading;
pub mod prompt;

use crate::llm::{GenerateRequest, GenerateResponse, LlmError};
use crate::model::{Answer, Category, Difficulty, QuizQuestion};
use grading::QuizResults;

pub const QUESTIONS_PER_QUIZ: usize = 5;
pub const ANSWER_SECONDS: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Selecting,
    Playing,
    Results,
}

/// Qué pasó al recibir la respuesta del modelo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated(usize),
    Fallback,
}

/// Resultado de fijar la respuesta de la pregunta actual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct { points: u32 },
    Incorrect,
    TimedOut,
}

#[derive(Clone, Debug)]
pub struct QuizSession {
    phase: QuizPhase,
    difficulty: Difficulty,
    category: Option<Category>,
    generating: bool,
    questions: Vec<QuizQuestion>,
    current: usize,
    selected: Option<usize>,
    answers: Vec<Answer>,
    score: u32,
    time_left: u32,
    last_tick: Option<f64>,
    revealed: bool,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            phase: QuizPhase::Selecting,
            difficulty: Difficulty::Beginner,
            category: None,
            generating: false,
            questions: Vec::new(),
            current: 0,
            selected: None,
            answers: Vec::new(),
            score: 0,
            time_left: ANSWER_SECONDS,
            last_tick: None,
            revealed: false,
        }
    }

    // ---------- selección ----------

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.phase == QuizPhase::Selecting && !self.generating {
            self.difficulty = difficulty;
        }
    }

    pub fn select_category(&mut self, category: Category) {
        if self.phase == QuizPhase::Selecting && !self.generating {
            self.category = Some(category);
        }
    }

    pub fn can_start(&self) -> bool {
        self.phase == QuizPhase::Selecting && self.category.is_some() && !self.generating
    }

    /// Marca la generación en curso y devuelve la petición para el modelo.
    pub fn begin_generation(&mut self, temperature: f32) -> Option<GenerateRequest> {
        if !self.can_start() {
            return None;
        }
        let category = self.category?;
        self.generating = true;
        log::info!(
            "Generando quiz {} / {}",
            category.slug(),
            self.difficulty.as_str()
        );
        Some(prompt::build_request(category, self.difficulty, temperature))
    }

    /// Aplica la respuesta del modelo; ante cualquier fallo usa la pregunta de reserva.
    pub fn on_generated(
        &mut self,
        result: Result<GenerateResponse, LlmError>,
    ) -> Option<GenerationOutcome> {
        let category = match (self.generating, self.category) {
            (true, Some(category)) => category,
            _ => {
                log::debug!("Quiz: respuesta de generación sin petición activa, se ignora");
                return None;
            }
        };
        self.generating = false;

        let parsed = match result {
            Ok(response) => prompt::parse_questions(&response.text, category, self.difficulty)
                .map_err(|err| log::warn!("Respuesta del modelo inválida: {err}")),
            Err(err) => {
                log::error!("Error generando el quiz: {err}");
                Err(())
            }
        };

        let (questions, outcome) = match parsed {
            Ok(questions) => {
                let n = questions.len();
                (questions, GenerationOutcome::Generated(n))
            }
            Err(()) => (
                vec![prompt::fallback_question(category, self.difficulty)],
                GenerationOutcome::Fallback,
            ),
        };

        self.questions = questions;
        self.phase = QuizPhase::Playing;
        self.current = 0;
        self.answers.clear();
        self.score = 0;
        self.start_question();
        Some(outcome)
    }

    // ---------- juego ----------

    fn start_question(&mut self) {
        self.selected = None;
        self.time_left = ANSWER_SECONDS;
        self.last_tick = None;
        self.revealed = false;
    }

    pub fn choose_option(&mut self, option: usize) {
        if self.phase == QuizPhase::Playing && !self.revealed && option < 4 {
            self.selected = Some(option);
        }
    }

    /// Avanza la cuenta atrás con el reloj de la UI (segundos).
    /// Al llegar a cero fija la respuesta como si se hubiera enviado.
    pub fn tick(&mut self, now: f64) -> Option<SubmitOutcome> {
        if self.phase != QuizPhase::Playing || self.revealed {
            return None;
        }
        let Some(mut last) = self.last_tick else {
            self.last_tick = Some(now);
            return None;
        };
        while now - last >= 1.0 && self.time_left > 0 {
            self.time_left -= 1;
            last += 1.0;
        }
        self.last_tick = Some(last);

        if self.time_left == 0 {
            self.submit()
        } else {
            None
        }
    }

    pub fn submit(&mut self) -> Option<SubmitOutcome> {
        if self.phase != QuizPhase::Playing || self.revealed {
            return None;
        }
        let question = self.questions.get(self.current)?;
        let answer = self.selected.map_or(Answer::TimedOut, Answer::Chosen);
        let outcome = match answer {
            Answer::TimedOut => SubmitOutcome::TimedOut,
            a if question.is_correct(a) => SubmitOutcome::Correct {
                points: question.points,
            },
            _ => SubmitOutcome::Incorrect,
        };
        if let SubmitOutcome::Correct { points } = outcome {
            self.score += points;
        }
        self.answers.push(answer);
        self.revealed = true;
        Some(outcome)
    }

    pub fn next_question(&mut self) {
        if self.phase != QuizPhase::Playing || !self.revealed {
            return;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.start_question();
        } else {
            log::info!("Quiz terminado: {} puntos", self.score);
            self.phase = QuizPhase::Results;
        }
    }

    pub fn results(&self) -> Option<QuizResults> {
        (self.phase == QuizPhase::Results)
            .then(|| QuizResults::compute(&self.questions, &self.answers))
    }

    pub fn reset(&mut self) {
        let difficulty = self.difficulty;
        *self = Self::new();
        self.difficulty = difficulty;
    }

    // ---------- lectura ----------

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            QuizPhase::Playing => self.questions.get(self.current),
            _ => None,
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Fracción completada para la barra de progreso.
    pub fn progress(&self) -> f32 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f32 / self.questions.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::grading::Grade;
    use super::*;
    use crate::llm::TextGenerator;
    use crate::llm::testing::ScriptedGenerator;
    use futures::executor::block_on;

    fn generate_with(session: &mut QuizSession, generator: &ScriptedGenerator) -> Option<GenerationOutcome> {
        let request = session.begin_generation(0.7).expect("debería poder empezar");
        assert!(session.is_generating());
        assert!(!session.can_start());
        let result = block_on(generator.generate(request));
        session.on_generated(result)
    }

    fn ready_session() -> QuizSession {
        let mut s = QuizSession::new();
        s.select_difficulty(Difficulty::Beginner);
        s.select_category(Category::SolanaFundamentals);
        s
    }

    fn play_all(session: &mut QuizSession, pick: impl Fn(&QuizQuestion) -> usize) {
        while session.phase() == QuizPhase::Playing {
            let q = session.current_question().unwrap().clone();
            session.choose_option(pick(&q));
            assert!(session.submit().is_some());
            assert_eq!(session.answers().len(), session.current_index() + 1);
            session.next_question();
        }
    }

    #[test]
    fn start_requires_a_category() {
        let mut s = QuizSession::new();
        assert!(!s.can_start());
        assert!(s.begin_generation(0.7).is_none());
        s.select_category(Category::DefiProtocols);
        assert!(s.can_start());
    }

    #[test]
    fn tier_points_are_10_20_30() {
        let pts: Vec<u32> = Difficulty::ALL.iter().map(|d| d.points_per_question()).collect();
        assert_eq!(pts, [10, 20, 30]);
    }

    #[test]
    fn beginner_all_correct_scores_50_with_a_plus() {
        let generator = ScriptedGenerator::new(vec![Ok(prompt::sample_json(5))]);
        let mut s = ready_session();
        assert_eq!(generate_with(&mut s, &generator), Some(GenerationOutcome::Generated(5)));
        assert_eq!(s.phase(), QuizPhase::Playing);

        play_all(&mut s, |q| q.correct_answer);

        let results = s.results().unwrap();
        assert_eq!(s.score(), 50);
        assert_eq!(results.score, 50);
        assert_eq!(results.grade, Grade::APlus);
        assert_eq!(s.answers().len(), s.questions().len());
    }

    #[test]
    fn generation_error_falls_back_to_one_question() {
        let generator = ScriptedGenerator::new(vec![Err(())]);
        let mut s = ready_session();
        assert_eq!(generate_with(&mut s, &generator), Some(GenerationOutcome::Fallback));
        assert_eq!(s.phase(), QuizPhase::Playing);
        assert_eq!(s.questions().len(), 1);
        assert_eq!(s.questions()[0].id, "sample-1");
        assert!(!s.is_generating());
    }

    #[test]
    fn malformed_reply_also_falls_back() {
        let generator = ScriptedGenerator::new(vec![Ok("Sure! Here are some questions".into())]);
        let mut s = ready_session();
        assert_eq!(generate_with(&mut s, &generator), Some(GenerationOutcome::Fallback));
        assert_eq!(s.questions().len(), 1);
    }

    #[test]
    fn score_matches_sum_of_correct_points() {
        let generator = ScriptedGenerator::new(vec![Ok(prompt::sample_json(5))]);
        let mut s = ready_session();
        s.select_difficulty(Difficulty::Advanced);
        generate_with(&mut s, &generator);

        let mut last_score = 0;
        while s.phase() == QuizPhase::Playing {
            let q = s.current_question().unwrap().clone();
            // acierta sólo las preguntas pares
            let pick = if s.current_index() % 2 == 0 {
                q.correct_answer
            } else {
                (q.correct_answer + 1) % 4
            };
            s.choose_option(pick);
            s.submit();
            assert!(s.score() >= last_score);
            last_score = s.score();
            s.next_question();
        }

        let expected: u32 = s
            .questions()
            .iter()
            .zip(s.answers())
            .filter(|(q, a)| q.is_correct(**a))
            .map(|(q, _)| q.points)
            .sum();
        assert_eq!(s.score(), expected);
        assert_eq!(s.score(), 90);
        // 3 de 5 = 60 %, justo en el límite de la C
        assert_eq!(s.results().unwrap().grade, Grade::C);
    }

    #[test]
    fn countdown_times_out_with_sentinel() {
        let generator = ScriptedGenerator::new(vec![Err(())]);
        let mut s = ready_session();
        generate_with(&mut s, &generator);

        assert_eq!(s.tick(100.0), None);
        assert_eq!(s.tick(100.5), None);
        assert_eq!(s.time_left(), ANSWER_SECONDS);
        assert_eq!(s.tick(110.0), None);
        assert_eq!(s.time_left(), 20);
        assert_eq!(s.tick(130.2), Some(SubmitOutcome::TimedOut));
        assert_eq!(s.answers(), [Answer::TimedOut]);
        assert_eq!(s.answers()[0].as_index(), -1);
        assert!(s.is_revealed());

        // la cuenta atrás se detiene con la respuesta fijada
        assert_eq!(s.tick(200.0), None);
        s.choose_option(1);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn timeout_keeps_an_unsent_choice() {
        let generator = ScriptedGenerator::new(vec![Err(())]);
        let mut s = ready_session();
        generate_with(&mut s, &generator);

        s.choose_option(1);
        s.tick(0.0);
        assert_eq!(s.tick(31.0), Some(SubmitOutcome::Correct { points: 10 }));
        assert_eq!(s.score(), 10);
    }

    #[test]
    fn next_requires_revealed_answer_and_resets_timer() {
        let generator = ScriptedGenerator::new(vec![Ok(prompt::sample_json(2))]);
        let mut s = ready_session();
        generate_with(&mut s, &generator);

        s.next_question();
        assert_eq!(s.current_index(), 0);

        s.tick(0.0);
        s.tick(5.0);
        s.choose_option(3);
        s.submit();
        assert_eq!(s.submit(), None);
        s.next_question();
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.time_left(), ANSWER_SECONDS);
        assert_eq!(s.selected(), None);
        assert!(s.is_last_question());
    }

    #[test]
    fn late_result_after_reset_is_ignored() {
        let mut s = ready_session();
        s.begin_generation(0.7).unwrap();
        s.reset();
        let late = s.on_generated(Ok(GenerateResponse {
            text: prompt::sample_json(5),
        }));
        assert_eq!(late, None);
        assert_eq!(s.phase(), QuizPhase::Selecting);
        assert_eq!(s.category(), None);
    }

    #[test]
    fn reset_keeps_difficulty_only() {
        let generator = ScriptedGenerator::new(vec![Ok(prompt::sample_json(1))]);
        let mut s = ready_session();
        s.select_difficulty(Difficulty::Intermediate);
        generate_with(&mut s, &generator);
        play_all(&mut s, |_| 0);
        assert!(s.results().is_some());

        s.reset();
        assert_eq!(s.phase(), QuizPhase::Selecting);
        assert_eq!(s.difficulty(), Difficulty::Intermediate);
        assert!(s.answers().is_empty());
        assert_eq!(s.score(), 0);
        assert!(s.results().is_none());
    }
}
