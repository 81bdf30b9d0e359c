//! Petición de preguntas al modelo y lectura de su respuesta.

use serde::Deserialize;
use thiserror::Error;

use super::QUESTIONS_PER_QUIZ;
use crate::llm::GenerateRequest;
use crate::model::{Category, Difficulty, QuizQuestion};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizParseError {
    #[error("JSON inválido: {0}")]
    Json(String),
    #[error("el modelo no devolvió preguntas")]
    Empty,
    #[error("la pregunta {index} está vacía")]
    EmptyQuestion { index: usize },
    #[error("la pregunta {index} tiene {count} opciones, se esperaban 4")]
    InvalidOptions { index: usize, count: usize },
    #[error("la pregunta {index} marca como correcta la opción {answer}")]
    InvalidAnswer { index: usize, answer: usize },
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    #[serde(rename = "correctAnswer", alias = "correct_answer")]
    correct_answer: usize,
    #[serde(default)]
    explanation: String,
}

pub fn quiz_prompt(category: Category, difficulty: Difficulty) -> String {
    let level = difficulty.as_str();
    format!(
        "Generate {QUESTIONS_PER_QUIZ} multiple choice quiz questions about {topic} for {level} level.

Format as JSON array with this exact structure:
[
  {{
    \"question\": \"Clear question text\",
    \"options\": [\"Option A\", \"Option B\", \"Option C\", \"Option D\"],
    \"correctAnswer\": 0,
    \"explanation\": \"Detailed explanation of correct answer\",
    \"points\": {points}
  }}
]

Make questions challenging but fair for {level} level. Ensure explanations are educational and helpful.",
        topic = category.topic_description(),
        points = difficulty.points_per_question(),
    )
}

pub fn build_request(category: Category, difficulty: Difficulty, temperature: f32) -> GenerateRequest {
    GenerateRequest {
        prompt: Some(quiz_prompt(category, difficulty)),
        temperature: Some(temperature),
        max_steps: 1,
        ..Default::default()
    }
}

/// Quita vallas de markdown y texto alrededor del array.
fn json_body(text: &str) -> &str {
    let trimmed = text.trim();
    match (trimmed.find('['), trimmed.rfind(']')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

pub fn parse_questions(
    text: &str,
    category: Category,
    difficulty: Difficulty,
) -> Result<Vec<QuizQuestion>, QuizParseError> {
    let raw: Vec<RawQuestion> =
        serde_json::from_str(json_body(text)).map_err(|e| QuizParseError::Json(e.to_string()))?;
    if raw.is_empty() {
        return Err(QuizParseError::Empty);
    }

    raw.into_iter()
        .enumerate()
        .map(|(index, q)| {
            if q.question.trim().is_empty() {
                return Err(QuizParseError::EmptyQuestion { index });
            }
            let count = q.options.len();
            let options: [String; 4] = q
                .options
                .try_into()
                .map_err(|_| QuizParseError::InvalidOptions { index, count })?;
            if q.correct_answer >= options.len() {
                return Err(QuizParseError::InvalidAnswer {
                    index,
                    answer: q.correct_answer,
                });
            }
            Ok(QuizQuestion {
                id: format!("{}-{}-{index}", category.slug(), difficulty.as_str()),
                question: q.question,
                options,
                correct_answer: q.correct_answer,
                explanation: q.explanation,
                difficulty,
                category,
                points: difficulty.points_per_question(),
            })
        })
        .collect()
}

/// Pregunta de reserva cuando la generación falla.
pub fn fallback_question(category: Category, difficulty: Difficulty) -> QuizQuestion {
    QuizQuestion {
        id: "sample-1".to_string(),
        question: "What is the main advantage of Solana's Proof of History?".to_string(),
        options: [
            "Lower energy consumption".to_string(),
            "Faster transaction processing".to_string(),
            "Better smart contract capabilities".to_string(),
            "Higher decentralization".to_string(),
        ],
        correct_answer: 1,
        explanation: "Proof of History allows Solana to achieve faster transaction processing by providing a cryptographic timestamp, eliminating the need for nodes to communicate about time.".to_string(),
        difficulty,
        category,
        points: difficulty.points_per_question(),
    }
}

#[cfg(test)]
pub(crate) fn sample_json(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"question":"Q{i}?","options":["a","b","c","d"],"correctAnswer":{},"explanation":"porque","points":99}}"#,
                i % 4
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAT: Category = Category::SolanaFundamentals;
    const DIFF: Difficulty = Difficulty::Intermediate;

    #[test]
    fn prompt_names_topic_level_and_points() {
        let prompt = quiz_prompt(CAT, DIFF);
        assert!(prompt.starts_with("Generate 5 multiple choice quiz questions about Solana architecture"));
        assert!(prompt.contains("for intermediate level"));
        assert!(prompt.contains("\"points\": 20"));

        let request = build_request(CAT, DIFF, 0.7);
        assert_eq!(request.temperature, Some(0.7));
        assert!(request.tools.is_none());
    }

    #[test]
    fn parses_plain_and_fenced_arrays() {
        let plain = parse_questions(&sample_json(5), CAT, DIFF).unwrap();
        assert_eq!(plain.len(), 5);
        assert_eq!(plain[2].id, "solana-fundamentals-intermediate-2");
        assert_eq!(plain[3].correct_answer, 3);
        // los puntos vienen del nivel, no del modelo
        assert!(plain.iter().all(|q| q.points == 20));

        let fenced = format!("Here you go:\n```json\n{}\n```", sample_json(2));
        assert_eq!(parse_questions(&fenced, CAT, DIFF).unwrap().len(), 2);
    }

    #[test]
    fn rejects_malformed_content() {
        assert!(matches!(parse_questions("lo siento", CAT, DIFF), Err(QuizParseError::Json(_))));
        assert_eq!(parse_questions("[]", CAT, DIFF), Err(QuizParseError::Empty));

        let three = r#"[{"question":"q","options":["a","b","c"],"correctAnswer":0}]"#;
        assert_eq!(
            parse_questions(three, CAT, DIFF),
            Err(QuizParseError::InvalidOptions { index: 0, count: 3 })
        );

        let out_of_range = r#"[{"question":"q","options":["a","b","c","d"],"correctAnswer":4}]"#;
        assert_eq!(
            parse_questions(out_of_range, CAT, DIFF),
            Err(QuizParseError::InvalidAnswer { index: 0, answer: 4 })
        );

        let blank = r#"[{"question":"  ","options":["a","b","c","d"],"correctAnswer":1}]"#;
        assert_eq!(
            parse_questions(blank, CAT, DIFF),
            Err(QuizParseError::EmptyQuestion { index: 0 })
        );
    }

    #[test]
    fn fallback_keeps_selected_category_and_tier() {
        let q = fallback_question(Category::NftTokens, Difficulty::Advanced);
        assert_eq!(q.category, Category::NftTokens);
        assert_eq!(q.points, 30);
        assert_eq!(q.correct_answer, 1);
    }
}
