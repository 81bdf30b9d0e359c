use crate::model::{Answer, QuizQuestion};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grade {
    F,
    C,
    B,
    A,
    APlus,
}

impl Grade {
    /// Los límites exactos caen en el tramo superior (90 → A+).
    pub fn from_percent(percent: f64) -> Grade {
        if percent >= 90.0 {
            Grade::APlus
        } else if percent >= 80.0 {
            Grade::A
        } else if percent >= 70.0 {
            Grade::B
        } else if percent >= 60.0 {
            Grade::C
        } else {
            Grade::F
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::F => "F",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizResults {
    pub total: usize,
    pub correct: usize,
    pub score: u32,
    pub percent: f64,
    pub grade: Grade,
}

impl QuizResults {
    /// Se calcula sólo a partir de preguntas y respuestas.
    pub fn compute(questions: &[QuizQuestion], answers: &[Answer]) -> Self {
        let (correct, score) = questions
            .iter()
            .zip(answers)
            .filter(|(q, a)| q.is_correct(**a))
            .fold((0, 0), |(n, pts), (q, _)| (n + 1, pts + q.points));
        let total = questions.len();
        let percent = if total == 0 {
            0.0
        } else {
            correct as f64 * 100.0 / total as f64
        };
        Self {
            total,
            correct,
            score,
            percent,
            grade: Grade::from_percent(percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_map_to_higher_tier() {
        assert_eq!(Grade::from_percent(100.0), Grade::APlus);
        assert_eq!(Grade::from_percent(90.0), Grade::APlus);
        assert_eq!(Grade::from_percent(89.9), Grade::A);
        assert_eq!(Grade::from_percent(80.0), Grade::A);
        assert_eq!(Grade::from_percent(70.0), Grade::B);
        assert_eq!(Grade::from_percent(60.0), Grade::C);
        assert_eq!(Grade::from_percent(59.9), Grade::F);
        assert_eq!(Grade::from_percent(0.0), Grade::F);
    }

    #[test]
    fn grade_is_monotonic_in_percent() {
        let mut last = Grade::F;
        for p in 0..=100 {
            let g = Grade::from_percent(p as f64);
            assert!(g >= last, "{p}% bajó de {last:?} a {g:?}");
            last = g;
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Grade::APlus.label(), "A+");
        assert_eq!(Grade::F.label(), "F");
    }
}
