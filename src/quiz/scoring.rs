//! Scoring and grading of a finished quiz

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::QuizConfig;
use super::question::{Answer, NOT_ANSWERED, Question};

/// Percentage needed to pass, and below which a topic is flagged as weak
pub const PASS_PERCENT: u32 = 70;

/// Extra review item suggested for failed quizzes without weak topics
const TIME_MANAGEMENT: &str = "Time Management";

/// Review record for a single question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDetail {
    pub question: String,
    /// The answer given, or "Not answered"
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

/// Outcome of a finished quiz
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    /// Whole seconds from session start to completion
    pub time_taken_secs: u64,
    pub weak_topics: Vec<String>,
    pub question_details: Vec<QuestionDetail>,
}

/// Letter grade derived from the score percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    F,
}

impl Grade {
    /// Map a percentage onto a grade bucket
    pub fn from_percentage(percent: u32) -> Self {
        match percent {
            90.. => Self::APlus,
            80..=89 => Self::A,
            70..=79 => Self::B,
            60..=69 => Self::C,
            _ => Self::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// `round(100 * correct / total)`, or 0 when there are no questions
pub fn score_percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Integer round-half-up of 100 * correct / total
    ((200 * correct + total) / (2 * total)) as u32
}

/// Format seconds as "Xm Ys"
pub fn format_duration(secs: u64) -> String {
    format!("{}m {}s", secs / 60, secs % 60)
}

/// Score a completed set of answers
pub fn score(
    config: &QuizConfig,
    questions: &[Question],
    answers: &[Option<Answer>],
    elapsed: Duration,
) -> QuizResult {
    let question_details: Vec<QuestionDetail> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let answer = answers.get(i).copied().flatten();
            QuestionDetail {
                question: q.text().to_string(),
                user_answer: answer
                    .map(|a| q.render_answer(&a))
                    .unwrap_or_else(|| NOT_ANSWERED.to_string()),
                correct_answer: q.correct_answer_text(),
                is_correct: answer.is_some_and(|a| q.is_correct(&a)),
                explanation: q.explanation().to_string(),
            }
        })
        .collect();

    let total_questions = questions.len();
    let correct_answers = question_details.iter().filter(|d| d.is_correct).count();

    // correct < 0.7 * total, kept in integers
    let weak_topics = if 10 * correct_answers < 7 * total_questions {
        vec![config.topic.clone()]
    } else {
        Vec::new()
    };

    QuizResult {
        total_questions,
        correct_answers,
        incorrect_answers: total_questions - correct_answers,
        time_taken_secs: elapsed.as_secs(),
        weak_topics,
        question_details,
    }
}

impl QuizResult {
    pub fn score_percentage(&self) -> u32 {
        score_percentage(self.correct_answers, self.total_questions)
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.score_percentage())
    }

    pub fn passed(&self) -> bool {
        self.score_percentage() >= PASS_PERCENT
    }

    /// Topics suggested for review on the results screen
    pub fn skills_to_improve(&self, topic: &str) -> Vec<String> {
        if !self.weak_topics.is_empty() {
            self.weak_topics.clone()
        } else if !self.passed() {
            vec![topic.to_string(), TIME_MANAGEMENT.to_string()]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::generator::generate;
    use crate::quiz::config::ResponseType;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn science_batch(n: usize, response_type: ResponseType) -> (QuizConfig, Vec<Question>) {
        let config = QuizConfig::new("Science")
            .with_num_questions(n)
            .with_response_type(response_type)
            .with_answer_mode(crate::quiz::config::AnswerMode::Batch);
        let questions = generate(&config, &mut StdRng::seed_from_u64(11));
        (config, questions)
    }

    fn answers_with_correct(questions: &[Question], correct: usize) -> Vec<Option<Answer>> {
        questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let right = q.correct_answer();
                if i < correct {
                    Some(right)
                } else {
                    Some(match right {
                        Answer::Choice(c) => Answer::Choice((c + 1) % 4),
                        Answer::Verdict(v) => Answer::Verdict(!v),
                    })
                }
            })
            .collect()
    }

    #[test]
    fn all_correct_has_no_weak_topics() {
        let (config, questions) = science_batch(5, ResponseType::MultipleChoice);
        let answers = answers_with_correct(&questions, 5);
        let result = score(&config, &questions, &answers, Duration::from_secs(42));

        assert_eq!(result.total_questions, 5);
        assert_eq!(result.correct_answers, 5);
        assert_eq!(result.incorrect_answers, 0);
        assert_eq!(result.time_taken_secs, 42);
        assert!(result.weak_topics.is_empty());
        assert_eq!(result.grade(), Grade::APlus);
    }

    #[test]
    fn two_of_five_flags_topic() {
        let (config, questions) = science_batch(5, ResponseType::MultipleChoice);
        let answers = answers_with_correct(&questions, 2);
        let result = score(&config, &questions, &answers, Duration::ZERO);

        assert_eq!(result.correct_answers, 2);
        assert_eq!(result.incorrect_answers, 3);
        assert_eq!(result.weak_topics, vec!["Science".to_string()]);
        assert_eq!(result.score_percentage(), 40);
        assert_eq!(result.grade(), Grade::F);
    }

    #[test]
    fn exactly_seventy_percent_is_not_weak() {
        let (config, questions) = science_batch(10, ResponseType::TrueFalse);
        let result = score(&config, &questions, &answers_with_correct(&questions, 7), Duration::ZERO);
        assert!(result.weak_topics.is_empty());
        assert!(result.passed());
        assert_eq!(result.grade(), Grade::B);
    }

    #[test]
    fn unanswered_slots_render_and_never_count() {
        let (config, questions) = science_batch(5, ResponseType::TrueFalse);
        let mut answers = answers_with_correct(&questions, 5);
        answers[4] = None;
        let result = score(&config, &questions, &answers, Duration::ZERO);

        assert_eq!(result.correct_answers, 4);
        let last = &result.question_details[4];
        assert_eq!(last.user_answer, "Not answered");
        assert_eq!(last.correct_answer, "True");
        assert!(!last.is_correct);
    }

    #[test]
    fn details_render_true_false_as_words() {
        let (config, questions) = science_batch(5, ResponseType::TrueFalse);
        let answers = answers_with_correct(&questions, 0);
        let result = score(&config, &questions, &answers, Duration::ZERO);
        let first = &result.question_details[0];
        assert_eq!(first.user_answer, "False");
        assert_eq!(first.correct_answer, "True");
        assert_eq!(first.question, questions[0].text());
        assert_eq!(first.explanation, questions[0].explanation());
    }

    #[test]
    fn elapsed_time_is_floored() {
        let (config, questions) = science_batch(5, ResponseType::MultipleChoice);
        let result = score(&config, &questions, &[], Duration::from_millis(61_999));
        assert_eq!(result.time_taken_secs, 61);
        assert_eq!(result.correct_answers, 0);
    }

    #[test]
    fn zero_questions_scores_zero_percent() {
        assert_eq!(score_percentage(0, 0), 0);
        let result = score(&QuizConfig::default(), &[], &[], Duration::ZERO);
        assert_eq!(result.score_percentage(), 0);
        assert!(result.weak_topics.is_empty());
        assert!(result.question_details.is_empty());
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(score_percentage(1, 3), 33);
        assert_eq!(score_percentage(2, 3), 67);
        assert_eq!(score_percentage(1, 8), 13);
        assert_eq!(score_percentage(9, 10), 90);
    }

    #[test]
    fn grade_buckets() {
        assert_eq!(Grade::from_percentage(100), Grade::APlus);
        assert_eq!(Grade::from_percentage(90), Grade::APlus);
        assert_eq!(Grade::from_percentage(89), Grade::A);
        assert_eq!(Grade::from_percentage(80), Grade::A);
        assert_eq!(Grade::from_percentage(70), Grade::B);
        assert_eq!(Grade::from_percentage(60), Grade::C);
        assert_eq!(Grade::from_percentage(59), Grade::F);
        assert_eq!(Grade::APlus.to_string(), "A+");
    }

    #[test]
    fn skills_to_improve_falls_back_to_time_management() {
        let result = QuizResult {
            total_questions: 10,
            correct_answers: 6,
            incorrect_answers: 4,
            weak_topics: Vec::new(),
            ..Default::default()
        };
        assert_eq!(
            result.skills_to_improve("Art"),
            vec!["Art".to_string(), "Time Management".to_string()]
        );
    }

    #[test]
    fn format_duration_splits_minutes() {
        assert_eq!(format_duration(0), "0m 0s");
        assert_eq!(format_duration(125), "2m 5s");
    }

    proptest! {
        #[test]
        fn correct_plus_incorrect_is_total(n in 0usize..40, correct_seed in any::<usize>()) {
            let (config, questions) = science_batch(n, ResponseType::Mixed);
            let correct = if n == 0 { 0 } else { correct_seed % (n + 1) };
            let result = score(&config, &questions, &answers_with_correct(&questions, correct), Duration::ZERO);
            prop_assert_eq!(result.correct_answers + result.incorrect_answers, result.total_questions);
            prop_assert_eq!(result.correct_answers, correct);
            prop_assert!(result.score_percentage() <= 100);
        }
    }
}
