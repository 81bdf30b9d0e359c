use crate::LearningQuestApp;
use crate::i18n::Msg;
use crate::model::{Answer, Category, Difficulty, GameView};
use crate::quiz::QuizPhase;
use crate::ui::helpers::{big_button, card, heading_block, progress_bar};
use crate::ui::layout::scroll_panel;
use egui::{Color32, Context, RichText, Ui};

const CORRECT: Color32 = Color32::from_rgb(34, 197, 94);
const WRONG: Color32 = Color32::from_rgb(239, 68, 68);

fn category_icon(category: Category) -> &'static str {
    match category {
        Category::BlockchainBasics => "📘",
        Category::SolanaFundamentals => "⚡",
        Category::DefiProtocols => "💰",
        Category::NftTokens => "🖼",
    }
}

pub fn ui_quiz(app: &mut LearningQuestApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);
    scroll_panel(ctx, 760.0, |ui| match app.quiz.phase() {
        QuizPhase::Selecting => ui_selecting(app, ui),
        QuizPhase::Playing => ui_playing(app, ui, now),
        QuizPhase::Results => ui_results(app, ui),
    });
}

fn ui_selecting(app: &mut LearningQuestApp, ui: &mut Ui) {
    heading_block(ui, &app.t(Msg::QuizTitle), &app.t(Msg::QuizSubtitle));
    let generating = app.quiz.is_generating();

    ui.label(RichText::new(app.t(Msg::SelectDifficulty)).strong());
    ui.horizontal(|ui| {
        for difficulty in Difficulty::ALL {
            let label = format!(
                "{}\n{}",
                app.t(Msg::DifficultyName(difficulty)),
                app.t(Msg::DifficultyPoints(difficulty))
            );
            let selected = app.quiz.difficulty() == difficulty;
            let resp = ui.add_enabled(
                !generating,
                egui::Button::selectable(selected, label).min_size(egui::vec2(150.0, 44.0)),
            );
            if resp.clicked() {
                app.quiz.select_difficulty(difficulty);
            }
        }
    });
    ui.add_space(12.0);

    ui.label(RichText::new(app.t(Msg::SelectCategory)).strong());
    egui::Grid::new("quiz_categories")
        .num_columns(2)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            for (i, category) in Category::ALL.into_iter().enumerate() {
                let selected = app.quiz.category() == Some(category);
                let accent = selected.then_some(ui.visuals().selection.bg_fill);
                let resp = card(ui, accent, |ui| {
                    ui.set_width(320.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(category_icon(category)).size(24.0));
                        ui.vertical(|ui| {
                            ui.label(RichText::new(app.t(Msg::QuizCategoryName(category))).strong());
                            ui.label(RichText::new(app.t(Msg::QuizCategoryDescription(category))).small());
                        });
                    });
                    ui.interact(ui.min_rect(), ui.id().with(category.slug()), egui::Sense::click())
                });
                if resp.clicked() && !generating {
                    app.quiz.select_category(category);
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
    ui.add_space(16.0);

    ui.vertical_centered(|ui| {
        if generating {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(app.t(Msg::GeneratingQuiz));
            });
        } else if big_button(
            ui,
            format!("🎯 {}", app.t(Msg::StartQuizChallenge)),
            260.0,
            40.0,
            app.quiz.can_start(),
        ) {
            app.start_quiz();
        }
    });
}

fn ui_playing(app: &mut LearningQuestApp, ui: &mut Ui, now: f64) {
    let Some(question) = app.quiz.current_question().cloned() else {
        return;
    };
    let total = app.quiz.questions().len();
    let revealed = app.quiz.is_revealed();
    let time_left = app.quiz.time_left();

    ui.horizontal(|ui| {
        ui.label(app.t(Msg::QuestionCounter {
            current: app.quiz.current_index() + 1,
            total,
        }));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let color = if time_left <= 10 { WRONG } else { ui.visuals().text_color() };
            ui.label(RichText::new(app.t(Msg::TimeLeft(time_left))).color(color).strong());
            ui.label(format!("{}: {}", app.t(Msg::Score), app.quiz.score()));
        });
    });
    progress_bar(ui, app.quiz.progress(), None);
    ui.add_space(12.0);

    card(ui, None, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(&question.question).size(18.0).strong());
    });
    ui.add_space(8.0);

    let selected = app.quiz.selected();
    let w = ui.available_width();
    for (i, option) in question.options.iter().enumerate() {
        let letter = (b'A' + i as u8) as char;
        let mut text = RichText::new(format!("{letter}. {option}"));
        if revealed && i == question.correct_answer {
            text = text.color(CORRECT).strong();
        } else if revealed && selected == Some(i) {
            text = text.color(WRONG);
        }
        let button = egui::Button::selectable(selected == Some(i), text).min_size(egui::vec2(w, 36.0));
        if ui.add_enabled(!revealed, button).clicked() {
            app.quiz.choose_option(i);
        }
    }
    ui.add_space(12.0);

    if revealed {
        card(ui, Some(Color32::from_rgb(59, 130, 246)), |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("💡 {}", app.t(Msg::Explanation))).strong());
            ui.label(&question.explanation);
        });
        ui.add_space(8.0);
        let label = if app.quiz.is_last_question() {
            app.t(Msg::ViewResults)
        } else {
            app.t(Msg::NextQuestion)
        };
        ui.vertical_centered(|ui| {
            if big_button(ui, label, 220.0, 38.0, true) {
                app.next_question(now);
            }
        });
    } else {
        ui.vertical_centered(|ui| {
            if big_button(ui, app.t(Msg::SubmitAnswer), 220.0, 38.0, selected.is_some()) {
                app.submit_answer();
            }
        });
    }
}

fn ui_results(app: &mut LearningQuestApp, ui: &mut Ui) {
    let Some(results) = app.quiz.results() else {
        return;
    };

    ui.vertical_centered(|ui| {
        ui.label(RichText::new("🏆").size(48.0));
        ui.heading(app.t(Msg::QuizComplete));
        ui.label(RichText::new(app.t(Msg::HowYouPerformed)).weak());
        ui.add_space(8.0);
        ui.label(RichText::new(results.grade.label()).size(40.0).strong());
        ui.label(app.t(Msg::GradeMessage(results.grade)));
        ui.label(format!(
            "{}: {} · {} · {:.0}%",
            app.t(Msg::Score),
            results.score,
            app.t(Msg::CorrectCount {
                correct: results.correct,
                total: results.total,
            }),
            results.percent
        ));
    });
    ui.add_space(12.0);

    ui.heading(app.t(Msg::QuestionReview));
    let questions = app.quiz.questions().to_vec();
    let answers = app.quiz.answers().to_vec();
    for (i, question) in questions.iter().enumerate() {
        let answer = answers.get(i).copied().unwrap_or(Answer::TimedOut);
        let ok = question.is_correct(answer);
        card(ui, Some(if ok { CORRECT } else { WRONG }), |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("{}. {}", i + 1, question.question)).strong());
            let chosen = match answer {
                Answer::Chosen(idx) => question.options.get(idx).cloned().unwrap_or_default(),
                Answer::TimedOut => app.t(Msg::NoAnswer),
            };
            ui.label(format!("{}: {chosen}", app.t(Msg::YourAnswer)));
            if !ok {
                ui.label(
                    RichText::new(format!("✔ {}", question.options[question.correct_answer])).color(CORRECT),
                );
            }
            ui.label(RichText::new(&question.explanation).small().weak());
        });
    }
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        if big_button(ui, app.t(Msg::TakeAnotherQuiz), 200.0, 38.0, true) {
            app.restart_quiz();
        }
        if big_button(ui, app.t(Msg::BackToDashboard), 200.0, 38.0, true) {
            app.go_to(GameView::Dashboard);
        }
    });
}
