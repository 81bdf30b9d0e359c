use crate::LearningQuestApp;
use crate::i18n::{Msg, QUICK_QUESTION_COUNT};
use crate::model::Role;
use crate::tutor::TutorMode;
use crate::ui::helpers::{card, heading_block};
use egui::{CentralPanel, Color32, Context, Key, RichText, ScrollArea, TextEdit};
use egui_commonmark::CommonMarkViewer;

pub fn ui_tutor(app: &mut LearningQuestApp, ctx: &Context) {
    // Panel lateral: modo y preguntas rápidas
    egui::SidePanel::right("tutor_side")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            for mode in TutorMode::ALL {
                let selected = app.tutor.mode() == mode;
                if ui
                    .selectable_label(selected, app.t(Msg::TutorModeName(mode)))
                    .clicked()
                {
                    app.tutor.set_mode(mode);
                }
            }
            ui.separator();
            ui.label(RichText::new(app.t(Msg::QuickQuestions)).strong());
            let waiting = app.tutor.is_waiting();
            let w = ui.available_width();
            for i in 0..QUICK_QUESTION_COUNT {
                let question = app.t(Msg::QuickQuestion(i));
                let button = egui::Button::new(RichText::new(question).small())
                    .min_size(egui::vec2(w, 28.0));
                if ui.add_enabled(!waiting, button).clicked() {
                    app.fill_quick_question(i);
                }
            }
        });

    // Caja de entrada abajo
    egui::TopBottomPanel::bottom("tutor_input").show(ctx, |ui| {
        ui.add_space(6.0);
        let mut send = false;
        ui.horizontal(|ui| {
            let width = ui.available_width() - 90.0;
            let placeholder = app.t(Msg::TutorPlaceholder);
            let resp = ui.add(
                TextEdit::multiline(&mut app.tutor.input)
                    .hint_text(placeholder)
                    .desired_rows(2)
                    .desired_width(width),
            );
            // Enter envía; Shift+Enter hace salto de línea
            if resp.has_focus()
                && ui.input(|i| i.key_pressed(Key::Enter) && !i.modifiers.shift)
            {
                let trimmed = app.tutor.input.trim_end_matches('\n').to_string();
                app.tutor.input = trimmed;
                send = true;
            }
            let can_send = app.tutor.can_send();
            if ui
                .add_enabled(can_send, egui::Button::new(app.t(Msg::TutorSend)).min_size(egui::vec2(80.0, 40.0)))
                .clicked()
            {
                send = true;
            }
        });
        ui.label(RichText::new(app.t(Msg::TutorPoweredBy)).small().weak());
        if send {
            app.send_tutor_message();
        }
    });

    CentralPanel::default().show(ctx, |ui| {
        heading_block(ui, &app.t(Msg::TutorTitle), &app.t(Msg::TutorSubtitle));
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                let you = app.t(Msg::TutorYou);
                let tutor = app.t(Msg::TutorAiTutor);
                let thinking = app.t(Msg::TutorThinking);
                let LearningQuestApp { tutor: chat, cm_cache, .. } = &mut *app;
                for message in chat.messages() {
                    let (who, accent) = match message.role {
                        Role::User => (&you, Some(Color32::from_rgb(59, 130, 246))),
                        Role::Assistant => (&tutor, None),
                    };
                    card(ui, accent, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(who.as_str()).small().strong());
                        match message.role {
                            Role::User => {
                                ui.label(&message.content);
                            }
                            Role::Assistant => {
                                CommonMarkViewer::new().show(ui, cm_cache, &message.content);
                            }
                        }
                    });
                    ui.add_space(6.0);
                }
                if chat.is_waiting() {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new(&thinking).weak());
                    });
                }
            });
    });
}
