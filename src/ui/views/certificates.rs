use crate::LearningQuestApp;
use crate::app::{CertificateCard, CertificateStatus};
use crate::certificates::Rarity;
use crate::i18n::Msg;
use crate::ui::helpers::{big_button, card, heading_block, progress_bar, rgb, stat_card};
use crate::ui::layout::scroll_panel;
use egui::{Color32, Context, RichText, Ui};

fn rarity_color(rarity: Rarity) -> Color32 {
    match rarity {
        Rarity::Common => Color32::from_rgb(156, 163, 175),
        Rarity::Rare => Color32::from_rgb(59, 130, 246),
        Rarity::Epic => Color32::from_rgb(168, 85, 247),
        Rarity::Legendary => Color32::from_rgb(234, 179, 8),
    }
}

enum CardAction {
    Open(String),
    Claim(String),
}

pub fn ui_certificates(app: &mut LearningQuestApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);
    let cards = app.certificate_cards();
    let counts = app.gallery.counts();
    let mut action = None;

    scroll_panel(ctx, 960.0, |ui| {
        heading_block(ui, &app.t(Msg::NftTitle), &app.t(Msg::NftSubtitle));

        let w = ((ui.available_width() - 48.0) / 4.0).max(120.0);
        ui.horizontal_wrapped(|ui| {
            stat_card(ui, w, "🏆", &app.t(Msg::CertificatesEarned), &counts.earned.to_string(), "");
            stat_card(ui, w, "✨", &app.t(Msg::ReadyToClaim), &counts.ready.to_string(), "");
            stat_card(ui, w, "⏳", &app.t(Msg::InProgress), &counts.in_progress.to_string(), "");
            stat_card(ui, w, "👑", &app.t(Msg::LegendaryCerts), &counts.legendary.to_string(), "");
        });
        ui.add_space(16.0);

        egui::Grid::new("certificate_grid")
            .num_columns(2)
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for (i, cert) in cards.iter().enumerate() {
                    if let Some(a) = certificate_card(app, ui, cert) {
                        action = Some(a);
                    }
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
        ui.add_space(16.0);

        card(ui, None, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(app.t(Msg::StartJourney)).strong());
                ui.label(app.t(Msg::JourneyDescription));
            });
        });
    });

    match action {
        Some(CardAction::Open(id)) => app.gallery.selected = Some(id),
        Some(CardAction::Claim(id)) => app.claim_certificate(&id, now),
        None => {}
    }

    detail_window(app, ctx, &cards, now);
}

fn status_line(app: &LearningQuestApp, ui: &mut Ui, cert: &CertificateCard) {
    match cert.status {
        CertificateStatus::Earned => {
            let date = cert.earned_date.clone().unwrap_or_default();
            ui.label(
                RichText::new(format!("✅ {}", app.t(Msg::EarnedOn { date: &date })))
                    .color(Color32::from_rgb(34, 197, 94)),
            );
        }
        CertificateStatus::Minting => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(app.t(Msg::Minting));
            });
        }
        CertificateStatus::Ready | CertificateStatus::Locked => {
            ui.label(
                RichText::new(app.t(Msg::Requirements {
                    completed: cert.required,
                    total: cert.total,
                    min_score: cert.min_score,
                }))
                .small(),
            );
            progress_bar(ui, cert.progress(), Some(format!("{} / {}", cert.completed, cert.required)));
        }
    }
}

fn certificate_card(app: &LearningQuestApp, ui: &mut Ui, cert: &CertificateCard) -> Option<CardAction> {
    let mut action = None;
    card(ui, Some(rarity_color(cert.rarity)), |ui| {
        ui.set_width(380.0);
        ui.horizontal(|ui| {
            let icon = RichText::new(&cert.icon).size(36.0);
            let icon = if cert.status == CertificateStatus::Earned {
                icon.background_color(rgb(cert.background))
            } else {
                icon.weak()
            };
            ui.label(icon);
            ui.vertical(|ui| {
                ui.label(RichText::new(app.t(Msg::CertificateName(cert.category))).strong());
                ui.label(
                    RichText::new(app.t(Msg::RarityName(cert.rarity)))
                        .small()
                        .color(rarity_color(cert.rarity)),
                );
            });
        });
        ui.label(RichText::new(app.t(Msg::CertificateDescription(cert.category))).small());
        status_line(app, ui, cert);

        ui.horizontal(|ui| {
            if ui.small_button("🔍").clicked() {
                action = Some(CardAction::Open(cert.id.clone()));
            }
            if cert.status == CertificateStatus::Ready
                && big_button(ui, app.t(Msg::ClaimCertificate), 180.0, 28.0, !app.gallery.any_minting())
            {
                action = Some(CardAction::Claim(cert.id.clone()));
            }
        });
    });
    action
}

fn detail_window(app: &mut LearningQuestApp, ctx: &Context, cards: &[CertificateCard], now: f64) {
    let Some(id) = app.gallery.selected.clone() else {
        return;
    };
    let Some(cert) = cards.iter().find(|c| c.id == id) else {
        app.gallery.selected = None;
        return;
    };

    let mut open = true;
    let mut close = false;
    let mut claim = false;
    egui::Window::new(app.t(Msg::CertificateName(cert.category)))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(&cert.icon)
                        .size(64.0)
                        .background_color(rgb(cert.background)),
                );
                ui.label(
                    RichText::new(app.t(Msg::RarityName(cert.rarity)))
                        .strong()
                        .color(rarity_color(cert.rarity)),
                );
                ui.label(app.t(Msg::CertificateDescription(cert.category)));
            });
            ui.add_space(8.0);
            status_line(app, ui, cert);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if cert.status == CertificateStatus::Ready
                    && big_button(ui, app.t(Msg::ClaimCertificate), 180.0, 32.0, !app.gallery.any_minting())
                {
                    claim = true;
                }
                if ui.button(app.t(Msg::Close)).clicked() {
                    close = true;
                }
            });
        });

    if claim {
        app.claim_certificate(&cert.id, now);
    }
    if close || !open {
        app.gallery.selected = None;
    }
}
