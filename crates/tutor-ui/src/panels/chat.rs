//! Chat window — transcript bubbles, typing indicator, and the input row
//! with voice controls.

use egui::{self, Align, Align2, Layout, RichText, ScrollArea, Vec2};

use tutor_types::message::Sender;

use crate::state::{ChatEntry, UiState};
use crate::theme::*;

/// What the caller should do after rendering the chat window
pub enum ChatAction {
    None,
    /// The user submitted text (typed, Enter or Send)
    Submit(String),
    /// The mic button was pressed — begin a capture session
    StartListening,
    /// The speaker button was pressed while vocalizing
    StopSpeaking,
    /// The close button was pressed
    Close,
}

/// Render the modal chat window. Only call while the chat is open.
pub fn chat_window(ctx: &egui::Context, state: &mut UiState) -> ChatAction {
    let mut action = ChatAction::None;

    // dim the page behind the modal
    let screen = ctx.screen_rect();
    ctx.layer_painter(egui::LayerId::new(
        egui::Order::Middle,
        egui::Id::new("chat_backdrop"),
    ))
    .rect_filled(screen, egui::CornerRadius::ZERO, egui::Color32::from_black_alpha(120));

    egui::Window::new("tutor_chat")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .fixed_size(Vec2::new(440.0, 540.0))
        .frame(
            egui::Frame::default()
                .fill(BG_PRIMARY)
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(PANEL_PADDING),
        )
        .show(ctx, |ui| {
            // ── Header ───────────────────────────────────────
            ui.horizontal(|ui| {
                ui.label(RichText::new("🤖").size(28.0));
                ui.vertical(|ui| {
                    ui.label(RichText::new("AI Tutor").color(TEXT_PRIMARY).strong().size(18.0));
                    ui.label(
                        RichText::new("Your Personal Learning Assistant")
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(RichText::new("✕").color(TEXT_PRIMARY)).clicked() {
                        action = ChatAction::Close;
                    }
                });
            });

            ui.separator();

            // ── Messages ─────────────────────────────────────
            let input_area_height = 70.0;
            let available_height = ui.available_height() - input_area_height;
            ScrollArea::vertical()
                .max_height(available_height)
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in &state.messages {
                        render_message(ui, entry);
                        ui.add_space(4.0);
                    }

                    if state.typing {
                        ui.label(
                            RichText::new("AI Tutor is typing...")
                                .color(TEXT_SECONDARY)
                                .italics()
                                .small(),
                        );
                    }
                });

            ui.add_space(6.0);

            // ── Input row ────────────────────────────────────
            ui.horizontal(|ui| {
                let mut reserved = 60.0; // send button
                if state.speech_input_available {
                    reserved += 40.0;
                }
                if state.speech_output_available {
                    reserved += 40.0;
                }

                let input = egui::TextEdit::singleline(&mut state.input_text)
                    .hint_text("Ask me anything about your studies...")
                    .desired_width(ui.available_width() - reserved)
                    .font(egui::FontId::proportional(14.0));
                let response = ui.add(input);

                if state.speech_input_available {
                    let mic_label = if state.listening { "🎙" } else { "🎤" };
                    let mic = ui.add_enabled(
                        !state.listening,
                        egui::Button::new(RichText::new(mic_label).color(TEXT_PRIMARY))
                            .fill(if state.listening { ERROR } else { SUCCESS })
                            .corner_radius(PANEL_ROUNDING),
                    );
                    if mic.clicked() {
                        action = ChatAction::StartListening;
                    }
                }

                if state.speech_output_available && state.speaking {
                    let stop = ui.add(
                        egui::Button::new(RichText::new("🔇").color(TEXT_PRIMARY))
                            .fill(ERROR)
                            .corner_radius(PANEL_ROUNDING),
                    );
                    if stop.clicked() {
                        action = ChatAction::StopSpeaking;
                    }
                }

                let send_enabled = !state.input_text.trim().is_empty() && !state.is_busy();
                let send_btn = ui.add_enabled(
                    send_enabled,
                    egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                        .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(52.0, 0.0)),
                );

                // Submit on Enter or button click
                if (response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                    && send_enabled)
                    || send_btn.clicked()
                {
                    let text = state.input_text.trim().to_string();
                    action = ChatAction::Submit(text);
                    state.input_text.clear();
                    response.request_focus();
                }
            });

            // status line: listening hint or current state
            let status_color = if state.listening { ERROR } else { TEXT_SECONDARY };
            ui.label(RichText::new(&state.status_text).color(status_color).small());
        });

    action
}

fn render_message(ui: &mut egui::Ui, entry: &ChatEntry) {
    let (label, label_color, bubble, layout) = match entry.sender {
        Sender::User => ("You", ACCENT, USER_BUBBLE, Layout::right_to_left(Align::TOP)),
        Sender::Tutor => ("AI Tutor", SUCCESS, TUTOR_BUBBLE, Layout::left_to_right(Align::TOP)),
    };

    ui.with_layout(layout, |ui| {
        ui.set_max_width(ui.available_width() * 0.85);
        egui::Frame::default()
            .fill(bubble)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(label).color(label_color).strong().small());
                    ui.label(RichText::new(&entry.text).color(TEXT_PRIMARY));
                    if !entry.time.is_empty() {
                        ui.label(RichText::new(&entry.time).color(TEXT_SECONDARY).small());
                    }
                });
            });
    });
}
