//! Floating avatar — the draggable marker that opens the conversation view.
//!
//! Pointer events from egui are fed into the `AvatarPositioner` state
//! machine; the widget itself only draws at whatever position the machine
//! reports.

use egui::{self, Align2, FontId, RichText, Sense, Stroke, Vec2};

use tutor_core::positioner::{AvatarPositioner, GestureEnd, Point, Viewport};

use crate::theme::*;

/// What the caller should do after rendering the avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarAction {
    None,
    /// A clean click (no drag) — open the conversation view
    OpenChat,
}

pub fn avatar_widget(
    ctx: &egui::Context,
    positioner: &mut AvatarPositioner,
    thought: Option<&str>,
) -> AvatarAction {
    let mut action = AvatarAction::None;

    let screen = ctx.screen_rect();
    let viewport = Viewport::new(screen.width(), screen.height());
    let pos = positioner.position();
    let size = positioner.marker_size();

    egui::Area::new(egui::Id::new("tutor_avatar"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(pos.x, pos.y))
        .show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(Vec2::splat(size), Sense::click_and_drag());

            let center = rect.center();
            let radius = size * 0.5 - 4.0;
            let painter = ui.painter();
            painter.circle_filled(center, radius, ACCENT_ALT);
            painter.circle_stroke(center, radius, Stroke::new(3.0, BG_SECONDARY));
            painter.text(
                center,
                Align2::CENTER_CENTER,
                "🤖",
                FontId::proportional(size * 0.45),
                TEXT_PRIMARY,
            );

            // gesture wiring into the positioner state machine
            if response.drag_started() {
                if let Some(p) = response.interact_pointer_pos() {
                    positioner.pointer_down(Point::new(p.x, p.y));
                }
            }
            if response.dragged() {
                if let Some(p) = response.interact_pointer_pos() {
                    positioner.pointer_move(Point::new(p.x, p.y), viewport);
                }
            }
            if response.drag_stopped() {
                if positioner.pointer_up() == Some(GestureEnd::Click) {
                    action = AvatarAction::OpenChat;
                }
            }
            // egui reports a press-release without travel as a plain click
            if response.clicked() {
                action = AvatarAction::OpenChat;
            }

            if positioner.is_dragging() {
                painter.text(
                    egui::pos2(center.x, rect.bottom() + 12.0),
                    Align2::CENTER_CENTER,
                    "Dragging...",
                    FontId::proportional(11.0),
                    TEXT_SECONDARY,
                );
            }
        });

    // thought bubble floats above the marker, never while dragging
    if let Some(text) = thought {
        if !positioner.is_dragging() {
            let bubble_pos = egui::pos2((pos.x - 140.0).max(8.0), (pos.y - 70.0).max(8.0));
            egui::Area::new(egui::Id::new("tutor_thought"))
                .order(egui::Order::Foreground)
                .fixed_pos(bubble_pos)
                .show(ctx, |ui| {
                    egui::Frame::default()
                        .fill(BG_SECONDARY)
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(10.0)
                        .stroke(Stroke::new(1.0, BG_SURFACE))
                        .show(ui, |ui| {
                            ui.set_max_width(220.0);
                            ui.label(RichText::new(text).color(TEXT_PRIMARY).small());
                        });
                });
        }
    }

    action
}
