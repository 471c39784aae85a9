//! UI components using egui.

use egui::{Align2, Color32, Context, Frame, Id, RichText, Sense, Vec2};
use hueday_core::{HexColor, TextColor};

/// Largest heading size, used whenever the name fits.
pub const HEADING_MAX_SIZE: f32 = 96.0;
/// Smallest heading size for very long names or tiny windows.
pub const HEADING_MIN_SIZE: f32 = 20.0;
/// Size of the hex button label.
pub const HEX_SIZE: f32 = 48.0;
/// Label shown on the hex button while the copy is acknowledged.
pub const COPIED_LABEL: &str = "Copied";

/// Average glyph advance as a fraction of font size.
const GLYPH_WIDTH_RATIO: f32 = 0.55;

/// Actions that can be triggered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Generate the next color.
    Advance,
    /// Go back to the previous color.
    Retreat,
    /// Copy the current hex code.
    Copy,
}

/// What the overlay shows for the current color.
#[derive(Debug, Clone)]
pub struct ColorView {
    pub name: String,
    pub hex: HexColor,
    pub text_color: TextColor,
    /// Whether the copy acknowledgment is showing.
    pub copied: bool,
}

impl ColorView {
    /// Text for the hex button.
    pub fn hex_label(&self) -> String {
        if self.copied {
            COPIED_LABEL.to_string()
        } else {
            self.hex.to_string()
        }
    }
}

/// Heading font size for a name of `name_len` characters.
///
/// Grows with the viewport and shrinks with longer names, clamped to
/// [`HEADING_MIN_SIZE`]..=[`HEADING_MAX_SIZE`].
pub fn heading_size(viewport: Vec2, name_len: usize) -> f32 {
    let chars = name_len.max(1) as f32;
    let fit_width = viewport.x * 0.9 / (chars * GLYPH_WIDTH_RATIO);
    let fit_height = viewport.y * 0.3;
    fit_width
        .min(fit_height)
        .clamp(HEADING_MIN_SIZE, HEADING_MAX_SIZE)
}

/// egui color for a hex color.
pub fn to_color32(color: HexColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Render all UI and return any triggered action.
pub fn render_ui(ctx: &Context, view: &ColorView) -> Option<UiAction> {
    let background_action = render_background(ctx);
    let label_action = render_color_label(ctx, view);

    // The button sits above the background, so its click wins.
    label_action.or(background_action)
}

/// Full-window click target behind everything else.
fn render_background(ctx: &Context) -> Option<UiAction> {
    let mut action = None;

    egui::CentralPanel::default()
        .frame(Frame::new())
        .show(ctx, |ui| {
            let response = ui.interact(ui.max_rect(), Id::new("background"), Sense::click());
            if response.double_clicked() {
                action = Some(UiAction::Retreat);
            } else if response.clicked() {
                action = Some(UiAction::Advance);
            }
        });

    action
}

/// Centered name heading and hex button.
fn render_color_label(ctx: &Context, view: &ColorView) -> Option<UiAction> {
    let mut action = None;
    #[allow(deprecated)]
    let screen_rect = ctx.input(|i| i.content_rect());
    let text_color = to_color32(view.text_color.to_hex());
    let size = heading_size(screen_rect.size(), view.name.chars().count());

    egui::Area::new(Id::new("color_label"))
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .movable(false)
        .interactable(true)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let name = RichText::new(&view.name).size(size).strong().color(text_color);
                ui.add(egui::Label::new(name).selectable(false));
                ui.add_space(20.0);

                let button = egui::Button::new(
                    RichText::new(view.hex_label())
                        .size(HEX_SIZE)
                        .underline()
                        .color(text_color),
                )
                .frame(false);
                if ui
                    .add(button)
                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                    .clicked()
                {
                    action = Some(UiAction::Copy);
                }
            });
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(copied: bool) -> ColorView {
        ColorView {
            name: "Coral".to_string(),
            hex: HexColor::new(0xff, 0x7f, 0x50),
            text_color: TextColor::Black,
            copied,
        }
    }

    #[test]
    fn test_hex_label() {
        assert_eq!(view(false).hex_label(), "#ff7f50");
        assert_eq!(view(true).hex_label(), "Copied");
    }

    #[test]
    fn test_heading_size_caps_short_names() {
        assert_eq!(heading_size(Vec2::new(1920.0, 1080.0), 5), HEADING_MAX_SIZE);
    }

    #[test]
    fn test_heading_size_shrinks_with_length() {
        let viewport = Vec2::new(800.0, 600.0);
        let short = heading_size(viewport, 12);
        let long = heading_size(viewport, 24);
        assert!(long < short);
        assert!(long >= HEADING_MIN_SIZE);
    }

    #[test]
    fn test_heading_size_grows_with_viewport() {
        let small = heading_size(Vec2::new(400.0, 300.0), 16);
        let large = heading_size(Vec2::new(1200.0, 900.0), 16);
        assert!(large > small);
    }

    #[test]
    fn test_heading_size_floor() {
        assert_eq!(heading_size(Vec2::new(100.0, 100.0), 40), HEADING_MIN_SIZE);
        assert_eq!(heading_size(Vec2::ZERO, 0), HEADING_MIN_SIZE);
    }

    #[test]
    fn test_to_color32() {
        assert_eq!(to_color32(HexColor::new(1, 2, 3)), Color32::from_rgb(1, 2, 3));
        assert_eq!(to_color32(TextColor::White.to_hex()), Color32::WHITE);
    }

    #[test]
    fn test_render_without_input_triggers_nothing() {
        let ctx = Context::default();
        let mut action = Some(UiAction::Copy);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            action = render_ui(ctx, &view(false));
        });
        assert_eq!(action, None);
    }
}
