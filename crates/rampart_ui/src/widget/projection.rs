//! Panel projections: view-model in, draw commands out.

use rampart_shared::{Shape, Vec2};

use super::panel_view::{Bar, PanelView, Portrait};
use crate::layout::Rect;
use crate::render::{Layer, RenderCommand, UIRenderer};
use crate::style::{Color, Palette};

/// Side of the square portrait box.
const PORTRAIT_SIZE: f32 = 80.0;
/// Unit size the portrait is drawn at.
const PORTRAIT_UNIT_SIZE: f32 = 60.0;
const PADDING: f32 = 10.0;
const BAR_HEIGHT: f32 = 10.0;
const ROW_HEIGHT: f32 = 18.0;
const TITLE_FONT: f32 = 16.0;
const BODY_FONT: f32 = 12.0;
const BUTTON_HEIGHT: f32 = 24.0;
const BUTTON_WIDTH: f32 = 80.0;

/// Turns a [`PanelView`] into draw commands.
///
/// Panels draw on [`Layer::Overlay`]. Implementations must not emit anything
/// for a hidden view.
pub trait PanelProjection {
    /// Appends the commands for `view` to the current frame.
    fn project(&self, view: &PanelView, renderer: &mut UIRenderer);
}

/// Default projection: a fixed-size card drawn with primitive commands.
///
/// ```text
/// ┌──────────────────────────────┐
/// │ ┌──────┐  Square Tower       │
/// │ │  ■   │  [████████░░] 80/100│
/// │ └──────┘  [███░░░░░░░] 15/50 │
/// │ Damage    10                 │
/// │ Rate      1.50/s             │
/// │ 75g                  [ Sell ]│
/// └──────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommandPanelProjection {
    /// Panel rectangle in screen space
    pub bounds: Rect,
    /// Colors
    pub palette: Palette,
}

impl CommandPanelProjection {
    /// Creates a projection drawing into `bounds`.
    #[must_use]
    pub const fn new(bounds: Rect, palette: Palette) -> Self {
        Self { bounds, palette }
    }

    /// Portrait box, top-left of the panel.
    #[must_use]
    pub fn portrait_bounds(&self) -> Rect {
        Rect::new(
            self.bounds.x + PADDING,
            self.bounds.y + PADDING,
            PORTRAIT_SIZE,
            PORTRAIT_SIZE,
        )
    }

    /// Sell button, bottom-right of the panel.
    #[must_use]
    pub fn sell_button_bounds(&self) -> Rect {
        Rect::new(
            self.bounds.right() - PADDING - BUTTON_WIDTH,
            self.bounds.bottom() - PADDING - BUTTON_HEIGHT,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    fn text_column_x(&self) -> f32 {
        self.bounds.x + PADDING * 2.0 + PORTRAIT_SIZE
    }

    fn portrait_command(&self, portrait: Portrait) -> RenderCommand {
        let center = self.portrait_bounds().center();
        let extent = PORTRAIT_UNIT_SIZE / 2.0 - 10.0;
        let color = self.palette.ownership_color(portrait.ownership);

        match portrait.shape {
            Shape::Square => RenderCommand::Rect {
                bounds: Rect::centered(center, extent * 2.0),
                color,
                corner_radius: 0.0,
            },
            Shape::Circle => RenderCommand::Circle {
                center,
                radius: extent,
                color,
            },
            Shape::Triangle => RenderCommand::Triangle {
                points: [
                    Vec2::new(center.x, center.y - extent),
                    Vec2::new(center.x - extent, center.y + extent),
                    Vec2::new(center.x + extent, center.y + extent),
                ],
                color,
            },
        }
    }

    fn bar_commands(&self, bar: Bar, y: f32, fill: Color, back: Color, out: &mut Vec<RenderCommand>) {
        let x = self.text_column_x();
        let track = Rect::new(x, y, (self.bounds.right() - PADDING - x).max(0.0), BAR_HEIGHT);

        out.push(RenderCommand::Rect {
            bounds: track,
            color: back,
            corner_radius: 2.0,
        });
        out.push(RenderCommand::Rect {
            bounds: track.left_fraction(bar.ratio()),
            color: fill,
            corner_radius: 2.0,
        });
        out.push(RenderCommand::Text {
            text: bar.label(),
            x: track.x + 4.0,
            y: track.y,
            color: self.palette.text,
            font_size: BAR_HEIGHT,
        });
    }
}

impl Default for CommandPanelProjection {
    fn default() -> Self {
        Self::new(Rect::new(10.0, 10.0, 280.0, 240.0), Palette::DEFAULT)
    }
}

impl PanelProjection for CommandPanelProjection {
    fn project(&self, view: &PanelView, renderer: &mut UIRenderer) {
        if !view.visible {
            return;
        }

        let palette = &self.palette;
        let text_x = self.text_column_x();
        let mut commands = Vec::with_capacity(32);

        commands.push(RenderCommand::Rect {
            bounds: self.bounds,
            color: palette.panel_background,
            corner_radius: 4.0,
        });
        commands.push(RenderCommand::RectOutline {
            bounds: self.bounds,
            color: palette.panel_border,
            width: 1.0,
        });

        commands.push(RenderCommand::RectOutline {
            bounds: self.portrait_bounds(),
            color: palette.panel_border,
            width: 1.0,
        });
        if let Some(portrait) = view.portrait {
            commands.push(self.portrait_command(portrait));
        }

        let mut y = self.bounds.y + PADDING;
        commands.push(RenderCommand::Text {
            text: view.title.clone(),
            x: text_x,
            y,
            color: palette.text,
            font_size: TITLE_FONT,
        });
        y += TITLE_FONT + 6.0;

        self.bar_commands(view.health, y, palette.health_fill, palette.health_back, &mut commands);
        y += BAR_HEIGHT + 6.0;

        if let Some(mana) = view.mana {
            self.bar_commands(mana, y, palette.mana_fill, palette.bar_back, &mut commands);
            y += BAR_HEIGHT + 6.0;
        }

        if let Some(state) = view.worker_state {
            commands.push(RenderCommand::Text {
                text: state.label().to_string(),
                x: text_x,
                y,
                color: palette.text_muted,
                font_size: BODY_FONT,
            });
        }

        // Stat rows start below the portrait
        let label_x = self.bounds.x + PADDING;
        let value_x = label_x + PORTRAIT_SIZE;
        let mut row_y = self.portrait_bounds().bottom() + PADDING;
        for row in &view.stats {
            commands.push(RenderCommand::Text {
                text: row.label.to_string(),
                x: label_x,
                y: row_y,
                color: palette.text_muted,
                font_size: BODY_FONT,
            });
            commands.push(RenderCommand::Text {
                text: row.value.clone(),
                x: value_x,
                y: row_y,
                color: palette.text,
                font_size: BODY_FONT,
            });
            row_y += ROW_HEIGHT;
        }

        if view.is_boss {
            commands.push(RenderCommand::Text {
                text: "BOSS".to_string(),
                x: label_x,
                y: row_y,
                color: palette.boss,
                font_size: BODY_FONT,
            });
        }

        if view.sell_action.visible {
            let button = self.sell_button_bounds();
            if let Some(gold) = view.sell_value_label() {
                commands.push(RenderCommand::Text {
                    text: gold,
                    x: label_x,
                    y: button.y + 6.0,
                    color: palette.text,
                    font_size: BODY_FONT,
                });
            }

            let color = if view.sell_action.enabled {
                palette.button_enabled
            } else {
                palette.button_disabled
            };
            commands.push(RenderCommand::Rect {
                bounds: button,
                color,
                corner_radius: 3.0,
            });
            commands.push(RenderCommand::Text {
                text: "Sell".to_string(),
                x: button.x + 24.0,
                y: button.y + 6.0,
                color: palette.text,
                font_size: BODY_FONT,
            });
        }

        renderer.set_layer(Layer::Overlay);
        renderer.push_clip(self.bounds);
        renderer.extend(commands);
        renderer.pop_clip();
    }
}
