//! Per-frame snapshot of everything the presentation layer draws

use glam::IVec2;

use super::shapes::push_quad;
use super::vertex::{Vertex, colors};
use crate::sim::{GameMode, GameState, Rect};

/// Restart button size, centered below the game over banner
pub const RESTART_BUTTON_SIZE: IVec2 = IVec2::new(150, 50);
/// Gap between the banner baseline and the button's top edge
pub const RESTART_BUTTON_OFFSET: i32 = 60;

/// Horizontal anchoring of a text line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `pos.x` is the left edge
    Left,
    /// `pos.x` is the center
    Center,
}

/// Text the backend renders with its own fonts
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Baseline anchor in pixels
    pub pos: IVec2,
    pub align: Align,
    pub font_size: u32,
    pub bold: bool,
    pub color: [f32; 4],
}

/// Read-only view of the game for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub mode: GameMode,
    pub width: i32,
    pub height: i32,
    pub player: Rect,
    /// Rocks in spawn order
    pub obstacles: Vec<Rect>,
    pub speed: i32,
    pub text: Vec<TextLine>,
    /// Only present while the game is over
    pub restart_button: Option<Rect>,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let width = state.config.window_width;
        let height = state.config.window_height;

        let (text, restart_button) = match state.mode {
            GameMode::Playing => (
                vec![
                    TextLine {
                        text: format!("Speed: {}", state.obstacle_speed),
                        pos: IVec2::new(10, 20),
                        align: Align::Left,
                        font_size: 20,
                        bold: false,
                        color: colors::HUD_TEXT,
                    },
                    TextLine {
                        text: format!("Dodged: {}", state.dodged),
                        pos: IVec2::new(10, 44),
                        align: Align::Left,
                        font_size: 20,
                        bold: false,
                        color: colors::HUD_TEXT,
                    },
                    TextLine {
                        text: format!("Ticks: {}", state.ticks),
                        pos: IVec2::new(10, 68),
                        align: Align::Left,
                        font_size: 20,
                        bold: false,
                        color: colors::HUD_TEXT,
                    },
                ],
                None,
            ),
            GameMode::GameOver => {
                let button = restart_button_rect(width, height);
                (
                    vec![
                        TextLine {
                            text: "Game Over!".to_string(),
                            pos: IVec2::new(width / 2, height / 2),
                            align: Align::Center,
                            font_size: 50,
                            bold: true,
                            color: colors::GAME_OVER_TEXT,
                        },
                        TextLine {
                            text: "Restart".to_string(),
                            pos: IVec2::new(button.center().x, button.center().y + 7),
                            align: Align::Center,
                            font_size: 20,
                            bold: true,
                            color: colors::RESTART_LABEL,
                        },
                    ],
                    Some(button),
                )
            }
        };

        Self {
            mode: state.mode,
            width,
            height,
            player: state.player.rect(),
            obstacles: state.obstacles.iter().map(|o| o.rect).collect(),
            speed: state.obstacle_speed,
            text,
            restart_button,
        }
    }

    /// True if a click at this point activates the restart button
    pub fn hits_restart(&self, x: i32, y: i32) -> bool {
        self.restart_button
            .is_some_and(|button| button.contains(IVec2::new(x, y)))
    }

    /// Colored triangles in pixel coordinates, back to front.
    ///
    /// While playing: background, ship, rocks. After a crash only the
    /// background and the restart button are drawn.
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity((self.obstacles.len() + 2) * 6);
        push_quad(
            &mut vertices,
            &Rect::new(0, 0, self.width, self.height),
            colors::BACKGROUND,
        );

        match self.mode {
            GameMode::Playing => {
                push_quad(&mut vertices, &self.player, colors::SHIP);
                for rock in &self.obstacles {
                    push_quad(&mut vertices, rock, colors::ROCK);
                }
            }
            GameMode::GameOver => {
                if let Some(button) = &self.restart_button {
                    push_quad(&mut vertices, button, colors::RESTART_BUTTON);
                }
            }
        }
        vertices
    }
}

fn restart_button_rect(width: i32, height: i32) -> Rect {
    Rect::new(
        width / 2 - RESTART_BUTTON_SIZE.x / 2,
        height / 2 + RESTART_BUTTON_OFFSET,
        RESTART_BUTTON_SIZE.x,
        RESTART_BUTTON_SIZE.y,
    )
}
