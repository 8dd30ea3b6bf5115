//! Colors and the board palette.
//!
//! Colors match the server-rendered board: blue for your towers, red for the
//! opponent's, sea green for wave enemies.

use rampart_shared::DamageType;

use crate::widget::Ownership;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Pure red (#F00).
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Pure green (#0F0).
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Warning orange.
    pub const WARNING: Self = Self::rgba(1.0, 0.6, 0.1, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    pub fn hex(hex: u32) -> Self {
        let channel = |shift: u32| f32::from(u8::try_from((hex >> shift) & 0xFF).unwrap_or(0)) / 255.0;
        Self::rgba(channel(24), channel(16), channel(8), channel(0))
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Every color the board and the inspection panel use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Units owned by the viewer (#88F).
    pub own_unit: Color,
    /// Units owned by another player (#F88).
    pub opponent_unit: Color,
    /// Wave enemies (#2E8B57).
    pub enemy_unit: Color,
    /// Fire projectiles (#FF4500).
    pub fire: Color,
    /// Piercing projectiles (#FFFF00).
    pub pierce: Color,
    /// Basic physical projectiles (#FFFFFF).
    pub basic: Color,
    /// Attack categories the client does not recognise.
    pub fallback_attack: Color,
    /// Melee impact ring, before fading.
    pub impact: Color,
    /// Panel background.
    pub panel_background: Color,
    /// Panel border.
    pub panel_border: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text (stat labels).
    pub text_muted: Color,
    /// Health bar fill.
    pub health_fill: Color,
    /// Health bar background.
    pub health_back: Color,
    /// Mana bar fill.
    pub mana_fill: Color,
    /// Bar background for mana.
    pub bar_back: Color,
    /// Boss marker.
    pub boss: Color,
    /// Sell button while selling is allowed.
    pub button_enabled: Color,
    /// Sell button outside the build phase.
    pub button_disabled: Color,
}

impl Palette {
    /// Default board palette.
    pub const DEFAULT: Self = Self {
        own_unit: Color::rgb(0.533, 0.533, 1.0),
        opponent_unit: Color::rgb(1.0, 0.533, 0.533),
        enemy_unit: Color::rgb(0.180, 0.545, 0.341),
        fire: Color::rgb(1.0, 0.271, 0.0),
        pierce: Color::rgb(1.0, 1.0, 0.0),
        basic: Color::WHITE,
        fallback_attack: Color::WHITE,
        impact: Color::WHITE,
        panel_background: Color::rgba(0.05, 0.05, 0.08, 0.95),
        panel_border: Color::rgba(0.2, 0.3, 0.2, 0.8),
        text: Color::rgba(0.9, 0.9, 0.9, 1.0),
        text_muted: Color::rgba(0.5, 0.5, 0.5, 1.0),
        health_fill: Color::GREEN,
        health_back: Color::RED,
        mana_fill: Color::rgb(0.25, 0.45, 1.0),
        bar_back: Color::rgba(0.15, 0.15, 0.2, 1.0),
        boss: Color::WARNING,
        button_enabled: Color::rgb(0.8, 0.25, 0.2),
        button_disabled: Color::rgba(0.3, 0.3, 0.3, 1.0),
    };

    /// Color of a projectile for the given attack category.
    #[must_use]
    pub const fn attack_color(&self, attack: DamageType) -> Color {
        match attack {
            DamageType::FireMagical => self.fire,
            DamageType::PhysicalPierce => self.pierce,
            DamageType::PhysicalBasic => self.basic,
            DamageType::Unknown => self.fallback_attack,
        }
    }

    /// Color of a unit body relative to the viewer.
    #[must_use]
    pub const fn ownership_color(&self, ownership: Ownership) -> Color {
        match ownership {
            Ownership::Own => self.own_unit,
            Ownership::Opponent => self.opponent_unit,
            Ownership::Enemy => self.enemy_unit,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
