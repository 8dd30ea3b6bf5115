//! Combat effect scheduling.
//!
//! Every attack the server reports becomes a short-lived [`VisualEffect`].
//! Effects are never stepped per frame: progress is recomputed from
//! `(now - started_at) / duration` on every query, so animation speed does not
//! depend on frame rate and rendering the same timestamp twice gives the same
//! output.
//!
//! ```text
//! schedule() ──> [live effects] ──advance(now)──> pruned when elapsed >= duration
//!                      │
//!                 render(now) ──> EffectDirective ──emit()──> RenderCommand
//! ```

use rampart_shared::{DamageType, Vec2};
use serde::Deserialize;

use crate::clock::{Clock, Millis};
use crate::render::RenderCommand;
use crate::style::{Color, Palette};

/// How an effect is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// A body travelling from start to end.
    Projectile,
    /// An impact pulse at the end position.
    Melee,
}

impl EffectKind {
    /// Ranged categories travel as projectiles; everything else is a melee hit.
    #[must_use]
    pub const fn for_attack(attack: DamageType) -> Self {
        if attack.is_ranged() {
            Self::Projectile
        } else {
            Self::Melee
        }
    }
}

/// Progress of an effect started at `started_at` lasting `duration_ms`,
/// clamped to 0-1.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn progress(now: Millis, started_at: Millis, duration_ms: Millis) -> f32 {
    if duration_ms == 0 {
        return 1.0;
    }
    let elapsed = now.saturating_sub(started_at);
    (elapsed as f64 / duration_ms as f64).clamp(0.0, 1.0) as f32
}

/// One in-flight animation.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualEffect {
    /// Drawing style.
    pub kind: EffectKind,
    /// Where the effect starts.
    pub start: Vec2,
    /// Where the effect lands.
    pub end: Vec2,
    /// Lifetime in milliseconds, always > 0.
    pub duration_ms: Millis,
    /// Clock reading when the effect was scheduled.
    pub started_at: Millis,
    /// Attack category, used only for coloring.
    pub attack_type: DamageType,
}

impl VisualEffect {
    /// Milliseconds since the effect started.
    #[must_use]
    pub fn elapsed(&self, now: Millis) -> Millis {
        now.saturating_sub(self.started_at)
    }

    /// Progress at `now`, clamped to 0-1.
    #[must_use]
    pub fn progress(&self, now: Millis) -> f32 {
        progress(now, self.started_at, self.duration_ms)
    }

    /// True once the whole duration has elapsed.
    #[must_use]
    pub fn is_expired(&self, now: Millis) -> bool {
        self.elapsed(now) >= self.duration_ms
    }
}

/// Sizes and opacities used when drawing effects.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectStyle {
    /// Radius of the projectile body.
    pub projectile_radius: f32,
    /// Radius of the trail drawn behind the projectile.
    pub trail_radius: f32,
    /// Opacity of the trail (0-1).
    pub trail_alpha: f32,
    /// Ring radius at the end of a melee pulse.
    pub melee_max_radius: f32,
    /// Ring stroke width.
    pub melee_line_width: f32,
}

impl Default for EffectStyle {
    fn default() -> Self {
        Self {
            projectile_radius: 5.0,
            trail_radius: 8.0,
            trail_alpha: 0.35,
            melee_max_radius: 20.0,
            melee_line_width: 3.0,
        }
    }
}

/// What to draw for one effect at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectDirective {
    /// Filled marker plus a wider, fainter trail.
    Projectile {
        /// Current position.
        position: Vec2,
        /// Marker radius.
        radius: f32,
        /// Marker color.
        color: Color,
        /// Trail radius.
        trail_radius: f32,
        /// Trail color (marker color at reduced alpha).
        trail_color: Color,
    },
    /// Expanding, fading ring.
    Melee {
        /// Ring center (the effect's end position).
        center: Vec2,
        /// Ring radius.
        radius: f32,
        /// Stroke width.
        line_width: f32,
        /// Stroke color; alpha is `1 - progress`.
        color: Color,
    },
}

impl EffectDirective {
    /// Appends the render commands for this directive.
    pub fn emit(&self, out: &mut Vec<RenderCommand>) {
        match *self {
            Self::Projectile {
                position,
                radius,
                color,
                trail_radius,
                trail_color,
            } => {
                out.push(RenderCommand::Circle {
                    center: position,
                    radius: trail_radius,
                    color: trail_color,
                });
                out.push(RenderCommand::Circle {
                    center: position,
                    radius,
                    color,
                });
            }
            Self::Melee {
                center,
                radius,
                line_width,
                color,
            } => out.push(RenderCommand::Ring {
                center,
                radius,
                width: line_width,
                color,
            }),
        }
    }
}

/// Owns every live combat effect.
///
/// `schedule` stamps new effects with the injected clock; `advance` and
/// `render` take the timestamp explicitly so a frame can use one reading for
/// both.
#[derive(Debug)]
pub struct AnimationScheduler<C: Clock> {
    clock: C,
    effects: Vec<VisualEffect>,
    style: EffectStyle,
    palette: Palette,
}

impl<C: Clock> AnimationScheduler<C> {
    /// Creates an empty scheduler with the default style.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::with_style(clock, EffectStyle::default(), Palette::DEFAULT)
    }

    /// Creates an empty scheduler with a custom style.
    #[must_use]
    pub fn with_style(clock: C, style: EffectStyle, palette: Palette) -> Self {
        Self {
            clock,
            effects: Vec::with_capacity(64),
            style,
            palette,
        }
    }

    /// Starts a new effect now.
    ///
    /// A zero duration is raised to 1 ms so every effect is visible for at
    /// least one instant and progress never divides by zero.
    pub fn schedule(
        &mut self,
        kind: EffectKind,
        start: Vec2,
        end: Vec2,
        duration_ms: Millis,
        attack_type: DamageType,
    ) {
        self.effects.push(VisualEffect {
            kind,
            start,
            end,
            duration_ms: duration_ms.max(1),
            started_at: self.clock.now_ms(),
            attack_type,
        });
    }

    /// Drops every effect whose duration has fully elapsed at `now`.
    ///
    /// Returns how many effects were removed.
    pub fn advance(&mut self, now: Millis) -> usize {
        let before = self.effects.len();
        self.effects.retain(|effect| !effect.is_expired(now));
        before - self.effects.len()
    }

    /// Computes what to draw for every live effect at `now`.
    #[must_use]
    pub fn render(&self, now: Millis) -> Vec<EffectDirective> {
        self.effects
            .iter()
            .map(|effect| self.directive(effect, now))
            .collect()
    }

    /// Reads the clock once, prunes, then renders with the same timestamp.
    pub fn tick(&mut self) -> Vec<EffectDirective> {
        let now = self.clock.now_ms();
        self.advance(now);
        self.render(now)
    }

    /// Drops every live effect.
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Live effects, oldest first.
    #[must_use]
    pub fn effects(&self) -> &[VisualEffect] {
        &self.effects
    }

    /// Number of live effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// True when no effect is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// The clock effects are stamped with.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn directive(&self, effect: &VisualEffect, now: Millis) -> EffectDirective {
        let t = effect.progress(now);
        match effect.kind {
            EffectKind::Projectile => {
                let color = self.palette.attack_color(effect.attack_type);
                EffectDirective::Projectile {
                    position: effect.start.lerp(effect.end, t),
                    radius: self.style.projectile_radius,
                    color,
                    trail_radius: self.style.trail_radius,
                    trail_color: color.with_alpha(color.a * self.style.trail_alpha),
                }
            }
            EffectKind::Melee => EffectDirective::Melee {
                center: effect.end,
                radius: self.style.melee_max_radius * t,
                line_width: self.style.melee_line_width,
                color: self.palette.impact.with_alpha(1.0 - t),
            },
        }
    }
}
