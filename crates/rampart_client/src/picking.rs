//! Board hit testing.

use rampart_shared::UnitSnapshot;
use rampart_ui::Rect;

/// Click target of a unit: a square of side `hitbox` centered on it.
#[must_use]
pub fn unit_hitbox(unit: &UnitSnapshot, hitbox: f32) -> Rect {
    Rect::centered(unit.position(), hitbox)
}

/// First unit, in broadcast order, whose hitbox contains the point.
///
/// Edges count as inside.
#[must_use]
pub fn pick_unit(units: &[UnitSnapshot], x: f32, y: f32, hitbox: f32) -> Option<&UnitSnapshot> {
    units
        .iter()
        .find(|unit| unit_hitbox(unit, hitbox).contains(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_shared::Shape;

    fn unit_at(id: u64, x: f32, y: f32) -> UnitSnapshot {
        UnitSnapshot {
            id,
            shape: Shape::Square,
            x,
            y,
            owner_id: 1,
            is_enemy: false,
            current_hp: 10.0,
            max_hp: 10.0,
            is_worker: false,
            current_mana: None,
            max_mana: None,
            worker_state: None,
        }
    }

    #[test]
    fn test_pick_inside_and_on_edge() {
        let units = [unit_at(1, 90.0, 90.0)];
        assert_eq!(pick_unit(&units, 90.0, 90.0, 40.0).map(|u| u.id), Some(1));
        assert_eq!(pick_unit(&units, 110.0, 70.0, 40.0).map(|u| u.id), Some(1));
        assert!(pick_unit(&units, 111.0, 90.0, 40.0).is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let units = [unit_at(1, 90.0, 90.0), unit_at(2, 95.0, 95.0)];
        assert_eq!(pick_unit(&units, 100.0, 100.0, 40.0).map(|u| u.id), Some(1));
    }

    #[test]
    fn test_empty_board() {
        assert!(pick_unit(&[], 0.0, 0.0, 40.0).is_none());
    }
}
