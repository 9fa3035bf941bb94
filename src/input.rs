use std::collections::VecDeque;

use crate::grid::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Start,
    CycleDifficulty,
    CycleTheme,
    PauseToggle,
    /// Enter/Space: start from the menu, leave game over, resume.
    Confirm,
    /// Escape: back to the menu.
    Back,
}

/// Events collected by the frontend, consumed in arrival order by the game.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}

/// Folds turn requests into one intent: the last request that does not point
/// back along `current` wins.
pub fn resolve_intent(
    current: Direction,
    pending: Option<Direction>,
    requested: Direction,
) -> Option<Direction> {
    if requested.is_opposite(current) {
        pending
    } else {
        Some(requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_valid_turn_wins() {
        let current = Direction::Right;
        let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Left];
        let intent = turns
            .into_iter()
            .fold(None, |pending, turn| resolve_intent(current, pending, turn));
        assert_eq!(intent, Some(Direction::Down));
    }

    #[test]
    fn test_opposite_only_gives_no_intent() {
        assert_eq!(resolve_intent(Direction::Up, None, Direction::Down), None);
    }

    #[test]
    fn test_queue_keeps_order() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::Start);
        queue.push(InputEvent::Turn(Direction::Up));
        queue.push(InputEvent::Back);
        assert_eq!(queue.len(), 3);
        let events: Vec<InputEvent> = queue.drain().collect();
        assert_eq!(
            events,
            [InputEvent::Start, InputEvent::Turn(Direction::Up), InputEvent::Back]
        );
        assert!(queue.is_empty());
    }
}
