use crate::game::{Coord, MoveRecord};
use crate::ui::game::intent::GameIntent;
use crate::ui::game::state::GameState;
use crate::ui::mvi::Reducer;

pub struct GameReducer;

impl Reducer for GameReducer {
    type State = GameState;
    type Intent = GameIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GameIntent::Play { index } => play(state, index),
            GameIntent::JumpTo { position } => {
                if position < state.history.len() {
                    GameState {
                        current: position,
                        ..state
                    }
                } else {
                    state
                }
            }
            GameIntent::ToggleOrder => GameState {
                order: state.order.toggled(),
                ..state
            },
        }
    }
}

fn play(mut state: GameState, index: usize) -> GameState {
    if state.outcome().is_decided() {
        return state;
    }
    let Some(next) = state.current_board().with_mark(index, state.next_player()) else {
        return state;
    };

    // Playing from the past discards the future branch.
    state.history.truncate(state.current + 1);
    state
        .history
        .push(MoveRecord::new(next, Coord::from_index(index)));
    state.current = state.history.len() - 1;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Player};

    fn play_all(indices: &[usize]) -> GameState {
        indices.iter().fold(GameState::default(), |state, &index| {
            GameReducer::reduce(state, GameIntent::Play { index })
        })
    }

    #[test]
    fn play_places_current_players_mark() {
        let state = play_all(&[4]);
        assert_eq!(
            state.current_board().get(4),
            Some(Cell::Occupied(Player::X))
        );
        assert_eq!(state.next_player(), Player::O);
    }

    #[test]
    fn play_out_of_range_is_noop() {
        let state = play_all(&[9]);
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn jump_past_end_is_noop() {
        let state = play_all(&[0, 1]);
        let jumped = GameReducer::reduce(state.clone(), GameIntent::JumpTo { position: 3 });
        assert_eq!(jumped, state);
    }
}
