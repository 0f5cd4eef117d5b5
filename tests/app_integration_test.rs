//! Integration tests for the controller driven the way the binary drives it.

use memory_match::term::{GameView, Hit, Viewport};
use memory_match::types::{GameAction, Position, SelectOutcome};
use memory_match::{App, GameConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_config(seed: u64) -> GameConfig {
    GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    }
}

/// Screen coordinates of the top-left cell of each card.
fn card_cells(view: &GameView, vp: Viewport, len: usize) -> Vec<(u16, u16)> {
    let mut cells = vec![(0, 0); len];
    for y in 0..vp.height {
        for x in 0..vp.width {
            if let Some(Hit::Card(p)) = view.hit_test(len, vp, x, y) {
                if cells[p.index()] == (0, 0) {
                    cells[p.index()] = (x, y);
                }
            }
        }
    }
    cells
}

fn status_cell(view: &GameView, vp: Viewport, len: usize) -> (u16, u16) {
    for y in 0..vp.height {
        for x in 0..vp.width {
            if view.hit_test(len, vp, x, y) == Some(Hit::Status) {
                return (x, y);
            }
        }
    }
    panic!("no status line on screen");
}

fn matching_pairs(app: &App) -> Vec<(usize, usize)> {
    let cards = app.session().cards();
    (0..cards.len())
        .flat_map(|i| ((i + 1)..cards.len()).map(move |j| (i, j)))
        .filter(|&(i, j)| cards[i].symbol == cards[j].symbol)
        .collect()
}

#[test]
fn test_full_game_by_mouse() {
    let mut app = App::from_config(&seeded_config(12345)).unwrap();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let cells = card_cells(&view, vp, app.session().len());

    let click = |app: &mut App, (x, y): (u16, u16)| match view.hit_test(16, vp, x, y) {
        Some(Hit::Card(p)) => app.click_card(p).unwrap(),
        other => panic!("expected a card at ({x}, {y}), got {other:?}"),
    };

    for _ in 0..12 {
        assert!(app.on_tick().unwrap());
    }

    let pairs = matching_pairs(&app);
    assert_eq!(pairs.len(), 8);
    for (n, &(a, b)) in pairs.iter().enumerate() {
        assert_eq!(click(&mut app, cells[a]), Some(SelectOutcome::FirstPick));
        let expected = SelectOutcome::Match {
            completed: n == pairs.len() - 1,
        };
        assert_eq!(click(&mut app, cells[b]), Some(expected));
    }

    assert!(!app.session().running());
    assert!(!app.on_tick().unwrap());
    assert_eq!(app.status_text(), "1.2s - Click to play again");

    // Clicking a matched card does nothing.
    assert_eq!(click(&mut app, cells[0]), None);

    let (sx, sy) = status_cell(&view, vp, 16);
    assert_eq!(view.hit_test(16, vp, sx, sy), Some(Hit::Status));
    assert!(app.click_status().unwrap());
    assert!(app.session().running());
    assert_eq!(app.session().elapsed_tenths(), 0);
    assert!(app.session().cards().iter().all(|c| c.visible));
}

#[test]
fn test_mismatch_then_match_by_keyboard() {
    let mut app = App::from_config(&seeded_config(7)).unwrap();
    let cards = app.session().cards().to_vec();
    let other = (1..cards.len())
        .find(|&i| cards[i].symbol != cards[0].symbol)
        .unwrap();

    // Pick position 0 with the keyboard.
    assert_eq!(
        app.handle_action(GameAction::Select).unwrap(),
        Some(SelectOutcome::FirstPick)
    );
    // Pick a different symbol by mouse: both end up covered.
    assert_eq!(
        app.click_card(Position::new(other)).unwrap(),
        Some(SelectOutcome::NoMatch)
    );
    assert!(app.session().cards().iter().all(|c| c.visible));
    assert_eq!(app.cursor().position(), Position::new(other));

    // Restart is refused mid-game.
    assert!(!app.click_status().unwrap());
    assert_eq!(app.session().episode_id(), 0);
}

#[test]
fn test_fixed_seed_reproduces_deal() {
    let a = App::from_config(&seeded_config(99)).unwrap();
    let b = App::from_config(&seeded_config(99)).unwrap();
    assert_eq!(a.session().cards(), b.session().cards());

    let c = App::new(
        GameConfig::default().deck().unwrap(),
        Some(StdRng::seed_from_u64(100)),
        4,
    )
    .unwrap();
    assert_ne!(a.session().cards(), c.session().cards());
}

#[test]
fn test_invalid_symbol_config_is_rejected() {
    let config = GameConfig {
        pair_count: 3,
        ..GameConfig::default()
    };
    assert!(App::from_config(&config).is_err());
}
