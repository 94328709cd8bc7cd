use tui_snake::core::{Game, GameConfig};
use tui_snake::term::{AnchorY, GameView, Viewport};
use tui_snake::types::Direction;

fn screen(fb: &tui_snake::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_string(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let game = Game::from_config(&GameConfig::default()).unwrap();
    let snap = game.snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 20*2 by 10*1 => 40x10
    // plus border => 42x12
    let fb = view.render(&snap, Viewport::new(42, 12));

    assert_eq!(fb.get(0, 0).unwrap().ch, '+');
    assert_eq!(fb.get(41, 0).unwrap().ch, '+');
    assert_eq!(fb.get(0, 11).unwrap().ch, '+');
    assert_eq!(fb.get(41, 11).unwrap().ch, '+');
}

#[test]
fn term_view_draws_starting_snake_on_top_row() {
    let game = Game::from_config(&GameConfig::default()).unwrap();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&game.snapshot(), Viewport::new(42, 12));

    // Snake (4,0)..(0,0): tail glyphs at even columns 1..7, head at column 9.
    let row = fb.row_string(1);
    assert_eq!(&row[..13], "|o o o o Q . ");
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let game = Game::from_config(&GameConfig::default()).unwrap();
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(42, 20));

    // start_y = (20 - 12) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '+');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let game = Game::from_config(&GameConfig::default()).unwrap();
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(70, 14));

    let all = screen(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("LENGTH"));
    assert!(all.contains("APPLES"));
}

#[test]
fn term_view_shows_game_over_with_score() {
    let mut game = Game::from_config(&GameConfig::default()).unwrap();
    game = game.update(Some(Direction::Up));
    assert!(game.is_over());

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(42, 12));
    let all = screen(&fb);
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("SCORE 5"));
}
