use rand::rngs::StdRng;
use rand::SeedableRng;

use zoomba_bounce::{Game, Grid, Intent, Outcome, Player, Side, Tile, Zoomba};

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── construction ──────────────────────────────────────────────────────────────

#[test]
fn new_game_places_player_at_start() {
    let game = Game::new(40, 20);
    assert_eq!(game.player().position(), (15, 10));
    assert_eq!(game.points(), 0);
    assert!(!game.is_victorious());
    assert_eq!(game.outcome(), None);
    assert!(!game.zoomba().is_alive());
}

#[test]
fn small_grid_pulls_player_inside() {
    let game = Game::new(8, 4);
    assert_eq!(game.player().position(), (7, 3));
}

// ── tick order ────────────────────────────────────────────────────────────────

#[test]
fn first_tick_spawns_zoomba() {
    let mut game = Game::new(40, 20);
    let mut rng = seeded_rng();
    game.update(Intent::None, &mut rng);

    assert!(game.zoomba().is_alive());
    assert_eq!(game.zoomba().position().1, 19);
    assert!(game.grid().is_collision(15, 10, Tile::Player));
}

#[test]
fn zoomba_respawns_after_leaving() {
    let mut game = Game::new(40, 20);
    let mut rng = seeded_rng();
    game.update(Intent::None, &mut rng);

    let mut deaths = 0;
    let mut was_alive = true;
    for _ in 0..1000 {
        game.update(Intent::None, &mut rng);
        let alive = game.zoomba().is_alive();
        if was_alive && !alive {
            deaths += 1;
        }
        was_alive = alive;
    }
    // One pass is 42 moves at one move per 4 ticks.
    assert!(deaths >= 4, "only {deaths} passes completed");
}

#[test]
fn bounce_squashes_and_scores() {
    let mut grid = Grid::new(40, 20);
    let mut zoomba = Zoomba::default();
    zoomba.enter(&grid, Side::Left);
    grid.set_tile(0, 18, Tile::Player);
    let mut game = Game::from_parts(grid, Player::new(0, 18), zoomba);
    let mut rng = seeded_rng();

    // The Zoomba reaches column 0 on the fourth tick.
    for _ in 0..4 {
        game.update(Intent::None, &mut rng);
        assert_eq!(game.points(), 0);
    }
    assert!(game.grid().is_collision(0, 19, Tile::Zoomba));

    game.update(Intent::None, &mut rng);
    assert_eq!(game.points(), 1);
    assert_eq!(game.player().bounces(), 1);
    assert_eq!(game.player().vertical_speed(), 24);
    assert!(!game.grid().is_collision(0, 19, Tile::Zoomba));
    // Squashed and immediately respawned off-grid.
    assert!(game.zoomba().is_alive());
    let x = game.zoomba().position().0;
    assert!(x == -1 || x == 40);
}

#[test]
fn quit_intent_moves_nothing() {
    let mut game = Game::new(40, 20);
    let mut rng = seeded_rng();
    game.update(Intent::Quit, &mut rng);
    assert_eq!(game.player().horizontal_speed(), 0);
    assert_eq!(game.player().position().0, 15);
}

#[test]
fn victory_is_reported_as_outcome() {
    let grid = Grid::new(10, 3);
    let mut game = Game::from_parts(grid, Player::new(4, 2), Zoomba::default());
    let mut rng = seeded_rng();

    game.update(Intent::Up, &mut rng);
    for _ in 0..20 {
        game.update(Intent::None, &mut rng);
    }
    assert!(game.is_victorious());
    assert_eq!(game.outcome(), Some(Outcome::Victory));
}
