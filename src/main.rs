mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::{ensure, Context};
use crossterm::{
    cursor,
    event::{self, Event},
    terminal, ExecutableCommand,
};
use log::info;
use rand::thread_rng;

use zoomba_bounce::input::latest_intent;
use zoomba_bounce::tuning::{FAREWELL_HOLD, FRAME, MIN_HEIGHT, MIN_WIDTH};
use zoomba_bounce::{Game, Intent, Outcome};

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to a file in the temp directory; stderr is the game screen.
fn init_logging() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join("zoomba_bounce.log");
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run ticks at a fixed rate until the player quits or wins.
///
/// Keys arrive through `rx`; every key seen since the previous tick is folded
/// into one intent, so a tick never blocks on input.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    rx: &mpsc::Receiver<Event>,
) -> anyhow::Result<Outcome> {
    let mut rng = thread_rng();

    loop {
        let frame_start = Instant::now();

        let keys = rx.try_iter().filter_map(|ev| match ev {
            Event::Key(key) => Some(key),
            _ => None,
        });
        let intent = latest_intent(keys);
        if intent == Intent::Quit {
            return Ok(Outcome::Quit);
        }

        game.update(intent, &mut rng);
        display::render(out, game).context("failed to draw frame")?;

        if let Some(outcome) = game.outcome() {
            return Ok(outcome);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> anyhow::Result<()> {
    let (width, height) = terminal::size().context("failed to read terminal size")?;
    ensure!(
        width >= MIN_WIDTH && height >= MIN_HEIGHT,
        "terminal too small: {width}x{height}, need at least {MIN_WIDTH}x{MIN_HEIGHT}"
    );
    info!("starting session on a {width}x{height} grid");

    let mut game = Game::new(width, height);
    let outcome = game_loop(out, &mut game, rx)?;
    info!("session over: {outcome:?}, {} points", game.points());

    display::draw_farewell(out, &game).context("failed to draw final score")?;
    thread::sleep(FAREWELL_HOLD);
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(terminal::Clear(terminal::ClearType::All))?;
    out.execute(cursor::Hide)?;

    // Blocking reads live on their own thread so the loop never waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
