use std::{process::exit, thread::sleep, time::Duration};

use crate::grid::Grid;
use crate::render;
use crate::session::{Session, Tick};
use crate::term::TermManager;
use crate::{input, Coords};

use anyhow::{bail, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

const TICK_INTERVAL_MS: u64 = 75;
const POLL_INTERVAL_MS: u64 = 5;
const POLLS_PER_TICK: u64 = TICK_INTERVAL_MS / POLL_INTERVAL_MS;

pub struct SnakeGame {
    grid: Grid,
    term: TermManager,
    origin: Coords,
}

impl SnakeGame {
    pub fn new() -> Result<Self> {
        Ok(SnakeGame { grid: Grid::default(), term: TermManager::new()?, origin: (0, 0) })
    }

    pub fn initialize(&mut self) -> Result<()> {
        let (term_w, term_h) = self.term.size();
        let (frame_w, frame_h) = render::frame_size(&self.grid);

        if term_w < frame_w || term_h < frame_h {
            bail!(
                "terminal is {}x{}, the board needs at least {}x{}",
                term_w, term_h, frame_w, frame_h
            );
        }

        self.origin = ((term_w - frame_w) / 2, (term_h - frame_h) / 2);
        self.term.setup()
    }

    /// Runs one session to game-over, then shows the final score and waits
    /// for the restart acknowledgment.
    pub fn play(&mut self) -> Result<()> {
        self.term.clear()?;
        render::draw_board(&mut self.term, &self.grid, self.origin)?;

        let mut session = Session::new(self.grid);
        render::draw_frame(&mut self.term, &session, self.origin)?;
        info!("session started");

        let mut polls_until_tick = POLLS_PER_TICK;

        loop {
            sleep(Duration::from_millis(POLL_INTERVAL_MS));

            // Input arrives between ticks; only the pending heading changes
            for key_ev in self.term.read_key_events_queue()? {
                if is_ctrl_c(&key_ev) {
                    self.clean_exit();
                }
                if let Some(heading) = input::heading_for_key(key_ev.code) {
                    session.steer(heading);
                }
            }

            polls_until_tick -= 1;
            if polls_until_tick > 0 {
                continue;
            }
            polls_until_tick = POLLS_PER_TICK;

            match session.tick() {
                Tick::Over(cause) => {
                    info!(score = session.score(), length = session.snake().len(), ?cause, "session ended");
                    self.game_over(session.score())?;
                    return Ok(());
                }
                Tick::Moved | Tick::Fed => {
                    render::draw_frame(&mut self.term, &session, self.origin)?;
                }
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn game_over(&mut self, score: u32) -> Result<()> {
        self.term.show_message(&[
            &*format!("Game Over. Your score is: {}", score),
            "",
            "Press any key to play again,",
            "or CTRL+C to quit.",
        ])?;

        if is_ctrl_c(&self.term.read_key_blocking()?) {
            self.clean_exit();
        }

        Ok(())
    }

    fn clean_exit(&mut self) -> ! {
        let _ = self.term.restore();
        exit(0);
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
