use std::{
    io::{self, stdin, stdout, Write},
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

use log::debug;
use termion::{cursor, event::Key, input::TermRead, raw::IntoRawMode};

use crate::{Sim, World};

pub use canvas::Canvas;
mod canvas;

#[derive(Debug, PartialEq, Eq)]
pub enum InputCmd {
    Exit,
    TogglePause,
    Step,
    Accelerate,
    Decelerate,
}

impl InputCmd {
    fn from_key(key: Key) -> Option<Self> {
        let command = match key {
            Key::Char('q') | Key::Esc | Key::Ctrl('c') => InputCmd::Exit,
            Key::Char(' ') => InputCmd::TogglePause,
            Key::Char('n') => InputCmd::Step,
            Key::Char('+') => InputCmd::Accelerate,
            Key::Char('-') => InputCmd::Decelerate,
            _ => return None,
        };
        Some(command)
    }
}

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    for key in stdin().keys() {
        let Ok(key) = key else { break };
        let Some(command) = InputCmd::from_key(key) else {
            continue;
        };
        if sender.send(command).is_err() {
            break;
        }
    }
}

const EVT_CHECK_TIMEOUT: Duration = Duration::from_millis(10);
const MIN_INTERVAL: Duration = Duration::from_millis(10);
const MAX_INTERVAL: Duration = Duration::from_secs(5);

fn accelerate(interval: Duration) -> Duration {
    (interval / 2).max(MIN_INTERVAL)
}

fn decelerate(interval: Duration) -> Duration {
    (interval * 2).min(MAX_INTERVAL)
}

/// Draws one frame per generation and ticks the simulation.
pub struct View {
    interval: Duration,
    limit: Option<u64>,
    paused: bool,
}

impl View {
    pub fn new(interval: Duration, limit: Option<u64>) -> Self {
        Self {
            interval: interval.clamp(MIN_INTERVAL, MAX_INTERVAL),
            limit,
            paused: false,
        }
    }

    /// Takes over the terminal until the user quits or the generation limit
    /// is reached.
    pub fn run<W>(mut self, mut sim: Sim<W>) -> io::Result<()>
    where
        W: World,
    {
        let (sender, receiver) = mpsc::channel();
        let _input_handle = thread::spawn(|| input_loop(sender));

        let mut out = stdout().into_raw_mode()?;
        write!(out, "{}", cursor::Hide)?;
        let result = self.view_loop(&mut sim, &receiver, &mut out);
        write!(out, "{}\r\n", cursor::Show)?;
        out.flush()?;
        result
    }

    fn view_loop<W>(
        &mut self,
        sim: &mut Sim<W>,
        receiver: &mpsc::Receiver<InputCmd>,
        out: &mut impl Write,
    ) -> io::Result<()>
    where
        W: World,
    {
        let mut last_update = Instant::now();
        let mut dirty = true;

        loop {
            let mut step_once = false;
            for cmd in receiver.try_iter() {
                debug!("input: {cmd:?}");
                match cmd {
                    InputCmd::Exit => return Ok(()),
                    InputCmd::TogglePause => self.paused = !self.paused,
                    InputCmd::Step => step_once = true,
                    InputCmd::Accelerate => self.interval = accelerate(self.interval),
                    InputCmd::Decelerate => self.interval = decelerate(self.interval),
                }
                dirty = true;
            }

            if dirty {
                self.draw(sim, out)?;
                dirty = false;
                if self.limit_reached(sim) {
                    return Ok(());
                }
            }

            let due = !self.paused && last_update.elapsed() >= self.interval;
            if due || step_once {
                sim.step();
                last_update = Instant::now();
                dirty = true;
                continue;
            }

            thread::sleep(EVT_CHECK_TIMEOUT);
        }
    }

    fn limit_reached<W>(&self, sim: &Sim<W>) -> bool
    where
        W: World,
    {
        self.limit.map_or(false, |limit| sim.generation() >= limit)
    }

    fn draw<W>(&self, sim: &Sim<W>, out: &mut impl Write) -> io::Result<()>
    where
        W: World,
    {
        Canvas::of(sim.world())
            .footer(self.status(sim))
            .display(out)
    }

    fn status<W>(&self, sim: &Sim<W>) -> String
    where
        W: World,
    {
        let generation = sim.generation();
        let population = sim.world().actives().len();
        let interval = self.interval.as_millis();
        let still = if sim.is_still() { " | still" } else { "" };
        let paused = if self.paused { " | paused" } else { "" };
        format!("generation {generation} | population {population} | {interval} ms{still}{paused}")
    }
}
