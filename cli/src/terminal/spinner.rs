use std::sync::OnceLock;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

const TIP_DURATION: Duration = Duration::from_secs(4);
const MESSAGE_READ_TIME: Duration = Duration::from_secs(2);
const MIN_TIP_VISIBILITY: Duration = Duration::from_millis(750);

pub const TIPS: &[&str] = &[
    "El color morado se usa en Adviento y Cuaresma como signo de penitencia.",
    "La palabra 'Eucaristía' significa 'Acción de Gracias'.",
    "El 'Kyrie Eleison' es la única parte de la misa en griego.",
    "El Domingo de Gaudete permite el uso de vestiduras rosas.",
    "La Cuaresma dura 40 días, recordando el tiempo de Jesús en el desierto.",
    "El Cirio Pascual representa a Cristo Resucitado, luz del mundo.",
    "El incienso simboliza las oraciones de los santos subiendo al cielo.",
];

pub struct SpinnerHandle {
    spinner: ProgressBar,
    tx: Sender<String>,
}

impl SpinnerHandle {
    pub fn send_to_queue(&self, message: String) {
        let _ = self.tx.send(message);
    }

    pub fn println(&self, msg: &str) {
        self.spinner.println(msg);
    }

    pub fn finish_and_clear(&self) {
        self.spinner.finish_and_clear();
    }

    fn is_running(&self) -> bool {
        !self.spinner.is_finished() && !self.spinner.is_hidden()
    }
}

static SPINNER: OnceLock<SpinnerHandle> = OnceLock::new();

pub fn get_spinner() -> &'static SpinnerHandle {
    SPINNER.get_or_init(init_spinner)
}

/// The spinner, if one is drawing right now.
pub fn active() -> Option<&'static SpinnerHandle> {
    SPINNER.get().filter(|handle| handle.is_running())
}

fn init_spinner() -> SpinnerHandle {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.magenta} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "·  ✠  ·",
            " · ✠ · ",
            "  ·✠·  ",
            "   ✠   ",
            "  ·✠·  ",
            " · ✠ · ",
            "·  ✠  ·",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(120));

    let (tx, rx) = mpsc::channel::<String>();
    let pb_clone = pb.clone();

    thread::spawn(move || {
        let mut tip_index = rand::random_range(0..TIPS.len());
        let mut next_action_time = Instant::now();
        let mut is_showing_tip = false;
        let mut last_tip_time = Instant::now();

        loop {
            if pb_clone.is_finished() {
                break;
            }

            let wait_time = next_action_time.saturating_duration_since(Instant::now());

            match rx.recv_timeout(wait_time) {
                Ok(mut msg) => {
                    if is_showing_tip {
                        let elapsed = last_tip_time.elapsed();
                        if elapsed < MIN_TIP_VISIBILITY {
                            thread::sleep(MIN_TIP_VISIBILITY - elapsed);
                        }
                        is_showing_tip = false;
                    }
                    while let Ok(newer_msg) = rx.try_recv() {
                        msg = newer_msg;
                    }
                    pb_clone.set_message(msg);
                    next_action_time = Instant::now() + MESSAGE_READ_TIME;
                }
                Err(RecvTimeoutError::Timeout) => {
                    let tip = TIPS[tip_index % TIPS.len()];
                    pb_clone.set_message(format!("{}", tip.italic().white()));

                    tip_index += 1;
                    is_showing_tip = true;
                    last_tip_time = Instant::now();
                    next_action_time = last_tip_time + TIP_DURATION;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    });

    SpinnerHandle { spinner: pb, tx }
}

pub fn report_stage(stage: &str) {
    get_spinner().send_to_queue(format!("{}", stage.bold()));
}

pub fn finish() {
    if let Some(handle) = SPINNER.get() {
        handle.finish_and_clear();
    }
}
