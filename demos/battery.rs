//! Drains a fake battery once a tick, redrawing the gauge in place.
//!
//! Each suppressed render is logged at debug level on stderr.

use std::io::Write;
use std::time::Duration;

use battery_gauge::ProgressBar;
use tokio::time;

const CAPACITY: u64 = 150;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut bar = ProgressBar::new(CAPACITY)?
        .width(8)?
        .show_thunder(true)
        .color(true)
        .tmux(false);

    let mut interval = time::interval(Duration::from_millis(40));
    let mut stdout = std::io::stdout();
    for level in (0..=CAPACITY).rev() {
        interval.tick().await;
        write!(stdout, "\r")?;
        bar.set_current(level).render_to(&mut stdout)?;
    }

    // Above the total nothing is drawn.
    bar.set_current(CAPACITY + 1).render()?;
    writeln!(stdout)?;
    Ok(())
}
