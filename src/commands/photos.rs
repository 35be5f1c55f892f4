//! Interactive photo browser for a record.
//! Usage: fieldobs photos <record.json> [--index <n>]

use anyhow::{Context, Result};
use colored::Colorize;
use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::queue;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use std::io::{self, Write};
use std::path::Path;

use crate::fs::record_files::load_record;
use crate::viewer::{ImageViewer, ViewerIntent};

/// Restores the terminal even when the event loop errors out.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

pub fn execute(path: &Path, index: usize) -> Result<()> {
    let record = load_record(path)?;
    if record.photos.is_empty() {
        println!("Record '{}' has no photos", record.id);
        return Ok(());
    }

    let mut viewer = ImageViewer::new(record.photos, index);
    println!(
        "{} {}",
        record.title.bold(),
        "(←/→ navigate, Home/End jump, q/Esc close)".dimmed()
    );

    let _guard = RawModeGuard::enable()?;
    draw(&viewer)?;

    loop {
        let Event::Key(key) = event::read().context("Failed to read terminal event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match viewer.handle_key(key) {
            ViewerIntent::Show(_) => draw(&viewer)?,
            ViewerIntent::Close => break,
            ViewerIntent::Ignore => {}
        }
    }

    print!("\r\n");
    io::stdout().flush().context("Failed to flush stdout")?;
    Ok(())
}

fn draw(viewer: &ImageViewer) -> Result<()> {
    let mut stdout = io::stdout();
    queue!(stdout, MoveToColumn(0), Clear(ClearType::CurrentLine))
        .context("Failed to clear line")?;
    write!(
        stdout,
        "  [{}/{}] {}",
        viewer.index() + 1,
        viewer.len(),
        viewer.current().unwrap_or_default()
    )
    .context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")
}
