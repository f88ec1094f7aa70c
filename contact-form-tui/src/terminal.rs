use std::io::{self, Write};
use std::time::Duration;

use contact_form::{render_lines, Element, Line, Tone};
use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};

pub struct Terminal {
    stdout: io::Stdout,
    previous: Vec<Line>,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        queue!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        stdout.flush()?;

        Ok(Self {
            stdout,
            previous: Vec::new(),
        })
    }

    /// Wait up to `timeout` for input and return everything pending.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        if event::poll(timeout)? {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Force the next render to redraw every line.
    pub fn invalidate(&mut self) {
        self.previous.clear();
        let _ = queue!(self.stdout, terminal::Clear(ClearType::All));
    }

    pub fn render(&mut self, root: &Element) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let lines = render_lines(root, width.saturating_sub(2));

        // One column of margin on the left, one row on top.
        let rows = (height as usize).saturating_sub(1);
        for y in 0..rows {
            let line = lines.get(y);
            if line == self.previous.get(y) {
                continue;
            }
            queue!(
                self.stdout,
                cursor::MoveTo(1, y as u16 + 1),
                terminal::Clear(ClearType::UntilNewLine)
            )?;
            if let Some(line) = line {
                self.draw_line(line)?;
            }
        }

        self.stdout.flush()?;
        self.previous = lines;
        Ok(())
    }

    fn draw_line(&mut self, line: &Line) -> io::Result<()> {
        for span in &line.spans {
            queue!(self.stdout, SetForegroundColor(tone_color(span.tone)))?;
            if span.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if span.reverse {
                queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
            }
            queue!(
                self.stdout,
                Print(&span.text),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        Ok(())
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Normal => Color::Reset,
        Tone::Muted => Color::DarkGrey,
        Tone::Error => Color::Red,
        Tone::Success => Color::Green,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = queue!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = self.stdout.flush();
        let _ = terminal::disable_raw_mode();
    }
}
