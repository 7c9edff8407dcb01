use crate::ensure::DirOutcome;
use crate::prepare::Report;
use crate::rewrite::FileReport;
use similar::{ChangeTag, TextDiff};
use std::io::Write;
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output {
    stdout: StandardStream,
}

impl Output {
    pub fn new(color: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }

    fn set_color(&mut self, color: Color) {
        let _ = self.stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    }

    fn set_bold(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_bold(true));
    }

    fn set_dim(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_dimmed(true));
    }

    fn reset(&mut self) {
        let _ = self.stdout.reset();
    }

    pub fn print_report(&mut self, report: &Report, verbose_level: u8) -> std::io::Result<()> {
        if verbose_level >= 1 {
            for file in report.files.iter().filter(|f| f.changed()) {
                self.print_file(file, report.dry_run)?;
                if let Some(text) = &file.text {
                    self.print_diff(&text.original, &text.rewritten)?;
                }
            }
        }

        self.print_dir(&report.image_dir, report.dir_outcome)?;

        let elapsed_str = format!(" in {:.2}s", report.elapsed.as_secs_f64());
        let verb = if report.dry_run { "would rewrite" } else { "rewrote" };

        self.set_bold();
        write!(self.stdout, "Summary:")?;
        self.reset();
        writeln!(
            self.stdout,
            " {} {} link(s) in {}/{} Markdown file(s){}",
            verb,
            report.total_replacements(),
            report.files_changed(),
            report.files.len(),
            elapsed_str
        )?;
        self.stdout.flush()
    }

    fn print_file(&mut self, file: &FileReport, dry_run: bool) -> std::io::Result<()> {
        if dry_run {
            self.set_color(Color::Cyan);
            write!(self.stdout, "~")?;
        } else {
            self.set_color(Color::Green);
            write!(self.stdout, "✓")?;
        }
        self.reset();
        write!(self.stdout, " {}", display_path(&file.path).display())?;
        self.set_dim();
        writeln!(self.stdout, " ({} link(s))", file.replacements)?;
        self.reset();
        Ok(())
    }

    fn print_dir(&mut self, path: &Path, outcome: DirOutcome) -> std::io::Result<()> {
        let path = display_path(path);
        match outcome {
            DirOutcome::Existed => {
                self.set_dim();
                writeln!(self.stdout, "= {} already exists", path.display())?;
            }
            DirOutcome::Created => {
                self.set_color(Color::Green);
                writeln!(self.stdout, "+ created {}", path.display())?;
            }
            DirOutcome::WouldCreate => {
                self.set_color(Color::Cyan);
                writeln!(self.stdout, "~ would create {}", path.display())?;
            }
        }
        self.reset();
        Ok(())
    }

    pub fn print_diff(&mut self, before: &str, after: &str) -> std::io::Result<()> {
        let diff = TextDiff::from_lines(before, after);

        for (idx, group) in diff.grouped_ops(1).iter().enumerate() {
            if idx > 0 {
                writeln!(self.stdout, "  ...")?;
            }

            for op in group {
                for change in diff.iter_changes(op) {
                    let (sign, color) = match change.tag() {
                        ChangeTag::Delete => ("-", Color::Red),
                        ChangeTag::Insert => ("+", Color::Green),
                        ChangeTag::Equal => (" ", Color::White),
                    };

                    self.set_color(color);
                    write!(self.stdout, "  {}{}", sign, change.value())?;
                    self.reset();
                    if change.missing_newline() {
                        writeln!(self.stdout)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn display_path(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}
