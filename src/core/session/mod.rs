//! Interactive editing session
//!
//! A [`Session`] owns an [`AcademicRecord`] and applies one command per input
//! line. After every edit it recomputes the [`RecordSummary`] from scratch
//! and prints it, so the figures shown always match the record.
//!
//! Failures are reported to the output and never end the session; the record
//! is left as it was before the failing command.

pub mod command;
pub mod render;

pub use command::{SessionCommand, SubjectField, ThemeAction};
pub use render::{render_scale, render_summary};

use crate::core::gpa::UnknownGradePolicy;
use crate::core::models::{
    parse_credits, AcademicRecord, RecordError, SemesterId, SubjectEdit, SubjectId,
};
use crate::core::report::{default_report_path, write_report, ReportContext, ReportFormat};
use crate::core::summary::RecordSummary;
use crate::core::theme::Theme;
use crate::core::transcript::{write_transcript_csv, Transcript, TranscriptError};
use crate::{debug, info, warn};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const PROMPT: &str = "cgpa> ";

const HELP: &str = "\
Commands (positions start at 1):
  semester add                               add a semester
  semester rm <S>                            remove semester S
  semester rename <S> <name>                 rename semester S
  subject add <S> [name] [credits] [grade]   add a subject to semester S
  subject rm <S> <N>                         remove subject N of semester S
  subject set <S> <N> name|credits|grade <v> change one field
  scale <4.0|10.0>                           switch grading scale
  reset                                      remove every semester
  show                                       print the summary
  grades                                     print the active grade scale
  export [path] [format]                     write a report (md, html, pdf, json)
  save [path]                                write the record as a transcript CSV
  theme [toggle|dark|light]                  show or change the theme
  help                                       show this help
  quit | exit                                leave the session";

/// Errors reported for a single session command
#[derive(Debug, Error)]
pub enum SessionError {
    /// The line could not be tokenised or a value did not parse
    #[error("{0}")]
    Parse(String),
    /// First word is not a command
    #[error("Unknown command '{0}' (type 'help')")]
    UnknownCommand(String),
    /// Wrong arguments for a known command
    #[error("Usage: {0}")]
    Usage(&'static str),
    /// Position is not a positive integer
    #[error("Invalid position '{0}' (positions start at 1)")]
    InvalidPosition(String),
    /// No semester at this position
    #[error("No semester at position {0}")]
    NoSuchSemester(usize),
    /// No subject at this position
    #[error("Semester {semester} has no subject at position {subject}")]
    NoSuchSubject {
        /// Semester position
        semester: usize,
        /// Subject position
        subject: usize,
    },
    /// The record rejected the edit
    #[error(transparent)]
    Record(#[from] RecordError),
    /// Writing a report failed
    #[error("Export failed: {0}")]
    Export(String),
    /// Writing the transcript failed
    #[error("Save failed: {0}")]
    Save(#[from] TranscriptError),
    /// Theme preference could not be stored
    #[error("Could not store theme: {0}")]
    Theme(String),
    /// Reading input or writing output failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Settings a session starts with
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// How unknown grades are counted
    pub policy: UnknownGradePolicy,
    /// Initial theme
    pub theme: Theme,
    /// Directory for `export` without a path
    pub reports_dir: PathBuf,
    /// Directory for `save` without a path
    pub records_dir: PathBuf,
    /// File stem for default report and transcript names
    pub file_stem: String,
    /// Print a prompt before each line
    pub prompt: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            policy: UnknownGradePolicy::default(),
            theme: Theme::default(),
            reports_dir: PathBuf::from("reports"),
            records_dir: PathBuf::from("records"),
            file_stem: "cgpa".to_string(),
            prompt: false,
        }
    }
}

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

type ThemeHook<'a> = Box<dyn FnMut(Theme) -> Result<(), String> + 'a>;

/// A line-oriented editing session over one record
pub struct Session<'a> {
    transcript: Transcript,
    options: SessionOptions,
    on_theme_change: Option<ThemeHook<'a>>,
}

impl<'a> Session<'a> {
    /// Start a session on `transcript`
    #[must_use]
    pub fn new(transcript: Transcript, options: SessionOptions) -> Self {
        Self {
            transcript,
            options,
            on_theme_change: None,
        }
    }

    /// Call `hook` whenever the theme changes, e.g. to persist it
    #[must_use]
    pub fn with_theme_hook(mut self, hook: impl FnMut(Theme) -> Result<(), String> + 'a) -> Self {
        self.on_theme_change = Some(Box::new(hook));
        self
    }

    /// The record being edited
    #[must_use]
    pub const fn record(&self) -> &AcademicRecord {
        &self.transcript.record
    }

    /// Title used on reports
    #[must_use]
    pub fn title(&self) -> &str {
        &self.transcript.title
    }

    /// Current theme
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.options.theme
    }

    /// Consume the session and return the edited transcript
    #[must_use]
    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }

    /// Fresh snapshot of the record
    #[must_use]
    pub fn summary(&self) -> RecordSummary {
        RecordSummary::from_record(&self.transcript.record, self.options.policy)
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Command failures are printed as `✗ ...` lines and the loop goes on.
    ///
    /// # Errors
    /// Returns an error only if reading input or writing output fails
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        self.print_summary(&mut output)?;

        let mut lines = input.lines();
        loop {
            if self.options.prompt {
                write!(output, "{PROMPT}")?;
                output.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match self.execute_line(&line, &mut output) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(SessionError::Io(err)) => return Err(err),
                Err(err) => {
                    warn!("Session command '{}' failed: {err}", line.trim());
                    writeln!(output, "✗ {err}")?;
                }
            }
        }

        output.flush()
    }

    /// Parse and apply one line
    fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow, SessionError> {
        match SessionCommand::parse(line)? {
            Some(command) => self.execute(command, out),
            None => Ok(Flow::Continue),
        }
    }

    /// Apply one command, printing its result to `out`
    ///
    /// # Errors
    /// Returns an error if the command refers to a missing semester or
    /// subject, or if export/save fails. The record is unchanged in that case.
    pub fn apply<W: Write>(
        &mut self,
        command: SessionCommand,
        out: &mut W,
    ) -> Result<(), SessionError> {
        self.execute(command, out).map(|_| ())
    }

    fn execute<W: Write>(
        &mut self,
        command: SessionCommand,
        out: &mut W,
    ) -> Result<Flow, SessionError> {
        match command {
            SessionCommand::AddSemester => {
                self.transcript.record.add_semester();
            }
            SessionCommand::RemoveSemester(pos) => {
                let id = self.semester_at(pos)?;
                self.transcript.record.remove_semester(id)?;
            }
            SessionCommand::RenameSemester(pos, name) => {
                let id = self.semester_at(pos)?;
                self.transcript.record.rename_semester(id, name)?;
            }
            SessionCommand::AddSubject {
                semester,
                name,
                credits,
                grade,
            } => self.add_subject(semester, name, credits, grade)?,
            SessionCommand::RemoveSubject(sem_pos, sub_pos) => {
                let (sem, sub) = self.subject_at(sem_pos, sub_pos)?;
                self.transcript.record.remove_subject(sem, sub)?;
            }
            SessionCommand::SetSubject {
                semester,
                subject,
                field,
                value,
            } => {
                let (sem, sub) = self.subject_at(semester, subject)?;
                let edit = match field {
                    SubjectField::Name => SubjectEdit::Name(value),
                    SubjectField::Credits => SubjectEdit::Credits(parse_credits(&value)),
                    SubjectField::Grade => SubjectEdit::Grade(value),
                };
                self.transcript.record.edit_subject(sem, sub, edit)?;
            }
            SessionCommand::Scale(scale) => self.transcript.record.set_scale(scale),
            SessionCommand::Reset => self.transcript.record.reset(),
            SessionCommand::Show => {
                self.print_summary(out)?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Grades => {
                write!(out, "{}", render_scale(self.transcript.record.scale()))?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Export { path, format } => {
                let written = self.export(path, format)?;
                writeln!(out, "✓ Report written: {}", written.display())?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Save(path) => {
                let written = self.save(path)?;
                writeln!(out, "✓ Transcript saved: {}", written.display())?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Theme(action) => {
                self.change_theme(action)?;
                writeln!(out, "Theme: {}", self.options.theme)?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        self.print_summary(out)?;
        Ok(Flow::Continue)
    }

    fn add_subject(
        &mut self,
        semester: usize,
        name: Option<String>,
        credits: Option<String>,
        grade: Option<String>,
    ) -> Result<(), SessionError> {
        let sem = self.semester_at(semester)?;
        let record = &mut self.transcript.record;
        let sub = record.add_subject(sem)?;

        let edits = [
            name.map(SubjectEdit::Name),
            credits.map(|c| SubjectEdit::Credits(parse_credits(&c))),
            grade.map(SubjectEdit::Grade),
        ];
        for edit in edits.into_iter().flatten() {
            record.edit_subject(sem, sub, edit)?;
        }
        Ok(())
    }

    fn semester_at(&self, position: usize) -> Result<SemesterId, SessionError> {
        self.transcript
            .record
            .semester_id_at(position)
            .ok_or(SessionError::NoSuchSemester(position))
    }

    fn subject_at(
        &self,
        semester: usize,
        subject: usize,
    ) -> Result<(SemesterId, SubjectId), SessionError> {
        let sem = self.semester_at(semester)?;
        let sub = self
            .transcript
            .record
            .subject_id_at(sem, subject)
            .ok_or(SessionError::NoSuchSubject { semester, subject })?;
        Ok((sem, sub))
    }

    fn print_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let summary = self.summary();
        debug!(
            "Recomputed: cgpa={:.4} credits={} semesters={}",
            summary.cgpa,
            summary.total_credits,
            summary.semester_count()
        );
        write!(out, "{}", render_summary(&self.transcript.title, &summary))
    }

    /// Write a report from a snapshot of the record
    fn export(
        &self,
        path: Option<PathBuf>,
        format: Option<ReportFormat>,
    ) -> Result<PathBuf, SessionError> {
        let format = format
            .or_else(|| path.as_deref().and_then(format_from_extension))
            .unwrap_or_default();
        let path = path.unwrap_or_else(|| {
            default_report_path(&self.options.reports_dir, &self.options.file_stem, format)
        });

        let summary = self.summary();
        let ctx = ReportContext::new(&self.transcript.title, &summary, self.options.theme);
        write_report(&ctx, format, &path).map_err(|e| SessionError::Export(e.to_string()))?;

        info!("Report exported to: {}", path.display());
        Ok(path)
    }

    fn save(&self, path: Option<PathBuf>) -> Result<PathBuf, SessionError> {
        let path = path.unwrap_or_else(|| {
            self.options
                .records_dir
                .join(format!("{}.csv", self.options.file_stem))
        });
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| TranscriptError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        write_transcript_csv(&self.transcript.record, &self.transcript.title, &path)?;
        info!("Transcript saved to: {}", path.display());
        Ok(path)
    }

    fn change_theme(&mut self, action: Option<ThemeAction>) -> Result<(), SessionError> {
        let theme = match action {
            None => return Ok(()),
            Some(ThemeAction::Toggle) => self.options.theme.toggled(),
            Some(ThemeAction::Set(theme)) => theme,
        };
        if let Some(hook) = self.on_theme_change.as_mut() {
            hook(theme).map_err(SessionError::Theme)?;
        }
        self.options.theme = theme;
        Ok(())
    }
}

fn format_from_extension(path: &Path) -> Option<ReportFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ext.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scale::GradeScale;

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_build_record_from_commands() {
        let mut session = Session::new(Transcript::default(), SessionOptions::default());
        let out = run_script(
            &mut session,
            "semester add\nsubject add 1 Calc 4 A\nsubject add 1 Phys 2 C\n",
        );

        let record = session.record();
        assert_eq!(record.semesters().len(), 1);
        assert_eq!(record.semesters()[0].subjects()[1].grade, "C");
        let cgpa = record.cumulative().cgpa;
        assert!((cgpa - 10.0 / 3.0).abs() < 1e-9);
        assert!(out.contains("CGPA: 3.33 / 4.00 over 6 credits"));
    }

    #[test]
    fn test_failed_command_leaves_record_unchanged() {
        let mut session = Session::new(Transcript::default(), SessionOptions::default());
        let out = run_script(&mut session, "semester add\nsubject rm 1 5\nsemester rm 9\n");

        assert!(out.contains("✗ Semester 1 has no subject at position 5"));
        assert!(out.contains("✗ No semester at position 9"));
        assert_eq!(session.record().semesters().len(), 1);
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = Session::new(Transcript::default(), SessionOptions::default());
        run_script(&mut session, "semester add\nquit\nsemester add\n");
        assert_eq!(session.record().semesters().len(), 1);
    }

    #[test]
    fn test_set_credits_uses_parse_credits() {
        let mut session = Session::new(Transcript::default(), SessionOptions::default());
        run_script(
            &mut session,
            "semester add\nsubject add 1\nsubject set 1 1 credits 4abc\nsubject set 1 1 grade B\n",
        );
        let subject = &session.record().semesters()[0].subjects()[0];
        assert_eq!(subject.credits, 4);
        assert_eq!(subject.grade, "B");
        assert!(subject.name.is_empty());
    }

    #[test]
    fn test_scale_switch_keeps_grades() {
        let mut session = Session::new(Transcript::default(), SessionOptions::default());
        run_script(&mut session, "semester add\nsubject add 1 X 3 D+\nscale 10\n");
        assert_eq!(session.record().scale(), GradeScale::TenPoint);
        assert_eq!(session.record().semesters()[0].subjects()[0].grade, "D+");
        assert!(session.record().cumulative().cgpa.abs() < 1e-9);
    }

    #[test]
    fn test_theme_hook_called() {
        let mut seen = Vec::new();
        {
            let mut session = Session::new(Transcript::default(), SessionOptions::default())
                .with_theme_hook(|theme| {
                    seen.push(theme);
                    Ok(())
                });
            let out = run_script(&mut session, "theme toggle\ntheme\ntheme light\n");
            assert!(out.contains("Theme: dark"));
            assert_eq!(session.theme(), Theme::Light);
        }
        assert_eq!(seen, vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn test_theme_kept_when_hook_fails() {
        let mut session = Session::new(Transcript::default(), SessionOptions::default())
            .with_theme_hook(|_| Err("read-only".to_string()));
        let out = run_script(&mut session, "theme toggle
theme
");

        assert!(out.contains("✗"));
        assert!(out.contains("read-only"));
        assert!(!out.contains("Theme: dark"));
        assert!(out.contains("Theme: light"));
        assert_eq!(session.theme(), Theme::Light);
    }

    #[test]
    fn test_export_failure_keeps_session_alive() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let mut session = Session::new(Transcript::default(), SessionOptions::default());
        let script = format!(
            "semester add\nexport {}\nsemester add\n",
            blocker.join("r.md").display()
        );
        let out = run_script(&mut session, &script);

        assert!(out.contains("✗ Export failed"));
        assert_eq!(session.record().semesters().len(), 2);
    }
}
