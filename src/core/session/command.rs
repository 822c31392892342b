//! Parsing of session input lines

use super::SessionError;
use crate::core::report::ReportFormat;
use crate::core::scale::GradeScale;
use crate::core::theme::Theme;
use std::path::PathBuf;

/// Which subject field a `subject set` changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectField {
    /// Display name
    Name,
    /// Credit weight
    Credits,
    /// Letter grade
    Grade,
}

/// Requested theme change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Flip light/dark
    Toggle,
    /// Switch to a specific theme
    Set(Theme),
}

/// One parsed session command. Positions are 1-based as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// `semester add`
    AddSemester,
    /// `semester rm <S>`
    RemoveSemester(usize),
    /// `semester rename <S> <name>`
    RenameSemester(usize, String),
    /// `subject add <S> [name] [credits] [grade]`
    AddSubject {
        /// Semester position
        semester: usize,
        /// Name to set after adding
        name: Option<String>,
        /// Raw credits text to set after adding
        credits: Option<String>,
        /// Grade to set after adding
        grade: Option<String>,
    },
    /// `subject rm <S> <N>`
    RemoveSubject(usize, usize),
    /// `subject set <S> <N> <field> <value>`
    SetSubject {
        /// Semester position
        semester: usize,
        /// Subject position within the semester
        subject: usize,
        /// Field being changed
        field: SubjectField,
        /// New value as typed
        value: String,
    },
    /// `scale <4.0|10.0>`
    Scale(GradeScale),
    /// `reset`
    Reset,
    /// `show`
    Show,
    /// `grades`
    Grades,
    /// `export [path] [format]`
    Export {
        /// Output file, or the default report path
        path: Option<PathBuf>,
        /// Output format, or the one implied by the path
        format: Option<ReportFormat>,
    },
    /// `save [path]`
    Save(Option<PathBuf>),
    /// `theme [toggle|dark|light]`
    Theme(Option<ThemeAction>),
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

impl SessionCommand {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    ///
    /// # Errors
    /// Returns an error for unbalanced quotes, unknown commands, or bad arguments
    pub fn parse(line: &str) -> Result<Option<Self>, SessionError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let words = shell_words::split(trimmed).map_err(|e| SessionError::Parse(e.to_string()))?;
        let Some((head, args)) = words.split_first() else {
            return Ok(None);
        };
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let command = match head.to_lowercase().as_str() {
            "semester" | "sem" => Self::parse_semester(&args)?,
            "subject" | "sub" => Self::parse_subject(&args)?,
            "scale" => match args.as_slice() {
                [scale] => Self::Scale(scale.parse().map_err(SessionError::Parse)?),
                _ => return Err(SessionError::Usage("scale <4.0|10.0>")),
            },
            "reset" => Self::Reset,
            "show" | "ls" => Self::Show,
            "grades" => Self::Grades,
            "export" => Self::parse_export(&args)?,
            "save" => match args.as_slice() {
                [] => Self::Save(None),
                [path] => Self::Save(Some(PathBuf::from(path))),
                _ => return Err(SessionError::Usage("save [path]")),
            },
            "theme" => match args.as_slice() {
                [] => Self::Theme(None),
                ["toggle"] => Self::Theme(Some(ThemeAction::Toggle)),
                [theme] => Self::Theme(Some(ThemeAction::Set(
                    theme.parse().map_err(SessionError::Parse)?,
                ))),
                _ => return Err(SessionError::Usage("theme [toggle|dark|light]")),
            },
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(SessionError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }

    fn parse_semester(args: &[&str]) -> Result<Self, SessionError> {
        match args {
            ["add"] => Ok(Self::AddSemester),
            ["rm" | "remove", pos] => Ok(Self::RemoveSemester(parse_position(pos)?)),
            ["rename", pos, name @ ..] if !name.is_empty() => {
                Ok(Self::RenameSemester(parse_position(pos)?, name.join(" ")))
            }
            _ => Err(SessionError::Usage(
                "semester add | semester rm <S> | semester rename <S> <name>",
            )),
        }
    }

    fn parse_subject(args: &[&str]) -> Result<Self, SessionError> {
        match args {
            ["add", sem, rest @ ..] if rest.len() <= 3 => Ok(Self::AddSubject {
                semester: parse_position(sem)?,
                name: rest.first().map(|s| (*s).to_string()),
                credits: rest.get(1).map(|s| (*s).to_string()),
                grade: rest.get(2).map(|s| (*s).to_string()),
            }),
            ["rm" | "remove", sem, sub] => Ok(Self::RemoveSubject(
                parse_position(sem)?,
                parse_position(sub)?,
            )),
            ["set", sem, sub, field, value] => Ok(Self::SetSubject {
                semester: parse_position(sem)?,
                subject: parse_position(sub)?,
                field: parse_field(field)?,
                value: (*value).to_string(),
            }),
            _ => Err(SessionError::Usage(
                "subject add <S> [name] [credits] [grade] | subject rm <S> <N> | subject set <S> <N> name|credits|grade <value>",
            )),
        }
    }

    fn parse_export(args: &[&str]) -> Result<Self, SessionError> {
        match args {
            [] => Ok(Self::Export {
                path: None,
                format: None,
            }),
            [single] => Ok(single.parse::<ReportFormat>().map_or_else(
                |_| Self::Export {
                    path: Some(PathBuf::from(single)),
                    format: None,
                },
                |format| Self::Export {
                    path: None,
                    format: Some(format),
                },
            )),
            [path, format] => Ok(Self::Export {
                path: Some(PathBuf::from(path)),
                format: Some(format.parse().map_err(SessionError::Parse)?),
            }),
            _ => Err(SessionError::Usage("export [path] [format]")),
        }
    }
}

fn parse_position(text: &str) -> Result<usize, SessionError> {
    match text.parse::<usize>() {
        Ok(pos) if pos > 0 => Ok(pos),
        _ => Err(SessionError::InvalidPosition(text.to_string())),
    }
}

fn parse_field(text: &str) -> Result<SubjectField, SessionError> {
    match text.to_lowercase().as_str() {
        "name" => Ok(SubjectField::Name),
        "credits" | "credit" => Ok(SubjectField::Credits),
        "grade" => Ok(SubjectField::Grade),
        _ => Err(SessionError::Usage("subject field must be name, credits or grade")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SessionCommand {
        SessionCommand::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_and_comments() {
        assert_eq!(SessionCommand::parse("   ").unwrap(), None);
        assert_eq!(SessionCommand::parse("# note").unwrap(), None);
    }

    #[test]
    fn test_semester_commands() {
        assert_eq!(parse("semester add"), SessionCommand::AddSemester);
        assert_eq!(parse("semester rm 2"), SessionCommand::RemoveSemester(2));
        assert_eq!(
            parse("semester rename 1 Fall 2024"),
            SessionCommand::RenameSemester(1, "Fall 2024".to_string())
        );
    }

    #[test]
    fn test_subject_add_with_quotes() {
        assert_eq!(
            parse("subject add 1 \"Linear Algebra\" 4 B+"),
            SessionCommand::AddSubject {
                semester: 1,
                name: Some("Linear Algebra".to_string()),
                credits: Some("4".to_string()),
                grade: Some("B+".to_string()),
            }
        );
        assert_eq!(
            parse("subject add 3"),
            SessionCommand::AddSubject {
                semester: 3,
                name: None,
                credits: None,
                grade: None,
            }
        );
    }

    #[test]
    fn test_subject_set() {
        assert_eq!(
            parse("subject set 1 2 credits 4x"),
            SessionCommand::SetSubject {
                semester: 1,
                subject: 2,
                field: SubjectField::Credits,
                value: "4x".to_string(),
            }
        );
    }

    #[test]
    fn test_export_forms() {
        assert_eq!(
            parse("export"),
            SessionCommand::Export {
                path: None,
                format: None
            }
        );
        assert_eq!(
            parse("export html"),
            SessionCommand::Export {
                path: None,
                format: Some(ReportFormat::Html)
            }
        );
        assert_eq!(
            parse("export out/r.md"),
            SessionCommand::Export {
                path: Some(PathBuf::from("out/r.md")),
                format: None
            }
        );
        assert_eq!(
            parse("export r.txt json"),
            SessionCommand::Export {
                path: Some(PathBuf::from("r.txt")),
                format: Some(ReportFormat::Json)
            }
        );
    }

    #[test]
    fn test_scale_and_theme() {
        assert_eq!(parse("scale 10"), SessionCommand::Scale(GradeScale::TenPoint));
        assert_eq!(parse("theme"), SessionCommand::Theme(None));
        assert_eq!(
            parse("theme toggle"),
            SessionCommand::Theme(Some(ThemeAction::Toggle))
        );
        assert_eq!(
            parse("theme dark"),
            SessionCommand::Theme(Some(ThemeAction::Set(Theme::Dark)))
        );
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            SessionCommand::parse("frobnicate"),
            Err(SessionError::UnknownCommand(c)) if c == "frobnicate"
        ));
        assert!(matches!(
            SessionCommand::parse("semester rm 0"),
            Err(SessionError::InvalidPosition(_))
        ));
        assert!(matches!(
            SessionCommand::parse("subject add 1 \"open"),
            Err(SessionError::Parse(_))
        ));
        assert!(matches!(
            SessionCommand::parse("scale 5"),
            Err(SessionError::Parse(_))
        ));
        assert!(matches!(
            SessionCommand::parse("subject set 1 1 colour red"),
            Err(SessionError::Usage(_))
        ));
    }
}
