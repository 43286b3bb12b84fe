//! Line-oriented interactive session

use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::export::{render_html, write_html};
use crate::llm::{Language, LlmProvider, ProviderKind, SummaryMode};
use crate::session::{
    Outcome, Reply, SessionController, SessionInput, SessionState, SummaryResult,
};
use crate::transcript::{watch_url, TranscriptFetcher};

const HELP: &str = "\
Commands:
  url <URL>            set the video URL
  lang <en|zh-CN|zh-TW> set the summary language
  provider <github|openrouter>
                       choose the LLM provider
  quick                generate a summary
  detail               generate a timestamped summary
  export [PATH]        save the latest summary as HTML
  show                 show the session state
  help                 show this help
  quit                 leave the session";

/// One parsed line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Input(SessionInput),
    Generate(SummaryMode),
    Export(Option<PathBuf>),
    Help,
    Quit,
}

/// Parse a session line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "url" if !rest.is_empty() => SessionCommand::Input(SessionInput::SetUrl(rest.to_string())),
        "lang" | "language" => {
            SessionCommand::Input(SessionInput::SetLanguage(rest.parse::<Language>()?))
        }
        "provider" => {
            SessionCommand::Input(SessionInput::SetProvider(rest.parse::<ProviderKind>()?))
        }
        "quick" | "summary" => SessionCommand::Generate(SummaryMode::Quick),
        "detail" | "detailed" => SessionCommand::Generate(SummaryMode::Detailed),
        "export" if rest.is_empty() => SessionCommand::Export(None),
        "export" => SessionCommand::Export(Some(PathBuf::from(rest))),
        "show" => SessionCommand::Input(SessionInput::Show),
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        "url" => return Err("Usage: url <URL>".to_string()),
        other => return Err(format!("Unknown command '{}'. Type 'help' for commands.", other)),
    };

    Ok(Some(command))
}

/// Run the session loop until `quit` or end of input.
///
/// Every failure is reported to `out` and the loop continues. The final
/// state is returned.
pub async fn drive_session<F, P, R, W>(
    controller: &SessionController<F, P>,
    mut state: SessionState,
    input: R,
    out: &mut W,
    default_export: &Path,
) -> Result<SessionState>
where
    F: TranscriptFetcher,
    P: LlmProvider,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };

        match command {
            SessionCommand::Input(change) => {
                let (next, Reply(text)) = state.apply(change);
                state = next;
                writeln!(out, "{}", text)?;
            }
            SessionCommand::Generate(mode) => {
                let (next, outcome) = controller.generate(state, mode).await;
                state = next;
                print_outcome(out, &outcome)?;
            }
            SessionCommand::Export(path) => {
                let Some(latest) = state.latest.as_ref() else {
                    writeln!(out, "No summary yet. Run 'quick' or 'detail' first.")?;
                    continue;
                };
                let path = path.unwrap_or_else(|| default_export.to_path_buf());
                match write_html(&path, &render_html(&latest.title, &latest.summary)) {
                    Ok(written) => writeln!(out, "Saved {}", written.display())?,
                    Err(e) => writeln!(out, "Export failed: {}", e)?,
                }
            }
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::Quit => break,
        }
    }

    Ok(state)
}

/// Print a generation outcome; failures print their user-facing message.
pub fn print_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> std::io::Result<()> {
    match outcome {
        Outcome::Generated { result, notices } => print_summary(out, result, notices),
        failed => match failed.error_message() {
            Some(message) => writeln!(out, "{}", message),
            None => Ok(()),
        },
    }
}

/// Print a generated summary with its header.
pub fn print_summary<W: Write>(
    out: &mut W,
    result: &SummaryResult,
    notices: &[String],
) -> std::io::Result<()> {
    for notice in notices {
        writeln!(out, "warning: {}", notice)?;
    }
    writeln!(out, "Summary of {}", result.title)?;
    writeln!(out, "YouTube Video: {}", watch_url(&result.video_id))?;
    writeln!(out)?;
    writeln!(out, "{}", result.summary)
}
