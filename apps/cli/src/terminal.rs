//! Line-oriented review loop.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use vocab_core::review::{ReviewSession, ReviewState};
use vocab_core::types::Grade;

use crate::session::{GradeOutcome, Trainer, VocabApi};

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Continue,
    Correct,
    Incorrect,
    Reload,
    Quit,
    Unknown,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "" => Self::Continue,
            "y" | "yes" => Self::Correct,
            "n" | "no" => Self::Incorrect,
            "r" | "reload" => Self::Reload,
            "q" | "quit" => Self::Quit,
            _ => Self::Unknown,
        }
    }
}

/// Run the review loop until the user quits or input ends.
pub async fn run<A, R, W>(
    trainer: &mut Trainer<A>,
    session: &mut ReviewSession,
    mut input: R,
    mut output: W,
) -> io::Result<()>
where
    A: VocabApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        match session.state().clone() {
            ReviewState::Empty => {
                writeln!(output, "No data available")?;
                if let Some(at) = session.next_eligible_at() {
                    writeln!(output, "Next card is due at {}", at.format("%Y-%m-%d %H:%M UTC"))?;
                }
                write!(output, "[r]eload or [q]uit: ")?;
                output.flush()?;

                match read_command(&mut input).await? {
                    Command::Quit => break,
                    Command::Reload | Command::Continue => trainer.reload(session).await,
                    _ => {}
                }
            }
            ReviewState::Prompting(item) => {
                writeln!(output)?;
                writeln!(output, "  {}", item.translation)?;
                write!(output, "[Enter] reveal, [q]uit: ")?;
                output.flush()?;

                match read_command(&mut input).await? {
                    Command::Quit => break,
                    Command::Continue => {
                        if let Err(e) = session.reveal() {
                            tracing::warn!("{}", e);
                        }
                    }
                    _ => {}
                }
            }
            ReviewState::Revealed(item) => {
                writeln!(output, "  {} = {}", item.translation, item.word)?;
                write!(output, "Correct? [y]es / [n]o / [q]uit: ")?;
                output.flush()?;

                let grade = match read_command(&mut input).await? {
                    Command::Quit => break,
                    Command::Correct => Grade::Correct,
                    Command::Incorrect => Grade::Incorrect,
                    _ => continue,
                };

                match trainer.grade(session, grade).await {
                    Ok(GradeOutcome::Saved) => {}
                    Ok(GradeOutcome::Failed(message)) => {
                        writeln!(output, "Could not save: {}", message)?;
                    }
                    Err(e) => tracing::warn!("{}", e),
                }
            }
            ReviewState::Grading { .. } => {
                // Only reachable if a grade was interrupted; offer the card again.
                if let Err(e) = session.persist_failed() {
                    tracing::warn!("{}", e);
                }
            }
        }
    }

    Ok(())
}

/// Read one command. End of input quits.
async fn read_command<R: AsyncBufRead + Unpin>(input: &mut R) -> io::Result<Command> {
    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Ok(Command::Quit);
    }
    Ok(Command::parse(&line))
}
