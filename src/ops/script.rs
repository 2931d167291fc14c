use crate::ops::store::{Command, CommandError, TaskStore};

/// Error type for command scripts. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: invalid command: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
    #[error("line {line}: {source}")]
    Rejected { line: usize, source: CommandError },
}

/// Parse a script: one JSON command per line. Blank lines and lines starting
/// with `#` are skipped. Returns each command with its line number.
pub fn parse_script(text: &str) -> Result<Vec<(usize, Command)>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let cmd: Command = serde_json::from_str(trimmed)
            .map_err(|source| ScriptError::Parse { line, source })?;
        commands.push((line, cmd));
    }
    Ok(commands)
}

/// Dispatch each command against `store`, applying the same checks an
/// interactive caller would: adds need a name and a category, toggles need an
/// existing item. Stops at the first rejected command; earlier commands stay
/// applied.
pub fn run_script(store: &mut TaskStore, commands: &[(usize, Command)]) -> Result<(), ScriptError> {
    for (line, cmd) in commands {
        check(store, cmd).map_err(|source| ScriptError::Rejected {
            line: *line,
            source,
        })?;
        store.dispatch(cmd);
    }
    Ok(())
}

fn check(store: &TaskStore, cmd: &Command) -> Result<(), CommandError> {
    match cmd {
        Command::Add { key, category } => Command::add_checked(key, category).map(|_| ()),
        Command::ToggleDone { key, .. } => {
            if store.get(key).is_some() {
                Ok(())
            } else {
                Err(CommandError::NotFound(key.clone()))
            }
        }
    }
}
