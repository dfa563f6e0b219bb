//! External editor integration for composing entry text

use crate::error::{DaybookError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Session for editing text in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Write `initial` to `scratch`, open it in the editor, wait for the editor to exit and
    /// return the edited text with trailing whitespace trimmed.
    pub fn edit_text(&self, scratch: &Path, initial: &str) -> Result<String> {
        fs::write(scratch, initial)?;
        let edited = self
            .wait_for(scratch)
            .and_then(|()| fs::read_to_string(scratch).map_err(DaybookError::Io));
        let _ = fs::remove_file(scratch);

        Ok(edited?.trim_end().to_string())
    }

    fn wait_for(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd").arg("/C").arg(&program).args(&args).status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&args).status();

        let status = status.map_err(|e| {
            DaybookError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(DaybookError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let mut parts = self.command.split_whitespace().map(str::to_string);

        match parts.next() {
            Some(program) => (program, parts.collect()),
            None if cfg!(windows) => ("notepad".to_string(), vec![]),
            None => ("nano".to_string(), vec![]),
        }
    }
}
