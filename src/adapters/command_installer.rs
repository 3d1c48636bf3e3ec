use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::Installer;

/// Installs npm then bower dependencies by shelling out.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    steps: Vec<(String, Vec<String>)>,
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self {
            steps: vec![
                ("npm".to_string(), vec!["install".to_string()]),
                ("bower".to_string(), vec!["install".to_string()]),
            ],
        }
    }
}

impl CommandInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<(), AppError> {
        let command_line = format!("{} {}", program, args.join(" "));
        tracing::info!(command = %command_line, cwd = %cwd.display(), "running installer");

        let output = Command::new(program).args(args).current_dir(cwd).output().map_err(|e| {
            AppError::Install { command: command_line.clone(), details: e.to_string() }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::Install {
                command: command_line,
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }
        Ok(())
    }
}

impl Installer for CommandInstaller {
    fn install(&self, project_root: &Path) -> Result<(), AppError> {
        for (program, args) in &self.steps {
            self.run(program, args, project_root)?;
        }
        Ok(())
    }
}
