//! Post-scaffold dependency installation.

use crate::domain::AppError;
use crate::ports::Installer;

use super::scaffold::ScaffoldOutcome;

/// Run the installer when the scaffold run asked for it.
///
/// Returns whether installation ran.
pub fn execute<I>(installer: &I, outcome: &ScaffoldOutcome) -> Result<bool, AppError>
where
    I: Installer + ?Sized,
{
    if !outcome.install_required {
        tracing::debug!("skipping dependency installation");
        return Ok(false);
    }
    installer.install(&outcome.root)?;
    Ok(true)
}
