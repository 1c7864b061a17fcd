use crate::error::{Result, SlikError};
use crate::export::ExportFormat;
use crate::settings::{load_settings, save_settings, settings_path, Settings};

/// Apply the given changes on top of `settings`. Formats are validated so a
/// bad default cannot break later exports.
fn apply(
    mut settings: Settings,
    output_dir: Option<String>,
    format: Option<String>,
    sheet_name: Option<String>,
) -> Result<Settings> {
    if let Some(dir) = output_dir {
        settings.output_dir = dir;
    }
    if let Some(key) = format {
        settings.default_format = ExportFormat::from_key(&key)?.key().to_string();
    }
    if let Some(name) = sheet_name {
        let name = name.trim();
        // Excel limits: 1-31 chars, none of []:*?/\
        if name.is_empty()
            || name.chars().count() > 31
            || name.contains(['[', ']', ':', '*', '?', '/', '\\'])
        {
            return Err(SlikError::Settings(format!("invalid sheet name: {name:?}")));
        }
        settings.sheet_name = name.to_string();
    }
    Ok(settings)
}

pub fn run(output_dir: Option<String>, format: Option<String>, sheet_name: Option<String>) -> Result<()> {
    if output_dir.is_none() && format.is_none() && sheet_name.is_none() {
        println!("Nothing to change. See `slik configure --help`.");
        return Ok(());
    }
    let settings = apply(load_settings(), output_dir, format, sheet_name)?;
    save_settings(&settings)?;
    println!("Saved {}", settings_path().display());
    Ok(())
}
