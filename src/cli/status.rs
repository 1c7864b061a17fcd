use crate::error::Result;
use crate::settings::{get_output_dir, load_settings, settings_path};

pub fn run() -> Result<()> {
    let path = settings_path();
    let settings = load_settings();

    let source = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("Settings:     {}{source}", path.display());
    println!("Output dir:   {}", get_output_dir().display());
    println!("Format:       {}", settings.default_format);
    println!("Sheet name:   {}", settings.sheet_name);
    println!(
        "PDF input:    {}",
        if cfg!(feature = "pdf") { "enabled" } else { "disabled (.txt only)" }
    );
    Ok(())
}
