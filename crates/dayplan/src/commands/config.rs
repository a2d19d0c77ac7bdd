use anyhow::Context;
use dayplan_settings::{Paths, Settings};
use std::path::Path;

pub fn run_show() -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let path = paths.settings_file();
    let settings = Settings::load(&path).with_context(|| format!("loading {}", path.display()))?;

    println!("Settings: {}", path.display());
    println!("==========");
    println!("max_sentences: {}", settings.summarizer.max_sentences);
    println!("max_length:    {}", settings.summarizer.max_length);
    Ok(())
}

pub fn run_set(max_sentences: Option<usize>, max_length: Option<usize>) -> anyhow::Result<()> {
    let path = Paths::new()?.settings_file();
    let settings = apply(&path, max_sentences, max_length)?;
    println!(
        "Saved: max_sentences={} max_length={}",
        settings.summarizer.max_sentences, settings.summarizer.max_length
    );
    Ok(())
}

pub fn run_reset() -> anyhow::Result<()> {
    let path = Paths::new()?.settings_file();
    Settings::default()
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Restored defaults");
    Ok(())
}

/// Update the settings file, keeping values not given
fn apply(
    path: &Path,
    max_sentences: Option<usize>,
    max_length: Option<usize>,
) -> anyhow::Result<Settings> {
    let mut settings =
        Settings::load(path).with_context(|| format!("loading {}", path.display()))?;
    if let Some(n) = max_sentences {
        settings.summarizer.max_sentences = n;
    }
    if let Some(n) = max_length {
        settings.summarizer.max_length = n;
    }
    settings
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayplan_settings::HOME_ENV;
    use serial_test::serial;

    #[test]
    fn test_apply_keeps_unset_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        apply(&path, Some(5), None).unwrap();
        let settings = apply(&path, None, Some(120)).unwrap();

        assert_eq!(settings.summarizer.max_sentences, 5);
        assert_eq!(settings.summarizer.max_length, 120);
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_apply_rejects_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let err = apply(&path, Some(0), None).unwrap_err();
        assert!(format!("{:#}", err).contains("max_sentences"));
        assert!(!path.exists());
    }

    #[test]
    #[serial]
    fn test_commands_use_dayplan_home() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var(HOME_ENV, dir.path());
        let path = dir.path().join("settings.json");

        run_set(Some(4), Some(150)).unwrap();
        let saved = Settings::load(&path).unwrap();
        assert_eq!(saved.summarizer.max_sentences, 4);
        assert_eq!(saved.summarizer.max_length, 150);
        assert!(run_show().is_ok());

        run_reset().unwrap();
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());

        std::env::remove_var(HOME_ENV);
    }
}
