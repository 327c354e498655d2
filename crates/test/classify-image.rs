//! Feed saved captures through the history and a rule set, printing what
//! each frame is recognised as and what would be sent to the device.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use stagehand_core::apps;
use stagehand_core::history::{Screenshots, Stages};
use stagehand_core::pixels;
use stagehand_core::references::References;
use stagehand_core::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "classify-image", about = "Classify saved captures offline")]
struct Args {
    /// Rule set to classify with (ic, mlp)
    app: String,

    /// Captures, oldest first
    #[arg(required = true)]
    frames: Vec<PathBuf>,

    #[arg(long, default_value = "settings.json")]
    settings: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load(&args.settings);
    let references = References::load(&settings.references)?;
    let registry = apps::build(&args.app, &references)?;

    // paths are not owned files here; keep them out of reach of eviction
    let mut screenshots = Screenshots::new(settings.screenshots_to_keep.max(args.frames.len()));
    let mut stages = Stages::new(settings.stages_to_keep);

    for path in &args.frames {
        let image = pixels::load_rgb(path)?;
        screenshots.add(path.clone(), image);
        let stage = registry.classify(&screenshots, &stages)?;
        stages.add(stage.kind);
        println!("{}: {} -> {}", path.display(), stage, stage.command(&stages));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_flag_may_follow_frames() {
        let args = Args::try_parse_from(["classify-image", "ic", "a.png", "b.png", "--settings", "s.json"]).unwrap();
        assert_eq!(args.app, "ic");
        assert_eq!(args.frames, vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
        assert_eq!(args.settings, PathBuf::from("s.json"));
    }

    #[test]
    fn frames_are_required() {
        assert!(Args::try_parse_from(["classify-image", "ic"]).is_err());
        let args = Args::try_parse_from(["classify-image", "mlp", "x.png"]).unwrap();
        assert_eq!(args.settings, PathBuf::from("settings.json"));
    }
}
