//! Live checks against a connected device. All are ignored by default:
//! run with `test-device --ignored` once `settings.json` points at a device.

use std::path::Path;

use libtest_mimic::{Arguments, Failed, Trial};

use stagehand_core::command::Command;
use stagehand_core::pixels;
use stagehand_core::platform::create_platform;
use stagehand_core::settings::Settings;

fn settings() -> Settings {
    Settings::load(Path::new("settings.json"))
}

fn grab_screenshot() -> Result<(), Failed> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("screen.png");
    let mut platform = create_platform(false, &settings());
    platform.grabber.grab(&path)?;
    let image = pixels::load_rgb(&path)?;
    if image.width() == 0 || image.height() == 0 {
        return Err("empty capture".into());
    }
    println!("captured {}x{}", image.width(), image.height());
    Ok(())
}

fn grab_twice_is_stable() -> Result<(), Failed> {
    let dir = tempfile::tempdir()?;
    let mut platform = create_platform(false, &settings());
    let a = dir.path().join("a.png");
    let b = dir.path().join("b.png");
    platform.grabber.grab(&a)?;
    platform.grabber.grab(&b)?;
    let (a, b) = (pixels::load_rgb(&a)?, pixels::load_rgb(&b)?);
    if a.dimensions() != b.dimensions() {
        return Err(format!("{:?} != {:?}", a.dimensions(), b.dimensions()).into());
    }
    Ok(())
}

fn tap_corner() -> Result<(), Failed> {
    let mut platform = create_platform(false, &settings());
    platform.device.tap(1, 1)?;
    Ok(())
}

fn power_toggle_twice() -> Result<(), Failed> {
    let mut platform = create_platform(false, &settings());
    Command::batch([Command::TogglePower, Command::TogglePower]).execute(platform.device.as_mut());
    Ok(())
}

fn main() {
    let args = Arguments::from_args();
    let tests = vec![
        Trial::test("grab_screenshot", grab_screenshot).with_ignored_flag(true),
        Trial::test("grab_twice_is_stable", grab_twice_is_stable).with_ignored_flag(true),
        Trial::test("tap_corner", tap_corner).with_ignored_flag(true),
        Trial::test("power_toggle_twice", power_toggle_twice).with_ignored_flag(true),
    ];
    libtest_mimic::run(&args, tests).exit();
}
