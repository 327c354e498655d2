//! Bounded, newest-first histories of captured frames and recognised stages.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::{debug, warn};

use crate::stage::StageKind;

/// One captured frame and the file it was decoded from.
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub path: PathBuf,
    pub image: RgbImage,
}

/// The last `max_count` captured frames. Evicted frames have their files deleted.
#[derive(Debug)]
pub struct Screenshots {
    entries: VecDeque<Screenshot>,
    max_count: usize,
}

impl Screenshots {
    pub fn new(max_count: usize) -> Self {
        Self { entries: VecDeque::with_capacity(max_count + 1), max_count }
    }

    /// Most recent frame.
    pub fn last(&self) -> Option<&RgbImage> {
        self.get(0)
    }

    /// Frame captured just before [`Screenshots::last`].
    pub fn previous(&self) -> Option<&RgbImage> {
        self.get(1)
    }

    pub fn get(&self, index: usize) -> Option<&RgbImage> {
        self.entries.get(index).map(|s| &s.image)
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|s| s.path.as_path())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a frame at the front, evicting (and deleting) anything past `max_count`.
    pub fn add(&mut self, path: PathBuf, image: RgbImage) {
        self.entries.push_front(Screenshot { path, image });
        while self.entries.len() > self.max_count {
            if let Some(evicted) = self.entries.pop_back() {
                debug!("Removing screenshot {}", evicted.path.display());
                if let Err(e) = std::fs::remove_file(&evicted.path) {
                    warn!("cannot remove screenshot {}: {}", evicted.path.display(), e);
                }
            }
        }
    }
}

/// The last `max_count` recognised stages, newest first.
#[derive(Debug, Clone)]
pub struct Stages {
    stages: VecDeque<StageKind>,
    max_count: usize,
}

impl Stages {
    pub fn new(max_count: usize) -> Self {
        Self { stages: VecDeque::with_capacity(max_count + 1), max_count }
    }

    /// Stage recognised on the current tick (once it has been added).
    pub fn last(&self) -> Option<StageKind> {
        self.get(0)
    }

    /// Stage recognised on the tick before [`Stages::last`].
    pub fn previous(&self) -> Option<StageKind> {
        self.get(1)
    }

    pub fn get(&self, index: usize) -> Option<StageKind> {
        self.stages.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = StageKind> + '_ {
        self.stages.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn add(&mut self, stage: StageKind) {
        self.stages.push_front(stage);
        self.stages.truncate(self.max_count);
    }

    /// The whole window is full and nothing but the fallback was recognised in it.
    pub fn is_unknown_for_long_time(&self) -> bool {
        self.max_count > 0
            && self.stages.len() == self.max_count
            && self.stages.iter().all(|s| *s == StageKind::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn frame(v: u8) -> RgbImage {
        RgbImage::from_pixel(2, 2, Rgb([v, v, v]))
    }

    #[test]
    fn screenshots_keep_newest_first() {
        let mut s = Screenshots::new(2);
        assert!(s.last().is_none());
        s.add(PathBuf::new(), frame(1));
        assert_eq!(s.last(), Some(&frame(1)));
        assert!(s.previous().is_none());
        s.add(PathBuf::new(), frame(2));
        assert_eq!(s.last(), Some(&frame(2)));
        assert_eq!(s.previous(), Some(&frame(1)));
    }

    #[test]
    fn screenshots_never_exceed_bound() {
        for max in 1..5 {
            let mut s = Screenshots::new(max);
            for i in 0..10u8 {
                s.add(PathBuf::new(), frame(i));
                assert!(s.len() <= max);
                // retained entries are the most recent ones, newest first
                for k in 0..s.len() {
                    assert_eq!(s.get(k), Some(&frame(i - k as u8)));
                }
            }
        }
    }

    #[test]
    fn eviction_deletes_backing_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = (0..3).map(|i| dir.path().join(format!("{i}.png"))).collect();
        for p in &paths {
            std::fs::write(p, b"x").unwrap();
        }

        let mut s = Screenshots::new(2);
        s.add(paths[0].clone(), frame(0));
        s.add(paths[1].clone(), frame(1));
        assert!(paths[0].exists());
        s.add(paths[2].clone(), frame(2));
        assert!(!paths[0].exists());
        assert!(paths[1].exists());
        assert!(paths[2].exists());
        assert_eq!(s.paths().collect::<Vec<_>>(), vec![paths[2].as_path(), paths[1].as_path()]);
    }

    #[test]
    fn eviction_survives_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = Screenshots::new(1);
        s.add(dir.path().join("gone.png"), frame(0));
        s.add(dir.path().join("next.png"), frame(1));
        assert_eq!(s.len(), 1);
        assert_eq!(s.last(), Some(&frame(1)));
    }

    #[test]
    fn stages_are_bounded() {
        let mut st = Stages::new(2);
        st.add(StageKind::Unknown);
        st.add(StageKind::Start);
        assert_eq!(st.last(), Some(StageKind::Start));
        assert_eq!(st.previous(), Some(StageKind::Unknown));
        st.add(StageKind::Bank);
        assert_eq!(st.len(), 2);
        assert_eq!(st.iter().collect::<Vec<_>>(), vec![StageKind::Bank, StageKind::Start]);
    }

    #[test]
    fn unknown_for_long_time_needs_full_window() {
        let mut st = Stages::new(2);
        st.add(StageKind::Unknown);
        st.add(StageKind::Start);
        assert!(!st.is_unknown_for_long_time());

        let mut st = Stages::new(3);
        st.add(StageKind::Unknown);
        st.add(StageKind::Unknown);
        assert!(!st.is_unknown_for_long_time());
        st.add(StageKind::Unknown);
        assert!(st.is_unknown_for_long_time());
        st.add(StageKind::Desktop);
        assert!(!st.is_unknown_for_long_time());
    }
}
