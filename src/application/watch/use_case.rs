//! Watch Use Case implementation

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::build::BuildUseCase;
use crate::domain::entities::BuildDescription;
use crate::domain::ports::CompilationDelegate;
use crate::error::BundleResult;

use super::event::{compute_content_hash, WatchEvent, WatcherState};

/// Prefix shared by staging and swap directories; never a source change.
const SCRATCH_PREFIX: &str = ".wasm-bundle-";

/// Watch Use Case
///
/// Rebuilds one pipeline each time its inputs settle after a change. Runs
/// until the running flag is cleared.
pub struct WatchUseCase<C>
where
    C: CompilationDelegate,
{
    build: BuildUseCase<C>,
    desc: BuildDescription,
}

impl<C> WatchUseCase<C>
where
    C: CompilationDelegate,
{
    pub fn new(build: BuildUseCase<C>, desc: BuildDescription) -> Self {
        Self { build, desc }
    }

    /// Initial build followed by watching.
    ///
    /// A failing initial build is returned as an error; failing rebuilds are
    /// reported through the callback and watching continues.
    pub fn run(&self, running: Arc<AtomicBool>, on_event: impl Fn(WatchEvent)) -> BundleResult<()> {
        on_event(WatchEvent::BuildStarted);
        match self.build.execute(&self.desc) {
            Ok(report) => on_event(WatchEvent::BuildComplete {
                files: report.files.len(),
                elapsed_ms: report.elapsed.as_millis() as u64,
            }),
            Err(e) => {
                on_event(WatchEvent::Error {
                    message: e.to_string(),
                });
                return Err(e);
            }
        }

        self.watch(running, on_event)
    }

    /// Watch inputs and rebuild on change, without an initial build.
    pub fn watch(&self, running: Arc<AtomicBool>, on_event: impl Fn(WatchEvent)) -> BundleResult<()> {
        let inputs = watch_inputs(&self.desc);
        on_event(WatchEvent::WatchStarted {
            pipeline: self.desc.pipeline().to_string(),
            paths: inputs.iter().map(|p| p.display().to_string()).collect(),
        });

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )?;

        let set = WatchSet::new(inputs);
        for (path, mode) in set.registrations() {
            watcher.watch(&path, mode)?;
            tracing::debug!(path = %path.display(), ?mode, "watching");
        }

        // notify may replay events for existing files right after registration
        let cooldown_end = Instant::now() + Duration::from_millis(500);
        while Instant::now() < cooldown_end {
            let _ = rx.recv_timeout(Duration::from_millis(50));
        }

        let mut state = WatcherState::new();
        let mut content_hashes: HashMap<PathBuf, String> = HashMap::new();

        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(Duration::from_millis(50)) {
                if !set.contains(&path) || is_ignored(&self.desc, &path) {
                    continue;
                }

                match std::fs::read(&path) {
                    Ok(content) => {
                        let new_hash = compute_content_hash(&content);
                        if content_hashes.get(&path) == Some(&new_hash) {
                            continue;
                        }
                        content_hashes.insert(path.clone(), new_hash);
                        state.add_change(path);
                    }
                    // Deleted files and directory events still invalidate the bundle
                    Err(_) => {
                        content_hashes.remove(&path);
                        state.add_change(path);
                    }
                }
            }

            if state.should_build() {
                for path in state.take_changes() {
                    on_event(WatchEvent::FileChanged {
                        path: path.display().to_string(),
                    });
                }
                self.rebuild(&on_event);
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    fn rebuild(&self, on_event: &impl Fn(WatchEvent)) {
        on_event(WatchEvent::BuildStarted);
        match self.build.execute(&self.desc) {
            Ok(report) => on_event(WatchEvent::BuildComplete {
                files: report.files.len(),
                elapsed_ms: report.elapsed.as_millis() as u64,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "rebuild failed, still watching");
                on_event(WatchEvent::Error {
                    message: e.to_string(),
                });
            }
        }
    }
}

/// Paths whose changes trigger a rebuild. Only existing paths are returned.
///
/// Covers the crate sources and manifest, the entry script, every asset
/// source and any configured extra directories.
pub fn watch_inputs(desc: &BuildDescription) -> Vec<PathBuf> {
    let crate_dir = desc.compile().crate_dir();
    let mut inputs = vec![
        crate_dir.join("src"),
        crate_dir.join("Cargo.toml"),
        desc.target().entry_path().to_path_buf(),
    ];
    inputs.extend(desc.copy_rules().iter().map(|r| r.source_dir().to_path_buf()));
    inputs.extend(desc.watch_dirs().iter().cloned());

    let mut seen = Vec::new();
    for path in inputs {
        if path.exists() && !seen.contains(&path) {
            seen.push(path);
        }
    }
    seen
}

/// Watch inputs split by kind.
///
/// Directories are watched recursively. A file is watched through its parent
/// directory, since a save that renames a temp file over it replaces the
/// inode a direct watch would follow. Events are then kept only for paths
/// inside a watched directory or equal to a watched file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchSet {
    dirs: Vec<PathBuf>,
    files: Vec<PathBuf>,
    // Some backends (FSEvents) report canonical paths
    canonical_dirs: Vec<PathBuf>,
    canonical_files: Vec<PathBuf>,
}

impl WatchSet {
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        let (dirs, files): (Vec<PathBuf>, Vec<PathBuf>) =
            inputs.into_iter().partition(|p| p.is_dir());
        let canonical = |paths: &[PathBuf]| -> Vec<PathBuf> {
            paths.iter().filter_map(|p| p.canonicalize().ok()).collect()
        };
        Self {
            canonical_dirs: canonical(&dirs),
            canonical_files: canonical(&files),
            dirs,
            files,
        }
    }

    /// Paths to hand to notify, each registered once.
    pub fn registrations(&self) -> Vec<(PathBuf, RecursiveMode)> {
        let mut out: Vec<(PathBuf, RecursiveMode)> = self
            .dirs
            .iter()
            .map(|d| (d.clone(), RecursiveMode::Recursive))
            .collect();

        for file in &self.files {
            let Some(parent) = file.parent() else { continue };
            // Already covered by a recursive watch
            if self.dirs.iter().any(|d| parent.starts_with(d)) {
                continue;
            }
            if !out.iter().any(|(p, _)| p == parent) {
                out.push((parent.to_path_buf(), RecursiveMode::NonRecursive));
            }
        }
        out
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.iter().chain(&self.canonical_files).any(|f| f == path)
            || self.dirs.iter().chain(&self.canonical_dirs).any(|d| path.starts_with(d))
    }
}

/// Changes under build outputs never trigger a rebuild.
pub fn is_ignored(desc: &BuildDescription, path: &Path) -> bool {
    let outputs = [
        desc.target().output_dir().to_path_buf(),
        desc.compile().out_dir().to_path_buf(),
        desc.compile().crate_dir().join("target"),
    ];
    if outputs.iter().any(|dir| path.starts_with(dir)) {
        return true;
    }

    path.components().any(|c| {
        c.as_os_str()
            .to_str()
            .is_some_and(|s| s.starts_with(SCRATCH_PREFIX))
    })
}
