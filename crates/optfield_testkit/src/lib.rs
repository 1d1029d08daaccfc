//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read and parse a JSON fixture.
pub fn fixture_json(name: &str) -> Value {
	let path = fixture_path(name);
	let bytes = std::fs::read(&path).unwrap_or_else(|err| panic!("read fixture {}: {err}", path.display()));
	serde_json::from_slice(&bytes).unwrap_or_else(|err| panic!("parse fixture {}: {err}", path.display()))
}

/// Sorted key list of a JSON object, empty for anything else.
pub fn object_keys(value: &Value) -> Vec<&str> {
	let mut keys: Vec<&str> = value.as_object().map(|map| map.keys().map(String::as_str).collect()).unwrap_or_default();
	keys.sort_unstable();
	keys
}

static SCRATCH_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Scratch file under the target directory, removed with its directory on drop.
#[derive(Debug)]
pub struct ScratchFile {
	dir: PathBuf,
	path: PathBuf,
}

impl ScratchFile {
	/// Path of the written file.
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl Drop for ScratchFile {
	fn drop(&mut self) {
		let _ = std::fs::remove_dir_all(&self.dir);
	}
}

/// Write `contents` into a fresh scratch directory under the target directory.
pub fn scratch_file(name: &str, contents: &str) -> ScratchFile {
	let seq = SCRATCH_SEQ.fetch_add(1, Ordering::Relaxed);
	let dir = target_dir().join("optfield-scratch").join(format!("{}-{seq}", std::process::id()));
	std::fs::create_dir_all(&dir).unwrap_or_else(|err| panic!("create scratch dir {}: {err}", dir.display()));
	let path = dir.join(name);
	std::fs::write(&path, contents).unwrap_or_else(|err| panic!("write scratch file {}: {err}", path.display()));
	ScratchFile { dir, path }
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}
