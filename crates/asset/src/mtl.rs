//! Material library scanning: pull the diffuse texture map out of a `.mtl`
//! file. Everything besides `map_Kd` is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Scan a material file for its first `map_Kd` directive and return the
/// texture path it names, relative to wherever the material file lives.
///
/// Returns `None` when the file cannot be opened, a line cannot be read, or
/// no `map_Kd` appears: a model without a resolvable diffuse texture is
/// valid, so none of these are errors. The scan stops at the first hit.
pub fn first_diffuse_map(path: &Path) -> Option<PathBuf> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            log::debug!("material file {} not readable: {}", path.display(), err);
            return None;
        }
    };

    for line in BufReader::new(file).lines() {
        let line = line.ok()?;
        let mut parts = line.split_whitespace();
        if parts.next() == Some("map_Kd") {
            return parts.next().map(PathBuf::from);
        }
    }

    None
}
