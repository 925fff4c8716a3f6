use std::{
    fs::{self, create_dir_all},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, info, trace};

use crate::{
    calendar_path::CalendarPath,
    dates::DateRange,
    error::{CalResult, CalendarError},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    /// Days visited.
    pub days: usize,
    /// Directories that did not exist before this run, base included.
    pub created: usize,
}

/// Creates a single directory, treating an existing directory as success.
///
/// Returns `true` when the directory was created by this call.
pub fn ensure_dir(path: &Path) -> CalResult<bool> {
    match fs::create_dir(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if path.is_dir() {
                Ok(false)
            } else {
                Err(CalendarError::NotADirectory(path.to_path_buf()))
            }
        }
        Err(source) => Err(CalendarError::CreateDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Creates the base directory and any missing parents.
///
/// Returns the directories that had to be created, outermost first.
pub fn ensure_base(base: &Path) -> CalResult<Vec<PathBuf>> {
    if base.is_dir() {
        return Ok(Vec::new());
    }
    if base.exists() {
        return Err(CalendarError::NotADirectory(base.to_path_buf()));
    }

    let mut missing: Vec<PathBuf> = base
        .ancestors()
        .filter(|p| !p.as_os_str().is_empty())
        .take_while(|p| fs::metadata(p).is_err())
        .map(Path::to_path_buf)
        .collect();
    missing.reverse();

    create_dir_all(base).map_err(|source| CalendarError::CreateDir {
        path: base.to_path_buf(),
        source,
    })?;

    Ok(missing)
}

/// Builds `<base>/<YYYY>/<MM-Month>/<DD-Weekday>` for every day of `range`.
///
/// Stops at the first failure; directories created up to that point stay.
pub fn materialize(base: &Path, range: &DateRange, verbose: bool) -> CalResult<TreeStats> {
    let mut stats = TreeStats::default();

    for dir in ensure_base(base)? {
        report(&dir, verbose);
        stats.created += 1;
    }

    for date in range.days() {
        let labels = CalendarPath::from(date);
        let mut dir = base.to_path_buf();

        for level in labels.levels() {
            dir.push(level);
            if ensure_dir(&dir)? {
                report(&dir, verbose);
                stats.created += 1;
            }
        }
        trace!(day = %labels.relative().display(), "day in place");
        stats.days += 1;
    }

    info!(days = stats.days, created = stats.created, "calendar tree complete");
    Ok(stats)
}

fn report(dir: &Path, verbose: bool) {
    debug!(path = %dir.display(), "created directory");
    if verbose {
        println!("created directory '{}'", dir.display());
    }
}
