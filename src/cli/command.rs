use super::{ApplicationError, Operation, Options};
use crate::debug;
use itertools::Itertools;
use ltree::LtreePath;
use std::io::Write;

pub fn execute(
    operation: &Operation,
    options: &Options,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Result<(), ApplicationError> {
    match operation {
        Operation::Validate { paths } => {
            for path in paths {
                writeln!(stdout, "{}", LtreePath::of(path)?)?;
            }

            debug!(options, stderr, "validated {} paths", paths.len());
        }
        Operation::Parent { path } => {
            let path = LtreePath::of(path)?;

            if let Some(parent) = path.parent() {
                writeln!(stdout, "{}", parent)?;
            } else {
                debug!(options, stderr, "root path {} has no parent", path);
            }
        }
        Operation::Append { path, label } => {
            writeln!(stdout, "{}", LtreePath::of(path)?.append(label)?)?;
        }
        Operation::Ancestor {
            ancestor,
            descendant,
        } => {
            writeln!(
                stdout,
                "{}",
                LtreePath::of(ancestor)?.is_ancestor_of(&LtreePath::of(descendant)?)
            )?;
        }
        Operation::Labels { path } => {
            let path = LtreePath::of(path)?;

            for label in path.labels() {
                writeln!(stdout, "{}", label)?;
            }

            debug!(options, stderr, "path {} has {} labels", path, path.level());
        }
        Operation::Sort { paths } => {
            let paths = paths
                .iter()
                .map(String::as_str)
                .map(LtreePath::of)
                .collect::<Result<Vec<_>, _>>()?;
            let count = paths.len();
            let paths = paths.into_iter().sorted().dedup().collect::<Vec<_>>();

            for path in &paths {
                writeln!(stdout, "{}", path)?;
            }

            debug!(
                options,
                stderr,
                "removed {} duplicate paths",
                count - paths.len()
            );
        }
        Operation::Common { one, other } => {
            let one = LtreePath::of(one)?;
            let other = LtreePath::of(other)?;

            if let Some(ancestor) = one.common_ancestor(&other) {
                writeln!(stdout, "{}", ancestor)?;
            } else {
                debug!(options, stderr, "{} and {} have no common ancestor", one, other);
            }
        }
    }

    Ok(())
}
