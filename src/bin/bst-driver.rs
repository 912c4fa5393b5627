//! Loads whitespace separated keys from a file into a [`Tree`], reports its
//! shape and traversals, then pokes at it with a fixed list of keys.
//!
//! ```text
//! bst-driver [--type int|char|string] <path>
//! ```
//!
//! Set `RUST_LOG=debug` for more detail on what was read.

use std::fmt::Display;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use bst_set::Tree;
use log::{debug, error, info, warn};

const INT_FOLLOW_UP: [i64; 8] = [40, 20, 10, 30, 60, 50, 70, 999];
const CHAR_FOLLOW_UP: [char; 4] = ['a', 'm', 'z', '?'];
const STRING_FOLLOW_UP: [&str; 4] = ["apple", "mango", "zebra", "?"];

#[derive(thiserror::Error, Debug)]
enum DriverError {
    #[error("Usage: bst-driver [--type int|char|string] <path>")]
    Usage,
    #[error("Unknown key type `{0}` (expected int, char or string)")]
    UnknownKeyType(String),
    #[error("Could not read {} (error: {source})", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What every token in the input file is parsed as. A run uses one type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum KeyType {
    Int,
    Char,
    Str,
}

impl FromStr for KeyType {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(Self::Int),
            "char" => Ok(Self::Char),
            "string" => Ok(Self::Str),
            other => Err(DriverError::UnknownKeyType(other.to_string())),
        }
    }
}

#[derive(Debug, PartialEq)]
struct Config {
    key_type: KeyType,
    path: PathBuf,
}

impl Config {
    fn from_args<I>(args: I) -> Result<Self, DriverError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut key_type = KeyType::Int;
        let mut path = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--type" | "-t" => key_type = args.next().ok_or(DriverError::Usage)?.parse()?,
                _ if arg.starts_with('-') => return Err(DriverError::Usage),
                _ if path.is_none() => path = Some(PathBuf::from(&arg)),
                _ => return Err(DriverError::Usage),
            }
        }

        Ok(Self {
            key_type,
            path: path.ok_or(DriverError::Usage)?,
        })
    }
}

/// Parses whitespace separated tokens, skipping any that aren't a valid key.
fn parse_keys<K>(text: &str) -> Vec<K>
where
    K: FromStr,
    K::Err: Display,
{
    text.split_whitespace()
        .filter_map(|token| match token.parse() {
            Ok(key) => Some(key),
            Err(e) => {
                warn!("Skipping `{}` (error: {})", token, e);
                None
            }
        })
        .collect()
}

fn load<K>(path: &Path) -> Result<Tree<K>, DriverError>
where
    K: Ord + FromStr,
    K::Err: Display,
{
    let text = fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let keys: Vec<K> = parse_keys(&text);
    info!("Read {} keys from {}", keys.len(), path.display());

    Ok(keys.into_iter().collect())
}

fn report<K, W>(tree: &Tree<K>, out: &mut W) -> io::Result<()>
where
    K: Display,
    W: Write,
{
    writeln!(out, "Height: {}", tree.height())?;
    writeln!(out, "Size: {}", tree.size())?;
    writeln!(out, "Leaves: {}", tree.leaf_count())?;
    writeln!(out)?;
    writeln!(out, "In-order: {}", tree.in_order())?;
    writeln!(out, "Pre-order: {}", tree.pre_order())?;
    writeln!(out, "Post-order: {}", tree.post_order())?;
    writeln!(out)
}

/// Reports on an empty tree, on the tree loaded from `config.path`, and on
/// that tree after each follow-up key is removed and added back. A file that
/// can't be read leaves the tree empty.
fn run<K, W>(config: &Config, follow_up: &[K], out: &mut W) -> io::Result<()>
where
    K: Ord + Clone + Display + FromStr,
    K::Err: Display,
    W: Write,
{
    let mut tree = Tree::new();
    report(&tree, out)?;

    match load(&config.path) {
        Ok(loaded) => tree = loaded,
        Err(e) => error!("{}; continuing with an empty tree", e),
    }
    report(&tree, out)?;

    for key in follow_up {
        writeln!(out, "has({}): {}", key, tree.has(key))?;
        let removed = tree.remove(key);
        debug!("remove({}) removed a node: {}", key, removed);
        writeln!(
            out,
            "after remove({}): has: {}, size: {}",
            key,
            tree.has(key),
            tree.size()
        )?;
        tree.add(key.clone());
    }
    writeln!(out)?;

    report(&tree, out)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_args(std::env::args().skip(1))?;
    debug!("{:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.key_type {
        KeyType::Int => run(&config, &INT_FOLLOW_UP, &mut out),
        KeyType::Char => run(&config, &CHAR_FOLLOW_UP, &mut out),
        KeyType::Str => {
            let follow_up: Vec<String> = STRING_FOLLOW_UP.iter().map(|s| s.to_string()).collect();
            run(&config, &follow_up, &mut out)
        }
    }
    .context("Failed to write the report")
}
