//! Provide property definition parsing and command line seeding.
use crate::err::PropertyError;
use crate::source::props;
use crate::NOT_POSSIBLE;
use regex::Regex;

#[cfg(feature = "enable_clap")]
use clap::{App, Arg};

/// Split a `key=value` definition at the first `=`.
///
/// The key must be non-empty; the value may be empty, so `foo=` sets
/// `foo` to `""`. Anything without `=` is rejected.
pub fn parse_definition(def: &str) -> Result<(String, String), PropertyError> {
    lazy_static::lazy_static! {
        static ref RE: Regex = Regex::new(
            r"(?s)^([^=]+)=(.*)$"
        )
        .expect(NOT_POSSIBLE);
    }
    match RE.captures(def) {
        Some(ref v) => Ok((
            v.get(1).expect(NOT_POSSIBLE).as_str().to_owned(),
            v.get(2).expect(NOT_POSSIBLE).as_str().to_owned(),
        )),
        _ => Err(PropertyError::InvalidDefinition(def.to_owned())),
    }
}

/// Parse a batch of definitions and apply them to the property table,
/// returning how many were set.
///
/// The batch is parsed in full before anything is applied, so a malformed
/// definition leaves the table untouched.
pub fn load_definitions<I, S>(defs: I) -> Result<usize, PropertyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = vec![];
    for def in defs {
        parsed.push(parse_definition(def.as_ref())?);
    }
    Ok(props::apply(parsed))
}

/// Collect repeated `-D key=value` / `--define key=value` occurrences
/// from the process arguments and apply them to the property table.
///
/// Other arguments are left for the application's own parser.
#[cfg(feature = "enable_pico")]
#[cfg_attr(docsrs, doc(cfg(feature = "enable_pico")))]
pub fn load_sys_args() -> Result<usize, PropertyError> {
    let mut args = pico_args::Arguments::from_env();
    let defs: Vec<String> = args.values_from_str(["-D", "--define"])?;
    load_definitions(defs)
}

/// Command line help info, such as name, version, author, etc.
#[cfg(feature = "enable_clap")]
#[cfg_attr(docsrs, doc(cfg(feature = "enable_clap")))]
#[derive(Debug, Copy, Clone)]
pub struct SysArgsParam {
    /// App name.
    pub name: &'static str,
    /// App version.
    pub version: &'static str,
    /// App authors.
    pub author: Option<&'static str>,
    /// App description.
    pub about: Option<&'static str>,
}

/// Auto generate [`SysArgsParam`] from Cargo.toml.
///
/// Macro [`env!`] reads the values at compile time, so call this from the
/// final binary crate.
#[macro_export]
#[cfg(feature = "enable_clap")]
#[cfg_attr(docsrs, doc(cfg(feature = "enable_clap")))]
macro_rules! auto_sys_args_param {
    () => {
        $crate::SysArgsParam {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            author: option_env!("CARGO_PKG_AUTHORS"),
            about: option_env!("CARGO_PKG_DESCRIPTION"),
        }
    };
}

/// Collect `-D key=value` occurrences with a `clap` app carrying the
/// given help info, and apply them to the property table.
#[cfg(feature = "enable_clap")]
#[cfg_attr(docsrs, doc(cfg(feature = "enable_clap")))]
pub fn load_sys_args_with(param: SysArgsParam) -> Result<usize, PropertyError> {
    let mut app = App::new(param.name).version(param.version);
    if let Some(a) = param.author {
        app = app.author(a);
    }
    if let Some(a) = param.about {
        app = app.about(a);
    }
    let matches = app
        .arg(
            Arg::with_name("define")
                .short("D")
                .long("define")
                .value_name("KEY=VALUE")
                .multiple(true)
                .number_of_values(1)
                .takes_value(true)
                .help("Set process properties"),
        )
        .get_matches_safe()
        .map_err(|e| PropertyError::ParseFail(e.to_string()))?;
    load_definitions(matches.values_of_lossy("define").unwrap_or_default())
}
