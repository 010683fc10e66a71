mod config_error;

use clap::{crate_version, Arg, ArgAction, ArgMatches, Command};
use std::error::Error;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use directories::UserDirs;
use url::Url;

use crate::detail::DetailEndpoint;
use crate::playlist::PlaylistMeta;

pub use config_error::ConfigError;

pub const PLAYLIST_FILENAME: &str = "juke-stations.xspf";

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_url: Url,
    /// Set when stations are resolved through the detail endpoint.
    pub details: Option<DetailEndpoint>,
    pub log_dir: Option<String>,
    pub log_level: usize,
    pub output: PathBuf,
    pub playlist: PlaylistMeta,
    pub timeout: Option<Duration>,
    pub useragent: String,
}

impl Config {
    /// Detail lookups are enabled but will be sent without an api key.
    pub fn missing_api_key(&self) -> bool {
        self.details
            .as_ref()
            .map(|endpoint| endpoint.api_key.is_empty())
            .unwrap_or(false)
    }
}

fn get_option_string(
    matches: &ArgMatches,
    config: &toml::Value,
    setting_name: &str,
    default_value: String,
) -> Result<String, Box<dyn Error>> {
    let value_from_clap = matches.get_one::<String>(setting_name);
    if let Some(value_from_clap) = value_from_clap {
        return Ok(value_from_clap.to_string());
    }

    let setting = config.get(setting_name);
    if let Some(setting) = setting {
        if let Some(setting_decoded) = setting.as_str() {
            return Ok(String::from(setting_decoded));
        } else {
            return Err(Box::new(ConfigError::TypeError(setting_name.into(), setting.to_string())));
        }
    }

    Ok(default_value)
}

fn get_option_url(
    matches: &ArgMatches,
    config: &toml::Value,
    setting_name: &str,
    default_value: &str,
) -> Result<Url, Box<dyn Error>> {
    let s = get_option_string(matches, config, setting_name, String::from(default_value))?;
    match Url::parse(&s) {
        Ok(url) => Ok(url),
        Err(_) => Err(Box::new(ConfigError::UrlError(setting_name.into(), s))),
    }
}

fn get_option_duration(
    matches: &ArgMatches,
    config: &toml::Value,
    setting_name: &str,
) -> Result<Option<Duration>, Box<dyn Error>> {
    let s = get_option_string(matches, config, setting_name, String::new())?;
    if s.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(s.parse::<humantime::Duration>()?.into()))
}

fn get_option_number(
    matches: &ArgMatches,
    config: &toml::Value,
    setting_name: &str,
    default_value: i64,
) -> Result<i64, Box<dyn Error>> {
    let value_from_clap = matches.get_one::<String>(setting_name);
    if let Some(value_from_clap) = value_from_clap {
        return Ok(value_from_clap.parse()?);
    }

    let setting = config.get(setting_name);
    if let Some(setting) = setting {
        if let Some(setting_decoded) = setting.as_integer() {
            return Ok(setting_decoded);
        } else {
            return Err(Box::new(ConfigError::TypeError(setting_name.into(), setting.to_string())));
        }
    }

    Ok(default_value)
}

fn get_option_number_occurences(
    matches: &ArgMatches,
    config: &toml::Value,
    setting_name: &str,
    default_value: usize,
) -> Result<usize, Box<dyn Error>> {
    let value_from_clap = matches.get_count(setting_name) as usize;
    if value_from_clap > 0 {
        return Ok(value_from_clap);
    }

    let setting = config.get(setting_name);
    if let Some(setting) = setting {
        if let Some(setting_decoded) = setting.as_integer() {
            return Ok(setting_decoded.max(0) as usize);
        } else {
            return Err(Box::new(ConfigError::TypeError(setting_name.into(), setting.to_string())));
        }
    }

    Ok(default_value)
}

fn get_option_flag(
    matches: &ArgMatches,
    config: &toml::Value,
    setting_name: &str,
    default_value: bool,
) -> Result<bool, Box<dyn Error>> {
    if matches.get_flag(setting_name) {
        return Ok(true);
    }

    let setting = config.get(setting_name);
    if let Some(setting) = setting {
        if let Some(setting_decoded) = setting.as_bool() {
            return Ok(setting_decoded);
        } else {
            return Err(Box::new(ConfigError::TypeError(setting_name.into(), setting.to_string())));
        }
    }

    Ok(default_value)
}

fn default_output() -> Result<PathBuf, Box<dyn Error>> {
    let dirs = UserDirs::new().ok_or(ConfigError::NoOutputDir)?;
    let documents = dirs
        .document_dir()
        .map(PathBuf::from)
        .unwrap_or_else(|| dirs.home_dir().join("Documents"));
    Ok(documents.join(PLAYLIST_FILENAME))
}

fn command() -> Command {
    Command::new("juke-playlist")
        .version(crate_version!())
        .author("segler_alex@web.de")
        .about("Writes the JUKE.nl station list as XSPF playlist")
        .arg(
            Arg::new("config-file")
                .short('f')
                .long("config-file")
                .value_name("CONFIG-FILE")
                .help("Path to config file")
                .env("JUKE_CONFIG_FILE"),
        )
        .arg(
            Arg::new("catalog-url")
                .long("catalog-url")
                .value_name("CATALOG_URL")
                .help("url of the station catalog json")
                .env("JUKE_CATALOG_URL"),
        )
        .arg(
            Arg::new("details")
                .short('d')
                .long("details")
                .action(ArgAction::SetTrue)
                .help("resolve every station through the detail endpoint"),
        )
        .arg(
            Arg::new("detail-url")
                .long("detail-url")
                .value_name("DETAIL_URL")
                .help("url of the graphql detail endpoint")
                .env("JUKE_DETAIL_URL"),
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .value_name("API_KEY")
                .help("api key sent to the detail endpoint")
                .env("JUKE_API_KEY"),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .value_name("PROFILE")
                .help("profile used for detail queries")
                .env("JUKE_PROFILE"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("OUTPUT")
                .help("playlist file to write, defaults to ~/Documents/juke-stations.xspf")
                .env("JUKE_OUTPUT"),
        )
        .arg(
            Arg::new("playlist-title")
                .long("playlist-title")
                .value_name("PLAYLIST_TITLE")
                .help("title of the playlist"),
        )
        .arg(
            Arg::new("playlist-creator")
                .long("playlist-creator")
                .value_name("PLAYLIST_CREATOR")
                .help("creator of the playlist"),
        )
        .arg(
            Arg::new("playlist-info")
                .long("playlist-info")
                .value_name("PLAYLIST_INFO")
                .help("info url of the playlist"),
        )
        .arg(
            Arg::new("concurrency")
                .short('c')
                .long("concurrency")
                .value_name("CONCURRENCY")
                .help("detail lookups in parallel, 0 for one per station")
                .env("JUKE_CONCURRENCY"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("TIMEOUT")
                .help("http request timeout, unlimited if unset")
                .env("JUKE_TIMEOUT"),
        )
        .arg(
            Arg::new("useragent")
                .long("useragent")
                .value_name("USERAGENT")
                .help("user agent value for http requests")
                .env("JUKE_USERAGENT"),
        )
        .arg(
            Arg::new("log-dir")
                .short('l')
                .long("log-dir")
                .value_name("LOG-DIR")
                .help("Path to log dir")
                .env("JUKE_LOG_DIR"),
        )
        .arg(
            Arg::new("log-level")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("increases the log level. can be specified mutliple times 0..3"),
        )
}

pub fn load_config() -> Result<Config, Box<dyn Error>> {
    load_config_from(std::env::args_os())
}

pub fn load_config_from<I, T>(args: I) -> Result<Config, Box<dyn Error>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;

    let config = match matches.get_one::<String>("config-file") {
        Some(config_file_path) => {
            let contents = fs::read_to_string(config_file_path)?;
            toml::from_str::<toml::Value>(&contents)?
        }
        None => toml::Value::Table(toml::map::Map::new()),
    };

    let catalog_url = get_option_url(
        &matches,
        &config,
        "catalog-url",
        "https://static.juke.nl/content/stations.json",
    )?;

    let details = if get_option_flag(&matches, &config, "details", false)? {
        let url = get_option_url(
            &matches,
            &config,
            "detail-url",
            "https://graph.talpa.network/api/graphql/v1",
        )?;
        let api_key = get_option_string(&matches, &config, "api-key", String::new())?;
        let profile = get_option_string(&matches, &config, "profile", String::from("juke-web"))?;
        let concurrency = get_option_number(&matches, &config, "concurrency", 0)?;
        Some(DetailEndpoint {
            url,
            api_key,
            profile,
            concurrency: concurrency.max(0) as usize,
        })
    } else {
        None
    };

    let output = match get_option_string(&matches, &config, "output", String::new())? {
        path if path.is_empty() => default_output()?,
        path => PathBuf::from(path),
    };

    let playlist = PlaylistMeta {
        title: get_option_string(&matches, &config, "playlist-title", String::from("JUKE.nl Stations"))?,
        creator: get_option_string(&matches, &config, "playlist-creator", String::from("JUKE Playlist Generator"))?,
        info: get_option_string(&matches, &config, "playlist-info", String::from("https://github.com/Ex-iT/"))?,
    };

    let timeout = get_option_duration(&matches, &config, "timeout")?;
    let useragent = get_option_string(
        &matches,
        &config,
        "useragent",
        format!("juke-playlist/{}", crate_version!()),
    )?;
    let log_dir = match get_option_string(&matches, &config, "log-dir", String::new())? {
        dir if dir.is_empty() => None,
        dir => Some(dir),
    };
    let log_level: usize = get_option_number_occurences(&matches, &config, "log-level", 0)?;

    Ok(Config {
        catalog_url,
        details,
        log_dir,
        log_level,
        output,
        playlist,
        timeout,
        useragent,
    })
}
