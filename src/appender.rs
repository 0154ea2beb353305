use std::{
    env,
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    config::RawCfg,
    error::{Error, Result},
    fmt::{BulletWriter, EntryWriter},
    DEFAULT_CHANGELOG_FILE, DEFAULT_CONFIG_FILE, DEFAULT_MESSAGE_FILE,
};

/// The base struct used to set options and interact with the library.
#[derive(Debug, Clone)]
pub struct Appender {
    /// The file the latest commit message is read from (Defaults to
    /// `commit_message.txt`)
    pub message_file: PathBuf,
    /// The changelog file new entries are appended to (Defaults to
    /// `CHANGELOG.md`). Created on first append if it does not exist.
    pub changelog: PathBuf,
}

impl Default for Appender {
    fn default() -> Self {
        debug!("Creating default appender with Appender::default()");
        Appender {
            message_file: PathBuf::from(DEFAULT_MESSAGE_FILE),
            changelog: PathBuf::from(DEFAULT_CHANGELOG_FILE),
        }
    }
}

impl Appender {
    /// Creates an `Appender` using the default file names relative to the
    /// current working directory, applying the default `.appendlog.toml`
    /// configuration file if one is present. A missing configuration file is
    /// not an error; the defaults are used as-is.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use appendlog::Appender;
    /// let appender = Appender::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        debug!("Creating default appender with new()");
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            debug!("Found default config file");
            Appender::from_file(DEFAULT_CONFIG_FILE)
        } else {
            debug!("No default config file, using built-in defaults");
            Ok(Appender::default())
        }
    }

    /// Creates an `Appender` with both default file names, and the default
    /// configuration file lookup, re-rooted under a specific directory.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use appendlog::Appender;
    /// let appender = Appender::with_dir("/myproject").unwrap();
    /// ```
    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        debug!("Creating appender with \n\tdir: {:?}", dir.as_ref());
        let dir = dir.as_ref();
        let appender = Appender {
            message_file: dir.join(DEFAULT_MESSAGE_FILE),
            changelog: dir.join(DEFAULT_CHANGELOG_FILE),
        };

        let cfg_file = dir.join(DEFAULT_CONFIG_FILE);
        if cfg_file.exists() {
            appender.try_config_file(&cfg_file)
        } else {
            Ok(appender)
        }
    }

    /// Creates an `Appender` from a custom named TOML configuration file.
    /// Unlike `Appender::new()`, the file must exist and parse.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use appendlog::Appender;
    /// let appender = Appender::from_file("/myproject/appendlog_conf.toml").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        debug!("Creating appender with \n\tfile: {:?}", file.as_ref());
        // Determine if the cfg_file was relative or not
        let cfg_file = if file.as_ref().is_relative() {
            debug!("file is relative");
            let cwd = match env::current_dir() {
                Ok(d) => d,
                Err(..) => return Err(Error::CurrentDir),
            };
            Path::new(&cwd).join(file.as_ref())
        } else {
            debug!("file is absolute");
            file.as_ref().to_path_buf()
        };

        Appender::default().try_config_file(&cfg_file)
    }

    // Apply path overrides from a config file
    fn try_config_file(mut self, cfg_file: &Path) -> Result<Self> {
        debug!("Trying to use config file: {:?}", cfg_file);
        let toml_s = fs::read_to_string(cfg_file)?;
        let cfg: RawCfg =
            toml::from_str(&toml_s).map_err(|_| Error::ConfigParse(cfg_file.to_path_buf()))?;

        if let Some(mf) = cfg.appendlog.message_file {
            self.message_file = mf;
        }
        if let Some(cl) = cfg.appendlog.changelog {
            self.changelog = cl;
        }

        debug!("Returning appender:\n{:?}", self);
        Ok(self)
    }

    /// Sets the file the commit message is read from
    ///
    /// **NOTE:** Anything set here will override anything in a configuration
    /// TOML file
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use appendlog::Appender;
    /// let appender = Appender::new().unwrap().message_file("COMMIT_EDITMSG");
    /// ```
    pub fn message_file<P: AsRef<Path>>(mut self, f: P) -> Appender {
        self.message_file = f.as_ref().to_path_buf();
        self
    }

    /// Sets the changelog file entries are appended to
    ///
    /// **NOTE:** Anything set here will override anything in a configuration
    /// TOML file
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use appendlog::Appender;
    /// let appender = Appender::new().unwrap().changelog("HISTORY.md");
    /// ```
    pub fn changelog<P: AsRef<Path>>(mut self, c: P) -> Appender {
        self.changelog = c.as_ref().to_path_buf();
        self
    }

    /// Reads the commit message file in full and strips surrounding
    /// whitespace. Interior content, including interior newlines, is
    /// preserved verbatim.
    ///
    /// Fails if the file is missing, unreadable, or not valid UTF-8.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use appendlog::Appender;
    /// let appender = Appender::new().unwrap();
    /// let message = appender.read_message().unwrap();
    /// ```
    pub fn read_message(&self) -> Result<String> {
        debug!("Reading commit message from: {:?}", self.message_file);
        let raw = fs::read(&self.message_file)?;
        let message = String::from_utf8(raw)?;
        Ok(message.trim().to_owned())
    }

    /// Appends a single entry for `message` to the changelog file, creating
    /// the file if it does not exist. Prior content is never touched; the
    /// handle is closed on every exit path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use appendlog::Appender;
    /// let appender = Appender::new().unwrap();
    /// appender.append_entry("fix: handle null pointer").unwrap();
    /// ```
    pub fn append_entry<S: AsRef<str>>(&self, message: S) -> Result<()> {
        debug!("Appending entry to: {:?}", self.changelog);
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.changelog)?;

        let mut writer = BulletWriter::new(&mut file);
        writer.write_entry(message.as_ref())
    }

    /// Reads the commit message and appends it to the changelog using
    /// whatever options have been specified thus far.
    ///
    /// The message is read, and its errors surfaced, before the changelog is
    /// opened, so a failed read never creates or modifies the changelog.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use appendlog::Appender;
    /// let appender = Appender::new().unwrap();
    /// appender.run().unwrap();
    /// ```
    pub fn run(&self) -> Result<()> {
        let message = self.read_message()?;
        self.append_entry(message)
    }
}
