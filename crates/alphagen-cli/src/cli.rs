use std::path::PathBuf;

use alphagen::prelude::*;
use alphagen::runtime::RuntimeBuilder;
use alphagen::runtime::config::{LogLevel, OutputFormat};
use clap::{Parser, ValueEnum};

/// Print the distinct characters used in a text, sorted by code value.
#[derive(Debug, Parser)]
#[command(name = "alphagen", version, about)]
pub struct Cli {
    /// Input files; none or `-` reads standard input
    pub files: Vec<PathBuf>,

    /// Write the alphabet to this file instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Treat each input as a JSON document holding a single string
    #[arg(long)]
    pub json_input: bool,

    /// Do not print a trailing newline
    #[arg(long)]
    pub no_newline: bool,

    /// Configuration file (default: search for alphagen.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Configuration profile
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Applies config selection and flag overrides to a runtime builder.
    pub fn runtime_builder(&self) -> RuntimeBuilder {
        let mut builder = AlphagenRuntime::builder();

        if let Some(path) = &self.config {
            builder = builder.config_file(path);
        }
        if let Some(profile) = &self.profile {
            builder = builder.profile(profile.clone());
        }
        if let Some(format) = self.format {
            builder = builder.set("output.format", OutputFormat::from(format));
        }
        if self.no_newline {
            builder = builder.set("output.trailing_newline", false);
        }
        if let Some(level) = self.log_level {
            builder = builder.set("logging.level", level);
        }
        if self.json_input {
            builder = builder.input_mode(InputMode::Json);
        }

        builder
    }

    /// Builds the input sources; standard input when no files are given.
    pub fn sources(&self) -> Vec<BoxedSource> {
        if self.files.is_empty() {
            return vec![Box::new(StdinSource)];
        }

        self.files
            .iter()
            .map(|path| -> BoxedSource {
                if path.as_os_str() == "-" {
                    Box::new(StdinSource)
                } else {
                    Box::new(FileSource::new(path))
                }
            })
            .collect()
    }

    /// Builds the output sink.
    pub fn sink(&self) -> BoxedSink {
        match &self.output {
            Some(path) => Box::new(FileSink::new(path)),
            None => Box::new(StdoutSink),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["alphagen"]).unwrap();
        assert!(cli.files.is_empty());
        assert!(cli.output.is_none());
        assert!(!cli.json_input);
        assert_eq!(cli.sources().len(), 1);
        assert_eq!(cli.sources()[0].name(), "<stdin>");
        assert_eq!(cli.sink().name(), "<stdout>");
    }

    #[test]
    fn test_files_and_dash() {
        let cli = Cli::try_parse_from(["alphagen", "a.txt", "-", "b.txt"]).unwrap();
        let names: Vec<String> = cli.sources().iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, vec!["a.txt", "<stdin>", "b.txt"]);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "alphagen",
            "--format",
            "json",
            "--no-newline",
            "--json-input",
            "--log-level",
            "debug",
            "-o",
            "out.txt",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(FormatArg::Json));
        assert!(cli.no_newline);
        assert!(cli.json_input);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert_eq!(cli.sink().name(), "out.txt");
    }

    #[test]
    fn test_flags_reach_runtime_config() {
        figment::Jail::expect_with(|_jail| {
            let cli = Cli::try_parse_from([
                "alphagen",
                "--no-newline",
                "--format",
                "json",
                "--json-input",
                "--log-level",
                "debug",
            ])
            .map_err(|e| e.to_string())?;

            let runtime = cli.runtime_builder().build().map_err(|e| e.to_string())?;
            let config = runtime.config();

            assert!(!config.output.trailing_newline);
            assert_eq!(config.output.format, OutputFormat::Json);
            assert_eq!(config.logging.level, LogLevel::Debug);
            assert_eq!(runtime.input_mode(), InputMode::Json);
            Ok(())
        });
    }

    #[test]
    fn test_file_to_file_run() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("in.json", r#""zAaZ""#)?;
            let cli = Cli::try_parse_from([
                "alphagen",
                "--json-input",
                "--no-newline",
                "--format",
                "json",
                "-o",
                "out.txt",
                "in.json",
            ])
            .map_err(|e| e.to_string())?;

            let runtime = cli.runtime_builder().build().map_err(|e| e.to_string())?;
            let mut sources = cli.sources();
            let mut sink = cli.sink();
            let report = runtime
                .run(&mut sources, &mut sink)
                .map_err(|e| e.to_string())?;

            assert_eq!(report.sources, 1);
            assert_eq!(report.alphabet_len(), 4);
            let written = std::fs::read_to_string(jail.directory().join("out.txt"))
                .map_err(|e| e.to_string())?;
            assert_eq!(written, r#"{"alphabet":"AZaz","length":4}"#);
            Ok(())
        });
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["alphagen", "--log-level", "loud"]).is_err());
    }
}
