//! Command-line surface of the notifier

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use thiserror::Error;

use crate::request::NotificationRequest;

/// Tokens accepted at flag position, matched verbatim. Must cover every
/// flag and alias `ToastArgs` defines.
const RECOGNIZED_FLAGS: [&str; 6] =
    ["--image", "--appname", "--aumi", "--appid", "--title", "--body"];

/// Argument errors. Each aborts the run with the unhandled-option code;
/// the rendered message is the one diagnostic line on stderr.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Option not recognized: {0}")]
    Unrecognized(String),

    #[error("Option requires a value: {0}")]
    MissingValue(String),

    #[error("Option value is not valid Unicode")]
    NotUnicode,
}

/// Flags accepted by the notifier.
///
/// Each flag takes the next token verbatim as its value, dashes and all,
/// and repeated flags keep the last value. Help and version generation
/// are switched off: `--help` and friends are unwired in this build and
/// fall through to the unrecognized-option path like any other token.
#[derive(Debug, Parser)]
#[command(name = "drive-backup-notify", disable_help_flag = true, disable_version_flag = true)]
struct ToastArgs {
    /// Image displayed beside the toast text
    #[arg(long, value_name = "PATH", allow_hyphen_values = true, overrides_with = "image")]
    image: Option<PathBuf>,

    /// Application name shown in the toast attribution
    #[arg(long, value_name = "NAME", allow_hyphen_values = true, overrides_with = "appname")]
    appname: Option<String>,

    /// AppUserModelID the toast is attributed to
    #[arg(
        long,
        visible_alias = "appid",
        value_name = "ID",
        allow_hyphen_values = true,
        overrides_with = "aumi"
    )]
    aumi: Option<String>,

    /// First toast line
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true, overrides_with = "title")]
    title: Option<String>,

    /// Second toast line
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true, overrides_with = "body")]
    body: Option<String>,
}

impl ToastArgs {
    /// Lay supplied flags over the compiled defaults
    fn into_request(self) -> NotificationRequest {
        let mut request = NotificationRequest::default();
        if let Some(image) = self.image {
            request.image_path = Some(image);
        }
        if let Some(appname) = self.appname {
            request.app_name = appname;
        }
        if let Some(aumi) = self.aumi {
            request.app_user_model_id = aumi;
        }
        if let Some(title) = self.title {
            request.title = title;
        }
        if let Some(body) = self.body {
            request.body = body;
        }
        request
    }
}

/// Parse argv (program name included) into a notification request
pub fn parse(argv: &[OsString]) -> Result<NotificationRequest, CliError> {
    check_flag_tokens(argv)?;
    let args = ToastArgs::try_parse_from(argv).map_err(map_clap_error)?;
    Ok(args.into_request())
}

/// Walk argv as flag/value pairs, stopping at the first token that is
/// not a recognized flag.
///
/// The comparison is verbatim: `--title=x` and a bare `--` are
/// unrecognized tokens, not alternate spellings. A recognized flag as
/// the final token has no value to consume and fails fast.
fn check_flag_tokens(argv: &[OsString]) -> Result<(), CliError> {
    let mut tokens = argv.iter().skip(1);
    while let Some(token) = tokens.next() {
        if !RECOGNIZED_FLAGS.iter().any(|flag| token == flag) {
            return Err(CliError::Unrecognized(token.to_string_lossy().into_owned()));
        }
        if tokens.next().is_none() {
            return Err(CliError::MissingValue(token.to_string_lossy().into_owned()));
        }
    }
    Ok(())
}

/// Reduce a clap error to the offending token.
///
/// The token walk has already vetted flag positions, so clap's own
/// rejections are value-side. Unknown tokens keep their literal text; a
/// flag named in the error is stripped of the `<VALUE>` placeholder
/// clap appends; a non-Unicode text value has no single token to name.
fn map_clap_error(err: clap::Error) -> CliError {
    let arg = err
        .get(ContextKind::InvalidArg)
        .map(|value| match value {
            ContextValue::String(s) => s.clone(),
            ContextValue::Strings(list) => list.first().cloned().unwrap_or_default(),
            other => other.to_string(),
        })
        .unwrap_or_default();

    match err.kind() {
        ErrorKind::UnknownArgument => CliError::Unrecognized(arg),
        ErrorKind::InvalidUtf8 => CliError::NotUnicode,
        _ if !arg.is_empty() => {
            let flag = arg.split_whitespace().next().unwrap_or(arg.as_str());
            CliError::MissingValue(flag.to_string())
        }
        _ => CliError::Unrecognized(arg),
    }
}
