//! Command-line front end
//!
//! Renders error codes given as arguments or streamed one per line.

use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::{LookupMode, TranslatorConfig};
use crate::error::CliError;
use crate::translator::{maybe_translate, translate};

/// Render a single code as an output line (without newline).
///
/// Returns `None` when the configured mode produces no output for the code.
pub fn render_code(code: &str, config: &TranslatorConfig) -> Option<String> {
    let known = maybe_translate(code);
    if known.is_none() && config.warn_unknown {
        warn!("Unmapped error code: {:?}", code);
    }

    let text = match config.mode {
        LookupMode::Translate => translate(code),
        LookupMode::Maybe => known?,
    };

    if config.show_code {
        Some(format!("{}: {}", code, text))
    } else {
        Some(text.to_string())
    }
}

/// Render every code in `codes`, one line each.
pub fn render_all<'a, I>(codes: I, config: &TranslatorConfig) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    codes
        .into_iter()
        .filter_map(|code| render_code(code, config))
        .collect()
}

/// Write the renderings of `codes` to `writer`, one line each.
///
/// Returns the number of lines written.
pub async fn run_args<'a, I, W>(
    codes: I,
    writer: &mut W,
    config: &TranslatorConfig,
) -> Result<usize, CliError>
where
    I: IntoIterator<Item = &'a str>,
    W: AsyncWrite + Unpin,
{
    let mut written = 0;

    for rendered in render_all(codes, config) {
        write_line(writer, &rendered).await?;
        written += 1;
    }

    writer.flush().await?;
    Ok(written)
}

/// Read codes line by line from `reader` and write their renderings to `writer`.
///
/// Lines are trimmed and blank lines skipped. Lines that are not valid UTF-8
/// are skipped with a warning. Returns the number of lines written.
pub async fn run_stream<R, W>(
    mut reader: R,
    writer: &mut W,
    config: &TranslatorConfig,
) -> Result<usize, CliError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut line_no = 0;
    let mut written = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        line_no += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("Skipping line {}: {}", line_no, e);
                continue;
            }
        };

        let code = line.trim();
        if code.is_empty() {
            continue;
        }
        debug!("Translating {:?}", code);

        if let Some(rendered) = render_code(code, config) {
            write_line(writer, &rendered).await?;
            written += 1;
        }
    }

    writer.flush().await?;
    Ok(written)
}

async fn write_line<W>(writer: &mut W, line: &str) -> Result<(), CliError>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    Ok(())
}
