//! Terminal prompt and result display.
//!
//! Both functions are generic over tokio's async I/O traits so the runner
//! can drive them with stdin/stdout in production and byte buffers in tests.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::domain::StopPoint;

/// Shown before reading the postcode.
pub const PROMPT: &str = "\nEnter your postcode: ";

/// Printed instead of a list when the lookup returns nothing.
pub const NO_STOP_POINTS: &str = "Sorry, no stop points found.";

/// Write the prompt and read one line of input.
///
/// The returned line has its `\n` / `\r\n` terminator removed but is
/// otherwise untouched. Hitting end of input before any byte is an
/// [`io::ErrorKind::UnexpectedEof`] error.
pub async fn prompt_for_postcode<R, W>(input: &mut R, output: &mut W) -> io::Result<String>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a postcode was entered",
        ));
    }

    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(line)
}

/// Print one stop name per line, or [`NO_STOP_POINTS`] if there are none.
pub async fn display_stop_points<W>(output: &mut W, stop_points: &[StopPoint]) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    if stop_points.is_empty() {
        output.write_all(NO_STOP_POINTS.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    for point in stop_points {
        output.write_all(point.common_name.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    output.flush().await
}
