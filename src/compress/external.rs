use log::debug;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use super::Compressor;
use crate::error::{Error, Result};

/// Pipes the whole payload through `program` and collects everything it prints.
pub(super) fn decompress(
    compressor: Compressor,
    program: &'static str,
    data: Vec<u8>,
) -> Result<Vec<u8>> {
    let mut child = Command::new(program)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::DecompressorUnavailable {
                compressor,
                program,
            },
            _ => Error::Io(e),
        })?;
    debug!("running {} on {} bytes", program, data.len());

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "stdin of decompressor is closed"))?;
    // written from another thread so a full stdout pipe can not block us
    let writer = thread::spawn(move || stdin.write_all(&data));

    let output = child.wait_with_output()?;
    let written = writer
        .join()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "decompressor input thread panicked"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = match stderr.trim() {
            "" => format!("{} exited with {}", program, output.status),
            text => text.to_owned(),
        };
        return Err(Error::Decompression {
            compressor,
            message,
        });
    }
    // a program may stop reading once the stream is complete
    if let Err(e) = written {
        if e.kind() != io::ErrorKind::BrokenPipe {
            return Err(Error::Io(e));
        }
    }

    Ok(output.stdout)
}
