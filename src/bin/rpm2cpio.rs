use clap::Parser;
use rpm2cpio::{Error, RPMFile, extract};
use std::fs;
use std::io::{self, Cursor, Read, Write};
use std::path::PathBuf;
use std::process::exit;

/// Converts the rpm package on standard input or the first argument to a cpio
/// archive on standard output.
#[derive(Debug, Parser)]
#[command(name = "rpm2cpio", version)]
struct Args {
    /// Path to rpm file, standard input when omitted
    #[arg(name = "rpm")]
    path: Option<PathBuf>,

    /// Path to save the archive, standard output when omitted
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

fn run(args: &Args) -> Result<(), Error> {
    let cpio = match &args.path {
        Some(path) => RPMFile::open(path)?.into_cpio()?,
        None => {
            // stdin can not seek
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            extract(Cursor::new(data))?
        }
    };

    match &args.output {
        Some(path) => fs::write(path, &cpio)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&cpio)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        match &args.path {
            Some(path) => eprintln!("Error: {}: {}", path.display(), err),
            None => eprintln!("Error: {}", err),
        }
        exit(1);
    }
}
