use std::io::{self, BufWriter, Write};
use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ascii85")]
#[command(author, version, about = "ASCII85 (Base85) encoder/decoder", long_about = None)]
struct Cli {
    /// Decode ASCII85 text from stdin to raw bytes (default is encode)
    #[arg(short, long)]
    decode: bool,

    /// Encode raw bytes from stdin to ASCII85 text (the default)
    #[arg(short, long, conflicts_with = "decode")]
    encode: bool,

    /// Wrap encoded output at this column; 0 disables wrapping
    #[arg(short, long, value_name = "COLS", default_value_t = 76)]
    wrap: usize,

    /// Report byte counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());

    // clap rejects -d together with -e; encoding is the default mode
    let decode_mode = cli.decode && !cli.encode;

    let result = if decode_mode {
        match ascii85::decode(stdin, &mut stdout) {
            Ok(bytes) => {
                if cli.verbose {
                    eprintln!("> Decoded {} bytes", bytes);
                }
                Ok(())
            }
            Err(e) => Err(e),
        }
    } else {
        let encoder = ascii85::Encoder::new().line_length(cli.wrap);
        match encoder.encode(stdin, &mut stdout) {
            Ok(bytes) => {
                if cli.verbose {
                    eprintln!("> Encoded {} bytes", bytes);
                }
                Ok(())
            }
            Err(e) => Err(ascii85::DecodeError::Io(e)),
        }
    };

    let result = result.and_then(|()| stdout.flush().map_err(Into::into));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
