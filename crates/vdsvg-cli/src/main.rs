use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vdsvg::render::{SvgWriteOptions, render_svg};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Convert(vdsvg::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io { path, source } => write!(f, "I/O error ({}): {source}", path.display()),
            CliError::Convert(err) => write!(f, "error ({}): {err}", err.kind()),
        }
    }
}

impl From<vdsvg::Error> for CliError {
    fn from(value: vdsvg::Error) -> Self {
        Self::Convert(value)
    }
}

#[derive(Debug)]
struct Args {
    input: PathBuf,
    output: PathBuf,
}

fn usage() -> &'static str {
    "vdsvg\n\
\n\
USAGE:\n\
  vdsvg <input.xml> <output.svg>\n\
\n\
ENVIRONMENT:\n\
  VDSVG_INDENT           spaces per nesting level (default 2, 0 = single line)\n\
  VDSVG_XML_DECLARATION  1|true to prepend an <?xml ...?> declaration\n\
  RUST_LOG               log filter (default: warn)\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let [_, input, output] = argv else {
        return Err(CliError::Usage(usage()));
    };
    Ok(Args {
        input: PathBuf::from(input),
        output: PathBuf::from(output),
    })
}

fn write_options_from_env() -> SvgWriteOptions {
    let mut options = SvgWriteOptions::default();

    if let Ok(raw) = std::env::var("VDSVG_INDENT") {
        match raw.trim().parse::<u8>() {
            Ok(0) => options.indent = None,
            Ok(n) => options.indent = Some(n),
            Err(_) => tracing::warn!(value = %raw, "ignoring invalid VDSVG_INDENT"),
        }
    }

    match std::env::var("VDSVG_XML_DECLARATION").as_deref() {
        Ok("1") | Ok("true") => options.xml_declaration = true,
        Ok("0") | Ok("false") | Ok("") | Err(_) => {}
        Ok(other) => tracing::warn!(value = other, "ignoring invalid VDSVG_XML_DECLARATION"),
    }

    options
}

fn run(args: Args) -> Result<(), CliError> {
    let text = std::fs::read_to_string(&args.input).map_err(|source| CliError::Io {
        path: args.input.clone(),
        source,
    })?;

    let svg = render_svg(&text, &write_options_from_env())?;

    std::fs::write(&args.output, svg).map_err(|source| CliError::Io {
        path: args.output.clone(),
        source,
    })?;
    tracing::info!(input = %args.input.display(), output = %args.output.display(), "converted");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
